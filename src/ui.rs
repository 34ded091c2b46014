//! Terminal output for the version catalog.

use console::style;

use crate::catalog::VersionCatalog;
use crate::domain::VersionRecord;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Format one catalog line, e.g. `* 4.1  /4.1.X/index.html  (stable)`.
///
/// The leading marker is `*` for the current version.
pub fn format_version_line(record: &VersionRecord, is_stable: bool) -> String {
    let marker = if record.is_current() { "*" } else { " " };

    let mut tags = Vec::new();
    if is_stable {
        tags.push("stable");
    }
    if !record.is_released() {
        tags.push("unreleased");
    }

    let mut line = format!(
        "{} {:<8} {}",
        marker,
        record.display_name(),
        record.url()
    );
    if !tags.is_empty() {
        line.push_str(&format!("  ({})", tags.join(", ")));
    }
    line
}

/// Print the whole catalog, develop first.
pub fn display_catalog(catalog: &VersionCatalog) {
    println!("{}", style("Documentation versions:").bold());

    let stable = catalog.stable_version();
    for record in catalog.versions() {
        let line = format_version_line(record, std::ptr::eq(record, stable));
        if record.is_current() {
            println!("{}", style(line).green());
        } else {
            println!("{}", line);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Version;

    #[test]
    fn test_format_current_stable_line() {
        let record = VersionRecord::released("4.1.X", Version::new(4, 1, None), true);
        let line = format_version_line(&record, true);
        assert!(line.starts_with("* 4.1"));
        assert!(line.contains("/4.1.X/index.html"));
        assert!(line.ends_with("(stable)"));
    }

    #[test]
    fn test_format_unreleased_develop_line() {
        let record = VersionRecord::develop(false);
        let line = format_version_line(&record, false);
        assert!(line.starts_with("  main"));
        assert!(line.ends_with("(unreleased)"));
    }

    #[test]
    fn test_format_plain_line_has_no_tags() {
        let record = VersionRecord::released("3.9.X", Version::new(3, 9, None), false);
        let line = format_version_line(&record, false);
        assert!(!line.contains('('));
    }
}
