//! Terminal output for the git-tags binary.

use crate::domain::{ParsedVersion, Tag};
use console::style;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

/// Print one tag per line.
pub fn display_tags<'a>(tags: impl IntoIterator<Item = &'a Tag>) {
    for tag in tags {
        println!("{}", tag);
    }
}

/// Print a single tag, or nothing when the repository has no semver tags.
pub fn display_optional_tag(tag: Option<&Tag>) {
    if let Some(tag) = tag {
        println!("{}", tag);
    }
}

/// Component breakdown of a parsed version, one `key: value` pair per line.
pub fn format_version(version: &ParsedVersion) -> String {
    let mut lines = vec![
        format!("version: {}", version),
        format!("major: {}", version.major),
        format!("minor: {}", version.minor),
        format!("patch: {}", version.patch),
    ];
    if !version.pre.is_empty() {
        lines.push(format!("prerelease: {}", version.pre));
    }
    if !version.build.is_empty() {
        lines.push(format!("build: {}", version.build));
    }
    lines.join("\n")
}

pub fn display_version(version: &ParsedVersion) {
    println!("{}", format_version(version));
}
