//! The requirements manifest: an ordered sequence of lines.
//!
//! Order is the load-bearing invariant. The consuming installer processes
//! records in file order, and reordering can change which transitive
//! version gets selected downstream. The manifest is therefore a line
//! vector, never a keyed map, and every iterator and serializer walks it
//! in file order.

use std::collections::BTreeMap;
use std::path::Path;

use reqgate_util::errors::ReqgateError;

use crate::requirement::Requirement;

/// One line of a requirements manifest, preserved in authoring order.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum ManifestLine {
    Blank,
    /// A full-line comment, stored verbatim including the leading `#`.
    Comment(String),
    Requirement(Requirement),
}

/// The parsed representation of a requirements file.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Manifest {
    pub lines: Vec<ManifestLine>,
}

impl Manifest {
    /// Load and parse a requirements file from the given path.
    pub fn from_path(path: &Path) -> miette::Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ReqgateError::Manifest {
            message: format!("Failed to read {}: {e}", path.display()),
        })?;
        tracing::debug!(path = %path.display(), bytes = content.len(), "parsing manifest");
        Self::parse(&content)
    }

    /// Parse a requirements file from a string.
    ///
    /// Blank lines and full-line comments are kept so the manifest
    /// round-trips through [`Manifest::render`]. A malformed requirement
    /// line fails the whole parse with its 1-based line number.
    pub fn parse(content: &str) -> miette::Result<Self> {
        let mut lines = Vec::new();
        for (idx, raw) in content.lines().enumerate() {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                lines.push(ManifestLine::Blank);
            } else if trimmed.starts_with('#') {
                lines.push(ManifestLine::Comment(raw.trim_end().to_string()));
            } else {
                let req = Requirement::parse(raw).map_err(|message| ReqgateError::Parse {
                    line: idx + 1,
                    message,
                })?;
                lines.push(ManifestLine::Requirement(req));
            }
        }
        Ok(Self { lines })
    }

    /// The dependency records, in file order.
    pub fn requirements(&self) -> impl Iterator<Item = &Requirement> {
        self.lines.iter().filter_map(|line| match line {
            ManifestLine::Requirement(req) => Some(req),
            _ => None,
        })
    }

    /// Look up a record by package name. File order decides ties, so the
    /// first occurrence wins.
    pub fn get(&self, name: &str) -> Option<&Requirement> {
        self.requirements().find(|req| req.name == name)
    }

    /// Re-serialize the manifest in original line order with canonical
    /// record spacing.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            match line {
                ManifestLine::Blank => {}
                ManifestLine::Comment(text) => out.push_str(text),
                ManifestLine::Requirement(req) => out.push_str(&req.to_string()),
            }
            out.push('\n');
        }
        out
    }

    /// Package names appearing more than once, in first-occurrence order.
    ///
    /// Duplicates are legal in the format at large; they are reported
    /// rather than rejected.
    pub fn duplicate_names(&self) -> Vec<&str> {
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for req in self.requirements() {
            *counts.entry(req.name.as_str()).or_default() += 1;
        }
        let mut dupes = Vec::new();
        for req in self.requirements() {
            let name = req.name.as_str();
            if counts[name] > 1 && !dupes.contains(&name) {
                dupes.push(name);
            }
        }
        dupes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comments_and_blanks_only_is_empty() {
        let manifest = Manifest::parse("# a comment\n\n# another\n").unwrap();
        assert_eq!(manifest.requirements().count(), 0);
        assert_eq!(manifest.lines.len(), 3);
    }

    #[test]
    fn records_keep_file_order() {
        let manifest = Manifest::parse("b>=1.0\na>=2.0\nc\n").unwrap();
        let names: Vec<_> = manifest.requirements().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["b", "a", "c"]);
    }

    #[test]
    fn parse_error_carries_line_number() {
        let err = Manifest::parse("good>=1.0\nbad~=2.0\n").unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn render_round_trips() {
        let text = "# header\n\ncoverage!=4.4,>=4.0 # Apache-2.0\ntesttools>=2.2.0 # MIT\n";
        let manifest = Manifest::parse(text).unwrap();
        assert_eq!(manifest.render(), text);
    }

    #[test]
    fn duplicates_reported_in_order() {
        let manifest = Manifest::parse("b>=1.0\na\nb<2.0\na\nc\n").unwrap();
        assert_eq!(manifest.duplicate_names(), ["b", "a"]);
    }

    #[test]
    fn get_prefers_first_occurrence() {
        let manifest = Manifest::parse("pkg>=1.0\npkg<2.0\n").unwrap();
        assert_eq!(manifest.get("pkg").unwrap().specifiers.to_string(), ">=1.0");
        assert!(manifest.get("absent").is_none());
    }
}
