//! A single dependency record: package name, constraint expression,
//! and license tag.

use std::fmt;

use serde::Serialize;

use crate::specifier::SpecifierSet;

/// One record from a requirements manifest.
///
/// The license tag is carried as documentation only; nothing enforces it.
#[derive(Debug, Clone, Serialize, Eq, PartialEq)]
pub struct Requirement {
    pub name: String,
    pub specifiers: SpecifierSet,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
}

impl Requirement {
    /// Parse a requirement line like `coverage!=4.4,>=4.0 # Apache-2.0`.
    ///
    /// The comparator list and the trailing license comment are both
    /// optional. On failure the returned message describes what was
    /// malformed; the caller attaches the line number.
    pub fn parse(line: &str) -> Result<Self, String> {
        let (spec_part, license) = match line.split_once('#') {
            Some((before, after)) => (before, Some(after.trim())),
            None => (line, None),
        };
        let spec_part = spec_part.trim();

        let name_end = spec_part
            .find(['<', '>', '=', '!'])
            .unwrap_or(spec_part.len());
        let name = spec_part[..name_end].trim();
        if name.is_empty() {
            return Err("missing package name".to_string());
        }
        if !is_valid_name(name) {
            return Err(format!("invalid package name `{name}`"));
        }

        let expr = &spec_part[name_end..];
        let specifiers = SpecifierSet::parse(expr)
            .ok_or_else(|| format!("invalid constraint expression `{expr}`"))?;

        Ok(Self {
            name: name.to_string(),
            specifiers,
            license: license.filter(|s| !s.is_empty()).map(str::to_string),
        })
    }
}

/// Package names start alphanumeric and continue with alphanumerics,
/// `-`, `_`, or `.`.
fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphanumeric() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.name, self.specifiers)?;
        if let Some(license) = &self.license {
            write!(f, " # {license}")?;
        }
        Ok(())
    }
}
