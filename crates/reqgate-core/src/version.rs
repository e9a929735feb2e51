//! Package version parsing, comparison, and ordering.
//!
//! Versions follow the pip-style scheme used by requirements manifests:
//! - Dotted numeric release segments compare as numbers
//! - Missing trailing segments compare as zero (`1.0` equals `1.0.0`)
//! - Pre-release qualifiers order `dev < alpha < beta < rc < release`
//! - `.postN` suffixes sort after their release

use std::cmp::Ordering;
use std::fmt;

/// A parsed package version with comparable release segments and suffix.
#[derive(Debug, Clone)]
pub struct PackageVersion {
    pub original: String,
    release: Vec<u64>,
    suffix: Suffix,
}

/// The phase a version belongs to within its release segments.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
enum Suffix {
    Dev(u64),
    Pre(PreKind, u64),
    Release,
    Post(u64),
}

/// Well-known pre-release qualifiers with defined ordering.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd)]
enum PreKind {
    Alpha,
    Beta,
    Rc,
}

impl Suffix {
    fn rank(self) -> (u8, u8, u64) {
        match self {
            Suffix::Dev(n) => (0, 0, n),
            Suffix::Pre(kind, n) => (1, kind as u8, n),
            Suffix::Release => (2, 0, 0),
            Suffix::Post(n) => (3, 0, n),
        }
    }
}

impl PackageVersion {
    /// Parse a version string like `6.1.0`, `4.0rc1`, or `1.2.post3`.
    ///
    /// Returns `None` when the string has no leading numeric segment or
    /// carries an unrecognized qualifier.
    pub fn parse(version: &str) -> Option<Self> {
        let s = version.trim();
        if s.is_empty() {
            return None;
        }

        let mut release = Vec::new();
        let mut rest = s;
        loop {
            let digits: String = rest.chars().take_while(char::is_ascii_digit).collect();
            if digits.is_empty() {
                // no leading numeric segment at all
                if release.is_empty() {
                    return None;
                }
                break;
            }
            release.push(digits.parse::<u64>().ok()?);
            rest = &rest[digits.len()..];
            match rest.strip_prefix('.') {
                // a dot followed by a qualifier (`1.0.post1`) ends the release
                Some(after) if after.starts_with(|c: char| c.is_ascii_digit()) => rest = after,
                _ => break,
            }
        }

        let suffix = parse_suffix(rest)?;
        Some(Self {
            original: s.to_string(),
            release,
            suffix,
        })
    }

    /// Whether this is a final release (no dev/pre/post qualifier).
    pub fn is_release(&self) -> bool {
        self.suffix == Suffix::Release
    }

    /// The numeric release segments, without any suffix.
    pub fn release(&self) -> &[u64] {
        &self.release
    }
}

fn parse_suffix(rest: &str) -> Option<Suffix> {
    if rest.is_empty() {
        return Some(Suffix::Release);
    }
    let rest = match rest.strip_prefix(['.', '-', '_']) {
        // a bare trailing separator (`1.`) is malformed
        Some(r) if r.is_empty() => return None,
        Some(r) => r.to_ascii_lowercase(),
        None => rest.to_ascii_lowercase(),
    };

    let word: String = rest.chars().take_while(char::is_ascii_alphabetic).collect();
    let number = rest[word.len()..]
        .strip_prefix(['.', '-', '_'])
        .unwrap_or(&rest[word.len()..]);
    let n = if number.is_empty() {
        0
    } else {
        number.parse::<u64>().ok()?
    };

    match word.as_str() {
        "a" | "alpha" => Some(Suffix::Pre(PreKind::Alpha, n)),
        "b" | "beta" => Some(Suffix::Pre(PreKind::Beta, n)),
        "c" | "rc" | "pre" | "preview" => Some(Suffix::Pre(PreKind::Rc, n)),
        "dev" => Some(Suffix::Dev(n)),
        "post" | "r" | "rev" => Some(Suffix::Post(n)),
        _ => None,
    }
}

impl fmt::Display for PackageVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.original)
    }
}

impl PartialEq for PackageVersion {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for PackageVersion {}

impl Ord for PackageVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        let max_len = self.release.len().max(other.release.len());
        for i in 0..max_len {
            let a = self.release.get(i).copied().unwrap_or(0);
            let b = other.release.get(i).copied().unwrap_or(0);
            let ord = a.cmp(&b);
            if ord != Ordering::Equal {
                return ord;
            }
        }
        self.suffix.rank().cmp(&other.suffix.rank())
    }
}

impl PartialOrd for PackageVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
