//! Version comparator clauses and constraint expressions.
//!
//! A constraint expression is a comma-separated list of comparator
//! clauses (`!=4.4,>=4.0`), all of which a candidate version must
//! satisfy. Clause order is preserved through parse and display so a
//! manifest re-serializes exactly as authored.

use std::cmp::Ordering;
use std::fmt;

use serde::{Serialize, Serializer};

use crate::version::PackageVersion;

/// A version comparison operator.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum CompareOp {
    Eq,
    Ne,
    Ge,
    Le,
    Lt,
    Gt,
}

impl CompareOp {
    pub fn as_str(self) -> &'static str {
        match self {
            CompareOp::Eq => "==",
            CompareOp::Ne => "!=",
            CompareOp::Ge => ">=",
            CompareOp::Le => "<=",
            CompareOp::Lt => "<",
            CompareOp::Gt => ">",
        }
    }

    /// Split an operator off the front of a clause, longest match first.
    fn strip(clause: &str) -> Option<(Self, &str)> {
        for (op, text) in [
            (CompareOp::Eq, "=="),
            (CompareOp::Ne, "!="),
            (CompareOp::Ge, ">="),
            (CompareOp::Le, "<="),
            (CompareOp::Lt, "<"),
            (CompareOp::Gt, ">"),
        ] {
            if let Some(rest) = clause.strip_prefix(text) {
                return Some((op, rest));
            }
        }
        None
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One comparator clause: an operator and the version it compares against.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Specifier {
    pub op: CompareOp,
    pub version: PackageVersion,
}

impl Specifier {
    /// Parse a single clause like `>=6.1.0` or `!=4.4`.
    pub fn parse(clause: &str) -> Option<Self> {
        let (op, rest) = CompareOp::strip(clause.trim())?;
        let version = PackageVersion::parse(rest)?;
        Some(Self { op, version })
    }

    /// Check whether a candidate version satisfies this clause.
    pub fn matches(&self, candidate: &PackageVersion) -> bool {
        let ord = candidate.cmp(&self.version);
        match self.op {
            CompareOp::Eq => ord == Ordering::Equal,
            CompareOp::Ne => ord != Ordering::Equal,
            CompareOp::Ge => ord != Ordering::Less,
            CompareOp::Le => ord != Ordering::Greater,
            CompareOp::Lt => ord == Ordering::Less,
            CompareOp::Gt => ord == Ordering::Greater,
        }
    }
}

impl fmt::Display for Specifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.op, self.version)
    }
}

/// An ordered constraint expression: every clause must hold.
///
/// An empty set is legal and accepts any version (a bare package name).
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct SpecifierSet(Vec<Specifier>);

impl SpecifierSet {
    /// Parse a comma-separated clause list. An empty string yields an
    /// empty set.
    pub fn parse(expr: &str) -> Option<Self> {
        let expr = expr.trim();
        if expr.is_empty() {
            return Some(Self::default());
        }
        expr.split(',')
            .map(Specifier::parse)
            .collect::<Option<Vec<_>>>()
            .map(Self)
    }

    /// Check whether a candidate version satisfies every clause.
    pub fn matches(&self, candidate: &PackageVersion) -> bool {
        self.0.iter().all(|spec| spec.matches(candidate))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Specifier> {
        self.0.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for SpecifierSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, spec) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{spec}")?;
        }
        Ok(())
    }
}

impl Serialize for SpecifierSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.0.iter().map(ToString::to_string))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(s: &str) -> PackageVersion {
        PackageVersion::parse(s).unwrap()
    }

    #[test]
    fn parse_single_clause() {
        let spec = Specifier::parse(">=6.1.0").unwrap();
        assert_eq!(spec.op, CompareOp::Ge);
        assert_eq!(spec.version, v("6.1.0"));
    }

    #[test]
    fn longest_operator_wins() {
        // `>=` must not parse as `>` followed by `=6.1.0`
        let spec = Specifier::parse(">=2.0").unwrap();
        assert_eq!(spec.op, CompareOp::Ge);
        let spec = Specifier::parse(">2.0").unwrap();
        assert_eq!(spec.op, CompareOp::Gt);
    }

    #[test]
    fn clause_matching() {
        assert!(Specifier::parse("!=4.4").unwrap().matches(&v("4.5")));
        assert!(!Specifier::parse("!=4.4").unwrap().matches(&v("4.4")));
        assert!(Specifier::parse(">=4.0").unwrap().matches(&v("4.0")));
        assert!(Specifier::parse("<6.2.0").unwrap().matches(&v("6.1.9")));
        assert!(!Specifier::parse("<6.2.0").unwrap().matches(&v("6.2.0")));
        assert!(Specifier::parse("==2.0").unwrap().matches(&v("2.0.0")));
    }

    #[test]
    fn set_requires_every_clause() {
        let set = SpecifierSet::parse("!=4.4,>=4.0").unwrap();
        assert!(set.matches(&v("4.0")));
        assert!(set.matches(&v("4.5")));
        assert!(!set.matches(&v("4.4")));
        assert!(!set.matches(&v("3.9")));
    }

    #[test]
    fn empty_set_accepts_anything() {
        let set = SpecifierSet::parse("").unwrap();
        assert!(set.is_empty());
        assert!(set.matches(&v("0.0.1")));
    }

    #[test]
    fn display_preserves_clause_order() {
        let set = SpecifierSet::parse("!=4.4,>=4.0").unwrap();
        assert_eq!(set.to_string(), "!=4.4,>=4.0");
    }

    #[test]
    fn rejects_unknown_operator() {
        assert!(Specifier::parse("~=1.0").is_none());
        assert!(Specifier::parse("4.0").is_none());
        assert!(SpecifierSet::parse(">=4.0,").is_none());
    }
}
