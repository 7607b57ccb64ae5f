use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use std::iter::FusedIterator;
use std::str::FromStr;

use itertools::{EitherOrBoth, Itertools};

use crate::{Error, Result};

/// A single RPM label - the Version or the Release part of an EVR.
///
/// A label is split into segments, which are maximal runs of ASCII digits or ASCII letters.
/// Everything else (dots, underscores, plus signs, non-ASCII text) only separates segments
/// and never takes part in the comparison, so "3.0.0_fc" and "3.0.0.fc" are the same label.
///
/// Segments are compared pairwise from the left. Two numeric segments compare by value, so
/// leading zeroes are insignificant. Two alphabetic segments compare bytewise, which puts
/// uppercase before lowercase. A numeric segment is always newer than an alphabetic one. If
/// every pair is equal, the label with more segments is newer.
///
/// Tilde (~) and caret (^) are checked before any of that. A label containing ~ anywhere sorts
/// older than one that doesn't, e.g. 1.1~rc1 vs 1.1. A label containing ^ anywhere sorts newer
/// than one that doesn't, e.g. 1.1 vs 1.1^20160101. When both labels carry the same marker, the
/// marker doesn't decide anything.
///
/// Labels can't contain a hyphen, since that separates the version from the release.
#[derive(Clone, Debug)]
pub struct Version<'a> {
    label: Cow<'a, str>,
}

impl<'a> Version<'a> {
    /// Create a new version from a label, failing if the label is not valid
    pub fn new<T: Into<Cow<'a, str>>>(label: T) -> Result<Version<'a>> {
        let label = label.into();
        Version::validate(&label)?;
        Ok(Version { label })
    }

    /// Create a version borrowing the provided label
    pub fn parse(label: &'a str) -> Result<Self> {
        Version::new(label)
    }

    /// Check that a label can be used as a Version or Release value
    pub fn validate(label: &str) -> Result<()> {
        if label.contains('-') {
            log::debug!("rejecting label {:?}: contains a hyphen", label);
            return Err(Error::HyphenInLabel);
        }
        Ok(())
    }

    /// Compare two labels.
    ///
    /// Both labels are validated first, and the error of the first invalid one is returned.
    pub fn compare(lhs: &str, rhs: &str) -> Result<Ordering> {
        let lhs = Version::parse(lhs)?;
        let rhs = Version::parse(rhs)?;
        Ok(lhs.cmp(&rhs))
    }

    /// Split a label into its digit and letter runs, left to right.
    ///
    /// ```
    /// let segments: Vec<_> = rpmcmp::Version::segments("1.002.3.abc.001ab.dd100").collect();
    /// assert_eq!(segments, ["1", "002", "3", "abc", "001", "ab", "dd", "100"]);
    /// ```
    pub fn segments(label: &str) -> Segments<'_> {
        Segments { rest: label }
    }

    /// The label value
    pub fn as_str(&self) -> &str {
        &self.label
    }

    /// Detach the version from the string it was parsed from
    pub fn into_owned(self) -> Version<'static> {
        Version {
            label: Cow::Owned(self.label.into_owned()),
        }
    }
}

impl FromStr for Version<'static> {
    type Err = Error;

    fn from_str(label: &str) -> Result<Self> {
        Version::new(label.to_owned())
    }
}

impl AsRef<str> for Version<'_> {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Version<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

impl PartialEq for Version<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version<'_> {}

impl PartialOrd for Version<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_labels(&self.label, &other.label)
    }
}

/// Iterator over the segments of a label, see [`Version::segments`].
#[derive(Clone, Debug)]
pub struct Segments<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Segments<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let label: &'a str = self.rest;
        let Some(start) = label.find(|c: char| c.is_ascii_alphanumeric()) else {
            self.rest = "";
            return None;
        };
        let rest = &label[start..];

        let end = if rest.starts_with(|c: char| c.is_ascii_digit()) {
            rest.find(|c: char| !c.is_ascii_digit())
        } else {
            rest.find(|c: char| !c.is_ascii_alphabetic())
        };
        let (segment, rest) = rest.split_at(end.unwrap_or(rest.len()));

        self.rest = rest;
        Some(segment)
    }
}

impl FusedIterator for Segments<'_> {}

/// Compare two labels which are already known to be valid
pub(crate) fn compare_labels(lhs: &str, rhs: &str) -> Ordering {
    // Tilde parses as "older" or lesser version
    match (lhs.contains('~'), rhs.contains('~')) {
        (true, false) => {
            log::trace!("{:?} < {:?}: only the left side has a tilde", lhs, rhs);
            return Ordering::Less;
        }
        (false, true) => {
            log::trace!("{:?} > {:?}: only the right side has a tilde", lhs, rhs);
            return Ordering::Greater;
        }
        _ => (),
    }

    // Caret parses as "newer" or greater version
    match (lhs.contains('^'), rhs.contains('^')) {
        (true, false) => {
            log::trace!("{:?} > {:?}: only the left side has a caret", lhs, rhs);
            return Ordering::Greater;
        }
        (false, true) => {
            log::trace!("{:?} < {:?}: only the right side has a caret", lhs, rhs);
            return Ordering::Less;
        }
        _ => (),
    }

    for pair in Version::segments(lhs).zip_longest(Version::segments(rhs)) {
        let ordering = match pair {
            EitherOrBoth::Both(lhs_segment, rhs_segment) => {
                compare_segments(lhs_segment, rhs_segment)
            }
            // all previous segments were equal, the longer label wins
            EitherOrBoth::Left(_) => Ordering::Greater,
            EitherOrBoth::Right(_) => Ordering::Less,
        };

        if ordering != Ordering::Equal {
            log::trace!("{:?} {:?} {:?} at {:?}", lhs, ordering, rhs, pair);
            return ordering;
        }
    }

    Ordering::Equal
}

fn compare_segments(lhs: &str, rhs: &str) -> Ordering {
    let is_numeric = |segment: &str| segment.starts_with(|c: char| c.is_ascii_digit());

    match (is_numeric(lhs), is_numeric(rhs)) {
        // digit runs may be arbitrarily long, so compare them as text rather than parsing them
        (true, true) => {
            let lhs = lhs.trim_start_matches('0');
            let rhs = rhs.trim_start_matches('0');
            lhs.len().cmp(&rhs.len()).then_with(|| lhs.cmp(rhs))
        }
        (false, false) => lhs.cmp(rhs),
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
    }
}
