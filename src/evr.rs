use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::{Error, Result, Version};

/// A full RPM "version" specifier has 3 different components - Epoch, Version, and Release -
/// written as `epoch:version-release`. Only the version is mandatory.
///
/// Epoch overrides all other fields and is generally only used as a last resort - in cases where
/// a change to the versioning scheme or packaging error creates a situation where newer packages
/// might otherwise sort as being older. A missing epoch is the same as an epoch of zero.
///
/// Version is the normal version string used by the upstream project. This shouldn't be tweaked
/// by the packager.
///
/// Release indicates firstly the number of times this package has been released - for instance,
/// with custom patches and backports not present in the upstream, but may also indicate other
/// details such as the OS it was built for (fc38, el9) or portions of a git commit hash.
///
/// EVRs are ordered by epoch first, then by version, then by release. Version and release are
/// both compared as [`Version`] labels.
#[derive(Clone, Debug)]
pub struct Evr<'a> {
    epoch: u64,
    version: Version<'a>,
    release: Version<'a>,
}

impl<'a> Evr<'a> {
    /// Create a new EVR from its components, failing if a label is not valid
    pub fn new<T: Into<Cow<'a, str>>>(epoch: u64, version: T, release: T) -> Result<Evr<'a>> {
        Ok(Evr {
            epoch,
            version: Version::new(version)?,
            release: Version::new(release)?,
        })
    }

    /// Create an EVR parsed from a string
    pub fn parse(evr: &'a str) -> Result<Self> {
        let (epoch, version, release) = Evr::parse_values(evr)?;
        Evr::new(epoch, version, release)
    }

    /// Check that a string is a well formed EVR
    pub fn validate(evr: &str) -> Result<()> {
        Evr::parse_values(evr).map(|_| ())
    }

    /// Compare two EVR strings.
    ///
    /// Both strings are validated first, and the error of the first invalid one is returned.
    pub fn compare(lhs: &str, rhs: &str) -> Result<Ordering> {
        let lhs = Evr::parse(lhs)?;
        let rhs = Evr::parse(rhs)?;
        Ok(lhs.cmp(&rhs))
    }

    /// The epoch value
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// The version value
    pub fn version(&self) -> &str {
        self.version.as_str()
    }

    /// The release value, empty if there is none
    pub fn release(&self) -> &str {
        self.release.as_str()
    }

    /// Return the epoch, version and release values as a 3-element tuple
    pub fn values(&self) -> (u64, &str, &str) {
        (self.epoch(), self.version(), self.release())
    }

    /// Write an EVR string in a normalized form which always includes an epoch
    ///
    /// The standard string representation of an EVR will ignore the epoch if it is zero, since
    /// no epoch is equivalent to an epoch of zero. Sometimes it is useful to write EVRs in a form
    /// such that equivalent values are represented identically, therefore, this "normalized" form
    /// will always include it.
    pub fn as_normalized_form(&self) -> String {
        let mut normalized = format!("{}:{}", self.epoch, self.version);
        if !self.release().is_empty() {
            normalized.push('-');
            normalized.push_str(self.release());
        }
        normalized
    }

    /// Detach the EVR from the string it was parsed from
    pub fn into_owned(self) -> Evr<'static> {
        Evr {
            epoch: self.epoch,
            version: self.version.into_owned(),
            release: self.release.into_owned(),
        }
    }

    /// Validate an EVR string and split it into epoch, version and release.
    ///
    /// The colon count is checked first, then the epoch, then the hyphen count.
    pub fn parse_values(evr: &str) -> Result<(u64, &str, &str)> {
        split_evr(evr).inspect_err(|err| log::debug!("rejecting EVR {:?}: {}", evr, err))
    }
}

fn split_evr(evr: &str) -> Result<(u64, &str, &str)> {
    if evr.matches(':').count() > 1 {
        return Err(Error::MultipleColons);
    }

    let (epoch, vr) = match evr.split_once(':') {
        Some((epoch, vr)) => (parse_epoch(epoch)?, vr),
        None => (0, evr),
    };

    if evr.matches('-').count() > 1 {
        return Err(Error::MultipleHyphens);
    }

    let (version, release) = vr.split_once('-').unwrap_or((vr, ""));
    Ok((epoch, version, release))
}

/// The epoch has to be a plain decimal number. A minus sign is only recognized to report
/// negative epochs as such.
fn parse_epoch(epoch: &str) -> Result<u64> {
    let invalid = || Error::InvalidEpoch {
        epoch: epoch.to_owned(),
    };

    match epoch.strip_prefix('-') {
        Some(digits) if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) => {
            if digits.bytes().all(|b| b == b'0') {
                Ok(0)
            } else {
                Err(Error::NegativeEpoch)
            }
        }
        Some(_) => Err(invalid()),
        None => epoch.parse().map_err(|_| invalid()),
    }
}

impl FromStr for Evr<'static> {
    type Err = Error;

    fn from_str(evr: &str) -> Result<Self> {
        Evr::parse(evr).map(Evr::into_owned)
    }
}

impl fmt::Display for Evr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.epoch != 0 {
            write!(f, "{}:", self.epoch)?;
        }

        write!(f, "{}", self.version)?;

        if !self.release().is_empty() {
            write!(f, "-{}", self.release)?;
        }
        Ok(())
    }
}

impl PartialEq for Evr<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Evr<'_> {}

impl PartialOrd for Evr<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Evr<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        let epoch_cmp = self.epoch.cmp(&other.epoch);
        if epoch_cmp != Ordering::Equal {
            log::trace!("epoch {} {:?} epoch {}", self.epoch, epoch_cmp, other.epoch);
            return epoch_cmp;
        }

        let version_cmp = self.version.cmp(&other.version);
        if version_cmp != Ordering::Equal {
            return version_cmp;
        }

        self.release.cmp(&other.release)
    }
}
