//! # rpmcmp
//!
//! A library implementing the RPM version comparison rules, both for single
//! Version / Release labels and for full `epoch:version-release` strings.
//!
//! # Example
//!
//! ```rust
//! use std::cmp::Ordering;
//!
//! # fn main() -> Result<(), rpmcmp::Error> {
//! assert_eq!(rpmcmp::rpm_version_compare("1.05", "1.5")?, Ordering::Equal);
//! assert_eq!(rpmcmp::rpm_version_compare("1.1~rc1", "1.1")?, Ordering::Less);
//! assert_eq!(rpmcmp::rpm_evr_compare("1.2.3-1", "1:1.0-1")?, Ordering::Less);
//!
//! let evr = rpmcmp::Evr::parse("009:1.2.3-4.fc39")?;
//! assert_eq!(evr.values(), (9, "1.2.3", "4.fc39"));
//!
//! // invalid input is rejected with a fixed diagnostic
//! let err = rpmcmp::Evr::validate("-1:1.2.3").unwrap_err();
//! assert_eq!(err.to_string(), "Epoch must be a positive number!");
//! # Ok(())
//! # }
//! ```

#![allow(unknown_lints, clippy::uninlined_format_args)]

use std::cmp::Ordering;

mod errors;
pub use crate::errors::*;

mod version;
pub use crate::version::*;

mod evr;
pub use crate::evr::*;

/// Compare two strings as RPM Version or Release labels
pub fn rpm_version_compare(version1: &str, version2: &str) -> Result<Ordering> {
    Version::compare(version1, version2)
}

/// Compare two strings as RPM EVR values
pub fn rpm_evr_compare(evr1: &str, evr2: &str) -> Result<Ordering> {
    Evr::compare(evr1, evr2)
}
