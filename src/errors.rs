/// Reasons a version label or an EVR string is rejected.
///
/// The `Display` output of each variant is a fixed diagnostic that callers may match on.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A version or release label contains `-`.
    #[error("Label can't have hyphen symbol!")]
    HyphenInLabel,

    /// An EVR string contains more than one `:`.
    #[error("EVR must contain only one colon symbol!")]
    MultipleColons,

    /// The epoch is a negative number.
    #[error("Epoch must be a positive number!")]
    NegativeEpoch,

    /// An EVR string contains more than one `-`.
    #[error("EVR must contain only one hyphen symbol!")]
    MultipleHyphens,

    /// The text before the colon is not a decimal number that fits in a `u64`.
    #[error("Epoch is not a valid number: {epoch}")]
    InvalidEpoch { epoch: String },
}

pub type Result<T> = std::result::Result<T, Error>;
