use alloc::string::String;
use enough::StopReason;

/// Errors from bitmap decoding and placement conversion.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ConvertError {
    /// The bitmap uses a variant this crate does not decode (wrong bit
    /// depth or a non-zero compression scheme).
    #[error("unsupported bitmap format: {0}")]
    UnsupportedFormat(String),

    /// The input ended before all expected bytes were read. No partial
    /// grid or placement list is ever returned.
    #[error("input truncated before expected data")]
    TruncatedInput,

    #[error("invalid bitmap header: {0}")]
    InvalidHeader(String),

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("conversion cancelled")]
    Cancelled(StopReason),
}

impl From<StopReason> for ConvertError {
    fn from(r: StopReason) -> Self {
        ConvertError::Cancelled(r)
    }
}
