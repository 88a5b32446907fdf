use packed_struct::PackingError;

use crate::FrameType;

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum Error {
    #[error("{field} must be between {min} and {max} (got {value})")]
    InvalidArgument {
        field: &'static str,
        value: i64,
        min:   i64,
        max:   i64,
    },

    #[error("invalid hex: {0}")]
    Hex(#[from] codec::Error),

    #[error("{0} is required")]
    MissingRequiredField(&'static str),

    #[error("address must be at most {expected} bytes (got {got})")]
    InvalidAddress { expected: usize, got: usize },

    #[error("serializing frame payload: {0}")]
    Serialization(#[source] PackingError),

    #[error("unknown frame type 0x{0:02X}")]
    UnknownFrameType(u8),

    #[error("no decoder for frame type {}", .0.name())]
    UnsupportedFrameType(FrameType),

    #[error("{} payload truncated (need at least {need} bytes, got {got})", .frame_type.name())]
    Truncated {
        frame_type: FrameType,
        need:       usize,
        got:        usize,
    },

    #[error("unpacking frame payload: {0}")]
    Unpack(#[source] PackingError),
}

impl Error {
    /// Out-of-range numbers and malformed hex text.
    #[inline]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. } | Self::Hex(_) | Self::InvalidAddress { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// Reject anything outside `0..=255` for a byte-wide field.
pub(crate) fn byte_field(field: &'static str, value: impl Into<i64>) -> Result<u8> {
    let value = value.into();

    u8::try_from(value).map_err(|_| Error::InvalidArgument {
        field,
        value,
        min: u8::MIN as i64,
        max: u8::MAX as i64,
    })
}
