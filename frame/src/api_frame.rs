use packed_struct::PackedStructSlice;

use crate::{
    Error,
    FrameType,
    Parameters,
    Result,
};

/// Common contract of every typed API frame.
///
/// The payload produced here starts with the frame id and is followed by the
/// variant's fields. Delimiter, length, frame-type tag and checksum belong to
/// the link layer wrapping it.
pub trait ApiFrame: PackedStructSlice {
    const FRAME_TYPE: FrameType;

    /// Whether the link layer has to allocate a frame id before sending.
    const NEEDS_FRAME_ID: bool;

    /// Shortest payload that can be unpacked into this frame.
    const MIN_PAYLOAD_SIZE: usize;

    fn frame_id(&self) -> u8;

    fn parameters(&self) -> Parameters;

    #[inline]
    fn frame_type(&self) -> FrameType {
        Self::FRAME_TYPE
    }

    #[inline]
    fn needs_frame_id(&self) -> bool {
        Self::NEEDS_FRAME_ID
    }

    fn serialize_payload(&self) -> Result<Vec<u8>> {
        let bytes = self.pack_to_vec().map_err(Error::Serialization)?;

        tracing::trace!(
            frame_type = ?Self::FRAME_TYPE,
            data = %hex::encode_upper(&bytes),
            "serialized frame payload"
        );

        Ok(bytes)
    }
}

/// Unpack a payload into `T`, checking the fixed-size prefix first so that
/// short input reports how much was missing.
#[tracing::instrument(skip_all, fields(frame_type = ?T::FRAME_TYPE, len = payload.len()), err(Display))]
pub(crate) fn unpack<T>(payload: &[u8]) -> Result<T>
where
    T: ApiFrame,
{
    if payload.len() < T::MIN_PAYLOAD_SIZE {
        return Err(Error::Truncated {
            frame_type: T::FRAME_TYPE,
            need:       T::MIN_PAYLOAD_SIZE,
            got:        payload.len(),
        });
    }

    T::unpack_from_slice(payload).map_err(|e| {
        tracing::error!(error = %e, data = %hex::encode_upper(payload), "failed to unpack frame");
        Error::Unpack(e)
    })
}

/// Byte-wide numeric parameter shown as `"<hex> (<decimal>)"`.
#[inline]
pub(crate) fn hex_and_decimal(value: u8) -> String {
    format!("{} ({})", codec::pretty_hex(&codec::int_to_hex(value as i32, 1)), value)
}

/// Byte-wide numeric parameter shown as hex only.
#[inline]
pub(crate) fn hex_only(value: u8) -> String {
    codec::pretty_hex(&codec::int_to_hex(value as i32, 1))
}
