use std::fmt::{
    Display,
    Formatter,
};

use crate::{
    api_frame,
    ApiFrame,
    Error,
    FrameType,
    Parameters,
    Result,
    Tx16Frame,
    Tx64Frame,
};

/// Any frame this crate knows how to decode.
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Frame {
    Tx64(Tx64Frame),
    Tx16(Tx16Frame),
}

macro_rules! each_variant {
    ($self:expr, $f:ident => $body:expr) => {
        match $self {
            Frame::Tx64($f) => $body,
            Frame::Tx16($f) => $body,
        }
    };
}

impl Frame {
    /// Rebuild a frame from the payload the link layer handed over, with
    /// delimiter, length and checksum already stripped.
    #[tracing::instrument(skip(payload), fields(len = payload.len()), err(Display))]
    pub fn decode(tag: u8, payload: &[u8]) -> Result<Self> {
        let frame_type = FrameType::from_tag(tag).ok_or(Error::UnknownFrameType(tag))?;

        let frame = match frame_type {
            FrameType::Tx64 => Frame::Tx64(api_frame::unpack(payload)?),
            FrameType::Tx16 => Frame::Tx16(api_frame::unpack(payload)?),
            other => return Err(Error::UnsupportedFrameType(other)),
        };

        tracing::debug!(%frame, "decoded frame");

        Ok(frame)
    }

    #[inline]
    pub fn frame_type(&self) -> FrameType {
        each_variant!(self, f => f.frame_type())
    }

    #[inline]
    pub fn frame_id(&self) -> u8 {
        each_variant!(self, f => f.frame_id())
    }

    #[inline]
    pub fn needs_frame_id(&self) -> bool {
        each_variant!(self, f => f.needs_frame_id())
    }

    #[inline]
    pub fn serialize_payload(&self) -> Result<Vec<u8>> {
        each_variant!(self, f => f.serialize_payload())
    }

    #[inline]
    pub fn parameters(&self) -> Parameters {
        each_variant!(self, f => f.parameters())
    }
}

impl From<Tx64Frame> for Frame {
    #[inline]
    fn from(f: Tx64Frame) -> Self {
        Frame::Tx64(f)
    }
}

impl From<Tx16Frame> for Frame {
    #[inline]
    fn from(f: Tx16Frame) -> Self {
        Frame::Tx16(f)
    }
}

impl Display for Frame {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.frame_type().name(), self.parameters())
    }
}
