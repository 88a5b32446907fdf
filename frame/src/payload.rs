use std::fmt::{
    Display,
    Formatter,
};

use bytes::Bytes;
use serde::{
    Deserialize,
    Deserializer,
    Serialize,
    Serializer,
};

/// Owned RF data carried by a frame.
///
/// Construction always copies, so a caller's scratch buffer can be reused or
/// mutated afterwards without affecting the frame.
#[derive(
    Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Into, derive_more::AsRef,
)]
pub struct Payload(Bytes);

impl Payload {
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_ref()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<T> From<T> for Payload
where
    T: AsRef<[u8]>,
{
    #[inline]
    fn from(t: T) -> Self {
        Payload(Bytes::copy_from_slice(t.as_ref()))
    }
}

impl Display for Payload {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&codec::pretty_hex_bytes(self.as_bytes()))
    }
}

impl Serialize for Payload {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Payload {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let v = Vec::<u8>::deserialize(deserializer)?;

        Ok(Payload(Bytes::from(v)))
    }
}
