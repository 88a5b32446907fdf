use std::{
    fmt::{
        Debug,
        Display,
        Formatter,
    },
    hash::Hash,
    str::FromStr,
};

use packed_struct::{
    prelude::*,
    PackedStructInfo,
    PackingResult,
};
use serde::{
    de::Error as _,
    Deserialize,
    Deserializer,
    Serialize,
    Serializer,
};

use crate::Error;

/// A fixed-width device address as carried on the wire.
pub trait Address:
    Copy + Debug + Display + Eq + Hash + FromStr<Err = Error> + PackedStruct
{
    const SIZE: usize;

    fn as_bytes(&self) -> &[u8];
}

macro_rules! impl_address {
    ($name:ident, $size:literal) => {
        impl $name {
            #[inline]
            pub const fn new(bytes: [u8; $size]) -> Self {
                Self(bytes)
            }

            #[inline]
            pub const fn into_bytes(self) -> [u8; $size] {
                self.0
            }
        }

        impl Address for $name {
            const SIZE: usize = $size;

            #[inline]
            fn as_bytes(&self) -> &[u8] {
                &self.0
            }
        }

        impl From<[u8; $size]> for $name {
            #[inline]
            fn from(bytes: [u8; $size]) -> Self {
                Self(bytes)
            }
        }

        impl PackedStruct for $name {
            type ByteArray = [u8; $size];

            #[inline]
            fn pack(&self) -> PackingResult<Self::ByteArray> {
                Ok(self.0)
            }

            #[inline]
            fn unpack(src: &Self::ByteArray) -> PackingResult<Self> {
                Ok(Self(*src))
            }
        }

        impl PackedStructInfo for $name {
            #[inline]
            fn packed_bits() -> usize {
                $size * 8
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                f.write_str(&codec::bytes_to_hex(self.0))
            }
        }

        // short input is left-padded with zero bytes
        impl FromStr for $name {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let bytes = codec::hex_to_bytes(s)?;

                if bytes.len() > $size {
                    return Err(Error::InvalidAddress {
                        expected: $size,
                        got:      bytes.len(),
                    });
                }

                let mut out = [0u8; $size];
                out[$size - bytes.len()..].copy_from_slice(&bytes);

                Ok(Self(out))
            }
        }

        impl Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                serializer.collect_str(self)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;

                s.parse().map_err(D::Error::custom)
            }
        }
    };
}

/// 64-bit (extended) device address.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Address64([u8; 8]);

impl_address!(Address64, 8);

impl Address64 {
    pub const BROADCAST: Self = Self([0, 0, 0, 0, 0, 0, 0xff, 0xff]);
    pub const COORDINATOR: Self = Self([0; 8]);
    pub const UNKNOWN: Self = Self([0xff; 8]);
}

/// 16-bit (network) device address.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Address16([u8; 2]);

impl_address!(Address16, 2);

impl Address16 {
    pub const BROADCAST: Self = Self([0xff, 0xff]);
    pub const UNKNOWN: Self = Self([0xff, 0xfe]);
}
