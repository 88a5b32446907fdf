//! Hex/byte conversions shared by the frame model and its tooling.

pub mod hex;

pub use self::hex::{
    byte_to_hex,
    bytes_to_hex,
    contains_non_digits,
    hex_to_bytes,
    int_to_hex,
    opt_bytes_to_hex,
    pretty_hex,
    pretty_hex_bytes,
    Error,
    Result,
};
