//! Bits for the `transmit_options` byte of the transmit frames.
//!
//! Any combination is accepted; which bits a module honours depends on its
//! firmware.

pub const NONE: u8 = 0x00;
pub const DISABLE_ACK: u8 = 0x01;
pub const BROADCAST_PAN_ID: u8 = 0x04;
pub const ENABLE_APS_ENCRYPTION: u8 = 0x20;
pub const USE_EXTENDED_TIMEOUT: u8 = 0x40;
