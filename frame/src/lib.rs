//! Typed API frames for radio modules and their payload serialization.
//!
//! Each frame variant knows how to produce the bytes that follow the link
//! header on the wire (frame id first, then its own fields) and how to list its
//! fields for humans. The link layer (start delimiter, length, checksum,
//! escaping) is not handled here.
//!
//! Frames are plain values: build one, optionally swap its payload through
//! `&mut`, then serialize or share it read-only across threads.
//!
//! ```
//! use apiframe_frame::{
//!     ApiFrame,
//!     Address64,
//!     Tx64Frame,
//! };
//!
//! let frame = Tx64Frame::new(1, Address64::new([0, 1, 2, 3, 4, 5, 6, 7]), 0)?;
//! assert_eq!(frame.serialize_payload()?, [1, 0, 1, 2, 3, 4, 5, 6, 7, 0]);
//! # Ok::<(), apiframe_frame::Error>(())
//! ```

mod address;
mod api_frame;
mod error;
mod frame;
mod frame_type;
mod parameters;
mod payload;
pub mod transmit;
pub mod transmit_options;

pub use address::{
    Address,
    Address16,
    Address64,
};
pub use api_frame::ApiFrame;
pub use error::{
    Error,
    Result,
};
pub use frame::Frame;
pub use frame_type::FrameType;
pub use parameters::Parameters;
pub use payload::Payload;
pub use transmit::{
    Destination,
    TransmitBuilder,
    TransmitFrame,
    Tx16Frame,
    Tx64Frame,
};
