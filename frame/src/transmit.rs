use packed_struct::{
    prelude::*,
    PackingResult,
};

use crate::{
    api_frame::{
        hex_and_decimal,
        hex_only,
    },
    error::byte_field,
    Address,
    Address16,
    Address64,
    ApiFrame,
    Error,
    FrameType,
    Parameters,
    Payload,
    Result,
};

/// Address types a transmit request can be sent to.
pub trait Destination: Address {
    const FRAME_TYPE: FrameType;
    const LABEL: &'static str;
}

impl Destination for Address64 {
    const FRAME_TYPE: FrameType = FrameType::Tx64;
    const LABEL: &'static str = "64-bit dest. address";
}

impl Destination for Address16 {
    const FRAME_TYPE: FrameType = FrameType::Tx16;
    const LABEL: &'static str = "16-bit dest. address";
}

pub type Tx64Frame = TransmitFrame<Address64>;
pub type Tx16Frame = TransmitFrame<Address16>;

/// Transmit request: send `payload` to `destination`.
///
/// Wire layout (after the link header): frame id, destination address,
/// options byte, then the payload bytes if any.
///
/// Frame id, destination and options are fixed at construction. The payload
/// can be replaced through `&mut self`; share the frame read-only (it is
/// `Send + Sync`) only once it is no longer being changed.
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct TransmitFrame<A> {
    frame_id:         u8,
    destination:      A,
    transmit_options: u8,
    payload:          Option<Payload>,
}

impl<A> TransmitFrame<A>
where
    A: Destination,
{
    const HEADER_SIZE: usize = 1 + A::SIZE + 1;

    /// Fails with [`Error::InvalidArgument`] if `frame_id` or
    /// `transmit_options` does not fit in a byte.
    pub fn new(
        frame_id: impl Into<i64>,
        destination: A,
        transmit_options: impl Into<i64>,
    ) -> Result<Self> {
        Ok(Self {
            frame_id: byte_field("frame id", frame_id)?,
            destination,
            transmit_options: byte_field("transmit options", transmit_options)?,
            payload: None,
        })
    }

    #[inline]
    pub fn builder() -> TransmitBuilder<A> {
        TransmitBuilder::default()
    }

    #[inline]
    pub fn with_payload(mut self, data: impl AsRef<[u8]>) -> Self {
        self.set_payload(data);
        self
    }

    #[inline]
    pub fn destination(&self) -> A {
        self.destination
    }

    #[inline]
    pub fn transmit_options(&self) -> u8 {
        self.transmit_options
    }

    #[inline]
    pub fn payload(&self) -> Option<&Payload> {
        self.payload.as_ref()
    }

    /// Replace the payload with a copy of `data`.
    #[inline]
    pub fn set_payload(&mut self, data: impl AsRef<[u8]>) {
        self.payload = Some(Payload::from(data));
    }

    #[inline]
    pub fn clear_payload(&mut self) -> Option<Payload> {
        self.payload.take()
    }

    #[inline]
    fn payload_len(&self) -> usize {
        self.payload.as_ref().map_or(0, Payload::len)
    }
}

impl<A> ApiFrame for TransmitFrame<A>
where
    A: Destination,
{
    const FRAME_TYPE: FrameType = A::FRAME_TYPE;
    const MIN_PAYLOAD_SIZE: usize = Self::HEADER_SIZE;
    const NEEDS_FRAME_ID: bool = true;

    #[inline]
    fn frame_id(&self) -> u8 {
        self.frame_id
    }

    fn parameters(&self) -> Parameters {
        let mut params = Parameters::new();

        params.insert("Frame ID", hex_and_decimal(self.frame_id));
        params.insert(A::LABEL, codec::pretty_hex(&self.destination.to_string()));
        params.insert("Options", hex_only(self.transmit_options));

        if let Some(payload) = &self.payload {
            params.insert("RF data", payload.to_string());
        }

        params
    }
}

impl<A> PackedStructSlice for TransmitFrame<A>
where
    A: Destination,
{
    #[tracing::instrument(fields(output.len = output.len()), skip(self, output), err)]
    fn pack_to_slice(&self, output: &mut [u8]) -> PackingResult<()> {
        let size = Self::packed_bytes_size(Some(self))?;
        if size > output.len() {
            return Err(PackingError::BufferTooSmall);
        }

        let (header, data) = output[..size].split_at_mut(Self::HEADER_SIZE);
        let (id, rest) = header.split_at_mut(1);
        let (destination, options) = rest.split_at_mut(A::SIZE);

        id[0] = self.frame_id;
        self.destination.pack_to_slice(destination)?;
        options[0] = self.transmit_options;

        if let Some(payload) = &self.payload {
            data.copy_from_slice(payload.as_bytes());
        }

        Ok(())
    }

    fn unpack_from_slice(src: &[u8]) -> PackingResult<Self> {
        if Self::HEADER_SIZE > src.len() {
            return Err(PackingError::BufferTooSmall);
        }

        let (header, data) = src.split_at(Self::HEADER_SIZE);

        let destination = A::unpack_from_slice(&header[1..1 + A::SIZE])?;

        Ok(Self {
            frame_id: header[0],
            destination,
            transmit_options: header[1 + A::SIZE],
            payload: (!data.is_empty()).then(|| Payload::from(data)),
        })
    }

    fn packed_bytes_size(opt_self: Option<&Self>) -> PackingResult<usize> {
        let slf = opt_self.ok_or(PackingError::InstanceRequiredForSize)?;

        Ok(Self::HEADER_SIZE + slf.payload_len())
    }
}

/// Incremental construction of a [`TransmitFrame`].
///
/// Unlike [`TransmitFrame::new`], the destination can be left out here, which
/// [`build`](Self::build) reports as [`Error::MissingRequiredField`].
#[derive(Clone, Debug)]
pub struct TransmitBuilder<A> {
    frame_id:         Option<i64>,
    destination:      Option<A>,
    transmit_options: i64,
    payload:          Option<Payload>,
}

impl<A> Default for TransmitBuilder<A> {
    fn default() -> Self {
        Self {
            frame_id:         None,
            destination:      None,
            transmit_options: 0,
            payload:          None,
        }
    }
}

impl<A> TransmitBuilder<A>
where
    A: Destination,
{
    #[inline]
    pub fn frame_id(mut self, frame_id: impl Into<i64>) -> Self {
        self.frame_id = Some(frame_id.into());
        self
    }

    #[inline]
    pub fn destination(mut self, destination: A) -> Self {
        self.destination = Some(destination);
        self
    }

    #[inline]
    pub fn transmit_options(mut self, transmit_options: impl Into<i64>) -> Self {
        self.transmit_options = transmit_options.into();
        self
    }

    #[inline]
    pub fn payload(mut self, data: impl AsRef<[u8]>) -> Self {
        self.payload = Some(Payload::from(data));
        self
    }

    pub fn build(self) -> Result<TransmitFrame<A>> {
        let destination = self.destination.ok_or(Error::MissingRequiredField("destination address"))?;
        let frame_id = self.frame_id.ok_or(Error::MissingRequiredField("frame id"))?;

        let mut frame = TransmitFrame::new(frame_id, destination, self.transmit_options)?;
        frame.payload = self.payload;

        Ok(frame)
    }
}

#[cfg(test)]
mod test {
    use proptest::prelude::*;

    use super::*;
    use crate::transmit_options;

    fn addr() -> Address64 {
        Address64::new([0, 1, 2, 3, 4, 5, 6, 7])
    }

    #[test]
    fn frame_id_bounds() {
        assert!(Tx64Frame::new(0, addr(), 0).is_ok());
        assert!(Tx64Frame::new(255, addr(), 0).is_ok());

        for bad in [-1, 256] {
            let err = Tx64Frame::new(bad, addr(), 0).unwrap_err();

            assert!(err.is_invalid_argument());
            assert_eq!(err, Error::InvalidArgument {
                field: "frame id",
                value: bad,
                min:   0,
                max:   255,
            });
        }
    }

    #[test]
    fn options_bounds() {
        assert!(Tx64Frame::new(1, addr(), 255).is_ok());

        let err = Tx64Frame::new(1, addr(), 256).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument {
            field: "transmit options",
            ..
        }));

        assert!(Tx16Frame::new(1, Address16::BROADCAST, -1).unwrap_err().is_invalid_argument());
    }

    #[test]
    fn builder_requires_destination() {
        let err = Tx64Frame::builder().frame_id(1).build().unwrap_err();
        assert_eq!(err, Error::MissingRequiredField("destination address"));
        assert!(!err.is_invalid_argument());

        let err = Tx64Frame::builder().destination(addr()).build().unwrap_err();
        assert_eq!(err, Error::MissingRequiredField("frame id"));

        let err = Tx64Frame::builder().frame_id(1).destination(addr()).transmit_options(256).build();
        assert!(err.unwrap_err().is_invalid_argument());
    }

    #[test]
    fn serialize_without_payload() -> eyre::Result<()> {
        let frame = Tx64Frame::new(1, addr(), 0)?;

        assert_eq!(frame.serialize_payload()?, vec![
            0x01, 0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x00
        ]);
        assert!(frame.needs_frame_id());
        assert_eq!(frame.frame_type(), FrameType::Tx64);

        Ok(())
    }

    #[test]
    fn serialize_with_payload() -> eyre::Result<()> {
        let frame = Tx16Frame::builder()
            .frame_id(0x52)
            .destination(Address16::new([0x12, 0x34]))
            .transmit_options(transmit_options::DISABLE_ACK)
            .payload(b"hi")
            .build()?;

        assert_eq!(frame.serialize_payload()?, vec![0x52, 0x12, 0x34, 0x01, b'h', b'i']);
        assert_eq!(frame.frame_type(), FrameType::Tx16);

        Ok(())
    }

    #[test]
    fn payload_replacement() -> eyre::Result<()> {
        let mut frame = Tx64Frame::new(1, addr(), 0)?;
        let bare = frame.serialize_payload()?;

        let mut scratch = vec![0xde, 0xad];
        frame.set_payload(&scratch);
        scratch[0] = 0x00;

        let first = frame.serialize_payload()?;
        assert_eq!(first.len(), 12);
        assert_eq!(&first[10..], &[0xde, 0xad]);
        assert_eq!(frame.serialize_payload()?, first);

        frame.set_payload([0xbeu8, 0xef, 0x00]);
        assert_eq!(&frame.serialize_payload()?[10..], &[0xbe, 0xef, 0x00]);

        assert!(frame.clear_payload().is_some());
        assert_eq!(frame.serialize_payload()?, bare);

        Ok(())
    }

    #[test]
    fn empty_payload_is_present_but_adds_nothing() -> eyre::Result<()> {
        let frame = Tx64Frame::new(1, addr(), 0)?.with_payload(b"");

        assert_eq!(frame.serialize_payload()?.len(), 10);
        assert_eq!(frame.parameters().get("RF data"), Some(""));

        Ok(())
    }

    #[test]
    fn parameter_listing() -> eyre::Result<()> {
        let frame = Tx64Frame::new(1, "0013A20040A1B2C3".parse()?, 0)?;

        // accessor calls must not affect ordering
        let _ = frame.payload();
        let _ = frame.transmit_options();
        let _ = frame.destination();

        let params = frame.parameters();
        assert_eq!(params.iter().collect::<Vec<_>>(), vec![
            ("Frame ID", "01 (1)"),
            ("64-bit dest. address", "00 13 A2 00 40 A1 B2 C3"),
            ("Options", "00"),
        ]);

        let params = frame.with_payload([0x48u8, 0x49]).parameters();
        assert_eq!(params.labels().collect::<Vec<_>>(), [
            "Frame ID",
            "64-bit dest. address",
            "Options",
            "RF data"
        ]);
        assert_eq!(params.get("RF data"), Some("48 49"));

        Ok(())
    }

    #[test]
    fn short_input_does_not_unpack() {
        assert_eq!(Tx16Frame::unpack_from_slice(&[1, 2, 3]), Err(PackingError::BufferTooSmall));
    }

    #[test]
    fn shareable() {
        fn assert_send_sync<T: Send + Sync>() {}

        assert_send_sync::<Tx64Frame>();
        assert_send_sync::<Tx16Frame>();
    }

    proptest! {
        #[test]
        fn pack_unpack_equivalence(frame in tx64_strategy()) {
            let packed = frame.pack_to_vec();
            prop_assert!(packed.is_ok());
            let packed = packed.unwrap();

            let unpacked = Tx64Frame::unpack_from_slice(&packed);
            prop_assert_eq!(unpacked, Ok(frame));
        }

        #[test]
        fn unpack_pack_equivalence(data in proptest::collection::vec(any::<u8>(), 4..40)) {
            if let Ok(frame) = Tx16Frame::unpack_from_slice(&data) {
                prop_assert_eq!(frame.pack_to_vec(), Ok(data));
            }
        }
    }

    prop_compose! {
        fn tx64_strategy()(
            frame_id in any::<u8>(),
            destination in any::<[u8; 8]>(),
            transmit_options in any::<u8>(),
            payload in proptest::option::of(proptest::collection::vec(any::<u8>(), 1..64)),
        ) -> Tx64Frame {
            let frame = Tx64Frame::new(frame_id, Address64::new(destination), transmit_options).unwrap();

            match payload {
                Some(p) => frame.with_payload(p),
                None => frame,
            }
        }
    }
}
