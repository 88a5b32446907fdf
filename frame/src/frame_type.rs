use packed_struct::prelude::*;

/// Tag identifying the payload layout of an API frame.
///
/// Tags are never reused for a different layout; new layouts get new tags.
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, PrimitiveEnum_u8, serde::Serialize, serde::Deserialize,
)]
#[repr(u8)]
pub enum FrameType {
    Tx64                    = 0x00,
    Tx16                    = 0x01,
    AtCommand               = 0x08,
    AtCommandQueue          = 0x09,
    TransmitRequest         = 0x10,
    ExplicitAddressing      = 0x11,
    RemoteAtCommandRequest  = 0x17,

    Rx64                    = 0x80,
    Rx16                    = 0x81,
    RxIo64                  = 0x82,
    RxIo16                  = 0x83,
    AtCommandResponse       = 0x88,
    TxStatus                = 0x89,
    ModemStatus             = 0x8a,
    TransmitStatus          = 0x8b,
    ReceivePacket           = 0x90,
    ExplicitRxIndicator     = 0x91,
    IoDataSampleRxIndicator = 0x92,
    RemoteAtCommandResponse = 0x97,

    Generic                 = 0xff,
}

impl FrameType {
    #[inline]
    pub fn from_tag(tag: u8) -> Option<Self> {
        Self::from_primitive(tag)
    }

    #[inline]
    pub fn tag(self) -> u8 {
        self.to_primitive()
    }

    pub fn name(self) -> &'static str {
        use FrameType::*;

        match self {
            Tx64 => "TX (Transmit) Request 64-bit address",
            Tx16 => "TX (Transmit) Request 16-bit address",
            AtCommand => "AT Command",
            AtCommandQueue => "AT Command Queue",
            TransmitRequest => "Transmit Request",
            ExplicitAddressing => "Explicit Addressing Command Frame",
            RemoteAtCommandRequest => "Remote AT Command Request",
            Rx64 => "RX (Receive) Packet 64-bit Address",
            Rx16 => "RX (Receive) Packet 16-bit Address",
            RxIo64 => "IO Data Sample RX 64-bit Address Indicator",
            RxIo16 => "IO Data Sample RX 16-bit Address Indicator",
            AtCommandResponse => "AT Command Response",
            TxStatus => "TX (Transmit) Status",
            ModemStatus => "Modem Status",
            TransmitStatus => "Transmit Status",
            ReceivePacket => "Receive Packet",
            ExplicitRxIndicator => "Explicit RX Indicator",
            IoDataSampleRxIndicator => "IO Data Sample RX Indicator",
            RemoteAtCommandResponse => "Remote Command Response",
            Generic => "Generic",
        }
    }
}
