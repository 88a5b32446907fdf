use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, structopt::StructOpt)]
#[structopt(about = "build and inspect radio module API frame payloads")]
pub struct Options {
    #[structopt(long, help = "multi-line log output on stderr")]
    pub pretty: bool,

    #[structopt(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, structopt::StructOpt)]
pub enum Command {
    #[structopt(about = "build a transmit frame and print its payload")]
    Encode(Encode),

    #[structopt(about = "decode a frame payload given as hex (argument or stdin)")]
    Decode(Decode),

    #[structopt(about = "print build information")]
    Version,
}

#[derive(Debug, Clone, PartialEq, Eq, structopt::StructOpt)]
pub struct Encode {
    #[structopt(help = "frame kind: tx64 or tx16")]
    pub kind: TxKind,

    #[structopt(long, allow_hyphen_values = true)]
    pub frame_id: i64,

    #[structopt(long = "dest", help = "destination address as hex")]
    pub destination: String,

    #[structopt(long, default_value = "0", allow_hyphen_values = true)]
    pub options: i64,

    #[structopt(long, conflicts_with = "data-hex", help = "RF data as text")]
    pub data: Option<String>,

    #[structopt(long, help = "RF data as hex")]
    pub data_hex: Option<String>,

    #[structopt(long, help = "print a JSON report instead of text")]
    pub json: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, structopt::StructOpt)]
pub struct Decode {
    #[structopt(
        long = "type",
        parse(try_from_str = parse_tag),
        help = "frame type tag: decimal, or hex with a 0x prefix"
    )]
    pub tag: u8,

    #[structopt(long, help = "interpret input as base64 instead of hex")]
    pub base64: bool,

    #[structopt(long, help = "print a JSON report instead of text")]
    pub json: bool,

    #[structopt(help = "payload; read from stdin when absent (whitespace is ignored)")]
    pub data: Option<String>,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TxKind {
    Tx64,
    Tx16,
}

impl FromStr for TxKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "tx64" => Ok(TxKind::Tx64),
            "tx16" => Ok(TxKind::Tx16),
            other => Err(format!("unknown frame kind {other:?} (expected tx64 or tx16)")),
        }
    }
}

fn parse_tag(s: &str) -> eyre::Result<u8> {
    let s = s.trim();

    if !codec::contains_non_digits(s) {
        return Ok(s.parse::<u8>()?);
    }

    match codec::hex_to_bytes(s)?.as_slice() {
        [tag] => Ok(*tag),
        other => Err(eyre::eyre!("frame type tag must be one byte (got {})", other.len())),
    }
}
