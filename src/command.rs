use std::io::{
    Read,
    Write,
};

use base64::Engine;
use tap::Pipe;

use frame::{
    Address16,
    Address64,
    Destination,
    Frame,
    FrameType,
    Parameters,
    TransmitFrame,
};

use crate::options::{
    Command,
    Decode,
    Encode,
    TxKind,
};

#[derive(Debug, serde::Serialize)]
struct Report {
    frame_type: FrameType,
    tag:        String,
    payload:    String,
    parameters: Parameters,
}

pub fn run(command: &Command, input: &mut impl Read, out: &mut impl Write) -> eyre::Result<()> {
    match command {
        Command::Encode(encode) => {
            let frame = util::trace_catch!(build(encode), "building frame")?;
            render(&frame, encode.json, out)
        },
        Command::Decode(decode) => {
            let payload = read_payload(decode, input)?;
            let frame = util::trace_catch!(
                Frame::decode(decode.tag, &payload),
                tag = decode.tag,
                "decoding frame"
            )?;

            render(&frame, decode.json, out)
        },
        Command::Version => {
            writeln!(
                out,
                "{} {} (built {}, rustc {} {})",
                util::build::PACKAGE,
                util::build::VERSION,
                util::build::BUILD_TIMESTAMP,
                util::build::RUSTC_SEMVER,
                util::build::RUSTC_COMMIT_HASH,
            )?;

            Ok(())
        },
    }
}

#[tracing::instrument(skip_all, fields(kind = ?encode.kind))]
fn build(encode: &Encode) -> eyre::Result<Frame> {
    let data = match (&encode.data, &encode.data_hex) {
        (Some(text), _) => Some(text.as_bytes().to_vec()),
        (None, Some(hex)) => Some(codec::hex_to_bytes(hex)?),
        (None, None) => None,
    };

    let frame = match encode.kind {
        TxKind::Tx64 => with_data(
            TransmitFrame::new(
                encode.frame_id,
                encode.destination.parse::<Address64>()?,
                encode.options,
            )?,
            data,
        )
        .pipe(Frame::Tx64),
        TxKind::Tx16 => with_data(
            TransmitFrame::new(
                encode.frame_id,
                encode.destination.parse::<Address16>()?,
                encode.options,
            )?,
            data,
        )
        .pipe(Frame::Tx16),
    };

    tracing::debug!(%frame, "built frame");

    Ok(frame)
}

fn with_data<A>(tx: TransmitFrame<A>, data: Option<Vec<u8>>) -> TransmitFrame<A>
where
    A: Destination,
{
    match data {
        Some(data) => tx.with_payload(data),
        None => tx,
    }
}

fn read_payload(decode: &Decode, input: &mut impl Read) -> eyre::Result<Vec<u8>> {
    let text = match &decode.data {
        Some(data) => data.clone(),
        None => {
            let mut s = String::new();
            input.read_to_string(&mut s)?;

            s
        },
    };

    let compact: String = text.split_whitespace().collect();

    let payload = if decode.base64 {
        base64::engine::general_purpose::STANDARD.decode(compact)?
    } else {
        codec::hex_to_bytes(&compact)?
    };

    Ok(payload)
}

fn render(frame: &Frame, json: bool, out: &mut impl Write) -> eyre::Result<()> {
    let payload = frame.serialize_payload()?;

    if json {
        let report = Report {
            frame_type: frame.frame_type(),
            tag:        codec::byte_to_hex(frame.frame_type().tag()),
            payload:    codec::bytes_to_hex(&payload),
            parameters: frame.parameters(),
        };

        serde_json::to_writer(&mut *out, &report)?;
        writeln!(out)?;

        return Ok(());
    }

    writeln!(
        out,
        "{} (0x{})",
        frame.frame_type().name(),
        codec::byte_to_hex(frame.frame_type().tag())
    )?;
    writeln!(out, "payload: {}", codec::bytes_to_hex(&payload))?;

    for (label, value) in frame.parameters().iter() {
        writeln!(out, "\t{label}: {value}")?;
    }

    Ok(())
}
