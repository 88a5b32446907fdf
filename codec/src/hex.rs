//! Conversions between byte sequences and hexadecimal text.
//!
//! Everything emitted here is uppercase. Parsing is case-insensitive and
//! tolerates surrounding whitespace, a `0x` prefix and an odd digit count
//! (a single `0` is prepended).

const PREFIX_LOWER: &str = "0x";
const PREFIX_UPPER: &str = "0X";

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Error {
    #[error("invalid hex character {character:?} at position {index}")]
    InvalidHexCharacter { character: char, index: usize },
}

pub type Result<T> = std::result::Result<T, Error>;

/// Two uppercase hex digits per byte, high nibble first.
#[inline]
pub fn bytes_to_hex(bytes: impl AsRef<[u8]>) -> String {
    ::hex::encode_upper(bytes)
}

/// [`bytes_to_hex`] for an optional buffer: no bytes, no text.
#[inline]
pub fn opt_bytes_to_hex<T>(bytes: Option<T>) -> Option<String>
where
    T: AsRef<[u8]>,
{
    bytes.map(bytes_to_hex)
}

#[inline]
pub fn byte_to_hex(value: u8) -> String {
    format!("{value:02X}")
}

/// Parse hex text into bytes.
///
/// Surrounding whitespace and a leading `0x`/`0X` are dropped, and odd-length
/// input is left-padded with a single `0` before pairing. Any other
/// non-hex character is rejected; the reported index points into `text` as
/// given.
#[tracing::instrument(level = "trace", err(Display))]
pub fn hex_to_bytes(text: &str) -> Result<Vec<u8>> {
    let leading_ws = text.len() - text.trim_start().len();
    let trimmed = text.trim();

    let (digits, offset) = match trimmed
        .strip_prefix(PREFIX_LOWER)
        .or_else(|| trimmed.strip_prefix(PREFIX_UPPER))
    {
        Some(rest) => (rest, leading_ws + PREFIX_LOWER.len()),
        None => (trimmed, leading_ws),
    };

    if let Some((index, character)) =
        digits.char_indices().find(|(_, c)| !c.is_ascii_hexdigit())
    {
        return Err(Error::InvalidHexCharacter {
            character,
            index: offset + index,
        });
    }

    let padded;
    let digits = if digits.len() % 2 != 0 {
        padded = format!("0{digits}");
        padded.as_str()
    } else {
        digits
    };

    // all characters were checked above, so only ascii hex digits remain
    let result = digits
        .as_bytes()
        .chunks_exact(2)
        .map(|pair| (nibble(pair[0]) << 4) | nibble(pair[1]))
        .collect();

    Ok(result)
}

#[inline]
fn nibble(c: u8) -> u8 {
    match c {
        b'0'..=b'9' => c - b'0',
        b'a'..=b'f' => c - b'a' + 10,
        b'A'..=b'F' => c - b'A' + 10,
        _ => unreachable!("nibble called on non-hex digit {c:#x}"),
    }
}

/// True if any byte of `text` falls outside `'0'..='9'`.
///
/// Hex letters count as non-digits: this answers "is this decimal?", not
/// "is this hex?".
#[inline]
pub fn contains_non_digits(text: &str) -> bool {
    !text.bytes().all(|b| b.is_ascii_digit())
}

/// Hex representation of `value` as a big-endian two's-complement `i32`.
///
/// Leading zero bytes are dropped, keeping at least `min_bytes` bytes of
/// output. Output is capped at the four bytes of the integer, so a
/// `min_bytes` above 4 behaves like 4.
///
/// ```
/// use apiframe_codec::hex::int_to_hex;
///
/// assert_eq!(int_to_hex(5, 1), "05");
/// assert_eq!(int_to_hex(5, 2), "0005");
/// assert_eq!(int_to_hex(300, 1), "012C");
/// ```
pub fn int_to_hex(value: i32, min_bytes: usize) -> String {
    let bytes = value.to_be_bytes();

    let skip = bytes
        .iter()
        .enumerate()
        .take_while(|&(i, &b)| b == 0 && bytes.len() - i > min_bytes)
        .count();

    bytes_to_hex(&bytes[skip..])
}

/// Split hex text into space-separated byte pairs, left-padding odd input
/// with a `0`.
pub fn pretty_hex(text: &str) -> String {
    let mut chars: Vec<char> = text.chars().collect();
    if chars.len() % 2 != 0 {
        chars.insert(0, '0');
    }

    let mut out = String::with_capacity(chars.len() / 2 * 3);

    for (i, pair) in chars.chunks(2).enumerate() {
        if i > 0 {
            out.push(' ');
        }

        out.extend(pair);
    }

    out
}

#[inline]
pub fn pretty_hex_bytes(bytes: impl AsRef<[u8]>) -> String {
    pretty_hex(&bytes_to_hex(bytes))
}
