use std::io::{self, Write};
use std::time::Duration;

use crate::value::Value;

/// Writes the bencoded representation of `value` into `sink`.
///
/// Bytes are written as soon as each field is known, nothing is buffered
/// here. Dictionary keys are written in the order they were inserted.
///
/// ```rust
/// use bencode::{ben_int, ben_map};
///
/// let mut sink = Vec::new();
///
/// bencode::encode(&mut sink, &ben_map! {
///     "complete" => ben_int!(2u32),
///     "downloaded" => ben_int!(7u32),
///     "incomplete" => ben_int!(1u32)
/// })
/// .unwrap();
///
/// // cspell:disable-next-line
/// assert_eq!(sink, b"d8:completei2e10:downloadedi7e10:incompletei1ee");
/// ```
///
/// # Errors
///
/// Will return the `io::Error` of the first failed write to the `sink`.
pub fn encode<W>(sink: &mut W, value: &Value<'_>) -> io::Result<()>
where
    W: Write + ?Sized,
{
    match value {
        Value::Bytes(bytes) => encode_bytes(sink, bytes),
        Value::Int(n) => encode_int(sink, *n),
        Value::UInt(n) => encode_uint(sink, *n),
        Value::Duration(duration) => encode_duration(sink, *duration),
        Value::Dict(entries) => {
            sink.write_all(&[crate::DICT_START])?;
            for (key, value) in entries {
                encode_bytes(sink, key)?;
                encode(sink, value)?;
            }
            sink.write_all(&[crate::BEN_END])
        }
        Value::List(items) => {
            sink.write_all(&[crate::LIST_START])?;
            for item in items {
                encode_bytes(sink, item)?;
            }
            sink.write_all(&[crate::BEN_END])
        }
    }
}

/// Writes a bencoded byte string: `<len>:<bytes>`.
///
/// # Errors
///
/// Will return the `io::Error` of the first failed write to the `sink`.
pub fn encode_bytes<W>(sink: &mut W, bytes: &[u8]) -> io::Result<()>
where
    W: Write + ?Sized,
{
    write!(sink, "{}", bytes.len())?;
    sink.write_all(&[crate::BYTE_LEN_END])?;
    sink.write_all(bytes)
}

/// Writes a bencoded signed integer: `i<n>e`.
///
/// # Errors
///
/// Will return the `io::Error` of the first failed write to the `sink`.
pub fn encode_int<W>(sink: &mut W, n: i64) -> io::Result<()>
where
    W: Write + ?Sized,
{
    write!(sink, "i{n}e")
}

/// Writes a bencoded unsigned integer: `i<n>e`.
///
/// # Errors
///
/// Will return the `io::Error` of the first failed write to the `sink`.
pub fn encode_uint<W>(sink: &mut W, n: u64) -> io::Result<()>
where
    W: Write + ?Sized,
{
    write!(sink, "i{n}e")
}

/// Writes the whole seconds of a `Duration` as a bencoded integer. The
/// sub-second part is truncated.
///
/// # Errors
///
/// Will return the `io::Error` of the first failed write to the `sink`.
pub fn encode_duration<W>(sink: &mut W, duration: Duration) -> io::Result<()>
where
    W: Write + ?Sized,
{
    encode_uint(sink, duration.as_secs())
}

pub(crate) fn encode_into_vec(value: &Value<'_>, bytes: &mut Vec<u8>) {
    // Writing into a `Vec` only fails on allocation failure, which aborts.
    let _ = encode(bytes, value);
}
