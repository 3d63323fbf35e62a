//! Library for encoding bencoded data.
//!
//! The encoder writes straight into any [`std::io::Write`] sink, so a response
//! can be produced field by field without building a document first.
//!
//! # Examples
//!
//! Encoding a value tree:
//!
//! ```rust
//!     #[macro_use]
//!     extern crate bencode;
//!
//!     fn main() {
//!         let message = (ben_map!{
//!             "lucky_number" => ben_int!(7),
//!             "lucky_string" => ben_bytes!("7")
//!         }).encode();
//!
//!         let data = b"d12:lucky_numberi7e12:lucky_string1:7e"; // cspell:disable-line
//!         assert_eq!(&data[..], &message[..]);
//!     }
//! ```
//!
//! Streaming fields into a sink:
//!
//! ```rust
//!     use std::time::Duration;
//!
//!     let mut sink = Vec::new();
//!
//!     bencode::encode_bytes(&mut sink, b"interval").unwrap();
//!     bencode::encode_duration(&mut sink, Duration::from_millis(1_800_500)).unwrap();
//!
//!     assert_eq!(&sink[..], b"8:intervali1800e");
//! ```
mod cow;
mod encode;
mod value;

/// Traits for implementation functionality.
pub mod inner {
    pub use crate::cow::BCowConvert;
}

pub use crate::encode::{encode, encode_bytes, encode_duration, encode_int, encode_uint};
pub use crate::value::Value;

const BEN_END: u8 = b'e';
const DICT_START: u8 = b'd';
const LIST_START: u8 = b'l';

const BYTE_LEN_END: u8 = b':';

/// Construct a `Value` dictionary by supplying string references as keys and `Value` as values.
///
/// Keys are kept in the order they are written.
#[macro_export]
macro_rules! ben_map {
( $($key:expr => $val:expr),* ) => {
        {
            use $crate::inner::BCowConvert;
            use $crate::Value;

            let mut bencode_map = Value::new_dict();
            $(
                bencode_map.insert(BCowConvert::convert($key), $val);
            )*

            bencode_map
        }
    }
}

/// Construct a `Value` list by supplying byte string like values.
#[macro_export]
macro_rules! ben_list {
    ( $($ben:expr),* ) => {
        {
            use $crate::inner::BCowConvert;
            use $crate::Value;

            let mut bencode_list = Value::new_list();
            $(
                bencode_list.push(BCowConvert::convert($ben));
            )*

            bencode_list
        }
    }
}

/// Construct `Value` bytes by supplying a type convertible to `Vec<u8>`.
#[macro_export]
macro_rules! ben_bytes {
    ( $ben:expr ) => {{
        use $crate::inner::BCowConvert;
        use $crate::Value;

        Value::new_bytes(BCowConvert::convert($ben))
    }};
}

/// Construct a `Value` integer from any integer width.
#[macro_export]
macro_rules! ben_int {
    ( $ben:expr ) => {{
        use $crate::Value;

        Value::from($ben)
    }};
}
