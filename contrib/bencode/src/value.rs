use std::borrow::Cow;
use std::time::Duration;

use crate::encode;

/// A value that can be bencoded.
///
/// The set of kinds is closed: anything the encoder accepts has a variant
/// here, and the encoder dispatches with an exhaustive `match`.
#[derive(Debug, Eq, PartialEq, Clone, Hash)]
pub enum Value<'a> {
    /// Bencode Bytes.
    Bytes(Cow<'a, [u8]>),
    /// Bencode Integer from any signed integer width.
    Int(i64),
    /// Bencode Integer from any unsigned integer width.
    UInt(u64),
    /// Bencode Integer holding the whole seconds of a `Duration`.
    Duration(Duration),
    /// Bencode Dictionary. Entries are encoded in insertion order.
    Dict(Vec<(Cow<'a, [u8]>, Value<'a>)>),
    /// Bencode List of byte strings.
    List(Vec<Cow<'a, [u8]>>),
}

impl<'a> Value<'a> {
    /// Create a new, empty dictionary.
    #[must_use]
    pub fn new_dict() -> Value<'a> {
        Value::Dict(Vec::new())
    }

    /// Create a new, empty list.
    #[must_use]
    pub fn new_list() -> Value<'a> {
        Value::List(Vec::new())
    }

    /// Create a new `Value` representing a `[u8]`.
    #[must_use]
    pub fn new_bytes(value: Cow<'a, [u8]>) -> Value<'a> {
        Value::Bytes(value)
    }

    /// Appends an entry to a dictionary. The key is not checked against
    /// existing keys and the entries are never sorted.
    ///
    /// Returns `false` if the value is not a dictionary.
    pub fn insert(&mut self, key: Cow<'a, [u8]>, value: Value<'a>) -> bool {
        match self {
            Value::Dict(entries) => {
                entries.push((key, value));
                true
            }
            _ => false,
        }
    }

    /// Appends a byte string to a list.
    ///
    /// Returns `false` if the value is not a list.
    pub fn push(&mut self, item: Cow<'a, [u8]>) -> bool {
        match self {
            Value::List(items) => {
                items.push(item);
                true
            }
            _ => false,
        }
    }

    /// Encode the `Value` into a buffer representing the bencode.
    #[must_use]
    pub fn encode(&self) -> Vec<u8> {
        let mut buffer = Vec::new();

        encode::encode_into_vec(self, &mut buffer);

        buffer
    }
}

macro_rules! impl_from_signed {
    ($($t:ty),*) => {
        $(
            impl<'a> From<$t> for Value<'a> {
                fn from(value: $t) -> Self {
                    Value::Int(i64::from(value))
                }
            }
        )*
    };
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {
        $(
            impl<'a> From<$t> for Value<'a> {
                fn from(value: $t) -> Self {
                    Value::UInt(u64::from(value))
                }
            }
        )*
    };
}

impl_from_signed!(i8, i16, i32, i64);
impl_from_unsigned!(u8, u16, u32, u64);

impl<'a> From<isize> for Value<'a> {
    #[allow(clippy::cast_possible_truncation)]
    fn from(value: isize) -> Self {
        // `isize` is at most 64 bits wide on every supported target.
        Value::Int(value as i64)
    }
}

impl<'a> From<usize> for Value<'a> {
    #[allow(clippy::cast_possible_truncation)]
    fn from(value: usize) -> Self {
        Value::UInt(value as u64)
    }
}

impl<'a> From<Duration> for Value<'a> {
    fn from(value: Duration) -> Self {
        Value::Duration(value)
    }
}

impl<'a> From<&'a str> for Value<'a> {
    fn from(value: &'a str) -> Self {
        Value::Bytes(Cow::Borrowed(value.as_bytes()))
    }
}

impl<'a> From<String> for Value<'a> {
    fn from(value: String) -> Self {
        Value::Bytes(Cow::Owned(value.into_bytes()))
    }
}

impl<'a> From<&'a [u8]> for Value<'a> {
    fn from(value: &'a [u8]) -> Self {
        Value::Bytes(Cow::Borrowed(value))
    }
}

impl<'a> From<Vec<u8>> for Value<'a> {
    fn from(value: Vec<u8>) -> Self {
        Value::Bytes(Cow::Owned(value))
    }
}
