use std::borrow::Cow;

/// Trait for macros to convert owned/borrowed types to `Cow`.
///
/// `&str` and `String` have no `From` implementation into `Cow<_, [u8]>`.
/// Borrowing through `AsRef<[u8]>` would also borrow owned values, so owned
/// types go through this trait and stay owned.
pub trait BCowConvert<'a> {
    fn convert(self) -> Cow<'a, [u8]>;
}

impl<'a> BCowConvert<'a> for &'a [u8] {
    fn convert(self) -> Cow<'a, [u8]> {
        self.into()
    }
}

impl<'a, const N: usize> BCowConvert<'a> for &'a [u8; N] {
    fn convert(self) -> Cow<'a, [u8]> {
        self.as_slice().into()
    }
}

impl<'a> BCowConvert<'a> for &'a str {
    fn convert(self) -> Cow<'a, [u8]> {
        self.as_bytes().into()
    }
}

impl<'a> BCowConvert<'a> for &'a String {
    fn convert(self) -> Cow<'a, [u8]> {
        self.as_bytes().into()
    }
}

impl BCowConvert<'static> for String {
    fn convert(self) -> Cow<'static, [u8]> {
        self.into_bytes().into()
    }
}

impl BCowConvert<'static> for Vec<u8> {
    fn convert(self) -> Cow<'static, [u8]> {
        self.into()
    }
}

impl<'a> BCowConvert<'a> for Cow<'a, [u8]> {
    fn convert(self) -> Cow<'a, [u8]> {
        self
    }
}
