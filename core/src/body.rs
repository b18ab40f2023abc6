use std::fmt::{Debug, Formatter};
use std::io::Read;

use bytes::Buf;
use bytes::Bytes;

/// Body of a request that is about to be signed.
///
/// A request without a body and a request with a zero-length body are
/// different things on the wire for signing: only the latter carries a
/// checksum header. The distinction is explicit here instead of relying on
/// an empty stream.
#[derive(Default)]
pub enum Body {
    /// The request has no body at all.
    #[default]
    Empty,
    /// The request body, fully buffered. It may be zero-length.
    Bytes(Bytes),
    /// The request body as a stream that has not been read yet.
    Reader(Box<dyn Read + Send>),
}

impl Body {
    /// Build a body from a reader.
    pub fn from_reader(r: impl Read + Send + 'static) -> Self {
        Body::Reader(Box::new(r))
    }

    /// Returns `true` if the request carries a body, even a zero-length one.
    pub fn is_present(&self) -> bool {
        !matches!(self, Body::Empty)
    }

    /// Returns the buffered content, if any.
    ///
    /// Returns `None` for [`Body::Empty`] and for a reader that has not been
    /// buffered yet.
    pub fn as_bytes(&self) -> Option<&Bytes> {
        match self {
            Body::Bytes(bs) => Some(bs),
            _ => None,
        }
    }

    /// Buffer the body into memory.
    ///
    /// A reader is drained exactly once and replaced by [`Body::Bytes`]
    /// holding the same bytes, so the body can still be sent afterwards.
    /// Buffering an already buffered body is free.
    ///
    /// Returns `Ok(None)` for [`Body::Empty`]. On read failure the reader
    /// has been partially consumed and the request must not be sent.
    pub fn buffer(&mut self) -> std::io::Result<Option<&Bytes>> {
        if let Body::Reader(r) = self {
            let mut buf = Vec::new();
            r.read_to_end(&mut buf)?;
            *self = Body::Bytes(Bytes::from(buf));
        }

        Ok(self.as_bytes())
    }

    /// Returns the content length if it's known without reading.
    pub fn content_length(&self) -> Option<u64> {
        match self {
            Body::Empty => Some(0),
            Body::Bytes(bs) => Some(bs.len() as u64),
            Body::Reader(_) => None,
        }
    }

    /// Convert the body into a reader for the sender.
    pub fn into_reader(self) -> Box<dyn Read + Send> {
        match self {
            Body::Empty => Box::new(std::io::empty()),
            Body::Bytes(bs) => Box::new(bs.reader()),
            Body::Reader(r) => r,
        }
    }
}

impl Debug for Body {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Body::Empty => f.write_str("Empty"),
            Body::Bytes(bs) => f.debug_tuple("Bytes").field(&bs.len()).finish(),
            Body::Reader(_) => f.write_str("Reader"),
        }
    }
}

impl From<Bytes> for Body {
    fn from(value: Bytes) -> Self {
        Body::Bytes(value)
    }
}

impl From<Vec<u8>> for Body {
    fn from(value: Vec<u8>) -> Self {
        Body::Bytes(Bytes::from(value))
    }
}

impl From<String> for Body {
    fn from(value: String) -> Self {
        Body::Bytes(Bytes::from(value))
    }
}

impl From<&'static str> for Body {
    fn from(value: &'static str) -> Self {
        Body::Bytes(Bytes::from_static(value.as_bytes()))
    }
}

impl From<&'static [u8]> for Body {
    fn from(value: &'static [u8]) -> Self {
        Body::Bytes(Bytes::from_static(value))
    }
}
