//! Output sinks for generated rules.
//!
//! A [`StyleSink`] receives finished blocks of rule text in order. Emitters
//! only ever append; they never read back or rewind.

use std::io::{self, Write};

use crate::error::{ExportError, Result};

/// Append-only receiver of stylesheet text.
pub trait StyleSink {
    /// Appends a block of text.
    fn append(&mut self, text: &str);
}

impl StyleSink for String {
    fn append(&mut self, text: &str) {
        self.push_str(text);
    }
}

impl<S: StyleSink + ?Sized> StyleSink for &mut S {
    fn append(&mut self, text: &str) {
        (**self).append(text);
    }
}

/// Sink that writes through to an [`io::Write`] destination.
///
/// Appending cannot fail, so the first I/O error is held back and every
/// later append is dropped. [`IoSink::finish`] reports it.
///
/// ```rust
/// use pdfcss::{IoSink, StyleSink};
///
/// let mut sink = IoSink::new(Vec::new());
/// sink.append(".c0{color:rgb(0,0,0);}\n");
/// let bytes = sink.finish().unwrap();
/// assert_eq!(bytes, b".c0{color:rgb(0,0,0);}\n");
/// ```
#[derive(Debug)]
pub struct IoSink<W: Write> {
    writer: W,
    error: Option<io::Error>,
}

impl<W: Write> IoSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            error: None,
        }
    }

    /// Returns `true` once a write has failed.
    pub fn has_failed(&self) -> bool {
        self.error.is_some()
    }

    /// Flushes the writer and returns it, or the first error encountered.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::Io`] if any append or the final flush failed.
    pub fn finish(self) -> Result<W> {
        let IoSink { mut writer, error } = self;
        if let Some(err) = error {
            return Err(ExportError::Io(err));
        }
        writer.flush()?;
        Ok(writer)
    }
}

impl<W: Write> StyleSink for IoSink<W> {
    fn append(&mut self, text: &str) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = self.writer.write_all(text.as_bytes()) {
            log::error!("stylesheet write failed: {}", err);
            self.error = Some(err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct FailingWriter {
        accepted: usize,
        limit: usize,
    }

    impl Write for FailingWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.accepted + buf.len() > self.limit {
                return Err(io::Error::new(io::ErrorKind::Other, "disk full"));
            }
            self.accepted += buf.len();
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_string_sink_appends_in_order() {
        let mut sink = String::new();
        sink.append("a");
        sink.append("b");
        assert_eq!(sink, "ab");
    }

    #[test]
    fn test_mut_ref_forwards() {
        fn emit<S: StyleSink>(mut sink: S) {
            sink.append("x");
        }

        let mut out = String::new();
        emit(&mut out);
        emit(&mut out);
        assert_eq!(out, "xx");
    }

    #[test]
    fn test_io_sink_round_trip() {
        let mut sink = IoSink::new(Vec::new());
        sink.append(".s0{font-size:10px;}\n");
        sink.append(".s1{font-size:12px;}\n");
        assert!(!sink.has_failed());
        let bytes = sink.finish().unwrap();
        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            ".s0{font-size:10px;}\n.s1{font-size:12px;}\n"
        );
    }

    #[test]
    fn test_io_sink_keeps_first_error() {
        let mut sink = IoSink::new(FailingWriter {
            accepted: 0,
            limit: 4,
        });
        sink.append("abc");
        sink.append("defg");
        sink.append("h");
        assert!(sink.has_failed());
        assert_eq!(sink.writer.accepted, 3);

        let err = sink.finish().unwrap_err();
        assert!(matches!(err, ExportError::Io(_)));
        assert!(err.to_string().contains("disk full"));
    }
}
