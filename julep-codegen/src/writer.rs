//! Sequential output sink for generated Go source.

use std::io::{self, Write};

use crate::{Error, Result};

/// Line-oriented writer with tab indentation and a first-error latch.
///
/// Generated Go flows through one of these per file. The first I/O failure
/// is recorded and every later write becomes a no-op, so emitters chain
/// freely without checking each write; the pass surfaces the recorded error
/// once from [`CodeWriter::finish`]. Output is append-only, so an aborted
/// pass needs no rollback.
#[derive(Debug)]
pub struct CodeWriter<W: Write> {
    out: W,
    indent: usize,
    err: Option<io::Error>,
}

impl<W: Write> CodeWriter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            indent: 0,
            err: None,
        }
    }

    /// Write a line at the current indentation level.
    pub fn line(&mut self, s: &str) -> &mut Self {
        if self.err.is_some() {
            return self;
        }
        for _ in 0..self.indent {
            self.write(b"\t");
        }
        self.write(s.as_bytes());
        self.write(b"\n");
        self
    }

    /// Write an empty line.
    pub fn blank(&mut self) -> &mut Self {
        self.write(b"\n");
        self
    }

    /// Increase the indentation level.
    pub fn indent(&mut self) -> &mut Self {
        self.indent += 1;
        self
    }

    /// Decrease the indentation level.
    pub fn dedent(&mut self) -> &mut Self {
        self.indent = self.indent.saturating_sub(1);
        self
    }

    /// Consume the writer, reporting the first recorded write failure.
    pub fn finish(self) -> Result<()> {
        match self.err {
            Some(err) => Err(Error::Io(err)),
            None => Ok(()),
        }
    }

    fn write(&mut self, bytes: &[u8]) {
        if self.err.is_some() {
            return;
        }
        if let Err(err) = self.out.write_all(bytes) {
            self.err = Some(err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Fails every write after the first `ok` bytes.
    struct FlakySink {
        ok: usize,
        written: Vec<u8>,
    }

    impl Write for FlakySink {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.written.len() + buf.len() > self.ok {
                return Err(io::Error::other("sink full"));
            }
            self.written.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_lines_and_indent() {
        let mut buf = Vec::new();
        let mut w = CodeWriter::new(&mut buf);
        w.line("func main() {").indent().line("return").dedent().line("}");
        w.finish().unwrap();
        assert_eq!(buf, b"func main() {\n\treturn\n}\n");
    }

    #[test]
    fn test_blank_line() {
        let mut buf = Vec::new();
        let mut w = CodeWriter::new(&mut buf);
        w.line("a").blank().line("b");
        w.finish().unwrap();
        assert_eq!(buf, b"a\n\nb\n");
    }

    #[test]
    fn test_first_error_latches() {
        let sink = FlakySink {
            ok: 2,
            written: Vec::new(),
        };
        let mut w = CodeWriter::new(sink);
        w.line("ab");
        w.line("this line is silently dropped");
        assert!(w.finish().is_err());
    }
}
