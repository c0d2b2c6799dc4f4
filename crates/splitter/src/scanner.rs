//! Streaming sub-document scanner.
//!
//! Single pass over a line-oriented reader, yielding one complete
//! [`SubDocument`] per embedded document. The scanner only buffers the
//! sub-document currently being accumulated, so memory use is bounded by the
//! largest embedded document, not the blob.

use crate::boundary::Boundary;
use crate::types::SubDocument;
use std::io::BufRead;

/// Iterator over the sub-documents of a concatenated blob.
///
/// State machine per line:
/// - first declaration line seen: marks the start of sub-document 0, nothing
///   is flushed (any lines already buffered stay with sub-document 0);
/// - later declaration line: the current buffer is yielded and the
///   declaration line seeds the next buffer;
/// - any other line: appended to the current buffer.
///
/// End of input yields whatever remains. A blob with no declaration lines
/// therefore yields exactly one sub-document holding the whole input, and an
/// empty blob yields none.
pub struct Scanner<R> {
    reader: R,
    boundary: Boundary,
    // Declaration line that terminated the previous sub-document; it opens
    // the next one.
    pending: Option<Vec<u8>>,
    started: bool,
    next_ordinal: usize,
    declarations: u64,
    lines_read: u64,
    bytes_read: u64,
    done: bool,
}

impl<R: BufRead> Scanner<R> {
    /// Create a scanner over a line-oriented reader.
    pub fn new(reader: R, boundary: Boundary) -> Self {
        Self {
            reader,
            boundary,
            pending: None,
            started: false,
            next_ordinal: 0,
            declarations: 0,
            lines_read: 0,
            bytes_read: 0,
            done: false,
        }
    }

    /// Declaration lines seen so far (total once the iterator is exhausted).
    pub fn declaration_count(&self) -> u64 {
        self.declarations
    }

    /// Lines read so far.
    pub fn lines_read(&self) -> u64 {
        self.lines_read
    }

    /// Bytes read so far.
    pub fn bytes_read(&self) -> u64 {
        self.bytes_read
    }

    fn emit(&mut self, lines: Vec<Vec<u8>>) -> SubDocument {
        let ordinal = self.next_ordinal;
        self.next_ordinal += 1;
        SubDocument { ordinal, lines }
    }
}

impl<R: BufRead> Iterator for Scanner<R> {
    type Item = std::io::Result<SubDocument>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let mut lines: Vec<Vec<u8>> = match self.pending.take() {
            Some(declaration) => vec![declaration],
            None => Vec::new(),
        };

        loop {
            let mut line = Vec::new();
            match self.reader.read_until(b'\n', &mut line) {
                Err(e) => {
                    self.done = true;
                    return Some(Err(e));
                }
                Ok(0) => {
                    self.done = true;
                    if lines.is_empty() {
                        return None;
                    }
                    return Some(Ok(self.emit(lines)));
                }
                Ok(n) => {
                    self.lines_read += 1;
                    self.bytes_read += n as u64;

                    if self.boundary.matches(&line) {
                        self.declarations += 1;
                        if self.started {
                            // This declaration opens the next sub-document;
                            // everything buffered so far is complete.
                            self.pending = Some(line);
                            return Some(Ok(self.emit(lines)));
                        }
                        self.started = true;
                        lines.push(line);
                    } else {
                        lines.push(line);
                    }
                }
            }
        }
    }
}
