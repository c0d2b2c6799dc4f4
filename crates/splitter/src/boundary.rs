//! Declaration-line detection.

/// Matcher for declaration lines.
///
/// A declaration line opens a new embedded document inside the concatenated
/// blob. Matching is a literal byte-prefix test on the raw line, line
/// terminator included in the candidate but irrelevant to the prefix.
#[derive(Debug, Clone)]
pub struct Boundary {
    prefix: Vec<u8>,
}

impl Boundary {
    /// Create a matcher for the given literal prefix.
    pub fn new(prefix: &str) -> Self {
        Self {
            prefix: prefix.as_bytes().to_vec(),
        }
    }

    /// Check whether a raw line starts a new embedded document.
    pub fn matches(&self, line: &[u8]) -> bool {
        line.starts_with(&self.prefix)
    }
}
