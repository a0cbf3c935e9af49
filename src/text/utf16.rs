//! UTF-16 view of the base text
//!
//! The JavaScript side addresses text in UTF-16 code units, so every offset
//! in this crate is a code-unit offset. Rust strings are UTF-8; this wrapper
//! keeps the encoded units around for slicing.

/// Immutable base text indexed by UTF-16 code units
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Utf16Text {
    units: Vec<u16>,
}

impl Utf16Text {
    pub fn new(text: &str) -> Self {
        Self {
            units: text.encode_utf16().collect(),
        }
    }

    /// Length in code units
    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    pub fn units(&self) -> &[u16] {
        &self.units
    }

    /// Decode the code units in `[start, end)`
    ///
    /// A surrogate pair cut in half decodes to U+FFFD. Out-of-range bounds
    /// yield an empty string.
    pub fn slice(&self, start: usize, end: usize) -> String {
        self.units
            .get(start..end)
            .map(String::from_utf16_lossy)
            .unwrap_or_default()
    }

    /// Offsets immediately after each `'\n'`
    pub fn line_starts(&self) -> impl Iterator<Item = usize> + '_ {
        self.units
            .iter()
            .enumerate()
            .filter(|(_, unit)| **unit == u16::from(b'\n'))
            .map(|(index, _)| index + 1)
    }
}

/// Length of a string in UTF-16 code units
pub fn utf16_len(text: &str) -> usize {
    text.encode_utf16().count()
}
