//! The UTF-16 text payload exchanged with the clipboard.

/// An owned, NUL-terminated UTF-16 string.
///
/// This is the unit of ownership handed to a clipboard backend. A successful
/// set moves it into the clipboard; a rejected set hands it back to the
/// caller (see [`Rejected`](crate::clipboard::Rejected)).
///
/// # Example
///
/// ```
/// use clipio::Utf16Payload;
///
/// let payload = Utf16Payload::from_text("hi");
/// assert_eq!(payload.text_units(), &[0x68, 0x69]);
/// assert_eq!(payload.as_units(), &[0x68, 0x69, 0]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Utf16Payload {
    units: Vec<u16>,
}

impl Utf16Payload {
    /// Creates a payload from code units, appending a terminator if missing.
    pub fn from_units(mut units: Vec<u16>) -> Self {
        if units.last() != Some(&0) {
            units.push(0);
        }
        Self { units }
    }

    /// Creates a payload from a Rust string.
    pub fn from_text(text: &str) -> Self {
        Self::from_units(text.encode_utf16().chain(Some(0)).collect())
    }

    /// Returns the text units, without the terminator.
    pub fn text_units(&self) -> &[u16] {
        &self.units[..self.units.len() - 1]
    }

    /// Returns all units, including the terminator.
    pub fn as_units(&self) -> &[u16] {
        &self.units
    }

    /// Returns the number of text units.
    pub fn len(&self) -> usize {
        self.units.len() - 1
    }

    /// Returns `true` if the payload holds no text.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Decodes the text, replacing unpaired surrogates with U+FFFD.
    pub fn to_string_lossy(&self) -> String {
        String::from_utf16_lossy(self.text_units())
    }

    /// Consumes the payload and returns its units, terminator included.
    pub fn into_units(self) -> Vec<u16> {
        self.units
    }
}
