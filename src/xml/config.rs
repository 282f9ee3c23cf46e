use serde::{Deserialize, Serialize};

/// Output settings for an [`XmlWriter`](super::XmlWriter).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WriterConfig {
    /// Put every element on its own line.
    pub indent: bool,
    /// Character repeated for each nesting level.
    pub indent_char: u8,
    /// How many `indent_char`s make one level.
    pub indent_size: usize,
}

impl WriterConfig {
    /// Everything on a single line.
    #[must_use]
    pub fn compact() -> Self {
        Self {
            indent: false,
            ..Self::default()
        }
    }
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            indent: true,
            indent_char: b' ',
            indent_size: 4,
        }
    }
}
