use std::fmt;

/// Why a LISON document was rejected.
///
/// Deliberately flat: no position or path is carried, only which part of
/// the grammar failed.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ParseFailure {
    /// The source text is not valid JSON.
    BadJson,
    /// Image-level structure or domain violation.
    BadImage,
    /// An entry of `pens` is malformed.
    BadPen,
    /// An entry of `brushes` is malformed.
    BadBrush,
    /// A shape is malformed anywhere in its tree, or references a pen/brush
    /// that does not exist.
    BadShape,
}

impl ParseFailure {
    pub fn as_str(self) -> &'static str {
        match self {
            ParseFailure::BadJson => "malformed JSON",
            ParseFailure::BadImage => "malformed image",
            ParseFailure::BadPen => "malformed pen",
            ParseFailure::BadBrush => "malformed brush",
            ParseFailure::BadShape => "malformed shape",
        }
    }
}

impl fmt::Display for ParseFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::error::Error for ParseFailure {}
