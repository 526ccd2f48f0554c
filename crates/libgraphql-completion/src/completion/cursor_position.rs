use crate::SourcePosition;
use serde::Deserialize;
use serde::Serialize;

/// How the `column` of a [`CursorPosition`] counts characters.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub enum ColumnEncoding {
    /// Columns count Unicode scalar values.
    #[default]
    Utf8Chars,

    /// Columns count UTF-16 code units (the LSP default).
    Utf16CodeUnits,
}

impl ColumnEncoding {
    /// The `(line, column)` pair of `position` in this encoding.
    pub fn line_and_column(&self, position: &SourcePosition) -> (usize, usize) {
        let column = match self {
            Self::Utf8Chars => position.col_utf8(),
            Self::Utf16CodeUnits => position.col_utf16(),
        };
        (position.line(), column)
    }
}

/// A 0-based cursor location inside a document.
///
/// The cursor sits *between* characters: column 4 on `"{ us"` is just after
/// the `s`.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct CursorPosition {
    pub line: usize,
    pub column: usize,
}

impl CursorPosition {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    pub(crate) fn as_tuple(&self) -> (usize, usize) {
        (self.line, self.column)
    }
}
