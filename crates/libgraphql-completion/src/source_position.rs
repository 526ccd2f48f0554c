/// Source position information for a token, with dual column tracking.
///
/// This is a pure data struct with no mutation methods. Lexers are responsible
/// for computing position values as they scan input.
///
/// # Indexing Convention
///
/// **All position values are 0-based:**
/// - `line`: 0 = first line of the document
/// - `col_utf8`: UTF-8 character count within the current line
/// - `col_utf16`: UTF-16 code unit offset within the current line
/// - `byte_offset`: byte offset within the whole document
///
/// For ASCII text both columns are equal. Editors speaking LSP address columns
/// in UTF-16 code units, so completion requests can choose which column to
/// compare against (see
/// [`ColumnEncoding`](crate::completion::ColumnEncoding)).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SourcePosition {
    line: usize,
    col_utf8: usize,
    col_utf16: usize,
    byte_offset: usize,
}

impl SourcePosition {
    pub fn new(
        line: usize,
        col_utf8: usize,
        col_utf16: usize,
        byte_offset: usize,
    ) -> Self {
        Self {
            line,
            col_utf8,
            col_utf16,
            byte_offset,
        }
    }

    /// Returns the 0-based line number.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Returns the 0-based character count within the current line.
    ///
    /// Both 'a' (1 byte) and '🎉' (4 bytes) each add 1 to this count.
    pub fn col_utf8(&self) -> usize {
        self.col_utf8
    }

    /// Returns the 0-based UTF-16 code unit offset within the current line.
    ///
    /// '🎉' is a surrogate pair, so it adds 2 to this count.
    pub fn col_utf16(&self) -> usize {
        self.col_utf16
    }

    /// Returns the 0-based byte offset from document start.
    pub fn byte_offset(&self) -> usize {
        self.byte_offset
    }
}
