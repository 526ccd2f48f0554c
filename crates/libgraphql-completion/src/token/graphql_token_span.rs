use crate::SourcePosition;

/// Represents the span of a token from start to end position.
///
/// The span is a half-open interval: `[start_inclusive, end_exclusive)`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GraphQLTokenSpan {
    pub start_inclusive: SourcePosition,
    pub end_exclusive: SourcePosition,
}

impl GraphQLTokenSpan {
    pub fn new(
        start_inclusive: SourcePosition,
        end_exclusive: SourcePosition,
    ) -> Self {
        Self {
            start_inclusive,
            end_exclusive,
        }
    }

    /// Returns `true` if the span covers no source text (e.g. `Eof`).
    pub fn is_empty(&self) -> bool {
        self.start_inclusive.byte_offset() == self.end_exclusive.byte_offset()
    }
}
