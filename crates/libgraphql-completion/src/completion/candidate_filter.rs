use crate::token::GraphQLToken;

/// Case-sensitive substring matcher between the text typed at the cursor and
/// a candidate label.
///
/// A label matches when every whitespace-separated segment of the typed text
/// occurs somewhere in it. A filter built from no text matches everything.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct CandidateFilter {
    segments: Vec<String>,
}

impl CandidateFilter {
    pub fn new(text: &str) -> Self {
        Self {
            segments: text
                .split_whitespace()
                .map(|segment| segment.to_string())
                .collect(),
        }
    }

    /// Builds the filter from the token under the cursor. Only a name being
    /// typed narrows the candidates; punctuation (the `{` just typed), end of
    /// input or no token at all yield a filter that matches everything.
    pub fn from_cursor_token(cursor_token: Option<&GraphQLToken<'_>>) -> Self {
        match cursor_token.and_then(|token| token.kind.as_name()) {
            Some(name) => Self::new(name),
            None => Self::vacuous(),
        }
    }

    pub fn is_vacuous(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn matches(&self, label: &str) -> bool {
        self.segments
            .iter()
            .all(|segment| label.contains(segment.as_str()))
    }

    pub fn vacuous() -> Self {
        Self { segments: vec![] }
    }
}
