use serde::Deserialize;
use serde::Serialize;

/// The semantic category of a [`CompletionCandidate`]. Editors use it to pick
/// an icon.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CompletionCandidateKind {
    Argument,
    Field,
    Keyword,
    Type,
    Variable,
}

impl CompletionCandidateKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Argument => "argument",
            Self::Field => "field",
            Self::Keyword => "keyword",
            Self::Type => "type",
            Self::Variable => "variable",
        }
    }
}

impl std::fmt::Display for CompletionCandidateKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One suggestion offered at the cursor.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct CompletionCandidate {
    /// Text shown in the completion list.
    pub label: String,

    /// Short secondary text (`Query.user`, `ID!`, `OBJECT`).
    pub detail: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,

    pub kind: CompletionCandidateKind,

    /// Text to insert when it differs from [`label`](Self::label).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insert_text: Option<String>,
}

impl CompletionCandidate {
    pub fn new(label: impl Into<String>, kind: CompletionCandidateKind) -> Self {
        Self {
            label: label.into(),
            detail: String::new(),
            documentation: None,
            kind,
            insert_text: None,
        }
    }

    /// The text an editor should insert for this candidate.
    pub fn text_to_insert(&self) -> &str {
        self.insert_text.as_deref().unwrap_or(self.label.as_str())
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = detail.into();
        self
    }

    pub fn with_documentation(mut self, documentation: Option<String>) -> Self {
        self.documentation = documentation;
        self
    }

    pub fn with_insert_text(mut self, insert_text: impl Into<String>) -> Self {
        self.insert_text = Some(insert_text.into());
        self
    }
}
