use crate::completion::CursorPosition;
use std::path::Path;

/// Decides whether a cursor position lies in GraphQL text at all.
///
/// Hosts that embed GraphQL in other files (tagged template literals, Markdown
/// code fences) plug in their own implementation. Any
/// `Fn(&Path, &str, CursorPosition) -> bool` closure qualifies.
pub trait QueryLanguageRegion {
    fn is_query_language_region(
        &self,
        file_path: &Path,
        text: &str,
        position: CursorPosition,
    ) -> bool;
}

impl<F> QueryLanguageRegion for F
where
    F: Fn(&Path, &str, CursorPosition) -> bool,
{
    fn is_query_language_region(
        &self,
        file_path: &Path,
        text: &str,
        position: CursorPosition,
    ) -> bool {
        self(file_path, text, position)
    }
}

/// Treats a whole file as GraphQL when its extension is one of a configured
/// set (compared case-insensitively).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FileExtensionRegionGate {
    extensions: Vec<String>,
}

impl FileExtensionRegionGate {
    pub const DEFAULT_EXTENSIONS: [&str; 3] = ["graphql", "graphqls", "gql"];

    pub fn new<S: AsRef<str>>(extensions: impl IntoIterator<Item = S>) -> Self {
        Self {
            extensions: extensions
                .into_iter()
                .map(|ext| ext.as_ref().trim_start_matches('.').to_ascii_lowercase())
                .collect(),
        }
    }

    pub fn extensions(&self) -> &[String] {
        self.extensions.as_slice()
    }
}

impl Default for FileExtensionRegionGate {
    fn default() -> Self {
        Self::new(Self::DEFAULT_EXTENSIONS)
    }
}

impl QueryLanguageRegion for FileExtensionRegionGate {
    fn is_query_language_region(
        &self,
        file_path: &Path,
        _text: &str,
        _position: CursorPosition,
    ) -> bool {
        file_path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                self.extensions
                    .iter()
                    .any(|allowed| allowed.eq_ignore_ascii_case(ext))
            })
    }
}
