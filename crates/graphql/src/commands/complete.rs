use crate::output_utils;
use crate::output_utils::OutputFormat;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use anyhow::Context;
use libgraphql_completion::completion::ColumnEncoding;
use libgraphql_completion::completion::CompletionProvider;
use libgraphql_completion::completion::CompletionRequest;
use libgraphql_completion::completion::CursorPosition;
use libgraphql_completion::schema::SchemaBuilder;
use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;
use walkdir::WalkDir;

#[derive(Debug, clap::Args)]
pub(crate) struct CompleteCmd {
    #[arg(
        help="Output format for the completion candidates.",
        long,
        value_enum,
        default_value_t=OutputFormat::Text,
    )]
    format: OutputFormat,

    #[arg(
        default_values_t=[
            "graphql".to_string(),
            "graphqls".to_string(),
        ],
        help="Set of file extensions to filter to when searching for schema \
             files within a directory.",
        long,
        value_delimiter = ',',
    )]
    graphql_file_exts: Vec<String>,

    #[arg(
        help="Paths to one or more GraphQL schema files or directories \
             containing GraphQL schema files.",
        long="schema",
        required=true,
    )]
    schema_paths: Vec<PathBuf>,

    #[arg(
        help="Interpret COLUMN as UTF-16 code units (as LSP clients do) \
             rather than characters.",
        long,
    )]
    utf16: bool,

    #[arg(help="The GraphQL document to complete in.")]
    file: PathBuf,

    #[arg(help="0-based line of the cursor.")]
    line: usize,

    #[arg(help="0-based column of the cursor.")]
    column: usize,
}

impl CompleteCmd {
    fn collect_schema_files(&self) -> anyhow::Result<Vec<PathBuf>> {
        // Normalize the set of file extensions to filter with
        let graphql_file_exts: HashSet<String> =
            self.graphql_file_exts.iter()
                .map(|ext| ext.trim_start_matches('.').to_ascii_lowercase())
                .collect();

        log::debug!("Scanning {} schema paths...", self.schema_paths.len());
        let mut file_paths = vec![];
        for path in &self.schema_paths {
            // A file named explicitly is loaded whatever its extension.
            if path.is_file() {
                file_paths.push(canonicalize(path)?);
                continue;
            }

            for entry in WalkDir::new(path.as_path()).follow_links(true) {
                let entry = entry.with_context(|| {
                    format!("Failed to scan schema files under {path:#?}")
                })?;
                let entry_path = entry.path();
                if !entry.file_type().is_file() {
                    log::trace!("Skipping non-file: {entry_path:#?}.");
                    continue;
                }

                if entry_path.extension()
                    .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
                    .is_some_and(|ext| graphql_file_exts.contains(&ext)) {
                    log::trace!("Found schema file at {entry_path:#?}.");
                    file_paths.push(canonicalize(entry_path)?);
                }
            }
        }

        file_paths.sort();
        file_paths.dedup();
        log::debug!("Found {} GraphQL schema files.", file_paths.len());
        Ok(file_paths)
    }

    fn complete(&self) -> anyhow::Result<String> {
        let schema_files = self.collect_schema_files()?;
        if schema_files.is_empty() {
            anyhow::bail!(
                "No schema files found (looked for {}).",
                self.graphql_file_exts.iter()
                    .map(|ext| format!("`{ext}`"))
                    .collect::<Vec<_>>()
                    .join(", "),
            );
        }

        let schema = SchemaBuilder::new()
            .load_files(schema_files)?
            .build()?;

        let text = std::fs::read_to_string(&self.file).with_context(|| {
            format!("Failed to read GraphQL document {:#?}", self.file)
        })?;
        let column_encoding =
            if self.utf16 {
                ColumnEncoding::Utf16CodeUnits
            } else {
                ColumnEncoding::Utf8Chars
            };
        let request = CompletionRequest::new(
            self.file.as_path(),
            text,
            CursorPosition::new(self.line, self.column),
        ).with_column_encoding(column_encoding);

        let candidates = CompletionProvider::new(&schema).complete(&request);
        log::debug!("Computed {} completion candidates.", candidates.len());
        output_utils::render_candidates(&candidates, self.format)
    }
}

#[inherent::inherent]
impl RunnableCommand for CompleteCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        match self.complete() {
            Ok(output) => CommandResult::stdout(format_args!("{output}")),
            Err(e) => CommandResult::stderr(format_args!(
                "{} Failed to compute completions: {e:#}",
                output_utils::RED_X,
            )),
        }
    }
}

fn canonicalize(path: &Path) -> anyhow::Result<PathBuf> {
    std::fs::canonicalize(path)
        .with_context(|| format!("Failed to resolve {path:#?}"))
}
