use libgraphql_completion::completion::CompletionCandidate;

pub(crate) const RED_X: &str = "\u{274c}";

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, clap::ValueEnum)]
pub(crate) enum OutputFormat {
    /// One `kind label detail` line per candidate.
    #[default]
    Text,
    /// A JSON array of candidates.
    Json,
}

pub(crate) fn render_candidates(
    candidates: &[CompletionCandidate],
    format: OutputFormat,
) -> anyhow::Result<String> {
    Ok(match format {
        OutputFormat::Json => serde_json::to_string_pretty(candidates)?,
        OutputFormat::Text => {
            let label_width = candidates.iter()
                .map(|candidate| candidate.label.len())
                .max()
                .unwrap_or(0);
            candidates.iter()
                .map(|candidate| {
                    format!(
                        "{:<8} {:<label_width$} {}",
                        candidate.kind.as_str(),
                        candidate.label,
                        candidate.detail,
                    ).trim_end().to_string()
                })
                .collect::<Vec<_>>()
                .join("\n")
        },
    })
}
