//! Output rendering
//!
//! A `ResultSet` can be printed as jsonl, json, Markdown or bare paths.

use serde::Serialize;
use std::io::Write;

use crate::core::model::{Kind, ResultItem, ResultSet};

/// Output format, selected with `--format`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// One JSON object per line
    #[default]
    Jsonl,
    /// A single JSON array
    Json,
    /// Markdown sections for errors and files
    #[value(name = "md", alias = "markdown")]
    Markdown,
    /// Bare file paths, one per line
    Raw,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RenderConfig {
    pub format: OutputFormat,
    /// Indent JSON output
    pub pretty: bool,
}

pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    pub fn render(&self, results: &ResultSet) -> String {
        let items = &results.items;
        match self.config.format {
            OutputFormat::Jsonl => {
                let separator = if self.config.pretty { "\n\n" } else { "\n" };
                items
                    .iter()
                    .filter_map(|item| self.encode(item))
                    .collect::<Vec<_>>()
                    .join(separator)
            }
            OutputFormat::Json => self.encode(items).unwrap_or_else(|| "[]".to_string()),
            OutputFormat::Markdown => markdown(items),
            OutputFormat::Raw => file_paths(items).collect::<Vec<_>>().join("\n"),
        }
    }

    /// Write the rendered output followed by a newline; nothing at all when empty
    pub fn render_to<W: Write>(&self, results: &ResultSet, mut writer: W) -> std::io::Result<()> {
        let output = self.render(results);
        if output.is_empty() {
            return Ok(());
        }
        writer.write_all(output.as_bytes())?;
        writer.write_all(b"\n")
    }

    fn encode<T: Serialize + ?Sized>(&self, value: &T) -> Option<String> {
        let encoded = if self.config.pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        };
        encoded.ok()
    }
}

fn file_paths(items: &[ResultItem]) -> impl Iterator<Item = &str> {
    items
        .iter()
        .filter(|item| item.kind == Kind::File)
        .filter_map(|item| item.path.as_deref())
}

// Errors first, so a partial walk is obvious at the top of the document
fn markdown(items: &[ResultItem]) -> String {
    let failures: Vec<String> = items
        .iter()
        .filter(|item| item.kind == Kind::Error)
        .flat_map(|item| &item.errors)
        .map(|error| format!("- **{}**: {}", error.code, error.message))
        .collect();

    let files: Vec<String> = items
        .iter()
        .filter(|item| item.kind == Kind::File)
        .filter_map(|item| {
            let path = item.path.as_deref()?;
            Some(match item.meta.size {
                Some(size) => format!("- `{}` ({} bytes)", path, size),
                None => format!("- `{}`", path),
            })
        })
        .collect();

    let mut sections = Vec::new();
    if !failures.is_empty() {
        sections.push(format!("## Errors\n\n{}\n", failures.join("\n")));
    }
    if !files.is_empty() {
        sections.push(format!("## Files\n\n{}\n", files.join("\n")));
    }
    sections.join("\n")
}
