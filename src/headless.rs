//! One-shot, non-interactive mode.
//!
//! Performs a single fetch and prints the normalized todos to stdout. Used
//! for scripting and for exercising the whole pipeline without a terminal.

use std::io::Write;

use todoview_core::{config::Config, Todo};
use todoview_fetch::Fetcher;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Aligned `ID / TASK / COMPLETED` columns.
    #[default]
    Table,
    /// One pretty-printed JSON array.
    Json,
    /// One JSON object per line.
    Jsonl,
}

/// Fetch once from the configured source and write the result to `out`.
/// Returns the number of todos written.
pub async fn run(config: &Config, format: OutputFormat, out: &mut impl Write) -> anyhow::Result<usize> {
    let fetcher = Fetcher::new(config.source.url(), config.source.timeout())?;
    let todos = fetcher.fetch_todos().await?;
    render(&todos, format, out)?;
    Ok(todos.len())
}

pub fn render(todos: &[Todo], format: OutputFormat, out: &mut impl Write) -> anyhow::Result<()> {
    match format {
        OutputFormat::Table => render_table(todos, out)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, todos)?;
            writeln!(out)?;
        }
        OutputFormat::Jsonl => {
            for todo in todos {
                serde_json::to_writer(&mut *out, todo)?;
                writeln!(out)?;
            }
        }
    }
    Ok(())
}

fn render_table(todos: &[Todo], out: &mut impl Write) -> std::io::Result<()> {
    let id_width = todos
        .iter()
        .map(|t| t.id.chars().count())
        .chain(std::iter::once("ID".len()))
        .max()
        .unwrap_or(2);
    let task_width = todos
        .iter()
        .map(|t| t.task.chars().count())
        .chain(std::iter::once("TASK".len()))
        .max()
        .unwrap_or(4);

    writeln!(out, "{:<id_width$}  {:<task_width$}  COMPLETED", "ID", "TASK")?;
    for todo in todos {
        writeln!(
            out,
            "{:<id_width$}  {:<task_width$}  {}",
            todo.id,
            todo.task,
            todo.completed_label()
        )?;
    }
    Ok(())
}
