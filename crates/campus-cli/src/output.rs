//! Rendering of command results as aligned text tables or JSON.

use anyhow::Result;
use serde::Serialize;

/// Output mode selected by the global `--json` flag.
#[derive(Debug, Clone, Copy)]
pub struct Output {
    json: bool,
}

impl Output {
    pub fn new(json: bool) -> Self {
        Self { json }
    }

    /// Prints `value` as pretty JSON, or the text produced by `text`.
    pub fn show<T, F>(&self, value: &T, text: F) -> Result<()>
    where
        T: Serialize + ?Sized,
        F: FnOnce(&T) -> String,
    {
        if self.json {
            println!("{}", serde_json::to_string_pretty(value)?);
        } else {
            println!("{}", text(value));
        }
        Ok(())
    }

    /// Prints a confirmation for commands without a result body.
    pub fn done(&self, message: &str) -> Result<()> {
        self.show(&serde_json::json!({ "ok": true, "message": message }), |_| {
            message.to_string()
        })
    }
}

/// Formats rows under a header, padding every column to its widest cell.
pub fn table(headers: &[&str], rows: &[Vec<String>]) -> String {
    if rows.is_empty() {
        return "(none)".to_string();
    }

    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if let Some(width) = widths.get_mut(i) {
                *width = (*width).max(cell.chars().count());
            }
        }
    }

    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(render_row(headers.iter().copied(), &widths));
    for row in rows {
        lines.push(render_row(row.iter().map(String::as_str), &widths));
    }
    lines.join("\n")
}

fn render_row<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    cells
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}

/// `key: value` lines for a single record.
pub fn details(fields: &[(&str, String)]) -> String {
    let width = fields.iter().map(|(k, _)| k.len() + 1).max().unwrap_or(0);
    fields
        .iter()
        .map(|(key, value)| format!("{:<width$}  {value}", format!("{key}:")))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn or_dash(value: Option<impl ToString>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_aligns_columns() {
        let rendered = table(
            &["ID", "TITLE"],
            &[
                vec!["1".into(), "Algorithms".into()],
                vec!["42".into(), "AI".into()],
            ],
        );
        assert_eq!(rendered, "ID  TITLE\n1   Algorithms\n42  AI");
    }

    #[test]
    fn test_empty_table() {
        assert_eq!(table(&["ID"], &[]), "(none)");
    }

    #[test]
    fn test_details() {
        let rendered = details(&[("id", "7".into()), ("email", "a@b.c".into())]);
        assert_eq!(rendered, "id:     7\nemail:  a@b.c");
    }

    #[test]
    fn test_or_dash() {
        assert_eq!(or_dash(Some(18.5)), "18.5");
        assert_eq!(or_dash(None::<f64>), "-");
    }
}
