//! Crossterm-backed implementation of the core `Output` trait.

use crossterm::style::{Color, Stylize};
use itertools::Itertools;

use consign_core::output::{Output, Row};

struct Styles {
    info: Color,
    success: Color,
    warning: Color,
    error: Color,
}

/// Writes styled lines to stdout (errors to stderr). Styles are fixed once at
/// construction; there is no global, lazily-registered style table.
pub struct TermOutput {
    styles: Styles,
}

impl TermOutput {
    #[must_use]
    pub fn new() -> Self {
        Self {
            styles: Styles {
                info: Color::Blue,
                success: Color::Green,
                warning: Color::Yellow,
                error: Color::Red,
            },
        }
    }
}

impl Default for TermOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl Output for TermOutput {
    fn writeln(&self, message: &str) {
        println!("{message}");
    }

    fn info(&self, message: &str) {
        println!("{}", message.with(self.styles.info));
    }

    fn success(&self, message: &str) {
        println!("{}", message.with(self.styles.success));
    }

    fn warning(&self, message: &str) {
        println!("{}", message.with(self.styles.warning));
    }

    fn error(&self, message: &str) {
        eprintln!("{}", message.with(self.styles.error));
    }

    fn newline(&self) {
        println!();
    }

    fn table(&self, rows: &[Row], headers: Option<&[String]>) {
        if rows.is_empty() {
            self.warning("No results found.");
            return;
        }

        let headers: Vec<String> = match headers {
            Some(headers) => headers.to_vec(),
            None => rows[0].keys().cloned().collect(),
        };

        let mut widths: Vec<usize> = headers.iter().map(String::len).collect();
        for row in rows {
            for (index, header) in headers.iter().enumerate() {
                let cell_width = row.get(header).map_or(0, String::len);
                widths[index] = widths[index].max(cell_width);
            }
        }

        let header_line = headers
            .iter()
            .enumerate()
            .map(|(index, header)| format!("{header:<width$}", width = widths[index]))
            .join(" | ");
        let separator = widths.iter().map(|width| "-".repeat(*width)).join("-+-");

        println!("{}", header_line.bold());
        println!("{separator}");

        for row in rows {
            let line = headers
                .iter()
                .enumerate()
                .map(|(index, header)| {
                    let cell = row.get(header).map_or("", String::as_str);
                    format!("{cell:<width$}", width = widths[index])
                })
                .join(" | ");
            println!("{line}");
        }
    }
}
