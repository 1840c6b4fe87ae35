// src/render/text.rs
//
// Plain-text sink for terminals: columns padded to their widest cell,
// numbers right-aligned, row state as a one-char marker in front.

use super::{Body, RowState, TableSink, TableView};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TextSink {
    out: String,
}

impl TextSink {
    pub fn new() -> Self { Self::default() }

    pub fn as_str(&self) -> &str { &self.out }

    pub fn into_string(self) -> String { self.out }
}

fn width(s: &str) -> usize { s.chars().count() }

fn pad(s: &str, w: usize, right: bool) -> String {
    let fill = " ".repeat(w.saturating_sub(width(s)));
    if right { join!(&fill, s) } else { join!(s, &fill) }
}

fn marker(state: Option<RowState>) -> char {
    match state {
        Some(RowState::Available) => '+',
        Some(RowState::Unavailable) => '-',
        None => ' ',
    }
}

impl TableSink for TextSink {
    fn render(&mut self, table: &TableView) {
        let mut widths: Vec<usize> = table.headers.iter().map(|h| width(&h.text)).collect();
        if let Body::Rows(rows) = &table.body {
            for row in rows {
                for (w, cell) in widths.iter_mut().zip(&row.cells) {
                    *w = (*w).max(width(cell));
                }
            }
        }

        let mut out = s!();
        let header: Vec<String> = table
            .headers
            .iter()
            .zip(&widths)
            .map(|(h, &w)| pad(&h.text, w, h.is_numeric()))
            .collect();
        out.push_str(&join!("  ", &header.join("  "), "\n"));
        let rule_len = widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1);
        out.push_str(&join!("  ", &"-".repeat(rule_len), "\n"));

        match &table.body {
            Body::Placeholder { text, .. } => {
                out.push_str(&join!("  ", text, "\n"));
            }
            Body::Rows(rows) => {
                for row in rows {
                    let cells: Vec<String> = row
                        .cells
                        .iter()
                        .zip(table.headers.iter().zip(&widths))
                        .map(|(c, (h, &w))| pad(c, w, h.is_numeric()))
                        .collect();
                    out.push(marker(row.state));
                    out.push(' ');
                    out.push_str(cells.join("  ").trim_end());
                    out.push('\n');
                }
            }
        }
        self.out = out;
    }
}
