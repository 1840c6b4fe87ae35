// src/render/html.rs
//
// HTML sink: keeps the current <thead>/<tbody> markup of one table and
// replaces both wholesale on every render.

use std::fmt::Write as _;

use crate::core::html::{element, escape_attr, escape_text};
use super::{Body, TableSink, TableView};

const STYLE: &str = "\
table{border-collapse:collapse;width:100%;font-family:sans-serif}\
th,td{border-bottom:1px solid #ddd;padding:.4em .6em;text-align:left}\
tr.available td{color:#1b6e2d}\
tr.unavailable td{color:#9a9a9a;text-decoration:line-through}\
td.empty{text-align:center}";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HtmlTable {
    id: String,
    thead: String,
    tbody: String,
}

impl HtmlTable {
    pub fn new(id: &str) -> Self {
        Self { id: s!(id), ..Self::default() }
    }

    pub fn thead(&self) -> &str { &self.thead }

    pub fn tbody(&self) -> &str { &self.tbody }

    /// `<table id=...>` with both sections.
    pub fn markup(&self) -> String {
        format!(
            "<table id=\"{}\">\n<thead>{}</thead>\n<tbody>\n{}</tbody>\n</table>\n",
            escape_attr(&self.id),
            self.thead,
            self.tbody
        )
    }

    /// Standalone page around the table.
    pub fn document(&self, title: &str) -> String {
        format!(
            "<!DOCTYPE html>\n<html lang=\"hu\">\n<head>\n<meta charset=\"utf-8\">\n\
             <title>{}</title>\n<style>{}</style>\n</head>\n<body>\n{}</body>\n</html>\n",
            escape_text(title),
            STYLE,
            self.markup()
        )
    }
}

impl TableSink for HtmlTable {
    fn render(&mut self, table: &TableView) {
        let mut thead = s!("<tr>");
        for h in &table.headers {
            thead.push_str(&element("th", None, &escape_text(&h.text)));
        }
        thead.push_str("</tr>");

        let mut tbody = s!();
        match &table.body {
            Body::Placeholder { colspan, text } => {
                let _ = writeln!(
                    tbody,
                    "<tr><td class=\"empty\" colspan=\"{}\"><em>{}</em></td></tr>",
                    colspan,
                    escape_text(text)
                );
            }
            Body::Rows(rows) => {
                for row in rows {
                    let cells: String = row
                        .cells
                        .iter()
                        .map(|c| element("td", None, &escape_text(c)))
                        .collect();
                    tbody.push_str(&element("tr", row.state.map(|s| s.class()), &cells));
                    tbody.push('\n');
                }
            }
        }

        self.thead = thead;
        self.tbody = tbody;
    }
}
