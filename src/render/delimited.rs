// src/render/delimited.rs
//
// CSV/TSV sink: header line + display cells. The placeholder row is not
// data, so an empty table exports as the header line alone.

use crate::csv::{Delim, rows_to_string};
use super::{Body, TableSink, TableView};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DelimitedSink {
    delim: Delim,
    out: String,
}

impl DelimitedSink {
    pub fn new(delim: Delim) -> Self {
        Self { delim, out: s!() }
    }

    pub fn as_str(&self) -> &str { &self.out }

    pub fn into_string(self) -> String { self.out }
}

impl TableSink for DelimitedSink {
    fn render(&mut self, table: &TableView) {
        let headers: Vec<&str> = table.headers.iter().map(|h| h.text.as_str()).collect();
        let rows: Vec<Vec<&str>> = match &table.body {
            Body::Rows(rows) => rows
                .iter()
                .map(|r| r.cells.iter().map(String::as_str).collect())
                .collect(),
            Body::Placeholder { .. } => Vec::new(),
        };
        self.out = rows_to_string(&headers, &rows, self.delim);
    }
}
