// src/render/mod.rs
//
// Sheet -> TableView, the presentation-free description of the table:
// header cells, then either sorted rows (state class + display text per
// cell) or one placeholder row. Sinks turn a TableView into markup/text;
// the GUI draws it directly.

pub mod delimited;
pub mod html;
pub mod text;

use crate::columns::{CellRule, ColumnRoles};
use crate::config::consts::{DASH, FLOOR_FIRST, FLOOR_GROUND, FLOOR_SECOND, MILLION, NO_DATA};
use crate::config::options::RenderOptions;
use crate::core::collate;
use crate::data::{RawRow, Sheet};
use crate::format::{format_decimal2, format_fixed, parse_number};
use crate::normalize::{Availability, NormalizedRow, normalize, parse_floor};

pub use delimited::DelimitedSink;
pub use html::HtmlTable;
pub use text::TextSink;

/// Anything that can show a table. Each call replaces what the sink held.
pub trait TableSink {
    fn render(&mut self, table: &TableView);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowState {
    Available,
    Unavailable,
}

impl RowState {
    pub fn class(self) -> &'static str {
        match self {
            RowState::Available => "available",
            RowState::Unavailable => "unavailable",
        }
    }

    fn from_availability(a: Availability) -> Option<Self> {
        match a {
            Availability::Available => Some(RowState::Available),
            Availability::Unavailable => Some(RowState::Unavailable),
            Availability::Other(_) => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeaderCell {
    pub text: String,
    pub rule: CellRule,
}

impl HeaderCell {
    /// Right-align numbers when drawing.
    pub fn is_numeric(&self) -> bool {
        !matches!(self.rule, CellRule::Text)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RowView {
    pub state: Option<RowState>,
    pub cells: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Body {
    Rows(Vec<RowView>),
    /// Single row spanning every visible column, shown in italics.
    Placeholder { colspan: usize, text: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableView {
    pub headers: Vec<HeaderCell>,
    pub body: Body,
}

impl TableView {
    pub fn row_count(&self) -> usize {
        match &self.body {
            Body::Rows(rows) => rows.len(),
            Body::Placeholder { .. } => 0,
        }
    }

    pub fn header_texts(&self) -> Vec<&str> {
        self.headers.iter().map(|h| h.text.as_str()).collect()
    }
}

pub fn floor_label(floor: i64) -> String {
    match floor {
        0 => s!(FLOOR_GROUND),
        1 => s!(FLOOR_FIRST),
        2 => s!(FLOOR_SECOND),
        n => n.to_string(),
    }
}

/// Display text for one cell.
pub fn render_cell(raw: &str, rule: CellRule) -> String {
    let empty = raw.trim().is_empty();
    match rule {
        CellRule::FloorLabel => floor_label(parse_floor(raw)),
        CellRule::Decimal2 if empty => s!(DASH),
        CellRule::Decimal2 => format_decimal2(Some(raw)),
        CellRule::Millions if empty => s!(DASH),
        // unparseable counts as 0
        CellRule::Millions => format_fixed(parse_number(raw).unwrap_or(0.0) / MILLION, 2),
        CellRule::Text if empty => s!(DASH),
        CellRule::Text => s!(raw),
    }
}

/// Value under header `name`. A repeated header name reads its last
/// column, for every column carrying that name.
fn value<'a>(sheet: &Sheet, row: &'a RawRow, name: &str) -> &'a str {
    sheet.get(row, name).unwrap_or("")
}

/// Floor ascending, then the first visible column in locale order.
/// Stable: rows equal on both keys keep sheet order.
fn sort_rows(sheet: &Sheet, pairs: &mut [(&RawRow, NormalizedRow)], key: Option<&str>) {
    pairs.sort_by(|(ra, na), (rb, nb)| {
        na.floor.cmp(&nb.floor).then_with(|| match key {
            Some(name) => collate::compare(value(sheet, ra, name), value(sheet, rb, name)),
            None => std::cmp::Ordering::Equal,
        })
    });
}

/// Build the view with an already resolved role table.
pub fn build_with_roles(sheet: &Sheet, roles: &ColumnRoles) -> TableView {
    let headers: Vec<HeaderCell> = roles
        .visible()
        .map(|c| HeaderCell { text: c.header.clone(), rule: c.rule })
        .collect();

    if sheet.rows.is_empty() {
        return TableView {
            body: Body::Placeholder { colspan: headers.len().max(1), text: s!(NO_DATA) },
            headers,
        };
    }

    let mut pairs: Vec<(&RawRow, NormalizedRow)> = sheet
        .rows
        .iter()
        .map(|r| (r, normalize(r, roles)))
        .collect();
    sort_rows(sheet, &mut pairs, roles.sort_key().map(|c| c.header.as_str()));

    let rows = pairs
        .iter()
        .map(|(raw, norm)| RowView {
            state: norm.availability.and_then(RowState::from_availability),
            cells: headers
                .iter()
                .map(|h| render_cell(value(sheet, raw, &h.text), h.rule))
                .collect(),
        })
        .collect();

    TableView { headers, body: Body::Rows(rows) }
}

/// Resolve roles for the sheet's headers and build the view.
pub fn build_table(sheet: &Sheet, opts: &RenderOptions) -> TableView {
    let roles = ColumnRoles::resolve(&sheet.headers, &opts.million_columns);
    build_with_roles(sheet, &roles)
}
