// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::config::options::{ExportFormat, ExportOptions};
use crate::render::{DelimitedSink, HtmlTable, TableSink, TableView, TextSink};

pub const DOCUMENT_TITLE: &str = "Lakások";

/// Render `table` into the text of one export file.
pub fn render_export(table: &TableView, format: ExportFormat, table_id: &str) -> String {
    match format {
        ExportFormat::Html => {
            let mut sink = HtmlTable::new(table_id);
            sink.render(table);
            sink.document(DOCUMENT_TITLE)
        }
        ExportFormat::Csv | ExportFormat::Tsv => {
            // delim() is Some for both delimited formats
            let delim = format.delim().unwrap_or(crate::csv::Delim::Csv);
            let mut sink = DelimitedSink::new(delim);
            sink.render(table);
            sink.into_string()
        }
        ExportFormat::Text => {
            let mut sink = TextSink::new();
            sink.render(table);
            sink.into_string()
        }
    }
}

/// Write the rendered table to `export.out_path()`, creating parent
/// directories. Returns the path written to.
pub fn export_table(
    export: &ExportOptions,
    table: &TableView,
    table_id: &str,
) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let path = export.out_path();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    fs::write(&path, render_export(table, export.format, table_id))?;
    Ok(path)
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}
