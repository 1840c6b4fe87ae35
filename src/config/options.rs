// src/config/options.rs
use std::path::{Path, PathBuf};

use crate::csv::Delim;
use super::consts::*;

#[derive(Clone, Debug, PartialEq, Default)]
pub struct AppOptions {
    pub source: Source,
    pub render: RenderOptions,
    pub export: ExportOptions,
    pub nav: NavOptions,
}

/// Where the sheet comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Source {
    /// Published export URL (http/https).
    Remote(String),
    /// Local copy of an export.
    File(PathBuf),
    /// Blank URL: only the fallback table is shown.
    None,
}

impl Default for Source {
    fn default() -> Self {
        Source::Remote(s!(DEFAULT_SOURCE_URL))
    }
}

impl Source {
    /// A URL setting; blank means no source.
    pub fn from_url(url: &str) -> Self {
        let url = url.trim();
        if url.is_empty() { Source::None } else { Source::Remote(s!(url)) }
    }

    /// Human label for status lines and logs.
    pub fn describe(&self) -> String {
        match self {
            Source::Remote(url) => s!(url.as_str()),
            Source::File(p) => p.display().to_string(),
            Source::None => s!("(none)"),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RenderOptions {
    /// Zero-based header positions shown divided by one million.
    pub million_columns: Vec<usize>,
    pub table_id: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            million_columns: MILLION_COLUMNS.to_vec(),
            table_id: s!(TABLE_ID),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct NavOptions {
    /// Vertical offset (px) past which the nav bar switches style.
    pub scroll_threshold: f32,
}

impl Default for NavOptions {
    fn default() -> Self {
        Self { scroll_threshold: SCROLL_THRESHOLD }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Html,
    Csv,
    Tsv,
    Text,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self {
            ExportFormat::Html => "html",
            ExportFormat::Csv => "csv",
            ExportFormat::Tsv => "tsv",
            ExportFormat::Text => "txt",
        }
    }

    /// Separator for the delimited formats.
    pub fn delim(&self) -> Option<Delim> {
        match self {
            ExportFormat::Csv => Some(Delim::Csv),
            ExportFormat::Tsv => Some(Delim::Tsv),
            _ => None,
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "html" | "htm" => Some(ExportFormat::Html),
            "csv" => Some(ExportFormat::Csv),
            "tsv" => Some(ExportFormat::Tsv),
            "text" | "txt" => Some(ExportFormat::Text),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    /// Explicit output file; None means `out/<DEFAULT_FILE>.<ext>`.
    out_path: Option<PathBuf>,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self { format: ExportFormat::Html, out_path: None }
    }
}

impl ExportOptions {
    pub fn out_path(&self) -> PathBuf {
        match &self.out_path {
            Some(p) => p.clone(),
            None => PathBuf::from(DEFAULT_OUT_DIR)
                .join(join!(DEFAULT_FILE, ".", self.format.ext())),
        }
    }

    pub fn has_explicit_path(&self) -> bool {
        self.out_path.is_some()
    }

    /// Set from user text; blank resets to the default path.
    pub fn set_path(&mut self, text: &str) {
        let s = text.trim();
        self.out_path = if s.is_empty() { None } else { Some(PathBuf::from(s)) };
    }

    pub fn set_path_buf(&mut self, p: &Path) {
        self.out_path = Some(p.to_path_buf());
    }
}

/// "4,5" -> [4, 5]. Blank entries are skipped; anything else must be a number.
pub fn parse_index_list(s: &str) -> Result<Vec<usize>, String> {
    let mut out = Vec::new();
    for part in s.split(',') {
        let part = part.trim();
        if part.is_empty() { continue; }
        let v: usize = part
            .parse()
            .map_err(|_| format!("Invalid column index: {}", part))?;
        out.push(v);
    }
    out.sort_unstable();
    out.dedup();
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_source_is_the_published_sheet() {
        assert_eq!(Source::default(), Source::Remote(s!(DEFAULT_SOURCE_URL)));
        assert!(DEFAULT_SOURCE_URL.ends_with("pub?output=csv"));
        assert_eq!(Source::from_url("  "), Source::None);
        assert_eq!(Source::from_url(" https://x.test/a.csv "), Source::Remote(s!("https://x.test/a.csv")));
    }

    #[test]
    fn default_out_path_follows_format() {
        let mut e = ExportOptions::default();
        assert!(e.out_path().to_string_lossy().ends_with("lakasok.html"));
        e.format = ExportFormat::Csv;
        assert!(e.out_path().to_string_lossy().ends_with("lakasok.csv"));
    }

    #[test]
    fn explicit_path_is_kept_across_format_change() {
        let mut e = ExportOptions::default();
        e.set_path("out/custom.data");
        e.format = ExportFormat::Tsv;
        assert_eq!(e.out_path(), PathBuf::from("out/custom.data"));
        e.set_path("  ");
        assert!(!e.has_explicit_path());
    }

    #[test]
    fn index_list() {
        assert_eq!(parse_index_list("5, 4,,4"), Ok(vec![4, 5]));
        assert_eq!(parse_index_list(""), Ok(vec![]));
        assert!(parse_index_list("4,x").is_err());
    }

    #[test]
    fn format_names() {
        assert_eq!(ExportFormat::parse("TXT"), Some(ExportFormat::Text));
        assert_eq!(ExportFormat::parse("xml"), None);
        assert_eq!(ExportFormat::Tsv.delim(), Some(Delim::Tsv));
        assert_eq!(ExportFormat::Html.delim(), None);
    }
}
