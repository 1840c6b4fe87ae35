// src/config/file.rs
//
// `key=value` settings file. Blank lines and `#` comments are ignored;
// unknown keys and bad values are skipped, never fatal.
//
//   source_url=https://docs.google.com/spreadsheets/d/e/.../pub?output=csv
//   million_columns=4,5
//   scroll_threshold=48

use std::{fs, io, path::{Path, PathBuf}};

use super::options::{AppOptions, ExportFormat, Source, parse_index_list};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConfigFile {
    pub source_url: Option<String>,
    pub source_file: Option<PathBuf>,
    pub scroll_threshold: Option<f32>,
    pub million_columns: Option<Vec<usize>>,
    pub table_id: Option<String>,
    pub out_path: Option<String>,
    pub format: Option<ExportFormat>,
    pub log_file: Option<PathBuf>,
}

fn non_empty(v: &str) -> Option<String> {
    if v.is_empty() { None } else { Some(s!(v)) }
}

pub fn parse(text: &str) -> ConfigFile {
    let mut cfg = ConfigFile::default();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') { continue; }
        let Some((key, val)) = line.split_once('=') else {
            logd!("Config: ignoring line without '=': {}", line);
            continue;
        };
        let (key, val) = (key.trim(), val.trim());
        match key {
            // kept even when blank: an empty URL turns the remote source off
            "source_url" => cfg.source_url = Some(s!(val)),
            "source_file" => cfg.source_file = non_empty(val).map(PathBuf::from),
            "scroll_threshold" => match val.parse::<f32>() {
                Ok(v) if v.is_finite() && v >= 0.0 => cfg.scroll_threshold = Some(v),
                _ => logw!("Config: bad scroll_threshold {:?}", val),
            },
            "million_columns" => match parse_index_list(val) {
                Ok(v) => cfg.million_columns = Some(v),
                Err(e) => logw!("Config: {}", e),
            },
            "table_id" => cfg.table_id = non_empty(val),
            "out_path" => cfg.out_path = non_empty(val),
            "format" => match ExportFormat::parse(val) {
                Some(f) => cfg.format = Some(f),
                None => logw!("Config: unknown format {:?}", val),
            },
            "log_file" => cfg.log_file = non_empty(val).map(PathBuf::from),
            other => logd!("Config: unknown key {}", other),
        }
    }
    cfg
}

/// Missing or unreadable file -> defaults.
pub fn load(path: &Path) -> ConfigFile {
    match fs::read_to_string(path) {
        Ok(text) => parse(&text),
        Err(e) => {
            logd!("Config: {} not read ({})", path.display(), e);
            ConfigFile::default()
        }
    }
}

impl ConfigFile {
    /// Overlay the file's settings onto `opts`. A URL wins over a file path;
    /// a blank URL with no file leaves no source at all.
    pub fn apply(&self, opts: &mut AppOptions) {
        match (self.source_url.as_deref().map(Source::from_url), &self.source_file) {
            (Some(Source::None), Some(p)) | (None, Some(p)) => opts.source = Source::File(p.clone()),
            (Some(src), _) => opts.source = src,
            (None, None) => {}
        }
        if let Some(t) = self.scroll_threshold { opts.nav.scroll_threshold = t; }
        if let Some(m) = &self.million_columns { opts.render.million_columns = m.clone(); }
        if let Some(id) = &self.table_id { opts.render.table_id = id.clone(); }
        if let Some(f) = self.format { opts.export.format = f; }
        if let Some(p) = &self.out_path { opts.export.set_path(p); }
    }

    pub fn to_options(&self) -> AppOptions {
        let mut opts = AppOptions::default();
        self.apply(&mut opts);
        opts
    }
}

/// Write the settings the GUI can change back out.
pub fn save(path: &Path, opts: &AppOptions) -> io::Result<()> {
    let mut s = s!();
    match &opts.source {
        Source::Remote(url) => s.push_str(&format!("source_url={}\n", url)),
        Source::File(p) => s.push_str(&format!("source_file={}\n", p.display())),
        Source::None => s.push_str("source_url=\n"),
    }
    s.push_str(&format!("scroll_threshold={}\n", opts.nav.scroll_threshold));
    let cols = opts.render.million_columns.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(",");
    s.push_str(&format!("million_columns={}\n", cols));
    s.push_str(&format!("table_id={}\n", opts.render.table_id));
    s.push_str(&format!("format={}\n", opts.export.format.ext()));
    if opts.export.has_explicit_path() {
        s.push_str(&format!("out_path={}\n", opts.export.out_path().display()));
    }
    fs::write(path, s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_keys_and_skips_noise() {
        let cfg = parse(
            "# comment\n\
             source_url = https://example.test/pub?output=csv\n\
             million_columns=5,4\n\
             scroll_threshold=80\n\
             nonsense\n\
             mystery=1\n\
             format=csv\n",
        );
        assert_eq!(cfg.source_url.as_deref(), Some("https://example.test/pub?output=csv"));
        assert_eq!(cfg.million_columns, Some(vec![4, 5]));
        assert_eq!(cfg.scroll_threshold, Some(80.0));
        assert_eq!(cfg.format, Some(ExportFormat::Csv));
    }

    #[test]
    fn bad_values_are_ignored() {
        let cfg = parse("scroll_threshold=-3\nmillion_columns=a,b\nformat=pdf\n");
        assert_eq!(cfg, ConfigFile::default());
    }

    #[test]
    fn url_beats_file() {
        let cfg = parse("source_file=local.csv\nsource_url=https://x.test/a.csv\n");
        let opts = cfg.to_options();
        assert_eq!(opts.source, Source::Remote(s!("https://x.test/a.csv")));
    }

    #[test]
    fn blank_url_turns_the_source_off() {
        assert_eq!(AppOptions::default().source, Source::default());
        assert_eq!(parse("source_url=\n").to_options().source, Source::None);
        assert_eq!(
            parse("source_url=\nsource_file=local.csv\n").to_options().source,
            Source::File(PathBuf::from("local.csv"))
        );
        // nothing said about the source keeps the published sheet
        assert_eq!(parse("format=csv\n").to_options().source, Source::default());
    }

    #[test]
    fn saved_settings_load_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("aptable.cfg");
        for source in [Source::None, Source::default(), Source::File(PathBuf::from("x.csv"))] {
            let mut opts = AppOptions::default();
            opts.source = source.clone();
            save(&path, &opts).unwrap();
            assert_eq!(load(&path).to_options().source, source);
        }
    }

    #[test]
    fn missing_file_gives_defaults() {
        let cfg = load(Path::new("/definitely/not/here/aptable.cfg"));
        assert_eq!(cfg, ConfigFile::default());
    }
}
