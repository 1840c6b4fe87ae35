// src/cli.rs
use std::{env, error::Error, path::PathBuf};

use crate::config::{
    consts::CONFIG_FILE,
    file as config_file,
    options::{AppOptions, ExportFormat, Source, parse_index_list},
};
use crate::{file, loader::Loader, progress::StderrProgress, render};

/// Parsed command line. Everything optional; unset fields keep the
/// config file's (or the built-in) value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Params {
    pub url: Option<String>,
    pub file: Option<PathBuf>,
    pub out: Option<PathBuf>,
    pub format: Option<ExportFormat>,
    pub million_columns: Option<Vec<usize>>,
    pub config: Option<PathBuf>,
    pub help: bool,
}

impl Params {
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(|| PathBuf::from(CONFIG_FILE))
    }

    /// Flags on top of file settings.
    pub fn apply(&self, opts: &mut AppOptions) {
        if let Some(url) = &self.url {
            opts.source = Source::from_url(url);
        } else if let Some(p) = &self.file {
            opts.source = Source::File(p.clone());
        }
        if let Some(m) = &self.million_columns {
            opts.render.million_columns = m.clone();
        }
        if let Some(p) = &self.out {
            opts.export.set_path_buf(p);
        }
        if let Some(f) = self.format {
            opts.export.format = f;
        }
    }

    /// Format when printing to stdout: text unless asked otherwise.
    pub fn stdout_format(&self) -> ExportFormat {
        self.format.unwrap_or(ExportFormat::Text)
    }
}

pub fn parse_args<I>(args: I) -> Result<Params, Box<dyn Error>>
where
    I: IntoIterator<Item = String>,
{
    let mut params = Params::default();
    let mut args = args.into_iter();
    while let Some(a) = args.next() {
        match a.as_str() {
            "--url" => params.url = Some(args.next().ok_or("Missing value for --url")?),
            "--file" => params.file = Some(PathBuf::from(args.next().ok_or("Missing value for --file")?)),
            "-o" | "--out" => params.out = Some(PathBuf::from(args.next().ok_or("Missing output path")?)),
            "--format" => {
                let v = args.next().ok_or("Missing value for --format")?;
                params.format = Some(
                    ExportFormat::parse(&v).ok_or_else(|| format!("Unknown format: {}", v))?,
                );
            }
            "--million-cols" => {
                let v = args.next().ok_or("Missing value for --million-cols")?;
                params.million_columns = Some(parse_index_list(&v)?);
            }
            "--config" => params.config = Some(PathBuf::from(args.next().ok_or("Missing value for --config")?)),
            "-h" | "--help" => params.help = true,
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }
    if params.url.is_some() && params.file.is_some() {
        return Err("Use either --url or --file, not both".into());
    }
    Ok(params)
}

pub fn help() -> &'static str {
    include_str!("cli_help.txt")
}

/// Load, render, write. The load itself never fails; errors here are
/// bad arguments or an unwritable output.
pub fn run_with(params: &Params) -> Result<(), Box<dyn Error>> {
    if params.help {
        eprintln!("{}", help());
        return Ok(());
    }

    let mut opts = config_file::load(&params.config_path()).to_options();
    params.apply(&mut opts);

    let mut loader = Loader::new();
    let outcome = loader.load(&opts.source, &mut StderrProgress);
    let table = render::build_table(&outcome.sheet, &opts.render);

    if params.out.is_some() {
        let path = file::export_table(&opts.export, &table, &opts.render.table_id)?;
        logf!("Export: wrote {}", path.display());
        eprintln!("Wrote {}", path.display());
    } else {
        print!("{}", file::render_export(&table, params.stdout_format(), &opts.render.table_id));
    }
    Ok(())
}

pub fn run() -> Result<(), Box<dyn Error>> {
    let params = parse_args(env::args().skip(1))?;
    run_with(&params)
}
