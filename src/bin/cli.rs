use aptable::{cli, log::{self, LogTarget}};
use color_eyre::eyre::eyre;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    log::init(LogTarget::Stderr).map_err(|e| eyre!("logging: {e}"))?;

    cli::run().map_err(|e| eyre!("{e}"))
}
