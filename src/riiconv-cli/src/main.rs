mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    commands::convert(
        &cli.sd_root,
        &cli.xml_file,
        &cli.enabled_patches,
        &cli.output_dir,
    )
}
