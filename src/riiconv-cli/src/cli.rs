//! CLI argument definitions for riiconv

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "riiconv")]
#[command(about = "Convert Riivolution patch XML to Dolphin INI patch files", long_about = None)]
pub struct Cli {
    /// SD card root directory containing the riivolution/ subfolder
    pub sd_root: String,

    /// Patch document filename inside riivolution/
    pub xml_file: String,

    /// Entry ids to mark enabled (every entry is enabled when omitted)
    pub enabled_patches: Vec<String>,

    /// Directory the INI files are written into
    #[arg(long, default_value = ".")]
    pub output_dir: PathBuf,
}
