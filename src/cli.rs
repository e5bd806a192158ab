use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "umake")]
#[command(about = "Recursive build dispatcher for the userspace tree")]
pub struct Cli {
    /// Goal names forwarded to every subproject (default: all)
    pub goals: Vec<String>,

    /// Run as if started in DIR
    #[arg(short = 'C', long = "directory", value_name = "DIR")]
    pub directory: Option<PathBuf>,

    /// Output directory override (takes precedence over $BUILD_DIR)
    #[arg(long, value_name = "DIR")]
    pub build_dir: Option<PathBuf>,

    /// Print the build directory and subproject set, then exit
    #[arg(long)]
    pub list: bool,

    /// With --list, emit JSON instead of text
    #[arg(long, requires = "list")]
    pub json: bool,
}
