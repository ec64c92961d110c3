use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "food-finder", version)]
#[command(about = "Interactive guide to help you find the food you crave", long_about = None)]
pub struct Cli {
    /// Restaurant file to use (overrides the config file)
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Directory holding config.json
    #[arg(long, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    /// Verbose logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}
