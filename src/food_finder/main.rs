use clap::Parser;
use directories::ProjectDirs;
use food_finder::cli::render::render_messages;
use food_finder::cli::Guide;
use food_finder::config::FinderConfig;
use food_finder::error::{FinderError, Result};
use food_finder::registry::Registry;
use log::LevelFilter;
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;

mod args;
use args::Cli;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let proj_dirs = ProjectDirs::from("com", "food-finder", "food-finder")
        .ok_or_else(|| FinderError::Config("Could not determine config dir".to_string()))?;

    let config_dir = cli
        .config_dir
        .clone()
        .unwrap_or_else(|| proj_dirs.config_dir().to_path_buf());
    let config = FinderConfig::load_or_init(&config_dir)?;
    log::debug!("Config loaded from {}", config_dir.display());

    let data_file = resolve_data_file(&cli, &config, &proj_dirs)?;
    let (mut registry, diagnostic) = Registry::load(Some(data_file.as_path()));

    let stdout = io::stdout();
    let use_color = stdout.is_terminal();
    let mut out = stdout.lock();

    if let Some(message) = diagnostic {
        out.write_all(render_messages(&[message], use_color).as_bytes())?;
    }

    let stdin = io::stdin();
    Guide::new(&mut registry)
        .with_currency(config.currency)
        .with_color(use_color)
        .launch(stdin.lock(), &mut out)
}

/// Default data dir is created on demand; explicit paths are used as given.
fn resolve_data_file(cli: &Cli, config: &FinderConfig, dirs: &ProjectDirs) -> Result<PathBuf> {
    let data_dir = dirs.data_dir();
    let path = config.resolve_data_file(cli.file.as_deref(), data_dir);
    if path.starts_with(data_dir) {
        std::fs::create_dir_all(data_dir)?;
    }
    log::debug!("Using restaurant file {}", path.display());
    Ok(path)
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}
