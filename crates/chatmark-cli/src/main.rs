mod cli;
mod output;

use anyhow::{Context, Result};
use chatmark_config::Config;
use chatmark_engine::render_with;
use clap::Parser;
use std::io::Read;
use std::path::Path;

use cli::Cli;

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    log::debug!("Config path: {}", config_path.display());
    let config = Config::load_from_path(&config_path)?.unwrap_or_default();

    let settings = cli.settings(config);
    let text = read_input(cli.input.as_deref())?;

    let html = render_with(text.as_str(), &settings.render);
    let html = if settings.wrap {
        output::wrap_message(&html, settings.message_type)
    } else {
        html
    };

    output::write(&html, settings.output.as_deref())
}

fn read_input(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file {}", path.display())),
        _ => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            Ok(text)
        }
    }
}
