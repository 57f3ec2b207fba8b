use card_gen::{server, Font, ServerConfig};
use clap::Parser;
use log::{error, info};
use std::path::PathBuf;
use std::sync::Arc;

/// Serve social preview cards rendered from query parameters
#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// TOML configuration file
    #[clap(long, short)]
    config: Option<PathBuf>,
    /// Address to bind to
    #[clap(long)]
    host: Option<String>,
    /// Port to listen on
    #[clap(long, short)]
    port: Option<u16>,
    /// Font file used for all text
    #[clap(long)]
    font: Option<PathBuf>,
    /// Number of worker threads (0 = one per CPU)
    #[clap(long)]
    workers: Option<usize>,
}

impl Args {
    fn into_config(self) -> Result<ServerConfig, card_gen::CardError> {
        let mut config = match &self.config {
            Some(path) => ServerConfig::load_from_file(path)?,
            None => ServerConfig::default(),
        };
        if let Some(host) = self.host {
            config.host = host;
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(font) = self.font {
            config.font_path = font;
        }
        if let Some(workers) = self.workers {
            config.workers = workers;
        }
        Ok(config)
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match Args::parse().into_config() {
        Ok(config) => config,
        Err(e) => {
            error!("can't load configuration: {e}");
            std::process::exit(1);
        }
    };

    // the font is loaded exactly once; without it there is nothing to serve
    let font = match Font::load_from_disk(&config.font_path) {
        Ok(font) => font,
        Err(e) => {
            error!("can't load font {}: {e}", config.font_path.display());
            std::process::exit(1);
        }
    };
    info!(
        "loaded font {} from {}",
        font.family().unwrap_or_else(|| "(unnamed)".to_string()),
        config.font_path.display()
    );

    if let Err(e) = server::run(config, Arc::new(font)) {
        error!("server failed: {e}");
        std::process::exit(1);
    }
}
