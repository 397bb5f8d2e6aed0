//! Live Differ server binary.
//!
//! Parses the file pair and bind options, starts the change notifier and
//! serves the browser view.

use std::path::PathBuf;
use std::sync::Arc;

use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use clap::Parser;
use env_logger::Env;

use libdiffer::config::DifferConfig;
use libdiffer::differ::FileDiffer;
use libdiffer::notifier::{Broadcaster, ChangeNotifier};
use libdiffer::util;

pub mod app_data;
pub mod controllers;
pub mod errors;
pub mod html;
pub mod routes;

#[cfg(test)]
mod test;

#[derive(Parser)]
#[command(name = "live-differ")]
#[command(version)]
#[command(about = "A real-time file difference viewer with live updates")]
struct LiveDifferArgs {
    /// First file to compare
    file1: PathBuf,

    /// Second file to compare
    file2: PathBuf,

    /// Host to bind the server to
    #[arg(long)]
    host: Option<String>,

    /// Port to run the server on
    #[arg(long, short = 'p')]
    port: Option<u16>,

    /// Enable debug mode
    #[arg(long)]
    debug: bool,
}

impl LiveDifferArgs {
    fn into_config(self) -> DifferConfig {
        let mut config = DifferConfig::from_env(self.file1, self.file2);
        if let Some(host) = self.host {
            config.host = host;
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if self.debug {
            config.debug = true;
        }
        config
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let config = LiveDifferArgs::parse().into_config();

    let default_filter = if config.debug { "debug" } else { "info" };
    env_logger::init_from_env(Env::default().default_filter_or(default_filter));

    // Outer validation. The core validates again on its own; this exists
    // to fail fast with a readable message before anything is constructed.
    for path in [&config.file1, &config.file2] {
        if !path.is_file() {
            eprintln!("File not found: {}", path.display());
            std::process::exit(1);
        }
        if !util::fs::is_readable(path) {
            eprintln!("File not readable: {}", path.display());
            std::process::exit(1);
        }
    }

    let differ = match FileDiffer::new(&config.file1, &config.file2) {
        Ok(differ) => Arc::new(differ),
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    };

    let broadcaster = Broadcaster::new();
    let mut notifier = ChangeNotifier::new(differ.clone(), broadcaster.clone());
    if let Err(err) = notifier.start() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }

    log::info!(
        "Comparing {} and {}",
        differ.file1_path.display(),
        differ.file2_path.display()
    );
    println!("Live Differ is running!");
    println!("View the diff at: {}", config.url());
    println!("\nPress Ctrl+C to quit.");

    let data = app_data::DifferAppData::new(differ, broadcaster);
    let result = HttpServer::new(move || {
        App::new()
            .app_data(data.clone())
            .configure(routes::config)
            .default_service(web::route().to(controllers::not_found::index))
            .wrap(Logger::default())
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await;

    notifier.stop();
    result
}
