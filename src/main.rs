// src/main.rs

use std::io;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use smartbook::application::LibraryShell;
use smartbook::config::AppConfig;
use smartbook::repositories::InMemoryLibraryRepository;
use smartbook::services::LibraryService;

fn main() -> anyhow::Result<()> {
    // 1. CONFIGURATION
    let config = AppConfig::load().context("Failed to load configuration")?;

    // 2. LOGGING (stderr, stdout belongs to the menu)
    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    log::info!(
        "Starting SmartBook v{} with data in {}",
        env!("CARGO_PKG_VERSION"),
        config.data_dir.display()
    );

    // 3. REPOSITORY
    let repository = InMemoryLibraryRepository::open_dir(&config.data_dir).with_context(|| {
        format!(
            "Failed to open the catalog in {}",
            config.data_dir.display()
        )
    })?;

    // 4. SERVICE
    let service = LibraryService::new(Box::new(repository));

    // 5. CONSOLE
    let stdin = io::stdin();
    let mut shell = LibraryShell::new(service, stdin.lock(), io::stdout(), &config.report_path);
    shell.run().context("Console session failed")?;

    Ok(())
}
