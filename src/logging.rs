use crate::config::AppConfig;
use anyhow::{Context, Result};
use chrono::Local;
use env_logger::{Builder, Env, Target};
use std::fs::OpenOptions;
use std::io::Write;

/// Sends `log` output to the configured file. The terminal belongs to the
/// UI, so nothing is written to stdout/stderr. `RUST_LOG` overrides the
/// configured level.
pub fn init(config: &AppConfig) -> Result<()> {
    let path = config.log_path();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
    }
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    Builder::from_env(Env::default().default_filter_or(&config.logging.level))
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {} {}] {}",
                Local::now().format("%Y-%m-%dT%H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .target(Target::Pipe(Box::new(log_file)))
        .try_init()
        .context("Logger already initialized")?;

    log::info!("brandhue {} logging to {}", env!("CARGO_PKG_VERSION"), path.display());
    Ok(())
}
