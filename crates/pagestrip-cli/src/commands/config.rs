use std::path::Path;

use anyhow::Result;
use tracing::info;

use pagestrip_core::AppConfig;

/// Print the effective configuration; with `write`, persist it to `path` or the default location
pub fn run(config: &AppConfig, write: bool, path: Option<&Path>) -> Result<()> {
    let target = path.map(Path::to_path_buf).unwrap_or_else(AppConfig::config_path);
    println!("# {}", target.display());
    print!("{}", config.to_toml()?);

    if write {
        match path {
            Some(path) => config.save_to(path)?,
            None => config.save()?,
        }
        info!("configuration written to {}", target.display());
    }
    Ok(())
}
