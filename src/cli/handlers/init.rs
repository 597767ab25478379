use std::path::Path;

use anyhow::Result;
use colored::Colorize;

use crate::config::{CONFIG_FILE_NAME, RosterConfig};
use crate::error::RosterError;

pub fn handle_init(dir: &Path) -> Result<()> {
    let config_path = dir.join(CONFIG_FILE_NAME);
    if config_path.exists() {
        return Err(RosterError::AlreadyInitialized(config_path.display().to_string()).into());
    }

    RosterConfig::default().save(&config_path)?;

    println!("{} roster config in {}", "Initialized".green(), dir.display());
    println!("  Config: {}", config_path.display());
    Ok(())
}
