use anyhow::{Context, Result, bail};

use passgenk::configtool::{ConfigFile, config_path, load_config};

pub fn show() -> Result<()> {
    let path = config_path()?;
    let config = load_config(&path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}

pub fn init(force: bool) -> Result<()> {
    let path = config_path()?;
    if path.exists() && !force {
        bail!("Config file {} already exists (use --force to overwrite)", path.display());
    }
    ConfigFile::default()
        .save_config(&path)
        .with_context(|| format!("Failed to write config file {}", path.display()))?;
    println!("Wrote default config to {}", path.display());
    Ok(())
}

pub fn path() -> Result<()> {
    println!("{}", config_path()?.display());
    Ok(())
}
