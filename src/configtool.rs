//  ____                     ____               _
// |  _ \   __ _  ___  ___  / ___|  ___  _ __  | | __
// | |_) | / _` |/ __|/ __|| |  _  / _ \| '_ \ | |/ /
// |  __/ | (_| |\__ \\__ \| |_| ||  __/| | | ||   <
// |_|     \__,_||___/|___/ \____| \___||_| |_||_|\_\
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2025-08-06
// Version : 0.1.0
// License : Mulan PSL v2
//
// Config Tools

use dirs::config_dir;
use log::info;
use serde::{Deserialize, Serialize};
use std::{env, fs, path::{Path, PathBuf}};

use crate::error::{PassgenError, Result};
use crate::passgen::GenerationConfig;

pub const CONFIG_ENV: &str = "PASSGENK_CONFIG";
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Stored defaults for the command line. Generated passwords are never
/// written here.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    pub defaults: GenerationConfig,
    pub show_feedback: bool,
}

impl ConfigFile {
    pub fn save_config(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let config_file = fs::File::create(path)?;
        serde_json::to_writer_pretty(config_file, &self)?;
        info!("saved config to {}", path.display());
        Ok(())
    }
}

/// 获取配置目录
pub fn get_config_dir() -> Result<PathBuf> {
    match config_dir() {
        Some(path) => Ok(path.join("passgenk")),
        None => Err(PassgenError::ConfigDir(
            "Could not determine configuration directory".to_string(),
        )),
    }
}

/// `$PASSGENK_CONFIG` if set, otherwise `config.json` in the config directory.
pub fn config_path() -> Result<PathBuf> {
    match env::var_os(CONFIG_ENV) {
        Some(path) if !path.is_empty() => Ok(PathBuf::from(path)),
        _ => Ok(get_config_dir()?.join(CONFIG_FILE_NAME)),
    }
}

/// 加载配置文件，文件不存在时返回默认配置
pub fn load_config(path: &Path) -> Result<ConfigFile> {
    if !path.exists() {
        info!("no config at {}, using defaults", path.display());
        return Ok(ConfigFile::default());
    }
    let config_data = fs::read_to_string(path)?;
    let config: ConfigFile = serde_json::from_str(&config_data)?;
    info!("loaded config from {}", path.display());
    Ok(config)
}
