//  ____                     ____               _
// |  _ \   __ _  ___  ___  / ___|  ___  _ __  | | __
// | |_) | / _` |/ __|/ __|| |  _  / _ \| '_ \ | |/ /
// |  __/ | (_| |\__ \\__ \| |_| ||  __/| | | ||   <
// |_|     \__,_||___/|___/ \____| \___||_| |_||_|\_\
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2025-08-04
// Version : 0.1.0
// License : Mulan PSL v2
//
// Error types

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PassgenError {
    /// 所有字符类别在排除后均为空
    #[error("No characters selected")]
    EmptyPool,

    #[error("Password length {length} is out of range ({min}..={max})")]
    LengthOutOfRange {
        length: usize,
        min: usize,
        max: usize,
    },

    #[error("Cannot assess the strength of an empty password")]
    EmptyPassword,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config directory error: {0}")]
    ConfigDir(String),
}

pub type Result<T> = std::result::Result<T, PassgenError>;
