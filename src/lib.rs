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
// Password generator with an embedded strength estimator.

pub mod charset;
pub mod configtool;
pub mod error;
pub mod passgen;
pub mod strength;
pub mod suggest;

pub use error::{PassgenError, Result};
pub use passgen::GenerationConfig;
pub use strength::StrengthLabel;
