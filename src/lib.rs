pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::toml_config::TomlConfig;
pub use crate::core::engine::{parse_number, CheckEngine, DEFAULT_PROMPT};
pub use crate::core::trial_division::{classify, divisor_bound, is_prime, TrialDivision};
pub use crate::domain::model::{Report, Verdict};
pub use crate::domain::ports::{ConfigProvider, PrimalityTest};
pub use crate::utils::error::{CheckError, Result};
