pub mod engine;
pub mod trial_division;

pub use crate::domain::model::{Report, Verdict};
pub use crate::domain::ports::{ConfigProvider, PrimalityTest};
pub use crate::utils::error::Result;
