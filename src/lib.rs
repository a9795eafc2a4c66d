pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::CliConfig;
pub use crate::core::{ergast::ErgastClient, evaluator::SeasonEvaluator};
pub use crate::utils::error::{PredictError, Result};
