pub mod ergast;
pub mod evaluator;
pub mod standings;

pub use crate::domain::model::{PredictionSummary, SeasonQuery, SeasonResult, StandingEntry};
pub use crate::domain::ports::{ConfigProvider, StandingsSource};
pub use crate::utils::error::Result;
