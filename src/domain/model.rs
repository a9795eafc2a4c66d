use serde::{Deserialize, Serialize};

/// One row of a driver-standings document: a championship position paired with
/// the driver's full name. Position uniqueness within a document is assumed,
/// not verified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandingEntry {
    pub position: u32,
    pub driver: String,
}

/// Identifies one standings document: a season, optionally narrowed to the
/// state after a specific race. `race: None` means the season-final standings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeasonQuery {
    pub year: u16,
    pub race: Option<u32>,
}

impl SeasonQuery {
    pub fn season_final(year: u16) -> Self {
        Self { year, race: None }
    }

    pub fn after_race(year: u16, race: u32) -> Self {
        Self {
            year,
            race: Some(race),
        }
    }
}

/// Everything learned about one season: the early leaders and, if the lookup
/// succeeded, the eventual champion.
#[derive(Debug, Clone, Serialize)]
pub struct SeasonResult {
    pub year: u16,
    pub early_leaders: Vec<String>,
    pub winner: Option<String>,
}

impl SeasonResult {
    /// Exact string match of the winner against the early leaders. An absent
    /// winner never matches.
    pub fn is_match(&self) -> bool {
        match &self.winner {
            Some(winner) => self.early_leaders.iter().any(|name| name == winner),
            None => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PredictionSummary {
    pub matches: usize,
    pub total_years: usize,
}

impl PredictionSummary {
    /// Match percentage over the full year range. Fetch-failure years stay in
    /// the denominator.
    pub fn frequency(&self) -> f64 {
        if self.total_years == 0 {
            return 0.0;
        }
        self.matches as f64 / self.total_years as f64 * 100.0
    }
}
