use crate::domain::model::SeasonQuery;
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn first_year(&self) -> u16;
    /// First year NOT evaluated; the range is [first_year, end_year).
    fn end_year(&self) -> u16;
    fn top_cutoff(&self) -> u32;
    fn early_race(&self) -> u32;
}

/// Source of driver-standings documents, already reduced to full names ordered
/// by position ascending and truncated to the first `position_limit` positions.
#[async_trait]
pub trait StandingsSource: Send + Sync {
    async fn fetch_top(&self, query: SeasonQuery, position_limit: u32) -> Result<Vec<String>>;
}
