use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "f1-predict")]
#[command(about = "Checks how often the early-season F1 standings predict the champion")]
pub struct CliConfig {
    /// Ergast API root, without the /api/f1 suffix
    #[arg(long, default_value = "http://ergast.com")]
    pub base_url: String,

    /// First season evaluated
    #[arg(long, default_value = "1950")]
    pub first_year: u16,

    /// First season NOT evaluated; the range is [first_year, end_year)
    #[arg(long, default_value = "2024")]
    pub end_year: u16,

    /// How many leading positions count as "early leaders"
    #[arg(long, default_value = "3")]
    pub top_cutoff: u32,

    /// Race number the early standings are taken after
    #[arg(long, default_value = "3")]
    pub early_race: u32,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn first_year(&self) -> u16 {
        self.first_year
    }

    fn end_year(&self) -> u16 {
        self.end_year
    }

    fn top_cutoff(&self) -> u32 {
        self.top_cutoff
    }

    fn early_race(&self) -> u32 {
        self.early_race
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("base_url", &self.base_url)?;
        validation::validate_year_range("first_year", self.first_year, self.end_year)?;
        validation::validate_positive_number("top_cutoff", self.top_cutoff as usize, 1)?;
        validation::validate_positive_number("early_race", self.early_race as usize, 1)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_config() -> CliConfig {
        CliConfig {
            base_url: "http://ergast.com".to_string(),
            first_year: 1950,
            end_year: 2024,
            top_cutoff: 3,
            early_race: 3,
            verbose: false,
        }
    }

    #[test]
    fn default_config_is_valid() {
        assert!(default_config().validate().is_ok());
    }

    #[test]
    fn rejects_inverted_year_range() {
        let config = CliConfig {
            first_year: 2024,
            end_year: 1950,
            ..default_config()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_zero_cutoffs() {
        let config = CliConfig {
            top_cutoff: 0,
            ..default_config()
        };
        assert!(config.validate().is_err());

        let config = CliConfig {
            early_race: 0,
            ..default_config()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_non_http_base_url() {
        let config = CliConfig {
            base_url: "ftp://ergast.com".to_string(),
            ..default_config()
        };
        assert!(config.validate().is_err());
    }
}
