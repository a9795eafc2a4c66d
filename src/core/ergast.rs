use crate::core::standings;
use crate::domain::model::SeasonQuery;
use crate::domain::ports::StandingsSource;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;

/// HTTP client for the Ergast driver-standings endpoints. One shared reqwest
/// client, one GET per query, no auth or extra headers.
pub struct ErgastClient {
    client: Client,
    base_url: String,
}

impl ErgastClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// `{base}/api/f1/{year}/{race}/driverStandings`, with the race segment
    /// omitted for season-final standings.
    fn standings_url(&self, query: SeasonQuery) -> String {
        match query.race {
            Some(race) => format!(
                "{}/api/f1/{}/{}/driverStandings",
                self.base_url, query.year, race
            ),
            None => format!("{}/api/f1/{}/driverStandings", self.base_url, query.year),
        }
    }
}

#[async_trait]
impl StandingsSource for ErgastClient {
    async fn fetch_top(&self, query: SeasonQuery, position_limit: u32) -> Result<Vec<String>> {
        let url = self.standings_url(query);
        tracing::debug!("GET {}", url);

        let response = self.client.get(&url).send().await?.error_for_status()?;
        tracing::debug!("response status: {}", response.status());
        let body = response.text().await?;

        let entries = standings::parse_top(&body, position_limit)?;
        Ok(entries.into_iter().map(|entry| entry.driver).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::FailureCategory;
    use httpmock::prelude::*;

    const STANDINGS_1992: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<MRData xmlns="http://ergast.com/mrd/1.5" series="f1">
  <StandingsTable season="1992">
    <StandingsList season="1992" round="3">
      <DriverStanding position="1" points="26">
        <Driver driverId="mansell">
          <GivenName>Nigel</GivenName>
          <FamilyName>Mansell</FamilyName>
        </Driver>
      </DriverStanding>
      <DriverStanding position="2" points="18">
        <Driver driverId="patrese">
          <GivenName>Riccardo</GivenName>
          <FamilyName>Patrese</FamilyName>
        </Driver>
      </DriverStanding>
    </StandingsList>
  </StandingsTable>
</MRData>"#;

    #[test]
    fn url_includes_race_segment_when_present() {
        let client = ErgastClient::new("http://ergast.com/");

        assert_eq!(
            client.standings_url(SeasonQuery::after_race(1992, 3)),
            "http://ergast.com/api/f1/1992/3/driverStandings"
        );
        assert_eq!(
            client.standings_url(SeasonQuery::season_final(1992)),
            "http://ergast.com/api/f1/1992/driverStandings"
        );
    }

    #[tokio::test]
    async fn fetches_and_parses_race_standings() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/api/f1/1992/3/driverStandings");
            then.status(200)
                .header("Content-Type", "application/xml")
                .body(STANDINGS_1992);
        });

        let client = ErgastClient::new(server.base_url());
        let names = client
            .fetch_top(SeasonQuery::after_race(1992, 3), 3)
            .await
            .unwrap();

        mock.assert();
        assert_eq!(names, ["Nigel Mansell", "Riccardo Patrese"]);
    }

    #[tokio::test]
    async fn season_final_query_omits_race_segment() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/api/f1/1992/driverStandings");
            then.status(200)
                .header("Content-Type", "application/xml")
                .body(STANDINGS_1992);
        });

        let client = ErgastClient::new(server.base_url());
        let names = client
            .fetch_top(SeasonQuery::season_final(1992), 1)
            .await
            .unwrap();

        mock.assert();
        assert_eq!(names, ["Nigel Mansell"]);
    }

    #[tokio::test]
    async fn http_error_status_is_a_transport_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/f1/1992/driverStandings");
            then.status(500);
        });

        let client = ErgastClient::new(server.base_url());
        let err = client
            .fetch_top(SeasonQuery::season_final(1992), 1)
            .await
            .unwrap_err();

        assert_eq!(err.category(), FailureCategory::Transport);
    }

    #[tokio::test]
    async fn connection_refused_is_a_transport_error() {
        // Port 1 is never bound in the test environment.
        let client = ErgastClient::new("http://127.0.0.1:1");
        let err = client
            .fetch_top(SeasonQuery::season_final(1992), 1)
            .await
            .unwrap_err();

        assert_eq!(err.category(), FailureCategory::Transport);
    }

    #[tokio::test]
    async fn non_xml_body_is_a_parse_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/f1/1992/driverStandings");
            then.status(200).body("not xml at all");
        });

        let client = ErgastClient::new(server.base_url());
        let err = client
            .fetch_top(SeasonQuery::season_final(1992), 1)
            .await
            .unwrap_err();

        assert_eq!(err.category(), FailureCategory::Parse);
    }
}
