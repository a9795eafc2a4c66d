use crate::domain::model::StandingEntry;
use crate::utils::error::Result;

/// Namespace every element of an Ergast response lives in.
pub const MRD_NS: &str = "http://ergast.com/mrd/1.5";

// Positions missing or unparseable fall back to this sentinel, which keeps the
// entry outside any realistic top-K window.
const POSITION_SENTINEL: u32 = 999;

const MISSING_NAME: &str = "N/A";

/// Extracts the first `position_limit` entries from a driver-standings
/// document.
///
/// The provider returns standings pre-sorted by position ascending; the scan
/// relies on that, stops as soon as the limit is reached, and never re-sorts.
/// An out-of-order document therefore yields whatever qualifying entries
/// appear before the limit is hit.
pub fn parse_top(xml: &str, position_limit: u32) -> Result<Vec<StandingEntry>> {
    let doc = roxmltree::Document::parse(xml)?;
    let mut entries = Vec::new();

    for standing in doc
        .descendants()
        .filter(|node| node.has_tag_name((MRD_NS, "DriverStanding")))
    {
        let position = standing
            .attribute("position")
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(POSITION_SENTINEL);

        if position >= 1 && position <= position_limit {
            entries.push(StandingEntry {
                position,
                driver: driver_name(standing),
            });
        }

        if entries.len() as u32 >= position_limit {
            break;
        }
    }

    Ok(entries)
}

/// "given family", with "N/A" standing in for whichever part is missing.
fn driver_name(standing: roxmltree::Node) -> String {
    let driver = standing
        .children()
        .find(|node| node.has_tag_name((MRD_NS, "Driver")));

    let name_part = |tag: &str| {
        driver
            .and_then(|driver| driver.children().find(|node| node.has_tag_name((MRD_NS, tag))))
            .and_then(|node| node.text())
            .unwrap_or(MISSING_NAME)
    };

    format!("{} {}", name_part("GivenName"), name_part("FamilyName"))
}
