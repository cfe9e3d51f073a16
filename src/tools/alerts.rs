use crate::{InputSchema, ToolResult, ValidatedInput};
use serde::Deserialize;

pub const NAME: &str = "get_alerts";
pub const DESCRIPTION: &str = "Get weather alerts for a state";

const NO_ALERTS: &[&str] = &["No current alerts for this state"];

const ALERTS: &[(&str, &[&str])] = &[
    (
        "CA",
        &[
            "Wildfire warning in Northern California",
            "Heat advisory in Southern California",
        ],
    ),
    (
        "NY",
        &[
            "Flood warning in Western New York",
            "Thunderstorm watch in NYC metro area",
        ],
    ),
    (
        "FL",
        &[
            "Hurricane watch along the coast",
            "Flood warning in South Florida",
        ],
    ),
];

#[derive(Debug, Deserialize)]
struct Params {
    state: String,
}

pub fn schema() -> InputSchema {
    InputSchema::new().bounded_string(
        "state",
        Some(2),
        Some(2),
        "Two-letter state code (e.g. CA, NY)",
    )
}

pub async fn handle(input: ValidatedInput) -> anyhow::Result<ToolResult> {
    let params: Params = input.parse()?;
    Ok(ToolResult::text(report(&params.state)))
}

/// Alerts for a state code, in table order. Lookup is case-sensitive.
pub fn alerts_for(state: &str) -> &'static [&'static str] {
    ALERTS
        .iter()
        .find(|(code, _)| *code == state)
        .map(|(_, alerts)| *alerts)
        .unwrap_or(NO_ALERTS)
}

pub fn report(state: &str) -> String {
    let mut out = format!("Weather Alerts for {state}:");
    for alert in alerts_for(state) {
        out.push_str("\n- ");
        out.push_str(alert);
    }
    out
}
