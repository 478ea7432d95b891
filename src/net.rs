//! The single HTTP GET this tool performs.

use std::time::Instant;
use tracing::debug;

const USER_AGENT: &str = "Mozilla/5.0 (compatible; CFB-NFL-Sankey/1.0)";

/// Wikipedia page listing every selection of one NFL draft.
pub fn draft_url(year: i32) -> String {
    format!("https://en.wikipedia.org/wiki/{year}_NFL_Draft")
}

/// Blocking GET returning the body as text. Non-2xx statuses are errors.
///
/// No retries and no explicit timeout; the client's defaults apply.
pub fn get_text(url: &str) -> reqwest::Result<String> {
    let t0 = Instant::now();
    let client = reqwest::blocking::Client::builder()
        .user_agent(USER_AGENT)
        .build()?;

    let resp = client.get(url).send()?.error_for_status()?;
    debug!(status = %resp.status(), "response received");

    let body = resp.text()?;
    debug!(elapsed_ms = t0.elapsed().as_millis() as u64, "body read");
    Ok(body)
}
