use std::time::Duration;

use crate::error::AppResult;

/// Build the shared upstream HTTP client.
///
/// Only the connect phase is bounded; streamed completions may legitimately
/// stay open for minutes.
pub fn build_http_client(connect_timeout_secs: u64) -> AppResult<reqwest::Client> {
    let client = reqwest::Client::builder()
        .connect_timeout(Duration::from_secs(connect_timeout_secs.max(1)))
        .tcp_nodelay(true)
        .build()?;
    Ok(client)
}
