use std::time::Duration;

use reqwest::Client;
use tracing::debug;

use crate::input::LoadError;

pub async fn fetch_bytes(url: &str, timeout: Duration) -> Result<Vec<u8>, LoadError> {
    let client = Client::builder().timeout(timeout).build()?;
    debug!(url, "fetching score summary");
    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(LoadError::Network {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }
    let body = response.bytes().await?;
    Ok(body.to_vec())
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/fetch.rs"]
mod tests;
