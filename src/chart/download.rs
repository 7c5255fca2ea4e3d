use url::Url;

use crate::error::Result;

const USER_AGENT: &str = concat!("chart-feeds/", env!("CARGO_PKG_VERSION"));

/// Blocking fetch of a feed body.
///
/// Any connection failure or non-2xx status surfaces as a transport error;
/// there is no retry and no caching at this layer.
pub fn fetch(url: &Url) -> Result<Vec<u8>> {
    let client = reqwest::blocking::Client::builder()
        .user_agent(USER_AGENT)
        .build()?;
    let response = client.get(url.clone()).send()?.error_for_status()?;
    Ok(response.bytes()?.to_vec())
}
