//! The CHART feed catalog and the fetch-parse-normalize pipeline.

pub mod download;
pub mod registry;

use crate::error::{FeedError, Result};
use crate::normalize::{self, Output};

pub use registry::{feed, feed_url, FeedSpec, FEEDS};

/// Fetch a feed by name and normalize it.
///
/// `filter` is the optional upstream passthrough value (a route, route type,
/// or station name, depending on the feed). Returns `Ok(None)` when the feed
/// currently publishes no records.
pub fn get_feed(name: &str, filter: Option<&str>) -> Result<Option<Output>> {
    let spec = registry::feed(name).ok_or_else(|| FeedError::UnknownFeed(name.to_string()))?;
    fetch_and_normalize(spec, filter)
}

/// The single pipeline every feed goes through: build URL, fetch, parse, walk.
pub fn fetch_and_normalize(spec: &FeedSpec, filter: Option<&str>) -> Result<Option<Output>> {
    let url = registry::feed_url(spec, filter)?;
    log::info!("Fetching '{}' feed from {}", spec.name, url);
    let body = download::fetch(&url)?;
    let root = normalize::xml::parse_document(&body)?;
    let output = normalize::normalize(spec.shape, &root)?;
    match &output {
        Some(Output::Collection(collection)) => log::info!(
            "Feed '{}' returned {} features",
            spec.name,
            collection.feature_count
        ),
        Some(Output::Records(set)) => {
            log::info!("Feed '{}' returned {} records", spec.name, set.records.len())
        }
        None => log::info!("Feed '{}' returned no records", spec.name),
    }
    Ok(output)
}

/// Current traffic incidents, with per-lane detail.
pub fn get_incidents() -> Result<Option<Output>> {
    get_feed("incidents", None)
}

/// Current road closures, flattened across closure-type groups.
pub fn get_closures() -> Result<Option<Output>> {
    get_feed("closures", None)
}

/// Snow route restrictions, optionally filtered by route type
/// (e.g. "Interstate Highways").
pub fn get_restrictions(route_type: Option<&str>) -> Result<Option<Output>> {
    get_feed("restrictions", route_type)
}

/// Travel speed sensors, optionally filtered by route (e.g. "I-95").
pub fn get_speed_sensors(route: Option<&str>) -> Result<Option<Output>> {
    get_feed("speed", route)
}

/// Roadside weather stations (RWIS), optionally filtered by station name.
pub fn get_weather_stations(station_name: Option<&str>) -> Result<Option<Output>> {
    get_feed("weather-stations", station_name)
}

/// Dynamic message signs and their posted messages.
pub fn get_message_signs() -> Result<Option<Output>> {
    get_feed("message-signs", None)
}

/// Traffic cameras.
pub fn get_cameras() -> Result<Option<Output>> {
    get_feed("cameras", None)
}

/// County snow emergency declarations.
pub fn get_snow_emergencies() -> Result<Option<Output>> {
    get_feed("snow-emergencies", None)
}

#[cfg(test)]
mod tests {
    use super::get_feed;
    use crate::error::FeedError;

    #[test]
    fn test_unknown_feed_name_is_rejected_before_any_fetch() {
        assert!(matches!(
            get_feed("ferries", None),
            Err(FeedError::UnknownFeed(name)) if name == "ferries"
        ));
    }
}
