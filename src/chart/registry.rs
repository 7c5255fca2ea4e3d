use url::Url;

use crate::error::{FeedError, Result};
use crate::normalize::Shape;

/// One entry of the feed table: everything that distinguishes a feed from the
/// others. Feeds differ only by configuration, never by traversal code.
#[derive(Debug, Clone, Copy)]
pub struct FeedSpec {
    pub name: &'static str,
    pub service_url: &'static str,
    pub shape: Shape,
    /// Caller-facing name of the optional upstream filter, when one exists.
    /// The upstream query key is always `filter` regardless.
    pub filter_param: Option<&'static str>,
}

/// Process-wide feed table, fixed at compile time.
pub const FEEDS: &[FeedSpec] = &[
    FeedSpec {
        name: "incidents",
        service_url: "https://chart.maryland.gov/rss/ProduceRSS.aspx?Type=TIandRCXML&filter=TI",
        shape: Shape::NestedGeo { group_tag: "lanes" },
        filter_param: None,
    },
    FeedSpec {
        name: "closures",
        service_url: "https://chart.maryland.gov/rss/ProduceRSS.aspx?Type=TIandRCXML&filter=RC",
        shape: Shape::DoubleNestedGeo { group_tag: "lanes" },
        filter_param: None,
    },
    FeedSpec {
        name: "restrictions",
        service_url: "https://chart.maryland.gov/rss/ProduceRSS.aspx?Type=RouteRestrictionsXML&filter=ALL",
        shape: Shape::Tabular { container: "restrictions" },
        filter_param: Some("route_type"),
    },
    FeedSpec {
        name: "speed",
        service_url: "https://chart.maryland.gov/rss/ProduceRSS.aspx?Type=TravelSpeedsXML",
        shape: Shape::FlatGeo,
        filter_param: Some("route"),
    },
    FeedSpec {
        name: "weather-stations",
        service_url: "https://chart.maryland.gov/rss/ProduceRss.aspx?Type=WeatherStationXML",
        shape: Shape::FlatGeo,
        filter_param: Some("station_name"),
    },
    FeedSpec {
        name: "message-signs",
        service_url: "https://chart.maryland.gov/rss/ProduceRss.aspx?Type=DMSXML",
        shape: Shape::FlatGeo,
        filter_param: None,
    },
    FeedSpec {
        name: "cameras",
        service_url: "https://chart.maryland.gov/rss/ProduceRss.aspx?Type=VIDEOXML",
        shape: Shape::FlatGeo,
        filter_param: None,
    },
    FeedSpec {
        name: "snow-emergencies",
        service_url: "https://chart.maryland.gov/rss/ProduceRss.aspx?Type=SNEMXML",
        shape: Shape::Tabular { container: "declarations" },
        filter_param: None,
    },
];

/// Look up a feed by name.
pub fn feed(name: &str) -> Option<&'static FeedSpec> {
    FEEDS.iter().find(|spec| spec.name == name)
}

/// Build the request URL for a feed, applying the optional filter value.
///
/// The filter replaces any `filter` pair already present in the base URL, so
/// the request carries exactly one `filter` key.
pub fn feed_url(spec: &FeedSpec, filter: Option<&str>) -> Result<Url> {
    let mut url = Url::parse(spec.service_url)?;
    if let Some(value) = filter {
        if spec.filter_param.is_none() {
            return Err(FeedError::FilterNotSupported(spec.name));
        }
        let kept: Vec<(String, String)> = url
            .query_pairs()
            .filter(|(key, _)| key != "filter")
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect();
        url.query_pairs_mut()
            .clear()
            .extend_pairs(kept)
            .append_pair("filter", value);
    }
    Ok(url)
}
