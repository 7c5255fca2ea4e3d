//! Client for the Maryland CHART (Coordinated Highways Action Response Team)
//! public XML data feeds.
//!
//! Each feed is fetched over HTTP and normalized into a uniform JSON shape: a
//! GeoJSON-style FeatureCollection for point-located entities (incidents,
//! closures, speed sensors, weather stations, message signs, cameras) or a
//! flat list of records for the rest (route restrictions, snow emergency
//! declarations). Coordinates are coerced to numeric `[longitude, latitude]`
//! pairs; the upstream feeds publish them as text.
//!
//! ```no_run
//! let incidents = chart_feeds::chart::get_incidents()?;
//! if let Some(output) = incidents {
//!     println!("{}", serde_json::to_string_pretty(&output)?);
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod chart;
pub mod error;
pub mod normalize;

pub use chart::{get_feed, FeedSpec, FEEDS};
pub use error::{FeedError, Result};
pub use normalize::{Feature, FeatureCollection, Output, RecordSet, Shape};
