//! financelite: a lightweight Yahoo Finance client.
//!
//! Quotes, charts, historical closes, and news headlines, with no caching,
//! no retries, and no authentication: every call is a one-shot, stateless
//! request. Quote responses can be projected down to a chosen set of
//! provider fields, validated against [`fields::ACCEPTED_FIELDS`].

pub mod chart;
pub mod core;
pub mod fields;
pub mod news;
pub mod quote;

mod group;
mod ticker;

pub use crate::core::{FinClient, FinClientBuilder, FinError};
pub use chart::{ChartData, ChartMeta, HistoricalResult, LivePrice};
pub use group::Group;
pub use news::{FeedEntry, FeedParser, FeedResult, News};
pub use quote::{Quote, project};
pub use ticker::Ticker;
