//! Core types for the BetsAPI SDK.
//!
//! This module provides the domain types shared by the client: sports,
//! pages, odds and request options.

pub mod odds;
pub mod options;
pub mod page;
pub mod sport;

pub use odds::{MatchOdds, OddsResult};
pub use options::RequestOptions;
pub use page::{Page, Pager};
pub use sport::{Sport, UnknownSport};
