//! sec-api.io N-PORT search integration.
//!
//! This module provides:
//! - The search request body for "most recent filing of a CIK"
//! - Raw response types mirroring the upstream JSON
//! - A reqwest-backed client behind the [`FilingSource`] trait
//!
//! # Example
//!
//! ```no_run
//! use nport_data::config::SecApiConfig;
//! use nport_data::sec_api::{FilingSource, SearchQuery, SecApiClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = SecApiClient::new(SecApiConfig::from_env()?)?;
//!     let response = client.search(&SearchQuery::latest_for_cik("0000884394")).await?;
//!     println!("{} filing(s)", response.filings.map_or(0, |f| f.len()));
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod payload;

pub use client::{FilingSource, SecApiClient};
pub use payload::{RawFiling, RawGenInfo, RawHolding, RawSearchResponse, SearchQuery};
