#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/nport-explorer/nport/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod filing;
pub mod sec_api;
pub mod service;

pub use config::SecApiConfig;
pub use error::{NportError, Result};
pub use filing::{FilingSummary, Holding};
pub use service::FilingLookupService;

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
