//! `deckcat` - Join workshop Markdown sections into a single slide deck source
//!
//! This library reads an ordered list of Markdown files relative to a base
//! directory and concatenates them verbatim, optionally wrapping the result in
//! a remark.js page.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod cli;
pub mod concat;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod remark;

pub use concat::{concatenate, Concatenator};
pub use config::Config;
pub use error::{Error, Result};
pub use logging::init_logging;
pub use remark::RemarkPage;
