//! # statusboard-core
//!
//! Data model for the status dashboard publisher: the taint-tracking
//! [`SafeString`] type and its escaping-preserving combinators, tabular page
//! types, the collaborator traits the bot implements, and the publishing
//! configuration.

pub mod config;
pub mod error;
pub mod html;
pub mod source;
pub mod types;

pub use config::PublishConfig;
pub use error::HtmlError;
pub use html::{escape, HtmlText, SafeString};
pub use source::{DashboardSource, ModuleRegistry};
pub use types::{Chatter, Page, Table, TableRow};
