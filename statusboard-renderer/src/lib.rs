//! # statusboard-renderer
//!
//! Assembles dashboard [`Page`](statusboard_core::Page)s into complete HTML
//! documents via the [`SafeString`](statusboard_core::SafeString) combinators
//! and writes them to the channel's output directory.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use statusboard_core::{Page, PublishConfig, Table};
//! use statusboard_renderer::PageBuilder;
//!
//! fn publish_uptime(config: PublishConfig) {
//!     let builder = PageBuilder::new(config);
//!     let page = Page::dashboard(
//!         "UpTime",
//!         vec![Table::from_rows([["Stream", "Uptime"], ["mychannel", "2h 10m"]])],
//!         "How long the stream has been live",
//!     );
//!     if let Ok(path) = builder.publish(&page) {
//!         println!("wrote {}", path.display());
//!     }
//! }
//! ```

pub mod error;
pub mod page;
pub mod templ;

pub use error::RenderError;
pub use page::{html_link, PageBuilder};
pub use templ::templ;
