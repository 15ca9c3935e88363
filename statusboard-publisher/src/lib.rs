//! # statusboard-publisher
//!
//! Tick-driven publisher that regenerates every dashboard page from live
//! module state and hands the output directory to the background sync
//! worker.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! use statusboard_core::{ModuleRegistry, PublishConfig};
//! use statusboard_publisher::PublishScheduler;
//!
//! fn run(bot: &dyn ModuleRegistry) {
//!     let config = PublishConfig::new("web", "#mychannel", "MyBot", 1.0);
//!     let Ok(mut scheduler) = PublishScheduler::from_config(config, Path::new("ftpcreds.txt"))
//!     else {
//!         return;
//!     };
//!     loop {
//!         // one call per poll cycle, driven by the bot's main loop
//!         if let Err(err) = scheduler.tick(bot) {
//!             eprintln!("publish cycle failed: {err}");
//!         }
//!     }
//! }
//! ```

pub mod error;
pub mod scheduler;

pub use error::PublishError;
pub use scheduler::{PublishScheduler, TickOutcome};
