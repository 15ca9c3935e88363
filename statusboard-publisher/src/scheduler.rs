//! Tick-driven publish scheduler.
//!
//! The bot drives [`PublishScheduler::tick`] once per poll cycle. The
//! scheduler counts down; when the counter hits zero it regenerates every
//! dashboard page from live module state, writes them locally and — when a
//! sync worker was set up at startup — enqueues one background sync request.
//! It never blocks on sync and runs for the process lifetime.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use statusboard_core::{ModuleRegistry, Page, PublishConfig, Table, TableRow};
use statusboard_renderer::{html_link, PageBuilder, RenderError};
use statusboard_sync::{credentials, FtpHost, LogObserver, SyncWorker};

use crate::error::PublishError;

/// Number of ticks before the very first publish. One poll cycle: the first
/// tick after startup publishes immediately.
const WARM_UP_TICKS: u32 = 1;

/// What a single tick did.
#[derive(Debug)]
pub enum TickOutcome {
    /// Counter still positive; nothing happened.
    Idle { ticks_remaining: u32 },
    /// A full publish cycle ran.
    Published {
        /// Local paths of every page written, in write order.
        pages: Vec<PathBuf>,
        /// Whether a background sync request was accepted.
        sync_requested: bool,
    },
}

/// Tick-counting state machine that republishes all dashboard pages.
pub struct PublishScheduler {
    ticks_remaining: u32,
    ticks_per_cycle: u32,
    pages: PageBuilder,
    sync: Option<SyncWorker>,
}

impl PublishScheduler {
    /// Build a scheduler with an already-constructed sync worker (or `None`
    /// to disable remote sync).
    pub fn new(config: PublishConfig, sync: Option<SyncWorker>) -> Self {
        PublishScheduler {
            ticks_remaining: WARM_UP_TICKS,
            ticks_per_cycle: config.ticks_per_cycle,
            pages: PageBuilder::new(config),
            sync,
        }
    }

    /// Build a scheduler, loading remote credentials from `credentials_path`.
    ///
    /// A missing credentials file silently disables sync for the process
    /// lifetime; a malformed one is an error.
    pub fn from_config(
        config: PublishConfig,
        credentials_path: &Path,
    ) -> Result<Self, PublishError> {
        let sync = match credentials::load_at(credentials_path)? {
            Some(creds) => Some(SyncWorker::spawn(
                config.channel_dir(),
                creds,
                FtpHost,
                Arc::new(LogObserver),
            )?),
            None => {
                tracing::info!(
                    "no credentials file at {}; remote sync disabled",
                    credentials_path.display(),
                );
                None
            }
        };
        Ok(Self::new(config, sync))
    }

    /// Advance one poll cycle. Publishes when the counter reaches zero and
    /// resets it to the configured cycle length.
    pub fn tick(&mut self, registry: &dyn ModuleRegistry) -> Result<TickOutcome, PublishError> {
        self.ticks_remaining = self.ticks_remaining.saturating_sub(1);
        if self.ticks_remaining > 0 {
            return Ok(TickOutcome::Idle {
                ticks_remaining: self.ticks_remaining,
            });
        }
        self.ticks_remaining = self.ticks_per_cycle;
        self.publish(registry)
    }

    fn publish(&mut self, registry: &dyn ModuleRegistry) -> Result<TickOutcome, PublishError> {
        let mut written = Vec::new();
        let mut index_rows: Vec<TableRow> =
            vec![vec!["Module Name".into(), "Description".into()]];

        let commands = registry.commands();
        let features = registry.features();
        for source in commands.iter().chain(features.iter()) {
            let Some(tables) = source.state() else {
                continue;
            };
            let page = Page::dashboard(source.name(), tables, source.full_description());
            written.push(self.pages.publish(&page)?);

            let link = html_link(source.name(), &format!("{}.html", source.name()))
                .map_err(RenderError::from)?;
            index_rows.push(vec![link.into(), source.description().into()]);
        }

        written.push(self.publish_chatters(registry)?);
        let chatters_link = html_link("Chatters", "chatters.html").map_err(RenderError::from)?;
        index_rows.push(vec![
            chatters_link.into(),
            "A list of all users in chat".into(),
        ]);

        let index = Page::index(
            self.pages.config().bot_name.clone(),
            vec![Table::new(index_rows)],
        );
        written.push(self.pages.publish(&index)?);

        let sync_requested = self.sync.as_ref().map(SyncWorker::request).unwrap_or(false);

        tracing::info!(
            pages = written.len(),
            sync_requested,
            "publish cycle completed",
        );
        Ok(TickOutcome::Published {
            pages: written,
            sync_requested,
        })
    }

    fn publish_chatters(&self, registry: &dyn ModuleRegistry) -> Result<PathBuf, PublishError> {
        let mut rows: Vec<TableRow> = vec![vec!["User".into(), "User Level".into()]];
        for chatter in registry.chatters() {
            rows.push(vec![chatter.name.into(), chatter.level.into()]);
        }
        let page = Page::dashboard(
            "Chatters",
            vec![Table::new(rows)],
            "All users currently in the chat channel",
        )
        .with_filename("chatters");
        Ok(self.pages.publish(&page)?)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
