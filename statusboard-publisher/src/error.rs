//! Error types for statusboard-publisher.

use thiserror::Error;

use statusboard_renderer::RenderError;
use statusboard_sync::SyncError;

/// All errors that can arise from a publish cycle.
///
/// Render and local-write failures propagate uncaught to the tick driver —
/// the scheduler has no recovery path for them. Remote sync failures never
/// appear here; they are contained inside statusboard-sync.
#[derive(Debug, Error)]
pub enum PublishError {
    /// Page rendering or local page write failed.
    #[error("render error: {0}")]
    Render(#[from] RenderError),

    /// Credential loading or sync worker startup failed.
    #[error("sync setup error: {0}")]
    Sync(#[from] SyncError),
}
