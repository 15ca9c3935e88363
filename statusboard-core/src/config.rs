//! Publishing configuration.
//!
//! One explicit value threaded into the page builder, scheduler and sync
//! worker at construction time — nothing here is global state.

use std::path::PathBuf;

/// Configuration for the publishing pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct PublishConfig {
    /// Root directory for generated pages.
    pub output_root: PathBuf,
    /// Channel name without the leading `#`.
    pub channel: String,
    /// Bot name; used as the index page title.
    pub bot_name: String,
    /// Duration of one external poll cycle, in seconds.
    pub poll_interval_secs: f64,
    /// Poll cycles between publishes.
    pub ticks_per_cycle: u32,
}

impl PublishConfig {
    pub const DEFAULT_TICKS_PER_CYCLE: u32 = 120;

    /// Build a config, stripping any leading `#` from the channel name.
    pub fn new(
        output_root: impl Into<PathBuf>,
        channel: &str,
        bot_name: impl Into<String>,
        poll_interval_secs: f64,
    ) -> Self {
        PublishConfig {
            output_root: output_root.into(),
            channel: channel.trim_start_matches('#').to_string(),
            bot_name: bot_name.into(),
            poll_interval_secs,
            ticks_per_cycle: Self::DEFAULT_TICKS_PER_CYCLE,
        }
    }

    /// `<output_root>/<channel>/` — where this channel's pages land.
    pub fn channel_dir(&self) -> PathBuf {
        self.output_root.join(&self.channel)
    }

    /// Meta-refresh interval: half a publish cycle, in seconds.
    pub fn refresh_interval_secs(&self) -> u32 {
        (self.poll_interval_secs * f64::from(self.ticks_per_cycle) / 2.0) as u32
    }

    /// Path for one page file inside the channel directory.
    pub fn page_path(&self, name: &str) -> PathBuf {
        self.channel_dir().join(format!("{name}.html"))
    }
}
