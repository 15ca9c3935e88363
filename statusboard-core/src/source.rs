//! Collaborator traits — the narrow seam between the bot and the publisher.
//!
//! The bot process owns command registration, IRC parsing and the channel
//! roster; the publisher only ever sees them through these two traits.

use crate::types::{Chatter, Table};

/// A registered bot module that may expose dashboard state.
pub trait DashboardSource {
    /// Module name; doubles as the page title and output filename.
    fn name(&self) -> &str;

    /// Current state tables, or `None` for "no dashboard for this module".
    fn state(&self) -> Option<Vec<Table>>;

    /// Short description, shown on the index page.
    fn description(&self) -> String;

    /// Long description, shown on the module's own page.
    fn full_description(&self) -> String {
        self.description()
    }
}

/// Live view of the bot: registered modules plus the channel roster.
pub trait ModuleRegistry {
    /// Registered command modules, in registration order.
    fn commands(&self) -> Vec<&dyn DashboardSource>;

    /// Registered feature modules, in registration order.
    fn features(&self) -> Vec<&dyn DashboardSource>;

    /// Users currently in the channel with their privilege levels.
    fn chatters(&self) -> Vec<Chatter>;
}
