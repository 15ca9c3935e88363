//! End-to-end publish cycle: one module with live state, an empty output
//! directory, one tick — three pages on disk with escaped content.

use std::fs;

use tempfile::TempDir;

use statusboard_core::{Chatter, DashboardSource, ModuleRegistry, PublishConfig, Table};
use statusboard_publisher::{PublishScheduler, TickOutcome};

struct StubModule;

impl DashboardSource for StubModule {
    fn name(&self) -> &str {
        "UpTime"
    }

    fn state(&self) -> Option<Vec<Table>> {
        Some(vec![Table::from_rows([["K", "V"]])])
    }

    fn description(&self) -> String {
        "d".to_string()
    }
}

struct StubBot;

impl ModuleRegistry for StubBot {
    fn commands(&self) -> Vec<&dyn DashboardSource> {
        vec![&StubModule]
    }

    fn features(&self) -> Vec<&dyn DashboardSource> {
        vec![]
    }

    fn chatters(&self) -> Vec<Chatter> {
        vec![Chatter::new("alice<script>", "Moderator")]
    }
}

#[test]
fn one_publish_cycle_produces_all_three_pages() {
    let root = TempDir::new().unwrap();
    let mut config = PublishConfig::new(root.path(), "#somechannel", "TestBot", 1.0);
    config.ticks_per_cycle = 1;

    let mut scheduler = PublishScheduler::new(config, None);
    let outcome = scheduler.tick(&StubBot).unwrap();

    let TickOutcome::Published { pages, .. } = outcome else {
        panic!("first tick should publish");
    };
    assert_eq!(pages.len(), 3);

    let channel_dir = root.path().join("somechannel");
    for name in ["UpTime.html", "chatters.html", "index.html"] {
        assert!(channel_dir.join(name).exists(), "{name} missing");
    }

    let module_page = fs::read_to_string(channel_dir.join("UpTime.html")).unwrap();
    assert!(module_page.contains("<th>K</th><th>V</th>"));
    assert!(module_page.contains("d<br/><br/>"), "description rendered");
    assert!(module_page.contains("<a href=\"index.html\">Return to Index</a>"));
    assert!(module_page.contains("Page generated at "));

    let chatters_page = fs::read_to_string(channel_dir.join("chatters.html")).unwrap();
    assert!(
        chatters_page.contains("<td>alice&lt;script&gt;</td>"),
        "untrusted chatter names must be escaped"
    );

    let index_page = fs::read_to_string(channel_dir.join("index.html")).unwrap();
    assert!(index_page.contains("<title>TestBot</title>"));
    assert!(index_page.contains("<a href=\"UpTime.html\">UpTime</a>"));
    assert!(index_page.contains("<td>d</td>"));
    assert!(!index_page.contains("Return to Index"));
}

#[test]
fn repeated_cycles_overwrite_pages_in_place() {
    let root = TempDir::new().unwrap();
    let mut config = PublishConfig::new(root.path(), "#somechannel", "TestBot", 1.0);
    config.ticks_per_cycle = 1;

    let mut scheduler = PublishScheduler::new(config, None);
    scheduler.tick(&StubBot).unwrap();
    scheduler.tick(&StubBot).unwrap();

    let channel_dir = root.path().join("somechannel");
    let entries: Vec<_> = fs::read_dir(&channel_dir).unwrap().collect();
    assert_eq!(entries.len(), 3, "pages are replaced, not accumulated");
}
