//! End-to-end poll cycle tests over the file-backed snapshot store.
//!
//! These tests run full cycles the way an embedding bot would: in-memory
//! chat and preferences adapters around a real [`JsonSnapshotStore`],
//! verifying that detection state survives process restarts and that
//! aborted cycles leave the persisted state byte-identical.

#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]

use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

use boardwatch::board::adapters::json::JsonSnapshotStore;
use boardwatch::board::adapters::memory::StaticBoardGateway;
use boardwatch::board::domain::{BoardId, CredentialsHandle, MemberId, ScopeId};
use boardwatch::board::ports::{RawCard, RawChecklist, RawChecklistItem};
use boardwatch::notify::adapters::memory::{InMemoryPreferences, RecordingMessenger};
use boardwatch::notify::domain::{ChannelName, RecipientId, RegistryEntry, ScopeRegistry};
use boardwatch::poll::{CycleError, CycleLimiter, PollOrchestrator};
use camino::{Utf8Path, Utf8PathBuf};
use mockable::DefaultClock;
use tokio::runtime::Runtime;

static DIR_COUNTER: AtomicU32 = AtomicU32::new(0);

fn test_runtime() -> Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("failed to create test runtime")
}

struct ScratchDir {
    path: Utf8PathBuf,
}

impl ScratchDir {
    fn new() -> Self {
        let ordinal = DIR_COUNTER.fetch_add(1, Ordering::Relaxed);
        let raw_path = std::env::temp_dir().join(format!(
            "boardwatch-cycle-{}-{ordinal}",
            std::process::id()
        ));
        let path = Utf8PathBuf::from_path_buf(raw_path).expect("temp dir path is UTF-8");
        std::fs::create_dir_all(&path).expect("create scratch dir");
        Self { path }
    }

    fn path(&self) -> &Utf8Path {
        &self.path
    }
}

impl Drop for ScratchDir {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.path);
    }
}

fn scope() -> ScopeId {
    ScopeId::new("guild-1")
}

fn registry() -> ScopeRegistry {
    ScopeRegistry::new()
        .with_board(BoardId::new("b1"))
        .with_credentials(CredentialsHandle::new("cred-1"))
        .with_entry(
            RegistryEntry::new(MemberId::new("m1"), RecipientId::new("u1"))
                .with_channel(ChannelName::new("general")),
        )
}

fn raw_card(description: &str, items: &[(&str, &str)]) -> RawCard {
    RawCard {
        id: "c1".to_owned(),
        name: "Release".to_owned(),
        url: "https://board/c/c1".to_owned(),
        description: description.to_owned(),
        member_ids: vec!["m1".to_owned()],
        checklists: vec![RawChecklist {
            name: "Setup".to_owned(),
            items: items
                .iter()
                .map(|(name, state)| RawChecklistItem {
                    name: (*name).to_owned(),
                    state: (*state).to_owned(),
                })
                .collect(),
        }],
    }
}

fn orchestrator(
    dir: &Utf8Path,
    gateway: &Arc<StaticBoardGateway>,
    messenger: &Arc<RecordingMessenger>,
) -> PollOrchestrator<
    StaticBoardGateway,
    JsonSnapshotStore,
    InMemoryPreferences,
    RecordingMessenger,
    DefaultClock,
> {
    let preferences = Arc::new(InMemoryPreferences::new());
    preferences.set_registry(scope(), registry());
    let store = Arc::new(JsonSnapshotStore::open(dir).expect("open store"));
    PollOrchestrator::new(
        Arc::clone(gateway),
        store,
        preferences,
        Arc::clone(messenger),
        Arc::new(DefaultClock),
        CycleLimiter::new(2),
    )
}

#[test]
fn detection_state_survives_a_restart() {
    let rt = test_runtime();
    let scratch = ScratchDir::new();
    let gateway = Arc::new(StaticBoardGateway::with_cards(vec![raw_card(
        "body",
        &[("init", "incomplete")],
    )]));
    let messenger = Arc::new(RecordingMessenger::new());

    // First process lifetime: the card is announced as new.
    let first = orchestrator(scratch.path(), &gateway, &messenger);
    let report = rt
        .block_on(first.run_cycle(&scope()))
        .expect("first cycle completes");
    assert_eq!(report.new_cards(), 1);

    // Second process lifetime over the same directory: the card is known,
    // only the item completion is reported.
    gateway.set_cards(vec![raw_card("body", &[("init", "complete")])]);
    let second = orchestrator(scratch.path(), &gateway, &messenger);
    let second_report = rt
        .block_on(second.run_cycle(&scope()))
        .expect("second cycle completes");

    assert_eq!(second_report.new_cards(), 0);
    assert_eq!(second_report.updated_cards(), 1);

    let sent = messenger.sent();
    assert_eq!(sent.len(), 2);
    let update = sent.last().expect("update message");
    assert!(update.text.contains("✅ **Item completed:** init (Setup)"));
    assert!(!update.text.contains("new card has been assigned"));
}

#[test]
fn aborted_cycle_leaves_persisted_state_byte_identical() {
    let rt = test_runtime();
    let scratch = ScratchDir::new();
    let gateway = Arc::new(StaticBoardGateway::with_cards(vec![raw_card(
        "body",
        &[("init", "incomplete")],
    )]));
    let messenger = Arc::new(RecordingMessenger::new());
    let runner = orchestrator(scratch.path(), &gateway, &messenger);

    rt.block_on(runner.run_cycle(&scope()))
        .expect("first cycle completes");
    let state_file = scratch.path().join("guild-1.json");
    let before = std::fs::read(&state_file).expect("state file exists");

    gateway.set_unavailable(true);
    let result = rt.block_on(runner.run_cycle(&scope()));
    assert!(matches!(result, Err(CycleError::BoardUnavailable(_))));

    let after = std::fs::read(&state_file).expect("state file still exists");
    assert_eq!(before, after);
}

#[test]
fn repeated_runs_against_unchanged_board_send_nothing_new() {
    let rt = test_runtime();
    let scratch = ScratchDir::new();
    let gateway = Arc::new(StaticBoardGateway::with_cards(vec![raw_card(
        "body",
        &[("init", "incomplete")],
    )]));
    let messenger = Arc::new(RecordingMessenger::new());
    let runner = orchestrator(scratch.path(), &gateway, &messenger);

    rt.block_on(runner.run_cycle(&scope()))
        .expect("first cycle completes");
    for _ in 0..3 {
        let report = rt
            .block_on(runner.run_cycle(&scope()))
            .expect("repeat cycle completes");
        assert_eq!(report.summary(), "No new or updated cards found.");
    }
    assert_eq!(messenger.sent().len(), 1);
}
