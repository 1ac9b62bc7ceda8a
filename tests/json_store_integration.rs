//! Behavioural integration tests for [`JsonSnapshotStore`].
//!
//! These tests exercise the file-backed store against a real directory,
//! verifying the whole-scope atomic replace contract and the recovery
//! paths for missing and corrupt state.

#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]

use boardwatch::board::adapters::json::JsonSnapshotStore;
use boardwatch::board::domain::{CardId, CardSnapshot, ScopeId};
use boardwatch::board::ports::{SnapshotSet, SnapshotStore};
use camino::{Utf8Path, Utf8PathBuf};
use std::sync::atomic::{AtomicU32, Ordering};
use tokio::runtime::Runtime;

static DIR_COUNTER: AtomicU32 = AtomicU32::new(0);

/// Creates a tokio runtime for async operations in tests.
fn test_runtime() -> Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("failed to create test runtime")
}

/// Unique scratch directory removed on drop.
struct ScratchDir {
    path: Utf8PathBuf,
}

impl ScratchDir {
    fn new() -> Self {
        let ordinal = DIR_COUNTER.fetch_add(1, Ordering::Relaxed);
        let raw_path = std::env::temp_dir().join(format!(
            "boardwatch-store-{}-{ordinal}",
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

fn snapshot_set(ids: &[&str]) -> SnapshotSet {
    ids.iter()
        .map(|id| {
            let card_id = CardId::new(*id);
            let snapshot = CardSnapshot::new(card_id.clone(), format!("Card {id}"), "https://b/c")
                .with_description("body");
            (card_id, snapshot)
        })
        .collect()
}

#[test]
fn missing_state_loads_as_empty_mapping() {
    let rt = test_runtime();
    let scratch = ScratchDir::new();
    let store = JsonSnapshotStore::open(scratch.path()).expect("open store");

    let loaded = rt
        .block_on(store.load(&ScopeId::new("scope-a")))
        .expect("load succeeds");
    assert!(loaded.is_empty());
}

#[test]
fn commit_round_trips_through_a_fresh_store_instance() {
    let rt = test_runtime();
    let scratch = ScratchDir::new();
    let scope = ScopeId::new("scope-a");
    let snapshots = snapshot_set(&["c1", "c2"]);

    let store = JsonSnapshotStore::open(scratch.path()).expect("open store");
    rt.block_on(store.commit(&scope, &snapshots))
        .expect("commit succeeds");

    // A separate instance must see the same state: persistence, not cache.
    let reopened = JsonSnapshotStore::open(scratch.path()).expect("reopen store");
    let loaded = rt.block_on(reopened.load(&scope)).expect("load succeeds");
    assert_eq!(loaded, snapshots);
}

#[test]
fn commit_replaces_whole_scope_and_leaves_no_temp_file() {
    let rt = test_runtime();
    let scratch = ScratchDir::new();
    let scope = ScopeId::new("scope-a");
    let store = JsonSnapshotStore::open(scratch.path()).expect("open store");

    rt.block_on(store.commit(&scope, &snapshot_set(&["c1", "c2"])))
        .expect("first commit succeeds");
    rt.block_on(store.commit(&scope, &snapshot_set(&["c3"])))
        .expect("second commit succeeds");

    let loaded = rt.block_on(store.load(&scope)).expect("load succeeds");
    assert_eq!(loaded.keys().collect::<Vec<_>>(), vec![&CardId::new("c3")]);

    let leftovers: Vec<_> = std::fs::read_dir(scratch.path())
        .expect("read scratch dir")
        .filter_map(Result::ok)
        .filter(|entry| entry.file_name().to_string_lossy().ends_with(".tmp"))
        .collect();
    assert!(leftovers.is_empty(), "temp file left behind: {leftovers:?}");
}

#[test]
fn corrupt_state_is_reported_not_swallowed() {
    let rt = test_runtime();
    let scratch = ScratchDir::new();
    let scope = ScopeId::new("scope-a");
    std::fs::write(scratch.path().join("scope-a.json"), b"{ not json")
        .expect("write corrupt state");

    let store = JsonSnapshotStore::open(scratch.path()).expect("open store");
    let result = rt.block_on(store.load(&scope));

    let err = result.expect_err("corrupt state must not load");
    assert!(err.is_corrupt());
}

#[test]
fn scopes_persist_to_independent_files() {
    let rt = test_runtime();
    let scratch = ScratchDir::new();
    let store = JsonSnapshotStore::open(scratch.path()).expect("open store");

    rt.block_on(store.commit(&ScopeId::new("scope-a"), &snapshot_set(&["c1"])))
        .expect("commit scope-a");
    rt.block_on(store.commit(&ScopeId::new("scope-b"), &snapshot_set(&["c9"])))
        .expect("commit scope-b");

    assert!(scratch.path().join("scope-a.json").exists());
    assert!(scratch.path().join("scope-b.json").exists());

    let loaded = rt
        .block_on(store.load(&ScopeId::new("scope-b")))
        .expect("load scope-b");
    assert_eq!(loaded.keys().collect::<Vec<_>>(), vec![&CardId::new("c9")]);
}
