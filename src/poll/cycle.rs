//! Poll orchestrator: one end-to-end cycle per scope.

use std::collections::BTreeSet;
use std::sync::Arc;

use mockable::Clock;
use tracing::{info, trace, warn};

use crate::board::domain::{CardChanges, ChangeEvent, ScopeId, diff};
use crate::board::ports::{BoardGateway, SnapshotSet, SnapshotStore};
use crate::board::services::normalize;
use crate::notify::domain::DispatchTarget;
use crate::notify::ports::{Messenger, PreferencesStore};
use crate::notify::services::{NotificationDispatcher, resolve_targets};

use super::report::CycleTally;
use super::{CycleError, CycleLimiter, CycleReport, CycleState};

/// Drives poll cycles over the four ports.
///
/// One orchestrator serves every scope that shares a board-API request
/// budget; cross-scope concurrency is capped by its [`CycleLimiter`].
/// Within one cycle all steps are strictly sequential and cancellation is
/// not supported: a cycle either completes (possibly with partial dispatch
/// failures) or aborts before any snapshot mutation.
#[derive(Clone)]
pub struct PollOrchestrator<G, S, P, M, C>
where
    G: BoardGateway,
    S: SnapshotStore,
    P: PreferencesStore,
    M: Messenger,
    C: Clock + Send + Sync,
{
    gateway: Arc<G>,
    store: Arc<S>,
    preferences: Arc<P>,
    dispatcher: NotificationDispatcher<M>,
    clock: Arc<C>,
    limiter: CycleLimiter,
}

impl<G, S, P, M, C> PollOrchestrator<G, S, P, M, C>
where
    G: BoardGateway,
    S: SnapshotStore,
    P: PreferencesStore,
    M: Messenger,
    C: Clock + Send + Sync,
{
    /// Creates an orchestrator over the given ports.
    #[must_use]
    pub fn new(
        gateway: Arc<G>,
        store: Arc<S>,
        preferences: Arc<P>,
        messenger: Arc<M>,
        clock: Arc<C>,
        limiter: CycleLimiter,
    ) -> Self {
        Self {
            gateway,
            store,
            preferences,
            dispatcher: NotificationDispatcher::new(messenger),
            clock,
            limiter,
        }
    }

    /// Runs one poll cycle for the scope.
    ///
    /// The snapshot commit runs even when some deliveries failed, matching
    /// the at-most-once delivery policy. A fetch failure aborts the cycle
    /// before any snapshot mutation, so a transient board outage causes no
    /// false change detections on the next run.
    ///
    /// # Errors
    ///
    /// Returns [`CycleError`] for configuration gaps, fetch failures, and
    /// snapshot persistence failures. Per-card and per-target problems are
    /// folded into the returned [`CycleReport`] instead.
    pub async fn run_cycle(&self, scope: &ScopeId) -> Result<CycleReport, CycleError> {
        let _permit = self.limiter.acquire().await?;
        let started_at = self.clock.utc();
        let mut state = CycleState::Idle;

        let registry = self
            .preferences
            .scope_registry(scope)
            .await?
            .ok_or(CycleError::NotConfigured)?;
        let credentials = registry.credentials().ok_or(CycleError::NoCredentials)?;
        let board = registry.board().ok_or(CycleError::NoBoardConfigured)?;

        state = advance(scope, state, CycleState::Fetching);
        let raw_cards = match self.gateway.fetch_open_cards(credentials, board).await {
            Ok(cards) => cards,
            Err(err) => {
                let _aborted = advance(scope, state, CycleState::Aborted);
                warn!(%scope, %err, "board fetch failed; cycle aborted");
                return Err(CycleError::BoardUnavailable(err));
            }
        };

        state = advance(scope, state, CycleState::Diffing);
        let mut tally = CycleTally::default();
        let previous = match self.store.load(scope).await {
            Ok(previous) => previous,
            Err(err) if err.is_corrupt() => {
                warn!(%scope, %err, "snapshot state unreadable; running against empty history");
                tally.store_recovered = true;
                SnapshotSet::new()
            }
            Err(err) => return Err(CycleError::Store(err)),
        };

        // Stale snapshots of cards no longer in the polled set are
        // retained; closed cards simply stop producing events.
        let mut next = previous.clone();
        let mut pending: Vec<(CardChanges, BTreeSet<DispatchTarget>)> = Vec::new();
        for raw in &raw_cards {
            let normalized = normalize(raw);
            tally.skipped_items += normalized.skipped_items();
            let snapshot = normalized.into_snapshot();

            let events = diff(previous.get(snapshot.card_id()), &snapshot);
            if !events.is_empty() {
                if events.iter().any(ChangeEvent::is_new_card) {
                    tally.new_cards += 1;
                } else {
                    tally.updated_cards += 1;
                }
                let targets = resolve_targets(&snapshot, &registry);
                pending.push((CardChanges::new(&snapshot, events), targets));
            }
            next.insert(snapshot.card_id().clone(), snapshot);
        }

        state = advance(scope, state, CycleState::Dispatching);
        for (changes, targets) in &pending {
            let dispatch_report = self.dispatcher.dispatch(changes, targets).await;
            tally.notifications_sent += dispatch_report.delivered().len();
            tally.delivery_failures += dispatch_report.failed().len();
        }

        state = advance(scope, state, CycleState::Committing);
        self.store.commit(scope, &next).await?;
        let _idle = advance(scope, state, CycleState::Idle);

        let report = CycleReport::from_tally(scope.clone(), started_at, self.clock.utc(), tally);
        info!(%scope, summary = %report.summary(), "poll cycle finished");
        Ok(report)
    }
}

/// Moves the cycle to its next phase, tracing the transition.
fn advance(scope: &ScopeId, state: CycleState, next: CycleState) -> CycleState {
    debug_assert!(state.can_transition_to(next));
    trace!(%scope, from = ?state, to = ?next, "cycle state transition");
    next
}
