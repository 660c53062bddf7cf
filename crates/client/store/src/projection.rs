//! Derived reward projection kept in sync with the session store.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::{broadcast, watch};

use staking_core::{
    PoolConfig, PreviewEngine, PreviewRequest, StakingPreview, VotingPowerTable, lock_label,
};

use crate::event::Topic;
use crate::snapshot::SessionSnapshot;
use crate::store::SessionStore;

/// Presentation-ready projection of the current selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionView {
    /// Reward projection for the selected tokens and lock length.
    pub preview: StakingPreview,
    /// Number of tokens in the selection.
    pub selected: usize,
    /// Lock length rendered for display, e.g. `"12 months"`.
    pub lock_label: String,
    /// Whether the pool is currently paused.
    pub paused: bool,
}

impl ProjectionView {
    /// Derives the view from a snapshot.
    ///
    /// Pure with respect to the snapshot: calling this twice on the same
    /// snapshot yields the same view.
    pub fn from_snapshot(
        snapshot: &SessionSnapshot,
        table: &dyn VotingPowerTable,
        pool: &PoolConfig,
    ) -> Self {
        let request = PreviewRequest::new(
            snapshot.selection.token_ids.clone(),
            snapshot.selection.lock_months,
            snapshot.global_stats.total_effective_vp,
        )
        .with_user_effective_vp(snapshot.user_stats.effective_vp);

        let preview = PreviewEngine::new(table, pool.clone()).preview(&request);

        Self {
            preview,
            selected: snapshot.selection.token_ids.len(),
            lock_label: lock_label(snapshot.selection.lock_months),
            paused: snapshot.paused,
        }
    }
}

/// Spawns a worker that recomputes the [`ProjectionView`] whenever the
/// selection, pool totals, or session status change.
///
/// Subscriptions are taken before the task is spawned, so events published
/// right after this returns are never missed. The worker stops when every
/// view receiver is dropped or the store bus closes.
pub fn spawn_projection_worker(
    store: Arc<SessionStore>,
    table: Arc<dyn VotingPowerTable>,
    pool: PoolConfig,
) -> watch::Receiver<ProjectionView> {
    let mut selection_rx = store.bus().subscribe(Topic::Selection);
    let mut totals_rx = store.bus().subscribe(Topic::Totals);
    let mut status_rx = store.bus().subscribe(Topic::Status);

    let initial = ProjectionView::from_snapshot(&store.snapshot(), table.as_ref(), &pool);
    let (view_tx, view_rx) = watch::channel(initial);

    tokio::spawn(async move {
        tracing::debug!("Projection worker started");

        loop {
            let received = tokio::select! {
                event = selection_rx.recv() => event,
                event = totals_rx.recv() => event,
                event = status_rx.recv() => event,
            };

            match received {
                Ok(_) => {
                    let view =
                        ProjectionView::from_snapshot(&store.snapshot(), table.as_ref(), &pool);
                    if view_tx.send(view).is_err() {
                        tracing::debug!("Projection receivers dropped, stopping worker");
                        break;
                    }
                }
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    // The snapshot already reflects the skipped events, so a
                    // single rederivation catches up.
                    tracing::warn!(skipped, "Projection worker lagged behind store events");
                    let view =
                        ProjectionView::from_snapshot(&store.snapshot(), table.as_ref(), &pool);
                    if view_tx.send(view).is_err() {
                        break;
                    }
                }
                Err(broadcast::error::RecvError::Closed) => {
                    tracing::debug!("Store bus closed, stopping projection worker");
                    break;
                }
            }
        }
    });

    view_rx
}
