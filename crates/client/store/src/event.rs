//! Topic-based store event bus.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{RwLock, broadcast};

use staking_core::Address;

use crate::snapshot::{BusyKind, DataStatus, GlobalStats, Selection, TokenState, UserStats};

/// Topics for event routing
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum Topic {
    /// Wallet connection changes
    Wallet,
    /// Per-token stake data changes
    Stakes,
    /// Pool-wide state changes (totals, user VP, pause flag)
    Totals,
    /// Stake selection changes
    Selection,
    /// Data freshness and busy changes
    Status,
}

impl Topic {
    /// All topics, in routing order.
    pub const ALL: [Topic; 5] = [
        Topic::Wallet,
        Topic::Stakes,
        Topic::Totals,
        Topic::Selection,
        Topic::Status,
    ];
}

/// Event wrapper that carries the changed data for its topic
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum StoreEvent {
    WalletChanged(Option<Address>),
    PausedChanged(bool),
    TokensChanged(Vec<TokenState>),
    UserStatsChanged(UserStats),
    GlobalStatsChanged(GlobalStats),
    SelectionChanged(Selection),
    DataStatusChanged(DataStatus),
    BusyChanged(BusyKind),
}

impl StoreEvent {
    pub fn topic(&self) -> Topic {
        match self {
            StoreEvent::WalletChanged(_) => Topic::Wallet,
            StoreEvent::PausedChanged(_) => Topic::Totals, // pause is pool-wide state
            StoreEvent::TokensChanged(_) => Topic::Stakes,
            StoreEvent::UserStatsChanged(_) => Topic::Totals,
            StoreEvent::GlobalStatsChanged(_) => Topic::Totals,
            StoreEvent::SelectionChanged(_) => Topic::Selection,
            StoreEvent::DataStatusChanged(_) => Topic::Status,
            StoreEvent::BusyChanged(_) => Topic::Status,
        }
    }
}

/// Topic-based event bus
///
/// Allows consumers to subscribe to specific topics and only receive
/// events they care about.
pub struct StoreBus {
    channels: Arc<RwLock<HashMap<Topic, broadcast::Sender<StoreEvent>>>>,
}

impl StoreBus {
    /// Creates a new event bus with default capacity for each topic
    pub fn new() -> Self {
        Self::with_capacity(100)
    }

    /// Creates a new event bus with specified capacity per topic
    pub fn with_capacity(capacity: usize) -> Self {
        let mut channels = HashMap::new();

        // Pre-create channels for each topic
        for topic in Topic::ALL {
            channels.insert(topic, broadcast::channel(capacity).0);
        }

        Self {
            channels: Arc::new(RwLock::new(channels)),
        }
    }

    /// Publish an event to its corresponding topic
    pub fn publish(&self, event: StoreEvent) {
        let topic = event.topic();

        // Use try_read to avoid blocking in async context
        // If we can't get the lock, just skip (events are best-effort)
        match self.channels.try_read() {
            Ok(channels) => {
                if let Some(tx) = channels.get(&topic)
                    && tx.send(event).is_err()
                {
                    // No subscribers for this topic - this is normal, not an error
                    tracing::trace!("No subscribers for topic {:?}", topic);
                }
            }
            Err(_) => {
                // Failed to acquire lock - event bus is likely under heavy contention
                // This is best-effort, so we skip the event
                tracing::debug!("Failed to acquire event bus lock for topic {:?}", topic);
            }
        }
    }

    /// Subscribe to a specific topic
    ///
    /// Returns a receiver that will only receive events for that topic.
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<StoreEvent> {
        let channels = self
            .channels
            .try_read()
            .expect("Failed to acquire read lock on event channels");
        channels
            .get(&topic)
            .expect("Topic channel not initialized")
            .subscribe()
    }

    /// Subscribe to multiple topics
    ///
    /// Returns receivers for each requested topic.
    pub fn subscribe_multiple(
        &self,
        topics: &[Topic],
    ) -> HashMap<Topic, broadcast::Receiver<StoreEvent>> {
        let channels = self
            .channels
            .try_read()
            .expect("Failed to acquire read lock on event channels");
        topics
            .iter()
            .map(|&topic| {
                let rx = channels
                    .get(&topic)
                    .expect("Topic channel not initialized")
                    .subscribe();
                (topic, rx)
            })
            .collect()
    }
}

impl Clone for StoreBus {
    fn clone(&self) -> Self {
        Self {
            channels: Arc::clone(&self.channels),
        }
    }
}

impl Default for StoreBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_route_to_their_topic() {
        assert_eq!(StoreEvent::WalletChanged(None).topic(), Topic::Wallet);
        assert_eq!(StoreEvent::PausedChanged(true).topic(), Topic::Totals);
        assert_eq!(StoreEvent::TokensChanged(Vec::new()).topic(), Topic::Stakes);
        assert_eq!(
            StoreEvent::UserStatsChanged(UserStats::default()).topic(),
            Topic::Totals
        );
        assert_eq!(
            StoreEvent::GlobalStatsChanged(GlobalStats::default()).topic(),
            Topic::Totals
        );
        assert_eq!(
            StoreEvent::SelectionChanged(Selection::default()).topic(),
            Topic::Selection
        );
        assert_eq!(
            StoreEvent::DataStatusChanged(DataStatus::Ready).topic(),
            Topic::Status
        );
        assert_eq!(StoreEvent::BusyChanged(BusyKind::Fetch).topic(), Topic::Status);
    }

    #[tokio::test]
    async fn published_events_reach_only_their_subscribers() {
        let bus = StoreBus::new();
        let mut selection_rx = bus.subscribe(Topic::Selection);
        let mut status_rx = bus.subscribe(Topic::Status);

        bus.publish(StoreEvent::SelectionChanged(Selection {
            token_ids: vec![staking_core::TokenId(1)],
            lock_months: 3,
        }));

        let event = selection_rx.recv().await.unwrap();
        assert_eq!(event.topic(), Topic::Selection);
        assert!(matches!(
            status_rx.try_recv(),
            Err(broadcast::error::TryRecvError::Empty)
        ));
    }
}
