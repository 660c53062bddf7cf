//! Session store with snapshot swapping and change tracking.

use std::sync::{Arc, RwLock};

use staking_core::Address;

use crate::event::{StoreBus, StoreEvent};
use crate::snapshot::{
    BusyKind, DataStatus, GlobalStats, Selection, SessionSnapshot, TokenState, UserStats,
};

bitflags::bitflags! {
    /// Tracks which parts of the session snapshot changed.
    ///
    /// Setters return the flag for the field they touched so callers can
    /// accumulate a scope across a batch of updates.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ChangeScope: u32 {
        const WALLET    = 0b00000001;
        const PAUSED    = 0b00000010;
        const TOKENS    = 0b00000100;
        const USER      = 0b00001000;
        const GLOBAL    = 0b00010000;
        const SELECTION = 0b00100000;
        const STATUS    = 0b01000000;
        const BUSY      = 0b10000000;

        /// Everything a chain refresh can touch.
        const CHAIN = Self::PAUSED.bits()
            | Self::TOKENS.bits()
            | Self::USER.bits()
            | Self::GLOBAL.bits();
    }
}

impl Default for ChangeScope {
    fn default() -> Self {
        ChangeScope::empty()
    }
}

/// Shared session state.
///
/// Holds the current [`SessionSnapshot`] behind an `Arc` so readers get a
/// cheap, immutable view that stays valid while newer snapshots are swapped
/// in. Every setter publishes exactly one [`StoreEvent`] on the bus and
/// returns the [`ChangeScope`] flag for the field it touched.
pub struct SessionStore {
    snapshot: RwLock<Arc<SessionSnapshot>>,
    bus: StoreBus,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::with_snapshot(SessionSnapshot::default())
    }

    pub fn with_snapshot(snapshot: SessionSnapshot) -> Self {
        Self {
            snapshot: RwLock::new(Arc::new(snapshot)),
            bus: StoreBus::new(),
        }
    }

    /// Event bus carrying change notifications for this store.
    pub fn bus(&self) -> &StoreBus {
        &self.bus
    }

    /// Returns the current snapshot.
    ///
    /// The returned `Arc` keeps pointing at the same immutable snapshot even
    /// if the store swaps in a newer one afterwards.
    pub fn snapshot(&self) -> Arc<SessionSnapshot> {
        Arc::clone(
            &self
                .snapshot
                .read()
                .expect("Failed to acquire read lock on session snapshot"),
        )
    }

    /// Clones the current snapshot, applies `mutate`, and swaps the result in.
    fn swap<F: FnOnce(&mut SessionSnapshot)>(&self, mutate: F) {
        let mut guard = self
            .snapshot
            .write()
            .expect("Failed to acquire write lock on session snapshot");
        let mut next = (**guard).clone();
        mutate(&mut next);
        *guard = Arc::new(next);
    }

    pub fn set_wallet(&self, wallet: Option<Address>) -> ChangeScope {
        self.swap(|s| s.wallet = wallet);
        self.bus.publish(StoreEvent::WalletChanged(wallet));
        ChangeScope::WALLET
    }

    pub fn set_paused(&self, paused: bool) -> ChangeScope {
        self.swap(|s| s.paused = paused);
        self.bus.publish(StoreEvent::PausedChanged(paused));
        ChangeScope::PAUSED
    }

    pub fn set_tokens(&self, tokens: Vec<TokenState>) -> ChangeScope {
        self.swap(|s| s.tokens = tokens.clone());
        self.bus.publish(StoreEvent::TokensChanged(tokens));
        ChangeScope::TOKENS
    }

    pub fn set_user_stats(&self, stats: UserStats) -> ChangeScope {
        self.swap(|s| s.user_stats = stats);
        self.bus.publish(StoreEvent::UserStatsChanged(stats));
        ChangeScope::USER
    }

    pub fn set_global_stats(&self, stats: GlobalStats) -> ChangeScope {
        self.swap(|s| s.global_stats = stats);
        self.bus.publish(StoreEvent::GlobalStatsChanged(stats));
        ChangeScope::GLOBAL
    }

    pub fn set_selection(&self, selection: Selection) -> ChangeScope {
        self.swap(|s| s.selection = selection.clone());
        self.bus.publish(StoreEvent::SelectionChanged(selection));
        ChangeScope::SELECTION
    }

    pub fn set_data_status(&self, status: DataStatus) -> ChangeScope {
        self.swap(|s| s.data_status = status);
        self.bus.publish(StoreEvent::DataStatusChanged(status));
        ChangeScope::STATUS
    }

    pub fn set_busy(&self, busy: BusyKind) -> ChangeScope {
        self.swap(|s| s.busy = busy);
        self.bus.publish(StoreEvent::BusyChanged(busy));
        ChangeScope::BUSY
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}
