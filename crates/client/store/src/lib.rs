//! Session state shared across staking frontends.
//!
//! State lives in an immutable [`SessionSnapshot`] behind a
//! [`SessionStore`]; mutation swaps in a new snapshot and publishes a
//! [`StoreEvent`] on the store's topic bus, never writes in place.
//! Consumers either read the latest snapshot directly or subscribe to the
//! topics they care about. A background worker keeps a live
//! [`ProjectionView`] derived from the current selection, and
//! [`StoreSyncer`] feeds the store from a staking provider. The projection
//! engine itself stays pure and knows nothing about any of this.
pub mod event;
pub mod projection;
pub mod snapshot;
pub mod store;
pub mod sync;

pub use event::{StoreBus, StoreEvent, Topic};
pub use projection::{ProjectionView, spawn_projection_worker};
pub use snapshot::{
    BusyKind, DataStatus, GlobalStats, Selection, SessionSnapshot, TokenState, UserStats,
};
pub use store::{ChangeScope, SessionStore};
pub use sync::StoreSyncer;
