//! Roster core: pure list-synchronization state machine and view-model helpers.
mod effect;
mod error;
mod filter;
mod msg;
mod state;
mod types;
mod update;
mod view_model;

pub use effect::Effect;
pub use error::{DisplayError, FetchSource, SyncError};
pub use filter::{filter_items, FilterMode};
pub use msg::Msg;
pub use state::ListState;
pub use types::{Item, ItemId, ItemRef, Membership, OwnerId, RequestSeq};
pub use update::update;
pub use view_model::{ItemRowView, ListViewModel, LoadStatus};
