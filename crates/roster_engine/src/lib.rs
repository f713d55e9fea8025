//! Roster engine: REST collection fetches and effect execution.
mod engine;
mod envelope;
mod format;
mod source;
mod types;

pub use engine::EngineHandle;
pub use envelope::decode_collection;
pub use format::{format_error, FormattedError};
pub use source::{CollectionSource, ReqwestSource, SourceSettings};
pub use types::{
    EngineEvent, FailureKind, FetchError, Group, OwnerId, RequestSeq, Subscription,
};
