//! Stars: the persisted records and the ordered store that owns them

pub mod record;
pub mod store;

pub use record::{is_submittable, PlacementHint, StarColor, StarId, StarRecord, MAX_MESSAGE_LENGTH};
pub use store::{format_timestamp, StarStore};
