//! Session module - one editable allocation round with version stamps and
//! undo/redo history.

mod session_model;
mod session_service;
mod session_traits;


pub use session_model::{AllocationEditRequest, EditRecord, SessionInfo};
pub use session_service::AwardSession;
pub use session_traits::AwardDataProviderTrait;
