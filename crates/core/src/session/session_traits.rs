//! Data provider seam for award sessions.

use crate::awards::AwardData;
use crate::errors::Result;

/// Supplies the award data an [`AwardSession`](super::AwardSession) starts
/// from.
///
/// Implementations decide where the data lives (a JSON file, a remote
/// sourcing service, fixtures); the session only sees the loaded
/// [`AwardData`].
pub trait AwardDataProviderTrait: Send + Sync {
    fn load_award_data(&self) -> Result<AwardData>;
}
