use entrait::*;

use super::Profile;
use crate::error::QpResult;
use crate::ProfileId;

/// Storage capability for profiles. Records are only ever added, never
/// updated or removed.
#[entrait(mock_api=ProfileRepoMock)]
pub trait ProfileRepo {
    async fn insert_profile(&self, profile: Profile) -> QpResult<()>;

    async fn find_profile(&self, id: ProfileId) -> QpResult<Option<Profile>>;
}
