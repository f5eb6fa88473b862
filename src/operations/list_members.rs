use color_eyre::eyre::eyre;

use super::{report, MemberResponse};
use crate::{domain::MemberAPIError, AppState};

#[tracing::instrument(name = "List members", skip_all)]
pub async fn list_members(
    state: &AppState,
) -> Result<Vec<MemberResponse>, MemberAPIError> {
    let members = state
        .member_store
        .read()
        .await
        .list_members()
        .await
        .map_err(|e| MemberAPIError::UnexpectedError(eyre!(e)))
        .map_err(report)?;

    Ok(members.iter().map(MemberResponse::from).collect())
}
