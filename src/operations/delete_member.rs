use color_eyre::eyre::eyre;

use super::report;
use crate::{
    domain::{MemberAPIError, MemberId, MemberStoreError},
    AppState,
};

#[tracing::instrument(name = "Delete member", skip(state))]
pub async fn delete_member(
    state: &AppState,
    member_id: &str,
) -> Result<(), MemberAPIError> {
    let member_id = MemberId::parse(member_id).map_err(report)?;

    state
        .member_store
        .write()
        .await
        .delete_member(&member_id)
        .await
        .map_err(|e| match e {
            MemberStoreError::MemberNotFound => {
                MemberAPIError::MemberNotFound(*member_id.as_ref())
            }
            e => MemberAPIError::UnexpectedError(eyre!(e)),
        })
        .map_err(report)?;

    tracing::info!("deleted member {}", member_id.as_ref());
    Ok(())
}
