use color_eyre::eyre::eyre;
use serde::{Deserialize, Serialize};

use super::report;
use crate::{
    domain::{Member, MemberAPIError, MemberId, MemberStoreError},
    AppState,
};

#[tracing::instrument(name = "Get member", skip(state))]
pub async fn get_member(
    state: &AppState,
    member_id: &str,
) -> Result<MemberResponse, MemberAPIError> {
    let member_id = MemberId::parse(member_id).map_err(report)?;

    let member = state
        .member_store
        .read()
        .await
        .get_member(&member_id)
        .await
        .map_err(|e| match e {
            MemberStoreError::MemberNotFound => {
                MemberAPIError::MemberNotFound(*member_id.as_ref())
            }
            e => MemberAPIError::UnexpectedError(eyre!(e)),
        })
        .map_err(report)?;

    Ok(MemberResponse::from(&member))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberResponse {
    pub id: uuid::Uuid,
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    pub email: String,
    #[serde(rename = "phoneNumber")]
    pub phone_number: Option<String>,
    pub balance: String,
    #[serde(rename = "displayName")]
    pub display_name: String,
}

impl From<&Member> for MemberResponse {
    fn from(member: &Member) -> Self {
        Self {
            id: *member.id.as_ref(),
            first_name: member.first_name.as_ref().to_owned(),
            last_name: member.last_name.as_ref().to_owned(),
            email: member.email.as_ref().to_owned(),
            phone_number: member
                .phone_number
                .as_ref()
                .map(|p| AsRef::<str>::as_ref(p).to_owned()),
            balance: member.balance.to_string(),
            display_name: member.display_name(),
        }
    }
}
