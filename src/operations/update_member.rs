use color_eyre::eyre::eyre;
use serde::{Deserialize, Deserializer};

use super::{report, MemberResponse};
use crate::{
    domain::{
        Balance, Email, FirstName, LastName, MemberAPIError, MemberChanges,
        MemberId, MemberStoreError, PhoneNumber, ValidationError,
    },
    AppState,
};

#[tracing::instrument(name = "Update member", skip(state, request))]
pub async fn update_member(
    state: &AppState,
    member_id: &str,
    request: UpdateMemberRequest,
) -> Result<MemberResponse, MemberAPIError> {
    let member_id = MemberId::parse(member_id).map_err(report)?;
    let changes = MemberChanges::try_from(request).map_err(report)?;
    let not_found = || MemberAPIError::MemberNotFound(*member_id.as_ref());

    // Read and write under one lock so concurrent updates cannot interleave.
    let mut store = state.member_store.write().await;

    let mut member = store
        .get_member(&member_id)
        .await
        .map_err(|e| match e {
            MemberStoreError::MemberNotFound => not_found(),
            e => MemberAPIError::UnexpectedError(eyre!(e)),
        })
        .map_err(report)?;

    member.apply(changes);

    store
        .update_member(&member)
        .await
        .map_err(|e| match e {
            MemberStoreError::MemberAlreadyExists => {
                MemberAPIError::EmailAlreadyExists(
                    member.email.as_ref().to_owned(),
                )
            }
            MemberStoreError::MemberNotFound => not_found(),
            e => MemberAPIError::UnexpectedError(eyre!(e)),
        })
        .map_err(report)?;

    Ok(MemberResponse::from(&member))
}

/// Partial update. Absent fields are left alone. `phoneNumber` may be
/// `null` or `""` to clear the stored number.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct UpdateMemberRequest {
    #[serde(rename = "firstName", default)]
    pub first_name: Option<String>,
    #[serde(rename = "lastName", default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(
        rename = "phoneNumber",
        default,
        deserialize_with = "deserialize_some"
    )]
    pub phone_number: Option<Option<String>>,
    #[serde(default)]
    pub balance: Option<String>,
}

// Distinguishes a missing field (None) from an explicit null (Some(None)).
fn deserialize_some<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}

impl TryFrom<UpdateMemberRequest> for MemberChanges {
    type Error = ValidationError;

    fn try_from(request: UpdateMemberRequest) -> Result<Self, Self::Error> {
        Ok(MemberChanges {
            first_name: request.first_name.map(FirstName::parse).transpose()?,
            last_name: request.last_name.map(LastName::parse).transpose()?,
            email: request.email.map(Email::parse).transpose()?,
            phone_number: request
                .phone_number
                .map(PhoneNumber::parse)
                .transpose()?,
            balance: request
                .balance
                .as_deref()
                .map(Balance::parse_str)
                .transpose()?,
        })
    }
}
