use color_eyre::eyre::eyre;
use serde::Deserialize;

use super::{report, MemberResponse};
use crate::{
    domain::{
        Balance, Email, FirstName, LastName, MemberAPIError, MemberStoreError,
        NewMember, PhoneNumber, ValidationError,
    },
    AppState,
};

#[tracing::instrument(name = "Create member", skip_all)]
pub async fn create_member(
    state: &AppState,
    request: CreateMemberRequest,
) -> Result<MemberResponse, MemberAPIError> {
    let new_member = NewMember::try_from(request).map_err(report)?;
    let email = new_member.email.as_ref().to_owned();

    let member = state
        .member_store
        .write()
        .await
        .add_member(new_member)
        .await
        .map_err(|e| match e {
            MemberStoreError::MemberAlreadyExists => {
                MemberAPIError::EmailAlreadyExists(email)
            }
            e => MemberAPIError::UnexpectedError(eyre!(e)),
        })
        .map_err(report)?;

    tracing::info!("created member {}", member.id.as_ref());
    Ok(MemberResponse::from(&member))
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CreateMemberRequest {
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    pub email: String,
    #[serde(rename = "phoneNumber", default)]
    pub phone_number: Option<String>,
    /// Decimal string such as `"12.50"`. Defaults to zero when absent.
    #[serde(default)]
    pub balance: Option<String>,
}

impl TryFrom<CreateMemberRequest> for NewMember {
    type Error = ValidationError;

    fn try_from(request: CreateMemberRequest) -> Result<Self, Self::Error> {
        let balance = request
            .balance
            .as_deref()
            .map(Balance::parse_str)
            .transpose()?;

        Ok(NewMember::new(
            FirstName::parse(request.first_name)?,
            LastName::parse(request.last_name)?,
            Email::parse(request.email)?,
            PhoneNumber::parse(request.phone_number)?,
            balance,
        ))
    }
}
