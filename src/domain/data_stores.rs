use super::{Member, MemberId, NewMember};
use color_eyre::eyre::Report;
use thiserror::Error;

#[async_trait::async_trait]
pub trait MemberStore {
    /// Stores a new member, assigning its ID.
    async fn add_member(
        &mut self,
        member: NewMember,
    ) -> Result<Member, MemberStoreError>;
    async fn get_member(
        &self,
        id: &MemberId,
    ) -> Result<Member, MemberStoreError>;
    /// All members, ordered by email.
    async fn list_members(&self) -> Result<Vec<Member>, MemberStoreError>;
    async fn update_member(
        &mut self,
        member: &Member,
    ) -> Result<(), MemberStoreError>;
    async fn delete_member(
        &mut self,
        id: &MemberId,
    ) -> Result<(), MemberStoreError>;
}

#[derive(Debug, Error)]
pub enum MemberStoreError {
    #[error("Member already exists")]
    MemberAlreadyExists,
    #[error("Member not found")]
    MemberNotFound,
    #[error("Unexpected error")]
    UnexpectedError(#[source] Report),
}

impl PartialEq for MemberStoreError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::MemberAlreadyExists, Self::MemberAlreadyExists)
                | (Self::MemberNotFound, Self::MemberNotFound)
                | (Self::UnexpectedError(_), Self::UnexpectedError(_))
        )
    }
}
