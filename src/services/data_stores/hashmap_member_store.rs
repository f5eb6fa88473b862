use crate::domain::{
    Email, Member, MemberId, MemberStore, MemberStoreError, NewMember,
};
use std::collections::HashMap;

#[derive(Default)]
pub struct HashmapMemberStore {
    members: HashMap<MemberId, Member>,
    emails: HashMap<Email, MemberId>,
}

#[async_trait::async_trait]
impl MemberStore for HashmapMemberStore {
    async fn add_member(
        &mut self,
        member: NewMember,
    ) -> Result<Member, MemberStoreError> {
        if self.emails.contains_key(&member.email) {
            return Err(MemberStoreError::MemberAlreadyExists);
        }

        let member = Member::from_new(MemberId::default(), member);
        self.emails.insert(member.email.clone(), member.id);
        self.members.insert(member.id, member.clone());
        Ok(member)
    }

    async fn get_member(
        &self,
        id: &MemberId,
    ) -> Result<Member, MemberStoreError> {
        match self.members.get(id) {
            Some(member) => Ok(member.clone()),
            None => Err(MemberStoreError::MemberNotFound),
        }
    }

    async fn list_members(&self) -> Result<Vec<Member>, MemberStoreError> {
        let mut members: Vec<Member> = self.members.values().cloned().collect();
        members.sort_by(|a, b| a.email.as_ref().cmp(b.email.as_ref()));
        Ok(members)
    }

    async fn update_member(
        &mut self,
        member: &Member,
    ) -> Result<(), MemberStoreError> {
        let stored = self
            .members
            .get_mut(&member.id)
            .ok_or(MemberStoreError::MemberNotFound)?;

        if stored.email != member.email {
            if self.emails.contains_key(&member.email) {
                return Err(MemberStoreError::MemberAlreadyExists);
            }
            self.emails.remove(&stored.email);
            self.emails.insert(member.email.clone(), member.id);
        }

        *stored = member.clone();
        Ok(())
    }

    async fn delete_member(
        &mut self,
        id: &MemberId,
    ) -> Result<(), MemberStoreError> {
        match self.members.remove(id) {
            Some(member) => {
                self.emails.remove(&member.email);
                Ok(())
            }
            None => Err(MemberStoreError::MemberNotFound),
        }
    }
}
