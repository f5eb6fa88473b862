use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Balance, Email, FirstName, LastName, MemberId, PhoneNumber};

/// A validated member that has not been stored yet, so has no ID.
#[derive(Debug, Clone, PartialEq)]
pub struct NewMember {
    pub first_name: FirstName,
    pub last_name: LastName,
    pub email: Email,
    pub phone_number: Option<PhoneNumber>,
    pub balance: Balance,
}

impl NewMember {
    pub fn new(
        first_name: FirstName,
        last_name: LastName,
        email: Email,
        phone_number: Option<PhoneNumber>,
        balance: Option<Balance>,
    ) -> Self {
        Self {
            first_name,
            last_name,
            email,
            phone_number,
            balance: balance.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    pub id: MemberId,
    pub first_name: FirstName,
    pub last_name: LastName,
    pub email: Email,
    pub phone_number: Option<PhoneNumber>,
    pub balance: Balance,
}

impl Member {
    pub fn from_new(id: MemberId, member: NewMember) -> Self {
        Self {
            id,
            first_name: member.first_name,
            last_name: member.last_name,
            email: member.email,
            phone_number: member.phone_number,
            balance: member.balance,
        }
    }

    pub fn display_name(&self) -> String {
        self.to_string()
    }

    /// Overwrites every field the changes carry. The ID is never touched.
    pub fn apply(&mut self, changes: MemberChanges) {
        if let Some(first_name) = changes.first_name {
            self.first_name = first_name;
        }
        if let Some(last_name) = changes.last_name {
            self.last_name = last_name;
        }
        if let Some(email) = changes.email {
            self.email = email;
        }
        if let Some(phone_number) = changes.phone_number {
            self.phone_number = phone_number;
        }
        if let Some(balance) = changes.balance {
            self.balance = balance;
        }
    }
}

impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first_name.as_ref(), self.last_name.as_ref())
    }
}

/// Validated partial update. `phone_number: Some(None)` clears the number.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemberChanges {
    pub first_name: Option<FirstName>,
    pub last_name: Option<LastName>,
    pub email: Option<Email>,
    pub phone_number: Option<Option<PhoneNumber>>,
    pub balance: Option<Balance>,
}
