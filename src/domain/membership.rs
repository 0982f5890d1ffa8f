use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Membership tier chosen on the registration form.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum MembershipKind {
    Family,
    Single,
}

impl fmt::Display for MembershipKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MembershipKind::Family => "Family",
            MembershipKind::Single => "Single",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ApprovalState {
    Pending,
    Approved,
}

/// Completed registration sub-record attached to a user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrationForm {
    pub completed_at: DateTime<Utc>,
    pub membership: MembershipKind,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub approval: ApprovalState,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registration: Option<RegistrationForm>,
}

impl User {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            email: email.into(),
            created_at,
            approval: ApprovalState::Pending,
            registration: None,
        }
    }

    pub fn with_registration(mut self, membership: MembershipKind) -> Self {
        self.registration = Some(RegistrationForm {
            completed_at: self.created_at,
            membership,
        });
        self
    }

    pub fn approved(mut self) -> Self {
        self.approval = ApprovalState::Approved;
        self
    }
}
