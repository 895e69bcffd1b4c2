//! Member model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Library member
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Member {
    pub id: i32,
    pub name: String,
    /// Email address, unique across members
    pub email: String,
    /// Set by the database when the member is created
    pub joined_date: DateTime<Utc>,
}

/// Member without its join date, as returned by create and update
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MemberShort {
    pub id: i32,
    pub name: String,
    pub email: String,
}

impl From<Member> for MemberShort {
    fn from(member: Member) -> Self {
        Self {
            id: member.id,
            name: member.name,
            email: member.email,
        }
    }
}

/// Create member request
#[derive(Debug, Clone, PartialEq, Deserialize, Validate, ToSchema)]
pub struct CreateMember {
    #[validate(length(min = 1, max = 100, message = "Name must be 1 to 100 characters"))]
    pub name: String,
    #[validate(length(min = 1, max = 100, message = "Email must be 1 to 100 characters"))]
    pub email: String,
}

/// Update member request; absent fields keep their stored value
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateMember {
    #[validate(length(min = 1, max = 100, message = "Name must be 1 to 100 characters"))]
    pub name: Option<String>,
    #[validate(length(min = 1, max = 100, message = "Email must be 1 to 100 characters"))]
    pub email: Option<String>,
}

impl UpdateMember {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none()
    }
}
