use crate::model::{self, MutationEnvelope, User as ModelUser};
use async_graphql::{ID, InputObject, SimpleObject};

/// The type of a user
#[derive(SimpleObject, Clone, Debug, PartialEq, Eq)]
pub struct User {
    /// A unique id
    pub id: ID,
    /// Full name of user
    pub name: String,
    /// Email address of user
    pub email: String,
}

impl From<ModelUser> for User {
    fn from(u: ModelUser) -> Self {
        Self {
            id: ID(u.id),
            name: u.name,
            email: u.email,
        }
    }
}

#[derive(InputObject, Default)]
pub struct NewUserInput {
    /// Full name of user
    pub name: Option<String>,
    /// Email of user
    pub email: Option<String>,
}

impl From<NewUserInput> for model::NewUser {
    fn from(input: NewUserInput) -> Self {
        Self {
            name: input.name,
            email: input.email,
        }
    }
}

/// Result shared by every mutation
#[derive(SimpleObject, Clone, Debug)]
pub struct MutationResponse {
    /// Status code as text, "200" or "404"
    pub code: String,
    pub success: bool,
    pub message: String,
    /// Set by addUser and the update mutations
    pub user: Option<User>,
}

impl From<MutationEnvelope> for MutationResponse {
    fn from(e: MutationEnvelope) -> Self {
        Self {
            code: e.code,
            success: e.success,
            message: e.message,
            user: e.user.map(Into::into),
        }
    }
}
