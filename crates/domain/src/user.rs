use serde::{Deserialize, Serialize};

use debtcheck_core::Entity;

use crate::email::EmailAddress;
use crate::id::UserId;

/// Account that issues debt checks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    pub email: EmailAddress,
    pub name: String,
}

impl User {
    pub fn new(id: UserId, email: EmailAddress, name: impl Into<String>) -> Self {
        Self {
            id,
            email,
            name: name.into(),
        }
    }

    /// New user with a freshly generated [`UserId`].
    pub fn register(email: EmailAddress, name: impl Into<String>) -> Self {
        Self::new(UserId::generate(), email, name)
    }
}

impl Entity for User {
    type Id = UserId;
    const KIND: &'static str = "user";

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl_identity_equality!(User);
