//! Flattened, display-ready projection of a user record.

use crate::model::{Gender, User, UserId};
use std::hash::{Hash, Hasher};

/// What one list cell or the detail screen shows for a record.
///
/// Equality and hashing use `id` only, so two cards for the same record
/// are the same selection entry even if display fields differ.
#[derive(Debug, Clone)]
pub struct UserCard {
    id: UserId,
    name: String,
    email: String,
    username: String,
    gender: Gender,
    location: String,
    thumbnail_url: String,
    medium_url: String,
    large_url: String,
}

impl UserCard {
    /// Project a record. Deterministic, no I/O.
    pub fn from_user(user: &User) -> Self {
        Self {
            id: user.id().clone(),
            name: user.name().full_name(),
            email: user.email().to_string(),
            username: user.login().username.clone(),
            gender: user.gender(),
            location: user.location().formatted_address(),
            thumbnail_url: user.picture().thumbnail.clone(),
            medium_url: user.picture().medium.clone(),
            large_url: user.picture().large.clone(),
        }
    }

    /// Identity of the projected record.
    pub fn id(&self) -> &UserId {
        &self.id
    }

    /// `"{first} {last}"`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Contact email.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Login handle.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Demographic category.
    pub fn gender(&self) -> Gender {
        self.gender
    }

    /// `"{number} {street}, {city}, {state}, {country}"`.
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Thumbnail image URL.
    pub fn thumbnail_url(&self) -> &str {
        &self.thumbnail_url
    }

    /// Medium image URL.
    pub fn medium_url(&self) -> &str {
        &self.medium_url
    }

    /// Full-size image URL.
    pub fn large_url(&self) -> &str {
        &self.large_url
    }
}

impl PartialEq for UserCard {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for UserCard {}

impl Hash for UserCard {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl From<&User> for UserCard {
    fn from(user: &User) -> Self {
        Self::from_user(user)
    }
}

/// Project a whole list, preserving order.
pub fn project(users: &[User]) -> Vec<UserCard> {
    users.iter().map(UserCard::from_user).collect()
}
