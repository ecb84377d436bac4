//! User record as delivered by the fetch source.

use crate::model::category::Gender;
use crate::model::identifiers::UserId;

/// One person record. Immutable once constructed.
///
/// Identity is `id`; every other field is display data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    gender: Gender,
    name: Name,
    email: String,
    picture: Picture,
    location: Location,
    login: Login,
}

/// Person name parts.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Name {
    /// Honorific, e.g. `"Mr"`.
    pub title: String,
    /// Given name.
    pub first: String,
    /// Family name.
    pub last: String,
}

impl Name {
    /// First and last name, space-joined.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first, self.last)
    }
}

/// Image references at three resolutions.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Picture {
    /// Full-size image URL.
    pub large: String,
    /// Medium image URL.
    pub medium: String,
    /// Thumbnail image URL.
    pub thumbnail: String,
}

/// Street part of an address.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Street {
    /// House number.
    pub number: i64,
    /// Street name.
    pub name: String,
}

/// Postal location.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Location {
    /// Street and number.
    pub street: Street,
    /// City.
    pub city: String,
    /// State or region.
    pub state: String,
    /// Country.
    pub country: String,
}

impl Location {
    /// Single-line address: `"{number} {street}, {city}, {state}, {country}"`.
    pub fn formatted_address(&self) -> String {
        format!(
            "{} {}, {}, {}, {}",
            self.street.number, self.street.name, self.city, self.state, self.country
        )
    }
}

/// Account identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Login {
    /// Unique id assigned by the source.
    pub uuid: String,
    /// Display handle.
    pub username: String,
}

impl User {
    /// Build a record. The identity is taken from `login.uuid`.
    pub fn new(
        id: UserId,
        gender: Gender,
        name: Name,
        email: impl Into<String>,
        picture: Picture,
        location: Location,
        login: Login,
    ) -> Self {
        Self {
            id,
            gender,
            name,
            email: email.into(),
            picture,
            location,
            login,
        }
    }

    /// Stable identity.
    pub fn id(&self) -> &UserId {
        &self.id
    }

    /// Demographic category.
    pub fn gender(&self) -> Gender {
        self.gender
    }

    /// Name parts.
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// Contact email.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Image references.
    pub fn picture(&self) -> &Picture {
        &self.picture
    }

    /// Postal location.
    pub fn location(&self) -> &Location {
        &self.location
    }

    /// Account identifiers.
    pub fn login(&self) -> &Login {
        &self.login
    }
}
