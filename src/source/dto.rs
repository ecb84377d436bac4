//! Wire format of the randomuser.me API.
//!
//! Parse at the boundary: DTOs never leave this module, callers receive a
//! [`PageBatch`] of validated [`User`] records or a `DecodeFailure`.

use crate::model::{FetchError, Gender, Location, Login, Name, Picture, Street, User, UserId};
use crate::source::{PageBatch, PageInfo};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct ErrorDto {
    error: String,
}

#[derive(Debug, Deserialize)]
struct UserResponseDto {
    results: Vec<UserDto>,
    info: InfoDto,
}

#[derive(Debug, Deserialize)]
struct InfoDto {
    #[serde(default)]
    seed: String,
    #[serde(default)]
    results: u32,
    #[serde(default)]
    page: u32,
    #[serde(default)]
    version: String,
}

#[derive(Debug, Deserialize)]
struct UserDto {
    gender: String,
    name: NameDto,
    email: String,
    picture: PictureDto,
    location: LocationDto,
    login: LoginDto,
}

#[derive(Debug, Deserialize)]
struct NameDto {
    title: String,
    first: String,
    last: String,
}

#[derive(Debug, Deserialize)]
struct PictureDto {
    large: String,
    medium: String,
    thumbnail: String,
}

#[derive(Debug, Deserialize)]
struct LocationDto {
    street: StreetDto,
    city: String,
    state: String,
    country: String,
}

#[derive(Debug, Deserialize)]
struct StreetDto {
    number: i64,
    name: String,
}

#[derive(Debug, Deserialize)]
struct LoginDto {
    uuid: String,
    username: String,
}

impl UserDto {
    fn into_domain(self) -> Result<User, FetchError> {
        let id = UserId::new(self.login.uuid.clone())
            .map_err(|e| FetchError::decode(format!("login.uuid: {e}")))?;
        let gender: Gender = self
            .gender
            .parse()
            .map_err(|e| FetchError::decode(format!("gender: {e}")))?;

        Ok(User::new(
            id,
            gender,
            Name {
                title: self.name.title,
                first: self.name.first,
                last: self.name.last,
            },
            self.email,
            Picture {
                large: self.picture.large,
                medium: self.picture.medium,
                thumbnail: self.picture.thumbnail,
            },
            Location {
                street: Street {
                    number: self.location.street.number,
                    name: self.location.street.name,
                },
                city: self.location.city,
                state: self.location.state,
                country: self.location.country,
            },
            Login {
                uuid: self.login.uuid,
                username: self.login.username,
            },
        ))
    }
}

/// Decode a response body into a page of records.
///
/// # Errors
///
/// - `DecodeFailure` for malformed JSON, missing fields, an empty uuid or an
///   unknown gender (a single bad record fails the whole page - no partial merge)
/// - `NetworkFailure` when the server answered with its `{"error": ...}` body
pub fn decode_page(body: &str) -> Result<PageBatch, FetchError> {
    if let Ok(err) = serde_json::from_str::<ErrorDto>(body) {
        return Err(FetchError::network(format!(
            "server reported: {}",
            err.error
        )));
    }

    let page: UserResponseDto = serde_json::from_str(body)?;
    let records = page
        .results
        .into_iter()
        .map(UserDto::into_domain)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(PageBatch {
        records,
        info: PageInfo {
            page: page.info.page,
            results: page.info.results,
            seed: page.info.seed,
            version: page.info.version,
        },
    })
}
