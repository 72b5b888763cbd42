//! # Wire Payloads
//!
//! Loosely typed request bodies as they arrive from outside, and their
//! conversion into the validated request types. This is where user input is
//! parsed; every failure here is a client error, never a
//! [`UserError::Defect`].
//!
//! Absent JSON fields and `null` mean "not mentioned". For the address, a
//! blank city or postcode is read as the zero component, so
//! `{"city": "", "postcode": ""}` clears the address while
//! `{"city": "Berlin", "postcode": ""}` is rejected as incomplete.

use crate::error::{Field, UserError};
use crate::model::{
    Bio, City, CreateUserRequest, EmailAddress, PasswordHash, PostalAddress, Postcode,
    UpdateUserRequest, UserId,
};
use serde::{Deserialize, Serialize};
use typedd::{ensure_complete, Complete, Optional};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AddressPayload {
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub postcode: String,
}

impl AddressPayload {
    /// Parses each non-blank half. The result may be partial or zero.
    fn parse(&self) -> Result<PostalAddress, UserError> {
        let city = if self.city.trim().is_empty() {
            City::default()
        } else {
            City::parse(&self.city)?
        };
        let postcode = if self.postcode.trim().is_empty() {
            Postcode::default()
        } else {
            Postcode::parse(&self.postcode)?
        };
        Ok(PostalAddress::new(city, postcode))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateUserPayload {
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub address: Option<AddressPayload>,
}

impl TryFrom<CreateUserPayload> for CreateUserRequest {
    type Error = UserError;

    fn try_from(payload: CreateUserPayload) -> Result<Self, Self::Error> {
        let email = EmailAddress::parse(&payload.email)?;
        let password_hash = PasswordHash::from_password(&payload.password)?;
        let request = CreateUserRequest::new(email, password_hash, Bio::new(payload.bio));

        let Some(address) = payload.address else {
            return Ok(request);
        };
        let address = address.parse()?;
        if address == PostalAddress::default() {
            return Ok(request);
        }
        ensure_complete(&address).map_err(|source| UserError::Incomplete {
            field: Field::Address,
            source,
        })?;
        Ok(request.with_address(address))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateUserPayload {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub address: Option<AddressPayload>,
}

/// Wraps `value` as present, naming `field` if it is partial.
fn present<T>(field: Field, value: T) -> Result<Optional<T>, UserError>
where
    T: Complete + Default + PartialEq + std::fmt::Debug,
{
    Optional::present(value).map_err(|source| UserError::Incomplete { field, source })
}

impl TryFrom<UpdateUserPayload> for UpdateUserRequest {
    type Error = UserError;

    fn try_from(payload: UpdateUserPayload) -> Result<Self, Self::Error> {
        let mut request = UpdateUserRequest::new(UserId::parse(&payload.id)?);

        if let Some(email) = payload.email {
            request = request.with_email(present(Field::Email, EmailAddress::parse(&email)?)?);
        }
        if let Some(password) = payload.password {
            let hash = PasswordHash::from_password(&password)?;
            request = request.with_password_hash(present(Field::PasswordHash, hash)?);
        }
        if let Some(bio) = payload.bio {
            request = request.with_bio(present(Field::Bio, Bio::new(bio))?);
        }
        if let Some(address) = payload.address {
            request = request.with_address(present(Field::Address, address.parse()?)?);
        }
        Ok(request)
    }
}
