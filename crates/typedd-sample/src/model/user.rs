use super::address::PostalAddress;
use super::values::{Bio, EmailAddress, PasswordHash, UserId};
use typedd::{Complete, Optional};

/// A registered user.
///
/// Only the store assigns ids, so outside of it a `User` is obtained from a
/// [`Service`](typedd::Service) or built explicitly with [`User::new`].
#[derive(Debug, Default, Clone, PartialEq, Complete)]
pub struct User {
    id: UserId,
    email: EmailAddress,
    password_hash: PasswordHash,
    bio: Bio,
    address: Option<PostalAddress>,
}

impl User {
    pub fn new(
        id: UserId,
        email: EmailAddress,
        password_hash: PasswordHash,
        bio: Bio,
        address: Option<PostalAddress>,
    ) -> Self {
        Self {
            id,
            email,
            password_hash,
            bio,
            address,
        }
    }

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    pub fn password_hash(&self) -> &PasswordHash {
        &self.password_hash
    }

    pub fn bio(&self) -> &Bio {
        &self.bio
    }

    pub fn address(&self) -> Option<&PostalAddress> {
        self.address.as_ref()
    }
}

/// Everything needed to register a user.
#[derive(Debug, Default, Clone, PartialEq, Complete)]
pub struct CreateUserRequest {
    email: EmailAddress,
    password_hash: PasswordHash,
    bio: Bio,
    address: Option<PostalAddress>,
}

impl CreateUserRequest {
    pub fn new(email: EmailAddress, password_hash: PasswordHash, bio: Bio) -> Self {
        Self {
            email,
            password_hash,
            bio,
            address: None,
        }
    }

    pub fn with_address(mut self, address: PostalAddress) -> Self {
        self.address = Some(address);
        self
    }

    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    pub fn password_hash(&self) -> &PasswordHash {
        &self.password_hash
    }

    pub fn bio(&self) -> &Bio {
        &self.bio
    }

    pub fn address(&self) -> Option<&PostalAddress> {
        self.address.as_ref()
    }

    pub(crate) fn into_parts(self) -> (EmailAddress, PasswordHash, Bio, Option<PostalAddress>) {
        (self.email, self.password_hash, self.bio, self.address)
    }
}

/// A partial update of one user.
///
/// Each field is an [`Optional`]: empty leaves the stored value alone, a
/// complete value replaces it, and the zero value clears it. Clearing is only
/// allowed for the bio and the address.
#[derive(Debug, Default, Clone, PartialEq, Complete)]
pub struct UpdateUserRequest {
    id: UserId,
    email: Optional<EmailAddress>,
    password_hash: Optional<PasswordHash>,
    bio: Optional<Bio>,
    address: Optional<PostalAddress>,
}

/// The fields of an [`UpdateUserRequest`], moved out.
#[derive(Debug, Default)]
pub struct UserChanges {
    pub email: Optional<EmailAddress>,
    pub password_hash: Optional<PasswordHash>,
    pub bio: Optional<Bio>,
    pub address: Optional<PostalAddress>,
}

impl UpdateUserRequest {
    /// An update of `id` that changes nothing yet.
    pub fn new(id: UserId) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    pub fn with_email(mut self, email: Optional<EmailAddress>) -> Self {
        self.email = email;
        self
    }

    pub fn with_password_hash(mut self, password_hash: Optional<PasswordHash>) -> Self {
        self.password_hash = password_hash;
        self
    }

    pub fn with_bio(mut self, bio: Optional<Bio>) -> Self {
        self.bio = bio;
        self
    }

    pub fn with_address(mut self, address: Optional<PostalAddress>) -> Self {
        self.address = address;
        self
    }

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn email(&self) -> &Optional<EmailAddress> {
        &self.email
    }

    pub fn password_hash(&self) -> &Optional<PasswordHash> {
        &self.password_hash
    }

    pub fn bio(&self) -> &Optional<Bio> {
        &self.bio
    }

    pub fn address(&self) -> &Optional<PostalAddress> {
        &self.address
    }

    /// True when no field is present.
    pub fn is_noop(&self) -> bool {
        !(self.email.is_present()
            || self.password_hash.is_present()
            || self.bio.is_present()
            || self.address.is_present())
    }

    pub fn into_changes(self) -> (UserId, UserChanges) {
        (
            self.id,
            UserChanges {
                email: self.email,
                password_hash: self.password_hash,
                bio: self.bio,
                address: self.address,
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{City, Postcode};

    fn email() -> EmailAddress {
        EmailAddress::parse("ada@example.com").unwrap()
    }

    fn hash() -> PasswordHash {
        PasswordHash::from_password("analytical engine").unwrap()
    }

    #[test]
    fn test_create_request_completeness() {
        let request = CreateUserRequest::new(email(), hash(), Bio::default());
        assert!(request.is_complete());

        let missing_hash = CreateUserRequest::new(email(), PasswordHash::default(), Bio::default());
        assert!(!missing_hash.is_complete());

        let partial_address = request.with_address(PostalAddress::new(
            City::parse("London").unwrap(),
            Postcode::default(),
        ));
        assert!(!partial_address.is_complete());
    }

    #[test]
    fn test_user_without_address_is_complete() {
        let user = User::new(UserId::generate(), email(), hash(), Bio::default(), None);
        assert!(user.is_complete());
        assert!(!User::default().is_complete());
    }

    #[test]
    fn test_update_request_requires_id() {
        assert!(!UpdateUserRequest::default().is_complete());

        let update = UpdateUserRequest::new(UserId::generate());
        assert!(update.is_complete());
        assert!(update.is_noop());

        let update = update.with_bio(Optional::present(Bio::default()).unwrap());
        assert!(!update.is_noop());
    }
}
