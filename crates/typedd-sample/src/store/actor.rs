use super::client::StoreClient;
use super::message::StoreRequest;
use crate::error::{Field, UserError};
use crate::model::{
    Bio, CreateUserRequest, EmailAddress, PasswordHash, PostalAddress, UpdateUserRequest, User,
    UserChanges, UserId,
};
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

const ENTITY_TYPE: &str = "User";

/// What the store keeps per user. The id is the map key.
#[derive(Debug, Clone)]
struct UserRecord {
    email: EmailAddress,
    password_hash: PasswordHash,
    bio: Bio,
    address: Option<PostalAddress>,
}

impl UserRecord {
    fn to_user(&self, id: UserId) -> User {
        User::new(
            id,
            self.email.clone(),
            self.password_hash.clone(),
            self.bio.clone(),
            self.address.clone(),
        )
    }
}

/// An in-memory user store running as an actor.
///
/// The actor owns both indexes and handles one request at a time, so the
/// unique-email check and the write that follows it cannot interleave with
/// another request. Talk to it through the [`StoreClient`] returned by
/// [`UserStore::new`].
///
/// ## Operations
///
/// * **Create**: rejects an email that is already indexed, assigns a fresh
///   random id, and returns the stored user.
/// * **Update**: applies every present field of the request. A zero address
///   removes the address. Changing the email moves the email index entry; the
///   whole update is refused if the new email belongs to someone else.
/// * **Get**: returns the stored user or [`UserError::NotFound`].
pub struct UserStore {
    receiver: mpsc::Receiver<StoreRequest>,
    users: HashMap<UserId, UserRecord>,
    emails: HashMap<EmailAddress, UserId>,
}

impl UserStore {
    /// Creates the store and its client.
    ///
    /// `buffer_size` is the request channel capacity; clients wait once it is full.
    pub fn new(buffer_size: usize) -> (Self, StoreClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let store = Self {
            receiver,
            users: HashMap::new(),
            emails: HashMap::new(),
        };
        (store, StoreClient::new(sender))
    }

    /// Processes requests until every client is dropped.
    pub async fn run(mut self) {
        info!(entity_type = ENTITY_TYPE, "Store started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StoreRequest::Create { request, respond_to } => {
                    debug!(entity_type = ENTITY_TYPE, ?request, "Create");
                    let result = self.create(request);
                    match &result {
                        Ok(user) => {
                            info!(entity_type = ENTITY_TYPE, id = %user.id(), size = self.users.len(), "Created")
                        }
                        Err(e) => warn!(entity_type = ENTITY_TYPE, error = %e, "Create failed"),
                    }
                    let _ = respond_to.send(result);
                }
                StoreRequest::Update { request, respond_to } => {
                    debug!(entity_type = ENTITY_TYPE, ?request, "Update");
                    let id = request.id();
                    let result = self.update(request);
                    match &result {
                        Ok(()) => info!(entity_type = ENTITY_TYPE, %id, "Updated"),
                        Err(e) => warn!(entity_type = ENTITY_TYPE, %id, error = %e, "Update failed"),
                    }
                    let _ = respond_to.send(result);
                }
                StoreRequest::Get { id, respond_to } => {
                    let result = self
                        .users
                        .get(&id)
                        .map(|record| record.to_user(id))
                        .ok_or(UserError::NotFound(id));
                    debug!(entity_type = ENTITY_TYPE, %id, found = result.is_ok(), "Get");
                    let _ = respond_to.send(result);
                }
            }
        }

        info!(entity_type = ENTITY_TYPE, size = self.users.len(), "Shutdown");
    }

    fn create(&mut self, request: CreateUserRequest) -> Result<User, UserError> {
        let (email, password_hash, bio, address) = request.into_parts();
        self.ensure_email_free(&email, None)?;

        let id = UserId::generate();
        self.emails.insert(email.clone(), id);
        let record = UserRecord {
            email,
            password_hash,
            bio,
            address,
        };
        let user = record.to_user(id);
        self.users.insert(id, record);
        Ok(user)
    }

    fn update(&mut self, request: UpdateUserRequest) -> Result<(), UserError> {
        let (id, changes) = request.into_changes();
        if !self.users.contains_key(&id) {
            return Err(UserError::NotFound(id));
        }
        if let Some(email) = changes.email.as_present() {
            self.ensure_email_free(email, Some(id))?;
        }

        let UserChanges {
            email,
            password_hash,
            bio,
            address,
        } = changes;
        let Some(record) = self.users.get_mut(&id) else {
            return Err(UserError::NotFound(id));
        };

        if let Some(email) = email.into_present() {
            if email != record.email {
                self.emails.remove(&record.email);
                self.emails.insert(email.clone(), id);
                record.email = email;
            }
        }
        if let Some(password_hash) = password_hash.into_present() {
            record.password_hash = password_hash;
        }
        if let Some(bio) = bio.into_present() {
            record.bio = bio;
        }
        if let Some(address) = address.into_present() {
            record.address = (address != PostalAddress::default()).then_some(address);
        }
        Ok(())
    }

    /// Fails unless `email` is unused or already belongs to `owner`.
    fn ensure_email_free(&self, email: &EmailAddress, owner: Option<UserId>) -> Result<(), UserError> {
        match self.emails.get(email) {
            Some(existing) if Some(*existing) != owner => Err(UserError::ConstraintViolation {
                field: Field::Email,
                messages: vec![format!("user with email {email} already exists")],
            }),
            _ => Ok(()),
        }
    }
}
