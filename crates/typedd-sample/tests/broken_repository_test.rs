use std::sync::OnceLock;
use typedd::{Boundary, Service, ValidatedService, ValidationMode};
use typedd_sample::lifecycle::compose;
use typedd_sample::mock::MockUserRepository;
use typedd_sample::model::{Bio, CreateUserRequest, EmailAddress, PasswordHash, User, UserId};
use typedd_sample::service::UserService;
use typedd_sample::UserError;

/// Argon2 is slow in debug builds; hash once per test binary.
fn password_hash() -> PasswordHash {
    static HASH: OnceLock<PasswordHash> = OnceLock::new();
    HASH.get_or_init(|| PasswordHash::from_password("password123").unwrap())
        .clone()
}

fn valid_request() -> CreateUserRequest {
    CreateUserRequest::new(
        EmailAddress::parse("ada@example.com").unwrap(),
        password_hash(),
        Bio::default(),
    )
}

fn request_without_hash() -> CreateUserRequest {
    CreateUserRequest::new(
        EmailAddress::parse("ada@example.com").unwrap(),
        PasswordHash::default(),
        Bio::default(),
    )
}

/// A user as a careless repository might build it: every field set except the id.
fn user_without_id() -> User {
    User::new(
        UserId::default(),
        EmailAddress::parse("ada@example.com").unwrap(),
        password_hash(),
        Bio::default(),
        None,
    )
}

fn defect_boundary(err: &UserError) -> Boundary {
    match err {
        UserError::Defect(violation) => violation.boundary(),
        other => panic!("expected a defect, got {other:?}"),
    }
}

/// Strict service in front of a mock with no expectations: any forwarded call panics.
#[tokio::test]
async fn test_strict_service_never_forwards_incomplete_request() {
    let repository = MockUserRepository::new();
    let service = ValidatedService::new(UserService::new(repository.clone()));

    let err = service.create(request_without_hash()).await.unwrap_err();
    assert_eq!(defect_boundary(&err), Boundary::ServiceInput);
    repository.verify();
}

#[tokio::test]
async fn test_strict_wiring_catches_broken_repository_output() {
    let repository = MockUserRepository::new();
    repository.expect_create().return_ok(user_without_id());
    let service = compose(repository.clone(), ValidationMode::Strict);

    let err = service.create(valid_request()).await.unwrap_err();
    assert_eq!(defect_boundary(&err), Boundary::RepositoryOutput);
    repository.verify();
}

#[tokio::test]
async fn test_strict_wiring_checks_get_output() {
    let id = UserId::generate();
    let repository = MockUserRepository::new();
    repository.expect_get(id).return_ok(User::default());
    let service = compose(repository.clone(), ValidationMode::Strict);

    let err = service.get(id).await.unwrap_err();
    assert_eq!(defect_boundary(&err), Boundary::RepositoryOutput);
    repository.verify();
}

#[tokio::test]
async fn test_strict_wiring_passes_repository_errors_through() {
    let id = UserId::generate();
    let repository = MockUserRepository::new();
    repository.expect_get(id).return_err(UserError::NotFound(id));
    let service = compose(repository.clone(), ValidationMode::Strict);

    assert_eq!(service.get(id).await, Err(UserError::NotFound(id)));
    repository.verify();
}

#[tokio::test]
async fn test_lean_wiring_lets_broken_values_through() {
    let repository = MockUserRepository::new();
    repository.expect_create().return_ok(user_without_id());
    let service = compose(repository.clone(), ValidationMode::Lean);

    let user = service.create(request_without_hash()).await.unwrap();
    assert_eq!(user.id(), UserId::default());
    repository.verify();
}

#[tokio::test]
async fn test_modes_agree_on_valid_values() {
    for mode in [ValidationMode::Strict, ValidationMode::Lean] {
        let id = UserId::generate();
        let stored = User::new(
            id,
            EmailAddress::parse("ada@example.com").unwrap(),
            password_hash(),
            Bio::new("same"),
            None,
        );
        let repository = MockUserRepository::new();
        repository.expect_create().return_ok(stored.clone());
        repository.expect_get(id).return_ok(stored.clone());
        let service = compose(repository.clone(), mode);

        assert_eq!(service.create(valid_request()).await, Ok(stored.clone()));
        assert_eq!(service.get(id).await, Ok(stored));
        repository.verify();
    }
}
