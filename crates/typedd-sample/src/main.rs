use tracing::{error, info, warn, Instrument};
use typedd::Service;
use typedd_sample::lifecycle::{setup_tracing, SystemConfig, UserSystem};
use typedd_sample::model::{Bio, CreateUserRequest, EmailAddress, PasswordHash, UpdateUserRequest};
use typedd_sample::payload::{AddressPayload, CreateUserPayload, UpdateUserPayload};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = SystemConfig::from_env().map_err(|e| e.to_string())?;
    info!(mode = %config.mode, "Starting user system");
    let system = UserSystem::new(config);
    let service = system.service();

    // Register a user from a request body.
    let payload = CreateUserPayload {
        email: "ada@example.com".to_string(),
        password: "analytical engine".to_string(),
        bio: "Wrote the first program".to_string(),
        address: Some(AddressPayload {
            city: "London".to_string(),
            postcode: "W1J 7NT".to_string(),
        }),
    };
    let user = async {
        let request = CreateUserRequest::try_from(payload).map_err(|e| e.to_string())?;
        service.create(request).await.map_err(|e| e.to_string())
    }
    .instrument(tracing::info_span!("user_registration"))
    .await?;
    info!(user_id = %user.id(), email = %user.email(), "User registered");

    // Clear the address, leave everything else alone.
    let patch = UpdateUserPayload {
        id: user.id().to_string(),
        address: Some(AddressPayload::default()),
        ..UpdateUserPayload::default()
    };
    let update = UpdateUserRequest::try_from(patch).map_err(|e| e.to_string())?;
    service.update(update).await.map_err(|e| e.to_string())?;
    let user = service.get(user.id()).await.map_err(|e| e.to_string())?;
    info!(user_id = %user.id(), has_address = user.address().is_some(), "Address cleared");

    // A half-built request: rejected in strict mode, stored as-is in lean mode.
    let broken = CreateUserRequest::new(
        EmailAddress::parse("grace@example.com").map_err(|e| e.to_string())?,
        PasswordHash::default(),
        Bio::default(),
    );
    match service.create(broken).await {
        Ok(user) => warn!(user_id = %user.id(), "Incomplete request was accepted (lean mode)"),
        Err(e) if e.is_defect() => error!(error = %e, "Incomplete request rejected"),
        Err(e) => return Err(e.to_string()),
    }

    drop(service);
    system.shutdown().await?;
    info!("Done");
    Ok(())
}
