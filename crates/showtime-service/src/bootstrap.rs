//! First-start admin provisioning.

use tracing::{info, warn};

use showtime_auth::password::PasswordHasher;
use showtime_core::config::AuthConfig;
use showtime_core::result::AppResult;
use showtime_core::types::pagination::PageRequest;
use showtime_database::{RoleStore, UserFilter, UserStore};
use showtime_entity::user::{ADMIN_ROLE, NewUser, User};

const DEFAULT_PASSWORD: &str = "CHANGE_ME_IN_PRODUCTION";

/// Create the configured admin account unless an active admin already
/// exists. The `admin` role is created when missing. Returns the new user.
pub async fn ensure_admin(
    users: &dyn UserStore,
    roles: &dyn RoleStore,
    hasher: &PasswordHasher,
    config: &AuthConfig,
) -> AppResult<Option<User>> {
    let role = match roles.find_by_name(ADMIN_ROLE).await? {
        Some(role) => role,
        None => {
            warn!("Admin role missing, creating it");
            roles.create(ADMIN_ROLE).await?
        }
    };

    let filter = UserFilter {
        role_id: Some(role.id),
        is_active: Some(true),
        ..Default::default()
    };
    let existing = users.list(&filter, &PageRequest::new(1, 1)).await?;
    if existing.total > 0 {
        info!(admins = existing.total, "Active admin present, skipping bootstrap");
        return Ok(None);
    }

    if users
        .find_by_email(&config.bootstrap_admin_email)
        .await?
        .is_some()
    {
        warn!(
            email = %config.bootstrap_admin_email,
            "Bootstrap email belongs to a non-admin or inactive account, skipping bootstrap"
        );
        return Ok(None);
    }

    if config.bootstrap_admin_password == DEFAULT_PASSWORD {
        warn!("Bootstrap admin uses the default password; change it immediately");
    }

    let user = users
        .create(&NewUser {
            email: config.bootstrap_admin_email.clone(),
            password_hash: hasher.hash_password(&config.bootstrap_admin_password)?,
            name: config.bootstrap_admin_name.clone(),
            role_id: role.id,
            is_active: true,
        })
        .await?;

    info!(user_id = user.id, email = %user.email, "Bootstrap admin created");
    Ok(Some(user))
}

#[cfg(test)]
mod tests {
    use showtime_database::MemoryCredentialStore;

    use super::*;

    #[tokio::test]
    async fn creates_admin_once() {
        let store = MemoryCredentialStore::seeded();
        let hasher = PasswordHasher::new();
        let config = AuthConfig::default();

        let created = ensure_admin(&store, &store, &hasher, &config).await.unwrap();
        let admin = created.expect("admin created");
        assert_eq!(admin.email, config.bootstrap_admin_email);
        assert!(
            hasher
                .verify_password(&config.bootstrap_admin_password, &admin.password_hash)
                .unwrap()
        );

        assert!(ensure_admin(&store, &store, &hasher, &config).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn creates_missing_admin_role() {
        let store = MemoryCredentialStore::new();
        let created = ensure_admin(&store, &store, &PasswordHasher::new(), &AuthConfig::default())
            .await
            .unwrap()
            .unwrap();
        let role = store.find_by_name(ADMIN_ROLE).await.unwrap().unwrap();
        assert_eq!(created.role_id, role.id);
    }

    #[tokio::test]
    async fn skips_when_email_is_taken_by_another_account() {
        let store = MemoryCredentialStore::seeded();
        let config = AuthConfig::default();
        UserStore::create(
            &store,
            &NewUser {
                email: config.bootstrap_admin_email.clone(),
                password_hash: "x".to_string(),
                name: "Someone".to_string(),
                role_id: 2,
                is_active: true,
            },
        )
        .await
        .unwrap();

        let created = ensure_admin(&store, &store, &PasswordHasher::new(), &config)
            .await
            .unwrap();
        assert!(created.is_none());
    }
}
