//! Role CRUD. Protected names can be neither renamed nor deleted, and a
//! role still assigned to a user cannot be deleted.

use std::sync::Arc;

use tracing::info;

use showtime_core::config::AuthConfig;
use showtime_core::error::AppError;
use showtime_core::result::AppResult;
use showtime_core::types::pagination::{PageRequest, PageResponse};
use showtime_database::{RoleStore, UserStore};
use showtime_entity::user::{Role, User};

#[derive(Debug, Clone)]
pub struct RoleService {
    roles: Arc<dyn RoleStore>,
    users: Arc<dyn UserStore>,
    config: AuthConfig,
}

impl RoleService {
    pub fn new(roles: Arc<dyn RoleStore>, users: Arc<dyn UserStore>, config: AuthConfig) -> Self {
        Self {
            roles,
            users,
            config,
        }
    }

    pub async fn list(&self, search: Option<&str>, page: &PageRequest) -> AppResult<PageResponse<Role>> {
        self.roles.list(search, page).await
    }

    pub async fn get(&self, id: i64) -> AppResult<Role> {
        self.roles
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Role not found"))
    }

    pub async fn create(&self, name: &str) -> AppResult<Role> {
        let role = self.roles.create(name).await?;
        info!(role_id = role.id, name = %role.name, "Role created");
        Ok(role)
    }

    pub async fn update(&self, id: i64, name: &str) -> AppResult<Role> {
        let current = self.get(id).await?;
        if current.name == name {
            return Ok(current);
        }
        self.guard_protected(&current)?;
        self.roles.update(id, name).await
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let role = self.get(id).await?;
        self.guard_protected(&role)?;

        let assigned = self.users.count_by_role(id).await?;
        if assigned > 0 {
            return Err(AppError::conflict(format!(
                "Role '{}' is assigned to {assigned} user(s)",
                role.name
            )));
        }

        if !self.roles.delete(id).await? {
            return Err(AppError::not_found("Role not found"));
        }
        info!(role_id = id, name = %role.name, "Role deleted");
        Ok(())
    }

    pub async fn users(&self, id: i64, page: &PageRequest) -> AppResult<PageResponse<User>> {
        self.get(id).await?;
        self.users.list_by_role(id, page).await
    }

    fn guard_protected(&self, role: &Role) -> AppResult<()> {
        if self.config.is_protected_role(&role.name) {
            return Err(AppError::authorization(format!(
                "Role '{}' is protected",
                role.name
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use showtime_core::error::ErrorKind;
    use showtime_database::MemoryCredentialStore;
    use showtime_entity::user::NewUser;

    use super::*;

    fn setup() -> (RoleService, Arc<MemoryCredentialStore>) {
        let store = Arc::new(MemoryCredentialStore::seeded());
        let service = RoleService::new(store.clone(), store.clone(), AuthConfig::default());
        (service, store)
    }

    #[tokio::test]
    async fn unused_role_deletes() {
        let (roles, _) = setup();
        let role = roles.create("editor").await.unwrap();
        roles.delete(role.id).await.unwrap();
        assert_eq!(roles.get(role.id).await.unwrap_err().kind, ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn role_in_use_conflicts() {
        let (roles, store) = setup();
        UserStore::create(
            store.as_ref(),
            &NewUser {
                email: "m@example.com".to_string(),
                password_hash: "h".to_string(),
                name: "Mod".to_string(),
                role_id: 3,
                is_active: true,
            },
        )
        .await
        .unwrap();

        let err = roles.delete(3).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Conflict);
        assert_eq!(roles.users(3, &PageRequest::default()).await.unwrap().total, 1);
    }

    #[tokio::test]
    async fn protected_roles_are_forbidden_regardless_of_usage() {
        let (roles, _) = setup();
        for id in [1, 2] {
            let err = roles.delete(id).await.unwrap_err();
            assert_eq!(err.kind, ErrorKind::Authorization);
        }
        let err = roles.update(1, "root").await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Authorization);
    }

    #[tokio::test]
    async fn rename_to_existing_name_conflicts() {
        let (roles, _) = setup();
        let err = roles.update(3, "user").await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Conflict);
        assert_eq!(roles.update(3, "reviewer").await.unwrap().name, "reviewer");
    }
}
