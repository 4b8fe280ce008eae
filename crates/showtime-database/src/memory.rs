//! In-memory credential store backed by `dashmap`.
//!
//! Mirrors the PostgreSQL semantics the rest of the system relies on:
//! case-insensitive email uniqueness among non-deleted users, unique role
//! names, soft deletion, and newest-first listings.

use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;

use showtime_core::error::AppError;
use showtime_core::result::AppResult;
use showtime_core::types::pagination::{PageRequest, PageResponse};
use showtime_entity::user::{NewUser, Role, User, UserWithRole};

use crate::store::{RoleStore, UserFilter, UserStore};

#[derive(Debug)]
pub struct MemoryCredentialStore {
    users: DashMap<i64, User>,
    roles: DashMap<i64, Role>,
    next_user_id: AtomicI64,
    next_role_id: AtomicI64,
}

impl Default for MemoryCredentialStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self {
            users: DashMap::new(),
            roles: DashMap::new(),
            next_user_id: AtomicI64::new(1),
            next_role_id: AtomicI64::new(1),
        }
    }

    /// A store holding the seeded `admin`, `user`, and `moderator` roles.
    pub fn seeded() -> Self {
        let store = Self::new();
        for name in ["admin", "user", "moderator"] {
            store.insert_role(name);
        }
        store
    }

    fn insert_role(&self, name: &str) -> Role {
        let now = Utc::now();
        let role = Role {
            id: self.next_role_id.fetch_add(1, Ordering::SeqCst),
            name: name.to_string(),
            created_at: now,
            updated_at: now,
        };
        self.roles.insert(role.id, role.clone());
        role
    }

    fn live_users(&self) -> Vec<User> {
        self.users
            .iter()
            .filter(|u| u.deleted_at.is_none())
            .map(|u| u.value().clone())
            .collect()
    }

    fn email_taken(&self, email: &str, except_id: Option<i64>) -> bool {
        self.users.iter().any(|u| {
            u.deleted_at.is_none()
                && Some(u.id) != except_id
                && u.email.eq_ignore_ascii_case(email)
        })
    }

    fn role_name_taken(&self, name: &str, except_id: Option<i64>) -> bool {
        self.roles
            .iter()
            .any(|r| r.name == name && Some(r.id) != except_id)
    }

    fn with_role(&self, user: User) -> Option<UserWithRole> {
        let role = self.roles.get(&user.role_id)?.value().clone();
        Some(UserWithRole { user, role })
    }
}

fn paginate<T>(mut items: Vec<T>, page: &PageRequest) -> PageResponse<T> {
    let total = items.len() as u64;
    let start = (page.offset() as usize).min(items.len());
    let end = (start + page.limit() as usize).min(items.len());
    let slice: Vec<T> = items.drain(start..end).collect();
    PageResponse::new(slice, page, total)
}

fn newest_first(users: &mut [User]) {
    users.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
}

#[async_trait]
impl UserStore for MemoryCredentialStore {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>> {
        Ok(self
            .users
            .get(&id)
            .filter(|u| u.deleted_at.is_none())
            .map(|u| u.value().clone()))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        Ok(self
            .live_users()
            .into_iter()
            .find(|u| u.email.eq_ignore_ascii_case(email)))
    }

    async fn find_with_role(&self, id: i64) -> AppResult<Option<UserWithRole>> {
        let user = UserStore::find_by_id(self, id).await?;
        Ok(user.and_then(|u| self.with_role(u)))
    }

    async fn list(
        &self,
        filter: &UserFilter,
        page: &PageRequest,
    ) -> AppResult<PageResponse<UserWithRole>> {
        let needle = filter.search.as_ref().map(|s| s.to_lowercase());
        let mut users: Vec<User> = self
            .live_users()
            .into_iter()
            .filter(|u| {
                needle.as_ref().is_none_or(|n| {
                    u.name.to_lowercase().contains(n) || u.email.to_lowercase().contains(n)
                })
            })
            .filter(|u| filter.role_id.is_none_or(|r| u.role_id == r))
            .filter(|u| filter.is_active.is_none_or(|a| u.is_active == a))
            .collect();
        newest_first(&mut users);

        let joined = users.into_iter().filter_map(|u| self.with_role(u)).collect();
        Ok(paginate(joined, page))
    }

    async fn list_by_role(
        &self,
        role_id: i64,
        page: &PageRequest,
    ) -> AppResult<PageResponse<User>> {
        let mut users: Vec<User> = self
            .live_users()
            .into_iter()
            .filter(|u| u.role_id == role_id)
            .collect();
        newest_first(&mut users);
        Ok(paginate(users, page))
    }

    async fn create(&self, data: &NewUser) -> AppResult<User> {
        if self.email_taken(&data.email, None) {
            return Err(AppError::conflict(format!(
                "Email '{}' is already registered",
                data.email
            )));
        }
        let now = Utc::now();
        let user = User {
            id: self.next_user_id.fetch_add(1, Ordering::SeqCst),
            email: data.email.clone(),
            password_hash: data.password_hash.clone(),
            name: data.name.clone(),
            role_id: data.role_id,
            is_active: data.is_active,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        };
        self.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn update(&self, user: &User) -> AppResult<User> {
        if self.email_taken(&user.email, Some(user.id)) {
            return Err(AppError::conflict(format!(
                "Email '{}' is already registered",
                user.email
            )));
        }
        let mut entry = self
            .users
            .get_mut(&user.id)
            .filter(|u| u.deleted_at.is_none())
            .ok_or_else(|| AppError::not_found("User not found"))?;

        let mut updated = user.clone();
        updated.created_at = entry.created_at;
        updated.deleted_at = None;
        updated.updated_at = Utc::now();
        *entry = updated.clone();
        Ok(updated)
    }

    async fn soft_delete(&self, id: i64) -> AppResult<bool> {
        match self.users.get_mut(&id) {
            Some(mut user) if user.deleted_at.is_none() => {
                let now = Utc::now();
                user.deleted_at = Some(now);
                user.updated_at = now;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn count_by_role(&self, role_id: i64) -> AppResult<i64> {
        Ok(self
            .live_users()
            .iter()
            .filter(|u| u.role_id == role_id)
            .count() as i64)
    }
}

#[async_trait]
impl RoleStore for MemoryCredentialStore {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Role>> {
        Ok(self.roles.get(&id).map(|r| r.value().clone()))
    }

    async fn find_by_name(&self, name: &str) -> AppResult<Option<Role>> {
        Ok(self
            .roles
            .iter()
            .find(|r| r.name == name)
            .map(|r| r.value().clone()))
    }

    async fn list(
        &self,
        search: Option<&str>,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Role>> {
        let needle = search.map(str::to_lowercase);
        let mut roles: Vec<Role> = self
            .roles
            .iter()
            .filter(|r| {
                needle
                    .as_ref()
                    .is_none_or(|n| r.name.to_lowercase().contains(n))
            })
            .map(|r| r.value().clone())
            .collect();
        roles.sort_by_key(|r| r.id);
        Ok(paginate(roles, page))
    }

    async fn create(&self, name: &str) -> AppResult<Role> {
        if self.role_name_taken(name, None) {
            return Err(AppError::conflict(format!("Role '{name}' already exists")));
        }
        Ok(self.insert_role(name))
    }

    async fn update(&self, id: i64, name: &str) -> AppResult<Role> {
        if self.role_name_taken(name, Some(id)) {
            return Err(AppError::conflict(format!("Role '{name}' already exists")));
        }
        let mut role = self
            .roles
            .get_mut(&id)
            .ok_or_else(|| AppError::not_found("Role not found"))?;
        role.name = name.to_string();
        role.updated_at = Utc::now();
        Ok(role.clone())
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        Ok(self.roles.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_user(email: &str, role_id: i64) -> NewUser {
        NewUser {
            email: email.to_string(),
            password_hash: "hash".to_string(),
            name: "Test User".to_string(),
            role_id,
            is_active: true,
        }
    }

    #[tokio::test]
    async fn email_is_unique_case_insensitively() {
        let store = MemoryCredentialStore::seeded();
        UserStore::create(&store, &new_user("a@example.com", 2)).await.unwrap();
        let err = UserStore::create(&store, &new_user("A@Example.com", 2)).await.unwrap_err();
        assert_eq!(err.kind, showtime_core::error::ErrorKind::Conflict);
    }

    #[tokio::test]
    async fn soft_deleted_user_frees_email_and_disappears() {
        let store = MemoryCredentialStore::seeded();
        let user = UserStore::create(&store, &new_user("a@example.com", 2)).await.unwrap();
        assert!(store.soft_delete(user.id).await.unwrap());
        assert!(!store.soft_delete(user.id).await.unwrap());
        assert!(UserStore::find_by_id(&store, user.id).await.unwrap().is_none());
        assert_eq!(store.count_by_role(2).await.unwrap(), 0);
        UserStore::create(&store, &new_user("a@example.com", 2)).await.unwrap();
    }

    #[tokio::test]
    async fn list_filters_and_paginates() {
        let store = MemoryCredentialStore::seeded();
        for i in 0..5 {
            UserStore::create(&store, &new_user(&format!("user{i}@example.com"), 2))
                .await
                .unwrap();
        }
        UserStore::create(&store, &new_user("boss@example.com", 1)).await.unwrap();

        let filter = UserFilter {
            role_id: Some(2),
            ..Default::default()
        };
        let page = UserStore::list(&store, &filter, &PageRequest::new(2, 2)).await.unwrap();
        assert_eq!(page.total, 5);
        assert_eq!(page.pages, 3);
        assert_eq!(page.items.len(), 2);
        assert!(page.items.iter().all(|u| u.role.name == "user"));

        let search = UserFilter {
            search: Some("BOSS".to_string()),
            ..Default::default()
        };
        let page = UserStore::list(&store, &search, &PageRequest::default()).await.unwrap();
        assert_eq!(page.total, 1);
        assert_eq!(page.items[0].role.name, "admin");
    }

    #[tokio::test]
    async fn role_names_are_unique() {
        let store = MemoryCredentialStore::seeded();
        let err = RoleStore::create(&store, "admin").await.unwrap_err();
        assert_eq!(err.kind, showtime_core::error::ErrorKind::Conflict);
        let role = RoleStore::create(&store, "editor").await.unwrap();
        assert_eq!(RoleStore::update(&store, role.id, "editor").await.unwrap().name, "editor");
        assert!(RoleStore::update(&store, role.id, "user").await.is_err());
    }
}
