//! User queries.

use async_trait::async_trait;
use sea_orm::ColumnTrait;

use common::AppResult;
use domain::{User, UserRole};

use super::base::{Repository, SeaRepository};
use super::entities::user::{Column, Entity};

/// User repository: lookups by username and role
#[async_trait]
pub trait UserRepository: Repository<User> {
    async fn get_by_username(&self, username: &str) -> AppResult<Option<User>>;

    async fn get_by_role(&self, role: UserRole) -> AppResult<Vec<User>>;
}

#[async_trait]
impl<'ctx> UserRepository for SeaRepository<'ctx, Entity> {
    async fn get_by_username(&self, username: &str) -> AppResult<Option<User>> {
        self.filter_one(Column::Username.eq(username)).await
    }

    async fn get_by_role(&self, role: UserRole) -> AppResult<Vec<User>> {
        self.filter_all(Column::Role.eq(role.as_str())).await
    }
}
