//! Generic repository contract and its SeaORM implementation.
//!
//! Every entity gets the same CRUD surface through [`Repository`].
//! Writes are staged in the owning [`DbContext`] and only reach the store
//! on [`Repository::save_changes`].

use std::marker::PhantomData;

use async_trait::async_trait;
use sea_orm::sea_query::IntoCondition;
use sea_orm::{ActiveModelTrait, ColumnTrait, Condition, EntityTrait, QueryFilter, Select};
use uuid::Uuid;

use common::AppResult;
use domain::{BaseEntity, DomainResult};

use super::context::{store_now, DbContext};

/// Mapping between a SeaORM entity and its domain entity.
pub trait EntityMapping: EntityTrait {
    /// Domain entity stored in this table
    type Domain: BaseEntity;

    /// Active model used to write rows
    type Active: ActiveModelTrait<Entity = Self> + Send;

    /// Primary key column
    fn id_column() -> Self::Column;

    /// Modification timestamp column, used to detect concurrent updates
    fn updated_at_column() -> Self::Column;

    /// Convert a row into its domain entity
    fn to_domain(model: Self::Model) -> DomainResult<Self::Domain>;

    /// Build a fully set active model from a domain entity
    fn to_active_model(domain: &Self::Domain) -> Self::Active;
}

/// Generic CRUD contract over an entity type.
///
/// Reads go straight to the store and do not see staged changes.
#[async_trait]
pub trait Repository<T: BaseEntity>: Send + Sync {
    /// Find entity by id; `None` when no row matches
    async fn get_by_id(&self, id: Uuid) -> AppResult<Option<T>>;

    /// All rows, in no particular order
    async fn get_all(&self) -> AppResult<Vec<T>>;

    /// Rows matching a store-side condition
    async fn find(&self, filter: Condition) -> AppResult<Vec<T>>;

    /// Validate and stage an insert, returning the entity with store fields set
    async fn create(&mut self, entity: T) -> AppResult<T>;

    /// Validate and stage an update.
    ///
    /// Refreshes `updated_at` on the caller's entity, so the same value can
    /// be updated again after the next `save_changes`.
    async fn update(&mut self, entity: &mut T) -> AppResult<()>;

    /// Stage a delete
    async fn delete(&mut self, entity: T) -> AppResult<()>;

    /// Flush every staged change of the context as one transaction
    async fn save_changes(&mut self) -> AppResult<u64>;
}

/// SeaORM repository bound to a persistence context.
///
/// Borrowing the context mutably keeps operations on it serialized.
pub struct SeaRepository<'ctx, E> {
    ctx: &'ctx mut DbContext,
    _entity: PhantomData<E>,
}

impl<'ctx, E> SeaRepository<'ctx, E>
where
    E: EntityMapping,
    E::Model: Sync,
{
    pub(crate) fn new(ctx: &'ctx mut DbContext) -> Self {
        Self {
            ctx,
            _entity: PhantomData,
        }
    }

    /// Run a select and map every row
    pub async fn fetch_all(&self, select: Select<E>) -> AppResult<Vec<E::Domain>> {
        let models = select.all(self.ctx.connection()).await?;
        let entities = models
            .into_iter()
            .map(E::to_domain)
            .collect::<DomainResult<Vec<_>>>()?;
        Ok(entities)
    }

    /// Run a select and map the first row
    pub async fn fetch_one(&self, select: Select<E>) -> AppResult<Option<E::Domain>> {
        let model = select.one(self.ctx.connection()).await?;
        Ok(model.map(E::to_domain).transpose()?)
    }

    /// Rows matching a filter
    pub async fn filter_all<F>(&self, filter: F) -> AppResult<Vec<E::Domain>>
    where
        F: IntoCondition + Send,
    {
        self.fetch_all(E::find().filter(filter)).await
    }

    /// First row matching a filter
    pub async fn filter_one<F>(&self, filter: F) -> AppResult<Option<E::Domain>>
    where
        F: IntoCondition + Send,
    {
        self.fetch_one(E::find().filter(filter)).await
    }
}

#[async_trait]
impl<'ctx, E> Repository<E::Domain> for SeaRepository<'ctx, E>
where
    E: EntityMapping,
    E::Model: Sync,
{
    async fn get_by_id(&self, id: Uuid) -> AppResult<Option<E::Domain>> {
        self.filter_one(E::id_column().eq(id)).await
    }

    async fn get_all(&self) -> AppResult<Vec<E::Domain>> {
        self.fetch_all(E::find()).await
    }

    async fn find(&self, filter: Condition) -> AppResult<Vec<E::Domain>> {
        self.filter_all(filter).await
    }

    async fn create(&mut self, mut entity: E::Domain) -> AppResult<E::Domain> {
        entity.check()?;
        entity.assign_store_fields(store_now());
        self.ctx.stage_insert::<E>(&entity);
        Ok(entity)
    }

    async fn update(&mut self, entity: &mut E::Domain) -> AppResult<()> {
        entity.check()?;
        let expected_updated_at = entity.updated_at();
        entity.touch(store_now());
        self.ctx.stage_update::<E>(entity, expected_updated_at)
    }

    async fn delete(&mut self, entity: E::Domain) -> AppResult<()> {
        self.ctx.stage_delete::<E>(entity.id());
        Ok(())
    }

    async fn save_changes(&mut self) -> AppResult<u64> {
        self.ctx.save_changes().await
    }
}
