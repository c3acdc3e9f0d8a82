//! Persistence context (unit of work).
//!
//! A `DbContext` owns the connection and the changes staged by its
//! repositories. `save_changes` flushes them, in staging order, inside a
//! single transaction.
//!
//! One context per logical unit of work; it is not meant to be shared
//! between concurrent operations.

use chrono::{DateTime, Utc};
use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseConnection, DatabaseTransaction, EntityTrait,
    FromQueryResult, QueryFilter, QueryTrait, Statement, TransactionTrait,
};
use serde_json::Value;
use uuid::Uuid;

use common::{AppError, AppResult};
use domain::{store_precision, BaseEntity, DomainError};

use super::base::{EntityMapping, SeaRepository};
use super::entities::{
    audit_log, backup, document, expense, house, maintenance, notification, payment, receipt,
    user,
};

/// Kind of staged write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ChangeKind {
    Insert,
    Update,
    Delete,
}

/// Decodes a stored row into a JSON snapshot of its domain entity
type SnapshotDecoder = fn(&sea_orm::QueryResult) -> AppResult<Value>;

/// Data needed to report a concurrent update
struct ConflictProbe {
    local: Value,
    select: Statement,
    decode: SnapshotDecoder,
}

/// A write waiting for `save_changes`
struct PendingChange {
    kind: ChangeKind,
    entity_name: &'static str,
    id: Uuid,
    statement: Statement,
    probe: Option<ConflictProbe>,
}

/// Timestamp as the store keeps it (microsecond precision)
pub(crate) fn store_now() -> DateTime<Utc> {
    store_precision(Utc::now())
}

/// Persistence context shared by the repositories of one unit of work.
pub struct DbContext {
    db: DatabaseConnection,
    pending: Vec<PendingChange>,
}

impl DbContext {
    /// Create a context over a connection
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            pending: Vec::new(),
        }
    }

    /// Get a reference to the database connection.
    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Repository for any mapped entity
    pub fn repository<E>(&mut self) -> SeaRepository<'_, E>
    where
        E: EntityMapping,
        E::Model: Sync,
    {
        SeaRepository::new(self)
    }

    pub fn houses(&mut self) -> SeaRepository<'_, house::Entity> {
        self.repository()
    }

    pub fn payments(&mut self) -> SeaRepository<'_, payment::Entity> {
        self.repository()
    }

    pub fn users(&mut self) -> SeaRepository<'_, user::Entity> {
        self.repository()
    }

    pub fn documents(&mut self) -> SeaRepository<'_, document::Entity> {
        self.repository()
    }

    pub fn expenses(&mut self) -> SeaRepository<'_, expense::Entity> {
        self.repository()
    }

    pub fn maintenance(&mut self) -> SeaRepository<'_, maintenance::Entity> {
        self.repository()
    }

    pub fn receipts(&mut self) -> SeaRepository<'_, receipt::Entity> {
        self.repository()
    }

    pub fn audit_logs(&mut self) -> SeaRepository<'_, audit_log::Entity> {
        self.repository()
    }

    pub fn backups(&mut self) -> SeaRepository<'_, backup::Entity> {
        self.repository()
    }

    pub fn notifications(&mut self) -> SeaRepository<'_, notification::Entity> {
        self.repository()
    }

    /// Number of staged changes
    pub fn pending_changes(&self) -> usize {
        self.pending.len()
    }

    /// Drop every staged change without touching the store
    pub fn discard_changes(&mut self) {
        if !self.pending.is_empty() {
            tracing::debug!(count = self.pending.len(), "Discarding staged changes");
        }
        self.pending.clear();
    }

    pub(crate) fn stage_insert<E: EntityMapping>(&mut self, entity: &E::Domain) {
        let backend = self.db.get_database_backend();
        let statement = E::insert(E::to_active_model(entity)).build(backend);
        self.push(
            ChangeKind::Insert,
            <E::Domain as BaseEntity>::ENTITY_NAME,
            entity.id(),
            statement,
            None,
        );
    }

    pub(crate) fn stage_update<E: EntityMapping>(
        &mut self,
        entity: &E::Domain,
        expected_updated_at: DateTime<Utc>,
    ) -> AppResult<()> {
        let backend = self.db.get_database_backend();
        let statement = E::update_many()
            .set(E::to_active_model(entity))
            .filter(E::id_column().eq(entity.id()))
            .filter(E::updated_at_column().eq(expected_updated_at))
            .build(backend);

        let local = serde_json::to_value(entity)
            .map_err(|e| AppError::internal(format!("Failed to snapshot entity: {}", e)))?;
        let probe = ConflictProbe {
            local,
            select: E::find().filter(E::id_column().eq(entity.id())).build(backend),
            decode: decode_snapshot::<E>,
        };

        self.push(
            ChangeKind::Update,
            <E::Domain as BaseEntity>::ENTITY_NAME,
            entity.id(),
            statement,
            Some(probe),
        );
        Ok(())
    }

    pub(crate) fn stage_delete<E: EntityMapping>(&mut self, id: Uuid) {
        let backend = self.db.get_database_backend();
        let statement = E::delete_many()
            .filter(E::id_column().eq(id))
            .build(backend);
        self.push(
            ChangeKind::Delete,
            <E::Domain as BaseEntity>::ENTITY_NAME,
            id,
            statement,
            None,
        );
    }

    fn push(
        &mut self,
        kind: ChangeKind,
        entity_name: &'static str,
        id: Uuid,
        statement: Statement,
        probe: Option<ConflictProbe>,
    ) {
        tracing::debug!(?kind, entity = entity_name, %id, "Staged change");
        self.pending.push(PendingChange {
            kind,
            entity_name,
            id,
            statement,
            probe,
        });
    }

    /// Flush staged changes as one transaction.
    ///
    /// Commits on success and clears the staged changes. On failure the
    /// transaction is rolled back, the staged changes are kept and the
    /// error is returned as-is.
    pub async fn save_changes(&mut self) -> AppResult<u64> {
        if self.pending.is_empty() {
            return Ok(0);
        }

        let txn = self.db.begin().await?;

        match apply_changes(&txn, &self.pending).await {
            Ok(affected) => {
                txn.commit().await?;
                tracing::debug!(
                    changes = self.pending.len(),
                    rows = affected,
                    "Saved changes"
                );
                self.pending.clear();
                Ok(affected)
            }
            Err(e) => {
                if let Err(rollback_err) = txn.rollback().await {
                    tracing::error!("Transaction rollback failed: {}", rollback_err);
                }
                tracing::warn!(error = %e, "Save failed, changes rolled back");
                Err(e)
            }
        }
    }
}

async fn apply_changes(txn: &DatabaseTransaction, changes: &[PendingChange]) -> AppResult<u64> {
    let mut affected = 0;

    for change in changes {
        let result = txn.execute(change.statement.clone()).await?;
        let rows = result.rows_affected();

        if rows == 0 && change.kind != ChangeKind::Insert {
            return Err(missing_row_error(txn, change).await);
        }
        affected += rows;
    }

    Ok(affected)
}

/// Explain why an update or delete matched no row.
///
/// An update whose row still exists lost a race with another writer.
async fn missing_row_error(txn: &DatabaseTransaction, change: &PendingChange) -> AppError {
    let not_found =
        || -> AppError { DomainError::not_found(change.entity_name, change.id).into() };

    let Some(probe) = &change.probe else {
        return not_found();
    };

    let row = match txn.query_one(probe.select.clone()).await {
        Ok(Some(row)) => row,
        Ok(None) => return not_found(),
        Err(e) => return e.into(),
    };

    match (probe.decode)(&row) {
        Ok(cloud) => DomainError::sync_conflict(
            format!(
                "{} with id '{}' was modified by another writer.",
                change.entity_name, change.id
            ),
            probe.local.clone(),
            cloud,
        )
        .into(),
        Err(e) => e,
    }
}

fn decode_snapshot<E: EntityMapping>(row: &sea_orm::QueryResult) -> AppResult<Value> {
    let model = <E::Model as FromQueryResult>::from_query_result(row, "")?;
    let entity = E::to_domain(model)?;
    serde_json::to_value(&entity)
        .map_err(|e| AppError::internal(format!("Failed to snapshot entity: {}", e)))
}
