//! Repository and unit of work tests against an in-memory SQLite store.

use std::time::Duration;

use chrono::NaiveDate;
use sea_orm::{ColumnTrait, ConnectOptions, Condition};
use uuid::Uuid;

use common::{AppError, DatabaseConfig};
use domain::{
    AuditLog, Backup, BackupStatus, BillingMonth, Document, DomainError, Expense, House,
    Maintenance, MaintenanceStatus, Notification, NotificationPriority, Payment, PaymentStatus,
    Receipt, User, UserRole,
};
use syndic_store::config::StoreConfig;
use syndic_store::infra::Database;
use syndic_store::repository::entities::house;
use syndic_store::repository::{
    AuditLogRepository, BackupRepository, DocumentRepository, ExpenseRepository, HouseRepository,
    MaintenanceRepository, NotificationRepository, PaymentRepository, ReceiptRepository,
    Repository, UserRepository,
};
use syndic_store::MigrateAction;

async fn setup() -> Database {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);
    Database::connect_with(options)
        .await
        .expect("in-memory store should migrate")
}

fn month(value: &str) -> BillingMonth {
    BillingMonth::parse(value).unwrap()
}

fn domain_error(err: AppError) -> DomainError {
    match err {
        AppError::Domain(e) => e,
        other => panic!("expected a domain error, got {:?}", other),
    }
}

#[tokio::test]
async fn create_then_get_by_id_returns_equal_entity() {
    let db = setup().await;
    let mut ctx = db.context();

    let created = ctx
        .houses()
        .create(House::new("A1", "Amina Alaoui", 30_000))
        .await
        .unwrap();
    assert!(!created.id.is_nil());
    assert_eq!(ctx.save_changes().await.unwrap(), 1);

    let found = ctx.houses().get_by_id(created.id).await.unwrap();
    assert_eq!(found, Some(created));
}

#[tokio::test]
async fn staged_writes_are_invisible_until_saved() {
    let db = setup().await;
    let mut ctx = db.context();

    ctx.houses()
        .create(House::new("B2", "Youssef", 25_000))
        .await
        .unwrap();

    assert_eq!(ctx.pending_changes(), 1);
    assert!(ctx.houses().get_all().await.unwrap().is_empty());

    ctx.save_changes().await.unwrap();
    assert_eq!(ctx.pending_changes(), 0);
    assert_eq!(ctx.houses().get_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn save_with_nothing_staged_is_a_no_op() {
    let db = setup().await;
    let mut ctx = db.context();
    assert_eq!(ctx.save_changes().await.unwrap(), 0);
}

#[tokio::test]
async fn deleted_entity_is_no_longer_found() {
    let db = setup().await;
    let mut ctx = db.context();

    let created = ctx
        .houses()
        .create(House::new("C3", "Salma", 20_000))
        .await
        .unwrap();
    ctx.save_changes().await.unwrap();

    ctx.houses().delete(created.clone()).await.unwrap();
    ctx.save_changes().await.unwrap();

    assert_eq!(ctx.houses().get_by_id(created.id).await.unwrap(), None);
}

#[tokio::test]
async fn failed_save_rolls_back_every_staged_change() {
    let db = setup().await;
    let mut ctx = db.context();

    ctx.houses()
        .create(House::new("D4", "Omar", 20_000))
        .await
        .unwrap();
    ctx.houses()
        .create(House::new("D4", "Nadia", 20_000))
        .await
        .unwrap();

    let err = ctx.save_changes().await.unwrap_err();
    assert!(matches!(err, AppError::Database(_)));

    // Nothing reached the store and the changes are still staged
    assert!(ctx.houses().get_all().await.unwrap().is_empty());
    assert_eq!(ctx.pending_changes(), 2);

    ctx.discard_changes();
    assert_eq!(ctx.pending_changes(), 0);
    assert_eq!(ctx.save_changes().await.unwrap(), 0);
}

#[tokio::test]
async fn updating_a_missing_row_is_not_found() {
    let db = setup().await;
    let mut ctx = db.context();

    let mut ghost = House::new("E5", "Nobody", 10_000);
    ghost.id = Uuid::new_v4();

    ctx.houses().update(&mut ghost).await.unwrap();
    let err = domain_error(ctx.save_changes().await.unwrap_err());

    assert_eq!(
        err.to_string(),
        format!("House with id '{}' was not found.", ghost.id)
    );
    assert!(matches!(err, DomainError::NotFound { .. }));
}

#[tokio::test]
async fn deleting_a_missing_row_is_not_found() {
    let db = setup().await;
    let mut ctx = db.context();

    let mut ghost = House::new("F6", "Nobody", 10_000);
    ghost.id = Uuid::new_v4();

    ctx.houses().delete(ghost).await.unwrap();
    let err = domain_error(ctx.save_changes().await.unwrap_err());
    assert!(matches!(err, DomainError::NotFound { .. }));
}

#[tokio::test]
async fn update_persists_and_refreshes_timestamp() {
    let db = setup().await;
    let mut ctx = db.context();

    let mut stored = ctx
        .houses()
        .create(House::new("G7", "Karim", 30_000))
        .await
        .unwrap();
    ctx.save_changes().await.unwrap();

    tokio::time::sleep(Duration::from_millis(5)).await;
    let read_at = stored.updated_at;
    stored.owner_name = "Karim Bennani".to_string();
    ctx.houses().update(&mut stored).await.unwrap();
    assert!(stored.updated_at > read_at);
    ctx.save_changes().await.unwrap();

    let reloaded = ctx.houses().get_by_id(stored.id).await.unwrap().unwrap();
    assert_eq!(reloaded, stored);
}

#[tokio::test]
async fn same_entity_can_be_updated_repeatedly() {
    let db = setup().await;
    let mut ctx = db.context();

    let mut house = ctx
        .houses()
        .create(House::new("G8", "Nora", 30_000))
        .await
        .unwrap();
    ctx.save_changes().await.unwrap();

    house.owner_name = "First".to_string();
    ctx.houses().update(&mut house).await.unwrap();
    ctx.save_changes().await.unwrap();

    house.owner_name = "Second".to_string();
    ctx.houses().update(&mut house).await.unwrap();
    assert_eq!(ctx.save_changes().await.unwrap(), 1);

    let reloaded = ctx.houses().get_by_id(house.id).await.unwrap().unwrap();
    assert_eq!(reloaded.owner_name, "Second");
    assert_eq!(reloaded, house);
}

#[tokio::test]
async fn stale_update_reports_sync_conflict() {
    let db = setup().await;
    let mut ctx = db.context();

    let original = ctx
        .houses()
        .create(House::new("H8", "Leila", 30_000))
        .await
        .unwrap();
    ctx.save_changes().await.unwrap();

    // Another writer updates first
    tokio::time::sleep(Duration::from_millis(5)).await;
    let mut theirs = original.clone();
    theirs.monthly_fee_cents = 35_000;
    let mut other = db.context();
    other.houses().update(&mut theirs).await.unwrap();
    other.save_changes().await.unwrap();

    let mut ours = original.clone();
    ours.owner_name = "Leila Idrissi".to_string();
    ctx.houses().update(&mut ours).await.unwrap();
    let err = domain_error(ctx.save_changes().await.unwrap_err());

    match err {
        DomainError::SyncConflict { local, cloud, .. } => {
            assert_eq!(local["owner_name"], "Leila Idrissi");
            assert_eq!(cloud["owner_name"], "Leila");
            assert_eq!(cloud["monthly_fee_cents"], 35_000);
        }
        other => panic!("expected a sync conflict, got {:?}", other),
    }

    let stored = ctx.houses().get_by_id(original.id).await.unwrap().unwrap();
    assert_eq!(stored.owner_name, "Leila");
}

#[tokio::test]
async fn invalid_entity_is_rejected_before_staging() {
    let db = setup().await;
    let mut ctx = db.context();

    let err = ctx
        .houses()
        .create(House::new("", "Owner", 30_000))
        .await
        .unwrap_err();
    let err = domain_error(err);

    assert_eq!(err.to_string(), "House is invalid");
    assert!(err.field_errors().unwrap().contains_key("code"));
    assert_eq!(ctx.pending_changes(), 0);
}

#[tokio::test]
async fn find_accepts_store_side_conditions() {
    let db = setup().await;
    let mut ctx = db.context();

    ctx.houses()
        .create(House::new("I1", "Hajar", 30_000))
        .await
        .unwrap();
    ctx.houses()
        .create(House::new("I2", "Hamza", 45_000))
        .await
        .unwrap();
    ctx.save_changes().await.unwrap();

    let expensive = ctx
        .houses()
        .find(Condition::all().add(house::Column::MonthlyFeeCents.gt(40_000)))
        .await
        .unwrap();
    assert_eq!(expensive.len(), 1);
    assert_eq!(expensive[0].code, "I2");
}

#[tokio::test]
async fn house_lookups_by_code_and_activity() {
    let db = setup().await;
    let mut ctx = db.context();

    let mut gone = House::new("J2", "Former owner", 30_000);
    gone.deactivate();
    ctx.houses()
        .create(House::new("J1", "Rachid", 30_000))
        .await
        .unwrap();
    ctx.houses().create(gone).await.unwrap();
    ctx.save_changes().await.unwrap();

    let j1 = ctx.houses().get_by_code("J1").await.unwrap().unwrap();
    assert_eq!(j1.owner_name, "Rachid");
    assert!(ctx.houses().get_by_code("Z9").await.unwrap().is_none());

    let active = ctx.houses().get_active().await.unwrap();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].code, "J1");
}

#[tokio::test]
async fn payment_lookups_by_month_house_and_status() {
    let db = setup().await;
    let mut ctx = db.context();

    let a1 = ctx
        .houses()
        .create(House::new("A1", "Amina", 30_000))
        .await
        .unwrap();
    let a2 = ctx
        .houses()
        .create(House::new("A2", "Brahim", 30_000))
        .await
        .unwrap();

    let may = month("2024-05");
    let mut paid = Payment::unpaid(a2.id, may.clone(), 30_000);
    paid.mark_paid(chrono::Utc::now());

    ctx.payments()
        .create(Payment::unpaid(a1.id, may.clone(), 30_000))
        .await
        .unwrap();
    ctx.payments().create(paid).await.unwrap();
    ctx.payments()
        .create(Payment::unpaid(a1.id, month("2024-06"), 30_000))
        .await
        .unwrap();
    ctx.save_changes().await.unwrap();

    assert_eq!(ctx.payments().get_by_month(&may).await.unwrap().len(), 2);
    assert_eq!(ctx.payments().get_by_house(a1.id).await.unwrap().len(), 2);

    let unpaid = ctx
        .payments()
        .get_by_status(PaymentStatus::Unpaid)
        .await
        .unwrap();
    assert_eq!(unpaid.len(), 2);
    assert!(unpaid.iter().all(|p| p.house_id == a1.id));

    let a2_may = ctx
        .payments()
        .get_by_house_and_month(a2.id, &may)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(a2_may.status, PaymentStatus::Paid);
}

#[tokio::test]
async fn expense_lookups_by_date_range_and_month() {
    let db = setup().await;
    let mut ctx = db.context();

    let day = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap();
    ctx.expenses()
        .create(Expense::new("Cleaning", 5_000, "Cleaning", day(2024, 5, 31)))
        .await
        .unwrap();
    ctx.expenses()
        .create(Expense::new("Lift repair", 80_000, "Repairs", day(2024, 5, 2)))
        .await
        .unwrap();
    ctx.expenses()
        .create(Expense::new("Garden", 3_000, "Cleaning", day(2024, 6, 1)))
        .await
        .unwrap();
    ctx.save_changes().await.unwrap();

    let may = ctx.expenses().get_by_month(&month("2024-05")).await.unwrap();
    let descriptions: Vec<_> = may.iter().map(|e| e.description.as_str()).collect();
    assert_eq!(descriptions, vec!["Lift repair", "Cleaning"]);

    let range = ctx
        .expenses()
        .get_by_date_range(day(2024, 5, 31), day(2024, 6, 30))
        .await
        .unwrap();
    assert_eq!(range.len(), 2);

    let cleaning = ctx.expenses().get_by_category("Cleaning").await.unwrap();
    assert_eq!(cleaning.len(), 2);
}

#[tokio::test]
async fn maintenance_lookups_by_status_and_house() {
    let db = setup().await;
    let mut ctx = db.context();

    let house = ctx
        .houses()
        .create(House::new("K1", "Fatima", 30_000))
        .await
        .unwrap();
    let date = NaiveDate::from_ymd_opt(2024, 5, 10).unwrap();

    let mut done = Maintenance::scheduled("Roof", Some(house.id), date);
    done.status = MaintenanceStatus::Completed;
    ctx.maintenance().create(done).await.unwrap();
    ctx.maintenance()
        .create(Maintenance::scheduled("Entrance lights", None, date))
        .await
        .unwrap();
    ctx.save_changes().await.unwrap();

    let pending = ctx
        .maintenance()
        .get_by_status(MaintenanceStatus::Pending)
        .await
        .unwrap();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].title, "Entrance lights");

    let for_house = ctx.maintenance().get_by_house(house.id).await.unwrap();
    assert_eq!(for_house.len(), 1);
    assert_eq!(for_house[0].title, "Roof");
}

#[tokio::test]
async fn user_lookups_by_username_and_role() {
    let db = setup().await;
    let mut ctx = db.context();

    ctx.users()
        .create(User::new("admin", "hash", "Administrator", UserRole::Admin))
        .await
        .unwrap();
    ctx.users()
        .create(User::new("resident1", "hash", "Resident One", UserRole::Resident))
        .await
        .unwrap();
    ctx.save_changes().await.unwrap();

    let admin = ctx.users().get_by_username("admin").await.unwrap().unwrap();
    assert_eq!(admin.role, UserRole::Admin);
    assert_eq!(admin.password_hash, "hash");

    let residents = ctx.users().get_by_role(UserRole::Resident).await.unwrap();
    assert_eq!(residents.len(), 1);
}

#[tokio::test]
async fn unread_notifications_exclude_read_ones() {
    let db = setup().await;
    let mut ctx = db.context();

    let may = month("2024-05");
    let mut read = Notification::unpaid_house(Uuid::new_v4(), "A1", &may);
    read.mark_read();
    ctx.notifications().create(read).await.unwrap();
    ctx.notifications()
        .create(Notification::unpaid_house(Uuid::new_v4(), "A2", &may))
        .await
        .unwrap();
    ctx.save_changes().await.unwrap();

    let unread = ctx.notifications().get_unread().await.unwrap();
    assert_eq!(unread.len(), 1);
    assert_eq!(unread[0].message, "La maison A2 n'a pas encore payé pour 2024-05");

    let high = ctx
        .notifications()
        .get_by_priority(NotificationPriority::High)
        .await
        .unwrap();
    assert_eq!(high.len(), 2);
}

#[tokio::test]
async fn paid_payment_reads_back_unchanged() {
    let db = setup().await;
    let mut ctx = db.context();

    let house = ctx
        .houses()
        .create(House::new("L1", "Ilyas", 30_000))
        .await
        .unwrap();
    let mut payment = Payment::unpaid(house.id, month("2024-05"), 30_000);
    payment.mark_paid(chrono::Utc::now());
    payment.notes = Some("Paid in cash".to_string());

    let created = ctx.payments().create(payment).await.unwrap();
    ctx.save_changes().await.unwrap();

    let found = ctx.payments().get_by_id(created.id).await.unwrap();
    assert_eq!(found, Some(created));
}

#[tokio::test]
async fn receipt_lookups_by_number_and_payment() {
    let db = setup().await;
    let mut ctx = db.context();

    let house = ctx
        .houses()
        .create(House::new("M1", "Sanae", 30_000))
        .await
        .unwrap();
    let may = ctx
        .payments()
        .create(Payment::unpaid(house.id, month("2024-05"), 30_000))
        .await
        .unwrap();
    let june = ctx
        .payments()
        .create(Payment::unpaid(house.id, month("2024-06"), 30_000))
        .await
        .unwrap();
    ctx.receipts()
        .create(Receipt::issue(may.id, "R-001"))
        .await
        .unwrap();
    ctx.receipts()
        .create(Receipt::issue(may.id, "R-002"))
        .await
        .unwrap();
    let june_receipt = ctx
        .receipts()
        .create(Receipt::issue(june.id, "R-003"))
        .await
        .unwrap();
    ctx.save_changes().await.unwrap();

    let found = ctx.receipts().get_by_number("R-003").await.unwrap();
    assert_eq!(found, Some(june_receipt));
    assert!(ctx.receipts().get_by_number("R-999").await.unwrap().is_none());

    let for_may = ctx.receipts().get_by_payment(may.id).await.unwrap();
    assert_eq!(for_may.len(), 2);
    assert!(for_may.iter().all(|r| r.payment_id == may.id));
    assert_eq!(ctx.receipts().get_by_payment(june.id).await.unwrap().len(), 1);
}

#[tokio::test]
async fn document_lookup_by_category() {
    let db = setup().await;
    let mut ctx = db.context();

    ctx.documents()
        .create(Document::new("Budget 2024", "/docs/budget-2024.pdf", "Finance", None))
        .await
        .unwrap();
    ctx.documents()
        .create(Document::new("AGM minutes", "/docs/agm-2024.pdf", "Minutes", None))
        .await
        .unwrap();
    ctx.save_changes().await.unwrap();

    let finance = ctx.documents().get_by_category("Finance").await.unwrap();
    assert_eq!(finance.len(), 1);
    assert_eq!(finance[0].title, "Budget 2024");
    assert!(ctx.documents().get_by_category("Legal").await.unwrap().is_empty());
}

#[tokio::test]
async fn audit_log_lookups_by_time_user_and_entity() {
    let db = setup().await;
    let mut ctx = db.context();

    let (alice, bob) = (Uuid::new_v4(), Uuid::new_v4());
    let (house_id, payment_id) = (Uuid::new_v4(), Uuid::new_v4());

    let first = ctx
        .audit_logs()
        .create(AuditLog::record(Some(alice), "Update", "House", Some(house_id)))
        .await
        .unwrap();
    tokio::time::sleep(Duration::from_millis(5)).await;
    ctx.audit_logs()
        .create(AuditLog::record(Some(alice), "Create", "Payment", Some(payment_id)))
        .await
        .unwrap();
    tokio::time::sleep(Duration::from_millis(5)).await;
    let last = ctx
        .audit_logs()
        .create(AuditLog::record(Some(bob), "Update", "House", Some(house_id)))
        .await
        .unwrap();
    ctx.save_changes().await.unwrap();

    // Both bounds are inclusive
    let only_first = ctx
        .audit_logs()
        .get_by_date_range(first.created_at, first.created_at)
        .await
        .unwrap();
    assert_eq!(only_first, vec![first.clone()]);

    let all = ctx
        .audit_logs()
        .get_by_date_range(first.created_at, last.created_at)
        .await
        .unwrap();
    assert_eq!(all.len(), 3);
    assert_eq!(all[0].id, first.id);
    assert_eq!(all[2].id, last.id);

    let before = ctx
        .audit_logs()
        .get_by_date_range(
            first.created_at - chrono::Duration::hours(1),
            first.created_at - chrono::Duration::seconds(1),
        )
        .await
        .unwrap();
    assert!(before.is_empty());

    assert_eq!(ctx.audit_logs().get_by_user(alice).await.unwrap().len(), 2);
    assert!(ctx
        .audit_logs()
        .get_by_user(Uuid::new_v4())
        .await
        .unwrap()
        .is_empty());

    let house_history = ctx
        .audit_logs()
        .get_by_entity("House", house_id)
        .await
        .unwrap();
    assert_eq!(house_history.len(), 2);
    assert!(ctx
        .audit_logs()
        .get_by_entity("Payment", house_id)
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn latest_backup_is_the_most_recent() {
    let db = setup().await;
    let mut ctx = db.context();

    assert!(ctx.backups().get_latest().await.unwrap().is_none());

    ctx.backups()
        .create(Backup::completed("/backups/2024-05-01.bak", 4_096))
        .await
        .unwrap();
    tokio::time::sleep(Duration::from_millis(5)).await;
    let mut failed = Backup::completed("/backups/2024-05-02.bak", 0);
    failed.status = BackupStatus::Failed;
    let failed = ctx.backups().create(failed).await.unwrap();
    ctx.save_changes().await.unwrap();

    let latest = ctx.backups().get_latest().await.unwrap();
    assert_eq!(latest, Some(failed));
}

#[tokio::test]
async fn notification_lookups_by_user_and_priority() {
    let db = setup().await;
    let mut ctx = db.context();

    let resident = Uuid::new_v4();
    let may = month("2024-05");
    let mut addressed = Notification::unpaid_house(Uuid::new_v4(), "A1", &may);
    addressed.user_id = Some(resident);
    addressed.priority = NotificationPriority::Low;
    ctx.notifications().create(addressed).await.unwrap();
    ctx.notifications()
        .create(Notification::unpaid_house(Uuid::new_v4(), "A2", &may))
        .await
        .unwrap();
    ctx.save_changes().await.unwrap();

    let mine = ctx.notifications().get_by_user(resident).await.unwrap();
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0].message, "La maison A1 n'a pas encore payé pour 2024-05");
    assert!(ctx
        .notifications()
        .get_by_user(Uuid::new_v4())
        .await
        .unwrap()
        .is_empty());

    let low = ctx
        .notifications()
        .get_by_priority(NotificationPriority::Low)
        .await
        .unwrap();
    assert_eq!(low.len(), 1);
    assert_eq!(low[0].user_id, Some(resident));
    assert!(ctx
        .notifications()
        .get_by_priority(NotificationPriority::Medium)
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn migrations_are_reported_as_applied() {
    let db = setup().await;
    let status = db.migration_status().await.unwrap();
    assert_eq!(status.len(), 2);
    assert!(status.iter().all(|(_, applied)| *applied));
    db.ping().await.unwrap();
}

fn memory_store_config() -> StoreConfig {
    StoreConfig {
        database: DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
            min_connections: 1,
        },
        auto_migrate: false,
    }
}

#[tokio::test]
async fn migrate_up_uses_the_given_config() {
    let config = memory_store_config();

    let status = syndic_store::run_migrations(&config, MigrateAction::Up)
        .await
        .unwrap();

    assert!(!status.is_empty());
    assert!(status.iter().all(|(_, applied)| *applied));
}

#[tokio::test]
async fn ping_uses_the_given_config() {
    syndic_store::check_connection(&memory_store_config())
        .await
        .unwrap();
}
