pub use sea_orm_migration::prelude::*;

mod m20250710_000001_create_users_table;
mod m20250710_000002_create_group_uploaded_table;
mod m20250711_000001_create_user_deposit_table;
mod m20250711_000002_create_earnings_table;
mod m20250711_000003_create_notifications_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250710_000001_create_users_table::Migration),
            Box::new(m20250710_000002_create_group_uploaded_table::Migration),
            Box::new(m20250711_000001_create_user_deposit_table::Migration),
            Box::new(m20250711_000002_create_earnings_table::Migration),
            Box::new(m20250711_000003_create_notifications_table::Migration)
        ]
    }
}
