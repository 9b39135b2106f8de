//! Schema setup
//!
//! Tables are derived from the SeaORM entity definitions and created on
//! startup when missing.

use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, Schema};

use crate::entity::rates;

/// Create the `rates` table if it does not exist yet
pub async fn create_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    let mut table = schema.create_table_from_entity(rates::Entity);
    table.if_not_exists();
    db.execute(backend.build(&table)).await?;

    tracing::debug!("Schema ready");
    Ok(())
}
