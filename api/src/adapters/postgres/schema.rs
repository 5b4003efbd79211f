//! Schema bootstrap
//!
//! Creates the tables (and their indexes) from the SeaORM entities when they
//! do not exist yet. Parents are created before `trips` so its foreign keys
//! resolve.

use sea_orm::{ConnectionTrait, DatabaseConnection, EntityTrait, Schema};

use crate::entity::{drivers, passengers, trips};
use crate::error::DomainError;

pub async fn create_schema(db: &DatabaseConnection) -> Result<(), DomainError> {
    create_table(db, passengers::Entity).await?;
    create_table(db, drivers::Entity).await?;
    create_table(db, trips::Entity).await?;
    tracing::info!("Schema ready");
    Ok(())
}

async fn create_table<E>(db: &DatabaseConnection, entity: E) -> Result<(), DomainError>
where
    E: EntityTrait + Copy,
{
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    let mut table = schema.create_table_from_entity(entity);
    table.if_not_exists();
    db.execute(backend.build(&table))
        .await
        .map_err(|e| DomainError::Database(e.to_string()))?;

    for mut index in schema.create_index_from_entity(entity) {
        index.if_not_exists();
        db.execute(backend.build(&index))
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;
    }
    Ok(())
}
