//! PostgreSQL adapter for DriverRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};

use crate::domain::entities::{Driver, DriverFields, DriverId};
use crate::domain::ports::DriverRepository;
use crate::entity::drivers;
use crate::error::DomainError;

/// PostgreSQL implementation of DriverRepository
pub struct PostgresDriverRepository {
    db: DatabaseConnection,
}

impl PostgresDriverRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn find_model(&self, id: &DriverId) -> Result<Option<drivers::Model>, DomainError> {
        drivers::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))
    }
}

#[async_trait]
impl DriverRepository for PostgresDriverRepository {
    async fn find_by_id(&self, id: &DriverId) -> Result<Option<Driver>, DomainError> {
        Ok(self.find_model(id).await?.map(|m| m.into()))
    }

    async fn all(&self) -> Result<Vec<Driver>, DomainError> {
        let results = drivers::Entity::find()
            .order_by_asc(drivers::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn count(&self) -> Result<u64, DomainError> {
        drivers::Entity::find()
            .count(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))
    }

    async fn find_first_available(&self) -> Result<Option<Driver>, DomainError> {
        let result = drivers::Entity::find()
            .filter(drivers::Column::Available.eq(true))
            .order_by_asc(drivers::Column::Id)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn create(&self, fields: &DriverFields) -> Result<Driver, DomainError> {
        let now = Utc::now().fixed_offset();

        let model = drivers::ActiveModel {
            name: Set(fields.name.clone()),
            vin: Set(fields.vin.clone()),
            available: Set(fields.available),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.into())
    }

    async fn update(
        &self,
        id: &DriverId,
        fields: &DriverFields,
    ) -> Result<Option<Driver>, DomainError> {
        let Some(existing) = self.find_model(id).await? else {
            return Ok(None);
        };

        let mut model: drivers::ActiveModel = existing.into();
        model.name = Set(fields.name.clone());
        model.vin = Set(fields.vin.clone());
        model.available = Set(fields.available);
        model.updated_at = Set(Utc::now().fixed_offset());

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(Some(result.into()))
    }

    async fn set_available(
        &self,
        id: &DriverId,
        available: bool,
    ) -> Result<Option<Driver>, DomainError> {
        let Some(existing) = self.find_model(id).await? else {
            return Ok(None);
        };

        let mut model: drivers::ActiveModel = existing.into();
        model.available = Set(available);
        model.updated_at = Set(Utc::now().fixed_offset());

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(Some(result.into()))
    }

    async fn delete(&self, id: &DriverId) -> Result<bool, DomainError> {
        let result = drivers::Entity::delete_by_id(id.0)
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.rows_affected > 0)
    }
}

/// Convert SeaORM model to domain entity
impl From<drivers::Model> for Driver {
    fn from(model: drivers::Model) -> Self {
        Driver {
            id: DriverId(model.id),
            name: model.name,
            vin: model.vin,
            available: model.available,
        }
    }
}
