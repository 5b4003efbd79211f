//! PostgreSQL adapter for TripRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};

use crate::domain::entities::{DriverId, PassengerId, Trip, TripFields, TripId};
use crate::domain::ports::TripRepository;
use crate::entity::trips;
use crate::error::DomainError;

/// PostgreSQL implementation of TripRepository
pub struct PostgresTripRepository {
    db: DatabaseConnection,
}

impl PostgresTripRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TripRepository for PostgresTripRepository {
    async fn find_by_id(&self, id: &TripId) -> Result<Option<Trip>, DomainError> {
        let result = trips::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn all(&self) -> Result<Vec<Trip>, DomainError> {
        let results = trips::Entity::find()
            .order_by_asc(trips::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn count(&self) -> Result<u64, DomainError> {
        trips::Entity::find()
            .count(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))
    }

    async fn find_by_driver(&self, driver_id: &DriverId) -> Result<Vec<Trip>, DomainError> {
        let results = trips::Entity::find()
            .filter(trips::Column::DriverId.eq(driver_id.0))
            .order_by_asc(trips::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn find_by_passenger(
        &self,
        passenger_id: &PassengerId,
    ) -> Result<Vec<Trip>, DomainError> {
        let results = trips::Entity::find()
            .filter(trips::Column::PassengerId.eq(passenger_id.0))
            .order_by_asc(trips::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn create(&self, fields: &TripFields) -> Result<Trip, DomainError> {
        let now = Utc::now().fixed_offset();

        let model = trips::ActiveModel {
            driver_id: Set(fields.driver_id.0),
            passenger_id: Set(fields.passenger_id.0),
            date: Set(fields.date),
            rating: Set(fields.rating),
            cost: Set(fields.cost),
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

    async fn update(&self, id: &TripId, fields: &TripFields) -> Result<Option<Trip>, DomainError> {
        let Some(existing) = trips::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?
        else {
            return Ok(None);
        };

        let mut model: trips::ActiveModel = existing.into();
        model.driver_id = Set(fields.driver_id.0);
        model.passenger_id = Set(fields.passenger_id.0);
        model.date = Set(fields.date);
        model.rating = Set(fields.rating);
        model.cost = Set(fields.cost);
        model.updated_at = Set(Utc::now().fixed_offset());

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(Some(result.into()))
    }

    async fn delete(&self, id: &TripId) -> Result<bool, DomainError> {
        let result = trips::Entity::delete_by_id(id.0)
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.rows_affected > 0)
    }
}

/// Convert SeaORM model to domain entity
impl From<trips::Model> for Trip {
    fn from(model: trips::Model) -> Self {
        Trip {
            id: TripId(model.id),
            driver_id: DriverId(model.driver_id),
            passenger_id: PassengerId(model.passenger_id),
            date: model.date,
            rating: model.rating,
            cost: model.cost,
        }
    }
}
