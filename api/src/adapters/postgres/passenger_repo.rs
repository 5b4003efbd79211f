//! PostgreSQL adapter for PassengerRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryOrder, Set,
};

use crate::domain::entities::{Passenger, PassengerFields, PassengerId};
use crate::domain::ports::PassengerRepository;
use crate::entity::passengers;
use crate::error::DomainError;

/// PostgreSQL implementation of PassengerRepository
pub struct PostgresPassengerRepository {
    db: DatabaseConnection,
}

impl PostgresPassengerRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PassengerRepository for PostgresPassengerRepository {
    async fn find_by_id(&self, id: &PassengerId) -> Result<Option<Passenger>, DomainError> {
        let result = passengers::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn all(&self) -> Result<Vec<Passenger>, DomainError> {
        let results = passengers::Entity::find()
            .order_by_asc(passengers::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn count(&self) -> Result<u64, DomainError> {
        passengers::Entity::find()
            .count(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))
    }

    async fn create(&self, fields: &PassengerFields) -> Result<Passenger, DomainError> {
        let now = Utc::now().fixed_offset();

        let model = passengers::ActiveModel {
            name: Set(fields.name.clone()),
            phone_num: Set(fields.phone_num.clone()),
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
        id: &PassengerId,
        fields: &PassengerFields,
    ) -> Result<Option<Passenger>, DomainError> {
        let Some(existing) = passengers::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?
        else {
            return Ok(None);
        };

        let mut model: passengers::ActiveModel = existing.into();
        model.name = Set(fields.name.clone());
        model.phone_num = Set(fields.phone_num.clone());
        model.updated_at = Set(Utc::now().fixed_offset());

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(Some(result.into()))
    }

    async fn delete(&self, id: &PassengerId) -> Result<bool, DomainError> {
        let result = passengers::Entity::delete_by_id(id.0)
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.rows_affected > 0)
    }
}

/// Convert SeaORM model to domain entity
impl From<passengers::Model> for Passenger {
    fn from(model: passengers::Model) -> Self {
        Passenger {
            id: PassengerId(model.id),
            name: model.name,
            phone_num: model.phone_num,
        }
    }
}
