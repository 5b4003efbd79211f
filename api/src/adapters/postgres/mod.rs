//! PostgreSQL adapters
//!
//! Implementations of repository traits using SeaORM and PostgreSQL.

pub mod driver_repo;
pub mod passenger_repo;
pub mod schema;
pub mod trip_repo;


pub use driver_repo::PostgresDriverRepository;
pub use passenger_repo::PostgresPassengerRepository;
pub use schema::create_schema;
pub use trip_repo::PostgresTripRepository;
