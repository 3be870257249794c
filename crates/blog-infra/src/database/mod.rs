//! Post storage: SeaORM-backed repositories and an in-memory fallback.

mod connections;
mod memory;

#[cfg(feature = "database")]
mod sea_orm_base;
#[cfg(feature = "database")]
pub mod sea_orm_repo;

#[cfg(feature = "database")]
pub mod entity;

pub use connections::DatabaseConfig;
pub use memory::InMemoryPostRepository;

#[cfg(feature = "database")]
pub use connections::DatabaseConnections;
#[cfg(feature = "database")]
pub use sea_orm_base::SeaOrmBaseRepository;
#[cfg(feature = "database")]
pub use sea_orm_repo::SeaOrmPostRepository;
