//! Question records: data model, storage slot and CRUD repository

mod models;
mod repository;
mod store;

pub use models::*;
pub use repository::*;
pub use store::*;
