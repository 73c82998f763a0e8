pub mod analysis;
pub mod dataset;
pub mod error;
pub mod health;
pub mod openapi;
