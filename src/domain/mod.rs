pub mod brand;
pub mod contrast;
pub mod error;
pub mod models;
