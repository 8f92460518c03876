//! retiolib — разбор запросов и агрегация розничных продаж (CSV-датасет Online Retail)

pub mod error;
pub mod model;
pub mod traits;
pub mod month;
pub mod keyword;
pub mod nlq;
pub mod filter;
pub mod aggregate;

pub mod formats {
    pub mod csv;
}
