pub mod api;
pub mod config;
pub mod error;
pub mod handler;
pub mod json;
pub mod lambda;
pub mod models;
pub mod ocr;
