//! Configuration and the plain data passed between pipeline stages

pub mod config;
pub mod models;
