//! Data models for parse payloads, entity records and configuration.

pub mod config;
pub mod entity;
pub mod payload;
pub mod summary;
