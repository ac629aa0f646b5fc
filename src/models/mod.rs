// src/models/mod.rs

//! Domain models for the notices engine.
//!
//! This module contains the data structures shared by the store, the query
//! pipeline and the CLI, organized by their primary purpose.

mod config;
mod filter;
mod notice;
mod sort;

// Re-export all public types
pub use config::{ChatConfig, Config, DatasetConfig, EngineConfig, ExpiryPolicy, LoggingConfig};
pub use filter::{FilterCategory, FilterOption, FilterSelection};
pub use notice::{NoticeRecord, NoticeStatus, NoticeType};
pub use sort::{SortColumn, SortDirection, SortSpec};
