// src/lib.rs

//! Forfeiture notices engine library

pub mod error;
pub mod models;
pub mod pipeline;
pub mod services;
pub mod store;
