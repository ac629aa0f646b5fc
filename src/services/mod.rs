//! Service layer around the notices engine.
//!
//! This module contains the supporting logic for:
//! - Mock notice generation (`generate_records`, `generate_store`)
//! - Claim deadline badges (`DeadlineUrgency`)
//! - The legal assistant chat proxy (`ChatSession`, `ProxyChatClient`)

pub mod chat;
mod deadline;
mod generator;

pub use chat::{ChatBackend, ChatMessage, ChatOutcome, ChatSession, ProxyChatClient, Role};
pub use deadline::{DeadlineUrgency, SOON_DAYS, URGENT_DAYS};
pub use generator::{MAX_GENERATED_RECORDS, generate_records, generate_store};
