//! # Roster Service
//!
//! Business logic service layer for Roster.
//! Validates incoming user fields and maps missing records to `NotFound`.

pub mod dto;
pub mod r#impl;
pub mod user_service;

pub use dto::*;
pub use r#impl::UserServiceImpl;
pub use user_service::*;
