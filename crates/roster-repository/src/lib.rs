//! # Roster Repository
//!
//! Data access layer:
//!
//! ```text
//! Service
//!   ↓  Arc<dyn UserRepository>  (domain interface)
//! InMemoryUserRepository        (process-local store)
//! ```
//!
//! ## Structure
//!
//! ```text
//! src/
//!   traits.rs                          ← UserRepository trait
//!   impl/
//!     mod.rs
//!     in_memory_user_repository.rs     ← InMemoryUserRepository
//! ```

pub mod traits;
pub mod r#impl;

pub use traits::*;
pub use r#impl::{InMemoryUserRepository, UserTable};
