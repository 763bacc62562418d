//! Dependency injection module using Shaku.

use roster_core::module;
use roster_repository::InMemoryUserRepository;
use roster_service::UserServiceImpl;
use std::sync::Arc;

// Single-process module: the in-memory store and the user service on top
// of it. Both components are singletons for the lifetime of the module.
module! {
    pub RosterModule {
        components = [
            InMemoryUserRepository,
            UserServiceImpl,
        ],
        providers = [],
    }
}

/// Builds the application module with an empty user store.
pub fn build_module() -> Arc<RosterModule> {
    Arc::new(RosterModule::builder().build())
}
