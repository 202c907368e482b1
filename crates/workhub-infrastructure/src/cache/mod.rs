//! Cache module (in-process adapters)

pub mod menu_cache;

pub use menu_cache::InMemoryMenuCache;
