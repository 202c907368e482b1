//! Application-wide constants

pub const TOKEN_TYPE_ACCESS: &str = "access";
pub const TOKEN_TYPE_REFRESH: &str = "refresh";

pub const DEFAULT_ACCESS_TOKEN_EXPIRY: i64 = 900;
pub const DEFAULT_REFRESH_TOKEN_EXPIRY: i64 = 604800;

/// Default lifetime of a resolved-menu cache entry, in seconds.
pub const DEFAULT_MENU_CACHE_TTL: u64 = 300;

pub const DEFAULT_PAGE_SIZE: u32 = 25;
