pub mod app_config;
pub mod cache;
pub mod session;

pub use cache::ResultCache;
pub use session::SessionStore;
