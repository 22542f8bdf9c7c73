pub mod config;
pub mod inbound;
pub mod vortex;

// Re-export commonly used types
pub use config::Config;
pub use inbound::http::router::create_router;
pub use vortex::DemoVortexHooks;
pub use vortex::VortexHooks;
pub use vortex::VortexUser;
