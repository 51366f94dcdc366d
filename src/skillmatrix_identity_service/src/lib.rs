pub mod identity_service;
pub mod telemetry;

pub use identity_service::IdentityService;
