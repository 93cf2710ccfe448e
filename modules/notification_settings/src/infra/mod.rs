//! Infrastructure layer - REST transport and in-memory session adapters

pub mod remote;
pub mod session;

pub use remote::RestNotificationsRemote;
pub use session::{StaticAccountStore, StaticDeviceRegistry};
