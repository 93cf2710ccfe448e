//! Domain layer - transport resolution, gateway service and translation

pub mod account;
pub mod device;
pub mod remote;
pub mod service;
pub mod translate;

pub use account::{Account, AccountStore, Transport, TransportResolver};
pub use device::DeviceRegistry;
pub use remote::NotificationsRemote;
pub use service::Service;
