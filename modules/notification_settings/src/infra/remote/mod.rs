//! Remote transport implementations

pub mod rest;

pub use rest::RestNotificationsRemote;
