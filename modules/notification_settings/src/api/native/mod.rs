//! In-process client surfaces

pub mod client;
pub mod dispatch;

pub use client::NativeClient;
pub use dispatch::{CallbackClient, OnFailure, OnSuccess};
