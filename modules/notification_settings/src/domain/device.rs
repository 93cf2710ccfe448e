//! Push device registration lookup

/// Source of the push-notification device identifier for this installation
pub trait DeviceRegistry: Send + Sync {
    /// Registered device id, or `None` when push is not registered
    fn registered_device_id(&self) -> Option<String>;

    /// Device id to send with requests; empty when unregistered
    fn current_device_id(&self) -> String {
        self.registered_device_id().unwrap_or_default()
    }
}
