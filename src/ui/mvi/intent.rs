/// Marker trait for user actions and system events fed to a reducer.
pub trait Intent: Send + 'static {}
