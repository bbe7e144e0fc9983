//! Concrete field groups.
//!
//! One submodule per group: its typed record, defaults, and loader.

pub mod host_settings;

pub use host_settings::HostSettingsFieldGroup;
