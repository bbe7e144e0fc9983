//! Fieldgroups - Typed configuration field groups
//!
//! A field group is a named, typed subset of a larger application
//! configuration. Each group is built from an untyped key → value map
//! (parsed from a YAML document upstream) by applying static defaults,
//! overlaying any recognized keys present in the map, and rejecting the
//! whole group on the first type mismatch.
//!
//! # Architecture
//!
//! - **Source boundary** (`source`): the raw, dynamically-typed map and the
//!   YAML readers that produce it
//! - **Overlay machinery** (`field`): the default-then-overlay-then-validate
//!   shape, expressed once and shared by every group
//! - **Group contract** (`group`): the [`FieldGroup`] trait each typed
//!   subset implements
//! - **Concrete groups** (`groups`): one module per field group
//!
//! # Example
//!
//! ```
//! use fieldgroups::{FieldGroup, HostSettingsFieldGroup, parse_raw_config};
//!
//! # fn main() -> anyhow::Result<()> {
//! let raw = parse_raw_config("SERVER_HOSTNAME: registry.example.com")?;
//! let host = HostSettingsFieldGroup::load(&raw)?;
//! assert_eq!(host.server_hostname, "registry.example.com");
//! assert_eq!(host.preferred_url_scheme, "http");
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod field;
pub mod group;
pub mod groups;
pub mod source;

// Re-export commonly used types for convenience
pub use error::{ConfigError, FieldKind};
pub use field::FieldValue;
pub use group::FieldGroup;
pub use groups::HostSettingsFieldGroup;
pub use source::{parse_raw_config, read_raw_config, RawConfig};
