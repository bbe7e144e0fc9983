//! The field-group contract shared by all typed configuration subsets.

use crate::error::ConfigError;
use crate::source::RawConfig;

/// A named, typed subset of the application configuration.
///
/// Implementations start from their static defaults, overlay any recognized
/// keys present in the raw map, and reject the whole group on the first type
/// mismatch. Keys outside [`fields`](Self::fields) are ignored.
pub trait FieldGroup: Sized {
    /// Group name as it appears in configuration tooling.
    fn name() -> &'static str;

    /// The recognized source keys, the group's stable external contract.
    fn fields() -> &'static [&'static str];

    /// Build the group from a raw configuration map.
    ///
    /// Absent keys fall back to their defaults. A present key with a value
    /// of the wrong type fails the whole load; an error means the
    /// configuration is invalid and no record is produced. Fields are
    /// independent, so overlay order never affects the result.
    fn load(raw: &RawConfig) -> Result<Self, ConfigError>;
}
