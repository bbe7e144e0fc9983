//! Generic default-then-overlay-then-validate machinery.
//!
//! Every field group follows the same shape: start from static defaults,
//! then for each recognized key present in the raw map, replace the default
//! with the supplied value if it has the declared type. [`overlay`] expresses
//! that shape once; the per-group loaders just name their keys and slots.

use serde_yaml::Value;

use crate::error::{ConfigError, FieldKind};
use crate::source::RawConfig;

mod sealed {
    pub trait Sealed {}
    impl Sealed for bool {}
    impl Sealed for String {}
}

/// A value type a configuration field can be declared with.
///
/// Interpretation is strict: a raw value only matches the declared kind by
/// its tag, never by coercion. YAML `1` is not `true`, and `"yes"` is not a
/// bool.
pub trait FieldValue: sealed::Sealed + Sized {
    /// The declared kind, named in type-mismatch error messages.
    const KIND: FieldKind;

    /// Interpret a raw value as this type, or `None` on mismatch.
    fn from_value(value: &Value) -> Option<Self>;
}

impl FieldValue for bool {
    const KIND: FieldKind = FieldKind::Bool;

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl FieldValue for String {
    const KIND: FieldKind = FieldKind::String;

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(s.clone()),
            _ => None,
        }
    }
}

/// Overlay a single field from the raw map onto its default.
///
/// Leaves `slot` untouched when `key` is absent from `raw`. Returns
/// [`ConfigError::TypeMismatch`] when the key is present with a value of the
/// wrong type; the slot is not modified in that case.
pub fn overlay<T: FieldValue>(
    raw: &RawConfig,
    key: &'static str,
    slot: &mut T,
) -> Result<(), ConfigError> {
    let Some(value) = raw.get(key) else {
        return Ok(());
    };

    match T::from_value(value) {
        Some(parsed) => {
            *slot = parsed;
            Ok(())
        }
        None => Err(ConfigError::TypeMismatch {
            key,
            expected: T::KIND,
        }),
    }
}
