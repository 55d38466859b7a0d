//! Remote → configuration conversion, used only when reading.

use transcend_types::{ConfigValue, ValueSet};

/// A remote value that can be written back into configuration.
pub trait IntoConfigValue {
    fn into_config_value(self) -> ConfigValue;
}

impl IntoConfigValue for String {
    fn into_config_value(self) -> ConfigValue {
        ConfigValue::String(self)
    }
}

impl IntoConfigValue for &str {
    fn into_config_value(self) -> ConfigValue {
        ConfigValue::String(self.to_string())
    }
}

impl IntoConfigValue for bool {
    fn into_config_value(self) -> ConfigValue {
        ConfigValue::Bool(self)
    }
}

// Remote nulls read back as the empty string, matching what an unset
// optional field converts to on the way out.
impl IntoConfigValue for Option<String> {
    fn into_config_value(self) -> ConfigValue {
        ConfigValue::String(self.unwrap_or_default())
    }
}

impl IntoConfigValue for ValueSet {
    fn into_config_value(self) -> ConfigValue {
        ConfigValue::Block(self)
    }
}

impl<T: IntoConfigValue> IntoConfigValue for Vec<T> {
    fn into_config_value(self) -> ConfigValue {
        ConfigValue::List(self.into_iter().map(IntoConfigValue::into_config_value).collect())
    }
}

/// One synced field: where it goes and how to extract it from the entity.
pub struct FieldProjection<E> {
    pub field: &'static str,
    pub project: fn(&E) -> ConfigValue,
}

impl<E> FieldProjection<E> {
    pub const fn new(field: &'static str, project: fn(&E) -> ConfigValue) -> Self {
        Self { field, project }
    }
}

/// Builds the value set for the projected subset of an entity's fields.
///
/// Fields not named in `fields` are absent from the result, so merging it into
/// existing state leaves write-only fields alone.
pub fn from_remote<E>(entity: &E, fields: &[FieldProjection<E>]) -> ValueSet {
    fields
        .iter()
        .map(|p| (p.field.to_string(), (p.project)(entity)))
        .collect()
}
