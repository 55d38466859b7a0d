//! Configuration → remote conversion.

use transcend_types::{ConfigValue, ValueSet};

use crate::error::{ConvertError, ConvertResult};

/// A remote scalar that can be built from a configuration value.
///
/// `from_absent` is the typed empty value used when the field is not set.
pub trait FromScalar: Sized {
    /// Label used in mismatch errors.
    const EXPECTED: &'static str;

    fn from_absent() -> Self;

    fn from_value(field: &str, value: &ConfigValue) -> ConvertResult<Self>;
}

impl FromScalar for String {
    const EXPECTED: &'static str = "string";

    fn from_absent() -> Self {
        String::new()
    }

    fn from_value(field: &str, value: &ConfigValue) -> ConvertResult<Self> {
        value
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| ConvertError::mismatch(field, Self::EXPECTED, value.type_name()))
    }
}

impl FromScalar for bool {
    const EXPECTED: &'static str = "bool";

    fn from_absent() -> Self {
        false
    }

    fn from_value(field: &str, value: &ConfigValue) -> ConvertResult<Self> {
        value
            .as_bool()
            .ok_or_else(|| ConvertError::mismatch(field, Self::EXPECTED, value.type_name()))
    }
}

// Optional scalars keep "unset" distinct from the empty value.
impl<T: FromScalar> FromScalar for Option<T> {
    const EXPECTED: &'static str = T::EXPECTED;

    fn from_absent() -> Self {
        None
    }

    fn from_value(field: &str, value: &ConfigValue) -> ConvertResult<Self> {
        T::from_value(field, value).map(Some)
    }
}

/// Converts a single scalar. Absent → the typed empty value.
pub fn to_scalar<T: FromScalar>(field: &str, raw: Option<&ConfigValue>) -> ConvertResult<T> {
    match raw {
        None => Ok(T::from_absent()),
        Some(value) => T::from_value(field, value),
    }
}

/// Converts a list of scalars element-wise. Absent → empty list, never null.
pub fn to_scalar_list<T: FromScalar>(
    field: &str,
    raw: Option<&ConfigValue>,
) -> ConvertResult<Vec<T>> {
    let Some(value) = raw else {
        return Ok(Vec::new());
    };
    let items = value
        .as_list()
        .ok_or_else(|| ConvertError::mismatch(field, "list", value.type_name()))?;
    items.iter().map(|item| T::from_value(field, item)).collect()
}

/// Converts a list of nested blocks with a resource-specific element
/// converter. Absent → empty list.
pub fn to_nested_list<T, F>(
    field: &str,
    raw: Option<&ConfigValue>,
    element: F,
) -> ConvertResult<Vec<T>>
where
    F: Fn(&ValueSet) -> ConvertResult<T>,
{
    let Some(value) = raw else {
        return Ok(Vec::new());
    };
    let items = value
        .as_list()
        .ok_or_else(|| ConvertError::mismatch(field, "list", value.type_name()))?;
    items
        .iter()
        .map(|item| {
            let block = item
                .as_block()
                .ok_or_else(|| ConvertError::mismatch(field, "block", item.type_name()))?;
            element(block)
        })
        .collect()
}

/// Field-name lookups over a [`ValueSet`].
pub trait ValueSetExt {
    fn scalar<T: FromScalar>(&self, field: &str) -> ConvertResult<T>;

    fn scalar_list<T: FromScalar>(&self, field: &str) -> ConvertResult<Vec<T>>;

    fn nested_list<T, F>(&self, field: &str, element: F) -> ConvertResult<Vec<T>>
    where
        F: Fn(&ValueSet) -> ConvertResult<T>;
}

impl ValueSetExt for ValueSet {
    fn scalar<T: FromScalar>(&self, field: &str) -> ConvertResult<T> {
        to_scalar(field, self.get(field))
    }

    fn scalar_list<T: FromScalar>(&self, field: &str) -> ConvertResult<Vec<T>> {
        to_scalar_list(field, self.get(field))
    }

    fn nested_list<T, F>(&self, field: &str, element: F) -> ConvertResult<Vec<T>>
    where
        F: Fn(&ValueSet) -> ConvertResult<T>,
    {
        to_nested_list(field, self.get(field), element)
    }
}
