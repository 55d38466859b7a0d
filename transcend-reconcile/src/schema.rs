//! Remote schema types shared by several resource kinds.

use serde::{Deserialize, Serialize};
use transcend_convert::{ConvertResult, FromScalar, IntoConfigValue, ValueSetExt};
use transcend_types::{ConfigValue, ValueSet};

/// A privacy request action (`ACCESS`, `ERASURE`, ...), a GraphQL enum.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestAction(pub String);

impl RequestAction {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromScalar for RequestAction {
    const EXPECTED: &'static str = "request action";

    fn from_absent() -> Self {
        Self(String::new())
    }

    fn from_value(field: &str, value: &ConfigValue) -> ConvertResult<Self> {
        String::from_value(field, value).map(Self)
    }
}

impl IntoConfigValue for RequestAction {
    fn into_config_value(self) -> ConfigValue {
        ConfigValue::String(self.0)
    }
}

/// Rich-text field. Only the default message is managed here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalizedText {
    pub default_message: String,
}

/// Default message of an optional rich-text field, or `""`.
pub fn default_message(text: Option<&LocalizedText>) -> ConfigValue {
    ConfigValue::String(text.map(|t| t.default_message.clone()).unwrap_or_default())
}

/// Custom HTTP header attached to outgoing integration calls.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Header {
    pub name: String,
    pub value: String,
    #[serde(default)]
    pub is_secret: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderInput {
    pub name: String,
    pub value: String,
    pub is_secret: bool,
}

/// Element converter for `headers` blocks.
pub fn header_input(block: &ValueSet) -> ConvertResult<HeaderInput> {
    Ok(HeaderInput {
        name: block.scalar("name")?,
        value: block.scalar("value")?,
        is_secret: block.scalar("is_secret")?,
    })
}

/// Writes headers back in configuration shape.
pub fn headers_to_config(headers: &[Header]) -> ConfigValue {
    headers
        .iter()
        .map(|h| {
            ValueSet::new()
                .with("name", h.name.as_str())
                .with("value", h.value.as_str())
                .with("is_secret", h.is_secret)
        })
        .collect::<Vec<_>>()
        .into_config_value()
}

/// `{ name }` wrapper the API uses for identifier references.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NamedRef {
    pub name: String,
}
