//! Injection configs: the tables a [`RegistryBuilder`](crate::registry::RegistryBuilder) turns into descriptors.
//!
//! Everything except mutation methods can be loaded from JSON:
//!
//! ```json
//! {
//!   "properties": { "fooBar": ["MUST_USE_ATTRIBUTE", "HAS_BOOLEAN_VALUE"] },
//!   "attribute_names": { "fooBar": "foo-bar" },
//!   "custom_attribute_patterns": ["^x-[a-z]+$"],
//!   "default_values": [{ "tag": "input", "property": "value", "value": "" }]
//! }
//! ```

use std::collections::BTreeMap;

use anyhow::{Context as _, Result};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::Value as JsonValue;

use crate::descriptor::MutationMethod;
use crate::value::PropValue;

/// Per-property flags as spelled in injection configs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PropertyFlag {
    MustUseAttribute,
    MustUseProperty,
    HasSideEffects,
    HasBooleanValue,
    HasNumericValue,
    HasPositiveNumericValue,
    HasOverloadedBooleanValue,
}

/// A default property value, optionally scoped to one tag.
#[derive(Clone, Debug, Deserialize)]
pub struct DefaultValue {
    #[serde(default)]
    pub tag: Option<String>,
    pub property: String,
    #[serde(deserialize_with = "deserialize_prop_value")]
    pub value: PropValue,
}

/// One injectable set of property metadata.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct DomPropertyConfig {
    /// Property key to flags.
    pub properties: BTreeMap<String, Vec<PropertyFlag>>,
    /// Property key to attribute name, when it is not the lowercased key.
    pub attribute_names: BTreeMap<String, String>,
    /// Property key to attribute namespace URI.
    pub attribute_namespaces: BTreeMap<String, String>,
    /// Property key to node property name, when it is not the key itself.
    pub property_names: BTreeMap<String, String>,
    /// Regexes recognizing custom attribute names.
    pub custom_attribute_patterns: Vec<String>,
    pub default_values: Vec<DefaultValue>,
    #[serde(skip)]
    pub mutation_methods: BTreeMap<String, MutationMethod>,
}

impl DomPropertyConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from JSON.
    ///
    /// # Errors
    /// Returns an error if the JSON is malformed or names an unknown flag.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("failed to parse DOM property config")
    }

    #[must_use]
    pub fn with_property(mut self, name: &str, flags: &[PropertyFlag]) -> Self {
        self.properties.insert(name.to_owned(), flags.to_vec());
        self
    }

    #[must_use]
    pub fn with_attribute_name(mut self, name: &str, attribute_name: &str) -> Self {
        self.attribute_names.insert(name.to_owned(), attribute_name.to_owned());
        self
    }

    #[must_use]
    pub fn with_attribute_namespace(mut self, name: &str, namespace: &str) -> Self {
        self.attribute_namespaces.insert(name.to_owned(), namespace.to_owned());
        self
    }

    #[must_use]
    pub fn with_property_name(mut self, name: &str, property_name: &str) -> Self {
        self.property_names.insert(name.to_owned(), property_name.to_owned());
        self
    }

    #[must_use]
    pub fn with_custom_attribute_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.custom_attribute_patterns.push(pattern.into());
        self
    }

    /// Default for `property` on every tag (`tag == None`) or on one tag.
    #[must_use]
    pub fn with_default_value(mut self, tag: Option<&str>, property: &str, value: impl Into<PropValue>) -> Self {
        self.default_values.push(DefaultValue {
            tag: tag.map(str::to_owned),
            property: property.to_owned(),
            value: value.into(),
        });
        self
    }

    #[must_use]
    pub fn with_mutation_method(mut self, name: &str, method: MutationMethod) -> Self {
        self.mutation_methods.insert(name.to_owned(), method);
        self
    }
}

fn deserialize_prop_value<'de, D: Deserializer<'de>>(deserializer: D) -> Result<PropValue, D::Error> {
    let raw = JsonValue::deserialize(deserializer)?;
    PropValue::from_json(&raw)
        .ok_or_else(|| D::Error::custom(format!("default value must be a primitive, got {raw}")))
}
