//! Property-metadata lookup: the [`PropertyRegistry`] seam and the config-driven
//! [`DomPropertyRegistry`].

use std::collections::{HashMap, HashSet};

use anyhow::{Context as _, Result, bail};
use log::debug;
use regex::Regex;

use crate::config::{DomPropertyConfig, PropertyFlag};
use crate::descriptor::{PropertyDescriptor, ValueKind, WriteStrategy};
use crate::html::html_config;
use crate::svg::svg_config;
use crate::value::PropValue;

/// Characters allowed first in an attribute name, as a regex class fragment.
pub const ATTRIBUTE_NAME_START_CHAR: &str = concat!(
    r":A-Z_a-z\x{C0}-\x{D6}\x{D8}-\x{F6}\x{F8}-\x{2FF}\x{370}-\x{37D}\x{37F}-\x{1FFF}",
    r"\x{200C}-\x{200D}\x{2070}-\x{218F}\x{2C00}-\x{2FEF}\x{3001}-\x{D7FF}\x{F900}-\x{FDCF}\x{FDF0}-\x{FFFD}",
);

/// Characters allowed after the first one, as a regex class fragment.
pub const ATTRIBUTE_NAME_CHAR: &str = concat!(
    r":A-Z_a-z\x{C0}-\x{D6}\x{D8}-\x{F6}\x{F8}-\x{2FF}\x{370}-\x{37D}\x{37F}-\x{1FFF}",
    r"\x{200C}-\x{200D}\x{2070}-\x{218F}\x{2C00}-\x{2FEF}\x{3001}-\x{D7FF}\x{F900}-\x{FDCF}\x{FDF0}-\x{FFFD}",
    r"\-.0-9\x{B7}\x{300}-\x{36F}\x{203F}-\x{2040}",
);

/// Attribute carrying a node's identity in server-rendered markup.
pub const ID_ATTRIBUTE_NAME: &str = "data-node-id";
/// Presence-only attribute marking the root of server-rendered markup.
pub const ROOT_ATTRIBUTE_NAME: &str = "data-node-root";

/// Lookup service consulted by every property operation.
pub trait PropertyRegistry {
    /// Exact, case-sensitive lookup by property key.
    fn lookup(&self, name: &str) -> Option<&PropertyDescriptor>;

    /// Whether an unknown name may still be written as a raw attribute.
    fn is_custom_attribute(&self, name: &str) -> bool;

    /// Value a node property holds on a fresh node of `tag_name`.
    fn default_value_for_property(&self, tag_name: &str, property_name: &str) -> PropValue;

    fn attribute_name_start_char(&self) -> &str {
        ATTRIBUTE_NAME_START_CHAR
    }

    fn attribute_name_char(&self) -> &str {
        ATTRIBUTE_NAME_CHAR
    }

    fn id_attribute_name(&self) -> &str {
        ID_ATTRIBUTE_NAME
    }

    fn root_attribute_name(&self) -> &str {
        ROOT_ATTRIBUTE_NAME
    }

    /// Canonical property key for a lowercased spelling, e.g. `class` -> `className`.
    fn possible_standard_name(&self, _lowercased: &str) -> Option<&str> {
        None
    }
}

/// Registry built from injected [`DomPropertyConfig`]s.
#[derive(Debug)]
pub struct DomPropertyRegistry {
    properties: HashMap<String, PropertyDescriptor>,
    possible_standard_names: HashMap<String, String>,
    custom_attribute_patterns: Vec<Regex>,
    kind_by_property_name: HashMap<String, ValueKind>,
    tag_defaults: HashMap<String, HashMap<String, PropValue>>,
    property_defaults: HashMap<String, PropValue>,
    start_char: String,
    name_char: String,
    id_attribute_name: String,
    root_attribute_name: String,
}

impl DomPropertyRegistry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Registry with the standard HTML and SVG properties.
    ///
    /// # Errors
    /// Returns an error if the bundled configs conflict.
    pub fn standard() -> Result<Self> {
        Ok(Self::builder().inject(html_config())?.inject(svg_config())?.build())
    }

    /// Registry from a single JSON config.
    ///
    /// # Errors
    /// Returns an error if the JSON is malformed or violates a property invariant.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(Self::builder().inject(DomPropertyConfig::from_json_str(json)?)?.build())
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

impl PropertyRegistry for DomPropertyRegistry {
    fn lookup(&self, name: &str) -> Option<&PropertyDescriptor> {
        self.properties.get(name)
    }

    fn is_custom_attribute(&self, name: &str) -> bool {
        self.custom_attribute_patterns
            .iter()
            .any(|pattern| pattern.is_match(name))
    }

    fn default_value_for_property(&self, tag_name: &str, property_name: &str) -> PropValue {
        let tag = tag_name.to_ascii_lowercase();
        if let Some(value) = self
            .tag_defaults
            .get(&tag)
            .and_then(|defaults| defaults.get(property_name))
        {
            return value.clone();
        }
        if let Some(value) = self.property_defaults.get(property_name) {
            return value.clone();
        }
        match self.kind_by_property_name.get(property_name) {
            Some(ValueKind::Boolean) => PropValue::Boolean(false),
            _ => PropValue::String(String::new()),
        }
    }

    fn attribute_name_start_char(&self) -> &str {
        &self.start_char
    }

    fn attribute_name_char(&self) -> &str {
        &self.name_char
    }

    fn id_attribute_name(&self) -> &str {
        &self.id_attribute_name
    }

    fn root_attribute_name(&self) -> &str {
        &self.root_attribute_name
    }

    fn possible_standard_name(&self, lowercased: &str) -> Option<&str> {
        self.possible_standard_names.get(lowercased).map(String::as_str)
    }
}

/// Accumulates injected configs, validating each property once.
#[derive(Debug)]
pub struct RegistryBuilder {
    properties: HashMap<String, PropertyDescriptor>,
    possible_standard_names: HashMap<String, String>,
    custom_attribute_patterns: Vec<Regex>,
    kind_by_property_name: HashMap<String, ValueKind>,
    tag_defaults: HashMap<String, HashMap<String, PropValue>>,
    property_defaults: HashMap<String, PropValue>,
    start_char: String,
    name_char: String,
    id_attribute_name: String,
    root_attribute_name: String,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self {
            properties: HashMap::new(),
            possible_standard_names: HashMap::new(),
            custom_attribute_patterns: Vec::new(),
            kind_by_property_name: HashMap::new(),
            tag_defaults: HashMap::new(),
            property_defaults: HashMap::new(),
            start_char: ATTRIBUTE_NAME_START_CHAR.to_owned(),
            name_char: ATTRIBUTE_NAME_CHAR.to_owned(),
            id_attribute_name: ID_ATTRIBUTE_NAME.to_owned(),
            root_attribute_name: ROOT_ATTRIBUTE_NAME.to_owned(),
        }
    }

    /// Override the character classes of the attribute-name grammar.
    #[must_use]
    pub fn attribute_name_chars(mut self, start_char: impl Into<String>, name_char: impl Into<String>) -> Self {
        self.start_char = start_char.into();
        self.name_char = name_char.into();
        self
    }

    /// Override the id and root marker attribute names.
    #[must_use]
    pub fn marker_attributes(mut self, id_attribute_name: impl Into<String>, root_attribute_name: impl Into<String>) -> Self {
        self.id_attribute_name = id_attribute_name.into();
        self.root_attribute_name = root_attribute_name.into();
        self
    }

    /// Register every property of `config`.
    ///
    /// # Errors
    /// Returns an error naming the offending property when it was already
    /// injected or its flags contradict each other, and when a custom
    /// attribute pattern is not a valid regex.
    pub fn inject(mut self, config: DomPropertyConfig) -> Result<Self> {
        for pattern in &config.custom_attribute_patterns {
            let compiled = Regex::new(pattern)
                .with_context(|| format!("invalid custom attribute pattern `{pattern}`"))?;
            self.custom_attribute_patterns.push(compiled);
        }

        for (name, flags) in &config.properties {
            if self.properties.contains_key(name) {
                bail!(
                    "DOM property `{name}` has already been injected; the same config may be \
                     injected twice, or two configs declare conflicting property names"
                );
            }
            let descriptor = describe(name, flags, &config)?;
            let lowercased = name.to_lowercase();
            if let Some(alias) = config.attribute_names.get(name) {
                self.possible_standard_names
                    .insert(alias.to_lowercase(), name.clone());
            }
            self.possible_standard_names.insert(lowercased, name.clone());
            self.kind_by_property_name
                .insert(descriptor.property_name.clone(), descriptor.value_kind);
            self.properties.insert(name.clone(), descriptor);
        }

        for default in config.default_values {
            match default.tag {
                Some(tag) => {
                    self.tag_defaults
                        .entry(tag.to_ascii_lowercase())
                        .or_default()
                        .insert(default.property, default.value);
                }
                None => {
                    self.property_defaults.insert(default.property, default.value);
                }
            }
        }

        let known: HashSet<&String> = config.properties.keys().collect();
        for alias_owner in config
            .attribute_names
            .keys()
            .chain(config.attribute_namespaces.keys())
            .chain(config.property_names.keys())
            .chain(config.mutation_methods.keys())
        {
            if !known.contains(alias_owner) {
                debug!("Ignoring metadata for undeclared DOM property `{alias_owner}`");
            }
        }
        Ok(self)
    }

    pub fn build(self) -> DomPropertyRegistry {
        DomPropertyRegistry {
            properties: self.properties,
            possible_standard_names: self.possible_standard_names,
            custom_attribute_patterns: self.custom_attribute_patterns,
            kind_by_property_name: self.kind_by_property_name,
            tag_defaults: self.tag_defaults,
            property_defaults: self.property_defaults,
            start_char: self.start_char,
            name_char: self.name_char,
            id_attribute_name: self.id_attribute_name,
            root_attribute_name: self.root_attribute_name,
        }
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate one property's flags and resolve its names and write strategy.
fn describe(name: &str, flags: &[PropertyFlag], config: &DomPropertyConfig) -> Result<PropertyDescriptor> {
    let has = |flag: PropertyFlag| flags.contains(&flag);
    let must_use_attribute = has(PropertyFlag::MustUseAttribute);
    let must_use_property = has(PropertyFlag::MustUseProperty);
    let has_side_effects = has(PropertyFlag::HasSideEffects);

    if must_use_attribute && must_use_property {
        bail!("DOM property `{name}` cannot require using both attribute and property");
    }
    if has_side_effects && !must_use_property {
        bail!("DOM property `{name}` has side effects and must use property");
    }

    let kinds: Vec<ValueKind> = [
        (PropertyFlag::HasBooleanValue, ValueKind::Boolean),
        (PropertyFlag::HasOverloadedBooleanValue, ValueKind::OverloadedBoolean),
        (PropertyFlag::HasPositiveNumericValue, ValueKind::PositiveNumeric),
        (PropertyFlag::HasNumericValue, ValueKind::Numeric),
    ]
    .into_iter()
    .filter(|(flag, _)| has(*flag))
    .map(|(_, kind)| kind)
    .collect();
    let value_kind = match kinds.as_slice() {
        [] => ValueKind::Plain,
        [kind] => *kind,
        // Positive numeric already implies numeric.
        [ValueKind::PositiveNumeric, ValueKind::Numeric] => ValueKind::PositiveNumeric,
        _ => bail!(
            "DOM property `{name}` can be one of boolean, overloaded boolean, or numeric value, \
             but not a combination"
        ),
    };

    let attribute_name = config
        .attribute_names
        .get(name)
        .cloned()
        .unwrap_or_else(|| name.to_lowercase());
    let property_name = config
        .property_names
        .get(name)
        .cloned()
        .unwrap_or_else(|| name.to_owned());
    let namespace = config.attribute_namespaces.get(name).cloned();

    let is_boolean_like = matches!(value_kind, ValueKind::Boolean | ValueKind::OverloadedBoolean);
    let strategy = match (config.mutation_methods.get(name), namespace.clone()) {
        (Some(method), _) => WriteStrategy::MutationOverride(method.clone()),
        (None, Some(namespace)) if must_use_attribute => WriteStrategy::AttributeNs { namespace },
        (None, _) if must_use_attribute && is_boolean_like => WriteStrategy::BooleanAttribute,
        (None, _) if must_use_attribute => WriteStrategy::Attribute,
        (None, _) => WriteStrategy::Direct { has_side_effects },
    };

    Ok(PropertyDescriptor {
        attribute_name,
        attribute_namespace: namespace,
        property_name,
        value_kind,
        strategy,
    })
}
