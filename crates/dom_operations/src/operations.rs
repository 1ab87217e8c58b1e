//! The property-operations dispatcher.
//!
//! Every operation resolves the property's descriptor from the injected
//! registry and applies descriptor-driven policy. Names the registry does not
//! know fall through to the custom-attribute predicate and, for raw attribute
//! writes, the attribute-name validator. Malformed input never errors: it
//! degrades to empty markup or to no write at all. Errors returned by the node
//! are propagated unchanged.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use anyhow::Result;
use dom_property::{DomNode, DomPropertyRegistry, MutationValue, PropValue, PropertyDescriptor, PropertyRegistry, WriteStrategy};
use log::trace;

use crate::diagnostics::{Diagnostic, DiagnosticSink, LogDiagnostics};
use crate::escape::quote_attribute_value;
use crate::name_validator::{AttributeNameCache, AttributeNameValidator, lock_recovering};

/// Whether writing `value` is equivalent to clearing the property described by `descriptor`.
#[inline]
pub fn should_ignore_value(descriptor: &PropertyDescriptor, value: &PropValue) -> bool {
    descriptor.should_ignore_value(value)
}

/// Applies named property values to nodes and renders them as markup.
pub struct DomPropertyOperations<R: PropertyRegistry = DomPropertyRegistry> {
    registry: Arc<R>,
    validator: AttributeNameValidator,
    diagnostics: Arc<dyn DiagnosticSink>,
    warned_properties: Mutex<HashSet<String>>,
}

impl<R: PropertyRegistry> DomPropertyOperations<R> {
    /// Dispatcher with a private name cache, reporting through `log`.
    ///
    /// # Errors
    /// Returns an error if the registry's attribute-name character classes do
    /// not form a valid pattern.
    pub fn new(registry: Arc<R>) -> Result<Self> {
        Self::with_parts(registry, Arc::new(AttributeNameCache::new()), Arc::new(LogDiagnostics))
    }

    /// Dispatcher with an injected name cache and diagnostic sink.
    ///
    /// # Errors
    /// Returns an error if the registry's attribute-name character classes do
    /// not form a valid pattern.
    pub fn with_parts(
        registry: Arc<R>,
        cache: Arc<AttributeNameCache>,
        diagnostics: Arc<dyn DiagnosticSink>,
    ) -> Result<Self> {
        let validator = AttributeNameValidator::new(
            registry.attribute_name_start_char(),
            registry.attribute_name_char(),
            cache,
            Arc::clone(&diagnostics),
        )?;
        Ok(Self {
            registry,
            validator,
            diagnostics,
            warned_properties: Mutex::new(HashSet::new()),
        })
    }

    pub fn registry(&self) -> &R {
        &self.registry
    }

    pub fn name_cache(&self) -> &Arc<AttributeNameCache> {
        self.validator.cache()
    }

    #[inline]
    pub fn is_attribute_name_safe(&self, name: &str) -> bool {
        self.validator.is_attribute_name_safe(name)
    }

    // -----------------------
    // Markup
    // -----------------------

    /// `id_attribute="<id>"` for server-rendered markup.
    pub fn create_markup_for_id(&self, id: &str) -> String {
        format!(
            "{}={}",
            self.registry.id_attribute_name(),
            quote_attribute_value(&PropValue::from(id))
        )
    }

    /// `root_attribute=""` for server-rendered markup.
    pub fn create_markup_for_root(&self) -> String {
        format!("{}=\"\"", self.registry.root_attribute_name())
    }

    /// Markup for one property.
    ///
    /// `Some("")` means the attribute is omitted; `None` means the name is
    /// neither known nor custom and no markup can be produced for it.
    pub fn create_markup_for_property(&self, name: &str, value: &PropValue) -> Option<String> {
        if let Some(descriptor) = self.registry.lookup(name) {
            if descriptor.should_ignore_value(value) {
                return Some(String::new());
            }
            let attribute_name = &descriptor.attribute_name;
            if descriptor.is_presence_only(value) {
                return Some(format!("{attribute_name}=\"\""));
            }
            return Some(format!("{attribute_name}={}", quote_attribute_value(value)));
        }
        if self.registry.is_custom_attribute(name) {
            if value.is_nullish() {
                return Some(String::new());
            }
            return Some(format!("{name}={}", quote_attribute_value(value)));
        }
        self.warn_unknown_property(name);
        None
    }

    /// Markup for an attribute the caller already treats as custom; skips the registry.
    pub fn create_markup_for_custom_attribute(&self, name: &str, value: &PropValue) -> String {
        if !self.is_attribute_name_safe(name) || value.is_nullish() {
            return String::new();
        }
        format!("{name}={}", quote_attribute_value(value))
    }

    /// Markup for an SVG attribute. Known names are normalized to their
    /// attribute name; values are never coerced.
    pub fn create_markup_for_svg_attribute(&self, name: &str, value: &PropValue) -> String {
        if !self.is_attribute_name_safe(name) || value.is_nullish() {
            return String::new();
        }
        let attribute_name = self
            .registry
            .lookup(name)
            .map_or(name, |descriptor| descriptor.attribute_name.as_str());
        format!("{attribute_name}={}", quote_attribute_value(value))
    }

    // -----------------------
    // Live mutation
    // -----------------------

    /// Write the id marker attribute.
    ///
    /// # Errors
    /// Propagates node errors.
    pub fn set_attribute_for_id(&self, node: &mut dyn DomNode, id: &str) -> Result<()> {
        node.set_attribute(self.registry.id_attribute_name(), id)
    }

    /// Write the root marker attribute.
    ///
    /// # Errors
    /// Propagates node errors.
    pub fn set_attribute_for_root(&self, node: &mut dyn DomNode) -> Result<()> {
        node.set_attribute(self.registry.root_attribute_name(), "")
    }

    /// Apply `value` to property `name` on `node`.
    ///
    /// # Errors
    /// Propagates node and mutation-method errors.
    pub fn set_value_for_property(&self, node: &mut dyn DomNode, name: &str, value: &PropValue) -> Result<()> {
        let Some(descriptor) = self.registry.lookup(name) else {
            if self.registry.is_custom_attribute(name) {
                return self.set_value_for_attribute(node, name, value);
            }
            self.warn_unknown_property(name);
            return Ok(());
        };

        let attribute_name = descriptor.attribute_name.as_str();
        match &descriptor.strategy {
            WriteStrategy::MutationOverride(method) => {
                trace!("[DOM]: {name} -> mutation method");
                method.call(node, MutationValue::Present(value))
            }
            _ if descriptor.should_ignore_value(value) => self.delete_value_for_property(node, name),
            WriteStrategy::AttributeNs { namespace } => {
                trace!("[DOM]: {name} -> setAttributeNS({namespace}, {attribute_name})");
                node.set_attribute_ns(namespace, attribute_name, &value.to_markup_string())
            }
            WriteStrategy::BooleanAttribute if descriptor.is_presence_only(value) => {
                trace!("[DOM]: {name} -> setAttribute({attribute_name}, \"\")");
                node.set_attribute(attribute_name, "")
            }
            WriteStrategy::BooleanAttribute | WriteStrategy::Attribute => {
                trace!("[DOM]: {name} -> setAttribute({attribute_name})");
                node.set_attribute(attribute_name, &value.to_markup_string())
            }
            WriteStrategy::Direct { has_side_effects } => {
                let property_name = descriptor.property_name.as_str();
                // Compared as strings, stored as the typed value.
                if *has_side_effects && node.get_property(property_name).markup_eq(value) {
                    trace!("[DOM]: {name} unchanged, skipping side-effecting write");
                    return Ok(());
                }
                trace!("[DOM]: {name} -> node.{property_name}");
                node.set_property(property_name, value.clone())
            }
        }
    }

    /// Clear property `name` on `node`.
    ///
    /// # Errors
    /// Propagates node and mutation-method errors.
    pub fn delete_value_for_property(&self, node: &mut dyn DomNode, name: &str) -> Result<()> {
        let Some(descriptor) = self.registry.lookup(name) else {
            if self.registry.is_custom_attribute(name) {
                return node.remove_attribute(name);
            }
            self.warn_unknown_property(name);
            return Ok(());
        };

        match &descriptor.strategy {
            WriteStrategy::MutationOverride(method) => {
                trace!("[DOM]: {name} -> mutation method (absent)");
                method.call(node, MutationValue::Absent)
            }
            WriteStrategy::Attribute | WriteStrategy::AttributeNs { .. } | WriteStrategy::BooleanAttribute => {
                trace!("[DOM]: {name} -> removeAttribute({})", descriptor.attribute_name);
                node.remove_attribute(&descriptor.attribute_name)
            }
            WriteStrategy::Direct { has_side_effects } => {
                let property_name = descriptor.property_name.as_str();
                let default_value = self
                    .registry
                    .default_value_for_property(node.node_name(), property_name);
                if *has_side_effects && node.get_property(property_name).markup_eq(&default_value) {
                    return Ok(());
                }
                trace!("[DOM]: {name} -> node.{property_name} = default");
                node.set_property(property_name, default_value)
            }
        }
    }

    /// Write a raw attribute after validating its name; nullish values remove it.
    ///
    /// # Errors
    /// Propagates node errors.
    pub fn set_value_for_attribute(&self, node: &mut dyn DomNode, name: &str, value: &PropValue) -> Result<()> {
        if !self.is_attribute_name_safe(name) {
            return Ok(());
        }
        if value.is_nullish() {
            node.remove_attribute(name)
        } else {
            node.set_attribute(name, &value.to_markup_string())
        }
    }

    /// Apply an SVG attribute. Known (aliased) names take the generic property
    /// path, coercion included; others are raw attribute writes.
    ///
    /// # Errors
    /// Propagates node and mutation-method errors.
    pub fn set_value_for_svg_attribute(&self, node: &mut dyn DomNode, name: &str, value: &PropValue) -> Result<()> {
        if self.registry.lookup(name).is_some() {
            self.set_value_for_property(node, name, value)
        } else {
            self.set_value_for_attribute(node, name, value)
        }
    }

    /// Clear an SVG attribute.
    ///
    /// # Errors
    /// Propagates node and mutation-method errors.
    pub fn delete_value_for_svg_attribute(&self, node: &mut dyn DomNode, name: &str) -> Result<()> {
        if self.registry.lookup(name).is_some() {
            self.delete_value_for_property(node, name)
        } else {
            node.remove_attribute(name)
        }
    }

    /// Report an unknown property once, when the registry knows a likely spelling.
    fn warn_unknown_property(&self, name: &str) {
        let Some(suggestion) = self.registry.possible_standard_name(&name.to_lowercase()) else {
            return;
        };
        if suggestion == name || !lock_recovering(&self.warned_properties).insert(name.to_owned()) {
            return;
        }
        self.diagnostics.report(&Diagnostic::UnknownProperty {
            name: name.to_owned(),
            suggestion: suggestion.to_owned(),
        });
    }
}
