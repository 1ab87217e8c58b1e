//! Property descriptors: how a known property is coerced and written.

use core::fmt::{Debug, Formatter, Result as FmtResult};
use std::sync::Arc;

use anyhow::Result;

use crate::node::DomNode;
use crate::value::PropValue;

/// Value handed to a [`MutationMethod`].
///
/// `Absent` marks a delete and never collides with a legal value, `Null` and
/// `Undefined` included.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MutationValue<'value> {
    Present(&'value PropValue),
    Absent,
}

type MutationFn = dyn Fn(&mut dyn DomNode, MutationValue<'_>) -> Result<()> + Send + Sync;

/// A full override of the write and delete strategy of one property.
#[derive(Clone)]
pub struct MutationMethod(Arc<MutationFn>);

impl MutationMethod {
    pub fn new<F>(method: F) -> Self
    where
        F: Fn(&mut dyn DomNode, MutationValue<'_>) -> Result<()> + Send + Sync + 'static,
    {
        Self(Arc::new(method))
    }

    /// Run the override against a node.
    ///
    /// # Errors
    /// Propagates whatever the override returns.
    #[inline]
    pub fn call(&self, node: &mut dyn DomNode, value: MutationValue<'_>) -> Result<()> {
        (self.0)(node, value)
    }
}

impl Debug for MutationMethod {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> FmtResult {
        formatter.write_str("MutationMethod(..)")
    }
}

/// Coercion policy of a property's value. The variants are mutually exclusive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ValueKind {
    #[default]
    Plain,
    /// Presence-only attribute; falsy values remove it.
    Boolean,
    /// `true` is presence-only, `false` removes, any other value is written.
    OverloadedBoolean,
    /// Values that coerce to `NaN` are dropped.
    Numeric,
    /// Numeric, and values below `1` are dropped.
    PositiveNumeric,
}

/// Write path of a property, chosen once when the registry is built.
#[derive(Clone, Debug)]
pub enum WriteStrategy {
    /// Typed assignment to the node property. Side-effecting properties are
    /// only assigned when the stringified current value differs.
    Direct { has_side_effects: bool },
    /// `setAttribute` with the stringified value.
    Attribute,
    /// `setAttributeNS` with the stringified value.
    AttributeNs { namespace: String },
    /// `setAttribute`, writing `""` for presence-only values.
    BooleanAttribute,
    /// Custom write/delete routine; supersedes every other policy.
    MutationOverride(MutationMethod),
}

/// Metadata of a known property, owned by the registry.
#[derive(Clone, Debug)]
pub struct PropertyDescriptor {
    /// Wire-level attribute name, possibly an alias of the property key.
    pub attribute_name: String,
    /// Namespace URI for namespaced attributes.
    pub attribute_namespace: Option<String>,
    /// Node property written by the direct strategy.
    pub property_name: String,
    pub value_kind: ValueKind,
    pub strategy: WriteStrategy,
}

impl PropertyDescriptor {
    #[inline]
    pub fn has_boolean_value(&self) -> bool {
        self.value_kind == ValueKind::Boolean
    }

    /// Positive-numeric properties are numeric too.
    #[inline]
    pub fn has_numeric_value(&self) -> bool {
        matches!(self.value_kind, ValueKind::Numeric | ValueKind::PositiveNumeric)
    }

    #[inline]
    pub fn has_positive_numeric_value(&self) -> bool {
        self.value_kind == ValueKind::PositiveNumeric
    }

    #[inline]
    pub fn has_overloaded_boolean_value(&self) -> bool {
        self.value_kind == ValueKind::OverloadedBoolean
    }

    #[inline]
    pub fn has_side_effects(&self) -> bool {
        matches!(self.strategy, WriteStrategy::Direct { has_side_effects: true })
    }

    #[inline]
    pub fn must_use_attribute(&self) -> bool {
        matches!(
            self.strategy,
            WriteStrategy::Attribute | WriteStrategy::AttributeNs { .. } | WriteStrategy::BooleanAttribute
        )
    }

    #[inline]
    pub fn mutation_method(&self) -> Option<&MutationMethod> {
        match &self.strategy {
            WriteStrategy::MutationOverride(method) => Some(method),
            _ => None,
        }
    }

    /// Whether `value` is written as a presence-only attribute (`name=""`).
    pub fn is_presence_only(&self, value: &PropValue) -> bool {
        self.has_boolean_value()
            || (self.has_overloaded_boolean_value() && matches!(value, PropValue::Boolean(true)))
    }

    /// Whether writing `value` is equivalent to clearing the property.
    pub fn should_ignore_value(&self, value: &PropValue) -> bool {
        if value.is_nullish() {
            return true;
        }
        match self.value_kind {
            ValueKind::Plain => false,
            ValueKind::Boolean => !value.is_truthy(),
            ValueKind::OverloadedBoolean => matches!(value, PropValue::Boolean(false)),
            ValueKind::Numeric => value.to_number().is_nan(),
            ValueKind::PositiveNumeric => {
                let number = value.to_number();
                number.is_nan() || number < 1.0
            }
        }
    }
}
