//! Capability interface of the tree nodes that property writes land on.

use crate::value::PropValue;
use anyhow::Result;

/// A mutable markup node: name-based attribute access plus typed properties.
///
/// Implementations decide how properties map onto their own storage; the
/// property layer only relies on the calls below. Mutating calls may fail and
/// their errors are propagated unchanged to the caller of the property operation.
pub trait DomNode {
    /// Tag name used to resolve per-tag property defaults (e.g. `INPUT`).
    fn node_name(&self) -> &str;

    /// Read an attribute by its qualified name.
    fn get_attribute(&self, name: &str) -> Option<String>;

    /// Set an attribute by name.
    ///
    /// # Errors
    /// Returns an error when the host rejects the write.
    fn set_attribute(&mut self, name: &str, value: &str) -> Result<()>;

    /// Set an attribute in the given namespace (`setAttributeNS`).
    ///
    /// # Errors
    /// Returns an error when the host rejects the write.
    fn set_attribute_ns(&mut self, namespace: &str, name: &str, value: &str) -> Result<()>;

    /// Remove an attribute by its qualified name.
    ///
    /// # Errors
    /// Returns an error when the host rejects the removal.
    fn remove_attribute(&mut self, name: &str) -> Result<()>;

    /// Read the current value of a node property.
    fn get_property(&self, name: &str) -> PropValue;

    /// Assign a node property; the host performs its own coercion.
    ///
    /// # Errors
    /// Returns an error when the host rejects the assignment.
    fn set_property(&mut self, name: &str, value: PropValue) -> Result<()>;
}
