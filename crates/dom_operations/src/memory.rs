//! In-memory node that records every write it receives.
//!
//! Useful as a headless mirror of a real node and as the reference
//! implementation of [`DomNode`] in tests.

use std::collections::HashMap;

use anyhow::Result;
use dom_property::{DomNode, PropValue};
use smallvec::SmallVec;

/// One call made against a [`MemoryNode`].
#[derive(Debug, Clone, PartialEq)]
pub enum NodeWrite {
    SetAttribute { name: String, value: String },
    SetAttributeNs { namespace: String, name: String, value: String },
    RemoveAttribute { name: String },
    SetProperty { name: String, value: PropValue },
}

/// An attribute stored on a [`MemoryNode`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub namespace: Option<String>,
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, Default)]
pub struct MemoryNode {
    tag_name: String,
    attrs: SmallVec<Attribute, 4>,
    properties: HashMap<String, PropValue>,
    writes: Vec<NodeWrite>,
}

impl MemoryNode {
    pub fn new(tag_name: impl Into<String>) -> Self {
        Self {
            tag_name: tag_name.into(),
            ..Self::default()
        }
    }

    /// Seed a property value without recording a write.
    #[must_use]
    pub fn with_property(mut self, name: &str, value: impl Into<PropValue>) -> Self {
        self.properties.insert(name.to_owned(), value.into());
        self
    }

    /// Seed an attribute without recording a write.
    #[must_use]
    pub fn with_attribute(mut self, name: &str, value: &str) -> Self {
        self.store_attribute(None, name, value);
        self
    }

    pub fn attributes(&self) -> impl Iterator<Item = &Attribute> {
        self.attrs.iter()
    }

    pub fn attribute_namespace(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|attr| attr.name == name)
            .and_then(|attr| attr.namespace.as_deref())
    }

    pub fn writes(&self) -> &[NodeWrite] {
        &self.writes
    }

    /// Forget the recorded writes, keeping the node state.
    pub fn clear_writes(&mut self) {
        self.writes.clear();
    }

    fn store_attribute(&mut self, namespace: Option<&str>, name: &str, value: &str) {
        if let Some(existing) = self.attrs.iter_mut().find(|attr| attr.name == name) {
            existing.namespace = namespace.map(str::to_owned);
            value.clone_into(&mut existing.value);
            return;
        }
        self.attrs.push(Attribute {
            namespace: namespace.map(str::to_owned),
            name: name.to_owned(),
            value: value.to_owned(),
        });
    }
}

impl DomNode for MemoryNode {
    fn node_name(&self) -> &str {
        &self.tag_name
    }

    fn get_attribute(&self, name: &str) -> Option<String> {
        self.attrs
            .iter()
            .find(|attr| attr.name == name)
            .map(|attr| attr.value.clone())
    }

    fn set_attribute(&mut self, name: &str, value: &str) -> Result<()> {
        self.store_attribute(None, name, value);
        self.writes.push(NodeWrite::SetAttribute {
            name: name.to_owned(),
            value: value.to_owned(),
        });
        Ok(())
    }

    fn set_attribute_ns(&mut self, namespace: &str, name: &str, value: &str) -> Result<()> {
        self.store_attribute(Some(namespace), name, value);
        self.writes.push(NodeWrite::SetAttributeNs {
            namespace: namespace.to_owned(),
            name: name.to_owned(),
            value: value.to_owned(),
        });
        Ok(())
    }

    fn remove_attribute(&mut self, name: &str) -> Result<()> {
        self.attrs.retain(|attr| attr.name != name);
        self.writes.push(NodeWrite::RemoveAttribute { name: name.to_owned() });
        Ok(())
    }

    fn get_property(&self, name: &str) -> PropValue {
        self.properties.get(name).cloned().unwrap_or(PropValue::Undefined)
    }

    fn set_property(&mut self, name: &str, value: PropValue) -> Result<()> {
        self.properties.insert(name.to_owned(), value.clone());
        self.writes.push(NodeWrite::SetProperty {
            name: name.to_owned(),
            value,
        });
        Ok(())
    }
}
