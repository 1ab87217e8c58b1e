//! Property operations for markup nodes.
//!
//! Given a property name and a value, [`DomPropertyOperations`] decides
//! whether to write through the attribute API or by direct property
//! assignment, how to coerce the value, when a write is redundant, and
//! whether an unknown name is safe to hand to the node at all. It also renders
//! the same decisions as attribute markup for server-side output.

#![allow(
    clippy::missing_inline_in_public_items,
    reason = "Inlining decisions left to compiler for this crate"
)]

pub mod diagnostics;
pub mod escape;
pub mod memory;
pub mod name_validator;
pub mod operations;

pub use diagnostics::{Diagnostic, DiagnosticSink, LogDiagnostics};
pub use escape::{escape_attribute_text, quote_attribute_value};
pub use memory::{Attribute, MemoryNode, NodeWrite};
pub use name_validator::{AttributeNameCache, AttributeNameValidator};
pub use operations::{DomPropertyOperations, should_ignore_value};

pub use dom_property::{DomNode, MutationMethod, MutationValue, PropValue, PropertyDescriptor, PropertyRegistry};
