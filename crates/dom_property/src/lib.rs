//! Property metadata for markup nodes: the host value model, descriptors that
//! pick a write strategy per property, and the registry built from injected
//! property configs (standard HTML and SVG tables included).

#![allow(
    clippy::missing_inline_in_public_items,
    reason = "Inlining decisions left to compiler for this crate"
)]

pub mod config;
pub mod descriptor;
pub mod html;
pub mod node;
pub mod registry;
pub mod svg;
pub mod value;

pub use config::{DefaultValue, DomPropertyConfig, PropertyFlag};
pub use descriptor::{MutationMethod, MutationValue, PropertyDescriptor, ValueKind, WriteStrategy};
pub use node::DomNode;
pub use registry::{
    ATTRIBUTE_NAME_CHAR, ATTRIBUTE_NAME_START_CHAR, DomPropertyRegistry, ID_ATTRIBUTE_NAME, PropertyRegistry,
    ROOT_ATTRIBUTE_NAME, RegistryBuilder,
};
pub use value::PropValue;
