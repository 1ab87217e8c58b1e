//! Shared fixtures for the `dom_operations` test suites.

#![allow(dead_code, reason = "Each test binary uses a different subset")]
#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Fixtures fail loudly")]

use std::sync::{Arc, Mutex};

use anyhow::{Result, anyhow};
use dom_operations::{AttributeNameCache, Diagnostic, DiagnosticSink, DomPropertyOperations};
use dom_property::html::html_config;
use dom_property::{DomNode, DomPropertyConfig, DomPropertyRegistry, PropValue};

/// A sink that keeps every diagnostic for later assertions.
#[derive(Default)]
pub struct RecordingDiagnostics {
    reports: Mutex<Vec<Diagnostic>>,
}

impl RecordingDiagnostics {
    pub fn reports(&self) -> Vec<Diagnostic> {
        self.reports.lock().unwrap().clone()
    }
}

impl DiagnosticSink for RecordingDiagnostics {
    fn report(&self, diagnostic: &Diagnostic) {
        self.reports.lock().unwrap().push(diagnostic.clone());
    }
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Operations over the standard HTML + SVG registry with a recording sink.
pub fn standard_operations() -> (DomPropertyOperations, Arc<RecordingDiagnostics>) {
    init_logging();
    let registry = DomPropertyRegistry::standard().expect("standard configs are consistent");
    operations_over(registry, Arc::new(AttributeNameCache::new()))
}

/// Operations over the HTML properties plus `extra`.
pub fn operations_with(extra: DomPropertyConfig) -> (DomPropertyOperations, Arc<RecordingDiagnostics>) {
    init_logging();
    let registry = DomPropertyRegistry::builder()
        .inject(html_config())
        .and_then(|builder| builder.inject(extra))
        .expect("configs are consistent")
        .build();
    operations_over(registry, Arc::new(AttributeNameCache::new()))
}

pub fn operations_over(
    registry: DomPropertyRegistry,
    cache: Arc<AttributeNameCache>,
) -> (DomPropertyOperations, Arc<RecordingDiagnostics>) {
    let diagnostics = Arc::new(RecordingDiagnostics::default());
    let sink: Arc<dyn DiagnosticSink> = Arc::clone(&diagnostics) as Arc<dyn DiagnosticSink>;
    let operations = DomPropertyOperations::with_parts(Arc::new(registry), cache, sink).expect("valid attribute grammar");
    (operations, diagnostics)
}

/// A node whose host rejects every write.
pub struct RejectingNode;

impl DomNode for RejectingNode {
    fn node_name(&self) -> &str {
        "DIV"
    }

    fn get_attribute(&self, _name: &str) -> Option<String> {
        None
    }

    fn set_attribute(&mut self, name: &str, _value: &str) -> Result<()> {
        Err(anyhow!("host rejected setAttribute({name})"))
    }

    fn set_attribute_ns(&mut self, _namespace: &str, name: &str, _value: &str) -> Result<()> {
        Err(anyhow!("host rejected setAttributeNS({name})"))
    }

    fn remove_attribute(&mut self, name: &str) -> Result<()> {
        Err(anyhow!("host rejected removeAttribute({name})"))
    }

    fn get_property(&self, _name: &str) -> PropValue {
        PropValue::Undefined
    }

    fn set_property(&mut self, name: &str, _value: PropValue) -> Result<()> {
        Err(anyhow!("host rejected assignment to {name}"))
    }
}
