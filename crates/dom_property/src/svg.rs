//! Standard SVG property table.
//!
//! Keys are the camelCase spellings used by element descriptions; most map to
//! a hyphenated or case-preserving attribute name, and the `xlink:*` and
//! `xml:*` attributes are written with their namespace.

use crate::config::{DomPropertyConfig, PropertyFlag};

pub const XLINK_NAMESPACE: &str = "http://www.w3.org/1999/xlink";
pub const XML_NAMESPACE: &str = "http://www.w3.org/XML/1998/namespace";

const ATTRIBUTE: &[PropertyFlag] = &[PropertyFlag::MustUseAttribute];

/// Property key and the attribute name it is written as.
const ATTRIBUTES: &[(&str, &str)] = &[
    ("clipPath", "clip-path"),
    ("cx", "cx"),
    ("cy", "cy"),
    ("d", "d"),
    ("dx", "dx"),
    ("dy", "dy"),
    ("fill", "fill"),
    ("fillOpacity", "fill-opacity"),
    ("fontFamily", "font-family"),
    ("fontSize", "font-size"),
    ("fx", "fx"),
    ("fy", "fy"),
    ("gradientTransform", "gradientTransform"),
    ("gradientUnits", "gradientUnits"),
    ("markerEnd", "marker-end"),
    ("markerMid", "marker-mid"),
    ("markerStart", "marker-start"),
    ("offset", "offset"),
    ("opacity", "opacity"),
    ("patternContentUnits", "patternContentUnits"),
    ("patternUnits", "patternUnits"),
    ("points", "points"),
    ("preserveAspectRatio", "preserveAspectRatio"),
    ("r", "r"),
    ("rx", "rx"),
    ("ry", "ry"),
    ("spreadMethod", "spreadMethod"),
    ("stopColor", "stop-color"),
    ("stopOpacity", "stop-opacity"),
    ("stroke", "stroke"),
    ("strokeDasharray", "stroke-dasharray"),
    ("strokeLinecap", "stroke-linecap"),
    ("strokeOpacity", "stroke-opacity"),
    ("strokeWidth", "stroke-width"),
    ("textAnchor", "text-anchor"),
    ("transform", "transform"),
    ("version", "version"),
    ("viewBox", "viewBox"),
    ("x1", "x1"),
    ("x2", "x2"),
    ("x", "x"),
    ("xlinkActuate", "xlink:actuate"),
    ("xlinkArcrole", "xlink:arcrole"),
    ("xlinkHref", "xlink:href"),
    ("xlinkRole", "xlink:role"),
    ("xlinkShow", "xlink:show"),
    ("xlinkTitle", "xlink:title"),
    ("xlinkType", "xlink:type"),
    ("xmlBase", "xml:base"),
    ("xmlLang", "xml:lang"),
    ("xmlSpace", "xml:space"),
    ("y1", "y1"),
    ("y2", "y2"),
    ("y", "y"),
];

/// SVG presentation and linking attributes, all attribute-backed.
pub fn svg_config() -> DomPropertyConfig {
    let mut config = DomPropertyConfig::new();
    for (name, attribute_name) in ATTRIBUTES {
        config = config
            .with_property(name, ATTRIBUTE)
            .with_attribute_name(name, attribute_name);
        if name.starts_with("xlink") {
            config = config.with_attribute_namespace(name, XLINK_NAMESPACE);
        } else if name.starts_with("xml") {
            config = config.with_attribute_namespace(name, XML_NAMESPACE);
        }
    }
    config
}
