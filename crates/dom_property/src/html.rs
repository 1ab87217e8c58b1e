//! Standard HTML property table.

use crate::config::{DomPropertyConfig, PropertyFlag};
use crate::registry::ATTRIBUTE_NAME_CHAR;
use crate::value::PropValue;

const NONE: &[PropertyFlag] = &[];
const ATTRIBUTE: &[PropertyFlag] = &[PropertyFlag::MustUseAttribute];
const PROPERTY: &[PropertyFlag] = &[PropertyFlag::MustUseProperty];
const BOOLEAN: &[PropertyFlag] = &[PropertyFlag::HasBooleanValue];
const NUMERIC: &[PropertyFlag] = &[PropertyFlag::HasNumericValue];
const POSITIVE_NUMERIC: &[PropertyFlag] = &[PropertyFlag::HasPositiveNumericValue];
const OVERLOADED_BOOLEAN: &[PropertyFlag] = &[PropertyFlag::HasOverloadedBooleanValue];
const ATTRIBUTE_BOOLEAN: &[PropertyFlag] = &[PropertyFlag::MustUseAttribute, PropertyFlag::HasBooleanValue];
const PROPERTY_BOOLEAN: &[PropertyFlag] = &[PropertyFlag::MustUseProperty, PropertyFlag::HasBooleanValue];
const ATTRIBUTE_POSITIVE_NUMERIC: &[PropertyFlag] = &[
    PropertyFlag::MustUseAttribute,
    PropertyFlag::HasPositiveNumericValue,
];
const PROPERTY_SIDE_EFFECTS: &[PropertyFlag] = &[PropertyFlag::MustUseProperty, PropertyFlag::HasSideEffects];

const PROPERTIES: &[(&str, &[PropertyFlag])] = &[
    // Standard properties
    ("accept", NONE),
    ("acceptCharset", ATTRIBUTE),
    ("accessKey", NONE),
    ("action", NONE),
    ("allowFullScreen", ATTRIBUTE_BOOLEAN),
    ("allowTransparency", ATTRIBUTE),
    ("alt", NONE),
    ("async", BOOLEAN),
    ("autoComplete", NONE),
    ("autoFocus", BOOLEAN),
    ("autoPlay", BOOLEAN),
    ("capture", ATTRIBUTE_BOOLEAN),
    ("cellPadding", NONE),
    ("cellSpacing", NONE),
    ("charSet", ATTRIBUTE),
    ("checked", PROPERTY_BOOLEAN),
    ("classID", ATTRIBUTE),
    ("className", PROPERTY),
    ("cols", ATTRIBUTE_POSITIVE_NUMERIC),
    ("colSpan", NONE),
    ("content", NONE),
    ("contentEditable", NONE),
    ("contextMenu", ATTRIBUTE),
    ("controls", PROPERTY_BOOLEAN),
    ("coords", NONE),
    ("crossOrigin", NONE),
    ("data", NONE),
    ("dateTime", ATTRIBUTE),
    ("default", BOOLEAN),
    ("defer", BOOLEAN),
    ("dir", NONE),
    ("disabled", ATTRIBUTE_BOOLEAN),
    ("download", OVERLOADED_BOOLEAN),
    ("draggable", NONE),
    ("encType", NONE),
    ("form", ATTRIBUTE),
    ("formAction", ATTRIBUTE),
    ("formEncType", ATTRIBUTE),
    ("formMethod", ATTRIBUTE),
    ("formNoValidate", BOOLEAN),
    ("formTarget", ATTRIBUTE),
    ("frameBorder", ATTRIBUTE),
    ("headers", NONE),
    ("height", ATTRIBUTE),
    ("hidden", ATTRIBUTE_BOOLEAN),
    ("high", NONE),
    ("href", NONE),
    ("hrefLang", NONE),
    ("htmlFor", NONE),
    ("httpEquiv", NONE),
    ("icon", NONE),
    ("id", PROPERTY),
    ("inputMode", ATTRIBUTE),
    ("is", ATTRIBUTE),
    ("keyParams", ATTRIBUTE),
    ("keyType", ATTRIBUTE),
    ("label", NONE),
    ("lang", NONE),
    ("list", ATTRIBUTE),
    ("loop", PROPERTY_BOOLEAN),
    ("low", NONE),
    ("manifest", ATTRIBUTE),
    ("marginHeight", NONE),
    ("marginWidth", NONE),
    ("max", NONE),
    ("maxLength", ATTRIBUTE),
    ("media", ATTRIBUTE),
    ("mediaGroup", NONE),
    ("method", NONE),
    ("min", NONE),
    ("minLength", ATTRIBUTE),
    ("multiple", PROPERTY_BOOLEAN),
    ("muted", PROPERTY_BOOLEAN),
    ("name", NONE),
    ("noValidate", BOOLEAN),
    ("open", BOOLEAN),
    ("optimum", NONE),
    ("pattern", NONE),
    ("placeholder", NONE),
    ("poster", NONE),
    ("preload", NONE),
    ("radioGroup", NONE),
    ("readOnly", PROPERTY_BOOLEAN),
    ("rel", NONE),
    ("required", BOOLEAN),
    ("reversed", BOOLEAN),
    ("role", ATTRIBUTE),
    ("rows", ATTRIBUTE_POSITIVE_NUMERIC),
    ("rowSpan", NONE),
    ("sandbox", NONE),
    ("scope", NONE),
    ("scoped", BOOLEAN),
    ("scrolling", NONE),
    ("seamless", ATTRIBUTE_BOOLEAN),
    ("selected", PROPERTY_BOOLEAN),
    ("shape", NONE),
    ("size", ATTRIBUTE_POSITIVE_NUMERIC),
    ("sizes", ATTRIBUTE),
    ("span", POSITIVE_NUMERIC),
    ("spellCheck", NONE),
    ("src", NONE),
    ("srcDoc", PROPERTY),
    ("srcLang", NONE),
    ("srcSet", ATTRIBUTE),
    ("start", NUMERIC),
    ("step", NONE),
    ("style", NONE),
    ("summary", NONE),
    ("tabIndex", NONE),
    ("target", NONE),
    ("title", NONE),
    ("type", NONE),
    ("useMap", NONE),
    ("value", PROPERTY_SIDE_EFFECTS),
    ("width", ATTRIBUTE),
    ("wmode", ATTRIBUTE),
    ("wrap", NONE),
    // Non-standard properties
    ("autoCapitalize", ATTRIBUTE),
    ("autoCorrect", ATTRIBUTE),
    ("autoSave", NONE),
    ("color", NONE),
    ("itemProp", ATTRIBUTE),
    ("itemScope", ATTRIBUTE_BOOLEAN),
    ("itemType", ATTRIBUTE),
    ("itemID", ATTRIBUTE),
    ("itemRef", ATTRIBUTE),
    ("property", NONE),
    ("results", NONE),
    ("security", ATTRIBUTE),
    ("unselectable", ATTRIBUTE),
];

const ATTRIBUTE_NAMES: &[(&str, &str)] = &[
    ("acceptCharset", "accept-charset"),
    ("className", "class"),
    ("htmlFor", "for"),
    ("httpEquiv", "http-equiv"),
];

const PROPERTY_NAMES: &[(&str, &str)] = &[
    ("autoComplete", "autocomplete"),
    ("autoFocus", "autofocus"),
    ("autoPlay", "autoplay"),
    ("autoSave", "autosave"),
    ("encType", "encoding"),
    ("hrefLang", "hreflang"),
    ("radioGroup", "radiogroup"),
    ("spellCheck", "spellcheck"),
    ("srcDoc", "srcdoc"),
];

/// HTML properties, with `data-*` and `aria-*` as custom attributes.
pub fn html_config() -> DomPropertyConfig {
    let mut config = DomPropertyConfig::new()
        .with_custom_attribute_pattern(format!("^(data|aria)-[{ATTRIBUTE_NAME_CHAR}]*$"));
    for (name, flags) in PROPERTIES {
        config = config.with_property(name, flags);
    }
    for (name, attribute_name) in ATTRIBUTE_NAMES {
        config = config.with_attribute_name(name, attribute_name);
    }
    for (name, property_name) in PROPERTY_NAMES {
        config = config.with_property_name(name, property_name);
    }
    config
        .with_default_value(None, "colSpan", 1)
        .with_default_value(None, "contentEditable", "inherit")
        .with_default_value(None, "crossOrigin", PropValue::Null)
        .with_default_value(None, "draggable", false)
        .with_default_value(None, "rowSpan", 1)
        // Keyed by node property name.
        .with_default_value(None, "spellcheck", true)
        .with_default_value(None, "tabIndex", -1)
        .with_default_value(Some("a"), "tabIndex", 0)
        .with_default_value(Some("button"), "tabIndex", 0)
        .with_default_value(Some("input"), "tabIndex", 0)
        .with_default_value(Some("select"), "tabIndex", 0)
        .with_default_value(Some("textarea"), "tabIndex", 0)
        .with_default_value(Some("ol"), "start", 1)
        .with_default_value(Some("col"), "span", 1)
        .with_default_value(Some("colgroup"), "span", 1)
        .with_default_value(Some("input"), "type", "text")
        .with_default_value(Some("button"), "type", "submit")
}
