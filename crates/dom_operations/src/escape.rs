//! Attribute value quoting for generated markup.

use dom_property::PropValue;

/// Escape the characters that could break out of a quoted attribute value or
/// start markup.
pub fn escape_attribute_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for char_val in text.chars() {
        match char_val {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(char_val),
        }
    }
    out
}

/// Stringify `value` and wrap it in double quotes, escaped.
pub fn quote_attribute_value(value: &PropValue) -> String {
    let escaped = escape_attribute_text(&value.to_markup_string());
    let mut out = String::with_capacity(escaped.len() + 2);
    out.push('"');
    out.push_str(&escaped);
    out.push('"');
    out
}

#[cfg(test)]
mod tests {
    use super::{escape_attribute_text, quote_attribute_value};
    use dom_property::PropValue;

    #[test]
    fn breakout_characters_are_escaped() {
        assert_eq!(
            escape_attribute_text(r#""><script>&'"#),
            "&quot;&gt;&lt;script&gt;&amp;&#x27;"
        );
    }

    #[test]
    fn quoting_stringifies_first() {
        assert_eq!(quote_attribute_value(&PropValue::Number(1.5)), "\"1.5\"");
        assert_eq!(quote_attribute_value(&PropValue::Boolean(false)), "\"false\"");
        assert_eq!(quote_attribute_value(&PropValue::from("a&b")), "\"a&amp;b\"");
    }
}
