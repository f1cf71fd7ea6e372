//! Deprecation shim generation
//!
//! A shim is an AMD module that requires the renamed original, warns once at
//! load time, and hands the original module back to the caller unchanged.

/// Escape a string for a JavaScript double-quoted literal
///
/// Escapes: backslash, double quotes, newlines, carriage returns, tabs,
/// U+2028 and U+2029
pub fn escape_js_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            _ => out.push(c),
        }
    }
    out
}

/// Warning text emitted when a deprecated module is loaded
pub fn deprecation_message(module_prefix: &str, name: &str, guidance: &str) -> String {
    format!("The dependency `{module_prefix}/{name}` is deprecated. {guidance}")
}

/// Module id of the renamed original
pub fn renamed_module_id(module_prefix: &str, name: &str) -> String {
    format!("{module_prefix}/_{name}")
}

/// Render the wrapper module for a deprecated dependency
pub fn render_shim(module_prefix: &str, name: &str, guidance: &str) -> String {
    let message = escape_js_string(&deprecation_message(module_prefix, name, guidance));
    let dependency = escape_js_string(&renamed_module_id(module_prefix, name));
    format!(r#"define(["{dependency}"], dep => {{ console.warn("{message}"); return dep; }});"#)
}
