//! Property tests for deprecation shim rendering.

use proptest::prelude::*;

use vendorsync::domain::services::{escape_js_string, render_shim};

proptest! {
    /// PROPERTY: rendered shims are one line whatever the guidance contains.
    #[test]
    fn property_shim_is_single_line(guidance in "(?s).{0,128}") {
        let shim = render_shim("deps", "old", &guidance);
        prop_assert!(!shim.contains('\n'));
        prop_assert!(!shim.contains('\r'));
        let prefix = r#"define(["deps/_old"], dep => { console.warn(""#;
        let suffix = r#""); return dep; });"#;
        prop_assert!(shim.starts_with(prefix));
        prop_assert!(shim.ends_with(suffix));
    }

    /// PROPERTY: escaped strings never contain an unescaped double quote.
    #[test]
    fn property_escape_has_no_bare_quotes(s in "(?s).{0,128}") {
        let escaped = escape_js_string(&s);
        let mut backslashes = 0usize;
        for c in escaped.chars() {
            if c == '"' {
                prop_assert!(backslashes % 2 == 1, "bare quote in {:?}", escaped);
            }
            backslashes = if c == '\\' { backslashes + 1 } else { 0 };
        }
    }
}
