//! Fixture constants mirroring the built-in dependency table.

/// (source, expected destination) for every built-in copy entry
pub const BUILTIN_SOURCES: &[(&str, &str)] = &[
    (
        "node_modules/handlebars/dist/handlebars.runtime.js",
        "js/deps/handlebars.js",
    ),
    ("node_modules/highlight.js/styles/github.css", "assets/github.css"),
    ("node_modules/hyperhtml/umd.js", "js/deps/hyperhtml.js"),
    ("node_modules/jquery/dist/jquery.slim.js", "js/deps/jquery.js"),
    ("node_modules/marked/lib/marked.js", "js/deps/marked.js"),
    ("node_modules/requirejs/require.js", "js/deps/require.js"),
    ("node_modules/text/text.js", "js/deps/text.js"),
    ("node_modules/webidl2/dist/webidl2.js", "js/deps/webidl2.js"),
    ("node_modules/pluralize/pluralize.js", "js/deps/pluralize.js"),
    (
        "node_modules/idb/build/iife/with-async-ittr-min.js",
        "js/deps/idb.js",
    ),
];

pub const DOM_READY_SOURCE: &str = "node_modules/domReady/domReady.js";

pub const DOM_READY_SHIM: &str = "define([\"deps/_domReady\"], dep => { console.warn(\"The dependency `deps/domReady` is deprecated. Use standard DOMContentLoaded and document.readyState instead.\"); return dep; });";

pub const STALE_FILE: &str = "js/core/css/github.css";

pub const CUSTOM_MANIFEST: &str = r#"
output_dir = "web/vendor"
module_prefix = "vendor"

[[copy]]
source = "node_modules/pkg/LICENSE"
dest = "web/vendor/LICENSE-pkg"
kind = "file"

[[copy]]
source = "node_modules/pkg/pkg.js"
dest = "web/vendor"

[[deprecated]]
source = "node_modules/legacy/legacy.js"
guidance = "Use \"pkg\" instead."
"#;
