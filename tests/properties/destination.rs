//! Property tests for copy destination resolution.

use std::path::{Path, PathBuf};

use proptest::prelude::*;

use vendorsync::domain::services::resolve_destination;
use vendorsync::CopyTarget;

fn segment() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9_-]{1,12}").unwrap()
}

fn dir_path() -> impl Strategy<Value = PathBuf> {
    proptest::collection::vec(segment(), 1..=4)
        .prop_map(|segments| PathBuf::from("/project").join(segments.join("/")))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: an extension-less destination receives the source's base name.
    #[test]
    fn property_directory_destination_appends_base_name(
        dir in dir_path(),
        stem in segment(),
        ext in "[a-z]{1,4}",
    ) {
        let source = PathBuf::from("/project/node_modules/pkg").join(format!("{stem}.{ext}"));
        let resolved = resolve_destination(&source, &dir, CopyTarget::Infer).unwrap();

        prop_assert_eq!(resolved.parent(), Some(dir.as_path()));
        prop_assert_eq!(resolved.file_name(), source.file_name());
    }

    /// PROPERTY: a destination with an extension is used verbatim.
    #[test]
    fn property_file_destination_is_verbatim(
        dir in dir_path(),
        name in segment(),
        ext in "[a-z]{1,4}",
    ) {
        let dest = dir.join(format!("{name}.{ext}"));
        let resolved = resolve_destination(Path::new("/src/any.js"), &dest, CopyTarget::Infer).unwrap();

        prop_assert_eq!(resolved, dest);
    }

    /// PROPERTY: explicit targets override the extension heuristic.
    #[test]
    fn property_explicit_target_wins(
        dir in dir_path(),
        stem in segment(),
    ) {
        let source = PathBuf::from("/src").join(format!("{stem}.js"));

        let as_file = resolve_destination(&source, &dir, CopyTarget::File).unwrap();
        prop_assert_eq!(&as_file, &dir);

        let as_dir = resolve_destination(&source, &dir.with_extension("d"), CopyTarget::Directory).unwrap();
        prop_assert_eq!(as_dir, dir.with_extension("d").join(format!("{stem}.js")));
    }
}
