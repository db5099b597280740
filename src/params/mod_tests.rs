//! Tests for the parameter model.

use super::{ParamKey, ParameterSet};

mod override_folding {
    use super::*;

    #[test]
    fn later_source_wins_per_key() {
        let mut base = ParameterSet::new();
        base.set(ParamKey::PackageName, "base");
        base.set(ParamKey::ArchivingFormat, "tar");

        let mut overrides = ParameterSet::new();
        overrides.set(ParamKey::PackageName, "override");

        base.override_with(&overrides);

        assert_eq!(base.get(ParamKey::PackageName), Some("override"));
    }

    #[test]
    fn untouched_keys_are_preserved() {
        let mut base = ParameterSet::new();
        base.set(ParamKey::ArchivingFormat, "tar");
        base.set(ParamKey::SerializationFormat, "JSONLD");

        let mut overrides = ParameterSet::new();
        overrides.set(ParamKey::ArchivingFormat, "zip");

        base.override_with(&overrides);

        assert_eq!(base.get(ParamKey::ArchivingFormat), Some("zip"));
        assert_eq!(base.get(ParamKey::SerializationFormat), Some("JSONLD"));
    }

    #[test]
    fn final_value_comes_from_last_setter() {
        let mut effective = ParameterSet::new();
        effective.set(ParamKey::PackageName, "defaults");

        let mut home = ParameterSet::new();
        home.set(ParamKey::PackageName, "home");

        let mut flags = ParameterSet::new();
        flags.set(ParamKey::PackageName, "flags");

        effective.override_with(&home);
        effective.override_with(&flags);

        assert_eq!(effective.get(ParamKey::PackageName), Some("flags"));
    }

    #[test]
    fn empty_override_is_a_no_op() {
        let mut base = ParameterSet::new();
        base.set(ParamKey::PackageName, "demo");

        let before = base.clone();
        base.override_with(&ParameterSet::new());

        assert_eq!(base, before);
    }

    #[test]
    fn multi_valued_key_is_replaced_wholesale() {
        let mut base = ParameterSet::new();
        base.set_all(
            ParamKey::ChecksumAlgorithms,
            vec!["md5".to_string(), "sha1".to_string()],
        );

        let mut overrides = ParameterSet::new();
        overrides.set_all(ParamKey::ChecksumAlgorithms, vec!["sha1".to_string()]);

        base.override_with(&overrides);

        assert_eq!(
            base.get_all(ParamKey::ChecksumAlgorithms),
            Some(["sha1".to_string()].as_slice())
        );
    }
}

mod value_semantics {
    use super::*;

    #[test]
    fn value_order_and_duplicates_are_preserved() {
        let mut params = ParameterSet::new();
        params.set_all(
            ParamKey::ChecksumAlgorithms,
            vec!["md5".to_string(), "sha1".to_string(), "md5".to_string()],
        );

        assert_eq!(
            params.get_all(ParamKey::ChecksumAlgorithms),
            Some(["md5".to_string(), "sha1".to_string(), "md5".to_string()].as_slice())
        );
    }

    #[test]
    fn get_returns_first_value() {
        let mut params = ParameterSet::new();
        params.set_all(
            ParamKey::ChecksumAlgorithms,
            vec!["md5".to_string(), "sha1".to_string()],
        );

        assert_eq!(params.get(ParamKey::ChecksumAlgorithms), Some("md5"));
    }

    #[test]
    fn set_replaces_previous_values() {
        let mut params = ParameterSet::new();
        params.set_all(
            ParamKey::ChecksumAlgorithms,
            vec!["md5".to_string(), "sha1".to_string()],
        );
        params.set(ParamKey::ChecksumAlgorithms, "sha256");

        assert_eq!(
            params.get_all(ParamKey::ChecksumAlgorithms),
            Some(["sha256".to_string()].as_slice())
        );
    }

    #[test]
    fn set_all_with_empty_list_removes_the_key() {
        let mut params = ParameterSet::new();
        params.set(ParamKey::ChecksumAlgorithms, "md5");
        params.set_all(ParamKey::ChecksumAlgorithms, Vec::new());

        assert!(!params.contains(ParamKey::ChecksumAlgorithms));
    }

    #[test]
    fn empty_set_reports_empty() {
        let params = ParameterSet::new();

        assert!(params.is_empty());
        assert_eq!(params.len(), 0);
        assert_eq!(params.get(ParamKey::PackageName), None);
    }
}

mod display {
    use super::*;

    #[test]
    fn entries_render_one_per_line_in_key_order() {
        let mut params = ParameterSet::new();
        params.set(ParamKey::ArchivingFormat, "tar");
        params.set(ParamKey::PackageName, "demo");
        params.set_all(
            ParamKey::ChecksumAlgorithms,
            vec!["md5".to_string(), "sha1".to_string()],
        );

        let rendered = params.to_string();
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(
            lines,
            vec![
                "package-name = demo",
                "archiving-format = tar",
                "checksum-algorithms = md5, sha1",
            ]
        );
    }

    #[test]
    fn empty_set_renders_empty() {
        assert_eq!(ParameterSet::new().to_string(), "");
    }
}
