//! Property-based tests for geotrip format primitives

use geotrip_format::{GeoJsonError, Kind, Member};
use proptest::prelude::*;

proptest! {
    #[test]
    fn from_tag_accepts_only_exact_tags(tag in "\\PC{0,24}") {
        match Kind::from_tag(&tag) {
            Some(kind) => prop_assert_eq!(kind.as_str(), tag.as_str()),
            None => prop_assert!(Kind::ALL.iter().all(|k| k.as_str() != tag)),
        }
    }

    #[test]
    fn case_variants_of_tags_are_rejected(
        kind in prop::sample::select(Kind::ALL.to_vec())
    ) {
        let lower = kind.as_str().to_lowercase();
        let upper = kind.as_str().to_uppercase();
        prop_assert_eq!(Kind::from_tag(&lower), None);
        prop_assert_eq!(Kind::from_tag(&upper), None);
    }

    #[test]
    fn member_from_option_never_yields_absent(value in proptest::option::of(any::<i32>())) {
        let member: Member<i32> = value.into();
        prop_assert!(!member.is_absent());
        prop_assert_eq!(member.into_option(), value);
    }

    #[test]
    fn violation_display_is_single_line(message in "[a-zA-Z0-9 \"]{0,64}") {
        let err = GeoJsonError::violation(message.clone());
        let rendered = err.to_string();
        prop_assert_eq!(rendered.lines().count().max(1), 1);
        prop_assert_eq!(rendered, message);
    }
}
