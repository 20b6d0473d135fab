//! Region name normalization.
//!
//! Older region names use the variant glyph `台` where the statistics API
//! only recognizes `臺` (臺北市, 臺中市, 臺東縣, 霧臺鄉, ...). The catalog uses
//! the standard glyph, but URLs shared by people frequently carry the legacy
//! one.

/// Glyph found in legacy spellings of region names.
pub const LEGACY_GLYPH: char = '台';

/// Glyph the statistics API expects.
pub const STANDARD_GLYPH: char = '臺';

/// Replace every legacy glyph in `name` with the standard one.
pub fn normalize_name(name: &str) -> String {
    name.replace(LEGACY_GLYPH, &STANDARD_GLYPH.to_string())
}

/// Normalize an optional region name; `None` stays `None`.
pub fn normalize(name: Option<&str>) -> Option<String> {
    name.map(normalize_name)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn normalize_is_idempotent(name in "[台臺北中南東市縣區鄉a-z ]{0,12}") {
            let once = normalize_name(&name);
            prop_assert_eq!(normalize_name(&once), once.clone());
            prop_assert!(!once.contains(LEGACY_GLYPH));
        }

        #[test]
        fn normalize_preserves_char_count(name in "\\PC{0,16}") {
            prop_assert_eq!(normalize_name(&name).chars().count(), name.chars().count());
        }
    }
}
