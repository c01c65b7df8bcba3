use crate::ThemeValue;

/// Deep-merges `patch` onto `base` and returns the result.
///
/// When both sides are maps they are merged key by key: keys only in `base`
/// are kept, keys only in `patch` are added. Anything else is last-writer-wins,
/// so the patch value replaces the base value, including `Null` and lists.
/// A patch that puts a scalar where the base has a map drops that subtree;
/// callers are expected to keep the two trees structurally compatible.
pub fn merge(base: &ThemeValue, patch: &ThemeValue) -> ThemeValue {
    let mut merged = base.clone();
    merge_in_place(&mut merged, patch);
    merged
}

/// In-place form of [`merge`]. Returns whether `base` changed.
pub fn merge_in_place(base: &mut ThemeValue, patch: &ThemeValue) -> bool {
    match (base, patch) {
        (ThemeValue::Map(base), ThemeValue::Map(patch)) => {
            let mut changed = false;

            for (key, value) in patch {
                match base.get_mut(key) {
                    Some(existing) => changed |= merge_in_place(existing, value),
                    None => {
                        base.insert(key.clone(), value.clone());
                        changed = true;
                    }
                }
            }

            changed
        }

        (base, patch) => {
            if *base == *patch {
                return false;
            }

            *base = patch.clone();
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn theme(value: serde_json::Value) -> ThemeValue {
        ThemeValue::from(value)
    }

    #[test]
    fn test_merge_with_empty_patch_is_identity() {
        let base = theme(json!({
            "colors": { "primary": "blue", "greys": ["#111", "#222"] },
            "size": 14
        }));

        assert_eq!(merge(&base, &ThemeValue::empty()), base);
    }

    #[test]
    fn test_merge_recurses_into_maps() {
        let base = theme(json!({ "colors": { "primary": "blue", "secondary": "red" } }));
        let patch = theme(json!({ "colors": { "primary": "green", "divider": "grey" } }));

        assert_eq!(
            merge(&base, &patch),
            theme(json!({
                "colors": { "primary": "green", "secondary": "red", "divider": "grey" }
            }))
        );
    }

    #[test]
    fn test_merge_does_not_touch_inputs() {
        let base = theme(json!({ "colors": { "primary": "blue" } }));
        let patch = theme(json!({ "colors": { "primary": "green" } }));
        let base_before = base.clone();
        let patch_before = patch.clone();

        let _ = merge(&base, &patch);

        assert_eq!(base, base_before);
        assert_eq!(patch, patch_before);
    }

    #[test]
    fn test_lists_are_replaced_wholesale() {
        let base = theme(json!({ "family": ["Inter", "Helvetica", "sans-serif"] }));
        let patch = theme(json!({ "family": ["Mono"] }));

        assert_eq!(
            merge(&base, &patch),
            theme(json!({ "family": ["Mono"] }))
        );
    }

    #[test]
    fn test_type_mismatch_is_last_writer_wins() {
        let base = theme(json!({ "colors": { "primary": "blue" } }));

        let scalar_over_map = merge(&base, &theme(json!({ "colors": "black" })));
        assert_eq!(scalar_over_map, theme(json!({ "colors": "black" })));

        let map_over_scalar = merge(
            &scalar_over_map,
            &theme(json!({ "colors": { "primary": "red" } })),
        );
        assert_eq!(map_over_scalar, theme(json!({ "colors": { "primary": "red" } })));
    }

    #[test]
    fn test_null_patch_overwrites_but_keeps_key() {
        let base = theme(json!({ "colors": { "primary": "blue" } }));
        let merged = merge(&base, &theme(json!({ "colors": { "primary": null } })));

        assert_eq!(merged.get("colors.primary"), Some(&ThemeValue::Null));
    }

    #[test]
    fn test_sequential_merges_equal_merged_patch() {
        let base = theme(json!({ "colors": { "primary": "blue", "secondary": "red" } }));
        let first = theme(json!({ "colors": { "primary": "green", "grey0": "#393e42" } }));
        let second = theme(json!({ "colors": { "primary": "black" }, "fonts": { "ios": "System" } }));

        let sequential = merge(&merge(&base, &first), &second);
        let combined = merge(&base, &merge(&first, &second));

        assert_eq!(sequential, combined);
        assert_eq!(sequential.str_at("colors.primary").unwrap(), "black");
    }

    #[test]
    fn test_merge_in_place_reports_changes() {
        let mut base = theme(json!({ "colors": { "primary": "blue" } }));

        assert!(!merge_in_place(&mut base, &theme(json!({ "colors": { "primary": "blue" } }))));
        assert!(!merge_in_place(&mut base, &ThemeValue::empty()));
        assert!(merge_in_place(&mut base, &theme(json!({ "colors": { "accent": "gold" } }))));
        assert_eq!(base.str_at("colors.accent").unwrap(), "gold");
    }
}
