//! Map merge primitives
//!
//! Two generic operations every layering step is built from:
//! - `overwrite_map`: combine two maps where the base's key set is
//!   authoritative and the overlay refines values
//! - `update_config_map`: refresh a cached partial view against an
//!   authoritative full view, touching only entries that actually changed

use std::collections::BTreeMap;

/// Merge `overlay` onto `base`.
///
/// Merge semantics:
/// - Keys present in both: value is `resolve(base_value, overlay_value)`
/// - Keys only in `base`: kept as-is
/// - Keys only in `overlay`: ignored (the base's key set is authoritative)
///
/// Passing `|_, overlay| overlay.clone()` makes the overlay win outright
/// for shared keys.
pub fn overwrite_map<K, V, F>(
    base: &BTreeMap<K, V>,
    overlay: &BTreeMap<K, V>,
    resolve: F,
) -> BTreeMap<K, V>
where
    K: Ord + Clone,
    V: Clone,
    F: Fn(&V, &V) -> V,
{
    base.iter()
        .map(|(key, base_value)| {
            let value = match overlay.get(key) {
                Some(overlay_value) => resolve(base_value, overlay_value),
                None => base_value.clone(),
            };
            (key.clone(), value)
        })
        .collect()
}

/// Refresh `partial` against an updated authoritative view.
///
/// For every key of `partial`:
/// - Authoritative value unchanged since `baseline`: keep the partial's own
///   value untouched
/// - Authoritative value changed: take the authoritative value
/// - Key dropped from the authoritative view: drop it here too
///
/// Keys absent from `partial` are never added, so the view cannot grow.
pub fn update_config_map<K, V>(
    authoritative: &BTreeMap<K, V>,
    baseline: &BTreeMap<K, V>,
    partial: &BTreeMap<K, V>,
) -> BTreeMap<K, V>
where
    K: Ord + Clone,
    V: Clone + PartialEq,
{
    partial
        .iter()
        .filter_map(|(key, partial_value)| {
            let authoritative_value = authoritative.get(key);
            if authoritative_value == baseline.get(key) {
                Some((key.clone(), partial_value.clone()))
            } else {
                authoritative_value.map(|value| (key.clone(), value.clone()))
            }
        })
        .collect()
}
