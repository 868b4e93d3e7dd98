/// Pair every key with the metadata slot at the same position
///
/// `meta` may be shorter than `keys` (or missing altogether); keys past its
/// end are merged with `None`. Extra slots are ignored. Key order is kept and
/// nothing is dropped.
pub fn merge_meta<K, M, T, F>(keys: Option<&[K]>, meta: Option<&[Option<M>]>, mut merge: F) -> Vec<T>
where
    F: FnMut(&K, Option<&M>) -> T,
{
    keys.unwrap_or_default()
        .iter()
        .enumerate()
        .map(|(i, key)| {
            let slot = meta.and_then(|slots| slots.get(i)).and_then(Option::as_ref);
            merge(key, slot)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(keys: Option<&[&str]>, meta: Option<&[Option<u32>]>) -> Vec<(String, Option<u32>)> {
        merge_meta(keys, meta, |key, meta| (key.to_string(), meta.copied()))
    }

    #[test]
    fn test_shorter_meta_pads_with_none() {
        let keys = ["あ", "い", "う", "え"];
        let meta = [Some(1), None];

        for m in 0..=meta.len() {
            let merged = pairs(Some(&keys[..]), Some(&meta[..m]));
            assert_eq!(merged.len(), keys.len());
            for (i, (key, value)) in merged.iter().enumerate() {
                assert_eq!(key, keys[i]);
                if i >= m {
                    assert_eq!(*value, None);
                }
            }
        }
    }

    #[test]
    fn test_sentinel_slot_is_none() {
        let merged = pairs(Some(&["あ", "い"][..]), Some(&[None, Some(7)][..]));
        assert_eq!(
            merged,
            vec![("あ".to_string(), None), ("い".to_string(), Some(7))]
        );
    }

    #[test]
    fn test_missing_meta() {
        let merged = pairs(Some(&["あ", "い"][..]), None);
        assert!(merged.iter().all(|(_, meta)| meta.is_none()));
        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn test_missing_keys() {
        assert!(pairs(None, Some(&[Some(1)][..])).is_empty());
    }

    #[test]
    fn test_extra_meta_ignored() {
        let merged = pairs(Some(&["あ"][..]), Some(&[Some(1), Some(2), Some(3)][..]));
        assert_eq!(merged, vec![("あ".to_string(), Some(1))]);
    }
}
