use std::collections::{btree_map, hash_map, BTreeMap, HashMap};

/// A key-value container whose sequence view is its keys.
///
/// `IntoIterator` on the std maps yields `(key, value)` pairs, so accessors
/// receive maps through [`keys()`] instead.
pub trait Mapping {
    type Key;
    type Keys: Iterator<Item = Self::Key>;

    fn into_key_iter(self) -> Self::Keys;
}

/// Sequence of the keys of `map`.
///
/// Borrowed maps yield `&K`, owned maps yield `K`.
pub fn keys<M: Mapping>(map: M) -> M::Keys {
    map.into_key_iter()
}

impl<K, V, S> Mapping for HashMap<K, V, S> {
    type Key = K;
    type Keys = hash_map::IntoKeys<K, V>;

    fn into_key_iter(self) -> Self::Keys {
        self.into_keys()
    }
}

impl<'a, K, V, S> Mapping for &'a HashMap<K, V, S> {
    type Key = &'a K;
    type Keys = hash_map::Keys<'a, K, V>;

    fn into_key_iter(self) -> Self::Keys {
        self.keys()
    }
}

impl<K, V> Mapping for BTreeMap<K, V> {
    type Key = K;
    type Keys = btree_map::IntoKeys<K, V>;

    fn into_key_iter(self) -> Self::Keys {
        self.into_keys()
    }
}

impl<'a, K, V> Mapping for &'a BTreeMap<K, V> {
    type Key = &'a K;
    type Keys = btree_map::Keys<'a, K, V>;

    fn into_key_iter(self) -> Self::Keys {
        self.keys()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::*;
    use assert_matches::*;
    use maplit::{btreemap, hashmap};

    #[test]
    fn single_of_a_mapping_is_its_key() {
        let map = hashmap! { "test" => "testval" };
        assert_matches!(crate::single(keys(&map)), Ok(&"test"));
        assert_matches!(crate::single_or_default(keys(&map), &"default"), Ok(&"test"));
        assert_matches!(crate::single(keys(map)), Ok("test"));
    }

    #[test]
    fn mapping_cardinality_rules_match_sequences() {
        let empty: HashMap<String, i32> = HashMap::new();
        assert_matches!(
            crate::single(keys(&empty)),
            Err(e) if e.message() == SINGLE_NONE
        );

        let two = btreemap! { 1 => "one", 2 => "two" };
        assert_matches!(
            crate::single(keys(&two)),
            Err(e) if e.message() == SINGLE_MANY
        );
    }

    #[test]
    fn btree_keys_come_in_key_order() {
        let map = btreemap! { "b" => 2, "a" => 1, "c" => 3 };
        assert_eq!(Ok(&"a"), crate::first(keys(&map)));
        assert_eq!(Ok(&"c"), crate::last(keys(&map)));
        assert_eq!(Some("a"), crate::first_or_none(keys(map)));
    }
}
