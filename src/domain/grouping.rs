//! Ordered grouping of a list by one key.
//!
//! Every screen that partitions a list (channels by app, contacts by app,
//! category chips per app) goes through [`group_by`] so the ordering rules
//! are the same everywhere: groups appear in order of the first item that
//! produced their key, and items keep their original order inside a group.

use std::collections::HashMap;
use std::hash::Hash;

/// One group produced by [`group_by`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group<K, T> {
    pub key: K,
    pub items: Vec<T>,
}

impl<K, T> Group<K, T> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Partition `items` by `key_fn` in a single pass.
pub fn group_by<I, K, F>(items: I, mut key_fn: F) -> Vec<Group<K, I::Item>>
where
    I: IntoIterator,
    K: Eq + Hash + Clone,
    F: FnMut(&I::Item) -> K,
{
    let mut groups: Vec<Group<K, I::Item>> = Vec::new();
    let mut positions: HashMap<K, usize> = HashMap::new();

    for item in items {
        let key = key_fn(&item);
        match positions.get(&key) {
            Some(&idx) => groups[idx].items.push(item),
            None => {
                positions.insert(key.clone(), groups.len());
                groups.push(Group {
                    key,
                    items: vec![item],
                });
            }
        }
    }

    groups
}

/// Distinct keys in first-appearance order.
pub fn distinct_keys<I, K, F>(items: I, key_fn: F) -> Vec<K>
where
    I: IntoIterator,
    K: Eq + Hash + Clone,
    F: FnMut(&I::Item) -> K,
{
    group_by(items, key_fn).into_iter().map(|g| g.key).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_group_order_follows_first_appearance() {
        let items = vec![("a", 1), ("b", 2), ("a", 3), ("c", 4), ("b", 5)];
        let groups = group_by(items, |(k, _)| *k);

        let keys: Vec<&str> = groups.iter().map(|g| g.key).collect();
        assert_eq!(keys, vec!["a", "b", "c"]);
        assert_eq!(groups[0].items, vec![("a", 1), ("a", 3)]);
        assert_eq!(groups[1].items, vec![("b", 2), ("b", 5)]);
        assert_eq!(groups[2].len(), 1);
    }

    #[test]
    fn test_empty_input() {
        let groups = group_by(Vec::<u32>::new(), |n| *n % 2);
        assert!(groups.is_empty());
    }

    #[test]
    fn test_borrowed_items() {
        let words = ["apple", "avocado", "banana"];
        let groups = group_by(words.iter(), |w| w.chars().next());
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].key, Some('a'));
        assert_eq!(groups[0].items, vec![&"apple", &"avocado"]);
    }

    #[test]
    fn test_distinct_keys() {
        let keys = distinct_keys([3, 1, 3, 2, 1], |n| *n);
        assert_eq!(keys, vec![3, 1, 2]);
    }
}
