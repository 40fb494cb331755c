//! An insertion-ordered index of distinct items.

use std::hash::Hash;

use rustc_hash::FxHashMap;

#[derive(Debug, Clone)]
pub struct Lookup<T: Eq + Hash> {
    item_to_index: FxHashMap<T, usize>,
    index_to_item: Vec<T>,
}
impl<T: Eq + Hash> Lookup<T> {
    pub fn with_capacity(capacity: usize) -> Self {
        let item_to_index = FxHashMap::with_capacity_and_hasher(capacity, Default::default());
        let index_to_item = Vec::with_capacity(capacity);
        Self {
            item_to_index,
            index_to_item,
        }
    }

    /// Obtains the index of `item`, appending it first if it hasn't been seen before.
    pub fn index_or_push(&mut self, item: T) -> usize
    where
        T: Clone,
    {
        if let Some(&index) = self.item_to_index.get(&item) {
            return index;
        }
        let index = self.index_to_item.len();
        self.item_to_index.insert(item.clone(), index);
        self.index_to_item.push(item);
        index
    }

    pub fn index_of(&self, item: &T) -> Option<usize> {
        self.item_to_index.get(item).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.index_to_item.iter()
    }

    pub fn len(&self) -> usize {
        self.index_to_item.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index_to_item.is_empty()
    }
}

impl<T: Eq + Hash> Default for Lookup<T> {
    fn default() -> Self {
        Self::with_capacity(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preserves_insertion_order() {
        let mut lookup = Lookup::default();
        assert!(lookup.is_empty());
        assert_eq!(0, lookup.index_or_push("RU"));
        assert_eq!(1, lookup.index_or_push("SA"));
        assert_eq!(0, lookup.index_or_push("RU"));
        assert_eq!(2, lookup.len());
        assert_eq!(vec![&"RU", &"SA"], lookup.iter().collect::<Vec<_>>());
        assert_eq!(Some(1), lookup.index_of(&"SA"));
        assert_eq!(None, lookup.index_of(&"EG"));
    }
}
