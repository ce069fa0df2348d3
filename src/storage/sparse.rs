use core::{mem, num::NonZeroUsize};
use alloc::vec::Vec;
use super::Storage;

static HOLE_PANIC_MSG: &str = "\
the element at the specified key was a hole in the sparse storage";

/// A `Vec`-backed arena which leaves holes behind removed elements.
///
/// Removing an element replaces it with a hole instead of shifting everything after it, so the keys of the remaining elements never change. Holes are chained into a list and refilled by `add` before the vector is grown again, which keeps the memory of long-lived trees with frequent removals bounded by their peak size.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct SparseVec<T> {
    slots: Vec<Slot<T>>,
    /// Length, first hole, last hole
    hole_list: Option<(NonZeroUsize, usize, usize)>,
}
impl<T> SparseVec<T> {
    /// Returns the number of holes in the storage. This operation returns immediately instead of looping through the entire storage, since the storage tracks the number of holes it creates and fills.
    #[inline(always)]
    pub fn num_holes(&self) -> usize {
        self.hole_list.map_or(0, |x| x.0.get())
    }
    /// Returns `true` if there are no holes in the storage, `false` otherwise.
    #[inline(always)]
    pub fn is_dense(&self) -> bool {
        self.num_holes() == 0
    }
    /// Returns an iterator over the keys and elements of the storage, skipping holes, in key order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &T)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(key, slot)| slot.element().map(|x| (key, x)))
    }

    /// Turns the element at `index` into a hole appended to the hole list, returning the element or `None` if it already was a hole.
    fn punch_hole(&mut self, index: usize) -> Option<T> {
        let element = self.slots.get_mut(index)?.take()?;
        if let Some(hole_info) = &mut self.hole_list {
            let old_end = hole_info.2;
            self.slots[old_end].set_hole_link(Some(index));
            hole_info.0 = NonZeroUsize::new(hole_info.0.get() + 1)
                .expect("hole count overflowed");
            hole_info.2 = index;
        } else {
            self.hole_list = Some((
                NonZeroUsize::new(1).expect("one is not zero"),
                index, // List starts from the hole we just punched...
                index, // ...and ends with it
            ));
        }
        Some(element)
    }
}
impl<T> Storage for SparseVec<T> {
    type Key = usize;
    type Element = T;

    fn add(&mut self, element: T) -> usize {
        if let Some(hole_info) = &mut self.hole_list {
            let used_hole_index = hole_info.1;
            let hole = &mut self.slots[used_hole_index];
            let next_hole = hole.hole_link();
            *hole = Slot::Element(element);
            if let Some(new_hole_count) = NonZeroUsize::new(hole_info.0.get() - 1) {
                hole_info.0 = new_hole_count;
                hole_info.1 = next_hole.expect("hole list ended before the hole count ran out");
            } else {
                self.hole_list = None;
            }
            used_hole_index
        } else {
            self.slots.push(Slot::Element(element));
            self.slots.len() - 1
        }
    }
    #[track_caller]
    fn remove(&mut self, key: &usize) -> T {
        assert!(self.slots.len() > *key, "key out of bounds");
        self.punch_hole(*key).expect(HOLE_PANIC_MSG)
    }
    #[inline]
    fn len(&self) -> usize {
        self.slots.len() - self.num_holes()
    }
    #[inline]
    fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            hole_list: None,
        }
    }
    #[inline]
    fn get(&self, key: &usize) -> Option<&T> {
        self.slots.get(*key).and_then(Slot::element)
    }
    #[inline]
    fn get_mut(&mut self, key: &usize) -> Option<&mut T> {
        self.slots.get_mut(*key).and_then(Slot::element_mut)
    }
    #[inline]
    fn clear(&mut self) {
        self.slots.clear();
        self.hole_list = None;
    }
    #[inline(always)]
    fn capacity(&self) -> usize {
        self.slots.capacity()
    }
    #[inline(always)]
    fn reserve(&mut self, additional: usize) {
        // Holes are reused first, so only the part which does not fit into them needs memory
        self.slots.reserve(additional.saturating_sub(self.num_holes()))
    }
    #[inline(always)]
    fn shrink_to_fit(&mut self) {
        self.slots.shrink_to_fit()
    }
}

/// A slot inside a [`SparseVec`]: either an element or a hole linking to the next hole.
///
/// Only exposed so that the storage's layout can be named; there is nothing to do with it outside of the storage.
///
/// [`SparseVec`]: struct.SparseVec.html " "
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Slot<T> {
    /// A value in the slot.
    Element(T),
    /// A hole, with an index to the next one.
    Hole(Option<usize>),
}
impl<T> Slot<T> {
    #[inline]
    fn element(&self) -> Option<&T> {
        match self {
            Self::Element(x) => Some(x),
            Self::Hole(..) => None,
        }
    }
    #[inline]
    fn element_mut(&mut self) -> Option<&mut T> {
        match self {
            Self::Element(x) => Some(x),
            Self::Hole(..) => None,
        }
    }
    #[inline]
    fn hole_link(&self) -> Option<usize> {
        match self {
            Self::Hole(x) => *x,
            Self::Element(..) => unreachable!("hole list pointed at an element"),
        }
    }
    #[inline]
    fn set_hole_link(&mut self, val: Option<usize>) {
        match self {
            Self::Hole(x) => *x = val,
            Self::Element(..) => unreachable!("hole list pointed at an element"),
        }
    }
    /// Replaces an element with an unlinked hole, returning the element, or returns `None` for holes.
    fn take(&mut self) -> Option<T> {
        match mem::replace(self, Self::Hole(None)) {
            Self::Element(x) => Some(x),
            hole @ Self::Hole(..) => {
                *self = hole;
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn holes_are_reused_in_removal_order() {
        let mut storage = SparseVec::new();
        let keys: Vec<usize> = (0..5).map(|x| storage.add(x)).collect();
        assert_eq!(keys, [0, 1, 2, 3, 4]);

        assert_eq!(storage.remove(&3), 3);
        assert_eq!(storage.remove(&1), 1);
        assert_eq!(storage.num_holes(), 2);
        assert_eq!(storage.len(), 3);
        assert_eq!(storage.get(&1), None);
        assert!(!storage.contains_key(&3));

        assert_eq!(storage.add(10), 3);
        assert_eq!(storage.add(11), 1);
        assert_eq!(storage.add(12), 5);
        assert!(storage.is_dense());
        assert_eq!(storage.get(&3), Some(&10));
        assert_eq!(storage.get(&2), Some(&2));
    }

    #[test]
    fn iter_skips_holes() {
        let mut storage = SparseVec::new();
        for x in 0..4 {
            storage.add(x * 10);
        }
        storage.remove(&0);
        storage.remove(&2);
        let live: Vec<(usize, &i32)> = storage.iter().collect();
        assert_eq!(live, [(1, &10), (3, &30)]);
    }

    #[test]
    #[should_panic]
    fn removing_a_hole_panics() {
        let mut storage = SparseVec::new();
        let key = storage.add('x');
        storage.remove(&key);
        storage.remove(&key);
    }

    #[test]
    fn clear_forgets_holes() {
        let mut storage = SparseVec::with_capacity(4);
        let key = storage.add("a");
        storage.add("b");
        storage.remove(&key);
        storage.clear();
        assert!(storage.is_empty());
        assert!(storage.is_dense());
        assert_eq!(storage.add("c"), 0);
    }
}
