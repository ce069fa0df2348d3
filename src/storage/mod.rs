//! Utilities for treating the backing storage for trees generically.
//!
//! This module is home for the following items:
//! - [`Storage`], the trait for the arenas which hold the nodes of a tree
//! - [`SparseVec`], a `Vec`-backed arena which turns removed elements into reusable holes instead of shifting the elements after them
//! - [`DefaultStorage`], the arena used by trees unless a different one is specified
//!
//! Trees never link their nodes with pointers. Every link (child slot, parent back-reference) is a key into the storage, so a node is only ever *owned* by the storage and removing it from there is what drops it.
//!
//! [`Storage`]: trait.Storage.html " "
//! [`SparseVec`]: struct.SparseVec.html " "
//! [`DefaultStorage`]: type.DefaultStorage.html " "

mod sparse;
pub use sparse::{SparseVec, Slot as SparseVecSlot};

use core::fmt::Debug;

/// Trait for various kinds of containers which can be the backing storage for trees.
///
/// Implementors must uphold the following, which the trees rely on for correctness:
/// - `new` and `with_capacity` return empty storages;
/// - a key returned by `add` stays valid, and keeps addressing the same element, until that element is removed;
/// - `remove` never moves other elements to different keys.
pub trait Storage: Sized {
    /// The type used for element naming.
    type Key: Clone + Debug + Eq;
    /// The type of the elements stored.
    type Element;

    /// Adds an element to the collection with an unspecified key, returning that key.
    fn add(&mut self, element: Self::Element) -> Self::Key;
    /// Removes and returns the element identified by `key` within the storage.
    ///
    /// # Panics
    /// Required to panic if the specified key does not exist.
    fn remove(&mut self, key: &Self::Key) -> Self::Element;
    /// Returns the number of elements in the storage, also referred to as its 'length'.
    fn len(&self) -> usize;
    /// Creates an empty storage with the specified capacity.
    fn with_capacity(capacity: usize) -> Self;
    /// Returns a reference to the specified element in the collection, or `None` if the key is not present in the storage.
    fn get(&self, key: &Self::Key) -> Option<&Self::Element>;
    /// Returns a *mutable* reference to the specified element in the collection, or `None` if the key is not present in the storage.
    fn get_mut(&mut self, key: &Self::Key) -> Option<&mut Self::Element>;
    /// Removes all elements from the storage. Keys handed out before the call become invalid.
    fn clear(&mut self);

    /// Returns `true` if the specified key is present in the storage, `false` otherwise.
    #[inline]
    fn contains_key(&self, key: &Self::Key) -> bool {
        self.get(key).is_some()
    }
    /// Creates a new empty storage. Dynamically-allocated storages created this way do not allocate memory.
    #[inline(always)]
    fn new() -> Self {
        Self::with_capacity(0)
    }
    /// Returns `true` if the storage contains no elements, `false` otherwise.
    #[inline(always)]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// Returns the amount of elements the storage can hold without requiring a memory allocation.
    ///
    /// The default implementation returns the length, which is correct for storages with a fixed capacity.
    #[inline(always)]
    fn capacity(&self) -> usize {
        self.len()
    }
    /// Reserves capacity for at least `additional` more elements. Does nothing if capacity is already sufficient.
    ///
    /// The default implementation does nothing.
    #[inline(always)]
    fn reserve(&mut self, _additional: usize) {}
    /// Shrinks the capacity of the storage as much as possible.
    ///
    /// The default implementation does nothing.
    #[inline(always)]
    fn shrink_to_fit(&mut self) {}
}

/// The default storage type used by the tree types when a storage type is not provided.
pub type DefaultStorage<T> = SparseVec<T>;
