use std::hash::BuildHasherDefault;
use indexmap::{IndexMap, IndexSet};
use rustc_hash::FxHasher;


/// Use indexmap for stable insertion order and rustc_hash for fast hashing
pub type FxIndexMap<K, V> = IndexMap<K, V, BuildHasherDefault<FxHasher>>;

/// Insertion-ordered set, used where callers need to see the order things were added
pub type FxIndexSet<T> = IndexSet<T, BuildHasherDefault<FxHasher>>;
