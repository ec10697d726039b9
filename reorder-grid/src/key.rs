#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

#[cfg(feature = "std")]
pub(crate) type KeyMap<K, V> = HashMap<K, V>;
#[cfg(not(feature = "std"))]
pub(crate) type KeyMap<K, V> = BTreeMap<K, V>;

/// Bounds required of a stable item key.
///
/// With `std`, keys are hashed. Without it, keys are ordered (`BTreeMap`).
#[cfg(feature = "std")]
pub trait GridKey: core::hash::Hash + Eq + Clone {}
#[cfg(feature = "std")]
impl<K: core::hash::Hash + Eq + Clone> GridKey for K {}

#[cfg(not(feature = "std"))]
pub trait GridKey: Ord + Clone {}
#[cfg(not(feature = "std"))]
impl<K: Ord + Clone> GridKey for K {}
