//! Static bitmask → button-name table.
//!
//! The map drives both diffing and event ordering: simultaneous edges in one
//! frame are emitted in map entry order, not bit-position order, so the order
//! entries are added in is part of the observable contract.
//!
//! Masks should be pairwise disjoint single bits; the detector only requires
//! that each mask be testable independently with a bitwise AND.

use serde::{Deserialize, Serialize};

/// One mask/name pair in the map.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonDesc {
    /// Power-of-two bit within the state byte.
    pub mask: u8,
    /// Human-facing button identifier, e.g. `"LISTEN"`.
    pub name: String,
}

/// Ordered mask → name mapping.
///
/// Backed by a `Vec` so iteration order is insertion order, which keeps the
/// emitted event order deterministic.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonMap(Vec<ButtonDesc>);

impl ButtonMap {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Map of the Olympus RS24 handset this crate grew up on: LISTEN, REW, FF.
    pub fn rs24_default() -> Self {
        let mut map = Self::new();
        map.add(0x02, "LISTEN");
        map.add(0x04, "REW");
        map.add(0x08, "FF");
        map
    }

    /// Appends a mask/name entry. Order of calls is the emission order.
    pub fn add(&mut self, mask: u8, name: impl Into<String>) -> &mut Self {
        self.0.push(ButtonDesc {
            mask,
            name: name.into(),
        });
        self
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &ButtonDesc> {
        self.0.iter()
    }

    /// Button names in map order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|b| b.name.as_str())
    }
}

impl FromIterator<(u8, String)> for ButtonMap {
    fn from_iter<I: IntoIterator<Item = (u8, String)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(mask, name)| ButtonDesc { mask, name })
                .collect(),
        )
    }
}
