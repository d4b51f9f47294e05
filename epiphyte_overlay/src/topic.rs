// Copyright 2026 the Epiphyte Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Change topics: named triggers for overlay reconciliation.

use core::fmt;
use core::ops::{BitOr, BitOrAssign};

/// Identifies one observable input of the overlay pipeline.
///
/// Every [`OverlayModel`](crate::OverlayModel) property has a topic, as do
/// the three viewer-context inputs ([`Topic::ZOOM`], [`Topic::THEME`],
/// [`Topic::LAYERS`]). The controller's dispatch table maps topics to
/// recompute passes; a topic it does not know is a silent no-op.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Topic(u8);

impl Topic {
    /// Whole-node visibility changed.
    pub const VISIBLE: Self = Self::new(0);
    /// Whole-node opacity changed.
    pub const OPACITY: Self = Self::new(1);
    /// Paint order changed.
    pub const ORDER: Self = Self::new(2);
    /// Anchor position changed.
    pub const POSITION: Self = Self::new(3);
    /// The explicit-color flag changed.
    pub const COLORED: Self = Self::new(4);
    /// The explicit color changed.
    pub const COLOR: Self = Self::new(5);
    /// Background box visibility changed.
    pub const BOX: Self = Self::new(6);
    /// Background box color changed.
    pub const BOX_COLOR: Self = Self::new(7);
    /// Text font size changed.
    pub const FONT_SIZE: Self = Self::new(8);
    /// The explicit scale length changed.
    pub const LENGTH: Self = Self::new(9);
    /// The scale unit changed.
    pub const UNIT: Self = Self::new(10);
    /// Tick-mark visibility changed.
    pub const TICKS: Self = Self::new(11);
    /// Camera zoom changed.
    pub const ZOOM: Self = Self::new(12);
    /// The active theme changed.
    pub const THEME: Self = Self::new(13);
    /// The layer list mutated (add/remove/visibility/rename).
    pub const LAYERS: Self = Self::new(14);

    /// Creates a topic with the given index.
    ///
    /// # Panics
    ///
    /// Panics if `index` does not fit [`TopicSet::CAPACITY`].
    #[must_use]
    pub const fn new(index: u8) -> Self {
        assert!(
            (index as u32) < TopicSet::CAPACITY,
            "topic index out of range for the set capacity"
        );
        Self(index)
    }

    /// Converts this topic into a single-element [`TopicSet`].
    #[must_use]
    pub const fn into_set(self) -> TopicSet {
        TopicSet { bits: 1 << self.0 }
    }

    const fn name(self) -> Option<&'static str> {
        Some(match self {
            Self::VISIBLE => "VISIBLE",
            Self::OPACITY => "OPACITY",
            Self::ORDER => "ORDER",
            Self::POSITION => "POSITION",
            Self::COLORED => "COLORED",
            Self::COLOR => "COLOR",
            Self::BOX => "BOX",
            Self::BOX_COLOR => "BOX_COLOR",
            Self::FONT_SIZE => "FONT_SIZE",
            Self::LENGTH => "LENGTH",
            Self::UNIT => "UNIT",
            Self::TICKS => "TICKS",
            Self::ZOOM => "ZOOM",
            Self::THEME => "THEME",
            Self::LAYERS => "LAYERS",
            _ => return None,
        })
    }
}

impl fmt::Debug for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "Topic({})", self.0),
        }
    }
}

/// A set of pending [`Topic`]s, collected between update cycles.
///
/// Duplicate notifications within one cycle collapse into a single
/// membership; the recompute passes they trigger are idempotent, so the
/// collapse is lossless.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct TopicSet {
    bits: u64,
}

impl TopicSet {
    /// The number of distinct topic indices a set can hold.
    pub const CAPACITY: u32 = u64::BITS;

    /// Creates an empty topic set.
    #[must_use]
    pub const fn empty() -> Self {
        Self { bits: 0 }
    }

    /// Returns `true` if this set contains no topics.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Returns `true` if this set contains the given topic.
    #[must_use]
    pub const fn contains(self, topic: Topic) -> bool {
        (self.bits >> topic.0) & 1 == 1
    }

    /// Inserts a topic into the set.
    pub fn insert(&mut self, topic: Topic) {
        self.bits |= 1 << topic.0;
    }

    /// Returns the number of topics in the set.
    #[must_use]
    pub const fn len(self) -> u32 {
        self.bits.count_ones()
    }

    /// Returns an iterator over the topics in ascending index order.
    #[must_use]
    pub const fn iter(self) -> TopicSetIter {
        TopicSetIter {
            remaining: self.bits,
            cursor: 0,
        }
    }
}

impl fmt::Debug for TopicSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl BitOr for TopicSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self {
            bits: self.bits | rhs.bits,
        }
    }
}

impl BitOrAssign for TopicSet {
    fn bitor_assign(&mut self, rhs: Self) {
        self.bits |= rhs.bits;
    }
}

impl IntoIterator for TopicSet {
    type Item = Topic;
    type IntoIter = TopicSetIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iterator over the topics in a [`TopicSet`], in ascending index
/// order.
///
/// Walks the set with an index cursor, shifting the remaining bits out
/// one position at a time.
#[derive(Clone, Debug)]
pub struct TopicSetIter {
    remaining: u64,
    cursor: u8,
}

impl Iterator for TopicSetIter {
    type Item = Topic;

    fn next(&mut self) -> Option<Self::Item> {
        while self.remaining != 0 {
            let hit = self.remaining & 1 == 1;
            let index = self.cursor;
            self.remaining >>= 1;
            self.cursor += 1;
            if hit {
                return Some(Topic(index));
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let count = self.remaining.count_ones() as usize;
        (count, Some(count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_contains() {
        let mut set = TopicSet::empty();
        assert!(set.is_empty());

        set.insert(Topic::ZOOM);
        set.insert(Topic::COLOR);
        assert!(set.contains(Topic::ZOOM));
        assert!(set.contains(Topic::COLOR));
        assert!(!set.contains(Topic::BOX));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn duplicate_insert_collapses() {
        let mut set = TopicSet::empty();
        set.insert(Topic::LAYERS);
        set.insert(Topic::LAYERS);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn union_combines_sets() {
        let set = Topic::ZOOM.into_set() | Topic::THEME.into_set();
        assert!(set.contains(Topic::ZOOM));
        assert!(set.contains(Topic::THEME));
        assert!(!set.contains(Topic::LAYERS));
    }

    #[test]
    fn iteration_is_in_index_order() {
        let set = Topic::FONT_SIZE.into_set() | Topic::BOX.into_set() | Topic::LAYERS.into_set();
        let topics: Vec<_> = set.iter().collect();
        assert_eq!(topics, [Topic::BOX, Topic::FONT_SIZE, Topic::LAYERS]);
    }

    #[test]
    fn debug_names_known_topics() {
        assert_eq!(format!("{:?}", Topic::BOX_COLOR), "BOX_COLOR");
        assert_eq!(format!("{:?}", Topic::new(40)), "Topic(40)");
        let set = Topic::ZOOM.into_set() | Topic::THEME.into_set();
        assert_eq!(format!("{set:?}"), "{ZOOM, THEME}");
    }

    #[test]
    #[should_panic(expected = "topic index out of range")]
    fn topic_index_beyond_capacity_panics() {
        let _ = Topic::new(64);
    }
}
