//! Variation arena.
//!
//! Variations live in a flat `Vec` and refer to each other by [`VariationId`].
//! A variation either branches off the main line (no parent) or off a move of
//! another variation. Pruned slots stay as `None` so ids never shift.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::Move;

/// Handle of a variation inside a [`Game`](super::Game).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VariationId(pub(crate) usize);

impl VariationId {
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for VariationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A position in the move tree.
///
/// `MainLine(i)` and `Variation(id, i)` name the position *after* move `i`
/// (0-based) of that line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Node {
    Start,
    MainLine(usize),
    Variation(VariationId, usize),
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Start => write!(f, "start"),
            Node::MainLine(ply) => write!(f, "main:{ply}"),
            Node::Variation(id, idx) => write!(f, "var{id}:{idx}"),
        }
    }
}

/// An alternative move sequence.
///
/// Its first move replaces main-line move `start_ply`, or, when `parent` is
/// `Some((id, idx))`, move `idx` of variation `id`. A child shares its
/// parent's `start_ply`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Variation {
    pub(crate) start_ply: usize,
    pub(crate) parent: Option<(VariationId, usize)>,
    pub(crate) moves: Vec<Move>,
}

impl Variation {
    #[must_use]
    pub fn start_ply(&self) -> usize {
        self.start_ply
    }

    #[must_use]
    pub fn parent(&self) -> Option<(VariationId, usize)> {
        self.parent
    }

    #[must_use]
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }
}

#[derive(Clone, Debug, Default)]
pub(crate) struct VariationArena {
    slots: Vec<Option<Variation>>,
}

impl VariationArena {
    pub(crate) fn get(&self, id: VariationId) -> Option<&Variation> {
        self.slots.get(id.0).and_then(Option::as_ref)
    }

    pub(crate) fn get_mut(&mut self, id: VariationId) -> Option<&mut Variation> {
        self.slots.get_mut(id.0).and_then(Option::as_mut)
    }

    pub(crate) fn insert(&mut self, variation: Variation) -> VariationId {
        self.slots.push(Some(variation));
        VariationId(self.slots.len() - 1)
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (VariationId, &Variation)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(idx, slot)| slot.as_ref().map(|var| (VariationId(idx), var)))
    }

    /// Variations whose first move is played from `node`, i.e. alternatives
    /// to the move recorded after it.
    pub(crate) fn branching_at(&self, node: Node) -> impl Iterator<Item = VariationId> + '_ {
        self.iter()
            .map(|(id, _)| id)
            .filter(move |id| self.entry_node(*id) == Some(node))
    }

    /// Ancestors of `id`, outermost first, ending with `id` itself. Each entry
    /// carries how many of its moves to replay; `id` gets `count`.
    pub(crate) fn chain(&self, id: VariationId, count: usize) -> Option<Vec<(VariationId, usize)>> {
        let mut chain = vec![(id, count)];
        let mut current = self.get(id)?;
        while let Some((parent, at)) = current.parent {
            chain.push((parent, at));
            current = self.get(parent)?;
        }
        chain.reverse();
        Some(chain)
    }

    /// The node a variation's first move is played from.
    pub(crate) fn entry_node(&self, id: VariationId) -> Option<Node> {
        let var = self.get(id)?;
        match var.parent {
            None if var.start_ply == 0 => Some(Node::Start),
            None => Some(Node::MainLine(var.start_ply - 1)),
            Some((parent, 0)) => self.entry_node(parent),
            Some((parent, at)) => Some(Node::Variation(parent, at - 1)),
        }
    }

    /// Drop every variation branching at or after main-line ply `ply`,
    /// children included. Returns how many were removed.
    pub(crate) fn prune_from(&mut self, ply: usize) -> usize {
        let mut removed = 0;
        for slot in &mut self.slots {
            if slot.as_ref().is_some_and(|var| var.start_ply >= ply) {
                *slot = None;
                removed += 1;
            }
        }
        removed
    }
}
