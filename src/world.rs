use crate::Pos;

/// A tracked cell: its address, liveness and the cached count of live neighbors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pos: Pos,
    alive: bool,
    neighbor_count: u8,
}

impl Cell {
    pub fn alive(pos: Pos, neighbor_count: u8) -> Self {
        Self {
            pos,
            alive: true,
            neighbor_count,
        }
    }

    pub fn dead(pos: Pos, neighbor_count: u8) -> Self {
        Self {
            pos,
            alive: false,
            neighbor_count,
        }
    }

    pub fn pos(&self) -> Pos {
        self.pos
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn neighbor_count(&self) -> u8 {
        self.neighbor_count
    }

    pub fn set_alive(&mut self, alive: bool) {
        self.alive = alive;
    }

    pub(crate) fn neighbor_count_mut(&mut self) -> &mut u8 {
        &mut self.neighbor_count
    }

    /// Packs liveness and neighbor count into the 5-bit rule table key.
    pub fn lookup_key(&self) -> usize {
        ((self.alive as usize) << 4) | (self.neighbor_count as usize & 0x0F)
    }
}

/// Keyed storage of one generation's tracked cells.
///
/// The store does no validation of its own; the tracked-set invariants are
/// maintained by [`crate::Grid`]. Do not mutate while iterating [`World::cells`].
pub trait World: Default + Clone {
    fn find(&self, pos: Pos) -> Option<&Cell>;
    fn find_mut(&mut self, pos: Pos) -> Option<&mut Cell>;
    /// Inserts the cell, replacing whatever was tracked at its address.
    fn upsert(&mut self, cell: Cell);
    fn remove(&mut self, pos: Pos) -> bool;
    /// Every tracked cell, ordered by address.
    fn cells(&self) -> Box<dyn Iterator<Item = &Cell> + '_>;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub use ordered_world::OrderedWorld;
mod ordered_world;
