//! Transition table for B3/S23.

use crate::Cell;

const TABLE_LEN: usize = 25;

/// Next liveness indexed by [`Cell::lookup_key`].
///
/// Low nibble is the neighbor count, bit 4 is the current liveness.
/// Keys 9..=15 would need more than eight neighbors and stay dead.
pub struct RuleTable {
    table: [bool; TABLE_LEN],
}

impl RuleTable {
    pub const B3S23: Self = Self::new();

    pub const fn new() -> Self {
        let mut table = [false; TABLE_LEN];
        let mut key = 0;
        while key < TABLE_LEN {
            table[key] = output_for(key);
            key += 1;
        }
        Self { table }
    }

    #[inline(always)]
    pub fn lookup(&self, key: usize) -> bool {
        self.table[key]
    }

    pub fn next_alive(&self, cell: &Cell) -> bool {
        self.lookup(cell.lookup_key())
    }
}

const fn output_for(key: usize) -> bool {
    let alive = key & 0x10 != 0;
    let neighbors = key & 0x0F;
    if alive {
        neighbors == 2 || neighbors == 3
    } else {
        neighbors == 3
    }
}
