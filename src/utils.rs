use std::ops::Add;

/// Address of a cell on the unbounded grid.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub struct Pos {
    pub x: i64,
    pub y: i64,
}

#[macro_export]
macro_rules! pos {
    ($x:expr, $y:expr) => {
        $crate::Pos { x: $x, y: $y }
    };
}

/// Moore neighborhood, clockwise from the upper-left corner.
pub const NEIGHBOR_OFFSETS: [Pos; 8] = [
    pos!(-1, -1),
    pos!(0, -1),
    pos!(1, -1),
    pos!(1, 0),
    pos!(1, 1),
    pos!(0, 1),
    pos!(-1, 1),
    pos!(-1, 0),
];

impl Pos {
    /// `None` when the sum falls outside the `i64` plane.
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        Some(pos!(self.x.checked_add(rhs.x)?, self.y.checked_add(rhs.y)?))
    }

    /// Neighbor addresses in clockwise order. The plane ends at the `i64`
    /// bounds, so cells on an edge have fewer than eight.
    pub fn neighbors(self) -> impl Iterator<Item = Pos> {
        NEIGHBOR_OFFSETS
            .into_iter()
            .filter_map(move |offset| self.checked_add(offset))
    }
}

impl Add for Pos {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        pos!(self.x + rhs.x, self.y + rhs.y)
    }
}
