use std::collections::BTreeMap;

use crate::{Cell, Pos, World};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderedWorld {
    cells: BTreeMap<Pos, Cell>,
}

impl World for OrderedWorld {
    fn find(&self, pos: Pos) -> Option<&Cell> {
        self.cells.get(&pos)
    }

    fn find_mut(&mut self, pos: Pos) -> Option<&mut Cell> {
        self.cells.get_mut(&pos)
    }

    fn upsert(&mut self, cell: Cell) {
        self.cells.insert(cell.pos(), cell);
    }

    fn remove(&mut self, pos: Pos) -> bool {
        self.cells.remove(&pos).is_some()
    }

    fn cells(&self) -> Box<dyn Iterator<Item = &Cell> + '_> {
        Box::new(self.cells.values())
    }

    fn len(&self) -> usize {
        self.cells.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pos;

    #[test]
    fn upsert_replaces_whole_cell() {
        let mut world = OrderedWorld::default();
        world.upsert(Cell::alive(pos!(1, 1), 4));
        world.upsert(Cell::dead(pos!(1, 1), 2));
        assert_eq!(world.len(), 1);
        assert_eq!(world.find(pos!(1, 1)), Some(&Cell::dead(pos!(1, 1), 2)));
    }

    #[test]
    fn remove_reports_presence() {
        let mut world = OrderedWorld::default();
        world.upsert(Cell::alive(pos!(0, 0), 0));
        assert!(world.remove(pos!(0, 0)));
        assert!(!world.remove(pos!(0, 0)));
        assert!(world.is_empty());
        assert_eq!(world.find(pos!(0, 0)), None);
    }

    #[test]
    fn cells_come_out_in_address_order() {
        let mut world = OrderedWorld::default();
        for p in [pos!(2, 0), pos!(-5, 9), pos!(0, 1), pos!(0, -1)] {
            world.upsert(Cell::dead(p, 1));
        }
        let order: Vec<_> = world.cells().map(Cell::pos).collect();
        assert_eq!(order, vec![pos!(-5, 9), pos!(0, -1), pos!(0, 1), pos!(2, 0)]);
    }

    #[test]
    fn find_mut_edits_in_place() {
        let mut world = OrderedWorld::default();
        world.upsert(Cell::dead(pos!(3, 3), 1));
        if let Some(cell) = world.find_mut(pos!(3, 3)) {
            *cell.neighbor_count_mut() += 1;
            cell.set_alive(true);
        }
        assert_eq!(world.find(pos!(3, 3)), Some(&Cell::alive(pos!(3, 3), 2)));
    }
}
