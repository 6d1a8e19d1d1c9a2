use std::collections::HashMap;

use metrohash::MetroBuildHasher;
use tracing::{debug, trace};

use crate::{rules::RuleTable, Cell, InvariantViolation, OrderedWorld, Pos, World};

/// Sparse Life grid tracking live cells and their dead frontier.
///
/// Two buffers hold the tracked set; `current` is read while `next` is
/// written, and they are mirrors of each other between calls to
/// [`Grid::advance_generation`].
#[derive(Debug, Clone)]
pub struct Grid<W = OrderedWorld>
where
    W: World,
{
    buffers: [W; 2],
    current: usize,
    generation: u64,
    population: usize,
}

impl Grid<OrderedWorld> {
    pub fn new(actives: impl IntoIterator<Item = Pos>) -> Self {
        Self::seed(actives)
    }
}

impl<W> Grid<W>
where
    W: World,
{
    /// Builds the tracked set from live addresses. Duplicates collapse.
    ///
    /// Any `i64` address is accepted. Nothing exists past the edge of the
    /// plane, so edge cells simply have fewer neighbors; there is no wrapping.
    pub fn seed(actives: impl IntoIterator<Item = Pos>) -> Self {
        let mut world = W::default();
        for pos in actives {
            world.upsert(Cell::alive(pos, 0));
        }

        let lives: Vec<Pos> = world.cells().map(Cell::pos).collect();
        let mut frontier: HashMap<Pos, u8, MetroBuildHasher> = HashMap::default();
        for &pos in &lives {
            for neighbor in pos.neighbors() {
                if let Some(cell) = world.find_mut(neighbor) {
                    *cell.neighbor_count_mut() += 1;
                } else {
                    *frontier.entry(neighbor).or_insert(0) += 1;
                }
            }
        }
        // applied only once the traversal above is done
        for (pos, count) in frontier {
            world.upsert(Cell::dead(pos, count));
        }

        debug!(population = lives.len(), tracked = world.len(), "seeded grid");
        Self {
            buffers: [world.clone(), world],
            current: 0,
            generation: 0,
            population: lives.len(),
        }
    }

    /// Number of completed generations.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> usize {
        self.population
    }

    /// Size of the tracked set, live cells and frontier together.
    pub fn tracked(&self) -> usize {
        self.current().len()
    }

    fn current(&self) -> &W {
        &self.buffers[self.current]
    }

    fn next_mut(&mut self) -> &mut W {
        &mut self.buffers[self.current ^ 1]
    }

    /// Advances every tracked cell by exactly one generation.
    ///
    /// # Panics
    ///
    /// Panics if the tracked set turns out to be corrupted, which only a
    /// defect in the engine can cause.
    pub fn advance_generation(&mut self) {
        let changes = Changes::collect(self.current());

        if let Err(violation) = changes.apply(self.next_mut()) {
            panic!("generation {}: {violation}", self.generation + 1);
        }
        self.current ^= 1;
        // bring the old current up to date so both buffers mirror again
        if let Err(violation) = changes.apply(self.next_mut()) {
            panic!("generation {}: {violation}", self.generation + 1);
        }

        self.generation += 1;
        self.population = self.population + changes.births.len() - changes.deaths.len();
        debug!(
            generation = self.generation,
            population = self.population,
            tracked = self.tracked(),
            births = changes.births.len(),
            deaths = changes.deaths.len(),
            "advanced"
        );
    }

    /// Snapshot of the live cells, ordered by address.
    pub fn live_cells(&self) -> Vec<Cell> {
        self.lives().copied().collect()
    }

    pub fn live_positions(&self) -> Vec<Pos> {
        self.lives().map(Cell::pos).collect()
    }

    fn lives(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.current().cells().filter(|cell| cell.is_alive())
    }

    /// Snapshot of the whole tracked set, ordered by address.
    pub fn all_cells(&self) -> Vec<Cell> {
        self.current().cells().copied().collect()
    }

    /// Checks every tracked-set invariant against the current buffer.
    pub fn validate(&self) -> Result<(), InvariantViolation> {
        let world = self.current();
        for cell in world.cells() {
            let pos = cell.pos();
            if cell.neighbor_count() > 8 {
                return Err(InvariantViolation::Overflow(pos));
            }
            if !cell.is_alive() && cell.neighbor_count() == 0 {
                return Err(InvariantViolation::IdleFrontier(pos));
            }
            let mut actual = 0;
            for neighbor in pos.neighbors() {
                match world.find(neighbor) {
                    Some(other) => actual += other.is_alive() as u8,
                    None if cell.is_alive() => {
                        return Err(InvariantViolation::MissingNeighbor { of: pos, neighbor })
                    }
                    None => (),
                }
            }
            if actual != cell.neighbor_count() {
                return Err(InvariantViolation::CountMismatch {
                    pos,
                    cached: cell.neighbor_count(),
                    actual,
                });
            }
        }
        if !world.cells().eq(self.buffers[self.current ^ 1].cells()) {
            return Err(InvariantViolation::Diverged);
        }
        Ok(())
    }
}

/// Transitions decided from one generation, applied to a buffer afterwards.
#[derive(Debug, Default)]
struct Changes {
    births: Vec<Pos>,
    deaths: Vec<Pos>,
    idle: Vec<Pos>,
}

impl Changes {
    fn collect<W: World>(world: &W) -> Self {
        let rules = RuleTable::B3S23;
        let mut changes = Self::default();
        for cell in world.cells() {
            match (cell.is_alive(), rules.next_alive(cell)) {
                (true, false) => changes.deaths.push(cell.pos()),
                (false, true) => changes.births.push(cell.pos()),
                (false, false) if cell.neighbor_count() == 0 => changes.idle.push(cell.pos()),
                _ => (),
            }
        }
        trace!(
            births = changes.births.len(),
            deaths = changes.deaths.len(),
            "collected transitions"
        );
        changes
    }

    /// Deterministic: applying to two equal worlds leaves them equal.
    fn apply<W: World>(&self, world: &mut W) -> Result<(), InvariantViolation> {
        let mut emptied = self.idle.clone();

        for &pos in &self.deaths {
            world
                .find_mut(pos)
                .ok_or(InvariantViolation::MissingCell(pos))?
                .set_alive(false);
            for neighbor in pos.neighbors() {
                let cell = world
                    .find_mut(neighbor)
                    .ok_or(InvariantViolation::MissingNeighbor { of: pos, neighbor })?;
                let count = cell.neighbor_count_mut();
                *count = count
                    .checked_sub(1)
                    .ok_or(InvariantViolation::Underflow(neighbor))?;
                if *count == 0 {
                    emptied.push(neighbor);
                }
            }
            emptied.push(pos);
        }

        for &pos in &self.births {
            world
                .find_mut(pos)
                .ok_or(InvariantViolation::MissingCell(pos))?
                .set_alive(true);
            for neighbor in pos.neighbors() {
                match world.find_mut(neighbor) {
                    Some(cell) => {
                        let count = cell.neighbor_count_mut();
                        if *count >= 8 {
                            return Err(InvariantViolation::Overflow(neighbor));
                        }
                        *count += 1;
                    }
                    None => world.upsert(Cell::dead(neighbor, 1)),
                }
            }
        }

        for pos in emptied {
            let idle = world
                .find(pos)
                .is_some_and(|cell| !cell.is_alive() && cell.neighbor_count() == 0);
            if idle {
                world.remove(pos);
            }
        }
        Ok(())
    }
}
