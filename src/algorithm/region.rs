//! Region discovery over grid payloads
//!
//! [`Grid::connected_region`] follows cells equal to the start payload
//! depth-first, while [`Grid::flood_fill`] spreads breadth-first through
//! every cell that is not a wall. Both keep a fresh visited bitmap per call
//! and never recurse.

use std::collections::VecDeque;

use tracing::trace;

use crate::algorithm::visited::VisitedSet;
use crate::spatial::adjacency::Adjacency;
use crate::spatial::cell::Cell;
use crate::spatial::grid::Grid;
use crate::spatial::position::Position;

impl<T: PartialEq> Grid<T> {
    /// Cells connected to `start` through neighbours holding the same payload
    ///
    /// Cells are returned in depth-first pre-order: the start cell first,
    /// then each neighbour in the mode's offset order, fully explored before
    /// the next one. An out-of-bounds start yields an empty region.
    pub fn connected_region(
        &self,
        start: impl Into<Position>,
        mode: Adjacency,
    ) -> Vec<&Cell<T>> {
        let Some(origin) = self.get(start) else {
            return Vec::new();
        };
        let target = origin.value();
        let offsets = mode.offsets();

        let (cols, rows) = self.dimensions();
        let mut visited = VisitedSet::new(cols, rows);
        visited.insert(origin.position());
        let mut region = vec![origin];

        // Each frame is a cell and the index of the next offset to try from it
        let mut stack = vec![(origin.position(), 0_usize)];
        while let Some(frame) = stack.last_mut() {
            let (position, step) = *frame;
            let Some(&delta) = offsets.get(step) else {
                stack.pop();
                continue;
            };
            frame.1 += 1;

            let next = position
                .offset(delta)
                .and_then(|candidate| self.get(candidate))
                .filter(|cell| cell.value() == target);
            if let Some(cell) = next
                && visited.insert(cell.position())
            {
                region.push(cell);
                stack.push((cell.position(), 0));
            }
        }

        trace!(start = %origin.position(), size = region.len(), "connected region");
        region
    }

    /// Cells reachable from `start` without crossing a cell holding `wall`
    ///
    /// Cells are returned in breadth-first discovery order, starting with
    /// `start`. A start that is out of bounds or is itself a wall yields an
    /// empty result.
    pub fn flood_fill(
        &self,
        start: impl Into<Position>,
        mode: Adjacency,
        wall: &T,
    ) -> Vec<&Cell<T>> {
        let Some(origin) = self.get(start).filter(|cell| cell.value() != wall) else {
            return Vec::new();
        };

        let (cols, rows) = self.dimensions();
        let mut visited = VisitedSet::new(cols, rows);
        visited.insert(origin.position());
        let mut reached = Vec::new();
        let mut queue = VecDeque::from([origin]);

        while let Some(cell) = queue.pop_front() {
            reached.push(cell);
            for neighbour in self.neighbours(cell.position(), mode) {
                if neighbour.value() != wall && visited.insert(neighbour.position()) {
                    queue.push_back(neighbour);
                }
            }
        }

        trace!(start = %origin.position(), size = reached.len(), "flood fill");
        reached
    }
}
