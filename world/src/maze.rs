//! Maze layout generation and free-space queries.

use std::collections::VecDeque;

use labyrinth_core::{Direction, Position};
use rand::{seq::SliceRandom, Rng};
use thiserror::Error;

/// Contents of a single maze cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    /// Impassable cell.
    Wall,
    /// Cell the player may occupy.
    Free,
}

/// Reasons a maze could not be generated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum MazeError {
    /// The requested grid cannot hold two distinct cells.
    #[error("a {width}x{height} maze cannot hold distinct start and end points")]
    TooSmall {
        /// Requested number of columns.
        width: u32,
        /// Requested number of rows.
        height: u32,
    },
    /// The carved layout does not connect the start and end points.
    #[error("no free path connects start {start:?} to end {end:?}")]
    Unreachable {
        /// Start point of the rejected layout.
        start: Position,
        /// End point of the rejected layout.
        end: Position,
    },
}

/// Rectangular maze with a start and an end point connected by free cells.
///
/// Rooms sit on even coordinates and are joined by knocking out the wall cell
/// between them, so every layout is a spanning tree over its rooms. The end
/// point is the free cell farthest from the start.
#[derive(Clone, Debug, Default)]
pub struct Maze {
    width: u32,
    height: u32,
    cells: Vec<Cell>,
    start_point: Position,
    end_point: Position,
}

impl Maze {
    /// Replaces the current layout with a freshly carved `width × height` maze.
    ///
    /// The previous layout is kept untouched when an error is returned.
    pub fn generate<R>(&mut self, width: u32, height: u32, rng: &mut R) -> Result<(), MazeError>
    where
        R: Rng + ?Sized,
    {
        let too_small = MazeError::TooSmall { width, height };
        let columns = usize::try_from(width).map_err(|_| too_small)?;
        let rows = usize::try_from(height).map_err(|_| too_small)?;
        let cell_count = columns.checked_mul(rows).ok_or(too_small)?;
        if columns == 0 || rows == 0 || cell_count < 2 {
            return Err(too_small);
        }

        let mut cells = vec![Cell::Wall; cell_count];
        carve(&mut cells, width, height, rng);

        if cells.iter().filter(|cell| **cell == Cell::Free).count() < 2 {
            let neighbour = if width > 1 {
                Position::new(1, 0)
            } else {
                Position::new(0, 1)
            };
            if let Some(offset) = index(width, height, neighbour) {
                cells[offset] = Cell::Free;
            }
        }

        let start_point = Position::new(0, 0);
        let distances = distances_from(&cells, width, height, start_point);
        let end_point = farthest(&distances, width).unwrap_or(start_point);

        if end_point == start_point
            || path_between(&cells, width, height, start_point, end_point).is_none()
        {
            return Err(MazeError::Unreachable {
                start: start_point,
                end: end_point,
            });
        }

        self.width = width;
        self.height = height;
        self.cells = cells;
        self.start_point = start_point;
        self.end_point = end_point;
        Ok(())
    }

    /// Reports whether the player may occupy the provided position.
    ///
    /// Positions outside the grid are never free.
    #[must_use]
    pub fn is_free_space(&self, position: Position) -> bool {
        index(self.width, self.height, position)
            .and_then(|offset| self.cells.get(offset))
            .is_some_and(|cell| *cell == Cell::Free)
    }

    /// Shortest sequence of free cells leading from `from` to `to`, inclusive.
    #[must_use]
    pub fn shortest_path(&self, from: Position, to: Position) -> Option<Vec<Position>> {
        path_between(&self.cells, self.width, self.height, from, to)
    }

    /// Number of columns in the maze.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows in the maze.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Cell where the player enters the maze.
    #[must_use]
    pub const fn start_point(&self) -> Position {
        self.start_point
    }

    /// Cell the player must reach to complete the level.
    #[must_use]
    pub const fn end_point(&self) -> Position {
        self.end_point
    }

    /// Dense cell grid stored in row-major order.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

fn carve<R>(cells: &mut [Cell], width: u32, height: u32, rng: &mut R)
where
    R: Rng + ?Sized,
{
    let origin = Position::new(0, 0);
    let Some(origin_index) = index(width, height, origin) else {
        return;
    };
    cells[origin_index] = Cell::Free;

    let mut stack = vec![origin];
    while let Some(&room) = stack.last() {
        let candidates: Vec<(usize, usize, Position)> = Direction::ALL
            .iter()
            .filter_map(|&direction| {
                let wall = room.step(direction);
                let next = wall.step(direction);
                let wall_index = index(width, height, wall)?;
                let next_index = index(width, height, next)?;
                (cells[next_index] == Cell::Wall).then_some((wall_index, next_index, next))
            })
            .collect();

        let Some(&(wall_index, next_index, next)) = candidates.choose(rng) else {
            let _ = stack.pop();
            continue;
        };

        cells[wall_index] = Cell::Free;
        cells[next_index] = Cell::Free;
        stack.push(next);
    }
}

fn distances_from(cells: &[Cell], width: u32, height: u32, origin: Position) -> Vec<Option<u32>> {
    let mut distances = vec![None; cells.len()];
    let Some(origin_index) = free_index(cells, width, height, origin) else {
        return distances;
    };

    distances[origin_index] = Some(0);
    let mut queue = VecDeque::from([origin]);
    while let Some(position) = queue.pop_front() {
        let Some(current) = index(width, height, position).and_then(|offset| distances[offset])
        else {
            continue;
        };

        for direction in Direction::ALL {
            let neighbour = position.step(direction);
            let Some(offset) = free_index(cells, width, height, neighbour) else {
                continue;
            };
            if distances[offset].is_some() {
                continue;
            }
            distances[offset] = Some(current + 1);
            queue.push_back(neighbour);
        }
    }

    distances
}

fn farthest(distances: &[Option<u32>], width: u32) -> Option<Position> {
    let columns = usize::try_from(width).ok().filter(|columns| *columns > 0)?;
    let mut best: Option<(u32, usize)> = None;
    for (offset, distance) in distances.iter().enumerate() {
        let Some(distance) = *distance else {
            continue;
        };
        if best.map_or(true, |(current, _)| distance > current) {
            best = Some((distance, offset));
        }
    }

    let (_, offset) = best?;
    let x = i32::try_from(offset % columns).ok()?;
    let y = i32::try_from(offset / columns).ok()?;
    Some(Position::new(x, y))
}

fn path_between(
    cells: &[Cell],
    width: u32,
    height: u32,
    from: Position,
    to: Position,
) -> Option<Vec<Position>> {
    let from_index = free_index(cells, width, height, from)?;
    let _ = free_index(cells, width, height, to)?;

    let mut previous: Vec<Option<Position>> = vec![None; cells.len()];
    let mut visited = vec![false; cells.len()];
    visited[from_index] = true;

    let mut queue = VecDeque::from([from]);
    while let Some(position) = queue.pop_front() {
        if position == to {
            let mut path = vec![position];
            let mut cursor = position;
            while let Some(prior) = index(width, height, cursor).and_then(|offset| previous[offset])
            {
                path.push(prior);
                cursor = prior;
            }
            path.reverse();
            return Some(path);
        }

        for direction in Direction::ALL {
            let neighbour = position.step(direction);
            let Some(offset) = free_index(cells, width, height, neighbour) else {
                continue;
            };
            if visited[offset] {
                continue;
            }
            visited[offset] = true;
            previous[offset] = Some(position);
            queue.push_back(neighbour);
        }
    }

    None
}

fn free_index(cells: &[Cell], width: u32, height: u32, position: Position) -> Option<usize> {
    index(width, height, position).filter(|offset| cells.get(*offset) == Some(&Cell::Free))
}

fn index(width: u32, height: u32, position: Position) -> Option<usize> {
    let x = u32::try_from(position.x()).ok()?;
    let y = u32::try_from(position.y()).ok()?;
    if x >= width || y >= height {
        return None;
    }

    let row = usize::try_from(y).ok()?;
    let column = usize::try_from(x).ok()?;
    let columns = usize::try_from(width).ok()?;
    row.checked_mul(columns)?.checked_add(column)
}
