use crate::error::LineError;
use glam::I64Vec2;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// A grid coordinate. Robots may hold positions outside the grid while lost.
///
/// Input coordinates are `i32`; positions are widened to `i64` so a step past
/// the edge of any accepted grid is representable.
pub type Position = I64Vec2;

/// The rectangular boundary of the grid.
///
/// The lower-left corner is fixed at the origin; `upper` is the inclusive
/// upper-right corner. Built once from the first input line and never mutated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridBound {
    upper: I64Vec2,
}

impl GridBound {
    /// Creates a bound spanning `[0, x_max] x [0, y_max]`.
    pub fn new(x_max: i32, y_max: i32) -> Result<Self, LineError> {
        for value in [x_max, y_max] {
            if value < 0 {
                return Err(LineError::NegativeBound(value));
            }
        }
        Ok(Self {
            upper: I64Vec2::new(i64::from(x_max), i64::from(y_max)),
        })
    }

    pub fn x_max(&self) -> i64 {
        self.upper.x
    }

    pub fn y_max(&self) -> i64 {
        self.upper.y
    }

    /// Returns `true` if `point` lies on or inside the boundary.
    pub fn contains(&self, point: Position) -> bool {
        point.cmpge(I64Vec2::ZERO).all() && point.cmple(self.upper).all()
    }
}

impl FromStr for GridBound {
    type Err = LineError;

    /// Parses `"<X> <Y>"`: exactly two non-negative integers.
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let &[x, y] = tokens.as_slice() else {
            return Err(LineError::token_count(2, tokens.len()));
        };
        Self::new(parse_coordinate(x)?, parse_coordinate(y)?)
    }
}

/// Parses a single integer coordinate token.
pub(crate) fn parse_coordinate(token: &str) -> Result<i32, LineError> {
    token
        .parse::<i32>()
        .map_err(|e| LineError::invalid_integer(token, e))
}

impl fmt::Display for GridBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.upper.x, self.upper.y)
    }
}

/// Points where robots have previously fallen off the grid.
///
/// Append-only for the lifetime of a run. A scent blocks any later forward
/// move that would land exactly on it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScentSet {
    points: HashSet<Position>,
}

impl ScentSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, point: Position) -> bool {
        self.points.contains(&point)
    }

    /// Records a scent. Adding an existing point is a no-op; returns whether
    /// the point was new.
    pub fn add(&mut self, point: Position) -> bool {
        self.points.insert(point)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterates over recorded scents in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = Position> + '_ {
        self.points.iter().copied()
    }
}

/// The context shared by every robot in a run: the boundary and the scents
/// left so far.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct World {
    pub bound: GridBound,
    pub scents: ScentSet,
}

impl World {
    /// Starts a run on `bound` with no scents.
    pub fn new(bound: GridBound) -> Self {
        Self {
            bound,
            scents: ScentSet::new(),
        }
    }
}
