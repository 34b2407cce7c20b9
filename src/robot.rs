//! Robot state and the operations that move it around the grid.

use crate::error::LineError;
use crate::grid::{GridBound, Position, ScentSet, parse_coordinate};
use glam::I64Vec2;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, trace};

/// Compass heading of a robot.
///
/// Headings form the cycle `N -> E -> S -> W -> N`; turning right advances one
/// step and turning left retreats one step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    #[serde(rename = "N")]
    North,
    #[serde(rename = "E")]
    East,
    #[serde(rename = "S")]
    South,
    #[serde(rename = "W")]
    West,
}

impl Orientation {
    /// All headings in clockwise order starting from north.
    pub const ALL: [Orientation; 4] = [Self::North, Self::East, Self::South, Self::West];

    /// The heading after a 90 degree counter-clockwise turn.
    pub const fn rotate_left(self) -> Self {
        match self {
            Self::North => Self::West,
            Self::West => Self::South,
            Self::South => Self::East,
            Self::East => Self::North,
        }
    }

    /// The heading after a 90 degree clockwise turn.
    pub const fn rotate_right(self) -> Self {
        match self {
            Self::North => Self::East,
            Self::East => Self::South,
            Self::South => Self::West,
            Self::West => Self::North,
        }
    }

    /// Unit step taken by a forward move with this heading.
    pub const fn delta(self) -> Position {
        match self {
            Self::North => I64Vec2::Y,
            Self::East => I64Vec2::X,
            Self::South => I64Vec2::NEG_Y,
            Self::West => I64Vec2::NEG_X,
        }
    }

    pub const fn letter(self) -> char {
        match self {
            Self::North => 'N',
            Self::East => 'E',
            Self::South => 'S',
            Self::West => 'W',
        }
    }
}

impl FromStr for Orientation {
    type Err = LineError;

    /// Accepts exactly one of `N`, `E`, `S`, `W`.
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "N" => Ok(Self::North),
            "E" => Ok(Self::East),
            "S" => Ok(Self::South),
            "W" => Ok(Self::West),
            other => Err(LineError::UnknownOrientation(other.to_string())),
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Operations a robot understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RobotOp {
    /// Turn 90 degrees counter-clockwise in place (`L`).
    Left,
    /// Turn 90 degrees clockwise in place (`R`).
    Right,
    /// Step one cell along the current heading (`F`).
    Forward,
}

impl RobotOp {
    /// Maps an instruction letter to its operation, if it has one.
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'L' => Some(Self::Left),
            'R' => Some(Self::Right),
            'F' => Some(Self::Forward),
            _ => None,
        }
    }
}

/// A robot on (or lost beyond) the grid.
///
/// Built from a pose line, driven by one instruction line, then reported and
/// discarded. Nothing carries over to the next robot except scents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Robot {
    /// Current cell. Not clamped: lies outside the bound once the robot is lost.
    pub position: Position,

    /// Current heading.
    pub orientation: Orientation,
}

impl Robot {
    pub fn new(position: Position, orientation: Orientation) -> Self {
        Self {
            position,
            orientation,
        }
    }

    /// Applies a single operation.
    ///
    /// A forward step whose target cell carries a scent is skipped. Any other
    /// forward step is taken unconditionally, even off the grid. Returns
    /// `true` if the robot changed cell.
    pub fn apply_op(&mut self, op: RobotOp, scents: &ScentSet) -> bool {
        match op {
            RobotOp::Left => {
                self.orientation = self.orientation.rotate_left();
                false
            }
            RobotOp::Right => {
                self.orientation = self.orientation.rotate_right();
                false
            }
            RobotOp::Forward => {
                let target = self.position + self.orientation.delta();
                if scents.contains(target) {
                    trace!(x = target.x, y = target.y, "forward move blocked by scent");
                    return false;
                }
                self.position = target;
                true
            }
        }
    }

    /// Runs a whole instruction string and reports the final pose.
    ///
    /// Every operation is executed, even after the robot has left the grid.
    /// The first move that lands outside `bound` leaves a scent at the landing
    /// cell and marks the robot lost; later departures in the same string are
    /// not recorded again.
    pub fn execute(
        mut self,
        ops: &[RobotOp],
        bound: &GridBound,
        scents: &mut ScentSet,
    ) -> RobotReport {
        let mut lost = false;

        for &op in ops {
            let moved = self.apply_op(op, scents);
            if moved && !lost && !bound.contains(self.position) {
                lost = true;
                scents.add(self.position);
                debug!(x = self.position.x, y = self.position.y, "robot lost, scent registered");
            }
        }

        RobotReport {
            position: self.position,
            orientation: self.orientation,
            lost,
        }
    }
}

impl FromStr for Robot {
    type Err = LineError;

    /// Parses a pose line `"<x> <y> <N|E|S|W>"`.
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let &[x, y, orientation] = tokens.as_slice() else {
            return Err(LineError::token_count(3, tokens.len()));
        };
        Ok(Self::new(
            I64Vec2::new(
                i64::from(parse_coordinate(x)?),
                i64::from(parse_coordinate(y)?),
            ),
            orientation.parse()?,
        ))
    }
}

impl fmt::Display for Robot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.position.x, self.position.y, self.orientation)
    }
}

/// Outcome of one instruction string.
///
/// Displays as the output line: `"<x> <y> <O>"`, suffixed with `" LOST"` if
/// the robot left the grid at any point, even if it later came back.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RobotReport {
    pub position: Position,
    pub orientation: Orientation,
    pub lost: bool,
}

impl fmt::Display for RobotReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Robot::new(self.position, self.orientation))?;
        if self.lost {
            write!(f, " LOST")?;
        }
        Ok(())
    }
}
