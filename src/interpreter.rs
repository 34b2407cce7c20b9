//! Line-driven state machine that turns input text into robot reports.
//!
//! The entry point is [`InputStateMachine`]. Configure it with an
//! [`InterpreterConfig`], then hand it every input line via
//! [`InputStateMachine::feed_line`]. Each completed instruction line yields a
//! [`RobotReport`].
//!
//! The machine cycles through three states:
//!
//! 1. [`ParserState::AwaitGridSize`]: the first line sets the [`GridBound`].
//! 2. [`ParserState::AwaitRobotPose`]: a pose line places a new [`Robot`].
//! 3. [`ParserState::AwaitInstructions`]: an instruction line drives that robot,
//!    then the machine goes back to waiting for a pose.
//!
//! Blank lines are skipped in every state and do not count towards line numbers.

use crate::error::{LineError, SimulationError};
use crate::grid::{GridBound, ScentSet, World};
use crate::robot::{Robot, RobotOp, RobotReport};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// What to do with characters outside `L`, `R`, `F` in an instruction line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum InstructionPolicy {
    /// Fail the line with [`LineError::UnknownInstruction`].
    #[default]
    Reject,
    /// Skip unknown characters as no-ops.
    Ignore,
}

/// Configuration for input interpretation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterpreterConfig {
    /// Handling of unknown instruction characters. Default: reject.
    pub instruction_policy: InstructionPolicy,
}

/// Name of the state the machine is in; used to tag errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParserState {
    AwaitGridSize,
    AwaitRobotPose,
    AwaitInstructions,
}

impl fmt::Display for ParserState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::AwaitGridSize => "AwaitGridSize",
            Self::AwaitRobotPose => "AwaitRobotPose",
            Self::AwaitInstructions => "AwaitInstructions",
        };
        f.write_str(name)
    }
}

/// A state together with the context that exists in it.
///
/// The world only exists once the grid size is known, and a robot only exists
/// between its pose line and its instruction line.
#[derive(Clone, Debug, Default)]
enum Phase {
    #[default]
    AwaitGridSize,
    AwaitRobotPose {
        world: World,
    },
    AwaitInstructions {
        world: World,
        robot: Robot,
    },
}

impl Phase {
    fn state(&self) -> ParserState {
        match self {
            Self::AwaitGridSize => ParserState::AwaitGridSize,
            Self::AwaitRobotPose { .. } => ParserState::AwaitRobotPose,
            Self::AwaitInstructions { .. } => ParserState::AwaitInstructions,
        }
    }

    fn world(&self) -> Option<&World> {
        match self {
            Self::AwaitGridSize => None,
            Self::AwaitRobotPose { world } | Self::AwaitInstructions { world, .. } => Some(world),
        }
    }

    /// Consumes one trimmed, non-blank line.
    ///
    /// On failure the phase is handed back untouched alongside the error.
    fn advance(
        self,
        line: &str,
        config: &InterpreterConfig,
    ) -> Result<(Self, Option<RobotReport>), (Self, LineError)> {
        match self {
            Self::AwaitGridSize => match line.parse::<GridBound>() {
                Ok(bound) => {
                    debug!(%bound, "grid size");
                    let world = World::new(bound);
                    Ok((Self::AwaitRobotPose { world }, None))
                }
                Err(e) => Err((Self::AwaitGridSize, e)),
            },
            Self::AwaitRobotPose { world } => match line.parse::<Robot>() {
                Ok(robot) => {
                    debug!(%robot, "robot");
                    Ok((Self::AwaitInstructions { world, robot }, None))
                }
                Err(e) => Err((Self::AwaitRobotPose { world }, e)),
            },
            Self::AwaitInstructions { mut world, robot } => {
                match parse_instructions(line, config.instruction_policy) {
                    Ok(ops) => {
                        let report = robot.execute(&ops, &world.bound, &mut world.scents);
                        Ok((Self::AwaitRobotPose { world }, Some(report)))
                    }
                    Err(e) => Err((Self::AwaitInstructions { world, robot }, e)),
                }
            }
        }
    }
}

/// Parses an instruction line into operations.
///
/// Every character is an instruction; there are no separators. Characters
/// outside `L`, `R`, `F` are handled according to `policy`.
pub fn parse_instructions(
    line: &str,
    policy: InstructionPolicy,
) -> Result<Vec<RobotOp>, LineError> {
    let mut ops = Vec::with_capacity(line.len());
    for (i, c) in line.chars().enumerate() {
        match (RobotOp::from_char(c), policy) {
            (Some(op), _) => ops.push(op),
            (None, InstructionPolicy::Ignore) => {}
            (None, InstructionPolicy::Reject) => {
                return Err(LineError::UnknownInstruction {
                    instruction: c,
                    column: i + 1,
                });
            }
        }
    }
    Ok(ops)
}

/// Parses input lines and runs robots against a shared scent set.
#[derive(Clone, Debug, Default)]
pub struct InputStateMachine {
    config: InterpreterConfig,
    phase: Phase,
    line_number: usize,
}

impl InputStateMachine {
    /// Creates a machine waiting for the grid size line.
    pub fn new(config: InterpreterConfig) -> Self {
        Self {
            config,
            phase: Phase::AwaitGridSize,
            line_number: 0,
        }
    }

    /// The state the next non-blank line will be handed to.
    pub fn state(&self) -> ParserState {
        self.phase.state()
    }

    /// Number of non-blank lines consumed so far.
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// The grid bound, once the first line has been read.
    pub fn bound(&self) -> Option<&GridBound> {
        self.phase.world().map(|world| &world.bound)
    }

    /// Scents left so far, once the first line has been read.
    pub fn scents(&self) -> Option<&ScentSet> {
        self.phase.world().map(|world| &world.scents)
    }

    pub fn config(&self) -> &InterpreterConfig {
        &self.config
    }

    /// Feeds one raw input line.
    ///
    /// Blank and whitespace-only lines are ignored. Returns the robot's report
    /// when `line` completes an instruction string, `None` otherwise.
    ///
    /// # Errors
    ///
    /// [`SimulationError::MalformedInput`] if the line does not fit the current
    /// state. The machine stays in that state.
    pub fn feed_line(&mut self, line: &str) -> Result<Option<RobotReport>, SimulationError> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }
        self.line_number += 1;

        let phase = std::mem::take(&mut self.phase);
        let state = phase.state();
        match phase.advance(trimmed, &self.config) {
            Ok((next, report)) => {
                self.phase = next;
                Ok(report)
            }
            Err((phase, source)) => {
                self.phase = phase;
                Err(SimulationError::malformed(state, self.line_number, line, source))
            }
        }
    }
}
