//! Error types for parsing and running a simulation.

use crate::interpreter::ParserState;
use std::num::ParseIntError;
use thiserror::Error;

/// Why a single input line was rejected.
///
/// These carry no position information; the state machine wraps them into a
/// [`SimulationError::MalformedInput`] together with the state and line number.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LineError {
    /// The line had the wrong number of whitespace-separated tokens.
    #[error("expected {expected} tokens, found {found}")]
    TokenCount {
        /// Number of tokens the state expects.
        expected: usize,
        /// Number of tokens on the line.
        found: usize,
    },

    /// A numeric token did not parse as an integer.
    #[error("invalid integer {token:?}: {source}")]
    InvalidInteger {
        /// The offending token.
        token: String,
        /// Underlying integer parse failure.
        source: ParseIntError,
    },

    /// A grid bound was negative.
    #[error("grid bound must be non-negative, got {0}")]
    NegativeBound(i32),

    /// The orientation token was not one of `N`, `E`, `S`, `W`.
    #[error("unknown orientation {0:?}, expected one of N, E, S, W")]
    UnknownOrientation(String),

    /// An instruction character was not one of `L`, `R`, `F`.
    #[error("unknown instruction {instruction:?} at column {column}")]
    UnknownInstruction {
        /// The offending character.
        instruction: char,
        /// 1-based character column within the trimmed line.
        column: usize,
    },
}

impl LineError {
    /// Creates a token count error.
    #[must_use]
    pub const fn token_count(expected: usize, found: usize) -> Self {
        Self::TokenCount { expected, found }
    }

    /// Creates an invalid integer error.
    #[must_use]
    pub fn invalid_integer(token: impl Into<String>, source: ParseIntError) -> Self {
        Self::InvalidInteger {
            token: token.into(),
            source,
        }
    }
}

/// Fatal errors that stop a simulation run.
#[derive(Debug, Error)]
pub enum SimulationError {
    /// A line did not match the shape the current state expects.
    #[error("invalid input in state {state} at line {line_number}: {raw_line:?} ({source})")]
    MalformedInput {
        /// State the machine was in when the line arrived.
        state: ParserState,
        /// 1-based count of non-blank lines consumed, including this one.
        line_number: usize,
        /// The line exactly as it was read.
        raw_line: String,
        /// What was wrong with it.
        source: LineError,
    },

    /// Reading input or writing output failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl SimulationError {
    /// Wraps a [`LineError`] with the context the state machine knows about.
    #[must_use]
    pub fn malformed(
        state: ParserState,
        line_number: usize,
        raw_line: impl Into<String>,
        source: LineError,
    ) -> Self {
        Self::MalformedInput {
            state,
            line_number,
            raw_line: raw_line.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_count_display() {
        let msg = LineError::token_count(3, 2).to_string();
        assert!(msg.contains('3'));
        assert!(msg.contains('2'));
    }

    #[test]
    fn invalid_integer_display() {
        let source = "x1".parse::<i32>().unwrap_err();
        let msg = LineError::invalid_integer("x1", source).to_string();
        assert!(msg.contains("\"x1\""));
    }

    #[test]
    fn malformed_input_display() {
        let err = SimulationError::malformed(
            ParserState::AwaitRobotPose,
            2,
            "1 1 Q",
            LineError::UnknownOrientation("Q".to_string()),
        );
        let msg = err.to_string();
        assert!(msg.contains("AwaitRobotPose"));
        assert!(msg.contains("line 2"));
        assert!(msg.contains("\"1 1 Q\""));
        assert!(msg.contains("unknown orientation"));
    }

    #[test]
    fn io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let err: SimulationError = io.into();
        assert!(matches!(err, SimulationError::Io(_)));
    }
}
