//! # scent-robot
//!
//! Simulates robots driven across a bounded rectangular grid by `L`/`R`/`F`
//! instruction strings.
//!
//! A robot that steps off the grid is reported `LOST` and leaves a *scent* at
//! the cell it stepped onto. Later robots in the same run refuse any forward
//! move onto a scented cell, so they cannot fall off at that point.
//!
//! Input is line oriented: a grid size line, then pairs of pose and
//! instruction lines. [`InputStateMachine`] consumes it one line at a time and
//! [`run`] wires it to a reader and writer.
//!
//! ```
//! use scent_robot::{InterpreterConfig, OutputFormat, run};
//!
//! let input = "5 3\n1 1 E\nRFRFRFRF\n3 2 N\nFRRFLLFFRRFLL\n0 3 W\nLLFFFLFLFL\n";
//! let mut out = Vec::new();
//! run(input.as_bytes(), &mut out, InterpreterConfig::default(), OutputFormat::Text).unwrap();
//! assert_eq!(String::from_utf8(out).unwrap(), "1 1 E\n3 3 N LOST\n2 3 S\n");
//! ```

pub mod error;
pub mod grid;
pub mod interpreter;
pub mod robot;
pub mod runner;

pub use error::*;
pub use grid::*;
pub use interpreter::*;
pub use robot::*;
pub use runner::*;
