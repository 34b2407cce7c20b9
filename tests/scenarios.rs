// tests/scenarios.rs
use pretty_assertions::assert_eq;
use scent_robot::{
    InstructionPolicy, InterpreterConfig, LineError, OutputFormat, ParserState, SimulationError,
    run,
};
use std::io::Write;
use std::process::{Command, Stdio};

const SAMPLE: &str = "5 3
1 1 E
RFRFRFRF

3 2 N
FRRFLLFFRRFLL

0 3 W
LLFFFLFLFL
";

fn run_text(input: &str, config: InterpreterConfig) -> (Result<usize, SimulationError>, String) {
    let mut out = Vec::new();
    let result = run(input.as_bytes(), &mut out, config, OutputFormat::Text).map(|s| s.robots);
    (result, String::from_utf8(out).unwrap())
}

#[test]
fn test_sample_run() {
    let (result, out) = run_text(SAMPLE, InterpreterConfig::default());
    assert_eq!(result.unwrap(), 3);
    assert_eq!(out, "1 1 E\n3 3 N LOST\n2 3 S\n");
}

#[test]
fn test_scent_only_applies_within_a_run() {
    // The third robot alone, without the scent left by the second, falls off.
    let input = "5 3\n0 3 W\nLLFFFLFLFL\n";
    let (_, out) = run_text(input, InterpreterConfig::default());
    assert_eq!(out, "2 4 S LOST\n");

    // Repeating the whole sample gives byte-identical output.
    let (_, first) = run_text(SAMPLE, InterpreterConfig::default());
    let (_, second) = run_text(SAMPLE, InterpreterConfig::default());
    assert_eq!(first, second);
}

#[test]
fn test_lost_robot_back_in_bound_still_reported_lost() {
    let input = "2 2\n2 2 N\nFRRF\n";
    let (_, out) = run_text(input, InterpreterConfig::default());
    assert_eq!(out, "2 2 S LOST\n");
}

#[test]
fn test_second_robot_stops_at_scent() {
    // Both robots try to leave at (1, 2) on a 1x1 grid.
    let input = "1 1\n1 1 N\nF\n1 1 N\nFFFL\n";
    let (_, out) = run_text(input, InterpreterConfig::default());
    assert_eq!(out, "1 2 N LOST\n1 1 W\n");
}

#[test]
fn test_scent_does_not_block_other_exits() {
    let input = "1 1\n1 1 N\nF\n1 1 E\nF\n";
    let (_, out) = run_text(input, InterpreterConfig::default());
    assert_eq!(out, "1 2 N LOST\n2 1 E LOST\n");
}

#[test]
fn test_error_keeps_earlier_output() {
    let input = "5 3\n1 1 E\nRFRFRFRF\n\n3 2 Q\nF\n";
    let (result, out) = run_text(input, InterpreterConfig::default());
    assert_eq!(out, "1 1 E\n");
    match result.unwrap_err() {
        SimulationError::MalformedInput {
            state,
            line_number,
            raw_line,
            source,
        } => {
            assert_eq!(state, ParserState::AwaitRobotPose);
            assert_eq!(line_number, 4);
            assert_eq!(raw_line, "3 2 Q");
            assert_eq!(source, LineError::UnknownOrientation("Q".to_string()));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_unknown_instructions_follow_policy() {
    let input = "5 3\n1 1 E\nFZF\n";
    let (result, out) = run_text(input, InterpreterConfig::default());
    assert!(result.is_err());
    assert_eq!(out, "");

    let config = InterpreterConfig {
        instruction_policy: InstructionPolicy::Ignore,
    };
    let (result, out) = run_text(input, config);
    assert_eq!(result.unwrap(), 1);
    assert_eq!(out, "3 1 E\n");
}

#[test]
fn test_dangling_pose_produces_no_output() {
    let (result, out) = run_text("5 3\n1 1 E\n", InterpreterConfig::default());
    assert_eq!(result.unwrap(), 0);
    assert_eq!(out, "");
}

fn run_binary(args: &[&str], input: &str) -> std::process::Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_scent-robot"))
        .args(args)
        .env_remove("DEBUG")
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(input.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

#[test]
fn test_binary_reads_stdin() {
    let output = run_binary(&[], SAMPLE);
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "1 1 E\n3 3 N LOST\n2 3 S\n"
    );
}

#[test]
fn test_binary_fails_on_malformed_input() {
    let output = run_binary(&[], "5 3\n1 1 E\nF\n1 1\n");
    assert!(!output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "2 1 E\n");
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("AwaitRobotPose"));
    assert!(stderr.contains("line 4"));
    assert!(stderr.contains("\"1 1\""));
}

#[test]
fn test_binary_json_format() {
    let output = run_binary(&["--format", "json"], "5 3\n1 1 E\nRFRFRFRF\n");
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "{\"position\":[1,1],\"orientation\":\"E\",\"lost\":false}\n"
    );
}

#[test]
fn test_robot_leaves_grid_at_i32_edge() {
    let (_, out) = run_text("2147483647 0\n2147483647 0 E\nF\n", InterpreterConfig::default());
    assert_eq!(out, "2147483648 0 E LOST\n");

    // Starting out of bound, the first robot scents the cell it steps onto,
    // which blocks the same step for the second robot.
    let input = "5 3\n2147483647 0 E\nF\n2147483647 0 E\nF\n";
    let (_, out) = run_text(input, InterpreterConfig::default());
    assert_eq!(out, "2147483648 0 E LOST\n2147483647 0 E\n");
}
