//! Integration tests for the domino-grid binaries.
//!
//! Tests full protocol sessions by spawning the engine process, sending
//! commands via stdin, and verifying stdout responses. The batch solver is
//! run the same way and its JSONL output checked.

use std::io::{BufRead, Write};
use std::process::{Command, Stdio};

/// Sends a sequence of commands to the engine and collects stdout lines.
fn run_engine(commands: &[&str]) -> Vec<String> {
    let exe = env!("CARGO_BIN_EXE_domino-grid");
    let mut child = Command::new(exe)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("failed to start domino-grid");

    let mut stdin = child.stdin.take().unwrap();
    let stdout = child.stdout.take().unwrap();
    let reader = std::io::BufReader::new(stdout);

    for cmd in commands {
        writeln!(stdin, "{}", cmd).unwrap();
    }
    stdin.flush().unwrap();
    drop(stdin);

    let lines: Vec<String> = reader.lines().map(|l| l.unwrap()).collect();
    let status = child.wait().expect("failed to wait on child");
    assert!(status.success());
    lines
}

/// Runs the batch solver and returns its stdout lines.
fn run_solve(args: &[&str]) -> Vec<String> {
    let exe = env!("CARGO_BIN_EXE_solve");
    let output = Command::new(exe)
        .args(args)
        .stderr(Stdio::null())
        .output()
        .expect("failed to run solve");
    assert!(output.status.success());
    String::from_utf8(output.stdout)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn isready_response() {
    let lines = run_engine(&["isready", "quit"]);
    assert_eq!(lines, vec!["readyok"]);
}

#[test]
fn unknown_commands_are_ignored() {
    let lines = run_engine(&["foobar", "nonsense", "quit"]);
    assert!(lines.is_empty());
}

#[test]
fn empty_lines_are_ignored() {
    let lines = run_engine(&["", "  ", "isready", "quit"]);
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0], "readyok");
}

#[test]
fn malformed_arguments_are_ignored() {
    let lines = run_engine(&["hand 3|5 7|7", "play", "deal 1 0", "setoption", "isready", "quit"]);
    assert_eq!(lines, vec!["readyok"]);
}

#[test]
fn setoption_then_isready() {
    let lines = run_engine(&[
        "setoption name Threads value 4",
        "setoption name Seed value 17",
        "isready",
        "quit",
    ]);
    assert_eq!(lines, vec!["readyok"]);
}

#[test]
fn hand_then_show() {
    let lines = run_engine(&["hand 3|5 5|6", "show", "quit"]);
    assert_eq!(lines, vec!["hand 3|5 5|6", "hand 3|5 5|6", "row", "score 0"]);
}

#[test]
fn interactive_game_until_gameover() {
    let lines = run_engine(&["hand 3|5 5|6", "play 1", "play 1 0 1 h", "show", "quit"]);
    assert_eq!(
        lines,
        vec![
            "hand 3|5 5|6",
            "played 3|5 score 8",
            "played 5|6 score 19",
            "gameover score 19",
            "hand ",
            "row [3|5] [5|6]",
            "score 19",
        ]
    );
}

#[test]
fn illegal_move_is_reported() {
    let lines = run_engine(&["hand 3|5 1|1", "play 1", "play 1 0 0 h", "play 9", "quit"]);
    assert_eq!(
        lines,
        vec![
            "hand 3|5 1|1",
            "played 3|5 score 8",
            "gameover score 8",
            "illegal 1|1 does not fit there",
            "illegal no tile 9 in hand",
        ]
    );
}

#[test]
fn vertical_play_renders_two_rows() {
    let lines = run_engine(&["hand 3|5 3|4 5|6", "play 1", "play 1 0 0 v", "show", "quit"]);
    assert_eq!(lines[2], "played 3|4 score 15");
    assert_eq!(&lines[3..], &["hand 5|6", "row {3:[3|5]", "row :4}", "score 15"]);
}

#[test]
fn go_reports_best_arrangement() {
    let lines = run_engine(&["hand 2|2 2|6", "go", "quit"]);
    assert_eq!(lines.len(), 4);
    assert!(lines[1].starts_with("info nodes "));
    assert!(lines[1].contains(" terminals "));
    assert!(lines[1].contains(" time "));
    assert_eq!(lines[2], "row [6|2] [2|2]");
    assert_eq!(lines[3], "bestscore 12");
}

#[test]
fn go_continues_from_played_tiles() {
    let lines = run_engine(&["hand 3|5 5|5", "play 1", "go", "quit"]);
    assert_eq!(lines.last().map(String::as_str), Some("bestscore 18"));
}

#[test]
fn go_with_only_specials() {
    let lines = run_engine(&["hand 0|0 12|21", "go", "quit"]);
    assert_eq!(lines.last().map(String::as_str), Some("bestscore none"));
}

#[test]
fn go_with_threads_matches_single_thread() {
    let hand = "hand 1|3 3|3 3|6 11|11";
    let single = run_engine(&[hand, "go", "quit"]);
    let multi = run_engine(&["setoption name Threads value 4", hand, "go", "quit"]);
    // Only the info line carries timing.
    assert_eq!(single[2..], multi[2..]);
}

#[test]
fn seeded_deal_is_reproducible() {
    let session = ["setoption name Seed value 42", "deal 5 2", "quit"];
    let a = run_engine(&session);
    let b = run_engine(&session);
    assert_eq!(a, b);
    assert_eq!(a.len(), 1);
    let tiles: Vec<&str> = a[0].strip_prefix("hand ").unwrap().split(' ').collect();
    assert_eq!(tiles.len(), 5);
    assert!(tiles[3..].iter().all(|t| ["0|0", "11|11", "12|21"].contains(t)));
}

#[test]
fn newgame_resets_state() {
    let lines = run_engine(&["hand 3|5", "play 1", "newgame", "show", "quit"]);
    assert_eq!(&lines[3..], &["hand ", "row", "score 0"]);
}

#[test]
fn solve_writes_one_record_per_hand() {
    let lines = run_solve(&["--hands", "3", "--tiles", "3", "--seed", "7", "--quiet"]);
    assert_eq!(lines.len(), 3);
    for (i, line) in lines.iter().enumerate() {
        let record: serde_json::Value = serde_json::from_str(line).unwrap();
        assert_eq!(record["hand_id"], i);
        assert_eq!(record["hand"].as_array().unwrap().len(), 3);
        assert!(record["score"].as_u64().unwrap() > 0);
        assert!(record["nodes"].as_u64().unwrap() >= 1);
        assert!(record["rows"].is_array());
        assert!(record["elapsed_ms"].is_u64());
    }
}

#[test]
fn solve_threads_do_not_change_results() {
    let strip = |lines: Vec<String>| -> Vec<serde_json::Value> {
        lines
            .iter()
            .map(|l| {
                let mut v: serde_json::Value = serde_json::from_str(l).unwrap();
                v.as_object_mut().unwrap().remove("elapsed_ms");
                v
            })
            .collect()
    };
    let base = ["--hands", "4", "--seed", "11", "--quiet"];
    let single = strip(run_solve(&base));
    let mut threaded = base.to_vec();
    threaded.extend(["--threads", "3"]);
    let multi = strip(run_solve(&threaded));
    assert_eq!(single, multi);
}

#[test]
fn solve_rejects_impossible_hands() {
    let exe = env!("CARGO_BIN_EXE_solve");
    let status = Command::new(exe)
        .args(["--tiles", "2", "--specials", "2", "--quiet"])
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .expect("failed to run solve");
    assert!(!status.success());
}
