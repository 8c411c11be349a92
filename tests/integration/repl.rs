//! Scripted REPL sessions

use std::collections::VecDeque;

use numerology_foundation::Result;
use numerology_runtime::{Command, LineEditor, ReadResult, Repl, TraceCommand};

use crate::session;

/// Feeds canned lines to the REPL.
struct ScriptedEditor {
    lines: VecDeque<String>,
    history: Vec<String>,
}

impl ScriptedEditor {
    fn new(lines: &[&str]) -> Self {
        Self {
            lines: lines.iter().map(ToString::to_string).collect(),
            history: Vec::new(),
        }
    }
}

impl LineEditor for ScriptedEditor {
    fn read_line(&mut self, _prompt: &str) -> Result<ReadResult> {
        Ok(self
            .lines
            .pop_front()
            .map_or(ReadResult::Eof, ReadResult::Line))
    }

    fn add_history(&mut self, line: &str) {
        self.history.push(line.to_string());
    }

    fn set_commands(&mut self, _commands: Vec<String>) {}
}

fn repl(lines: &[&str]) -> Repl<ScriptedEditor> {
    Repl::with_editor(ScriptedEditor::new(lines))
        .with_session(session())
        .without_banner()
}

#[test]
fn eval_walkthrough() {
    let mut repl = repl(&[]);
    assert_eq!(repl.eval("name たなか").unwrap(), "spelling: tanaka");
    assert_eq!(repl.eval("birth 1990-01-01").unwrap(), "birth: 1990-01-01");
    assert!(repl.eval("show").unwrap().contains("能力値 1>2>5"));
    assert!(repl.eval("why destiny").unwrap().starts_with("destiny = 3"));
    assert_eq!(repl.eval("why").unwrap().matches(" = ").count(), 7);
}

#[test]
fn run_consumes_script_until_quit() {
    let mut repl = repl(&["name すずき", "birth 1985-12-25", "bogus", "quit", "name たなか"]);
    repl.run().unwrap();
    assert_eq!(repl.session().spelling().unwrap().as_str(), "suzuki");
}

#[test]
fn run_stops_at_end_of_input() {
    let mut repl = repl(&["", "birth 2000-01-01"]);
    repl.run().unwrap();
    assert_eq!(
        repl.session().birth().map(|b| b.to_string()).as_deref(),
        Some("2000-01-01")
    );
}

#[test]
fn tracing_records_readings() {
    let mut repl = repl(&[]);
    repl.eval("trace on").unwrap();
    repl.eval("name たなか").unwrap();
    repl.eval("birth 1990-01-01").unwrap();
    repl.eval("show").unwrap();
    let trace = repl.eval("trace").unwrap();
    assert!(trace.contains("ROMANIZE たなか -> tanaka"));
    assert!(trace.contains("=== READING tanaka 1990-01-01 ==="));
    assert!(trace.contains("destiny = 3"));
}

#[test]
fn command_errors() {
    assert!(Command::parse("name").is_err());
    assert!(Command::parse("why luck").is_err());
    assert!(Command::parse("trace maybe").is_err());
    assert_eq!(
        Command::parse("trace off").unwrap(),
        Command::Trace(TraceCommand::Off)
    );
    let mut repl = repl(&[]);
    assert!(repl.eval("show").is_err());
}
