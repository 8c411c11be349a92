//! The interactive REPL.
//!
//! Each line is one command:
//!
//! ```text
//! name たなか
//! birth 1990-01-01
//! show
//! why destiny
//! ```

use std::io::{self, Write};
use std::path::PathBuf;

use numerology_engine::CoreNumber;
use numerology_foundation::{Error, Result};

use crate::editor::{LineEditor, ReadResult, RustylineEditor};
use crate::session::Session;

// =============================================================================
// Commands
// =============================================================================

/// A parsed REPL command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// `name <name>` - set the name (hiragana or lowercase Latin).
    Name(String),
    /// `birth <YYYY-MM-DD>` - set the birth date.
    Birth(String),
    /// `show` - print the full report.
    Show,
    /// `why [number]` - explain one core number, or all of them.
    Why(Option<CoreNumber>),
    /// `share [base]` - print a share link.
    Share(Option<String>),
    /// `open <link>` - take inputs from a share link.
    Open(String),
    /// `save <path>` - save the reading.
    Save(PathBuf),
    /// `load <path>` - load a saved reading.
    Load(PathBuf),
    /// `trace on|off|show` - control the tracer.
    Trace(TraceCommand),
    /// `help` - list commands.
    Help,
    /// `quit` - leave the REPL.
    Quit,
}

/// Tracer sub-commands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TraceCommand {
    /// Start recording.
    On,
    /// Stop recording.
    Off,
    /// Print what was recorded.
    Show,
}

impl Command {
    /// Command words, for completion and help.
    pub const WORDS: [&'static str; 11] = [
        "name", "birth", "show", "why", "share", "open", "save", "load", "trace", "help", "quit",
    ];

    /// Parses one input line.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for an unknown command or a missing or
    /// malformed argument.
    pub fn parse(line: &str) -> Result<Self> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };
        let arg = (!rest.is_empty()).then(|| rest.to_string());
        let required = |usage: &str| -> Result<String> {
            if rest.is_empty() {
                Err(Error::invalid_argument(format!("usage: {usage}")))
            } else {
                Ok(rest.to_string())
            }
        };

        match word {
            "name" => Ok(Self::Name(required("name <hiragana or romaji>")?)),
            "birth" => Ok(Self::Birth(required("birth <YYYY-MM-DD>")?)),
            "show" => Ok(Self::Show),
            "why" => Ok(Self::Why(arg.map(|a| a.parse()).transpose()?)),
            "share" => Ok(Self::Share(arg)),
            "open" => Ok(Self::Open(required("open <share link>")?)),
            "save" => Ok(Self::Save(required("save <path>")?.into())),
            "load" => Ok(Self::Load(required("load <path>")?.into())),
            "trace" => match rest {
                "on" => Ok(Self::Trace(TraceCommand::On)),
                "off" => Ok(Self::Trace(TraceCommand::Off)),
                "" | "show" => Ok(Self::Trace(TraceCommand::Show)),
                _ => Err(Error::invalid_argument("usage: trace on|off|show")),
            },
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            _ => Err(Error::invalid_argument(format!(
                "unknown command '{word}' (try `help`)"
            ))),
        }
    }
}

// =============================================================================
// REPL
// =============================================================================

/// The interactive REPL.
pub struct Repl<E: LineEditor = RustylineEditor> {
    /// The line editor for input.
    editor: E,

    /// Session state (inputs, reading, settings).
    session: Session,

    /// Whether to show the welcome banner.
    show_banner: bool,

    /// Primary prompt.
    prompt: String,
}

impl Repl<RustylineEditor> {
    /// Creates a new REPL with the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new() -> Result<Self> {
        let editor = RustylineEditor::new()?;
        Ok(Self::with_editor(editor))
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a new REPL with the given editor.
    pub fn with_editor(mut editor: E) -> Self {
        editor.set_commands(Command::WORDS.iter().map(ToString::to_string).collect());
        Self {
            editor,
            session: Session::new(),
            show_banner: true,
            prompt: "数> ".to_string(),
        }
    }

    /// Sets the session for this REPL.
    #[must_use]
    pub fn with_session(mut self, session: Session) -> Self {
        self.session = session;
        self
    }

    /// Disables the welcome banner.
    #[must_use]
    pub const fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Sets the primary prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Returns a reference to the session.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Returns a mutable reference to the session.
    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// Runs the REPL loop until EOF or `quit`.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            print_banner();
        }

        while self.read_eval_print()? {}

        println!("\nさようなら");
        Ok(())
    }

    /// Executes one read-eval-print iteration.
    ///
    /// Returns `Ok(true)` to continue, `Ok(false)` to exit.
    fn read_eval_print(&mut self) -> Result<bool> {
        let line = match self.editor.read_line(&self.prompt)? {
            ReadResult::Line(line) => line,
            ReadResult::Interrupted => {
                println!();
                return Ok(true);
            }
            ReadResult::Eof => return Ok(false),
        };

        if line.trim().is_empty() {
            return Ok(true);
        }
        self.editor.add_history(&line);

        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(e) => {
                print_error(&e);
                return Ok(true);
            }
        };
        if command == Command::Quit {
            return Ok(false);
        }

        match self.execute(command) {
            Ok(output) if output.is_empty() => {}
            Ok(output) => println!("{}", output.trim_end()),
            Err(e) => print_error(&e),
        }
        Ok(true)
    }

    /// Executes a command, returning the text to print.
    ///
    /// # Errors
    ///
    /// Returns the error from the session operation.
    pub fn execute(&mut self, command: Command) -> Result<String> {
        let session = &mut self.session;
        match command {
            Command::Name(raw) => Ok(format!("spelling: {}", session.set_name(&raw)?)),
            Command::Birth(raw) => Ok(format!("birth: {}", session.set_birth(&raw)?)),
            Command::Show => session.report(),
            Command::Why(Some(number)) => Ok(session.explain(number)?.to_string()),
            Command::Why(None) => Ok(session
                .explain_all()?
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("\n")),
            Command::Share(base) => session.share(base.as_deref()),
            Command::Open(link) => {
                session.open_share(&link)?;
                session.report()
            }
            Command::Save(path) => {
                session.save(&path)?;
                Ok(format!("saved to {}", path.display()))
            }
            Command::Load(path) => {
                session.load(&path)?;
                session.report()
            }
            Command::Trace(TraceCommand::On) => {
                session.tracer_mut().enable();
                Ok("tracing on".to_string())
            }
            Command::Trace(TraceCommand::Off) => {
                session.tracer_mut().disable();
                Ok("tracing off".to_string())
            }
            Command::Trace(TraceCommand::Show) => {
                let tracer = session.tracer();
                let records: Vec<_> = tracer.buffer().iter().collect();
                Ok(tracer.format_records(&records))
            }
            Command::Help => Ok(help_text().to_string()),
            Command::Quit => Ok(String::new()),
        }
    }

    /// Executes one line; convenience for scripting and tests.
    ///
    /// # Errors
    ///
    /// Returns parse or execution errors.
    pub fn eval(&mut self, line: &str) -> Result<String> {
        let command = Command::parse(line)?;
        self.execute(command)
    }
}

fn print_error(error: &Error) {
    eprintln!("\x1b[31mError: {error}\x1b[0m");
}

fn print_banner() {
    println!("\x1b[1;35mnumerology v{}\x1b[0m", env!("CARGO_PKG_VERSION"));
    println!("Type `help` for commands. Use Ctrl+D to exit.\n");
    let _ = io::stdout().flush();
}

fn help_text() -> &'static str {
    "\
name <name>         set the name (hiragana or lowercase romaji)
birth <YYYY-MM-DD>  set the birth date
show                print the reading
why [number]        explain a core number (life-path, destiny, soul,
                    personality, maturity, birthday, challenge)
share [url]         print a share link
open <link>         read name and birth date from a share link
save <path>         save the reading
load <path>         load a saved reading
trace on|off|show   record and print trace events
help                this text
quit                leave"
}
