//! Line-oriented calculator session.
//!
//! Each input line is a sequence of button presses; after every line the
//! display is printed. Lines starting with `:` are session commands.

use super::display::Display;
use super::keypad::Keypad;
use crate::calculator::{copy_to_clipboard, symbols};
use crate::config::Config;
use crate::error::Result;
use std::io::{BufRead, Write};
use tracing::{debug, warn};

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Help,
    Copy,
    Quit,
    Unknown(String),
}

impl Command {
    fn parse(input: &str) -> Self {
        match input.trim() {
            "help" | "h" | "?" => Self::Help,
            "copy" | "y" => Self::Copy,
            "quit" | "q" | "exit" => Self::Quit,
            other => Self::Unknown(other.to_string()),
        }
    }
}

/// Places text on a clipboard.
pub type ClipboardWriter = fn(&str) -> Result<()>;

#[derive(Debug)]
pub struct Session {
    config: Config,
    keypad: Keypad,
    display: Display,
    clipboard: ClipboardWriter,
}

impl Session {
    pub fn new(config: Config) -> Self {
        Self::with_clipboard(config, copy_to_clipboard)
    }

    /// A session that copies through `clipboard` instead of the system one.
    pub fn with_clipboard(config: Config, clipboard: ClipboardWriter) -> Self {
        Self {
            keypad: Keypad::new(&config.keypad),
            display: Display::new(),
            config,
            clipboard,
        }
    }

    pub fn display(&self) -> &Display {
        &self.display
    }

    /// Press every key on `line`, stopping at the first failure.
    pub fn feed(&mut self, line: &str) -> Result<()> {
        for key in self.keypad.keys(line) {
            self.display.press(&key)?;
        }
        Ok(())
    }

    /// The display as shown to the user.
    pub fn render(&self) -> String {
        self.display.render(&self.config.display)
    }

    /// Copy the shown number to the clipboard and return it.
    pub fn copy(&self) -> Result<String> {
        let text = self.display.clipboard_text(&self.config.display);
        (self.clipboard)(&text)?;
        Ok(text)
    }

    pub fn help(&self) -> String {
        let mut help = format!("buttons: 0-9 . {}\n", symbols().join(" "));
        let aliases: Vec<String> = self
            .keypad
            .aliases()
            .into_iter()
            .map(|(from, to)| format!("{}={}", from, to))
            .collect();
        help.push_str(&format!("aliases: {}\n", aliases.join(" ")));
        help.push_str("commands: :help :copy :quit");
        help
    }

    /// Run until `input` is exhausted or `:quit` is entered.
    ///
    /// Errors on a single line are reported to `output` and the session
    /// carries on; only I/O errors end it early.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        input: R,
        mut output: W,
        interactive: bool,
    ) -> Result<()> {
        self.prompt(&mut output, interactive)?;

        for line in input.lines() {
            let line = line?;
            let line = line.trim();

            if let Some(command) = line.strip_prefix(':') {
                match Command::parse(command) {
                    Command::Quit => break,
                    Command::Help => writeln!(output, "{}", self.help())?,
                    Command::Copy => match self.copy() {
                        Ok(text) => writeln!(output, "copied {}", text)?,
                        Err(e) => {
                            warn!(error = %e, "copy failed");
                            writeln!(output, "error: {}", describe(&e))?;
                        }
                    },
                    Command::Unknown(command) => {
                        writeln!(output, "unknown command ':{}' (try :help)", command)?
                    }
                }
            } else if !line.is_empty() {
                debug!(line, "input");
                match self.feed(line) {
                    Ok(()) => writeln!(output, "{}", self.render())?,
                    Err(e) => {
                        warn!(error = %e, line, "input rejected");
                        writeln!(output, "error: {}", describe(&e))?;
                    }
                }
            }

            self.prompt(&mut output, interactive)?;
        }

        output.flush()?;
        Ok(())
    }

    fn prompt<W: Write>(&self, output: &mut W, interactive: bool) -> Result<()> {
        if interactive {
            write!(output, "{}", self.config.session.prompt)?;
            output.flush()?;
        }
        Ok(())
    }
}

/// An error followed by its chain of causes.
fn describe(error: &dyn std::error::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(&format!(": {}", cause));
        source = cause.source();
    }
    message
}
