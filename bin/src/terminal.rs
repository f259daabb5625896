use colored::{Color, Colorize};
use rs_hangman::{Presenter, Style};
use std::io::{self, BufRead, Write};

const CLEAR_SCREEN: &str = "\x1B[2J\x1B[1;1H";

/// Where the terminal presenter reads from and writes to.
pub struct TerminalConfig {
    pub input: Box<dyn BufRead>,
    pub output: Box<dyn Write>,
    /// Whether to emit ANSI colors.
    pub color: bool,
}

/// Plays the game over a line-based terminal.
pub struct TerminalPresenter {
    input: Option<Box<dyn BufRead>>,
    output: Option<Box<dyn Write>>,
    color: bool,
}

impl TerminalPresenter {
    pub fn new(config: TerminalConfig) -> TerminalPresenter {
        TerminalPresenter {
            input: Some(config.input),
            output: Some(config.output),
            color: config.color,
        }
    }

    fn output(&mut self) -> io::Result<&mut Box<dyn Write>> {
        self.output.as_mut().ok_or_else(closed_error)
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.color {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn write_line(&mut self, text: &str, color: Color) -> io::Result<()> {
        let line = self.paint(text, color);
        writeln!(self.output()?, "{}", line)
    }
}

/// Strips all whitespace from the guess and converts it to lower case.
pub fn normalize_guess(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_lowercase()
}

fn closed_error() -> io::Error {
    io::Error::new(io::ErrorKind::NotConnected, "terminal has been closed")
}

impl Presenter for TerminalPresenter {
    fn request_guess(&mut self) -> io::Result<String> {
        let output = self.output()?;
        write!(output, "Enter your answer: ")?;
        output.flush()?;

        let input = self.input.as_mut().ok_or_else(closed_error)?;
        let mut buffer = String::new();
        if input.read_line(&mut buffer)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed before the game ended",
            ));
        }
        Ok(normalize_guess(&buffer))
    }

    fn show_banner(&mut self, title: &str) -> io::Result<()> {
        let title = title.to_uppercase();
        let border = format!("+{}+", "=".repeat(title.chars().count() + 8));
        let middle = format!("|    {}    |", title);
        let banner = if self.color {
            format!("{}\n{}\n{}", border, middle.bold(), border)
        } else {
            format!("{}\n{}\n{}", border, middle, border)
        };
        writeln!(self.output()?, "{}\n", banner)
    }

    fn show_prompt(&mut self, hint: &str, mask: &str, attempts_remaining: u32) -> io::Result<()> {
        let spaced = mask
            .chars()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        self.write_line(&format!("Hint: {}", hint), Color::Yellow)?;
        self.write_line(&spaced, Color::White)?;
        self.write_line(
            &format!("(Attempts left: {})", attempts_remaining),
            Color::Green,
        )
    }

    fn show_message(&mut self, text: &str, style: Style) -> io::Result<()> {
        let color = match style {
            Style::Neutral => Color::White,
            Style::Warn => Color::Red,
            Style::Success => Color::Green,
        };
        self.write_line(text, color)
    }

    fn clear_display(&mut self) -> io::Result<()> {
        let output = self.output()?;
        write!(output, "{}", CLEAR_SCREEN)?;
        output.flush()
    }

    fn close(&mut self) -> io::Result<()> {
        self.input = None;
        match self.output.take() {
            Some(mut output) => output.flush(),
            None => Ok(()),
        }
    }
}

impl Drop for TerminalPresenter {
    fn drop(&mut self) {
        let _ = self.close();
    }
}
