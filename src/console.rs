//! Console primitives and the effects that lift them.
//!
//! The host supplies line-oriented console access through the [`Console`]
//! trait. [`print_line`] and [`read_line`] turn a console into effects, so
//! nothing is written or read until the effect runs.
//!
//! # Examples
//!
//! ```rust
//! use effio::console::{self, ScriptedConsole};
//! use std::rc::Rc;
//!
//! let terminal = Rc::new(ScriptedConsole::new(["Ada"]));
//! let echo = console::read_line(&terminal)
//!     .and_then({
//!         let terminal = Rc::clone(&terminal);
//!         move |name| console::print_line(&terminal, format!("hi {name}"))
//!     });
//!
//! // Nothing has been read or written yet
//! assert!(terminal.outputs().is_empty());
//!
//! echo.run().unwrap();
//! assert_eq!(terminal.outputs(), vec!["hi Ada".to_string()]);
//! ```

use std::cell::RefCell;
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use std::rc::Rc;

use crate::effect::{Effect, Failure};

/// Message of the failure raised when the console has no more input.
pub const END_OF_INPUT: &str = "end of input";

/// Line-oriented console access supplied by the host.
pub trait Console {
    /// Writes `line` followed by a line terminator.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if the write fails.
    fn write_line(&self, line: &str) -> io::Result<()>;

    /// Reads one line without its line terminator.
    ///
    /// Returns `Ok(None)` once the input is exhausted.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if the read fails.
    fn read_line(&self) -> io::Result<Option<String>>;
}

/// Console backed by the process's standard output and standard input.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdConsole;

impl Console for StdConsole {
    fn write_line(&self, line: &str) -> io::Result<()> {
        let mut output = io::stdout().lock();
        writeln!(output, "{line}")?;
        output.flush()
    }

    fn read_line(&self) -> io::Result<Option<String>> {
        let mut buffer = String::new();
        if io::stdin().lock().read_line(&mut buffer)? == 0 {
            return Ok(None);
        }
        let trimmed = buffer.trim_end_matches(['\n', '\r']).len();
        buffer.truncate(trimmed);
        Ok(Some(buffer))
    }
}

/// In-memory console that replays queued input and records output.
///
/// # Examples
///
/// ```rust
/// use effio::console::{Console, ScriptedConsole};
///
/// let console = ScriptedConsole::new(["first"]);
/// assert_eq!(console.read_line().unwrap().as_deref(), Some("first"));
/// assert_eq!(console.read_line().unwrap(), None);
///
/// console.write_line("done").unwrap();
/// assert_eq!(console.outputs(), vec!["done".to_string()]);
/// ```
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    inputs: RefCell<VecDeque<String>>,
    outputs: RefCell<Vec<String>>,
}

impl ScriptedConsole {
    /// Creates a console that will answer reads with `inputs`, in order.
    pub fn new<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inputs: RefCell::new(inputs.into_iter().map(Into::into).collect()),
            outputs: RefCell::new(Vec::new()),
        }
    }

    /// Returns every line written so far.
    pub fn outputs(&self) -> Vec<String> {
        self.outputs.borrow().clone()
    }

    /// Counts how many times exactly `line` was written.
    pub fn count_output(&self, line: &str) -> usize {
        self.outputs
            .borrow()
            .iter()
            .filter(|written| written.as_str() == line)
            .count()
    }

    /// Returns how many queued input lines have not been read yet.
    pub fn remaining_inputs(&self) -> usize {
        self.inputs.borrow().len()
    }
}

impl Console for ScriptedConsole {
    fn write_line(&self, line: &str) -> io::Result<()> {
        self.outputs.borrow_mut().push(line.to_owned());
        Ok(())
    }

    fn read_line(&self) -> io::Result<Option<String>> {
        Ok(self.inputs.borrow_mut().pop_front())
    }
}

/// Describes writing `message` as one line to `console`.
///
/// An I/O error becomes a [`Failure`] whose cause is the `io::Error`.
pub fn print_line<C>(console: &Rc<C>, message: impl Into<String>) -> Effect<()>
where
    C: Console + ?Sized + 'static,
{
    let console = Rc::clone(console);
    let message = message.into();
    Effect::attempt(move || console.write_line(&message))
}

/// Describes reading one line from `console`.
///
/// Exhausted input fails with the message [`END_OF_INPUT`].
pub fn read_line<C>(console: &Rc<C>) -> Effect<String>
where
    C: Console + ?Sized + 'static,
{
    let console = Rc::clone(console);
    Effect::attempt(move || -> Result<String, Failure> {
        console
            .read_line()?
            .ok_or_else(|| Failure::new(END_OF_INPUT))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenConsole;

    impl Console for BrokenConsole {
        fn write_line(&self, _line: &str) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
        }

        fn read_line(&self) -> io::Result<Option<String>> {
            Err(io::Error::new(io::ErrorKind::Interrupted, "interrupted"))
        }
    }

    #[test]
    fn test_print_line_is_deferred() {
        let console = Rc::new(ScriptedConsole::default());
        let effect = print_line(&console, "hello");
        assert!(console.outputs().is_empty());

        effect.run().unwrap();
        effect.run().unwrap();
        assert_eq!(console.count_output("hello"), 2);
    }

    #[test]
    fn test_read_line_consumes_one_input_per_run() {
        let console = Rc::new(ScriptedConsole::new(["a", "b"]));
        let effect = read_line(&console);
        assert_eq!(console.remaining_inputs(), 2);

        assert_eq!(effect.run().unwrap(), "a");
        assert_eq!(effect.run().unwrap(), "b");
        assert_eq!(effect.run().unwrap_err().message(), END_OF_INPUT);
    }

    #[test]
    fn test_write_error_is_cause() {
        use std::error::Error;

        let console = Rc::new(BrokenConsole);
        let failure = print_line(&console, "lost").run().unwrap_err();
        assert_eq!(failure.message(), "pipe closed");
        assert!(failure.source().is_some());
    }

    #[test]
    fn test_read_error_propagates() {
        let console = Rc::new(BrokenConsole);
        let failure = read_line(&console).run().unwrap_err();
        assert_eq!(failure.message(), "interrupted");
    }

    #[test]
    fn test_dyn_console_is_accepted() {
        let console: Rc<dyn Console> = Rc::new(ScriptedConsole::new(["x"]));
        assert_eq!(read_line(&console).run().unwrap(), "x");
    }
}
