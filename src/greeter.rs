//! The greeter: a small interactive program assembled from effects.
//!
//! The program prompts for a name, reads it, and checks it against the
//! accepted name. A match prints the welcome message and succeeds with the
//! name. A mismatch prints the rejection message and fails, and the whole
//! prompt/read/check sequence is retried until it succeeds or the attempt
//! budget runs out.
//!
//! # Examples
//!
//! ```rust
//! use effio::console::ScriptedConsole;
//! use effio::greeter::{self, GreeterConfig};
//! use std::rc::Rc;
//!
//! let console = Rc::new(ScriptedConsole::new(["Bob", "Joe"]));
//! let program = greeter::program(&console, &GreeterConfig::default().with_attempts(2));
//!
//! assert_eq!(program.run().unwrap(), "Joe");
//! assert_eq!(
//!     console.outputs(),
//!     vec![
//!         "What's your name?".to_string(),
//!         "Sorry, Bob. You are not allowed in.".to_string(),
//!         "What's your name?".to_string(),
//!         "Welcome, Joe!".to_string(),
//!     ]
//! );
//! ```

use std::rc::Rc;

use crate::console::{Console, print_line, read_line};
use crate::effect::Effect;

const NAME_PLACEHOLDER: &str = "{name}";

/// Settings for the greeter program.
///
/// `welcome` and `rejection` may contain `{name}`, which is replaced with
/// the name that was read.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GreeterConfig {
    /// The only name that is let in.
    pub accepted_name: String,
    /// How many times the prompt/read/check sequence may run.
    pub attempts: usize,
    /// Line printed before each read.
    pub prompt: String,
    /// Line printed when the accepted name is entered.
    pub welcome: String,
    /// Line printed when any other name is entered.
    pub rejection: String,
}

impl Default for GreeterConfig {
    fn default() -> Self {
        Self {
            accepted_name: "Joe".to_owned(),
            attempts: 3,
            prompt: "What's your name?".to_owned(),
            welcome: "Welcome, {name}!".to_owned(),
            rejection: "Sorry, {name}. You are not allowed in.".to_owned(),
        }
    }
}

impl GreeterConfig {
    /// Sets the accepted name.
    #[must_use]
    pub fn with_accepted_name(mut self, accepted_name: impl Into<String>) -> Self {
        self.accepted_name = accepted_name.into();
        self
    }

    /// Sets the attempt budget.
    #[must_use]
    pub fn with_attempts(mut self, attempts: usize) -> Self {
        self.attempts = attempts;
        self
    }

    /// Sets the prompt line.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Sets the welcome line template.
    #[must_use]
    pub fn with_welcome(mut self, welcome: impl Into<String>) -> Self {
        self.welcome = welcome.into();
        self
    }

    /// Sets the rejection line template.
    #[must_use]
    pub fn with_rejection(mut self, rejection: impl Into<String>) -> Self {
        self.rejection = rejection.into();
        self
    }

    /// Renders the welcome line for `name`.
    pub fn welcome_for(&self, name: &str) -> String {
        self.welcome.replace(NAME_PLACEHOLDER, name)
    }

    /// Renders the rejection line for `name`.
    pub fn rejection_for(&self, name: &str) -> String {
        self.rejection.replace(NAME_PLACEHOLDER, name)
    }
}

/// Describes the greeter program against `console`.
///
/// Running the returned effect yields the accepted name, or fails with
/// [`Failure::RetryExhausted`](crate::effect::Failure::RetryExhausted) once
/// `config.attempts` names have been rejected. Input running out fails the
/// attempt like any other failure.
pub fn program<C>(console: &Rc<C>, config: &GreeterConfig) -> Effect<String>
where
    C: Console + ?Sized + 'static,
{
    let check = {
        let console = Rc::clone(console);
        let config = config.clone();
        move |name: String| check_name(&console, &config, name)
    };

    print_line(console, config.prompt.clone())
        .then(read_line(console))
        .and_then(check)
        .retry(config.attempts)
}

fn check_name<C>(console: &Rc<C>, config: &GreeterConfig, name: String) -> Effect<String>
where
    C: Console + ?Sized + 'static,
{
    let welcome = print_line(console, config.welcome_for(&name));
    let reject = print_line(console, config.rejection_for(&name))
        .then(Effect::fail(format!("{name} is not {}", config.accepted_name)));

    Effect::if_else(
        name == config.accepted_name,
        welcome.map(move |()| name.clone()),
        reject,
    )
}
