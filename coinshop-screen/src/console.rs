//! Line-based terminal front end for the purchase screen.
//!
//! Each stdin line is either a user command or, prefixed with `host`, a
//! message posted by the host shell. The screen is re-rendered to stdout
//! after every user command.

use coinshop_core::api::CoinShopApi;
use coinshop_core::events::{HostMessage, UserAction};
use coinshop_core::screen::{CoinPurchaseScreen, SCREEN_TITLE};
use serde_json::Value;
use std::fmt::Write as _;
use thiserror::Error;

pub const HELP: &str = "\
commands:
  list              show the screen again
  select <id>       pick a coin package
  buy               recharge with the selected package
  ok | dismiss      close the dialog
  host <json>       post a message from the host shell
  help              show this help
  quit              leave";

/// One parsed stdin line.
#[derive(Debug, Clone, PartialEq)]
pub enum ConsoleInput {
    /// Posted by the host shell, bound for the bridge.
    Host(HostMessage),
    Command(ConsoleCommand),
}

/// A command for the screen loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    Action(UserAction),
    Render,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    #[error("usage: {0}")]
    Usage(&'static str),
}

/// Parse one input line. Blank lines yield `None`.
pub fn parse_line(line: &str) -> Result<Option<ConsoleInput>, ParseError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_ascii_lowercase().as_str() {
        "list" | "ls" => ConsoleCommand::Render,
        "select" | "pick" => {
            if rest.is_empty() {
                return Err(ParseError::Usage("select <package id>"));
            }
            ConsoleCommand::Action(UserAction::Select {
                package_id: rest.to_string(),
            })
        }
        "buy" | "recharge" => ConsoleCommand::Action(UserAction::Submit),
        "ok" | "close" | "dismiss" => ConsoleCommand::Action(UserAction::DismissFeedback),
        "host" => {
            if rest.is_empty() {
                return Err(ParseError::Usage("host <json payload>"));
            }
            // The host may post anything; text that is not JSON is kept as a
            // plain string payload.
            let payload = match serde_json::from_str(rest) {
                Ok(value) => value,
                Err(_) => Value::String(rest.to_string()),
            };
            return Ok(Some(ConsoleInput::Host(HostMessage::new(payload))));
        }
        "help" | "?" => ConsoleCommand::Help,
        "quit" | "exit" | "q" => ConsoleCommand::Quit,
        other => return Err(ParseError::UnknownCommand(other.to_string())),
    };
    Ok(Some(ConsoleInput::Command(command)))
}

/// Render the whole screen as text.
pub fn render<A: CoinShopApi>(screen: &CoinPurchaseScreen<A>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "← {SCREEN_TITLE}");
    let _ = writeln!(out, "{}", "-".repeat(40));

    if screen.catalog().is_empty() {
        let _ = writeln!(out, "  (no coin packages)");
    }
    for package in screen.catalog() {
        let marker = if screen.is_selected(&package.id) { "*" } else { " " };
        let _ = writeln!(
            out,
            " [{marker}] {:<10} {:>6} coins   {:<14} was {}",
            package.id,
            package.coin,
            package.price_line(),
            package.original_price_line(),
        );
    }

    let button = screen.submit_button();
    let state = if button.enabled { "" } else { " (disabled)" };
    let _ = writeln!(out);
    let _ = writeln!(out, "[ {} ]{state}", button.label);

    if let Some(feedback) = screen.feedback() {
        let _ = writeln!(out);
        let _ = writeln!(out, "== {} ==", feedback.title);
        let _ = writeln!(out, "{}", feedback.message);
        let _ = writeln!(out, "[ {} ]", feedback.severity.acknowledge_label());
    }
    out
}
