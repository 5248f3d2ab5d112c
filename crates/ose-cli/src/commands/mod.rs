pub mod character;
pub mod classes;
pub mod resolve;
pub mod roll;

use colored::{ColoredString, Colorize};
use ose_rules::CharacterClass;
use serde::Serialize;

/// How results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Output {
    Text,
    Json,
}

/// Print `value` as pretty JSON on stdout.
fn print_json<T: Serialize>(value: &T) -> Result<(), String> {
    let json = serde_json::to_string_pretty(value).map_err(|e| e.to_string())?;
    println!("{json}");
    Ok(())
}

fn parse_class(name: &str) -> Result<CharacterClass, String> {
    name.parse::<CharacterClass>().map_err(|e| e.to_string())
}

fn verdict(success: bool) -> ColoredString {
    if success {
        "Success".green().bold()
    } else {
        "Failure".red().bold()
    }
}

fn signed(value: i32) -> String {
    if value < 0 {
        format!("- {}", -value)
    } else {
        format!("+ {value}")
    }
}
