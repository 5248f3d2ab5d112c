use colored::Colorize;
use ose_rules::{DiceSpec, Engine, RandomSource};

use super::{Output, print_json};

pub fn run<R: RandomSource>(
    engine: &mut Engine<R>,
    notation: &str,
    output: Output,
) -> Result<(), String> {
    let spec = notation.parse::<DiceSpec>().map_err(|e| e.to_string())?;
    let result = engine.roll_spec(spec).map_err(|e| e.to_string())?;

    match output {
        Output::Json => print_json(&result),
        Output::Text => {
            println!("  {} {}", spec.to_string().bold(), result);
            Ok(())
        }
    }
}
