use colored::Colorize;
use ose_rules::{CheckOutcome, DiceRollResult, Engine, RandomSource, SaveType};

use super::{Output, parse_class, print_json, signed, verdict};

pub fn attack<R: RandomSource>(
    engine: &mut Engine<R>,
    class: &str,
    level: u32,
    armor_class: i32,
    modifier: i32,
    output: Output,
) -> Result<(), String> {
    let class = parse_class(class)?;
    let outcome = engine
        .resolve_attack(class, level, armor_class, modifier)
        .map_err(|e| e.to_string())?;

    if output == Output::Json {
        return print_json(&outcome);
    }

    println!(
        "  {} {} {}",
        "Attack".bold(),
        verdict(outcome.success),
        format!(
            "(THAC0 {} vs AC {}, needs {})",
            outcome.thac0, outcome.target_armor_class, outcome.target
        )
        .dimmed()
    );
    println!(
        "  rolled {} {} = {}",
        outcome.roll,
        signed(outcome.modifier),
        outcome.total
    );
    Ok(())
}

pub fn save<R: RandomSource>(
    engine: &mut Engine<R>,
    class: &str,
    save: &str,
    level: u32,
    modifier: i32,
    output: Output,
) -> Result<(), String> {
    let class = parse_class(class)?;
    let save = save.parse::<SaveType>().map_err(|e| e.to_string())?;
    let outcome = engine
        .resolve_save(class, level, save, modifier)
        .map_err(|e| e.to_string())?;

    if output == Output::Json {
        return print_json(&outcome);
    }

    println!(
        "  {} {} {}",
        format!("Save vs {save}").bold(),
        verdict(outcome.success),
        format!("(needs {})", outcome.threshold).dimmed()
    );
    println!(
        "  rolled {} {} = {}",
        outcome.roll,
        signed(outcome.modifier),
        outcome.total
    );
    Ok(())
}

pub fn ability_check<R: RandomSource>(
    engine: &mut Engine<R>,
    threshold: i32,
    modifier: i32,
    output: Output,
) -> Result<(), String> {
    let outcome = engine
        .resolve_ability_check(threshold, modifier)
        .map_err(|e| e.to_string())?;
    print_check("Ability check", &outcome, output)
}

pub fn luck<R: RandomSource>(
    engine: &mut Engine<R>,
    threshold: i32,
    output: Output,
) -> Result<(), String> {
    let outcome = engine
        .resolve_luck_check(threshold)
        .map_err(|e| e.to_string())?;
    print_check("Luck", &outcome, output)
}

pub fn morale<R: RandomSource>(
    engine: &mut Engine<R>,
    modifier: i32,
    output: Output,
) -> Result<(), String> {
    let result = engine.resolve_morale(modifier).map_err(|e| e.to_string())?;
    print_roll("Morale", &result, output)
}

pub fn initiative<R: RandomSource>(
    engine: &mut Engine<R>,
    modifier: i32,
    output: Output,
) -> Result<(), String> {
    let result = engine
        .resolve_initiative(modifier)
        .map_err(|e| e.to_string())?;
    print_roll("Initiative", &result, output)
}

fn print_check(label: &str, outcome: &CheckOutcome, output: Output) -> Result<(), String> {
    if output == Output::Json {
        return print_json(outcome);
    }
    println!(
        "  {} {} {}",
        label.bold(),
        verdict(outcome.success),
        format!("(needs {} or less)", outcome.threshold).dimmed()
    );
    println!(
        "  rolled {} {} = {}",
        outcome.roll,
        signed(outcome.modifier),
        outcome.total
    );
    Ok(())
}

fn print_roll(label: &str, result: &DiceRollResult, output: Output) -> Result<(), String> {
    if output == Output::Json {
        return print_json(result);
    }
    println!("  {} {}", label.bold(), result);
    Ok(())
}
