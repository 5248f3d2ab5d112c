use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use ose_rules::{Ability, Engine, GenerationMethod, RandomSource};

use super::{Output, parse_class, print_json};

pub fn create<R: RandomSource>(
    engine: &mut Engine<R>,
    class: &str,
    method: &str,
    output: Output,
) -> Result<(), String> {
    let class = parse_class(class)?;
    let method = method
        .parse::<GenerationMethod>()
        .map_err(|e| e.to_string())?;
    let bundle = engine
        .generate_character_stats(class, method)
        .map_err(|e| e.to_string())?;

    if output == Output::Json {
        return print_json(&bundle);
    }

    println!(
        "  {} {}",
        bundle.class.to_string().bold(),
        format!("(level 1, {method})").dimmed()
    );
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Ability", "Score", "Modifier"]);
    for ability in Ability::ALL {
        table.add_row(vec![
            ability.abbreviation().to_string(),
            bundle.scores.get(ability).to_string(),
            format!("{:+}", bundle.scores.modifier(ability)),
        ]);
    }
    println!("{table}");
    println!();

    println!("  hp:    {}/{}", bundle.current_hp, bundle.max_hp);
    println!("  ac:    {}", bundle.armor_class);
    println!("  gold:  {} gp", bundle.gold);
    println!();

    println!("  {}", "Equipment".bold().underline());
    for item in &bundle.equipment {
        match (item.damage, item.ac_bonus) {
            (Some(damage), _) => println!("    {} {}", item.name, format!("({damage})").dimmed()),
            (None, bonus) if bonus != 0 => {
                println!("    {} {}", item.name, format!("(AC +{bonus})").dimmed())
            }
            _ => println!("    {}", item.name),
        }
    }

    if !bundle.spells.is_empty() {
        println!();
        println!("  {}", "Spells".bold().underline());
        for spell in &bundle.spells {
            println!("    {} {}", spell.name, spell.description.dimmed());
        }
    }

    if !bundle.skills.is_empty() {
        println!();
        println!("  {}", "Skills".bold().underline());
        for skill in &bundle.skills {
            println!("    {:<24} {}", skill.name, skill.value);
        }
    }

    Ok(())
}

pub fn level_up<R: RandomSource>(
    engine: &mut Engine<R>,
    class: &str,
    level: u32,
    constitution: i32,
    output: Output,
) -> Result<(), String> {
    let class = parse_class(class)?;
    let advance = engine
        .advance_level(class, level, constitution)
        .map_err(|e| e.to_string())?;

    if output == Output::Json {
        return print_json(&advance);
    }

    if advance.leveled_up {
        println!(
            "  {} reaches level {}",
            class.to_string().bold(),
            advance.new_level.to_string().green()
        );
    } else {
        println!(
            "  {} stays at level {} {}",
            class.to_string().bold(),
            advance.new_level,
            "(class maximum)".dimmed()
        );
    }
    println!("  hp gained: {}", advance.hp_gain);

    Ok(())
}
