use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use ose_rules::character::experience_for_level;
use ose_rules::classes::{SaveType, saving_throw, thac0};
use ose_rules::{CharacterClass, ClassDefinition};
use serde::Serialize;

use super::{Output, parse_class, print_json};

pub fn list(output: Output) -> Result<(), String> {
    let definitions: Vec<&ClassDefinition> = CharacterClass::ALL
        .iter()
        .map(|class| class.definition())
        .collect();

    if output == Output::Json {
        return print_json(&definitions);
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        "Class",
        "Prime",
        "Hit Dice",
        "Max Level",
        "Gold",
        "Spells",
        "Skills",
    ]);

    for def in &definitions {
        table.add_row(vec![
            def.name.to_string(),
            def.primary.abbreviation().to_string(),
            format!("{} to {}", def.hit_dice.dice, def.hit_dice.max_level),
            def.max_level.to_string(),
            format!("{} x 10", def.starting_gold),
            def.starting_spells.to_string(),
            def.skills.len().to_string(),
        ]);
    }

    println!("{table}");
    Ok(())
}

#[derive(Serialize)]
struct LevelRow {
    level: u32,
    experience: u32,
    thac0: i32,
    saves: [i32; 5],
}

pub fn progression(class: &str, output: Output) -> Result<(), String> {
    let class = parse_class(class)?;
    let max_level = class.definition().max_level;

    let rows = (1..=max_level)
        .map(|level| {
            let mut saves = [0; 5];
            for (slot, save) in saves.iter_mut().zip(SaveType::ALL) {
                *slot = saving_throw(class, level, save)?;
            }
            Ok(LevelRow {
                level,
                experience: experience_for_level(level)?,
                thac0: thac0(class, level)?,
                saves,
            })
        })
        .collect::<Result<Vec<_>, ose_rules::RulesError>>()
        .map_err(|e| e.to_string())?;

    if output == Output::Json {
        return print_json(&rows);
    }

    println!("  {} {}", class.to_string().bold(), "progression".dimmed());
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    let mut header = vec!["Level".to_string(), "XP".to_string(), "THAC0".to_string()];
    header.extend(SaveType::ALL.iter().map(|s| s.to_string()));
    table.set_header(header);

    for row in &rows {
        let mut cells = vec![
            row.level.to_string(),
            row.experience.to_string(),
            row.thac0.to_string(),
        ];
        cells.extend(row.saves.iter().map(|s| s.to_string()));
        table.add_row(cells);
    }

    println!("{table}");
    Ok(())
}
