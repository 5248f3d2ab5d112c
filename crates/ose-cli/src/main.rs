//! CLI frontend for the Old-School Essentials rules engine.

mod commands;

use std::process;

use clap::{Parser, Subcommand};
use ose_rules::Engine;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use commands::Output;

#[derive(Parser)]
#[command(
    name = "ose",
    about = "Old-School Essentials rules engine: characters, dice and checks",
    version,
    propagate_version = true
)]
struct Cli {
    /// Seed for the random source; the same seed replays the same rolls
    #[arg(long, global = true, env = "OSE_SEED")]
    seed: Option<u64>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Roll a dice expression such as 3d6, d20+2 or 2d6-1
    Roll {
        /// Dice notation
        notation: String,
    },

    /// Create a level 1 character
    Character {
        /// Class (fighter, cleric, magic-user, thief, dwarf, elf, halfling)
        class: String,

        /// Ability generation: classic, heroic or reroll-low
        #[arg(short, long, default_value = "classic")]
        method: String,
    },

    /// Advance a character one level and roll the hit points gained
    LevelUp {
        /// Class of the character
        class: String,

        /// Current level
        #[arg(short, long)]
        level: u32,

        /// Constitution score
        #[arg(short, long, default_value_t = 10)]
        con: i32,
    },

    /// Roll an attack against an armour class
    Attack {
        /// Class of the attacker
        class: String,

        /// Level of the attacker
        #[arg(short, long, default_value_t = 1)]
        level: u32,

        /// Armour class of the target
        #[arg(long, allow_negative_numbers = true)]
        ac: i32,

        /// Modifier added to the d20
        #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
        modifier: i32,
    },

    /// Roll a saving throw
    Save {
        /// Class of the character
        class: String,

        /// Save category (death, wands, paralysis, breath, spells)
        save: String,

        /// Level of the character
        #[arg(short, long, default_value_t = 1)]
        level: u32,

        /// Modifier added to the d20
        #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
        modifier: i32,
    },

    /// Roll d20 under an ability score
    Check {
        /// Score to roll under
        #[arg(allow_negative_numbers = true)]
        threshold: i32,

        /// Modifier added to the d20
        #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
        modifier: i32,
    },

    /// Roll 2d6 morale
    Morale {
        /// Modifier added to the roll
        #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
        modifier: i32,
    },

    /// Roll a d6 under a chance in six
    Luck {
        /// Chance in six
        #[arg(allow_negative_numbers = true)]
        threshold: i32,
    },

    /// Roll 1d6 initiative
    Initiative {
        /// Modifier added to the roll
        #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
        modifier: i32,
    },

    /// List the character classes
    Classes,

    /// Show the level table of a class: experience, THAC0 and saves
    Progression {
        /// Class to show
        class: String,
    },
}

fn main() {
    init_tracing();

    let cli = Cli::parse();
    let output = if cli.json { Output::Json } else { Output::Text };
    debug!(seed = ?cli.seed, json = cli.json, "starting");
    let mut engine = match cli.seed {
        Some(seed) => Engine::seeded(seed),
        None => Engine::from_entropy(),
    };

    let result = match cli.command {
        Commands::Roll { notation } => commands::roll::run(&mut engine, &notation, output),
        Commands::Character { class, method } => {
            commands::character::create(&mut engine, &class, &method, output)
        }
        Commands::LevelUp { class, level, con } => {
            commands::character::level_up(&mut engine, &class, level, con, output)
        }
        Commands::Attack {
            class,
            level,
            ac,
            modifier,
        } => commands::resolve::attack(&mut engine, &class, level, ac, modifier, output),
        Commands::Save {
            class,
            save,
            level,
            modifier,
        } => commands::resolve::save(&mut engine, &class, &save, level, modifier, output),
        Commands::Check {
            threshold,
            modifier,
        } => commands::resolve::ability_check(&mut engine, threshold, modifier, output),
        Commands::Morale { modifier } => commands::resolve::morale(&mut engine, modifier, output),
        Commands::Luck { threshold } => commands::resolve::luck(&mut engine, threshold, output),
        Commands::Initiative { modifier } => {
            commands::resolve::initiative(&mut engine, modifier, output)
        }
        Commands::Classes => commands::classes::list(output),
        Commands::Progression { class } => commands::classes::progression(&class, output),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

/// Send engine events to stderr, filtered by `OSE_LOG` (default `warn`).
fn init_tracing() {
    let filter = EnvFilter::try_from_env("OSE_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
