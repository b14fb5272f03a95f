//! Kotoba Crawl - terminal entry point
//!
//! Builds the word pool from the starter vocabulary, then runs a line-based
//! loop: start fights, answer words in romaji, heal between fights.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use kotoba_crawl::battle::{BattlePhase, BattleSession, Transition};
use kotoba_crawl::core::error::{KotobaError, Result};
use kotoba_crawl::core::GameConfig;
use kotoba_crawl::kana::{KanaTransliterator, Transliterator};
use kotoba_crawl::lexicon::{starter_source, FrequencyList, WordPool};
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "kotoba-crawl")]
#[command(about = "Fight enemies by reading Japanese vocabulary")]
struct Args {
    /// Random seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// TOML game config (defaults are used when omitted)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Word frequency list, `word,score` or `word<TAB>score` per line
    #[arg(long)]
    frequency_list: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("kotoba_crawl=info")),
        )
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };

    let frequencies = args
        .frequency_list
        .as_deref()
        .map(FrequencyList::load_or_empty);

    let pool = WordPool::build(&starter_source(), frequencies.as_ref(), &config.ingestion);
    let transliterator = KanaTransliterator::new();
    let rng = match args.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };

    let mut session = BattleSession::new(&pool, &transliterator, &config, rng);

    println!("\n=== KOTOBA CRAWL ===");
    println!("Read the word, type its reading in romaji.");
    println!();
    println!("Commands:");
    println!("  fight / f   - Start an encounter");
    println!("  heal / h    - Recover {} hp", config.player.heal_amount);
    println!("  status / s  - Show player state as JSON");
    println!("  quit / q    - Exit");
    println!("  :abort      - Flee the current encounter");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        if session.phase() == BattlePhase::Defeat {
            break;
        }

        print_stats(&session);
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else { break };
        let input = line?;
        let input = input.trim();

        match input {
            "" => continue,
            "quit" | "q" => break,
            "status" | "s" => {
                println!("{}", serde_json::to_string_pretty(&session.view()).unwrap_or_default());
            }
            "heal" | "h" => match session.heal() {
                Ok(restored) => println!("Recovered {} hp.", restored),
                Err(e) => println!("{}", e),
            },
            "fight" | "f" => match session.start_encounter() {
                Ok(_) => run_encounter(&mut session, &mut lines)?,
                Err(KotobaError::NoVocabulary) => {
                    println!("No words loaded - nothing to fight.");
                    break;
                }
                Err(e) => println!("{}", e),
            },
            _ => println!("Unknown command. Available: fight, heal, status, quit"),
        }
    }

    let progress = session.player().progress();
    println!(
        "\nFinal state: level {}, {} xp.",
        progress.level, progress.total_xp
    );
    Ok(())
}

/// Play one encounter to its end (victory, defeat, abort or end of input)
fn run_encounter<T, R, I>(session: &mut BattleSession<'_, T, R>, lines: &mut I) -> Result<()>
where
    T: Transliterator + ?Sized,
    R: Rng,
    I: Iterator<Item = io::Result<String>>,
{
    if let Some(enemy) = session.enemy() {
        println!(
            "\nA tier {} enemy appears! (hp {}, hits for {})",
            enemy.tier(),
            enemy.hp(),
            enemy.damage()
        );
    }

    loop {
        let prompt = session.present_word()?;
        println!("\n   {}   (enemy hp {})", prompt.surface, prompt.enemy_hp);
        print!("→ ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else { return Ok(()) };
        let line = line?;
        if line.trim() == ":abort" {
            session.abort_encounter()?;
            println!("You fled.");
            return Ok(());
        }

        let outcome = session.submit(&line)?;
        let verdict = &outcome.verdict;
        if verdict.correct {
            println!(
                "✓ Correct! {} dmg (streak {}) | Meaning: {}",
                outcome.damage_dealt, outcome.streak, verdict.meaning
            );
        } else {
            println!(
                "✗ Wrong ({})! Correct: {} | Meaning: {} | -{} hp",
                verdict.candidate, verdict.best_reading, verdict.meaning, outcome.damage_taken
            );
        }

        match session.advance()? {
            Transition::NextWord { replenished, .. } => {
                if replenished {
                    println!("The enemy recalls its words...");
                }
            }
            Transition::EncounterResolved { xp_gained, level_up } => {
                println!("Enemy defeated! XP +{}", xp_gained);
                if let Some(up) = level_up {
                    println!("LEVEL UP! Now level {}! Max tier: {}", up.to, up.max_tier);
                }
                return Ok(());
            }
            Transition::Defeat(report) => {
                println!("\nGAME OVER\nLevel: {}\nXP: {}", report.level, report.xp);
                return Ok(());
            }
        }
    }
}

fn print_stats<T: Transliterator + ?Sized, R: Rng>(session: &BattleSession<'_, T, R>) {
    let player = session.player();
    let progress = player.progress();
    println!(
        "HP {}/{} | Level {} | XP {}/{} | Streak {} | Max Tier: {}",
        player.hp(),
        player.max_hp(),
        progress.level,
        progress.xp_into_level,
        progress.xp_for_next,
        player.streak(),
        progress.max_tier
    );
}
