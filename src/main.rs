// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

use anyhow::{anyhow, Result};
use spell::config::Catalog;
use spell::music::{
    dump, make_formula, make_intervals, mode, modes_on, IntervalType, Resolution, KEYS,
    MAJOR_SCALE,
};
use std::env;
use tracing::Level;

fn print_usage() {
    println!("SPELL - Enharmonic note speller");
    println!();
    println!("Usage: spell [--catalog <PATH>] <COMMAND>");
    println!();
    println!("Commands:");
    println!("  --scale <KEY> <NAME>              Spell a catalog scale in KEY");
    println!("  --chord <KEY> <NAME>              Spell a catalog chord in KEY");
    println!("  --formula <KEY> <FORMULA> [TYPE]  Spell a comma-separated interval formula");
    println!("  --intervals <KEY> [TYPE]          Show every interval label spelled in KEY");
    println!("  --modes <KEY>                     Show the modes of KEY major");
    println!("  --modes-on <TONIC>                Show every mode that starts on TONIC");
    println!("  --all <NAME>                      Spell a catalog scale in every key");
    println!("  --list                            List catalog scales, chords and modes");
    println!("  --check                           Validate the catalog");
    println!("  --help                            Show this help message");
    println!();
    println!("TYPE is 'major' (1, b3, #11, ...) or 'standard' (P1, m3, A4, ...); default major.");
    println!("Set SPELL_LOG=debug to trace how each interval is resolved.");
}

fn init_logging() {
    let level = env::var("SPELL_LOG")
        .ok()
        .and_then(|v| v.parse::<Level>().ok())
        .unwrap_or(Level::WARN);

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

/// Positional argument `index`, or an error naming what is missing
fn arg<'a>(args: &'a [String], index: usize, command: &str, what: &str) -> Result<&'a str> {
    args.get(index)
        .map(String::as_str)
        .ok_or_else(|| anyhow!("{} requires {}", command, what))
}

/// Optional interval type argument, defaulting to major
fn interval_type_arg(args: &[String], index: usize) -> Result<IntervalType> {
    match args.get(index) {
        Some(s) => Ok(s.parse()?),
        None => Ok(IntervalType::default()),
    }
}

/// Note the fallback spellings a printed formula used
fn print_ambiguous(resolution: &Resolution, formula: &str) {
    for report in resolution.ambiguous_in(formula) {
        println!("  ! {}", report);
    }
}

fn spell_formula(key: &str, label: &str, formula: &str, interval_type: IntervalType) -> Result<()> {
    let resolution = make_intervals(key, interval_type)?;
    let notes = make_formula(formula, &resolution)?;
    println!("{} {}: {}", dump(&[key]), label, dump(&notes));
    print_ambiguous(&resolution, formula);
    Ok(())
}

fn show_intervals(resolution: &Resolution) {
    println!(
        "{} intervals in {}:",
        resolution.interval_type(),
        dump(&[resolution.key()])
    );

    for (label, note) in resolution.entries() {
        let marker = if resolution.ambiguous().iter().any(|r| r.label == label) {
            " !"
        } else {
            ""
        };
        println!("  {:<4} {}{}", label, dump(&[note]), marker);
    }

    if !resolution.is_exact() {
        println!();
        println!("Labels marked ! could not be spelled with their expected letter:");
        for report in resolution.ambiguous() {
            println!("  {}", report);
        }
    }
}

fn show_modes(catalog: &Catalog, key: &str) -> Result<()> {
    let resolution = make_intervals(key, IntervalType::Major)?;
    let major = make_formula(MAJOR_SCALE, &resolution)?;

    for (name, rotation) in catalog.modes_by_rotation() {
        let notes = mode(&major, rotation);
        println!("{} {:<11}: {}", dump(&notes[..1]), name, dump(&notes));
    }
    print_ambiguous(&resolution, MAJOR_SCALE);
    Ok(())
}

fn show_modes_on(tonic: &str) -> Result<()> {
    let found = modes_on(tonic)?;
    if found.is_empty() {
        println!("No modes start on {}", dump(&[tonic]));
    }
    for (m, notes) in found {
        println!("{} {:<11}: {}", dump(&notes[..1]), m.name(), dump(&notes));
    }
    Ok(())
}

fn show_all_keys(catalog: &Catalog, name: &str) -> Result<()> {
    let formula = catalog.scale(name)?;

    for key in KEYS {
        let resolution = make_intervals(key, IntervalType::Major)?;
        let notes = make_formula(formula, &resolution)?;
        let marker = if resolution.ambiguous_in(formula).is_empty() {
            ""
        } else {
            " !"
        };
        println!("{}: {}{}", dump(&[key]), dump(&notes), marker);
    }
    Ok(())
}

fn list_catalog(catalog: &Catalog) {
    println!("Scales:");
    for (name, formula) in &catalog.scales {
        println!("  {:<20} {}", name, formula);
    }
    println!("Chords:");
    for (name, formula) in &catalog.chords {
        println!("  {:<20} {}", name, formula);
    }
    println!("Modes:");
    for (name, rotation) in catalog.modes_by_rotation() {
        println!("  {:<20} {}", name, rotation);
    }
}

fn main() -> Result<()> {
    init_logging();

    let mut args: Vec<String> = env::args().skip(1).collect();

    let catalog = if args.first().map(String::as_str) == Some("--catalog") {
        if args.len() < 2 {
            eprintln!("Error: --catalog requires a file path");
            std::process::exit(1);
        }
        let path = args.remove(1);
        args.remove(0);
        let catalog = Catalog::load(&path)?;
        catalog.validate()?;
        catalog
    } else {
        Catalog::builtin()?
    };

    if args.is_empty() {
        println!("SPELL - Enharmonic note speller");
        println!("Run with --help for usage information");
        return Ok(());
    }

    let command = args[0].as_str();
    match command {
        "--scale" => {
            let key = arg(&args, 1, command, "a key")?;
            let name = arg(&args, 2, command, "a scale name")?;
            let formula = catalog.scale(name)?;
            spell_formula(key, name, formula, IntervalType::Major)?;
        }
        "--chord" => {
            let key = arg(&args, 1, command, "a key")?;
            let name = arg(&args, 2, command, "a chord name")?;
            let formula = catalog.chord(name)?;
            spell_formula(key, name, formula, IntervalType::Major)?;
        }
        "--formula" => {
            let key = arg(&args, 1, command, "a key")?;
            let formula = arg(&args, 2, command, "a formula")?;
            let interval_type = interval_type_arg(&args, 3)?;
            spell_formula(key, formula, formula, interval_type)?;
        }
        "--intervals" => {
            let key = arg(&args, 1, command, "a key")?;
            let interval_type = interval_type_arg(&args, 2)?;
            show_intervals(&make_intervals(key, interval_type)?);
        }
        "--modes" => {
            let key = arg(&args, 1, command, "a key")?;
            show_modes(&catalog, key)?;
        }
        "--modes-on" => {
            let tonic = arg(&args, 1, command, "a tonic")?;
            show_modes_on(tonic)?;
        }
        "--all" => {
            let name = arg(&args, 1, command, "a scale name")?;
            show_all_keys(&catalog, name)?;
        }
        "--list" => {
            list_catalog(&catalog);
        }
        "--check" => {
            catalog.validate()?;
            println!(
                "Catalog OK: {} scales, {} chords, {} modes",
                catalog.scales.len(),
                catalog.chords.len(),
                catalog.modes.len()
            );
        }
        "--help" | "-h" => {
            print_usage();
        }
        _ => {
            eprintln!("Unknown option: {}", command);
            print_usage();
            std::process::exit(1);
        }
    }

    Ok(())
}
