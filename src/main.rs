//! Swing Golf entry point
//!
//! Sets up logging and settings, then runs the interactive hole.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use swing_golf::sim::{Course, SwingError};
use swing_golf::{Settings, consts::TOLERANCE};

#[derive(Parser, Debug)]
#[command(about = "Play a single golf hole, one projectile swing at a time")]
struct Cli {
    /// JSON settings file
    #[arg(long)]
    config: Option<PathBuf>,
    /// Seed for the random hole length
    #[arg(long)]
    seed: Option<u64>,
    /// Fixed hole length in meters (skips random generation)
    #[arg(long)]
    length: Option<f64>,
    #[arg(long)]
    max_swings: Option<u32>,
    #[arg(long)]
    rough: Option<f64>,
    /// Print a JSON summary of the hole when it ends
    #[arg(long)]
    json: bool,
}

fn load_settings(cli: &Cli) -> Result<Settings> {
    let mut settings = match &cli.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    if cli.seed.is_some() {
        settings.seed = cli.seed;
    }
    if cli.max_swings.is_some() {
        settings.max_swings = cli.max_swings;
    }
    if let Some(rough) = cli.rough {
        settings.course_rough = rough;
    }
    settings.validate()?;
    Ok(settings)
}

/// Outcome of prompting for a number
enum Prompt {
    Value(f64),
    Quit,
}

fn prompt_number(rl: &mut DefaultEditor, label: &str) -> Result<Prompt> {
    loop {
        match rl.readline(label) {
            Ok(line) => {
                let input = line.trim();
                if input.is_empty() {
                    continue;
                }
                match input.parse::<f64>() {
                    Ok(value) => {
                        rl.add_history_entry(input)?;
                        return Ok(Prompt::Value(value));
                    }
                    Err(_) => println!("'{input}' is not a number."),
                }
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => return Ok(Prompt::Quit),
            Err(err) => return Err(err).context("read player input"),
        }
    }
}

fn print_status(course: &Course) {
    println!("Course Length {} meters", course.course_length());
    println!(
        "Course Rough {} meters (Max bounds: {} meters)",
        course.course_rough(),
        course.max_bounds()
    );
    println!("Distance to Hole: {:.2} meters", course.distance_from_hole());
    println!(
        "You have taken {} swings at this hole. (Max is {})",
        course.swing_counter(),
        course.max_swings()
    );
    println!("----------------");
    for swing in course.swings() {
        println!(
            "\tAngle:{}\tVelocity:{}\tDistance:{:.2} meters",
            swing.angle(),
            swing.velocity(),
            swing.distance()
        );
    }
    println!("----------------");
}

fn print_result(course: &Course) {
    if course.has_lost() {
        println!("You failed to reach the cup.");
        println!("Distance to Hole: {:.2} meters", course.distance_from_hole());
        if course.is_out_of_bounds() {
            println!("Because the golf ball is out of bounds.");
        }
        if course.swing_counter() >= course.max_swings() {
            println!("Because you took too many swings.");
        }
    } else if course.has_won() {
        println!("You reached the cup.");
        if course.is_hole_in_one() {
            println!("Hole in one!");
        }
    }
}

fn play(course: &mut Course) -> Result<()> {
    let mut rl = DefaultEditor::new().context("init line editor")?;

    while !course.has_ended() {
        print_status(course);

        let angle = match prompt_number(&mut rl, "Angle: ")? {
            Prompt::Value(v) => v,
            Prompt::Quit => return Ok(()),
        };
        let velocity = match prompt_number(&mut rl, "Velocity (only positive values): ")? {
            Prompt::Value(v) => v,
            Prompt::Quit => return Ok(()),
        };

        match course.swing(angle, velocity) {
            Ok(swing) => {
                println!("Distance: {:.2} meters", swing.distance());
                println!("----------------");
            }
            Err(err @ SwingError::AngleInvalid { .. }) => {
                println!("{err}");
                continue;
            }
            Err(SwingError::HoleFinished) => break,
        }
    }

    print_result(course);
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let settings = load_settings(&cli)?;

    let config = match cli.length {
        Some(length) => settings.course_for_length(length),
        None => {
            let (seed, mut rng) = settings.rng();
            log::info!("Generating hole with seed: {}", seed);
            settings.generate_course(&mut rng)
        }
    };
    log::info!(
        "Hole: length={} max_swings={} rough={} tolerance={}",
        config.course_length,
        config.max_swings,
        config.course_rough,
        TOLERANCE
    );

    let mut course = Course::with_config(config);
    play(&mut course)?;

    if cli.json {
        let summary = serde_json::to_string_pretty(&course.summary()).context("serialize summary")?;
        println!("{summary}");
    }
    Ok(())
}
