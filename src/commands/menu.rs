//! Interactive menu mode
//!
//! Presents the five feature modes in a readline loop and keeps a
//! single session alive across selections, so a calorie target computed
//! by the BMI calculator is picked up by the diet chart generator later
//! in the same run.

use super::{run_bmi, run_calorie_advisor, run_diet_chart, run_lifestyle, run_recipe};
use crate::config::Config;
use crate::error::{NutriSenseError, Result};
use crate::session::Session;
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::Path;

/// Run the interactive menu until the user quits
pub async fn run_menu(config: Config) -> Result<()> {
    let mut rl = DefaultEditor::new()?;
    let mut session = Session::new();

    print_banner();

    loop {
        match rl.readline(&format!("{} ", "nutrisense>".green())) {
            Ok(line) => {
                let choice = line.trim();
                if choice.is_empty() {
                    continue;
                }
                rl.add_history_entry(choice)?;

                match choice {
                    "1" | "bmi" => {
                        let weight = read_field(&mut rl, "Weight (kg): ")?;
                        let height = read_field(&mut rl, "Height (cm): ")?;
                        let age = read_field(&mut rl, "Age (years): ")?;
                        run_bmi(&mut session, &weight, &height, &age)?;
                    }
                    "2" | "diet" => {
                        let calories = read_field(&mut rl, "Daily calories (blank to use BMI result): ")?;
                        match parse_optional_calories(&calories) {
                            Ok(calories) => {
                                run_diet_chart(&config, &session, calories).await?;
                            }
                            Err(e) if super::warn_on_invalid_input(&e) => {}
                            Err(e) => return Err(e),
                        }
                    }
                    "3" | "advisor" => {
                        let path = read_field(&mut rl, "Image path: ")?;
                        run_calorie_advisor(&config, Path::new(path.trim())).await?;
                    }
                    "4" | "recipe" => {
                        let dish = read_field(&mut rl, "Dish name (blank if using an image): ")?;
                        let path = read_field(&mut rl, "Image path (blank for none): ")?;
                        let dish = non_empty(&dish);
                        let path = non_empty(&path);
                        run_recipe(&config, dish, path.map(Path::new)).await?;
                    }
                    "5" | "lifestyle" => {
                        let concern = read_field(&mut rl, "Health concern: ")?;
                        run_lifestyle(&config, &concern).await?;
                    }
                    "q" | "quit" | "exit" => break,
                    "h" | "help" => print_banner(),
                    other => {
                        println!(
                            "{}",
                            format!("Unknown choice '{}'. Enter 1-5, help, or quit.", other)
                                .yellow()
                        );
                    }
                }
                println!();
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => {
                tracing::error!("Readline error: {}", err);
                break;
            }
        }
    }

    println!("Goodbye!");
    Ok(())
}

fn print_banner() {
    println!("{}", "NutriSense - AI nutrition assistant".green().bold());
    println!("  1) bmi        Calculate BMI and daily calorie needs");
    println!("  2) diet       Generate a week-long diet chart");
    println!("  3) advisor    Analyze a food image for calories");
    println!("  4) recipe     Generate a recipe from a dish or image");
    println!("  5) lifestyle  Traditional lifestyle recommendations");
    println!("  q) quit");
    println!();
}

fn read_field(rl: &mut DefaultEditor, prompt: &str) -> Result<String> {
    match rl.readline(prompt) {
        Ok(line) => Ok(line),
        Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(String::new()),
        Err(err) => Err(err.into()),
    }
}

fn non_empty(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

/// Parse the calorie field: blank means "use the session target",
/// non-numeric text is invalid input rather than a silent fallback
fn parse_optional_calories(value: &str) -> Result<Option<f64>> {
    match non_empty(value) {
        None => Ok(None),
        Some(v) => v.parse::<f64>().map(Some).map_err(|_| {
            NutriSenseError::InvalidInput(format!(
                "daily calorie intake must be a number, got '{}'",
                v
            ))
            .into()
        }),
    }
}
