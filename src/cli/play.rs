//! CUI player mode for running story catalogs
//!
//! An interactive terminal loop: Enter reveals the next beat, digits pick a
//! choice, and a finished story offers a restart.

use crate::session::{DisplayStep, PlayerResult, PlayerSession};
use crate::traversal::Traversal;
use crate::types::catalog::StoryCatalog;
use std::io::{self, Write};

/// Run the player mode.
pub fn run_play(catalog: StoryCatalog, debug: bool) -> anyhow::Result<()> {
    let title = catalog.title().to_string();
    let mut session = PlayerSession::new(catalog);

    println!("=== {title} ===");
    println!();
    println!("Controls:");
    println!("  Enter: next");
    println!("  1-9:   select choice");
    println!("  q:     quit");
    println!();
    println!("Press Enter to start...");
    wait_input()?;

    loop {
        match session.next() {
            PlayerResult::Step(step) => {
                show_display_step(&step);

                if debug {
                    display_debug_info(session.traversal());
                }

                let keep_going = if let DisplayStep::ChoicePrompt { options } = &step {
                    handle_choice(&mut session, options.len(), debug)?
                } else {
                    wait_for_enter()?
                };

                if !keep_going {
                    println!("Goodbye!");
                    return Ok(());
                }
            }
            PlayerResult::Ended => {
                println!();
                println!("== THE END ==");
                let input = get_input("Press 'r' to restart, anything else to quit:")?;
                if input == "r" {
                    session.restart();
                    println!();
                    continue;
                }
                break;
            }
        }
    }

    Ok(())
}

/// Prompt until a valid option is picked, show its aftermath, then pause.
/// Returns false when the reader quits.
fn handle_choice(
    session: &mut PlayerSession,
    option_count: usize,
    debug: bool,
) -> anyhow::Result<bool> {
    loop {
        let input = get_input("Select (1-9):")?;

        if input == "q" {
            return Ok(false);
        }

        let Ok(picked) = input.parse::<usize>() else {
            println!("Invalid input. Enter a number or 'q'.");
            continue;
        };

        if picked == 0 || picked > option_count {
            println!("Invalid choice. Enter 1-{option_count}.");
            continue;
        }

        match session.choose(picked - 1) {
            Ok(PlayerResult::Step(aftermath)) => {
                show_display_step(&aftermath);
                if debug {
                    display_debug_info(session.traversal());
                }
                return wait_for_enter();
            }
            Ok(PlayerResult::Ended) => return Ok(true),
            Err(err) => {
                println!("[{err}]");
            }
        }
    }
}

/// Display a single step.
fn show_display_step(step: &DisplayStep) {
    match step {
        DisplayStep::ChapterHeading { title, subtitle } => {
            println!("==============================");
            println!("  {title}");
            if let Some(subtitle) = subtitle {
                println!("  {subtitle}");
            }
            println!("==============================");
            println!();
        }
        DisplayStep::Passage { text, media, .. } => {
            if let Some(media) = media {
                println!("[illustration: {media}]");
            }
            println!("{text}");
            println!();
        }
        DisplayStep::ChoicePrompt { options } => {
            println!("--- Choice ---");
            for option in options {
                println!("{}. {}", option.index + 1, option.label);
            }
            println!();
        }
        DisplayStep::Aftermath { text } => {
            println!("{text}");
            println!();
        }
    }
}

/// Display traversal internals (only when --debug is set).
fn display_debug_info(traversal: &Traversal) {
    println!("[debug]");
    println!(
        "scene={} position={}",
        traversal.current_scene().id(),
        traversal.position()
    );

    let history: Vec<&str> = traversal.history().iter().map(|tag| tag.as_str()).collect();
    println!("history={history:?}");
    println!();
}

/// Wait for Enter, letting 'q' end the session. Returns false on quit.
fn wait_for_enter() -> anyhow::Result<bool> {
    loop {
        let input = get_input("")?;

        if input == "q" {
            return Ok(false);
        }

        if input.is_empty() {
            return Ok(true);
        }

        println!("Press Enter to continue or 'q' to quit.");
    }
}

/// Wait for Enter key.
fn wait_input() -> io::Result<()> {
    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(())
}

/// Get user input with an optional prompt.
fn get_input(prompt: &str) -> io::Result<String> {
    if !prompt.is_empty() {
        print!("{prompt} ");
        io::stdout().flush()?;
    }

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}
