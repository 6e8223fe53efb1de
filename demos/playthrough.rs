//! Scripted play-through of the built-in story
//!
//! Walks one branch from the first comment to its ending, printing every
//! beat. Pass option numbers as arguments to steer the decision points,
//! e.g. `cargo run --example playthrough -- 1 2 1` takes the first reply,
//! the second answer at the next fork, and accepts the proposal.

use std::env;

use enredo::{content, DisplayStep, PlayerResult, PlayerSession};

fn main() -> anyhow::Result<()> {
    let picks: Vec<usize> = env::args()
        .skip(1)
        .filter_map(|arg| arg.parse::<usize>().ok())
        .collect();
    let mut picks = picks.into_iter();

    let catalog = content::love_story();
    println!("=== {} ===", catalog.title());
    println!();

    let mut session = PlayerSession::new(catalog);
    let mut beat = 0;

    loop {
        match session.next() {
            PlayerResult::Step(step) => {
                beat += 1;
                print_step(beat, &step);

                if let DisplayStep::ChoicePrompt { options } = step {
                    // 1-based on the command line, first option by default.
                    let pick = picks.next().unwrap_or(1).saturating_sub(1);
                    let pick = pick.min(options.len() - 1);
                    println!("  -> choosing {}. {}", pick + 1, options[pick].label);
                    println!();

                    if let PlayerResult::Step(aftermath) = session.choose(pick)? {
                        beat += 1;
                        print_step(beat, &aftermath);
                    }
                }
            }
            PlayerResult::Ended => {
                println!("== THE END ==");
                break;
            }
        }
    }

    Ok(())
}

fn print_step(beat: usize, step: &DisplayStep) {
    match step {
        DisplayStep::ChapterHeading { title, subtitle } => {
            println!("--- beat {beat}: {title}");
            if let Some(subtitle) = subtitle {
                println!("    {subtitle}");
            }
            println!();
        }
        DisplayStep::Passage { text, media, is_ending } => {
            println!("--- beat {beat} ---");
            if let Some(media) = media {
                println!("[illustration: {media}]");
            }
            println!("{text}");
            if *is_ending {
                println!("(an ending)");
            }
            println!();
        }
        DisplayStep::ChoicePrompt { options } => {
            println!("--- beat {beat}: choice ---");
            for option in options {
                println!("{}. {}", option.index + 1, option.label);
            }
        }
        DisplayStep::Aftermath { text } => {
            println!("--- beat {beat} ---");
            println!("{text}");
            println!();
        }
    }
}
