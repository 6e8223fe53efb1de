//! Full play-throughs of the built-in story
//! Every branch is walked end to end; the visited scene ids pin both the
//! skip-scan and the ending hard-stop.

use enredo::ChoiceTag::*;
use enredo::{content, ChoiceTag, NextAction, Traversal};

/// Drive a play-through with a scripted list of picks, collecting the ids
/// of every scene landed on (in order) until the story completes.
fn play(script: &[ChoiceTag]) -> (Traversal, Vec<u32>) {
    let mut traversal = Traversal::new(content::love_story());
    let mut visited = vec![traversal.current_scene().id()];
    let mut script = script.iter().copied();

    loop {
        match traversal.next_action() {
            NextAction::WaitChoice => {
                let tag = script.next().expect("script ran out of choices");
                traversal.record_choice(tag).expect("scripted choice must be offered");
            }
            NextAction::WaitAdvance => match traversal.advance().unwrap() {
                NextAction::Finished => break,
                _ => visited.push(traversal.current_scene().id()),
            },
            NextAction::Finished => break,
        }
    }

    assert!(traversal.is_complete());
    (traversal, visited)
}

#[test]
fn silence_leads_to_the_sad_epilogue() {
    let (traversal, visited) = play(&[Ignored]);

    assert_eq!(visited, vec![0, 1, 2, 7]);
    let ending = traversal.current_scene();
    assert!(ending.is_ending());
    assert_eq!(ending.requires().unwrap().tags(), &[Ignored]);
}

#[test]
fn messages_only_leads_to_the_pen_pal_ending() {
    let (traversal, visited) = play(&[InterestedResponse, TextOnly]);

    assert_eq!(visited, vec![0, 1, 2, 3, 4, 8]);
    assert!(traversal.current_scene().is_ending());
}

#[test]
fn keeping_distance_leads_to_the_distant_friends_ending() {
    let (traversal, visited) = play(&[DryResponse, DistantFriends]);

    assert_eq!(visited, vec![0, 1, 2, 5, 6, 9]);
    assert!(traversal.current_scene().is_ending());
}

#[test]
fn the_warm_path_to_marriage_reaches_the_conjunctively_gated_letter() {
    let (traversal, visited) = play(&[InterestedResponse, VoiceCalls, AcceptMarriage]);

    assert_eq!(
        visited,
        vec![0, 1, 2, 3, 4, 10, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22]
    );

    // Scene 21 is gated on [interested_response, accept_marriage]; this
    // play-through holds both, so it is shown.
    assert!(visited.contains(&21));

    // Scenes gated on the mutually exclusive first replies never appear.
    for skipped in [5, 6, 7, 9, 11, 23, 24] {
        assert!(!visited.contains(&skipped), "scene {skipped} should be skipped");
    }

    assert!(traversal.current_scene().is_ending());
}

#[test]
fn the_slow_path_to_marriage_skips_the_letter() {
    let (traversal, visited) = play(&[DryResponse, Breakthrough, AcceptMarriage]);

    assert_eq!(
        visited,
        vec![0, 1, 2, 5, 6, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 22]
    );

    // The letter requires interested_response AND accept_marriage; holding
    // only accept_marriage is not enough. Under an any-of reading it would
    // have been shown - this pins the conjunctive interpretation.
    assert!(!visited.contains(&21));
    assert!(traversal.current_scene().is_ending());
}

#[test]
fn hesitating_and_declining_have_their_own_endings() {
    let (_, visited) = play(&[InterestedResponse, VoiceCalls, HesitantMarriage]);
    assert_eq!(visited, vec![0, 1, 2, 3, 4, 10, 12, 13, 14, 15, 23]);

    let (_, visited) = play(&[InterestedResponse, VoiceCalls, NotReadyMarriage]);
    assert_eq!(visited, vec![0, 1, 2, 3, 4, 10, 12, 13, 14, 15, 24]);
}

#[test]
fn history_records_every_choice_in_order_and_nothing_else() {
    let script = [DryResponse, Breakthrough, AcceptMarriage];
    let (traversal, visited) = play(&script);

    // Three choices across sixteen scenes: history holds exactly the three
    // tags, in the order they were picked.
    assert_eq!(traversal.history(), &script);
    assert!(visited.len() > script.len());
}

#[test]
fn nothing_but_reset_works_after_the_story_completes() {
    let (mut traversal, _) = play(&[Ignored]);

    assert!(matches!(
        traversal.advance(),
        Err(enredo::TraversalError::StoryComplete)
    ));
    assert!(matches!(
        traversal.record_choice(Ignored),
        Err(enredo::TraversalError::StoryComplete)
    ));

    traversal.reset();
    let fresh = Traversal::new(content::love_story());
    assert_eq!(traversal.position(), fresh.position());
    assert_eq!(traversal.history(), fresh.history());
    assert_eq!(traversal.next_action(), fresh.next_action());
    assert_eq!(traversal.current_scene(), fresh.current_scene());
}

#[test]
fn media_references_survive_untouched() {
    let (traversal, _) = play(&[InterestedResponse, VoiceCalls, AcceptMarriage]);

    // The final scene of the accepted proposal carries the family picture.
    assert_eq!(
        traversal.current_scene().media().map(|m| m.as_str()),
        Some("/images/family.jpg")
    );
}
