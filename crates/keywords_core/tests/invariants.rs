//! Invariants checked over long deterministic operation sequences.

use keywords_core::{update, ControlConfig, ControlState, Effect, Msg};

const WORDS: [&str; 7] = ["a", "b", " a", "c ", "   ", "d", "b"];

/// Small linear congruential generator so runs are reproducible.
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> usize {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        (self.0 >> 33) as usize
    }
}

fn random_msg(rng: &mut Lcg) -> Msg {
    let word = WORDS[rng.next() % WORDS.len()].to_string();
    match rng.next() % 6 {
        0 => Msg::DraftChanged(word),
        1 => Msg::KeyPressed("Enter".to_string()),
        2 => Msg::FocusLost,
        3 => Msg::DeleteToken(word.trim().to_string()),
        4 => {
            // The input control only ever reports trimmed, distinct chips.
            let len = rng.next() % 5;
            let mut chips: Vec<String> = Vec::new();
            for _ in 0..len {
                let chip = WORDS[rng.next() % WORDS.len()].trim();
                if !chip.is_empty() && !chips.iter().any(|c| c == chip) {
                    chips.push(chip.to_string());
                }
            }
            Msg::BulkReplace(chips)
        }
        _ => Msg::Rendered { height: 40 },
    }
}

fn run(max_tokens: Option<i64>, seed: u64, check: impl Fn(&ControlState, &Msg, &[Effect])) {
    let mut rng = Lcg(seed);
    let mut state = ControlState::new(ControlConfig {
        max_tokens,
        ..ControlConfig::default()
    });
    for _ in 0..500 {
        let msg = random_msg(&mut rng);
        let (next, effects) = update(state, msg.clone());
        check(&next, &msg, &effects);
        state = next;
    }
}

#[test]
fn tokens_stay_unique() {
    for seed in 1..20 {
        run(None, seed, |state, _, _| {
            let tokens = state.tokens();
            for (i, token) in tokens.iter().enumerate() {
                assert!(!tokens[i + 1..].contains(token), "duplicate {token:?}");
            }
        });
    }
}

#[test]
fn tokens_never_exceed_positive_maximum() {
    for max in 1..4 {
        for seed in 1..10 {
            run(Some(max), seed, |state, _, _| {
                assert!(state.tokens().len() <= max as usize);
            });
        }
    }
}

#[test]
fn tokens_are_trimmed_and_non_empty() {
    run(Some(3), 7, |state, _, _| {
        for token in state.tokens() {
            assert!(!token.is_empty());
            assert_eq!(token, token.trim());
        }
    });
}

#[test]
fn every_push_carries_post_transition_value() {
    run(Some(2), 11, |state, msg, effects| {
        let pushes: Vec<_> = effects
            .iter()
            .filter_map(|effect| match effect {
                Effect::ReportValue(value) => Some(value),
                _ => None,
            })
            .collect();
        assert!(pushes.len() <= 1, "more than one push for {msg:?}");
        if let Some(value) = pushes.first() {
            assert_eq!(value.as_slice(), state.tokens());
        }
        if matches!(msg, Msg::BulkReplace(_) | Msg::DeleteToken(_)) {
            assert_eq!(pushes.len(), 1);
        }
        if matches!(msg, Msg::DraftChanged(_)) {
            assert!(pushes.is_empty());
        }
    });
}
