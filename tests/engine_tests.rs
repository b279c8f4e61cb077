use wordle_sim::bank::WordBank;
use wordle_sim::commands::{PlayOptions, run_auto};
use wordle_sim::core::{LetterState, Word, is_consistent, is_consistent_with_history, score};
use wordle_sim::game::GameConfig;
use wordle_sim::wordlists::{FIVE_LETTER, loader::words_from_slice};

/// Every word of `length` over `alphabet`
fn all_words(alphabet: &[u8], length: usize) -> Vec<Word> {
    let mut words = vec![String::new()];
    for _ in 0..length {
        words = words
            .into_iter()
            .flat_map(|prefix| {
                alphabet.iter().map(move |&c| {
                    let mut next = prefix.clone();
                    next.push(char::from(c));
                    next
                })
            })
            .collect();
    }
    words.into_iter().map(|w| Word::new(w).unwrap()).collect()
}

/// Counting formulation: a non-green guess letter is yellow while the goal still
/// has more non-green copies than earlier non-green guesses of that letter
fn reference_states(goal: &str, guess: &str) -> Vec<LetterState> {
    let goal = goal.as_bytes();
    let guess = guess.as_bytes();
    let green: Vec<bool> = goal.iter().zip(guess).map(|(a, b)| a == b).collect();

    (0..guess.len())
        .map(|i| {
            if green[i] {
                return LetterState::Green;
            }
            let letter = guess[i];
            let unmatched_in_goal = (0..goal.len())
                .filter(|&j| !green[j] && goal[j] == letter)
                .count();
            let earlier_in_guess = (0..i)
                .filter(|&j| !green[j] && guess[j] == letter)
                .count();
            if unmatched_in_goal > earlier_in_guess {
                LetterState::Yellow
            } else {
                LetterState::Grey
            }
        })
        .collect()
}

#[test]
fn scoring_matches_counting_formulation_exhaustively() {
    let words = all_words(b"abc", 4);
    for goal in &words {
        for guess in &words {
            let states: Vec<LetterState> = score(goal, guess).unwrap().states().collect();
            assert_eq!(
                states,
                reference_states(goal.text(), guess.text()),
                "goal {goal}, guess {guess}"
            );
        }
    }
}

#[test]
fn consistency_agrees_with_scoring_exhaustively() {
    let words = all_words(b"abc", 3);
    for goal in &words {
        for guess in &words {
            let feedback = score(goal, guess).unwrap();
            assert!(is_consistent(goal, guess, &feedback).unwrap());

            for candidate in &words {
                let expected = score(candidate, guess).unwrap() == feedback;
                assert_eq!(
                    is_consistent(candidate, guess, &feedback).unwrap(),
                    expected,
                    "candidate {candidate}, guess {guess}, feedback {feedback}"
                );
            }
        }
    }
}

#[test]
fn filtering_only_shrinks_and_keeps_the_goal() {
    let words = words_from_slice(FIVE_LETTER).unwrap();
    let goal = Word::new("grace").unwrap();
    let mut bank = WordBank::new(words);
    let mut history = Vec::new();

    for guess in ["slate", "crane", "irate", "grace"] {
        let guess = Word::new(guess).unwrap();
        let feedback = score(&goal, &guess).unwrap();
        let before = bank.len();

        bank.filter(&guess, &feedback).unwrap();
        history.push((guess, feedback));

        assert!(bank.len() <= before);
        assert!(bank.contains(&goal));
        for candidate in &bank {
            assert!(is_consistent_with_history(candidate, &history).unwrap());
        }
    }

    assert_eq!(bank.words(), &[goal]);
}

#[test]
fn filtering_preserves_bank_order() {
    let words = words_from_slice(FIVE_LETTER).unwrap();
    let guess = Word::new("crane").unwrap();
    let feedback = score(&Word::new("slate").unwrap(), &guess).unwrap();

    let mut bank = WordBank::new(words.clone());
    bank.filter(&guess, &feedback).unwrap();

    let expected: Vec<Word> = words
        .into_iter()
        .filter(|w| is_consistent(w, &guess, &feedback).unwrap())
        .collect();
    assert_eq!(bank.words(), expected.as_slice());
}

#[test]
fn seeded_games_replay_identically() {
    let words = words_from_slice(FIVE_LETTER).unwrap();
    for strategy in ["max", "min", "alternating", "random"] {
        let options = PlayOptions {
            game: GameConfig::new(10),
            strategy: strategy.to_string(),
            seed: Some(2024),
            ..PlayOptions::default()
        };
        let first = run_auto(words.clone(), &options, None).unwrap();
        let second = run_auto(words.clone(), &options, None).unwrap();

        assert_eq!(first.goal, second.goal);
        assert_eq!(first.won, second.won);
        let guesses = |s: &wordle_sim::game::GameSummary| {
            s.history.iter().map(|t| t.guess.clone()).collect::<Vec<_>>()
        };
        assert_eq!(guesses(&first), guesses(&second), "{strategy}");
    }
}

#[test]
fn every_automatic_guess_is_consistent_with_earlier_feedback() {
    let words = words_from_slice(FIVE_LETTER).unwrap();
    let options = PlayOptions {
        seed: Some(77),
        ..PlayOptions::default()
    };
    let summary = run_auto(words, &options, None).unwrap();

    let history: Vec<(Word, _)> = summary
        .history
        .iter()
        .map(|t| (t.guess.clone(), t.feedback.clone()))
        .collect();
    for (i, turn) in summary.history.iter().enumerate() {
        assert!(is_consistent_with_history(&turn.guess, &history[..i]).unwrap());
    }
}
