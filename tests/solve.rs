use std::thread;

use lottawords::format::letters_used;
use lottawords::source::{parse_game_data, PuzzleSource, StaticSource};
use lottawords::validate::{covers_all, is_playable};
use lottawords::{solve, SearchConfig, SolveError, SolveReport, SolveStatus, Solver, Square};

fn sample_square() -> Square {
    Square::new(["ABC", "DEF", "GHI", "JKL"]).unwrap()
}

/// A real-word puzzle: KINGDOM + MONARCHY is the only two-word cover.
fn kingdom_square() -> Square {
    "ACD-GHI-KMN-ORY".parse().unwrap()
}

fn kingdom_words() -> Vec<&'static str> {
    vec![
        "Kingdom", "MONARCHY", "mock", "dark", "chord", "dory", "handy", "Rocking", "gory",
        "homing", "archon", "drama", "comic", "yogi", "yoga", "diary", "ramrod", "cry", "odor",
        "mango", "mink", "amid", "kind", "candy", "hand", "dog", "hog", "hay", "ham", "arm",
        "ark", "road", "rock", "rag", "monk", "noon", "candid", "knock", "coin", "coda",
        "hominy", "norm", "nomad", "dig", "kid", "maid", "mind", "grind", "card", "x-ray",
        "zebra", "Chrome",
    ]
}

/// Checks the three structural rules of a complete solution.
fn assert_valid_solution(square: &Square, report: &SolveReport) {
    assert_eq!(report.status, SolveStatus::Solved, "{report:?}");
    assert!(!report.words.is_empty());

    for word in &report.words {
        assert!(is_playable(word, square), "{word} is not playable on {square}");
    }
    for pair in report.words.windows(2) {
        let last = pair[0].chars().last().map(|c| c.to_ascii_lowercase());
        let first = pair[1].chars().next().map(|c| c.to_ascii_lowercase());
        assert_eq!(last, first, "{} does not chain into {}", pair[0], pair[1]);
    }
    assert!(covers_all(letters_used(&report.words), square));
}

#[test]
fn test_two_word_chain_is_found() {
    let square = sample_square();
    let report = solve(&square, &["AGBHCI", "IJDKELF"], &SearchConfig::default());

    assert_eq!(report.words, ["AGBHCI", "IJDKELF"]);
    assert_valid_solution(&square, &report);
}

#[test]
fn test_unplayable_dictionary_gives_empty_result() {
    let square = sample_square();
    let report = solve(&square, &["XYZ", "ABC"], &SearchConfig::default());

    assert!(report.words.is_empty());
    assert_eq!(
        report.status,
        SolveStatus::Empty {
            reason: SolveError::NoPlayableWords,
        }
    );
}

#[test]
fn test_empty_dictionary_gives_empty_result() {
    let square = sample_square();
    let empty: [&str; 0] = [];
    let report = solve(&square, &empty, &SearchConfig::default());

    assert!(report.words.is_empty());
    assert_eq!(
        report.status,
        SolveStatus::Empty {
            reason: SolveError::InvalidDictionary,
        }
    );
}

#[test]
fn test_real_words_two_word_solution() {
    let square = kingdom_square();
    let report = solve(&square, &kingdom_words(), &SearchConfig::default());

    assert_eq!(report.words, ["Kingdom", "MONARCHY"]);
    assert_valid_solution(&square, &report);
}

#[test]
fn test_result_does_not_depend_on_dictionary_order() {
    let square = kingdom_square();
    let mut reversed = kingdom_words();
    reversed.reverse();

    let report = solve(&square, &reversed, &SearchConfig::default());
    assert_eq!(report.words, ["Kingdom", "MONARCHY"]);
}

#[test]
fn test_solve_is_deterministic() {
    let square = kingdom_square();
    let words = kingdom_words();
    let config = SearchConfig::quick();

    let first = solve(&square, &words, &config);
    for _ in 0..3 {
        assert_eq!(solve(&square, &words, &config), first);
    }
}

#[test]
fn test_partial_result_when_no_chain_covers() {
    let square = kingdom_square();
    // nothing here uses the letter y
    let words = ["Kingdom", "mock", "dark", "homing", "drama"];
    let report = solve(&square, &words, &SearchConfig::default());

    assert!(report.is_partial(), "{report:?}");
    assert_eq!(report.words, ["Kingdom"]);

    let strict = SearchConfig {
        partial_fallback: false,
        ..SearchConfig::default()
    };
    let report = solve(&square, &words, &strict);
    assert!(report.words.is_empty());
    assert_eq!(
        report.status,
        SolveStatus::Empty {
            reason: SolveError::NoCoveringChainFound,
        }
    );
}

#[test]
fn test_invalid_config_gives_empty_result() {
    let config = SearchConfig {
        max_chain_length: 0,
        ..SearchConfig::default()
    };
    let report = solve(&sample_square(), &["AGBHCI", "IJDKELF"], &config);

    assert!(report.words.is_empty());
    assert!(matches!(
        report.status,
        SolveStatus::Empty {
            reason: SolveError::InvalidConfig { .. }
        }
    ));
    assert!(Solver::new(vec![], config).is_err());
}

#[test]
fn test_shared_solver_across_threads() {
    let words: Vec<String> = kingdom_words()
        .into_iter()
        .chain(["AGBHCI", "IJDKELF"])
        .map(String::from)
        .collect();
    let solver = Solver::new(words, SearchConfig::default()).unwrap();

    let (kingdom, sample) = thread::scope(|scope| {
        let kingdom = scope.spawn(|| solver.solve(&kingdom_square()));
        let sample = scope.spawn(|| solver.solve(&sample_square()));
        (kingdom.join().unwrap(), sample.join().unwrap())
    });

    assert_eq!(kingdom.words, ["Kingdom", "MONARCHY"]);
    assert_eq!(sample.words, ["AGBHCI", "IJDKELF"]);
}

#[test]
fn test_game_data_source_end_to_end() {
    let puzzle = parse_game_data(
        r#"{
            "sides": ["ACD", "GHI", "KMN", "ORY"],
            "ourSolution": ["KINGDOM", "MONARCHY"],
            "dictionary": ["KINGDOM", "MONARCHY", "MOCK", "DARK", "HOMING"]
        }"#,
    )
    .unwrap();
    let source = StaticSource { puzzle };

    let puzzle = source.fetch().unwrap();
    let square = puzzle.square().unwrap();
    let report = solve(&square, puzzle.dictionary.as_deref().unwrap_or_default(), &SearchConfig::default());

    assert_eq!(report.words, puzzle.reference_solution);
}

#[test]
fn test_report_serializes_with_status() {
    let report = solve(&sample_square(), &["AGBHCI", "IJDKELF"], &SearchConfig::default());
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["words"], serde_json::json!(["AGBHCI", "IJDKELF"]));
    assert_eq!(json["status"]["kind"], "solved");
}
