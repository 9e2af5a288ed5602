//! Bounded breadth-first search for the shortest covering word chain.
//!
//! Key points:
//! - FIFO frontier seeded with every playable word, so states leave the queue
//!   in non-decreasing chain length
//! - Greedy branching: candidates are ranked by newly covered letters, then
//!   by length, and only the top few are kept per expansion
//! - Fixed-size chain states that double as their own visited-set keys
//! - Iteration and chain-length budgets instead of a wall-clock timeout

use std::cmp::{Ordering, Reverse};
use std::collections::VecDeque;

use log::{debug, warn};
use rustc_hash::FxHashSet;

use crate::config::{SearchConfig, MAX_CHAIN_LENGTH};
use crate::index::{WordId, WordIndex};
use crate::letters::LetterSet;
use crate::square::Square;
use crate::validate::covers_all;

/// A chain of words in the breadth-first search.
///
/// Unused slots in `words` stay zero, so the derived `Hash`/`Eq` compare the
/// ordered word tuple and the used-letter set: the canonical state key.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
struct ChainState {
    /// Word ids in chain order.
    words: [WordId; MAX_CHAIN_LENGTH],
    /// Number of words in the chain.
    word_count: u8,
    /// Union of the distinct letters of every word in the chain.
    used_letters: LetterSet,
}

impl ChainState {
    /// A one-word chain.
    fn seed(id: WordId, letters: LetterSet) -> Self {
        let mut words = [0; MAX_CHAIN_LENGTH];
        words[0] = id;
        Self {
            words,
            word_count: 1,
            used_letters: letters,
        }
    }

    #[inline]
    fn len(&self) -> usize {
        self.word_count as usize
    }

    #[inline]
    fn chain(&self) -> &[WordId] {
        &self.words[..self.len()]
    }

    #[inline]
    fn last_word(&self) -> WordId {
        self.words[self.len() - 1]
    }

    /// This chain with one more word appended.
    ///
    /// The caller guarantees `len() < MAX_CHAIN_LENGTH`.
    #[inline]
    fn extend(&self, id: WordId, letters: LetterSet) -> Self {
        let mut next = *self;
        next.words[self.len()] = id;
        next.word_count += 1;
        next.used_letters = self.used_letters.union(letters);
        next
    }
}

/// Orders two chains: shorter first, then by their words in lexicographic order.
fn compare_chains(index: &WordIndex, a: &ChainState, b: &ChainState) -> Ordering {
    a.len().cmp(&b.len()).then_with(|| {
        let words_a = a.chain().iter().map(|&id| index.word(id));
        let words_b = b.chain().iter().map(|&id| index.word(id));
        words_a.cmp(words_b)
    })
}

/// What the search produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Found {
    /// A chain covering every letter on the square.
    Solution(Vec<WordId>),
    /// No covering chain; the single word that covers the most letters.
    Partial(WordId),
    /// No covering chain and fallback disabled.
    Nothing,
}

/// Why the main loop stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Termination {
    /// Every reachable state within the chain-length cap was examined.
    FrontierEmpty,
    /// `max_iterations` states were taken off the frontier.
    BudgetExhausted,
    /// The next state was longer than the best solution, and so is everything after it.
    NoShorterChain,
}

/// Result of one search, with counters for diagnostics.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchOutcome {
    pub found: Found,
    /// States taken off the frontier.
    pub iterations: usize,
    /// Distinct states examined.
    pub visited: usize,
    pub termination: Termination,
}

/// Searches for the shortest chain of indexed words covering the square.
///
/// Among chains of equal length the one whose words sort first
/// lexicographically wins, so results do not depend on queue order.
pub fn search(index: &WordIndex, square: &Square, config: &SearchConfig) -> SearchOutcome {
    let max_chain_length = config.max_chain_length.min(MAX_CHAIN_LENGTH);

    let mut frontier: VecDeque<ChainState> = index
        .ids()
        .map(|id| ChainState::seed(id, index.letters(id)))
        .collect();
    let mut seen_states: FxHashSet<ChainState> = FxHashSet::default();
    let mut best: Option<ChainState> = None;
    let mut iterations = 0;
    let mut termination = Termination::FrontierEmpty;

    // reused across expansions: (candidate, newly covered letter count)
    let mut candidates: Vec<(WordId, usize)> = Vec::new();

    loop {
        if iterations >= config.max_iterations {
            if !frontier.is_empty() {
                termination = Termination::BudgetExhausted;
            }
            break;
        }
        let Some(state) = frontier.pop_front() else {
            break;
        };
        iterations += 1;

        if let Some(best_state) = &best {
            if state.len() > best_state.len() {
                termination = Termination::NoShorterChain;
                break;
            }
        }

        if !seen_states.insert(state) {
            continue;
        }

        if covers_all(state.used_letters, square) {
            let improves = best.as_ref().map_or(true, |best_state| {
                compare_chains(index, &state, best_state) == Ordering::Less
            });
            if improves {
                debug!(
                    "Found {}-word solution after {} iterations",
                    state.len(),
                    iterations
                );
                best = Some(state);
            }
            continue;
        }

        // with a solution in hand, same-length states are only goal-tested
        if best.is_some() || state.len() >= max_chain_length {
            continue;
        }

        let last_letter = index.last_letter(state.last_word());
        candidates.clear();
        candidates.extend(index.starting_with(last_letter).iter().map(|&id| {
            let gain = index.letters(id).difference(state.used_letters).len();
            (id, gain)
        }));
        // stable: equal scores keep index order
        candidates.sort_by_key(|&(id, gain)| (Reverse(gain), index.word(id).len()));

        for &(id, _) in candidates.iter().take(config.branch_limit(state.len())) {
            frontier.push_back(state.extend(id, index.letters(id)));
        }
    }

    debug!(
        "Search stopped ({termination:?}) after {iterations} iterations, {} states visited",
        seen_states.len()
    );

    let found = match best {
        Some(state) => Found::Solution(state.chain().to_vec()),
        None if config.partial_fallback => match best_partial(index, square) {
            Some(id) => {
                warn!(
                    "No covering chain found; falling back to single word \"{}\"",
                    index.word(id)
                );
                Found::Partial(id)
            }
            None => Found::Nothing,
        },
        None => Found::Nothing,
    };

    SearchOutcome {
        found,
        iterations,
        visited: seen_states.len(),
        termination,
    }
}

/// The word sharing the most letters with the square; ties go to the longer
/// word, then to the earlier one in search order.
fn best_partial(index: &WordIndex, square: &Square) -> Option<WordId> {
    let square_letters = square.letters();
    index.ids().max_by_key(|&id| {
        (
            index.letters(id).intersection(square_letters).len(),
            index.word(id).len(),
            Reverse(id),
        )
    })
}
