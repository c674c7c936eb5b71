use super::show_cards::ShowCards;
use crate::cards::Card;

/// The longest run tier found in a show and how many distinct runs it has.
///
/// Example: 9 10 J Q Q holds two runs of four, so `length == 4, count == 2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunInfo {
    pub length: u8,
    pub count: u8,
}

impl RunInfo {
    /// Check the whole show, then 4-card subsets, then 3-card subsets,
    /// stopping at the first tier with any run.
    pub fn detect(show: &ShowCards) -> Self {
        if is_run(*show.all()) {
            return Self { length: 5, count: 1 };
        }
        let fours = show.subsets::<4>().filter(|cs| is_run(*cs)).count() as u8;
        if fours > 0 {
            return Self { length: 4, count: fours };
        }
        let threes = show.subsets::<3>().filter(|cs| is_run(*cs)).count() as u8;
        if threes > 0 {
            return Self { length: 3, count: threes };
        }
        Self::default()
    }

    pub fn points(self) -> u8 {
        self.length * self.count
    }
}

/// Rank gaps of a rank-sorted subset. The first entry is the gap of the lowest
/// card to itself, so always 0.
fn rank_gaps<const K: usize>(sorted: &[Card; K]) -> [u8; K] {
    let mut gaps = [0u8; K];
    for i in 1..K {
        gaps[i] = sorted[i].rank_distance(sorted[i - 1]);
    }
    gaps
}

/// `[0, 1, 1, ..., 1]`: the gap list of K consecutive ranks.
fn run_pattern<const K: usize>() -> [u8; K] {
    let mut pattern = [1u8; K];
    if let Some(first) = pattern.first_mut() {
        *first = 0;
    }
    pattern
}

/// True if the cards are K consecutive ranks with no rank repeated.
pub fn is_run<const K: usize>(mut cards: [Card; K]) -> bool {
    // stable sort; ties are equal ranks and yield the same gap list either way
    cards.sort_by(|a, b| a.cmp_rank(b));
    rank_gaps(&cards) == run_pattern::<K>()
}
