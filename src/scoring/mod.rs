pub(crate) mod combinations;
pub(crate) mod run_info;
pub(crate) mod scorer;
pub(crate) mod show_cards;

use crate::cards::Card;
use crate::hand::{Hand, HandError};
use scorer::{
    CategoryScorer, FifteensScorer, FlushScorer, NibsScorer, PairsScorer, RunsScorer, SCORERS,
};
use show_cards::ShowCards;
use std::fmt;

pub use run_info::is_run;

/// Scoring categories, in the order a show is counted aloud.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
pub enum Category {
    Fifteens,
    Pairs,
    Runs,
    Flush,
    Nibs,
}

impl Category {
    pub const ALL: [Category; 5] =
        [Category::Fifteens, Category::Pairs, Category::Runs, Category::Flush, Category::Nibs];

    pub const fn label(self) -> &'static str {
        match self {
            Category::Fifteens => "15s",
            Category::Pairs => "pairs",
            Category::Runs => "runs",
            Category::Flush => "flush",
            Category::Nibs => "nibs",
        }
    }

    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// Points of a show, itemised by category.
///
/// ```
/// use cribbage_rs::scoring::{score_hand, Category};
///
/// let hand = "5H 5C 5S JD".parse().unwrap();
/// let score = score_hand(&hand, "5D".parse().unwrap());
/// assert_eq!(score.total(), 29);
/// assert_eq!(score.get(Category::Nibs), 1);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Score {
    pub fifteens: u8,
    pub pairs: u8,
    pub runs: u8,
    pub flush: u8,
    pub nibs: u8,
}

impl Score {
    /// Highest possible show score (5-5-5 + J of the starter's suit, starter 5).
    pub const MAX: u8 = 29;

    pub const fn total(&self) -> u8 {
        self.fifteens + self.pairs + self.runs + self.flush + self.nibs
    }

    pub const fn get(&self, category: Category) -> u8 {
        match category {
            Category::Fifteens => self.fifteens,
            Category::Pairs => self.pairs,
            Category::Runs => self.runs,
            Category::Flush => self.flush,
            Category::Nibs => self.nibs,
        }
    }

    fn set(&mut self, category: Category, points: u8) {
        match category {
            Category::Fifteens => self.fifteens = points,
            Category::Pairs => self.pairs = points,
            Category::Runs => self.runs = points,
            Category::Flush => self.flush = points,
            Category::Nibs => self.nibs = points,
        }
    }

    /// `(category, points)` pairs in counting order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, u8)> + '_ {
        Category::ALL.into_iter().map(move |c| (c, self.get(c)))
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (category, points) in self.iter() {
            writeln!(f, "  {:<7}{:>2}", format!("{category}:"), points)?;
        }
        write!(f, "  {:<7}{:>2}", "total:", self.total())
    }
}

/// Score a 4-card hand plus starter in every category.
///
/// ```
/// use cribbage_rs::cards::Card;
/// use cribbage_rs::hand::Hand;
/// use cribbage_rs::scoring::score_hand;
///
/// let hand: Hand = "JH AS 2C AD".parse().unwrap();
/// let starter: Card = "5H".parse().unwrap();
/// let score = score_hand(&hand, starter);
/// assert_eq!((score.fifteens, score.pairs, score.nibs), (2, 2, 1));
/// assert_eq!(score.total(), 5);
/// ```
pub fn score_hand(hand: &Hand, starter: Card) -> Score {
    let show = ShowCards::new(hand, starter);
    let mut score = Score::default();
    for scorer in SCORERS.iter() {
        let points = scorer.score(&show);
        log::trace!("{:<8}{:>2}  [{}] {}", scorer.category(), points, starter, hand);
        score.set(scorer.category(), points);
    }
    score
}

/// Score a hand given as a slice. Anything but exactly four distinct cards
/// is rejected instead of being mis-scored.
pub fn score_cards(cards: &[Card], starter: Card) -> Result<Score, HandError> {
    let hand = Hand::from_slice(cards)?;
    Ok(score_hand(&hand, starter))
}

/// 2 points per distinct subset of two or more cards summing to 15.
pub fn score_fifteens(hand: &Hand, starter: Card) -> u8 {
    FifteensScorer.score(&ShowCards::new(hand, starter))
}

/// 2 points per pair of equal-rank cards.
pub fn score_pairs(hand: &Hand, starter: Card) -> u8 {
    PairsScorer.score(&ShowCards::new(hand, starter))
}

/// Points for the longest run tier only: 5, else 4 per run of four, else 3 per run of three.
pub fn score_runs(hand: &Hand, starter: Card) -> u8 {
    RunsScorer.score(&ShowCards::new(hand, starter))
}

pub fn score_flush(hand: &Hand, starter: Card) -> u8 {
    FlushScorer.score(&ShowCards::new(hand, starter))
}

pub fn score_nibs(hand: &Hand, starter: Card) -> u8 {
    NibsScorer.score(&ShowCards::new(hand, starter))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    fn hand(s: &str) -> Hand {
        s.parse().expect("valid hand")
    }

    fn card(s: &str) -> Card {
        s.parse().expect("valid card")
    }

    #[test]
    fn score_cards_rejects_short_hands() {
        let cards = [card("JH"), card("AS"), card("2C")];
        assert!(matches!(score_cards(&cards, card("5H")), Err(HandError::CardCount(3))));
    }

    #[test]
    fn score_cards_matches_score_hand() {
        let h = hand("JH AS 2C AD");
        let s = score_cards(h.cards(), card("5H")).unwrap();
        assert_eq!(s, score_hand(&h, card("5H")));
    }

    #[test]
    fn breakdown_sums_to_total() {
        let s = score_hand(&hand("5H 5C 5S JD"), card("5D"));
        assert_eq!(s, Score { fifteens: 16, pairs: 12, runs: 0, flush: 0, nibs: 1 });
        assert_eq!(s.total(), Score::MAX);
        assert_eq!(s.iter().map(|(_, p)| u32::from(p)).sum::<u32>(), 29);
    }

    #[test]
    fn individual_functions_agree_with_breakdown() {
        let h = hand("7H 7C 8D 8S");
        let st = Card::new(Rank::Six, Suit::Clubs);
        let s = score_hand(&h, st);
        assert_eq!(s.fifteens, score_fifteens(&h, st));
        assert_eq!(s.pairs, score_pairs(&h, st));
        assert_eq!(s.runs, score_runs(&h, st));
        assert_eq!(s.flush, score_flush(&h, st));
        assert_eq!(s.nibs, score_nibs(&h, st));
        assert_eq!(s.total(), 24);
    }

    #[test]
    fn display_itemises_categories() {
        let s = score_hand(&hand("JH AS 2C AD"), card("5H"));
        let text = s.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "  15s:    2");
        assert_eq!(lines[4], "  nibs:   1");
        assert_eq!(lines[5], "  total:  5");
    }

    #[test]
    fn category_labels_and_indices() {
        for (i, c) in Category::ALL.iter().enumerate() {
            assert_eq!(c.index(), i);
        }
        assert_eq!(Category::Fifteens.to_string(), "15s");
    }
}
