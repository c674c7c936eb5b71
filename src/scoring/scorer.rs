use super::combinations::Combinations;
use super::run_info::RunInfo;
use super::show_cards::ShowCards;
use crate::cards::Rank;
use crate::scoring::Category;

/// Strategy pattern: each scorer counts the points of one category.
pub trait CategoryScorer {
    fn category(&self) -> Category;
    fn score(&self, show: &ShowCards) -> u8;
}

// ============================================================================
// Scorer Implementations (in the order they are counted aloud)
// ============================================================================

/// Fifteens: 2 points for every subset of two or more cards whose values sum to 15
pub struct FifteensScorer;

impl FifteensScorer {
    fn count<const K: usize>(show: &ShowCards) -> u8 {
        show.subsets::<K>()
            .filter(|cs| cs.iter().map(|c| c.value()).sum::<u8>() == 15)
            .count() as u8
    }
}

impl CategoryScorer for FifteensScorer {
    fn category(&self) -> Category {
        Category::Fifteens
    }

    fn score(&self, show: &ShowCards) -> u8 {
        let count = Self::count::<2>(show)
            + Self::count::<3>(show)
            + Self::count::<4>(show)
            + Self::count::<5>(show);
        2 * count
    }
}

/// Pairs: 2 points for every two cards of equal rank (trips make 3 pairs, quads 6)
pub struct PairsScorer;

impl CategoryScorer for PairsScorer {
    fn category(&self) -> Category {
        Category::Pairs
    }

    fn score(&self, show: &ShowCards) -> u8 {
        let count = show.subsets::<2>().filter(|[a, b]| a.same_rank(*b)).count() as u8;
        2 * count
    }
}

/// Runs: only the longest tier scores; length x number of distinct runs
pub struct RunsScorer;

impl CategoryScorer for RunsScorer {
    fn category(&self) -> Category {
        Category::Runs
    }

    fn score(&self, show: &ShowCards) -> u8 {
        RunInfo::detect(show).points()
    }
}

/// Flush: 4 if the hand is one suit, 5 if the starter matches too
pub struct FlushScorer;

impl CategoryScorer for FlushScorer {
    fn category(&self) -> Category {
        Category::Flush
    }

    fn score(&self, show: &ShowCards) -> u8 {
        let hand = show.hand();
        let uniform = Combinations::<4, 2>::new().all(|[i, j]| hand[i].same_suit(hand[j]));
        if !uniform {
            return 0;
        }
        if hand[0].same_suit(show.starter()) {
            5
        } else {
            4
        }
    }
}

/// His nibs: 1 point for the Jack of the starter's suit in hand
pub struct NibsScorer;

impl CategoryScorer for NibsScorer {
    fn category(&self) -> Category {
        Category::Nibs
    }

    fn score(&self, show: &ShowCards) -> u8 {
        let starter = show.starter();
        let nibs = show.hand().iter().any(|c| c.rank() == Rank::Jack && c.same_suit(starter));
        u8::from(nibs)
    }
}

// ============================================================================
// Static scorer list (in counting order)
// ============================================================================

pub const SCORERS: [&dyn CategoryScorer; 5] =
    [&FifteensScorer, &PairsScorer, &RunsScorer, &FlushScorer, &NibsScorer];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;
    use crate::hand::Hand;

    fn show(s: &str) -> ShowCards {
        let cards = parse_cards(s).unwrap();
        let hand = Hand::from_slice(&cards[..4]).unwrap();
        ShowCards::new(&hand, cards[4])
    }

    #[test]
    fn scorers_are_in_category_order() {
        let cats: Vec<Category> = SCORERS.iter().map(|s| s.category()).collect();
        assert_eq!(cats, Category::ALL.to_vec());
    }

    #[test]
    fn fifteens_counts_every_subset_size() {
        // 3 fives x 2 faces, plus 5+5+5
        assert_eq!(FifteensScorer.score(&show("5C 5D JH QS 5S")), 14);
        // only the full five-card set reaches 15
        assert_eq!(FifteensScorer.score(&show("AC 2D 3H 4S 5C")), 2);
    }

    #[test]
    fn pairs_compound() {
        assert_eq!(PairsScorer.score(&show("7C 7D 7H 2S 9C")), 6);
        assert_eq!(PairsScorer.score(&show("7C 7D 7H 7S 9C")), 12);
        assert_eq!(PairsScorer.score(&show("7C 7D 9H 9S 2C")), 4);
        assert_eq!(PairsScorer.score(&show("AC 2D 3H 4S 5C")), 0);
    }

    #[test]
    fn flush_ignores_starter_unless_hand_is_uniform() {
        // three hearts in hand plus a heart starter is not a flush
        assert_eq!(FlushScorer.score(&show("2H 4H 6H 8S 10H")), 0);
        assert_eq!(FlushScorer.score(&show("2H 4H 6H 8H 10S")), 4);
        assert_eq!(FlushScorer.score(&show("2H 4H 6H 8H 10H")), 5);
    }

    #[test]
    fn nibs_needs_jack_in_hand() {
        assert_eq!(NibsScorer.score(&show("JH 2C 3D 4S 5H")), 1);
        // jack as starter scores nothing here
        assert_eq!(NibsScorer.score(&show("2H 3C 4D 6S JH")), 0);
        assert_eq!(NibsScorer.score(&show("JC 2C 3D 4S 5H")), 0);
    }
}
