use cribbage_rs::cards::Card;
use cribbage_rs::deck::standard_order;
use cribbage_rs::hand::Hand;
use cribbage_rs::scoring::{is_run, score_hand, Category, Score};
use proptest::prelude::*;

/// Five distinct cards in random order: four for the hand, one starter.
fn any_show() -> impl Strategy<Value = (Hand, Card)> {
    proptest::sample::subsequence(standard_order(), 5)
        .prop_shuffle()
        .prop_map(|cs| (Hand::new([cs[0], cs[1], cs[2], cs[3]]), cs[4]))
}

proptest! {
    #[test]
    fn breakdown_sums_to_total((hand, starter) in any_show()) {
        let s = score_hand(&hand, starter);
        let sum: u32 = Category::ALL.iter().map(|c| u32::from(s.get(*c))).sum();
        prop_assert_eq!(sum, u32::from(s.total()));
    }

    #[test]
    fn category_bounds((hand, starter) in any_show()) {
        let s = score_hand(&hand, starter);
        prop_assert!(s.total() <= Score::MAX);
        prop_assert!(matches!(s.flush, 0 | 4 | 5));
        prop_assert!(s.nibs <= 1);
        prop_assert!(s.pairs % 2 == 0 && s.pairs <= 12);
        prop_assert!(s.fifteens % 2 == 0);
        prop_assert!(s.runs == 0 || s.runs >= 3);
    }

    #[test]
    fn hand_order_does_not_matter((hand, starter) in any_show(), rot in 0usize..4) {
        let base = score_hand(&hand, starter);
        let mut cards = *hand.cards();
        cards.reverse();
        prop_assert_eq!(score_hand(&Hand::new(cards), starter), base);
        cards.rotate_left(rot);
        prop_assert_eq!(score_hand(&Hand::new(cards), starter), base);
    }

    #[test]
    fn nibs_matches_jack_of_starter_suit((hand, starter) in any_show()) {
        let s = score_hand(&hand, starter);
        let has = hand.iter().any(|c| c.rank() == cribbage_rs::cards::Rank::Jack && c.suit() == starter.suit());
        prop_assert_eq!(s.nibs == 1, has);
    }

    #[test]
    fn run_detection_ignores_input_order((hand, starter) in any_show()) {
        let c = *hand.cards();
        let forward = is_run([c[0], c[1], c[2]]);
        prop_assert_eq!(forward, is_run([c[2], c[0], c[1]]));
        let five = [c[0], c[1], c[2], c[3], starter];
        let mut backward = five;
        backward.reverse();
        prop_assert_eq!(is_run(five), is_run(backward));
    }
}
