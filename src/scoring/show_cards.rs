use super::combinations::Combinations;
use crate::cards::Card;
use crate::hand::{Hand, HAND_SIZE};

/// Cards counted in a show: the four hand cards followed by the starter.
/// Built once per evaluation and shared by all category scorers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShowCards {
    cards: [Card; 5],
}

impl ShowCards {
    pub fn new(hand: &Hand, starter: Card) -> Self {
        let [a, b, c, d] = *hand.cards();
        Self { cards: [a, b, c, d, starter] }
    }

    /// All five cards, hand first.
    pub fn all(&self) -> &[Card; 5] {
        &self.cards
    }

    pub fn hand(&self) -> &[Card] {
        &self.cards[..HAND_SIZE]
    }

    pub fn starter(&self) -> Card {
        self.cards[HAND_SIZE]
    }

    /// Every `K`-card subset of the five cards, in lexicographic index order.
    pub fn subsets<const K: usize>(&self) -> impl Iterator<Item = [Card; K]> + '_ {
        Combinations::<5, K>::new().map(move |idx| idx.map(|i| self.cards[i]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    fn show() -> ShowCards {
        let hand: Hand = "JH AS 2C AD".parse().unwrap();
        ShowCards::new(&hand, Card::new(Rank::Five, Suit::Hearts))
    }

    #[test]
    fn starter_is_last() {
        let s = show();
        assert_eq!(s.starter(), Card::new(Rank::Five, Suit::Hearts));
        assert_eq!(s.hand().len(), 4);
        assert_eq!(s.all()[0], Card::new(Rank::Jack, Suit::Hearts));
    }

    #[test]
    fn subsets_map_indices_to_cards() {
        let s = show();
        let pairs: Vec<[Card; 2]> = s.subsets::<2>().collect();
        assert_eq!(pairs.len(), 10);
        assert_eq!(pairs[0], [s.all()[0], s.all()[1]]);
        assert_eq!(pairs[9], [s.all()[3], s.all()[4]]);
        assert_eq!(s.subsets::<5>().next(), Some(*s.all()));
    }
}
