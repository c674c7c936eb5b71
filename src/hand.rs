use crate::cards::{parse_cards, Card, CardError};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// Cards in a counted hand, not including the starter.
pub const HAND_SIZE: usize = 4;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandError {
    #[error("expected exactly four hand cards, got {0}")]
    CardCount(usize),
    #[error("duplicate cards in hand")]
    DuplicateCards,
    #[error("starter {0} is also in the hand")]
    StarterInHand(Card),
    #[error("card parse error: {0}")]
    CardParse(#[from] CardError),
}

/// The four cards a player keeps for the show.
///
/// The fixed-size array makes a short or long hand unrepresentable.
/// [`Hand::new`] does not look for duplicates; use [`Hand::try_new`] or
/// [`validate_show`] when the cards come from untrusted input.
///
/// ```
/// use cribbage_rs::hand::Hand;
///
/// let hand: Hand = "JH AS 2C AD".parse().unwrap();
/// assert_eq!(hand.cards().len(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hand([Card; HAND_SIZE]);

impl Hand {
    pub const fn new(cards: [Card; HAND_SIZE]) -> Self {
        Self(cards)
    }

    pub fn try_new(cards: [Card; HAND_SIZE]) -> Result<Self, HandError> {
        let set: HashSet<Card> = cards.iter().copied().collect();
        if set.len() != HAND_SIZE {
            return Err(HandError::DuplicateCards);
        }
        Ok(Self(cards))
    }

    pub fn from_slice(slice: &[Card]) -> Result<Self, HandError> {
        let cards: [Card; HAND_SIZE] =
            slice.try_into().map_err(|_| HandError::CardCount(slice.len()))?;
        Self::try_new(cards)
    }

    pub const fn cards(&self) -> &[Card; HAND_SIZE] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = Card> + '_ {
        self.0.iter().copied()
    }

    pub fn contains(&self, card: Card) -> bool {
        self.0.contains(&card)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = self.0;
        write!(f, "{a} {b} {c} {d}")
    }
}

impl FromStr for Hand {
    type Err = HandError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(s)?;
        Self::from_slice(&cards)
    }
}

/// Check that a hand and starter could have come from one deck:
/// no duplicates within the hand and the starter not among them.
///
/// ```
/// use cribbage_rs::cards::Card;
/// use cribbage_rs::hand::{validate_show, Hand, HandError};
///
/// let hand: Hand = "5H 5C 5S JD".parse().unwrap();
/// let starter: Card = "5D".parse().unwrap();
/// validate_show(&hand, starter).unwrap();
/// let dup: Card = "JD".parse().unwrap();
/// assert!(matches!(validate_show(&hand, dup), Err(HandError::StarterInHand(_))));
/// ```
pub fn validate_show(hand: &Hand, starter: Card) -> Result<(), HandError> {
    let set: HashSet<Card> = hand.iter().collect();
    if set.len() != HAND_SIZE {
        return Err(HandError::DuplicateCards);
    }
    if set.contains(&starter) {
        return Err(HandError::StarterInHand(starter));
    }
    Ok(())
}
