use crate::cards::{Card, Rank, Suit};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Number of cards in a standard deck.
pub const DECK_SIZE: usize = 52;

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum DeckError {
    #[error("deck exhausted: {dealt} of 52 cards dealt since the last shuffle")]
    Exhausted { dealt: usize },
    #[error("cannot deal {requested} cards, only {remaining} remain")]
    NotEnoughCards { requested: usize, remaining: usize },
}

/// All 52 cards, suit-major (spades, hearts, diamonds, clubs) then Ace..King.
pub fn standard_order() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);
    for s in Suit::ALL {
        for r in Rank::ALL {
            cards.push(Card::new(r, s));
        }
    }
    cards
}

/// A standard 52-card deck with its own random source and a dealing cursor.
///
/// The deck is shuffled on construction. Dealing walks the current order one
/// card at a time; [`Deck::shuffle`] re-randomizes the order and rewinds the
/// cursor.
///
/// ```
/// use cribbage_rs::deck::Deck;
///
/// let mut deck = Deck::seeded(7);
/// let first = deck.deal().unwrap();
/// assert_eq!(deck.remaining(), 51);
/// assert!(deck.cards().contains(&first));
/// ```
#[derive(Debug, Clone)]
pub struct Deck<R = ChaCha8Rng> {
    cards: Vec<Card>,
    position: usize,
    rng: R,
}

impl Deck<ChaCha8Rng> {
    /// Shuffled deck with a random source seeded from the thread RNG.
    pub fn new() -> Self {
        Self::with_rng(ChaCha8Rng::from_rng(&mut rand::rng()))
    }

    /// Shuffled deck with a reproducible seeded random source.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl Default for Deck<ChaCha8Rng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> Deck<R> {
    /// Build the deck around an injected random source and shuffle it.
    pub fn with_rng(rng: R) -> Self {
        let mut deck = Self { cards: standard_order(), position: 0, rng };
        deck.shuffle();
        deck
    }

    /// Uniformly permute the cards with the held random source and rewind the cursor.
    pub fn shuffle(&mut self) {
        self.cards.shuffle(&mut self.rng);
        self.position = 0;
        log::debug!("deck shuffled");
    }

    /// Shuffle with an external random source instead of the held one.
    pub fn shuffle_with<S: Rng + ?Sized>(&mut self, rng: &mut S) {
        self.cards.shuffle(rng);
        self.position = 0;
        log::debug!("deck shuffled with external rng");
    }

    /// Deal the next card in the current order.
    pub fn deal(&mut self) -> Result<Card, DeckError> {
        let Some(&card) = self.cards.get(self.position) else {
            log::warn!("deal attempted on exhausted deck");
            return Err(DeckError::Exhausted { dealt: self.position });
        };
        self.position += 1;
        Ok(card)
    }

    /// Deal `n` cards. Nothing is dealt if fewer than `n` remain.
    pub fn deal_n(&mut self, n: usize) -> Result<Vec<Card>, DeckError> {
        let remaining = self.remaining();
        if n > remaining {
            return Err(DeckError::NotEnoughCards { requested: n, remaining });
        }
        let out = self.cards[self.position..self.position + n].to_vec();
        self.position += n;
        Ok(out)
    }

    /// Current order, including cards already dealt.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn dealt(&self) -> usize {
        self.position
    }

    pub fn remaining(&self) -> usize {
        self.cards.len() - self.position
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }
}
