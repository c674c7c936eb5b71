use crate::cards::Card;
use crate::deck::{Deck, DeckError};
use crate::hand::Hand;
use crate::scoring::score_hand;
use crate::stats::{ScoredShow, Stats};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SimError {
    #[error(transparent)]
    Deck(#[from] DeckError),
}

/// Settings for a batch of random shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimConfig {
    pub hands: u64,
    /// Fixed seed for a reproducible run; `None` seeds from the thread RNG.
    pub seed: Option<u64>,
}

impl SimConfig {
    pub const DEFAULT_HANDS: u64 = 100_000;
}

impl Default for SimConfig {
    fn default() -> Self {
        Self { hands: Self::DEFAULT_HANDS, seed: None }
    }
}

/// Shuffle, then deal four hand cards followed by the starter.
///
/// ```
/// use cribbage_rs::deck::Deck;
/// use cribbage_rs::simulate::deal_show;
///
/// let mut deck = Deck::seeded(1);
/// let (hand, starter) = deal_show(&mut deck).unwrap();
/// assert!(!hand.contains(starter));
/// assert_eq!(deck.dealt(), 5);
/// ```
pub fn deal_show<R: Rng>(deck: &mut Deck<R>) -> Result<(Hand, Card), DeckError> {
    deck.shuffle();
    let hand = Hand::new([deck.deal()?, deck.deal()?, deck.deal()?, deck.deal()?]);
    let starter = deck.deal()?;
    Ok((hand, starter))
}

/// Deals and scores random shows, accumulating [`Stats`].
#[derive(Debug, Clone)]
pub struct Simulator<R = ChaCha8Rng> {
    deck: Deck<R>,
    stats: Stats,
}

impl Simulator<ChaCha8Rng> {
    pub fn new(seed: Option<u64>) -> Self {
        let deck = match seed {
            Some(seed) => Deck::seeded(seed),
            None => Deck::new(),
        };
        Self::with_deck(deck)
    }

    pub fn from_config(config: &SimConfig) -> Self {
        Self::new(config.seed)
    }
}

impl<R: Rng> Simulator<R> {
    pub fn with_deck(deck: Deck<R>) -> Self {
        Self { deck, stats: Stats::default() }
    }

    /// Deal, score and record one show.
    pub fn step(&mut self) -> Result<ScoredShow, SimError> {
        let (hand, starter) = deal_show(&mut self.deck)?;
        let score = score_hand(&hand, starter);
        self.stats.record(hand, starter, score);
        Ok(ScoredShow { hand, starter, score })
    }

    /// Play `n` shows.
    pub fn run(&mut self, n: u64) -> Result<&Stats, SimError> {
        self.run_with(n, |_, _| {})
    }

    /// Play `n` shows, handing each one to `on_show` with its 0-based index.
    pub fn run_with<F>(&mut self, n: u64, mut on_show: F) -> Result<&Stats, SimError>
    where
        F: FnMut(u64, &ScoredShow),
    {
        log::debug!("simulating {n} hands");
        for i in 0..n {
            let shown = self.step()?;
            on_show(i, &shown);
            if (i + 1) % 10_000 == 0 {
                log::debug!("{:<16}{:>8}  {}", "hands simulated", i + 1, self.stats);
            }
        }
        log::info!("{} hands: {}", self.stats.hands(), self.stats);
        Ok(&self.stats)
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    pub fn reset_stats(&mut self) {
        self.stats = Stats::default();
    }

    pub fn deck(&self) -> &Deck<R> {
        &self.deck
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deal_show_gives_five_distinct_cards() {
        let mut deck = Deck::seeded(9);
        for _ in 0..100 {
            let (hand, starter) = deal_show(&mut deck).unwrap();
            assert!(Hand::try_new(*hand.cards()).is_ok());
            assert!(!hand.contains(starter));
        }
    }

    #[test]
    fn seeded_runs_are_reproducible() {
        let mut a = Simulator::new(Some(5));
        let mut b = Simulator::new(Some(5));
        let sa = a.run(500).unwrap().clone();
        let sb = b.run(500).unwrap().clone();
        assert_eq!(sa.total(), sb.total());
        assert_eq!(sa.histogram(), sb.histogram());
        assert_eq!(sa.last(), sb.last());
    }

    #[test]
    fn run_with_visits_every_show() {
        let mut sim = Simulator::new(Some(1));
        let mut seen = Vec::new();
        sim.run_with(25, |i, shown| seen.push((i, shown.score.total()))).unwrap();
        assert_eq!(seen.len(), 25);
        assert_eq!(seen[24].0, 24);
        let sum: u64 = seen.iter().map(|(_, p)| u64::from(*p)).sum();
        assert_eq!(sum, sim.stats().total());
    }

    #[test]
    fn reset_clears_stats() {
        let mut sim = Simulator::new(Some(2));
        sim.run(10).unwrap();
        sim.reset_stats();
        assert_eq!(sim.stats().hands(), 0);
    }

    #[test]
    fn default_config() {
        let cfg = SimConfig::default();
        assert_eq!(cfg.hands, 100_000);
        assert_eq!(cfg.seed, None);
        let sim = Simulator::from_config(&SimConfig { hands: 1, seed: Some(3) });
        assert_eq!(sim.deck().len(), 52);
    }
}
