use crate::cards::Card;
use crate::hand::Hand;
use crate::scoring::{Category, Score};
use std::fmt;

/// Number of distinct show totals, 0 through 29.
pub const HISTOGRAM_BUCKETS: usize = Score::MAX as usize + 1;

/// A scored show kept for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredShow {
    pub hand: Hand,
    pub starter: Card,
    pub score: Score,
}

/// Running statistics over many scored shows.
///
/// ```
/// use cribbage_rs::scoring::score_hand;
/// use cribbage_rs::stats::Stats;
///
/// let mut stats = Stats::default();
/// let hand = "JH AS 2C AD".parse().unwrap();
/// let starter = "5H".parse().unwrap();
/// stats.record(hand, starter, score_hand(&hand, starter));
/// assert_eq!(stats.hands(), 1);
/// assert_eq!(stats.max(), Some(5));
/// ```
#[derive(Debug, Clone)]
pub struct Stats {
    hands: u64,
    total: u64,
    category_totals: [u64; 5],
    histogram: [u64; HISTOGRAM_BUCKETS],
    best: Option<ScoredShow>,
    last: Option<ScoredShow>,
}

impl Default for Stats {
    fn default() -> Self {
        Self {
            hands: 0,
            total: 0,
            category_totals: [0; 5],
            histogram: [0; HISTOGRAM_BUCKETS],
            best: None,
            last: None,
        }
    }
}

impl Stats {
    pub fn record(&mut self, hand: Hand, starter: Card, score: Score) {
        let points = score.total();
        self.hands += 1;
        self.total += u64::from(points);
        for (category, p) in score.iter() {
            self.category_totals[category.index()] += u64::from(p);
        }
        // totals above 29 are impossible
        let bucket = usize::from(points).min(HISTOGRAM_BUCKETS - 1);
        self.histogram[bucket] += 1;

        let shown = ScoredShow { hand, starter, score };
        if self.best.map_or(true, |b| points > b.score.total()) {
            self.best = Some(shown);
        }
        self.last = Some(shown);
    }

    /// Fold another set of statistics into this one. `last` is taken from `other`.
    pub fn merge(&mut self, other: &Stats) {
        self.hands += other.hands;
        self.total += other.total;
        for (a, b) in self.category_totals.iter_mut().zip(other.category_totals) {
            *a += b;
        }
        for (a, b) in self.histogram.iter_mut().zip(other.histogram) {
            *a += b;
        }
        if let Some(ob) = other.best {
            if self.best.map_or(true, |b| ob.score.total() > b.score.total()) {
                self.best = Some(ob);
            }
        }
        if other.last.is_some() {
            self.last = other.last;
        }
    }

    pub fn hands(&self) -> u64 {
        self.hands
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    /// Mean show total; 0.0 before any hand is recorded.
    pub fn mean(&self) -> f64 {
        if self.hands == 0 {
            return 0.0;
        }
        self.total as f64 / self.hands as f64
    }

    pub fn max(&self) -> Option<u8> {
        self.best.map(|b| b.score.total())
    }

    pub fn category_total(&self, category: Category) -> u64 {
        self.category_totals[category.index()]
    }

    pub fn category_mean(&self, category: Category) -> f64 {
        if self.hands == 0 {
            return 0.0;
        }
        self.category_total(category) as f64 / self.hands as f64
    }

    /// Count of hands per total, indexed by points.
    pub fn histogram(&self) -> &[u64; HISTOGRAM_BUCKETS] {
        &self.histogram
    }

    /// First hand that reached the current maximum.
    pub fn best(&self) -> Option<&ScoredShow> {
        self.best.as_ref()
    }

    pub fn last(&self) -> Option<&ScoredShow> {
        self.last.as_ref()
    }
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.max() {
            Some(max) => write!(f, "Avg = {:.6}   Max = {}", self.mean(), max),
            None => write!(f, "Avg = {:.6}   Max = -", self.mean()),
        }
    }
}
