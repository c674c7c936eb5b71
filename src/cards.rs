use core::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CardError {
    #[error("invalid rank: '{0}'")]
    InvalidRank(String),
    #[error("invalid suit: '{0}'")]
    InvalidSuit(String),
    #[error("invalid card: '{0}'")]
    Invalid(String),
}

/// Card ranks from Ace (low, 1) to King (high, 13). There is no Ace-high wraparound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Rank {
    Ace = 1,
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
    Ten = 10,
    Jack = 11,
    Queen = 12,
    King = 13,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Ordinal value, 1 through 13.
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// Counting value used for fifteens: face cards count 10, Ace counts 1.
    pub const fn pips(self) -> u8 {
        let n = self as u8;
        if n > 10 {
            10
        } else {
            n
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

impl TryFrom<u8> for Rank {
    type Error = CardError;
    fn try_from(v: u8) -> Result<Self, Self::Error> {
        match v {
            1 => Ok(Rank::Ace),
            2 => Ok(Rank::Two),
            3 => Ok(Rank::Three),
            4 => Ok(Rank::Four),
            5 => Ok(Rank::Five),
            6 => Ok(Rank::Six),
            7 => Ok(Rank::Seven),
            8 => Ok(Rank::Eight),
            9 => Ok(Rank::Nine),
            10 => Ok(Rank::Ten),
            11 => Ok(Rank::Jack),
            12 => Ok(Rank::Queen),
            13 => Ok(Rank::King),
            _ => Err(CardError::InvalidRank(v.to_string())),
        }
    }
}

impl FromStr for Rank {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        match t.to_ascii_uppercase().as_str() {
            "A" | "1" => Ok(Rank::Ace),
            "2" => Ok(Rank::Two),
            "3" => Ok(Rank::Three),
            "4" => Ok(Rank::Four),
            "5" => Ok(Rank::Five),
            "6" => Ok(Rank::Six),
            "7" => Ok(Rank::Seven),
            "8" => Ok(Rank::Eight),
            "9" => Ok(Rank::Nine),
            "T" | "10" => Ok(Rank::Ten),
            "J" | "11" => Ok(Rank::Jack),
            "Q" | "12" => Ok(Rank::Queen),
            "K" | "13" => Ok(Rank::King),
            _ => Err(CardError::InvalidRank(s.to_string())),
        }
    }
}

/// The four suits, listed in deck construction order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    Spades,
    Hearts,
    Diamonds,
    Clubs,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];

    pub const fn to_char(self) -> char {
        match self {
            Suit::Spades => 'S',
            Suit::Hearts => 'H',
            Suit::Diamonds => 'D',
            Suit::Clubs => 'C',
        }
    }

    pub const fn glyph(self) -> char {
        match self {
            Suit::Spades => '\u{2660}',
            Suit::Hearts => '\u{2665}',
            Suit::Diamonds => '\u{2666}',
            Suit::Clubs => '\u{2663}',
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Suit::Spades => "Spades",
            Suit::Hearts => "Hearts",
            Suit::Diamonds => "Diamonds",
            Suit::Clubs => "Clubs",
        }
    }

    /// Hearts and diamonds.
    pub const fn is_red(self) -> bool {
        matches!(self, Suit::Hearts | Suit::Diamonds)
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl TryFrom<char> for Suit {
    type Error = CardError;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_uppercase() {
            'S' | '\u{2660}' => Ok(Suit::Spades),
            'H' | '\u{2665}' => Ok(Suit::Hearts),
            'D' | '\u{2666}' => Ok(Suit::Diamonds),
            'C' | '\u{2663}' => Ok(Suit::Clubs),
            _ => Err(CardError::InvalidSuit(c.to_string())),
        }
    }
}

impl FromStr for Suit {
    type Err = CardError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        let mut chars = t.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Suit::try_from(c);
        }
        Suit::ALL
            .into_iter()
            .find(|suit| suit.name().eq_ignore_ascii_case(t))
            .ok_or_else(|| CardError::InvalidSuit(s.to_string()))
    }
}

/// A playing card: rank + suit.
///
/// Equality needs both rank and suit to match. Ordering for scoring purposes
/// looks at rank only and is exposed through [`Card::cmp_rank`] rather than
/// `Ord`, so that equal-rank cards of different suits never compare as equal
/// cards.
///
/// ```
/// use cribbage_rs::cards::{Card, Rank, Suit};
///
/// let card = Card::new(Rank::Jack, Suit::Spades);
/// assert_eq!(card.to_string(), "JS");
/// assert_eq!(card.symbol(), "J\u{2660}");
/// assert_eq!(card.value(), 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Build a card from a raw rank number (1-13) and a suit symbol.
    pub fn try_from_parts(rank: u8, suit: char) -> Result<Self, CardError> {
        Ok(Self::new(Rank::try_from(rank)?, Suit::try_from(suit)?))
    }

    pub const fn rank(self) -> Rank {
        self.rank
    }
    pub const fn suit(self) -> Suit {
        self.suit
    }

    /// Value for fifteens: `min(rank, 10)`.
    pub const fn value(self) -> u8 {
        self.rank.pips()
    }

    pub fn cmp_rank(&self, other: &Card) -> Ordering {
        self.rank.cmp(&other.rank)
    }

    /// Numeric distance between ranks. Not circular: Ace and King are 12 apart.
    pub const fn rank_distance(self, other: Card) -> u8 {
        self.rank.number().abs_diff(other.rank.number())
    }

    pub fn same_suit(self, other: Card) -> bool {
        self.suit == other.suit
    }

    pub fn same_rank(self, other: Card) -> bool {
        self.rank == other.rank
    }

    /// Rank followed by the suit glyph, e.g. `10♥`.
    pub fn symbol(self) -> String {
        format!("{}{}", self.rank, self.suit.glyph())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl FromStr for Card {
    type Err = CardError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        // suit is the last char (possibly a multi-byte glyph); rank is everything before it
        let Some((split, suit_ch)) = t.char_indices().last() else {
            return Err(CardError::Invalid(s.to_string()));
        };
        if split == 0 {
            return Err(CardError::Invalid(s.to_string()));
        }
        let rank = Rank::from_str(&t[..split])?;
        let suit = Suit::try_from(suit_ch)?;
        Ok(Card::new(rank, suit))
    }
}

/// Parse multiple cards separated by whitespace or commas.
///
/// ```
/// use cribbage_rs::cards::{parse_cards, Card, Rank, Suit};
///
/// let cards = parse_cards("JH, AS 10c").unwrap();
/// assert_eq!(cards[0], Card::new(Rank::Jack, Suit::Hearts));
/// assert_eq!(cards[1], Card::new(Rank::Ace, Suit::Spades));
/// assert_eq!(cards[2], Card::new(Rank::Ten, Suit::Clubs));
/// ```
pub fn parse_cards(input: &str) -> Result<Vec<Card>, CardError> {
    input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .map(Card::from_str)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_display_and_from_str() {
        assert_eq!(Rank::Ace.to_string(), "A");
        assert_eq!(Rank::Ten.to_string(), "10");
        assert_eq!(Rank::from_str("T").unwrap(), Rank::Ten);
        assert_eq!(Rank::from_str("10").unwrap(), Rank::Ten);
        assert_eq!(Rank::from_str("1").unwrap(), Rank::Ace);
        assert_eq!(Rank::from_str("q").unwrap(), Rank::Queen);
        assert!(matches!(Rank::from_str("14"), Err(CardError::InvalidRank(_))));
        assert!(matches!(Rank::from_str("Z"), Err(CardError::InvalidRank(_))));
        assert_eq!(Rank::from_str("13").unwrap(), Rank::King);
        for bad in ["+5", "05", "0", "-1", "010"] {
            assert!(matches!(Rank::from_str(bad), Err(CardError::InvalidRank(_))), "{bad}");
        }
    }

    #[test]
    fn rank_try_from_bounds() {
        assert_eq!(Rank::try_from(1).unwrap(), Rank::Ace);
        assert_eq!(Rank::try_from(13).unwrap(), Rank::King);
        assert_eq!(Rank::try_from(0), Err(CardError::InvalidRank("0".into())));
        assert_eq!(Rank::try_from(14), Err(CardError::InvalidRank("14".into())));
        for (i, r) in Rank::ALL.iter().enumerate() {
            assert_eq!(r.number() as usize, i + 1);
        }
    }

    #[test]
    fn ranks_order_ace_low() {
        assert!(Rank::Ace < Rank::Two);
        assert!(Rank::Queen < Rank::King);
        assert!(Rank::ALL.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn suit_display_and_from_str() {
        assert_eq!(Suit::Diamonds.to_string(), "D");
        assert_eq!(Suit::from_str("s").unwrap(), Suit::Spades);
        assert_eq!(Suit::from_str("Hearts").unwrap(), Suit::Hearts);
        for suit in Suit::ALL {
            assert_eq!(Suit::from_str(suit.name()).unwrap(), suit);
            assert_eq!(Suit::from_str(&suit.name().to_uppercase()).unwrap(), suit);
        }
        assert!(matches!(Suit::from_str("Spade"), Err(CardError::InvalidSuit(_))));
        assert_eq!(Suit::from_str("\u{2663}").unwrap(), Suit::Clubs);
        assert!(matches!(Suit::from_str("x"), Err(CardError::InvalidSuit(_))));
        assert!(matches!(Suit::try_from('?'), Err(CardError::InvalidSuit(_))));
    }

    #[test]
    fn card_display_and_from_str() {
        let j = Card::new(Rank::Jack, Suit::Spades);
        assert_eq!(j.to_string(), "JS");
        assert_eq!(Card::from_str("JS").unwrap(), j);
        assert_eq!(Card::from_str("J\u{2660}").unwrap(), j);
        assert_eq!(Card::from_str("10d").unwrap(), Card::new(Rank::Ten, Suit::Diamonds));
        assert_eq!(Card::from_str("ah").unwrap(), Card::new(Rank::Ace, Suit::Hearts));
        assert!(matches!(Card::from_str("S"), Err(CardError::Invalid(_))));
        assert!(matches!(Card::from_str(""), Err(CardError::Invalid(_))));
        assert!(matches!(Card::from_str("0H"), Err(CardError::InvalidRank(_))));
    }

    #[test]
    fn try_from_parts_delegates_validation() {
        assert_eq!(Card::try_from_parts(2, 'C').unwrap(), Card::new(Rank::Two, Suit::Clubs));
        assert!(matches!(Card::try_from_parts(0, 'C'), Err(CardError::InvalidRank(_))));
        assert!(matches!(Card::try_from_parts(5, 'X'), Err(CardError::InvalidSuit(_))));
    }

    #[test]
    fn value_caps_face_cards_at_ten() {
        for r in Rank::ALL {
            let c = Card::new(r, Suit::Clubs);
            let expected = if r.number() <= 10 { r.number() } else { 10 };
            assert_eq!(c.value(), expected, "{c}");
        }
    }

    #[test]
    fn equality_needs_suit_but_ordering_ignores_it() {
        let ks = Card::new(Rank::King, Suit::Spades);
        let kc = Card::new(Rank::King, Suit::Clubs);
        let a = Card::new(Rank::Ace, Suit::Spades);
        assert_ne!(ks, kc);
        assert_eq!(ks.cmp_rank(&kc), Ordering::Equal);
        assert_eq!(a.cmp_rank(&kc), Ordering::Less);
        assert!(ks.same_rank(kc));
        assert!(ks.same_suit(a));
    }

    #[test]
    fn rank_distance_is_not_circular() {
        let j = Card::new(Rank::Jack, Suit::Spades);
        assert_eq!(j.rank_distance(Card::new(Rank::Ten, Suit::Spades)), 1);
        assert_eq!(j.rank_distance(Card::new(Rank::Jack, Suit::Hearts)), 0);
        let a = Card::new(Rank::Ace, Suit::Hearts);
        let k = Card::new(Rank::King, Suit::Hearts);
        assert_eq!(a.rank_distance(k), 12);
        assert_eq!(k.rank_distance(a), 12);
    }

    #[test]
    fn parse_many_cards() {
        let xs = parse_cards("JH, AS 2c,AD").unwrap();
        assert_eq!(xs.len(), 4);
        assert_eq!(xs[3], Card::new(Rank::Ace, Suit::Diamonds));
        assert!(parse_cards("JH XX").is_err());
    }
}
