// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker cards definitions.
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// Rank characters indexed by rank ordinal.
const RANK_CHARS: [char; 13] = [
    '2', '3', '4', '5', '6', '7', '8', '9', 'T', 'J', 'Q', 'K', 'A',
];

/// Suit characters indexed by suit ordinal.
const SUIT_CHARS: [char; 4] = ['c', 'd', 'h', 's'];

/// Suit symbols indexed by suit ordinal.
const SUIT_SYMBOLS: [char; 4] = ['♣', '♦', '♥', '♠'];

/// Error parsing a card, rank or suit.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// The rank is not one of 2-9, T, J, Q, K, A.
    #[error("invalid rank '{0}'")]
    InvalidRank(String),
    /// The suit is not one of s, h, d, c.
    #[error("invalid suit '{0}'")]
    InvalidSuit(String),
    /// The card string is malformed.
    #[error("invalid card '{0}'")]
    InvalidCard(String),
}

/// A Poker card.
///
/// Cards order by rank first and then by suit, so sorting a hand puts the
/// highest cards last.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    /// Create a card given a rank and suit.
    pub const fn new(rank: Rank, suit: Suit) -> Card {
        Card { rank, suit }
    }

    /// Returns the card rank.
    #[inline]
    pub fn rank(&self) -> Rank {
        self.rank
    }

    /// Returns the card suit.
    #[inline]
    pub fn suit(&self) -> Suit {
        self.suit
    }

    /// This card unique index in 0..52.
    #[inline]
    pub fn index(&self) -> usize {
        self.suit as usize * 13 + self.rank as usize
    }

    /// A mask with only this card bit set.
    #[inline]
    pub fn mask(&self) -> u64 {
        1 << self.index()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.rank, self.suit)
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match parse_cards(s)?.as_slice() {
            [card] => Ok(*card),
            _ => Err(ParseCardError::InvalidCard(s.to_string())),
        }
    }
}

impl From<Card> for String {
    fn from(card: Card) -> Self {
        card.to_string()
    }
}

impl TryFrom<String> for Card {
    type Error = ParseCardError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Parses a list of cards.
///
/// Cards can be concatenated as in `AhKh` or separated by spaces or commas as
/// in `Ah Kh` or `Ah,Kh`, a ten can be written as `T` or `10`.
pub fn parse_cards(s: &str) -> Result<Vec<Card>, ParseCardError> {
    let chars = s
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',')
        .collect::<Vec<_>>();

    let mut cards = Vec::with_capacity(chars.len() / 2);
    let mut pos = 0;

    while pos < chars.len() {
        let rank = if chars[pos] == '1' && chars.get(pos + 1) == Some(&'0') {
            pos += 2;
            Rank::Ten
        } else {
            let c = chars[pos];
            pos += 1;
            Rank::from_char(c).ok_or_else(|| ParseCardError::InvalidRank(c.to_string()))?
        };

        let Some(&c) = chars.get(pos) else {
            return Err(ParseCardError::InvalidCard(s.to_string()));
        };

        let suit = Suit::from_char(c).ok_or_else(|| ParseCardError::InvalidSuit(c.to_string()))?;
        pos += 1;

        cards.push(Card::new(rank, suit));
    }

    Ok(cards)
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Deuce
    Deuce = 0,
    /// Trey
    Trey,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Rank {
    const ALL: [Rank; 13] = {
        use Rank::*;
        [
            Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
    };

    /// Returns all ranks.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        Self::ALL.into_iter()
    }

    /// Returns the rank for an ordinal in 0..13.
    pub fn from_ordinal(ordinal: usize) -> Option<Rank> {
        Self::ALL.get(ordinal).copied()
    }

    /// The rank numeric value, a deuce is 2 and an ace is 14.
    #[inline]
    pub fn value(&self) -> u8 {
        *self as u8 + 2
    }

    /// The rank English name.
    pub fn name(&self) -> &'static str {
        const NAMES: [&str; 13] = [
            "Deuce", "Trey", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten", "Jack",
            "Queen", "King", "Ace",
        ];

        NAMES[*self as usize]
    }

    fn from_char(c: char) -> Option<Rank> {
        let c = c.to_ascii_uppercase();
        RANK_CHARS
            .iter()
            .position(|&r| r == c)
            .and_then(Self::from_ordinal)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", RANK_CHARS[*self as usize])
    }
}

impl FromStr for Rank {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some('1'), Some('0'), None) => Ok(Rank::Ten),
            (Some(c), None, None) => {
                Rank::from_char(c).ok_or_else(|| ParseCardError::InvalidRank(s.to_string()))
            }
            _ => Err(ParseCardError::InvalidRank(s.to_string())),
        }
    }
}

/// Card suit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Clubs suit.
    Clubs = 0,
    /// Diamonds suit.
    Diamonds,
    /// Hearts suit.
    Hearts,
    /// Spades suit.
    Spades,
}

impl Suit {
    const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        Self::ALL.into_iter()
    }

    /// The suit unicode symbol.
    pub fn symbol(&self) -> char {
        SUIT_SYMBOLS[*self as usize]
    }

    fn from_char(c: char) -> Option<Suit> {
        let c = c.to_ascii_lowercase();
        SUIT_CHARS
            .iter()
            .position(|&s| s == c)
            .or_else(|| SUIT_SYMBOLS.iter().position(|&s| s == c))
            .map(|idx| Self::ALL[idx])
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", SUIT_CHARS[*self as usize])
    }
}

impl FromStr for Suit {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => {
                Suit::from_char(c).ok_or_else(|| ParseCardError::InvalidSuit(s.to_string()))
            }
            _ => Err(ParseCardError::InvalidSuit(s.to_string())),
        }
    }
}

/// A cards Deck
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 52;

    /// Creates a new shuffled deck.
    pub fn new_and_shuffled<R: Rng>(rng: &mut R) -> Self {
        let mut deck = Self::default();
        deck.cards.shuffle(rng);
        deck
    }

    /// Deals a card from the deck, returns `None` if the deck is empty.
    pub fn deal(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards in the deck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// Removes a card from the deck.
    pub fn remove(&mut self, card: Card) {
        self.cards.retain(|c| c != &card);
    }

    /// Calls the `f` closure for each k-cards hand.
    ///
    /// Panics if k is not 2 <= k <= 7.
    pub fn for_each<F>(&self, k: usize, mut f: F)
    where
        F: FnMut(&[Card]),
    {
        assert!((2..=7).contains(&k), "2 <= k <= 7");

        if k > self.cards.len() {
            return;
        }

        let mut hand = [Card::new(Rank::Ace, Suit::Spades); 7];
        visit(&self.cards, &mut hand[..k], 0, 0, &mut f);
    }
}

/// Fills `hand[depth..]` with every combination of the cards from `start`.
fn visit<F>(cards: &[Card], hand: &mut [Card], depth: usize, start: usize, f: &mut F)
where
    F: FnMut(&[Card]),
{
    if depth == hand.len() {
        f(hand);
        return;
    }

    // Leave enough cards to fill the remaining positions.
    let last = cards.len() - (hand.len() - depth);
    for idx in start..=last {
        hand[depth] = cards[idx];
        visit(cards, hand, depth + 1, idx + 1, f);
    }
}

impl Default for Deck {
    fn default() -> Self {
        let cards = Suit::suits()
            .flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)))
            .collect::<Vec<_>>();
        Self { cards }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;

    #[test]
    fn card_index() {
        let mut masks = HashSet::default();
        let mut deck = Deck::new_and_shuffled(&mut rand::rng());

        while let Some(card) = deck.deal() {
            assert!(card.index() < Deck::SIZE);
            assert_eq!(card.mask().count_ones(), 1);
            masks.insert(card.mask());
        }

        // Check uniquness.
        assert_eq!(masks.len(), Deck::SIZE);
        assert!(deck.is_empty());
        assert_eq!(deck.deal(), None);

        assert_eq!(Card::new(Rank::Deuce, Suit::Clubs).index(), 0);
        assert_eq!(Card::new(Rank::Ace, Suit::Spades).index(), 51);
    }

    #[test]
    fn card_to_string() {
        let c = Card::new(Rank::King, Suit::Diamonds);
        assert_eq!(c.to_string(), "Kd");

        let c = Card::new(Rank::Five, Suit::Spades);
        assert_eq!(c.to_string(), "5s");

        let c = Card::new(Rank::Jack, Suit::Clubs);
        assert_eq!(c.to_string(), "Jc");

        let c = Card::new(Rank::Ten, Suit::Hearts);
        assert_eq!(c.to_string(), "Th");
        assert_eq!(format!("{c:?}"), "Card(Th)");
        assert_eq!(c.suit().symbol(), '♥');
    }

    #[test]
    fn card_ordering() {
        let ah = Card::new(Rank::Ace, Suit::Hearts);
        let kd = Card::new(Rank::King, Suit::Spades);
        assert!(ah > kd);
        assert!(Rank::Ace > Rank::King);
        assert_eq!(Rank::Deuce.value(), 2);
        assert_eq!(Rank::Ace.value(), 14);
        assert_eq!(Rank::ranks().count(), 13);
        assert_eq!(Suit::suits().count(), 4);
    }

    #[test]
    fn parse_card() {
        assert_eq!("Ah".parse(), Ok(Card::new(Rank::Ace, Suit::Hearts)));
        assert_eq!("td".parse(), Ok(Card::new(Rank::Ten, Suit::Diamonds)));
        assert_eq!("10s".parse(), Ok(Card::new(Rank::Ten, Suit::Spades)));
        assert_eq!("K♠".parse(), Ok(Card::new(Rank::King, Suit::Spades)));
        assert_eq!("2C".parse(), Ok(Card::new(Rank::Deuce, Suit::Clubs)));

        assert_eq!(
            "Xh".parse::<Card>(),
            Err(ParseCardError::InvalidRank("X".to_string()))
        );
        assert_eq!(
            "Ax".parse::<Card>(),
            Err(ParseCardError::InvalidSuit("x".to_string()))
        );
        assert_eq!(
            "A".parse::<Card>(),
            Err(ParseCardError::InvalidCard("A".to_string()))
        );
        assert_eq!(
            "AhKh".parse::<Card>(),
            Err(ParseCardError::InvalidCard("AhKh".to_string()))
        );
    }

    #[test]
    fn parse_rank_and_suit() {
        assert_eq!("T".parse(), Ok(Rank::Ten));
        assert_eq!("10".parse(), Ok(Rank::Ten));
        assert_eq!("q".parse(), Ok(Rank::Queen));
        assert!("11".parse::<Rank>().is_err());
        assert_eq!("S".parse(), Ok(Suit::Spades));
        assert_eq!("♦".parse(), Ok(Suit::Diamonds));
        assert!("sh".parse::<Suit>().is_err());
    }

    #[test]
    fn parse_card_lists() {
        let expected = vec![
            Card::new(Rank::Queen, Suit::Hearts),
            Card::new(Rank::Jack, Suit::Hearts),
            Card::new(Rank::Ten, Suit::Hearts),
        ];

        assert_eq!(parse_cards("QhJhTh"), Ok(expected.clone()));
        assert_eq!(parse_cards("Qh Jh 10h"), Ok(expected.clone()));
        assert_eq!(parse_cards("Qh,Jh, Th"), Ok(expected));
        assert_eq!(parse_cards(""), Ok(vec![]));
        assert!(parse_cards("QhJ").is_err());
    }

    #[test]
    fn card_serde() {
        let card = Card::new(Rank::Ace, Suit::Spades);
        let json = serde_json::to_string(&card).unwrap();
        assert_eq!(json, "\"As\"");

        let back: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(back, card);
        assert!(serde_json::from_str::<Card>("\"Zz\"").is_err());
    }

    #[test]
    fn deck_for_each() {
        let deck = Deck::default();
        assert_eq!(deck.count(), Deck::SIZE);

        let mut hands = HashSet::default();
        deck.for_each(2, |cards| {
            assert_eq!(cards.len(), 2);
            hands.insert(cards.to_owned());
        });
        assert_eq!(hands.len(), 1_326);

        hands.clear();
        deck.for_each(3, |cards| {
            assert_eq!(cards.len(), 3);
            hands.insert(cards.to_owned());
        });
        assert_eq!(hands.len(), 22_100);

        let mut count = 0;
        deck.for_each(5, |cards| {
            assert_eq!(cards.len(), 5);
            count += 1;
        });
        assert_eq!(count, 2_598_960);
    }

    #[test]
    fn deck_for_each_remove() {
        let mut deck = Deck::default();
        deck.remove(Card::new(Rank::Ace, Suit::Diamonds));
        deck.remove(Card::new(Rank::King, Suit::Diamonds));
        assert_eq!(deck.count(), 50);

        let mut count = 0;
        deck.for_each(3, |cards| {
            assert!(!cards.contains(&Card::new(Rank::Ace, Suit::Diamonds)));
            count += 1;
        });
        assert_eq!(count, 19_600);
    }
}
