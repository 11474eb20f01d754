//! Card parsing from string representations.
//!
//! Two forms are accepted: the human card name ("Jack of Spades", "10 of Hearts")
//! and the compact two-character token ("JS", "TH", "2C").

use std::str::FromStr;

use super::cards_types::{Card, Rank, Suit};
use crate::errors::domain::{DomainError, ValidationKind};

fn parse_error(s: &str) -> DomainError {
    DomainError::validation(ValidationKind::ParseCard, format!("Parse card: {s}"))
}

impl FromStr for Suit {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Clubs" => Ok(Suit::Clubs),
            "Diamonds" => Ok(Suit::Diamonds),
            "Hearts" => Ok(Suit::Hearts),
            "Spades" => Ok(Suit::Spades),
            _ => Err(DomainError::validation(
                ValidationKind::ParseCard,
                format!("Invalid suit: {s}"),
            )),
        }
    }
}

impl FromStr for Card {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some((rank_str, suit_str)) = s.split_once(" of ") {
            let rank = Rank::ALL
                .into_iter()
                .find(|r| r.name() == rank_str)
                .ok_or_else(|| parse_error(s))?;
            let suit = suit_str.parse::<Suit>().map_err(|_| parse_error(s))?;
            return Ok(Card { suit, rank });
        }
        parse_token(s)
    }
}

fn parse_token(s: &str) -> Result<Card, DomainError> {
    if s.len() != 2 {
        return Err(parse_error(s));
    }
    let mut chars = s.chars();
    let rank_ch = chars.next().ok_or_else(|| parse_error(s))?;
    let suit_ch = chars.next().ok_or_else(|| parse_error(s))?;
    let rank = match rank_ch {
        '2' => Rank::Two,
        '3' => Rank::Three,
        '4' => Rank::Four,
        '5' => Rank::Five,
        '6' => Rank::Six,
        '7' => Rank::Seven,
        '8' => Rank::Eight,
        '9' => Rank::Nine,
        'T' => Rank::Ten,
        'J' => Rank::Jack,
        'Q' => Rank::Queen,
        'K' => Rank::King,
        'A' => Rank::Ace,
        _ => return Err(parse_error(s)),
    };
    let suit = match suit_ch {
        'C' => Suit::Clubs,
        'D' => Suit::Diamonds,
        'H' => Suit::Hearts,
        'S' => Suit::Spades,
        _ => return Err(parse_error(s)),
    };
    Ok(Card { suit, rank })
}

/// Non-panicking helper to parse card tokens or names into Card instances.
pub fn try_parse_cards<I, S>(tokens: I) -> Result<Vec<Card>, DomainError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .map(|s| s.as_ref().parse::<Card>())
        .collect()
}

/// Rebuild a card from its stored document fields (`suit` name + numeric `rank`).
pub fn from_stored_format(suit_str: &str, rank_value: u8) -> Result<Card, DomainError> {
    let suit = suit_str.parse::<Suit>()?;
    let rank = Rank::from_value(rank_value).ok_or_else(|| {
        DomainError::validation(
            ValidationKind::ParseCard,
            format!("Invalid rank: {rank_value}"),
        )
    })?;
    Ok(Card { suit, rank })
}
