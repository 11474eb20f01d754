//! Serialization and deserialization for card types.
//!
//! Cards are stored as documents `{"name": "Jack of Spades", "suit": "Spades", "rank": 11}`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::cards_parsing::from_stored_format;
use super::cards_types::{Card, Suit};

impl Serialize for Suit {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Suit {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<Suit>()
            .map_err(|_| serde::de::Error::custom(format!("Invalid suit: {s}")))
    }
}

#[derive(Serialize, Deserialize)]
struct CardDocument {
    name: String,
    suit: String,
    rank: u8,
}

impl Serialize for Card {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        CardDocument {
            name: self.name(),
            suit: self.suit.name().to_string(),
            rank: self.rank.value(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Card {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let doc = CardDocument::deserialize(deserializer)?;
        let card = from_stored_format(&doc.suit, doc.rank)
            .map_err(|e| serde::de::Error::custom(e.to_string()))?;
        if card.name() != doc.name {
            return Err(serde::de::Error::custom(format!(
                "Card name {:?} does not match suit/rank ({})",
                doc.name, card
            )));
        }
        Ok(card)
    }
}
