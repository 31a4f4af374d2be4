use super::cards_types::Card;

/// Centralized helper for parsing hardcoded card tokens in test fixtures.
pub struct CardFixtures;

impl CardFixtures {
    /// Parse hardcoded card tokens into Card instances.
    ///
    /// Only for tokens known to be valid; panics otherwise.
    pub fn parse_hardcoded(tokens: &[&str]) -> Vec<Card> {
        tokens
            .iter()
            .map(|s| {
                #[allow(clippy::expect_used)]
                s.parse::<Card>().expect("hardcoded valid card token")
            })
            .collect()
    }

    /// Forced to bid: spades total 60 and seven high cards overall.
    pub fn strong_hand() -> Vec<Card> {
        Self::parse_hardcoded(&[
            "AS", "KS", "QS", "JS", "10S", "AH", "KH", "2D", "3D", "4C", "5C", "6C", "7C",
        ])
    }

    /// Free to pass: no suit reaches 40 and no high cards.
    pub fn weak_hand() -> Vec<Card> {
        Self::parse_hardcoded(&[
            "2S", "3S", "4S", "5S", "2H", "3H", "4H", "5H", "2D", "3D", "4D", "5D", "6C",
        ])
    }
}
