use poem_openapi::{Enum, Object};

use business::domain::pricing::model::{Bracket, PriceSuggestion};

#[derive(Debug, Clone, PartialEq, Enum)]
pub enum BracketDto {
    #[oai(rename = "small")]
    Small,
    #[oai(rename = "medium")]
    Medium,
    #[oai(rename = "large")]
    Large,
    #[oai(rename = "premium")]
    Premium,
}

impl From<Bracket> for BracketDto {
    fn from(bracket: Bracket) -> Self {
        match bracket {
            Bracket::Small => BracketDto::Small,
            Bracket::Medium => BracketDto::Medium,
            Bracket::Large => BracketDto::Large,
            Bracket::Premium => BracketDto::Premium,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct PriceSuggestionResponse {
    /// Price the suggestions were computed from
    pub current_price: f64,
    /// Current price after the 6% markup
    pub marked_up: f64,
    /// Price range that selected the rounding rules
    pub bracket: BracketDto,
    /// One to three candidates, ascending and without duplicates
    pub suggestions: Vec<f64>,
}

impl From<PriceSuggestion> for PriceSuggestionResponse {
    fn from(suggestion: PriceSuggestion) -> Self {
        Self {
            current_price: suggestion.current_price,
            marked_up: suggestion.marked_up,
            bracket: suggestion.bracket.into(),
            suggestions: suggestion.prices,
        }
    }
}
