use super::errors::PricingError;

/// Markup applied to the current price before rounding (6%).
pub const MARKUP_BASE: f64 = 1.06;

/// Price range, selected by the marked-up price, that decides the rounding rules.
///
/// Lower bounds are inclusive: 50 is `Medium`, 200 is `Large`, 1000 is `Premium`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bracket {
    /// Below 50: whole units, fives and tens.
    Small,
    /// 50 up to 200: fives, tens and fifties.
    Medium,
    /// 200 up to 1000: tens, fifties and hundreds, never a round 500.
    Large,
    /// 1000 and above: fifties, "...90" endings and hundreds.
    Premium,
}

impl Bracket {
    pub fn of(marked_up: f64) -> Self {
        if marked_up < 50.0 {
            Bracket::Small
        } else if marked_up < 200.0 {
            Bracket::Medium
        } else if marked_up < 1000.0 {
            Bracket::Large
        } else {
            Bracket::Premium
        }
    }

    /// The three raw candidates for a marked-up price, before deduplication.
    pub fn candidates(self, marked_up: f64) -> [f64; 3] {
        match self {
            Bracket::Small => [
                marked_up.ceil(),
                ceil_to(marked_up, 5.0),
                ceil_to(marked_up, 10.0),
            ],
            Bracket::Medium => [
                ceil_to(marked_up, 5.0),
                ceil_to(marked_up, 10.0),
                ceil_to(marked_up, 50.0),
            ],
            Bracket::Large => {
                let mut hundreds = ceil_to(marked_up, 100.0);
                // 500, 1000, ... read as too round for a shelf price
                if hundreds % 500.0 == 0.0 {
                    hundreds -= 10.0;
                }
                [ceil_to(marked_up, 10.0), ceil_to(marked_up, 50.0), hundreds]
            }
            Bracket::Premium => [
                ceil_to(marked_up, 50.0),
                ceil_to(marked_up - 90.0, 100.0) + 90.0,
                ceil_to(marked_up, 100.0),
            ],
        }
    }
}

impl std::fmt::Display for Bracket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Bracket::Small => write!(f, "small"),
            Bracket::Medium => write!(f, "medium"),
            Bracket::Large => write!(f, "large"),
            Bracket::Premium => write!(f, "premium"),
        }
    }
}

/// Smallest multiple of `step` that is >= `value`.
fn ceil_to(value: f64, step: f64) -> f64 {
    (value / step).ceil() * step
}

/// Suggested prices for one current price.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceSuggestion {
    pub current_price: f64,
    pub marked_up: f64,
    pub bracket: Bracket,
    /// Ascending, without duplicates.
    pub prices: Vec<f64>,
}

/// Computes the suggested new prices for `current_price`.
///
/// The price must be finite and strictly positive, otherwise
/// `PricingError::InvalidPrice` is returned.
pub fn compute_suggestions(current_price: f64) -> Result<PriceSuggestion, PricingError> {
    if !current_price.is_finite() || current_price <= 0.0 {
        return Err(PricingError::InvalidPrice);
    }

    let marked_up = current_price * MARKUP_BASE;
    if !marked_up.is_finite() {
        return Err(PricingError::InvalidPrice);
    }

    let bracket = Bracket::of(marked_up);
    let mut prices = bracket.candidates(marked_up).to_vec();
    prices.sort_by(|a, b| a.total_cmp(b));
    prices.dedup();

    Ok(PriceSuggestion {
        current_price,
        marked_up,
        bracket,
        prices,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn prices(current_price: f64) -> Vec<f64> {
        compute_suggestions(current_price).unwrap().prices
    }

    #[test]
    fn should_round_small_prices_to_units_fives_and_tens() {
        assert_eq!(prices(40.0), vec![43.0, 45.0, 50.0]);
    }

    #[test]
    fn should_deduplicate_coinciding_candidates() {
        assert_eq!(prices(100.0), vec![110.0, 150.0]);
    }

    #[test]
    fn should_round_large_prices_to_tens_fifties_and_hundreds() {
        assert_eq!(prices(300.0), vec![320.0, 350.0, 400.0]);
    }

    #[test]
    fn should_keep_hundreds_candidate_when_not_multiple_of_500() {
        let suggestion = compute_suggestions(471.70).unwrap();

        assert_eq!(suggestion.bracket, Bracket::Large);
        assert_eq!(suggestion.prices, vec![510.0, 550.0, 600.0]);
    }

    #[test]
    fn should_lower_hundreds_candidate_by_ten_when_multiple_of_500() {
        assert_eq!(Bracket::Large.candidates(500.0), [500.0, 500.0, 490.0]);
        assert_eq!(Bracket::Large.candidates(950.0), [950.0, 950.0, 990.0]);
        assert_eq!(Bracket::Large.candidates(410.0), [410.0, 450.0, 490.0]);
    }

    #[test]
    fn should_offer_ninety_ending_for_premium_prices() {
        assert_eq!(prices(2000.0), vec![2150.0, 2190.0, 2200.0]);
    }

    #[test]
    fn should_keep_exact_ninety_ending_in_premium_bracket() {
        assert_eq!(Bracket::Premium.candidates(1090.0), [1100.0, 1090.0, 1100.0]);
    }

    #[test]
    fn should_place_boundaries_in_upper_bracket() {
        assert_eq!(Bracket::of(49.99), Bracket::Small);
        assert_eq!(Bracket::of(50.0), Bracket::Medium);
        assert_eq!(Bracket::of(199.99), Bracket::Medium);
        assert_eq!(Bracket::of(200.0), Bracket::Large);
        assert_eq!(Bracket::of(999.99), Bracket::Large);
        assert_eq!(Bracket::of(1000.0), Bracket::Premium);
    }

    #[test]
    fn should_apply_markup_before_selecting_bracket() {
        let suggestion = compute_suggestions(48.0).unwrap();

        assert_eq!(suggestion.bracket, Bracket::Medium);
        assert_eq!(suggestion.prices, vec![55.0, 60.0, 100.0]);
    }

    #[test]
    fn should_reject_zero_negative_and_non_finite_prices() {
        for price in [0.0, -10.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(matches!(
                compute_suggestions(price),
                Err(PricingError::InvalidPrice)
            ));
        }
    }

    #[test]
    fn should_reject_price_that_overflows_after_markup() {
        assert!(matches!(
            compute_suggestions(f64::MAX),
            Err(PricingError::InvalidPrice)
        ));
    }

    proptest! {
        #[test]
        fn suggestions_are_strictly_ascending_and_positive(price in 0.01f64..1_000_000.0) {
            let suggestion = compute_suggestions(price).unwrap();

            prop_assert!(!suggestion.prices.is_empty());
            prop_assert!(suggestion.prices.len() <= 3);
            prop_assert!(suggestion.prices.windows(2).all(|w| w[0] < w[1]));
            prop_assert!(suggestion.prices.iter().all(|p| *p > 0.0));
        }

        #[test]
        fn suggestions_never_fall_far_below_marked_up_price(price in 0.01f64..1_000_000.0) {
            let suggestion = compute_suggestions(price).unwrap();
            let floor = match suggestion.bracket {
                Bracket::Large => suggestion.marked_up - 10.0,
                _ => suggestion.marked_up,
            } - 1e-6;

            prop_assert!(suggestion.prices.iter().all(|p| *p >= floor));
        }

        #[test]
        fn suggestions_are_deterministic(price in 0.01f64..1_000_000.0) {
            prop_assert_eq!(compute_suggestions(price).unwrap(), compute_suggestions(price).unwrap());
        }
    }
}
