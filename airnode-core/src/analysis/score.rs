//! Composite Air-Quality Score
//!
//! Maps eCO2 and TVOC onto a single 0-100 figure (100 = clean air):
//!
//! ```text
//! eco2 sub-score:  100 at ≤ 450 ppm, 0 at ≥ 2000 ppm, linear between
//! tvoc sub-score:  100 at ≤ 100 ppb, 0 at ≥ 1000 ppb, linear between
//! score          = round(0.6·eco2_sub + 0.4·tvoc_sub), clamped to [0, 100]
//! ```

use crate::constants::sensors::{
    SCORE_ECO2_BAD_PPM, SCORE_ECO2_GOOD_PPM, SCORE_ECO2_WEIGHT,
    SCORE_TVOC_BAD_PPB, SCORE_TVOC_GOOD_PPB, SCORE_TVOC_WEIGHT,
};

/// Composite score for one pair of gas readings
pub fn air_quality_score(eco2_ppm: f32, tvoc_ppb: f32) -> u8 {
    let eco2 = sub_score(eco2_ppm, SCORE_ECO2_GOOD_PPM, SCORE_ECO2_BAD_PPM);
    let tvoc = sub_score(tvoc_ppb, SCORE_TVOC_GOOD_PPB, SCORE_TVOC_BAD_PPB);

    let composite = libm::roundf(SCORE_ECO2_WEIGHT * eco2 + SCORE_TVOC_WEIGHT * tvoc);
    if composite <= 0.0 {
        0
    } else if composite >= 100.0 {
        100
    } else {
        composite as u8
    }
}

/// Linear sub-score: 100 at or below `good`, 0 at or above `bad`
pub fn sub_score(value: f32, good: f32, bad: f32) -> f32 {
    if value <= good {
        100.0
    } else if value >= bad {
        0.0
    } else {
        100.0 * (1.0 - (value - good) / (bad - good))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn clean_air_scores_full() {
        assert_eq!(air_quality_score(450.0, 100.0), 100);
        assert_eq!(air_quality_score(400.0, 0.0), 100);
    }

    #[test]
    fn saturated_air_scores_zero() {
        assert_eq!(air_quality_score(2000.0, 1000.0), 0);
        assert_eq!(air_quality_score(5000.0, 60000.0), 0);
    }

    #[test]
    fn midpoints_interpolate() {
        // Both sub-scores exactly 50
        assert_eq!(air_quality_score(1225.0, 550.0), 50);

        // eco2 sub = 100*(1 - 310/1550) = 80, tvoc sub = 100 -> 0.6*80 + 40 = 88
        assert_eq!(air_quality_score(760.0, 80.0), 88);
    }

    #[test]
    fn weights_favour_eco2() {
        // Bad eCO2 alone costs 60 points, bad TVOC alone costs 40
        assert_eq!(air_quality_score(2000.0, 100.0), 40);
        assert_eq!(air_quality_score(450.0, 1000.0), 60);
    }

    proptest! {
        #[test]
        fn score_is_bounded_and_monotone(
            eco2 in 0.0f32..5000.0,
            tvoc in 0.0f32..5000.0,
            bump in 0.0f32..500.0,
        ) {
            let score = air_quality_score(eco2, tvoc);
            prop_assert!(score <= 100);
            prop_assert!(air_quality_score(eco2 + bump, tvoc) <= score);
            prop_assert!(air_quality_score(eco2, tvoc + bump) <= score);
        }
    }
}
