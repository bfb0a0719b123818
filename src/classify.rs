use crate::catalog::ClassLadder;
use crate::error::ClassificationError;
use crate::scoring::clean_base_class;

/// Width of one promotion band, in points
pub const BAND_WIDTH: i32 = 14;
/// Highest tier the point bands can express (84+ points)
pub const MAX_TIER: usize = 6;

/// Number of ladder steps earned by `total_points`.
///
/// Bands: below 14 -> 0, [14,28) -> 1, [28,42) -> 2, [42,56) -> 3,
/// [56,70) -> 4, [70,84) -> 5, 84 and above -> 6.
/// Negative totals never demote.
pub fn promotion_tier(total_points: i32) -> usize {
    if total_points < BAND_WIDTH {
        return 0;
    }
    let tier = ((total_points - BAND_WIDTH) / BAND_WIDTH + 1) as usize;
    tier.min(MAX_TIER)
}

/// Final class for a raw base class and a total score.
///
/// Promotion stops at the top of the ladder.
pub fn classify(
    raw_base_class: &str,
    total_points: i32,
    ladder: &ClassLadder,
) -> Result<String, ClassificationError> {
    let clean = clean_base_class(raw_base_class);

    let Some(base_index) = ladder.index_of(&clean) else {
        tracing::error!(
            raw = raw_base_class,
            clean = %clean,
            "base class is not on the class ladder; catalog data is inconsistent"
        );
        return Err(ClassificationError::UnknownBaseClass {
            raw: raw_base_class.to_string(),
            clean,
        });
    };

    let tier = promotion_tier(total_points);
    let final_index = (base_index + tier).min(ladder.len() - 1);

    tracing::debug!(
        base = %clean,
        total_points,
        tier,
        final_index,
        "classified"
    );

    ladder
        .get(final_index)
        .map(str::to_string)
        .ok_or_else(|| ClassificationError::UnknownBaseClass {
            raw: raw_base_class.to_string(),
            clean,
        })
}
