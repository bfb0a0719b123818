/// Marker meaning the car carries an inherent +7 adjustment
pub const STAR_MARKER: char = '*';
/// Marker meaning the car carries an inherent +5 adjustment
pub const DOLLAR_MARKER: char = '$';

pub const STAR_POINTS: i32 = 7;
pub const DOLLAR_POINTS: i32 = 5;

/// Bonus points carried by the markers in a raw base class.
///
/// Each marker counts once no matter how often it appears.
pub fn special_indicator_bonus(raw_base_class: &str) -> i32 {
    let mut points = 0;
    if raw_base_class.contains(STAR_MARKER) {
        points += STAR_POINTS;
    }
    if raw_base_class.contains(DOLLAR_MARKER) {
        points += DOLLAR_POINTS;
    }
    points
}

/// Strip every marker, leaving the ladder lookup key.
pub fn clean_base_class(raw_base_class: &str) -> String {
    raw_base_class
        .chars()
        .filter(|&c| c != STAR_MARKER && c != DOLLAR_MARKER)
        .collect()
}

/// Human-readable explanation of the markers, `None` when there are none
pub fn describe_indicators(raw_base_class: &str) -> Option<String> {
    let star = raw_base_class.contains(STAR_MARKER);
    let dollar = raw_base_class.contains(DOLLAR_MARKER);

    match (star, dollar) {
        (true, true) => Some(format!(
            "{} adds +{} points, {} adds +{} points (total +{} points)",
            STAR_MARKER,
            STAR_POINTS,
            DOLLAR_MARKER,
            DOLLAR_POINTS,
            STAR_POINTS + DOLLAR_POINTS
        )),
        (true, false) => Some(format!("{} adds +{} points", STAR_MARKER, STAR_POINTS)),
        (false, true) => Some(format!("{} adds +{} points", DOLLAR_MARKER, DOLLAR_POINTS)),
        (false, false) => None,
    }
}
