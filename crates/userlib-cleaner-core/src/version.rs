use lazy_static::lazy_static;
use regex::Regex;

/// Weight applied to the accumulator before each further numeric run.
const COMPONENT_FACTOR: u64 = 1000;

lazy_static! {
    static ref DIGIT_RUN: Regex = Regex::new("[0-9]+").unwrap();
}

/// Collapse a free-form version string into a single comparable number.
///
/// Every run of decimal digits is folded left to right: once the accumulator
/// is non-zero it is multiplied by 1000 before the next run is added, so
/// `"1.2.3"` becomes `1_002_003` and `"0.1.2"` becomes `1_002`. Anything that
/// is not a digit (separators, qualifiers such as `SNAPSHOT`) is ignored.
///
/// This is a coarse ordering key, not a semver comparison. Components above
/// 999 bleed into their neighbours, arithmetic wraps on overflow and a digit
/// run too large for `u64` saturates.
pub fn normalize(version: &str) -> u64 {
    DIGIT_RUN
        .find_iter(version)
        .map(|run| run.as_str().parse::<u64>().unwrap_or(u64::MAX))
        .fold(0u64, |acc, value| {
            let acc = if acc > 0 {
                acc.wrapping_mul(COMPONENT_FACTOR)
            } else {
                acc
            };
            acc.wrapping_add(value)
        })
}
