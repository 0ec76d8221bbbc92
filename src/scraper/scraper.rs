use log::debug;
use crate::scraper::enums::infohash_input::InfohashInput;
use crate::tracker::structs::info_hash::InfoHash;

/// Normalizes raw input into the ordered list of valid infohashes.
///
/// Candidates are trimmed and split on commas; empty ones are skipped and
/// anything that is not exactly 40 hex characters is dropped silently.
/// Order is kept and duplicates are not removed.
pub fn parse_infohashes(input: &InfohashInput) -> Vec<String> {
    let raw: &[String] = match input {
        InfohashInput::None => &[],
        InfohashInput::Single(value) => std::slice::from_ref(value),
        InfohashInput::Many(values) => values.as_slice(),
    };

    raw.iter()
        .flat_map(|value| value.split(','))
        .map(str::trim)
        .filter(|candidate| !candidate.is_empty())
        .filter(|candidate| {
            let valid = is_valid_infohash(candidate);
            if !valid {
                debug!("[SCRAPER] Dropping invalid infohash '{candidate}'");
            }
            valid
        })
        .map(String::from)
        .collect()
}

#[inline]
pub fn is_valid_infohash(candidate: &str) -> bool {
    candidate.parse::<InfoHash>().is_ok()
}

pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_CONCURRENCY: usize = 8;
