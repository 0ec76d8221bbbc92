/// Trackers scraped when the caller does not name any.
pub const DEFAULT_TRACKERS: &[&str] = &[
    "udp://tracker.opentrackr.org:1337/announce",
    "udp://open.stealth.si:80/announce",
    "udp://tracker.torrent.eu.org:451/announce",
    "udp://exodus.desync.com:6969/announce",
    "udp://open.demonii.com:1337/announce",
];

/// Returns `trackers` unchanged when non-empty, otherwise [`DEFAULT_TRACKERS`].
pub fn get_trackers(trackers: &[String]) -> Vec<String> {
    if trackers.is_empty() {
        DEFAULT_TRACKERS.iter().map(|tracker| tracker.to_string()).collect()
    } else {
        trackers.to_vec()
    }
}
