use std::fmt;
use std::fmt::Formatter;
use crate::scraper::enums::scrape_error::ScrapeError;
use crate::tracker::structs::tracker_address::TrackerAddress;

impl TrackerAddress {
    /// Parses `udp://host:port[/path]`.
    ///
    /// IPv6 literals must be bracketed (`udp://[::1]:6969`). The path, if any,
    /// is ignored.
    pub fn parse(uri: &str) -> Result<TrackerAddress, ScrapeError> {
        let trimmed = uri.trim();
        let (scheme, rest) = trimmed
            .split_once("://")
            .ok_or_else(|| ScrapeError::InvalidTrackerUri(uri.to_string()))?;

        if !scheme.eq_ignore_ascii_case("udp") {
            return Err(ScrapeError::UnsupportedProtocol(scheme.to_string()));
        }

        let authority = rest.split('/').next().unwrap_or_default();

        let (host, port) = if let Some(bracketed) = authority.strip_prefix('[') {
            let (host, after) = bracketed
                .split_once(']')
                .ok_or_else(|| ScrapeError::InvalidTrackerUri(uri.to_string()))?;
            let port = after
                .strip_prefix(':')
                .ok_or_else(|| ScrapeError::InvalidTrackerUri(uri.to_string()))?;
            (host, port)
        } else {
            authority
                .rsplit_once(':')
                .ok_or_else(|| ScrapeError::InvalidTrackerUri(uri.to_string()))?
        };

        if host.is_empty() || host.contains(char::is_whitespace) {
            return Err(ScrapeError::InvalidTrackerUri(uri.to_string()));
        }

        let port = match port.parse::<u16>() {
            Ok(port) if port != 0 => port,
            _ => return Err(ScrapeError::InvalidTrackerUri(uri.to_string())),
        };

        Ok(TrackerAddress {
            uri: trimmed.to_string(),
            host: host.to_string(),
            port,
        })
    }
}

impl std::str::FromStr for TrackerAddress {
    type Err = ScrapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TrackerAddress::parse(s)
    }
}

impl fmt::Display for TrackerAddress {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(&self.uri)
    }
}
