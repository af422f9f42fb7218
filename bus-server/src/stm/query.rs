//! Arrival query value types and upstream request construction.

use std::fmt;
use std::num::NonZeroU32;

use chrono::NaiveDate;
use reqwest::header::{HeaderMap, HeaderValue, ORIGIN, REFERER, USER_AGENT};

/// Origin site the STM API expects requests to come from.
const STM_ORIGIN: &str = "http://beta.stm.info";

/// Browser user-agent sent with every request; the API rejects
/// obviously non-browser clients.
const STM_USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/62.0.3202.89 Safari/537.36";

/// Error returned when parsing an invalid direction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid direction: expected north/south/east/west, got {input:?}")]
pub struct InvalidDirection {
    input: String,
}

/// A compass direction of travel, as the STM API understands it.
///
/// Input is accepted case-insensitively; the canonical form is
/// lowercase. The API query string wants only the upper-cased first
/// letter, the referer URL wants the full lowercase word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// Parse a direction from a string, case-insensitively.
    pub fn parse(s: &str) -> Result<Self, InvalidDirection> {
        match s.to_ascii_lowercase().as_str() {
            "north" => Ok(Direction::North),
            "south" => Ok(Direction::South),
            "east" => Ok(Direction::East),
            "west" => Ok(Direction::West),
            _ => Err(InvalidDirection { input: s.to_string() }),
        }
    }

    /// The lowercase direction word.
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::South => "south",
            Direction::East => "east",
            Direction::West => "west",
        }
    }

    /// The upper-cased first letter, as the `direction` query parameter
    /// encodes it.
    pub fn letter(&self) -> char {
        match self {
            Direction::North => 'N',
            Direction::South => 'S',
            Direction::East => 'E',
            Direction::West => 'W',
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an invalid line or stop identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {what} identifier: {reason}")]
pub struct InvalidId {
    what: &'static str,
    reason: &'static str,
}

fn validate_id(what: &'static str, s: &str) -> Result<(), InvalidId> {
    if s.is_empty() {
        return Err(InvalidId {
            what,
            reason: "must not be empty",
        });
    }
    if !s.bytes().all(|b| b.is_ascii_alphanumeric()) {
        return Err(InvalidId {
            what,
            reason: "must be ASCII letters and digits only",
        });
    }
    Ok(())
}

/// A validated bus line identifier (e.g. `"34"`, `"715"`).
///
/// Guaranteed non-empty and ASCII-alphanumeric by construction, so it
/// can be embedded in a URL without escaping.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LineId(String);

impl LineId {
    /// Parse a line identifier, rejecting empty or non-alphanumeric input.
    pub fn parse(s: &str) -> Result<Self, InvalidId> {
        validate_id("line", s)?;
        Ok(LineId(s.to_string()))
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A validated bus stop identifier (e.g. `"53235"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StopId(String);

impl StopId {
    /// Parse a stop identifier, rejecting empty or non-alphanumeric input.
    pub fn parse(s: &str) -> Result<Self, InvalidId> {
        validate_id("stop", s)?;
        Ok(StopId(s.to_string()))
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One fully-parameterized arrivals query.
///
/// Immutable; all request construction from it is pure. The query date
/// is fixed at construction time so that a long-lived query renders a
/// stable URL.
#[derive(Debug, Clone)]
pub struct ArrivalQuery {
    pub line: LineId,
    pub stop: StopId,
    pub direction: Direction,
    /// Maximum number of arrival entries to ask for.
    pub limit: NonZeroU32,
    /// Date embedded in the query as YYYYMMDD.
    pub date: NaiveDate,
}

impl ArrivalQuery {
    /// Create a query for today's date.
    pub fn new(line: LineId, stop: StopId, direction: Direction, limit: NonZeroU32) -> Self {
        Self::for_date(line, stop, direction, limit, chrono::Local::now().date_naive())
    }

    /// Create a query for an explicit date.
    pub fn for_date(
        line: LineId,
        stop: StopId,
        direction: Direction,
        limit: NonZeroU32,
        date: NaiveDate,
    ) -> Self {
        Self {
            line,
            stop,
            direction,
            limit,
            date,
        }
    }

    /// Build the arrivals URL against the given API base URL.
    ///
    /// The `t=0000` time-of-day marker and `wheelchair=0` flag are fixed
    /// by the API contract.
    pub fn api_url(&self, base_url: &str) -> String {
        format!(
            "{}/lines/{}/stops/{}/arrivals?d={}&t=0000&direction={}&wheelchair=0&limit={}",
            base_url,
            self.line,
            self.stop,
            self.date.format("%Y%m%d"),
            self.direction.letter(),
            self.limit
        )
    }

    /// Build the referer URL the API expects in request headers.
    ///
    /// This points at the public line page; it is only used for headers,
    /// never fetched.
    pub fn referer_url(&self) -> String {
        format!(
            "{STM_ORIGIN}/en/info/networks/bus/shuttle/line-{}-{}/{}",
            self.line, self.direction, self.stop
        )
    }

    /// Build the header set for the arrivals request.
    pub fn request_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(ORIGIN, HeaderValue::from_static(STM_ORIGIN));
        headers.insert(USER_AGENT, HeaderValue::from_static(STM_USER_AGENT));
        // Referer is built from validated alphanumeric parts, so it is
        // always a valid header value.
        if let Ok(referer) = HeaderValue::from_str(&self.referer_url()) {
            headers.insert(REFERER, referer);
        }
        headers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query() -> ArrivalQuery {
        ArrivalQuery::for_date(
            LineId::parse("34").unwrap(),
            StopId::parse("53235").unwrap(),
            Direction::West,
            NonZeroU32::new(1).unwrap(),
            NaiveDate::from_ymd_opt(2026, 8, 30).unwrap(),
        )
    }

    #[test]
    fn parse_direction_case_insensitive() {
        assert_eq!(Direction::parse("west").unwrap(), Direction::West);
        assert_eq!(Direction::parse("West").unwrap(), Direction::West);
        assert_eq!(Direction::parse("NORTH").unwrap(), Direction::North);
        assert_eq!(Direction::parse("eAsT").unwrap(), Direction::East);
    }

    #[test]
    fn reject_bad_direction() {
        assert!(Direction::parse("").is_err());
        assert!(Direction::parse("northwest").is_err());
        assert!(Direction::parse("w").is_err());
        assert!(Direction::parse("up").is_err());
    }

    #[test]
    fn direction_letter_and_word() {
        assert_eq!(Direction::North.letter(), 'N');
        assert_eq!(Direction::South.letter(), 'S');
        assert_eq!(Direction::East.letter(), 'E');
        assert_eq!(Direction::West.letter(), 'W');
        assert_eq!(Direction::West.as_str(), "west");
        assert_eq!(format!("{}", Direction::South), "south");
    }

    #[test]
    fn parse_valid_ids() {
        assert_eq!(LineId::parse("34").unwrap().as_str(), "34");
        assert_eq!(LineId::parse("715").unwrap().as_str(), "715");
        assert_eq!(StopId::parse("53235").unwrap().as_str(), "53235");
        assert!(LineId::parse("34a").is_ok());
    }

    #[test]
    fn reject_bad_ids() {
        assert!(LineId::parse("").is_err());
        assert!(StopId::parse("").is_err());
        assert!(LineId::parse("34 ").is_err());
        assert!(StopId::parse("53/235").is_err());
        assert!(LineId::parse("ligne-34").is_err());
    }

    #[test]
    fn api_url_contains_all_parameters() {
        let url = query().api_url("https://api.stm.info/pub/i3/v1c/api/en");
        assert_eq!(
            url,
            "https://api.stm.info/pub/i3/v1c/api/en/lines/34/stops/53235/arrivals?d=20260830&t=0000&direction=W&wheelchair=0&limit=1"
        );
    }

    #[test]
    fn api_url_uses_direction_first_letter_uppercased() {
        let mut q = query();
        q.direction = Direction::North;
        assert!(q.api_url("http://x").contains("direction=N&"));
        q.direction = Direction::East;
        assert!(q.api_url("http://x").contains("direction=E&"));
    }

    #[test]
    fn api_url_embeds_todays_date() {
        let q = ArrivalQuery::new(
            LineId::parse("34").unwrap(),
            StopId::parse("53235").unwrap(),
            Direction::West,
            NonZeroU32::new(5).unwrap(),
        );
        let expected = chrono::Local::now().date_naive().format("%Y%m%d").to_string();
        assert_eq!(expected.len(), 8);
        assert!(q.api_url("http://x").contains(&format!("d={expected}&")));
    }

    #[test]
    fn referer_url_uses_lowercase_direction() {
        assert_eq!(
            query().referer_url(),
            "http://beta.stm.info/en/info/networks/bus/shuttle/line-34-west/53235"
        );
    }

    #[test]
    fn request_headers_complete() {
        let headers = query().request_headers();
        assert_eq!(headers.get(ORIGIN).unwrap(), "http://beta.stm.info");
        assert_eq!(
            headers.get(REFERER).unwrap(),
            "http://beta.stm.info/en/info/networks/bus/shuttle/line-34-west/53235"
        );
        assert!(
            headers
                .get(USER_AGENT)
                .unwrap()
                .to_str()
                .unwrap()
                .starts_with("Mozilla/5.0")
        );
    }
}
