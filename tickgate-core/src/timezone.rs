//! Zone identifier resolution.
//!
//! An identifier resolves, in order, through the alias table loaded from the
//! configured zone-database file, the embedded IANA database, and finally a
//! direct POSIX specification parse. Resolution produces an immutable
//! [`TimeZoneSpec`] handle; all DST transition knowledge stays inside the
//! IANA database — a POSIX fallback yields a fixed standard offset.

use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;

use chrono::offset::LocalResult;
use chrono::{DateTime, Duration, FixedOffset, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;

use crate::types::CalendarDate;
use crate::TickGateError;

/// A resolved, immutable timezone handle.
///
/// `Copy`, so startup zones can be read concurrently by any number of
/// queries without synchronization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeZoneSpec {
    /// An IANA region zone with its full transition table.
    Region(Tz),
    /// A fixed offset parsed from a POSIX specification string.
    Posix(FixedOffset),
}

impl TimeZoneSpec {
    /// Resolve a naive civil datetime in this zone to the absolute UTC
    /// instant, consulting the zone's live transition table.
    ///
    /// The fall-back overlap takes the earlier mapping; a spring-forward gap
    /// re-resolves one hour later and subtracts the hour, landing on the
    /// post-transition offset.
    #[must_use]
    pub fn civil_to_utc(&self, naive: NaiveDateTime) -> Option<DateTime<Utc>> {
        match self {
            Self::Region(tz) => resolve_local(tz, naive),
            Self::Posix(off) => resolve_local(off, naive),
        }
    }

    /// The civil calendar date of a UTC instant under this zone's rules.
    #[must_use]
    pub fn date_at(&self, utc: DateTime<Utc>) -> CalendarDate {
        match self {
            Self::Region(tz) => utc.with_timezone(tz).date_naive(),
            Self::Posix(off) => utc.with_timezone(off).date_naive(),
        }
    }
}

fn resolve_local<T: TimeZone>(tz: &T, naive: NaiveDateTime) -> Option<DateTime<Utc>> {
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => Some(dt.with_timezone(&Utc)),
        LocalResult::Ambiguous(earliest, _) => Some(earliest.with_timezone(&Utc)),
        LocalResult::None => {
            let shifted = naive + Duration::hours(1);
            match tz.from_local_datetime(&shifted) {
                LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => {
                    Some(dt.with_timezone(&Utc) - Duration::hours(1))
                }
                LocalResult::None => None,
            }
        }
    }
}

/// Resolves zone identifiers into [`TimeZoneSpec`] handles.
///
/// Immutable after construction; shared freely across queries.
#[derive(Debug, Default, Clone)]
pub struct TimeZoneResolver {
    aliases: HashMap<String, String>,
}

impl TimeZoneResolver {
    /// A resolver backed only by the embedded IANA database and the POSIX
    /// fallback.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the zone-database alias file: one `name = target` entry per
    /// line, `#` comments, where `target` is itself a region name or a POSIX
    /// string. Entries layer over the embedded IANA set and win on conflict.
    ///
    /// # Errors
    /// Returns `TickGateError::Config` if the file is missing, unreadable,
    /// or malformed (including entries whose target resolves to nothing).
    pub fn from_spec_file(path: &Path) -> Result<Self, TickGateError> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            TickGateError::config(format!("cannot read tz database {}: {e}", path.display()))
        })?;
        let mut aliases = HashMap::new();
        for (lineno, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((name, target)) = line.split_once('=') else {
                return Err(TickGateError::config(format!(
                    "malformed tz database entry at {}:{}",
                    path.display(),
                    lineno + 1
                )));
            };
            let (name, target) = (name.trim(), target.trim());
            if name.is_empty() || lookup_direct(target).is_none() {
                return Err(TickGateError::config(format!(
                    "unresolvable tz database entry \"{line}\" at {}:{}",
                    path.display(),
                    lineno + 1
                )));
            }
            aliases.insert(name.to_string(), target.to_string());
        }
        Ok(Self { aliases })
    }

    /// Resolve an identifier into a zone handle.
    ///
    /// # Errors
    /// Returns `TickGateError::UnresolvedZone` when the identifier matches
    /// no alias, no IANA region, and no POSIX specification. For the two
    /// startup zones the caller treats this as fatal configuration; for a
    /// per-query override it falls back to the calendar zone instead.
    pub fn resolve(&self, identifier: &str) -> Result<TimeZoneSpec, TickGateError> {
        if let Some(target) = self.aliases.get(identifier)
            && let Some(spec) = lookup_direct(target)
        {
            return Ok(spec);
        }
        lookup_direct(identifier).ok_or_else(|| TickGateError::unresolved_zone(identifier))
    }
}

fn lookup_direct(identifier: &str) -> Option<TimeZoneSpec> {
    if let Ok(tz) = Tz::from_str(identifier) {
        return Some(TimeZoneSpec::Region(tz));
    }
    parse_posix(identifier).map(TimeZoneSpec::Posix)
}

/// Parse a POSIX timezone specification (`STD[+|-]hh[:mm[:ss]][DST…]`).
///
/// POSIX offsets count west of Greenwich, so `EST5` is UTC-5 and `JST-9` is
/// UTC+9. A DST suffix (with or without its own offset and rule dates) is
/// accepted but does not alter the result: transition tables come only from
/// the zone database, never from rule computation here.
fn parse_posix(spec: &str) -> Option<FixedOffset> {
    let rest = skip_name(spec)?;
    let (west_seconds, rest) = parse_offset(rest)?;
    if !rest.is_empty() {
        let after = skip_name(rest)?;
        let after = if after.starts_with(['+', '-']) || after.starts_with(|c: char| c.is_ascii_digit()) {
            parse_offset(after)?.1
        } else {
            after
        };
        if !(after.is_empty() || after.starts_with(',')) {
            return None;
        }
    }
    FixedOffset::west_opt(west_seconds)
}

/// Consume the zone abbreviation: a `<quoted>` alphanumeric name or at least
/// three alphabetic characters.
fn skip_name(s: &str) -> Option<&str> {
    if let Some(inner) = s.strip_prefix('<') {
        let end = inner.find('>')?;
        if end == 0 {
            return None;
        }
        return Some(&inner[end + 1..]);
    }
    let len = s.chars().take_while(|c| c.is_ascii_alphabetic()).count();
    if len < 3 {
        return None;
    }
    Some(&s[len..])
}

/// Consume `[+|-]hh[:mm[:ss]]`, returning signed seconds west of Greenwich.
fn parse_offset(s: &str) -> Option<(i32, &str)> {
    let (sign, s) = match s.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, s.strip_prefix('+').unwrap_or(s)),
    };
    let (hours, s) = parse_component(s, 24)?;
    let (minutes, s) = match s.strip_prefix(':') {
        Some(rest) => parse_component(rest, 59)?,
        None => (0, s),
    };
    let (seconds, s) = match s.strip_prefix(':') {
        Some(rest) => parse_component(rest, 59)?,
        None => (0, s),
    };
    Some((sign * (hours * 3600 + minutes * 60 + seconds), s))
}

fn parse_component(s: &str, max: i32) -> Option<(i32, &str)> {
    let len = s.chars().take_while(char::is_ascii_digit).count();
    if len == 0 || len > 2 {
        return None;
    }
    let value: i32 = s[..len].parse().ok()?;
    if value > max {
        return None;
    }
    Some((value, &s[len..]))
}
