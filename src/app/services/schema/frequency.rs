//! Sampling frequency aliases
//!
//! Families record their native sampling frequency as a pandas-style offset
//! alias (`"10T"`, `"1H"`, `"MS"`, `"W-SUN"`). Requirement checks work on
//! [`FrequencyClass`], so the alias is classified once at schema construction.

use crate::app::models::FrequencyClass;
use crate::constants::frequency_aliases;
use crate::{Error, Result};
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// Optional multiplier, alias code, optional anchor suffix
static ALIAS_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<multiplier>\d+)?(?P<code>[A-Za-z]+)(?:-[A-Za-z]+)?$")
        .expect("frequency alias pattern is valid")
});

/// A configured sampling frequency and its cadence class
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frequency {
    alias: String,
    multiplier: u32,
    code: String,
    class: FrequencyClass,
}

impl Frequency {
    /// Parse and classify an offset alias
    pub fn parse(alias: &str) -> Result<Self> {
        let trimmed = alias.trim();
        let captures = ALIAS_PATTERN.captures(trimmed).ok_or_else(|| {
            Error::configuration(format!("Invalid sampling frequency '{}'", alias))
        })?;

        let multiplier = match captures.name("multiplier") {
            Some(digits) => digits.as_str().parse::<u32>().map_err(|_| {
                Error::configuration(format!("Invalid frequency multiplier in '{}'", alias))
            })?,
            None => 1,
        };
        if multiplier == 0 {
            return Err(Error::configuration(format!(
                "Sampling frequency '{}' has a zero multiplier",
                alias
            )));
        }

        // The code group is not optional, so it is always present on a match
        let code = captures
            .name("code")
            .map(|m| m.as_str())
            .unwrap_or_default();
        let class = classify_code(code).ok_or_else(|| {
            Error::configuration(format!(
                "Unsupported sampling frequency '{}': unknown offset alias '{}'",
                alias, code
            ))
        })?;

        Ok(Self {
            alias: trimmed.to_string(),
            multiplier,
            code: code.to_string(),
            class,
        })
    }

    /// The alias as configured
    pub fn alias(&self) -> &str {
        &self.alias
    }

    pub fn multiplier(&self) -> u32 {
        self.multiplier
    }

    /// The bare alias code, without multiplier or anchor
    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn class(&self) -> FrequencyClass {
        self.class
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.alias)
    }
}

impl FromStr for Frequency {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Frequency::parse(s)
    }
}

/// Cadence class of a bare alias code
pub fn classify_code(code: &str) -> Option<FrequencyClass> {
    let groups: [(&[&str], FrequencyClass); 7] = [
        (frequency_aliases::MONTHLY, FrequencyClass::Monthly),
        (frequency_aliases::WEEKLY, FrequencyClass::Weekly),
        (frequency_aliases::DAILY, FrequencyClass::Daily),
        (frequency_aliases::HOURLY, FrequencyClass::Hourly),
        (frequency_aliases::MINUTE, FrequencyClass::Minute),
        (frequency_aliases::SECOND, FrequencyClass::Second),
        (frequency_aliases::SUB_SECOND, FrequencyClass::SubSecond),
    ];

    groups
        .into_iter()
        .find(|(codes, _)| codes.contains(&code))
        .map(|(_, class)| class)
}
