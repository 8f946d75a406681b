//! Rawhide compose identifiers and their ordering
//!
//! Compose ids look like `20250626.n.0`: the compose date, a one-letter
//! compose type and a respin counter. `latest` names whatever compose the
//! `latest-Fedora-Rawhide` link points at and orders after every dated one.

use crate::project_identity::{COMPOSE_DIR_PREFIX, LATEST_COMPOSE_DIR};
use chrono::NaiveDate;
use serde::{Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const LATEST: &str = "latest";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid compose version '{input}': {reason} (expected YYYYMMDD.<type>.<respin> or 'latest')")]
pub struct ComposeVersionError {
    pub input: String,
    pub reason: String,
}

/// A dated compose keeps its id exactly as written; `20250709.n.01` and
/// `20250709.n.1` name different directories.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ComposeVersion {
    Dated {
        id: String,
        date: NaiveDate,
        kind: char,
        respin: u32,
    },
    Latest,
}

impl ComposeVersion {
    /// Directory holding this compose under the compose root
    pub fn directory_name(&self) -> String {
        match self {
            Self::Latest => LATEST_COMPOSE_DIR.to_string(),
            Self::Dated { .. } => format!("{}{}", COMPOSE_DIR_PREFIX, self),
        }
    }

    pub fn is_latest(&self) -> bool {
        matches!(self, Self::Latest)
    }
}

impl FromStr for ComposeVersion {
    type Err = ComposeVersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| ComposeVersionError {
            input: s.to_string(),
            reason: reason.to_string(),
        };

        let s = s.trim();
        if s == LATEST {
            return Ok(Self::Latest);
        }

        let mut parts = s.split('.');
        let (Some(date), Some(kind), Some(respin), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(invalid("expected three dot-separated fields"));
        };

        if date.len() != 8 || !date.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid("date must be eight digits"));
        }
        let date = NaiveDate::parse_from_str(date, "%Y%m%d")
            .map_err(|e| invalid(&format!("bad compose date: {}", e)))?;

        let mut kind_chars = kind.chars();
        let kind = match (kind_chars.next(), kind_chars.next()) {
            (Some(c), None) if c.is_ascii_alphanumeric() => c,
            _ => return Err(invalid("compose type must be a single letter")),
        };

        if respin.is_empty() || !respin.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid("respin must be a number"));
        }
        let respin = respin
            .parse::<u32>()
            .map_err(|_| invalid("respin must be a number"))?;

        Ok(Self::Dated {
            id: s.to_string(),
            date,
            kind,
            respin,
        })
    }
}

impl fmt::Display for ComposeVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Latest => f.write_str(LATEST),
            Self::Dated { id, .. } => f.write_str(id),
        }
    }
}

impl Serialize for ComposeVersion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl Ord for ComposeVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Latest, Self::Latest) => Ordering::Equal,
            (Self::Latest, Self::Dated { .. }) => Ordering::Greater,
            (Self::Dated { .. }, Self::Latest) => Ordering::Less,
            (
                Self::Dated {
                    id: i1,
                    date: d1,
                    kind: k1,
                    respin: r1,
                },
                Self::Dated {
                    id: i2,
                    date: d2,
                    kind: k2,
                    respin: r2,
                },
            ) => d1
                .cmp(d2)
                .then(r1.cmp(r2))
                .then(k1.cmp(k2))
                // same compose spelled differently, e.g. `n.0` and `n.00`
                .then_with(|| i1.cmp(i2)),
        }
    }
}

impl PartialOrd for ComposeVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
