//! Streaming `rpms.json` parser
//!
//! Koji manifests are tens of megabytes. The parser walks the document with
//! a chain of serde seeds instead of building a `serde_json::Value`: objects
//! off the target path are skipped with [`IgnoredAny`], and the entries of
//! `payload.rpms.Everything.<arch>` are visited one key at a time. Only the
//! resulting [`Snapshot`] grows with the input.

use crate::core::diff::Package;
use crate::core::nevra::{Nevra, NevraError};
use crate::core::snapshot::Snapshot;
use crate::traits::ManifestObserver;
use serde::de::{self, DeserializeSeed, Deserializer, IgnoredAny, MapAccess, Visitor};
use serde_json::error::Category;
use std::fmt;
use std::io::{self, BufRead, BufReader, Read};
use thiserror::Error;

pub const DEFAULT_ARCH: &str = "x86_64";

/// Manifest parse failure.
///
/// Callers can tell an absent architecture from a broken document, and
/// neither from an upstream read failure.
#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("manifest stream is empty")]
    Empty,

    #[error("failed to read manifest stream: {0}")]
    Read(#[source] io::Error),

    #[error("malformed manifest JSON: {0}")]
    Malformed(#[source] serde_json::Error),

    #[error("unexpected manifest structure: {0}")]
    UnexpectedShape(#[source] serde_json::Error),

    #[error("path '{path}' not found in manifest")]
    PathNotFound { path: String },

    #[error(transparent)]
    MalformedNevra(#[from] NevraError),
}

impl ManifestError {
    /// Line and column of a JSON decode failure, if this is one
    pub fn position(&self) -> Option<(usize, usize)> {
        match self {
            Self::Malformed(e) | Self::UnexpectedShape(e) => Some((e.line(), e.column())),
            _ => None,
        }
    }

    fn from_json(err: serde_json::Error) -> Self {
        match err.classify() {
            Category::Io => Self::Read(err.into()),
            Category::Syntax | Category::Eof => Self::Malformed(err),
            Category::Data => Self::UnexpectedShape(err),
        }
    }
}

/// Object path from the document root to the per-architecture package map
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestPath {
    segments: Vec<String>,
}

impl ManifestPath {
    /// `payload.rpms.Everything.<arch>`
    pub fn everything(arch: &str) -> Self {
        Self {
            segments: ["payload", "rpms", "Everything", arch]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

impl fmt::Display for ManifestPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join("."))
    }
}

/// Parse a manifest stream into the snapshot of packages built for `arch`.
///
/// The stream is read sequentially to its end. Any failure discards the
/// packages collected so far.
pub fn parse_manifest<R: Read>(
    reader: R,
    arch: &str,
    observer: &dyn ManifestObserver,
) -> Result<Snapshot, ManifestError> {
    let mut reader = BufReader::new(reader);
    if reader.fill_buf().map_err(ManifestError::Read)?.is_empty() {
        return Err(ManifestError::Empty);
    }

    let path = ManifestPath::everything(arch);
    let mut extraction = Extraction {
        snapshot: Snapshot::new(),
        failure: None,
        observer,
    };

    let mut de = serde_json::Deserializer::from_reader(reader);
    let seed = PathSeed {
        remaining: path.segments(),
        extraction: &mut extraction,
    };

    let found = match seed.deserialize(&mut de) {
        Ok(found) => found,
        Err(e) => {
            return Err(extraction
                .failure
                .take()
                .unwrap_or_else(|| ManifestError::from_json(e)));
        }
    };
    de.end().map_err(ManifestError::from_json)?;

    if !found {
        return Err(ManifestError::PathNotFound {
            path: path.to_string(),
        });
    }

    observer.manifest_parsed(arch, extraction.snapshot.len());
    Ok(extraction.snapshot)
}

/// Parse state shared by every level of the seed chain
struct Extraction<'o> {
    snapshot: Snapshot,
    // NEVRA failures travel through serde as a custom error; the typed
    // error is kept here so it can be returned as-is
    failure: Option<ManifestError>,
    observer: &'o dyn ManifestObserver,
}

impl Extraction<'_> {
    fn record(&mut self, key: &str) -> Result<(), NevraError> {
        let nevra = Nevra::parse(key)?;
        let package = Package::new(nevra.name, nevra.version);
        self.observer.package_parsed(key, &package);
        self.snapshot.insert(package.name, package.version);
        Ok(())
    }
}

/// Descends into the object named by the first remaining segment.
///
/// Yields `true` when the full path was reached somewhere below.
struct PathSeed<'p, 'e, 'o> {
    remaining: &'p [String],
    extraction: &'e mut Extraction<'o>,
}

impl<'de> DeserializeSeed<'de> for PathSeed<'_, '_, '_> {
    type Value = bool;

    fn deserialize<D>(self, deserializer: D) -> Result<bool, D::Error>
    where
        D: Deserializer<'de>,
    {
        if self.remaining.is_empty() {
            deserializer.deserialize_map(EntryVisitor {
                extraction: self.extraction,
            })?;
            Ok(true)
        } else {
            deserializer.deserialize_map(self)
        }
    }
}

impl<'de> Visitor<'de> for PathSeed<'_, '_, '_> {
    type Value = bool;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "a JSON object containing '{}'", self.remaining[0])
    }

    fn visit_map<A>(self, mut map: A) -> Result<bool, A::Error>
    where
        A: MapAccess<'de>,
    {
        let (wanted, rest) = match self.remaining.split_first() {
            Some(split) => split,
            None => return Err(de::Error::custom("manifest path exhausted")),
        };

        let mut found = false;
        while let Some(key) = map.next_key::<String>()? {
            if key == *wanted {
                found |= map.next_value_seed(PathSeed {
                    remaining: rest,
                    extraction: &mut *self.extraction,
                })?;
            } else {
                map.next_value::<IgnoredAny>()?;
            }
        }

        Ok(found)
    }
}

/// Visits the architecture object: NEVRA keys, ignored values
struct EntryVisitor<'e, 'o> {
    extraction: &'e mut Extraction<'o>,
}

impl<'de> Visitor<'de> for EntryVisitor<'_, '_> {
    type Value = ();

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a JSON object keyed by NEVRA strings")
    }

    fn visit_map<A>(self, mut map: A) -> Result<(), A::Error>
    where
        A: MapAccess<'de>,
    {
        while let Some(key) = map.next_key::<String>()? {
            map.next_value::<IgnoredAny>()?;

            if let Err(e) = self.extraction.record(&key) {
                let message = e.to_string();
                self.extraction.failure = Some(e.into());
                return Err(de::Error::custom(message));
            }
        }

        Ok(())
    }
}
