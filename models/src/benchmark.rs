//! Timing metadata attached to computation results.

use crate::ModelError;

use std::fmt::{Display, Formatter, Result as FormatResult};
use std::time::Duration;

use serde::de::Error as DeError;
use serde::ser::SerializeTuple;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

const NANOS_PER_SEC: u32 = 1_000_000_000;
const NANOS_PER_MILLI: u32 = 1_000_000;
const NANOS_PER_MICRO: u32 = 1_000;

/// Time the engine spent on a computation, as `{secs, nanos}`.
///
/// `nanos` is always below one second.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Elapsed {
    secs: u64,
    nanos: u32,
}

#[derive(Deserialize)]
struct RawElapsed {
    secs: u64,
    nanos: u32,
}

impl Elapsed {
    pub const ZERO: Elapsed = Elapsed { secs: 0, nanos: 0 };

    #[track_caller]
    pub fn new(secs: u64, nanos: u32) -> Result<Self, ModelError> {
        if nanos >= NANOS_PER_SEC {
            return Err(ModelError::validation(format!(
                "Elapsed nanos must be below {NANOS_PER_SEC}, got {nanos}"
            )));
        }

        Ok(Self { secs, nanos })
    }

    pub fn secs(&self) -> u64 {
        self.secs
    }

    pub fn nanos(&self) -> u32 {
        self.nanos
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    pub fn as_duration(&self) -> Duration {
        Duration::new(self.secs, self.nanos)
    }
}

impl<'de> Deserialize<'de> for Elapsed {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawElapsed::deserialize(deserializer)?;
        Elapsed::new(raw.secs, raw.nanos).map_err(DeError::custom)
    }
}

impl From<Duration> for Elapsed {
    fn from(duration: Duration) -> Self {
        Self {
            secs: duration.as_secs(),
            nanos: duration.subsec_nanos(),
        }
    }
}

impl Display for Elapsed {
    /// Renders as `1s 2ms 3us 4ns`.
    fn fmt(&self, formatter: &mut Formatter<'_>) -> FormatResult {
        write!(
            formatter,
            "{}s {}ms {}us {}ns",
            self.secs,
            self.nanos / NANOS_PER_MILLI,
            (self.nanos % NANOS_PER_MILLI) / NANOS_PER_MICRO,
            self.nanos % NANOS_PER_MICRO
        )
    }
}

/// A result slot: values once a channel answered, plus how long it took.
///
/// Serializes as `[values, {"secs": .., "nanos": ..}]`, with `[]` standing in
/// for values that have not arrived.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkedResult<T> {
    pub values: Option<T>,
    pub elapsed: Elapsed,
}

impl<T> BenchmarkedResult<T> {
    pub fn new(values: T, elapsed: Elapsed) -> Self {
        Self {
            values: Some(values),
            elapsed,
        }
    }

    /// Result from a channel that does not report timing.
    pub fn untimed(values: T) -> Self {
        Self::new(values, Elapsed::ZERO)
    }

    pub fn is_ready(&self) -> bool {
        self.values.is_some()
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> BenchmarkedResult<U> {
        BenchmarkedResult {
            values: self.values.map(f),
            elapsed: self.elapsed,
        }
    }
}

impl<T> Default for BenchmarkedResult<T> {
    fn default() -> Self {
        Self {
            values: None,
            elapsed: Elapsed::ZERO,
        }
    }
}

impl<T: Serialize> Serialize for BenchmarkedResult<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut tuple = serializer.serialize_tuple(2)?;
        match &self.values {
            Some(values) => tuple.serialize_element(values)?,
            None => tuple.serialize_element(&[] as &[f64])?,
        }
        tuple.serialize_element(&self.elapsed)?;
        tuple.end()
    }
}
