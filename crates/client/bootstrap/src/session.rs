//! Session records and the time/id sources used to stamp them.

use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};

use chrono::{DateTime, Utc};
use game_core::SessionConfig;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Display/debug label for a session (e.g., "session_4821").
///
/// Ids are drawn from a small random range, so two sessions may share one.
/// Never use an id as a uniqueness key.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    pub const PREFIX: &'static str = "session_";
    /// Exclusive upper bound of the numeric part.
    pub const NUMBER_BOUND: u32 = 10_000;

    pub fn from_number(number: u32) -> Self {
        Self(format!("{}{}", Self::PREFIX, number))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric suffix, if the id was produced by [`SessionId::from_number`].
    pub fn number(&self) -> Option<u32> {
        self.0.strip_prefix(Self::PREFIX)?.parse().ok()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Immutable snapshot produced by a successful session creation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    id: SessionId,
    config: SessionConfig,
    created_at: DateTime<Utc>,
}

impl SessionRecord {
    pub(crate) fn new(id: SessionId, config: SessionConfig, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            config,
            created_at,
        }
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    /// Configuration as it was when the session was created.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Stamps a new record with a fresh id and the current time.
pub(crate) fn stamp_record(
    config: &SessionConfig,
    clock: &dyn Clock,
    ids: &dyn IdSource,
) -> SessionRecord {
    let id = SessionId::from_number(ids.next_id() % SessionId::NUMBER_BOUND);
    let record = SessionRecord::new(id, config.clone(), clock.now());
    tracing::info!(
        session = %record.id(),
        created_at = %record.created_at(),
        "session created"
    );
    record
}

/// Source of the current time.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock frozen at a fixed instant.
#[derive(Clone, Copy, Debug)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Source of session id numbers in `[0, SessionId::NUMBER_BOUND)`.
pub trait IdSource: Send + Sync {
    fn next_id(&self) -> u32;
}

/// Uniformly random ids from the thread-local RNG.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomIdSource;

impl IdSource for RandomIdSource {
    fn next_id(&self) -> u32 {
        rand::thread_rng().gen_range(0..SessionId::NUMBER_BOUND)
    }
}

/// Deterministic ids counting up from a seed, wrapping at the bound.
#[derive(Debug)]
pub struct SequenceIdSource {
    next: AtomicU32,
}

impl SequenceIdSource {
    pub fn starting_at(seed: u32) -> Self {
        Self {
            next: AtomicU32::new(seed % SessionId::NUMBER_BOUND),
        }
    }
}

impl IdSource for SequenceIdSource {
    fn next_id(&self) -> u32 {
        self.next
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |n| {
                Some((n + 1) % SessionId::NUMBER_BOUND)
            })
            .unwrap_or_else(|n| n)
    }
}
