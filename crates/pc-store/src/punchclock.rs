//! Clock operations against stored timers.
//!
//! [`Punchclock`] loads a timer, applies one state machine transition and
//! writes the whole history back. Reporting queries only read.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use pc_core::{ClockError, DayBuckets, Status, Timeline, TimerName};

use crate::backend::Backend;
use crate::error::{PunchclockError, StoreError};
use crate::store::IntervalStore;

/// Asks the user a yes/no question.
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> bool;
}

impl<F: FnMut(&str) -> bool> Confirm for F {
    fn confirm(&mut self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// Result of a clock-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockedIn {
    /// A new timer was created, already clocked in.
    Created,
    /// An existing timer was clocked in.
    Resumed,
    /// The timer did not exist and the user chose not to create it.
    Declined,
}

/// Whether a timer exists, with its history when it does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    Found(Timeline),
    NotFound,
}

/// Clock service over an [`IntervalStore`].
#[derive(Debug, Clone)]
pub struct Punchclock<B> {
    store: IntervalStore<B>,
}

impl<B: Backend> Punchclock<B> {
    pub const fn new(store: IntervalStore<B>) -> Self {
        Self { store }
    }

    /// Loads a timer, reporting absence as a value rather than an error.
    pub fn lookup(&self, name: &TimerName) -> Result<Lookup, StoreError> {
        match self.store.load(name) {
            Ok(timeline) => Ok(Lookup::Found(timeline)),
            Err(StoreError::NotFound { .. }) => Ok(Lookup::NotFound),
            Err(err) => Err(err),
        }
    }

    /// Clocks into `name`, offering to create it when it doesn't exist.
    pub fn clock_in<C: Confirm + ?Sized>(
        &mut self,
        name: &TimerName,
        now: NaiveDateTime,
        confirm: &mut C,
    ) -> Result<ClockedIn, PunchclockError> {
        let mut timeline = match self.lookup(name)? {
            Lookup::Found(timeline) => timeline,
            Lookup::NotFound => {
                let prompt = format!(
                    "{name} does not exist.\nDo you want to create a new clock with that name? (y/n)"
                );
                if !confirm.confirm(&prompt) {
                    tracing::debug!(%name, "timer creation declined");
                    return Ok(ClockedIn::Declined);
                }
                self.store.create(name, &Timeline::started(now))?;
                tracing::debug!(%name, %now, "created timer");
                return Ok(ClockedIn::Created);
            }
        };

        timeline.clock_in(now)?;
        self.store.save(name, &timeline)?;
        Ok(ClockedIn::Resumed)
    }

    /// Clocks out of `name` and returns the finished interval's length.
    ///
    /// A clock-out earlier than its clock-in is saved before
    /// `ClockError::InvalidInterval` is returned.
    pub fn clock_out(
        &mut self,
        name: &TimerName,
        now: NaiveDateTime,
    ) -> Result<Duration, PunchclockError> {
        let mut timeline = self.store.load(name)?;
        match timeline.clock_out(now) {
            Ok(elapsed) => {
                self.store.save(name, &timeline)?;
                Ok(elapsed)
            }
            Err(err @ ClockError::InvalidInterval { .. }) => {
                self.store.save(name, &timeline)?;
                Err(err.into())
            }
            Err(err) => Err(err.into()),
        }
    }

    /// The timer's most recent entry.
    pub fn status(&self, name: &TimerName, now: NaiveDateTime) -> Result<Status, StoreError> {
        Ok(self.store.load(name)?.status(now))
    }

    /// All timer names, sorted.
    pub fn names(&self) -> Result<Vec<TimerName>, StoreError> {
        self.store.list_names()
    }

    /// Names of timers that are currently clocked in, sorted.
    pub fn running(&self) -> Result<Vec<TimerName>, StoreError> {
        let mut running = Vec::new();
        for name in self.store.list_names()? {
            if self.store.load(&name)?.is_open() {
                running.push(name);
            }
        }
        Ok(running)
    }

    /// Per-date spans for `name`, with a running entry measured up to `now`.
    pub fn buckets(&self, name: &TimerName, now: NaiveDateTime) -> Result<DayBuckets, StoreError> {
        Ok(self.store.load(name)?.buckets(now))
    }

    /// Total time on `name` on or after `since`.
    pub fn total_since(
        &self,
        name: &TimerName,
        since: NaiveDate,
        now: NaiveDateTime,
    ) -> Result<Duration, StoreError> {
        Ok(self.store.load(name)?.total_since(since, now))
    }

    /// Deletes `name` and all of its history.
    pub fn delete(&mut self, name: &TimerName) -> Result<(), StoreError> {
        self.store.delete(name)
    }
}
