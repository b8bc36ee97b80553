//! Shared test doubles for service and handler tests.

use std::sync::Mutex;

use chrono::{DateTime, Local, TimeDelta, TimeZone, Utc};
use mockable::Clock;

use crate::domain::JobDraft;

/// Clock frozen at a chosen instant until advanced explicitly.
pub struct MutableClock(Mutex<DateTime<Utc>>);

impl MutableClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self(Mutex::new(now))
    }

    pub fn advance(&self, delta: TimeDelta) {
        *self.lock_clock() += delta;
    }

    fn lock_clock(&self) -> std::sync::MutexGuard<'_, DateTime<Utc>> {
        match self.0.lock() {
            Ok(guard) => guard,
            Err(_) => panic!("clock mutex"),
        }
    }
}

impl Clock for MutableClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        *self.lock_clock()
    }
}

/// Fixed instant used as "now" across tests.
pub fn fixture_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 3, 8, 0, 0)
        .single()
        .expect("fixture timestamp is valid")
}

/// Valid draft with the given title and salary.
pub fn draft(title: &str, salary: f64) -> JobDraft {
    JobDraft::try_new(
        title,
        format!("{title} description"),
        "Remote",
        salary,
        vec!["Write code".to_owned(), "Review PRs".to_owned()],
        "",
    )
    .expect("fixture draft is valid")
}
