// Events that flow into the kiosk event loop
//
// A scan normally originates from the keyboard (digits + Enter captured by
// the TUI), but demo mode feeds synthetic scans through an mpsc channel into
// the same handler path. Keeping the payload a typed struct means both
// sources are indistinguishable to the check-in handler.

use crate::checkin::CheckInOutcome;
use chrono::{DateTime, Utc};

/// A completed scan: the accumulated identifier, ready for check-in.
#[derive(Debug, Clone)]
pub struct ScanEvent {
    pub id: String,
    pub at: DateTime<Utc>,
}

impl ScanEvent {
    pub fn now(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            at: Utc::now(),
        }
    }
}

/// The most recent scan, kept for the status bar.
#[derive(Debug, Clone)]
pub struct LastScan {
    pub masked_id: String,
    pub outcome: CheckInOutcome,
    pub at: DateTime<Utc>,
}

/// Session counters for the status bar
///
/// Display-only: these reset with the process and are never persisted.
/// The checked-in total comes from the roster itself, not from here.
#[derive(Debug, Clone, Default)]
pub struct Stats {
    pub total_scans: usize,
    pub first_time: usize,
    pub duplicates: usize,
    pub last_scan: Option<LastScan>,
}

impl Stats {
    /// Record one handled scan.
    pub fn record(&mut self, masked_id: String, outcome: CheckInOutcome, at: DateTime<Utc>) {
        self.total_scans += 1;
        match outcome {
            CheckInOutcome::FirstTime => self.first_time += 1,
            CheckInOutcome::AlreadySeen => self.duplicates += 1,
        }
        self.last_scan = Some(LastScan {
            masked_id,
            outcome,
            at,
        });
    }

    /// Share of scans that were repeats, as a percentage (0-100).
    pub fn duplicate_rate(&self) -> f64 {
        if self.total_scans == 0 {
            0.0
        } else {
            (self.duplicates as f64 / self.total_scans as f64) * 100.0
        }
    }
}
