// Check-in handler
//
// The single decision the kiosk makes per scan: has this identifier been
// seen before? First-timers are recorded; repeats are left untouched so a
// record is never mutated after creation. The caller maps the outcome onto
// the reaction card and schedules the revert to the idle prompt.

use crate::roster::Roster;
use anyhow::Result;

/// What happened to a scanned identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckInOutcome {
    /// Not in the record set before this scan; now recorded.
    FirstTime,
    /// Already checked in; nothing was written.
    AlreadySeen,
}

/// Look the identifier up in the roster and record it if it is new.
///
/// Empty identifiers never reach this function: input capture only
/// dispatches a scan on Enter with a non-empty buffer.
pub fn check_in(roster: &mut Roster, id: &str) -> Result<CheckInOutcome> {
    if roster.contains(id) {
        tracing::info!("Repeat scan: {}", crate::util::mask_id(id));
        Ok(CheckInOutcome::AlreadySeen)
    } else {
        roster.insert(id)?;
        tracing::info!("Checked in: {}", crate::util::mask_id(id));
        tracing::debug!("Full identifier: {id}");
        Ok(CheckInOutcome::FirstTime)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn roster() -> (TempDir, Roster) {
        let dir = TempDir::new().expect("create temp dir");
        let roster = Roster::load(dir.path(), "test").unwrap();
        (dir, roster)
    }

    #[test]
    fn fresh_identifier_is_recorded() {
        let (_dir, mut roster) = roster();
        let outcome = check_in(&mut roster, "4455").unwrap();
        assert_eq!(outcome, CheckInOutcome::FirstTime);
        assert!(roster.contains("4455"));
        assert_eq!(roster.len(), 1);
    }

    #[test]
    fn repeat_scan_flips_to_already_seen() {
        let (_dir, mut roster) = roster();
        check_in(&mut roster, "4455").unwrap();

        let outcome = check_in(&mut roster, "4455").unwrap();
        assert_eq!(outcome, CheckInOutcome::AlreadySeen);
        // Still recorded exactly once
        assert_eq!(roster.len(), 1);

        // And it stays that way no matter how often the card is scanned
        for _ in 0..5 {
            assert_eq!(
                check_in(&mut roster, "4455").unwrap(),
                CheckInOutcome::AlreadySeen
            );
        }
        assert_eq!(roster.len(), 1);
    }

    #[test]
    fn distinct_identifiers_are_independent() {
        let (_dir, mut roster) = roster();
        assert_eq!(
            check_in(&mut roster, "1001").unwrap(),
            CheckInOutcome::FirstTime
        );
        assert_eq!(
            check_in(&mut roster, "1002").unwrap(),
            CheckInOutcome::FirstTime
        );
        assert_eq!(roster.rows(), ["1001", "1002"]);
    }
}
