//! Compatibility view
//!
//! `Empty` -> `Ready` (both dates set) -> `Checking` -> `Resulted`; any date
//! change drops back to `Ready` or `Empty`.

use chrono::NaiveDate;
use tracing::debug;

use crate::domain::CompatibilityResult;
use crate::oracle::Oracle;

/// Observable state of the compatibility view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompatibilityState {
    /// At least one date is unset
    Empty,
    /// Both dates set, nothing in flight
    Ready,
    /// A check is in flight
    Checking,
    /// Result of the last check (possibly the fallback)
    Resulted(CompatibilityResult),
}

/// Handle for one in-flight check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "pass the ticket back to `CompatibilityView::complete`"]
pub struct CheckTicket {
    id: u64,
    first: NaiveDate,
    second: NaiveDate,
}

impl CheckTicket {
    /// The two dates being compared
    pub fn dates(&self) -> (NaiveDate, NaiveDate) {
        (self.first, self.second)
    }
}

/// Compatibility view controller
#[derive(Debug, Clone, Default)]
pub struct CompatibilityView {
    first: Option<NaiveDate>,
    second: Option<NaiveDate>,
    checking: Option<u64>,
    result: Option<CompatibilityResult>,
    next_ticket: u64,
}

impl CompatibilityView {
    /// Empty view
    pub fn new() -> Self {
        Self::default()
    }

    /// First person's birth date
    pub fn first(&self) -> Option<NaiveDate> {
        self.first
    }

    /// Second person's birth date
    pub fn second(&self) -> Option<NaiveDate> {
        self.second
    }

    /// Set or clear the first date
    pub fn set_first(&mut self, date: Option<NaiveDate>) {
        if self.first != date {
            self.first = date;
            self.reset();
        }
    }

    /// Set or clear the second date
    pub fn set_second(&mut self, date: Option<NaiveDate>) {
        if self.second != date {
            self.second = date;
            self.reset();
        }
    }

    /// Current state
    pub fn state(&self) -> CompatibilityState {
        if self.checking.is_some() {
            CompatibilityState::Checking
        } else if let Some(result) = &self.result {
            CompatibilityState::Resulted(result.clone())
        } else if self.first.is_some() && self.second.is_some() {
            CompatibilityState::Ready
        } else {
            CompatibilityState::Empty
        }
    }

    /// Last applied result
    pub fn result(&self) -> Option<&CompatibilityResult> {
        self.result.as_ref()
    }

    /// Whether the submit action is enabled
    pub fn can_submit(&self) -> bool {
        self.first.is_some() && self.second.is_some() && self.checking.is_none()
    }

    /// Start a check; `None` while submission is disabled
    pub fn begin_check(&mut self) -> Option<CheckTicket> {
        if !self.can_submit() {
            return None;
        }
        let (first, second) = (self.first?, self.second?);
        self.next_ticket += 1;
        self.checking = Some(self.next_ticket);
        self.result = None;
        Some(CheckTicket {
            id: self.next_ticket,
            first,
            second,
        })
    }

    /// Apply a check result; stale tickets are ignored
    pub fn complete(&mut self, ticket: CheckTicket, result: CompatibilityResult) -> bool {
        if self.checking != Some(ticket.id) {
            debug!(ticket = ticket.id, "Discarding stale compatibility result");
            return false;
        }
        self.checking = None;
        self.result = Some(result);
        true
    }

    /// Run a full check against `oracle`
    ///
    /// Returns `false` when submission was disabled.
    pub async fn check(&mut self, oracle: &Oracle) -> bool {
        let Some(ticket) = self.begin_check() else {
            return false;
        };
        let (first, second) = ticket.dates();
        let result = oracle.check_compatibility(first, second).await;
        self.complete(ticket, result)
    }

    fn reset(&mut self) {
        self.checking = None;
        self.result = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn scored(score: u8) -> CompatibilityResult {
        CompatibilityResult {
            score,
            summary: "s".to_string(),
            details: "d".to_string(),
            element_analysis: "e".to_string(),
        }
    }

    fn ready_view() -> CompatibilityView {
        let mut view = CompatibilityView::new();
        view.set_first(Some(ymd(1990, 5, 1)));
        view.set_second(Some(ymd(1992, 11, 20)));
        view
    }

    #[test]
    fn test_empty_until_both_dates_set() {
        let mut view = CompatibilityView::new();
        assert_eq!(view.state(), CompatibilityState::Empty);
        assert!(view.begin_check().is_none());

        view.set_first(Some(ymd(1990, 5, 1)));
        assert_eq!(view.state(), CompatibilityState::Empty);
        assert!(!view.can_submit());

        view.set_second(Some(ymd(1992, 11, 20)));
        assert_eq!(view.state(), CompatibilityState::Ready);
        assert!(view.can_submit());
    }

    #[test]
    fn test_submit_disabled_while_checking() {
        let mut view = ready_view();
        let ticket = view.begin_check().unwrap();
        assert_eq!(ticket.dates(), (ymd(1990, 5, 1), ymd(1992, 11, 20)));
        assert_eq!(view.state(), CompatibilityState::Checking);
        assert!(!view.can_submit());
        assert!(view.begin_check().is_none());

        assert!(view.complete(ticket, scored(78)));
        assert_eq!(view.state(), CompatibilityState::Resulted(scored(78)));
        assert!(view.can_submit());
    }

    #[test]
    fn test_new_check_clears_previous_result() {
        let mut view = ready_view();
        let ticket = view.begin_check().unwrap();
        view.complete(ticket, scored(50));
        let _again = view.begin_check().unwrap();
        assert!(view.result().is_none());
        assert_eq!(view.state(), CompatibilityState::Checking);
    }

    #[test]
    fn test_date_change_drops_result() {
        let mut view = ready_view();
        let ticket = view.begin_check().unwrap();
        view.complete(ticket, scored(60));

        view.set_second(Some(ymd(1993, 1, 1)));
        assert_eq!(view.state(), CompatibilityState::Ready);

        view.set_first(None);
        assert_eq!(view.state(), CompatibilityState::Empty);
    }

    #[test]
    fn test_setting_same_date_keeps_result() {
        let mut view = ready_view();
        let ticket = view.begin_check().unwrap();
        view.complete(ticket, scored(60));
        view.set_first(Some(ymd(1990, 5, 1)));
        assert_eq!(view.state(), CompatibilityState::Resulted(scored(60)));
    }

    #[test]
    fn test_result_for_changed_dates_is_discarded() {
        let mut view = ready_view();
        let ticket = view.begin_check().unwrap();
        view.set_second(Some(ymd(1993, 1, 1)));
        assert!(!view.complete(ticket, scored(90)));
        assert_eq!(view.state(), CompatibilityState::Ready);
    }
}
