//! Calendar view
//!
//! Month grid navigation plus the day-detail panel:
//! `Idle` -> `Loading` (date clicked) -> `Loaded` (details applied).

use std::sync::Arc;

use chrono::{Datelike, Months, NaiveDate};
use tracing::{debug, info};

use crate::domain::{month_grid, CalendarDay, LunarDetails};
use crate::oracle::Oracle;

/// Local notification sink for the "today" reminder
pub trait DayNotifier: Send + Sync {
    /// Whether the host granted notification permission
    fn permission_granted(&self) -> bool;

    /// Raise a notification
    fn notify(&self, title: &str, body: &str);
}

/// Notifier that emits notifications as log events
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl DayNotifier for LogNotifier {
    fn permission_granted(&self) -> bool {
        true
    }

    fn notify(&self, title: &str, body: &str) {
        info!(title = %title, body = %body, "Day notification");
    }
}

/// State of the day-detail panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalendarState {
    /// No date selected
    Idle,
    /// Details for `date` are being fetched
    Loading {
        /// Selected date
        date: NaiveDate,
        /// Ticket of the request whose result will be applied
        ticket: u64,
    },
    /// Details for `date` are shown (possibly the fallback)
    Loaded {
        /// Selected date
        date: NaiveDate,
        /// Result of the lookup
        details: LunarDetails,
    },
}

/// Handle for one in-flight lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "pass the ticket back to `CalendarView::complete`"]
pub struct LunarTicket {
    id: u64,
    date: NaiveDate,
}

impl LunarTicket {
    /// Date the lookup is for
    pub fn date(&self) -> NaiveDate {
        self.date
    }
}

/// Calendar view controller
pub struct CalendarView {
    state: CalendarState,
    next_ticket: u64,
    visible_month: NaiveDate,
    today: NaiveDate,
    notifier: Option<Arc<dyn DayNotifier>>,
}

impl std::fmt::Debug for CalendarView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CalendarView")
            .field("state", &self.state)
            .field("visible_month", &self.visible_month)
            .field("today", &self.today)
            .field("notifier", &self.notifier.is_some())
            .finish()
    }
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

impl CalendarView {
    /// View showing the month of `today`
    pub fn new(today: NaiveDate) -> Self {
        Self {
            state: CalendarState::Idle,
            next_ticket: 0,
            visible_month: first_of_month(today),
            today,
            notifier: None,
        }
    }

    /// Attach a notifier for the "today" reminder
    pub fn with_notifier(mut self, notifier: Arc<dyn DayNotifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    /// Current panel state
    pub fn state(&self) -> &CalendarState {
        &self.state
    }

    /// Selected date, if the panel is open
    pub fn selected_date(&self) -> Option<NaiveDate> {
        match &self.state {
            CalendarState::Idle => None,
            CalendarState::Loading { date, .. } | CalendarState::Loaded { date, .. } => Some(*date),
        }
    }

    /// Details shown in the panel, if loaded
    pub fn details(&self) -> Option<&LunarDetails> {
        match &self.state {
            CalendarState::Loaded { details, .. } => Some(details),
            _ => None,
        }
    }

    /// Whether a lookup is in flight
    pub fn is_loading(&self) -> bool {
        matches!(self.state, CalendarState::Loading { .. })
    }

    /// Select a date: clears the previous result and starts a lookup
    ///
    /// Any earlier ticket becomes stale.
    pub fn select_date(&mut self, date: NaiveDate) -> LunarTicket {
        self.next_ticket += 1;
        let ticket = LunarTicket {
            id: self.next_ticket,
            date,
        };
        self.state = CalendarState::Loading {
            date,
            ticket: ticket.id,
        };
        ticket
    }

    /// Apply a lookup result
    ///
    /// Returns `false` and leaves the state untouched when the ticket was
    /// overtaken by a newer selection or the panel was closed.
    pub fn complete(&mut self, ticket: LunarTicket, details: LunarDetails) -> bool {
        let current = matches!(
            self.state,
            CalendarState::Loading { ticket: id, .. } if id == ticket.id
        );
        if !current {
            debug!(date = %ticket.date, "Discarding stale lunar details");
            return false;
        }

        if ticket.date == self.today {
            self.notify_today(&details);
        }
        self.state = CalendarState::Loaded {
            date: ticket.date,
            details,
        };
        true
    }

    /// Select `date`, fetch its details and apply them
    pub async fn open_date(&mut self, date: NaiveDate, oracle: &Oracle) -> bool {
        let ticket = self.select_date(date);
        let details = oracle.fetch_lunar_details(date).await;
        self.complete(ticket, details)
    }

    /// Close the panel; an in-flight lookup will be discarded
    pub fn close(&mut self) {
        self.state = CalendarState::Idle;
    }

    /// Year and month currently displayed
    pub fn visible_month(&self) -> (i32, u32) {
        (self.visible_month.year(), self.visible_month.month())
    }

    /// Show the previous month
    pub fn previous_month(&mut self) {
        if let Some(month) = self.visible_month.checked_sub_months(Months::new(1)) {
            self.visible_month = month;
        }
    }

    /// Show the next month
    pub fn next_month(&mut self) {
        if let Some(month) = self.visible_month.checked_add_months(Months::new(1)) {
            self.visible_month = month;
        }
    }

    /// The 42-cell grid of the displayed month
    pub fn grid(&self) -> Vec<CalendarDay> {
        let (year, month) = self.visible_month();
        month_grid(year, month, self.today).unwrap_or_default()
    }

    fn notify_today(&self, details: &LunarDetails) {
        if let Some(notifier) = self.notifier.as_ref().filter(|n| n.permission_granted()) {
            notifier.notify(
                &format!("Today is {} (lunar)", details.lunar_date),
                &format!("Advice: {}", details.advice),
            );
        }
    }
}
