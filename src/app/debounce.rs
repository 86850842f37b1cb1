use crate::domain::models::SearchSession;
use std::time::Duration;
use tokio::time::Instant;

pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(250);

/// A search the controller has decided to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchInvocation {
    pub session: SearchSession,
    pub term: String,
}

/// Debounces term changes into search invocations and tracks which session
/// is current.
///
/// Both edges fire: the first change on a quiet controller searches
/// immediately, and once input has been quiet for the full window the
/// latest suppressed term is searched. Every change restarts the window.
///
/// The controller never sleeps itself. The owner waits until
/// [`deadline`](Self::deadline) and then calls [`fire_due`](Self::fire_due).
#[derive(Debug, Clone, PartialEq)]
pub struct DebouncedSearchController {
    wait: Duration,
    deadline: Option<Instant>,
    pending_term: Option<String>,
    next_session: u64,
    current: Option<SearchSession>,
    awaiting_results: bool,
}

impl Default for DebouncedSearchController {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}

impl DebouncedSearchController {
    #[must_use]
    pub fn new(wait: Duration) -> Self {
        Self {
            wait,
            deadline: None,
            pending_term: None,
            next_session: 0,
            current: None,
            awaiting_results: false,
        }
    }

    #[must_use]
    pub fn wait(&self) -> Duration {
        self.wait
    }

    /// Records a term change. Returns the leading-edge invocation when the
    /// controller was quiet, otherwise holds the term for the trailing edge.
    pub fn on_term_change(&mut self, term: String, now: Instant) -> Option<SearchInvocation> {
        let quiet = self.deadline.is_none();
        self.deadline = Some(now + self.wait);
        if quiet {
            self.pending_term = None;
            Some(self.invoke(term))
        } else {
            self.pending_term = Some(term);
            None
        }
    }

    /// When the window is still open after the deadline passes.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Closes the window if its deadline has passed, returning the
    /// trailing-edge invocation when a term was suppressed inside it.
    pub fn fire_due(&mut self, now: Instant) -> Option<SearchInvocation> {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                let term = self.pending_term.take()?;
                Some(self.invoke(term))
            }
            _ => None,
        }
    }

    /// Marks `session`'s results as delivered if it is still the current
    /// session. Results of superseded sessions must be dropped by the caller.
    pub fn accept(&mut self, session: SearchSession) -> bool {
        if self.current == Some(session) {
            self.awaiting_results = false;
            true
        } else {
            false
        }
    }

    /// Drops any pending trailing term and invalidates the in-flight session.
    pub fn reset(&mut self) {
        self.deadline = None;
        self.pending_term = None;
        self.current = None;
        self.awaiting_results = false;
    }

    #[must_use]
    pub fn current_session(&self) -> Option<SearchSession> {
        self.current
    }

    /// True while the newest search is in flight or a trailing search is
    /// still queued.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.awaiting_results || self.pending_term.is_some()
    }

    fn invoke(&mut self, term: String) -> SearchInvocation {
        self.next_session += 1;
        let session = SearchSession(self.next_session);
        self.current = Some(session);
        self.awaiting_results = true;
        SearchInvocation { session, term }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    /// Feeds `events` (offset, term) through the controller, polling the
    /// deadline every millisecond, and returns (fire offset, term) pairs.
    fn simulate(events: &[(u64, &str)], horizon: u64) -> Vec<(u64, String)> {
        let start = Instant::now();
        let mut controller = DebouncedSearchController::new(ms(250));
        let mut fired = Vec::new();
        let mut events = events.iter().peekable();

        for t in 0..=horizon {
            let now = start + ms(t);
            if let Some(invocation) = controller.fire_due(now) {
                fired.push((t, invocation.term));
            }
            while let Some((_, term)) = events.next_if(|(at, _)| *at == t) {
                if let Some(invocation) = controller.on_term_change((*term).to_string(), now) {
                    fired.push((t, invocation.term));
                }
            }
        }
        fired
    }

    #[test]
    fn test_burst_fires_leading_and_trailing_once() {
        let fired = simulate(&[(0, "a"), (50, "ac"), (100, "acm"), (300, "acme")], 2000);
        assert_eq!(
            fired,
            vec![(0, "a".to_string()), (550, "acme".to_string())],
            "expected leading search at 0 and trailing search 250ms after the last event"
        );
    }

    #[test]
    fn test_single_event_fires_once() {
        let fired = simulate(&[(0, "a")], 1000);
        assert_eq!(fired, vec![(0, "a".to_string())]);
    }

    #[test]
    fn test_quiet_controller_fires_leading_again() {
        let fired = simulate(&[(0, "a"), (400, "ab")], 1000);
        assert_eq!(fired, vec![(0, "a".to_string()), (400, "ab".to_string())]);
    }

    #[test]
    fn test_event_just_inside_window_is_suppressed_until_trailing() {
        let fired = simulate(&[(0, "a"), (249, "ab")], 1000);
        assert_eq!(fired, vec![(0, "a".to_string()), (499, "ab".to_string())]);
    }

    #[test]
    fn test_sessions_are_fresh_and_latest_wins() {
        let start = Instant::now();
        let mut controller = DebouncedSearchController::new(ms(250));

        let first = controller.on_term_change("ac".to_string(), start).unwrap();
        assert!(controller
            .on_term_change("acme".to_string(), start + ms(10))
            .is_none());
        let second = controller.fire_due(start + ms(260)).unwrap();

        assert_ne!(first.session, second.session);
        assert!(second.session > first.session);
        assert_eq!(controller.current_session(), Some(second.session));

        // Newer results land first, then the stale ones arrive.
        assert!(controller.accept(second.session));
        assert!(!controller.accept(first.session));
    }

    #[test]
    fn test_busy_flag() {
        let start = Instant::now();
        let mut controller = DebouncedSearchController::new(ms(250));
        assert!(!controller.is_busy());

        let leading = controller.on_term_change("a".to_string(), start).unwrap();
        assert!(controller.is_busy());
        assert!(controller.accept(leading.session));
        assert!(!controller.is_busy());

        controller.on_term_change("ab".to_string(), start + ms(100));
        assert!(controller.is_busy(), "queued trailing search counts as busy");

        let trailing = controller.fire_due(start + ms(350)).unwrap();
        assert!(controller.is_busy());
        assert!(controller.accept(trailing.session));
        assert!(!controller.is_busy());
    }

    #[test]
    fn test_fire_due_before_deadline_is_noop() {
        let start = Instant::now();
        let mut controller = DebouncedSearchController::new(ms(250));
        controller.on_term_change("a".to_string(), start);
        controller.on_term_change("ab".to_string(), start + ms(10));
        assert!(controller.fire_due(start + ms(100)).is_none());
        assert_eq!(controller.deadline(), Some(start + ms(260)));
    }

    #[test]
    fn test_reset_invalidates_in_flight_session() {
        let start = Instant::now();
        let mut controller = DebouncedSearchController::new(ms(250));
        let invocation = controller.on_term_change("a".to_string(), start).unwrap();
        controller.on_term_change("ab".to_string(), start + ms(5));

        controller.reset();

        assert!(!controller.accept(invocation.session));
        assert!(controller.deadline().is_none());
        assert!(controller.fire_due(start + ms(1000)).is_none());
        assert!(!controller.is_busy());
    }
}
