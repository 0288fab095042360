use std::fmt;

/// A deferred, zero-argument cleanup action.
///
/// A `Finalizer` is either the no-op or a boxed `FnOnce()`. It runs at most
/// once: [`Finalizer::run`] consumes it. Composition with [`Finalizer::then`]
/// builds a new finalizer that owns both parts; the parts keep their own
/// internal ordering.
///
/// Dropping a finalizer that still holds an action does not run it. The
/// drop is reported at `debug` level so leaked cleanup is visible when a
/// subscriber is installed.
///
/// # Examples
/// ```
/// use std::cell::RefCell;
/// use std::rc::Rc;
/// use scopetry_core::finalizer::Finalizer;
///
/// let log = Rc::new(RefCell::new(Vec::new()));
/// let (a, b) = (log.clone(), log.clone());
/// let both = Finalizer::new(move || a.borrow_mut().push("first"))
///     .then(Finalizer::new(move || b.borrow_mut().push("second")));
///
/// both.run();
/// assert_eq!(*log.borrow(), vec!["first", "second"]);
/// ```
#[must_use = "a finalizer does nothing unless it is run"]
pub struct Finalizer {
    action: Option<Box<dyn FnOnce()>>,
}

impl Finalizer {
    /// The action that does nothing.
    pub fn noop() -> Self {
        Finalizer { action: None }
    }

    pub fn new(action: impl FnOnce() + 'static) -> Self {
        Finalizer {
            action: Some(Box::new(action)),
        }
    }

    /// Returns `true` if running this finalizer would have no effect.
    pub fn is_noop(&self) -> bool {
        self.action.is_none()
    }

    /// Sequences two finalizers: `self` runs first, then `next`.
    pub fn then(mut self, mut next: Finalizer) -> Finalizer {
        match (self.action.take(), next.action.take()) {
            (None, None) => Finalizer::noop(),
            (Some(first), None) => Finalizer { action: Some(first) },
            (None, Some(second)) => Finalizer { action: Some(second) },
            (Some(first), Some(second)) => Finalizer::new(move || {
                first();
                second();
            }),
        }
    }

    /// Runs the action, consuming the finalizer.
    pub fn run(mut self) {
        if let Some(action) = self.action.take() {
            action();
        }
    }
}

impl Default for Finalizer {
    fn default() -> Self {
        Finalizer::noop()
    }
}

impl Drop for Finalizer {
    fn drop(&mut self) {
        if self.action.is_some() {
            tracing::debug!("finalizer dropped without running");
        }
    }
}

impl fmt::Debug for Finalizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Finalizer").field("noop", &self.is_noop()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recorder(log: &Rc<RefCell<Vec<&'static str>>>, name: &'static str) -> Finalizer {
        let log = log.clone();
        Finalizer::new(move || log.borrow_mut().push(name))
    }

    #[test]
    fn noop_is_noop() {
        assert!(Finalizer::noop().is_noop());
        assert!(Finalizer::default().is_noop());
        assert!(!Finalizer::new(|| {}).is_noop());
    }

    #[test]
    fn run_executes_once() {
        let log = Rc::new(RefCell::new(Vec::new()));
        recorder(&log, "a").run();
        assert_eq!(*log.borrow(), vec!["a"]);
    }

    #[test]
    fn then_runs_in_sequence() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let f = recorder(&log, "a").then(recorder(&log, "b")).then(recorder(&log, "c"));
        assert!(log.borrow().is_empty());
        f.run();
        assert_eq!(*log.borrow(), vec!["a", "b", "c"]);
    }

    #[test]
    fn then_preserves_nested_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let inner = recorder(&log, "b").then(recorder(&log, "c"));
        recorder(&log, "a").then(inner).run();
        assert_eq!(*log.borrow(), vec!["a", "b", "c"]);
    }

    #[test]
    fn noop_is_identity_for_then() {
        assert!(Finalizer::noop().then(Finalizer::noop()).is_noop());

        let log = Rc::new(RefCell::new(Vec::new()));
        let f = Finalizer::noop().then(recorder(&log, "a")).then(Finalizer::noop());
        assert!(!f.is_noop());
        f.run();
        assert_eq!(*log.borrow(), vec!["a"]);
    }

    #[test]
    fn drop_does_not_run() {
        let log = Rc::new(RefCell::new(Vec::new()));
        drop(recorder(&log, "a"));
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn leaked_action_is_logged_at_debug() {
        let logs = crate::log_capture::captured_logs(|| drop(Finalizer::new(|| {})));
        assert!(logs.contains("DEBUG"));
        assert!(logs.contains("finalizer dropped without running"));
    }

    #[test]
    fn run_and_noop_drop_log_nothing() {
        let logs = crate::log_capture::captured_logs(|| {
            Finalizer::new(|| {}).run();
            drop(Finalizer::noop());
        });
        assert!(!logs.contains("finalizer dropped without running"));
    }
}
