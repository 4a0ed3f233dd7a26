//! Handler registry: `(button, transition)` → callback.
//!
//! Dispatch resolves the exact key first, then falls back to the
//! [`Transition::Both`] wildcard; the wildcard handler always receives the
//! actual transition, never `Both`. A button with both an exact and a wildcard
//! registration only ever fires the exact one for that edge.
//!
//! Handlers run synchronously on the poll thread. The registry does not catch
//! panics: a handler that unwinds takes the poll loop down with it.
//! Partial-failure isolation between handlers is out of scope.

use crate::event::Transition;
use std::collections::HashMap;

/// Callback invoked with the button name and the actual transition.
pub type Handler = Box<dyn FnMut(&str, Transition) + Send>;

#[derive(Default)]
pub struct HandlerRegistry {
    handlers: HashMap<(String, Transition), Handler>,
}

impl HandlerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a handler for `(name, transition)`. Re-registering the same
    /// key overwrites silently; last registration wins. Handlers are never
    /// removed.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        transition: Transition,
        handler: impl FnMut(&str, Transition) + Send + 'static,
    ) {
        self.handlers
            .insert((name.into(), transition), Box::new(handler));
    }

    /// Invokes the handler for one detected edge.
    ///
    /// Exact key first, then `(name, Both)`. An unmatched event is silently
    /// dropped; that is not an error condition.
    pub fn dispatch(&mut self, name: &str, transition: Transition) {
        // Lookups allocate the composite key; dispatch only runs on actual
        // edges, never on quiet ticks.
        if let Some(handler) = self.handlers.get_mut(&(name.to_string(), transition)) {
            handler(name, transition);
        } else if let Some(handler) = self.handlers.get_mut(&(name.to_string(), Transition::Both)) {
            handler(name, transition);
        }
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    type Log = Arc<Mutex<Vec<(String, Transition)>>>;

    fn recorder(log: &Log) -> impl FnMut(&str, Transition) + Send + 'static {
        let log = Arc::clone(log);
        move |name, t| log.lock().unwrap().push((name.to_string(), t))
    }

    #[test]
    fn exact_key_dispatch() {
        let log: Log = Default::default();
        let mut reg = HandlerRegistry::new();
        reg.register("LISTEN", Transition::Press, recorder(&log));

        reg.dispatch("LISTEN", Transition::Press);
        assert_eq!(
            *log.lock().unwrap(),
            vec![("LISTEN".to_string(), Transition::Press)]
        );
    }

    #[test]
    fn wildcard_receives_actual_transition() {
        let log: Log = Default::default();
        let mut reg = HandlerRegistry::new();
        reg.register("REW", Transition::Both, recorder(&log));

        reg.dispatch("REW", Transition::Press);
        reg.dispatch("REW", Transition::Release);
        assert_eq!(
            *log.lock().unwrap(),
            vec![
                ("REW".to_string(), Transition::Press),
                ("REW".to_string(), Transition::Release),
            ]
        );
    }

    #[test]
    fn exact_shadows_wildcard() {
        let log: Log = Default::default();
        let mut reg = HandlerRegistry::new();
        {
            let log = Arc::clone(&log);
            reg.register("FF", Transition::Press, move |_, _| {
                log.lock().unwrap().push(("exact".into(), Transition::Press));
            });
        }
        {
            let log = Arc::clone(&log);
            reg.register("FF", Transition::Both, move |_, t| {
                log.lock().unwrap().push(("wild".into(), t));
            });
        }

        reg.dispatch("FF", Transition::Press);
        reg.dispatch("FF", Transition::Release);
        assert_eq!(
            *log.lock().unwrap(),
            vec![
                ("exact".to_string(), Transition::Press),
                ("wild".to_string(), Transition::Release),
            ]
        );
    }

    #[test]
    fn unregistered_transition_is_a_noop() {
        let log: Log = Default::default();
        let mut reg = HandlerRegistry::new();
        reg.register("LISTEN", Transition::Press, recorder(&log));

        // Release has no exact key and no wildcard: silently dropped.
        reg.dispatch("LISTEN", Transition::Release);
        reg.dispatch("UNKNOWN", Transition::Press);
        assert!(log.lock().unwrap().is_empty());
    }

    #[test]
    fn last_registration_wins() {
        let log: Log = Default::default();
        let mut reg = HandlerRegistry::new();
        {
            let log = Arc::clone(&log);
            reg.register("LISTEN", Transition::Press, move |_, _| {
                log.lock().unwrap().push(("first".into(), Transition::Press));
            });
        }
        {
            let log = Arc::clone(&log);
            reg.register("LISTEN", Transition::Press, move |_, _| {
                log.lock().unwrap().push(("second".into(), Transition::Press));
            });
        }
        assert_eq!(reg.len(), 1);

        reg.dispatch("LISTEN", Transition::Press);
        assert_eq!(
            *log.lock().unwrap(),
            vec![("second".to_string(), Transition::Press)]
        );
    }
}
