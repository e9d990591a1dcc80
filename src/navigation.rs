//! Locations, routes, and an in-memory navigation history.
//!
//! The HTTP server gets its location from each request; [`History`] is the same idea for callers
//! that navigate programmatically. It is an ordinary value handed to whoever needs it, so tests
//! build their own instead of sharing a process-wide one.

use std::sync::{Arc, Mutex, Weak};

/// A place in the site. Only the path matters: query strings and fragments are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pathname: String,
}

impl Location {
    pub fn new(path: &str) -> Self {
        let pathname = path
            .split(|c: char| c == '?' || c == '#')
            .next()
            .unwrap_or_default();
        let pathname = if pathname.is_empty() { "/" } else { pathname };
        Self {
            pathname: pathname.to_owned(),
        }
    }

    pub fn pathname(&self) -> &str {
        &self.pathname
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Landing,
    Privacy,
    NotFound,
}

impl Route {
    /// Exact matches only: no redirects, no nested routes, no trailing-slash forgiveness.
    pub fn recognize(location: &Location) -> Self {
        match location.pathname() {
            "/" => Route::Landing,
            "/privacy" => Route::Privacy,
            _ => Route::NotFound,
        }
    }
}

type Listener = Arc<dyn Fn(&Location) + Send + Sync>;

struct HistoryState {
    entries: Vec<Location>,
    index: usize,
    listeners: Vec<(u64, Listener)>,
    next_listener_id: u64,
}

/// A stack of visited locations with a cursor, plus whoever wants to hear about moves.
///
/// Cloning a `History` gives another handle onto the same stack.
#[derive(Clone)]
pub struct History {
    state: Arc<Mutex<HistoryState>>,
}

impl History {
    pub fn new(initial_path: &str) -> Self {
        Self {
            state: Arc::new(Mutex::new(HistoryState {
                entries: vec![Location::new(initial_path)],
                index: 0,
                listeners: Vec::new(),
                next_listener_id: 0,
            })),
        }
    }

    pub fn location(&self) -> Location {
        let state = self.lock();
        state.entries[state.index].clone()
    }

    /// Moves to `path`, discarding anything that was ahead of the current entry.
    pub fn push(&self, path: &str) {
        let location = Location::new(path);
        let listeners = {
            let mut state = self.lock();
            let index = state.index;
            state.entries.truncate(index + 1);
            state.entries.push(location.clone());
            state.index += 1;
            Self::listeners_of(&state)
        };
        tracing::debug!(path = %location.pathname(), "Navigating");
        notify(&listeners, &location);
    }

    /// Returns `false`, and notifies nobody, when already at the oldest entry.
    pub fn back(&self) -> bool {
        self.go(-1)
    }

    /// Returns `false`, and notifies nobody, when already at the newest entry.
    pub fn forward(&self) -> bool {
        self.go(1)
    }

    /// Calls `listener` with the new location after every move, until the returned handle is
    /// dropped.
    #[must_use = "the listener is removed as soon as the handle is dropped"]
    pub fn listen<F>(&self, listener: F) -> Unlisten
    where
        F: Fn(&Location) + Send + Sync + 'static,
    {
        let mut state = self.lock();
        let id = state.next_listener_id;
        state.next_listener_id += 1;
        state.listeners.push((id, Arc::new(listener)));
        Unlisten {
            state: Arc::downgrade(&self.state),
            id,
        }
    }

    fn go(&self, delta: isize) -> bool {
        let (location, listeners) = {
            let mut state = self.lock();
            let target = match state.index.checked_add_signed(delta) {
                Some(target) if target < state.entries.len() => target,
                _ => return false,
            };
            state.index = target;
            (state.entries[target].clone(), Self::listeners_of(&state))
        };
        notify(&listeners, &location);
        true
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HistoryState> {
        // A listener panicking cannot leave the entries half-updated: they are never touched
        // while listeners run.
        self.state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn listeners_of(state: &HistoryState) -> Vec<Listener> {
        state
            .listeners
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect()
    }
}

// Listeners run without the lock held, so they are free to read the history themselves.
fn notify(listeners: &[Listener], location: &Location) {
    for listener in listeners {
        listener(location);
    }
}

/// Unsubscribes a [`History`] listener when dropped.
pub struct Unlisten {
    state: Weak<Mutex<HistoryState>>,
    id: u64,
}

impl Drop for Unlisten {
    fn drop(&mut self) {
        if let Some(state) = self.state.upgrade() {
            let mut state = state.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            state.listeners.retain(|(id, _)| *id != self.id);
        }
    }
}

/// Keeps track of which route a [`History`] currently points at.
pub struct Router {
    current: Arc<Mutex<Location>>,
    _subscription: Unlisten,
}

impl Router {
    pub fn new(history: &History) -> Self {
        let current = Arc::new(Mutex::new(history.location()));
        let subscription = {
            let current = Arc::clone(&current);
            history.listen(move |location| {
                let mut current = current.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
                *current = location.clone();
            })
        };
        Self {
            current,
            _subscription: subscription,
        }
    }

    pub fn location(&self) -> Location {
        self.current
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn route(&self) -> Route {
        Route::recognize(&self.location())
    }
}
