//! Session Context
//!
//! Reactive view of the session slot, shared through Leptos context so
//! views never reach for browser storage themselves.

use leptos::*;
use std::rc::Rc;

use crate::routes::{landing_for, resolve, AppRoute, Navigation};
use crate::session::{Role, Session, SessionStore};

/// Current session plus the store it is persisted in
#[derive(Clone)]
pub struct SessionContext {
    store: Rc<dyn SessionStore>,
    current: RwSignal<Option<Session>>,
}

impl SessionContext {
    /// Wrap a store, reading whatever session it already holds
    pub fn new(store: Rc<dyn SessionStore>) -> Self {
        let current = create_rw_signal(store.load());
        Self { store, current }
    }

    /// Reactive read of the current session
    pub fn current(&self) -> Option<Session> {
        self.current.get()
    }

    pub fn is_signed_in(&self) -> bool {
        self.current.with(Option::is_some)
    }

    /// Persist a new session from login/signup input and return the route
    /// the form should navigate to.
    pub fn sign_in(&self, name: &str, role: Role) -> AppRoute {
        let session = Session::sign_in(name, role);
        self.store.save(&session);
        self.current.set(Some(session));
        landing_for(role)
    }

    pub fn sign_out(&self) {
        self.store.clear();
        self.current.set(None);
    }

    /// Navigate to `to`, then clear the session. The view being left never
    /// sees the signed-out state.
    pub fn sign_out_to(&self, to: AppRoute, navigate: impl FnOnce(AppRoute)) {
        navigate(to);
        self.sign_out();
    }

    /// Re-read the slot, picking up changes made outside this context.
    /// Subscribers are only notified when the stored session differs.
    pub fn refresh(&self) {
        let stored = self.store.load();
        if self.current.with_untracked(|current| *current != stored) {
            self.current.set(stored);
        }
    }

    /// Reactive route decision for the current session
    pub fn resolve(&self, route: AppRoute) -> Navigation {
        self.current.with(|session| resolve(route.path(), session.as_ref()))
    }
}

/// Provide a session context backed by `store` to the component tree
pub fn provide_session_context(store: impl SessionStore + 'static) {
    provide_context(SessionContext::new(Rc::new(store)));
}
