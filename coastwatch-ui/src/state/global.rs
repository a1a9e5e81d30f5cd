//! Global Application State
//!
//! Transient UI messages shared across pages.

use leptos::*;

/// Global application state provided to all components
#[derive(Clone, Copy)]
pub struct GlobalState {
    /// Confirmation message (for toasts)
    pub success: Flash,
    /// Informational notice (for toasts)
    pub notice: Flash,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    provide_context(GlobalState {
        success: Flash::new(),
        notice: Flash::new(),
    });
}

impl GlobalState {
    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.flash(message, 3000);
    }

    /// Show a notice (auto-clears after timeout)
    pub fn show_notice(&self, message: &str) {
        self.notice.flash(message, 5000);
    }
}

/// A toast slot. Each message shown bumps the generation; a timer only
/// clears the slot if no newer message replaced the one it was set for.
#[derive(Clone, Copy)]
pub struct Flash {
    message: RwSignal<Option<String>>,
    generation: StoredValue<u64>,
}

impl Flash {
    fn new() -> Self {
        Self {
            message: create_rw_signal(None),
            generation: store_value(0),
        }
    }

    /// Reactive read of the message on display
    pub fn get(&self) -> Option<String> {
        self.message.get()
    }

    fn flash(self, message: &str, millis: u32) {
        let shown = self.show(message);
        gloo_timers::callback::Timeout::new(millis, move || self.expire(shown)).forget();
    }

    fn show(&self, message: &str) -> u64 {
        self.generation.update_value(|g| *g += 1);
        self.message.set(Some(message.to_string()));
        self.generation.get_value()
    }

    fn expire(&self, shown: u64) {
        if self.generation.get_value() == shown {
            self.message.set(None);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_runtime(f: impl FnOnce()) {
        let runtime = create_runtime();
        f();
        runtime.dispose();
    }

    #[test]
    fn test_expire_clears_current_message() {
        with_runtime(|| {
            let flash = Flash::new();
            let shown = flash.show("Signed out");

            flash.expire(shown);

            assert_eq!(flash.get(), None);
        });
    }

    #[test]
    fn test_stale_timer_keeps_newer_message() {
        with_runtime(|| {
            let flash = Flash::new();
            let first = flash.show("Signed in as Asha (local)");
            let second = flash.show("Signed out");

            flash.expire(first);
            assert_eq!(flash.get(), Some("Signed out".to_string()));

            flash.expire(second);
            assert_eq!(flash.get(), None);
        });
    }

    #[test]
    fn test_repeated_message_restarts_timeout() {
        with_runtime(|| {
            let flash = Flash::new();
            let first = flash.show("Signed out");
            flash.show("Signed out");

            flash.expire(first);

            assert_eq!(flash.get(), Some("Signed out".to_string()));
        });
    }
}
