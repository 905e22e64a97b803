use leptos::prelude::*;

/// Application-wide reactive state shared through context.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    /// Bumped when the user re-selects the page that is already open.
    /// List pages watch it to reset their controls and refetch.
    pub activation: RwSignal<u64>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            activation: RwSignal::new(0),
        }
    }

    pub fn reactivate(&self) {
        log::debug!("re-activating current page");
        self.activation.update(|n| *n = n.wrapping_add(1));
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}
