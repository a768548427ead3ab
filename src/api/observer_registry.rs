use crate::error::{SplashError, SplashResult};
use crate::extensions::PageObserver;

use super::page_engine::PageEngine;

impl PageEngine {
    /// Registers an observer. Observer ids must be unique and non-empty.
    pub fn register_observer(&mut self, observer: Box<dyn PageObserver>) -> SplashResult<()> {
        let id = observer.id().to_owned();
        if id.is_empty() {
            return Err(SplashError::InvalidData(
                "observer id must not be empty".to_owned(),
            ));
        }
        if self.observers.iter().any(|existing| existing.id() == id) {
            return Err(SplashError::InvalidData(format!(
                "observer `{id}` is already registered"
            )));
        }
        self.observers.push(observer);
        Ok(())
    }

    /// Removes the observer with `observer_id`. Returns whether one was
    /// removed; further events no longer reach it.
    pub fn unregister_observer(&mut self, observer_id: &str) -> bool {
        let Some(position) = self
            .observers
            .iter()
            .position(|observer| observer.id() == observer_id)
        else {
            return false;
        };
        self.observers.remove(position);
        true
    }

    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    #[must_use]
    pub fn has_observer(&self, observer_id: &str) -> bool {
        self.observers
            .iter()
            .any(|observer| observer.id() == observer_id)
    }

    /// Drops every registered observer.
    pub fn clear_observers(&mut self) {
        self.observers.clear();
    }
}
