use crate::extensions::{PageContext, PageEvent};

use super::page_engine::PageEngine;

impl PageEngine {
    /// Snapshot of engine state handed to observers with each event.
    pub(super) fn page_context(&self) -> PageContext {
        PageContext {
            scroll_offset_px: self.scroll.offset_px(),
            nav_collapsed: self.scroll.nav_collapsed(),
            scroll_animation_active: self.scroll.animation_state().active,
            reveal_begun: self.reveal.has_begun(),
            reveal_clock_ms: self.reveal.clock_ms(),
        }
    }

    /// Fans `event` out to every registered observer in registration order.
    pub(super) fn emit_page_event(&mut self, event: PageEvent) {
        let context = self.page_context();
        for observer in &mut self.observers {
            observer.on_event(event, context);
        }
    }
}
