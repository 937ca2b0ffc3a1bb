//! Deferred scroll to the application form.
//!
//! When the form appears the page waits a moment for layout to settle, then
//! smooth-scrolls the section into view. Both the waiting and the scrolling
//! sit behind small traits so the behavior can be exercised without a
//! browser.

use std::time::Duration;
use tracing::debug;

/// How long to wait after the form mounts before scrolling to it.
pub const REVEAL_SCROLL_DELAY: Duration = Duration::from_millis(100);

/// Something that can be brought into view.
pub trait ScrollTarget {
    fn scroll_into_view_smooth(&self);
}

impl ScrollTarget for web_sys::HtmlElement {
    fn scroll_into_view_smooth(&self) {
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        self.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

/// Runs a task once after a fixed delay. Fire and forget.
pub trait Scheduler {
    fn defer(&self, delay: Duration, task: Box<dyn FnOnce()>);
}

/// `window.setTimeout` via Leptos.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    fn defer(&self, delay: Duration, task: Box<dyn FnOnce()>) {
        leptos::prelude::set_timeout(task, delay);
    }
}

/// Schedule a smooth scroll to whatever `target` resolves to after `delay`.
///
/// The target is looked up when the timer fires. If it is gone by then the
/// scroll is skipped; nothing is retried or reported.
pub fn schedule_reveal_scroll<S, T, F>(scheduler: &S, delay: Duration, target: F)
where
    S: Scheduler + ?Sized,
    T: ScrollTarget,
    F: FnOnce() -> Option<T> + 'static,
{
    scheduler.defer(
        delay,
        Box::new(move || match target() {
            Some(element) => {
                debug!("scrolling application form into view");
                element.scroll_into_view_smooth();
            }
            None => debug!("application form not mounted, skipping scroll"),
        }),
    );
}


#[cfg(test)]
mod tests {
    use super::testing::{RecordingScheduler, StubSection};
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn scroll_waits_for_the_timer() {
        let scheduler = RecordingScheduler::default();
        let section = StubSection::default();
        let target = section.clone();

        schedule_reveal_scroll(&scheduler, REVEAL_SCROLL_DELAY, move || Some(target));

        assert_eq!(section.scrolls(), 0);
        assert_eq!(scheduler.delays(), vec![Duration::from_millis(100)]);

        scheduler.run_all();
        assert_eq!(section.scrolls(), 1);
    }

    #[test]
    fn missing_target_is_a_silent_no_op() {
        let scheduler = RecordingScheduler::default();
        schedule_reveal_scroll(&scheduler, REVEAL_SCROLL_DELAY, || None::<StubSection>);
        scheduler.run_all();
        assert!(scheduler.delays().is_empty());
    }

    #[test]
    fn target_is_resolved_when_the_timer_fires() {
        let scheduler = RecordingScheduler::default();
        let section = StubSection::default();
        let mounted = Rc::new(RefCell::new(None::<StubSection>));

        let slot = Rc::clone(&mounted);
        schedule_reveal_scroll(&scheduler, REVEAL_SCROLL_DELAY, move || slot.borrow().clone());

        // Section mounts after scheduling but before the delay elapses.
        *mounted.borrow_mut() = Some(section.clone());
        scheduler.run_all();
        assert_eq!(section.scrolls(), 1);
    }
}
