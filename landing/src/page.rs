//! The landing page: static sections plus the Apply flow.

use crate::content::{ApplicationEmbed, SiteContent, Variant};
use crate::reveal::{
    BrowserScheduler, REVEAL_SCROLL_DELAY, Scheduler, ScrollTarget, schedule_reveal_scroll,
};
use crate::sections::*;
use crate::state::FormState;
use leptos::html;
use leptos::prelude::*;
use tracing::info;

/// Form visibility and the action that reveals it.
#[derive(Clone, Copy)]
pub struct ApplyFlow {
    pub form: ReadSignal<FormState>,
    /// Shared by every Apply control on the page.
    pub apply: Callback<()>,
}

/// Wire the Apply action. Must run inside a reactive owner.
///
/// The first call to `apply` makes the form visible and asks `scheduler` to
/// scroll to `target` after [`REVEAL_SCROLL_DELAY`]. `target` is resolved when
/// the timer fires, by which point the form section has mounted. Later calls
/// leave the signal untouched, so subscribers are not notified and nothing
/// else is scheduled.
pub fn apply_flow<S, T, F>(variant: Variant, initial: FormState, scheduler: S, target: F) -> ApplyFlow
where
    S: Scheduler + 'static,
    T: ScrollTarget + 'static,
    F: Fn() -> Option<T> + 'static,
{
    let (form, set_form) = signal(initial);
    let scheduler = StoredValue::new_local(scheduler);
    let target = StoredValue::new_local(target);

    let apply = Callback::new(move |()| {
        let mut revealed = false;
        set_form.maybe_update(|state| {
            revealed = state.apply();
            revealed
        });
        if !revealed {
            return;
        }

        info!(%variant, "application form revealed");
        scheduler.with_value(|scheduler| {
            schedule_reveal_scroll(scheduler, REVEAL_SCROLL_DELAY, move || {
                target.try_with_value(|resolve| resolve()).flatten()
            });
        });
    });

    ApplyFlow { form, apply }
}

/// Full page body for one content variant.
///
/// Both Apply controls share one callback from [`apply_flow`], backed by the
/// browser's timer.
#[component]
pub fn LandingPage(
    content: &'static SiteContent,
    /// Starting visibility of the form, `Hidden` unless prerendering an open snapshot
    #[prop(optional)]
    initial_form: FormState,
) -> impl IntoView {
    let form_ref = NodeRef::<html::Section>::new();
    let ApplyFlow { form, apply } = apply_flow(
        content.variant,
        initial_form,
        BrowserScheduler,
        move || form_ref.get_untracked(),
    );

    view! {
        <main class="landing" style=content.theme.css_vars()>
            <SiteHeader brand=&content.brand on_apply=apply />
            <Hero copy=&content.hero on_apply=apply />
            <About copy=&content.about />
            <Features features=content.features />
            <Gallery gallery=&content.gallery />
            <Testimonials testimonials=&content.testimonials />
            <Video video=&content.video />
            <RevealedForm form=form embed=&content.application section_ref=form_ref />
            <Footer copy=&content.footer />
        </main>
    }
}

/// The application form, mounted only while `form` is visible.
#[component]
fn RevealedForm(
    form: ReadSignal<FormState>,
    embed: &'static ApplicationEmbed,
    section_ref: NodeRef<html::Section>,
) -> impl IntoView {
    view! {
        <Show when=move || form.get().is_visible()>
            <ApplicationForm embed=embed section_ref=section_ref />
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reveal::testing::{RecordingScheduler, StubSection};
    use leptos::tachys::view::RenderHtml;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    fn flow_with(scheduler: &RecordingScheduler, section: &StubSection) -> ApplyFlow {
        let section = section.clone();
        apply_flow(
            Variant::Classic,
            FormState::Hidden,
            scheduler.clone(),
            move || Some(section.clone()),
        )
    }

    #[test]
    fn apply_reveals_form_and_scrolls_once() {
        Owner::new().with(|| {
            let scheduler = RecordingScheduler::default();
            let section = StubSection::default();
            let flow = flow_with(&scheduler, &section);

            assert_eq!(flow.form.get_untracked(), FormState::Hidden);
            assert!(scheduler.delays().is_empty());

            flow.apply.run(());
            assert_eq!(flow.form.get_untracked(), FormState::Visible);
            assert_eq!(scheduler.delays(), vec![Duration::from_millis(100)]);
            assert_eq!(section.scrolls(), 0);

            flow.apply.run(());
            assert_eq!(flow.form.get_untracked(), FormState::Visible);
            assert_eq!(scheduler.delays().len(), 1);

            scheduler.run_all();
            assert_eq!(section.scrolls(), 1);
        });
    }

    #[test]
    fn repeated_apply_does_not_notify() {
        Owner::new().with(|| {
            let scheduler = RecordingScheduler::default();
            let flow = flow_with(&scheduler, &StubSection::default());

            let runs = Arc::new(AtomicUsize::new(0));
            let counter = Arc::clone(&runs);
            let form = flow.form;
            let seen = Memo::new(move |_| {
                counter.fetch_add(1, Ordering::SeqCst);
                form.get()
            });

            assert_eq!(seen.get_untracked(), FormState::Hidden);
            flow.apply.run(());
            assert_eq!(seen.get_untracked(), FormState::Visible);
            assert_eq!(runs.load(Ordering::SeqCst), 2);

            flow.apply.run(());
            assert_eq!(seen.get_untracked(), FormState::Visible);
            assert_eq!(runs.load(Ordering::SeqCst), 2);
        });
    }

    #[test]
    fn open_snapshot_schedules_nothing() {
        Owner::new().with(|| {
            let scheduler = RecordingScheduler::default();
            let section = StubSection::default();
            let target = section.clone();
            let flow = apply_flow(
                Variant::Studio,
                FormState::Visible,
                scheduler.clone(),
                move || Some(target.clone()),
            );

            flow.apply.run(());
            assert!(scheduler.delays().is_empty());
            assert_eq!(section.scrolls(), 0);
        });
    }

    #[test]
    fn form_section_appears_after_apply() {
        Owner::new().with(|| {
            let flow = flow_with(&RecordingScheduler::default(), &StubSection::default());
            let embed = &Variant::Classic.content().application;
            let render = || {
                let section_ref = NodeRef::<html::Section>::new();
                let view = view! {
                    <RevealedForm form=flow.form embed=embed section_ref=section_ref />
                };
                view.to_html()
            };

            let before = render();
            assert!(!before.contains(r#"id="apply""#));
            assert!(!before.contains(embed.heading));

            flow.apply.run(());
            let after = render();
            assert!(after.contains(r#"id="apply""#));
            assert!(after.contains(embed.heading));
            assert!(after.contains(embed.src));
        });
    }
}
