//! Reactive bindings for the motion core.
//!
//! Measurement and frame scheduling come from `leptos-use`; every listener
//! and frame loop registered here is torn down with the owning reactive
//! scope, so a component unmounting mid-motion stops cleanly.

use leptos::{html, prelude::*};
use leptos_use::{
    use_element_bounding, use_element_visibility, use_raf_fn_with_options, use_window_size,
    utils::Pausable, UseElementBoundingReturn, UseRafFnCallbackArgs, UseRafFnOptions,
    UseWindowSizeReturn,
};

use super::progress::ScrollWindow;
use super::spring::{Spring, SpringConfig};

/// Normalized progress of `target` through `window`, updating as the page
/// scrolls or resizes. Before the node attaches (and on the server) this
/// reads the idle value 0.
pub fn use_scroll_progress(target: NodeRef<html::Div>, window: ScrollWindow) -> Signal<f64> {
    let UseElementBoundingReturn { top, height, .. } = use_element_bounding(target);
    let UseWindowSizeReturn {
        height: viewport, ..
    } = use_window_size();
    Signal::derive(move || window.progress(top.get(), height.get(), viewport.get()))
}

/// Spring-smooth a target signal. The spring advances on animation frames,
/// pauses once settled, and resumes whenever the target moves.
pub fn use_spring(target: Signal<f64>, config: SpringConfig) -> Signal<f64> {
    let spring = StoredValue::new(Spring::new(target.get_untracked(), config));
    let (position, set_position) = signal(target.get_untracked());
    let (settled, set_settled) = signal(true);

    let Pausable { pause, resume, .. } = use_raf_fn_with_options(
        move |args: UseRafFnCallbackArgs| {
            let mut s = spring.get_value();
            let pos = s.step(args.delta / 1000.0);
            let now_settled = s.is_settled();
            spring.set_value(s);
            set_position.set(pos);
            set_settled.set(now_settled);
        },
        UseRafFnOptions::default().immediate(false),
    );

    Effect::new(move |_| {
        let t = target.get();
        let mut s = spring.get_value();
        s.set_target(t);
        spring.set_value(s);
        if !s.is_settled() {
            set_settled.set(false);
            resume();
        }
    });

    Effect::new(move |_| {
        if settled.get() {
            pause();
        }
    });

    position.into()
}

/// Visibility trigger for reveals. With `once` the signal latches true the
/// first time the element is seen.
pub fn use_in_view(target: NodeRef<html::Div>, once: bool) -> Signal<bool> {
    let visible = use_element_visibility(target);
    if once {
        Memo::new(move |prev: Option<&bool>| prev.copied().unwrap_or(false) || visible.get())
            .into()
    } else {
        visible
    }
}

/// Whole-page scroll progress, derived from a wrapper element that spans the
/// page content.
#[derive(Clone, Copy)]
pub struct PageProgress(pub Signal<f64>);

pub fn provide_page_progress(page: NodeRef<html::Div>) {
    let UseElementBoundingReturn { top, height, .. } = use_element_bounding(page);
    let UseWindowSizeReturn {
        height: viewport, ..
    } = use_window_size();
    let progress = Signal::derive(move || {
        let viewport = viewport.get();
        if !viewport.is_finite() || viewport <= 0.0 {
            return 0.0;
        }
        let travel = height.get() - viewport;
        if travel <= 0.0 || !travel.is_finite() {
            return 0.0;
        }
        (-top.get() / travel).clamp(0.0, 1.0)
    });
    provide_context(PageProgress(progress));
}

pub fn use_page_progress() -> Signal<f64> {
    use_context::<PageProgress>()
        .map(|p| p.0)
        .unwrap_or_else(|| Signal::derive(|| 0.0))
}
