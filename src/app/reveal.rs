use leptos::{html, prelude::*};
use leptos_use::{use_element_bounding, UseElementBoundingReturn};

use crate::motion::{
    use_in_view, use_spring, RevealState, RevealVariant, SpringConfig, StaggerSpeed,
    StaggerTiming, Transition,
};

/// Shared frame for reveal-style components: binds a variant's hidden/visible
/// style states to a div and walks the reveal state machine as the visibility
/// trigger and the CSS transition fire.
#[component]
fn VariantBox(
    node_ref: NodeRef<html::Div>,
    in_view: Signal<bool>,
    once: bool,
    variant: RevealVariant,
    transition: Transition,
    class: String,
    children: Children,
) -> impl IntoView {
    let spec = variant.spec();
    let state = RwSignal::new(RevealState::new(once));
    Effect::new(move |_| {
        let in_view = in_view.get();
        state.update(|s| s.set_in_view(in_view));
    });
    let current = move || {
        if state.get().is_visible() {
            spec.visible
        } else {
            spec.hidden
        }
    };
    view! {
        <div
            node_ref=node_ref
            class=class
            style:transition=transition.css()
            style:transform=move || current().transform
            style:opacity=move || format!("{}", current().opacity)
            style:filter=move || current().filter
            style=("clip-path", move || current().clip_path)
            on:transitionend=move |_| state.update(|s| s.finish())
        >
            {children()}
        </div>
    }
}

/// Scroll-triggered reveal. The wrapped content enters with the given
/// variant once it comes into view.
#[component]
pub fn Reveal(
    #[prop(optional)] variant: RevealVariant,
    #[prop(default = 0.0)] delay: f64,
    #[prop(default = 0.8)] duration: f64,
    #[prop(default = true)] once: bool,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let node_ref = NodeRef::<html::Div>::new();
    let in_view = use_in_view(node_ref, once);
    let transition = Transition::SMOOTH.lasting(duration).delayed(delay);
    view! {
        <VariantBox node_ref in_view once variant transition class>
            {children()}
        </VariantBox>
    }
}

#[derive(Clone, Copy)]
struct StaggerContext {
    in_view: Signal<bool>,
    timing: StaggerTiming,
    once: bool,
    next_index: StoredValue<usize>,
}

/// Coordinates entrance of its [`StaggerItem`] children: the group's
/// visibility is the shared trigger, each item starts `item_delay` after the
/// previous one.
#[component]
pub fn StaggerGroup(
    #[prop(optional)] speed: StaggerSpeed,
    #[prop(default = true)] once: bool,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let node_ref = NodeRef::<html::Div>::new();
    let in_view = use_in_view(node_ref, once);
    provide_context(StaggerContext {
        in_view,
        timing: speed.timing(),
        once,
        next_index: StoredValue::new(0),
    });
    view! {
        <div node_ref=node_ref class=class>
            {children()}
        </div>
    }
}

/// One element of a staggered group. Items claim consecutive indices in
/// construction order; outside a group an item reveals immediately.
#[component]
pub fn StaggerItem(
    #[prop(optional)] variant: RevealVariant,
    #[prop(default = 0.6)] duration: f64,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let node_ref = NodeRef::<html::Div>::new();
    let (in_view, once, delay) = match use_context::<StaggerContext>() {
        Some(ctx) => {
            let index = ctx.next_index.get_value();
            ctx.next_index.set_value(index + 1);
            (ctx.in_view, ctx.once, ctx.timing.delay_for(index))
        }
        None => (Signal::derive(|| true), true, 0.0),
    };
    let transition = Transition::SMOOTH.lasting(duration).delayed(delay);
    view! {
        <VariantBox node_ref in_view once variant transition class>
            {children()}
        </VariantBox>
    }
}

/// Pointer-attraction wrapper: the content leans toward the cursor while
/// hovered and springs back to rest when it leaves.
#[component]
pub fn Magnetic(
    #[prop(default = 0.3)] strength: f64,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let node_ref = NodeRef::<html::Div>::new();
    let UseElementBoundingReturn {
        left,
        top,
        width,
        height,
        ..
    } = use_element_bounding(node_ref);
    let (target_x, set_target_x) = signal(0.0);
    let (target_y, set_target_y) = signal(0.0);
    let x = use_spring(target_x.into(), SpringConfig::magnetic());
    let y = use_spring(target_y.into(), SpringConfig::magnetic());

    view! {
        <div
            node_ref=node_ref
            class=format!("inline-block {class}")
            style:transform=move || format!("translate3d({:.2}px, {:.2}px, 0)", x.get(), y.get())
            on:mousemove=move |ev| {
                let center_x = left.get_untracked() + width.get_untracked() / 2.0;
                let center_y = top.get_untracked() + height.get_untracked() / 2.0;
                set_target_x.set((f64::from(ev.client_x()) - center_x) * strength);
                set_target_y.set((f64::from(ev.client_y()) - center_y) * strength);
            }
            on:mouseleave=move |_| {
                set_target_x.set(0.0);
                set_target_y.set(0.0);
            }
        >
            {children()}
        </div>
    }
}
