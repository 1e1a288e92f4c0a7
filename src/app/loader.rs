use leptos::prelude::*;
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use crate::motion::Transition;

/// Intro overlay: holds for two seconds while the name and progress bar play,
/// then slides up and hands control to the page.
#[component]
pub fn Loader(on_complete: Callback<()>) -> impl IntoView {
    let (is_leaving, set_is_leaving) = signal(false);
    let (is_done, set_is_done) = signal(false);

    let UseTimeoutFnReturn {
        start: start_leave, ..
    } = use_timeout_fn(
        move |_: ()| {
            set_is_leaving.set(true);
        },
        2000.0,
    );
    let UseTimeoutFnReturn {
        start: start_done, ..
    } = use_timeout_fn(
        move |_: ()| {
            set_is_done.set(true);
            on_complete.run(());
        },
        2800.0,
    );

    Effect::new(move |_| {
        start_leave(());
        start_done(());
    });

    view! {
        <Show when=move || !is_done.get()>
            <div
                class="fixed inset-0 z-[200] flex flex-col items-center justify-center bg-dark"
                style:transition=Transition::SMOOTH.css()
                style:transform=move || {
                    if is_leaving.get() { "translate3d(0, -100%, 0)" } else { "none" }
                }
            >
                <div class="font-display text-[clamp(2.5rem,8vw,6rem)] leading-none">
                    <span class="rise-in inline-block text-light">"Ghassen"</span>
                    <span
                        class="rise-in inline-block ml-3 text-accent"
                        style=("animation-delay", "0.1s")
                    >
                        "Gasmi"
                    </span>
                </div>
                <div class="absolute bottom-[20%] left-1/2 -translate-x-1/2 w-[200px] h-0.5 rounded bg-white/10 overflow-hidden">
                    <div class="loader-fill h-full rounded bg-accent"></div>
                </div>
            </div>
        </Show>
    }
}
