use leptos::{html, prelude::*};

use crate::i18n::use_i18n;
use crate::motion::{use_scroll_progress, ParallaxPreset, ScrollWindow, Track};

/// Stacked text-shadow shown while a tagline is hovered.
fn layered_shadow(color: &str) -> String {
    format!(
        "0 0 0 {c}, 2px 2px 0 {c}, 4px 4px 0 {c}, 6px 6px 0 {c}, 8px 8px 0 {c}",
        c = color
    )
}

#[component]
pub fn Hero() -> impl IntoView {
    let i18n = use_i18n();
    let section_ref = NodeRef::<html::Div>::new();
    let progress = use_scroll_progress(section_ref, ScrollWindow::TOP_OUT);

    // content drifts up and fades over the first half of the scroll-out
    let lift = Track::range(0.0, -100.0);
    let fade = Track::new(vec![(0.0, 1.0), (0.5, 0.0)]).expect("hero fade track is monotonic");

    let (hover_first, set_hover_first) = signal(false);
    let (hover_second, set_hover_second) = signal(false);

    // the intro sentence carries a `<1>…</1>` marker around the name so
    // translations control the word order
    let intro_before = move || {
        let intro = i18n.t("hero.intro");
        intro
            .split_once("<1>")
            .map(|(before, _)| before.to_string())
            .unwrap_or(intro)
    };
    let intro_after = move || {
        let intro = i18n.t("hero.intro");
        intro
            .split_once("</1>")
            .map(|(_, after)| after.to_string())
            .unwrap_or_default()
    };

    view! {
        <section
            id="hero"
            class="relative min-h-screen flex flex-col justify-center items-center px-[5%] overflow-hidden bg-dark"
        >
            <div node_ref=section_ref class="absolute inset-0 pointer-events-none"></div>
            {
                let backdrop = ParallaxPreset::Background.rig();
                let floating = ParallaxPreset::Floating.rig();
                view! {
                    <div
                        class="absolute top-[15%] left-[10%] w-64 h-64 rounded-full bg-accent/5 blur-3xl pointer-events-none"
                        style:transform=move || backdrop.sample(progress.get()).transform()
                    ></div>
                    <div
                        class="absolute bottom-[20%] right-[12%] w-80 h-80 rounded-full bg-neutral/5 blur-3xl pointer-events-none"
                        style:transform=move || floating.sample(progress.get()).transform()
                    ></div>
                }
            }
            <div
                class="relative text-center max-w-[1200px]"
                style:transform=move || {
                    format!("translate3d(0, {:.2}px, 0)", lift.sample(progress.get()))
                }
                style:opacity=move || format!("{:.4}", fade.sample(progress.get()))
            >
                <p
                    class="rise-in font-light leading-relaxed text-neutral mb-4 text-[clamp(1.1rem,2vw,1.5rem)]"
                    style=("animation-delay", "0.1s")
                >
                    {intro_before}
                    <span class="text-light font-normal">"Ghassen Gasmi"</span>
                    {intro_after}
                </p>
                <p
                    class="rise-in font-light leading-relaxed text-neutral mb-12 text-[clamp(1rem,1.8vw,1.3rem)]"
                    style=("animation-delay", "0.2s")
                >
                    {move || i18n.t("hero.welcome")}
                </p>
                <h1
                    class="rise-in font-display leading-[0.9] m-0 text-light cursor-default text-[clamp(3.5rem,12vw,12rem)] transition-[text-shadow] duration-300"
                    style=("animation-delay", "0.3s")
                    style=(
                        "text-shadow",
                        move || {
                            if hover_first.get() {
                                layered_shadow("#E1D9BC")
                            } else {
                                "none".to_string()
                            }
                        },
                    )
                    on:mouseenter=move |_| set_hover_first(true)
                    on:mouseleave=move |_| set_hover_first(false)
                >
                    {move || i18n.t("hero.tagline1")}
                </h1>
                <h1
                    class="rise-in font-display leading-[0.9] m-0 text-accent cursor-default text-[clamp(3.5rem,12vw,12rem)] transition-[text-shadow] duration-300"
                    style=("animation-delay", "0.45s")
                    style=(
                        "text-shadow",
                        move || {
                            if hover_second.get() {
                                layered_shadow("#ACBAC4")
                            } else {
                                "none".to_string()
                            }
                        },
                    )
                    on:mouseenter=move |_| set_hover_second(true)
                    on:mouseleave=move |_| set_hover_second(false)
                >
                    {move || i18n.t("hero.tagline2")}
                </h1>
                <a
                    href="/ghassen-gasmi-cv-fullstack.pdf"
                    download="ghassen-gasmi-cv-fullstack.pdf"
                    class="rise-in inline-flex items-center gap-3 mt-10 px-8 py-4 border border-white/20 rounded-full text-light text-[0.85rem] uppercase tracking-[0.15em] hover:bg-white/10 hover:border-white/40 transition-all duration-300"
                    style=("animation-delay", "0.8s")
                >
                    <svg
                        width="16"
                        height="16"
                        viewBox="0 0 24 24"
                        fill="none"
                        stroke="currentColor"
                        stroke-width="2"
                        stroke-linecap="round"
                        stroke-linejoin="round"
                    >
                        <path d="M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4" />
                        <polyline points="7 10 12 15 17 10" />
                        <line x1="12" y1="15" x2="12" y2="3" />
                    </svg>
                    {move || i18n.t("hero.downloadResume")}
                </a>
            </div>
            <div class="rise-in absolute bottom-12 left-1/2 -translate-x-1/2" style=("animation-delay", "1.2s")>
                <div class="scroll-hint w-px h-[50px] bg-gradient-to-b from-neutral to-transparent"></div>
            </div>
        </section>
    }
}
