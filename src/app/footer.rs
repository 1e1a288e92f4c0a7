use chrono::Datelike;
use leptos::prelude::*;

use crate::i18n::use_i18n;
use crate::motion::RevealVariant;

use super::header::LangSwitcher;
use super::reveal::{Magnetic, Reveal};

const SOCIAL_LINKS: [(&str, &str); 3] = [
    ("LinkedIn", "https://www.linkedin.com/in/ghassen-gasmi-gm/"),
    ("GitHub", "https://github.com/gasmighassen"),
    ("Email", "mailto:gasmi.ghassen@gmail.com"),
];

#[component]
pub fn Footer() -> impl IntoView {
    let i18n = use_i18n();
    let build_year = chrono::DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .map(|t| t.year().to_string())
        .unwrap_or_default();

    view! {
        <footer
            id="contact"
            class="relative z-10 grid grid-cols-1 lg:grid-cols-[1fr_2fr] bg-dark px-[5%] pt-24 pb-8"
        >
            // empty left third for grid alignment
            <div class="hidden lg:block"></div>
            <div>
                <Reveal variant=RevealVariant::FadeUp class="mb-16">
                    <span class="text-base uppercase tracking-[0.2em] text-neutral">
                        {move || i18n.t("footer.label")}
                    </span>
                    <h2 class="font-heading font-light tracking-[-0.02em] text-light mt-2 text-[clamp(2rem,4vw,3rem)]">
                        {move || i18n.t("footer.title")}
                    </h2>
                </Reveal>

                <div class="text-left mb-20">
                    <Reveal variant=RevealVariant::FadeUp delay=0.1>
                        <p class="text-neutral leading-relaxed max-w-[520px] text-[clamp(1rem,2vw,1.35rem)]">
                            {move || i18n.t("footer.cta")}
                        </p>
                    </Reveal>
                    <Reveal variant=RevealVariant::FadeUp delay=0.2 class="mt-8">
                        <a
                            href="mailto:gasmi.ghassen@gmail.com"
                            class="inline-flex items-center gap-3 px-8 py-4 border border-light/20 rounded-full text-light text-sm uppercase tracking-[0.15em] hover:bg-light/10 transition-colors duration-300"
                        >
                            {move || i18n.t("footer.getInTouch")}
                        </a>
                    </Reveal>
                </div>

                <Reveal
                    variant=RevealVariant::FadeUp
                    delay=0.1
                    class="flex flex-wrap items-center gap-6 mb-16"
                >
                    {SOCIAL_LINKS
                        .iter()
                        .map(|&(label, href)| {
                            view! {
                                <Magnetic strength=0.3>
                                    <a
                                        href=href
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="text-sm uppercase tracking-[0.15em] text-neutral hover:text-light transition-colors duration-300"
                                    >
                                        {label}
                                    </a>
                                </Magnetic>
                            }
                        })
                        .collect_view()}
                </Reveal>

                <div class="flex flex-wrap items-center justify-between gap-4 pt-8 border-t border-white/10">
                    <span class="text-xs text-neutral">
                        {format!("© {build_year} Ghassen Gasmi")}
                        " · "
                        {move || i18n.t("footer.location")}
                    </span>
                    <div class="flex items-center gap-6">
                        <LangSwitcher />
                        <a
                            href="/#hero"
                            class="text-xs uppercase tracking-[0.15em] text-neutral hover:text-light transition-colors duration-300"
                        >
                            {move || i18n.t("footer.backToTop")} " ↑"
                        </a>
                    </div>
                </div>
            </div>
        </footer>
    }
}
