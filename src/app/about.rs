use leptos::{html, prelude::*};
use leptos_meta::Title;

use crate::i18n::use_i18n;
use crate::motion::{use_scroll_progress, RevealVariant, ScrollWindow, StaggerSpeed, Track};

use super::reveal::{Reveal, StaggerGroup, StaggerItem};

const STATS: [(&str, &str); 3] = [
    ("3+", "yearsExp"),
    ("10+", "projectsDelivered"),
    ("4", "companies"),
];

struct TimelineEntry {
    year: &'static str,
    company: &'static str,
    key: &'static str,
}

static TIMELINE: [TimelineEntry; 4] = [
    TimelineEntry {
        year: "2024 - Present",
        company: "WorldSoft Group",
        key: "worldsoft",
    },
    TimelineEntry {
        year: "2024",
        company: "Linxexpress",
        key: "linxexpress",
    },
    TimelineEntry {
        year: "2023 - 2024",
        company: "HZ Technologie",
        key: "hztech",
    },
    TimelineEntry {
        year: "2022 - 2023",
        company: "ERATHIS",
        key: "erathis",
    },
];

/// About section: label/title header, copy, stats, and a career timeline
/// whose spine draws itself in as the section scrolls through the viewport.
#[component]
pub fn AboutSection() -> impl IntoView {
    let i18n = use_i18n();
    let section_ref = NodeRef::<html::Div>::new();
    let progress = use_scroll_progress(section_ref, ScrollWindow::ENTER_EXIT);
    let spine = Track::new(vec![(0.1, 0.0), (0.9, 100.0)]).expect("spine track is monotonic");

    view! {
        <section
            id="about"
            class="relative grid grid-cols-1 lg:grid-cols-[1fr_2fr] px-[5%] py-24 bg-dark"
        >
            <div node_ref=section_ref class="absolute inset-0 pointer-events-none"></div>
            // empty left third for grid alignment
            <div class="hidden lg:block"></div>
            <div>
                <Reveal variant=RevealVariant::FadeUp class="mb-16">
                    <span class="text-base uppercase tracking-[0.2em] text-neutral">
                        {move || i18n.t("about.label")}
                    </span>
                    <h2 class="font-heading font-light tracking-[-0.02em] text-light mt-2 text-[clamp(2rem,4vw,3rem)]">
                        {move || i18n.t("about.title")}
                    </h2>
                </Reveal>

                <div class="flex flex-col gap-8 mb-20">
                    <Reveal variant=RevealVariant::FadeUp delay=0.1>
                        <p class="text-neutralLight leading-snug max-w-[500px]">
                            {move || i18n.t("about.intro")}
                        </p>
                    </Reveal>
                    <Reveal variant=RevealVariant::FadeUp delay=0.2>
                        <p class="text-neutralLight leading-snug max-w-[500px]">
                            {move || i18n.t("about.experience")}
                        </p>
                        <p class="text-neutralLight leading-snug max-w-[500px] mt-6">
                            {move || i18n.t("about.linxStory")}
                            <span class="text-accent italic">
                                " " {move || i18n.t("about.oneVision")}
                            </span>
                        </p>
                    </Reveal>
                </div>

                <StaggerGroup
                    speed=StaggerSpeed::Normal
                    class="grid grid-cols-[repeat(auto-fit,minmax(150px,1fr))] gap-8 mb-24 pt-12 border-t border-white/10"
                >
                    {STATS
                        .iter()
                        .map(|&(number, key)| {
                            let key = format!("about.{key}");
                            view! {
                                <StaggerItem variant=RevealVariant::FadeUp>
                                    <span class="block font-heading font-light text-accent text-[clamp(2.5rem,5vw,3.5rem)]">
                                        {number}
                                    </span>
                                    <span class="text-base uppercase tracking-[0.1em] text-neutral">
                                        {move || i18n.t(&key)}
                                    </span>
                                </StaggerItem>
                            }
                        })
                        .collect_view()}
                </StaggerGroup>

                <div class="relative">
                    <Reveal variant=RevealVariant::FadeUp duration=0.6>
                        <h3 class="font-heading font-light text-accent mb-12 text-[clamp(1.5rem,3vw,2rem)]">
                            {move || i18n.t("about.careerPath")}
                        </h3>
                    </Reveal>
                    <div class="absolute left-0 top-20 bottom-0 w-px bg-white/10">
                        <div
                            class="w-full bg-accent"
                            style:height=move || {
                                format!("{:.2}%", spine.sample(progress.get()))
                            }
                        ></div>
                    </div>
                    <StaggerGroup speed=StaggerSpeed::Slow class="flex flex-col gap-12 pl-10">
                        {TIMELINE
                            .iter()
                            .map(|entry| {
                                let role_key = format!("about.timeline.{}.role", entry.key);
                                let desc_key = format!("about.timeline.{}.description", entry.key);
                                view! {
                                    <StaggerItem variant=RevealVariant::FadeLeft>
                                        <span class="text-sm uppercase tracking-[0.15em] text-neutral">
                                            {entry.year}
                                        </span>
                                        <h4 class="font-heading text-xl text-light mt-1">
                                            {entry.company}
                                        </h4>
                                        <p class="text-accent text-sm mt-1">
                                            {move || i18n.t(&role_key)}
                                        </p>
                                        <p class="text-neutralLight text-sm leading-relaxed mt-2 max-w-[460px]">
                                            {move || i18n.t(&desc_key)}
                                        </p>
                                    </StaggerItem>
                                }
                            })
                            .collect_view()}
                    </StaggerGroup>
                </div>
            </div>
        </section>
    }
}

/// Standalone `/about` route.
#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <Title text="About" />
        <div class="pt-20">
            <AboutSection />
        </div>
    }
}
