use leptos::{html, prelude::*};

use crate::i18n::use_i18n;
use crate::motion::{
    use_scroll_progress, use_spring, RevealVariant, ScrollWindow, SpringConfig,
};

use super::reveal::Reveal;

struct Project {
    title: &'static str,
    subtitle: &'static str,
    category: &'static str,
    description: &'static str,
    tags: &'static [&'static str],
    color: &'static str,
    image: &'static str,
    url: Option<&'static str>,
}

static PROJECTS: [Project; 4] = [
    Project {
        title: "WorldSoft Group",
        subtitle: "Travel Platform",
        category: "TRAVEL BOOKING PLATFORM",
        description: "B2B/B2C travel booking with GDS integration, e-visa applications, and secure authentication systems.",
        tags: &["Angular", "React Native", "Node.js", "GDS"],
        color: "#E1D9BC",
        image: "/images/worldsoft.jpg",
        url: None,
    },
    Project {
        title: "Linxexpress",
        subtitle: "Logistics",
        category: "ON-DEMAND LOGISTICS",
        description: "Complete delivery platform built solo — customer apps, driver apps, real-time tracking, VoIP, payment systems.",
        tags: &["React Native", "React", "PostgreSQL", "WebSocket"],
        color: "#ACBAC4",
        image: "/images/linx.png",
        url: Some("https://linxexpress.tn"),
    },
    Project {
        title: "HZ Tech",
        subtitle: "Mobile Apps",
        category: "MOBILE APPLICATION",
        description: "Customer & driver apps with real-time GPS tracking, Stripe payments, and push notifications.",
        tags: &["React Native", "Redux", "Google Maps", "Stripe"],
        color: "#30364F",
        image: "/images/hztech.png",
        url: Some("https://hezlidz.com"),
    },
    Project {
        title: "Erathis",
        subtitle: "Enterprise",
        category: "ENTERPRISE PLATFORM",
        description: "Enterprise web application with comprehensive design system and documentation.",
        tags: &["React 18", "TypeScript", "Design Systems"],
        color: "#F0F0DB",
        image: "/images/erathis.jpg",
        url: None,
    },
];

/// Stacked sticky cards, each scrolling over the previous one, with a sticky
/// counter tracking the card currently on top.
#[component]
pub fn Projects() -> impl IntoView {
    let section_ref = NodeRef::<html::Div>::new();
    let progress = use_scroll_progress(section_ref, ScrollWindow::FULL_SECTION);
    let active = Memo::new(move |_| {
        let scaled = progress.get() * PROJECTS.len() as f64;
        (scaled as usize).min(PROJECTS.len() - 1)
    });

    view! {
        <section id="projects" class="relative bg-dark">
            <div node_ref=section_ref class="absolute inset-0 pointer-events-none"></div>
            <ProjectCounter active total=PROJECTS.len() />
            {PROJECTS
                .iter()
                .enumerate()
                .map(|(index, project)| view! { <ProjectCard project index /> })
                .collect_view()}
        </section>
    }
}

/// Sticky circular badge; the displayed number springs between indices the
/// way the cards themselves ease over each other.
#[component]
fn ProjectCounter(active: Memo<usize>, total: usize) -> impl IntoView {
    let i18n = use_i18n();
    let smooth = use_spring(
        Signal::derive(move || active.get() as f64),
        SpringConfig::default(),
    );
    view! {
        <div class="sticky top-[12%] left-[4%] z-[100] pointer-events-none h-0 overflow-visible hidden lg:block">
            <div class="w-[110px] h-[110px] rounded-full border border-white/15 bg-darkMid/90 backdrop-blur-md flex flex-col items-center justify-center gap-1">
                <span class="text-[0.6rem] uppercase tracking-[0.15em] text-neutral">
                    {move || i18n.t("projects.counter").to_uppercase()}
                </span>
                <div class="flex items-center gap-1.5 font-heading">
                    <span class="text-lg font-semibold text-light">
                        {move || format!("{:02}", smooth.get().round() as usize + 1)}
                    </span>
                    <span class="text-neutral text-sm">"|"</span>
                    <span class="text-lg text-neutral">{format!("{total:02}")}</span>
                </div>
            </div>
        </div>
    }
}

#[component]
fn ProjectCard(project: &'static Project, index: usize) -> impl IntoView {
    let i18n = use_i18n();
    let (is_hovered, set_is_hovered) = signal(false);

    view! {
        <div
            class="sticky top-20 h-screen flex items-start justify-center w-[98%] mx-auto py-2"
            style=("z-index", (index + 1).to_string())
        >
            <Reveal
                variant=RevealVariant::FadeUp
                duration=0.6
                class="relative h-[calc(100vh-5rem-1rem)] w-full flex items-center justify-center overflow-hidden rounded-3xl border border-white/[0.08] bg-[rgba(20,25,40,0.85)] px-[clamp(2rem,5vw,6rem)] py-[clamp(1.5rem,4vw,4rem)]"
            >
                // blurred backdrop from the project artwork
                <div
                    class="absolute -top-1/2 -left-[20%] w-[70%] h-[150%] bg-cover bg-center blur-[80px] opacity-40 pointer-events-none"
                    style=("background-image", format!("url({})", project.image))
                ></div>
                <div class="absolute inset-0 pointer-events-none bg-gradient-to-r from-[rgba(30,35,50,0.5)] via-[rgba(30,35,50,0.85)] to-[rgba(30,35,50,0.95)]"></div>
                <div
                    class="absolute inset-0 pointer-events-none"
                    style=(
                        "background",
                        format!(
                            "radial-gradient(circle at 70% 50%, {}20 0%, transparent 60%)",
                            project.color,
                        ),
                    )
                ></div>
                <div
                    class="absolute top-0 left-6 right-6 h-px rounded-t-3xl"
                    style=(
                        "background",
                        format!(
                            "linear-gradient(90deg, transparent 0%, {}60 50%, transparent 100%)",
                            project.color,
                        ),
                    )
                ></div>
                <div class="relative z-[1] grid w-full h-full grid-cols-1 lg:grid-cols-2 items-start">
                    <Reveal
                        variant=RevealVariant::FadeLeft
                        delay=0.2
                        duration=0.7
                        class="self-end pl-[clamp(1rem,3vw,3rem)] pb-[clamp(2rem,4vw,4rem)]"
                    >
                        <span
                            class="text-xs uppercase tracking-[0.2em]"
                            style=("color", project.color)
                        >
                            {project.category}
                        </span>
                        <h2 class="font-heading font-light italic leading-[1.1] mt-2 mb-4 text-[clamp(2rem,5vw,4.5rem)] text-light">
                            {project.title}
                            <br />
                            {project.subtitle}
                        </h2>
                        <p class="text-white/65 leading-[1.8] max-w-[450px] mb-6 text-[clamp(0.9rem,1vw,1rem)]">
                            {project.description}
                        </p>
                        <div class="flex flex-wrap gap-2 mb-6">
                            {project
                                .tags
                                .iter()
                                .map(|tag| {
                                    view! {
                                        <span class="text-xs px-3 py-1 rounded-full border border-white/15 text-neutral">
                                            {*tag}
                                        </span>
                                    }
                                })
                                .collect_view()}
                        </div>
                        {project
                            .url
                            .map(|url| {
                                view! {
                                    <a
                                        href=url
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="inline-flex items-center gap-2 text-sm uppercase tracking-[0.15em] text-light"
                                        on:mouseenter=move |_| set_is_hovered(true)
                                        on:mouseleave=move |_| set_is_hovered(false)
                                    >
                                        {move || i18n.t("projects.visitSite")}
                                        <span
                                            class="transition-transform duration-300"
                                            style:transform=move || {
                                                if is_hovered.get() {
                                                    "translate3d(6px, 0, 0)"
                                                } else {
                                                    "none"
                                                }
                                            }
                                        >
                                            "→"
                                        </span>
                                    </a>
                                }
                            })}
                    </Reveal>
                    <Reveal
                        variant=RevealVariant::FadeRight
                        delay=0.3
                        duration=0.7
                        class="hidden lg:flex items-center justify-center h-full"
                    >
                        <img
                            src=project.image
                            alt=project.title
                            class="max-h-[70%] w-auto rounded-xl border border-white/10 shadow-[0_30px_60px_rgba(0,0,0,0.4)] object-cover"
                            loading="lazy"
                        />
                    </Reveal>
                </div>
            </Reveal>
        </div>
    }
}
