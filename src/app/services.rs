use leptos::{html, prelude::*};

use crate::i18n::use_i18n;
use crate::motion::{
    use_scroll_progress, use_spring, Channels, DepthRig, ScrollWindow, SpringConfig, Track,
};

struct Service {
    key: &'static str,
    image: &'static str,
}

static SERVICES: [Service; 6] = [
    Service {
        key: "devops",
        image: "/images/services/devops.jpg",
    },
    Service {
        key: "web",
        image: "/images/services/web.jpg",
    },
    Service {
        key: "backend",
        image: "/images/services/backend.jpg",
    },
    Service {
        key: "mobile",
        image: "/images/services/mobile.jpg",
    },
    Service {
        key: "maps",
        image: "/images/services/maps.jpg",
    },
    Service {
        key: "payments",
        image: "/images/services/payments.jpg",
    },
];

/// Placement of each floating image around the central text, as
/// (left %, top %, width px, height px). Spots ring the center without
/// covering it.
const IMAGE_POSITIONS: [(f64, f64, f64, f64); 6] = [
    (18.0, 8.0, 260.0, 320.0),
    (62.0, 5.0, 240.0, 200.0),
    (16.0, 55.0, 240.0, 300.0),
    (60.0, 52.0, 250.0, 320.0),
    (22.0, 28.0, 220.0, 270.0),
    (58.0, 26.0, 230.0, 280.0),
];

/// Viewport-heights of scroll distance the scene spreads over; more height
/// slows the animation down.
const SCROLL_MULTIPLIER: usize = 6;

/// Scroll-driven depth scene: the section is a tall scroll track with a
/// sticky full-screen viewport inside it. As the user scrubs through, each
/// image emerges from far depth, passes the viewer, and hands off to the
/// next, while the central text holds the middle of the frame.
#[component]
pub fn Services() -> impl IntoView {
    let section_ref = NodeRef::<html::Div>::new();
    let raw = use_scroll_progress(section_ref, ScrollWindow::FULL_SECTION);
    // smooth the scrub so fast flicks read as camera motion
    let progress = use_spring(raw, SpringConfig::scroll());

    view! {
        <section
            id="services"
            class="relative bg-deeper"
            style:height=format!("{}vh", 100 * SCROLL_MULTIPLIER)
        >
            <div node_ref=section_ref class="absolute inset-0 pointer-events-none"></div>
            <div
                class="sticky top-0 h-screen w-full overflow-hidden"
                style=("perspective", "1500px")
                style=("perspective-origin", "50% 50%")
            >
                <div class="relative w-full h-full" style=("transform-style", "preserve-3d")>
                    {SERVICES
                        .iter()
                        .enumerate()
                        .map(|(index, service)| view! { <DepthImage index service progress /> })
                        .collect_view()}
                    <CentralContent progress />
                </div>
            </div>
        </section>
    }
}

#[component]
fn DepthImage(index: usize, service: &'static Service, progress: Signal<f64>) -> impl IntoView {
    let i18n = use_i18n();
    let (left, top, width, height) = IMAGE_POSITIONS[index];
    let rig =
        DepthRig::new(index, SERVICES.len(), width).expect("depth rig tracks are monotonic");
    // one snapshot per frame feeds every bound style property
    let channels = Memo::new(move |_| rig.sample(progress.get()));

    view! {
        <div
            class="absolute pointer-events-none"
            style:left=format!("{left}%")
            style:top=format!("{top}%")
            style:width=format!("{width}px")
            style:height=format!("{height}px")
            style:transform=move || channels.get().transform()
            style:opacity=move || channels.get().opacity()
            style:filter=move || channels.get().filter()
            style=("transform-style", "preserve-3d")
            style=("transform-origin", "center center")
            style=("will-change", "transform, opacity, filter")
        >
            <div class="relative w-full h-full rounded-2xl overflow-hidden border border-white/10 bg-darkMid shadow-[0_30px_60px_rgba(0,0,0,0.4)]">
                <img
                    src=service.image
                    alt=move || i18n.t(&format!("services.{}.title", service.key))
                    class="block w-full h-full object-cover"
                    loading="lazy"
                />
                <div class="absolute bottom-0 left-0 right-0 p-6 bg-gradient-to-t from-black/85 via-black/40 to-transparent">
                    <span class="font-heading font-medium text-white tracking-tight">
                        {move || i18n.t(&format!("services.{}.title", service.key))}
                    </span>
                </div>
            </div>
        </div>
    }
}

/// Central text that fades in early and holds until the scene winds down.
#[component]
fn CentralContent(progress: Signal<f64>) -> impl IntoView {
    let i18n = use_i18n();
    let fade = Track::new(vec![(0.0, 0.0), (0.1, 1.0), (0.85, 1.0), (0.95, 0.0)])
        .expect("central fade track is monotonic");
    let rise = Track::new(vec![(0.0, 40.0), (0.1, 0.0)]).expect("central rise track is monotonic");
    let channels = Memo::new(move |_| {
        let p = progress.get();
        Channels {
            y: rise.sample(p),
            opacity: fade.sample(p),
            ..Channels::default()
        }
    });

    view! {
        <div
            class="absolute inset-0 flex flex-col items-center justify-center text-center px-[5%] pointer-events-none"
            style:transform=move || channels.get().transform()
            style:opacity=move || channels.get().opacity()
        >
            <span class="text-sm uppercase tracking-[0.2em] text-neutral mb-4">
                {move || i18n.t("services.label")}
            </span>
            <h2 class="font-heading font-light tracking-[-0.02em] text-light text-[clamp(2.5rem,6vw,5rem)]">
                {move || i18n.t("services.title")}
            </h2>
            <p class="mt-6 max-w-[520px] text-neutralLight leading-relaxed text-[clamp(1rem,1.5vw,1.2rem)]">
                {move || i18n.t("services.description")}
            </p>
        </div>
    }
}
