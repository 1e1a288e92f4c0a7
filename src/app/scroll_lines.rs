use leptos::prelude::*;

use crate::motion::{use_page_progress, Track};

/// Fixed decorative line that draws itself in as the page scrolls and fades
/// away before the footer.
#[component]
pub fn ScrollLines() -> impl IntoView {
    let progress = use_page_progress();
    let draw = Track::new(vec![
        (0.0, 0.0),
        (0.1, 0.35),
        (0.3, 0.6),
        (0.6, 0.85),
        (0.9, 1.0),
    ])
    .expect("draw track is monotonic");
    let fade = Track::new(vec![(0.85, 1.0), (0.95, 0.3), (1.0, 0.0)])
        .expect("fade track is monotonic");

    view! {
        <div
            class="fixed inset-0 w-screen h-screen pointer-events-none z-[1] overflow-hidden"
            style:opacity=move || format!("{:.4}", fade.sample(progress.get()))
        >
            <svg
                width="100%"
                height="100%"
                viewBox="0 0 100 100"
                preserveAspectRatio="none"
                class="absolute inset-0 w-full h-full"
            >
                // one smooth flowing line down the right side; pathLength=1
                // normalizes so the dash offset scrubs the draw directly
                <path
                    d="M 95 0
                       C 90 8, 85 12, 80 18
                       C 72 26, 78 35, 70 45
                       C 62 55, 72 62, 65 72
                       C 58 82, 68 90, 60 100"
                    fill="none"
                    stroke="rgba(255, 255, 255, 0.4)"
                    stroke-width="0.1"
                    stroke-linecap="round"
                    stroke-linejoin="round"
                    pathLength="1"
                    style=("stroke-dasharray", "1")
                    style=(
                        "stroke-dashoffset",
                        move || format!("{:.4}", 1.0 - draw.sample(progress.get())),
                    )
                />
            </svg>
        </div>
    }
}
