use leptos::prelude::*;

use crate::i18n::{use_i18n, Lang};

struct NavLink {
    key: &'static str,
    href: &'static str,
}

static NAV_LINKS: [NavLink; 4] = [
    NavLink {
        key: "projects",
        href: "/#projects",
    },
    NavLink {
        key: "about",
        href: "/about",
    },
    NavLink {
        key: "services",
        href: "/#services",
    },
    NavLink {
        key: "contact",
        href: "/#contact",
    },
];

#[component]
pub fn Header() -> impl IntoView {
    let i18n = use_i18n();
    let (is_open, set_is_open) = signal(false);

    view! {
        <header class="header-enter fixed top-0 left-0 right-0 z-[100] grid grid-cols-[1fr_2fr] items-center px-[5%] py-6 bg-dark/90 backdrop-blur-md">
            <a href="/" class="font-heading text-lg tracking-wide text-light">
                "Ghassen Gasmi"
            </a>
            <div class="hidden md:flex items-center justify-end gap-8">
                <nav class="flex items-center gap-8">
                    {NAV_LINKS
                        .iter()
                        .map(|link| {
                            let key = format!("nav.{}", link.key);
                            view! {
                                <a
                                    href=link.href
                                    class="text-sm uppercase tracking-[0.15em] text-neutral hover:text-light transition-colors duration-300"
                                >
                                    {move || i18n.t(&key)}
                                </a>
                            }
                        })
                        .collect_view()}
                </nav>
                <LangSwitcher />
                <a
                    href="mailto:gasmi.ghassen@gmail.com"
                    class="text-sm uppercase tracking-[0.15em] px-5 py-2 border border-light/20 rounded-full text-light hover:bg-light/10 transition-colors duration-300"
                >
                    {move || i18n.t("nav.hire")}
                </a>
            </div>
            <button
                class="md:hidden justify-self-end flex flex-col gap-1.5 p-2"
                aria-label="Toggle menu"
                on:click=move |_| set_is_open.update(|open| *open = !*open)
            >
                <span class=move || {
                    if is_open.get() {
                        "w-6 h-px bg-light transition-transform duration-300 rotate-45 translate-y-[3.5px]"
                    } else {
                        "w-6 h-px bg-light transition-transform duration-300"
                    }
                }></span>
                <span class=move || {
                    if is_open.get() {
                        "w-6 h-px bg-light transition-transform duration-300 -rotate-45 -translate-y-[3.5px]"
                    } else {
                        "w-6 h-px bg-light transition-transform duration-300"
                    }
                }></span>
            </button>
        </header>
        <Show when=move || is_open.get()>
            <div class="fixed inset-0 z-[99] md:hidden bg-dark/95 backdrop-blur-lg flex flex-col items-center justify-center gap-8">
                {NAV_LINKS
                    .iter()
                    .map(|link| {
                        let key = format!("nav.{}", link.key);
                        view! {
                            <a
                                href=link.href
                                class="font-heading text-3xl text-light"
                                on:click=move |_| set_is_open(false)
                            >
                                {move || i18n.t(&key)}
                            </a>
                        }
                    })
                    .collect_view()}
                <LangSwitcher />
            </div>
        </Show>
    }
}

/// Language toggle shared by the header and the footer.
#[component]
pub fn LangSwitcher() -> impl IntoView {
    let i18n = use_i18n();
    view! {
        <div class="flex items-center gap-2">
            {Lang::ALL
                .iter()
                .map(|&lang| {
                    view! {
                        <button
                            class=move || {
                                if i18n.lang() == lang {
                                    "text-xs tracking-[0.1em] px-2 py-1 rounded text-light bg-light/10"
                                } else {
                                    "text-xs tracking-[0.1em] px-2 py-1 rounded text-neutral hover:text-light"
                                }
                            }
                            aria-label=lang.label()
                            on:click=move |_| i18n.set_lang(lang)
                        >
                            <span class="mr-1">{lang.flag()}</span>
                            {lang.label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
