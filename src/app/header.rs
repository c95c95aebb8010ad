use leptos::prelude::*;

use super::QuoteOpen;
use crate::content::{NAV_LINKS, PROFILE};

/// Opens the shared quick quote modal. Renders nothing outside of [`super::App`].
#[component]
pub fn QuoteButton(
    #[prop(default = "Quick quote")] label: &'static str,
    #[prop(default = "px-4 py-2 rounded-md border border-primary/40 text-primary hover:bg-primary/10 transition-colors")]
    button_class: &'static str,
) -> impl IntoView {
    use_context::<QuoteOpen>().map(|QuoteOpen(open)| {
        view! {
            <button type="button" class=button_class on:click=move |_| open.set(true)>
                {label}
            </button>
        }
    })
}

#[component]
pub fn Header() -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);

    view! {
        <header class="sticky top-0 z-40 shadow-lg bg-background/90 backdrop-blur">
            <div class="mx-auto max-w-7xl px-4 sm:px-6 lg:px-8 py-4 flex flex-wrap items-center justify-between gap-4">
                <a href="/" class="flex flex-col">
                    <span class="text-2xl font-bold">{PROFILE.name}</span>
                    <span class="text-xs text-muted">{PROFILE.title}" • "{PROFILE.handle}</span>
                </a>
                <button
                    type="button"
                    class="md:hidden px-3 py-2 rounded-md border border-white/10 text-sm"
                    aria-label="Toggle navigation"
                    aria-expanded=move || menu_open.get().to_string()
                    on:click=move |_| set_menu_open.update(|o| *o = !*o)
                >
                    "☰"
                </button>
                <nav class=move || {
                    if menu_open.get() {
                        "w-full md:w-auto flex flex-col md:flex-row md:items-center gap-4"
                    } else {
                        "hidden md:flex md:flex-row md:items-center gap-4"
                    }
                }>
                    {NAV_LINKS
                        .iter()
                        .map(|(label, href)| {
                            view! {
                                <a
                                    href=*href
                                    class="text-sm text-muted hover:text-foreground transition-colors"
                                    on:click=move |_| set_menu_open.set(false)
                                >
                                    {*label}
                                </a>
                            }
                        })
                        .collect_view()}
                    <QuoteButton />
                    <a
                        href=PROFILE.socials.hire_href()
                        target="_blank"
                        rel="noopener noreferrer"
                        class="px-4 py-2 rounded-md bg-primary text-background font-semibold text-center"
                    >
                        "Hire me"
                    </a>
                </nav>
            </div>
        </header>
    }
}
