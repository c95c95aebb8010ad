use chrono::Datelike;
use leptos::prelude::*;

use crate::{content::PROFILE, ui::build_time};

#[component]
pub fn Footer() -> impl IntoView {
    let built = build_time();
    let year = built.map(|dt| dt.year().to_string());
    let built_on = built.map(|dt| dt.format("%b %-d, %Y").to_string());

    view! {
        <footer class="mt-16 border-t border-white/10">
            <div class="mx-auto max-w-7xl px-4 sm:px-6 lg:px-8 py-8 flex flex-col md:flex-row items-center justify-between gap-4 text-sm text-muted">
                <div>
                    "© "{year}" "{PROFILE.name}". Built with Rust + Leptos."
                    {built_on.map(|d| view! { <span class="ml-2 text-xs">"Last built "{d}</span> })}
                </div>
                <div class="flex gap-4">
                    <a
                        href=PROFILE.socials.fiverr
                        target="_blank"
                        rel="noopener noreferrer"
                        class="hover:text-foreground"
                    >
                        "Fiverr"
                    </a>
                    <a
                        href=PROFILE.socials.linkedin
                        target="_blank"
                        rel="noopener noreferrer"
                        class="hover:text-foreground"
                    >
                        "LinkedIn"
                    </a>
                    <a
                        href=PROFILE.socials.github
                        target="_blank"
                        rel="noopener noreferrer"
                        class="hover:text-foreground"
                    >
                        "GitHub"
                    </a>
                    {PROFILE
                        .socials
                        .email()
                        .map(|email| view! { <a href=email class="hover:text-foreground">"Email"</a> })}
                </div>
            </div>
        </footer>
    }
}
