use leptos::{ev, prelude::*};

use super::sinks::CopyButton;
use crate::{
    content::PROFILE,
    scope::{
        parse_pages, Deadline, DesignSource, ProjectType, ScopeController, ScopeOption,
        ScopeState, MAX_PAGES, MIN_PAGES,
    },
};

const FIELD_CLASS: &str = "w-full rounded-md border border-white/10 bg-white/5 px-3 py-2 text-sm focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-primary";

fn initial_quote() -> ScopeController {
    ScopeController::new(ScopeState::quick_quote(
        ProjectType::UiConversion,
        DesignSource::Figma,
        3,
        Deadline::Normal,
    ))
    .with_external_link(PROFILE.socials.hire_href())
}

/// Select over every value of a scope option, writing back through `on_pick`.
#[component]
fn OptionSelect<T>(
    label: &'static str,
    selected: Signal<T>,
    on_pick: Callback<T>,
) -> impl IntoView
where
    T: ScopeOption + Send + Sync,
{
    view! {
        <label class="space-y-2 block">
            <div class="text-sm font-semibold">{label}</div>
            <select
                class=FIELD_CLASS
                on:change=move |ev| {
                    match T::parse(&event_target_value(&ev)) {
                        Ok(v) => on_pick.run(v),
                        Err(e) => log::warn!("{e}"),
                    }
                }
            >
                {T::all()
                    .iter()
                    .map(|o| {
                        let o = *o;
                        view! {
                            <option value=o.as_str() selected=move || selected.get() == o>
                                {o.label()}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </label>
    }
}

#[component]
pub fn QuickQuoteModal(open: RwSignal<bool>) -> impl IntoView {
    let quote = RwSignal::new(initial_quote());

    let close = move || open.set(false);
    let handle = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" && open.get_untracked() {
            close();
        }
    });
    on_cleanup(move || handle.remove());

    let summary = move |f: fn(&crate::scope::ScopeSummary) -> String| {
        move || quote.with(|q| f(q.summary()))
    };
    let message = Signal::derive(move || quote.with(|q| q.outreach_message().to_string()));

    view! {
        <Show when=move || open.get()>
            <div
                class="fixed inset-0 z-50 flex items-center justify-center bg-black/60 backdrop-blur-sm p-4"
                on:click=move |_| close()
            >
                <div
                    role="dialog"
                    aria-modal="true"
                    aria-labelledby="quick-quote-title"
                    class="w-full max-w-5xl max-h-[90vh] overflow-y-auto rounded-2xl border border-white/10 bg-background p-6 shadow-2xl"
                    on:click=|ev| ev.stop_propagation()
                >
                    <div class="flex items-start justify-between gap-4">
                        <div>
                            <h2 id="quick-quote-title" class="text-2xl font-bold">
                                "Get a fast quote"
                            </h2>
                            <p class="text-sm text-muted mt-1">
                                "Answer a few questions and copy a ready-to-send Fiverr message."
                            </p>
                        </div>
                        <button
                            type="button"
                            aria-label="Close"
                            class="text-muted hover:text-foreground"
                            on:click=move |_| close()
                        >
                            "✕"
                        </button>
                    </div>

                    <div class="grid md:grid-cols-2 gap-6 mt-6">
                        <div class="rounded-xl border border-white/10 p-5 space-y-5">
                            <div class="text-sm font-semibold">"Quick brief"</div>
                            <OptionSelect
                                label="Project type"
                                selected=Signal::derive(move || {
                                    quote.with(|q| q.state().project_type)
                                })
                                on_pick=Callback::new(move |v| {
                                    quote.update(|q| q.set_project_type(v))
                                })
                            />
                            <div class="grid sm:grid-cols-2 gap-4">
                                <OptionSelect
                                    label="Design source"
                                    selected=Signal::derive(move || {
                                        quote.with(|q| q.state().design_source)
                                    })
                                    on_pick=Callback::new(move |v| {
                                        quote.update(|q| q.set_design_source(v))
                                    })
                                />
                                <OptionSelect
                                    label="Deadline"
                                    selected=Signal::derive(move || {
                                        quote.with(|q| q.state().deadline)
                                    })
                                    on_pick=Callback::new(move |v| {
                                        quote.update(|q| q.set_deadline(v))
                                    })
                                />
                            </div>
                            <div class="space-y-2">
                                <div class="text-sm font-semibold">"Sections/pages"</div>
                                <div class="flex items-center gap-3">
                                    <input
                                        type="range"
                                        min=MIN_PAGES
                                        max=MAX_PAGES
                                        class="w-full"
                                        prop:value=move || {
                                            quote.with(|q| q.state().pages_or_sections.to_string())
                                        }
                                        on:input=move |ev| {
                                            if let Ok(n) = parse_pages(&event_target_value(&ev)) {
                                                quote.update(|q| q.set_pages_or_sections(n));
                                            }
                                        }
                                    />
                                    <div class="w-14 text-center rounded-md border border-white/10 bg-white/5 py-2 text-sm font-semibold">
                                        {move || quote.with(|q| q.state().pages_or_sections)}
                                    </div>
                                </div>
                                <div class="text-xs text-muted">
                                    "Keep it simple. You can refine scope after the first reply."
                                </div>
                            </div>
                            <label class="space-y-2 block">
                                <div class="text-sm font-semibold">"Design link (optional)"</div>
                                <input
                                    type="url"
                                    placeholder="Figma link / Drive link / Screenshot link"
                                    class=FIELD_CLASS
                                    prop:value=move || quote.with(|q| q.design_link().to_string())
                                    on:input=move |ev| {
                                        let link = event_target_value(&ev);
                                        quote.update(|q| q.set_design_link(link));
                                    }
                                />
                            </label>
                            <label class="space-y-2 block">
                                <div class="text-sm font-semibold">"Notes (optional)"</div>
                                <textarea
                                    rows=4
                                    placeholder="Anything important: brand colors, example sites, must-have sections, etc."
                                    class=FIELD_CLASS
                                    prop:value=move || quote.with(|q| q.notes().to_string())
                                    on:input=move |ev| {
                                        let notes = event_target_value(&ev);
                                        quote.update(|q| q.set_notes(notes));
                                    }
                                ></textarea>
                            </label>
                        </div>

                        <div class="rounded-xl border border-white/10 bg-white/5 p-5">
                            <div class="text-sm font-semibold">"Preview"</div>
                            <div class="mt-4 grid grid-cols-2 gap-3">
                                <div class="rounded-lg border border-white/10 p-3">
                                    <div class="text-xs uppercase tracking-wider text-muted font-semibold">
                                        "Estimate"
                                    </div>
                                    <div class="text-lg font-bold mt-1">
                                        {summary(|s| s.price_text.clone())}
                                    </div>
                                    <div class="text-xs text-muted mt-1">
                                        {summary(|s| s.timeline_text.clone())}
                                    </div>
                                </div>
                                <div class="rounded-lg border border-white/10 p-3">
                                    <div class="text-xs uppercase tracking-wider text-muted font-semibold">
                                        "Package"
                                    </div>
                                    <div class="text-sm font-semibold mt-2">
                                        {summary(|s| s.recommended_package.to_string())}
                                    </div>
                                    <div class="text-xs text-muted mt-1">"Preview only"</div>
                                </div>
                            </div>
                            <div class="mt-4 rounded-xl border border-white/10 p-4">
                                <div class="text-xs uppercase tracking-wider text-muted font-semibold">
                                    "Copy/paste message"
                                </div>
                                <pre class="mt-3 text-xs leading-relaxed overflow-auto max-h-[320px] rounded-lg bg-black/30 border border-white/10 p-3 whitespace-pre-wrap">
                                    {move || message.get()}
                                </pre>
                            </div>
                        </div>
                    </div>

                    <div class="mt-6 flex flex-col sm:flex-row sm:items-center sm:justify-between gap-3">
                        <div class="text-xs text-muted">
                            "Tip: Copy the message → open Fiverr → paste → send."
                        </div>
                        <div class="flex flex-col sm:flex-row gap-2">
                            <CopyButton text=message idle_label="Copy message" />
                            <a
                                href=PROFILE.socials.hire_href()
                                target="_blank"
                                rel="noopener noreferrer"
                                class="px-4 py-2 rounded-md bg-primary text-background font-semibold text-center"
                            >
                                "Open Fiverr ↗"
                            </a>
                        </div>
                    </div>
                </div>
            </div>
        </Show>
    }
}
