use leptos::prelude::*;

use super::sinks::{CopyButton, DownloadButton};
use crate::{
    content::PROFILE,
    scope::{
        parse_pages, Animations, Deadline, DesignSource, Forms, ProjectType, ScopeController,
        MAX_PAGES, MIN_PAGES, SCOPE_FILE_NAME,
    },
    ui::{next_step, panel_risks, prev_step, TOTAL_STEPS},
};

#[derive(Debug, Clone, Copy)]
struct Choice<T> {
    value: T,
    title: &'static str,
    description: Option<&'static str>,
}

const fn card<T>(value: T, title: &'static str, description: &'static str) -> Choice<T> {
    Choice {
        value,
        title,
        description: Some(description),
    }
}

const fn pill<T>(value: T, title: &'static str) -> Choice<T> {
    Choice {
        value,
        title,
        description: None,
    }
}

static PROJECT_CHOICES: [Choice<ProjectType>; 4] = [
    card(ProjectType::UiConversion, "UI Conversion", "Figma → React/Tailwind"),
    card(ProjectType::LandingPage, "Landing Page", "High-converting marketing page"),
    card(ProjectType::Dashboard, "Dashboard", "Interactive UI + data views"),
    card(ProjectType::Bugfix, "Bug Fix / Refactor", "Clean up + performance"),
];

static DESIGN_CHOICES: [Choice<DesignSource>; 3] = [
    card(DesignSource::Figma, "Figma", "Best & fastest"),
    card(DesignSource::Screenshots, "Screenshots", "OK, needs review"),
    card(DesignSource::None, "Not yet", "I can guide you"),
];

static ANIMATION_CHOICES: [Choice<Animations>; 3] = [
    pill(Animations::None, "None"),
    pill(Animations::Basic, "Basic"),
    pill(Animations::Premium, "Premium"),
];

static FORM_CHOICES: [Choice<Forms>; 3] = [
    pill(Forms::None, "None"),
    pill(Forms::Simple, "Simple"),
    pill(Forms::Advanced, "Advanced"),
];

static DEADLINE_CHOICES: [Choice<Deadline>; 2] = [
    card(Deadline::Normal, "Normal", "Best value + flexible revisions"),
    card(Deadline::Rush, "Rush", "Faster delivery (limited revisions)"),
];

#[component]
fn FieldLabel(label: &'static str, #[prop(optional)] hint: Option<&'static str>) -> impl IntoView {
    view! {
        <div class="space-y-1">
            <div class="text-sm font-semibold">{label}</div>
            {hint.map(|h| view! { <div class="text-xs text-muted">{h}</div> })}
        </div>
    }
}

#[component]
fn OptionGrid<T>(choices: &'static [Choice<T>], selected: Signal<T>, on_pick: Callback<T>) -> impl IntoView
where
    T: Copy + PartialEq + Send + Sync + 'static,
{
    let is_grid = choices.iter().any(|c| c.description.is_some());
    let layout = if is_grid { "grid sm:grid-cols-2 gap-3" } else { "inline-flex flex-wrap gap-2" };

    view! {
        <div class=layout>
            {choices
                .iter()
                .map(|c| {
                    let value = c.value;
                    let active = move || selected.get() == value;
                    let class = move || match (is_grid, active()) {
                        (true, true) => "text-left rounded-xl border p-4 transition-colors border-primary/40 bg-primary/10",
                        (true, false) => "text-left rounded-xl border p-4 transition-colors border-white/10 bg-white/5 hover:bg-white/10",
                        (false, true) => "px-3 py-2 rounded-md border text-sm transition-colors bg-primary/20 border-primary/30",
                        (false, false) => "px-3 py-2 rounded-md border text-sm transition-colors bg-white/5 border-white/10 text-muted hover:bg-white/10",
                    };
                    view! {
                        <button
                            type="button"
                            class=class
                            aria-pressed=move || active().to_string()
                            on:click=move |_| on_pick.run(value)
                        >
                            <div class="text-sm font-semibold">{c.title}</div>
                            {c.description.map(|d| view! { <div class="text-xs text-muted mt-1">{d}</div> })}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn ScopeBuilderDemo() -> impl IntoView {
    let scope = RwSignal::new(ScopeController::default().with_external_link(PROFILE.socials.hire_href()));
    let (step, set_step) = signal(0usize);

    let scope_text = Signal::derive(move || scope.with(|s| s.scope_document().to_string()));
    let price = move || scope.with(|s| s.summary().price_text.clone());
    let timeline = move || scope.with(|s| s.summary().timeline_text.clone());
    let package = move || scope.with(|s| s.summary().recommended_package);

    let step_one = move || {
        view! {
            <FieldLabel label="What do you need built?" />
            <OptionGrid
                choices=&PROJECT_CHOICES[..]
                selected=Signal::derive(move || scope.with(|s| s.state().project_type))
                on_pick=Callback::new(move |v| scope.update(|s| s.set_project_type(v)))
            />
            <FieldLabel label="Do you have a design file?" />
            <OptionGrid
                choices=&DESIGN_CHOICES[..]
                selected=Signal::derive(move || scope.with(|s| s.state().design_source))
                on_pick=Callback::new(move |v| scope.update(|s| s.set_design_source(v)))
            />
        }
    };

    let step_two = move || {
        view! {
            <FieldLabel
                label="How many sections/pages?"
                hint="For a landing page, think hero+sections. For a dashboard, think views."
            />
            <div class="flex items-center gap-3">
                <input
                    type="range"
                    min=MIN_PAGES
                    max=MAX_PAGES
                    class="w-full"
                    prop:value=move || scope.with(|s| s.state().pages_or_sections.to_string())
                    on:input=move |ev| {
                        if let Ok(n) = parse_pages(&event_target_value(&ev)) {
                            scope.update(|s| s.set_pages_or_sections(n));
                        }
                    }
                />
                <div class="w-14 text-center rounded-md border border-white/10 bg-white/5 py-2 text-sm font-semibold">
                    {move || scope.with(|s| s.state().pages_or_sections)}
                </div>
            </div>
            <div class="grid md:grid-cols-2 gap-4">
                <div class="space-y-2">
                    <FieldLabel label="Animations" />
                    <OptionGrid
                        choices=&ANIMATION_CHOICES[..]
                        selected=Signal::derive(move || scope.with(|s| s.state().animations))
                        on_pick=Callback::new(move |v| scope.update(|s| s.set_animations(v)))
                    />
                </div>
                <div class="space-y-2">
                    <FieldLabel label="Forms" />
                    <OptionGrid
                        choices=&FORM_CHOICES[..]
                        selected=Signal::derive(move || scope.with(|s| s.state().forms))
                        on_pick=Callback::new(move |v| scope.update(|s| s.set_forms(v)))
                    />
                </div>
            </div>
            <div class="flex items-center justify-between gap-3 rounded-lg border border-white/10 bg-white/5 px-4 py-3">
                <div class="space-y-0.5">
                    <div class="text-sm font-semibold">"Deployment"</div>
                    <div class="text-xs text-muted">"Netlify/Vercel deploy included"</div>
                </div>
                <button
                    type="button"
                    class=move || {
                        if scope.with(|s| s.state().deployment) {
                            "h-9 w-16 rounded-full border relative bg-primary/30 border-primary/40"
                        } else {
                            "h-9 w-16 rounded-full border relative bg-white/5 border-white/15"
                        }
                    }
                    aria-pressed=move || scope.with(|s| s.state().deployment.to_string())
                    on:click=move |_| scope.update(|s| s.toggle_deployment())
                >
                    <span class=move || {
                        if scope.with(|s| s.state().deployment) {
                            "absolute top-1 h-7 w-7 rounded-full bg-white translate-x-8"
                        } else {
                            "absolute top-1 h-7 w-7 rounded-full bg-white translate-x-1"
                        }
                    } />
                </button>
            </div>
        }
    };

    let step_three = move || {
        view! {
            <FieldLabel label="Deadline" />
            <OptionGrid
                choices=&DEADLINE_CHOICES[..]
                selected=Signal::derive(move || scope.with(|s| s.state().deadline))
                on_pick=Callback::new(move |v| scope.update(|s| s.set_deadline(v)))
            />
            <div class="rounded-lg border border-primary/20 bg-primary/10 p-4">
                <div class="text-sm font-semibold">"Recommended package"</div>
                <div class="text-sm text-muted">
                    <span class="text-foreground font-semibold">{package}</span>
                    " • "
                    {timeline}
                    " • "
                    {price}
                </div>
                <div class="text-xs text-muted mt-1">
                    "This is a preview estimate. Final scope is confirmed before work begins."
                </div>
            </div>
        }
    };

    view! {
        <div class="space-y-6">
            <div class="flex flex-col md:flex-row md:items-start md:justify-between gap-4">
                <div>
                    <div class="text-sm text-muted">"Interactive Demo"</div>
                    <h3 class="text-2xl font-bold">"Contract-Grade Scope Builder"</h3>
                    <p class="text-sm text-muted mt-1 max-w-2xl">
                        "Answer a few questions and get a clean scope summary, price range, and timeline, ready to send on Fiverr."
                    </p>
                </div>
                <div class="px-2 py-1 rounded-full bg-white/5 border border-white/10 text-xs text-muted">
                    "Step "
                    <span class="text-foreground font-semibold">{move || step.get() + 1}</span>
                    {format!(" / {TOTAL_STEPS}")}
                </div>
            </div>

            <div class="grid lg:grid-cols-2 gap-6">
                <div class="rounded-xl border border-white/10 p-5">
                    <div class="flex items-center justify-between">
                        <div class="text-sm font-semibold">"Build your scope"</div>
                        <div class="flex gap-2">
                            <button
                                type="button"
                                class="px-3 py-1 rounded-md border border-white/10 text-sm disabled:opacity-40"
                                disabled=move || step.get() == 0
                                on:click=move |_| set_step.update(|s| *s = prev_step(*s))
                            >
                                "Back"
                            </button>
                            <button
                                type="button"
                                class="px-3 py-1 rounded-md bg-primary text-background text-sm disabled:opacity-40"
                                disabled=move || step.get() == TOTAL_STEPS - 1
                                on:click=move |_| set_step.update(|s| *s = next_step(*s))
                            >
                                "Next"
                            </button>
                        </div>
                    </div>
                    <div class="mt-5 space-y-5">
                        {move || match step.get() {
                            0 => step_one().into_any(),
                            1 => step_two().into_any(),
                            _ => step_three().into_any(),
                        }}
                    </div>
                </div>

                <div class="rounded-xl border border-white/10 bg-white/5 p-5">
                    <div class="flex items-center justify-between gap-3">
                        <div class="text-sm font-semibold">"Generated scope"</div>
                        <div class="flex gap-2">
                            <CopyButton text=scope_text />
                            <DownloadButton text=scope_text file_name=SCOPE_FILE_NAME />
                        </div>
                    </div>
                    <div class="mt-4 grid md:grid-cols-2 gap-4">
                        <div class="rounded-xl border border-white/10 p-4 space-y-2">
                            <div class="text-xs uppercase tracking-wider text-muted font-semibold">
                                "Estimate"
                            </div>
                            <div class="text-lg font-bold">{price}</div>
                            <div class="text-sm text-muted">{timeline}</div>
                            <div class="text-sm text-muted">
                                "Package: "
                                <span class="text-foreground font-semibold">{package}</span>
                            </div>
                        </div>
                        <div class="rounded-xl border border-white/10 p-4 space-y-2">
                            <div class="text-xs uppercase tracking-wider text-muted font-semibold">
                                "Risk flags"
                            </div>
                            {move || {
                                let risks = scope.with(|s| panel_risks(&s.summary().risks).to_vec());
                                if risks.is_empty() {
                                    view! {
                                        <div class="text-sm text-muted">
                                            "No flags. Looks straightforward."
                                        </div>
                                    }
                                        .into_any()
                                } else {
                                    view! {
                                        <ul class="space-y-1 text-sm text-muted">
                                            {risks
                                                .into_iter()
                                                .map(|r| {
                                                    view! {
                                                        <li class="flex items-start gap-2">
                                                            <span class="text-yellow">"⚠"</span>
                                                            <span>{r}</span>
                                                        </li>
                                                    }
                                                })
                                                .collect_view()}
                                        </ul>
                                    }
                                        .into_any()
                                }
                            }}
                        </div>
                    </div>
                    <div class="mt-4 rounded-xl border border-white/10 p-4">
                        <div class="text-xs uppercase tracking-wider text-muted font-semibold">
                            "Scope summary (copy/paste)"
                        </div>
                        <pre class="mt-3 text-xs leading-relaxed overflow-auto max-h-[260px] rounded-lg bg-black/30 border border-white/10 p-3 whitespace-pre-wrap">
                            {move || scope_text.get()}
                        </pre>
                    </div>
                    <div class="mt-4 flex flex-col sm:flex-row gap-3">
                        <a
                            href=PROFILE.socials.hire_href()
                            target="_blank"
                            rel="noopener noreferrer"
                            class="flex-1 px-4 py-2 rounded-md bg-primary text-background font-semibold text-center"
                        >
                            "Continue on Fiverr"
                        </a>
                        <a
                            href="#services"
                            class="flex-1 px-4 py-2 rounded-md border border-white/10 text-center"
                        >
                            "Compare packages"
                        </a>
                    </div>
                </div>
            </div>

            <div class="text-xs text-muted">
                "Note: this is a demo. Real project scopes are confirmed in writing before coding begins."
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scope::ScopeOption;

    #[test]
    fn test_choices_cover_every_option() {
        assert_eq!(PROJECT_CHOICES.len(), ProjectType::all().len());
        assert_eq!(DESIGN_CHOICES.len(), DesignSource::all().len());
        assert_eq!(ANIMATION_CHOICES.len(), Animations::all().len());
        assert_eq!(FORM_CHOICES.len(), Forms::all().len());
        assert_eq!(DEADLINE_CHOICES.len(), Deadline::all().len());
    }
}
