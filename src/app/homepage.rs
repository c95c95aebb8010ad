use leptos::prelude::*;
use leptos_meta::Title;

use super::{header::QuoteButton, scope_builder::ScopeBuilderDemo};
use crate::{
    content::{
        Experience, FaqItem, ProcessStep, Project, ProjectDemo, Service, POPULAR_SERVICE, PROFILE,
        RISK_REVERSAL,
    },
    ui::toggle_open,
};

#[component]
fn SectionHeading(anchor: &'static str, title: &'static str, #[prop(optional)] subtitle: Option<&'static str>) -> impl IntoView {
    view! {
        <div id=anchor class="scroll-mt-24 mb-8 space-y-2">
            <h2 class="text-3xl font-bold">{title}</h2>
            {subtitle.map(|s| view! { <p class="text-muted max-w-2xl">{s}</p> })}
        </div>
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <section class="py-16 lg:py-24 space-y-6">
            <div class="text-sm text-muted">
                {PROFILE.title}" • "{PROFILE.location}" • "{PROFILE.languages.join(", ")}
            </div>
            <h1 class="text-4xl lg:text-6xl font-bold">
                "Hi, I'm "<span class="text-primary">{PROFILE.name}</span>
            </h1>
            <p class="text-xl text-cyan font-medium">{PROFILE.headline}</p>
            <p class="text-lg text-muted max-w-3xl">{PROFILE.tagline}</p>
            <div class="flex flex-col sm:flex-row gap-3">
                <a
                    href=PROFILE.socials.hire_href()
                    target="_blank"
                    rel="noopener noreferrer"
                    class="px-6 py-3 rounded-md bg-primary text-background font-semibold text-center"
                >
                    "Hire me on Fiverr"
                </a>
                <QuoteButton
                    label="Get a quick quote"
                    button_class="px-6 py-3 rounded-md border border-primary/40 text-primary hover:bg-primary/10 transition-colors"
                />
                <a href="#projects" class="px-6 py-3 rounded-md border border-white/10 text-center">
                    "See my work"
                </a>
            </div>
        </section>
    }
}

#[component]
fn About() -> impl IntoView {
    view! {
        <section class="py-12">
            <SectionHeading anchor="about" title="About" />
            <div class="grid lg:grid-cols-2 gap-8">
                <div class="space-y-4">
                    {PROFILE
                        .bio
                        .iter()
                        .map(|p| view! { <p class="text-base leading-relaxed">{*p}</p> })
                        .collect_view()}
                    <div class="flex flex-wrap gap-2 pt-2">
                        {PROFILE
                            .skills
                            .iter()
                            .map(|s| {
                                view! {
                                    <span class="px-2 py-1 rounded-full bg-white/5 border border-white/10 text-xs">
                                        {*s}
                                    </span>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
                <div class="grid gap-4">
                    {PROFILE
                        .why_hire_me
                        .iter()
                        .map(|w| {
                            view! {
                                <div class="rounded-xl border border-white/10 bg-white/5 p-4">
                                    <div class="font-semibold">{w.title}</div>
                                    <div class="text-sm text-muted">{w.description}</div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ServiceCard(service: &'static Service, popular: bool) -> impl IntoView {
    let card_class = if popular {
        "relative rounded-2xl border border-primary/40 bg-primary/5 p-6 flex flex-col gap-4"
    } else {
        "relative rounded-2xl border border-white/10 p-6 flex flex-col gap-4"
    };

    view! {
        <div class=card_class>
            {popular
                .then(|| {
                    view! {
                        <div class="absolute -top-3 right-4 px-2 py-1 rounded-full bg-primary text-background text-xs font-bold">
                            "POPULAR"
                        </div>
                    }
                })}
            <div>
                <h3 class="text-xl font-bold">{service.title}</h3>
                <div class="text-2xl font-bold text-primary mt-1">{service.price}</div>
            </div>
            <p class="text-sm text-muted">{service.description}</p>
            <ul class="text-sm space-y-1">
                {service
                    .deliverables
                    .iter()
                    .map(|d| view! { <li>"✓ "{*d}</li> })
                    .collect_view()}
            </ul>
            <div class="text-xs text-muted space-y-1 mt-auto">
                <div>"Turnaround: "{service.turnaround}</div>
                <div>"Requirements: "{service.requirements}</div>
            </div>
            <a
                href=PROFILE.order_href(service)
                target="_blank"
                rel="noopener noreferrer"
                class="px-4 py-2 rounded-md bg-primary text-background font-semibold text-center"
            >
                "Order Now"
            </a>
        </div>
    }
}

#[component]
fn Services() -> impl IntoView {
    view! {
        <section class="py-12">
            <SectionHeading
                anchor="services"
                title="Services"
                subtitle="Fixed packages with a clear scope. Not sure which fits? Get a quick quote."
            />
            <div class="grid md:grid-cols-3 gap-6">
                {PROFILE
                    .services
                    .iter()
                    .enumerate()
                    .map(|(i, service)| view! { <ServiceCard service popular={i == POPULAR_SERVICE} /> })
                    .collect_view()}
            </div>
            <ul class="mt-8 grid sm:grid-cols-2 lg:grid-cols-4 gap-3 text-sm">
                {RISK_REVERSAL
                    .iter()
                    .map(|r| {
                        view! {
                            <li class="rounded-lg border border-white/10 bg-white/5 px-3 py-2">
                                <span class="text-green">"✓ "</span>
                                {*r}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </section>
    }
}

#[component]
fn ProjectCard(project: &'static Project) -> impl IntoView {
    let (demo_open, set_demo_open) = signal(false);

    view! {
        <article class="rounded-2xl border border-white/10 p-6 space-y-4">
            <div class="flex flex-col md:flex-row md:items-start md:justify-between gap-3">
                <div>
                    <h3 class="text-xl font-bold">{project.title}</h3>
                    <p class="text-sm text-muted mt-1">{project.description}</p>
                </div>
                <div class="flex flex-wrap gap-2">
                    {project
                        .tech
                        .iter()
                        .map(|t| {
                            view! {
                                <span class="px-2 py-1 rounded-full bg-white/5 border border-white/10 text-xs">
                                    {*t}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
            <div class="grid md:grid-cols-2 gap-4 text-sm">
                <div>
                    <div class="font-semibold">"Challenge"</div>
                    <p class="text-muted">{project.challenge}</p>
                </div>
                <div>
                    <div class="font-semibold">"Solution"</div>
                    <p class="text-muted">{project.solution}</p>
                </div>
            </div>
            <ul class="text-sm space-y-1">
                {project
                    .highlights
                    .iter()
                    .map(|h| view! { <li>"• "{*h}</li> })
                    .collect_view()}
            </ul>
            {(project.demo == Some(ProjectDemo::ScopeBuilder))
                .then(|| {
                    view! {
                        <button
                            type="button"
                            class="px-4 py-2 rounded-md border border-primary/40 text-primary hover:bg-primary/10"
                            aria-expanded=move || demo_open.get().to_string()
                            on:click=move |_| set_demo_open.update(|o| *o = !*o)
                        >
                            {move || if demo_open.get() { "Close demo" } else { "Open demo" }}
                        </button>
                        <Show when=move || demo_open.get()>
                            <div class="pt-4 border-t border-white/10">
                                <ScopeBuilderDemo />
                            </div>
                        </Show>
                    }
                })}
        </article>
    }
}

#[component]
fn Projects() -> impl IntoView {
    view! {
        <section class="py-12">
            <SectionHeading anchor="projects" title="Projects" />
            <div class="space-y-6">
                {PROFILE
                    .projects
                    .iter()
                    .map(|project| view! { <ProjectCard project /> })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn Process() -> impl IntoView {
    let step = |(i, s): (usize, &'static ProcessStep)| {
        view! {
            <li class="rounded-xl border border-white/10 p-5 space-y-2">
                <div class="text-xs text-muted">"Step "{i + 1}" • "{s.meta}</div>
                <div class="font-semibold">{s.title}</div>
                <p class="text-sm text-muted">{s.description}</p>
            </li>
        }
    };

    view! {
        <section class="py-12">
            <SectionHeading anchor="process" title="How it works" />
            <ol class="grid md:grid-cols-3 gap-4">
                {PROFILE.process_steps.iter().enumerate().map(step).collect_view()}
            </ol>
        </section>
    }
}

#[component]
fn Faq() -> impl IntoView {
    let (open, set_open) = signal(Some(0usize));

    let item = move |(i, faq): (usize, &'static FaqItem)| {
        let is_open = move || open.get() == Some(i);
        view! {
            <div class="rounded-xl border border-white/10">
                <button
                    type="button"
                    class="w-full flex items-center justify-between gap-4 px-5 py-4 text-left font-semibold"
                    aria-expanded=move || is_open().to_string()
                    on:click=move |_| set_open.update(|o| *o = toggle_open(*o, i))
                >
                    {faq.question}
                    <span class="text-muted">{move || if is_open() { "−" } else { "+" }}</span>
                </button>
                <Show when=is_open>
                    <p class="px-5 pb-4 text-sm text-muted">{faq.answer}</p>
                </Show>
            </div>
        }
    };

    view! {
        <section class="py-12">
            <SectionHeading anchor="faq" title="FAQ" />
            <div class="space-y-3">{PROFILE.faq.iter().enumerate().map(item).collect_view()}</div>
        </section>
    }
}

#[component]
fn ExperienceEntry(entry: &'static Experience) -> impl IntoView {
    view! {
        <div class="rounded-xl border border-white/10 p-5 space-y-2">
            <div class="flex flex-col md:flex-row md:justify-between gap-1">
                <div>
                    <div class="font-semibold">{entry.role}</div>
                    <div class="text-sm text-cyan">{entry.company}" • "{entry.kind}</div>
                </div>
                <div class="text-xs text-muted md:text-right">
                    <div>{entry.duration}</div>
                    <div>{entry.location}</div>
                </div>
            </div>
            <p class="text-sm">{entry.description}</p>
            <ul class="text-sm text-muted space-y-1">
                {entry.achievements.iter().map(|a| view! { <li>"• "{*a}</li> }).collect_view()}
            </ul>
        </div>
    }
}

#[component]
fn Background() -> impl IntoView {
    view! {
        <section class="py-12">
            <SectionHeading anchor="experience" title="Experience" />
            <div class="grid lg:grid-cols-3 gap-6">
                <div class="lg:col-span-2 space-y-4">
                    {PROFILE
                        .experience
                        .iter()
                        .map(|entry| view! { <ExperienceEntry entry /> })
                        .collect_view()}
                </div>
                <div class="space-y-6">
                    <div class="space-y-3">
                        <h3 class="text-lg font-bold">"Education"</h3>
                        {PROFILE
                            .education
                            .iter()
                            .map(|e| {
                                view! {
                                    <div class="text-sm">
                                        <div class="font-semibold">{e.school}</div>
                                        <div class="text-muted">{e.degree}" • "{e.year}</div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                    <div class="space-y-3">
                        <h3 class="text-lg font-bold">"Certifications"</h3>
                        {PROFILE
                            .certifications
                            .iter()
                            .map(|c| {
                                view! {
                                    <div class="text-sm">
                                        <div class="font-semibold">{c.name}</div>
                                        <div class="text-muted">{c.issuer}" • "{c.year}</div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <div class="px-4 sm:px-6 lg:px-8">
            <Hero />
            <About />
            <Services />
            <Projects />
            <Process />
            <Faq />
            <Background />
        </div>
    }
}
