use leptos::prelude::*;
use leptos_meta::Title;
use leptos_use::{use_interval_fn, use_window_scroll, utils::Pausable};

use super::{
    contact::ContactSection,
    projects::ProjectsSection,
    ui::{
        Button, ButtonVariant, Card, CardContent, GhostLinkButton, IconGlyph,
        SectionTitle, StatCard,
    },
};
use crate::{
    content::{skills_by_category, stats, Icon, EXPERIENCE, PROFILE, SKILLS},
    state::{show_back_to_top, Typewriter, TYPEWRITER_INTERVAL_MS},
};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <Hero />
        <Highlights />
        <ProjectsSection />
        <Skills />
        <ExperienceTimeline />
        <ContactSection />
        <Footer />
        <ScrollToTop />
    }
}

#[component]
fn Hero() -> impl IntoView {
    let (typewriter, set_typewriter) = signal(Typewriter::new(PROFILE.title));
    let Pausable { pause, .. } = use_interval_fn(
        move || {
            set_typewriter.update(|t| {
                t.tick();
            })
        },
        TYPEWRITER_INTERVAL_MS,
    );
    Effect::new(move |_| {
        if typewriter.with(|t| t.is_complete()) {
            pause();
        }
    });

    view! {
        <section class="relative overflow-hidden">
            <div class="max-w-6xl mx-auto px-4 pt-16 pb-8 animate-rise">
                <h1 class="text-3xl sm:text-5xl font-bold tracking-tight text-white">
                    {PROFILE.name}
                </h1>
                <p class="mt-2 text-lg text-purple-300 min-h-7">
                    <span class="sr-only">{PROFILE.title}</span>
                    <span aria-hidden="true">{move || typewriter.with(|t| t.visible())}</span>
                    <span
                        aria-hidden="true"
                        class=move || {
                            if typewriter.with(|t| t.is_complete()) { "hidden" } else { "animate-pulse" }
                        }
                    >
                        "▍"
                    </span>
                </p>
                {PROFILE.location.map(|l| view! { <p class="mt-1 text-sm text-[#8d8f92]">{l}</p> })}
                <p class="mt-4 max-w-2xl text-sm sm:text-base text-[#a2a4a6]">{PROFILE.summary}</p>
                <div class="mt-6 flex flex-wrap items-center gap-3">
                    {PROFILE
                        .resume_url
                        .map(|href| {
                            view! {
                                <Button href=href variant=ButtonVariant::Primary>
                                    <IconGlyph icon=Icon::Download />
                                    "Download Résumé"
                                </Button>
                            }
                        })}
                    {PROFILE
                        .links
                        .iter()
                        .map(|(kind, href)| {
                            view! {
                                <GhostLinkButton href=*href>
                                    <IconGlyph icon=kind.icon() class="mr-2" />
                                    {kind.label()}
                                </GhostLinkButton>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn Highlights() -> impl IntoView {
    view! {
        <section class="max-w-6xl mx-auto px-4 pb-4 grid md:grid-cols-3 gap-4">
            {stats().into_iter().map(|stat| view! { <StatCard stat=stat /> }).collect_view()}
        </section>
    }
}

#[component]
fn Skills() -> impl IntoView {
    view! {
        <section id="skills" class="max-w-6xl mx-auto px-4 py-8">
            <SectionTitle title="Skills" subtitle="Tools I use to ship" />
            <div class="space-y-6">
                {skills_by_category(SKILLS)
                    .into_iter()
                    .map(|(category, skills)| {
                        view! {
                            <div>
                                <h3 class="mb-2 text-xs uppercase tracking-wider text-[#8d8f92]">
                                    {category.label()}
                                </h3>
                                <div class="grid sm:grid-cols-2 lg:grid-cols-3 gap-4">
                                    {skills
                                        .into_iter()
                                        .map(|skill| {
                                            view! {
                                                <Card class="border-white/5 animate-rise">
                                                    <CardContent class="p-4">
                                                        <div class="flex items-center gap-3 text-white">
                                                            <div class="p-2 rounded-xl bg-[#151821] border border-white/5">
                                                                <IconGlyph icon=skill.icon />
                                                            </div>
                                                            <div class="flex-1">
                                                                <div class="font-medium">{skill.label}</div>
                                                                <div class="text-xs text-[#8d8f92]">
                                                                    {skill.level.label()}
                                                                </div>
                                                            </div>
                                                        </div>
                                                        <div
                                                            class="mt-3 h-1.5 rounded-full bg-white/5"
                                                            role="meter"
                                                            aria-valuemin="0"
                                                            aria-valuemax="100"
                                                            aria-valuenow=skill.score.to_string()
                                                            aria-label=format!("{} proficiency", skill.label)
                                                        >
                                                            <div
                                                                class="h-full rounded-full bg-purple-500/80"
                                                                style=format!("width: {}%", skill.score)
                                                            ></div>
                                                        </div>
                                                    </CardContent>
                                                </Card>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn ExperienceTimeline() -> impl IntoView {
    view! {
        <section id="experience" class="max-w-6xl mx-auto px-4 py-8">
            <SectionTitle title="Experience" subtitle="Recent work & initiatives" />
            <div class="space-y-4">
                {EXPERIENCE
                    .iter()
                    .map(|e| {
                        view! {
                            <Card class="border-white/5">
                                <CardContent class="p-4">
                                    <div class="flex items-start justify-between gap-4">
                                        <div>
                                            <div class="text-white font-semibold">{e.role}</div>
                                            <ul class="mt-2 list-disc list-inside text-sm text-[#a2a4a6] space-y-1">
                                                {e.bullets.iter().map(|b| view! { <li>{*b}</li> }).collect_view()}
                                            </ul>
                                        </div>
                                        <div class="text-xs text-[#8d8f92] whitespace-nowrap">
                                            {e.period}
                                        </div>
                                    </div>
                                </CardContent>
                            </Card>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

fn scroll_to_top() {
    window().scroll_to_with_x_and_y(0.0, 0.0);
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="py-8 border-t border-white/5">
            <div class="max-w-6xl mx-auto px-4 text-xs text-[#8d8f92] flex items-center justify-between">
                <span>
                    {format!("© {} {}. All rights reserved.", env!("BUILD_YEAR"), PROFILE.name)}
                </span>
                <button type="button" class="hover:text-purple-300" on:click=move |_| scroll_to_top()>
                    "Back to top ↑"
                </button>
            </div>
        </footer>
    }
}

#[component]
fn ScrollToTop() -> impl IntoView {
    let (_, y) = use_window_scroll();
    // effects only run in the browser, after hydration
    let (hydrated, set_hydrated) = signal(false);
    Effect::new(move |_| set_hydrated.set(true));
    let visible = Memo::new(move |_| show_back_to_top(hydrated.get(), y.get()));

    view! {
        <Show when=move || visible.get()>
            <button
                type="button"
                aria-label="Scroll to top"
                class="fixed bottom-6 right-6 z-40 p-3 rounded-2xl border border-white/10 bg-[#151821] text-[#c5c6c7] shadow-lg hover:border-purple-500/40 hover:text-white transition"
                on:click=move |_| scroll_to_top()
            >
                <IconGlyph icon=Icon::ArrowUp />
            </button>
        </Show>
    }
}
