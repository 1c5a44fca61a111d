use leptos::{either::Either, prelude::*};

#[cfg(feature = "hydrate")]
use codee::string::JsonSerdeWasmCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::use_local_storage;

use super::ui::{status_class, Badge, Card, CardContent, CardHeader, CardTitle, IconGlyph, SectionTitle};
#[cfg(feature = "hydrate")]
use crate::state::FILTER_STORAGE_KEY;
use crate::{
    content::{Icon, Project, PROJECTS},
    state::{filter_projects, filter_tokens, Filter},
};

#[component]
pub fn ProjectsSection() -> impl IntoView {
    let tokens = filter_tokens(PROJECTS);
    let (filter, set_filter) = signal(Filter::All);

    #[cfg(feature = "hydrate")]
    let (stored_filter, set_stored_filter, _) =
        use_local_storage::<Filter, JsonSerdeWasmCodec>(FILTER_STORAGE_KEY);

    // restore after hydration so the server-rendered markup matches
    #[cfg(feature = "hydrate")]
    {
        let tokens = tokens.clone();
        Effect::watch(
            || (),
            move |_, _, _| {
                let restored = stored_filter.get_untracked().or_all_if_missing(&tokens);
                set_filter.set(restored);
            },
            true,
        );
    }

    let select = move |next: Filter| {
        log::debug!("project filter: {}", next.token());
        #[cfg(feature = "hydrate")]
        set_stored_filter.set(next.clone());
        set_filter.set(next);
    };

    view! {
        <section id="projects" class="max-w-6xl mx-auto px-4 py-8">
            <SectionTitle title="Projects" subtitle="Selected work and lab tools" />
            <div class="mb-4 flex flex-wrap gap-2" role="group" aria-label="Filter projects by tag">
                {tokens
                    .into_iter()
                    .map(|token| {
                        let active = Memo::new(move |_| filter.with(|f| f.token() == token));
                        view! {
                            <button
                                type="button"
                                aria-pressed=move || active.get().to_string()
                                class=move || {
                                    if active.get() {
                                        "px-3 py-1 text-xs rounded-xl border border-purple-500/60 bg-purple-600/30 text-white transition"
                                    } else {
                                        "px-3 py-1 text-xs rounded-xl border border-white/10 bg-[#151821] text-[#c5c6c7] hover:border-purple-500/40 hover:text-white transition"
                                    }
                                }
                                on:click=move |_| select(Filter::from(token))
                            >
                                {token}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            {move || {
                let current = filter.get();
                let visible = filter_projects(PROJECTS, &current);
                if visible.is_empty() {
                    Either::Left(
                        view! {
                            <p class="text-sm text-[#8d8f92]">
                                {format!("No projects tagged {} yet.", current.token())}
                            </p>
                        },
                    )
                } else {
                    Either::Right(
                        view! {
                            <div class="grid sm:grid-cols-2 lg:grid-cols-3 gap-4">
                                {visible
                                    .into_iter()
                                    .map(|project| view! { <ProjectCard project=project /> })
                                    .collect_view()}
                            </div>
                        },
                    )
                }
            }}
        </section>
    }
}

#[component]
fn ProjectCard(project: &'static Project) -> impl IntoView {
    view! {
        <Card class="border-white/5 hover:border-purple-500/40 transition animate-rise">
            <CardHeader>
                <CardTitle class="text-white text-lg flex items-center justify-between gap-2">
                    <span>{project.name}</span>
                    {project
                        .link
                        .map(|href| {
                            view! {
                                <a
                                    href=href
                                    class="text-purple-400 hover:text-purple-300 text-sm inline-flex items-center gap-1"
                                >
                                    "View"
                                    <IconGlyph icon=Icon::ArrowRight />
                                </a>
                            }
                        })}
                </CardTitle>
            </CardHeader>
            <CardContent class="text-sm text-[#a2a4a6]">
                {project
                    .status
                    .map(|status| {
                        view! { <Badge class=format!("mb-2 {}", status_class(status))>{status.label()}</Badge> }
                    })}
                <p>{project.description}</p>
                <div class="mt-3 flex flex-wrap gap-2">
                    {project.tags.iter().map(|tag| view! { <Badge>{*tag}</Badge> }).collect_view()}
                </div>
            </CardContent>
        </Card>
    }
}
