use leptos::prelude::*;

use super::ui::{Button, ButtonVariant, GhostLinkButton, IconGlyph, SectionTitle};
use crate::{
    content::{Icon, LinkKind, PROFILE},
    state::{ContactDraft, Submission},
};

const FIELD_CLASS: &str = "w-full px-3 py-2 rounded-xl border border-white/10 bg-[#151821] text-[#c5c6c7] placeholder:text-[#8d8f92] focus:outline-none focus-visible:ring-2 focus-visible:ring-purple-400/60";

#[component]
pub fn ContactSection() -> impl IntoView {
    view! {
        <section id="contact" class="max-w-6xl mx-auto px-4 py-10">
            <SectionTitle title="Contact" subtitle="Let’s build something" />
            <div class="flex flex-wrap items-center gap-3">
                {[LinkKind::Email, LinkKind::GitHub, LinkKind::LinkedIn]
                    .into_iter()
                    .filter_map(|kind| PROFILE.link(kind).map(|href| (kind, href)))
                    .map(|(kind, href)| {
                        view! {
                            <GhostLinkButton href=href>
                                <IconGlyph icon=kind.icon() class="mr-2" />
                                {kind.label()}
                            </GhostLinkButton>
                        }
                    })
                    .collect_view()}
            </div>
            <ContactForm />
            <p class="mt-4 text-xs text-[#8d8f92]">
                "This site is built with Rust, Leptos, and Tailwind."
            </p>
        </section>
    }
}

#[component]
fn ContactForm() -> impl IntoView {
    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (message, set_message) = signal(String::new());
    let (notice, set_notice) = signal(None::<&'static str>);

    view! {
        <form
            class="mt-6 max-w-xl grid gap-3"
            on:submit=move |ev| {
                ev.prevent_default();
                let draft = ContactDraft::new(
                    &name.get_untracked(),
                    &email.get_untracked(),
                    &message.get_untracked(),
                );
                let submission = Submission::from(draft);
                if let Submission::Undelivered(draft) = &submission {
                    // TODO: deliver through a server function once a mail relay is chosen
                    log::warn!(
                        "contact form has no delivery backend, message from {} <{}> was not sent",
                        draft.name,
                        draft.email
                    );
                }
                set_notice.set(Some(submission.notice()));
            }
        >
            <label class="grid gap-1 text-sm">
                "Name"
                <input
                    type="text"
                    name="name"
                    autocomplete="name"
                    class=FIELD_CLASS
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                />
            </label>
            <label class="grid gap-1 text-sm">
                "Email"
                <input
                    type="email"
                    name="email"
                    autocomplete="email"
                    class=FIELD_CLASS
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />
            </label>
            <label class="grid gap-1 text-sm">
                "Message"
                <textarea
                    name="message"
                    rows="5"
                    class=FIELD_CLASS
                    prop:value=move || message.get()
                    on:input=move |ev| set_message.set(event_target_value(&ev))
                ></textarea>
            </label>
            <div class="flex items-center gap-3">
                <Button kind="submit" variant=ButtonVariant::Primary>
                    <IconGlyph icon=Icon::Mail />
                    "Send"
                </Button>
                {move || {
                    notice
                        .get()
                        .map(|text| {
                            view! {
                                <p role="status" class="text-xs text-amber-300">
                                    {text}
                                </p>
                            }
                        })
                }}
            </div>
        </form>
    }
}
