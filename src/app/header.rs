use leptos::{html, prelude::*};
use leptos_use::on_click_outside;

use super::ui::HeaderLink;
use crate::{
    content::{Icon, PROFILE},
    state::{Menu, MenuEvent},
};

const NAV_LINKS: [(&str, &str); 4] = [
    ("#projects", "Projects"),
    ("#skills", "Skills"),
    ("#experience", "Experience"),
    ("#contact", "Contact"),
];

#[component]
pub fn Header() -> impl IntoView {
    let (menu, set_menu) = signal(Menu::default());
    let menu_ref = NodeRef::<html::Div>::new();

    // the trigger sits inside menu_ref, so pressing it never counts as outside
    let _ = on_click_outside(menu_ref, move |_| {
        if menu.with_untracked(Menu::is_open) {
            set_menu.update(|m| m.apply(MenuEvent::Click { inside: false }));
        }
    });

    let logo_style = PROFILE
        .logo_url
        .map(|url| format!("background-image: url('{url}')"));

    view! {
        <header class="sticky top-0 z-30 backdrop-blur bg-black/20 border-b border-white/5">
            <div class="max-w-6xl mx-auto px-4 py-2 flex items-center justify-between">
                <a href="/" class="flex items-center gap-3">
                    {logo_style.map(|style| view! { <div class="w-12 h-12 bg-center bg-cover" style=style></div> })}
                    <span class="tracking-wide font-semibold text-white">{PROFILE.name}</span>
                </a>
                <nav class="hidden sm:flex items-center gap-2">
                    {NAV_LINKS
                        .into_iter()
                        .map(|(href, label)| view! { <HeaderLink href=href>{label}</HeaderLink> })
                        .collect_view()}
                </nav>
                <div node_ref=menu_ref class="relative sm:hidden">
                    <button
                        type="button"
                        aria-label="Toggle navigation"
                        aria-expanded=move || menu.get().is_open().to_string()
                        class="p-2 rounded-xl border border-white/10 bg-[#151821] text-[#c5c6c7] hover:text-white transition"
                        on:click=move |_| {
                            set_menu.update(|m| m.apply(MenuEvent::Trigger));
                            log::debug!("menu open: {}", menu.get_untracked().is_open());
                        }
                    >
                        <i
                            class=move || {
                                let icon = if menu.get().is_open() { Icon::Close } else { Icon::Menu };
                                format!("{} block", icon.class_name())
                            }
                            aria-hidden="true"
                        ></i>
                    </button>
                    <Show when=move || menu.get().is_open()>
                        <nav class="absolute right-0 mt-2 w-44 flex flex-col gap-1 p-2 rounded-2xl border border-white/10 bg-[#111318] shadow-lg">
                            {NAV_LINKS
                                .into_iter()
                                .map(|(href, label)| {
                                    view! {
                                        <a
                                            href=href
                                            class="text-sm px-3 py-1.5 rounded-xl text-[#c5c6c7] hover:text-white hover:bg-white/5 transition"
                                            on:click=move |_| set_menu.update(|m| m.apply(MenuEvent::Navigate))
                                        >
                                            {label}
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </nav>
                    </Show>
                </div>
            </div>
        </header>
    }
}
