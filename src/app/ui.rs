use leptos::{either::Either, prelude::*};

use crate::content::{Icon, ProjectStatus, Stat};

#[component]
pub fn Card(#[prop(into, optional)] class: String, children: Children) -> impl IntoView {
    view! {
        <div class=format!(
            "rounded-2xl border border-white/10 bg-[#111318] shadow-[0_0_0_1px_rgba(255,255,255,0.02)] {class}",
        )>{children()}</div>
    }
}

#[component]
pub fn CardHeader(children: Children) -> impl IntoView {
    view! { <div class="px-4 pt-4">{children()}</div> }
}

#[component]
pub fn CardTitle(#[prop(into, optional)] class: String, children: Children) -> impl IntoView {
    view! { <div class=format!("text-lg font-semibold text-white {class}")>{children()}</div> }
}

#[component]
pub fn CardContent(#[prop(into, optional)] class: String, children: Children) -> impl IntoView {
    view! { <div class=format!("px-4 pb-4 text-sm text-[#a2a4a6] {class}")>{children()}</div> }
}

#[component]
pub fn Badge(#[prop(into, optional)] class: String, children: Children) -> impl IntoView {
    view! {
        <span class=format!(
            "inline-flex items-center px-2 py-1 text-xs rounded-lg border border-white/10 bg-[#1a1c22] text-[#c5c6c7] {class}",
        )>{children()}</span>
    }
}

pub fn status_class(status: ProjectStatus) -> &'static str {
    match status {
        ProjectStatus::Active => "border-emerald-500/30 text-emerald-300",
        ProjectStatus::WorkInProgress => "border-amber-500/30 text-amber-300",
        ProjectStatus::Archived => "border-white/10 text-[#8d8f92]",
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
}

fn button_class(variant: ButtonVariant) -> String {
    // direct icon children are normalized to the text line
    let base = "inline-flex items-center gap-2 rounded-2xl transition border text-sm font-medium leading-6 \
        focus:outline-none focus-visible:ring-2 focus-visible:ring-purple-400/60 \
        [&>i]:inline-block [&>i]:align-middle [&>i]:-translate-y-[1px]";
    let variant = match variant {
        ButtonVariant::Primary => "bg-purple-600/90 text-white border-white/10 hover:bg-purple-500/90",
        ButtonVariant::Secondary => {
            "bg-[#151821] text-[#c5c6c7] border-white/10 hover:border-purple-500/40 hover:text-white"
        }
    };
    format!("{base} px-4 py-2 {variant}")
}

/// A button, or an outbound link styled as one when `href` is set.
#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional, into)] href: Option<String>,
    #[prop(default = "button")] kind: &'static str,
    children: Children,
) -> impl IntoView {
    let class = button_class(variant);
    match href {
        Some(href) => Either::Left(view! {
            <a href=href target="_blank" rel="noreferrer" class=class>
                {children()}
            </a>
        }),
        None => Either::Right(view! {
            <button type=kind class=class>
                {children()}
            </button>
        }),
    }
}

/// Subtle secondary button linking out.
#[component]
pub fn GhostLinkButton(href: &'static str, children: Children) -> impl IntoView {
    view! {
        <Button href=href variant=ButtonVariant::Secondary>
            {children()}
        </Button>
    }
}

#[component]
pub fn HeaderLink(href: &'static str, children: Children) -> impl IntoView {
    view! {
        <a
            href=href
            class="text-sm px-3 py-1.5 rounded-xl text-[#c5c6c7] hover:text-white hover:bg-white/5 transition"
        >
            {children()}
        </a>
    }
}

#[component]
pub fn SectionTitle(
    title: &'static str,
    #[prop(optional)] subtitle: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="mb-4">
            <h2 class="text-white text-xl font-semibold">{title}</h2>
            {subtitle.map(|s| view! { <p class="text-sm text-[#8d8f92]">{s}</p> })}
        </div>
    }
}

#[component]
pub fn StatCard(stat: Stat) -> impl IntoView {
    let Stat { title, value, sub } = stat;
    view! {
        <Card>
            <CardContent class="p-4">
                <div class="text-xs text-[#8d8f92]">{title}</div>
                <div class="text-2xl text-white font-semibold mt-1">{value}</div>
                {sub.map(|s| view! { <div class="text-xs text-[#8d8f92] mt-0.5">{s}</div> })}
            </CardContent>
        </Card>
    }
}

#[component]
pub fn IconGlyph(icon: Icon, #[prop(into, optional)] class: String) -> impl IntoView {
    view! { <i class=format!("{} w-4 h-4 {class}", icon.class_name()) aria-hidden="true"></i> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_variants() {
        let primary = button_class(ButtonVariant::Primary);
        let secondary = button_class(ButtonVariant::Secondary);
        assert!(primary.contains("bg-purple-600/90"));
        assert!(secondary.contains("bg-[#151821]"));
        for class in [primary, secondary] {
            assert!(class.contains("px-4 py-2"));
            assert!(!class.ends_with(' '));
        }
        assert_eq!(ButtonVariant::default(), ButtonVariant::Primary);
    }
}
