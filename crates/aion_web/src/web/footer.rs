use aion_core::content::footer::{
    FooterLink, BLURB, BUILT_WITH, COPYRIGHT, LINK_GROUPS, QUOTE, QUOTE_AUTHOR, SOCIAL_LINKS,
};
use leptos::prelude::*;

use super::dom;

#[component]
pub(super) fn FooterSection() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="footer-grid">
                <div class="footer-brand">
                    <div class="brand">
                        <span class="brand-icon" aria-hidden="true">"🧠"</span>
                        "AION"<span class="accent">"-NEXUS"</span>
                    </div>
                    <p class="muted">{BLURB}</p>
                    <div class="socials">
                        {SOCIAL_LINKS
                            .iter()
                            .map(|link| {
                                view! {
                                    <a class="social" href=link.href aria-label=link.label>
                                        {link.label}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                {LINK_GROUPS
                    .iter()
                    .map(|group| {
                        view! {
                            <div class="footer-group">
                                <h4>{group.title}</h4>
                                <ul>
                                    {group
                                        .links
                                        .iter()
                                        .map(|link| view! { <li><FooterAnchor link=*link external=group.external /></li> })
                                        .collect_view()}
                                </ul>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="footer-bottom">
                <p class="muted small">{COPYRIGHT}</p>
                <p class="muted small">{BUILT_WITH}</p>
            </div>

            <blockquote class="quote">
                <p>{format!("\u{201c}{QUOTE}\u{201d}")}</p>
                <cite>{format!("— {QUOTE_AUTHOR}")}</cite>
            </blockquote>
        </footer>
    }
}

/// Fragment links scroll in place (and never navigate); anything else is a
/// plain link.
#[component]
fn FooterAnchor(link: FooterLink, external: bool) -> impl IntoView {
    let anchor = link.anchor();
    let in_page = link.is_in_page();

    view! {
        <a
            class="footer-link"
            href=link.href
            on:click=move |ev| {
                if in_page {
                    ev.prevent_default();
                    if let Some(anchor) = anchor {
                        dom::scroll_to_anchor(anchor);
                    }
                }
            }
        >
            {link.label}
            {(external || !in_page).then_some(" ↗")}
        </a>
    }
}
