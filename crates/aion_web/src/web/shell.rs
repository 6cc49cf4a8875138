use aion_core::content::SectionHeader;
use aion_core::nav::Anchor;
use leptos::prelude::*;

use super::{dom, Toaster};
use crate::ui_model::{NavState, PageSection};

#[component]
pub(super) fn Navigation(nav: RwSignal<NavState>) -> impl IntoView {
    let go = move |anchor: Anchor| {
        dom::scroll_to_anchor(anchor);
        nav.update(NavState::navigated);
    };

    view! {
        <nav class=move || nav.with(NavState::bar_class)>
            <div class="nav-inner">
                <a
                    class="brand"
                    href="#"
                    on:click=move |ev| {
                        ev.prevent_default();
                        dom::scroll_to_top();
                    }
                >
                    <span class="brand-icon" aria-hidden="true">"🧠"</span>
                    "AION"<span class="accent">"-NEXUS"</span>
                </a>

                <div class="nav-links">
                    {PageSection::nav_anchors()
                        .map(|anchor| {
                            view! {
                                <button class="nav-link" on:click=move |_| go(anchor)>
                                    {anchor.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                <button
                    class="icon-btn nav-toggle"
                    aria-label="Toggle menu"
                    on:click=move |_| nav.update(NavState::toggle_menu)
                >
                    {move || if nav.with(|n| n.menu_open) { "✕" } else { "☰" }}
                </button>
            </div>

            <div class=move || nav.with(NavState::menu_class)>
                {PageSection::nav_anchors()
                    .map(|anchor| {
                        view! {
                            <button class="nav-link block" on:click=move |_| go(anchor)>
                                {anchor.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </nav>
    }
}

#[component]
pub(super) fn SectionHeading(header: SectionHeader) -> impl IntoView {
    view! {
        <header class="section-header">
            <span class="badge">{header.badge}</span>
            <h2>{header.title}" "<span class="gradient-text">{header.accent}</span></h2>
            <p class="lede">{header.lede}</p>
        </header>
    }
}

#[component]
pub(super) fn ToastStack(toaster: Toaster) -> impl IntoView {
    view! {
        <div class="toast-stack" aria-live="polite" aria-relevant="additions removals">
            <For
                each=move || toaster.queue.with(|q| q.visible().to_vec())
                key=|t| t.id
                children=move |t| {
                    let id = t.id;
                    view! {
                        <div class=t.level.class()>
                            <div class="toast-body">
                                <div class="toast-message">{t.message}</div>
                                {t.description.map(|d| view! { <div class="toast-description">{d}</div> })}
                            </div>
                            <button
                                class="toast-close"
                                title="Dismiss"
                                on:click=move |_| toaster.dismiss(id)
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
