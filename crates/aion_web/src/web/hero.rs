use aion_core::content::hero::{
    badge_position, BADGE, CALLS_TO_ACTION, DESCRIPTION, FORMULA, ORBIT_BADGES, SCROLL_HINT,
    SCROLL_HINT_TARGET, STATS, SUBTITLE, TITLE_ACCENT, TITLE_REST,
};
use leptos::prelude::*;

use super::dom;
use crate::float_fmt::fmt_fixed;

#[component]
pub(super) fn HeroSection() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="hero-grid" aria-hidden="true"></div>

            <div class="hero-orbit" aria-hidden="true">
                {ORBIT_BADGES
                    .iter()
                    .enumerate()
                    .map(|(i, badge)| {
                        let (x, y) = badge_position(i);
                        let style = format!(
                            "left: {}%; top: {}%; --accent: {}; animation-delay: {}s;",
                            fmt_fixed(x, 2),
                            fmt_fixed(y, 2),
                            badge.color,
                            fmt_fixed(badge.delay_s, 1),
                        );
                        view! {
                            <div class="orbit-badge" style=style title=badge.label>
                                {badge.icon}
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="hero-content">
                <span class="badge">{BADGE}</span>
                <h1 class="hero-title">
                    <span class="gradient-text">{TITLE_ACCENT}</span>
                    {TITLE_REST}
                </h1>
                <p class="hero-subtitle">{SUBTITLE}</p>
                <code class="formula">{FORMULA}</code>
                <p class="hero-description">{DESCRIPTION}</p>

                <div class="hero-actions">
                    {CALLS_TO_ACTION
                        .iter()
                        .map(|cta| {
                            let target = cta.target;
                            let class = if cta.primary { "btn lg primary" } else { "btn lg outline" };
                            view! {
                                <button class=class on:click=move |_| dom::scroll_to_anchor(target)>
                                    {cta.label}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="hero-stats">
                    {STATS
                        .iter()
                        .map(|stat| {
                            view! {
                                <div class="stat">
                                    <div class="stat-value gradient-text">{stat.value}</div>
                                    <div class="stat-label">{stat.label}</div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            <button
                class="scroll-hint"
                on:click=move |_| dom::scroll_to_anchor(SCROLL_HINT_TARGET)
            >
                <span>{SCROLL_HINT}</span>
                <span class="bounce" aria-hidden="true">"⌄"</span>
            </button>
        </section>
    }
}
