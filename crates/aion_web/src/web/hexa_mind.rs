use aion_core::content::dimensions::{
    Dimension, DimensionFocus, EMPTY_HINT, FORMULA, FORMULA_CAPTION, ORBIT_BUTTON_HALF_PX,
};
use aion_core::content::HEXA_MIND_HEADER;
use leptos::prelude::*;

use super::shell::SectionHeading;
use crate::float_fmt::fmt_fixed;

#[component]
pub(super) fn HexaMindSection() -> impl IntoView {
    let focus = RwSignal::new(DimensionFocus::default());

    // Ids come from the static catalog, so lookups cannot miss.
    let click = move |id: &'static str| {
        focus.update(|f| {
            let _ = f.click(id);
        })
    };
    let hover = move |id: &'static str| {
        focus.update(|f| {
            let _ = f.hover(id);
        })
    };

    view! {
        <section id="hexa-mind" class="section">
            <SectionHeading header=HEXA_MIND_HEADER />

            <div class="hexa-layout">
                <div class="hexa-diagram">
                    <div class="hexa-core">
                        <code class="formula">{FORMULA}</code>
                        <p class="caption">{FORMULA_CAPTION}</p>
                    </div>
                    {Dimension::all()
                        .iter()
                        .map(|dim| {
                            let id = dim.id;
                            let (x, y) = dim.orbit_offset();
                            let style = format!(
                                "left: calc(50% + {}px); top: calc(50% + {}px); --accent: {};",
                                fmt_fixed(x - ORBIT_BUTTON_HALF_PX, 1),
                                fmt_fixed(y - ORBIT_BUTTON_HALF_PX, 1),
                                dim.color,
                            );
                            view! {
                                <button
                                    class=move || {
                                        if focus.with(|f| f.is_active(id)) {
                                            "orbit-dim active"
                                        } else {
                                            "orbit-dim"
                                        }
                                    }
                                    style=style
                                    title=format!("{} · {}", dim.name, dim.component)
                                    on:click=move |_| click(id)
                                    on:mouseenter=move |_| hover(id)
                                >
                                    {dim.icon}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="hexa-details">
                    {move || match focus.with(DimensionFocus::active) {
                        Some(dim) => view! { <DimensionCard dim=dim /> }.into_any(),
                        None => {
                            view! {
                                <div class="card glass empty">
                                    <p class="muted">{EMPTY_HINT}</p>
                                </div>
                            }
                                .into_any()
                        }
                    }}
                </div>
            </div>

            <div class="dimension-grid">
                {Dimension::all()
                    .iter()
                    .map(|dim| {
                        let id = dim.id;
                        view! {
                            <div
                                class=move || {
                                    if focus.with(|f| f.is_active(id)) {
                                        "card glass dimension-card active"
                                    } else {
                                        "card glass dimension-card"
                                    }
                                }
                                style=format!("--accent: {};", dim.color)
                                on:click=move |_| click(id)
                                on:mouseenter=move |_| hover(id)
                            >
                                <span class="dim-icon">{dim.icon}</span>
                                <div class="dim-text">
                                    <div class="dim-title">
                                        <span class="symbol">{dim.symbol}</span>
                                        <h3>{dim.name}</h3>
                                    </div>
                                    <p class="muted clamp-2">{dim.description}</p>
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
fn DimensionCard(dim: &'static Dimension) -> impl IntoView {
    view! {
        <div class="card glass dimension-detail" style=format!("--accent: {};", dim.color)>
            <div class="detail-head">
                <span class="dim-icon lg">{dim.icon}</span>
                <div>
                    <h3>{dim.name}</h3>
                    <p class="muted">{dim.component}</p>
                </div>
            </div>
            <p class="muted">{dim.description}</p>
            <p class="label">"Key Features:"</p>
            <ul class="feature-list">
                {dim.features.iter().map(|f| view! { <li>{*f}</li> }).collect_view()}
            </ul>
        </div>
    }
}
