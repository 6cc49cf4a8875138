use aion_core::content::paper::{
    PaperBlock, PaperReader, PaperSection, PAPER_BYLINE, PAPER_TITLE, READ_TIME,
};
use aion_core::content::RESEARCH_HEADER;
use aion_core::share::{download_paper, share_page, SharePayload};
use leptos::prelude::*;

use super::share::BrowserShareHost;
use super::shell::SectionHeading;
use super::{dom, use_toaster};

#[component]
pub(super) fn ResearchSection() -> impl IntoView {
    let reader = RwSignal::new(PaperReader::default());
    let toaster = use_toaster();

    let on_download = move |_: leptos::ev::MouseEvent| toaster.push(download_paper());
    let on_share = move |_: leptos::ev::MouseEvent| {
        let payload = SharePayload::for_page(dom::page_url());
        let outcome = share_page(&BrowserShareHost::new(), &payload);
        toaster.push(outcome.toast());
    };

    view! {
        <section id="research" class="section">
            <SectionHeading header=RESEARCH_HEADER />

            <div class="card glass paper">
                <div class="paper-header">
                    <div>
                        <h3>{PAPER_TITLE}</h3>
                        <p class="muted small">{PAPER_BYLINE}</p>
                    </div>
                    <div class="paper-actions">
                        <button class="btn sm outline" on:click=on_download>
                            "⬇ Download PDF"
                        </button>
                        <button class="btn sm outline" on:click=on_share>
                            "⇪ Share"
                        </button>
                    </div>
                </div>

                <div class="paper-body">
                    <nav class="paper-sidebar">
                        {PaperSection::all()
                            .iter()
                            .map(|section| {
                                let id = section.id;
                                let is_current = move || reader.with(|r| r.current().id == id);
                                view! {
                                    <button
                                        class=move || if is_current() { "paper-tab active" } else { "paper-tab" }
                                        on:click=move |_| {
                                            reader.update(|r| {
                                                let _ = r.select(id);
                                            })
                                        }
                                    >
                                        <span class="tab-icon">{section.icon}</span>
                                        <span>{section.title}</span>
                                        <Show when=is_current>
                                            <span class="push">"›"</span>
                                        </Show>
                                    </button>
                                }
                            })
                            .collect_view()}
                    </nav>

                    <article class="paper-content">
                        {move || {
                            let section = reader.with(PaperReader::current);
                            view! {
                                <div class="fade-in">
                                    <h4>
                                        <span class="tab-icon">{section.icon}</span>
                                        {section.title}
                                    </h4>
                                    {section.blocks.iter().map(|b| render_block(*b)).collect_view()}
                                </div>
                            }
                        }}
                    </article>
                </div>

                <div class="paper-footer">
                    <div class="muted small">
                        {move || reader.with(PaperReader::page_label)}
                        " • "
                        {READ_TIME}
                    </div>
                    <div class="pager">
                        <button
                            class="btn sm ghost"
                            disabled=move || !reader.with(PaperReader::has_previous)
                            on:click=move |_| {
                                reader.update(|r| {
                                    r.previous();
                                })
                            }
                        >
                            "‹ Previous"
                        </button>
                        <button
                            class="btn sm ghost"
                            disabled=move || !reader.with(PaperReader::has_next)
                            on:click=move |_| {
                                reader.update(|r| {
                                    r.next();
                                })
                            }
                        >
                            "Next ›"
                        </button>
                    </div>
                </div>
            </div>
        </section>
    }
}

fn render_block(block: PaperBlock) -> AnyView {
    match block {
        PaperBlock::Paragraph { text, muted } => {
            view! { <p class=if muted { "muted" } else { "" }>{text}</p> }.into_any()
        }
        PaperBlock::Tags(tags) => view! {
            <div class="tags">
                {tags.iter().map(|t| view! { <span class="pill">{*t}</span> }).collect_view()}
            </div>
        }
        .into_any(),
        PaperBlock::Formula(formula) => view! {
            <div class="formula-box"><code class="formula">{formula}</code></div>
        }
        .into_any(),
        PaperBlock::SymbolList(items) => view! {
            <div class="keyed-grid">
                {items
                    .iter()
                    .map(|item| {
                        view! {
                            <div class="keyed-row">
                                <span class="key square">{item.key}</span>
                                <div>
                                    <p class="small strong">{item.name}</p>
                                    <p class="muted tiny">{item.detail}</p>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        }
        .into_any(),
        PaperBlock::NumberedList(items) => view! {
            <div class="keyed-list">
                {items
                    .iter()
                    .map(|item| {
                        view! {
                            <div class="keyed-row">
                                <span class="key round">{item.key}</span>
                                <div>
                                    <p class="small strong">{item.name}</p>
                                    <p class="muted tiny">{item.detail}</p>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        }
        .into_any(),
        PaperBlock::TheoremBox {
            name,
            formal,
            summary,
            color,
        } => view! {
            <div class="theorem-box" style=format!("--accent: {color};")>
                <p class="strong accent">{name}</p>
                <code class="formal block">{formal}</code>
                <p class="muted small">{summary}</p>
            </div>
        }
        .into_any(),
        PaperBlock::ProverGrid(items) => view! {
            <div class="keyed-grid">
                {items
                    .iter()
                    .map(|item| {
                        view! {
                            <div class="prover-row">
                                <div class="row-head">
                                    <span class="small strong">{item.key}</span>
                                    <span class="ok tiny">{item.detail}</span>
                                </div>
                                <p class="muted tiny">{item.name}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        }
        .into_any(),
        PaperBlock::Callout { lead, text } => view! {
            <div class="callout ok">
                <strong>{lead}</strong>" "{text}
            </div>
        }
        .into_any(),
    }
}
