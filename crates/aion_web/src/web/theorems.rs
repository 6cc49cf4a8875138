use aion_core::content::theorems::{Theorem, TheoremDialog, PROVERS, PROVER_STRIP_TITLE};
use aion_core::content::THEOREMS_HEADER;
use leptos::prelude::*;

use super::shell::SectionHeading;

#[component]
pub(super) fn TheoremsSection() -> impl IntoView {
    let dialog = RwSignal::new(TheoremDialog::default());

    view! {
        <section id="theorems" class="section">
            <SectionHeading header=THEOREMS_HEADER />

            <div class="theorem-grid">
                {Theorem::all()
                    .iter()
                    .map(|theorem| {
                        let id = theorem.id;
                        view! {
                            <div
                                class="card glass theorem-card"
                                role="button"
                                tabindex="0"
                                style=format!("--accent: {};", theorem.color)
                                on:click=move |_| {
                                    dialog.update(|d| {
                                        let _ = d.open(id);
                                    })
                                }
                            >
                                <span class="theorem-icon">{theorem.icon}</span>
                                <div class="theorem-text">
                                    <div class="theorem-title">
                                        <h3>{theorem.name}</h3>
                                        <span class=if theorem.verified { "check ok" } else { "check fail" }>
                                            {if theorem.verified { "✓" } else { "✗" }}
                                        </span>
                                    </div>
                                    <p class="muted small">{theorem.statement}</p>
                                    <code class="formal">{theorem.formal}</code>
                                    <span class="pill">{theorem.verified_label()}</span>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="card glass prover-strip">
                <h3 class="center">{PROVER_STRIP_TITLE}</h3>
                <div class="prover-grid">
                    {PROVERS
                        .iter()
                        .map(|p| {
                            view! {
                                <div class="prover" style=format!("--accent: {};", p.color)>
                                    <span class="check ok">"✓"</span>
                                    <p class="prover-name">{p.name}</p>
                                    <p class="muted small">{p.role}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            {move || {
                dialog
                    .with(TheoremDialog::current)
                    .map(|theorem| view! { <ProofDialog theorem=theorem dialog=dialog /> })
            }}
        </section>
    }
}

#[component]
fn ProofDialog(theorem: &'static Theorem, dialog: RwSignal<TheoremDialog>) -> impl IntoView {
    let close = move || dialog.update(TheoremDialog::close);

    view! {
        <div class="modal-overlay" on:click=move |_| close()>
            <div
                class="modal"
                role="dialog"
                aria-modal="true"
                style=format!("--accent: {};", theorem.color)
                on:click=|ev| ev.stop_propagation()
            >
                <div class="modal-header">
                    <h3>
                        <span class="theorem-icon sm">{theorem.icon}</span>
                        {theorem.name}
                    </h3>
                    <button class="icon-btn" title="Close" on:click=move |_| close()>
                        "×"
                    </button>
                </div>

                <p class="muted small">"Statement"</p>
                <p>{theorem.statement}</p>

                <p class="muted small">"Formal Expression"</p>
                <code class="formal block">{theorem.formal}</code>

                <p class="muted small">"Proof Sketch"</p>
                <ol class="proof-steps">
                    {theorem.proof.iter().map(|step| view! { <li>{*step}</li> }).collect_view()}
                </ol>

                <div class="modal-footer">
                    <span class="check ok">"✓"</span>
                    <span>"Verified in "<strong>{theorem.prover}</strong></span>
                </div>
            </div>
        </div>
    }
}
