use aion_core::content::PIPELINE_HEADER;
use aion_core::pipeline::{PipelinePhase, PipelineStepper};
use aion_core::sim::Simulation;
use leptos::prelude::*;

use super::interval::IntervalHandle;
use super::shell::SectionHeading;
use crate::float_fmt::fmt_fixed;
use crate::ui_model::{progress_readout, run_button_label};

#[component]
pub(super) fn PipelineSection() -> impl IntoView {
    let stepper = RwSignal::new(PipelineStepper::new());
    let timer = StoredValue::new_local(None::<IntervalHandle>);

    let do_stop = move || {
        stepper.update(|s| s.stop());
        timer.set_value(None);
    };

    let do_start = move || {
        // Drop any previous run's timer before the new one exists.
        timer.set_value(None);
        stepper.update(|s| s.start());

        let period = stepper.with_untracked(|s| s.period());
        let period_ms = u32::try_from(period.as_millis()).unwrap_or(u32::MAX);
        let tick = move || {
            let mut advance = None;
            stepper.update(|s| advance = s.tick());
            if advance.map_or(true, |a| a.finished) {
                // Cancel only; the handle is dropped by the next start/stop.
                timer.with_value(|t| {
                    if let Some(t) = t {
                        t.cancel();
                    }
                });
            }
        };

        match IntervalHandle::start(period_ms, tick) {
            Ok(handle) => timer.set_value(Some(handle)),
            Err(e) => {
                stepper.update(|s| s.stop());
                web_sys::console::warn_1(&e.into());
            }
        }
    };

    let do_reset = move || {
        timer.set_value(None);
        stepper.update(PipelineStepper::reset);
    };

    on_cleanup(move || timer.set_value(None));

    let running = move || stepper.with(|s| s.is_running());
    let progress = move || stepper.with(PipelineStepper::progress_percent);

    view! {
        <section id="pipeline" class="section">
            <SectionHeading header=PIPELINE_HEADER />

            <div class="sim-controls">
                <button
                    class=move || if running() { "btn destructive" } else { "btn primary" }
                    on:click=move |_| {
                        if stepper.with_untracked(|s| s.is_running()) { do_stop() } else { do_start() }
                    }
                >
                    {move || if running() { "⏸ " } else { "▶ " }}
                    {move || run_button_label(running())}
                </button>
                <button class="btn outline" on:click=move |_| do_reset()>
                    "↺ Reset"
                </button>
            </div>

            <Show when=move || { progress() > 0.0 }>
                <div class="progress-wrap">
                    <div class="progress">
                        <div
                            class="progress-fill"
                            style=move || format!("width: {}%;", fmt_fixed(progress(), 2))
                        ></div>
                    </div>
                    <p class="muted center">{move || progress_readout(progress())}</p>
                </div>
            </Show>

            <div class="pipeline-layout">
                <div class="phase-list">
                    {PipelinePhase::all()
                        .iter()
                        .map(|phase| {
                            let id = phase.id;
                            let active = move || stepper.with(|s| s.active() == id);
                            let completed = move || stepper.with(|s| s.is_completed(id));
                            view! {
                                <button
                                    class=move || {
                                        match (active(), completed()) {
                                            (true, _) => "phase-item active",
                                            (false, true) => "phase-item completed",
                                            (false, false) => "phase-item",
                                        }
                                    }
                                    style=format!("--accent: {};", phase.color)
                                    on:click=move |_| {
                                        stepper.update(|s| {
                                            let _ = s.select_phase(id);
                                        })
                                    }
                                >
                                    <span class="phase-icon">{phase.icon}</span>
                                    <span class="phase-num">{phase.id}</span>
                                    <span class="phase-name">{phase.name}</span>
                                    <Show when=completed>
                                        <span class="phase-done">"›"</span>
                                    </Show>
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="phase-detail card glass">
                    {move || {
                        let phase = stepper.with(|s| s.active_phase());
                        view! { <PhaseDetail phase=phase /> }
                    }}
                </div>
            </div>
        </section>
    }
}

#[component]
fn PhaseDetail(phase: &'static PipelinePhase) -> impl IntoView {
    view! {
        <div class="phase-detail-inner" style=format!("--accent: {};", phase.color)>
            <div class="detail-head">
                <span class="phase-icon lg">{phase.icon}</span>
                <div>
                    <span class="phase-tag">{format!("Phase {}", phase.id)}</span>
                    <h3>{phase.name}</h3>
                </div>
            </div>
            <p class="lede">{phase.description}</p>

            <p class="label">"Process Details:"</p>
            <ol class="detail-list">
                {phase.details.iter().map(|d| view! { <li>{*d}</li> }).collect_view()}
            </ol>

            <div class="flow-strip">
                <span class="muted">{phase.upstream_label()}</span>
                <span class="chevron">"›"</span>
                <span class="flow-current">{phase.name}</span>
                <span class="chevron">"›"</span>
                <span class="muted">{phase.downstream_label()}</span>
            </div>
        </div>
    }
}
