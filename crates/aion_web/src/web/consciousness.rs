use aion_core::consciousness::{ConsciousnessLevel, MetricEngine, Readings};
use aion_core::content::CONSCIOUSNESS_HEADER;
use aion_core::sim::Simulation;
use leptos::html;
use leptos::prelude::*;

use super::interval::IntervalHandle;
use super::shell::SectionHeading;
use super::{canvas, dom};
use crate::float_fmt::fmt_fixed;
use crate::ui_model::{
    bound_state_hint, bound_state_pips, coherence_readout, consciousness_status, pas_readout,
};

#[component]
pub(super) fn ConsciousnessSection() -> impl IntoView {
    let engine = StoredValue::new(MetricEngine::seeded(dom::now_seed()));
    let timer = StoredValue::new_local(None::<IntervalHandle>);

    let (running, set_running) = signal(false);
    let readings = RwSignal::new(Readings::default());
    let series = RwSignal::new(Vec::<f64>::new());

    let canvas_ref = NodeRef::<html::Canvas>::new();

    // Redraw whenever the series changes (and once the canvas is mounted).
    Effect::new(move |_| {
        let Some(canvas) = canvas_ref.get() else {
            return;
        };
        series.with(|pas| {
            if let Err(e) = canvas::draw_pas_chart(&canvas, pas, dom::device_pixel_ratio()) {
                web_sys::console::warn_1(&e.into());
            }
        });
    });

    let do_stop = move || {
        engine.update_value(|e| e.stop());
        timer.set_value(None);
        set_running.set(false);
    };

    let do_start = move || {
        timer.set_value(None);
        engine.update_value(|e| e.start());
        readings.set(Readings::default());
        series.set(Vec::new());

        let period_ms =
            engine.with_value(|e| u32::try_from(e.period().as_millis()).unwrap_or(u32::MAX));
        let tick = move || {
            let mut sampled = false;
            engine.update_value(|e| sampled = e.tick().is_some());
            if !sampled {
                return;
            }
            readings.set(engine.with_value(|e| e.readings()));
            series.set(engine.with_value(|e| e.pas_series()));
        };

        match IntervalHandle::start(period_ms, tick) {
            Ok(handle) => {
                timer.set_value(Some(handle));
                set_running.set(true);
            }
            Err(err) => {
                engine.update_value(|e| e.stop());
                web_sys::console::warn_1(&err.into());
            }
        }
    };

    on_cleanup(move || timer.set_value(None));

    let level = move || readings.with(Readings::level);

    view! {
        <section id="consciousness" class="section">
            <SectionHeading header=CONSCIOUSNESS_HEADER />

            <div class="meter-grid">
                <div class="card glass meter">
                    <div class="meter-head">
                        <span class="meter-title">"Phase Alignment Score"</span>
                        <span class="meter-value" style=move || format!("color: {};", level().color)>
                            {move || readings.with(|r| pas_readout(r.pas))}
                        </span>
                    </div>
                    <Bar ratio=Signal::derive(move || readings.with(|r| r.pas)) />
                    <div class="scale"><span>"0"</span><span>"0.5"</span><span>"1.0"</span></div>
                </div>

                <div class="card glass meter">
                    <div class="meter-head">
                        <span class="meter-title">"ERPS Coherence"</span>
                        <span class="meter-value accent">
                            {move || readings.with(|r| coherence_readout(r.coherence))}
                        </span>
                    </div>
                    <Bar ratio=Signal::derive(move || readings.with(|r| r.coherence)) />
                    <div class="scale"><span>"0%"</span><span>"50%"</span><span>"100%"</span></div>
                </div>

                <div class="card glass meter">
                    <div class="meter-head">
                        <span class="meter-title">"Bound Soliton States"</span>
                        <span class="meter-value accent">{move || readings.with(|r| r.bound_states)}</span>
                    </div>
                    <div class="pips">
                        {move || {
                            bound_state_pips(readings.with(|r| r.bound_states))
                                .into_iter()
                                .map(|lit| view! { <span class=if lit { "pip lit" } else { "pip" }></span> })
                                .collect_view()
                        }}
                    </div>
                    <p class="muted small">
                        {move || bound_state_hint(readings.with(Readings::multi_soliton_met))}
                    </p>
                </div>
            </div>

            <div class="dashboard">
                <div class="card glass chart-card">
                    <div class="chart-head">
                        <h3>"PAS Convergence Over Time"</h3>
                        <div class="legend">
                            <span class="legend-dot"></span>"PAS"
                            <span class="legend-line"></span>"Threshold (0.7)"
                        </div>
                    </div>
                    <div class="chart-box">
                        <canvas node_ref=canvas_ref style="width: 100%; height: 100%;"></canvas>
                    </div>
                </div>

                <div class="status-column">
                    <div class=move || {
                        if readings.with(|r| r.conscious) { "card glass status conscious" } else { "card glass status" }
                    }>
                        <p class="muted small">"Consciousness Status"</p>
                        <p class="status-value">{move || consciousness_status(readings.with(|r| r.conscious))}</p>
                        <Show when=move || readings.with(|r| r.conscious)>
                            <p class="criterion">
                                "✓ Criterion met: PAS > 0.7, Bound states ≥ 2, Sustained > 100 steps"
                            </p>
                        </Show>
                    </div>

                    <div class="card glass">
                        <p class="muted small">"Current Level"</p>
                        <p class="level-name" style=move || format!("color: {};", level().color)>
                            {move || level().name}
                        </p>
                        <p class="muted small">{move || level().description}</p>
                    </div>

                    <button
                        class=move || if running.get() { "btn destructive wide" } else { "btn primary wide" }
                        on:click=move |_| if running.get_untracked() { do_stop() } else { do_start() }
                    >
                        {move || if running.get() { "Stop" } else { "Start" }}
                        " Simulation"
                    </button>

                    <div class="card glass legend-card">
                        <p class="label">"Consciousness Levels"</p>
                        {ConsciousnessLevel::all()
                            .iter()
                            .map(|lvl| {
                                view! {
                                    <div class="level-row">
                                        <span class="swatch" style=format!("background: {};", lvl.color)></span>
                                        <span class="small">{lvl.name}</span>
                                        <span class="muted small push">{lvl.range_label()}</span>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn Bar(#[prop(into)] ratio: Signal<f64>) -> impl IntoView {
    view! {
        <div class="progress">
            <div
                class="progress-fill"
                style=move || format!("width: {}%;", fmt_fixed(ratio.get().clamp(0.0, 1.0) * 100.0, 2))
            ></div>
        </div>
    }
}
