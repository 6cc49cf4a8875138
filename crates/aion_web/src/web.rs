use std::time::Duration;

use aion_core::notify::{ToastQueue, ToastSpec, TOAST_LIFETIME_MS};
use leptos::prelude::*;
use wasm_bindgen::prelude::*;

mod canvas;
mod consciousness;
mod dom;
mod footer;
mod hero;
mod hexa_mind;
mod interval;
mod pipeline;
mod research;
mod share;
mod shell;
mod theorems;

use crate::ui_model::{NavState, PageSection};

#[wasm_bindgen(start)]
pub fn start() {
    mount_to_body(|| view! { <App /> });
}

/// Page-wide toast stack, provided as context to every section.
#[derive(Clone, Copy)]
pub(crate) struct Toaster {
    queue: RwSignal<ToastQueue>,
}

impl Toaster {
    fn new() -> Self {
        Self {
            queue: RwSignal::new(ToastQueue::default()),
        }
    }

    pub(crate) fn push(&self, spec: ToastSpec) {
        let mut id = 0;
        self.queue.update(|q| id = q.push(spec));

        let queue = self.queue;
        set_timeout(
            move || {
                queue.update(|q| {
                    q.dismiss(id);
                });
            },
            Duration::from_millis(u64::from(TOAST_LIFETIME_MS)),
        );
    }

    pub(crate) fn dismiss(&self, id: u64) {
        self.queue.update(|q| {
            q.dismiss(id);
        });
    }
}

pub(crate) fn use_toaster() -> Toaster {
    expect_context::<Toaster>()
}

#[component]
fn App() -> impl IntoView {
    let toaster = Toaster::new();
    provide_context(toaster);

    let nav = RwSignal::new(NavState::default());
    let (loaded, set_loaded) = signal(false);

    // Effects run after the first render, so this flips once the page is
    // mounted and the opacity transition has something to animate from.
    Effect::new(move |_| set_loaded.set(true));

    let scroll_listener = window_event_listener(leptos::ev::scroll, move |_| {
        let y = dom::scroll_y();
        nav.update(|n| n.on_scroll(y));
    });
    on_cleanup(move || scroll_listener.remove());

    view! {
        <div class=move || if loaded.get() { "app loaded" } else { "app" }>
            <shell::Navigation nav=nav />
            <main class="app-main">
                {PageSection::all().iter().map(|&s| page_section(s)).collect_view()}
            </main>
            <shell::ToastStack toaster=toaster />
        </div>
    }
}

fn page_section(section: PageSection) -> AnyView {
    match section {
        PageSection::Hero => view! { <hero::HeroSection /> }.into_any(),
        PageSection::HexaMind => view! { <hexa_mind::HexaMindSection /> }.into_any(),
        PageSection::Pipeline => view! { <pipeline::PipelineSection /> }.into_any(),
        PageSection::Consciousness => {
            view! { <consciousness::ConsciousnessSection /> }.into_any()
        }
        PageSection::Theorems => view! { <theorems::TheoremsSection /> }.into_any(),
        PageSection::Research => view! { <research::ResearchSection /> }.into_any(),
        PageSection::Footer => view! { <footer::FooterSection /> }.into_any(),
    }
}
