use leptos::{html, prelude::*};

use crate::data;
use crate::motion::{
    use_scroll_progress, Keyframes, PointerGate, ScrollWindow, StepKeyframes, Transform,
};

/// Per-card breakpoint tables for the scroll-driven stack. A card fades in
/// over its own slot of the scroll range, holds while the next two cards
/// stack in front of it, then fades out. Breakpoints past 1.0 simply never
/// fire for the last cards.
pub(crate) struct CardTracks {
    pub opacity: Keyframes,
    pub scale: Keyframes,
    pub offset: Keyframes,
    pub content_opacity: Keyframes,
    pub pointer: StepKeyframes<PointerGate>,
}

impl CardTracks {
    pub(crate) fn new(index: usize, total: usize) -> Self {
        let n = total.max(1) as f64;
        let i = index as f64;
        let start = i / n;
        let active = (i + 1.0) / n;
        let stacked = (i + 2.0) / n;
        let buried = (i + 3.0) / n;
        let gone = (i + 4.0) / n;

        Self {
            opacity: Keyframes::or_constant(
                vec![(start, 0.0), (active, 1.0), (buried, 1.0), (gone, 0.0)],
                1.0,
            ),
            scale: Keyframes::or_constant(
                vec![(start, 0.85), (active, 1.0), (stacked, 0.95), (buried, 0.9)],
                1.0,
            ),
            offset: Keyframes::or_constant(
                vec![(start, 100.0), (active, 0.0), (stacked, 40.0), (buried, 80.0)],
                0.0,
            ),
            content_opacity: Keyframes::or_constant(
                vec![(start, 0.0), (active, 1.0), (stacked, 0.0)],
                1.0,
            ),
            pointer: StepKeyframes::new(vec![
                (start, PointerGate::None),
                (active, PointerGate::Auto),
                (active + 0.001, PointerGate::None),
            ])
            .unwrap_or_else(|_| StepKeyframes::constant(PointerGate::None)),
        }
    }
}

#[component]
pub fn ProjectStack() -> impl IntoView {
    let container_ref = NodeRef::<html::Div>::new();
    let progress = use_scroll_progress(container_ref, ScrollWindow::COVER);
    let total = data::PROJECTS.len();

    view! {
        <div node_ref=container_ref class="relative min-h-[300vh] mb-20">
            <section class="w-full mx-auto flex flex-col items-center justify-start sticky top-0 h-screen py-10 md:py-12">
                <div class="text-center mb-5 px-4">
                    <h2 class="text-3xl md:text-4xl font-bold mb-4">"Selected Work"</h2>
                    <h3 class="text-xl md:text-2xl text-muted-foreground mb-6">
                        "Project Showcase"
                    </h3>
                    <p class="text-muted-foreground max-w-3xl mx-auto">
                        "A cross-section of what I build: web platforms, ML dashboards, security tooling and connected devices. Keep scrolling to flip through the stack."
                    </p>
                </div>

                <div class="relative flex-grow w-full flex items-center justify-center h-[550px]" style="perspective: 1000px">
                    {data::PROJECTS
                        .iter()
                        .enumerate()
                        .map(|(index, project)| {
                            view! { <StackedCard project index total progress /> }
                        })
                        .collect_view()}
                </div>
            </section>
        </div>
    }
}

#[component]
fn StackedCard(
    project: &'static data::Project,
    index: usize,
    total: usize,
    progress: Signal<f64>,
) -> impl IntoView {
    let tracks = StoredValue::new(CardTracks::new(index, total));

    let opacity = Memo::new(move |_| tracks.with_value(|t| t.opacity.sample(progress.get())));
    let content_opacity =
        Memo::new(move |_| tracks.with_value(|t| t.content_opacity.sample(progress.get())));
    let transform = Memo::new(move |_| {
        tracks.with_value(|t| {
            Transform::new()
                .translate_y(t.offset.sample(progress.get()))
                .scale(t.scale.sample(progress.get()))
                .to_string()
        })
    });
    let pointer = Memo::new(move |_| tracks.with_value(|t| t.pointer.sample(progress.get())));

    view! {
        <div
            class="absolute top-0 w-full max-w-2xl"
            style:opacity=move || opacity.get().to_string()
            style:transform=move || transform.get()
            style:z-index=index.to_string()
            style:pointer-events=move || pointer.get().to_string()
        >
            <div class="overflow-hidden bg-card text-card-foreground border border-border rounded-lg shadow-lg flex flex-col h-[400px] sm:h-[500px]">
                <div
                    class="relative p-4 sm:p-6 flex items-center justify-center h-32 sm:h-48 overflow-hidden bg-cover bg-center"
                    style:background-image=format!("url({})", project.image_url)
                >
                    <div class="absolute inset-0 bg-black/50"></div>
                    <div
                        class="relative z-10 text-center text-white"
                        style:opacity=move || content_opacity.get().to_string()
                    >
                        <h3 class="text-lg sm:text-2xl font-bold mb-1 sm:mb-2">
                            {project.brand.to_uppercase()}
                        </h3>
                        <div class="w-8 h-0.5 sm:w-12 sm:h-1 bg-white mx-auto mb-1 sm:mb-2"></div>
                        <p class="text-xs sm:text-sm">{project.title}</p>
                    </div>
                </div>

                <div class="p-4 sm:p-6 flex flex-col flex-grow">
                    <div style:opacity=move || content_opacity.get().to_string()>
                        <h3 class="text-lg sm:text-xl font-bold mb-1">{project.title}</h3>
                        <p class="text-muted-foreground text-xs sm:text-sm font-medium mb-2">
                            {project.brand}
                        </p>
                        <p class="text-muted-foreground text-xs sm:text-sm flex-grow">
                            {project.description}
                        </p>
                        <div class="mt-3 sm:mt-4">
                            <div class="flex flex-wrap gap-1.5 sm:gap-2 mb-3 sm:mb-4">
                                {project
                                    .tags
                                    .iter()
                                    .map(|tag| {
                                        view! {
                                            <span class="px-1.5 py-0.5 sm:px-2 sm:py-1 text-[0.65rem] sm:text-xs rounded-md border border-border">
                                                {*tag}
                                            </span>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                            <a
                                href=project.link
                                class="text-muted-foreground inline-flex items-center hover:underline text-sm sm:text-base"
                            >
                                "Learn more"
                                <span class="ml-1 sm:ml-2" aria-hidden="true">"→"</span>
                            </a>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_card_is_fully_presented() {
        let total = 5;
        for index in 0..total {
            let tracks = CardTracks::new(index, total);
            let at = (index + 1) as f64 / total as f64;
            assert_eq!(tracks.opacity.sample(at), 1.0);
            assert_eq!(tracks.scale.sample(at), 1.0);
            assert_eq!(tracks.offset.sample(at), 0.0);
            assert_eq!(tracks.content_opacity.sample(at), 1.0);
            assert_eq!(tracks.pointer.sample(at), PointerGate::Auto);
        }
    }

    #[test]
    fn card_is_hidden_before_its_slot() {
        let tracks = CardTracks::new(2, 5);
        assert_eq!(tracks.opacity.sample(0.0), 0.0);
        assert_eq!(tracks.pointer.sample(0.0), PointerGate::None);
        assert_eq!(tracks.offset.sample(0.1), 100.0);
    }

    #[test]
    fn pointer_gate_closes_right_after_the_active_window() {
        let tracks = CardTracks::new(0, 5);
        assert_eq!(tracks.pointer.sample(0.1), PointerGate::None);
        assert_eq!(tracks.pointer.sample(0.2), PointerGate::Auto);
        assert_eq!(tracks.pointer.sample(0.202), PointerGate::None);
        assert_eq!(tracks.pointer.sample(1.0), PointerGate::None);
    }

    #[test]
    fn stacked_cards_recede_without_leaving_the_hull() {
        let tracks = CardTracks::new(0, 5);
        let mut t = 0.0;
        while t <= 1.0 {
            let scale = tracks.scale.sample(t);
            assert!((0.85..=1.0).contains(&scale), "scale {scale} at {t}");
            let offset = tracks.offset.sample(t);
            assert!((0.0..=100.0).contains(&offset), "offset {offset} at {t}");
            t += 0.01;
        }
        // Once two cards are stacked on top, this one is scaled back down.
        assert_eq!(tracks.scale.sample(0.4), 0.95);
        assert_eq!(tracks.offset.sample(0.4), 40.0);
    }

    #[test]
    fn single_card_stack_degrades_gracefully() {
        let tracks = CardTracks::new(0, 1);
        assert_eq!(tracks.opacity.sample(1.0), 1.0);
        assert_eq!(tracks.scale.sample(1.0), 1.0);
        assert_eq!(tracks.pointer.sample(1.0), PointerGate::Auto);
    }
}
