use leptos::{html, prelude::*};

use crate::data;
use crate::motion::{use_scroll_progress, Keyframes, ScrollWindow, Transform};

struct Particle {
    left: f64,
    top: f64,
    size: f64,
    tint: &'static str,
    duration: f64,
    delay: f64,
}

// Fixed particle field; a natural-looking scatter without runtime RNG.
const PARTICLES: &[Particle] = &[
    Particle { left: 8.0, top: 72.0, size: 2.5, tint: "#388bff30", duration: 5.2, delay: 0.0 },
    Particle { left: 15.0, top: 30.0, size: 1.5, tint: "#a371f730", duration: 6.1, delay: 1.4 },
    Particle { left: 23.0, top: 85.0, size: 3.0, tint: "#388bff30", duration: 4.4, delay: 3.1 },
    Particle { left: 31.0, top: 18.0, size: 2.0, tint: "#a371f730", duration: 6.8, delay: 0.8 },
    Particle { left: 38.0, top: 55.0, size: 1.0, tint: "#388bff30", duration: 4.9, delay: 2.2 },
    Particle { left: 46.0, top: 78.0, size: 3.5, tint: "#a371f730", duration: 5.6, delay: 4.5 },
    Particle { left: 53.0, top: 24.0, size: 2.0, tint: "#388bff30", duration: 6.4, delay: 1.0 },
    Particle { left: 61.0, top: 64.0, size: 1.5, tint: "#a371f730", duration: 4.2, delay: 3.8 },
    Particle { left: 68.0, top: 41.0, size: 2.5, tint: "#388bff30", duration: 5.9, delay: 0.4 },
    Particle { left: 76.0, top: 88.0, size: 1.0, tint: "#a371f730", duration: 6.6, delay: 2.9 },
    Particle { left: 84.0, top: 35.0, size: 3.0, tint: "#388bff30", duration: 4.7, delay: 5.2 },
    Particle { left: 92.0, top: 70.0, size: 2.0, tint: "#a371f730", duration: 5.4, delay: 1.9 },
];

/// How many characters of an `len`-character message are revealed at
/// `progress`. Rounded, so the reveal crosses half-character boundaries
/// cleanly, and capped at the message length.
pub(crate) fn revealed_chars(progress: f64, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let count = (progress * len as f64).round();
    (count.max(0.0) as usize).min(len)
}

/// Scroll-locked typing reveal: a 250vh region whose sticky inner viewport
/// types the message out character by character as the user scrolls through.
#[component]
pub fn ScrollReveal(
    #[prop(default = data::SCROLL_MESSAGE)] text: &'static str,
) -> impl IntoView {
    let container_ref = NodeRef::<html::Div>::new();
    let progress = use_scroll_progress(container_ref, ScrollWindow::THROUGH_CENTER);

    let char_count = text.chars().count();
    let revealed = Memo::new(move |_| revealed_chars(progress.get(), char_count));

    let scale_track = StoredValue::new(Keyframes::or_constant(
        vec![(0.0, 0.95), (0.5, 1.0), (1.0, 0.95)],
        1.0,
    ));
    let opacity_track = StoredValue::new(Keyframes::or_constant(
        vec![(0.0, 0.0), (0.1, 1.0), (0.9, 1.0), (1.0, 0.0)],
        1.0,
    ));
    let scale = Memo::new(move |_| scale_track.with_value(|t| t.sample(progress.get())));
    let opacity = Memo::new(move |_| opacity_track.with_value(|t| t.sample(progress.get())));

    view! {
        <div node_ref=container_ref class="relative h-[250vh]">
            <div class="sticky top-0 h-screen flex items-center justify-center overflow-hidden">
                <div
                    class="absolute inset-0 bg-muted/5"
                    style:transform=move || Transform::new().scale(scale.get()).to_string()
                    style:opacity=move || opacity.get().to_string()
                ></div>

                <ParticleField />

                <div class="relative z-10 p-6 md:p-8 max-w-6xl text-center">
                    <p
                        class="text-3xl md:text-5xl lg:text-6xl font-bold leading-tight flex flex-wrap justify-center items-center"
                        aria-hidden="true"
                    >
                        {text
                            .chars()
                            .enumerate()
                            .map(|(index, ch)| view! { <RevealChar ch index revealed /> })
                            .collect_view()}
                    </p>
                    <p class="sr-only">{text}</p>

                    <div
                        class="absolute bottom-8 left-1/2 -translate-x-1/2"
                        style:opacity=move || opacity.get().to_string()
                    >
                        <div class="w-64 h-1 bg-muted/20 rounded-full overflow-hidden">
                            <div
                                class="h-full bg-gradient-to-r from-blue-500 via-purple-500 to-green-500 origin-left"
                                style:transform=move || format!("scaleX({:.4})", progress.get())
                            ></div>
                        </div>
                        <p class="text-muted-foreground text-sm mt-2 font-medium">
                            "Scroll to reveal the message"
                        </p>
                    </div>
                </div>
            </div>
        </div>
    }
}

/// One character, rendered twice: an always-visible outline underneath and a
/// solid layer that pops in once the reveal count passes its index.
#[component]
fn RevealChar(ch: char, index: usize, revealed: Memo<usize>) -> impl IntoView {
    let shown = Memo::new(move |_| index < revealed.get());
    let display = if ch == ' ' { '\u{a0}' } else { ch };

    view! {
        <span
            class="relative inline-block transition-transform duration-150"
            style:transform=move || {
                if shown.get() {
                    "translateY(0px)".to_string()
                } else {
                    "translateY(20px)".to_string()
                }
            }
        >
            <span class="char-outline">{display}</span>
            <span
                class="absolute top-0 left-0"
                style:opacity=move || if shown.get() { "1" } else { "0" }
            >
                {display}
            </span>
        </span>
    }
}

#[component]
fn ParticleField() -> impl IntoView {
    view! {
        <div class="absolute inset-0 overflow-hidden pointer-events-none z-0" aria-hidden="true">
            {PARTICLES
                .iter()
                .map(|p| {
                    view! {
                        <div
                            class="absolute rounded-full particle-float"
                            style:left=format!("{}%", p.left)
                            style:top=format!("{}%", p.top)
                            style:width=format!("{}px", p.size)
                            style:height=format!("{}px", p.size)
                            style:background-color=p.tint
                            style:animation-duration=format!("{}s", p.duration)
                            style:animation-delay=format!("{}s", p.delay)
                        ></div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveal_tracks_progress_linearly() {
        assert_eq!(revealed_chars(0.0, 40), 0);
        assert_eq!(revealed_chars(0.5, 40), 20);
        assert_eq!(revealed_chars(1.0, 40), 40);
    }

    #[test]
    fn reveal_rounds_to_the_nearest_character() {
        assert_eq!(revealed_chars(0.24, 10), 2);
        assert_eq!(revealed_chars(0.26, 10), 3);
    }

    #[test]
    fn reveal_never_exceeds_the_message() {
        assert_eq!(revealed_chars(1.5, 10), 10);
        assert_eq!(revealed_chars(-0.5, 10), 0);
        assert_eq!(revealed_chars(0.7, 0), 0);
    }
}
