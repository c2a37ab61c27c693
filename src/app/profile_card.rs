use leptos::{html, prelude::*};
use leptos_use::{use_mouse_in_element, use_raf_fn, UseMouseInElementReturn, UseRafFnCallbackArgs};

use crate::motion::{use_spring, Keyframes, SpringConfig, Transform};

const NAME: &str = "Zentaza";
const ROLE: &str = "Fullstack Developer";
const SUBTITLE: &str = "Software Engineer • Data Science/AI • Cybersecurity • IoT";
const YEAR: &str = "2025";
const CATEGORY: &str = "Developer";
const PHOTO: &str = "/assets/profile.webp";
const BIO: &str = "A Fullstack Developer with cross-disciplinary experience: building modern web applications, developing AI/Data Science-based solutions, strengthening systems with cybersecurity, and designing IoT solutions for industrial needs.";
const TAGS: &[&str] = &[
    "Fullstack",
    "Software Engineer",
    "AI/ML",
    "Cybersecurity",
    "IoT",
    "Cloud",
    "DevOps",
];

/// Keyframe tables mapping the smoothed pointer offset (px from card
/// center) to tilt, shift and shadow values.
struct TiltTracks {
    rotate_x: Keyframes,
    rotate_y: Keyframes,
    shift: Keyframes,
    shadow_x: Keyframes,
    shadow_y: Keyframes,
    shadow_blur: Keyframes,
}

impl TiltTracks {
    fn new() -> Self {
        Self {
            rotate_x: Keyframes::or_constant(vec![(-300.0, 15.0), (300.0, -15.0)], 0.0),
            rotate_y: Keyframes::or_constant(vec![(-300.0, -15.0), (300.0, 15.0)], 0.0),
            shift: Keyframes::or_constant(vec![(-300.0, -8.0), (300.0, 8.0)], 0.0),
            shadow_x: Keyframes::or_constant(vec![(-300.0, -25.0), (300.0, 25.0)], 0.0),
            shadow_y: Keyframes::or_constant(vec![(-300.0, -10.0), (300.0, 35.0)], 10.0),
            shadow_blur: Keyframes::or_constant(vec![(1.0, 20.0), (1.1, 40.0)], 20.0),
        }
    }
}

/// The 3D tilt card from the hero: pointer position relative to the card
/// center is spring-smoothed and mapped onto rotation, translation and a
/// trailing shadow. While the pointer is elsewhere the card floats on a slow
/// sine.
#[component]
pub fn ProfileCard() -> impl IntoView {
    let card_ref = NodeRef::<html::Div>::new();
    let UseMouseInElementReturn {
        element_x,
        element_y,
        element_width,
        element_height,
        is_outside,
        ..
    } = use_mouse_in_element(card_ref);

    let (hovered, set_hovered) = signal(false);

    // Pointer offset from card center; snaps to rest when the pointer leaves.
    let target_x = Memo::new(move |_| {
        if is_outside.get() {
            0.0
        } else {
            element_x.get() - element_width.get() / 2.0
        }
    });
    let target_y = Memo::new(move |_| {
        if is_outside.get() {
            0.0
        } else {
            element_y.get() - element_height.get() / 2.0
        }
    });

    let x = use_spring(target_x.into(), SpringConfig::default());
    let y = use_spring(target_y.into(), SpringConfig::default());
    let scale = use_spring(
        Signal::derive(move || if hovered.get() { 1.05 } else { 1.0 }),
        SpringConfig::default(),
    );

    // Idle float, suspended while hovered.
    let (clock, set_clock) = signal(0.0f64);
    let _ = use_raf_fn(move |args: UseRafFnCallbackArgs| {
        set_clock.update(|t| *t += args.delta / 1000.0);
    });
    let float_y = Memo::new(move |_| {
        if hovered.get() {
            0.0
        } else {
            (clock.get() * 0.5 * std::f64::consts::TAU).sin() * 5.0
        }
    });

    let tracks = StoredValue::new(TiltTracks::new());
    let transform = Memo::new(move |_| {
        tracks.with_value(|t| {
            Transform::new()
                .perspective(1000.0)
                .rotate_x(t.rotate_x.sample(y.get()))
                .rotate_y(t.rotate_y.sample(x.get()))
                .translate_x(t.shift.sample(x.get()))
                .translate_y(t.shift.sample(y.get()) + float_y.get())
                .scale(scale.get())
                .to_string()
        })
    });
    let box_shadow = Memo::new(move |_| {
        tracks.with_value(|t| {
            format!(
                "{:.1}px {:.1}px {:.1}px rgba(0, 0, 0, 0.3)",
                t.shadow_x.sample(x.get()),
                t.shadow_y.sample(y.get()),
                t.shadow_blur.sample(scale.get()),
            )
        })
    });

    view! {
        <div
            node_ref=card_ref
            class="relative w-full max-w-xs md:max-w-md mx-auto cursor-pointer select-none rounded-xl md:rounded-2xl bg-card border border-border overflow-hidden"
            style:transform=move || transform.get()
            style:box-shadow=move || box_shadow.get()
            on:mouseenter=move |_| set_hovered.set(true)
            on:mouseleave=move |_| set_hovered.set(false)
        >
            <div class="relative h-48 md:h-64 overflow-hidden">
                <img
                    src=PHOTO
                    alt=NAME
                    class="w-full h-full object-cover"
                    loading="lazy"
                />
                <div class="absolute inset-0 bg-gradient-to-t from-black/60 to-transparent"></div>
                <div class="absolute bottom-4 left-4 text-white">
                    <p class="text-lg font-bold">{ROLE}</p>
                    <p class="text-xs opacity-80">{SUBTITLE}</p>
                </div>
            </div>
            <div class="p-6">
                <div class="flex items-center justify-between mb-3 text-sm text-muted-foreground">
                    <span class="font-medium text-foreground">{NAME}</span>
                    <span>{CATEGORY} " · " {YEAR}</span>
                </div>
                <p class="text-sm text-muted-foreground leading-relaxed mb-4">{BIO}</p>
                <div class="flex flex-wrap gap-2">
                    {TAGS
                        .iter()
                        .map(|tag| {
                            view! {
                                <span class="px-2 py-1 text-xs rounded-md border border-border text-muted-foreground">
                                    {*tag}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
