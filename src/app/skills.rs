use leptos::{html, prelude::*};
use leptos_use::{use_mouse_in_element, UseMouseInElementReturn};

use crate::data;

/// The 2×2 specialization grid from the home page. Two copies of every card
/// are rendered: the plain grid underneath, and a glow-accented overlay
/// masked to a radial window that follows the pointer.
#[component]
pub fn SkillShowcase() -> impl IntoView {
    let container_ref = NodeRef::<html::Div>::new();
    let UseMouseInElementReturn {
        element_x,
        element_y,
        is_outside,
        ..
    } = use_mouse_in_element(container_ref);

    view! {
        <section class="min-h-full px-8 py-16">
            <div class="max-w-7xl mx-auto relative">
                <div node_ref=container_ref class="relative">
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-6 items-stretch p-5">
                        {data::SKILL_CARDS
                            .iter()
                            .map(|card| {
                                view! {
                                    <div class="group cursor-pointer">
                                        <SkillCardFace card overlay=false />
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>

                    <div
                        class="absolute inset-0 pointer-events-none select-none transition-opacity duration-300 glow-mask p-5"
                        style=("--x", move || format!("{:.0}px", element_x.get()))
                        style=("--y", move || format!("{:.0}px", element_y.get()))
                        style:opacity=move || if is_outside.get() { "0" } else { "1" }
                    >
                        <div class="grid grid-cols-1 md:grid-cols-2 gap-6 items-stretch">
                            {data::SKILL_CARDS
                                .iter()
                                .map(|card| view! { <SkillCardFace card overlay=true /> })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn SkillCardFace(card: &'static data::SkillCard, overlay: bool) -> impl IntoView {
    let card_style = if overlay {
        format!(
            "background-color: {color}15; border-color: {color}; box-shadow: 0 0 0 1px inset {color}",
            color = card.glow_color
        )
    } else {
        String::new()
    };

    view! {
        <div
            class="relative flex flex-col h-full bg-card backdrop-blur-sm rounded-2xl p-8 border border-border transition-all duration-300"
            style=card_style
        >
            <div
                class="inline-flex items-center justify-center w-12 h-12 rounded-xl mb-6 text-white shadow-lg group-hover:scale-110 transition-transform duration-300"
                style:background-color=card.glow_color
                style:box-shadow=format!("0 8px 24px {}25", card.glow_color)
            >
                <i class=format!("{} text-2xl", card.icon)></i>
            </div>

            <h3 class="text-2xl font-bold mb-4">{card.title}</h3>

            <p class="text-muted-foreground text-base leading-relaxed mb-8 flex-grow">
                {card.description}
            </p>

            <div class="flex justify-start gap-2 items-center">
                {card
                    .features
                    .iter()
                    .map(|feature| {
                        view! {
                            <span class="flex items-center gap-2 px-2 py-1 rounded-md border border-border text-xs font-medium text-muted-foreground">
                                <i class=feature.icon></i>
                                {feature.text}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

/// Category × level table for the About page.
#[component]
pub fn SkillsGrid() -> impl IntoView {
    view! {
        <section class="mb-12">
            <h2 class="text-2xl font-semibold mb-6">"Skills & Expertise"</h2>
            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                {data::SKILL_CATEGORIES
                    .iter()
                    .enumerate()
                    .map(|(i, category)| {
                        view! {
                            <div
                                class="bg-card rounded-lg p-6 border border-border hover:-translate-y-1 transition-transform duration-300 fade-in-up"
                                style=format!("animation-delay: {}ms", i * 100)
                            >
                                <h3 class="text-xl font-semibold mb-4 flex items-center">
                                    <span class="mr-2">{category.icon}</span>
                                    {category.title}
                                </h3>
                                <ul class="space-y-2">
                                    {category
                                        .skills
                                        .iter()
                                        .map(|skill| {
                                            view! {
                                                <li class="flex justify-between">
                                                    <span>{skill.name}</span>
                                                    <span class="text-muted-foreground">
                                                        {skill.level}
                                                    </span>
                                                </li>
                                            }
                                        })
                                        .collect_view()}
                                </ul>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
