use leptos::prelude::*;

use super::theme::{ColorMode, ThemeContext};

/// Section background: a square grid that tracks the active theme, with a
/// radial fade so content in the middle stays readable. The grid color
/// follows the theme context signal directly; no DOM observation needed.
#[component]
pub fn GridBackground(
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    let theme = expect_context::<ThemeContext>();
    let grid_color = move || match theme.mode.get() {
        ColorMode::Dark => "#262626",
        ColorMode::Light => "#e4e4e7",
    };

    view! {
        <div class=format!("relative overflow-hidden {class}")>
            <div
                class="absolute inset-0 pointer-events-none"
                style:background-size="20px 20px"
                style:background-image=move || {
                    let color = grid_color();
                    format!(
                        "linear-gradient(to right, {color} 1px, transparent 1px), linear-gradient(to bottom, {color} 1px, transparent 1px)",
                    )
                }
            ></div>
            <div class="pointer-events-none absolute inset-0 bg-background grid-fade"></div>
            <div class="relative z-10 w-full h-full">{children()}</div>
        </div>
    }
}
