use leptos::{either::Either, prelude::*};
use leptos_use::use_preferred_dark;
use serde::{Deserialize, Serialize};

#[cfg(feature = "hydrate")]
use codee::string::JsonSerdeWasmCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::use_local_storage;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorMode {
    Light,
    Dark,
}

/// Theme state shared through context. The resolved mode is the stored
/// choice when one exists, otherwise the system preference.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub mode: Signal<ColorMode>,
    set_stored: WriteSignal<Option<ColorMode>>,
}

impl ThemeContext {
    pub fn toggle(&self) {
        let next = match self.mode.get_untracked() {
            ColorMode::Light => ColorMode::Dark,
            ColorMode::Dark => ColorMode::Light,
        };
        self.set_stored.set(Some(next));
    }
}

pub fn provide_color_mode() -> ThemeContext {
    let (stored, set_stored) = stored_mode();
    let prefers_dark = use_preferred_dark();
    let mode = Signal::derive(move || {
        stored.get().unwrap_or(if prefers_dark.get() {
            ColorMode::Dark
        } else {
            ColorMode::Light
        })
    });
    let ctx = ThemeContext { mode, set_stored };
    provide_context(ctx);
    ctx
}

#[cfg(feature = "hydrate")]
fn stored_mode() -> (Signal<Option<ColorMode>>, WriteSignal<Option<ColorMode>>) {
    let (stored, set_stored, _) =
        use_local_storage::<Option<ColorMode>, JsonSerdeWasmCodec>("zentaza-theme");
    (stored, set_stored)
}

#[cfg(not(feature = "hydrate"))]
fn stored_mode() -> (Signal<Option<ColorMode>>, WriteSignal<Option<ColorMode>>) {
    let (stored, set_stored) = signal(None);
    (stored.into(), set_stored)
}

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = expect_context::<ThemeContext>();
    let is_dark = move || theme.mode.get() == ColorMode::Dark;
    let label = move || {
        if is_dark() {
            "Switch to light mode"
        } else {
            "Switch to dark mode"
        }
    };

    view! {
        <button
            class="p-2 rounded-md text-muted-foreground hover:text-primary transition-colors duration-200 cursor-pointer"
            on:click=move |_| theme.toggle()
            aria-label=label
            title=label
        >
            {move || {
                if is_dark() {
                    Either::Left(view! { <SunIcon /> })
                } else {
                    Either::Right(view! { <MoonIcon /> })
                }
            }}
        </button>
    }
}

#[component]
fn SunIcon() -> impl IntoView {
    view! {
        <svg xmlns="http://www.w3.org/2000/svg" width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            <circle cx="12" cy="12" r="5" />
            <line x1="12" y1="1" x2="12" y2="3" />
            <line x1="12" y1="21" x2="12" y2="23" />
            <line x1="4.22" y1="4.22" x2="5.64" y2="5.64" />
            <line x1="18.36" y1="18.36" x2="19.78" y2="19.78" />
            <line x1="1" y1="12" x2="3" y2="12" />
            <line x1="21" y1="12" x2="23" y2="12" />
            <line x1="4.22" y1="19.78" x2="5.64" y2="18.36" />
            <line x1="18.36" y1="5.64" x2="19.78" y2="4.22" />
        </svg>
    }
}

#[component]
fn MoonIcon() -> impl IntoView {
    view! {
        <svg xmlns="http://www.w3.org/2000/svg" width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            <path d="M21 12.79A9 9 0 1 1 11.21 3 7 7 0 0 0 21 12.79z" />
        </svg>
    }
}
