use leptos::{either::Either, prelude::*};
use leptos_router::{components::A, hooks::use_location};

use super::theme::ThemeToggle;
use crate::data;

fn is_active(pathname: &str, href: &str) -> bool {
    if href == "/" {
        pathname == "/"
    } else {
        pathname == href || pathname.starts_with(&format!("{href}/"))
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);
    let pathname = use_location().pathname;

    view! {
        <nav class="border-b border-border backdrop-blur-lg sticky top-0 z-50 bg-background/80 nav-enter">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    <div class="flex-shrink-0 flex items-center slide-in-left">
                        <A
                            href="/"
                            attr:class="text-xl text-primary font-bold relative inline-block hover:scale-105 transition-transform duration-200"
                        >
                            "Zentaza"
                        </A>
                    </div>

                    <div class="hidden md:block">
                        <div class="ml-10 flex items-baseline space-x-4">
                            {data::NAV_ITEMS
                                .iter()
                                .enumerate()
                                .map(|(i, item)| {
                                    let active =
                                        move || is_active(&pathname.get(), item.href);
                                    view! {
                                        <A
                                            href=item.href
                                            attr:class="nav-link px-3 py-2 text-sm font-medium relative transition-all duration-300 hover:text-primary hover:-translate-y-0.5 fade-in-down"
                                            attr:style=format!("animation-delay: {}ms", 300 + i * 100)
                                        >
                                            {item.label}
                                            <span
                                                class="absolute bottom-0 left-1/2 h-0.5 bg-primary -translate-x-1/2 transition-all duration-300"
                                                style:width=move || {
                                                    if active() { "100%" } else { "0%" }
                                                }
                                            ></span>
                                        </A>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <div class="flex items-center slide-in-right">
                        <ThemeToggle />
                        <div class="md:hidden">
                            <button
                                class="p-2 text-muted-foreground hover:text-primary"
                                aria-label="Toggle menu"
                                on:click=move |_| set_menu_open.update(|open| *open = !*open)
                            >
                                {move || {
                                    if menu_open.get() {
                                        Either::Left(view! { <CloseIcon /> })
                                    } else {
                                        Either::Right(view! { <MenuIcon /> })
                                    }
                                }}
                            </button>
                        </div>
                    </div>
                </div>
            </div>

            {move || {
                menu_open
                    .get()
                    .then(|| {
                        view! {
                            <div class="md:hidden overflow-hidden menu-expand">
                                <div class="px-2 pt-2 pb-3 space-y-1 sm:px-3">
                                    {data::NAV_ITEMS
                                        .iter()
                                        .map(|item| {
                                            let active =
                                                move || is_active(&pathname.get(), item.href);
                                            view! {
                                                <div on:click=move |_| set_menu_open.set(false)>
                                                    <A
                                                        href=item.href
                                                        attr:class=move || {
                                                            if active() {
                                                                "block px-3 py-2 text-base font-medium relative text-primary transition-all duration-300"
                                                            } else {
                                                                "block px-3 py-2 text-base font-medium relative hover:text-primary transition-all duration-300"
                                                            }
                                                        }
                                                    >
                                                        {item.label}
                                                    </A>
                                                </div>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </div>
                        }
                    })
            }}
        </nav>
    }
}

#[component]
fn MenuIcon() -> impl IntoView {
    view! {
        <svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            <line x1="3" y1="6" x2="21" y2="6" />
            <line x1="3" y1="12" x2="21" y2="12" />
            <line x1="3" y1="18" x2="21" y2="18" />
        </svg>
    }
}

#[component]
fn CloseIcon() -> impl IntoView {
    view! {
        <svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            <line x1="18" y1="6" x2="6" y2="18" />
            <line x1="6" y1="6" x2="18" y2="18" />
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_only_matches_exactly() {
        assert!(is_active("/", "/"));
        assert!(!is_active("/about", "/"));
    }

    #[test]
    fn sections_match_themselves_and_children() {
        assert!(is_active("/blog", "/blog"));
        assert!(is_active("/blog/some-post", "/blog"));
        assert!(!is_active("/blogroll", "/blog"));
        assert!(!is_active("/contact", "/blog"));
    }
}
