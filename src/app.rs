mod about;
mod background;
mod blog;
mod carousel;
mod certifications;
mod contact;
mod hero;
mod home;
mod navbar;
mod portfolio;
mod profile_card;
mod scroll_text;
mod skills;
mod theme;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use about::AboutPage;
use blog::{BlogHome, BlogPage, BlogWrapper};
use contact::ContactPage;
use home::HomePage;
use navbar::Navbar;
use portfolio::PortfolioPage;
use theme::{provide_color_mode, ColorMode};

use crate::data;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/zentaza-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    let theme = provide_color_mode();

    view! {
        // sets the document title
        <Title formatter=|title| format!("Zentaza - {title}") />

        <Router>
            <div
                class="flex flex-col min-h-screen bg-background text-foreground"
                class:dark=move || theme.mode.get() == ColorMode::Dark
            >
                <Navbar />
                <main class="flex flex-col flex-grow w-full">
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=path!("/") view=HomePage />
                        <Route path=path!("/about") view=AboutPage />
                        <Route path=path!("/portfolio") view=PortfolioPage />
                        <ParentRoute path=path!("/blog") view=BlogWrapper>
                            <Route path=path!("") view=BlogHome />
                            <Route path=path!(":post") view=BlogPage />
                        </ParentRoute>
                        <Route path=path!("/contact") view=ContactPage />
                    </Routes>
                </main>
                <Footer />
            </div>
        </Router>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="border-t border-border mt-16">
            <div class="container mx-auto px-4 py-8 flex flex-col sm:flex-row items-center justify-between gap-4">
                <p class="text-sm text-muted-foreground">
                    "© 2025 Zentaza. Designed & built with Rust."
                </p>
                <div class="flex items-center gap-4">
                    {data::SOCIAL_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <a
                                    href=link.url
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    aria-label=link.name
                                    class="text-muted-foreground hover:text-primary text-xl transition-colors duration-200"
                                >
                                    <i class=link.icon></i>
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
                <p class="text-xs text-muted-foreground">
                    {format!("v{} · built {}", env!("CARGO_PKG_VERSION"), env!("BUILD_TIME"))}
                </p>
            </div>
        </footer>
    }
}
