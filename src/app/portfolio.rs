use leptos::prelude::*;
use leptos_meta::Title;

use crate::data;

#[component]
pub fn PortfolioPage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <div class="max-w-6xl mx-auto px-4 py-12">
            <div class="text-center mb-12">
                <h1 class="text-3xl md:text-4xl font-bold mb-4 fade-in-down">"Portfolio"</h1>
                <p
                    class="text-muted-foreground max-w-2xl mx-auto fade-in-down"
                    style="animation-delay: 150ms"
                >
                    "A selection of projects across the stacks I work in. Each one shipped, each one taught me something."
                </p>
            </div>

            <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
                {data::PROJECTS
                    .iter()
                    .enumerate()
                    .map(|(i, project)| view! { <ProjectCard project delay_ms={i * 100} /> })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn ProjectCard(project: &'static data::Project, delay_ms: usize) -> impl IntoView {
    let anchor = project.link.rsplit('#').next().unwrap_or_default();

    view! {
        <article
            id=anchor
            class="bg-card rounded-lg border border-border overflow-hidden hover:-translate-y-1 hover:shadow-lg transition-all duration-300 fade-in-up"
            style=format!("animation-delay: {delay_ms}ms")
        >
            <div
                class="relative h-48 bg-cover bg-center"
                style:background-image=format!("url({})", project.image_url)
            >
                <div class="absolute inset-0 bg-black/40"></div>
                <span class="absolute bottom-3 left-4 text-white text-sm font-medium">
                    {project.brand}
                </span>
            </div>
            <div class="p-6">
                <h2 class="text-xl font-bold mb-2">{project.title}</h2>
                <p class="text-muted-foreground text-sm mb-4">{project.description}</p>
                <div class="flex flex-wrap gap-2">
                    {project
                        .tags
                        .iter()
                        .map(|tag| {
                            view! {
                                <span class="text-xs px-2 py-1 rounded bg-primary/10 text-primary">
                                    {*tag}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </article>
    }
}
