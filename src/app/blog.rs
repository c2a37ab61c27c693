use leptos::server_fn::codec::GetUrl;
use leptos::{either::Either, html::Input, prelude::*};
use leptos_meta::Title;
use leptos_router::{components::*, hooks::*};

#[cfg(feature = "ssr")]
use crate::blog::{get_meta, get_post};
use crate::blog::{
    collect_tags, page_slice, total_pages, Post, PostMeta, META_CACHE, POSTS_PER_PAGE, POST_CACHE,
};

#[server(input = GetUrl)]
pub async fn search_articles(pattern: String) -> Result<Vec<PostMeta>, ServerFnError> {
    get_meta(pattern)
        .await
        .ok_or(ServerFnError::new("Couldn't parse articles"))
}

#[server(input = GetUrl)]
pub async fn fetch_article(slug: String) -> Result<Post, ServerFnError> {
    let name = format!("{slug}.md");
    get_post(name)
        .await
        .ok_or(ServerFnError::new("Couldn't get article"))
}

#[component]
pub fn BlogWrapper() -> impl IntoView {
    view! {
        <Title text="Blog" />
        <div class="text-center mb-8 mt-12">
            <h1 class="font-bold text-3xl lg:text-4xl mb-4 fade-in-down">"Blog"</h1>
            <div class="max-w-2xl mx-auto text-lg font-medium text-muted-foreground px-4">
                "Notes from across the stack: web, data, security and hardware."
            </div>
        </div>
        <div class="w-full max-w-4xl mx-auto text-left px-4">
            <Outlet />
        </div>
    }
}

#[component]
pub fn BlogHome() -> impl IntoView {
    let (search, set_search) = signal(String::new());
    let (active_tag, set_active_tag) = signal(None::<String>);
    let (page, set_page) = signal(1usize);
    let input_ref = NodeRef::<Input>::new();

    let posts = Resource::new(move || search.get(), move |search| async move {
        let cache = &*META_CACHE;
        if let Some(cached) = cache.get(&search) {
            return (*cached).clone();
        }
        let meta = search_articles(search.clone()).await.unwrap_or_default();
        // only cache every search on the browser
        #[cfg(feature = "hydrate")]
        cache.insert(search, meta.clone());
        meta
    });

    view! {
        <Title text="Blog" />
        <div class="mb-6">
            <form
                class="relative"
                on:submit=move |ev| {
                    ev.prevent_default();
                    let el = if let Some(el) = input_ref.get_untracked() {
                        el
                    } else {
                        return;
                    };
                    set_page.set(1);
                    set_active_tag.set(None);
                    set_search.set(el.value());
                }
            >
                <input
                    type="text"
                    node_ref=input_ref
                    placeholder="Search articles (regex)..."
                    class="w-full px-4 py-2 rounded-md border border-border bg-background focus:outline-none focus:ring-2 focus:ring-primary transition-all duration-200"
                />
            </form>
        </div>

        <Transition fallback=move || {
            view! {
                <div class="space-y-4">
                    <div class="loading-skeleton h-8 rounded"></div>
                    <div class="loading-skeleton h-6 rounded w-3/4"></div>
                    <div class="loading-skeleton h-8 rounded"></div>
                    <div class="loading-skeleton h-6 rounded w-2/3"></div>
                </div>
            }
        }>
            {move || {
                let tag = active_tag.get();
                let current_page = page.get();
                Suspend::new(async move {
                    let all = posts.await;
                    let tags = collect_tags(&all);
                    let filtered: Vec<PostMeta> = match &tag {
                        Some(t) => all.iter().filter(|p| p.tags.contains(t)).cloned().collect(),
                        None => all,
                    };
                    let pages = total_pages(filtered.len(), POSTS_PER_PAGE);
                    let current_page = current_page.min(pages);
                    let visible: Vec<PostMeta> =
                        page_slice(&filtered, POSTS_PER_PAGE, current_page).to_vec();

                    view! {
                        <div class="flex flex-wrap gap-2 mb-8">
                            <FilterButton
                                label={"All".to_string()}
                                active=tag.is_none()
                                on_pick=move |_| {
                                    set_active_tag.set(None);
                                    set_page.set(1);
                                }
                            />
                            {tags
                                .into_iter()
                                .map(|t| {
                                    let label = t.clone();
                                    let is_active = tag.as_deref() == Some(t.as_str());
                                    view! {
                                        <FilterButton
                                            label
                                            active=is_active
                                            on_pick=move |_| {
                                                set_active_tag.set(Some(t.clone()));
                                                set_page.set(1);
                                            }
                                        />
                                    }
                                })
                                .collect_view()}
                        </div>

                        <div class="space-y-8">
                            {if visible.is_empty() {
                                Either::Left(
                                    view! {
                                        <div class="text-center py-12">
                                            <p class="text-muted-foreground">
                                                "No articles found matching your criteria."
                                            </p>
                                        </div>
                                    },
                                )
                            } else {
                                Either::Right(
                                    visible
                                        .into_iter()
                                        .enumerate()
                                        .map(|(i, post)| {
                                            view! { <ArticleCard post delay_ms={i * 100} /> }
                                        })
                                        .collect_view(),
                                )
                            }}
                        </div>

                        {(pages > 1)
                            .then(|| view! { <Pagination pages current=current_page set_page /> })}
                    }
                })
            }}
        </Transition>
    }
}

#[component]
fn FilterButton(
    label: String,
    active: bool,
    on_pick: impl FnMut(leptos::ev::MouseEvent) + 'static,
) -> impl IntoView {
    let class = if active {
        "px-3 py-1 text-sm rounded-md bg-primary text-primary-foreground"
    } else {
        "px-3 py-1 text-sm rounded-md border border-border text-muted-foreground hover:text-primary transition-colors duration-200"
    };
    view! {
        <button class=class on:click=on_pick>
            {label}
        </button>
    }
}

#[component]
fn ArticleCard(post: PostMeta, delay_ms: usize) -> impl IntoView {
    view! {
        <article
            class="bg-card rounded-lg border border-border p-6 hover:shadow-md hover:-translate-y-1 transition-all duration-300 fade-in-up"
            style=format!("animation-delay: {delay_ms}ms")
        >
            <div class="flex flex-col md:flex-row md:justify-between md:items-center mb-4">
                <h2 class="text-2xl font-semibold mb-2 md:mb-0">
                    <A href=post.slug.clone() attr:class="hover:text-primary transition-colors">
                        {post.title.clone()}
                    </A>
                </h2>
                <span class="text-sm text-muted-foreground">
                    {post.date.format("%b %e, %Y").to_string()}
                </span>
            </div>
            <p class="text-muted-foreground mb-4">{post.excerpt.clone()}</p>
            <div class="flex flex-wrap gap-2">
                {post
                    .tags
                    .iter()
                    .map(|t| {
                        view! {
                            <span class="text-xs bg-primary/10 text-primary px-2 py-1 rounded">
                                {t.to_string()}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>
        </article>
    }
}

#[component]
fn Pagination(pages: usize, current: usize, set_page: WriteSignal<usize>) -> impl IntoView {
    view! {
        <nav class="flex items-center justify-center space-x-2 mt-12">
            <button
                class="px-3 py-1 text-sm rounded-md border border-border disabled:opacity-40"
                disabled={current <= 1}
                on:click=move |_| set_page.update(|p| *p = p.saturating_sub(1).max(1))
            >
                "Previous"
            </button>
            {(1..=pages)
                .map(|p| {
                    let class = if p == current {
                        "px-3 py-1 text-sm rounded-md bg-primary text-primary-foreground"
                    } else {
                        "px-3 py-1 text-sm rounded-md border border-border hover:text-primary"
                    };
                    view! {
                        <button class=class on:click=move |_| set_page.set(p)>
                            {p}
                        </button>
                    }
                })
                .collect_view()}
            <button
                class="px-3 py-1 text-sm rounded-md border border-border disabled:opacity-40"
                disabled={current >= pages}
                on:click=move |_| set_page.update(|p| *p = (*p + 1).min(pages))
            >
                "Next"
            </button>
        </nav>
    }
}

#[component]
pub fn BlogPage() -> impl IntoView {
    let params = use_params_map();
    let slug = move || params.get().get("post").unwrap_or_default();
    let post = Resource::new(slug, move |slug| async move {
        let cache = &*POST_CACHE;
        let name = format!("{slug}.md");
        if let Some(cached) = cache.get(&name) {
            return (*cached)
                .clone()
                .ok_or(ServerFnError::new("Couldn't get article"));
        }
        let post_data = fetch_article(slug).await;
        cache.insert(name, post_data.clone().ok());
        post_data
    });

    view! {
        <Title text="Blog Article" />
        <div id="blog_content">
            <A
                href="/blog"
                attr:class="inline-flex items-center text-sm text-muted-foreground hover:text-primary mb-6"
            >
                <span class="mr-1" aria-hidden="true">"←"</span>
                "All articles"
            </A>
            <Suspense>
                {move || Suspend::new(async move {
                    let post = post.await;
                    post.map(|p| {
                        view! {
                            <h1 class="text-3xl lg:text-4xl font-bold mb-4">{p.meta.title}</h1>
                            <div class="mb-6 p-4 bg-muted/10 rounded-md border border-border">
                                <div class="flex flex-wrap items-center gap-4 text-sm">
                                    <span class="text-primary font-medium">{p.meta.author}</span>
                                    <span class="text-muted-foreground">
                                        {p.meta.date.format("%b %e, %Y").to_string()}
                                    </span>
                                    <div class="flex flex-wrap gap-1">
                                        {p
                                            .meta
                                            .tags
                                            .into_iter()
                                            .map(|tag| {
                                                view! {
                                                    <span class="bg-primary/10 text-primary px-2 py-1 rounded text-xs">
                                                        {tag}
                                                    </span>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                </div>
                            </div>
                            <article class="prose prose-invert max-w-none">
                                <div inner_html=p.content></div>
                            </article>
                        }
                    })
                })}
            </Suspense>
        </div>
    }
}
