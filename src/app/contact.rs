use leptos::{either::Either, prelude::*};
use leptos_meta::Title;

use crate::data;

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <Title text="Contact" />
        <div class="max-w-6xl mx-auto my-10 md:my-5 px-5 md:px-10">
            <h1 class="text-3xl md:text-4xl font-bold mb-8 text-center fade-in-down">
                "Get In Touch"
            </h1>

            <div class="grid grid-cols-1 lg:grid-cols-2 gap-12 items-start">
                <div class="slide-in-left">
                    <ContactInfo />
                    <SocialLinks />
                </div>
                <div class="slide-in-right">
                    <ContactHero />
                </div>
            </div>
        </div>
    }
}

#[component]
fn ContactInfo() -> impl IntoView {
    view! {
        <div class="space-y-8">
            <h2 class="text-2xl font-semibold">"Contact Information"</h2>
            <div class="space-y-6">
                {data::CONTACT_DETAILS
                    .iter()
                    .enumerate()
                    .map(|(i, detail)| {
                        view! {
                            <div
                                class="flex items-start fade-in-up"
                                style=format!("animation-delay: {}ms", i * 100)
                            >
                                <div class="mt-1 mr-4 text-xl" aria-hidden="true">
                                    {detail.icon}
                                </div>
                                <div>
                                    <h3 class="text-lg font-medium mb-1">{detail.label}</h3>
                                    {match detail.href {
                                        Some(href) => {
                                            Either::Left(
                                                view! {
                                                    <a
                                                        href=href
                                                        class="text-muted-foreground hover:text-primary hover:underline transition-colors duration-300"
                                                    >
                                                        {detail.value}
                                                    </a>
                                                },
                                            )
                                        }
                                        None => {
                                            Either::Right(
                                                view! {
                                                    <p class="text-muted-foreground">{detail.value}</p>
                                                },
                                            )
                                        }
                                    }}
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn SocialLinks() -> impl IntoView {
    view! {
        <div class="mt-8 fade-in-up" style="animation-delay: 300ms">
            <h3 class="text-lg font-medium mb-4">"Connect with me"</h3>
            <div class="flex space-x-4">
                {data::SOCIAL_LINKS
                    .iter()
                    .map(|link| {
                        view! {
                            <a
                                href=link.url
                                target="_blank"
                                rel="noopener noreferrer"
                                aria-label=link.name
                                class="inline-flex items-center justify-center w-10 h-10 rounded-md border border-border text-xl hover:-translate-y-1 hover:text-primary transition-all duration-200"
                            >
                                <i class=link.icon></i>
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn ContactHero() -> impl IntoView {
    view! {
        <div class="rounded-2xl p-8 md:p-12 border border-border">
            <div class="max-w-2xl">
                <h2 class="text-3xl md:text-4xl font-bold mb-6 fade-in-up">
                    "Let's work together"
                </h2>
                <p
                    class="text-lg text-muted-foreground mb-8 fade-in-up"
                    style="animation-delay: 100ms"
                >
                    "Have a project in mind or want to discuss potential opportunities? I'm always open to new ideas and collaborations. Let's create something amazing together."
                </p>
                <div
                    class="flex flex-col sm:flex-row gap-4 fade-in-up"
                    style="animation-delay: 200ms"
                >
                    <a
                        href="mailto:zen.bisnis17@gmail.com"
                        class="inline-flex items-center justify-center px-6 py-3 rounded-md font-medium bg-primary text-primary-foreground hover:opacity-90 transition-opacity duration-200"
                    >
                        "Get in Touch"
                        <span class="ml-2" aria-hidden="true">"→"</span>
                    </a>
                    <a
                        href="/cv.pdf"
                        download
                        class="inline-flex items-center justify-center px-6 py-3 rounded-md font-medium border border-border hover:bg-muted/20 transition-colors duration-200"
                    >
                        "View My CV"
                    </a>
                </div>
            </div>
        </div>
    }
}
