use leptos::prelude::*;
use leptos_meta::Title;

use super::certifications::CertificationsSection;
use super::skills::SkillsGrid;
use crate::data;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <Title text="About Me" />
        <div class="max-w-6xl mx-auto px-4 py-12">
            <h1 class="text-3xl md:text-4xl font-bold mb-8 text-center fade-in-down">
                "About Me"
            </h1>
            <JourneySection />
            <ExperienceSection />
            <SkillsGrid />
        </div>
        <CertificationsSection />
    }
}

#[component]
fn JourneySection() -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 md:grid-cols-3 gap-8 mb-12">
            <div class="md:col-span-2 fade-in-up">
                <h2 class="text-2xl font-semibold mb-4">"My Journey"</h2>
                <p class="text-muted-foreground mb-4">
                    "I'm a passionate Fullstack Developer with expertise spanning Software Engineering, Data Science/AI, Cybersecurity, and IoT. With over 5 years of experience in the tech industry, I've had the opportunity to work on diverse projects that have shaped my skills and approach to problem-solving."
                </p>
                <p class="text-muted-foreground mb-4">
                    "My journey began with a hobby in high school, then pursuing a bachelor's degree in Computer Engineering, followed by practical experience in startups and large companies. I have developed a unique ability to bridge the gap between technical implementation and business requirements."
                </p>
                <p class="text-muted-foreground">
                    "When I'm not coding, you can find me contributing to open-source projects, tinkering with microcontrollers, or writing up what I learned on the blog."
                </p>
            </div>
            <div class="fade-in-up" style="animation-delay: 200ms">
                <div class="rounded-2xl overflow-hidden border border-border">
                    <img
                        src="/assets/profile.webp"
                        alt="Zentaza"
                        class="w-full aspect-square object-cover"
                        loading="lazy"
                    />
                </div>
            </div>
        </div>
    }
}

#[component]
fn ExperienceSection() -> impl IntoView {
    view! {
        <section class="mb-12">
            <h2 class="text-2xl font-semibold mb-6">"Experience"</h2>
            <div class="space-y-6">
                {data::EXPERIENCES
                    .iter()
                    .enumerate()
                    .map(|(i, exp)| {
                        view! {
                            <div
                                class="border-l-2 border-primary pl-4 py-1 fade-in-up"
                                style=format!("animation-delay: {}ms", i * 100)
                            >
                                <div class="flex flex-col md:flex-row md:justify-between md:items-center">
                                    <h3 class="text-xl font-medium">{exp.title}</h3>
                                    <span class="text-sm text-muted-foreground">{exp.period}</span>
                                </div>
                                <p class="text-primary">{exp.company}</p>
                                <p class="text-muted-foreground mt-2">{exp.description}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
