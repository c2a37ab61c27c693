use leptos::prelude::*;
use leptos_meta::Title;

use super::background::GridBackground;
use super::carousel::ProjectStack;
use super::hero::HeroSection;
use super::scroll_text::ScrollReveal;
use super::skills::SkillShowcase;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Home" />
        <GridBackground>
            <HeroSection />
        </GridBackground>
        <ScrollReveal />
        <SkillShowcase />
        <ProjectStack />
        <CtaSection />
    }
}

#[component]
fn CtaSection() -> impl IntoView {
    view! {
        <section class="py-16">
            <div class="container mx-auto px-4 text-center">
                <h2 class="text-3xl font-bold mb-4 fade-in-up">
                    "Interested in Working Together?"
                </h2>
                <p
                    class="text-muted-foreground mb-8 max-w-2xl mx-auto fade-in-up"
                    style="animation-delay: 150ms"
                >
                    "I'm always open to discussing new projects, creative ideas, or opportunities to be part of your vision."
                </p>
                <div class="fade-in-up" style="animation-delay: 300ms">
                    <a
                        href="/contact"
                        class="inline-flex items-center px-8 py-3 rounded-md font-medium bg-primary text-primary-foreground hover:opacity-90 transition-opacity duration-200"
                    >
                        "Let's Discuss"
                    </a>
                </div>
            </div>
        </section>
    }
}
