use leptos::prelude::*;
use leptos_use::use_interval_fn;

use super::profile_card::ProfileCard;
use crate::data;

/// Milliseconds between typing ticks.
const TICK_MS: u64 = 40;
/// Ticks to hold a fully typed line before deleting it (~1s).
const HOLD_TICKS: u32 = 25;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Typing,
    Holding(u32),
    Deleting,
}

/// Endless type-hold-delete cycle over a list of lines. Counts characters,
/// not bytes, so multi-byte separators type one glyph at a time.
#[derive(Debug, Clone)]
pub(crate) struct TypingLoop {
    texts: &'static [&'static str],
    index: usize,
    shown: usize,
    phase: Phase,
}

impl TypingLoop {
    pub(crate) fn new(texts: &'static [&'static str]) -> Self {
        Self {
            texts,
            index: 0,
            shown: 0,
            phase: Phase::Typing,
        }
    }

    fn char_len(&self) -> usize {
        self.texts[self.index].chars().count()
    }

    pub(crate) fn current(&self) -> String {
        if self.texts.is_empty() {
            return String::new();
        }
        self.texts[self.index].chars().take(self.shown).collect()
    }

    pub(crate) fn tick(&mut self) {
        if self.texts.is_empty() {
            return;
        }
        match self.phase {
            Phase::Typing => {
                if self.shown < self.char_len() {
                    self.shown += 1;
                }
                if self.shown == self.char_len() {
                    self.phase = Phase::Holding(HOLD_TICKS);
                }
            }
            Phase::Holding(0) => self.phase = Phase::Deleting,
            Phase::Holding(n) => self.phase = Phase::Holding(n - 1),
            Phase::Deleting => {
                if self.shown > 0 {
                    self.shown -= 1;
                }
                if self.shown == 0 {
                    self.index = (self.index + 1) % self.texts.len();
                    self.phase = Phase::Typing;
                }
            }
        }
    }
}

#[component]
pub fn HeroSection() -> impl IntoView {
    view! {
        <div class="container mx-auto px-4 py-16 lg:py-24">
            <div class="flex flex-col lg:flex-row items-center gap-8 md:gap-12">
                <div class="flex-1 w-full text-center lg:text-left">
                    <div
                        class="flex flex-col sm:flex-row items-center sm:items-start justify-center lg:justify-start gap-3 mb-6 fade-in-up"
                        style="animation-delay: 0ms"
                    >
                        <span class="text-4xl md:text-5xl lg:text-6xl font-bold">
                            "Hi, I'm"
                        </span>
                        <AuroraText text="Zentaza" />
                    </div>

                    <div
                        class="h-auto min-h-[6rem] md:min-h-[7rem] lg:min-h-[8rem] mb-8 flex items-center justify-center lg:justify-start fade-in-up"
                        style="animation-delay: 200ms"
                    >
                        <TypedRoles />
                    </div>

                    <div
                        class="flex flex-col sm:flex-row justify-center lg:justify-start gap-4 fade-in-up"
                        style="animation-delay: 400ms"
                    >
                        <a
                            href="/portfolio"
                            class="btn-shine inline-flex items-center justify-center px-8 py-3 rounded-md font-medium"
                        >
                            "View My Work"
                            <span class="ml-2" aria-hidden="true">"→"</span>
                        </a>
                        <a
                            href="/contact"
                            class="inline-flex items-center justify-center px-8 py-3 rounded-md font-medium border border-border hover:bg-muted/20 transition-colors duration-200"
                        >
                            "Get in Touch"
                        </a>
                    </div>
                </div>

                <div class="flex-1 w-full fade-in-up" style="animation-delay: 600ms">
                    <ProfileCard />
                </div>
            </div>
        </div>
    }
}

/// Layered gradient headline: a blurred glow copy underneath, the animated
/// gradient text on top, a shimmer sweep above.
#[component]
fn AuroraText(text: &'static str) -> impl IntoView {
    view! {
        <div class="relative inline-block">
            <div class="absolute inset-0 blur-lg opacity-30" aria-hidden="true">
                <span class="text-4xl md:text-5xl lg:text-6xl font-bold aurora-gradient aurora-pulse">
                    {text}
                </span>
            </div>
            <span class="text-4xl md:text-5xl lg:text-6xl font-bold relative z-10 aurora-gradient aurora-flow drop-shadow-lg">
                {text}
            </span>
            <div class="absolute inset-0 z-20 opacity-40" aria-hidden="true">
                <span class="text-4xl md:text-5xl lg:text-6xl font-bold aurora-shimmer">
                    {text}
                </span>
            </div>
        </div>
    }
}

#[component]
fn TypedRoles() -> impl IntoView {
    let state = StoredValue::new(TypingLoop::new(data::HERO_ROLES));
    let (line, set_line) = signal(String::new());

    let _ = use_interval_fn(
        move || {
            state.update_value(|s| s.tick());
            set_line.set(state.with_value(|s| s.current()));
        },
        TICK_MS,
    );

    view! {
        <p class="text-xl md:text-2xl lg:text-3xl text-muted-foreground max-w-2xl leading-tight">
            {line}
            <span class="typing-caret" aria-hidden="true">"▎"</span>
        </p>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LINES: &[&str] = &["ab", "c • d"];

    #[test]
    fn types_one_character_per_tick() {
        let mut t = TypingLoop::new(LINES);
        assert_eq!(t.current(), "");
        t.tick();
        assert_eq!(t.current(), "a");
        t.tick();
        assert_eq!(t.current(), "ab");
    }

    #[test]
    fn holds_then_deletes_then_advances() {
        let mut t = TypingLoop::new(LINES);
        t.tick();
        t.tick();
        assert_eq!(t.current(), "ab");
        // Hold keeps the full line on screen.
        for _ in 0..=HOLD_TICKS {
            t.tick();
            assert_eq!(t.current(), "ab");
        }
        t.tick();
        assert_eq!(t.current(), "a");
        t.tick();
        assert_eq!(t.current(), "");
        // Next tick starts typing the second line.
        t.tick();
        assert_eq!(t.current(), "c");
    }

    #[test]
    fn counts_characters_not_bytes() {
        let mut t = TypingLoop::new(&["•x"]);
        t.tick();
        assert_eq!(t.current(), "•");
        t.tick();
        assert_eq!(t.current(), "•x");
    }

    #[test]
    fn wraps_around_to_the_first_line() {
        let mut t = TypingLoop::new(&["a"]);
        // Type, hold, delete, retype: the cycle must not stall.
        for _ in 0..200 {
            t.tick();
        }
        let before = t.current();
        for _ in 0..200 {
            t.tick();
        }
        // Still cycling, still producing prefixes of the only line.
        assert!(t.current().is_empty() || t.current() == "a");
        assert!(before.is_empty() || before == "a");
    }
}
