use leptos::prelude::*;
use leptos_use::{use_raf_fn, UseRafFnCallbackArgs};

use crate::data;

/// Vertical travel of each marquee column, in px.
const TRAVEL: f64 = 250.0;
const COLUMNS: usize = 4;

/// Triangle wave in [0,1]: one leg takes `duration` seconds, then the
/// motion reverses.
pub(crate) fn pingpong(elapsed: f64, duration: f64) -> f64 {
    if duration <= 0.0 {
        return 0.0;
    }
    let phase = (elapsed / duration).rem_euclid(2.0);
    if phase <= 1.0 {
        phase
    } else {
        2.0 - phase
    }
}

/// Y offset for a marquee column. Even columns drift 0 → -TRAVEL, odd
/// columns run the opposite leg on a slower clock so neighbours never sync.
pub(crate) fn column_offset(elapsed: f64, column: usize) -> f64 {
    let duration = if column % 2 == 0 { 25.0 } else { 35.0 };
    let phase = pingpong(elapsed, duration);
    if column % 2 == 0 {
        -TRAVEL * phase
    } else {
        -TRAVEL * (1.0 - phase)
    }
}

#[component]
pub fn CertificationsSection() -> impl IntoView {
    let (selected, set_selected) = signal(None::<&'static data::Certification>);

    // One shared clock drives every column.
    let (elapsed, set_elapsed) = signal(0.0f64);
    let _ = use_raf_fn(move |args: UseRafFnCallbackArgs| {
        set_elapsed.update(|t| *t += args.delta / 1000.0);
    });

    // Duplicate the list so the columns stay filled while they drift.
    let doubled: Vec<&'static data::Certification> = data::CERTIFICATIONS
        .iter()
        .chain(data::CERTIFICATIONS.iter())
        .collect();
    let group_size = doubled.len().div_ceil(COLUMNS).max(1);
    let columns: Vec<Vec<&'static data::Certification>> = doubled
        .chunks(group_size)
        .map(|chunk| chunk.to_vec())
        .collect();

    view! {
        <section class="relative my-10 w-full h-screen overflow-hidden pointer-events-none">
            <div class="absolute top-16 sm:top-24 left-1/2 -translate-x-1/2 z-30 w-full max-w-4xl px-4 text-center pointer-events-none fade-in-down">
                <h2 class="text-4xl sm:text-5xl font-bold">"Certifications"</h2>
                <p class="mt-4 text-lg text-muted-foreground">
                    "Click on any certificate to view details."
                </p>
            </div>

            // Fade edges so the marquee blends into the page.
            <div class="absolute inset-0 z-20 pointer-events-none">
                <div class="absolute top-0 left-0 right-0 h-48 bg-gradient-to-b from-background to-transparent"></div>
                <div class="absolute bottom-0 left-0 right-0 h-48 bg-gradient-to-t from-background to-transparent"></div>
                <div class="absolute top-0 bottom-0 left-0 w-48 bg-gradient-to-r from-background to-transparent"></div>
                <div class="absolute top-0 bottom-0 right-0 w-48 bg-gradient-to-l from-background to-transparent"></div>
            </div>

            <div
                class="relative z-10 w-full h-full flex items-center justify-center"
                style="transform: rotateX(55deg) rotateY(0deg) rotateZ(45deg) scale(0.9); transform-style: preserve-3d"
            >
                <div class="grid grid-cols-4 gap-64 md:gap-40 w-full pointer-events-auto">
                    {columns
                        .into_iter()
                        .enumerate()
                        .map(|(column, certs)| {
                            view! {
                                <div
                                    class="flex flex-col items-center gap-8"
                                    style:transform=move || {
                                        format!(
                                            "translateY({:.1}px)",
                                            column_offset(elapsed.get(), column),
                                        )
                                    }
                                >
                                    {certs
                                        .into_iter()
                                        .map(|cert| {
                                            view! { <CertCard cert set_selected /> }
                                        })
                                        .collect_view()}
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            {move || {
                selected
                    .get()
                    .map(|cert| view! { <CertModal cert set_selected /> })
            }}
        </section>
    }
}

#[component]
fn CertCard(
    cert: &'static data::Certification,
    set_selected: WriteSignal<Option<&'static data::Certification>>,
) -> impl IntoView {
    view! {
        <button
            class="relative group cursor-pointer cert-card"
            on:click=move |_| set_selected.set(Some(cert))
        >
            <div class="relative w-[250px] aspect-[4/3] bg-card rounded-xl overflow-hidden shadow-xl hover:shadow-2xl transition-all duration-300 border border-border">
                <img
                    src=cert.image
                    alt=cert.title
                    class="w-full h-full object-cover"
                    loading="lazy"
                />
                // Sheen that sweeps across on hover.
                <div class="absolute inset-0 bg-gradient-to-r from-transparent via-foreground/30 to-transparent -skew-x-12 -translate-x-full transition-transform duration-700 group-hover:translate-x-full"></div>
            </div>
        </button>
    }
}

#[component]
fn CertModal(
    cert: &'static data::Certification,
    set_selected: WriteSignal<Option<&'static data::Certification>>,
) -> impl IntoView {
    view! {
        <div
            class="fixed inset-0 z-50 flex items-center justify-center p-4 bg-black/70 backdrop-blur-sm pointer-events-auto modal-fade"
            on:click=move |_| set_selected.set(None)
        >
            <div
                class="relative bg-card rounded-2xl max-w-lg w-full max-h-[90vh] overflow-y-auto shadow-2xl border border-border modal-pop"
                on:click=move |ev| ev.stop_propagation()
            >
                <button
                    class="absolute top-4 right-4 z-10 bg-muted/40 hover:bg-muted/60 rounded-full p-2 transition-colors duration-200"
                    aria-label="Close"
                    on:click=move |_| set_selected.set(None)
                >
                    <svg class="w-5 h-5" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M6 18L18 6M6 6l12 12" />
                    </svg>
                </button>

                <div class="relative">
                    <img
                        src=cert.image
                        alt=cert.title
                        class="w-full aspect-[4/3] object-cover rounded-t-2xl"
                    />
                    {cert
                        .credential_id
                        .map(|_| {
                            view! {
                                <div class="absolute top-4 left-4 bg-green-500 text-white px-3 py-1 rounded-full text-sm font-semibold shadow-lg">
                                    "Verified Certificate"
                                </div>
                            }
                        })}
                </div>

                <div class="p-6">
                    <h3 class="text-2xl font-bold mb-3">{cert.title}</h3>

                    <div class="space-y-3 mb-6 text-muted-foreground">
                        <div class="flex items-center">
                            <span class="font-medium">"Issued by:"</span>
                            <span class="ml-2">{cert.issuer}</span>
                        </div>
                        <div class="flex items-center">
                            <span class="font-medium">"Date:"</span>
                            <span class="ml-2">{cert.date}</span>
                        </div>
                        {cert
                            .credential_id
                            .map(|id| {
                                view! {
                                    <div class="flex items-center">
                                        <span class="font-medium">"Credential ID:"</span>
                                        <span class="ml-2 font-mono text-sm bg-muted/30 px-2 py-1 rounded">
                                            {id}
                                        </span>
                                    </div>
                                }
                            })}
                    </div>

                    <div class="flex gap-3">
                        {cert
                            .href
                            .map(|href| {
                                view! {
                                    <a
                                        href=href
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="flex-1 bg-blue-600 hover:bg-blue-700 text-white px-4 py-3 rounded-xl font-medium transition-colors duration-200 text-center"
                                    >
                                        "View Original"
                                    </a>
                                }
                            })}
                        <button
                            class="px-4 py-3 bg-muted/30 hover:bg-muted/50 rounded-xl font-medium transition-colors duration-200"
                            on:click=move |_| set_selected.set(None)
                        >
                            "Close"
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pingpong_is_a_triangle_wave() {
        assert_eq!(pingpong(0.0, 25.0), 0.0);
        assert_eq!(pingpong(12.5, 25.0), 0.5);
        assert_eq!(pingpong(25.0, 25.0), 1.0);
        assert_eq!(pingpong(37.5, 25.0), 0.5);
        assert_eq!(pingpong(50.0, 25.0), 0.0);
    }

    #[test]
    fn pingpong_handles_degenerate_durations() {
        assert_eq!(pingpong(10.0, 0.0), 0.0);
        assert_eq!(pingpong(10.0, -5.0), 0.0);
    }

    #[test]
    fn columns_stay_within_the_travel_range() {
        for column in 0..COLUMNS {
            let mut t = 0.0;
            while t < 200.0 {
                let y = column_offset(t, column);
                assert!((-TRAVEL..=0.0).contains(&y), "column {column} at {t}: {y}");
                t += 0.37;
            }
        }
    }

    #[test]
    fn adjacent_columns_start_at_opposite_ends() {
        assert_eq!(column_offset(0.0, 0), 0.0);
        assert_eq!(column_offset(0.0, 1), -TRAVEL);
    }
}
