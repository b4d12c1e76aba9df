use yew::prelude::*;

use crate::components::icons::{self, Icon};
use crate::components::reveal::Reveal;
use crate::sections::SectionProps;

#[function_component(Booking)]
pub fn booking(props: &SectionProps) -> Html {
    let config = &props.config;
    let booking = &config.booking;

    html! {
        <section class="booking">
            <div class="booking__backdrop"></div>

            <div class="booking__inner">
                <Reveal class="booking__card">
                    <span class="eyebrow">{&booking.heading.eyebrow}</span>
                    <h2 class="section-title">{&booking.heading.title}</h2>
                    <p class="booking__text">{&booking.text}</p>
                    <a href={config.links.booking_url.clone()} target="_blank" rel="noopener noreferrer" class="cta-button booking__cta">
                        <Icon paths={icons::CALENDAR} size={18} />
                        <span>{&config.labels.book_online}</span>
                    </a>
                </Reveal>
            </div>

            <style>
                {r#"
                .booking {
                    position: relative;
                    overflow: hidden;
                    padding: 3rem 1.5rem;
                }

                .booking__backdrop {
                    position: absolute;
                    inset: 0;
                    z-index: 0;
                    background: color-mix(in srgb, var(--brand-beige) 20%, transparent);
                }

                .booking__inner {
                    position: relative;
                    z-index: 10;
                    max-width: 48rem;
                    margin: 0 auto;
                    text-align: center;
                }

                .booking__card {
                    padding: 2.5rem;
                    border-radius: 2rem;
                    background: rgba(255, 255, 255, 0.6);
                    border: 1px solid rgba(255, 255, 255, 0.4);
                    backdrop-filter: blur(12px);
                    box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1);
                }

                .booking__text {
                    max-width: 28rem;
                    margin: 0 auto 2.5rem;
                    font-size: 0.875rem;
                    font-weight: 300;
                    line-height: 1.7;
                    color: var(--brand-taupe);
                }

                .booking__cta {
                    gap: 0.75rem;
                    padding: 1rem 2.5rem;
                }

                @media (min-width: 768px) {
                    .booking {
                        padding: 4rem 1.5rem;
                    }

                    .booking__card {
                        padding: 4rem;
                    }
                }
                "#}
            </style>
        </section>
    }
}
