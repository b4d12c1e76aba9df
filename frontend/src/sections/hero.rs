use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::sections::SectionProps;

#[function_component(Hero)]
pub fn hero(props: &SectionProps) -> Html {
    let config = &props.config;
    let brand = &config.brand;
    let hero = &config.hero;
    let labels = &config.labels;

    html! {
        <section class="hero">
            <div class="hero__glow">
                <div class="hero__glow-left"></div>
                <div class="hero__glow-right"></div>
            </div>

            <div class="hero__content">
                <Reveal>
                    <span class="hero__eyebrow">
                        {format!("{} • {}", brand.tagline, brand.location)}
                    </span>
                    <h1 class="hero__title">
                        {&hero.headline}<br />
                        <span class="hero__title-accent">{&hero.headline_accent}</span>
                    </h1>
                    <p class="hero__lead">{&hero.lead}</p>
                    <div class="hero__actions">
                        <a href={config.links.booking_url.clone()} target="_blank" rel="noopener noreferrer" class="cta-button">
                            {&labels.book_your_appointment}
                        </a>
                        <a href="#services" class="hero__secondary">
                            {&labels.discover_services}
                        </a>
                    </div>
                </Reveal>
            </div>

            <style>
                {r#"
                .hero {
                    position: relative;
                    min-height: 90vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    overflow: hidden;
                    padding: 6rem 0 3rem;
                }

                .hero__glow {
                    position: absolute;
                    inset: 0;
                    z-index: 0;
                }

                .hero__glow-left,
                .hero__glow-right {
                    position: absolute;
                    width: 24rem;
                    height: 24rem;
                    border-radius: 9999px;
                    filter: blur(64px);
                }

                .hero__glow-left {
                    top: 25%;
                    left: -5rem;
                    background: color-mix(in srgb, var(--brand-beige) 30%, transparent);
                }

                .hero__glow-right {
                    bottom: 25%;
                    right: -5rem;
                    background: color-mix(in srgb, var(--brand-taupe) 10%, transparent);
                }

                .hero__content {
                    position: relative;
                    z-index: 10;
                    text-align: center;
                    padding: 0 1.5rem;
                    max-width: 56rem;
                    margin: 0 auto;
                }

                .hero__eyebrow {
                    display: block;
                    margin-bottom: 1rem;
                    font-size: 10px;
                    text-transform: uppercase;
                    letter-spacing: 0.3em;
                    color: var(--brand-taupe);
                }

                .hero__title {
                    font-family: var(--font-serif);
                    font-size: 3rem;
                    font-weight: 400;
                    line-height: 1.15;
                    margin-bottom: 1.5rem;
                }

                .hero__title-accent {
                    font-style: italic;
                }

                .hero__lead {
                    max-width: 36rem;
                    margin: 0 auto 2.5rem;
                    font-weight: 300;
                    line-height: 1.7;
                    color: var(--brand-taupe);
                }

                .hero__actions {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 1rem;
                }

                .hero__secondary {
                    font-size: 0.75rem;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    padding-bottom: 0.25rem;
                    border-bottom: 1px solid color-mix(in srgb, var(--brand-taupe) 30%, transparent);
                    transition: border-color 0.3s ease;
                }

                .hero__secondary:hover {
                    border-color: var(--brand-taupe);
                }

                @media (min-width: 640px) {
                    .hero__actions {
                        flex-direction: row;
                    }
                }

                @media (min-width: 768px) {
                    .hero__title {
                        font-size: 4.5rem;
                    }

                    .hero__lead {
                        font-size: 1.125rem;
                    }
                }

                @media (min-width: 1024px) {
                    .hero__title {
                        font-size: 6rem;
                    }
                }
                "#}
            </style>
        </section>
    }
}
