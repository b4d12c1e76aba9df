use yew::prelude::*;

use crate::components::icons::{feature_icon, Icon};
use crate::sections::SectionProps;

#[function_component(WhyChooseUs)]
pub fn why_choose_us(props: &SectionProps) -> Html {
    let config = &props.config;
    let why = &config.why;

    html! {
        <section class="why">
            <div class="why__grid">
                <div>
                    <span class="eyebrow">{&why.heading.eyebrow}</span>
                    <h2 class="section-title">{&why.heading.title}</h2>

                    <div class="why__features">
                        { for config.features.iter().map(|feature| html! {
                            <div class="why__feature">
                                <div class="why__feature-icon">
                                    <Icon paths={feature_icon(feature.icon)} />
                                </div>
                                <h4>{&feature.title}</h4>
                                <p>{&feature.description}</p>
                            </div>
                        }) }
                    </div>
                </div>

                <div class="why__portrait-wrap">
                    <div class="why__portrait">
                        <div class="why__portrait-frame">
                            <img src={why.portrait_url.clone()} alt={why.portrait_alt.clone()} />
                        </div>
                        <div class="why__badge">
                            <p class="why__badge-place">{&config.brand.location}</p>
                            <p class="why__badge-tagline">{&config.brand.tagline}</p>
                        </div>
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .why {
                    padding: 3rem 1.5rem 4rem;
                    background: var(--brand-nude);
                }

                .why__grid {
                    max-width: 80rem;
                    margin: 0 auto;
                    display: grid;
                    gap: 3rem;
                    align-items: center;
                }

                .why__features {
                    display: grid;
                    gap: 1.5rem;
                    margin-top: 2.5rem;
                }

                .why__feature h4 {
                    font-family: var(--font-serif);
                    font-size: 1.125rem;
                    margin: 0.5rem 0;
                }

                .why__feature p {
                    font-size: 11px;
                    font-weight: 300;
                    line-height: 1.7;
                    color: var(--brand-taupe);
                }

                .why__feature-icon {
                    color: var(--brand-taupe);
                }

                .why__portrait-wrap {
                    display: flex;
                    justify-content: center;
                }

                .why__portrait {
                    position: relative;
                    width: 100%;
                    max-width: 320px;
                }

                .why__portrait-frame {
                    aspect-ratio: 1;
                    border-radius: 9999px;
                    overflow: hidden;
                    border: 4px solid white;
                    box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1);
                }

                .why__portrait-frame img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }

                .why__badge {
                    display: none;
                    position: absolute;
                    bottom: -1rem;
                    left: -1rem;
                    padding: 1rem 1.5rem;
                    background: white;
                    border-radius: 0.75rem;
                    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
                }

                .why__badge-place {
                    font-family: var(--font-serif);
                    font-size: 1.25rem;
                    font-style: italic;
                }

                .why__badge-tagline {
                    font-size: 8px;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    color: var(--brand-taupe);
                }

                @media (min-width: 640px) {
                    .why__features {
                        grid-template-columns: repeat(2, 1fr);
                    }

                    .why__badge {
                        display: block;
                    }
                }

                @media (min-width: 768px) {
                    .why {
                        padding: 4rem 1.5rem 6rem;
                    }

                    .why__portrait {
                        max-width: 400px;
                    }
                }

                @media (min-width: 1024px) {
                    .why__grid {
                        grid-template-columns: 1fr 1fr;
                    }

                    .why__portrait-wrap {
                        justify-content: flex-end;
                    }
                }
                "#}
            </style>
        </section>
    }
}
