use yew::prelude::*;

use crate::components::reveal::{Reveal, RevealKind};
use crate::sections::SectionProps;

#[function_component(About)]
pub fn about(props: &SectionProps) -> Html {
    let about = &props.config.about;

    html! {
        <section id="about" class="about">
            <div class="about__grid">
                <Reveal kind={RevealKind::Zoom} class="about__media">
                    <div class="about__frame">
                        <img src={about.image_url.clone()} alt={about.image_alt.clone()} />
                    </div>
                </Reveal>

                <Reveal class="about__text">
                    <span class="eyebrow">{&about.heading.eyebrow}</span>
                    <h2 class="section-title">{&about.heading.title}</h2>
                    <div class="about__story">
                        { for about.paragraphs.iter().map(|paragraph| html! { <p>{paragraph}</p> }) }
                    </div>
                    <div class="about__highlights">
                        { for about.highlights.iter().map(|highlight| html! {
                            <div class="about__highlight">
                                <h4>{&highlight.value}</h4>
                                <p>{&highlight.label}</p>
                            </div>
                        }) }
                    </div>
                </Reveal>
            </div>

            <style>
                {r#"
                .about {
                    position: relative;
                    overflow: hidden;
                    padding: 4rem 1.5rem;
                    background: white;
                }

                .about__grid {
                    max-width: 80rem;
                    margin: 0 auto;
                    display: grid;
                    gap: 3rem;
                    align-items: center;
                }

                .about__media {
                    order: 2;
                }

                .about__frame {
                    aspect-ratio: 3 / 4;
                    width: 100%;
                    max-width: 28rem;
                    margin: 0 auto;
                    border-radius: 1rem;
                    overflow: hidden;
                    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
                }

                .about__frame img {
                    width: 100%;
                    height: 100%;
                    object-fit: contain;
                    background: var(--brand-nude);
                }

                .about__text {
                    order: 1;
                }

                .about__story {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                    font-size: 0.875rem;
                    font-weight: 300;
                    line-height: 1.7;
                    color: var(--brand-taupe);
                }

                .about__highlights {
                    display: flex;
                    gap: 2.5rem;
                    margin-top: 2rem;
                }

                .about__highlight h4 {
                    font-family: var(--font-serif);
                    font-size: 1.25rem;
                    margin-bottom: 0.25rem;
                }

                .about__highlight p {
                    font-size: 9px;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    color: var(--brand-taupe);
                }

                @media (min-width: 768px) {
                    .about {
                        padding: 6rem 3rem;
                    }

                    .about__grid {
                        grid-template-columns: 1fr 1fr;
                        gap: 5rem;
                    }

                    .about__media {
                        order: 1;
                    }

                    .about__frame {
                        aspect-ratio: 4 / 5;
                    }

                    .about__text {
                        order: 2;
                    }

                    .about__story {
                        font-size: 1rem;
                    }
                }
                "#}
            </style>
        </section>
    }
}
