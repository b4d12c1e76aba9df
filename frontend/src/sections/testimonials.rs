use yew::prelude::*;

use crate::components::icons::{self, Icon};
use crate::components::reveal::Reveal;
use crate::sections::SectionProps;

/// Every review shows the full rating, whatever it says.
pub const STARS_PER_REVIEW: usize = 5;

/// Reviews stagger slower than the other lists.
const REVIEW_STAGGER_MS: u32 = 150;

#[function_component(StarRating)]
pub fn star_rating() -> Html {
    html! {
        <div class="star-rating">
            { for (0..STARS_PER_REVIEW).map(|i| html! {
                <Icon key={i} paths={icons::STAR} size={12} class="star" filled={true} />
            }) }
        </div>
    }
}

#[function_component(Testimonials)]
pub fn testimonials(props: &SectionProps) -> Html {
    let config = &props.config;
    let heading = &config.reviews_heading;

    html! {
        <section id="testimonials" class="testimonials">
            <div class="testimonials__rule"></div>

            <div class="testimonials__inner">
                <Reveal class="section-heading">
                    <span class="eyebrow">{&heading.eyebrow}</span>
                    <h2 class="section-title">{&heading.title}</h2>
                </Reveal>

                <div class="testimonials__grid">
                    { for config.reviews.iter().enumerate().map(|(index, review)| html! {
                        <Reveal key={index} class="review-card" index={index} step_ms={REVIEW_STAGGER_MS}>
                            <StarRating />
                            <p class="review-card__text">{format!("\"{}\"", review.text)}</p>
                            <div class="review-card__author">
                                <p class="review-card__name">{&review.name}</p>
                                <p class="review-card__service">{&review.service}</p>
                            </div>
                        </Reveal>
                    }) }
                </div>
            </div>

            <style>
                {r#"
                .testimonials {
                    position: relative;
                    overflow: hidden;
                    padding: 5rem 1.5rem;
                    background: white;
                }

                .testimonials__rule {
                    position: absolute;
                    top: 0;
                    left: 50%;
                    transform: translateX(-50%);
                    width: 100%;
                    height: 1px;
                    background: linear-gradient(to right, transparent, var(--brand-beige), transparent);
                }

                .testimonials__inner {
                    max-width: 80rem;
                    margin: 0 auto;
                }

                .testimonials__grid {
                    display: grid;
                    gap: 2rem;
                }

                .review-card {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    text-align: center;
                    padding: 2.5rem;
                    border-radius: 2rem;
                    background: color-mix(in srgb, var(--brand-nude) 40%, transparent);
                    border: 1px solid color-mix(in srgb, var(--brand-beige) 30%, transparent);
                    backdrop-filter: blur(4px);
                }

                .review-card:hover {
                    background: color-mix(in srgb, var(--brand-nude) 60%, transparent);
                }

                .star-rating {
                    display: flex;
                    gap: 0.25rem;
                    margin-bottom: 1.5rem;
                    color: var(--brand-taupe);
                }

                .review-card__text {
                    margin-bottom: 2rem;
                    font-size: 0.875rem;
                    font-weight: 300;
                    font-style: italic;
                    line-height: 1.7;
                    color: var(--brand-taupe);
                }

                .review-card__author {
                    margin-top: auto;
                }

                .review-card__name {
                    font-family: var(--font-serif);
                    font-size: 1.125rem;
                    margin-bottom: 0.25rem;
                }

                .review-card__service {
                    font-size: 8px;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    color: var(--brand-taupe);
                }

                @media (min-width: 768px) {
                    .testimonials {
                        padding: 8rem 1.5rem;
                    }

                    .testimonials__grid {
                        grid-template-columns: repeat(3, 1fr);
                    }
                }
                "#}
            </style>
        </section>
    }
}
