use yew::prelude::*;

use crate::components::icons::{self, Icon};
use crate::components::reveal::Reveal;
use crate::sections::SectionProps;

#[function_component(Portfolio)]
pub fn portfolio(props: &SectionProps) -> Html {
    let config = &props.config;
    let heading = &config.portfolio_heading;
    let links = &config.links;

    html! {
        <section id="portfolio" class="portfolio">
            <div class="portfolio__inner">
                <Reveal class="portfolio__header">
                    <div>
                        <span class="eyebrow">{&heading.eyebrow}</span>
                        <h2 class="section-title">{&heading.title}</h2>
                    </div>
                    <a href={links.instagram_url.clone()} target="_blank" rel="noopener noreferrer" class="portfolio__instagram">
                        <Icon paths={icons::INSTAGRAM} size={16} />
                        <span>{&links.instagram_handle}</span>
                    </a>
                </Reveal>

                <div class="portfolio__grid">
                    { for config.portfolio.iter().enumerate().map(|(index, image)| html! {
                        <Reveal key={index} class="portfolio__tile" index={index} step_ms={config.theme.stagger_step_ms}>
                            <img
                                src={image.clone()}
                                alt={format!("Portfolio {}", index + 1)}
                                referrerpolicy="no-referrer"
                                loading="lazy"
                            />
                            <div class="portfolio__tint"></div>
                        </Reveal>
                    }) }
                </div>
            </div>

            <div class="portfolio__fade"></div>

            <style>
                {r#"
                .portfolio {
                    position: relative;
                    padding: 5rem 1.5rem;
                    background: white;
                }

                .portfolio__inner {
                    max-width: 80rem;
                    margin: 0 auto;
                }

                .portfolio__header {
                    display: flex;
                    flex-direction: column;
                    justify-content: space-between;
                    gap: 1rem;
                    margin-bottom: 3rem;
                }

                .portfolio__instagram {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    padding-bottom: 0.25rem;
                    font-size: 10px;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    border-bottom: 1px solid transparent;
                    transition: border-color 0.3s ease;
                }

                .portfolio__instagram:hover {
                    border-color: var(--brand-taupe);
                }

                .portfolio__grid {
                    display: grid;
                    grid-template-columns: repeat(2, 1fr);
                    gap: 1rem;
                }

                .portfolio__tile {
                    position: relative;
                    aspect-ratio: 1;
                    border-radius: 1rem;
                    overflow: hidden;
                    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                }

                .portfolio__tile img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    transition: transform 1s ease;
                }

                .portfolio__tile:hover img {
                    transform: scale(1.1);
                }

                .portfolio__tint {
                    position: absolute;
                    inset: 0;
                    background: color-mix(in srgb, var(--brand-ink) 5%, transparent);
                    opacity: 0;
                    transition: opacity 0.5s ease;
                }

                .portfolio__tile:hover .portfolio__tint {
                    opacity: 1;
                }

                .portfolio__fade {
                    position: absolute;
                    left: 0;
                    right: 0;
                    bottom: 0;
                    height: 10rem;
                    background: linear-gradient(to bottom, transparent, white);
                    pointer-events: none;
                }

                @media (min-width: 768px) {
                    .portfolio {
                        padding: 8rem 1.5rem;
                    }

                    .portfolio__header {
                        flex-direction: row;
                        align-items: flex-end;
                    }

                    .portfolio__grid {
                        grid-template-columns: repeat(3, 1fr);
                        gap: 2rem;
                    }
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::config::SiteConfig;
    use crate::testing::{count, is_ascending, positions, render};
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn images_keep_their_order() {
        let mut config = SiteConfig::default();
        config.portfolio = vec!["/img/a.jpg".into(), "/img/b.jpg".into(), "/img/c.jpg".into()];
        let html = render::<Portfolio>(move || SectionProps { config: Rc::new(config) }).await;

        assert_eq!(count(&html, r#"referrerpolicy="no-referrer""#), 3);
        let offsets = positions(
            &html,
            &[
                r#"src="/img/a.jpg""#,
                r#"src="/img/b.jpg""#,
                r#"src="/img/c.jpg""#,
            ],
        );
        assert!(is_ascending(&offsets));
        assert!(html.contains(r#"alt="Portfolio 3""#));
    }

    #[tokio::test]
    async fn links_to_instagram_profile() {
        let html = render::<Portfolio>(move || SectionProps { config: Rc::new(SiteConfig::default()) }).await;
        assert!(html.contains(r#"href="https://www.instagram.com/glow_by_thai/""#));
        assert!(html.contains("@glow_by_thai"));
        assert_eq!(count(&html, r#"alt="Portfolio "#), 6);
    }
}
