use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::config::Service;
use crate::sections::SectionProps;

#[derive(Properties, PartialEq)]
pub struct ServiceCardProps {
    pub service: Service,
    pub ideal_for_label: AttrValue,
    pub index: usize,
    pub step_ms: u32,
}

#[function_component(ServiceCard)]
pub fn service_card(props: &ServiceCardProps) -> Html {
    let service = &props.service;
    html! {
        <Reveal class="service-card" index={props.index} step_ms={props.step_ms}>
            <h3 class="service-card__title">{&service.title}</h3>
            <p class="service-card__description">{&service.description}</p>
            <div class="service-card__ideal">
                <p class="service-card__ideal-label">{props.ideal_for_label.clone()}</p>
                <p class="service-card__ideal-text">{&service.ideal_for}</p>
            </div>
        </Reveal>
    }
}

#[function_component(Services)]
pub fn services(props: &SectionProps) -> Html {
    let config = &props.config;
    let ideal_for_label = AttrValue::from(config.labels.ideal_for.clone());

    html! {
        <section id="services" class="services">
            <div class="services__inner">
                <Reveal class="section-heading">
                    <span class="eyebrow">{&config.services_heading.eyebrow}</span>
                    <h2 class="section-title">{&config.services_heading.title}</h2>
                </Reveal>

                <div class="services__grid">
                    { for config.services.iter().enumerate().map(|(index, service)| html! {
                        <ServiceCard
                            key={index}
                            service={service.clone()}
                            ideal_for_label={ideal_for_label.clone()}
                            index={index}
                            step_ms={config.theme.stagger_step_ms}
                        />
                    }) }
                </div>
            </div>

            <div class="services__fade"></div>

            <style>
                {r#"
                .services {
                    position: relative;
                    padding: 5rem 1.5rem 3rem;
                }

                .services__inner {
                    max-width: 80rem;
                    margin: 0 auto;
                }

                .services__grid {
                    display: grid;
                    gap: 1rem;
                }

                .service-card {
                    display: flex;
                    flex-direction: column;
                    padding: 1.5rem;
                    border-radius: 1rem;
                    background: var(--brand-nude);
                    border: 1px solid var(--brand-beige);
                }

                .service-card:hover {
                    border-color: color-mix(in srgb, var(--brand-taupe) 20%, transparent);
                }

                .service-card__title {
                    font-family: var(--font-serif);
                    font-size: 1.25rem;
                    margin-bottom: 0.75rem;
                }

                .service-card:hover .service-card__title {
                    font-style: italic;
                }

                .service-card__description {
                    flex-grow: 1;
                    margin-bottom: 1rem;
                    font-size: 0.75rem;
                    font-weight: 300;
                    line-height: 1.7;
                    color: var(--brand-taupe);
                }

                .service-card__ideal {
                    padding-top: 1rem;
                    border-top: 1px solid color-mix(in srgb, var(--brand-beige) 50%, transparent);
                }

                .service-card__ideal-label {
                    margin-bottom: 0.25rem;
                    font-size: 9px;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    color: var(--brand-taupe);
                }

                .service-card__ideal-text {
                    font-size: 11px;
                    font-weight: 500;
                    font-style: italic;
                }

                .services__fade {
                    position: absolute;
                    left: 0;
                    right: 0;
                    bottom: 0;
                    height: 4rem;
                    background: linear-gradient(to bottom, transparent, var(--brand-nude));
                    pointer-events: none;
                }

                @media (min-width: 640px) {
                    .services__grid {
                        grid-template-columns: repeat(2, 1fr);
                    }
                }

                @media (min-width: 768px) {
                    .services {
                        padding: 8rem 1.5rem 4rem;
                    }

                    .services__grid {
                        gap: 1.5rem;
                    }
                }

                @media (min-width: 1024px) {
                    .services__grid {
                        grid-template-columns: repeat(4, 1fr);
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

    fn service(title: &str, description: &str, ideal_for: &str) -> Service {
        Service {
            title: title.into(),
            description: description.into(),
            ideal_for: ideal_for.into(),
        }
    }

    #[tokio::test]
    async fn preset_renders_four_cards_in_order() {
        let html = render::<Services>(move || SectionProps { config: Rc::new(SiteConfig::default()) }).await;

        assert_eq!(count(&html, "reveal reveal--rise service-card"), 4);
        let offsets = positions(&html, &["BIAB Specialist", "Brow Styling", "Lash Lifts", "Minimalist Art"]);
        assert!(is_ascending(&offsets));
        assert_eq!(count(&html, "Ideaal voor"), 4);
        assert!(html.contains("Een frisse blik zonder mascara."));
    }

    #[tokio::test]
    async fn card_text_is_rendered_unmodified() {
        let mut config = SiteConfig::default();
        config.services = vec![
            service("Gel Polish", "Glossy colour that lasts two weeks.", "Busy weeks"),
            service("Pedicure", "Soft feet and neat nails.", "Sandal season"),
            service("Nail Repair", "Fixes a single broken nail.", "Small accidents"),
            service("Paraffin Hands", "Warm wax treatment for dry skin.", "Winter months"),
        ];
        let services = config.services.clone();
        let html = render::<Services>(move || SectionProps { config: Rc::new(config) }).await;

        let mut expected = Vec::new();
        for service in &services {
            expected.push(format!(r#"<h3 class="service-card__title">{}</h3>"#, service.title));
            expected.push(format!(r#"<p class="service-card__description">{}</p>"#, service.description));
            expected.push(format!(r#"<p class="service-card__ideal-text">{}</p>"#, service.ideal_for));
        }
        let needles: Vec<&str> = expected.iter().map(String::as_str).collect();
        assert!(is_ascending(&positions(&html, &needles)));
    }

    #[tokio::test]
    async fn cards_are_staggered_by_index() {
        let html = render::<Services>(move || SectionProps { config: Rc::new(SiteConfig::default()) }).await;
        let delays: Vec<&str> = html
            .split(r#"class="reveal reveal--rise service-card""#)
            .skip(1)
            .map(|card| {
                let start = card.find("transition-delay: ").expect("card has a delay");
                let rest = &card[start + "transition-delay: ".len()..];
                &rest[..rest.find(';').expect("delay is terminated")]
            })
            .collect();
        assert_eq!(delays, vec!["0ms", "100ms", "200ms", "300ms"]);
    }

    #[tokio::test]
    async fn empty_service_list_renders_no_cards() {
        let mut config = SiteConfig::default();
        config.services.clear();
        let html = render::<Services>(move || SectionProps { config: Rc::new(config) }).await;
        assert_eq!(count(&html, r#"class="service-card__title""#), 0);
        assert!(html.contains("Diensten"));
    }
}
