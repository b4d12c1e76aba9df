use chrono::{Datelike, Local};
use yew::prelude::*;

use crate::components::icons::{self, Icon};
use crate::config::Branding;
use crate::sections::SectionProps;

pub fn copyright_line(brand: &Branding, year: i32) -> String {
    format!("© {} {}.", year, brand.full_name())
}

#[function_component(Footer)]
pub fn footer(props: &SectionProps) -> Html {
    let config = &props.config;
    let brand = &config.brand;
    let links = &config.links;
    let copy = &config.footer;
    let year = Local::now().year();

    html! {
        <footer class="footer">
            <div class="footer__inner">
                <div class="footer__columns">
                    <div>
                        <a href="#" class="footer__logo">
                            {&brand.lead}{" "}<span class="footer__logo-joiner">{&brand.joiner}</span>{" "}{&brand.tail}
                        </a>
                        <p class="footer__muted footer__blurb">{&copy.blurb}</p>
                    </div>

                    <div>
                        <h5 class="footer__heading">{&copy.location_heading}</h5>
                        <p class="footer__muted">
                            {format!("{}, {}", brand.location, brand.country)}<br />
                            {&copy.availability}
                        </p>
                    </div>

                    <div>
                        <h5 class="footer__heading">{&copy.contact_heading}</h5>
                        <div class="footer__contact">
                            <a href={links.instagram_url.clone()} target="_blank" rel="noopener noreferrer" class="footer__link">
                                <Icon paths={icons::INSTAGRAM} size={14} />
                                {"Instagram"}
                            </a>
                            <a href={links.booking_url.clone()} target="_blank" rel="noopener noreferrer" class="footer__link">
                                <Icon paths={icons::CALENDAR} size={14} />
                                {&config.labels.book_now}
                            </a>
                        </div>
                    </div>
                </div>

                <div class="footer__bottom">
                    <p class="footer__fine">{copyright_line(brand, year)}</p>
                    <div class="footer__legal">
                        <a href="#" class="footer__fine">{"Privacy"}</a>
                        <a href="#" class="footer__fine">{"Terms"}</a>
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .footer {
                    padding: 3rem 1.5rem;
                    background: var(--brand-ink);
                    color: white;
                }

                .footer__inner {
                    max-width: 80rem;
                    margin: 0 auto;
                }

                .footer__columns {
                    display: grid;
                    gap: 2.5rem;
                    margin-bottom: 2.5rem;
                }

                .footer__logo {
                    display: block;
                    margin-bottom: 1rem;
                    font-family: var(--font-serif);
                    font-size: 1.25rem;
                    letter-spacing: 0.1em;
                    text-transform: uppercase;
                }

                .footer__logo-joiner {
                    color: color-mix(in srgb, var(--brand-beige) 50%, transparent);
                }

                .footer__muted {
                    font-size: 0.75rem;
                    font-weight: 300;
                    line-height: 1.7;
                    color: color-mix(in srgb, var(--brand-beige) 40%, transparent);
                }

                .footer__blurb {
                    max-width: 20rem;
                }

                .footer__heading {
                    margin-bottom: 1rem;
                    font-size: 10px;
                    font-weight: 600;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                }

                .footer__contact {
                    display: flex;
                    gap: 1.5rem;
                }

                .footer__link {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    font-size: 0.75rem;
                    color: color-mix(in srgb, var(--brand-beige) 40%, transparent);
                    transition: color 0.3s ease;
                }

                .footer__link:hover,
                .footer__legal a:hover {
                    color: white;
                }

                .footer__bottom {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: space-between;
                    gap: 1rem;
                    padding-top: 1.5rem;
                    border-top: 1px solid rgba(255, 255, 255, 0.05);
                }

                .footer__fine {
                    font-size: 9px;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    color: color-mix(in srgb, var(--brand-beige) 30%, transparent);
                }

                .footer__legal {
                    display: flex;
                    gap: 1.5rem;
                }

                @media (min-width: 768px) {
                    .footer__columns {
                        grid-template-columns: repeat(3, 1fr);
                    }

                    .footer__bottom {
                        flex-direction: row;
                    }
                }
                "#}
            </style>
        </footer>
    }
}
