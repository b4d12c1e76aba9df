use std::rc::Rc;

use log::debug;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::icons::{self, Icon};
use crate::components::nav_state::{NavAction, NavState};
use crate::config::SiteConfig;
use crate::scroll::{ScrollHandle, ScrollSubscription};

/// Feeds scroll samples into the navigation state until the returned
/// subscription is dropped.
fn follow_scroll(scroll: &ScrollHandle, dispatch: impl Fn(NavAction) + 'static) -> ScrollSubscription {
    scroll.subscribe(move |offset| dispatch(NavAction::Scrolled(offset)))
}

#[derive(Properties, PartialEq)]
pub struct NavBarProps {
    pub config: Rc<SiteConfig>,
    pub scroll: ScrollHandle,
}

#[function_component(NavBar)]
pub fn nav_bar(props: &NavBarProps) -> Html {
    let NavBarProps { config, scroll } = props;
    let threshold = config.theme.scroll_threshold_px;
    let state = use_reducer_eq(move || NavState::with_threshold(threshold));

    {
        let state = state.clone();
        use_effect_with_deps(
            move |scroll: &ScrollHandle| {
                let subscription = follow_scroll(scroll, move |action| state.dispatch(action));
                if subscription.is_inert() {
                    debug!("No scroll signal, navigation bar stays in its top style");
                }
                move || {
                    debug!("Navigation bar unmounted, releasing scroll subscription");
                    drop(subscription);
                }
            },
            scroll.clone(),
        );
    }

    let toggle_menu = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(NavAction::ToggleMenu))
    };

    // No prevent_default: the anchor jump is the link's own job.
    let close_menu = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(NavAction::LinkActivated))
    };

    let brand = &config.brand;
    let links = &config.links;
    let labels = &config.labels;

    let nav_links = |class: &'static str| -> Html {
        config
            .nav_links
            .iter()
            .map(|link| {
                html! {
                    <a key={link.label.clone()} href={link.target.clone()} class={class} onclick={close_menu.clone()}>
                        {&link.label}
                    </a>
                }
            })
            .collect()
    };

    html! {
        <nav class={classes!(
            "top-nav",
            state.is_scrolled().then(|| "scrolled"),
            state.is_menu_open().then(|| "menu-open"),
        )}>
            <div class="nav-content">
                <a href="#" class="nav-logo">
                    {&brand.lead}{" "}<span class="nav-logo__joiner">{&brand.joiner}</span>{" "}{&brand.tail}
                </a>

                <div class="nav-right">
                    { nav_links("nav-link") }
                    <a href={links.booking_url.clone()} target="_blank" rel="noopener noreferrer" class="nav-book-button">
                        {&labels.book_now}
                    </a>
                </div>

                <button
                    class="burger-menu"
                    aria-label="Menu"
                    aria-expanded={state.is_menu_open().to_string()}
                    onclick={toggle_menu}
                >
                    if state.is_menu_open() {
                        <Icon paths={icons::CLOSE} />
                    } else {
                        <Icon paths={icons::MENU} />
                    }
                </button>
            </div>

            if state.is_menu_open() {
                <div class="mobile-menu">
                    { nav_links("mobile-menu__link") }
                    <a href={links.booking_url.clone()} target="_blank" rel="noopener noreferrer" class="mobile-menu__book">
                        {&labels.book_appointment}
                    </a>
                </div>
            }

            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    padding: 1rem 1.5rem;
                    background: transparent;
                    transition: all 0.5s ease;
                }

                .top-nav.scrolled {
                    padding: 0.75rem 1.5rem;
                    background: color-mix(in srgb, var(--brand-nude) 90%, transparent);
                    backdrop-filter: blur(16px);
                    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                }

                .nav-content {
                    max-width: 80rem;
                    margin: 0 auto;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }

                .nav-logo {
                    font-family: var(--font-serif);
                    font-size: 1.25rem;
                    letter-spacing: 0.1em;
                    text-transform: uppercase;
                }

                .nav-logo__joiner {
                    color: var(--brand-taupe);
                }

                .nav-right {
                    display: none;
                    align-items: center;
                    gap: 2rem;
                }

                .nav-link,
                .mobile-menu__link {
                    font-size: 10px;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    transition: color 0.3s ease;
                }

                .nav-link:hover {
                    color: var(--brand-taupe);
                }

                .nav-book-button,
                .mobile-menu__book {
                    background: var(--brand-ink);
                    color: white;
                    padding: 0.5rem 1.5rem;
                    border-radius: 9999px;
                    font-size: 10px;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    transition: background 0.3s ease;
                }

                .nav-book-button:hover {
                    background: var(--brand-taupe);
                }

                .burger-menu {
                    padding: 0.5rem;
                    background: none;
                    border: none;
                    color: inherit;
                    cursor: pointer;
                }

                .mobile-menu {
                    position: absolute;
                    top: 100%;
                    left: 0;
                    right: 0;
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                    padding: 1.5rem;
                    background: var(--brand-nude);
                    border-top: 1px solid var(--brand-beige);
                    box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1);
                    animation: menuDrop 0.3s ease forwards;
                }

                .mobile-menu__link {
                    font-size: 0.75rem;
                }

                .mobile-menu__book {
                    padding: 0.75rem 1.5rem;
                    text-align: center;
                    font-size: 0.75rem;
                }

                @keyframes menuDrop {
                    from { opacity: 0; transform: translateY(-10px); }
                    to { opacity: 1; transform: translateY(0); }
                }

                @media (min-width: 768px) {
                    .top-nav {
                        padding: 1rem 1.5rem;
                    }

                    .nav-logo {
                        font-size: 1.5rem;
                    }

                    .nav-right {
                        display: flex;
                    }

                    .burger-menu,
                    .mobile-menu {
                        display: none;
                    }
                }
                "#}
            </style>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::scroll::testing::{Headless, ManualScroll};
    use crate::testing::{count, is_ascending, positions, render};
    use pretty_assertions::assert_eq;

    // Server rendering runs no effects, so the unmount path is covered
    // through `follow_scroll`, which is all the effect and its destructor do.
    #[test]
    fn scroll_updates_stop_once_released() {
        let source = ManualScroll::default();
        let handle = ScrollHandle::new(source.clone());
        let state = Rc::new(Cell::new(NavState::default()));
        let sink = Rc::clone(&state);
        let subscription = follow_scroll(&handle, move |action| sink.set(sink.get().apply(action)));

        source.emit(120.0);
        assert!(state.get().is_scrolled());

        drop(subscription);
        assert_eq!(source.listener_count(), 0);
        source.emit(0.0);
        assert!(state.get().is_scrolled());
    }

    #[test]
    fn resubscribing_picks_up_new_samples() {
        let source = ManualScroll::default();
        let handle = ScrollHandle::new(source.clone());
        let state = Rc::new(Cell::new(NavState::default()));

        let first = {
            let sink = Rc::clone(&state);
            follow_scroll(&handle, move |action| sink.set(sink.get().apply(action)))
        };
        drop(first);

        let sink = Rc::clone(&state);
        let _second = follow_scroll(&handle, move |action| sink.set(sink.get().apply(action)));
        assert_eq!(source.listener_count(), 1);
        source.emit(51.0);
        assert!(state.get().is_scrolled());
    }

    fn props(scroll: ScrollHandle) -> NavBarProps {
        NavBarProps {
            config: Rc::new(SiteConfig::default()),
            scroll,
        }
    }

    #[tokio::test]
    async fn initial_render_is_top_with_menu_closed() {
        let html = render::<NavBar>(move || props(ScrollHandle::new(ManualScroll::default()))).await;
        assert!(html.contains(r#"class="top-nav""#));
        assert!(!html.contains("top-nav scrolled"));
        assert!(!html.contains(r#"class="mobile-menu""#));
        assert!(html.contains(r#"aria-expanded="false""#));
    }

    #[tokio::test]
    async fn headless_page_stays_at_top() {
        let html = render::<NavBar>(move || props(ScrollHandle::new(Headless))).await;
        assert!(html.contains(r#"class="top-nav""#));
        assert!(!html.contains("top-nav scrolled"));
    }

    #[tokio::test]
    async fn desktop_links_follow_config_order() {
        let html = render::<NavBar>(move || props(ScrollHandle::new(Headless))).await;
        assert_eq!(count(&html, r#"class="nav-link""#), 4);
        let offsets = positions(
            &html,
            &[r##"href="#services""##, r##"href="#about""##, r##"href="#portfolio""##, r##"href="#testimonials""##],
        );
        assert!(is_ascending(&offsets));
    }

    #[tokio::test]
    async fn booking_cta_opens_in_new_tab() {
        let html = render::<NavBar>(move || props(ScrollHandle::new(Headless))).await;
        assert_eq!(count(&html, r#"href="https://booking.optios.net/20771/menu""#), 1);
        assert!(html.contains(r#"target="_blank""#));
        assert!(html.contains(r#"rel="noopener noreferrer""#));
        assert!(html.contains("Boek Nu"));
        assert!(!html.contains("Afspraak Maken"));
    }

    #[tokio::test]
    async fn wordmark_uses_branding() {
        let mut config = SiteConfig::default();
        config.brand.lead = "Shine".into();
        config.brand.tail = "Lena".into();
        let html = render::<NavBar>(move || NavBarProps {
            config: Rc::new(config),
            scroll: ScrollHandle::new(Headless),
        })
        .await;
        assert!(html.contains(r#"Shine <span class="nav-logo__joiner">by</span> Lena"#));
    }
}
