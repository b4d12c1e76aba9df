use std::rc::Rc;

use yew::prelude::*;

use crate::components::navbar::NavBar;
use crate::config::SiteConfig;
use crate::scroll::ScrollHandle;
use crate::sections::{
    about::About, booking::Booking, footer::Footer, hero::Hero, portfolio::Portfolio,
    services::Services, testimonials::Testimonials, why_choose_us::WhyChooseUs,
};
use crate::styles::theme_css;

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub config: Rc<SiteConfig>,
    pub scroll: ScrollHandle,
}

/// The whole one-page site: navigation, the sections in fixed order, footer.
#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    let config = props.config.clone();
    let css = use_memo(|theme| theme_css(theme), config.theme.clone());

    html! {
        <div class="page">
            <style>{(*css).clone()}</style>
            <NavBar config={config.clone()} scroll={props.scroll.clone()} />
            <main>
                <Hero config={config.clone()} />
                <About config={config.clone()} />
                <Services config={config.clone()} />
                <WhyChooseUs config={config.clone()} />
                <Portfolio config={config.clone()} />
                <Testimonials config={config.clone()} />
                <Booking config={config.clone()} />
            </main>
            <Footer config={config} />
        </div>
    }
}
