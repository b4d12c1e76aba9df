use std::rc::Rc;

use yew::prelude::*;

use crate::config::SiteConfig;

pub mod about;
pub mod booking;
pub mod footer;
pub mod hero;
pub mod portfolio;
pub mod services;
pub mod testimonials;
pub mod why_choose_us;

/// Every section renders straight from the shared content set.
#[derive(Properties, PartialEq)]
pub struct SectionProps {
    pub config: Rc<SiteConfig>,
}
