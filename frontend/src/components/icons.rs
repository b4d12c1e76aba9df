//! Inline stroke icons on a 24x24 grid.

use yew::prelude::*;

use crate::config::FeatureIcon;

pub const MENU: &[&str] = &["M4 6h16", "M4 12h16", "M4 18h16"];
pub const CLOSE: &[&str] = &["M18 6 6 18", "M6 6l12 12"];
pub const STAR: &[&str] = &["M12 2l3.09 6.26L22 9.27l-5 4.87 1.18 6.88L12 17.77l-6.18 3.25L7 14.14 2 9.27l6.91-1.01L12 2z"];
pub const HEART: &[&str] = &["M20.84 4.61a5.5 5.5 0 0 0-7.78 0L12 5.67l-1.06-1.06a5.5 5.5 0 0 0-7.78 7.78l1.06 1.06L12 21.23l7.78-7.78 1.06-1.06a5.5 5.5 0 0 0 0-7.78z"];
pub const CALENDAR: &[&str] = &[
    "M5 4h14a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
    "M16 2v4",
    "M8 2v4",
    "M3 10h18",
];
pub const INSTAGRAM: &[&str] = &[
    "M7 2h10a5 5 0 0 1 5 5v10a5 5 0 0 1-5 5H7a5 5 0 0 1-5-5V7a5 5 0 0 1 5-5z",
    "M16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37z",
    "M17.5 6.5h.01",
];
pub const SHIELD_CHECK: &[&str] = &["M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10z", "M9 12l2 2 4-4"];
pub const SPARKLES: &[&str] = &[
    "M12 3l1.9 5.1L19 10l-5.1 1.9L12 17l-1.9-5.1L5 10l5.1-1.9z",
    "M19 15l.9 2.1L22 18l-2.1.9L19 21l-.9-2.1L16 18l2.1-.9z",
];

#[derive(Properties, PartialEq)]
pub struct IconProps {
    pub paths: &'static [&'static str],
    #[prop_or(20)]
    pub size: u32,
    #[prop_or_default]
    pub class: Classes,
    /// Fill the outline with the current color as well.
    #[prop_or_default]
    pub filled: bool,
}

#[function_component(Icon)]
pub fn icon(props: &IconProps) -> Html {
    let fill = if props.filled { "currentColor" } else { "none" };
    html! {
        <svg
            class={props.class.clone()}
            xmlns="http://www.w3.org/2000/svg"
            width={props.size.to_string()}
            height={props.size.to_string()}
            viewBox="0 0 24 24"
            fill={fill}
            stroke="currentColor"
            stroke-width="1.5"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            { for props.paths.iter().map(|d| html! { <path d={*d} /> }) }
        </svg>
    }
}

pub fn feature_icon(icon: FeatureIcon) -> &'static [&'static str] {
    match icon {
        FeatureIcon::Sparkles => SPARKLES,
        FeatureIcon::ShieldCheck => SHIELD_CHECK,
        FeatureIcon::Heart => HEART,
        FeatureIcon::Star => STAR,
    }
}
