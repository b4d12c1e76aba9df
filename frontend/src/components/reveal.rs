use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

const VISIBLE_RATIO: f64 = 0.1;
const ROOT_MARGIN: &str = "0px 0px -50px 0px";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RevealKind {
    #[default]
    Rise,
    Zoom,
}

impl RevealKind {
    fn class(self) -> &'static str {
        match self {
            RevealKind::Rise => "reveal--rise",
            RevealKind::Zoom => "reveal--zoom",
        }
    }
}

/// Delay before the `index`th item of a list starts its entrance.
pub fn stagger_delay_ms(index: usize, step_ms: u32) -> u32 {
    u32::try_from(index).unwrap_or(u32::MAX).saturating_mul(step_ms)
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub kind: RevealKind,
    /// Position in a list, used to stagger the entrance.
    #[prop_or_default]
    pub index: usize,
    #[prop_or_default]
    pub step_ms: u32,
}

/// Fades its children in the first time they scroll into view.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let visible = use_state(|| false);

    {
        let node = node.clone();
        let visible = visible.clone();
        use_effect_with_deps(
            move |_| {
                let observation = node.cast::<Element>().and_then(|element| {
                    let shown = visible.clone();
                    let observation = observe_once(&element, move || shown.set(true));
                    if observation.is_none() {
                        debug!("IntersectionObserver unavailable, showing content immediately");
                        visible.set(true);
                    }
                    observation
                });
                move || {
                    if let Some((observer, _callback)) = observation {
                        observer.disconnect();
                    }
                }
            },
            (),
        );
    }

    let delay = stagger_delay_ms(props.index, props.step_ms);
    html! {
        <div
            ref={node}
            class={classes!("reveal", props.kind.class(), (*visible).then(|| "is-visible"), props.class.clone())}
            style={format!("transition-delay: {}ms;", delay)}
        >
            { for props.children.iter() }
        </div>
    }
}

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

fn observe_once(
    element: &Element,
    on_visible: impl Fn() + 'static,
) -> Option<(IntersectionObserver, ObserverCallback)> {
    let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let entry: IntersectionObserverEntry = entry.unchecked_into();
            if entry.is_intersecting() {
                on_visible();
                observer.unobserve(&entry.target());
            }
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(VISIBLE_RATIO));
    options.set_root_margin(ROOT_MARGIN);

    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options).ok()?;
    observer.observe(element);
    Some((observer, callback))
}
