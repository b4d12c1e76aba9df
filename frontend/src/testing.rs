use yew::BaseComponent;

/// Renders a component to an HTML string without hydration markers.
///
/// Props are built on the renderer's worker, so `make_props` only has to
/// capture `Send` data; wrap it in `Rc` inside the closure.
pub async fn render<C>(make_props: impl FnOnce() -> C::Properties + Send + 'static) -> String
where
    C: BaseComponent,
{
    yew::ServerRenderer::<C>::with_props(make_props)
        .hydratable(false)
        .render()
        .await
}

pub fn count(html: &str, needle: &str) -> usize {
    html.matches(needle).count()
}

/// Byte offsets of each needle, panicking if one is missing.
pub fn positions(html: &str, needles: &[&str]) -> Vec<usize> {
    needles
        .iter()
        .map(|needle| {
            html.find(needle)
                .unwrap_or_else(|| panic!("{:?} not found in rendered html", needle))
        })
        .collect()
}

pub fn is_ascending(offsets: &[usize]) -> bool {
    offsets.windows(2).all(|pair| pair[0] < pair[1])
}
