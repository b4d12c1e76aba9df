//! Page-wide CSS: brand custom properties plus the classes shared by
//! several sections. Section-specific rules live next to each section.

use crate::config::Theme;

const BASE_CSS: &str = r#"
*, *::before, *::after {
    box-sizing: border-box;
    margin: 0;
}

html {
    scroll-behavior: smooth;
}

body {
    min-height: 100vh;
    background: var(--brand-nude);
    color: var(--brand-ink);
    font-family: var(--font-sans);
    -webkit-font-smoothing: antialiased;
}

a {
    color: inherit;
    text-decoration: none;
}

img {
    display: block;
    max-width: 100%;
}

::selection {
    background: var(--brand-beige);
    color: var(--brand-ink);
}

.eyebrow {
    display: block;
    margin-bottom: 0.75rem;
    font-size: 10px;
    text-transform: uppercase;
    letter-spacing: 0.1em;
    color: var(--brand-taupe);
}

.section-title {
    font-family: var(--font-serif);
    font-weight: 400;
    font-size: 2.25rem;
    line-height: 1.15;
    margin-bottom: 1.5rem;
}

.section-heading {
    text-align: center;
    margin-bottom: 4rem;
}

.cta-button {
    display: inline-flex;
    align-items: center;
    background: var(--brand-ink);
    color: white;
    padding: 1rem 2rem;
    border-radius: 9999px;
    font-size: 0.75rem;
    text-transform: uppercase;
    letter-spacing: 0.1em;
    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
    transition: background 0.3s ease;
}

.cta-button:hover {
    background: var(--brand-taupe);
}

.reveal {
    opacity: 0;
    transition-property: opacity, transform;
    transition-duration: 0.7s;
    transition-timing-function: ease-out;
}

.reveal--rise {
    transform: translateY(20px);
}

.reveal--zoom {
    transform: scale(0.95);
}

.reveal.is-visible {
    opacity: 1;
    transform: none;
}

@media (prefers-reduced-motion: reduce) {
    .reveal {
        opacity: 1;
        transform: none;
        transition: none;
    }
}

@media (min-width: 768px) {
    .section-title {
        font-size: 3rem;
    }
}
"#;

/// Brand colors and fonts as CSS custom properties.
pub fn theme_vars(theme: &Theme) -> String {
    format!(
        ":root {{\n    --brand-nude: {};\n    --brand-beige: {};\n    --brand-taupe: {};\n    --brand-ink: {};\n    --font-serif: {};\n    --font-sans: {};\n}}\n",
        theme.nude, theme.beige, theme.taupe, theme.ink, theme.serif_font, theme.sans_font,
    )
}

pub fn theme_css(theme: &Theme) -> String {
    let mut css = theme_vars(theme);
    css.push_str(BASE_CSS);
    css
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn vars_follow_theme() {
        let theme = Theme {
            ink: "#111111".into(),
            ..Theme::default()
        };
        let css = theme_vars(&theme);
        assert!(css.starts_with(":root {"));
        assert!(css.contains("--brand-ink: #111111;"));
        assert!(css.contains(&format!("--brand-nude: {};", Theme::default().nude)));
    }

    #[test]
    fn base_rules_follow_vars() {
        let css = theme_css(&Theme::default());
        assert_eq!(css.find(":root"), Some(0));
        assert!(css.contains(".reveal.is-visible"));
    }
}
