use advent_shared::Glyph;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct GlyphIconProps {
    pub glyph: Glyph,
}

// Outline icons on a 24x24 grid, stroked with the current text colour.
#[function_component(GlyphIcon)]
pub fn glyph_icon(props: &GlyphIconProps) -> Html {
    match props.glyph {
        Glyph::Star => html! {
            <svg class="glyph glyph-star" viewBox="0 0 24 24" fill="none" stroke="currentColor"
                stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                <polygon points="12 2 15.09 8.26 22 9.27 17 14.14 18.18 21.02 12 17.77 5.82 21.02 7 14.14 2 9.27 8.91 8.26 12 2" />
            </svg>
        },
        Glyph::Gift => html! {
            <svg class="glyph glyph-gift" viewBox="0 0 24 24" fill="none" stroke="currentColor"
                stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                <polyline points="20 12 20 22 4 22 4 12" />
                <rect x="2" y="7" width="20" height="5" />
                <line x1="12" y1="22" x2="12" y2="7" />
                <path d="M12 7H7.5a2.5 2.5 0 0 1 0-5C11 2 12 7 12 7z" />
                <path d="M12 7h4.5a2.5 2.5 0 0 0 0-5C13 2 12 7 12 7z" />
            </svg>
        },
        Glyph::Tree => html! {
            <svg class="glyph glyph-tree" viewBox="0 0 24 24" fill="none" stroke="currentColor"
                stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                <polygon points="12 2 18 10 15 10 20 17 4 17 9 10 6 10 12 2" />
                <line x1="12" y1="17" x2="12" y2="22" />
            </svg>
        },
        Glyph::Number(day) => html! { <span class="glyph glyph-number">{ day.to_string() }</span> },
    }
}
