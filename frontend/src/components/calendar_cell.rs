use advent_shared::{Article, Day, Glyph};
use yew::prelude::*;

use crate::components::glyph::GlyphIcon;

#[derive(Properties, PartialEq)]
pub struct CalendarCellProps {
    pub day: Day,
    pub article: Option<Article>,
}

/// One door of the calendar: a link to the day's article, or a disabled
/// placeholder when there is none.
#[function_component(CalendarCell)]
pub fn calendar_cell(props: &CalendarCellProps) -> Html {
    let glyph = Glyph::for_day(props.day);

    match &props.article {
        Some(article) => html! {
            <a
                class="calendar-cell linked"
                href={article.url.clone()}
                target="_blank"
                rel="noopener noreferrer"
                title={article.title.clone()}
            >
                <GlyphIcon glyph={glyph} />
            </a>
        },
        None => html! {
            <button class="calendar-cell empty" disabled=true>
                <GlyphIcon glyph={glyph} />
            </button>
        },
    }
}
