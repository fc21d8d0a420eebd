use advent_shared::calendar::house_rows;
use advent_shared::{cell_for, Article, CellState};
use yew::prelude::*;

use crate::components::calendar_cell::CalendarCell;

#[derive(Properties, PartialEq)]
pub struct CalendarGridProps {
    pub articles: Vec<Article>,
}

#[function_component(CalendarGrid)]
pub fn calendar_grid(props: &CalendarGridProps) -> Html {
    html! {
        <div class="calendar-grid">
            { for house_rows().map(|row| html! {
                <div class="calendar-row">
                    { for row.into_iter().map(|day| {
                        let article = match cell_for(day, &props.articles) {
                            CellState::Linked(article) => Some(article.clone()),
                            CellState::Empty => None,
                        };
                        html! { <CalendarCell key={day.get()} day={day} article={article} /> }
                    })}
                </div>
            })}
        </div>
    }
}
