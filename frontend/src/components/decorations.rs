use advent_shared::decor::{scatter_stars, PANES_PER_WINDOW, STAR_COUNT};
use yew::prelude::*;

/// White dots scattered over the house background
#[function_component(Starfield)]
pub fn starfield() -> Html {
    let stars = scatter_stars(STAR_COUNT, js_sys::Math::random);

    html! {
        <div class="starfield">
            { for stars.iter().map(|star| html! {
                <div class="star" style={star.style()} />
            })}
        </div>
    }
}

#[function_component(Roof)]
pub fn roof() -> Html {
    html! { <div class="roof" /> }
}

#[function_component(Chimney)]
pub fn chimney() -> Html {
    html! { <div class="chimney" /> }
}

#[derive(Clone, Copy, PartialEq)]
pub enum WindowSide {
    Left,
    Right,
}

#[derive(Properties, PartialEq)]
pub struct HouseWindowProps {
    pub side: WindowSide,
}

#[function_component(HouseWindow)]
pub fn house_window(props: &HouseWindowProps) -> Html {
    let class = match props.side {
        WindowSide::Left => "house-window left",
        WindowSide::Right => "house-window right",
    };

    html! {
        <div class={class}>
            { for (0..PANES_PER_WINDOW).map(|_| html! { <div class="pane" /> }) }
        </div>
    }
}
