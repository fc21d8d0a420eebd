use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::decorations::Roof;
use crate::router::Route;

/// Shown for any path other than the calendar: an empty house with a way
/// back.
#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="calendar-page">
            <div class="house missing">
                <Roof />
                <div class="house-body missing-body">
                    <p class="missing-title">{ "404" }</p>
                    <p>{ "このページにはカレンダーがありません" }</p>
                    <Link<Route> to={Route::Calendar} classes={classes!("btn", "btn-primary")}>
                        { "カレンダーに戻る" }
                    </Link<Route>>
                </div>
            </div>
        </div>
    }
}
