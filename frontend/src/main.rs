mod components;
mod pages;
mod router;
mod services;

use advent_shared::CalendarConfig;
use yew::prelude::*;
use yew_router::BrowserRouter;

use crate::router::{switch, Route};

#[function_component(App)]
fn app() -> Html {
    let config = use_memo((), |_| CalendarConfig::default());

    html! {
        <ContextProvider<CalendarConfig> context={(*config).clone()}>
            <BrowserRouter>
                <div id="app">
                    <yew_router::Switch<Route> render={switch} />
                </div>
            </BrowserRouter>
        </ContextProvider<CalendarConfig>>
    }
}

fn main() {
    // Initialize tracing
    tracing_wasm::set_as_global_default();

    yew::Renderer::<App>::new().render();
}
