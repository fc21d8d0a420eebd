use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::{home::Home, not_found::NotFound};

/// The calendar lives at the root; every other path falls through to the
/// not-found page.
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Calendar,
    #[not_found]
    #[at("/404")]
    Missing,
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Calendar => html! { <Home /> },
        Route::Missing => html! { <NotFound /> },
    }
}
