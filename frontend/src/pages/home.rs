use advent_shared::api::resolve_articles;
use advent_shared::{Article, CalendarConfig, RequestSequence};
use yew::prelude::*;

use crate::components::calendar_grid::CalendarGrid;
use crate::components::decorations::{Chimney, HouseWindow, Roof, Starfield, WindowSide};
use crate::components::id_form::IdForm;
use crate::services::api::ApiService;

#[function_component(Home)]
pub fn home() -> Html {
    let config = use_context::<CalendarConfig>().unwrap_or_default();
    let qiita_id = use_state(String::new);
    let articles = use_state(Vec::<Article>::new);
    let sequence = use_mut_ref(RequestSequence::default);

    let on_input = {
        let qiita_id = qiita_id.clone();
        Callback::from(move |value: String| qiita_id.set(value))
    };

    let on_submit = {
        let qiita_id = qiita_id.clone();
        let articles = articles.clone();
        let sequence = sequence.clone();
        let config = config.clone();
        Callback::from(move |_: ()| {
            let identifier = (*qiita_id).clone();
            let articles = articles.clone();
            let sequence = sequence.clone();
            let config = config.clone();
            let ticket = sequence.borrow_mut().begin();
            tracing::info!(qiita_id = %identifier, "Loading advent calendar");

            wasm_bindgen_futures::spawn_local(async move {
                let result = ApiService::list_user_items(&config, &identifier).await;
                if !sequence.borrow().is_current(ticket) {
                    tracing::debug!(qiita_id = %identifier, "Discarding superseded response");
                    return;
                }
                articles.set(resolve_articles(result, &config.window));
            });
        })
    };

    html! {
        <div class="calendar-page">
            <IdForm value={(*qiita_id).clone()} on_input={on_input} on_submit={on_submit} />

            <div class="house">
                <Starfield />
                <Roof />
                <div class="house-body">
                    <CalendarGrid articles={(*articles).clone()} />
                    <Chimney />
                </div>
                <HouseWindow side={WindowSide::Left} />
                <HouseWindow side={WindowSide::Right} />
            </div>
        </div>
    }
}
