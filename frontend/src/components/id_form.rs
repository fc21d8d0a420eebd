use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct IdFormProps {
    pub value: String,
    pub on_input: Callback<String>,
    pub on_submit: Callback<()>,
}

/// Free-text Qiita ID field and the submit button. The ID is passed through
/// unvalidated.
#[function_component(IdForm)]
pub fn id_form(props: &IdFormProps) -> Html {
    let oninput = {
        let on_input = props.on_input.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_input.emit(input.value());
        })
    };

    let onsubmit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    html! {
        <form class="id-form" onsubmit={onsubmit}>
            <input
                type="text"
                class="id-input"
                placeholder="Qiita ID を入力"
                value={props.value.clone()}
                oninput={oninput}
            />
            <button type="submit" class="btn btn-primary">{ "表示" }</button>
        </form>
    }
}
