// frontend_mvnpm/src/components/coordinates_field.rs
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CoordinatesFieldProps {
    /// Fired with the trimmed input when the user presses Enter.
    pub onsearch: Callback<String>,
    #[prop_or_default]
    pub placeholder: AttrValue,
    #[prop_or_default]
    pub disabled: bool,
}

#[function_component(CoordinatesField)]
pub fn coordinates_field(props: &CoordinatesFieldProps) -> Html {
    let value = use_state(|| String::new());

    let oninput = {
        let value = value.clone();
        Callback::from(move |e: InputEvent| {
            let input = e.target_unchecked_into::<HtmlInputElement>().value();
            value.set(input);
        })
    };

    let onkeypress = {
        let value = value.clone();
        let onsearch = props.onsearch.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                let coordinates = (*value).trim().to_string();
                if !coordinates.is_empty() {
                    onsearch.emit(coordinates);
                }
            }
        })
    };

    html! {
        <input
            class="input"
            type="text"
            placeholder={props.placeholder.clone()}
            value={(*value).clone()}
            {oninput}
            {onkeypress}
            disabled={props.disabled}
        />
    }
}
