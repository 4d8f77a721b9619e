use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TextFieldProps {
    pub label: AttrValue,
    pub value: AttrValue,
    pub oninput: Callback<String>,
    #[prop_or(AttrValue::Static("text"))]
    pub input_type: AttrValue,
    #[prop_or_default]
    pub placeholder: AttrValue,
    #[prop_or_default]
    pub min: Option<AttrValue>,
    #[prop_or_default]
    pub error: Option<&'static str>,
}

#[function_component(TextField)]
pub fn text_field(props: &TextFieldProps) -> Html {
    let oninput = {
        let callback = props.oninput.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            callback.emit(input.value());
        })
    };

    html! {
        <div class="form-field">
            <label>{&props.label}{" *"}</label>
            <input
                type={props.input_type.clone()}
                class={classes!("form-input", props.error.is_some().then(|| "has-error"))}
                value={props.value.clone()}
                placeholder={props.placeholder.clone()}
                min={props.min.clone()}
                {oninput}
            />
            if let Some(error) = props.error {
                <p class="field-error">{error}</p>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SelectFieldProps {
    pub label: AttrValue,
    pub value: AttrValue,
    pub placeholder: AttrValue,
    pub options: &'static [&'static str],
    pub onchange: Callback<String>,
    #[prop_or_default]
    pub error: Option<&'static str>,
}

#[function_component(SelectField)]
pub fn select_field(props: &SelectFieldProps) -> Html {
    let onchange = {
        let callback = props.onchange.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            callback.emit(select.value());
        })
    };

    html! {
        <div class="form-field">
            <label>{&props.label}{" *"}</label>
            <select
                class={classes!("form-input", props.error.is_some().then(|| "has-error"))}
                {onchange}
            >
                <option value="" selected={props.value.is_empty()}>{&props.placeholder}</option>
                { for props.options.iter().map(|option| html! {
                    <option value={*option} selected={&*props.value == *option}>{*option}</option>
                }) }
            </select>
            if let Some(error) = props.error {
                <p class="field-error">{error}</p>
            }
        </div>
    }
}
