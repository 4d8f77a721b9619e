use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::navigation::use_navigator;

const REDIRECT_MS: u32 = 3_000;

#[derive(Properties, PartialEq)]
pub struct SubmitSuccessProps {
    pub title: AttrValue,
    pub message: AttrValue,
}

/// Confirmation panel shown after the WhatsApp hand-off. Returns to Home after a few seconds.
#[function_component(SubmitSuccess)]
pub fn submit_success(props: &SubmitSuccessProps) -> Html {
    let navigator = use_navigator();
    use_timeout(move || navigator.go_home(), REDIRECT_MS);

    html! {
        <div class="success-container">
            <div class="success-panel">
                <div class="success-icon">{"✓"}</div>
                <h2>{&props.title}</h2>
                <p>{&props.message}</p>
                <p class="redirect-note">{"Redirigiendo al inicio en unos segundos..."}</p>
            </div>
        </div>
    }
}
