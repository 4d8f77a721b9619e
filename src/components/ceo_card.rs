use yew::prelude::*;

use crate::content::{CEO_NAME, CEO_ROLE, CEO_SUMMARY};
use crate::navigation::{use_navigator, View};

#[function_component(CeoCard)]
pub fn ceo_card() -> Html {
    let navigator = use_navigator();

    html! {
        <div class="ceo-card" onclick={navigator.to(View::CeoBiography)}>
            <img src="/perf.png" alt={CEO_NAME} class="ceo-photo" />
            <div class="ceo-info">
                <h3>{CEO_NAME}</h3>
                <span class="ceo-role">{CEO_ROLE}</span>
                <p>{CEO_SUMMARY}</p>
                <span class="ceo-more">{"Conoce su historia →"}</span>
            </div>
        </div>
    }
}
