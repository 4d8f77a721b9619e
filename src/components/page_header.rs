use yew::prelude::*;

use crate::navigation::use_navigator;

#[derive(Properties, PartialEq)]
pub struct PageHeaderProps {
    #[prop_or(AttrValue::Static("Volver al inicio"))]
    pub back_label: AttrValue,
}

/// Sticky bar with the back-to-home button used by every non-home view.
#[function_component(PageHeader)]
pub fn page_header(props: &PageHeaderProps) -> Html {
    let navigator = use_navigator();
    let on_back = Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        navigator.go_home();
    });

    html! {
        <div class="page-header">
            <button class="back-button" onclick={on_back}>
                <span class="back-arrow">{"←"}</span>
                <span>{&props.back_label}</span>
            </button>
            <div class="page-header-brand">
                <img src="/logo.png" alt="VISONIXRO" />
                <span>{"VISONIXRO"}</span>
            </div>
        </div>
    }
}
