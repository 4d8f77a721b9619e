use log::info;
use yew::prelude::*;

mod carousel;
mod config;
mod content;
mod forms;
mod hooks;
mod message;
mod navigation;
mod sheets;
mod validation;

mod components {
    pub mod about;
    pub mod ceo_card;
    pub mod footer;
    pub mod form_field;
    pub mod hero;
    pub mod location;
    pub mod logo_strip;
    pub mod navbar;
    pub mod page_header;
    pub mod projects_carousel;
    pub mod services;
    pub mod submit_success;
}
mod pages {
    pub mod appointment_form;
    pub mod ceo_biography;
    pub mod contact_form;
    pub mod home;
    pub mod project_detail;
    pub mod service_detail;
}

use components::navbar::Navbar;
use navigation::{scroll_to_top, Navigator, View};
use pages::{
    appointment_form::AppointmentFormPage,
    ceo_biography::CeoBiography,
    contact_form::ContactFormPage,
    home::Home,
    project_detail::ProjectDetail,
    service_detail::ServiceDetail,
};

fn switch(view: &View) -> Html {
    match view {
        View::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        View::Service(kind) => {
            info!("Rendering service page {:?}", kind);
            html! { <ServiceDetail kind={*kind} /> }
        }
        View::ProjectDetail { business_name } => {
            info!("Rendering project page for {}", business_name);
            html! { <ProjectDetail business_name={business_name.clone()} /> }
        }
        View::ContactForm => {
            info!("Rendering Contact form");
            html! { <ContactFormPage /> }
        }
        View::AppointmentForm => {
            info!("Rendering Appointment form");
            html! { <AppointmentFormPage /> }
        }
        View::CeoBiography => {
            info!("Rendering CEO biography");
            html! { <CeoBiography /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    let view = use_state(|| View::Home);

    // Each view starts at the top of the page with its own title.
    {
        use_effect_with_deps(
            move |view: &View| {
                if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                    document.set_title(&view.document_title());
                }
                scroll_to_top();
                || ()
            },
            (*view).clone(),
        );
    }

    let navigator = {
        let setter = view.clone();
        Navigator::new((*view).clone(), Callback::from(move |next: View| setter.set(next)))
    };

    html! {
        <ContextProvider<Navigator> context={navigator}>
            <Navbar />
            <main>{ switch(&view) }</main>
        </ContextProvider<Navigator>>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
