use yew::prelude::*;

use crate::components::{
    about::About, footer::Footer, hero::Hero, location::Location, logo_strip::LogoStrip,
    projects_carousel::ProjectsCarousel, services::Services,
};

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="landing-page">
            <Hero />
            <About />
            <Services />
            <ProjectsCarousel />
            <LogoStrip />
            <Location />
            <Footer />
        </div>
    }
}
