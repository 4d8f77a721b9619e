use yew::prelude::*;

use crate::components::ceo_card::CeoCard;
use crate::content::{ABOUT_DESCRIPTION, ABOUT_SUBTITLE, ABOUT_TITLE, MISSION, VISION};
use crate::navigation::Section;

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <section id={Section::About.anchor()} class="about">
            <h2>{ABOUT_TITLE}</h2>
            <p class="section-subtitle">{ABOUT_SUBTITLE}</p>
            <p class="about-description">{ABOUT_DESCRIPTION}</p>

            <div class="about-grid">
                <div class="about-item">
                    <h3>{"Misión"}</h3>
                    <p>{MISSION}</p>
                </div>
                <div class="about-item">
                    <h3>{"Visión"}</h3>
                    <p>{VISION}</p>
                </div>
            </div>

            <CeoCard />
            <p class="about-tagline">{"Únete a la revolución visual"}</p>
        </section>
    }
}
