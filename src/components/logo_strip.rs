use yew::prelude::*;

use crate::carousel::marquee_repeats;
use crate::hooks::{use_sheet_data, Load};
use crate::sheets::fetch_logos;

#[function_component(LogoStrip)]
pub fn logo_strip() -> Html {
    // The strip is decorative; it stays hidden until logos are available.
    let logos = match use_sheet_data((), fetch_logos) {
        Load::Ready(logos) if !logos.is_empty() => logos,
        _ => return html! {},
    };

    let repeats = marquee_repeats(logos.len());
    let items = logos.iter().cycle().take(logos.len() * repeats).enumerate().map(|(idx, logo)| {
        let image = html! {
            <img src={logo.image_url.clone()} alt={format!("logo-{}", idx)} class="client-logo" />
        };
        match logo.href() {
            Some(href) => html! {
                <div class="logo-item">
                    <a href={href} target="_blank" rel="noopener noreferrer">{image}</a>
                </div>
            },
            None => html! { <div class="logo-item">{image}</div> },
        }
    });

    html! {
        <div class="logo-strip">
            <h3>{"Nuestros Clientes"}</h3>
            <p>{"Empresas que confían en nosotros"}</p>
            <div class="logo-marquee">
                <div class="logo-track">
                    { for items }
                </div>
            </div>
        </div>
    }
}
