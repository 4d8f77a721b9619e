use yew::prelude::*;

use crate::components::page_header::PageHeader;
use crate::hooks::{use_sheet_data, Load};
use crate::navigation::use_navigator;
use crate::sheets::{fetch_projects, find_project};

#[derive(Properties, PartialEq)]
pub struct ProjectDetailProps {
    pub business_name: AttrValue,
}

#[function_component(ProjectDetail)]
pub fn project_detail(props: &ProjectDetailProps) -> Html {
    let navigator = use_navigator();
    let projects = use_sheet_data(props.business_name.clone(), fetch_projects);

    let body = match &projects {
        Load::Loading => html! { <p class="loading-message">{"Cargando proyecto..."}</p> },
        Load::Failed => html! { <p class="error-message">{"No se pudo cargar el proyecto."}</p> },
        Load::Ready(projects) => match find_project(projects, &props.business_name) {
            None => html! { <p class="error-message">{"Proyecto no encontrado."}</p> },
            Some(project) => html! {
                <div class="project-card">
                    <img src={project.image_url.clone()} alt={project.business_name.clone()} />
                    <h1>{&project.business_name}</h1>
                    <p>{&project.description}</p>
                    <button class="hero-cta" onclick={Callback::from(move |_: MouseEvent| navigator.go_home())}>
                        {"← Volver a la página principal"}
                    </button>
                </div>
            },
        },
    };

    html! {
        <div class="project-detail">
            <PageHeader />
            <section class="project-detail-body">{body}</section>
        </div>
    }
}
