use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::carousel::{Carousel, CarouselAction, AUTOPLAY_INTERVAL_MS, TRANSITION_MS};
use crate::hooks::{use_sheet_data, Load};
use crate::navigation::{use_navigator, Section, View};
use crate::sheets::{fetch_projects, Project};

#[function_component(ProjectsCarousel)]
pub fn projects_carousel() -> Html {
    let projects = use_sheet_data((), fetch_projects);

    let body = match projects {
        Load::Loading => html! {
            <div class="carousel-skeleton">
                <div class="skeleton-title"></div>
                <div class="skeleton-slide"></div>
            </div>
        },
        Load::Failed => html! {
            <div class="error-message">{"No se pudieron cargar los proyectos."}</div>
        },
        Load::Ready(projects) if projects.is_empty() => html! {},
        Load::Ready(projects) => html! { <ProjectSlides {projects} /> },
    };

    html! {
        <section id={Section::Projects.anchor()} class="projects">
            <h2>{"Proyectos Innovadores"}</h2>
            {body}
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct ProjectSlidesProps {
    projects: Vec<Project>,
}

#[function_component(ProjectSlides)]
fn project_slides(props: &ProjectSlidesProps) -> Html {
    let navigator = use_navigator();
    let len = props.projects.len();
    let carousel = use_reducer(|| Carousel::new(len));

    // One autoplay step per countdown; any move re-keys the effect and restarts it.
    {
        let dispatcher = carousel.dispatcher();
        use_effect_with_deps(
            move |timer: &Option<u64>| {
                let timeout = timer.map(|_| {
                    Timeout::new(AUTOPLAY_INTERVAL_MS, move || {
                        dispatcher.dispatch(CarouselAction::Next)
                    })
                });
                move || drop(timeout)
            },
            carousel.autoplay_timer(),
        );
    }

    // Clear the animating flag once the slide transition has played.
    {
        let dispatcher = carousel.dispatcher();
        use_effect_with_deps(
            move |animating: &bool| {
                let timeout = animating.then(|| {
                    Timeout::new(TRANSITION_MS, move || {
                        dispatcher.dispatch(CarouselAction::FinishTransition)
                    })
                });
                move || drop(timeout)
            },
            carousel.animating,
        );
    }

    let dispatch = |make: fn() -> CarouselAction| {
        let dispatcher = carousel.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(make()))
    };

    let on_enter = {
        let dispatcher = carousel.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(CarouselAction::SetPaused(true)))
    };
    let on_leave = {
        let dispatcher = carousel.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(CarouselAction::SetPaused(false)))
    };

    let track_style = format!("transform: translateX(-{}%);", carousel.current * 100);
    let progress_style = format!("width: {}%;", carousel.progress() * 100.0);

    html! {
        <div class="carousel">
            <div class="carousel-header">
                <button class="carousel-play" onclick={dispatch(|| CarouselAction::TogglePlaying)}>
                    { if carousel.playing { "⏸" } else { "▶" } }
                </button>
            </div>

            <div class="carousel-frame" onmouseenter={on_enter} onmouseleave={on_leave}>
                <div class="carousel-track" style={track_style}>
                    { for props.projects.iter().enumerate().map(|(index, project)| html! {
                        <div
                            class="carousel-slide"
                            onclick={navigator.to(View::ProjectDetail {
                                business_name: project.business_name.clone(),
                            })}
                        >
                            <img src={project.image_url.clone()} alt={project.business_name.clone()} />
                            <div class="slide-content">
                                <h3>{&project.business_name}</h3>
                                <p>{&project.description}</p>
                            </div>
                            <span class="slide-index">{format!("{} / {}", index + 1, len)}</span>
                        </div>
                    }) }
                </div>

                <button
                    class="carousel-arrow prev"
                    disabled={carousel.animating}
                    onclick={dispatch(|| CarouselAction::Prev)}
                >
                    {"‹"}
                </button>
                <button
                    class="carousel-arrow next"
                    disabled={carousel.animating}
                    onclick={dispatch(|| CarouselAction::Next)}
                >
                    {"›"}
                </button>
            </div>

            <div class="carousel-dots">
                { for (0..len).map(|index| {
                    let dispatcher = carousel.dispatcher();
                    html! {
                        <button
                            class={classes!("carousel-dot", (index == carousel.current).then(|| "active"))}
                            aria-label={format!("Ir al proyecto {}", index + 1)}
                            onclick={Callback::from(move |_: MouseEvent| {
                                dispatcher.dispatch(CarouselAction::GoTo(index))
                            })}
                        />
                    }
                }) }
            </div>

            <div class="carousel-progress">
                <div class="carousel-progress-bar" style={progress_style}></div>
            </div>
        </div>
    }
}
