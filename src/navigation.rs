use gloo_timers::callback::Timeout;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;

/// Delay before scrolling once Home has been rendered again.
const SCROLL_AFTER_NAVIGATE_MS: u32 = 400;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ServiceKind {
    Mobile,
    Web,
    Social,
}

impl ServiceKind {
    pub const ALL: [ServiceKind; 3] = [ServiceKind::Mobile, ServiceKind::Web, ServiceKind::Social];
}

#[derive(Clone, Debug, PartialEq)]
pub enum View {
    Home,
    Service(ServiceKind),
    ProjectDetail { business_name: String },
    ContactForm,
    AppointmentForm,
    CeoBiography,
}

impl View {
    pub fn document_title(&self) -> String {
        match self {
            View::Home => "VISONIXRO".to_string(),
            View::Service(kind) => format!("{} | VISONIXRO", crate::content::service(*kind).title),
            View::ProjectDetail { business_name } => format!("{} | VISONIXRO", business_name),
            View::ContactForm => "Contacto | VISONIXRO".to_string(),
            View::AppointmentForm => "Agendar cita | VISONIXRO".to_string(),
            View::CeoBiography => "Miguel Ángel Romero | VISONIXRO".to_string(),
        }
    }
}

/// Scroll targets on the home view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Hero,
    About,
    Services,
    Projects,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Hero,
        Section::About,
        Section::Services,
        Section::Projects,
        Section::Contact,
    ];

    pub fn anchor(self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::About => "about",
            Section::Services => "services",
            Section::Projects => "projects-carousel",
            Section::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Hero => "Inicio",
            Section::About => "Nosotros",
            Section::Services => "Servicios",
            Section::Projects => "Proyectos",
            Section::Contact => "Contacto",
        }
    }
}

/// Current view plus the setter, provided once at the root of the tree.
#[derive(Clone, PartialEq)]
pub struct Navigator {
    current: View,
    set_view: Callback<View>,
}

impl Navigator {
    pub fn new(current: View, set_view: Callback<View>) -> Self {
        Self { current, set_view }
    }

    pub fn navigate(&self, view: View) {
        log::debug!("Navigating to {:?}", view);
        self.set_view.emit(view);
    }

    pub fn go_home(&self) {
        self.navigate(View::Home);
    }

    /// Click handler that switches to `view`.
    pub fn to(&self, view: View) -> Callback<MouseEvent> {
        let navigator = self.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            navigator.navigate(view.clone());
        })
    }

    /// Scrolls to a home section, returning to Home first when needed.
    pub fn scroll_to(&self, section: Section) {
        if self.current == View::Home {
            scroll_into_view(section.anchor());
        } else {
            self.go_home();
            Timeout::new(SCROLL_AFTER_NAVIGATE_MS, move || {
                scroll_into_view(section.anchor());
            })
            .forget();
        }
    }
}

#[hook]
pub fn use_navigator() -> Navigator {
    use_context::<Navigator>().unwrap_or_else(|| {
        log::warn!("Navigator context missing, navigation disabled");
        Navigator::new(View::Home, Callback::noop())
    })
}

pub fn scroll_into_view(anchor: &str) {
    let element = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(anchor));
    match element {
        Some(element) => {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
        None => log::debug!("No element with id {}", anchor),
    }
}

/// Opens `url` in a new browser context. A blocked popup is reported as an error.
pub fn open_in_new_tab(url: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("no window available")?;
    match window.open_with_url_and_target(url, "_blank") {
        Ok(Some(_)) => Ok(()),
        Ok(None) => Err("popup blocked".to_string()),
        Err(e) => Err(format!("{:?}", e)),
    }
}

pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recording_navigator(current: View) -> (Navigator, Rc<RefCell<Vec<View>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let navigator = Navigator::new(current, Callback::from(move |v: View| sink.borrow_mut().push(v)));
        (navigator, seen)
    }

    #[test]
    fn navigate_carries_project_name() {
        let (navigator, seen) = recording_navigator(View::Home);
        navigator.navigate(View::ProjectDetail { business_name: "Cafe Luna".into() });
        navigator.go_home();
        assert_eq!(
            *seen.borrow(),
            vec![View::ProjectDetail { business_name: "Cafe Luna".into() }, View::Home]
        );
    }

    #[test]
    fn anchors_match_home_sections() {
        let anchors: Vec<_> = Section::ALL.iter().map(|s| s.anchor()).collect();
        assert_eq!(anchors, vec!["hero", "about", "services", "projects-carousel", "contact"]);
    }

    #[test]
    fn titles_name_the_view() {
        assert_eq!(View::Home.document_title(), "VISONIXRO");
        assert_eq!(
            View::ProjectDetail { business_name: "Cafe Luna".into() }.document_title(),
            "Cafe Luna | VISONIXRO"
        );
        for kind in ServiceKind::ALL {
            assert!(View::Service(kind).document_title().ends_with("| VISONIXRO"));
        }
    }
}
