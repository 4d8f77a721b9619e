use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::forms::{apply_edit, Field, FormErrors, LeadForm};
use crate::message;
use crate::navigation::open_in_new_tab;
use crate::sheets::SheetError;
use crate::validation;

#[derive(Clone, Debug, PartialEq)]
pub enum Load<T> {
    Loading,
    Ready(T),
    Failed,
}

/// Shared flag saying whether a spawned fetch may still publish its result.
#[derive(Clone, Debug)]
struct Liveness(Rc<Cell<bool>>);

impl Liveness {
    fn new() -> Self {
        Self(Rc::new(Cell::new(true)))
    }

    fn retire(&self) {
        self.0.set(false);
    }

    /// `None` once retired, otherwise the state the result should be shown as.
    fn settle<T>(&self, result: Result<T, SheetError>) -> Option<Load<T>> {
        if !self.0.get() {
            log::debug!("Discarding sheet result for stale component");
            return None;
        }
        Some(match result {
            Ok(data) => Load::Ready(data),
            Err(e) => {
                log::error!("Failed to load sheet data: {}", e);
                Load::Failed
            }
        })
    }
}

/// Runs `fetch` whenever `deps` change. A result that arrives after the
/// component unmounted (or after `deps` changed again) is dropped.
#[hook]
pub fn use_sheet_data<T, D, F, Fut>(deps: D, fetch: F) -> Load<T>
where
    T: Clone + PartialEq + 'static,
    D: PartialEq + 'static,
    F: FnOnce() -> Fut + 'static,
    Fut: Future<Output = Result<T, SheetError>> + 'static,
{
    let state = use_state_eq(|| Load::Loading);
    {
        let state = state.clone();
        use_effect_with_deps(
            move |_| {
                let alive = Liveness::new();
                let guard = alive.clone();
                state.set(Load::Loading);
                spawn_local(async move {
                    if let Some(load) = guard.settle(fetch().await) {
                        state.set(load);
                    }
                });
                move || alive.retire()
            },
            deps,
        );
    }
    (*state).clone()
}

/// Field state, error map and submit flow shared by the contact and appointment pages.
#[derive(Clone)]
pub struct LeadFormHandle<F: LeadForm + 'static> {
    pub form: UseStateHandle<F>,
    pub errors: UseStateHandle<FormErrors>,
    pub submitted: UseStateHandle<bool>,
}

impl<F: LeadForm + 'static> LeadFormHandle<F> {
    pub fn error(&self, field: Field) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    /// Updates one field and clears its error, if any.
    pub fn on_input(&self, field: Field) -> Callback<String> {
        let form = self.form.clone();
        let errors = self.errors.clone();
        Callback::from(move |value: String| {
            let mut next = (*form).clone();
            let mut remaining = (*errors).clone();
            apply_edit(&mut next, &mut remaining, field, value);
            form.set(next);
            if remaining.len() != errors.len() {
                errors.set(remaining);
            }
        })
    }

    /// Validates, then hands the rendered message off to WhatsApp.
    pub fn on_submit(&self, render: fn(&F) -> String) -> Callback<SubmitEvent> {
        let form = self.form.clone();
        let errors = self.errors.clone();
        let submitted = self.submitted.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let current = (*form).clone();
            if let Err(found) = current.validate(validation::today()) {
                log::debug!("Form blocked by {} invalid field(s)", found.len());
                errors.set(found);
                return;
            }
            errors.set(FormErrors::new());

            let link = message::business_whatsapp_link(&render(&current));
            match open_in_new_tab(&link) {
                Ok(()) => {
                    log::info!("Opened WhatsApp hand-off");
                    submitted.set(true);
                    form.set(F::default());
                }
                Err(e) => gloo_console::error!("Error sending message:", e),
            }
        })
    }
}

#[hook]
pub fn use_lead_form<F: LeadForm + 'static>() -> LeadFormHandle<F> {
    LeadFormHandle {
        form: use_state(F::default),
        errors: use_state(FormErrors::new),
        submitted: use_state(|| false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn live_results_are_published() {
        let alive = Liveness::new();
        assert_eq!(alive.settle::<u8>(Ok(3)), Some(Load::Ready(3)));
        assert_eq!(alive.settle::<u8>(Err(SheetError::Status(500))), Some(Load::Failed));
    }

    #[test]
    fn results_after_cleanup_are_dropped() {
        let alive = Liveness::new();
        let guard = alive.clone();
        alive.retire();
        assert_eq!(guard.settle::<u8>(Ok(3)), None);
        assert_eq!(guard.settle::<u8>(Err(SheetError::MissingApiKey)), None);
    }
}
