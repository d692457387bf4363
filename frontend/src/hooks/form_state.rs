use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use webcraft_shared::contact::{SubmitRejected, Submission};
use webcraft_shared::{ContactField, ContactForm, ContactSubmitter, SubmitError};

use crate::config::CONFIG;
use crate::contact_service::submitter_for;

pub enum ContactFormAction {
    Update(ContactField, String),
    Begin,
    Finish(u64, Result<(), SubmitError>),
    Dismiss(u64),
}

/// Reducer wrapper so async completions land on the latest form, not a stale copy.
#[derive(Clone, PartialEq, Default)]
pub struct ContactFormState {
    pub form: ContactForm,
    pending: Option<Submission>,
}

impl Reducible for ContactFormState {
    type Action = ContactFormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ContactFormAction::Update(field, value) => next.form.update(field, &value),
            ContactFormAction::Begin => match next.form.begin_submit() {
                Ok(submission) => next.pending = Some(submission),
                Err(SubmitRejected::InFlight) => log::debug!("submit ignored, previous attempt still running"),
                Err(SubmitRejected::Invalid) => log::debug!("contact form has invalid fields"),
            },
            ContactFormAction::Finish(attempt, result) => {
                next.form.finish_submit(attempt, result);
                if next.pending.as_ref().is_some_and(|p| p.attempt == attempt) {
                    next.pending = None;
                }
            }
            ContactFormAction::Dismiss(attempt) => next.form.dismiss_status(attempt),
        }
        Rc::new(next)
    }
}

#[derive(Clone, PartialEq)]
pub struct ContactFormHandle {
    pub form: ContactForm,
    pub on_input: Callback<(ContactField, String)>,
    pub on_submit: Callback<()>,
}

#[hook]
pub fn use_contact_form() -> ContactFormHandle {
    let state = use_reducer_eq(ContactFormState::default);
    let submitter: Rc<Box<dyn ContactSubmitter>> = use_memo((), |_| submitter_for(&CONFIG));

    // Runs once per accepted attempt: `pending` only changes on Begin and Finish.
    {
        let dispatcher = state.dispatcher();
        use_effect_with(state.pending.clone(), move |pending| {
            if let Some(submission) = pending.clone() {
                spawn_local(async move {
                    let result = submitter.submit(&submission.data).await;
                    dispatcher.dispatch(ContactFormAction::Finish(submission.attempt, result));

                    TimeoutFuture::new(CONFIG.status_dismiss_ms).await;
                    dispatcher.dispatch(ContactFormAction::Dismiss(submission.attempt));
                });
            }
            || ()
        });
    }

    let on_input = {
        let dispatcher = state.dispatcher();
        use_callback((), move |(field, value): (ContactField, String), _| {
            dispatcher.dispatch(ContactFormAction::Update(field, value));
        })
    };

    let on_submit = {
        let dispatcher = state.dispatcher();
        use_callback((), move |_: (), _| dispatcher.dispatch(ContactFormAction::Begin))
    };

    ContactFormHandle {
        form: state.form.clone(),
        on_input,
        on_submit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use webcraft_shared::SubmitStatus;

    fn apply(state: Rc<ContactFormState>, action: ContactFormAction) -> Rc<ContactFormState> {
        state.reduce(action)
    }

    fn filled() -> Rc<ContactFormState> {
        let state = Rc::new(ContactFormState::default());
        let state = apply(state, ContactFormAction::Update(ContactField::Name, "Jordan Lee".into()));
        let state = apply(state, ContactFormAction::Update(ContactField::Email, "jordan@example.com".into()));
        apply(state, ContactFormAction::Update(ContactField::Message, "Quote for a landing page".into()))
    }

    fn pending_attempt(state: &ContactFormState) -> Option<u64> {
        state.pending.as_ref().map(|submission| submission.attempt)
    }

    #[test]
    fn test_begin_queues_submission() {
        let state = apply(filled(), ContactFormAction::Begin);
        assert_eq!(pending_attempt(&state), Some(1));
        assert_eq!(state.form.status(), &SubmitStatus::Submitting);
    }

    #[test]
    fn test_invalid_begin_queues_nothing() {
        let state = apply(Rc::new(ContactFormState::default()), ContactFormAction::Begin);
        assert_eq!(pending_attempt(&state), None);
        assert_eq!(state.form.status(), &SubmitStatus::Idle);
    }

    #[test]
    fn test_second_begin_while_submitting_keeps_pending() {
        let state = apply(filled(), ContactFormAction::Begin);
        let before = state.pending.clone();

        let state = apply(state, ContactFormAction::Begin);
        assert_eq!(state.pending, before);
        assert_eq!(pending_attempt(&state), Some(1));
    }

    #[test]
    fn test_stale_finish_keeps_pending() {
        let state = apply(filled(), ContactFormAction::Begin);
        let state = apply(state, ContactFormAction::Finish(7, Ok(())));

        assert_eq!(pending_attempt(&state), Some(1));
        assert_eq!(state.form.status(), &SubmitStatus::Submitting);
    }

    #[test]
    fn test_matching_finish_clears_pending() {
        let state = apply(filled(), ContactFormAction::Begin);
        let state = apply(state, ContactFormAction::Finish(1, Err(SubmitError::Rejected { status: 500 })));

        assert_eq!(pending_attempt(&state), None);
        assert!(matches!(state.form.status(), SubmitStatus::Error(_)));
    }

    #[test]
    fn test_dismiss_returns_to_idle() {
        let state = apply(filled(), ContactFormAction::Begin);
        let state = apply(state, ContactFormAction::Finish(1, Ok(())));
        assert_eq!(state.form.status(), &SubmitStatus::Success);

        let state = apply(state, ContactFormAction::Dismiss(1));
        assert_eq!(state.form.status(), &SubmitStatus::Idle);
    }
}
