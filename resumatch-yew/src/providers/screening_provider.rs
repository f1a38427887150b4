use crate::config::Config;
use crate::hooks::ScreeningContext;
use crate::transport::{BrowserFile, HttpScoringClient};
use resumatch_core::{
    FormCommand, FormEvent, PendingSubmission, ScoringClient, SubmissionController,
};
use std::cell::RefCell;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ScreeningProviderProps {
    #[prop_or_default]
    pub config: Config,
    pub children: Children,
}

type Controller = Rc<RefCell<SubmissionController<BrowserFile>>>;

/// Applies a command and publishes the new snapshot.
/// Started submissions are sent in the background and settled on reply.
fn apply(
    controller: &Controller,
    snapshot: &UseStateHandle<SubmissionController<BrowserFile>>,
    client: &Rc<HttpScoringClient>,
    command: FormCommand<BrowserFile>,
) {
    let name = command.name();
    let event = controller.borrow_mut().handle_command(command);
    snapshot.set(controller.borrow().clone());

    match event {
        FormEvent::SubmissionStarted { submission } => {
            spawn_submission(controller.clone(), snapshot.clone(), client.clone(), submission);
        }
        FormEvent::SubmissionRejected { reason } => {
            tracing::warn!("{} rejected: {}", name, reason);
        }
        FormEvent::SubmissionFailed { error, .. } => {
            gloo::dialogs::alert(&error.to_string());
        }
        FormEvent::ResultsReceived { count, .. } => {
            tracing::info!("Showing {} screening result(s)", count);
        }
        FormEvent::StaleReplyIgnored { id } => {
            tracing::debug!("Dropped reply for submission {}", id);
        }
        FormEvent::InputChanged => {}
    }
}

fn spawn_submission(
    controller: Controller,
    snapshot: UseStateHandle<SubmissionController<BrowserFile>>,
    client: Rc<HttpScoringClient>,
    submission: PendingSubmission<BrowserFile>,
) {
    let PendingSubmission { id, request } = submission;

    wasm_bindgen_futures::spawn_local(async move {
        let outcome = client.send(request).await;
        apply(
            &controller,
            &snapshot,
            &client,
            FormCommand::Settle { id, outcome },
        );
    });
}

#[function_component(ScreeningProvider)]
pub fn screening_provider(props: &ScreeningProviderProps) -> Html {
    let controller = use_mut_ref(SubmissionController::<BrowserFile>::new);
    let snapshot = use_state(|| controller.borrow().clone());
    let client = use_memo(props.config.clone(), |config| {
        tracing::info!("Scoring endpoint: {}", config.api_url);
        HttpScoringClient::new(config.clone())
    });

    let dispatch = {
        let controller = controller.clone();
        let snapshot = snapshot.clone();
        Rc::new(move |command: FormCommand<BrowserFile>| {
            apply(&controller, &snapshot, &client, command);
        }) as Rc<dyn Fn(FormCommand<BrowserFile>)>
    };

    let context = ScreeningContext {
        form: (*snapshot).clone(),
        dispatch,
    };

    html! {
        <ContextProvider<ScreeningContext> {context}>
            {props.children.clone()}
        </ContextProvider<ScreeningContext>>
    }
}
