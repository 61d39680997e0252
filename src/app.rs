use gloo::console::{error, log};
use gloo::dialogs::alert;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::activity_list::{ActivityList, LoadState};
use crate::api::ActivityApi;
use crate::config::BoardConfig;
use crate::error::ApiError;
use crate::models::{ApiMessage, ParticipantRef, SignupRequest};
use crate::notice::{MessageBox, Notice, NoticeTimer};
use crate::removals::{PendingRemovals, RemovalAction};
use crate::signup_form::{self, SignupForm};

/// Re-reads the whole catalog and swaps it in. Earlier cards stay on screen
/// until the response lands; a failure replaces them with the failure notice.
async fn refresh(api: &ActivityApi, load: &UseStateHandle<LoadState>, names: &UseStateHandle<Vec<String>>) {
    match api.fetch_activities().await {
        Ok(catalog) => {
            names.set(catalog.names());
            load.set(LoadState::Ready(catalog));
        }
        Err(e) => {
            error!(format!("Error fetching activities: {e}"));
            load.set(LoadState::Failed);
        }
    }
}

/// What the board does once a signup request settles.
#[derive(Debug, PartialEq)]
pub struct SignupOutcome {
    pub notice: Notice,
    /// Success only: clear the form and re-read the catalog.
    pub reset_and_refresh: bool,
}

pub fn signup_outcome(result: &Result<ApiMessage, ApiError>) -> SignupOutcome {
    match result {
        Ok(body) => SignupOutcome {
            notice: Notice::success(body.message.clone().unwrap_or_default()),
            reset_and_refresh: true,
        },
        Err(e) => SignupOutcome {
            notice: Notice::error(e.signup_text()),
            reset_and_refresh: false,
        },
    }
}

/// What the board does once a DELETE settles.
#[derive(Debug, PartialEq)]
pub enum RemovalOutcome {
    /// Re-read the catalog, then release the control.
    Refresh,
    /// Release the control as it was and alert with this text.
    Restore(String),
}

pub fn removal_outcome(result: &Result<ApiMessage, ApiError>) -> RemovalOutcome {
    match result {
        Ok(_) => RemovalOutcome::Refresh,
        Err(e) => RemovalOutcome::Restore(e.removal_text()),
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let config = use_memo((), |_| BoardConfig::from_dom());
    let api = use_memo(config.clone(), |cfg| ActivityApi::new(cfg.api_base.clone()));

    let load = use_state(|| LoadState::Loading);
    let names = use_state(Vec::<String>::new);
    let pending = use_reducer(PendingRemovals::default);
    let notice = use_state(|| None::<Notice>);
    let notice_timer = use_mut_ref(NoticeTimer::new);
    let form_ref = use_node_ref();

    // Initial load
    {
        let api = api.clone();
        let load = load.clone();
        let names = names.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                refresh(&api, &load, &names).await;
            });
            || ()
        });
    }

    let on_remove = {
        let api = api.clone();
        let load = load.clone();
        let names = names.clone();
        let pending = pending.clone();
        Callback::from(move |target: ParticipantRef| {
            if pending.contains(&target) {
                return;
            }
            pending.dispatch(RemovalAction::Begin(target.clone()));

            let api = api.clone();
            let load = load.clone();
            let names = names.clone();
            let pending = pending.clone();
            spawn_local(async move {
                let result = api.remove_participant(&target).await;
                if let Err(e) = &result {
                    error!(format!("Failed to remove participant: {e}"));
                }
                match removal_outcome(&result) {
                    RemovalOutcome::Refresh => {
                        log!(format!("Removed {} from {}", target.email, target.activity));
                        refresh(&api, &load, &names).await;
                        pending.dispatch(RemovalAction::Settle(target));
                    }
                    RemovalOutcome::Restore(text) => {
                        pending.dispatch(RemovalAction::Settle(target));
                        alert(&text);
                    }
                }
            });
        })
    };

    let on_signup = {
        let api = api.clone();
        let load = load.clone();
        let names = names.clone();
        let notice = notice.clone();
        let notice_timer = notice_timer.clone();
        let form_ref = form_ref.clone();
        let hide_ms = config.message_hide_ms;
        Callback::from(move |req: SignupRequest| {
            let api = api.clone();
            let load = load.clone();
            let names = names.clone();
            let notice = notice.clone();
            let notice_timer = notice_timer.clone();
            let form_ref = form_ref.clone();
            spawn_local(async move {
                let result = api.signup(&req).await;
                if let Err(e) = &result {
                    error!(format!("Error signing up: {e}"));
                }
                let outcome = signup_outcome(&result);
                notice_timer.borrow_mut().show(&notice, outcome.notice, hide_ms);
                if outcome.reset_and_refresh {
                    signup_form::reset(&form_ref);
                    refresh(&api, &load, &names).await;
                }
            });
        })
    };

    html! {
        <main>
            <section id="activities-container">
                <h3>{ "Available Activities" }</h3>
                <ActivityList
                    state={(*load).clone()}
                    pending={(*pending).clone()}
                    on_remove={on_remove}
                />
            </section>
            <section id="signup-container">
                <h3>{ "Sign Up for an Activity" }</h3>
                <SignupForm
                    activities={(*names).clone()}
                    form_ref={form_ref}
                    onsubmit={on_signup}
                />
                <MessageBox notice={(*notice).clone()} />
            </section>
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{REMOVAL_FAILED, SIGNUP_FAILED, SIGNUP_REJECTED_FALLBACK};
    use crate::notice::NoticeKind;

    fn rejected(status: u16, body: &str) -> Result<ApiMessage, ApiError> {
        Err(ApiError::Rejected {
            status,
            body: ApiMessage::parse_lenient(body),
        })
    }

    fn undecodable() -> Result<ApiMessage, ApiError> {
        Err(ApiError::from(serde_json::from_str::<ApiMessage>("<html>").unwrap_err()))
    }

    #[test]
    fn signup_success_shows_server_message_and_resets() {
        let ok = Ok(ApiMessage::parse_lenient(r#"{"message": "Signed up b@x.com for Chess Club"}"#));
        let outcome = signup_outcome(&ok);
        assert_eq!(outcome.notice, Notice::success("Signed up b@x.com for Chess Club"));
        assert!(outcome.reset_and_refresh);
    }

    #[test]
    fn signup_rejection_keeps_form() {
        let outcome = signup_outcome(&rejected(400, r#"{"detail": "Student is already signed up"}"#));
        assert_eq!(outcome.notice.kind, NoticeKind::Error);
        assert_eq!(outcome.notice.text, "Student is already signed up");
        assert!(!outcome.reset_and_refresh);

        let outcome = signup_outcome(&rejected(404, "{}"));
        assert_eq!(outcome.notice, Notice::error(SIGNUP_REJECTED_FALLBACK));
        assert!(!outcome.reset_and_refresh);
    }

    #[test]
    fn signup_unreadable_response_uses_retry_text() {
        let outcome = signup_outcome(&undecodable());
        assert_eq!(outcome.notice, Notice::error(SIGNUP_FAILED));
        assert!(!outcome.reset_and_refresh);
    }

    #[test]
    fn removal_success_refreshes() {
        assert_eq!(removal_outcome(&Ok(ApiMessage::default())), RemovalOutcome::Refresh);
    }

    #[test]
    fn removal_failure_restores_without_refresh() {
        assert_eq!(
            removal_outcome(&rejected(404, r#"{"detail": "Participant not found"}"#)),
            RemovalOutcome::Restore("Participant not found".into())
        );
        assert_eq!(
            removal_outcome(&undecodable()),
            RemovalOutcome::Restore(REMOVAL_FAILED.into())
        );
    }
}
