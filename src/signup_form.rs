use web_sys::{HtmlFormElement, HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::models::SignupRequest;

pub const SELECT_PLACEHOLDER: &str = "-- Select an activity --";

#[derive(Properties, PartialEq)]
pub struct SignupFormProps {
    pub activities: Vec<String>,
    /// Handed back so the board can reset the form after a successful signup.
    pub form_ref: NodeRef,
    pub onsubmit: Callback<SignupRequest>,
}

#[function_component(SignupForm)]
pub fn signup_form(props: &SignupFormProps) -> Html {
    let email_ref = use_node_ref();
    let activity_ref = use_node_ref();

    let onsubmit = {
        let email_ref = email_ref.clone();
        let activity_ref = activity_ref.clone();
        let cb = props.onsubmit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let email = email_ref
                .cast::<HtmlInputElement>()
                .map(|i| i.value())
                .unwrap_or_default();
            let activity = activity_ref
                .cast::<HtmlSelectElement>()
                .map(|s| s.value())
                .unwrap_or_default();
            cb.emit(SignupRequest { activity, email });
        })
    };

    html! {
        <form id="signup-form" ref={props.form_ref.clone()} {onsubmit}>
            <div class="form-group">
                <label for="email">{ "Student Email:" }</label>
                <input
                    type="email"
                    id="email"
                    ref={email_ref}
                    required=true
                    placeholder="your-email@mergington.edu"
                />
            </div>
            <div class="form-group">
                <label for="activity">{ "Select Activity:" }</label>
                <select id="activity" ref={activity_ref} required=true>
                    <option value="">{ SELECT_PLACEHOLDER }</option>
                    { for props.activities.iter().map(|name| html! {
                        <option value={name.clone()}>{ name.clone() }</option>
                    }) }
                </select>
            </div>
            <button type="submit">{ "Sign Up" }</button>
        </form>
    }
}

/// Clears both fields the way a native form reset does.
pub fn reset(form_ref: &NodeRef) {
    if let Some(form) = form_ref.cast::<HtmlFormElement>() {
        form.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::ServerRenderer;

    #[tokio::test]
    async fn placeholder_then_one_option_per_activity() {
        let out = ServerRenderer::<SignupForm>::with_props(|| SignupFormProps {
            activities: vec!["Chess Club".into(), "Art <Studio>".into()],
            form_ref: NodeRef::default(),
            onsubmit: Callback::noop(),
        })
        .hydratable(false)
        .render()
        .await;

        let placeholder = out.find(SELECT_PLACEHOLDER).unwrap();
        let chess = out.find(">Chess Club</option>").unwrap();
        let art = out.find(">Art &lt;Studio&gt;</option>").unwrap();
        assert!(placeholder < chess && chess < art);
        assert_eq!(out.matches("<option").count(), 3);
    }
}
