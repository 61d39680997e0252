use yew::prelude::*;

use crate::models::{Activity, ParticipantRef};
use crate::removals::PendingRemovals;

pub const REMOVE_LABEL: &str = "✖";
pub const REMOVING_LABEL: &str = "...";

#[derive(Properties, PartialEq)]
pub struct ActivityCardProps {
    pub activity: Activity,
    pub pending: PendingRemovals,
    pub on_remove: Callback<ParticipantRef>,
}

#[function_component(ActivityCard)]
pub fn activity_card(props: &ActivityCardProps) -> Html {
    let a = &props.activity;

    let participants = if a.participants.is_empty() {
        html! { <p class="no-participants">{ "No participants yet" }</p> }
    } else {
        html! {
            <ul class="participants-list">
                { for a.participants.iter().map(|email| {
                    let target = ParticipantRef::new(&a.name, email);
                    let busy = target.as_ref().is_some_and(|t| props.pending.contains(t));
                    participant_row(&a.name, email, target, busy, props.on_remove.clone())
                }) }
            </ul>
        }
    };

    html! {
        <div class="activity-card">
            <h4>{ a.name.clone() }</h4>
            <p>{ a.description.clone() }</p>
            <p class="availability">
                <strong>{ "Availability:" }</strong>
                { format!(" {} spots left", a.spots_left()) }
            </p>
            <div class="participants-section">
                <h5>{ "Participants" }</h5>
                { participants }
            </div>
        </div>
    }
}

fn participant_row(
    activity: &str,
    email: &str,
    target: Option<ParticipantRef>,
    busy: bool,
    on_remove: Callback<ParticipantRef>,
) -> Html {
    let onclick = Callback::from(move |_: MouseEvent| {
        // Rows without both tags are inert.
        if let Some(t) = target.clone() {
            on_remove.emit(t);
        }
    });

    html! {
        <li class="participant-item">
            <span class="participant-email">{ email.to_string() }</span>
            <button
                class="remove-participant"
                type="button"
                title={format!("Remove {email}")}
                data-activity={activity.to_string()}
                data-email={email.to_string()}
                disabled={busy}
                {onclick}
            >
                { if busy { REMOVING_LABEL } else { REMOVE_LABEL } }
            </button>
        </li>
    }
}
