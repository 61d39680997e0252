use yew::prelude::*;

use crate::activity_card::ActivityCard;
use crate::models::{ActivityCatalog, ParticipantRef};
use crate::removals::PendingRemovals;

pub const LOADING_TEXT: &str = "Loading activities...";
pub const LOAD_FAILED_TEXT: &str = "Failed to load activities. Please try again later.";

#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    Loading,
    Ready(ActivityCatalog),
    Failed,
}

#[derive(Properties, PartialEq)]
pub struct ActivityListProps {
    pub state: LoadState,
    pub pending: PendingRemovals,
    pub on_remove: Callback<ParticipantRef>,
}

#[function_component(ActivityList)]
pub fn activity_list(props: &ActivityListProps) -> Html {
    let body = match &props.state {
        LoadState::Loading => html! { <p>{ LOADING_TEXT }</p> },
        LoadState::Failed => html! { <p>{ LOAD_FAILED_TEXT }</p> },
        LoadState::Ready(catalog) => catalog
            .0
            .iter()
            .map(|a| {
                html! {
                    <ActivityCard
                        key={a.name.clone()}
                        activity={a.clone()}
                        pending={props.pending.clone()}
                        on_remove={props.on_remove.clone()}
                    />
                }
            })
            .collect::<Html>(),
    };

    html! { <div id="activities-list">{ body }</div> }
}
