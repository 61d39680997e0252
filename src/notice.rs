use gloo::timers::callback::Timeout;
use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    pub fn class(self) -> &'static str {
        match self {
            NoticeKind::Success => "success",
            NoticeKind::Error => "error",
        }
    }
}

/// Message shown under the signup form.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: text.into(),
        }
    }
}

/// Owns the single pending hide. Replacing it drops (and so cancels) the old
/// one, which keeps a newer message from being hidden by an older timer.
pub struct NoticeTimer<H = Timeout> {
    pending: Option<H>,
}

impl<H> Default for NoticeTimer<H> {
    fn default() -> Self {
        Self { pending: None }
    }
}

impl<H> NoticeTimer<H> {
    pub fn replace(&mut self, handle: H) {
        self.pending = Some(handle);
    }
}

impl NoticeTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, slot: &UseStateHandle<Option<Notice>>, notice: Notice, hide_after_ms: u32) {
        slot.set(Some(notice));
        let slot = slot.clone();
        self.replace(Timeout::new(hide_after_ms, move || slot.set(None)));
    }
}

#[derive(Properties, PartialEq)]
pub struct MessageProps {
    pub notice: Option<Notice>,
}

#[function_component(MessageBox)]
pub fn message_box(props: &MessageProps) -> Html {
    match &props.notice {
        Some(n) => html! {
            <div id="message" class={n.kind.class()}>{ n.text.clone() }</div>
        },
        None => html! { <div id="message" class="hidden"></div> },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;
    use yew::ServerRenderer;

    /// Stands in for a `Timeout`: records being dropped, which is how a
    /// pending hide gets cancelled.
    struct FakeHide(Rc<Cell<bool>>);

    impl Drop for FakeHide {
        fn drop(&mut self) {
            self.0.set(true);
        }
    }

    #[test]
    fn newer_notice_cancels_older_hide() {
        let first = Rc::new(Cell::new(false));
        let second = Rc::new(Cell::new(false));
        let mut timer = NoticeTimer::<FakeHide>::default();

        timer.replace(FakeHide(first.clone()));
        assert!(!first.get());

        timer.replace(FakeHide(second.clone()));
        assert!(first.get());
        assert!(!second.get());

        drop(timer);
        assert!(second.get());
    }

    async fn render(notice: Option<Notice>) -> String {
        ServerRenderer::<MessageBox>::with_props(move || MessageProps { notice })
            .hydratable(false)
            .render()
            .await
    }

    #[tokio::test]
    async fn hidden_without_notice() {
        let out = render(None).await;
        assert!(out.contains(r#"class="hidden""#));
        assert!(out.ends_with("></div>"));
    }

    #[tokio::test]
    async fn success_and_error_styles() {
        let ok = render(Some(Notice::success("Signed up a@x.com for Chess Club"))).await;
        assert!(ok.contains(r#"class="success""#));
        assert!(ok.contains(">Signed up a@x.com for Chess Club</div>"));
        let err = render(Some(Notice::error("An error occurred"))).await;
        assert!(err.contains(r#"class="error""#));
        assert!(err.contains("An error occurred"));
    }
}
