#[cfg(test)]
#[path = "notification_test.rs"]
mod notification_test;

use yew::prelude::*;
use gloo_timers::callback::Timeout;

use crate::config;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum NoticeKind {
    #[default]
    Success,
    Error,
}

impl NoticeKind {
    fn class(self) -> &'static str {
        match self {
            NoticeKind::Success => "success",
            NoticeKind::Error => "error",
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct Notice {
    pub text: String,
    pub kind: NoticeKind,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self { text: text.into(), kind: NoticeKind::Success }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { text: text.into(), kind: NoticeKind::Error }
    }
}

const NOTIFICATION_STYLES: &str = r#"
.notification {
    position: fixed;
    top: 90px;
    right: 20px;
    padding: 1rem 1.5rem;
    border-radius: 8px;
    color: #fff;
    opacity: 0;
    pointer-events: none;
    transform: translateX(120%);
    transition: opacity 0.3s ease, transform 0.3s ease;
    z-index: 1000;
}
.notification.show { opacity: 1; transform: translateX(0); }
.notification.success { background: #2e7d32; }
.notification.error { background: #c62828; }
"#;

#[derive(Properties, PartialEq)]
pub struct NotificationProps {
    /// Latest notice; each new value is shown for a few seconds.
    pub notice: Option<Notice>,
    /// Bumped by the parent for every notice so repeats still show.
    pub serial: u32,
}

#[function_component(Notification)]
pub fn notification(props: &NotificationProps) -> Html {
    let visible = use_state(|| false);

    {
        let visible = visible.clone();
        use_effect_with_deps(move |(serial, has_notice)| {
            let mut timeout = None;
            if *has_notice && *serial > 0 {
                visible.set(true);
                let visible = visible.clone();
                timeout = Some(Timeout::new(config::NOTIFICATION_MS, move || {
                    visible.set(false);
                }));
            }
            move || drop(timeout) // Cleanup
        }, (props.serial, props.notice.is_some()));
    }

    let (text, kind) = props
        .notice
        .as_ref()
        .map(|n| (n.text.clone(), n.kind))
        .unwrap_or_default();

    html! {
        <>
            <style>{NOTIFICATION_STYLES}</style>
            <div id="notification" class={classes!("notification", (*visible).then(|| "show"), kind.class())}>
                {text}
            </div>
        </>
    }
}
