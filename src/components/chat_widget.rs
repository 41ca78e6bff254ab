use yew::prelude::*;
use yew_hooks::prelude::*;
use gloo_timers::callback::Timeout;
use log::debug;
use web_sys::{Element, HtmlInputElement};

use crate::chat::{ChatMessage, ChatSession};
use crate::config;
use crate::session::{SessionAction, SessionContext};
use crate::storage::SharedStore;

#[function_component(ChatWidget)]
pub fn chat_widget() -> Html {
    let store = use_context::<SharedStore>();
    let session = use_context::<SessionContext>();
    let chat = use_memo(|store| store.clone().map(ChatSession::new), store);
    let messages = use_list(Vec::<ChatMessage>::new());
    let input_ref = use_node_ref();
    let list_ref = use_node_ref();

    // Replay the stored conversation once on mount.
    {
        let chat = chat.clone();
        let messages = messages.clone();
        use_effect_with_deps(move |_| {
            if let Some(chat) = &*chat {
                messages.set(chat.history());
            }
            || ()
        }, ());
    }

    {
        let list_ref = list_ref.clone();
        use_effect_with_deps(move |_| {
            if let Some(list) = list_ref.cast::<Element>() {
                list.set_scroll_top(list.scroll_height());
            }
            || ()
        }, messages.current().len());
    }

    let send = {
        let chat = chat.clone();
        let messages = messages.clone();
        let input_ref = input_ref.clone();
        Callback::from(move |_: ()| {
            let (Some(chat), Some(input)) = ((*chat).clone(), input_ref.cast::<HtmlInputElement>()) else {
                return;
            };
            let Some(sent) = chat.send(&input.value()) else {
                return;
            };
            input.set_value("");
            messages.push(sent.clone());

            let messages = messages.clone();
            Timeout::new(config::CHAT_REPLY_DELAY_MS, move || {
                if let Some(reply) = chat.reply(sent.text()) {
                    debug!("Bot replied: {}", reply.text());
                    messages.push(reply);
                }
            })
            .forget();
        })
    };

    let on_send_click = {
        let send = send.clone();
        Callback::from(move |_: MouseEvent| send.emit(()))
    };

    let on_keypress = Callback::from(move |e: KeyboardEvent| {
        if e.key() == "Enter" {
            send.emit(());
        }
    });

    let open = session.as_ref().map_or(false, |s| s.chat_open());
    let toggle = {
        let session = session.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(session) = &session {
                session.dispatch(SessionAction::ToggleChat);
            }
        })
    };

    let rendered: Html = messages
        .current()
        .iter()
        .map(|m| html! { <div class={m.role().css_class()}>{m.text()}</div> })
        .collect();

    html! {
        <div class="chat-widget">
            <style>
                {r#"
                    .chat-button { position: fixed; bottom: 20px; right: 20px; width: 56px; height: 56px; border-radius: 50%; border: none; background: #e91e63; color: #fff; font-size: 1.5rem; cursor: pointer; z-index: 950; }
                    .chat-popup { position: fixed; bottom: 90px; right: 20px; width: 320px; height: 420px; flex-direction: column; background: #fff; border-radius: 12px; box-shadow: 0 8px 32px rgba(0, 0, 0, 0.3); z-index: 950; }
                    .chat-messages { flex: 1; overflow-y: auto; padding: 1rem; display: flex; flex-direction: column; gap: 0.5rem; }
                    .user-message { align-self: flex-end; background: #e91e63; color: #fff; padding: 0.5rem 0.8rem; border-radius: 12px; }
                    .bot-message { align-self: flex-start; background: #f1f1f1; padding: 0.5rem 0.8rem; border-radius: 12px; }
                "#}
            </style>
            <div id="chatPopup" class="chat-popup" style={if open { "display: flex;" } else { "display: none;" }}>
                <div class="chat-header">{"Ask us anything"}</div>
                <div id="chatMessages" class="chat-messages" ref={list_ref}>
                    {rendered}
                </div>
                <div class="chat-input">
                    <input
                        id="chatInput"
                        type="text"
                        placeholder="Type your message..."
                        ref={input_ref}
                        onkeypress={on_keypress}
                    />
                    <button onclick={on_send_click}>{"Send"}</button>
                </div>
            </div>
            <button id="chatButton" class="chat-button" onclick={toggle}>
                { if open { "×" } else { "💬" } }
            </button>
        </div>
    }
}
