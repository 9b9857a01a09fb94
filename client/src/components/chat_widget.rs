//! Chat widget: transcript, draft input, and send/clear controls.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each send issues one `GET {endpoint}/prompt/{input}` through
//! [`HttpTransport`] and folds the outcome into the widget's [`ChatState`].
//! Requests are tracked in an [`InFlight`] registry that is cancelled when
//! the widget is torn down.

use leptos::prelude::*;

use crate::net::api::{HttpTransport, PromptTransport};
use crate::state::chat::ChatState;
use crate::util::in_flight::InFlight;
use crate::util::keys::is_submit_key;

/// Chat widget bound to a prompt server at `endpoint`.
#[component]
pub fn ChatWidget(#[prop(into)] endpoint: String) -> impl IntoView {
    let chat = RwSignal::new(ChatState::new(endpoint));
    let in_flight = StoredValue::new(InFlight::default());
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    let teardown = in_flight.get_value();
    on_cleanup(move || teardown.cancel_all());

    Effect::new(move || {
        let _ = chat.with(|c| c.messages.len());

        #[cfg(feature = "csr")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let do_send = move || {
        let Some(submission) = chat.with_untracked(ChatState::prepare_submission) else {
            return;
        };

        let request = in_flight.with_value(|tasks| {
            tasks.track(async move {
                let outcome = HttpTransport.fetch_reply(&submission.target).await;
                (submission, outcome)
            })
        });

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            if let Some((submission, outcome)) = request.await {
                chat.try_update(|c| c.apply_outcome(submission, outcome));
            }
        });
        #[cfg(not(feature = "csr"))]
        drop(request);
    };

    let on_send = move |_| do_send();
    let on_clear = move |_| chat.update(ChatState::clear);

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if is_submit_key(&ev.key(), ev.shift_key()) {
            ev.prevent_default();
            do_send();
        }
    };

    view! {
        <div class="chat-widget">
            <div class="chat-widget__header">
                <h1 class="chat-widget__title">"Chatbot- Powered by AI"</h1>
            </div>

            <div class="chat-widget__messages" node_ref=messages_ref>
                {move || {
                    let messages = chat.with(|c| c.messages.clone());
                    if messages.is_empty() {
                        return view! {
                            <div class="chat-widget__empty">"No messages yet"</div>
                        }
                            .into_any();
                    }

                    messages
                        .into_iter()
                        .map(|msg| {
                            let class = format!(
                                "chat-widget__message chat-widget__message--{}",
                                msg.role.as_str(),
                            );
                            view! { <div class=class>{msg.text}</div> }
                        })
                        .collect::<Vec<_>>()
                        .into_any()
                }}
            </div>

            <div class="chat-widget__input-row">
                <input
                    class="chat-widget__input"
                    type="text"
                    placeholder="Type your message..."
                    prop:value=move || chat.with(|c| c.draft.clone())
                    on:input=move |ev| chat.update(|c| c.set_draft(event_target_value(&ev)))
                    on:keydown=on_keydown
                />
                <button class="btn chat-widget__clear" on:click=on_clear>
                    "Clear"
                </button>
                <button class="btn btn--primary chat-widget__send" on:click=on_send>
                    "Send"
                </button>
            </div>
        </div>
    }
}
