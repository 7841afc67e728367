use contracts::domain::chat::ChatResponse;
use leptos::prelude::*;

use super::api;
use crate::shared::api::ApiClient;
use crate::shared::components::ErrorBanner;

const CHANNELS: &[(&str, &str)] = &[("whatsapp", "واتساب"), ("web", "الويب")];

#[derive(Debug, Clone, PartialEq)]
enum Sender {
    User,
    Bot,
}

#[derive(Debug, Clone, PartialEq)]
struct ChatMessage {
    sender: Sender,
    content: String,
    intent: Option<String>,
    unrecognized: bool,
    needs_handoff: bool,
    db_context_used: bool,
}

impl ChatMessage {
    fn user(content: String) -> Self {
        Self {
            sender: Sender::User,
            content,
            intent: None,
            unrecognized: false,
            needs_handoff: false,
            db_context_used: false,
        }
    }

    fn bot(response: ChatResponse) -> Self {
        Self {
            sender: Sender::Bot,
            content: response.reply,
            intent: response.intent,
            unrecognized: response.unrecognized,
            needs_handoff: response.needs_handoff,
            db_context_used: response.db_context_used,
        }
    }
}

/// Manual chat console against the live bot. Unauthenticated by design: the
/// point is to see what a patient would see.
#[component]
pub fn TestChatPage() -> impl IntoView {
    let api = StoredValue::new(use_context::<ApiClient>().expect("ApiClient not provided"));
    // Fresh user id per console session so test runs do not share bot state.
    let user_id = StoredValue::new(format!("admin-test-{}", uuid::Uuid::new_v4()));

    let (messages, set_messages) = signal::<Vec<ChatMessage>>(Vec::new());
    let (input, set_input) = signal(String::new());
    let (channel, set_channel) = signal("whatsapp".to_string());
    let (sending, set_sending) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    let send = move |_| {
        let text = input.get().trim().to_string();
        if text.is_empty() || sending.get() {
            return;
        }
        set_input.set(String::new());
        set_error.set(None);
        set_messages.update(|m| m.push(ChatMessage::user(text.clone())));
        set_sending.set(true);

        let selected_channel = channel.get();
        wasm_bindgen_futures::spawn_local(async move {
            match api::send_chat(&api.get_value(), &text, &user_id.get_value(), &selected_channel)
                .await
            {
                Ok(response) => set_messages.update(|m| m.push(ChatMessage::bot(response))),
                Err(e) => set_error.set(Some(e.message)),
            }
            set_sending.set(false);
        });
    };

    let clear = move |_| {
        set_messages.set(Vec::new());
        set_error.set(None);
    };

    view! {
        <div class="page">
            <div class="page__header">
                <div>
                    <h1 class="page__title">"💬 اختبار المحادثة"</h1>
                    <p class="page__subtitle">"تحدث مع البوت مباشرة كما يراه المريض"</p>
                </div>
                <div class="page__actions">
                    <select
                        prop:value=move || channel.get()
                        on:change=move |ev| set_channel.set(event_target_value(&ev))
                    >
                        {CHANNELS.iter().map(|(value, label)| view! {
                            <option value=*value>{*label}</option>
                        }).collect_view()}
                    </select>
                    <button class="button button--secondary" on:click=clear>"مسح المحادثة"</button>
                </div>
            </div>

            <ErrorBanner error=error />

            <div class="chat">
                <div class="chat__messages">
                    {move || messages.get().into_iter().map(|msg| {
                        let is_user = msg.sender == Sender::User;
                        view! {
                            <div class="chat__message" class:chat__message--user=is_user>
                                <div class="chat__bubble">{msg.content.clone()}</div>
                                <Show when=move || !is_user>
                                    <div class="chat__meta">
                                        {msg.intent.clone().map(|i| view! {
                                            <span class="tag">"النية: " {i}</span>
                                        })}
                                        <Show when=move || msg.db_context_used>
                                            <span class="tag">"📚 قاعدة المعرفة"</span>
                                        </Show>
                                        <Show when=move || msg.needs_handoff>
                                            <span class="tag tag--warning">"تحويل لموظف"</span>
                                        </Show>
                                        <Show when=move || msg.unrecognized>
                                            <span class="tag tag--warning">"غير مفهوم"</span>
                                        </Show>
                                    </div>
                                </Show>
                            </div>
                        }
                    }).collect_view()}

                    <Show when=move || sending.get()>
                        <div class="chat__message">
                            <div class="chat__bubble chat__bubble--pending">"..."</div>
                        </div>
                    </Show>
                </div>

                <div class="chat__composer">
                    <input
                        type="text"
                        placeholder="اكتب رسالتك..."
                        prop:value=move || input.get()
                        on:input=move |ev| set_input.set(event_target_value(&ev))
                        on:keydown=move |ev| {
                            if ev.key() == "Enter" {
                                send(());
                            }
                        }
                    />
                    <button
                        class="button button--primary"
                        disabled=move || sending.get()
                        on:click=move |_| send(())
                    >
                        "إرسال"
                    </button>
                </div>
            </div>
        </div>
    }
}
