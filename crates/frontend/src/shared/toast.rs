//! Transient notifications
//!
//! Toasts expire after `AppConfig::toast_timeout_ms` or when dismissed.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use uuid::Uuid;
use wasm_bindgen_futures::spawn_local;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    fn class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast--success",
            ToastKind::Error => "toast toast--error",
            ToastKind::Info => "toast toast--info",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub kind: ToastKind,
    pub text: String,
}

#[derive(Clone, Copy)]
pub struct ToastService {
    toasts: RwSignal<Vec<Toast>>,
    timeout_ms: u32,
}

impl ToastService {
    pub fn new(timeout_ms: u32) -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            timeout_ms,
        }
    }

    pub fn push(&self, kind: ToastKind, text: impl Into<String>) {
        let id = Uuid::new_v4();
        self.toasts.update(|t| {
            t.push(Toast {
                id,
                kind,
                text: text.into(),
            })
        });

        let svc = *self;
        spawn_local(async move {
            TimeoutFuture::new(svc.timeout_ms).await;
            svc.dismiss(id);
        });
    }

    pub fn success(&self, text: impl Into<String>) {
        self.push(ToastKind::Success, text);
    }

    pub fn error(&self, text: impl Into<String>) {
        self.push(ToastKind::Error, text);
    }

    pub fn info(&self, text: impl Into<String>) {
        self.push(ToastKind::Info, text);
    }

    pub fn dismiss(&self, id: Uuid) {
        let _ = self.toasts.try_update(|t| t.retain(|toast| toast.id != id));
    }
}

pub fn use_toast() -> ToastService {
    use_context::<ToastService>().expect("ToastService not found in context")
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let svc = use_toast();

    view! {
        <div class="toast-host" aria-live="polite">
            <For
                each=move || svc.toasts.get()
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast.kind.class() role="status">
                            <span class="toast__text">{toast.text}</span>
                            <button class="toast__close" on:click=move |_| svc.dismiss(id)>
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
