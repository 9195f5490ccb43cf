//! Toast Stack Component

use leptos::prelude::*;

use crate::notifications::{use_notifier, Severity, ToastPhase};

#[component]
pub fn ToastStack() -> impl IntoView {
    let queue = use_notifier().queue();

    view! {
        <div class="toast-stack">
            <For
                each=move || queue.get().toasts().to_vec()
                key=|toast| (toast.id, toast.phase == ToastPhase::Leaving)
                let:toast
            >
                {
                    let severity = match toast.severity {
                        Severity::Success => "toast toast-success",
                        Severity::Error => "toast toast-error",
                        Severity::Info => "toast toast-info",
                    };
                    let phase = match toast.phase {
                        ToastPhase::Showing => "fade-in",
                        ToastPhase::Leaving => "fade-out",
                    };
                    view! { <div class=format!("{} {}", severity, phase)>{toast.message}</div> }
                }
            </For>
        </div>
    }
}
