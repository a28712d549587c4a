use leptos::*;

use crate::app::use_store;
use crate::application::cosmetics::Toast;

#[component]
pub fn ToastStack() -> impl IntoView {
    let store = use_store();

    view! {
        <div class="toast-stack" aria-live="polite">
            <For
                each=move || store.toasts.with(|q| q.toasts().to_vec())
                key=|toast| toast.id
                children=|toast: Toast| view! { <div class="toast animate-slide-down">{toast.message}</div> }
            />
        </div>
    }
}
