//! Toast Banner Component

use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn ToastBanner() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div id="toast" class=move || ctx.toast.with(|state| state.class())>
            {move || ctx.toast.with(|state| state.message().to_string())}
        </div>
    }
}
