//! Call-to-action button

use dioxus::prelude::*;

/// Outlined call-to-action button; `primary` switches to the filled style
#[component]
pub fn ActionButton(
    #[props(default)] primary: bool,
    #[props(default)] class: String,
    on_press: Option<EventHandler<()>>,
    children: Element,
) -> Element {
    let variant = if primary { "btn-primary" } else { "btn-secondary" };

    rsx! {
        button {
            class: "btn {variant} {class}",
            onclick: move |_| {
                if let Some(handler) = on_press {
                    handler.call(());
                }
            },
            span { class: "btn-content", {children} }
        }
    }
}

/// Handler for buttons that are shown but intentionally do nothing
/// (login, map link, mentor application).
pub fn decorative_action(name: &'static str) {
    tracing::debug!(action = name, "Decorative action pressed, no handler attached");
}
