use dioxus::prelude::*;

use crate::dialog::DialogRequest;
use crate::hooks::use_confirm;

/// Button that asks for confirmation before running `on_confirm`
#[component]
pub fn ConfirmButton(
    label: String,
    request: DialogRequest,
    class: Option<String>,
    on_confirm: EventHandler<()>,
) -> Element {
    let confirm = use_confirm();
    let class = class.unwrap_or_else(|| {
        "px-4 py-2 rounded-lg border border-border hover:bg-accent transition".to_string()
    });

    rsx! {
        button {
            r#type: "button",
            class: "{class}",
            onclick: move |_| {
                let confirm = confirm.clone();
                let request = request.clone();
                spawn(async move {
                    if confirm.ask(request).await {
                        on_confirm.call(());
                    }
                });
            },
            "{label}"
        }
    }
}
