use dioxus::prelude::*;

use crate::components::ConfirmButton;
use crate::dialog::DialogRequest;

#[derive(Clone, PartialEq)]
struct Member {
    id: u32,
    username: &'static str,
}

#[derive(Clone, PartialEq)]
struct Transaction {
    id: u32,
    description: &'static str,
    amount: &'static str,
}

const PROJECT_ID: u32 = 1;
const PROJECT_NAME: &str = "Alpha";

const MEMBERS: &[Member] = &[
    Member { id: 2, username: "alice" },
    Member { id: 3, username: "bob" },
];

const TRANSACTIONS: &[Transaction] = &[
    Transaction { id: 11, description: "Groceries", amount: "-42.10" },
    Transaction { id: 12, description: "Invoice #1041", amount: "+1,200.00" },
];

/// Project settings page whose destructive forms are guarded declaratively
///
/// None of these forms have Rust submit handlers; the `data-confirm` markers
/// are picked up by the form binder after mount.
#[component]
pub fn ProjectSettings() -> Element {
    let mut status = use_signal(|| None::<String>);

    rsx! {
        div {
            class: "max-w-2xl mx-auto p-6 space-y-8",

            h1 {
                class: "text-2xl font-bold",
                "Project {PROJECT_NAME}"
            }

            if let Some(message) = status() {
                p {
                    class: "text-sm text-muted-foreground",
                    "{message}"
                }
            }

            // Transactions
            section {
                h2 { class: "text-lg font-semibold mb-3", "Transactions" }
                ul {
                    class: "divide-y divide-border",
                    for tx in TRANSACTIONS.iter() {
                        li {
                            key: "{tx.id}",
                            class: "flex items-center justify-between py-2",
                            span { "{tx.description}" }
                            span { class: "font-mono", "{tx.amount}" }
                            form {
                                method: "post",
                                action: "/transactions/{tx.id}/delete/",
                                "data-confirm": "delete-transaction",
                                "data-confirm-message": "{tx.description}",
                                button {
                                    r#type: "submit",
                                    class: "text-destructive hover:underline",
                                    "Delete"
                                }
                            }
                        }
                    }
                }
            }

            // Members
            section {
                h2 { class: "text-lg font-semibold mb-3", "Members" }
                ul {
                    class: "divide-y divide-border",
                    for member in MEMBERS.iter() {
                        li {
                            key: "{member.id}",
                            class: "flex items-center justify-between py-2",
                            span { "{member.username}" }
                            form {
                                method: "post",
                                action: "/projects/{PROJECT_ID}/members/{member.id}/remove/",
                                "data-confirm": "remove-member",
                                "data-confirm-message": "{member.username}",
                                button {
                                    r#type: "submit",
                                    class: "hover:underline",
                                    "Remove"
                                }
                            }
                        }
                    }
                }
            }

            // Danger zone
            section {
                class: "border border-destructive/50 rounded-xl p-4 space-y-3",
                h2 { class: "text-lg font-semibold", "Danger zone" }

                div {
                    class: "flex gap-3 flex-wrap",

                    form {
                        method: "post",
                        action: "/projects/{PROJECT_ID}/archive/",
                        "data-confirm": "custom",
                        "data-confirm-title": "Archive Project?",
                        "data-confirm-icon": "📦",
                        "data-confirm-message": "Archived projects become read-only.",
                        button {
                            r#type: "submit",
                            class: "px-4 py-2 rounded-lg border border-border hover:bg-accent transition",
                            "Archive"
                        }
                    }

                    form {
                        method: "post",
                        action: "/projects/{PROJECT_ID}/delete/",
                        "data-confirm": "delete-project",
                        "data-confirm-message": "{PROJECT_NAME}",
                        button {
                            r#type: "submit",
                            class: "px-4 py-2 bg-destructive text-destructive-foreground rounded-lg hover:bg-destructive/90 transition",
                            "Delete project"
                        }
                    }

                    ConfirmButton {
                        label: "Reset filters".to_string(),
                        request: DialogRequest::new()
                            .icon("🔄")
                            .title("Reset filters?")
                            .message("Saved transaction filters for this project will be cleared.")
                            .confirm_text("Reset"),
                        on_confirm: move |_| status.set(Some("Filters reset".to_string())),
                    }
                }
            }
        }
    }
}
