//! Ready-made requests for common destructive actions

use super::request::DialogRequest;

const TRASH_ICON: &str = "🗑️";
const MEMBER_ICON: &str = "👤";

/// Delete a named item of some type ("transaction", "file", ...)
pub fn delete_item(item_name: &str, item_type: &str) -> DialogRequest {
    DialogRequest::new()
        .icon(TRASH_ICON)
        .title(format!("Delete {}?", item_type))
        .message(format!(
            "Are you sure you want to delete \"{}\"? This action cannot be undone.",
            item_name
        ))
        .confirm_text("Delete")
        .cancel_text("Cancel")
}

pub fn delete_project(project_name: &str) -> DialogRequest {
    DialogRequest::new()
        .icon(TRASH_ICON)
        .title("Delete Project?")
        .message(format!(
            "Are you sure you want to delete \"{}\"? All transactions will be permanently lost!",
            project_name
        ))
        .confirm_text("Delete Project")
        .cancel_text("Cancel")
}

pub fn remove_member(username: &str) -> DialogRequest {
    DialogRequest::new()
        .icon(MEMBER_ICON)
        .title("Remove Member?")
        .message(format!(
            "Are you sure you want to remove \"{}\" from this project?",
            username
        ))
        .confirm_text("Remove")
        .cancel_text("Cancel")
}
