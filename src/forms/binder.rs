//! Confirm-then-submit flow for marked forms

use crate::dialog::{DialogController, DialogResult, DialogSurface};

use super::marker::FormMarker;

/// A form that can be guarded by a confirmation dialog
pub trait ConfirmableForm {
    fn marker(&self) -> FormMarker;

    /// Submit natively without going through interception again
    fn submit(&self) -> DialogResult<()>;
}

/// Ask for confirmation and submit the form only if the user confirms
///
/// Returns whether the form was submitted.
pub async fn confirm_and_submit<S, F>(
    controller: &DialogController<S>,
    form: &F,
) -> DialogResult<bool>
where
    S: DialogSurface + 'static,
    F: ConfirmableForm,
{
    let marker = form.marker();
    let kind = marker.kind();
    let confirmed = controller.confirm(&marker.to_request()).await?;

    if confirmed {
        log::info!("Submitting form after {} confirmation", kind.as_str());
        form.submit()?;
    } else {
        log::debug!("Form submission cancelled ({})", kind.as_str());
    }
    Ok(confirmed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialog::surface::testing::RecordingSurface;
    use crate::dialog::error::DialogError;
    use crate::dialog::request::DialogDefaults;
    use futures::FutureExt;
    use std::cell::Cell;

    struct MemoryForm {
        marker: FormMarker,
        submits: Cell<usize>,
    }

    impl MemoryForm {
        fn new(kind: &str, message: &str) -> Self {
            Self {
                marker: FormMarker {
                    kind: Some(kind.to_string()),
                    message: Some(message.to_string()),
                    ..Default::default()
                },
                submits: Cell::new(0),
            }
        }
    }

    impl ConfirmableForm for MemoryForm {
        fn marker(&self) -> FormMarker {
            self.marker.clone()
        }

        fn submit(&self) -> DialogResult<()> {
            self.submits.set(self.submits.get() + 1);
            Ok(())
        }
    }

    fn controller() -> (DialogController<RecordingSurface>, RecordingSurface) {
        let surface = RecordingSurface::new();
        let controller = DialogController::new(surface.clone(), DialogDefaults::default());
        (controller, surface)
    }

    #[test]
    fn test_delete_project_confirmed_submits() {
        let (controller, surface) = controller();
        let form = MemoryForm::new("delete-project", "Alpha");

        let mut flow = Box::pin(confirm_and_submit(&controller, &form));
        assert!(flow.as_mut().now_or_never().is_none());

        let content = surface.content().unwrap();
        assert_eq!(content.title, "Delete Project?");
        assert_eq!(content.icon, "🗑️");
        assert_eq!(content.confirm_text, "Delete Project");
        assert_eq!(content.cancel_text, "Cancel");
        assert_eq!(form.submits.get(), 0);

        surface.click_confirm();

        assert_eq!(flow.as_mut().now_or_never(), Some(Ok(true)));
        assert_eq!(form.submits.get(), 1);
    }

    #[test]
    fn test_cancelled_form_is_not_submitted() {
        let (controller, surface) = controller();
        let form = MemoryForm::new("remove-member", "alice");

        let mut flow = Box::pin(confirm_and_submit(&controller, &form));
        assert!(flow.as_mut().now_or_never().is_none());
        assert_eq!(surface.content().unwrap().title, "Remove Member?");

        surface.press("Escape");

        assert_eq!(flow.as_mut().now_or_never(), Some(Ok(false)));
        assert_eq!(form.submits.get(), 0);
    }

    #[test]
    fn test_second_form_while_open_is_rejected() {
        let (controller, surface) = controller();
        let first = MemoryForm::new("delete-transaction", "Groceries");
        let second = MemoryForm::new("delete-project", "Beta");

        let mut first_flow = Box::pin(confirm_and_submit(&controller, &first));
        assert!(first_flow.as_mut().now_or_never().is_none());

        let mut second_flow = Box::pin(confirm_and_submit(&controller, &second));
        assert_eq!(
            second_flow.as_mut().now_or_never(),
            Some(Err(DialogError::AlreadyOpen))
        );

        surface.click_backdrop();
        assert_eq!(first_flow.as_mut().now_or_never(), Some(Ok(false)));
        assert_eq!(first.submits.get(), 0);
        assert_eq!(second.submits.get(), 0);
    }
}
