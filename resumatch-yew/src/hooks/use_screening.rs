use crate::transport::BrowserFile;
use resumatch_core::{FormCommand, SubmissionController};
use std::rc::Rc;
use yew::prelude::*;

/// Screening form state accessible via hook
#[derive(Clone)]
pub struct ScreeningContext {
    /// Snapshot of the controller for rendering
    pub form: SubmissionController<BrowserFile>,

    /// Send commands to the controller
    pub dispatch: Rc<dyn Fn(FormCommand<BrowserFile>)>,
}

impl ScreeningContext {
    /// Callback that dispatches the command built from its input
    pub fn command<T, M>(&self, make: M) -> Callback<T>
    where
        T: 'static,
        M: Fn(T) -> FormCommand<BrowserFile> + 'static,
    {
        let dispatch = self.dispatch.clone();
        Callback::from(move |value: T| dispatch(make(value)))
    }
}

impl PartialEq for ScreeningContext {
    fn eq(&self, other: &Self) -> bool {
        self.form == other.form
    }
}

/// Hook to access the screening form
///
/// # Example
///
/// ```rust,ignore
/// use resumatch_core::FormCommand;
/// use resumatch_yew::use_screening;
///
/// let screening = use_screening();
///
/// if screening.form.can_submit() {
///     (screening.dispatch)(FormCommand::Submit);
/// }
/// ```
#[hook]
pub fn use_screening() -> ScreeningContext {
    use_context::<ScreeningContext>().expect("use_screening must be used within a ScreeningProvider")
}
