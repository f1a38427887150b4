use crate::components::{FileUpload, JobDescriptionInput, LoadingSpinner, ScoreTable, SelectedFiles};
use crate::hooks::use_screening;
use crate::transport::BrowserFile;
use resumatch_core::{FormCommand, PickerOptions};
use yew::prelude::*;

fn submit_label(is_submitting: bool) -> &'static str {
    if is_submitting {
        "Processing..."
    } else {
        "Screen Resumes"
    }
}

#[function_component(ScreeningPage)]
pub fn screening_page() -> Html {
    let screening = use_screening();
    let form = &screening.form;

    // ===== CALLBACKS =====

    let on_method_change = screening.command(FormCommand::SelectInputMethod);
    let on_text_change = screening.command(FormCommand::SetJobDescriptionText);
    let on_file_change = screening.command(FormCommand::SetJobDescriptionFile);
    let on_resumes_change = screening.command(FormCommand::SetResumes);

    let on_submit = {
        let dispatch = screening.dispatch.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            dispatch(FormCommand::<BrowserFile>::Submit);
        })
    };

    // ===== RENDER =====

    let text = form.job_description().text().unwrap_or_default().to_string();

    html! {
        <div class="resumatch-page">
            <form class="resumatch-form" onsubmit={on_submit}>
                <JobDescriptionInput
                    method={form.input_method()}
                    text={text}
                    {on_method_change}
                    {on_text_change}
                    {on_file_change}
                />

                <FileUpload
                    label="Upload Resumes"
                    input_id="resume-upload"
                    options={PickerOptions::resumes()}
                    on_change={on_resumes_change}
                />

                <SelectedFiles names={form.resumes().names()} />

                <button
                    type="submit"
                    class="resumatch-btn resumatch-btn--primary"
                    disabled={!form.can_submit()}
                >
                    {submit_label(form.is_submitting())}
                </button>
            </form>

            {if form.state().shows_progress() {
                html! { <LoadingSpinner /> }
            } else {
                html! {}
            }}

            {if !form.results().is_empty() {
                html! { <ScoreTable entries={form.results().to_vec()} /> }
            } else {
                html! {}
            }}
        </div>
    }
}
