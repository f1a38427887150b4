use crate::components::FileUpload;
use crate::transport::BrowserFile;
use resumatch_core::{InputMethod, PickerOptions};
use web_sys::HtmlTextAreaElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct JobDescriptionInputProps {
    pub method: InputMethod,
    /// Current pasted text (empty in file mode)
    pub text: AttrValue,
    pub on_method_change: Callback<InputMethod>,
    pub on_text_change: Callback<String>,
    /// First picked file, `None` when the picker was cancelled
    pub on_file_change: Callback<Option<BrowserFile>>,
}

#[function_component(JobDescriptionInput)]
pub fn job_description_input(props: &JobDescriptionInputProps) -> Html {
    let tab = |method: InputMethod| {
        let on_method_change = props.on_method_change.clone();
        html! {
            <button
                type="button"
                class={classes!(
                    "resumatch-jd__tab",
                    (props.method == method).then_some("active")
                )}
                onclick={move |_: MouseEvent| on_method_change.emit(method)}
            >
                {method.label()}
            </button>
        }
    };

    let on_input = {
        let on_text_change = props.on_text_change.clone();
        Callback::from(move |e: InputEvent| {
            let textarea: HtmlTextAreaElement = e.target_unchecked_into();
            on_text_change.emit(textarea.value());
        })
    };

    let on_files = {
        let on_file_change = props.on_file_change.clone();
        Callback::from(move |files: Vec<BrowserFile>| {
            on_file_change.emit(files.into_iter().next());
        })
    };

    html! {
        <div class="resumatch-jd">
            <label class="resumatch-jd__heading">{"Job Description Input Method"}</label>
            <div class="resumatch-jd__tabs">
                {tab(InputMethod::Text)}
                {tab(InputMethod::File)}
            </div>

            {match props.method {
                InputMethod::Text => html! {
                    <div class="resumatch-jd__text">
                        <label class="resumatch-jd__heading">{"Job Description"}</label>
                        <textarea
                            class="resumatch-jd__textarea"
                            value={props.text.clone()}
                            oninput={on_input}
                            placeholder="Paste the job description here..."
                            required=true
                        />
                    </div>
                },
                InputMethod::File => html! {
                    <FileUpload
                        label="Upload Job Description"
                        input_id="job-description-upload"
                        options={PickerOptions::job_description()}
                        on_change={on_files}
                    />
                },
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_description_input_props() {
        let props = yew::props!(JobDescriptionInputProps {
            method: InputMethod::File,
            text: "",
            on_method_change: Callback::from(|_: InputMethod| {}),
            on_text_change: Callback::from(|_: String| {}),
            on_file_change: Callback::from(|_: Option<BrowserFile>| {}),
        });

        assert_eq!(props.method, InputMethod::File);
        assert!(props.text.is_empty());
    }
}
