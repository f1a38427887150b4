use crate::transport::{files_from_input, BrowserFile};
use resumatch_core::PickerOptions;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FileUploadProps {
    pub label: AttrValue,
    /// `id` of the hidden input, unique per page
    pub input_id: AttrValue,
    pub options: PickerOptions,
    /// Selected files; empty when the picker was cancelled
    pub on_change: Callback<Vec<BrowserFile>>,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(FileUpload)]
pub fn file_upload(props: &FileUploadProps) -> Html {
    let onchange = {
        let options = props.options.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit(options.project(files_from_input(&input)));
        })
    };

    html! {
        <div class={classes!("resumatch-upload", props.class.clone())}>
            <label class="resumatch-upload__label">{props.label.clone()}</label>
            <div class="resumatch-upload__dropzone">
                <div class="resumatch-upload__icon">{"📄"}</div>
                <div class="resumatch-upload__picker">
                    <label for={props.input_id.clone()} class="resumatch-upload__button">
                        <span>{"Upload files"}</span>
                        <input
                            id={props.input_id.clone()}
                            name={props.input_id.clone()}
                            type="file"
                            class="resumatch-sr-only"
                            accept={props.options.accept_attr()}
                            multiple={props.options.multiple}
                            {onchange}
                        />
                    </label>
                    <p class="resumatch-upload__drop-hint">{"or drag and drop"}</p>
                </div>
                <p class="resumatch-upload__formats">{props.options.formats_hint()}</p>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_upload_props() {
        let props = yew::props!(FileUploadProps {
            label: "Upload Resumes",
            input_id: "resume-upload",
            options: PickerOptions::resumes(),
            on_change: Callback::from(|_: Vec<BrowserFile>| {}),
        });

        assert!(props.options.multiple);
        assert_eq!(props.options.accept_attr(), ".pdf,.docx");
        assert_eq!(props.label.as_str(), "Upload Resumes");
    }
}
