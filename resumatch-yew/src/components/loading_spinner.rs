use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoadingSpinnerProps {
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(LoadingSpinner)]
pub fn loading_spinner(props: &LoadingSpinnerProps) -> Html {
    html! {
        <div class={classes!("resumatch-loading", props.class.clone())}>
            <div class="resumatch-spinner"></div>
            <span class="resumatch-loading__title">{"Analyzing Resumes..."}</span>
            <p class="resumatch-loading__hint">{"This may take a few moments"}</p>
        </div>
    }
}
