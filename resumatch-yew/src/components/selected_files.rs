use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SelectedFilesProps {
    pub names: Vec<String>,
}

#[function_component(SelectedFiles)]
pub fn selected_files(props: &SelectedFilesProps) -> Html {
    if props.names.is_empty() {
        return html! {};
    }

    html! {
        <div class="resumatch-selected">
            <h3 class="resumatch-selected__title">{"Selected Files:"}</h3>
            <ul class="resumatch-selected__list">
                {for props.names.iter().map(|name| html! {
                    <li class="resumatch-selected__item">
                        <span class="resumatch-selected__icon">{"📄"}</span>
                        <span class="resumatch-selected__name">{name}</span>
                    </li>
                })}
            </ul>
        </div>
    }
}
