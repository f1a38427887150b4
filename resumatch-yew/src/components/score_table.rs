use resumatch_core::{ScoreEntry, ScoreRecord};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ScoreTableProps {
    pub entries: Vec<ScoreEntry>,
}

fn badge_classes(record: &ScoreRecord) -> Classes {
    classes!(
        "resumatch-badge",
        format!("resumatch-badge--{}", record.band().css_modifier())
    )
}

fn scored_row(record: &ScoreRecord) -> Html {
    html! {
        <tr class="resumatch-results__row">
            <td class="resumatch-results__candidate">{&record.file_name}</td>
            <td>
                <div class="resumatch-meter">
                    <div
                        class="resumatch-meter__fill"
                        style={format!("width: {}%", record.score)}
                    ></div>
                </div>
                <span class="resumatch-results__score">{format!("{}%", record.score)}</span>
            </td>
            <td>
                <div class="resumatch-results__skills">
                    {for record.skills.iter().map(|skill| html! {
                        <span class="resumatch-chip">{skill}</span>
                    })}
                </div>
            </td>
            <td>
                <div class="resumatch-results__primary">{&record.experience}</div>
                <div class="resumatch-results__secondary">{&record.education}</div>
            </td>
            <td>
                <div class="resumatch-results__primary">{&record.last_position}</div>
                <div class="resumatch-results__secondary">{&record.location}</div>
            </td>
            <td>
                <span class={badge_classes(record)}>{record.band().label()}</span>
            </td>
        </tr>
    }
}

fn unprocessed_row(file_name: &str, error: &str) -> Html {
    html! {
        <tr class="resumatch-results__row resumatch-results__row--error">
            <td class="resumatch-results__candidate">{file_name}</td>
            <td colspan="4" class="resumatch-results__error">{error}</td>
            <td>
                <span class="resumatch-badge resumatch-badge--error">{"Not Scored"}</span>
            </td>
        </tr>
    }
}

#[function_component(ScoreTable)]
pub fn score_table(props: &ScoreTableProps) -> Html {
    html! {
        <div class="resumatch-results">
            <h2 class="resumatch-results__title">{"Screening Results"}</h2>
            <div class="resumatch-results__scroll">
                <table class="resumatch-results__table">
                    <thead>
                        <tr>
                            <th>{"Candidate"}</th>
                            <th>{"Match Score"}</th>
                            <th>{"Key Skills"}</th>
                            <th>{"Experience & Education"}</th>
                            <th>{"Position"}</th>
                            <th>{"Rating"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {for props.entries.iter().map(|entry| match entry {
                            ScoreEntry::Scored(record) => scored_row(record),
                            ScoreEntry::Unprocessed { file_name, error } => {
                                unprocessed_row(file_name, error)
                            }
                        })}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
