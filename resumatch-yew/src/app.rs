use crate::pages::ScreeningPage;
use crate::providers::ScreeningProvider;
use chrono::Datelike;
use yew::prelude::*;

fn footer_text(year: i32) -> String {
    format!("© {} ResuMatch. All rights reserved.", year)
}

#[function_component(App)]
pub fn app() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <div class="resumatch-app">
            <header class="resumatch-app__header">
                <h1 class="resumatch-app__title">{"Resume Screening Tool"}</h1>
            </header>

            <main class="resumatch-app__main">
                <section class="resumatch-app__intro">
                    <h2>{"Welcome to ResuMatch"}</h2>
                    <p>
                        {"Upload a job description and candidate resumes to find the best matches. "}
                        {"Each resume is scored against the job description and ranked by fit."}
                    </p>
                </section>

                <ScreeningProvider>
                    <ScreeningPage />
                </ScreeningProvider>
            </main>

            <footer class="resumatch-app__footer">
                <p>{footer_text(year)}</p>
            </footer>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_footer_text() {
        assert_eq!(footer_text(2025), "© 2025 ResuMatch. All rights reserved.");
    }
}
