use yew::prelude::*;

/// Pill label above the hero headline.
#[function_component(Text)]
pub fn text() -> Html {
    html! {
        <>
            <span class="badge-dot"></span>
            <span class="badge-text">{"AI code reviews for every pull request"}</span>
        </>
    }
}
