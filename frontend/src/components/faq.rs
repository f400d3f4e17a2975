use yew::prelude::*;
use web_sys::MouseEvent;
use crate::content::{FAQ_ENTRIES, FAQ_ID};

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: &'static str,
    answer: &'static str,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let is_open = use_state(|| false);

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            is_open.set(!*is_open);
        })
    };

    html! {
        <div class={classes!("faq-item", if *is_open { "open" } else { "" })}>
            <button class="faq-question" onclick={toggle} aria-expanded={is_open.to_string()}>
                <span class="question-text">{props.question}</span>
                <span class="toggle-icon">{if *is_open { "−" } else { "+" }}</span>
            </button>
            <div class="faq-answer">
                <p>{props.answer}</p>
            </div>
        </div>
    }
}

#[function_component(Faq)]
pub fn faq() -> Html {
    html! {
        <section class="faq-section" id={FAQ_ID}>
            <h2 class="section-title text-fade-white">{"Frequently Asked Questions"}</h2>
            <div class="faq-list">
                { for FAQ_ENTRIES.iter().map(|entry| html! {
                    <FaqItem question={entry.question} answer={entry.answer} />
                }) }
            </div>
            <style>
                {r#"
                .faq-section {
                    max-width: 800px;
                    margin: 0 auto;
                    padding: 4rem 2rem;
                }

                .faq-section h2 {
                    text-align: center;
                    margin-bottom: 3rem;
                }

                .faq-item {
                    margin-bottom: 1rem;
                    border-radius: 12px;
                    border: 1px solid rgba(11, 182, 192, 0.15);
                    background: rgba(7, 61, 61, 0.2);
                    overflow: hidden;
                }

                .faq-question {
                    width: 100%;
                    padding: 1.5rem;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    background: none;
                    border: none;
                    color: #ffffff;
                    font-size: 1.1rem;
                    text-align: left;
                    cursor: pointer;
                    transition: background-color 0.3s ease;
                }

                .faq-question:hover {
                    background: rgba(11, 182, 192, 0.05);
                }

                .toggle-icon {
                    color: #0BB6C0;
                    font-size: 1.5rem;
                    margin-left: 1rem;
                }

                .faq-answer {
                    max-height: 0;
                    overflow: hidden;
                    padding: 0 1.5rem;
                    transition: max-height 0.3s ease, padding 0.3s ease;
                }

                .faq-item.open .faq-answer {
                    max-height: 400px;
                    padding: 0 1.5rem 1.5rem;
                }

                .faq-answer p {
                    color: #999999;
                    line-height: 1.6;
                    margin: 0;
                }
                "#}
            </style>
        </section>
    }
}
