use yew::prelude::*;
use crate::components::effects::design::LineEffect;
use crate::components::effects::gradients::{BottomStarEffect, TopStarEffect};
use crate::content::{HOW_IT_WORKS_EYE, HOW_IT_WORKS_ID, HOW_IT_WORKS_STEPS};

/// "How it works". Static: no entrance animation.
#[function_component(About)]
pub fn about() -> Html {
    let steps = HOW_IT_WORKS_STEPS.iter().map(|step| {
        html! {
            <div class="step-card">
                if let Some(image) = step.image {
                    <div class="step-visual">
                        <img src={image.src} alt={image.alt} width={image.width.to_string()} height={image.height.to_string()} loading="lazy" />
                    </div>
                }
                <div class="step-copy">
                    <h3 class="text-fade-gray">{step.title}</h3>
                    <p>{step.body}</p>
                </div>
            </div>
        }
    });

    html! {
        <div class="about" id={HOW_IT_WORKS_ID}>
            <div class="about-line-effect">
                <LineEffect />
            </div>
            <div class="about-inner">
                <div class="about-heading">
                    <h2 class="section-title"><span class="text-fade-gray">{"How It Works: From "}</span></h2>
                    <div class="about-heading-row">
                        <span class="section-title">{"Pull Request To"}</span>
                        <img class="about-eye" src={HOW_IT_WORKS_EYE.src} alt={HOW_IT_WORKS_EYE.alt} width={HOW_IT_WORKS_EYE.width.to_string()} height={HOW_IT_WORKS_EYE.height.to_string()} />
                        <span class="section-title muted">{"Merge"}</span>
                    </div>
                </div>
                <div class="steps">
                    <div class="star-effect star-effect-top"><TopStarEffect /></div>
                    <div class="star-effect star-effect-bottom"><BottomStarEffect /></div>
                    <div class="steps-backdrop"></div>
                    <div class="steps-grid">
                        { for steps }
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .about {
                    position: relative;
                    width: 100%;
                    min-height: 100vh;
                    padding: 4rem;
                    background: rgba(0, 0, 0, 0.05);
                    box-sizing: border-box;
                }

                .about-line-effect {
                    position: absolute;
                    top: 25%;
                    left: 31%;
                    z-index: 20;
                    width: 800px;
                    transform: translateX(-50%);
                }

                .about-inner {
                    position: relative;
                    z-index: 10;
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 4rem 0;
                }

                .about-heading {
                    text-align: center;
                    margin-bottom: 7rem;
                }

                .about-heading h2 {
                    margin-bottom: 2.5rem;
                }

                .about-heading-row {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 1rem;
                }

                .about-heading-row .section-title {
                    color: #ffffff;
                    line-height: 1.625;
                }

                .about-heading-row .section-title.muted {
                    color: #6b7280;
                }

                .about-eye {
                    max-width: 60px;
                    height: auto;
                    padding: 0 0.5rem;
                }

                .text-fade-gray {
                    background: linear-gradient(to right, #ffffff 40%, #6b7280 70%);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }

                .steps {
                    position: relative;
                }

                .star-effect {
                    position: absolute;
                    z-index: 0;
                }

                .star-effect-top {
                    top: 0;
                    left: 50%;
                    transform: translate(-50%, -190px);
                }

                .star-effect-bottom {
                    bottom: 0;
                    right: 50%;
                    transform: translate(50%, 190px);
                }

                .steps-backdrop {
                    position: absolute;
                    inset: -1rem 0;
                    z-index: 1;
                    border-radius: 1.5rem;
                    background: rgba(0, 0, 0, 0.7);
                }

                .steps-grid {
                    position: relative;
                    z-index: 10;
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    column-gap: 7.5rem;
                    row-gap: 10rem;
                    max-width: 64rem;
                    margin: 0 auto;
                }

                .step-card {
                    display: flex;
                    flex-direction: column;
                    min-height: 450px;
                    max-height: 500px;
                    padding: 2rem;
                    border-radius: 1.5rem;
                    background: linear-gradient(to bottom, rgba(21, 135, 166, 0.4) 1%, rgba(8, 52, 64, 0.25) 10%);
                }

                .step-visual {
                    margin-bottom: 2.5rem;
                }

                .step-visual img {
                    width: 200px;
                    height: auto;
                    border-radius: 0.5rem;
                }

                .step-copy h3 {
                    font-size: 1.875rem;
                    font-weight: 500;
                    margin: 0 0 2rem;
                }

                .step-copy p {
                    color: #ffffff;
                    font-weight: 300;
                    font-size: 1.25rem;
                    line-height: 1.625;
                    margin: 0;
                }

                @media (max-width: 1024px) {
                    .about { padding: 1rem; }
                    .about-line-effect,
                    .star-effect { display: none; }
                    .about-heading { margin-bottom: 3rem; }
                    .steps-grid {
                        grid-template-columns: 1fr;
                        row-gap: 3rem;
                    }
                    .step-card {
                        min-height: 400px;
                        max-height: none;
                        padding: 1.5rem;
                    }
                    .step-copy h3 { font-size: 1.25rem; margin-bottom: 1rem; }
                    .step-copy p { font-size: 1rem; }
                }
                "#}
            </style>
        </div>
    }
}
