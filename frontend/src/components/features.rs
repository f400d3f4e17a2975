use yew::prelude::*;
use crate::components::effects::design::LineDesign;
use crate::components::icons::People;
use crate::content::{Card, ARCHITECTURE_CARD, FEATURES_ID, FEATURE_CARDS};
use crate::motion::{use_reveal, Motion, Reveal, SECTION_ROOT_MARGIN};

fn card_copy(card: &Card, title_class: &'static str) -> Html {
    html! {
        <div class="feature-copy">
            <h3 class={classes!("text-fade-white", title_class)}>{card.title}</h3>
            <p>{card.body}</p>
        </div>
    }
}

fn card_visual(card: &Card) -> Html {
    match card.image {
        Some(image) => html! {
            <img src={image.src} alt={image.alt} width={image.width.to_string()} height={image.height.to_string()} loading="lazy" />
        },
        None => html! { <LineDesign /> },
    }
}

#[function_component(Features)]
pub fn features() -> Html {
    let section = use_node_ref();
    let revealed = use_reveal(section.clone(), SECTION_ROOT_MARGIN);

    // Small cards cascade in 0.1s apart after the architecture card.
    let small_cards = FEATURE_CARDS.iter().enumerate().map(|(i, card)| {
        let wide = i == FEATURE_CARDS.len() - 1;
        html! {
            <Reveal
                class={classes!("feature-card-wrap", wide.then_some("wide"))}
                {revealed}
                motion={Motion::fade(0.6, 0.6 + 0.1 * i as f64).offset(0.0, 30.0)}
            >
                <div class={classes!("feature-card", wide.then_some("feature-card-row"))}>
                    <div class="feature-visual">{ card_visual(card) }</div>
                    { card_copy(card, "feature-title") }
                </div>
            </Reveal>
        }
    });

    html! {
        <div ref={section} class="features" id={FEATURES_ID}>
            <div class="features-inner">
                <Reveal class="features-heading" {revealed} motion={Motion::fade(0.8, 0.1).offset(0.0, 40.0)}>
                    <div class="features-heading-row">
                        <h2 class="section-title text-fade-white">{"Seamless AI"}</h2>
                        <h2 class="section-title text-teal">{"Collaboration"}</h2>
                    </div>
                    <div class="features-heading-row">
                        <span class="section-title text-fade-white">{"for"}</span>
                        <People />
                        <span class="section-title text-teal">{"Developers"}</span>
                    </div>
                </Reveal>
                <Reveal class="features-panel" {revealed} motion={Motion::fade(0.9, 0.3).offset(0.0, 60.0)}>
                    <div class="features-panel-bg">
                        <div class="corner-glow corner-glow-top" style={Motion::fade(1.0, 0.6).offset(-50.0, -50.0).style(revealed)}></div>
                        <div class="corner-glow corner-glow-bottom" style={Motion::fade(1.0, 0.8).offset(50.0, 50.0).style(revealed)}></div>
                    </div>
                    <div class="features-panel-border"></div>
                    <div class="features-grid">
                        <Reveal class="architecture-wrap" {revealed} motion={Motion::fade(0.7, 0.5).offset(-40.0, 0.0)}>
                            <div class="feature-card architecture-card">
                                <div class="architecture-visual">{ card_visual(&ARCHITECTURE_CARD) }</div>
                                { card_copy(&ARCHITECTURE_CARD, "architecture-title") }
                            </div>
                        </Reveal>
                        <div class="feature-cards">
                            { for small_cards }
                        </div>
                    </div>
                </Reveal>
            </div>
            <style>
                {r#"
                .features {
                    position: relative;
                    width: 100%;
                    min-height: 100vh;
                    overflow: hidden;
                }

                .features-inner {
                    position: relative;
                    z-index: 10;
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 2rem 1rem;
                }

                .features-heading {
                    text-align: center;
                    margin-bottom: 3rem;
                }

                .features-heading-row {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    align-items: center;
                    gap: 1rem;
                    margin-bottom: 1rem;
                }

                .section-title {
                    font-size: clamp(1.5rem, 5vw, 3.75rem);
                    font-weight: 400;
                    margin: 0;
                }

                .text-teal {
                    background: linear-gradient(to right, #006F91 15%, #0BB6C0 50%);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }

                .features-panel {
                    position: relative;
                }

                .features-panel-bg {
                    position: absolute;
                    inset: 0;
                    overflow: hidden;
                    border-radius: 1.5rem;
                    background: rgba(0, 0, 0, 0.9);
                    box-shadow: 0 25px 50px -12px rgba(20, 184, 166, 0.2);
                }

                .corner-glow {
                    position: absolute;
                    width: 12rem;
                    height: 12rem;
                    pointer-events: none;
                    z-index: 1;
                }

                .corner-glow-top {
                    top: 0;
                    left: 0;
                    background: radial-gradient(circle at top left, rgba(20, 184, 166, 0.3) 0%, rgba(20, 184, 166, 0.15) 35%, transparent 70%);
                }

                .corner-glow-bottom {
                    bottom: 0;
                    right: 0;
                    background: radial-gradient(circle at bottom right, rgba(20, 184, 166, 0.3) 0%, rgba(20, 184, 166, 0.15) 35%, transparent 70%);
                }

                .features-panel-border {
                    position: absolute;
                    inset: 2px;
                    border-radius: 1.5rem;
                    border: 1px solid rgba(45, 212, 191, 0.2);
                    background: linear-gradient(to bottom right, rgba(13, 148, 136, 0.1), transparent, rgba(13, 148, 136, 0.1));
                }

                .features-grid {
                    position: relative;
                    z-index: 10;
                    display: grid;
                    grid-template-columns: 2fr 5fr;
                    gap: 2rem;
                    max-width: 72rem;
                    margin: 0 auto;
                    padding: 3rem;
                }

                .feature-cards {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1.5rem;
                }

                .feature-card-wrap.wide {
                    grid-column: span 2;
                }

                .feature-card {
                    height: 100%;
                    min-height: 240px;
                    display: flex;
                    flex-direction: column;
                    justify-content: space-between;
                    padding: 1rem;
                    border-radius: 1.5rem;
                    border: 2px solid rgba(31, 41, 55, 0.3);
                    background: rgba(4, 47, 46, 0.2);
                }

                .feature-card-row {
                    flex-direction: row;
                    align-items: center;
                    gap: 2rem;
                }

                .architecture-card {
                    min-height: 500px;
                    padding: 1.5rem;
                }

                .architecture-visual {
                    flex: 1;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    margin-bottom: 1.5rem;
                }

                .feature-copy {
                    text-align: start;
                    margin-left: 1rem;
                }

                .feature-copy h3 {
                    font-weight: 500;
                    font-size: 1.25rem;
                    margin: 0 0 0.75rem;
                }

                .feature-copy p {
                    color: #ffffff;
                    font-weight: 300;
                    font-size: 0.875rem;
                    line-height: 1.625;
                    max-width: 90%;
                    margin: 0;
                }

                @media (max-width: 1024px) {
                    .features-grid {
                        grid-template-columns: 1fr;
                        padding: 1.5rem;
                    }
                    .architecture-card { min-height: 400px; }
                    .feature-card-row { flex-direction: column; }
                }

                @media (max-width: 640px) {
                    .feature-cards { grid-template-columns: 1fr; }
                    .feature-card-wrap.wide { grid-column: auto; }
                }
                "#}
            </style>
        </div>
    }
}
