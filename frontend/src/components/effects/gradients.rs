use yew::prelude::*;
use crate::motion::Motion;

const TEAL: &str = "#068E8E";

// Sparkle strokes scattered over the star glows in the "How it works" section.
const SPARKLES: &[&str] = &[
    "M212.757 133.976V133.516",
    "M199.415 168.481V168.021",
    "M227.939 168.021H227.479",
    "M245.421 146.398L245.881 145.938",
    "M253.702 137.656L252.782 137.196",
    "M172.272 143.637L170.891 142.717",
    "M278.085 152.379L279.465 151.918",
    "M121.592 143.547H120.016",
    "M175.209 156.163H173.632",
    "M238.287 108.854L236.71 107.277",
    "M197.286 121.47L195.709 119.893",
    "M209.902 143.547H214.633",
    "M353.405 130.932H351.828",
    "M323.442 153.009L320.289 151.432",
    "M315.558 121.47C315.037 121.47 314.517 121.47 313.468 121.209C312.42 120.949 310.858 120.429 309.25 119.893",
    "M295.057 108.854L291.903 107.277",
    "M280.865 126.201L279.288 124.624",
];

fn blur_filter(id: &str, x: &str, y: &str, width: &str, height: &str, deviation: &str) -> Html {
    html! {
        <filter id={id.to_string()} x={x.to_string()} y={y.to_string()} width={width.to_string()} height={height.to_string()} filterUnits="userSpaceOnUse" color-interpolation-filters="sRGB">
            <feFlood flood-opacity="0" result="BackgroundImageFix" />
            <feBlend mode="normal" in="SourceGraphic" in2="BackgroundImageFix" result="shape" />
            <feGaussianBlur stdDeviation={deviation.to_string()} result="blur" />
        </filter>
    }
}

fn beam(suffix: &str) -> Html {
    let wedge = format!("beam_wedge_{}", suffix);
    let halo = format!("beam_halo_{}", suffix);
    html! {
        <>
            <g filter={format!("url(#{})", wedge)}>
                <path d="M772.111 399.463L212.323 28.2637L517.676 -222.159L772.111 399.463Z" fill={TEAL} fill-opacity="1" />
            </g>
            <g filter={format!("url(#{})", halo)}>
                <ellipse cx="400" cy="10" rx="100" ry="520" transform="rotate(-41.6828 461.191 8.43067)" fill={TEAL} fill-opacity="0.3" />
            </g>
            <defs>
                { blur_filter(&wedge, "0.555832", "-433.927", "983.323", "1045.16", "70") }
                { blur_filter(&halo, "19.1428", "-451.239", "884.096", "919.339", "30") }
            </defs>
        </>
    }
}

#[derive(Properties, PartialEq)]
pub struct BackgroundGradientsProps {
    pub revealed: bool,
}

/// Two mirrored teal light beams sliding in from the top corners of the hero.
#[function_component(BackgroundGradients)]
pub fn background_gradients(props: &BackgroundGradientsProps) -> Html {
    let left = Motion::fade(1.2, 0.0).offset(-200.0, -150.0);
    let right = Motion::fade(1.2, 0.2).offset(200.0, -150.0);

    html! {
        <div class="background-gradients">
            <svg class="beam beam-left" width="984" height="612" viewBox="0 0 984 612" fill="none" xmlns="http://www.w3.org/2000/svg" style={left.style(props.revealed)}>
                { beam("left") }
            </svg>
            <svg class="beam beam-right" width="984" height="612" viewBox="0 0 984 612" fill="none" xmlns="http://www.w3.org/2000/svg" style={right.style(props.revealed)}>
                <g transform="scale(-1,1) translate(-984,0)">
                    { beam("right") }
                </g>
            </svg>
        </div>
    }
}

#[function_component(Eclipse)]
pub fn eclipse() -> Html {
    html! {
        <div class="eclipse">
            <svg width="1120" height="551" viewBox="0 0 1120 551" fill="none" xmlns="http://www.w3.org/2000/svg">
                <g filter="url(#eclipse_blur)">
                    <ellipse cx="559.662" cy="275.468" rx="395.299" ry="110.664" fill={TEAL} />
                </g>
                <defs>
                    { blur_filter("eclipse_blur", "0.058136", "0.49881", "1119.21", "549.939", "82.1526") }
                </defs>
            </svg>
        </div>
    }
}

fn sparkles() -> Html {
    html! {
        { for SPARKLES.iter().map(|d| html! {
            <path d={*d} stroke="#58B4B4" stroke-width="2" />
        }) }
    }
}

#[function_component(TopStarEffect)]
pub fn top_star_effect() -> Html {
    html! {
        <div>
            <svg width="521" height="335" viewBox="0 0 521 335" fill="none" xmlns="http://www.w3.org/2000/svg">
                <g filter="url(#star_glow_top)">
                    <ellipse cx="260.472" cy="167.5" rx="160.472" ry="67.5" fill="#093E4D" />
                </g>
                { sparkles() }
                <defs>
                    { blur_filter("star_glow_top", "0", "0", "520.943", "335", "50") }
                </defs>
            </svg>
        </div>
    }
}

#[function_component(BottomStarEffect)]
pub fn bottom_star_effect() -> Html {
    html! {
        <div>
            <svg width="521" height="335" viewBox="0 0 521 335" fill="none" xmlns="http://www.w3.org/2000/svg">
                <g filter="url(#star_glow_bottom)">
                    <ellipse cx="160.472" cy="67.5" rx="160.472" ry="67.5" transform="matrix(1 0 0 -1 100 235)" fill="#093E4D" />
                </g>
                <g transform="translate(22.984 53.722)">
                    { sparkles() }
                </g>
                <defs>
                    { blur_filter("star_glow_bottom", "0", "0", "520.943", "335", "50") }
                </defs>
            </svg>
        </div>
    }
}
