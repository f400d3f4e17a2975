use yew::prelude::*;

fn shade(gradient_id: &str, flip: bool) -> Html {
    let transform = if flip { "scale(-1,1) translate(-520,0)" } else { "" };
    html! {
        <svg width="520" height="640" viewBox="0 0 520 640" fill="none" xmlns="http://www.w3.org/2000/svg" aria-hidden="true">
            <g transform={transform}>
                <path d="M0 80C160 60 320 140 420 320C320 500 160 580 0 560V80Z" fill={format!("url(#{})", gradient_id)} />
                <path d="M0 160C120 150 240 210 320 320C240 430 120 490 0 480V160Z" fill="#0BB6C0" fill-opacity="0.06" />
            </g>
            <defs>
                <radialGradient id={gradient_id.to_string()} cx="0" cy="0" r="1" gradientUnits="userSpaceOnUse" gradientTransform="translate(120 320) rotate(90) scale(300 360)">
                    <stop stop-color="#068E8E" stop-opacity="0.45" />
                    <stop offset="1" stop-color="#000000" stop-opacity="0" />
                </radialGradient>
            </defs>
        </svg>
    }
}

#[function_component(LeftShade)]
pub fn left_shade() -> Html {
    shade("shade_left", false)
}

#[function_component(RightShade)]
pub fn right_shade() -> Html {
    shade("shade_right", true)
}
