use yew::prelude::*;

#[function_component(Arrow)]
pub fn arrow() -> Html {
    html! {
        <svg width="28" height="28" viewBox="0 0 28 28" fill="none" xmlns="http://www.w3.org/2000/svg" aria-hidden="true">
            <circle cx="14" cy="14" r="14" fill="#0A2A2A" />
            <path d="M9 14H19M19 14L14.5 9.5M19 14L14.5 18.5" stroke="#FFFFFF" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" />
        </svg>
    }
}

#[function_component(Star)]
pub fn star() -> Html {
    html! {
        <svg width="28" height="28" viewBox="0 0 28 28" fill="none" xmlns="http://www.w3.org/2000/svg" aria-hidden="true">
            <path d="M14 2L16.9 10.6L26 11.2L18.9 16.9L21.4 25.8L14 20.7L6.6 25.8L9.1 16.9L2 11.2L11.1 10.6L14 2Z" fill="url(#star_fill)" />
            <defs>
                <linearGradient id="star_fill" x1="2" y1="2" x2="26" y2="26" gradientUnits="userSpaceOnUse">
                    <stop stop-color="#0BB6C0" />
                    <stop offset="1" stop-color="#006F91" />
                </linearGradient>
            </defs>
        </svg>
    }
}

#[function_component(Rocket)]
pub fn rocket() -> Html {
    html! {
        <svg class="headline-icon" width="64" height="64" viewBox="0 0 64 64" fill="none" xmlns="http://www.w3.org/2000/svg" aria-hidden="true">
            <rect x="1" y="1" width="62" height="62" rx="18" fill="#062626" stroke="#0BB6C0" stroke-opacity="0.4" stroke-width="2" />
            <path d="M40.5 15C35 16.2 29.8 20.4 26.4 26.2L21 27.4L17 33L24 33.6L30.4 40L31 47L36.6 43L37.8 37.6C43.6 34.2 47.8 29 49 23.5L49.5 14.5L40.5 15Z" fill="#0BB6C0" />
            <circle cx="39" cy="25" r="3.5" fill="#062626" />
            <path d="M23.5 40.5C20.5 41 18.5 43.5 17.5 46.5C20.5 45.5 23 43.5 23.5 40.5Z" fill="#58B4B4" />
        </svg>
    }
}

#[function_component(People)]
pub fn people() -> Html {
    html! {
        <svg class="headline-icon" width="64" height="64" viewBox="0 0 64 64" fill="none" xmlns="http://www.w3.org/2000/svg" aria-hidden="true">
            <rect x="1" y="1" width="62" height="62" rx="18" fill="#062626" stroke="#0BB6C0" stroke-opacity="0.4" stroke-width="2" />
            <circle cx="24" cy="25" r="6" fill="#0BB6C0" />
            <circle cx="41" cy="27" r="5" fill="#58B4B4" />
            <path d="M12 46C12 38.8 17.4 34 24 34C30.6 34 36 38.8 36 46H12Z" fill="#0BB6C0" />
            <path d="M33 46C33 40.6 36.6 36.5 41 36.5C45.4 36.5 51 40.6 51 46H33Z" fill="#58B4B4" />
        </svg>
    }
}

#[function_component(Github)]
pub fn github() -> Html {
    html! {
        <svg viewBox="0 0 56 56" fill="none" xmlns="http://www.w3.org/2000/svg" aria-label="GitHub">
            <rect width="56" height="56" rx="16" fill="#0F1F1F" />
            <path d="M28 14C20.3 14 14 20.3 14 28C14 34.2 18 39.4 23.6 41.3C24.3 41.4 24.5 41 24.5 40.7V38.3C20.6 39.1 19.8 36.6 19.8 36.6C19.2 35 18.2 34.5 18.2 34.5C16.9 33.6 18.3 33.7 18.3 33.7C19.7 33.8 20.5 35.1 20.5 35.1C21.7 37.3 23.8 36.6 24.6 36.3C24.7 35.4 25.1 34.8 25.5 34.4C22.4 34.1 19.1 32.9 19.1 27.5C19.1 26 19.7 24.7 20.6 23.7C20.4 23.3 19.9 21.9 20.8 20C20.8 20 22 19.6 24.6 21.4C25.7 21.1 26.9 20.9 28 20.9C29.2 20.9 30.4 21.1 31.5 21.4C34.1 19.6 35.3 20 35.3 20C36.2 21.9 35.6 23.3 35.5 23.7C36.4 24.7 36.9 26 36.9 27.5C36.9 32.9 33.6 34.1 30.5 34.4C31 34.9 31.5 35.7 31.5 37V40.7C31.5 41 31.7 41.4 32.4 41.3C38 39.4 42 34.2 42 28C42 20.3 35.7 14 28 14Z" fill="#FFFFFF" />
        </svg>
    }
}

#[function_component(LinkedIn)]
pub fn linked_in() -> Html {
    html! {
        <svg viewBox="0 0 56 56" fill="none" xmlns="http://www.w3.org/2000/svg" aria-label="LinkedIn">
            <rect width="56" height="56" rx="16" fill="#0F1F1F" />
            <rect x="16" y="23" width="5" height="17" fill="#FFFFFF" />
            <circle cx="18.5" cy="17.5" r="3" fill="#FFFFFF" />
            <path d="M25 23H29.8V25.4C30.5 24.1 32.2 22.7 34.9 22.7C40 22.7 41 26 41 30.4V40H36V31.5C36 29.5 36 27 33.2 27C30.4 27 30 29.1 30 31.4V40H25V23Z" fill="#FFFFFF" />
        </svg>
    }
}

#[function_component(X)]
pub fn x() -> Html {
    html! {
        <svg viewBox="0 0 56 56" fill="none" xmlns="http://www.w3.org/2000/svg" aria-label="X">
            <rect width="56" height="56" rx="16" fill="#0F1F1F" />
            <path d="M17 16H24.5L30.3 24.2L37.4 16H40.6L31.8 26.3L41 40H33.5L27.3 31.2L19.7 40H16.5L25.8 29.1L17 16ZM21.6 18.4L34.7 37.6H36.4L23.3 18.4H21.6Z" fill="#FFFFFF" />
        </svg>
    }
}
