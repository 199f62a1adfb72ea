use yew::prelude::*;
use yew_hooks::prelude::*;

/// Page scroll past which the header switches to its solid style.
const SCROLLED_THRESHOLD_PX: f64 = 50.0;

#[function_component(Header)]
pub fn header() -> Html {
    let (_, scroll_y) = use_window_scroll();
    let is_scrolled = scroll_y > SCROLLED_THRESHOLD_PX;

    html! {
        <header class={classes!("top-header", is_scrolled.then(|| "scrolled"))}>
            <div class="header-content">
                <div class="header-brand">
                    <div class="brand-mark">
                        <div class="brand-mark-inner"></div>
                    </div>
                    <span class="brand-name">
                        {"현대해상 "}<span class="brand-accent">{"Direct"}</span>
                    </span>
                </div>
                <div class="header-divider"></div>
                <span class="header-project">{"다이렉트 보험 플랫폼 고도화 구축"}</span>
            </div>
            <style>
                {r#"
                    .top-header {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 50;
                        padding: 1.5rem 0;
                        background: transparent;
                        transition: all 0.3s ease;
                    }
                    .top-header.scrolled {
                        padding: 1rem 0;
                        background: rgba(255, 255, 255, 0.9);
                        backdrop-filter: blur(12px);
                        box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                    }
                    .header-content {
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                        display: flex;
                        align-items: center;
                        gap: 1rem;
                    }
                    .header-brand {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                    }
                    .brand-mark {
                        width: 2rem;
                        height: 2rem;
                        border-radius: 9999px;
                        background: #004a99;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }
                    .brand-mark-inner {
                        width: 1rem;
                        height: 1rem;
                        background: #fff;
                        border-radius: 2px;
                        transform: rotate(45deg);
                    }
                    .brand-name {
                        font-weight: 700;
                        font-size: 1.25rem;
                        letter-spacing: -0.025em;
                        color: #004a99;
                    }
                    .brand-accent {
                        color: #f97316;
                    }
                    .header-divider {
                        width: 1px;
                        height: 1rem;
                        background: #d1d5db;
                    }
                    .header-project {
                        color: #4b5563;
                        font-size: 0.875rem;
                        font-weight: 500;
                    }
                    @media (max-width: 640px) {
                        .header-divider,
                        .header-project {
                            display: none;
                        }
                    }
                "#}
            </style>
        </header>
    }
}
