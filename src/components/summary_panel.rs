use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::summary::get_project_summary;

#[derive(Properties, PartialEq)]
pub struct SummaryPanelProps {
    pub context: String,
}

/// On-demand AI summary of the report text.
#[function_component(SummaryPanel)]
pub fn summary_panel(props: &SummaryPanelProps) -> Html {
    let summary = use_state(|| None::<String>);
    let is_loading = use_state(|| false);

    let onclick = {
        let summary = summary.clone();
        let is_loading = is_loading.clone();
        let context = props.context.clone();
        Callback::from(move |_: MouseEvent| {
            if *is_loading {
                return;
            }
            is_loading.set(true);
            let summary = summary.clone();
            let is_loading = is_loading.clone();
            let context = context.clone();
            spawn_local(async move {
                let text = get_project_summary(&context).await;
                summary.set(Some(text));
                is_loading.set(false);
            });
        })
    };

    html! {
        <section class="summary-panel">
            <div class="summary-content">
                <h3>{"AI 3줄 요약"}</h3>
                <button class="summary-button" {onclick} disabled={*is_loading}>
                    { if *is_loading { "요약 생성 중..." } else { "요약 보기" } }
                </button>
                {
                    if let Some(text) = &*summary {
                        html! { <p class="summary-text">{text}</p> }
                    } else {
                        html! {}
                    }
                }
            </div>
            <style>
                {r#"
                    .summary-panel {
                        padding: 4rem 1.5rem;
                        background: #f9fafb;
                        border-top: 1px solid #f3f4f6;
                    }
                    .summary-content {
                        max-width: 42rem;
                        margin: 0 auto;
                        text-align: center;
                    }
                    .summary-content h3 {
                        font-size: 1.25rem;
                        font-weight: 700;
                        color: #111827;
                        margin-bottom: 1.5rem;
                    }
                    .summary-button {
                        padding: 0.75rem 1.75rem;
                        border: none;
                        border-radius: 9999px;
                        background: #004a99;
                        color: #fff;
                        font-weight: 600;
                        cursor: pointer;
                        transition: opacity 0.2s ease;
                    }
                    .summary-button:disabled {
                        opacity: 0.5;
                        cursor: wait;
                    }
                    .summary-text {
                        margin-top: 2rem;
                        text-align: left;
                        white-space: pre-line;
                        line-height: 1.75;
                        color: #4b5563;
                    }
                "#}
            </style>
        </section>
    }
}
