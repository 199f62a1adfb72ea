use log::error;
use yew::prelude::*;

use crate::components::info_section::InfoSection;
use crate::components::summary_panel::SummaryPanel;
use crate::content::{self, report_context};

#[function_component(Report)]
pub fn report() -> Html {
    let sections = use_memo(
        |_| {
            let loaded = content::load_report();
            if let Err(err) = &loaded {
                error!("report content rejected: {}", err);
            }
            loaded
        },
        (),
    );

    let body = match &*sections {
        Ok(sections) => html! {
            <>
                <main id="uiux" class="report-main">
                    { for sections.iter().map(|section| html! {
                        <InfoSection key={section.id} id={section.id} items={section.items.clone()} />
                    }) }
                </main>
                <SummaryPanel context={report_context(sections)} />
            </>
        },
        Err(_) => html! {
            <main class="report-main">
                <p class="content-error">{"콘텐츠를 불러오지 못했습니다."}</p>
            </main>
        },
    };

    html! {
        <div class="report-page">
            <section id="hero" class="hero">
                <div class="hero-content">
                    <div class="hero-badge">{"Project Completion Report 2024"}</div>
                    <h1 class="hero-title">
                        {"현대해상 "}<span class="hero-accent">{"Direct"}</span><br />
                        {"디지털 혁신의 시작"}
                    </h1>
                    <p class="hero-subtitle">
                        {"사용자 중심의 가치와 최첨단 기술이 만나 더 나은 보험 서비스를 완성했습니다. \
                          단순한 웹사이트를 넘어 고객의 일상을 지키는 든든한 파트너로 거듭납니다."}
                    </p>
                </div>
            </section>

            {body}

            <footer class="report-footer">
                <p>{"© 2024 Hyundai Marine & Fire Insurance Direct. All rights reserved."}</p>
            </footer>
            <style>
                {r#"
                    .report-page {
                        min-height: 100vh;
                        background: #fff;
                    }
                    .hero {
                        padding: 12rem 0 8rem 0;
                        overflow: hidden;
                    }
                    .hero-content {
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                        text-align: center;
                    }
                    .hero-badge {
                        display: inline-block;
                        padding: 0.375rem 1rem;
                        margin-bottom: 1.5rem;
                        font-size: 0.75rem;
                        font-weight: 700;
                        letter-spacing: 0.1em;
                        text-transform: uppercase;
                        color: #004a99;
                        background: #eff6ff;
                        border-radius: 9999px;
                    }
                    .hero-title {
                        font-size: 4.5rem;
                        font-weight: 700;
                        line-height: 1.25;
                        color: #111827;
                        margin-bottom: 2rem;
                    }
                    .hero-accent {
                        color: #004a99;
                    }
                    .hero-subtitle {
                        max-width: 42rem;
                        margin: 0 auto;
                        font-size: 1.25rem;
                        font-weight: 300;
                        color: #6b7280;
                    }
                    .content-error {
                        padding: 4rem 1.5rem;
                        text-align: center;
                        color: #9ca3af;
                    }
                    .report-footer {
                        padding: 3rem 1.5rem;
                        border-top: 1px solid #f3f4f6;
                        text-align: center;
                        font-size: 0.75rem;
                        color: #9ca3af;
                    }
                    @media (max-width: 768px) {
                        .hero {
                            padding: 8rem 0 5rem 0;
                        }
                        .hero-title {
                            font-size: 2.25rem;
                        }
                        .hero-subtitle {
                            font-size: 1.125rem;
                        }
                    }
                "#}
            </style>
        </div>
    }
}
