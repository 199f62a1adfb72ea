use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod content;
mod scrolly;
mod components {
    pub mod device;
    pub mod header;
    pub mod info_section;
    pub mod summary_panel;
}
mod pages {
    pub mod report;
}
mod services {
    pub mod summary;
}

#[cfg(all(test, target_arch = "wasm32"))]
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

use components::header::Header;
use pages::report::Report;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Report,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Report => {
            info!("Rendering Report page");
            html! { <Report /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! {
                <div class="not-found">
                    <p>{"페이지를 찾을 수 없습니다."}</p>
                    <Link<Route> to={Route::Report}>{"보고서로 돌아가기"}</Link<Route>>
                    <style>
                        {r#"
                            .not-found {
                                padding: 12rem 1.5rem;
                                text-align: center;
                                color: #6b7280;
                            }
                            .not-found a {
                                color: #004a99;
                            }
                        "#}
                    </style>
                </div>
            }
        }
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Header />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
