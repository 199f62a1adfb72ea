use log::{debug, info};
use yew::prelude::*;

use crate::components::device::{CarouselControls, DeviceViewport, DEVICE_CSS};
use crate::content::Item;
use crate::scrolly::subscription::{EventSubscription, Throttle};
use crate::scrolly::viewport::{container_metrics, ViewportRegistry};
use crate::scrolly::{
    ActiveIndexMapper, Carousel, CarouselSet, LayoutMode, ITEM_HEIGHT_VH, SCROLL_THROTTLE_MS,
};

#[derive(Properties, PartialEq)]
pub struct InfoSectionProps {
    pub id: &'static str,
    pub items: Vec<Item>,
}

/// One report section: compact linear list under the breakpoint, sticky
/// scrollytelling above it.
#[function_component(InfoSection)]
pub fn info_section(props: &InfoSectionProps) -> Html {
    let mode = use_state(|| LayoutMode::current().unwrap_or(LayoutMode::Wide));

    {
        let mode = mode.clone();
        let id = props.id;
        let item_count = props.items.len();
        use_effect_with_deps(
            move |_| {
                let mut last = None;
                let mut check = move || {
                    let Some(current) = LayoutMode::current() else {
                        return;
                    };
                    if last != Some(current) {
                        info!("section {id} ({item_count} items): {current:?} layout");
                        last = Some(current);
                        mode.set(current);
                    }
                };
                check();
                let subscription = EventSubscription::on_window("resize", check);
                move || drop(subscription)
            },
            (),
        );
    }

    html! {
        <div class="info-section" id={props.id}>
            <SectionBody mode={*mode} items={props.items.clone()} />
            <style>{DEVICE_CSS}</style>
            <style>{SECTION_CSS}</style>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SectionBodyProps {
    pub mode: LayoutMode,
    pub items: Vec<Item>,
}

/// Owns the section's carousels so they outlive layout switches; only the
/// layout below it is remounted when `mode` changes.
#[function_component(SectionBody)]
pub fn section_body(props: &SectionBodyProps) -> Html {
    let carousels = {
        let items = props.items.clone();
        use_state(move || CarouselSet::for_items(&items))
    };

    let on_previous = {
        let carousels = carousels.clone();
        Callback::from(move |item: usize| {
            let mut next = (*carousels).clone();
            next.previous(item);
            carousels.set(next);
        })
    };
    let on_next = {
        let carousels = carousels.clone();
        Callback::from(move |item: usize| {
            let mut next = (*carousels).clone();
            next.next(item);
            carousels.set(next);
        })
    };

    if props.mode.is_wide() {
        html! {
            <WideSection
                items={props.items.clone()}
                carousels={(*carousels).clone()}
                {on_previous}
                {on_next}
            />
        }
    } else {
        html! {
            <div class="compact-list">
                { for props.items.iter().enumerate().map(|(index, item)| {
                    let carousel = carousels
                        .get(index)
                        .copied()
                        .unwrap_or_else(|| Carousel::for_item(item));
                    html! {
                        <CompactItem
                            key={index}
                            item={item.clone()}
                            {index}
                            {carousel}
                            on_previous={on_previous.reform(move |_: ()| index)}
                            on_next={on_next.reform(move |_: ()| index)}
                        />
                    }
                }) }
            </div>
        }
    }
}

#[derive(Properties, PartialEq)]
struct WideSectionProps {
    items: Vec<Item>,
    carousels: CarouselSet,
    on_previous: Callback<usize>,
    on_next: Callback<usize>,
}

#[function_component(WideSection)]
fn wide_section(props: &WideSectionProps) -> Html {
    let item_count = props.items.len();
    let container = use_node_ref();
    let active = use_state(|| 0usize);
    let mapper = use_mut_ref(|| ActiveIndexMapper::new(item_count));
    let registry = use_mut_ref(ViewportRegistry::default);

    {
        let container = container.clone();
        let active = active.clone();
        let mapper = mapper.clone();
        let registry = registry.clone();
        use_effect_with_deps(
            move |&item_count| {
                *mapper.borrow_mut() = ActiveIndexMapper::new(item_count);
                let update = move || {
                    let Some(metrics) = container_metrics(&container) else {
                        return;
                    };
                    let changed = mapper.borrow_mut().observe(metrics);
                    if let Some(previous) = changed {
                        let current = mapper.borrow().active();
                        debug!("active item {previous} -> {current}");
                        registry.borrow().reset(previous);
                        active.set(current);
                    }
                };
                update();

                let throttle = Throttle::new(SCROLL_THROTTLE_MS);
                let subscription = {
                    let throttle = throttle.clone();
                    EventSubscription::on_window("scroll", move || throttle.schedule(update.clone()))
                };
                move || {
                    throttle.cancel();
                    drop(subscription);
                }
            },
            item_count,
        );
    }

    let active_index = (*active).min(item_count.saturating_sub(1));
    let active_carousel = props
        .carousels
        .get(active_index)
        .copied()
        .unwrap_or_else(|| Carousel::new(1));

    // a new screenshot starts from the top of the frame
    let on_previous = {
        let on_previous = props.on_previous.clone();
        let registry = registry.clone();
        Callback::from(move |_: ()| {
            on_previous.emit(active_index);
            registry.borrow().reset(active_index);
        })
    };
    let on_next = {
        let on_next = props.on_next.clone();
        let registry = registry.clone();
        Callback::from(move |_: ()| {
            on_next.emit(active_index);
            registry.borrow().reset(active_index);
        })
    };

    let height = format!("height: {}vh;", item_count * ITEM_HEIGHT_VH);

    html! {
        <div ref={container} class="scrolly-container" style={height}>
            <div class="scrolly-sticky">
                <div class="scrolly-text">
                    <div class="scrolly-text-stack">
                        { for props.items.iter().enumerate().map(|(idx, item)| html! {
                            <div class={classes!("scrolly-copy", (idx == active_index).then(|| "active"))}>
                                <h2 class="item-title">{item.title}</h2>
                                <div class="item-rule"></div>
                                <p class="item-description">
                                    {item.description}
                                    {
                                        if let Some(sub) = item.sub_description {
                                            html! { <span class="item-sub-block">{sub}</span> }
                                        } else {
                                            html! {}
                                        }
                                    }
                                </p>
                            </div>
                        }) }
                    </div>
                </div>
                <div class="scrolly-device">
                    <div class="device-shell">
                        <div class="device-notch"></div>
                        { for props.items.iter().enumerate().map(|(idx, item)| {
                            let frame = registry.borrow_mut().handle(idx);
                            html! {
                                <DeviceViewport
                                    key={idx}
                                    {frame}
                                    images={item.images.clone()}
                                    current={props.carousels.index_of(idx)}
                                    item_index={idx}
                                    active={idx == active_index}
                                />
                            }
                        }) }
                    </div>
                    <CarouselControls carousel={active_carousel} {on_previous} {on_next} />
                    <p class="drag-hint">{"마우스로 화면을 상하 드래그하여 상세 내용을 확인하세요"}</p>
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct CompactItemProps {
    item: Item,
    index: usize,
    carousel: Carousel,
    on_previous: Callback<()>,
    on_next: Callback<()>,
}

/// Linear-layout item with its own viewport; its carousel is one entry of
/// the section's set.
#[function_component(CompactItem)]
fn compact_item(props: &CompactItemProps) -> Html {
    let frame = use_node_ref();

    let item = &props.item;
    html! {
        <div class="compact-item">
            <div class="compact-copy">
                <h2 class="item-title">{item.title}</h2>
                <div class="item-rule"></div>
                <p class="item-description">{item.description}</p>
                {
                    if let Some(sub) = item.sub_description {
                        html! { <p class="item-sub">{sub}</p> }
                    } else {
                        html! {}
                    }
                }
            </div>
            <div class="compact-device">
                <div class="device-shell compact">
                    <div class="device-notch"></div>
                    <DeviceViewport
                        {frame}
                        images={item.images.clone()}
                        current={props.carousel.index()}
                        item_index={props.index}
                    />
                </div>
                <CarouselControls
                    carousel={props.carousel}
                    on_previous={props.on_previous.clone()}
                    on_next={props.on_next.clone()}
                />
            </div>
        </div>
    }
}

const SECTION_CSS: &str = r#"
    .info-section {
        width: 100%;
    }
    .scrolly-container {
        position: relative;
        width: 100%;
    }
    .scrolly-sticky {
        position: sticky;
        top: 0;
        height: 100vh;
        width: 100%;
        max-width: 80rem;
        margin: 0 auto;
        padding: 0 1.5rem;
        display: flex;
        flex-direction: row;
        align-items: center;
        overflow: hidden;
        box-sizing: border-box;
    }
    .scrolly-text {
        flex: 1;
        width: 60%;
        height: 100%;
        display: flex;
        align-items: center;
    }
    .scrolly-text-stack {
        position: relative;
        width: 100%;
    }
    .scrolly-copy {
        position: absolute;
        top: 0;
        width: 85%;
        opacity: 0;
        visibility: hidden;
        transform: translateY(2.5rem);
        transition: all 1s ease-in-out;
    }
    .scrolly-copy.active {
        position: relative;
        opacity: 1;
        visibility: visible;
        transform: translateY(0);
    }
    .scrolly-device {
        flex: 1;
        width: 40%;
        display: flex;
        flex-direction: column;
        align-items: center;
        justify-content: center;
        padding: 2.5rem 0;
    }
    .drag-hint {
        margin-top: 1rem;
        font-size: 11px;
        font-weight: 500;
        color: #9ca3af;
    }
    .item-title {
        font-size: 3.75rem;
        font-weight: 700;
        line-height: 1.25;
        color: #111827;
        margin: 0 0 2rem 0;
        white-space: pre-line;
    }
    .item-rule {
        width: 3rem;
        height: 2px;
        background: #004a99;
        margin-bottom: 2rem;
    }
    .item-description {
        font-size: 1.25rem;
        font-weight: 300;
        line-height: 1.625;
        color: #6b7280;
    }
    .item-sub-block {
        display: block;
        margin-top: 1.5rem;
        padding-left: 1rem;
        border-left: 2px solid #f3f4f6;
        font-size: 1.125rem;
        color: #9ca3af;
    }
    .compact-list {
        padding: 0 1.5rem 5rem 1.5rem;
    }
    .compact-item {
        padding: 4rem 0;
        border-bottom: 1px solid #f3f4f6;
    }
    .compact-item:last-child {
        border-bottom: none;
    }
    .compact-copy {
        margin-bottom: 2.5rem;
        text-align: left;
    }
    .compact-copy .item-title {
        font-size: 1.875rem;
        margin-bottom: 1.5rem;
    }
    .compact-copy .item-rule {
        width: 2.5rem;
        margin-bottom: 1.5rem;
    }
    .compact-copy .item-description {
        font-size: 1.125rem;
        margin-bottom: 1rem;
    }
    .item-sub {
        font-size: 0.875rem;
        font-style: italic;
        color: #9ca3af;
        border-left: 2px solid #f3f4f6;
        padding-left: 1rem;
    }
    .compact-device {
        display: flex;
        flex-direction: column;
        align-items: center;
    }
    @media (max-width: 1024px) {
        .scrolly-copy .item-title {
            font-size: 2.25rem;
        }
    }
"#;

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::HtmlElement;

    const URL: &str = "https://example.com/screen.png";

    fn items() -> Vec<Item> {
        vec![
            Item { title: "first", description: "", sub_description: None, images: vec![URL; 3] },
            Item { title: "second", description: "", sub_description: None, images: vec![URL; 2] },
        ]
    }

    #[function_component(ModeToggle)]
    fn mode_toggle() -> Html {
        let mode = use_state(|| LayoutMode::Wide);
        let onclick = {
            let mode = mode.clone();
            Callback::from(move |_: MouseEvent| {
                mode.set(if mode.is_wide() { LayoutMode::Compact } else { LayoutMode::Wide });
            })
        };
        html! {
            <>
                <button id="toggle-mode" {onclick}></button>
                <SectionBody mode={*mode} items={items()} />
            </>
        }
    }

    fn element(selector: &str) -> HtmlElement {
        document()
            .query_selector(selector)
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            .unwrap_or_else(|| panic!("no element for {selector}"))
    }

    fn document() -> web_sys::Document {
        web_sys::window().and_then(|w| w.document()).expect("document")
    }

    fn first_position() -> Option<String> {
        element(".carousel-position").text_content()
    }

    async fn settle() {
        TimeoutFuture::new(20).await;
    }

    #[wasm_bindgen_test]
    async fn carousel_position_survives_layout_round_trip() {
        let root = document().create_element("div").expect("root");
        document().body().expect("body").append_child(&root).expect("attach");
        let app = yew::Renderer::<ModeToggle>::with_root(root).render();
        settle().await;

        assert_eq!(first_position().as_deref(), Some("1 / 3"));
        element(".carousel-button[aria-label='다음 화면']").click();
        settle().await;
        assert_eq!(first_position().as_deref(), Some("2 / 3"));

        element("#toggle-mode").click();
        settle().await;
        assert!(document().query_selector(".compact-list").ok().flatten().is_some());
        assert_eq!(first_position().as_deref(), Some("2 / 3"));

        element("#toggle-mode").click();
        settle().await;
        assert!(document().query_selector(".scrolly-container").ok().flatten().is_some());
        assert_eq!(first_position().as_deref(), Some("2 / 3"));

        app.destroy();
    }
}
