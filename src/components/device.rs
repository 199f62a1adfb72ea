//! Phone-frame screenshot viewport with drag scrolling, and the carousel
//! controls shown under it.

use log::debug;
use web_sys::{MouseEvent, TouchEvent};
use yew::prelude::*;

use crate::scrolly::viewport::{frame_offsets, set_frame_scroll};
use crate::scrolly::{Carousel, DragInput, DragScroll};

#[derive(Properties, PartialEq)]
pub struct DeviceViewportProps {
    pub frame: NodeRef,
    pub images: Vec<&'static str>,
    pub current: usize,
    pub item_index: usize,
    #[prop_or(true)]
    pub active: bool,
}

#[function_component(DeviceViewport)]
pub fn device_viewport(props: &DeviceViewportProps) -> Html {
    let drag = use_mut_ref(DragScroll::default);
    let grabbing = use_state(|| false);

    let on_start = {
        let drag = drag.clone();
        let grabbing = grabbing.clone();
        let frame = props.frame.clone();
        Callback::from(move |input: DragInput| {
            let Some((frame_top, scroll_top)) = frame_offsets(&frame) else {
                return;
            };
            drag.borrow_mut().start(input, frame_top, scroll_top);
            grabbing.set(true);
        })
    };

    // true when the move was applied to the frame
    let on_move = {
        let drag = drag.clone();
        let frame = props.frame.clone();
        move |input: DragInput| -> bool {
            let Some((frame_top, _)) = frame_offsets(&frame) else {
                return false;
            };
            match drag.borrow().move_to(input, frame_top) {
                Some(scroll_top) => {
                    set_frame_scroll(&frame, scroll_top);
                    true
                }
                None => false,
            }
        }
    };

    let on_end = {
        let drag = drag.clone();
        let grabbing = grabbing.clone();
        Callback::from(move |_: ()| {
            // hover-outs without a gesture must not re-render
            if drag.borrow_mut().end() {
                debug!("drag gesture ended");
                grabbing.set(false);
            }
        })
    };

    let onmousedown = on_start.reform(|e: MouseEvent| DragInput::from_mouse(&e));
    let onmousemove = {
        let on_move = on_move.clone();
        Callback::from(move |e: MouseEvent| {
            if on_move(DragInput::from_mouse(&e)) {
                e.prevent_default();
            }
        })
    };
    let onmouseup = on_end.reform(|_: MouseEvent| ());
    let onmouseleave = on_end.reform(|_: MouseEvent| ());

    let ontouchstart = {
        let on_start = on_start.clone();
        Callback::from(move |e: TouchEvent| {
            if let Some(input) = DragInput::from_touch(&e) {
                on_start.emit(input);
            }
        })
    };
    let ontouchmove = Callback::from(move |e: TouchEvent| {
        if let Some(input) = DragInput::from_touch(&e) {
            on_move(input);
        }
    });
    let ontouchend = on_end.reform(|_: TouchEvent| ());

    html! {
        <div
            ref={props.frame.clone()}
            class={classes!(
                "device-viewport",
                if *grabbing { "grabbing" } else { "grab" },
                (!props.active).then(|| "inactive")
            )}
            {onmousedown}
            {onmousemove}
            {onmouseup}
            {onmouseleave}
            {ontouchstart}
            {ontouchmove}
            {ontouchend}
        >
            <div class="device-screens">
                { for props.images.iter().enumerate().map(|(idx, src)| html! {
                    <img
                        src={*src}
                        alt={format!("Screen {}-{}", props.item_index, idx)}
                        class={classes!("device-screen", (idx == props.current).then(|| "shown"))}
                        draggable="false"
                    />
                }) }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct CarouselControlsProps {
    pub carousel: Carousel,
    pub on_previous: Callback<()>,
    pub on_next: Callback<()>,
}

#[function_component(CarouselControls)]
pub fn carousel_controls(props: &CarouselControlsProps) -> Html {
    let carousel = props.carousel;

    let onprevious = props.on_previous.reform(|e: MouseEvent| e.stop_propagation());
    let onnext = props.on_next.reform(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class="carousel-controls">
            <button
                class={classes!("carousel-button", (!carousel.can_go_previous()).then(|| "disabled"))}
                onclick={onprevious}
                disabled={!carousel.can_go_previous()}
                aria-label="이전 화면"
            >
                <svg class="carousel-icon" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2.5" d="M15 19l-7-7 7-7" />
                </svg>
            </button>
            <div class="carousel-position">{carousel.label()}</div>
            <button
                class={classes!("carousel-button", (!carousel.can_go_next()).then(|| "disabled"))}
                onclick={onnext}
                disabled={!carousel.can_go_next()}
                aria-label="다음 화면"
            >
                <svg class="carousel-icon" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2.5" d="M9 5l7 7-7 7" />
                </svg>
            </button>
        </div>
    }
}

/// Styles shared by both section layouts.
pub const DEVICE_CSS: &str = r#"
    .device-shell {
        position: relative;
        width: 100%;
        max-width: 310px;
        aspect-ratio: 9 / 19;
        background: #fff;
        border: 8px solid #000;
        border-radius: 3rem;
        padding: 0.5rem;
        overflow: hidden;
        box-shadow: 0 40px 100px rgba(0, 0, 0, 0.2);
    }
    .device-shell.compact {
        max-width: 280px;
        border-width: 6px;
        border-radius: 2.5rem;
        padding: 0.375rem;
        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
    }
    .device-notch {
        position: absolute;
        top: 0;
        left: 50%;
        transform: translateX(-50%);
        width: 8rem;
        height: 1.5rem;
        background: #000;
        border-radius: 0 0 1rem 1rem;
        z-index: 30;
    }
    .device-shell.compact .device-notch {
        width: 6rem;
        height: 1.25rem;
    }
    .device-viewport {
        position: absolute;
        inset: 0.5rem;
        overflow-y: auto;
        border-radius: 2.4rem;
        background: #f9fafb;
        scrollbar-width: none;
        -ms-overflow-style: none;
        transition: opacity 0.7s ease;
        z-index: 10;
    }
    .device-shell.compact .device-viewport {
        inset: 0.375rem;
        border-radius: 2rem;
    }
    .device-viewport::-webkit-scrollbar {
        display: none;
    }
    .device-viewport.inactive {
        opacity: 0;
        z-index: 0;
        pointer-events: none;
    }
    .device-viewport.grab {
        cursor: grab;
    }
    .device-viewport.grabbing {
        cursor: grabbing;
    }
    .device-screens {
        position: relative;
        width: 100%;
        height: 100%;
    }
    .device-screen {
        position: absolute;
        inset: 0;
        width: 100%;
        object-fit: contain;
        object-position: top;
        opacity: 0;
        transform: scale(1.05);
        pointer-events: none;
        user-select: none;
        transition: opacity 0.5s ease, transform 0.5s ease;
    }
    .device-screen.shown {
        opacity: 1;
        transform: scale(1);
        z-index: 10;
    }
    .carousel-controls {
        display: flex;
        align-items: center;
        gap: 1.5rem;
        margin-top: 2rem;
        padding: 0.75rem 1.5rem;
        background: #f9fafb;
        border: 1px solid #f3f4f6;
        border-radius: 9999px;
        box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
    }
    .carousel-button {
        padding: 0.5rem;
        border: none;
        border-radius: 9999px;
        background: transparent;
        color: #111827;
        cursor: pointer;
        transition: all 0.2s ease;
    }
    .carousel-button:hover {
        background: #fff;
    }
    .carousel-button:active {
        transform: scale(0.9);
    }
    .carousel-button.disabled {
        opacity: 0.2;
        cursor: not-allowed;
    }
    .carousel-icon {
        width: 1.25rem;
        height: 1.25rem;
        display: block;
    }
    .carousel-position {
        font-size: 0.875rem;
        font-weight: 700;
        color: #004a99;
        font-variant-numeric: tabular-nums;
    }
"#;
