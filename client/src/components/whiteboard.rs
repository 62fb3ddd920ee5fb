//! Shared drawing canvas synchronized over its own room socket.
//!
//! The whiteboard opens a WebSocket separate from the chat panel's so either
//! surface can reconnect or tear down without disturbing the other. Local
//! strokes render immediately on pointer input; their broadcast echoes are
//! recognized by stroke id and skipped instead of redrawn.

use leptos::prelude::*;

use crate::state::session::SessionState;

#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::collections::HashSet;
#[cfg(feature = "hydrate")]
use std::rc::Rc;

#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast;

#[cfg(feature = "hydrate")]
use crate::net::socket::socket_draw::{apply_drawing_payload, is_own_echo};
#[cfg(feature = "hydrate")]
use crate::net::socket::{RoomSocket, spawn_socket};
#[cfg(feature = "hydrate")]
use crate::state::strokes::{Segment, StrokeTracker};
#[cfg(feature = "hydrate")]
use crate::util::pointer::{is_primary_button, pointer_point, primary_button_held};
#[cfg(feature = "hydrate")]
use crate::util::time::now_ms;
#[cfg(feature = "hydrate")]
use events::{Event, Payload};

const CANVAS_WIDTH: u32 = 800;
const CANVAS_HEIGHT: u32 = 500;

/// Draw one connected segment with the shared stroke settings.
#[cfg(feature = "hydrate")]
fn draw_segment(ctx: &web_sys::CanvasRenderingContext2d, segment: Segment) {
    ctx.begin_path();
    ctx.move_to(segment.from.x, segment.from.y);
    ctx.line_to(segment.to.x, segment.to.y);
    ctx.stroke();
    ctx.close_path();
}

/// The shared whiteboard canvas.
///
/// On hydration this acquires the 2D context, opens the drawing socket for
/// the active room, and wires pointer input to outbound stroke events.
#[component]
pub fn Whiteboard() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

    #[cfg(feature = "hydrate")]
    let ctx_cell = Rc::new(RefCell::new(None::<web_sys::CanvasRenderingContext2d>));
    #[cfg(feature = "hydrate")]
    let guard_cell = Rc::new(RefCell::new(None::<RoomSocket>));
    #[cfg(feature = "hydrate")]
    let tracker = Rc::new(RefCell::new(StrokeTracker::default()));
    #[cfg(feature = "hydrate")]
    let own_strokes = Rc::new(RefCell::new(HashSet::<String>::new()));
    #[cfg(feature = "hydrate")]
    let draw_sender = RwSignal::new(crate::app::EventSender::default());
    #[cfg(feature = "hydrate")]
    let active_stroke = RwSignal::new(None::<String>);

    #[cfg(feature = "hydrate")]
    {
        let ctx_cell = Rc::clone(&ctx_cell);
        let guard_cell = Rc::clone(&guard_cell);
        let tracker = Rc::clone(&tracker);
        let own_strokes = Rc::clone(&own_strokes);
        Effect::new(move || {
            let Some(canvas) = canvas_ref.get() else {
                return;
            };
            // Tracked read: the room id is set by the page after first render.
            let Some(room_id) = session.get().room_id else {
                return;
            };
            if guard_cell
                .borrow()
                .as_ref()
                .is_some_and(|socket| socket.serves(&room_id))
            {
                return;
            }
            // Navigating straight to another room keeps the component
            // mounted; drop the stale socket and start the board fresh.
            guard_cell.borrow_mut().take();
            *tracker.borrow_mut() = StrokeTracker::default();
            own_strokes.borrow_mut().clear();
            active_stroke.set(None);

            let Some(ctx) = canvas
                .get_context("2d")
                .ok()
                .flatten()
                .and_then(|value| value.dyn_into::<web_sys::CanvasRenderingContext2d>().ok())
            else {
                leptos::logging::warn!("whiteboard: no 2d context");
                return;
            };
            ctx.set_stroke_style_str("black");
            ctx.set_line_width(2.0);
            ctx.set_line_cap("round");
            ctx.clear_rect(
                0.0,
                0.0,
                f64::from(CANVAS_WIDTH),
                f64::from(CANVAS_HEIGHT),
            );
            *ctx_cell.borrow_mut() = Some(ctx);

            let on_event = {
                let ctx_cell = Rc::clone(&ctx_cell);
                let tracker = Rc::clone(&tracker);
                let own_strokes = Rc::clone(&own_strokes);
                move |event: &Event| {
                    if is_own_echo(&mut own_strokes.borrow_mut(), &event.payload) {
                        return;
                    }
                    let segment = apply_drawing_payload(&mut tracker.borrow_mut(), &event.payload);
                    if let (Some(segment), Some(ctx)) = (segment, ctx_cell.borrow().as_ref()) {
                        draw_segment(ctx, segment);
                    }
                }
            };

            let (sender, guard) = spawn_socket(room_id.clone(), session, on_event);
            draw_sender.set(sender);
            *guard_cell.borrow_mut() = Some(RoomSocket::new(room_id, guard));
        });
    }

    // Close the drawing socket when the board unmounts.
    #[cfg(feature = "hydrate")]
    {
        let guard_cell = Rc::clone(&guard_cell);
        on_cleanup(move || {
            guard_cell.borrow_mut().take();
        });
    }

    #[cfg(feature = "hydrate")]
    let send_draw = move |payload: Payload| {
        let s = session.get_untracked();
        let event = Event {
            id: uuid::Uuid::new_v4().to_string(),
            ts: now_ms(),
            room_id: s.room_id.unwrap_or_default(),
            from: Some(s.username),
            payload,
        };
        draw_sender.get_untracked().send(&event);
    };

    let on_pointer_down = {
        #[cfg(feature = "hydrate")]
        {
            let tracker = Rc::clone(&tracker);
            let own_strokes = Rc::clone(&own_strokes);
            move |ev: leptos::ev::PointerEvent| {
                if !is_primary_button(ev.button()) {
                    return;
                }
                ev.prevent_default();

                let point = pointer_point(&ev);
                let stroke_id = uuid::Uuid::new_v4().to_string();
                own_strokes.borrow_mut().insert(stroke_id.clone());
                tracker.borrow_mut().begin(&stroke_id, point);
                send_draw(Payload::DrawingStart {
                    stroke_id: stroke_id.clone(),
                    x: point.x,
                    y: point.y,
                });
                active_stroke.set(Some(stroke_id));
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_pointer_move = {
        #[cfg(feature = "hydrate")]
        {
            let ctx_cell = Rc::clone(&ctx_cell);
            let tracker = Rc::clone(&tracker);
            move |ev: leptos::ev::PointerEvent| {
                if !primary_button_held(ev.buttons()) {
                    return;
                }
                let Some(stroke_id) = active_stroke.get_untracked() else {
                    return;
                };

                let point = pointer_point(&ev);
                let Some(segment) = tracker.borrow_mut().advance(&stroke_id, point) else {
                    return;
                };
                if let Some(ctx) = ctx_cell.borrow().as_ref() {
                    draw_segment(ctx, segment);
                }
                send_draw(Payload::Drawing {
                    stroke_id,
                    x: point.x,
                    y: point.y,
                });
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let end_stroke = {
        #[cfg(feature = "hydrate")]
        {
            let tracker = Rc::clone(&tracker);
            let own_strokes = Rc::clone(&own_strokes);
            move |_ev: leptos::ev::PointerEvent| {
                let Some(stroke_id) = active_stroke.get_untracked() else {
                    return;
                };
                tracker.borrow_mut().end(&stroke_id);
                // Late echoes of a finished stroke redraw pixels already on
                // the canvas, so the id can be forgotten right away.
                own_strokes.borrow_mut().remove(&stroke_id);
                send_draw(Payload::DrawingEnd { stroke_id });
                active_stroke.set(None);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    #[cfg(not(feature = "hydrate"))]
    let _ = session;

    let on_pointer_up = end_stroke.clone();

    view! {
        <canvas
            class="whiteboard__canvas"
            node_ref=canvas_ref
            width=CANVAS_WIDTH.to_string()
            height=CANVAS_HEIGHT.to_string()
            on:pointerdown=on_pointer_down
            on:pointermove=on_pointer_move
            on:pointerup=on_pointer_up
            on:pointerleave=end_stroke
        ></canvas>
    }
}
