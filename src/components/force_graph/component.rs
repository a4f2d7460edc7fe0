use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::prelude::*;
use log::{debug, info, warn};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, WheelEvent, Window};

use super::render;
use super::state::ForceGraphState;
use super::style::TAP_SLOP;
use crate::config::Layout;
use crate::schema::ViewState;

const FALLBACK_SIZE: (f64, f64) = (800.0, 600.0);

fn parent_size(canvas: &HtmlCanvasElement) -> (f64, f64) {
	canvas
		.parent_element()
		.map(|p| (p.client_width() as f64, p.client_height() as f64))
		.filter(|&(w, h)| w > 0.0 && h > 0.0)
		.unwrap_or(FALLBACK_SIZE)
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
	canvas.get_context("2d").ok()??.dyn_into().ok()
}

fn pointer(canvas_ref: NodeRef<leptos::html::Canvas>, ev: &MouseEvent) -> Option<(f64, f64)> {
	let canvas: HtmlCanvasElement = canvas_ref.get_untracked()?;
	let rect = canvas.get_bounding_client_rect();
	Some((
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	))
}

/// Canvas view of the current schema graph.
///
/// The engine is rebuilt only when the view state says the element set
/// changed, and released when no schema is loaded. Taps resolve against the
/// live engine and are fed back into the view state.
#[component]
pub fn ForceGraphCanvas(
	view_state: RwSignal<ViewState>,
	#[prop(default = Layout::Force)] layout: Layout,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let engine: Rc<RefCell<Option<ForceGraphState>>> = Rc::new(RefCell::new(None));
	let size = Rc::new(Cell::new(FALLBACK_SIZE));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let (engine_init, size_init, animate_init, resize_cb_init) = (
		engine.clone(),
		size.clone(),
		animate.clone(),
		resize_cb.clone(),
	);

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let Some(window): Option<Window> = web_sys::window() else {
			return;
		};
		let (w, h) = parent_size(&canvas);
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);
		size_init.set((w, h));

		let Some(ctx) = context_2d(&canvas) else {
			warn!("canvas has no 2d context");
			return;
		};

		let (engine_resize, size_resize, canvas_resize) =
			(engine_init.clone(), size_init.clone(), canvas.clone());
		*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
			let (nw, nh) = parent_size(&canvas_resize);
			canvas_resize.set_width(nw as u32);
			canvas_resize.set_height(nh as u32);
			size_resize.set((nw, nh));
			if let Some(ref mut s) = *engine_resize.borrow_mut() {
				s.resize(nw, nh);
			}
		}));
		if let Some(ref cb) = *resize_cb_init.borrow() {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}

		let (engine_anim, size_anim, animate_inner) =
			(engine_init.clone(), size_init.clone(), animate_init.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref mut s) = *engine_anim.borrow_mut() {
				s.tick(0.016);
				render::render(s, &ctx);
			} else {
				let (w, h) = size_anim.get();
				render::clear(&ctx, w, h);
			}
			if let (Some(win), Some(cb)) = (web_sys::window(), animate_inner.borrow().as_ref()) {
				let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	let (engine_sync, size_sync) = (engine.clone(), size.clone());
	Effect::new(move |_| {
		let (has_schema, rebuild, selected) = view_state.with(|s| {
			(s.schema().is_some(), s.needs_rebuild(), s.selected_element())
		});

		if !has_schema {
			if engine_sync.borrow_mut().take().is_some() {
				info!("released canvas engine");
			}
			if view_state.with_untracked(|s| s.last_applied().is_some()) {
				view_state.update(ViewState::mark_released);
			}
			return;
		}

		if rebuild {
			let elements = view_state.with_untracked(|s| s.elements().clone());
			let (w, h) = size_sync.get();
			// The old engine goes before the new one is built.
			drop(engine_sync.borrow_mut().take());
			info!(
				"building canvas: {} nodes, {} edges",
				elements.nodes.len(),
				elements.edges.len()
			);
			*engine_sync.borrow_mut() = Some(ForceGraphState::new(&elements, w, h, layout));
			view_state.update(ViewState::mark_applied);
		}

		if let Some(ref mut s) = *engine_sync.borrow_mut() {
			s.selected = selected;
		}
	});

	let engine_md = engine.clone();
	let on_mousedown = move |ev: MouseEvent| {
		let Some((x, y)) = pointer(canvas_ref, &ev) else {
			return;
		};
		if let Some(ref mut s) = *engine_md.borrow_mut() {
			s.press = Some((x, y));
			if let Some((idx, _)) = s.node_at_position(x, y) {
				s.drag.active = true;
				s.drag.node_idx = Some(idx);
				s.drag.start_x = x;
				s.drag.start_y = y;
				s.graph.visit_nodes(|node| {
					if node.index() == idx {
						s.drag.node_start_x = node.x();
						s.drag.node_start_y = node.y();
					}
				});
			} else {
				s.pan.active = true;
				s.pan.start_x = x;
				s.pan.start_y = y;
				s.pan.transform_start_x = s.transform.x;
				s.pan.transform_start_y = s.transform.y;
			}
		}
	};

	let engine_mm = engine.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some((x, y)) = pointer(canvas_ref, &ev) else {
			return;
		};
		if let Some(ref mut s) = *engine_mm.borrow_mut() {
			if let Some((px, py)) = s.press {
				if (x - px).hypot(y - py) > TAP_SLOP {
					s.press = None;
				}
			}

			if s.drag.active {
				if let Some(idx) = s.drag.node_idx {
					let (dx, dy) = (
						(x - s.drag.start_x) / s.transform.k,
						(y - s.drag.start_y) / s.transform.k,
					);
					let (nx, ny) = (
						s.drag.node_start_x + dx as f32,
						s.drag.node_start_y + dy as f32,
					);
					s.graph.visit_nodes_mut(|node| {
						if node.index() == idx {
							node.data.x = nx;
							node.data.y = ny;
							node.data.is_anchor = true;
						}
					});
				}
			} else if s.pan.active {
				s.transform.x = s.pan.transform_start_x + (x - s.pan.start_x);
				s.transform.y = s.pan.transform_start_y + (y - s.pan.start_y);
			}
		}
	};

	let engine_mu = engine.clone();
	let on_mouseup = move |ev: MouseEvent| {
		let point = pointer(canvas_ref, &ev);
		let tapped = {
			let mut slot = engine_mu.borrow_mut();
			let Some(s) = slot.as_mut() else {
				return;
			};
			s.drag.active = false;
			s.drag.node_idx = None;
			s.pan.active = false;
			match (s.press.take(), point) {
				(Some(_), Some((x, y))) => s.hit_test(x, y),
				_ => None,
			}
		};
		if let Some((kind, id)) = tapped {
			debug!("tap on {kind:?} {id}");
			view_state.update(|s| s.handle_tap(kind, &id));
		}
	};

	let engine_ml = engine.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut s) = *engine_ml.borrow_mut() {
			s.drag.active = false;
			s.drag.node_idx = None;
			s.pan.active = false;
			s.press = None;
		}
	};

	let engine_wh = engine.clone();
	let on_wheel = move |ev: WheelEvent| {
		ev.prevent_default();
		let Some((x, y)) = pointer(canvas_ref, &ev) else {
			return;
		};
		if let Some(ref mut s) = *engine_wh.borrow_mut() {
			s.zoom_at(x, y, ev.delta_y());
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="schema-canvas"
			on:mousedown=on_mousedown
			on:mousemove=on_mousemove
			on:mouseup=on_mouseup
			on:mouseleave=on_mouseleave
			on:wheel=on_wheel
			style="display: block; width: 100%; height: 100%; cursor: grab;"
		/>
	}
}
