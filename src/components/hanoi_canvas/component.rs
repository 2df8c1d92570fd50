use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};

use super::render;
use super::state::Highlight;
use crate::engine::canvas::{MAX_CANVAS_WIDTH, node_at};
use crate::engine::Explorer;

/// Fallback when the canvas is not attached to a sized parent yet.
const DEFAULT_CONTAINER_WIDTH: f64 = MAX_CANVAS_WIDTH + 60.0;

fn container_width(canvas: &HtmlCanvasElement) -> f64 {
	canvas
		.parent_element()
		.map(|p| p.client_width() as f64)
		.filter(|w| *w > 0.0)
		.unwrap_or(DEFAULT_CONTAINER_WIDTH)
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
	canvas.get_context("2d").ok().flatten()?.dyn_into().ok()
}

/// Canvas element and the event's position relative to it.
fn pointer(
	canvas_ref: NodeRef<leptos::html::Canvas>,
	ev: &MouseEvent,
) -> Option<(HtmlCanvasElement, f64, f64)> {
	let canvas: HtmlCanvasElement = canvas_ref.get()?.into();
	let rect = canvas.get_bounding_client_rect();
	let (x, y) = (
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	);
	Some((canvas, x, y))
}

#[component]
pub fn HanoiCanvas(
	explorer: RwSignal<Explorer>,
	highlight: RwSignal<Highlight>,
	#[prop(into)] loading: Signal<bool>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

	// Size the canvas from its container once mounted and on every resize.
	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		explorer.update(|e| e.fit_to(container_width(&canvas)));

		if resize_cb.borrow().is_some() {
			return;
		}
		let Some(window) = web_sys::window() else {
			return;
		};
		let canvas_resize = canvas.clone();
		*resize_cb.borrow_mut() = Some(Closure::new(move || {
			explorer.update(|e| e.fit_to(container_width(&canvas_resize)));
		}));
		if let Some(ref cb) = *resize_cb.borrow() {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}
	});

	// Redraw whenever the tree, its layout or the highlight changes.
	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(ctx) = context_2d(&canvas) else {
			log::warn!("canvas has no 2d context");
			return;
		};
		highlight.with(|h| {
			explorer.with(|e| {
				let size = e.canvas();
				let (w, h_px) = (size.width as u32, size.height as u32);
				if canvas.width() != w || canvas.height() != h_px {
					canvas.set_width(w);
					canvas.set_height(h_px);
				}
				render::render(e, h, &ctx);
			})
		});
	});

	let on_mousemove = move |ev: MouseEvent| {
		let Some((canvas, x, y)) = pointer(canvas_ref, &ev) else {
			return;
		};
		let hit = explorer.with_untracked(|e| node_at(e.table().keys(), e.positions(), x, y).cloned());
		let cursor = if hit.is_some() { "pointer" } else { "crosshair" };
		let _ = web_sys::HtmlElement::style(&canvas).set_property("cursor", cursor);
		highlight.maybe_update(|h| h.set_hover(hit));
	};

	let on_click = move |ev: MouseEvent| {
		let Some((_, x, y)) = pointer(canvas_ref, &ev) else {
			return;
		};
		let hit = explorer.with_untracked(|e| node_at(e.table().keys(), e.positions(), x, y).cloned());
		if let Some(state) = hit {
			highlight.update(|h| h.toggle_selected(state));
		}
	};

	let on_mouseleave = move |_: MouseEvent| {
		highlight.maybe_update(|h| h.set_hover(None));
	};

	view! {
		<div class="canvas-container">
			<Show when=move || loading.get()>
				<div class="loading-overlay">
					<div class="spinner"></div>
					<p>"Generating solution tree..."</p>
				</div>
			</Show>
			<canvas
				node_ref=canvas_ref
				class="tree-canvas"
				on:mousemove=on_mousemove
				on:click=on_click
				on:mouseleave=on_mouseleave
				style="cursor: crosshair;"
			/>
		</div>
	}
}
