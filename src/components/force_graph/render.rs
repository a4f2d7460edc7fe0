use std::f64::consts::{FRAC_PI_2, PI};

use web_sys::CanvasRenderingContext2d;

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use super::state::{ForceGraphState, self_loop};
use super::style::*;
use super::types::ElementKind;

/// Rotation for a label running along `(dx, dy)`, flipped so text never
/// reads upside down.
pub fn label_angle(dx: f64, dy: f64) -> f64 {
	let angle = dy.atan2(dx);
	if angle > FRAC_PI_2 {
		angle - PI
	} else if angle < -FRAC_PI_2 {
		angle + PI
	} else {
		angle
	}
}

/// Clear the canvas when there is nothing to draw.
pub fn clear(ctx: &CanvasRenderingContext2d, width: f64, height: f64) {
	ctx.set_fill_style_str(BACKGROUND);
	ctx.fill_rect(0.0, 0.0, width, height);
}

pub fn render(state: &ForceGraphState, ctx: &CanvasRenderingContext2d) {
	clear(ctx, state.width, state.height);
	ctx.save();
	let _ = ctx.translate(state.transform.x, state.transform.y);
	let _ = ctx.scale(state.transform.k, state.transform.k);
	draw_edges(state, ctx);
	draw_nodes(state, ctx);
	ctx.restore();
}

fn draw_edges(state: &ForceGraphState, ctx: &CanvasRenderingContext2d) {
	let positions = state.positions();
	ctx.set_line_width(EDGE_WIDTH);

	for edge in &state.edges {
		let (Some(src), Some(tgt)) = (edge.source, edge.target) else {
			continue;
		};
		let (Some(&(x1, y1)), Some(&(x2, y2))) = (positions.get(&src), positions.get(&tgt)) else {
			continue;
		};
		let color = if state.is_selected(ElementKind::Edge, &edge.id) {
			EDGE_SELECTED_COLOR
		} else {
			EDGE_COLOR
		};
		ctx.set_stroke_style_str(color);
		ctx.set_fill_style_str(color);

		if src == tgt {
			let (cx, cy, r) = self_loop(x1, y1);
			ctx.begin_path();
			let _ = ctx.arc(cx, cy, r, 0.0, 2.0 * PI);
			ctx.stroke();
			draw_edge_label(ctx, &edge.label, cx, cy - r, 0.0);
			continue;
		}

		let (dx, dy) = (x2 - x1, y2 - y1);
		let dist = (dx * dx + dy * dy).sqrt();
		if dist < 0.001 {
			continue;
		}
		let (ux, uy) = (dx / dist, dy / dist);
		ctx.begin_path();
		ctx.move_to(x1 + ux * NODE_RADIUS, y1 + uy * NODE_RADIUS);
		ctx.line_to(
			x2 - ux * (NODE_RADIUS + ARROW_SIZE),
			y2 - uy * (NODE_RADIUS + ARROW_SIZE),
		);
		ctx.stroke();

		let (tip_x, tip_y) = (x2 - ux * NODE_RADIUS, y2 - uy * NODE_RADIUS);
		let (back_x, back_y) = (tip_x - ux * ARROW_SIZE, tip_y - uy * ARROW_SIZE);
		let (px, py) = (-uy * ARROW_SIZE * 0.5, ux * ARROW_SIZE * 0.5);
		ctx.begin_path();
		ctx.move_to(tip_x, tip_y);
		ctx.line_to(back_x + px, back_y + py);
		ctx.line_to(back_x - px, back_y - py);
		ctx.close_path();
		ctx.fill();

		let angle = if edge.autorotate { label_angle(dx, dy) } else { 0.0 };
		draw_edge_label(ctx, &edge.label, (x1 + x2) / 2.0, (y1 + y2) / 2.0, angle);
	}
}

fn draw_edge_label(ctx: &CanvasRenderingContext2d, label: &str, x: f64, y: f64, angle: f64) {
	if label.is_empty() {
		return;
	}
	ctx.save();
	let _ = ctx.translate(x, y);
	let _ = ctx.rotate(angle);
	ctx.set_fill_style_str(EDGE_TEXT_COLOR);
	ctx.set_font(&format!("{EDGE_FONT_PX}px sans-serif"));
	ctx.set_text_align("center");
	ctx.set_text_baseline("bottom");
	let _ = ctx.fill_text(label, 0.0, -EDGE_WIDTH);
	ctx.restore();
}

fn draw_nodes(state: &ForceGraphState, ctx: &CanvasRenderingContext2d) {
	ctx.set_font(&format!("{NODE_FONT_PX}px sans-serif"));
	ctx.set_text_align("center");
	ctx.set_text_baseline("middle");
	ctx.set_line_width(NODE_BORDER);

	state.graph.visit_nodes(|node| {
		let (x, y) = (node.x() as f64, node.y() as f64);
		let id = &node.data.user_data.id;
		let color = if state.is_selected(ElementKind::Node, id) {
			NODE_SELECTED_COLOR
		} else {
			NODE_COLOR
		};

		ctx.begin_path();
		let _ = ctx.arc(x, y, NODE_RADIUS, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(color);
		ctx.fill();
		ctx.set_stroke_style_str(color);
		ctx.stroke();

		ctx.set_fill_style_str(NODE_TEXT_COLOR);
		let _ = ctx.fill_text(id, x, y);
	});
}
