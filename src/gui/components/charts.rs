// src/gui/components/charts.rs
//
// Pie (share of the whole) and bar (per-rating count) for the same five
// buckets. Drawn straight onto a Painter; colors come from the chart data.

use std::f32::consts::{FRAC_PI_2, TAU};

use eframe::egui::{self, Align2, FontId, Pos2, Rect, RichText, Sense, Shape, Stroke, Vec2, pos2, vec2};
use crate::dashboard::chart::ChartData;

use super::color32;

const CHART_H: f32 = 220.0;

// Max arc per polygon; keeps every slice piece convex.
const ARC_STEP: f32 = TAU / 96.0;

pub fn draw(ui: &mut egui::Ui, chart: &ChartData) {
    ui.columns(2, |cols| {
        egui::Frame::group(cols[0].style()).show(&mut cols[0], |ui| {
            ui.label(RichText::new("Rating Distribution").strong());
            pie(ui, chart);
            legend(ui, chart);
        });
        egui::Frame::group(cols[1].style()).show(&mut cols[1], |ui| {
            ui.label(RichText::new("Rating Comparison").strong());
            bars(ui, chart);
        });
    });
}

fn pie(ui: &mut egui::Ui, chart: &ChartData) {
    let side = CHART_H.min(ui.available_width());
    let (resp, painter) = ui.allocate_painter(Vec2::splat(side), Sense::hover());
    let center = resp.rect.center();
    let radius = side * 0.45;

    if chart.total() == 0 {
        painter.text(center, Align2::CENTER_CENTER, "No ratings",
            FontId::proportional(14.0), ui.visuals().weak_text_color());
        return;
    }

    // 12 o'clock, clockwise
    let mut start = -FRAC_PI_2;
    for (b, share) in chart.buckets.iter().zip(chart.shares()) {
        let sweep = share * TAU;
        if sweep <= 0.0 { continue; }

        let fill = color32(b.color);
        let end = start + sweep;
        let mut a0 = start;
        while a0 < end {
            let a1 = (a0 + ARC_STEP).min(end);
            let pts = vec![center, arc_point(center, radius, a0), arc_point(center, radius, a1)];
            painter.add(Shape::convex_polygon(pts, fill, Stroke::NONE));
            a0 = a1;
        }
        start = end;
    }

    if let Some(hover) = resp.hover_pos() {
        if let Some(i) = slice_at(chart, center, radius, hover) {
            let b = &chart.buckets[i];
            resp.on_hover_text(format!("{}: {}", b.label, b.count));
        }
    }
}

#[inline]
fn arc_point(center: Pos2, radius: f32, angle: f32) -> Pos2 {
    center + radius * Vec2::angled(angle)
}

fn slice_at(chart: &ChartData, center: Pos2, radius: f32, p: Pos2) -> Option<usize> {
    let d = p - center;
    if d.length() > radius { return None; }

    // Angle measured clockwise from 12 o'clock, in 0..TAU
    let angle = (d.angle() + FRAC_PI_2).rem_euclid(TAU);
    let mut acc = 0.0;
    for (i, share) in chart.shares().into_iter().enumerate() {
        acc += share * TAU;
        if share > 0.0 && angle < acc { return Some(i); }
    }
    None
}

fn legend(ui: &mut egui::Ui, chart: &ChartData) {
    ui.horizontal_wrapped(|ui| {
        for b in &chart.buckets {
            let (rect, _) = ui.allocate_exact_size(vec2(12.0, 12.0), Sense::hover());
            ui.painter().rect_filled(rect, 2.0, color32(b.color));
            ui.label(format!("{} ({})", b.label, b.count));
        }
    });
}

fn bars(ui: &mut egui::Ui, chart: &ChartData) {
    let width = ui.available_width();
    let (resp, painter) = ui.allocate_painter(vec2(width, CHART_H), Sense::hover());

    // Room for count labels above and rating labels below.
    let plot = Rect::from_min_max(
        resp.rect.min + vec2(8.0, 18.0),
        resp.rect.max - vec2(8.0, 22.0),
    );
    let text_color = ui.visuals().text_color();
    let axis = Stroke::new(1.0, ui.visuals().weak_text_color());
    painter.line_segment([plot.left_bottom(), plot.right_bottom()], axis);

    let max = chart.max_count().max(1) as f32;
    let slot = plot.width() / chart.buckets.len() as f32;

    for (i, b) in chart.buckets.iter().enumerate() {
        let cx = plot.left() + slot * (i as f32 + 0.5);
        let h = plot.height() * b.count as f32 / max;
        let bar = Rect::from_min_max(
            pos2(cx - slot * 0.35, plot.bottom() - h),
            pos2(cx + slot * 0.35, plot.bottom()),
        );
        if h > 0.0 {
            painter.rect_filled(bar, 6.0, color32(b.color));
        }
        painter.text(pos2(cx, bar.top() - 2.0), Align2::CENTER_BOTTOM,
            b.count.to_string(), FontId::proportional(12.0), text_color);
        painter.text(pos2(cx, plot.bottom() + 4.0), Align2::CENTER_TOP,
            b.label, FontId::proportional(12.0), text_color);
    }
}
