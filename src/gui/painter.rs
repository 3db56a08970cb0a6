use eframe::{
    egui::{self, pos2, vec2, Align2, Color32, FontId, Pos2, Rect, Shape, Stroke, StrokeKind},
    emath::RectTransform,
};
use scatter_contour::{
    colormap::{ColorScale, Rgb},
    contour::nice_levels,
    figure::{Layer, Subplot},
};

// room around the axes for title, tick labels and the colour bar
const MARGIN_TOP: f32 = 28.;
const MARGIN_BOTTOM: f32 = 22.;
const MARGIN_LEFT: f32 = 44.;
const MARGIN_RIGHT: f32 = 90.;

const COLORBAR_GAP: f32 = 14.;
const COLORBAR_WIDTH: f32 = 16.;
const TICK_LENGTH: f32 = 4.;

const TEXT_COLOR: Color32 = Color32::BLACK;

#[inline]
fn color(rgb: Rgb) -> Color32 {
    Color32::from_rgb(rgb[0], rgb[1], rgb[2])
}

/// Paints a subplot into `outer`, axes box, layers, ticks, title and colour bar
pub fn paint_subplot(painter: &egui::Painter, outer: Rect, subplot: &Subplot) {
    let axes = Rect::from_min_max(
        outer.min + vec2(MARGIN_LEFT, MARGIN_TOP),
        outer.max - vec2(MARGIN_RIGHT, MARGIN_BOTTOM),
    );
    if axes.width() <= 0. || axes.height() <= 0. {
        return;
    }

    if let Some(title) = &subplot.title {
        painter.text(
            pos2(axes.center().x, axes.top() - 6.),
            Align2::CENTER_BOTTOM,
            title,
            FontId::proportional(14.),
            TEXT_COLOR,
        );
    }

    if let Some(view) = subplot.view() {
        // data y grows upwards, screen y downwards
        let data = Rect::from_min_max(
            pos2(view.min().x as f32, view.max().y as f32),
            pos2(view.max().x as f32, view.min().y as f32),
        );
        let to_screen = RectTransform::from_to(data, axes);

        let clipped = painter.with_clip_rect(axes);
        for layer in subplot.layers.iter() {
            paint_layer(&clipped, &to_screen, layer);
        }

        paint_ticks(
            painter,
            &to_screen,
            axes,
            (view.min().x, view.max().x),
            (view.min().y, view.max().y),
        );
    }

    painter.rect_stroke(axes, 0., Stroke::new(1., TEXT_COLOR), StrokeKind::Outside);

    if let Some(scale) = &subplot.color_scale {
        let bar = Rect::from_min_size(
            pos2(axes.right() + COLORBAR_GAP, axes.top()),
            vec2(COLORBAR_WIDTH, axes.height()),
        );
        paint_colorbar(painter, bar, scale);
    }
}

fn paint_layer(painter: &egui::Painter, to_screen: &RectTransform, layer: &Layer) {
    let project = |c: &geo::Coord| to_screen.transform_pos(pos2(c.x as f32, c.y as f32));

    match layer {
        Layer::FilledContours(l) => {
            // every band polygon is convex, so a fan from its first corner triangulates it
            let mut mesh = egui::Mesh::default();
            for (band, rgb) in l.contours.0.iter().zip(l.colors.iter()) {
                let fill = color(*rgb);
                for polygon in band.polygons.iter() {
                    let ring = &polygon.exterior().0;
                    let corners = &ring[..ring.len().saturating_sub(1)];
                    if corners.len() < 3 {
                        continue;
                    }

                    let base = mesh.vertices.len() as u32;
                    for c in corners {
                        mesh.colored_vertex(project(c), fill);
                    }
                    for i in 1..corners.len() as u32 - 1 {
                        mesh.add_triangle(base, base + i, base + i + 1);
                    }
                }
            }
            painter.add(Shape::mesh(mesh));
        }
        Layer::ContourLines(l) => {
            let stroke = Stroke::new(l.width, color(l.color));
            for level in l.contours.0.iter() {
                for line in level.lines.iter() {
                    let points: Vec<Pos2> = line.coords().map(project).collect();
                    painter.add(Shape::line(points, stroke));
                }
            }
        }
        Layer::Markers(l) => {
            let fill = color(l.color);
            for p in l.points.iter() {
                painter.circle_filled(project(p), l.size / 2., fill);
            }
        }
    }
}

fn paint_ticks(
    painter: &egui::Painter,
    to_screen: &RectTransform,
    axes: Rect,
    x_range: (f64, f64),
    y_range: (f64, f64),
) {
    let stroke = Stroke::new(1., TEXT_COLOR);
    let font = FontId::proportional(11.);

    for x in ticks(x_range) {
        let sx = to_screen.transform_pos(pos2(x as f32, 0.)).x;
        painter.line_segment(
            [pos2(sx, axes.bottom()), pos2(sx, axes.bottom() + TICK_LENGTH)],
            stroke,
        );
        painter.text(
            pos2(sx, axes.bottom() + TICK_LENGTH + 1.),
            Align2::CENTER_TOP,
            format_tick(x),
            font.clone(),
            TEXT_COLOR,
        );
    }
    for y in ticks(y_range) {
        let sy = to_screen.transform_pos(pos2(0., y as f32)).y;
        painter.line_segment(
            [pos2(axes.left() - TICK_LENGTH, sy), pos2(axes.left(), sy)],
            stroke,
        );
        painter.text(
            pos2(axes.left() - TICK_LENGTH - 2., sy),
            Align2::RIGHT_CENTER,
            format_tick(y),
            font.clone(),
            TEXT_COLOR,
        );
    }
}

fn paint_colorbar(painter: &egui::Painter, bar: Rect, scale: &ColorScale) {
    let Some((lo, hi)) = scale.range() else {
        return;
    };
    if hi <= lo {
        return;
    }
    let to_y = |v: f64| bar.bottom() - ((v - lo) / (hi - lo)) as f32 * bar.height();

    for (w, rgb) in scale.levels.windows(2).zip(scale.colors.iter()) {
        let band = Rect::from_x_y_ranges(bar.x_range(), to_y(w[1])..=to_y(w[0]));
        painter.rect_filled(band, 0., color(*rgb));
    }
    painter.rect_stroke(bar, 0., Stroke::new(1., TEXT_COLOR), StrokeKind::Outside);

    // label every other level when they get crowded
    let stride = if scale.levels.len() > 8 { 2 } else { 1 };
    let font = FontId::proportional(11.);
    for level in scale.levels.iter().step_by(stride) {
        let y = to_y(*level);
        painter.line_segment(
            [pos2(bar.right(), y), pos2(bar.right() + TICK_LENGTH, y)],
            Stroke::new(1., TEXT_COLOR),
        );
        painter.text(
            pos2(bar.right() + TICK_LENGTH + 2., y),
            Align2::LEFT_CENTER,
            format!("{level:.2}"),
            font.clone(),
            TEXT_COLOR,
        );
    }
}

// round tick positions strictly inside the range
fn ticks((min, max): (f64, f64)) -> Vec<f64> {
    if !(max > min) {
        return vec![];
    }
    nice_levels(min, max, 8)
        .into_iter()
        .filter(|t| *t >= min - 1e-9 && *t <= max + 1e-9)
        .collect()
}

fn format_tick(value: f64) -> String {
    if value.fract().abs() < 1e-9 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticks() {
        let t = ticks((-2., 2.));

        assert_eq!(t.first(), Some(&-2.));
        assert_eq!(t.last(), Some(&2.));
        assert!(t.contains(&0.));
        assert!(ticks((1., 1.)).is_empty());
    }

    #[test]
    fn test_format_tick() {
        assert_eq!(format_tick(-2.), "-2");
        assert_eq!(format_tick(0.5), "0.5");
    }
}
