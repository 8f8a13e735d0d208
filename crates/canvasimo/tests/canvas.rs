use canvasimo::font::{FontError, FontSurface};
use canvasimo::math::{point, vector, Angle, Point, Vector};
use canvasimo::path::{PathCommand, PathSink, Recorder, Winding};
use canvasimo::{Canvas, CanvasError, Repeat, Surface};

use std::f64::consts::PI;
use std::ops::ControlFlow;

#[derive(Default)]
struct TestContext {
    recorder: Recorder,
    font: String,
}

impl TestContext {
    fn with_font(font: &str) -> Self {
        TestContext {
            recorder: Recorder::new(),
            font: font.to_string(),
        }
    }

    fn native_ellipse() -> Self {
        TestContext {
            recorder: Recorder::with_native_ellipse(),
            font: String::new(),
        }
    }
}

impl FontSurface for TestContext {
    fn font_property(&self) -> String {
        self.font.clone()
    }

    fn set_font_property(&mut self, font: String) {
        self.font = font;
    }
}

impl PathSink for TestContext {
    fn begin_path(&mut self) {
        self.recorder.begin_path();
    }

    fn close_path(&mut self) {
        self.recorder.close_path();
    }

    fn move_to(&mut self, to: Point) {
        self.recorder.move_to(to);
    }

    fn line_to(&mut self, to: Point) {
        self.recorder.line_to(to);
    }

    fn arc_to(&mut self, ctrl: Point, to: Point, radius: f64) {
        self.recorder.arc_to(ctrl, to, radius);
    }

    fn arc(&mut self, center: Point, radius: f64, start: Angle, end: Angle, winding: Winding) {
        self.recorder.arc(center, radius, start, end, winding);
    }

    fn save(&mut self) {
        self.recorder.save();
    }

    fn restore(&mut self) {
        self.recorder.restore();
    }

    fn translate(&mut self, by: Vector) {
        self.recorder.translate(by);
    }

    fn rotate(&mut self, angle: Angle) {
        self.recorder.rotate(angle);
    }

    fn scale(&mut self, x: f64, y: f64) {
        self.recorder.scale(x, y);
    }

    fn supports_ellipse(&self) -> bool {
        self.recorder.supports_ellipse()
    }

    fn ellipse(&mut self, ellipse: &canvasimo::path::Ellipse) {
        self.recorder.ellipse(ellipse);
    }
}

struct TestSurface {
    font: Option<&'static str>,
}

impl Surface for TestSurface {
    type Context = TestContext;

    fn context_2d(&mut self) -> Option<TestContext> {
        self.font.map(TestContext::with_font)
    }
}

fn canvas() -> Canvas<TestContext> {
    Canvas::from_context(TestContext::default())
}

fn commands(canvas: &Canvas<TestContext>) -> &[PathCommand] {
    canvas.context().recorder.commands()
}

#[test]
fn missing_context() {
    let result = Canvas::new(&mut TestSurface { font: None });
    assert_eq!(result.err(), Some(CanvasError::MissingDrawingContext));
}

#[test]
fn construction_formats_font() {
    let canvas = Canvas::new(&mut TestSurface {
        font: Some("bold 12px serif"),
    })
    .unwrap();
    assert_eq!(canvas.context().font, "normal normal bold 12px serif");

    let canvas = Canvas::new(&mut TestSurface { font: Some("") }).unwrap();
    assert_eq!(canvas.context().font, "normal normal normal 10px sans-serif");
}

#[test]
fn chained_shapes() {
    let mut canvas = canvas();
    canvas
        .plot_poly(0.0, 0.0, 10.0, 6.0, false)
        .plot_star(0.0, 0.0, 10.0, 5.0, true)
        .plot_burst(0.0, 0.0, 10.0, 2.0, 8.0, false)
        .plot_rounded_rect(0.0, 0.0, 100.0, 50.0, 999.0);

    // 6 + 3, 10 + 3, 16 + 3 and 11 commands.
    assert_eq!(commands(&canvas).len(), 9 + 13 + 19 + 11);
    let closes = commands(&canvas)
        .iter()
        .filter(|cmd| **cmd == PathCommand::Close)
        .count();
    assert_eq!(closes, 4);
}

#[test]
fn degenerate_shapes_are_ignored() {
    let mut canvas = canvas();
    canvas
        .plot_poly(0.0, 0.0, 10.0, 2.0, false)
        .plot_star(0.0, 0.0, 10.0, 0.0, false)
        .plot_burst(0.0, 0.0, 10.0, 5.0, -4.0, false)
        .plot_poly(0.0, 0.0, 10.0, f64::NAN, true);

    assert!(commands(&canvas).is_empty());
}

#[test]
fn rounded_rect_radius_is_clamped() {
    let mut clamped = canvas();
    clamped.plot_rounded_rect(0.0, 0.0, 100.0, 50.0, 999.0);

    let mut explicit = canvas();
    explicit.plot_rounded_rect(0.0, 0.0, 100.0, 50.0, 25.0);

    assert_eq!(commands(&clamped), commands(&explicit));
    assert_eq!(
        commands(&clamped)[3],
        PathCommand::ArcTo {
            ctrl: point(100.0, 0.0),
            to: point(100.0, 25.0),
            radius: 25.0,
        }
    );
}

#[test]
fn ellipse_fallback() {
    let mut canvas = canvas();
    canvas.plot_ellipse(10.0, 20.0, 8.0, 2.0, 0.5, 0.0, PI, true);

    assert_eq!(
        commands(&canvas),
        &[
            PathCommand::Save,
            PathCommand::Translate {
                by: vector(10.0, 20.0)
            },
            PathCommand::Rotate {
                angle: Angle::radians(0.5)
            },
            PathCommand::Scale { x: 1.0, y: 0.25 },
            PathCommand::Arc {
                center: point(0.0, 0.0),
                radius: 8.0,
                start_angle: Angle::radians(0.0),
                end_angle: Angle::radians(PI),
                winding: Winding::Anticlockwise,
            },
            PathCommand::Restore,
        ][..]
    );
}

#[test]
fn native_ellipse() {
    let mut canvas = Canvas::from_context(TestContext::native_ellipse());
    canvas.plot_ellipse(10.0, 20.0, 8.0, 2.0, 0.5, 0.0, PI, false);

    match commands(&canvas) {
        [PathCommand::Ellipse(ellipse)] => {
            assert_eq!(ellipse.center, point(10.0, 20.0));
            assert_eq!(ellipse.radii, vector(8.0, 2.0));
            assert_eq!(ellipse.winding, Winding::Clockwise);
        }
        other => panic!("unexpected commands {:?}", other),
    }
}

#[test]
fn paths_and_lines() {
    let points = [point(0.0, 0.0), point(10.0, 0.0), point(10.0, 10.0)];

    let mut canvas = canvas();
    canvas
        .plot_closed_path(&points)
        .plot_line(1.0, 1.0, 2.0, 2.0)
        .plot_length(0.0, 0.0, 5.0, 0.0)
        .plot_circle(0.0, 0.0, 1.0, false);

    let commands = commands(&canvas);
    assert_eq!(commands.len(), 5 + 2 + 2 + 3);
    assert_eq!(commands[0], PathCommand::Begin);
    assert_eq!(commands[4], PathCommand::Close);
    assert_eq!(
        commands[8],
        PathCommand::LineTo {
            to: point(5.0, 0.0)
        }
    );
    assert_eq!(commands[11], PathCommand::Close);
}

#[test]
fn font_accessors() {
    let mut canvas = canvas();
    assert_eq!(canvas.font(), "normal normal normal 10px sans-serif");

    canvas
        .set_font_style("italic")
        .set_font_variant("small-caps")
        .set_font_weight(600u16)
        .set_font_size(14.0)
        .set_font_family("Times New Roman");

    assert_eq!(canvas.font(), "italic small-caps 600 14px Times New Roman");
    assert_eq!(canvas.font_style().as_deref(), Some("italic"));
    assert_eq!(canvas.font_variant().as_deref(), Some("small-caps"));
    assert_eq!(canvas.font_weight().as_deref(), Some("600"));
    assert_eq!(canvas.font_size(), Some(14.0));
    assert_eq!(canvas.font_family().as_deref(), Some("Times New Roman"));
}

#[test]
fn malformed_font_is_reset() {
    let mut canvas = canvas();
    canvas.context_mut().font = "serif".to_string();

    assert_eq!(canvas.font_style(), None);
    assert_eq!(canvas.font_size(), None);

    canvas.set_font_style("italic");
    assert_eq!(canvas.context().font, "normal normal normal 10px sans-serif");
}

#[test]
fn strict_font_parts() {
    let mut canvas = canvas();
    let parts = canvas.try_font_parts().unwrap();
    assert_eq!(parts.family, "sans-serif");
    assert_eq!(Some(parts), canvas.font_parts());

    canvas.context_mut().font = "bold serif".to_string();
    match canvas.try_font_parts() {
        Err(CanvasError::Font(FontError::InsufficientParts { found })) => assert_eq!(found, 2),
        other => panic!("unexpected result {:?}", other),
    }
}

#[test]
fn angles() {
    let canvas = canvas();

    let angle = canvas.get_angle(&[0.0, 0.0, 0.0, 1.0]).unwrap();
    assert!((angle - PI / 2.0).abs() < 1e-12);

    let angle = canvas
        .get_angle(&[0.0, 0.0, 1.0, 0.0, 2.0, 0.0])
        .unwrap();
    assert!((angle.abs() - PI).abs() < 1e-12);

    let err = canvas.get_angle(&[0.0, 0.0, 1.0]).unwrap_err();
    match err {
        CanvasError::InvalidArgumentCount(e) => {
            assert!(e.to_string().contains("got 3"));
        }
        other => panic!("unexpected error {:?}", other),
    }
}

#[test]
fn repeat_and_tap() {
    let mut canvas = canvas();
    let mut visited = Vec::new();

    canvas
        .repeat(Repeat::new(10.0), |canvas, i| {
            visited.push(i);
            canvas.move_to(i, 0.0);
            if i >= 2.0 {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        })
        .tap(|canvas| {
            canvas.close_path();
        });

    assert_eq!(visited, vec![0.0, 1.0, 2.0]);
    assert_eq!(commands(&canvas).len(), 4);
    assert_eq!(commands(&canvas)[3], PathCommand::Close);

    let from_args = Repeat::from_args(&[3.0, 0.0]).unwrap();
    let mut count = 0;
    canvas.repeat(from_args, |_, _| {
        count += 1;
        ControlFlow::Continue(())
    });
    assert_eq!(count, 3);
}
