//! A path sink that stores the commands it receives.

use crate::commands::PathCommand;
use crate::math::{Angle, Point, Vector};
use crate::shapes::Ellipse;
use crate::sink::{emulate_ellipse, PathSink};
use crate::Winding;

use std::slice;

/// Records every command it receives, in order.
///
/// By default the recorder behaves like a surface without a native ellipse
/// primitive, so ellipses are recorded as their emulation. Use
/// [`Recorder::with_native_ellipse`] to record them as a single
/// [`PathCommand::Ellipse`].
///
/// # Example
///
/// ```
/// use canvasimo_path::{PathCommand, PathSink, Recorder};
/// use canvasimo_path::math::point;
///
/// let mut recorder = Recorder::new();
/// recorder.begin_path();
/// recorder.move_to(point(0.0, 0.0));
/// recorder.line_to(point(1.0, 0.0));
///
/// assert_eq!(recorder.len(), 3);
/// assert_eq!(recorder.commands()[2], PathCommand::LineTo { to: point(1.0, 0.0) });
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Recorder {
    commands: Vec<PathCommand>,
    native_ellipse: bool,
}

impl Recorder {
    pub fn new() -> Self {
        Recorder::default()
    }

    /// A recorder that advertises a native ellipse primitive.
    pub fn with_native_ellipse() -> Self {
        Recorder {
            commands: Vec::new(),
            native_ellipse: true,
        }
    }

    #[inline]
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    #[inline]
    pub fn into_commands(self) -> Vec<PathCommand> {
        self.commands
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<PathCommand> {
        self.commands.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Removes the recorded commands, keeping the capabilities.
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Sends the recorded commands to another sink, in order.
    pub fn replay<Sink: PathSink + ?Sized>(&self, sink: &mut Sink) {
        for cmd in &self.commands {
            sink.command(cmd);
        }
    }

    /// Iterates over the positions of the `MoveTo` and `LineTo` commands.
    pub fn endpoints(&self) -> impl Iterator<Item = Point> + '_ {
        self.commands.iter().filter_map(|cmd| match *cmd {
            PathCommand::MoveTo { to } | PathCommand::LineTo { to } => Some(to),
            _ => None,
        })
    }

    /// Iterates over the positions of the `LineTo` commands.
    pub fn line_vertices(&self) -> impl Iterator<Item = Point> + '_ {
        self.commands.iter().filter_map(|cmd| match *cmd {
            PathCommand::LineTo { to } => Some(to),
            _ => None,
        })
    }
}

impl<'l> IntoIterator for &'l Recorder {
    type Item = &'l PathCommand;
    type IntoIter = slice::Iter<'l, PathCommand>;

    fn into_iter(self) -> slice::Iter<'l, PathCommand> {
        self.iter()
    }
}

impl PathSink for Recorder {
    fn begin_path(&mut self) {
        self.commands.push(PathCommand::Begin);
    }

    fn close_path(&mut self) {
        self.commands.push(PathCommand::Close);
    }

    fn move_to(&mut self, to: Point) {
        self.commands.push(PathCommand::MoveTo { to });
    }

    fn line_to(&mut self, to: Point) {
        self.commands.push(PathCommand::LineTo { to });
    }

    fn arc_to(&mut self, ctrl: Point, to: Point, radius: f64) {
        self.commands.push(PathCommand::ArcTo { ctrl, to, radius });
    }

    fn arc(
        &mut self,
        center: Point,
        radius: f64,
        start_angle: Angle,
        end_angle: Angle,
        winding: Winding,
    ) {
        self.commands.push(PathCommand::Arc {
            center,
            radius,
            start_angle,
            end_angle,
            winding,
        });
    }

    fn save(&mut self) {
        self.commands.push(PathCommand::Save);
    }

    fn restore(&mut self) {
        self.commands.push(PathCommand::Restore);
    }

    fn translate(&mut self, by: Vector) {
        self.commands.push(PathCommand::Translate { by });
    }

    fn rotate(&mut self, angle: Angle) {
        self.commands.push(PathCommand::Rotate { angle });
    }

    fn scale(&mut self, x: f64, y: f64) {
        self.commands.push(PathCommand::Scale { x, y });
    }

    fn supports_ellipse(&self) -> bool {
        self.native_ellipse
    }

    fn ellipse(&mut self, ellipse: &Ellipse) {
        if self.native_ellipse {
            self.commands.push(PathCommand::Ellipse(*ellipse));
        } else {
            emulate_ellipse(self, ellipse);
        }
    }
}

#[test]
fn native_ellipse() {
    use crate::math::{point, vector};

    let ellipse = Ellipse {
        center: point(1.0, 2.0),
        radii: vector(3.0, 4.0),
        ..Ellipse::default()
    };

    let mut native = Recorder::with_native_ellipse();
    assert!(native.supports_ellipse());
    native.ellipse(&ellipse);
    assert_eq!(native.commands(), &[PathCommand::Ellipse(ellipse)][..]);

    // Replaying into a surface without the primitive emulates it.
    let mut emulated = Recorder::new();
    native.replay(&mut emulated);
    assert_eq!(emulated.len(), 6);
    assert_eq!(emulated.commands()[0], PathCommand::Save);
    assert_eq!(emulated.commands()[5], PathCommand::Restore);

    native.clear();
    assert!(native.is_empty());
    assert!(native.supports_ellipse());
}

#[test]
fn endpoint_filters() {
    use crate::math::point;

    let mut recorder = Recorder::new();
    recorder.begin_path();
    recorder.move_to(point(0.0, 0.0));
    recorder.line_to(point(1.0, 0.0));
    recorder.arc_to(point(2.0, 0.0), point(2.0, 1.0), 1.0);
    recorder.line_to(point(2.0, 2.0));
    recorder.close_path();

    let endpoints: Vec<Point> = recorder.endpoints().collect();
    assert_eq!(
        endpoints,
        vec![point(0.0, 0.0), point(1.0, 0.0), point(2.0, 2.0)]
    );

    let lines: Vec<Point> = recorder.line_vertices().collect();
    assert_eq!(lines, vec![point(1.0, 0.0), point(2.0, 2.0)]);

    assert_eq!((&recorder).into_iter().count(), 6);
}
