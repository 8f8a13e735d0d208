//! The drawing surface interface the shape generators emit into.
//!
//! ## `PathSink`
//!
//! [PathSink](trait.PathSink.html) mirrors the path and transform methods of a
//! canvas 2D context. Implementations forward each call to the actual surface
//! (or record it, see [Recorder](../recorder/struct.Recorder.html)).
//!
//! Calls are made in the exact order documented by each generator in the
//! [shapes](../shapes/index.html) module, one at a time and without batching.
//!
//! ## Capabilities
//!
//! Not every surface exposes a native ellipse primitive. Sinks advertise it
//! with [supports_ellipse](trait.PathSink.html#method.supports_ellipse). When
//! it returns `false`, ellipses are emulated with a transformed circular arc.

use crate::commands::PathCommand;
use crate::math::{Angle, Point, Vector};
use crate::shapes::Ellipse;
use crate::Winding;

use std::iter::IntoIterator;

/// The path building interface of a drawing surface.
pub trait PathSink {
    /// Discards the current path and starts a new one.
    fn begin_path(&mut self);

    /// Connects the current position back to the start of the sub-path.
    fn close_path(&mut self);

    /// Starts a new sub-path at a given position.
    fn move_to(&mut self, to: Point);

    /// Adds a line segment from the current position.
    fn line_to(&mut self, to: Point);

    /// Adds an arc of the given radius tangent to the lines
    /// `current -> ctrl` and `ctrl -> to`.
    fn arc_to(&mut self, ctrl: Point, to: Point, radius: f64);

    /// Adds a circular arc.
    fn arc(
        &mut self,
        center: Point,
        radius: f64,
        start_angle: Angle,
        end_angle: Angle,
        winding: Winding,
    );

    /// Pushes the current transform on the state stack.
    fn save(&mut self);

    /// Pops the state stack, restoring the transform pushed by the
    /// matching `save`.
    fn restore(&mut self);

    fn translate(&mut self, by: Vector);

    fn rotate(&mut self, angle: Angle);

    fn scale(&mut self, x: f64, y: f64);

    /// Whether `ellipse` is a native primitive of this surface.
    fn supports_ellipse(&self) -> bool {
        false
    }

    /// Adds an elliptical arc.
    ///
    /// Surfaces with a native ellipse primitive override this together with
    /// `supports_ellipse`. The provided implementation emulates it using the
    /// transform stack (see [`emulate_ellipse`]).
    fn ellipse(&mut self, ellipse: &Ellipse) {
        emulate_ellipse(self, ellipse);
    }

    /// Applies the provided command.
    ///
    /// By default this calls the sink method corresponding to the command.
    fn command(&mut self, cmd: &PathCommand) {
        match *cmd {
            PathCommand::Begin => self.begin_path(),
            PathCommand::MoveTo { to } => self.move_to(to),
            PathCommand::LineTo { to } => self.line_to(to),
            PathCommand::ArcTo { ctrl, to, radius } => self.arc_to(ctrl, to, radius),
            PathCommand::Arc {
                center,
                radius,
                start_angle,
                end_angle,
                winding,
            } => self.arc(center, radius, start_angle, end_angle, winding),
            PathCommand::Ellipse(ref ellipse) => self.ellipse(ellipse),
            PathCommand::Close => self.close_path(),
            PathCommand::Save => self.save(),
            PathCommand::Restore => self.restore(),
            PathCommand::Translate { by } => self.translate(by),
            PathCommand::Rotate { angle } => self.rotate(angle),
            PathCommand::Scale { x, y } => self.scale(x, y),
        }
    }

    /// Applies commands from an iterator.
    fn extend<Cmds>(&mut self, commands: Cmds)
    where
        Cmds: IntoIterator<Item = PathCommand>,
        Self: Sized,
    {
        for cmd in commands.into_iter() {
            self.command(&cmd)
        }
    }
}

/// Draws an ellipse as a circular arc of radius `radii.x` in a rotated and
/// vertically scaled coordinate space.
///
/// The transform is saved before and restored right after the arc, so the
/// non-uniform scale never affects what the caller does next (line width in
/// particular).
pub fn emulate_ellipse<Sink: PathSink + ?Sized>(sink: &mut Sink, ellipse: &Ellipse) {
    sink.save();
    sink.translate(ellipse.center.to_vector());
    sink.rotate(ellipse.rotation);
    sink.scale(1.0, ellipse.radii.y / ellipse.radii.x);
    sink.arc(
        Point::origin(),
        ellipse.radii.x,
        ellipse.start_angle,
        ellipse.end_angle,
        ellipse.winding,
    );
    sink.restore();
}

#[test]
fn emulated_ellipse() {
    use crate::math::{point, vector};
    use crate::Recorder;

    let ellipse = Ellipse {
        center: point(10.0, 20.0),
        radii: vector(4.0, 2.0),
        rotation: Angle::radians(0.5),
        start_angle: Angle::zero(),
        end_angle: Angle::radians(3.0),
        winding: Winding::Anticlockwise,
    };

    let mut recorder = Recorder::new();
    recorder.ellipse(&ellipse);

    assert_eq!(
        recorder.commands(),
        &[
            PathCommand::Save,
            PathCommand::Translate {
                by: vector(10.0, 20.0)
            },
            PathCommand::Rotate {
                angle: Angle::radians(0.5)
            },
            PathCommand::Scale { x: 1.0, y: 0.5 },
            PathCommand::Arc {
                center: point(0.0, 0.0),
                radius: 4.0,
                start_angle: Angle::zero(),
                end_angle: Angle::radians(3.0),
                winding: Winding::Anticlockwise,
            },
            PathCommand::Restore,
        ][..]
    );
}

#[test]
fn replay_commands() {
    use crate::math::point;
    use crate::Recorder;

    let commands = vec![
        PathCommand::Begin,
        PathCommand::MoveTo {
            to: point(1.0, 1.0),
        },
        PathCommand::ArcTo {
            ctrl: point(2.0, 1.0),
            to: point(2.0, 2.0),
            radius: 1.0,
        },
        PathCommand::Close,
    ];

    let mut recorder = Recorder::new();
    recorder.extend(commands.clone());

    assert_eq!(recorder.commands(), &commands[..]);
}
