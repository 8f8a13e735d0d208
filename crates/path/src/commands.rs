//! The commands emitted by the shape generators.

use crate::math::{Angle, Point, Vector};
use crate::shapes::Ellipse;
use crate::Winding;

use std::fmt;

/// One call into a [`PathSink`](crate::PathSink).
///
/// `Begin`, `MoveTo`, `LineTo`, `ArcTo` and `Close` describe the path itself.
/// The remaining variants are the other sink capabilities the generators rely
/// on (native arcs and ellipses, and the transform stack used when emulating
/// ellipses).
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum PathCommand {
    Begin,
    MoveTo {
        to: Point,
    },
    LineTo {
        to: Point,
    },
    ArcTo {
        ctrl: Point,
        to: Point,
        radius: f64,
    },
    Arc {
        center: Point,
        radius: f64,
        start_angle: Angle,
        end_angle: Angle,
        winding: Winding,
    },
    Ellipse(Ellipse),
    Close,
    Save,
    Restore,
    Translate {
        by: Vector,
    },
    Rotate {
        angle: Angle,
    },
    Scale {
        x: f64,
        y: f64,
    },
}

impl PathCommand {
    /// The position of the end of the command, if it has one.
    pub fn to(&self) -> Option<Point> {
        match *self {
            PathCommand::MoveTo { to }
            | PathCommand::LineTo { to }
            | PathCommand::ArcTo { to, .. } => Some(to),
            _ => None,
        }
    }

    /// Whether the command affects the transform stack rather than the path.
    pub fn is_transform(&self) -> bool {
        match self {
            PathCommand::Save
            | PathCommand::Restore
            | PathCommand::Translate { .. }
            | PathCommand::Rotate { .. }
            | PathCommand::Scale { .. } => true,
            _ => false,
        }
    }
}

impl fmt::Display for PathCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathCommand::Begin => write!(f, "begin"),
            PathCommand::MoveTo { to } => write!(f, "move_to {} {}", to.x, to.y),
            PathCommand::LineTo { to } => write!(f, "line_to {} {}", to.x, to.y),
            PathCommand::ArcTo { ctrl, to, radius } => write!(
                f,
                "arc_to {} {} {} {} {}",
                ctrl.x, ctrl.y, to.x, to.y, radius
            ),
            PathCommand::Arc {
                center,
                radius,
                start_angle,
                end_angle,
                winding,
            } => write!(
                f,
                "arc {} {} {} {} {} {}",
                center.x, center.y, radius, start_angle.radians, end_angle.radians, winding
            ),
            PathCommand::Ellipse(e) => write!(
                f,
                "ellipse {} {} {} {} {} {} {} {}",
                e.center.x,
                e.center.y,
                e.radii.x,
                e.radii.y,
                e.rotation.radians,
                e.start_angle.radians,
                e.end_angle.radians,
                e.winding
            ),
            PathCommand::Close => write!(f, "close"),
            PathCommand::Save => write!(f, "save"),
            PathCommand::Restore => write!(f, "restore"),
            PathCommand::Translate { by } => write!(f, "translate {} {}", by.x, by.y),
            PathCommand::Rotate { angle } => write!(f, "rotate {}", angle.radians),
            PathCommand::Scale { x, y } => write!(f, "scale {} {}", x, y),
        }
    }
}

#[test]
fn display() {
    use crate::math::{point, vector};

    assert_eq!(PathCommand::Begin.to_string(), "begin");
    assert_eq!(
        PathCommand::MoveTo {
            to: point(10.0, 0.5)
        }
        .to_string(),
        "move_to 10 0.5"
    );
    assert_eq!(
        PathCommand::ArcTo {
            ctrl: point(100.0, 0.0),
            to: point(100.0, 25.0),
            radius: 25.0,
        }
        .to_string(),
        "arc_to 100 0 100 25 25"
    );
    assert_eq!(
        PathCommand::Arc {
            center: point(0.0, 0.0),
            radius: 2.0,
            start_angle: Angle::zero(),
            end_angle: Angle::radians(1.5),
            winding: Winding::Anticlockwise,
        }
        .to_string(),
        "arc 0 0 2 0 1.5 anticlockwise"
    );
    assert_eq!(
        PathCommand::Translate {
            by: vector(-1.0, 2.0)
        }
        .to_string(),
        "translate -1 2"
    );
    assert_eq!(PathCommand::Scale { x: 1.0, y: 0.5 }.to_string(), "scale 1 0.5");
}

#[test]
fn endpoints() {
    use crate::math::point;

    assert_eq!(PathCommand::Begin.to(), None);
    assert_eq!(PathCommand::Close.to(), None);
    assert_eq!(
        PathCommand::LineTo {
            to: point(1.0, 2.0)
        }
        .to(),
        Some(point(1.0, 2.0))
    );
    assert!(PathCommand::Save.is_transform());
    assert!(!PathCommand::Begin.is_transform());
}
