use crate::commands::{AngleCmd, CliError};
use canvasimo::geom::{angle_from_coords, to_degrees};

use std::io::Write;

pub fn angle(mut cmd: AngleCmd) -> Result<(), CliError> {
    let angle = angle_from_coords(&cmd.coords)?.radians;

    if cmd.degrees {
        writeln!(&mut *cmd.output, "{}", to_degrees(angle))?;
    } else {
        writeln!(&mut *cmd.output, "{}", angle)?;
    }

    Ok(())
}
