use crate::commands::{CliError, PlanCmd};
use canvasimo::path::{PathCommand, Recorder};

use std::io::Write;

pub fn plan(mut cmd: PlanCmd) -> Result<(), CliError> {
    let mut recorder = if cmd.native_ellipse {
        Recorder::with_native_ellipse()
    } else {
        Recorder::new()
    };

    cmd.shape.emit(&mut recorder);
    log::debug!("{:?} -> {} commands", cmd.shape, recorder.len());

    if cmd.count {
        let mut num_lines = 0;
        let mut num_arcs = 0;
        for command in &recorder {
            match command {
                PathCommand::LineTo { .. } => num_lines += 1,
                PathCommand::ArcTo { .. } | PathCommand::Arc { .. } | PathCommand::Ellipse(..) => {
                    num_arcs += 1
                }
                _ => {}
            }
        }

        writeln!(&mut *cmd.output, "commands: {}", recorder.len())?;
        writeln!(&mut *cmd.output, "lines: {}", num_lines)?;
        writeln!(&mut *cmd.output, "arcs: {}", num_arcs)?;

        return Ok(());
    }

    for command in &recorder {
        writeln!(&mut *cmd.output, "{}", command)?;
    }

    Ok(())
}
