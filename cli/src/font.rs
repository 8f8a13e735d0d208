use crate::commands::{CliError, FontCmd};
use canvasimo::font::{format_font, FontParts};

use std::io::Write;

pub fn font(mut cmd: FontCmd) -> Result<(), CliError> {
    let font = format_font(&cmd.font);

    if !cmd.parts {
        writeln!(&mut *cmd.output, "{}", font)?;
        return Ok(());
    }

    // The formatted font always has five parts.
    let parts = FontParts::parse(&font).unwrap_or_default();
    writeln!(&mut *cmd.output, "style: {}", parts.style)?;
    writeln!(&mut *cmd.output, "variant: {}", parts.variant)?;
    writeln!(&mut *cmd.output, "weight: {}", parts.weight)?;
    writeln!(&mut *cmd.output, "size: {}", parts.size)?;
    writeln!(&mut *cmd.output, "family: {}", parts.family)?;

    Ok(())
}
