extern crate canvasimo;
extern crate clap;

mod angle;
mod commands;
mod font;
mod plan;

use canvasimo::math::{point, rect, vector, Angle};
use canvasimo::path::{Burst, Circle, Ellipse, RegularPolygon, RoundedRect, Shape, Star, Winding};
use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use commands::{AngleCmd, CliError, FontCmd, PlanCmd};

use std::f64::consts::PI;
use std::fs::File;
use std::io::{self, stdout};
use std::process;

fn main() {
    env_logger::init();

    let matches = App::new("canvasimo command-line interface")
        .version("0.1")
        .author("The canvasimo developers")
        .about("Prints the path commands of canvas shapes")
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .subcommand(shape_subcommand(
            "polygon",
            "Plots a regular polygon",
            &["X", "Y", "RADIUS", "SIDES"],
        ))
        .subcommand(shape_subcommand(
            "star",
            "Plots a star",
            &["X", "Y", "RADIUS", "SIDES"],
        ))
        .subcommand(shape_subcommand(
            "burst",
            "Plots a star with explicit inner and outer radii",
            &["X", "Y", "OUTER_RADIUS", "INNER_RADIUS", "SIDES"],
        ))
        .subcommand(shape_subcommand(
            "rounded-rect",
            "Plots a rectangle with round corners",
            &["X", "Y", "WIDTH", "HEIGHT", "RADIUS"],
        ))
        .subcommand(
            shape_subcommand(
                "ellipse",
                "Plots an elliptical arc",
                &["X", "Y", "RADIUS_X", "RADIUS_Y"],
            )
            .arg(angle_arg("ROTATION", "rotation", "Rotation in radians (0 by default)"))
            .arg(angle_arg("START", "start", "Start angle in radians (0 by default)"))
            .arg(angle_arg("END", "end", "End angle in radians (2π by default)"))
            .arg(Arg::with_name("NATIVE")
                .short("n")
                .long("native")
                .help("Emits a single ellipse command instead of the emulation")
            ),
        )
        .subcommand(shape_subcommand(
            "circle",
            "Plots a circle",
            &["X", "Y", "RADIUS"],
        ))
        .subcommand(SubCommand::with_name("font")
            .about("Formats a font shorthand")
            .arg(Arg::with_name("FONT")
                .help("A font shorthand, for example \"bold 12px serif\"")
                .multiple(true)
                .allow_hyphen_values(true)
            )
            .arg(Arg::with_name("PARTS")
                .short("p")
                .long("parts")
                .help("Prints each part of the font on its own line")
            )
        )
        .subcommand(SubCommand::with_name("angle")
            .about("Computes the angle of a ray (4 coordinates) or at a vertex (6 coordinates)")
            .arg(Arg::with_name("COORDS")
                .help("x1 y1 x2 y2 [x3 y3]")
                .multiple(true)
                .required(true)
                .allow_hyphen_values(true)
            )
            .arg(Arg::with_name("DEGREES")
                .short("d")
                .long("degrees")
                .help("Prints the angle in degrees")
            )
        )
        .arg(Arg::with_name("OUTPUT")
            .help("Sets the output file to use")
            .value_name("FILE")
            .short("o")
            .long("output")
            .takes_value(true)
            .required(false)
        )
        .get_matches();

    if let Err(e) = run(&matches) {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}

fn run(matches: &ArgMatches) -> Result<(), CliError> {
    let output: Box<dyn io::Write> = match matches.value_of("OUTPUT") {
        Some(output_file) => Box::new(File::create(output_file)?),
        None => Box::new(stdout()),
    };

    match matches.subcommand() {
        ("font", Some(font_matches)) => {
            let font = font_matches
                .values_of("FONT")
                .map(|values| values.collect::<Vec<_>>().join(" "))
                .unwrap_or_default();

            font::font(FontCmd {
                font,
                parts: font_matches.is_present("PARTS"),
                output,
            })
        }
        ("angle", Some(angle_matches)) => {
            let coords = angle_matches
                .values_of("COORDS")
                .into_iter()
                .flatten()
                .map(|value| parse_number("COORDS", value))
                .collect::<Result<Vec<f64>, CliError>>()?;

            angle::angle(AngleCmd {
                coords,
                degrees: angle_matches.is_present("DEGREES"),
                output,
            })
        }
        (name, Some(shape_matches)) => {
            let shape = get_shape(name, shape_matches)?;
            plan::plan(PlanCmd {
                shape,
                native_ellipse: shape_matches.is_present("NATIVE"),
                count: shape_matches.is_present("COUNT"),
                output,
            })
        }
        _ => Ok(()),
    }
}

fn shape_subcommand<'a, 'b>(
    name: &'a str,
    about: &'b str,
    params: &[&'a str],
) -> App<'a, 'b> {
    let mut cmd = SubCommand::with_name(name)
        .about(about)
        .arg(Arg::with_name("ANTICLOCKWISE")
            .short("a")
            .long("anticlockwise")
            .help("Emits the vertices anticlockwise")
        )
        .arg(Arg::with_name("COUNT")
            .short("c")
            .long("count")
            .help("Prints the number of commands instead of the commands")
        );

    for (idx, param) in params.iter().enumerate() {
        cmd = cmd.arg(Arg::with_name(param)
            .index(idx as u64 + 1)
            .required(true)
            .allow_hyphen_values(true)
        );
    }

    cmd
}

fn angle_arg<'a, 'b>(name: &'a str, long: &'b str, help: &'b str) -> Arg<'a, 'b> {
    Arg::with_name(name)
        .long(long)
        .help(help)
        .value_name("RADIANS")
        .takes_value(true)
        .allow_hyphen_values(true)
}

fn parse_number(name: &str, value: &str) -> Result<f64, CliError> {
    value.parse().map_err(|_| CliError::InvalidNumber {
        name: name.to_string(),
        value: value.to_string(),
    })
}

fn get_number(matches: &ArgMatches, name: &str) -> Result<f64, CliError> {
    parse_number(name, matches.value_of(name).unwrap_or(""))
}

fn get_angle(matches: &ArgMatches, name: &str, default: f64) -> Result<Angle, CliError> {
    let radians = match matches.value_of(name) {
        Some(value) => parse_number(name, value)?,
        None => default,
    };

    Ok(Angle::radians(radians))
}

fn get_shape(name: &str, matches: &ArgMatches) -> Result<Shape, CliError> {
    let num = |param: &str| get_number(matches, param);
    let winding = Winding::from_anticlockwise(matches.is_present("ANTICLOCKWISE"));
    let center = || -> Result<_, CliError> { Ok(point(num("X")?, num("Y")?)) };

    let shape = match name {
        "polygon" => Shape::RegularPolygon(RegularPolygon {
            center: center()?,
            radius: num("RADIUS")?,
            sides: num("SIDES")?,
            winding,
        }),
        "star" => Shape::Star(Star {
            center: center()?,
            radius: num("RADIUS")?,
            sides: num("SIDES")?,
            winding,
        }),
        "burst" => Shape::Burst(Burst {
            center: center()?,
            outer_radius: num("OUTER_RADIUS")?,
            inner_radius: num("INNER_RADIUS")?,
            sides: num("SIDES")?,
            winding,
        }),
        "rounded-rect" => Shape::RoundedRect(RoundedRect {
            rect: rect(num("X")?, num("Y")?, num("WIDTH")?, num("HEIGHT")?),
            radius: num("RADIUS")?,
        }),
        "ellipse" => Shape::Ellipse(Ellipse {
            center: center()?,
            radii: vector(num("RADIUS_X")?, num("RADIUS_Y")?),
            rotation: get_angle(matches, "ROTATION", 0.0)?,
            start_angle: get_angle(matches, "START", 0.0)?,
            end_angle: get_angle(matches, "END", PI * 2.0)?,
            winding,
        }),
        "circle" => Shape::Circle(Circle {
            center: center()?,
            radius: num("RADIUS")?,
            winding,
        }),
        _ => unreachable!("unknown subcommand {}", name),
    };

    Ok(shape)
}
