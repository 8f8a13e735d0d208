use canvasimo::geom::ArgumentCountError;
use canvasimo::path::Shape;

use std::io;

use thiserror::Error;

pub struct PlanCmd {
    pub shape: Shape,
    pub native_ellipse: bool,
    pub count: bool,
    pub output: Box<dyn io::Write>,
}

pub struct FontCmd {
    pub font: String,
    pub parts: bool,
    pub output: Box<dyn io::Write>,
}

pub struct AngleCmd {
    pub coords: Vec<f64>,
    pub degrees: bool,
    pub output: Box<dyn io::Write>,
}

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Arguments(#[from] ArgumentCountError),
    #[error("Invalid number for {name}: {value:?}")]
    InvalidNumber { name: String, value: String },
}
