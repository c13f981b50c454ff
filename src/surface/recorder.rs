use nalgebra::Vector2;

use super::Surface;
use crate::{style::Paint, Float};

/// One element of a path under construction.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PathOp {
    MoveTo(Vector2<Float>),
    LineTo(Vector2<Float>),
    Arc {
        center: Vector2<Float>,
        radius: Float,
        start_angle: Float,
        end_angle: Float,
    },
}

/// A recorded drawing operation.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Clear {
        origin: Vector2<Float>,
        size: Vector2<Float>,
    },
    Fill {
        path: Vec<PathOp>,
        alpha: Float,
    },
    Stroke {
        path: Vec<PathOp>,
        alpha: Float,
    },
    FillStyle(Paint),
    StrokeStyle(Paint),
}

/// A stroked straight segment.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Line {
    pub from: Vector2<Float>,
    pub to: Vector2<Float>,
    pub alpha: Float,
}

#[derive(Clone, Debug)]
struct PaintState {
    alpha: Float,
    fill: Option<Paint>,
    stroke: Option<Paint>,
}

impl Default for PaintState {
    fn default() -> Self {
        Self {
            alpha: 1.,
            fill: None,
            stroke: None,
        }
    }
}

/// A surface that records what is drawn instead of rasterizing it.
///
/// Paths are captured whenever they are filled or stroked, together with
/// the global alpha in effect at that moment.
#[derive(Clone, Debug, Default)]
pub struct Recorder {
    commands: Vec<Command>,
    path: Vec<PathOp>,
    state: PaintState,
    saved: Vec<PaintState>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// Drop the recorded commands, keeping the paint state.
    pub fn take(&mut self) -> Vec<Command> {
        std::mem::take(&mut self.commands)
    }

    pub fn global_alpha(&self) -> Float {
        self.state.alpha
    }

    pub fn fill_style(&self) -> Option<&Paint> {
        self.state.fill.as_ref()
    }

    pub fn stroke_style(&self) -> Option<&Paint> {
        self.state.stroke.as_ref()
    }

    /// Every stroked path that consists of a single straight segment.
    pub fn lines(&self) -> impl Iterator<Item = Line> + '_ {
        self.commands.iter().filter_map(|cmd| match cmd {
            Command::Stroke { path, alpha } => match path[..] {
                [PathOp::MoveTo(from), PathOp::LineTo(to)] => Some(Line {
                    from,
                    to,
                    alpha: *alpha,
                }),
                _ => None,
            },
            _ => None,
        })
    }

    /// Center and radius of every filled full circle.
    pub fn circles(&self) -> impl Iterator<Item = (Vector2<Float>, Float)> + '_ {
        self.commands.iter().filter_map(|cmd| match cmd {
            Command::Fill { path, .. } => match path[..] {
                [PathOp::Arc { center, radius, .. }] => Some((center, radius)),
                _ => None,
            },
            _ => None,
        })
    }
}

impl Surface for Recorder {
    fn clear_rect(&mut self, x: Float, y: Float, width: Float, height: Float) {
        self.commands.push(Command::Clear {
            origin: Vector2::new(x, y),
            size: Vector2::new(width, height),
        });
    }

    fn begin_path(&mut self) {
        self.path.clear();
    }

    fn move_to(&mut self, x: Float, y: Float) {
        self.path.push(PathOp::MoveTo(Vector2::new(x, y)));
    }

    fn line_to(&mut self, x: Float, y: Float) {
        self.path.push(PathOp::LineTo(Vector2::new(x, y)));
    }

    fn arc(&mut self, x: Float, y: Float, radius: Float, start_angle: Float, end_angle: Float) {
        self.path.push(PathOp::Arc {
            center: Vector2::new(x, y),
            radius,
            start_angle,
            end_angle,
        });
    }

    fn fill(&mut self) {
        self.commands.push(Command::Fill {
            path: self.path.clone(),
            alpha: self.state.alpha,
        });
    }

    fn stroke(&mut self) {
        self.commands.push(Command::Stroke {
            path: self.path.clone(),
            alpha: self.state.alpha,
        });
    }

    fn save(&mut self) {
        self.saved.push(self.state.clone());
    }

    fn restore(&mut self) {
        // an unmatched restore is a no-op, as on a canvas
        if let Some(state) = self.saved.pop() {
            self.state = state;
        }
    }

    fn set_global_alpha(&mut self, alpha: Float) {
        self.state.alpha = alpha;
    }

    fn set_fill_style(&mut self, paint: &Paint) {
        self.state.fill = Some(paint.clone());
        self.commands.push(Command::FillStyle(paint.clone()));
    }

    fn set_stroke_style(&mut self, paint: &Paint) {
        self.state.stroke = Some(paint.clone());
        self.commands.push(Command::StrokeStyle(paint.clone()));
    }
}
