use crate::content::drawing::{BrushSize, PaletteColor, BRUSH_SIZES, PALETTE};
use crate::events::{EventEmitter, EventHandler};
use crate::model::{GameEvent, GameId, Notification};
use chrono::Utc;
use image::{Rgba, RgbaImage};
use itertools::Itertools;
use log::{error, info, trace};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_CANVAS: CanvasSize = CanvasSize {
    width: 800,
    height: 600,
};
const CANVAS_PADDING: u32 = 32;
const SIDEBAR_HEIGHT: u32 = 300;
const DEFAULT_COLOR: usize = 0;
const DEFAULT_BRUSH: usize = 1;
const BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);

#[derive(Debug, Error)]
pub enum DrawingError {
    #[error("not a colour: {0}")]
    InvalidColor(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Image(#[from] image::ImageError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

/// Largest canvas that fits the container width and leaves room for the toolbar.
pub fn fit_canvas(container_width: u32, window_height: u32) -> CanvasSize {
    CanvasSize {
        width: container_width
            .saturating_sub(CANVAS_PADDING)
            .min(DEFAULT_CANVAS.width)
            .max(1),
        height: window_height
            .saturating_sub(SIDEBAR_HEIGHT)
            .min(DEFAULT_CANVAS.height)
            .max(1),
    }
}

pub fn export_file_name(unix_millis: i64) -> String {
    format!("enissa-zeichnung-{}.png", unix_millis)
}

pub fn parse_hex_color(hex: &str) -> Result<Rgba<u8>, DrawingError> {
    let invalid = || DrawingError::InvalidColor(hex.to_string());
    let digits = hex.strip_prefix('#').ok_or_else(invalid)?;
    if digits.len() != 6 || !digits.is_ascii() {
        return Err(invalid());
    }
    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16).map_err(|_| invalid())
    };
    Ok(Rgba([channel(0..2)?, channel(2..4)?, channel(4..6)?, 255]))
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    pub color: &'static PaletteColor,
    pub radius: u32,
    pub points: Vec<Point>,
}

impl Stroke {
    fn render(&self, image: &mut RgbaImage) -> Result<(), DrawingError> {
        let color = parse_hex_color(self.color.hex)?;
        let radius = self.radius as f64;
        let step = (radius / 2.0).max(1.0);

        if let Some(&only) = self.points.first() {
            stamp(image, only, radius, color);
        }
        for (from, to) in self.points.iter().tuple_windows() {
            let distance = ((to.x - from.x).powi(2) + (to.y - from.y).powi(2)).sqrt();
            let steps = (distance / step).ceil().max(1.0) as usize;
            for i in 1..=steps {
                let t = i as f64 / steps as f64;
                let point = Point {
                    x: from.x + (to.x - from.x) * t,
                    y: from.y + (to.y - from.y) * t,
                };
                stamp(image, point, radius, color);
            }
        }
        Ok(())
    }
}

fn stamp(image: &mut RgbaImage, centre: Point, radius: f64, color: Rgba<u8>) {
    let (width, height) = image.dimensions();
    let min_x = (centre.x - radius).floor().max(0.0) as u32;
    let min_y = (centre.y - radius).floor().max(0.0) as u32;
    let max_x = ((centre.x + radius).ceil().max(0.0) as u32).min(width.saturating_sub(1));
    let max_y = ((centre.y + radius).ceil().max(0.0) as u32).min(height.saturating_sub(1));
    for (x, y) in (min_x..=max_x).cartesian_product(min_y..=max_y) {
        let (dx, dy) = (x as f64 - centre.x, y as f64 - centre.y);
        if dx * dx + dy * dy <= radius * radius {
            image.put_pixel(x, y, color);
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawingCommand {
    BeginStroke(Point),
    ExtendStroke(Point),
    EndStroke,
    Undo,
    Redo,
    Clear,
    SelectColor(usize),
    SelectBrush(usize),
    Resize {
        container_width: u32,
        window_height: u32,
    },
}

/// Free-play canvas; strokes live until cleared and are never scored.
pub struct DrawingBoard {
    emitter: EventEmitter<GameEvent>,
    canvas: CanvasSize,
    color: &'static PaletteColor,
    brush: &'static BrushSize,
    strokes: Vec<Stroke>,
    redo: Vec<Stroke>,
    current: Option<Stroke>,
}

impl DrawingBoard {
    pub fn new(emitter: EventEmitter<GameEvent>) -> Self {
        Self {
            emitter,
            canvas: DEFAULT_CANVAS,
            color: &PALETTE[DEFAULT_COLOR],
            brush: &BRUSH_SIZES[DEFAULT_BRUSH],
            strokes: Vec::new(),
            redo: Vec::new(),
            current: None,
        }
    }

    pub fn canvas(&self) -> CanvasSize {
        self.canvas
    }

    pub fn color(&self) -> &'static PaletteColor {
        self.color
    }

    pub fn brush(&self) -> &'static BrushSize {
        self.brush
    }

    /// Finished strokes followed by the one being drawn.
    pub fn strokes(&self) -> impl Iterator<Item = &Stroke> {
        self.strokes.iter().chain(self.current.iter())
    }

    pub fn can_undo(&self) -> bool {
        !self.strokes.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    fn notify(&self, notification: Notification) {
        self.emitter.emit(GameEvent::Notify(notification));
    }

    fn updated(&self) {
        self.emitter.emit(GameEvent::Updated(GameId::Draw));
    }

    fn end_stroke(&mut self) {
        if let Some(stroke) = self.current.take() {
            trace!(target: "drawing", "Stroke with {} points", stroke.points.len());
            self.strokes.push(stroke);
            self.redo.clear();
            self.updated();
        }
    }

    pub fn render(&self) -> Result<RgbaImage, DrawingError> {
        let mut image = RgbaImage::from_pixel(self.canvas.width, self.canvas.height, BACKGROUND);
        for stroke in self.strokes() {
            stroke.render(&mut image)?;
        }
        Ok(image)
    }

    pub fn export_png(&self, dir: &Path, unix_millis: i64) -> Result<PathBuf, DrawingError> {
        std::fs::create_dir_all(dir)?;
        let path = dir.join(export_file_name(unix_millis));
        self.render()?.save(&path)?;
        info!(target: "drawing", "Saved drawing to {}", path.display());
        Ok(path)
    }

    /// Exports with the current time and reports the outcome as a notification.
    pub fn save(&self, dir: &Path) -> Option<PathBuf> {
        match self.export_png(dir, Utc::now().timestamp_millis()) {
            Ok(path) => {
                self.notify(Notification::success("Bild gespeichert! 🎨"));
                Some(path)
            }
            Err(err) => {
                error!(target: "drawing", "Failed to save drawing: {}", err);
                self.notify(
                    Notification::error("Bild konnte nicht gespeichert werden 😕")
                        .with_description(err.to_string()),
                );
                None
            }
        }
    }
}

impl EventHandler<DrawingCommand> for DrawingBoard {
    fn handle_event(&mut self, event: &DrawingCommand) {
        match event {
            DrawingCommand::BeginStroke(point) => {
                self.end_stroke();
                self.current = Some(Stroke {
                    color: self.color,
                    radius: self.brush.radius,
                    points: vec![*point],
                });
                self.updated();
            }
            DrawingCommand::ExtendStroke(point) => {
                if let Some(stroke) = self.current.as_mut() {
                    stroke.points.push(*point);
                    self.updated();
                }
            }
            DrawingCommand::EndStroke => self.end_stroke(),
            DrawingCommand::Undo => {
                if let Some(stroke) = self.strokes.pop() {
                    self.redo.push(stroke);
                    self.notify(Notification::info("Rückgängig"));
                    self.updated();
                }
            }
            DrawingCommand::Redo => {
                if let Some(stroke) = self.redo.pop() {
                    self.strokes.push(stroke);
                    self.updated();
                }
            }
            DrawingCommand::Clear => {
                self.strokes.clear();
                self.redo.clear();
                self.current = None;
                self.notify(Notification::success("Alles gelöscht! 🧹"));
                self.updated();
            }
            DrawingCommand::SelectColor(index) => {
                if let Some(color) = PALETTE.get(*index) {
                    self.color = color;
                    self.notify(Notification::success(format!("{} gewählt! 🎨", color.name)));
                    self.updated();
                }
            }
            DrawingCommand::SelectBrush(index) => {
                if let Some(brush) = BRUSH_SIZES.get(*index) {
                    self.brush = brush;
                    self.notify(Notification::success(format!("{} {}", brush.name, brush.emoji)));
                    self.updated();
                }
            }
            DrawingCommand::Resize {
                container_width,
                window_height,
            } => {
                self.canvas = fit_canvas(*container_width, *window_height);
                self.updated();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::Channel;

    fn board() -> DrawingBoard {
        let (emitter, _observer) = Channel::<GameEvent>::new();
        DrawingBoard::new(emitter)
    }

    fn draw_line(board: &mut DrawingBoard, from: (f64, f64), to: (f64, f64)) {
        board.handle_event(&DrawingCommand::BeginStroke(Point {
            x: from.0,
            y: from.1,
        }));
        board.handle_event(&DrawingCommand::ExtendStroke(Point { x: to.0, y: to.1 }));
        board.handle_event(&DrawingCommand::EndStroke);
    }

    #[test]
    fn test_defaults() {
        let board = board();
        assert_eq!(board.color().hex, "#2196F3");
        assert_eq!(board.brush().radius, 4);
        assert_eq!(board.canvas(), DEFAULT_CANVAS);
    }

    #[test]
    fn test_undo_redo_and_clear() {
        let mut board = board();
        draw_line(&mut board, (10.0, 10.0), (50.0, 10.0));
        draw_line(&mut board, (10.0, 30.0), (50.0, 30.0));
        assert_eq!(board.strokes().count(), 2);

        board.handle_event(&DrawingCommand::Undo);
        assert_eq!(board.strokes().count(), 1);
        assert!(board.can_redo());

        board.handle_event(&DrawingCommand::Redo);
        assert_eq!(board.strokes().count(), 2);

        board.handle_event(&DrawingCommand::Undo);
        draw_line(&mut board, (0.0, 0.0), (1.0, 1.0));
        assert!(!board.can_redo());

        board.handle_event(&DrawingCommand::Clear);
        assert_eq!(board.strokes().count(), 0);
        assert!(!board.can_undo());
    }

    #[test]
    fn test_fit_canvas() {
        assert_eq!(
            fit_canvas(2000, 1200),
            CanvasSize {
                width: 800,
                height: 600
            }
        );
        assert_eq!(
            fit_canvas(432, 700),
            CanvasSize {
                width: 400,
                height: 400
            }
        );
        assert_eq!(fit_canvas(0, 0), CanvasSize { width: 1, height: 1 });
    }

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#FF9800").unwrap(), Rgba([255, 152, 0, 255]));
        assert!(parse_hex_color("FF9800").is_err());
        assert!(parse_hex_color("#FF98").is_err());
        assert!(parse_hex_color("#GG9800").is_err());
    }

    #[test]
    fn test_render_paints_stroke_pixels() {
        let mut board = board();
        board.handle_event(&DrawingCommand::SelectColor(7));
        draw_line(&mut board, (10.0, 10.0), (100.0, 10.0));
        let image = board.render().unwrap();

        assert_eq!(image.dimensions(), (800, 600));
        assert_eq!(*image.get_pixel(55, 10), Rgba([0, 0, 0, 255]));
        assert_eq!(*image.get_pixel(55, 40), BACKGROUND);
    }

    #[test]
    fn test_export_png_writes_named_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut board = board();
        board.handle_event(&DrawingCommand::Resize {
            container_width: 132,
            window_height: 400,
        });
        draw_line(&mut board, (5.0, 5.0), (60.0, 60.0));

        let path = board.export_png(dir.path(), 1_700_000_000_000).unwrap();
        assert_eq!(
            path.file_name().unwrap().to_str().unwrap(),
            "enissa-zeichnung-1700000000000.png"
        );
        let image = image::open(&path).unwrap();
        assert_eq!((image.width(), image.height()), (100, 100));
    }
}
