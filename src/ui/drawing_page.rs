use super::helpers::{body, clear_box, hbox, heading, on_click, outline_button, swatch_button, vbox};
use super::page::{Page, PageContext};
use crate::content::drawing::{BRUSH_SIZES, PALETTE};
use crate::events::EventHandler;
use crate::game::drawing::{parse_hex_color, DrawingBoard, DrawingCommand, Point};
use crate::game::profile::address_player;
use crate::model::GameId;
use directories::{ProjectDirs, UserDirs};
use gtk4::cairo::{self, Context, LineCap, LineJoin};
use gtk4::prelude::*;
use gtk4::{DrawingArea, Frame, GestureDrag};
use log::warn;
use std::cell::RefCell;
use std::f64::consts::TAU;
use std::path::PathBuf;
use std::rc::Rc;

pub struct DrawingPage {
    root: gtk4::Box,
    toolbar: gtk4::Box,
    area: DrawingArea,
    ctx: PageContext,
    engine: DrawingBoard,
}

/// The user's pictures folder, or a `drawings` folder in the app data directory.
fn export_dir() -> Option<PathBuf> {
    UserDirs::new()
        .and_then(|dirs| dirs.picture_dir().map(|dir| dir.to_path_buf()))
        .or_else(|| {
            ProjectDirs::from("org", "enissa", "enissa")
                .map(|dirs| dirs.data_dir().join("drawings"))
        })
}

fn paint(cr: &Context, board: &DrawingBoard) -> Result<(), cairo::Error> {
    cr.set_source_rgb(1.0, 1.0, 1.0);
    cr.paint()?;
    cr.set_line_cap(LineCap::Round);
    cr.set_line_join(LineJoin::Round);

    for stroke in board.strokes() {
        let Ok(color) = parse_hex_color(stroke.color.hex) else {
            continue;
        };
        let [r, g, b, _] = color.0;
        cr.set_source_rgb(
            f64::from(r) / 255.0,
            f64::from(g) / 255.0,
            f64::from(b) / 255.0,
        );
        let radius = f64::from(stroke.radius);
        match stroke.points.as_slice() {
            [] => {}
            [point] => {
                cr.arc(point.x, point.y, radius, 0.0, TAU);
                cr.fill()?;
            }
            [first, rest @ ..] => {
                cr.set_line_width(radius * 2.0);
                cr.move_to(first.x, first.y);
                for point in rest {
                    cr.line_to(point.x, point.y);
                }
                cr.stroke()?;
            }
        }
    }
    Ok(())
}

impl DrawingPage {
    pub fn new(ctx: PageContext) -> Rc<RefCell<Self>> {
        let engine = DrawingBoard::new(ctx.game_events.clone());
        let canvas = engine.canvas();
        let area = DrawingArea::builder()
            .content_width(canvas.width as i32)
            .content_height(canvas.height as i32)
            .build();
        let page = Rc::new(RefCell::new(Self {
            root: vbox(12),
            toolbar: vbox(8),
            area,
            ctx,
            engine,
        }));
        Self::build(&page);
        page
    }

    fn build(page: &Rc<RefCell<Self>>) {
        let this = page.borrow();
        this.root.append(&heading(&format!("🎨 {}", GameId::Draw.title())));
        let name = this.ctx.player_name();
        this.root.append(&body(&address_player(
            name.as_ref(),
            "Male, was dir gefällt!",
        )));
        this.root.append(&this.toolbar);

        let weak = Rc::downgrade(page);
        this.area.set_draw_func(move |_, cr, _, _| {
            let Some(page) = weak.upgrade() else {
                return;
            };
            if let Err(err) = paint(cr, &page.borrow().engine) {
                warn!(target: "drawing_page", "Could not paint canvas: {}", err);
            }
        });

        let drag = GestureDrag::new();
        let weak = Rc::downgrade(page);
        drag.connect_drag_begin(move |_, x, y| {
            if let Some(page) = weak.upgrade() {
                Self::dispatch(&page, DrawingCommand::BeginStroke(Point { x, y }));
            }
        });
        let weak = Rc::downgrade(page);
        drag.connect_drag_update(move |gesture, dx, dy| {
            let (Some(page), Some((x, y))) = (weak.upgrade(), gesture.start_point()) else {
                return;
            };
            Self::dispatch(
                &page,
                DrawingCommand::ExtendStroke(Point {
                    x: x + dx,
                    y: y + dy,
                }),
            );
        });
        let weak = Rc::downgrade(page);
        drag.connect_drag_end(move |_, _, _| {
            if let Some(page) = weak.upgrade() {
                Self::dispatch(&page, DrawingCommand::EndStroke);
            }
        });
        this.area.add_controller(drag);

        this.root.append(
            &Frame::builder()
                .child(&this.area)
                .halign(gtk4::Align::Center)
                .build(),
        );
        drop(this);
        Self::render_toolbar(page);
    }

    fn dispatch(page: &Rc<RefCell<Self>>, command: DrawingCommand) {
        page.borrow_mut().engine.handle_event(&command);
        let this = page.borrow();
        let canvas = this.engine.canvas();
        this.area.set_content_width(canvas.width as i32);
        this.area.set_content_height(canvas.height as i32);
        this.area.queue_draw();
        drop(this);
        if !matches!(
            command,
            DrawingCommand::BeginStroke(_) | DrawingCommand::ExtendStroke(_)
        ) {
            Self::render_toolbar(page);
        }
    }

    fn save(page: &Rc<RefCell<Self>>) {
        let this = page.borrow();
        match export_dir() {
            Some(dir) => {
                this.engine.save(&dir);
            }
            None => warn!(target: "drawing_page", "No directory to save drawings in"),
        }
    }

    fn render_toolbar(page: &Rc<RefCell<Self>>) {
        let this = page.borrow();
        let toolbar = &this.toolbar;
        clear_box(toolbar);

        let colors = hbox(6);
        for (index, color) in PALETTE.iter().enumerate() {
            let selected = this.engine.color() == color;
            let button = swatch_button(color.hex, if selected { "✓" } else { " " }, 2);
            button.set_tooltip_text(Some(color.name));
            on_click(&button, page, move |page| {
                Self::dispatch(page, DrawingCommand::SelectColor(index))
            });
            colors.append(&button);
        }
        toolbar.append(&colors);

        let brushes = hbox(6);
        for (index, brush) in BRUSH_SIZES.iter().enumerate() {
            let button = outline_button(&format!("{} {}", brush.emoji, brush.name));
            if this.engine.brush() == brush {
                button.add_css_class("suggested-action");
            }
            on_click(&button, page, move |page| {
                Self::dispatch(page, DrawingCommand::SelectBrush(index))
            });
            brushes.append(&button);
        }
        toolbar.append(&brushes);

        let actions = hbox(6);
        let undo = outline_button("↩️ Rückgängig");
        undo.set_sensitive(this.engine.can_undo());
        on_click(&undo, page, |page| Self::dispatch(page, DrawingCommand::Undo));
        actions.append(&undo);
        let redo = outline_button("↪️ Wiederholen");
        redo.set_sensitive(this.engine.can_redo());
        on_click(&redo, page, |page| Self::dispatch(page, DrawingCommand::Redo));
        actions.append(&redo);
        let clear = outline_button("🧹 Alles löschen");
        on_click(&clear, page, |page| Self::dispatch(page, DrawingCommand::Clear));
        actions.append(&clear);
        let save = outline_button("💾 Speichern");
        on_click(&save, page, |page| Self::save(page));
        actions.append(&save);
        toolbar.append(&actions);
    }

    /// Fits the canvas to the window the page is shown in.
    fn fit_to_window(page: &Rc<RefCell<Self>>) {
        let Some(window) = page
            .borrow()
            .root
            .root()
            .and_then(|root| root.downcast::<gtk4::Window>().ok())
        else {
            return;
        };
        let (width, height) = (window.width(), window.height());
        if width <= 0 || height <= 0 {
            return;
        }
        Self::dispatch(
            page,
            DrawingCommand::Resize {
                container_width: width as u32,
                window_height: height as u32,
            },
        );
    }
}

impl Page for Rc<RefCell<DrawingPage>> {
    fn widget(&self) -> gtk4::Widget {
        self.borrow().root.clone().upcast()
    }

    fn enter(&self) {
        DrawingPage::fit_to_window(self);
    }

    fn leave(&self) {
        let mut page = self.borrow_mut();
        let emitter = page.ctx.game_events.clone();
        page.engine = DrawingBoard::new(emitter);
        page.area.queue_draw();
    }
}
