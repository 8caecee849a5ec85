use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use eframe::egui;
use tracing::{info, warn};

use escapetime_core::{RenderParams, ScrollDirection, Viewport};
use escapetime_render::{render_frame, snapshot, IntensityFrame};

/// The interactive viewer: owns the viewport state, re-renders when the
/// view changes, and draws the frame as a full-window texture.
///
/// Everything is single-threaded inside `update()`: input handling runs
/// before the frame render, so a scroll event is always fully applied
/// before the next frame's pixel mapping starts.
pub struct EscapetimeApp {
    params: RenderParams,
    viewport: Viewport,

    /// Current panel size in pixels; re-checked every frame.
    panel_size: [u32; 2],

    texture: Option<egui::TextureHandle>,
    current_frame: Option<IntensityFrame>,
    needs_render: bool,
}

impl EscapetimeApp {
    pub fn new(params: RenderParams) -> Self {
        Self {
            params,
            viewport: Viewport::default(),
            panel_size: [0, 0],
            texture: None,
            current_frame: None,
            needs_render: true,
        }
    }

    fn check_resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 && (width != self.panel_size[0] || height != self.panel_size[1])
        {
            self.panel_size = [width, height];
            self.needs_render = true;
        }
    }

    // -- Input handling --------------------------------------------------------

    fn handle_scroll(&mut self, ctx: &egui::Context, response: &egui::Response) {
        let scroll_y = ctx.input(|i| i.raw_scroll_delta.y);
        if scroll_y.abs() > 0.0 && response.hovered() {
            if let Some(pos) = response.hover_pos() {
                let cursor_x = (pos.x - response.rect.min.x) as f64;
                let cursor_y = (pos.y - response.rect.min.y) as f64;
                let direction = if scroll_y > 0.0 {
                    ScrollDirection::In
                } else {
                    ScrollDirection::Out
                };
                self.viewport.scroll(
                    direction,
                    cursor_x,
                    cursor_y,
                    self.panel_size[0],
                    self.panel_size[1],
                );
                self.needs_render = true;
            }
        }
    }

    fn handle_keyboard(&mut self, ctx: &egui::Context) {
        let [w, h] = self.panel_size;
        let (center_x, center_y) = (w as f64 / 2.0, h as f64 / 2.0);

        ctx.input(|input| {
            // +/- : zoom at the window centre.
            if input.key_pressed(egui::Key::Plus) || input.key_pressed(egui::Key::Equals) {
                self.viewport
                    .scroll(ScrollDirection::In, center_x, center_y, w, h);
                self.needs_render = true;
            }
            if input.key_pressed(egui::Key::Minus) {
                self.viewport
                    .scroll(ScrollDirection::Out, center_x, center_y, w, h);
                self.needs_render = true;
            }

            // R: reset view.
            if input.key_pressed(egui::Key::R) {
                self.viewport.reset();
                self.needs_render = true;
            }

            // S: save a PNG snapshot of the current frame.
            if input.key_pressed(egui::Key::S) {
                self.save_snapshot();
            }
        });
    }

    // -- Rendering -------------------------------------------------------------

    fn render_if_needed(&mut self, ctx: &egui::Context) {
        if !self.needs_render {
            return;
        }
        let [width, height] = self.panel_size;
        if width == 0 || height == 0 {
            return;
        }

        match render_frame(&self.params, &self.viewport, width, height) {
            Ok(frame) => {
                let image = egui::ColorImage::from_rgba_unmultiplied(
                    [width as usize, height as usize],
                    &frame.to_grayscale_rgba(),
                );
                self.texture =
                    Some(ctx.load_texture("fractal", image, egui::TextureOptions::NEAREST));
                self.current_frame = Some(frame);
            }
            Err(err) => warn!(%err, "frame render failed"),
        }
        self.needs_render = false;
    }

    fn save_snapshot(&self) {
        let Some(ref frame) = self.current_frame else {
            return;
        };
        let path = snapshot_path(self.params.kind.label(), frame.width, frame.height);
        match snapshot::save_png(frame, &path) {
            Ok(()) => info!(path = %path.display(), "snapshot saved"),
            Err(err) => warn!(%err, "snapshot failed"),
        }
    }
}

/// Timestamped snapshot filename in the current directory.
fn snapshot_path(mode: &str, width: u32, height: u32) -> PathBuf {
    let stamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    PathBuf::from(format!(
        "escapetime-{}-{}x{}-{}.png",
        mode.to_lowercase(),
        width,
        height,
        stamp
    ))
}

impl eframe::App for EscapetimeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::hover());

                // Fresh dimensions every frame; a resize triggers a re-render.
                self.check_resize(rect.width() as u32, rect.height() as u32);

                // Input first, render second: viewport mutations are fully
                // applied before the frame's pixel mapping begins.
                self.handle_scroll(ctx, &response);
                self.handle_keyboard(ctx);
                self.render_if_needed(ctx);

                if let Some(ref texture) = self.texture {
                    let uv = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
                    ui.painter()
                        .image(texture.id(), rect, uv, egui::Color32::WHITE);
                }
            });
    }
}
