// ui.rs - Controls and grid drawing for the Wireworld window

use eframe::egui;
use egui::{Color32, Rect, Stroke, Vec2};
use std::time::{Duration, Instant};

use wireworld::patterns::PATTERNS;
use wireworld::{Cell, Pos};

use crate::{WireworldApp, WireworldInterface};

const MAX_GRID_PIXELS: f32 = 800.0;
const SPACING: f32 = 0.5;

impl eframe::App for WireworldApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }

        // Auto-update if running
        if self.is_running && self.last_update.elapsed() >= self.update_interval {
            self.update_generation();
            self.last_update = Instant::now();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Wireworld");

            // Controls
            ui.horizontal(|ui| {
                let button_text = if self.is_running { "⏸ Pause" } else { "▶ Start" };
                if ui.button(button_text).clicked() {
                    self.is_running = !self.is_running;
                    if self.is_running {
                        self.last_update = Instant::now();
                    }
                }

                if ui.add_enabled(!self.is_running, egui::Button::new("⏭ Step")).clicked() {
                    self.update_generation();
                }

                if ui.button("⏹ Clear").clicked() {
                    self.is_running = false;
                    self.clear_grid();
                }

                if ui.button("🎲 Random").clicked() {
                    self.is_running = false;
                    self.apply_random_pattern();
                }

                ui.separator();

                ui.label("Pattern:");
                egui::ComboBox::from_id_source("pattern_selector")
                    .selected_text(PATTERNS[self.selected_pattern].name)
                    .show_ui(ui, |ui| {
                        for (i, pattern) in PATTERNS.iter().enumerate() {
                            ui.selectable_value(&mut self.selected_pattern, i, pattern.name);
                        }
                    });

                if ui.button("Apply Pattern").clicked() {
                    self.is_running = false;
                    self.apply_selected_pattern();
                }

                ui.separator();

                ui.label(format!("Generation: {}", self.generation()));
            });

            ui.separator();

            ui.horizontal(|ui| {
                ui.label("Speed:");
                let mut speed = 1000.0 / self.update_interval.as_millis().max(1) as f32;
                if ui.add(egui::Slider::new(&mut speed, 0.5..=30.0).suffix(" gen/sec")).changed() {
                    self.update_interval = Duration::from_millis((1000.0 / speed) as u64);
                }
            });

            ui.horizontal(|ui| {
                for cell in Cell::ALL {
                    ui.label(format!("{}:", cell.name()));
                    ui.color_edit_button_srgba(&mut self.colors[cell as usize]);
                }
            });

            ui.horizontal(|ui| {
                ui.label("Brush:");
                for cell in Cell::ALL {
                    ui.selectable_value(&mut self.brush, cell, cell.name());
                }
            });

            ui.separator();

            ui.label("Click or drag on the grid while paused to paint cells. ESC closes the window.");
            if self.anomalies > 0 {
                ui.colored_label(
                    Color32::RED,
                    format!("Stopped: {} unexpected cell(s) in the grid", self.anomalies),
                );
            }

            ui.separator();

            let rows = self.grid().rows();
            let cols = self.grid().cols();
            let box_size = (MAX_GRID_PIXELS / rows.max(cols) as f32 - SPACING).clamp(3.0, 20.0);
            let pitch = box_size + SPACING;

            let start_pos = ui.cursor().min;
            let total_size = Vec2::new(pitch * cols as f32 - SPACING, pitch * rows as f32 - SPACING);

            let (response, painter) = ui.allocate_painter(total_size, egui::Sense::click_and_drag());

            painter.rect_filled(Rect::from_min_size(start_pos, total_size), 0.0, Color32::from_gray(20));

            for (row, symbols) in self.grid().rows_iter().enumerate() {
                for (col, &symbol) in symbols.iter().enumerate() {
                    let x = start_pos.x + col as f32 * pitch;
                    let y = start_pos.y + row as f32 * pitch;
                    let rect = Rect::from_min_size(egui::pos2(x, y), Vec2::splat(box_size));

                    painter.rect_filled(rect, 1.0, self.color_of(symbol));
                    painter.rect_stroke(rect, 1.0, Stroke::new(0.2, Color32::from_gray(60)));
                }
            }

            // Painting (only when paused)
            if !self.is_running && (response.clicked() || response.dragged()) {
                if let Some(pointer) = response.interact_pointer_pos() {
                    let local = pointer - start_pos;
                    if local.x >= 0.0 && local.y >= 0.0 {
                        let pos = Pos::new((local.y / pitch) as usize, (local.x / pitch) as usize);
                        self.paint_cell(pos);
                    }
                }
            }

            ui.separator();

            let grid = self.grid();
            ui.horizontal(|ui| {
                for cell in Cell::ALL {
                    ui.label(format!("{}: {}", cell.name(), grid.count(cell)));
                }
            });
        });

        // Keep the timer ticking while running
        if self.is_running {
            ctx.request_repaint_after(Duration::from_millis(16));
        }
    }
}
