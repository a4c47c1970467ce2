use std::time::{Duration, Instant};

use eframe::egui;
use eframe::egui::{Align2, FontId, RichText, Sense};

use crate::app::controller::{Dispatch, GalleryController};
use crate::app::events::AppEvent;
use crate::error::AppError;
use crate::resources::strings::APP_NAME_KEY;
use crate::resources::{AssetIndex, StringTable};
use crate::ui::textures::TextureCache;
use crate::ui::transition::ActiveTransition;

const WINDOW_SIZE: [f32; 2] = [420.0, 760.0];
const MIN_WINDOW_SIZE: [f32; 2] = [320.0, 560.0];
const BUTTON_HEIGHT: f32 = 36.0;
const CARD_MARGIN: f32 = 24.0;

pub struct GalleryShell {
    controller: GalleryController,
    strings: StringTable,
    textures: TextureCache,
    transition: Option<ActiveTransition>,
    transition_duration: Duration,
}

struct CardContent {
    index: usize,
    image_ref: String,
    title: String,
    caption: String,
    position: String,
    is_favorite: bool,
}

#[derive(Debug, Clone, Copy)]
struct CardPlacement {
    offset: f32,
    alpha: f32,
    interactive: bool,
}

impl GalleryShell {
    fn new(
        controller: GalleryController,
        strings: StringTable,
        assets: AssetIndex,
        transition_duration: Duration,
    ) -> Self {
        Self {
            controller,
            strings,
            textures: TextureCache::new(assets),
            transition: None,
            transition_duration,
        }
    }

    fn handle(&mut self, ctx: &egui::Context, event: AppEvent) {
        match self.controller.dispatch(event) {
            Dispatch::Navigated(step) => {
                // A one-artwork catalog navigates onto itself; there is nothing to slide.
                self.transition = (step.from != step.to).then(|| {
                    ActiveTransition::new(step, self.transition_duration, Instant::now())
                });
                ctx.request_repaint();
            }
            Dispatch::FavoriteToggled(change) => {
                log::debug!("[Gallery] redraw favorite icon for {}", change.index);
                ctx.request_repaint();
            }
            Dispatch::Quit => {
                log::info!(
                    "[Gallery] closing after {} navigations",
                    self.controller.state().navigations
                );
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            }
            Dispatch::Ignored => {}
        }
    }

    fn card_content(&self, index: usize) -> Option<CardContent> {
        let view = self.controller.view(index)?;
        Some(CardContent {
            index,
            image_ref: view.refs.image.clone(),
            title: self.strings.resolve(&view.refs.title).to_string(),
            caption: self.strings.resolve(&view.refs.caption).to_string(),
            position: view.position_label(),
            is_favorite: view.is_favorite,
        })
    }

    fn show_gallery(&mut self, ui: &mut egui::Ui) -> Option<AppEvent> {
        let now = Instant::now();
        let area = ui.available_rect_before_wrap();
        ui.allocate_rect(area, Sense::hover());

        let active = self
            .transition
            .filter(|transition| !transition.is_finished(now));
        match active {
            Some(transition) => {
                let frame = transition.frame(now);
                self.show_card(
                    ui,
                    area,
                    transition.step.from,
                    CardPlacement {
                        offset: frame.outgoing_offset,
                        alpha: frame.outgoing_alpha,
                        interactive: false,
                    },
                );
                let event = self.show_card(
                    ui,
                    area,
                    transition.step.to,
                    CardPlacement {
                        offset: frame.incoming_offset,
                        alpha: frame.incoming_alpha,
                        interactive: true,
                    },
                );
                ui.ctx().request_repaint();
                event
            }
            None => {
                self.transition = None;
                let current = self.controller.navigator().current();
                self.show_card(
                    ui,
                    area,
                    current,
                    CardPlacement {
                        offset: 0.0,
                        alpha: 1.0,
                        interactive: true,
                    },
                )
            }
        }
    }

    fn show_card(
        &mut self,
        ui: &mut egui::Ui,
        area: egui::Rect,
        index: usize,
        placement: CardPlacement,
    ) -> Option<AppEvent> {
        let card = self.card_content(index)?;
        let texture = self.textures.texture(ui.ctx(), card.index, &card.image_ref);
        let favorites_enabled = self.controller.config().favorites_enabled;
        let target = area.translate(egui::vec2(placement.offset * area.width(), 0.0));
        let mut event = None;

        ui.scope_builder(
            egui::UiBuilder::new()
                .id_salt(("artwork_card", card.index))
                .max_rect(target),
            |ui| {
                ui.set_clip_rect(area.intersect(ui.clip_rect()));
                ui.set_opacity(placement.alpha);
                ui.vertical_centered(|ui| {
                    if favorites_enabled {
                        let icon = if card.is_favorite { "★" } else { "☆" };
                        let button =
                            egui::Button::new(RichText::new(icon).size(30.0)).frame(false);
                        let response = ui
                            .add_enabled(placement.interactive, button)
                            .on_hover_text("Toggle favorite");
                        if response.clicked() {
                            event = Some(AppEvent::ToggleFavorite(card.index));
                        }
                    }
                    ui.add_space(8.0);

                    let max_image = egui::vec2(
                        (target.width() - 2.0 * CARD_MARGIN).max(64.0),
                        (target.height() * 0.55).max(64.0),
                    );
                    egui::Frame::window(ui.style())
                        .inner_margin(12.0)
                        .show(ui, |ui| match &texture {
                            Some(texture) => {
                                ui.add(
                                    egui::Image::from_texture(
                                        egui::load::SizedTexture::from_handle(texture),
                                    )
                                    .max_size(max_image)
                                    .maintain_aspect_ratio(true),
                                );
                            }
                            None => show_placeholder(ui, max_image),
                        });
                    ui.add_space(16.0);

                    let panel_fill = ui.visuals().selection.bg_fill.gamma_multiply(0.6);
                    egui::Frame::default()
                        .fill(panel_fill)
                        .inner_margin(12.0)
                        .show(ui, |ui| {
                            ui.set_width((target.width() - 2.0 * CARD_MARGIN).max(64.0));
                            ui.vertical(|ui| {
                                ui.label(RichText::new(&card.title).size(24.0));
                                ui.add_space(8.0);
                                ui.label(RichText::new(&card.caption).strong());
                            });
                        });
                    ui.add_space(8.0);
                    ui.label(RichText::new(&card.position).weak());
                });
            },
        );

        event
    }
}

fn show_header(ui: &mut egui::Ui, app_name: &str) {
    ui.add_space(8.0);
    ui.vertical_centered(|ui| {
        let color = ui.visuals().hyperlink_color;
        ui.label(
            RichText::new(format!("{app_name} 🎨 🖌"))
                .size(26.0)
                .italics()
                .strong()
                .color(color),
        );
    });
    ui.add_space(8.0);
}

fn show_navigation_buttons(ui: &mut egui::Ui) -> Option<AppEvent> {
    let mut event = None;
    ui.add_space(8.0);
    ui.columns(2, |columns| {
        let width = columns[0].available_width();
        if columns[0]
            .add_sized([width, BUTTON_HEIGHT], egui::Button::new("Previous"))
            .clicked()
        {
            event = Some(AppEvent::Previous);
        }
        let width = columns[1].available_width();
        if columns[1]
            .add_sized([width, BUTTON_HEIGHT], egui::Button::new("Next"))
            .clicked()
        {
            event = Some(AppEvent::Next);
        }
    });
    ui.add_space(8.0);
    event
}

fn show_placeholder(ui: &mut egui::Ui, size: egui::Vec2) {
    let (rect, _) = ui.allocate_exact_size(size, Sense::hover());
    ui.painter()
        .rect_filled(rect, 4.0, ui.visuals().faint_bg_color);
    ui.painter().text(
        rect.center(),
        Align2::CENTER_CENTER,
        "image unavailable",
        FontId::proportional(14.0),
        ui.visuals().weak_text_color(),
    );
}

fn keyboard_events(ctx: &egui::Context) -> Vec<AppEvent> {
    ctx.input(|input| {
        let mut events = Vec::new();
        if input.key_pressed(egui::Key::ArrowLeft) {
            events.push(AppEvent::Previous);
        }
        if input.key_pressed(egui::Key::ArrowRight) {
            events.push(AppEvent::Next);
        }
        if input.key_pressed(egui::Key::Escape) {
            events.push(AppEvent::Quit);
        }
        events
    })
}

impl eframe::App for GalleryShell {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut events = keyboard_events(ctx);

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            show_header(ui, self.strings.resolve(APP_NAME_KEY));
        });

        egui::TopBottomPanel::bottom("controls").show(ctx, |ui| {
            events.extend(show_navigation_buttons(ui));
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            events.extend(self.show_gallery(ui));
        });

        for event in events {
            self.handle(ctx, event);
        }
    }
}

pub fn launch_window(
    controller: GalleryController,
    strings: StringTable,
    assets: AssetIndex,
) -> Result<(), AppError> {
    let title = strings.resolve(APP_NAME_KEY).to_string();
    let transition_duration = Duration::from_millis(controller.config().transition_ms);
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(WINDOW_SIZE)
            .with_min_inner_size(MIN_WINDOW_SIZE),
        ..Default::default()
    };

    log::info!(
        "[Main] opening gallery with {} artworks ({} images indexed under {})",
        controller.catalog().len(),
        assets.len(),
        assets.root().display()
    );
    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| {
            Ok(Box::new(GalleryShell::new(
                controller,
                strings,
                assets,
                transition_duration,
            )))
        }),
    )
    .map_err(|error| AppError::Ui(format!("failed to start UI: {error}")))
}
