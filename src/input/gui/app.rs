//! Main GUI application loop.

use egui::Context;
use egui_winit::State as EguiWinitState;
use log::error;
use winit::{
    event::{Event, WindowEvent},
    event_loop::EventLoop,
    window::Window,
};

use crate::core::stars::scene::Label;
use crate::presenters::pixels::presenter::PixelsPresenter;

const LABEL_FONT_SIZE: f32 = 14.0;

pub(crate) struct GuiApp {
    presenter: PixelsPresenter,
    label: Label,
    egui_ctx: Context,
    egui_state: EguiWinitState,
}

impl GuiApp {
    pub(crate) fn new(
        window: &'static Window,
        event_loop: &EventLoop<()>,
        presenter: PixelsPresenter,
        label: Label,
    ) -> Self {
        let egui_ctx = Context::default();
        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(window.scale_factor() as f32),
            None, // max_texture_side, use default
        );

        Self {
            presenter,
            label,
            egui_ctx,
            egui_state,
        }
    }

    /// Runs one egui frame that paints the label at its panel anchor.
    fn update_ui(&mut self, window: &Window) -> egui::FullOutput {
        let raw_input = self.egui_state.take_egui_input(window);
        let label = self.label;

        self.egui_ctx.run(raw_input, |ctx| {
            ctx.layer_painter(egui::LayerId::background()).text(
                egui::pos2(label.anchor.x as f32, label.anchor.y as f32),
                egui::Align2::LEFT_BOTTOM,
                label.text,
                egui::FontId::proportional(LABEL_FONT_SIZE),
                egui::Color32::from_rgb(label.colour.r, label.colour.g, label.colour.b),
            );
        })
    }

    fn redraw(&mut self, window: &Window) -> Result<(), pixels::Error> {
        let mut egui_output = self.update_ui(window);
        let platform_output = std::mem::take(&mut egui_output.platform_output);

        self.egui_state.handle_platform_output(window, platform_output);

        self.presenter.render(egui_output, &self.egui_ctx)
    }

    fn resize(&mut self, width: u32, height: u32) {
        if let Err(e) = self.presenter.resize(width, height) {
            error!("Resize error: {e}");
        }
    }

    /// Runs the event loop until the window is closed.
    pub(crate) fn run(
        mut self,
        window: &'static Window,
        event_loop: EventLoop<()>,
    ) -> Result<(), winit::error::EventLoopError> {
        window.request_redraw();

        event_loop.run(|event, elwt| match event {
            Event::WindowEvent {
                ref event,
                window_id,
            } if window_id == window.id() => {
                let response = self.egui_state.on_window_event(window, event);

                match event {
                    WindowEvent::CloseRequested => {
                        elwt.exit();
                    }
                    WindowEvent::RedrawRequested => {
                        if let Err(e) = self.redraw(window) {
                            error!("Render error: {e}");
                            elwt.exit();
                        }
                    }
                    WindowEvent::Resized(size) => {
                        self.resize(size.width, size.height);
                        window.request_redraw();
                    }
                    WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                        self.egui_ctx.set_pixels_per_point(*scale_factor as f32);
                        let size = window.inner_size();
                        self.resize(size.width, size.height);
                        window.request_redraw();
                    }
                    _ => {
                        if response.repaint {
                            window.request_redraw();
                        }
                    }
                }
            }
            _ => {}
        })
    }
}
