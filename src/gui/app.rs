// src/gui/app.rs
use std::{error::Error, sync::Arc};

use eframe::egui;

use crate::{
    config::{consts::WINDOW_TITLE, state::GuiState},
    core::HttpGateway,
    dashboard::{Controller, Dispatch, controller::Waker},
};

use super::components;

pub fn run(options: eframe::NativeOptions, gui: GuiState) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(move |cc| {
            let gateway = HttpGateway::backend()?;
            Ok(Box::new(App::new(cc.egui_ctx.clone(), gateway, gui)))
        }),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only); workers feed it events
    pub controller: Controller<HttpGateway>,
    pub gui: GuiState,
}

impl App {
    pub fn new(ctx: egui::Context, gateway: HttpGateway, gui: GuiState) -> Self {
        logf!("Init: backend={} start_url={}", gateway.origin(), gui.start_url);

        // Workers finish off the UI thread; wake it so the next frame pumps their events.
        let waker: Waker = Arc::new(move || ctx.request_repaint());
        let controller = Controller::new(gateway, Dispatch::Background).with_waker(waker);

        Self { controller, gui }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let applied = self.controller.pump();
        if applied > 0 {
            logd!("UI: Applied {} event(s), phase={:?}", applied, self.controller.state().phase);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            if self.controller.state().dashboard_visible {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| components::dashboard::draw(ui, self));
            } else {
                components::start_screen::draw(ui, self);
            }
        });

        components::notice::draw(ctx, self);
    }
}
