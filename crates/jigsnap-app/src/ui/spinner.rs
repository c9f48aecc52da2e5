use eframe::egui::{Context, Id, Modal, Spinner};

use crate::state::SpinnerKind;

pub(crate) fn show(ctx: &Context, spinner: SpinnerKind) {
    ctx.request_repaint();
    match spinner {
        SpinnerKind::LoadingImage => {
            Modal::new(Id::new("loading_image")).show(ctx, |ui| {
                ui.heading("Loading...");
                ui.add(Spinner::new());
                ui.label("Loading image...");
            });
        }
        SpinnerKind::PreparingPuzzle => {
            Modal::new(Id::new("preparing_puzzle")).show(ctx, |ui| {
                ui.heading("Preparing...");
                ui.add(Spinner::new());
                ui.label("Cutting the picture into tiles...");
            });
        }
    }
}
