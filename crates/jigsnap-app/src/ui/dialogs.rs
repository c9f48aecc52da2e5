use eframe::egui::{Context, Id, Modal, Response, RichText, Sides, Ui};

use crate::{
    action::{Action, ActionRequestQueue},
    state::Notice,
};

struct DialogResult {
    should_close: bool,
}

fn show_dialog<Heading, Body, Buttons>(
    ctx: &Context,
    id: Id,
    heading: Heading,
    body: Body,
    buttons: Buttons,
) -> DialogResult
where
    Heading: Into<RichText>,
    Body: FnOnce(&mut Ui),
    Buttons: FnOnce(&mut Ui),
{
    let modal = Modal::new(id).show(ctx, |ui| {
        ui.heading(heading);
        ui.add_space(4.0);

        body(ui);
        ui.add_space(8.0);

        Sides::new().show(ui, |_ui| {}, buttons);
    });

    DialogResult {
        should_close: modal.should_close(),
    }
}

fn request_focus_if_none(ui: &Ui, response: &Response) {
    if ui.memory(|memory| memory.focused().is_none()) {
        response.request_focus();
    }
}

fn notice_heading(notice: Notice) -> &'static str {
    match notice {
        Notice::SelectImageFirst => "No Image",
        Notice::LoadFailed(_) => "Load Failed",
        Notice::Solved => "Congratulations!",
    }
}

pub(crate) fn show_notice(ctx: &Context, notice: Notice, action_queue: &mut ActionRequestQueue) {
    let result = show_dialog(
        ctx,
        Id::new("notice"),
        notice_heading(notice),
        |ui| {
            ui.label(notice.message());
        },
        |ui| {
            let response = ui.button("OK");
            request_focus_if_none(ui, &response);
            if response.clicked() {
                ui.close();
            }
        },
    );
    if result.should_close {
        action_queue.request(Action::DismissNotice);
    }
}

pub(crate) fn show_exit_confirm(ctx: &Context, action_queue: &mut ActionRequestQueue) {
    let mut choice = None;
    let result = show_dialog(
        ctx,
        Id::new("exit_confirm"),
        "Exit Game?",
        |ui| {
            ui.label("Leave this puzzle? Your progress will be lost.");
        },
        |ui| {
            if ui.button("Cancel").clicked() {
                ui.close();
            }
            if ui.button("Exit").clicked() {
                choice = Some(Action::ExitApp);
                ui.close();
            }
            let homepage = ui.button("Homepage");
            request_focus_if_none(ui, &homepage);
            if homepage.clicked() {
                choice = Some(Action::BackToHome);
                ui.close();
            }
        },
    );
    if result.should_close {
        action_queue.request(Action::CloseExitDialog);
        if let Some(action) = choice {
            action_queue.request(action);
        }
    }
}
