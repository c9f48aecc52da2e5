use eframe::egui::{InputState, Key};

use crate::{
    action::{Action, ActionRequestQueue},
    state::Screen,
};

pub(crate) fn handle_input(i: &InputState, screen: &Screen, action_queue: &mut ActionRequestQueue) {
    match screen {
        Screen::Home(_) => {
            // Only the first dropped file is used.
            let dropped = &i.raw.dropped_files;
            if let Some(path) = dropped.iter().find_map(|file| file.path.clone()) {
                action_queue.request(Action::SelectImage(path));
            }
        }
        Screen::Puzzle(_) => {
            if i.key_pressed(Key::Escape) {
                action_queue.request(Action::OpenExitDialog);
            }
        }
    }
}
