use crate::app::Settings;
use crate::error::Result;
use crate::storage::{self, Cache, Loaded};
use adw::prelude::*;
use adw::Application;

/// Returns the window's toast overlay so callers can report into it.
pub fn show_main_window(app: &Application, settings: Settings) -> adw::ToastOverlay {
    let window = adw::ApplicationWindow::builder()
        .application(app)
        .title("Chats")
        .default_width(960)
        .default_height(640)
        .build();

    let overlay = adw::ToastOverlay::new();

    let split = adw::Flap::builder()
        .reveal_flap(true)
        .locked(true)
        .modal(false)
        .build();

    let sidebar = crate::ui::sidebar::Sidebar::new();
    split.set_flap(Some(&sidebar.widget()));

    let placeholder = adw::StatusPage::builder()
        .icon_name("user-available-symbolic")
        .title("No conversation selected")
        .description("Pick a chat from the list")
        .vexpand(true)
        .hexpand(true)
        .build();
    split.set_content(Some(&placeholder));

    overlay.set_child(Some(&split));

    let container = gtk4::Box::new(gtk4::Orientation::Vertical, 0);
    let header = adw::HeaderBar::new();
    let title = gtk4::Label::new(Some("Chats"));
    header.set_title_widget(Some(&title));
    container.append(&header);
    container.append(&overlay);
    window.set_content(Some(&container));
    window.present();

    match load_conversations(&settings) {
        Ok(loaded) => {
            if let Some(err) = loaded.import_error {
                overlay.add_toast(adw::Toast::new(&format!("Failed to import chats: {}", err)));
            }
            sidebar.set_items(loaded.items, settings.user_id());
        }
        Err(err) => {
            log::error!("failed to load conversations: {err}");
            overlay.add_toast(adw::Toast::new(&format!("Failed to load chats: {}", err)));
        }
    }
    overlay
}

fn load_conversations(settings: &Settings) -> Result<Loaded> {
    let mut cache = Cache::open()?;
    storage::import_and_list(
        &mut cache,
        settings.import_path.as_deref(),
        settings.list_limit(),
    )
}
