use crate::app::Settings;
use adw::prelude::*;
use adw::Application;
use gtk4 as gtk;
use std::rc::Rc;

/// Asks who is signed in so rows can mark the user's own last messages.
pub fn show_identity_window(app: &Application, settings: Settings) {
    let window = adw::ApplicationWindow::builder()
        .application(app)
        .title("Who are you?")
        .default_width(420)
        .default_height(220)
        .resizable(false)
        .build();

    let toast_overlay = adw::ToastOverlay::new();

    let root = gtk::Box::new(gtk::Orientation::Vertical, 12);
    root.set_margin_top(24);
    root.set_margin_bottom(24);
    root.set_margin_start(24);
    root.set_margin_end(24);

    let title = gtk::Label::new(Some("Choose your account"));
    title.add_css_class("title-2");
    title.set_halign(gtk::Align::Start);
    root.append(&title);

    let id_entry = gtk::Entry::new();
    id_entry.set_placeholder_text(Some("User ID"));
    id_entry.set_hexpand(true);
    root.append(&id_entry);

    let continue_btn = gtk::Button::with_label("Continue");
    continue_btn.add_css_class("suggested-action");
    continue_btn.set_halign(gtk::Align::End);
    root.append(&continue_btn);

    toast_overlay.set_child(Some(&root));
    let container = gtk::Box::new(gtk::Orientation::Vertical, 0);
    container.append(&adw::HeaderBar::new());
    container.append(&toast_overlay);
    window.set_content(Some(&container));

    let on_continue: Rc<dyn Fn()> = {
        let app = app.clone();
        let window = window.clone();
        let overlay = toast_overlay.clone();
        let id_entry = id_entry.clone();
        Rc::new(move || {
            let Some(settings) = settings.with_user_id(&id_entry.text()) else {
                overlay.add_toast(adw::Toast::new("Please enter your user ID."));
                return;
            };
            let saved = settings.save();
            let main_overlay = crate::ui::main_window::show_main_window(&app, settings);
            if let Err(e) = saved {
                // Identity still applies to this session, it just won't be remembered.
                log::warn!("could not persist identity: {e}");
                main_overlay.add_toast(adw::Toast::new(&format!("Failed to save settings: {}", e)));
            }
            window.close();
        })
    };

    {
        let on_continue = on_continue.clone();
        continue_btn.connect_clicked(move |_| (on_continue)());
    }
    id_entry.connect_activate(move |_| (on_continue)());

    window.present();
}
