use gtk4 as gtk;
use gtk4::gdk;

const CSS: &str = r#"
.conversation-row {
    padding: 12px;
}

.conversation-row:hover {
    background-color: alpha(@accent_color, 0.08);
}

.presence-dot {
    min-width: 10px;
    min-height: 10px;
    border-radius: 9999px;
    background-color: @success_color;
    border: 2px solid @window_bg_color;
}
"#;

pub fn load() {
    let Some(display) = gdk::Display::default() else {
        log::warn!("no default display, skipping stylesheet");
        return;
    };
    let provider = gtk::CssProvider::new();
    provider.load_from_data(CSS);
    gtk::style_context_add_provider_for_display(
        &display,
        &provider,
        gtk::STYLE_PROVIDER_PRIORITY_APPLICATION,
    );
}
