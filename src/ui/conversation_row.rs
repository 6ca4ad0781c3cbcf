use crate::row::{ConversationRow, Preview, EMPTY_PREVIEW};
use gtk4::prelude::*;
use gtk4 as gtk;
use gtk4::{gdk, gio, pango};

const AVATAR_SIZE: i32 = 40;

pub fn build(row: &ConversationRow) -> gtk::Widget {
    let root = gtk::Box::new(gtk::Orientation::Horizontal, 8);
    root.add_css_class("conversation-row");

    root.append(&avatar(row));

    let body = gtk::Box::new(gtk::Orientation::Vertical, 4);
    body.set_hexpand(true);

    let header = gtk::Box::new(gtk::Orientation::Horizontal, 6);
    let name = gtk::Label::new(Some(&row.name));
    name.add_css_class("heading");
    name.set_halign(gtk::Align::Start);
    name.set_hexpand(true);
    name.set_xalign(0.0);
    name.set_ellipsize(pango::EllipsizeMode::End);
    header.append(&name);

    let time = gtk::Label::new(Some(&crate::utils::format_date(row.timestamp_ms)));
    time.add_css_class("caption");
    time.add_css_class("dim-label");
    time.set_halign(gtk::Align::End);
    header.append(&time);
    body.append(&header);

    body.append(&preview_line(row));
    root.append(&body);

    root.upcast()
}

fn avatar(row: &ConversationRow) -> gtk::Overlay {
    let avatar = adw::Avatar::new(AVATAR_SIZE, Some(&row.name), true);
    if let Some(texture) = load_texture(&row.image) {
        avatar.set_custom_image(Some(&texture));
    }

    let overlay = gtk::Overlay::new();
    overlay.set_child(Some(&avatar));
    if row.online {
        let dot = gtk::Box::new(gtk::Orientation::Horizontal, 0);
        dot.add_css_class("presence-dot");
        dot.set_halign(gtk::Align::End);
        dot.set_valign(gtk::Align::Start);
        overlay.add_overlay(&dot);
    }
    overlay
}

fn preview_line(row: &ConversationRow) -> gtk::Box {
    let line = gtk::Box::new(gtk::Orientation::Horizontal, 4);
    line.add_css_class("dim-label");

    if row.seen {
        line.append(&icon("object-select-symbolic"));
    }
    if row.group {
        line.append(&icon("system-users-symbolic"));
    }
    match &row.preview {
        Preview::Placeholder => line.append(&caption(EMPTY_PREVIEW)),
        Preview::Text(text) => line.append(&caption(text)),
        Preview::Image => line.append(&icon("image-x-generic-symbolic")),
        Preview::Video => line.append(&icon("video-x-generic-symbolic")),
        Preview::Nothing => {}
    }
    line
}

fn icon(name: &str) -> gtk::Image {
    let image = gtk::Image::from_icon_name(name);
    image.set_pixel_size(16);
    image
}

fn caption(text: &str) -> gtk::Label {
    let label = gtk::Label::new(Some(text));
    label.add_css_class("caption");
    label.set_halign(gtk::Align::Start);
    label.set_ellipsize(pango::EllipsizeMode::End);
    label
}

// Remote images are never fetched; the avatar shows initials instead.
fn load_texture(location: &str) -> Option<gdk::Texture> {
    if location.starts_with("http://") || location.starts_with("https://") {
        return None;
    }
    let file = if location.contains("://") {
        gio::File::for_uri(location)
    } else {
        gio::File::for_path(location)
    };
    match gdk::Texture::from_file(&file) {
        Ok(texture) => Some(texture),
        Err(e) => {
            log::debug!("avatar image {location} unavailable: {e}");
            None
        }
    }
}
