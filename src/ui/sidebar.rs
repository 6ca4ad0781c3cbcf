use crate::models::{sort_by_activity, Conversation};
use crate::row::ConversationRow;
use gtk4::prelude::*;
use gtk4 as gtk;

pub struct Sidebar {
    root: gtk::Box,
    list: gtk::ListBox,
}

impl Sidebar {
    pub fn new() -> Self {
        let root = gtk::Box::new(gtk::Orientation::Vertical, 6);
        root.set_margin_top(8);
        root.set_margin_bottom(8);
        root.set_width_request(300);

        let title = gtk::Label::new(Some("Conversations"));
        title.add_css_class("heading");
        title.set_halign(gtk::Align::Start);
        title.set_margin_start(12);
        root.append(&title);

        let list = gtk::ListBox::new();
        list.set_selection_mode(gtk::SelectionMode::None);
        list.add_css_class("navigation-sidebar");

        let empty = gtk::Label::new(Some("No conversations yet"));
        empty.add_css_class("dim-label");
        empty.set_margin_top(24);
        list.set_placeholder(Some(&empty));

        let scroller = gtk::ScrolledWindow::builder()
            .vexpand(true)
            .hscrollbar_policy(gtk::PolicyType::Never)
            .child(&list)
            .build();
        root.append(&scroller);

        Self { root, list }
    }

    pub fn widget(&self) -> gtk::Widget {
        self.root.clone().upcast()
    }

    pub fn set_items(&self, mut items: Vec<Conversation>, current_user: Option<&str>) {
        while let Some(row) = self.list.row_at_index(0) {
            self.list.remove(&row);
        }
        sort_by_activity(&mut items);
        for conv in &items {
            let row = ConversationRow::new(conv, current_user);
            let content = gtk::Box::new(gtk::Orientation::Vertical, 0);
            content.append(&crate::ui::conversation_row::build(&row));

            let separator = gtk::Separator::new(gtk::Orientation::Horizontal);
            separator.set_margin_start(40);
            separator.set_margin_end(40);
            content.append(&separator);

            let list_row = gtk::ListBoxRow::new();
            list_row.set_child(Some(&content));
            self.list.append(&list_row);
        }
        log::debug!("sidebar shows {} conversations", items.len());
    }
}
