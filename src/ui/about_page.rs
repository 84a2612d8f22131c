use super::helpers::{body, heading, subheading, vbox};
use super::page::Page;
use crate::content::home::{ABOUT_FEATURES, ABOUT_FOOTER, ABOUT_HEADLINE, ABOUT_QUOTE, ABOUT_TEXT, ABOUT_TITLE};
use gtk4::prelude::*;

pub struct AboutPage {
    root: gtk4::Box,
}

impl AboutPage {
    pub fn new() -> Self {
        let root = vbox(16);
        root.set_margin_top(24);
        root.set_margin_bottom(24);
        root.append(&heading(ABOUT_TITLE));
        root.append(&subheading(ABOUT_HEADLINE));
        root.append(&body(ABOUT_TEXT));

        let features = vbox(8);
        features.add_css_class("card");
        for feature in ABOUT_FEATURES.iter() {
            features.append(&body(&format!("✅ {}", feature)));
        }
        root.append(&features);

        let quote = body(ABOUT_QUOTE);
        quote.add_css_class("dim-label");
        root.append(&quote);
        root.append(&body(ABOUT_FOOTER));
        Self { root }
    }
}

impl Page for AboutPage {
    fn widget(&self) -> gtk4::Widget {
        self.root.clone().upcast()
    }
}
