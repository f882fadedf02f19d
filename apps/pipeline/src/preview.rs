//! Preview Builder — one self-contained HTML document from a UI description.
//!
//! Same rendering rules as the Section Renderer, with the stylesheet inlined
//! so the result is viewable with zero build steps. A description with no
//! sections still yields a valid placeholder document.

use crate::models::ui::UIDescription;
use crate::render::theme::{resolve, stylesheet};
use crate::render::{page_body, page_title};

pub fn build_preview(ui: &UIDescription) -> String {
    let theme = resolve(&ui.theme);
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n<title>{title}</title>\n<style>\n{css}</style>\n</head>\n<body>\n<main class=\"site\">\n{body}</main>\n</body>\n</html>\n",
        title = page_title(ui),
        css = stylesheet(&theme),
        body = page_body(ui),
    )
}
