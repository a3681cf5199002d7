use std::fmt;

use super::assets::{LIGHTBOX_SCRIPT, STYLE};
use super::markup::{escape, inline_markup};
use crate::config::PageConfig;

// --------------------------------------------------------
// View models
// --------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoTile {
    pub name: String,
    pub full_href: String,
    pub thumb_href: String,
    pub placeholder: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSection {
    pub label: String,
    pub tiles: Vec<PhotoTile>,
}

// --------------------------------------------------------
// Gallery Page
// --------------------------------------------------------

pub struct GalleryPage<'a> {
    page: &'a PageConfig,
    sections: &'a [SessionSection],
}

impl<'a> GalleryPage<'a> {
    pub fn new(page: &'a PageConfig, sections: &'a [SessionSection]) -> Self {
        Self { page, sections }
    }

    fn photo_total(&self) -> usize {
        self.sections.iter().map(|s| s.tiles.len()).sum()
    }

    fn render_head(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "<!DOCTYPE html>")?;
        writeln!(f, "<html lang=\"en\">")?;
        writeln!(f, "<head>")?;
        writeln!(f, "<meta charset=\"UTF-8\">")?;
        writeln!(
            f,
            "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">"
        )?;
        writeln!(f, "<title>{}</title>", escape(&self.page.title))?;
        writeln!(f, "<style>{}</style>", STYLE)?;
        writeln!(f, "</head>")?;
        Ok(())
    }

    fn render_header(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "<header class=\"header\">")?;
        writeln!(f, "<h1>{}</h1>", escape(&self.page.title))?;

        for text in [&self.page.introduction, &self.page.sale_terms] {
            if !text.trim().is_empty() {
                writeln!(f, "<p>{}</p>", inline_markup(text))?;
            }
        }

        let email = self.page.contact_email.trim();
        if !email.is_empty() {
            writeln!(
                f,
                "<p><strong>Contact:</strong> <a href=\"mailto:{0}\">{0}</a></p>",
                escape(email)
            )?;
        }

        writeln!(
            f,
            "<p class=\"summary\">{} in {} {}</p>",
            photo_count(self.photo_total()),
            self.sections.len(),
            if self.sections.len() == 1 { "session" } else { "sessions" }
        )?;
        writeln!(f, "</header>")?;
        Ok(())
    }

    fn render_section(&self, f: &mut fmt::Formatter, section: &SessionSection) -> fmt::Result {
        writeln!(f, "<section class=\"session-container\">")?;
        writeln!(
            f,
            "<h2>{} <span class=\"photo-count\">({})</span></h2>",
            escape(&section.label),
            photo_count(section.tiles.len())
        )?;
        writeln!(f, "<div class=\"photo-grid\">")?;
        for tile in &section.tiles {
            self.render_tile(f, tile)?;
        }
        writeln!(f, "</div>")?;
        writeln!(f, "</section>")?;
        Ok(())
    }

    fn render_tile(&self, f: &mut fmt::Formatter, tile: &PhotoTile) -> fmt::Result {
        let name = escape(&tile.name);
        let full = escape(&tile.full_href);
        let style = tile
            .placeholder
            .as_deref()
            .map(|uri| format!(" style=\"background-image:url('{}')\"", escape(uri)))
            .unwrap_or_default();

        writeln!(
            f,
            "<div class=\"photo-tile\"><a href=\"{full}\" target=\"_blank\" data-full=\"{full}\" data-caption=\"{name}\">\
<img src=\"{thumb}\" alt=\"{name}\" loading=\"lazy\"{style}>\
<div class=\"photo-overlay\">{name}</div></a></div>",
            thumb = escape(&tile.thumb_href),
        )
    }

    fn render_lightbox(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            "<div id=\"lightbox\" class=\"lightbox\" hidden>\
<button class=\"lightbox-close\" aria-label=\"Close\">&times;</button>\
<button class=\"lightbox-prev\" aria-label=\"Previous\">&#8249;</button>\
<figure><img alt=\"\"><figcaption></figcaption></figure>\
<button class=\"lightbox-next\" aria-label=\"Next\">&#8250;</button></div>"
        )?;
        writeln!(f, "<script>{}</script>", LIGHTBOX_SCRIPT)?;
        Ok(())
    }
}

impl fmt::Display for GalleryPage<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.render_head(f)?;
        writeln!(f, "<body>")?;
        writeln!(f, "<div class=\"container\">")?;
        self.render_header(f)?;
        for section in self.sections {
            self.render_section(f, section)?;
        }
        writeln!(f, "</div>")?;
        self.render_lightbox(f)?;
        writeln!(f, "</body>")?;
        writeln!(f, "</html>")?;
        Ok(())
    }
}

fn photo_count(n: usize) -> String {
    if n == 1 {
        "1 photo".to_string()
    } else {
        format!("{} photos", n)
    }
}
