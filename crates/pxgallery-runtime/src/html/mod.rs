//! Static page rendering.
//!
//! The pipeline turns a [`SessionMap`](pxgallery_types::SessionMap) into
//! [`SessionSection`]s holding ready-to-use hrefs; [`GalleryPage`] only
//! formats them.

mod assets;
mod markup;
mod page;

pub use markup::{escape, inline_markup};
pub use page::{GalleryPage, PhotoTile, SessionSection};

use std::path::{Component, Path};

/// Href for `target` as seen from a page written into `page_dir`.
///
/// Targets that share a directory with the page become relative paths with
/// forward slashes, climbing out with `..` where needed. Absolute targets
/// that share nothing but the filesystem root are linked by full path.
pub fn relative_href(target: &Path, page_dir: &Path) -> String {
    let target_parts: Vec<Component> = target.components().collect();
    let base_parts: Vec<Component> = page_dir
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect();

    let common = target_parts
        .iter()
        .zip(&base_parts)
        .take_while(|(a, b)| a == b)
        .count();

    let mixed = target.is_absolute() != page_dir.is_absolute() && !base_parts.is_empty();
    let only_root_shared = target.has_root() && common <= 1;
    if mixed || only_root_shared {
        return join_parts(&target_parts);
    }

    let mut parts: Vec<String> = base_parts[common..].iter().map(|_| "..".to_string()).collect();
    parts.extend(target_parts[common..].iter().filter_map(part_str));
    parts.join("/")
}

fn part_str(c: &Component) -> Option<String> {
    match c {
        Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
        Component::RootDir => Some(String::new()),
        Component::Prefix(prefix) => Some(prefix.as_os_str().to_string_lossy().into_owned()),
        Component::CurDir => None,
        Component::ParentDir => Some("..".to_string()),
    }
}

fn join_parts(parts: &[Component]) -> String {
    parts.iter().filter_map(part_str).collect::<Vec<_>>().join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_href_inside_page_dir() {
        let href = relative_href(
            Path::new("/site/thumbnails/PXL_1.jpg"),
            Path::new("/site"),
        );
        assert_eq!(href, "thumbnails/PXL_1.jpg");
    }

    #[test]
    fn test_relative_href_outside_page_dir() {
        let href = relative_href(Path::new("/srv/photos/a.jpg"), Path::new("/site"));
        assert_eq!(href, "/srv/photos/a.jpg");
    }

    #[test]
    fn test_relative_href_climbs_out_of_page_dir() {
        let href = relative_href(
            Path::new("/home/me/gallery/photos/a.jpg"),
            Path::new("/home/me/gallery/site"),
        );
        assert_eq!(href, "../photos/a.jpg");
    }

    #[test]
    fn test_relative_href_with_empty_page_dir() {
        let href = relative_href(Path::new("photos/a.jpg"), Path::new(""));
        assert_eq!(href, "photos/a.jpg");
    }
}
