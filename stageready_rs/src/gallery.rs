//! Lightbox selection over an ordered list of images.
//!
//! The gallery holds the media items in display order and at most one
//! selected index. `None` means the lightbox overlay is closed. Navigation
//! wraps around in both directions and is a no-op while closed.

use thiserror::Error;
use tracing::debug;

/// One image shown in a gallery grid and, when selected, in the lightbox.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaItem {
    pub id: String,
    pub image_url: String,
    pub title: Option<String>,
    pub category: Option<String>,
}

impl MediaItem {
    /// Untitled, uncategorised item.
    pub fn new(id: impl Into<String>, image_url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            image_url: image_url.into(),
            title: None,
            category: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Alt text for the rendered image: title when present, id otherwise.
    pub fn alt_text(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.id)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GalleryError {
    #[error("image index {index} is out of range for a gallery of {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Ordered media items plus the lightbox selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Gallery {
    items: Vec<MediaItem>,
    selection: Option<usize>,
}

impl Gallery {
    pub fn new(items: Vec<MediaItem>) -> Self {
        Self {
            items,
            selection: None,
        }
    }

    pub fn items(&self) -> &[MediaItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Index of the item shown in the lightbox, if open.
    pub fn selection(&self) -> Option<usize> {
        self.selection
    }

    pub fn selected(&self) -> Option<&MediaItem> {
        self.selection.and_then(|idx| self.items.get(idx))
    }

    pub fn is_open(&self) -> bool {
        self.selection.is_some()
    }

    /// Show the item at `index` in the lightbox.
    pub fn open(&mut self, index: usize) -> Result<(), GalleryError> {
        if index >= self.items.len() {
            return Err(GalleryError::IndexOutOfRange {
                index,
                len: self.items.len(),
            });
        }
        debug!(index, "lightbox open");
        self.selection = Some(index);
        Ok(())
    }

    pub fn close(&mut self) {
        if self.selection.take().is_some() {
            debug!("lightbox closed");
        }
    }

    pub fn next(&mut self) {
        if let Some(idx) = self.selection {
            let len = self.items.len();
            self.selection = Some((idx + 1) % len);
        }
    }

    pub fn previous(&mut self) {
        if let Some(idx) = self.selection {
            let len = self.items.len();
            self.selection = Some((idx + len - 1) % len);
        }
    }

    /// Swap the source list. The lightbox closes, since the old index may
    /// point at a different image (or past the end) in the new list.
    pub fn replace_items(&mut self, items: Vec<MediaItem>) {
        self.items = items;
        self.close();
    }

    /// Caption like `"2 / 5"` for the open item.
    pub fn position_label(&self) -> Option<String> {
        self.selection
            .map(|idx| format!("{} / {}", idx + 1, self.items.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gallery_of(n: usize) -> Gallery {
        Gallery::new(
            (0..n)
                .map(|i| MediaItem::new(format!("m{i}"), format!("/images/{i}.jpg")))
                .collect(),
        )
    }

    #[test]
    fn starts_closed() {
        let gallery = gallery_of(3);
        assert_eq!(gallery.selection(), None);
        assert!(!gallery.is_open());
        assert!(gallery.selected().is_none());
    }

    #[test]
    fn open_selects_item() {
        let mut gallery = gallery_of(3);
        gallery.open(1).unwrap();
        assert_eq!(gallery.selection(), Some(1));
        assert_eq!(gallery.selected().map(|m| m.id.as_str()), Some("m1"));
    }

    #[test]
    fn open_out_of_range_keeps_state() {
        let mut gallery = gallery_of(3);
        gallery.open(2).unwrap();
        let err = gallery.open(3).unwrap_err();
        assert_eq!(err, GalleryError::IndexOutOfRange { index: 3, len: 3 });
        assert_eq!(gallery.selection(), Some(2));
    }

    #[test]
    fn empty_gallery_cannot_open() {
        let mut gallery = gallery_of(0);
        assert!(gallery.open(0).is_err());
        gallery.next();
        gallery.previous();
        assert_eq!(gallery.selection(), None);
    }

    #[test]
    fn next_wraps_from_last_to_first() {
        let mut gallery = gallery_of(3);
        gallery.open(2).unwrap();
        gallery.next();
        assert_eq!(gallery.selection(), Some(0));
    }

    #[test]
    fn previous_wraps_from_first_to_last() {
        let mut gallery = gallery_of(3);
        gallery.open(0).unwrap();
        gallery.previous();
        assert_eq!(gallery.selection(), Some(2));
    }

    #[test]
    fn single_item_wraps_onto_itself() {
        let mut gallery = gallery_of(1);
        gallery.open(0).unwrap();
        gallery.next();
        assert_eq!(gallery.selection(), Some(0));
        gallery.previous();
        assert_eq!(gallery.selection(), Some(0));
    }

    #[test]
    fn navigation_is_noop_when_closed() {
        let mut gallery = gallery_of(4);
        gallery.open(1).unwrap();
        gallery.close();
        gallery.next();
        assert_eq!(gallery.selection(), None);
        gallery.previous();
        assert_eq!(gallery.selection(), None);
    }

    #[test]
    fn close_is_idempotent() {
        let mut gallery = gallery_of(2);
        gallery.open(0).unwrap();
        gallery.close();
        assert_eq!(gallery.selection(), None);
        gallery.close();
        assert_eq!(gallery.selection(), None);
    }

    #[test]
    fn replace_items_closes_lightbox() {
        let mut gallery = gallery_of(5);
        gallery.open(4).unwrap();
        gallery.replace_items(gallery_of(2).items().to_vec());
        assert_eq!(gallery.len(), 2);
        assert_eq!(gallery.selection(), None);
    }

    #[test]
    fn position_label_is_one_based() {
        let mut gallery = gallery_of(5);
        assert_eq!(gallery.position_label(), None);
        gallery.open(0).unwrap();
        assert_eq!(gallery.position_label().as_deref(), Some("1 / 5"));
        gallery.previous();
        assert_eq!(gallery.position_label().as_deref(), Some("5 / 5"));
    }

    #[test]
    fn alt_text_prefers_title() {
        let plain = MediaItem::new("kitchen", "/k.jpg");
        assert_eq!(plain.alt_text(), "kitchen");
        let titled = plain.with_title("Rustic kitchen").with_category("rustic");
        assert_eq!(titled.alt_text(), "Rustic kitchen");
        assert_eq!(titled.category.as_deref(), Some("rustic"));
    }
}
