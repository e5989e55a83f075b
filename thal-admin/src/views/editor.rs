//! Menu item editor
//!
//! Holds the draft for the add/edit modal, validates it, and owns the image
//! attachment together with its preview.

use shared::{MenuItem, MenuItemFields};
use thal_client::ImageUpload;
use thiserror::Error;

use crate::preview::{ImagePreview, LocalPreview};

/// Form contents before confirmation
///
/// Price is kept as typed so a half-entered value never gets rounded away.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuDraft {
    pub name: String,
    pub description: String,
    pub price: String,
    pub category: String,
}

impl From<&MenuItem> for MenuDraft {
    fn from(item: &MenuItem) -> Self {
        Self {
            name: item.name.clone(),
            description: item.description.clone(),
            price: item.price.to_string(),
            category: item.category.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorMode {
    Create,
    Edit { id: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("All fields required")]
    MissingFields,
    #[error("Price must be a positive number")]
    InvalidPrice,
    #[error("Image required for new item")]
    ImageRequired,
}

/// What a validated editor asks the backend to do
#[derive(Debug, Clone)]
pub enum Submission {
    Create {
        fields: MenuItemFields,
        image: ImageUpload,
    },
    Update {
        id: String,
        fields: MenuItemFields,
        image: Option<ImageUpload>,
    },
}

impl Submission {
    pub fn is_create(&self) -> bool {
        matches!(self, Submission::Create { .. })
    }
}

#[derive(Debug)]
pub struct MenuEditor {
    /// Identifies this editor instance among all opened in a session
    ticket: u64,
    mode: EditorMode,
    pub draft: MenuDraft,
    image: Option<ImageUpload>,
    preview: Option<ImagePreview>,
}

impl MenuEditor {
    /// Empty editor for a new item
    pub fn create() -> Self {
        Self {
            ticket: 0,
            mode: EditorMode::Create,
            draft: MenuDraft::default(),
            image: None,
            preview: None,
        }
    }

    /// Editor pre-filled from an existing item
    ///
    /// `preview_url` is the resolved location of the stored image.
    pub fn edit(item: &MenuItem, preview_url: Option<String>) -> Self {
        Self {
            ticket: 0,
            mode: EditorMode::Edit { id: item.id.clone() },
            draft: MenuDraft::from(item),
            image: None,
            preview: preview_url.map(ImagePreview::Stored),
        }
    }

    pub(crate) fn with_ticket(mut self, ticket: u64) -> Self {
        self.ticket = ticket;
        self
    }

    pub fn ticket(&self) -> u64 {
        self.ticket
    }

    pub fn mode(&self) -> &EditorMode {
        &self.mode
    }

    pub fn is_create(&self) -> bool {
        self.mode == EditorMode::Create
    }

    pub fn image(&self) -> Option<&ImageUpload> {
        self.image.as_ref()
    }

    pub fn preview(&self) -> Option<&ImagePreview> {
        self.preview.as_ref()
    }

    /// Attach a newly selected file
    ///
    /// The previous preview is released before the new one takes its place.
    /// If no local preview can be written the attachment is still kept.
    pub fn select_image(&mut self, upload: ImageUpload) {
        let next = match LocalPreview::create(&upload) {
            Ok(local) => Some(ImagePreview::Local(local)),
            Err(e) => {
                tracing::warn!(file = %upload.file_name, error = %e, "Could not create image preview");
                None
            }
        };
        self.replace_preview(next);
        self.image = Some(upload);
    }

    fn replace_preview(&mut self, next: Option<ImagePreview>) {
        if let Some(previous) = self.preview.take() {
            previous.release();
        }
        self.preview = next;
    }

    /// Check the draft and build the request to send
    pub fn validate(&self) -> Result<Submission, DraftError> {
        let name = self.draft.name.trim();
        let price = self.draft.price.trim();
        let category = self.draft.category.trim();

        if name.is_empty() || price.is_empty() || category.is_empty() {
            return Err(DraftError::MissingFields);
        }

        let price: f64 = price.parse().map_err(|_| DraftError::InvalidPrice)?;
        if !price.is_finite() || price <= 0.0 {
            return Err(DraftError::InvalidPrice);
        }

        let fields = MenuItemFields {
            name: name.to_string(),
            description: self.draft.description.trim().to_string(),
            price,
            category: category.to_string(),
        };

        match &self.mode {
            EditorMode::Create => {
                let image = self.image.clone().ok_or(DraftError::ImageRequired)?;
                Ok(Submission::Create { fields, image })
            }
            EditorMode::Edit { id } => Ok(Submission::Update {
                id: id.clone(),
                fields,
                image: self.image.clone(),
            }),
        }
    }

    /// Close the editor, releasing its preview
    pub fn close(mut self) {
        self.replace_preview(None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paneer() -> MenuItem {
        MenuItem {
            id: "m1".to_string(),
            name: "Paneer Tikka".to_string(),
            description: "Smoky".to_string(),
            price: 220.0,
            category: "Snacks".to_string(),
            image: Some("/uploads/paneer.jpg".to_string()),
        }
    }

    fn filled_create() -> MenuEditor {
        let mut editor = MenuEditor::create();
        editor.draft = MenuDraft {
            name: "Dhokla".to_string(),
            description: String::new(),
            price: "80".to_string(),
            category: "Snacks".to_string(),
        };
        editor
    }

    fn upload(name: &str) -> ImageUpload {
        ImageUpload::from_bytes(name, b"img".to_vec()).unwrap()
    }

    #[test]
    fn test_missing_fields() {
        for blank in ["name", "price", "category"] {
            let mut editor = filled_create();
            editor.select_image(upload("a.png"));
            match blank {
                "name" => editor.draft.name = "  ".to_string(),
                "price" => editor.draft.price.clear(),
                _ => editor.draft.category.clear(),
            }
            assert_eq!(editor.validate().unwrap_err(), DraftError::MissingFields);
        }
    }

    #[test]
    fn test_invalid_price() {
        let mut editor = filled_create();
        editor.select_image(upload("a.png"));
        for price in ["abc", "0", "-5", "NaN", "inf"] {
            editor.draft.price = price.to_string();
            assert_eq!(editor.validate().unwrap_err(), DraftError::InvalidPrice, "{price}");
        }
    }

    #[test]
    fn test_create_requires_image() {
        let editor = filled_create();
        assert_eq!(editor.validate().unwrap_err(), DraftError::ImageRequired);
        assert_eq!(DraftError::ImageRequired.to_string(), "Image required for new item");
    }

    #[test]
    fn test_create_submission() {
        let mut editor = filled_create();
        editor.select_image(upload("dhokla.png"));
        match editor.validate().unwrap() {
            Submission::Create { fields, image } => {
                assert_eq!(fields.price, 80.0);
                assert_eq!(image.file_name, "dhokla.png");
            }
            other => panic!("unexpected submission: {other:?}"),
        }
    }

    #[test]
    fn test_edit_prefills_and_image_is_optional() {
        let editor = MenuEditor::edit(&paneer(), Some("http://api/uploads/paneer.jpg".to_string()));
        assert_eq!(editor.draft.name, "Paneer Tikka");
        assert_eq!(editor.draft.price, "220");
        assert!(matches!(editor.preview(), Some(ImagePreview::Stored(url)) if url.ends_with("paneer.jpg")));

        match editor.validate().unwrap() {
            Submission::Update { id, image, .. } => {
                assert_eq!(id, "m1");
                assert!(image.is_none());
            }
            other => panic!("unexpected submission: {other:?}"),
        }
    }

    #[test]
    fn test_selecting_new_file_releases_previous_preview() {
        let mut editor = MenuEditor::edit(&paneer(), None);

        editor.select_image(upload("first.png"));
        let first = match editor.preview() {
            Some(ImagePreview::Local(local)) => local.path().to_path_buf(),
            other => panic!("expected local preview, got {other:?}"),
        };
        assert!(first.exists());

        editor.select_image(upload("second.webp"));
        let second = match editor.preview() {
            Some(ImagePreview::Local(local)) => local.path().to_path_buf(),
            other => panic!("expected local preview, got {other:?}"),
        };
        assert!(!first.exists());
        assert!(second.exists());
        assert_eq!(editor.image().unwrap().file_name, "second.webp");

        editor.close();
        assert!(!second.exists());
    }
}
