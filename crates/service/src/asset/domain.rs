use serde::{Deserialize, Serialize};

use crate::errors::ServiceError;

pub const MISSING_FIELDS: &str = "Missing required fields";
pub const MISSING_UPLOADER: &str = "Uploader name is required for deletion";

/// A named resource with a category, a link and the identity that uploaded it.
///
/// `id` is opaque to clients; records are never edited after creation.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Asset {
    pub id: String,
    pub name: String,
    pub category: String,
    pub link: String,
    pub uploader: String,
}

/// Create input: everything except `id`, which is generated server-side.
/// Fields are optional so that absence can be reported as a validation error.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewAsset {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub uploader: Option<String>,
}

/// Delete input carrying the self-declared identity of the requester.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeleteAssetInput {
    #[serde(default)]
    pub uploader: Option<String>,
}

fn present(field: Option<String>) -> Option<String> {
    field.filter(|v| !v.is_empty())
}

impl NewAsset {
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        link: impl Into<String>,
        uploader: impl Into<String>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            category: Some(category.into()),
            link: Some(link.into()),
            uploader: Some(uploader.into()),
        }
    }

    /// Presence check only; content is free-form.
    pub fn into_asset(self, id: String) -> Result<Asset, ServiceError> {
        match (present(self.name), present(self.category), present(self.link), present(self.uploader)) {
            (Some(name), Some(category), Some(link), Some(uploader)) => {
                Ok(Asset { id, name, category, link, uploader })
            }
            _ => Err(ServiceError::Validation(MISSING_FIELDS.into())),
        }
    }
}

impl DeleteAssetInput {
    pub fn requester(&self) -> Option<&str> {
        self.uploader.as_deref().filter(|v| !v.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complete_input_builds_asset() {
        let asset = NewAsset::new("Logo", "Branding", "http://x/logo.png", "alice")
            .into_asset("id-1".into())
            .expect("valid");
        assert_eq!(asset.id, "id-1");
        assert_eq!(asset.name, "Logo");
        assert_eq!(asset.uploader, "alice");
    }

    #[test]
    fn each_missing_or_empty_field_is_rejected() {
        let full = NewAsset::new("Logo", "Branding", "http://x/logo.png", "alice");
        let variants = [
            NewAsset { name: None, ..full.clone() },
            NewAsset { category: Some(String::new()), ..full.clone() },
            NewAsset { link: None, ..full.clone() },
            NewAsset { uploader: Some(String::new()), ..full.clone() },
            NewAsset::default(),
        ];
        for input in variants {
            let err = input.into_asset("x".into()).unwrap_err();
            assert!(matches!(err, ServiceError::Validation(ref m) if m == MISSING_FIELDS));
        }
    }

    #[test]
    fn whitespace_counts_as_present() {
        assert!(NewAsset::new(" ", "c", "l", "u").into_asset("x".into()).is_ok());
    }

    #[test]
    fn create_body_tolerates_missing_and_null_fields() {
        let input: NewAsset = serde_json::from_str(r#"{"name":"Logo","link":null}"#).expect("parse");
        assert_eq!(input.name.as_deref(), Some("Logo"));
        assert!(input.link.is_none());
        assert!(input.category.is_none());
    }

    #[test]
    fn requester_ignores_empty_uploader() {
        assert_eq!(DeleteAssetInput { uploader: Some("alice".into()) }.requester(), Some("alice"));
        assert_eq!(DeleteAssetInput { uploader: Some(String::new()) }.requester(), None);
        assert_eq!(DeleteAssetInput::default().requester(), None);
    }
}
