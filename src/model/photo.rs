use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhotoCategory {
    Exterior,
    Interior,
    Damage,
    Tyres,
    #[default]
    Other,
    V5,
    Signature,
}

impl PhotoCategory {
    /// Heading and caption text, e.g. "Exterior"
    pub fn label(&self) -> &'static str {
        match self {
            PhotoCategory::Exterior => "Exterior",
            PhotoCategory::Interior => "Interior",
            PhotoCategory::Damage => "Damage",
            PhotoCategory::Tyres => "Tyres",
            PhotoCategory::Other => "Other",
            PhotoCategory::V5 => "V5",
            PhotoCategory::Signature => "Signature",
        }
    }

    /// Categories laid out in the generic photo grid; V5 and signature
    /// photos get their own blocks
    pub fn in_generic_grid(&self) -> bool {
        !matches!(self, PhotoCategory::V5 | PhotoCategory::Signature)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoEntry {
    #[serde(default)]
    pub category: PhotoCategory,
    #[serde(alias = "blob_url", alias = "url")]
    pub remote_url: String,
    #[serde(default)]
    pub caption: Option<String>,
}

impl PhotoEntry {
    pub fn caption(&self) -> Option<&str> {
        self.caption
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
    }

    /// Line printed beneath the image: "Damage" or "Damage - Rear bumper"
    pub fn caption_line(&self) -> String {
        match self.caption() {
            Some(caption) => format!("{} - {}", self.category.label(), caption),
            None => self.category.label().to_string(),
        }
    }
}

/// Photos of one category, in input order. `indices` point back into the
/// photo list the group was built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoGroup {
    pub category: PhotoCategory,
    pub indices: Vec<usize>,
}

/// Group photos by category in first-seen order, keeping input order within
/// each group. Photos rejected by `include` are skipped.
pub fn group_by_category<F>(photos: &[PhotoEntry], include: F) -> Vec<PhotoGroup>
where
    F: Fn(PhotoCategory) -> bool,
{
    let mut groups: Vec<PhotoGroup> = Vec::new();
    for (index, photo) in photos.iter().enumerate() {
        if !include(photo.category) {
            continue;
        }
        match groups.iter_mut().find(|g| g.category == photo.category) {
            Some(group) => group.indices.push(index),
            None => groups.push(PhotoGroup {
                category: photo.category,
                indices: vec![index],
            }),
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn photo(category: PhotoCategory) -> PhotoEntry {
        PhotoEntry {
            category,
            remote_url: String::new(),
            caption: None,
        }
    }

    #[test]
    fn test_first_seen_grouping() {
        let photos = vec![
            photo(PhotoCategory::Exterior),
            photo(PhotoCategory::Damage),
            photo(PhotoCategory::Exterior),
            photo(PhotoCategory::Other),
        ];
        let groups = group_by_category(&photos, |_| true);
        let order: Vec<PhotoCategory> = groups.iter().map(|g| g.category).collect();
        assert_eq!(
            order,
            vec![
                PhotoCategory::Exterior,
                PhotoCategory::Damage,
                PhotoCategory::Other
            ]
        );
        assert_eq!(groups[0].indices, vec![0, 2]);
    }

    #[test]
    fn test_grid_filter_drops_signature_and_v5() {
        let photos = vec![
            photo(PhotoCategory::Signature),
            photo(PhotoCategory::Interior),
            photo(PhotoCategory::V5),
        ];
        let groups = group_by_category(&photos, |c| c.in_generic_grid());
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].indices, vec![1]);
    }

    #[test]
    fn test_caption_line() {
        let mut p = photo(PhotoCategory::Damage);
        assert_eq!(p.caption_line(), "Damage");
        p.caption = Some("Rear bumper scuff".to_string());
        assert_eq!(p.caption_line(), "Damage - Rear bumper scuff");
    }

    #[test]
    fn test_missing_category_is_other() {
        let p: PhotoEntry = serde_json::from_str(r#"{"blob_url": "https://x/y.jpg"}"#).unwrap();
        assert_eq!(p.category, PhotoCategory::Other);
        assert_eq!(p.remote_url, "https://x/y.jpg");
    }
}
