use std::collections::HashSet;

use serde::Deserialize;

use crate::error::CatalogError;
use crate::gallery::ImageRef;

// =============================================================================
// Card Size
// =============================================================================

/// Card footprint in the grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardSize {
    #[default]
    Small,
    Medium,
    Large,
}

impl CardSize {
    /// Grid span as `(columns, rows)`.
    pub fn grid_span(self) -> (u8, u8) {
        match self {
            CardSize::Small => (1, 1),
            CardSize::Medium => (2, 1),
            CardSize::Large => (2, 2),
        }
    }

    /// Inline CSS for the grid span.
    pub fn grid_style(self) -> String {
        let (cols, rows) = self.grid_span();
        format!("grid-column: span {cols}; grid-row: span {rows};")
    }

    /// Maximum tech chips shown before the "+N" overflow chip.
    pub fn tech_limit(self) -> usize {
        match self {
            CardSize::Large => 8,
            CardSize::Small | CardSize::Medium => 5,
        }
    }
}

// =============================================================================
// Project
// =============================================================================

/// A portfolio project card.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tech_stack: Vec<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub live_url: Option<String>,
    /// Cover image; falls back to the first gallery image.
    #[serde(default)]
    pub image: Option<ImageRef>,
    /// Gallery images, in viewing order.
    #[serde(default)]
    pub images: Vec<ImageRef>,
    pub category: String,
    #[serde(default)]
    pub size: CardSize,
}

impl Project {
    /// Whether clicking the cover opens the gallery viewer.
    pub fn has_gallery(&self) -> bool {
        self.images.len() > 1
    }

    /// Image shown on the card itself.
    pub fn cover(&self) -> Option<&ImageRef> {
        self.image.as_ref().or_else(|| self.images.first())
    }

    /// Tech chips rendered on the card.
    pub fn visible_tech(&self) -> &[String] {
        let limit = self.size.tech_limit().min(self.tech_stack.len());
        &self.tech_stack[..limit]
    }

    /// Number of chips folded into the "+N" overflow chip.
    pub fn hidden_tech_count(&self) -> usize {
        self.tech_stack.len().saturating_sub(self.size.tech_limit())
    }
}

// =============================================================================
// Category
// =============================================================================

/// A filter pill. `value: None` selects every project.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Category {
    pub label: String,
    #[serde(default)]
    pub value: Option<String>,
}

/// Gradient colors for a category's card accent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CategoryAccent {
    pub start: &'static str,
    pub end: &'static str,
    pub glow: &'static str,
}

const WEB3_ACCENT: CategoryAccent = CategoryAccent {
    start: "#00d9ff",
    end: "#00ff88",
    glow: "rgba(0, 217, 255, 0.3)",
};

/// Accent for a category; unknown categories use the web3 palette.
pub fn category_accent(category: &str) -> CategoryAccent {
    match category {
        "cybersecurity" => CategoryAccent {
            start: "#a855f7",
            end: "#ec4899",
            glow: "rgba(168, 85, 247, 0.3)",
        },
        "ai" => CategoryAccent {
            start: "#3b82f6",
            end: "#6366f1",
            glow: "rgba(59, 130, 246, 0.3)",
        },
        "mobile" => CategoryAccent {
            start: "#f97316",
            end: "#fbbf24",
            glow: "rgba(249, 115, 22, 0.3)",
        },
        _ => WEB3_ACCENT,
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// Everything the project grid renders.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub projects: Vec<Project>,
}

impl Catalog {
    /// Parses and validates a TOML catalog document.
    pub fn from_toml(src: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = toml::from_str(src)?;
        catalog.validate()?;
        Ok(catalog)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        let mut seen = HashSet::new();

        for (i, project) in self.projects.iter().enumerate() {
            let title = project.title.trim();
            if title.is_empty() {
                return Err(CatalogError::EmptyTitle(i));
            }
            if !seen.insert(title) {
                return Err(CatalogError::DuplicateTitle(title.to_string()));
            }
            let empty_image = project
                .images
                .iter()
                .position(|img| img.as_str().trim().is_empty());
            if let Some(position) = empty_image {
                return Err(CatalogError::EmptyImageRef {
                    project: title.to_string(),
                    position,
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
[[categories]]
label = "All"

[[categories]]
label = "Web3"
value = "web3"

[[projects]]
title = "Vault"
description = "Multisig vault"
tech_stack = ["Rust", "Solidity"]
category = "web3"
size = "large"
images = ["vault/1.png", "vault/2.png"]

[[projects]]
title = "Scanner"
description = "Port scanner"
category = "cybersecurity"
"#;

    fn project(tech: usize, size: CardSize) -> Project {
        Project {
            title: "p".into(),
            description: String::new(),
            tech_stack: (0..tech).map(|i| format!("t{i}")).collect(),
            github_url: None,
            live_url: None,
            image: None,
            images: vec![],
            category: "web3".into(),
            size,
        }
    }

    // =========================================================================
    // Parsing
    // =========================================================================

    #[test]
    fn test_parse_catalog() {
        let catalog = Catalog::from_toml(SAMPLE).unwrap();
        assert_eq!(catalog.categories.len(), 2);
        assert_eq!(catalog.categories[0].value, None);
        assert_eq!(catalog.categories[1].value.as_deref(), Some("web3"));

        let vault = &catalog.projects[0];
        assert_eq!(vault.size, CardSize::Large);
        assert_eq!(vault.images.len(), 2);
        assert!(vault.has_gallery());
        assert_eq!(vault.cover(), Some(&ImageRef::from("vault/1.png")));

        let scanner = &catalog.projects[1];
        assert_eq!(scanner.size, CardSize::Small);
        assert!(scanner.tech_stack.is_empty());
        assert!(!scanner.has_gallery());
        assert_eq!(scanner.cover(), None);
    }

    #[test]
    fn test_bundled_catalog_is_valid() {
        let src = include_str!("../../../../assets/projects.toml");
        let catalog = Catalog::from_toml(src).unwrap();
        assert!(!catalog.projects.is_empty());
        assert!(catalog.categories.iter().any(|c| c.value.is_none()));
    }

    #[test]
    fn test_parse_error() {
        let err = Catalog::from_toml("[[projects]]\ntitle = 3").unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn test_duplicate_title_rejected() {
        let src = r#"
[[projects]]
title = "A"
description = ""
category = "ai"

[[projects]]
title = "A "
description = ""
category = "ai"
"#;
        let err = Catalog::from_toml(src).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateTitle(t) if t == "A"));
    }

    #[test]
    fn test_empty_title_and_image_rejected() {
        let src = "[[projects]]\ntitle = \" \"\ndescription = \"\"\ncategory = \"ai\"\n";
        assert!(matches!(
            Catalog::from_toml(src).unwrap_err(),
            CatalogError::EmptyTitle(0)
        ));

        let src = "[[projects]]\ntitle = \"A\"\ndescription = \"\"\ncategory = \"ai\"\nimages = [\"a.png\", \"\"]\n";
        assert!(matches!(
            Catalog::from_toml(src).unwrap_err(),
            CatalogError::EmptyImageRef { position: 1, .. }
        ));
    }

    // =========================================================================
    // Cards
    // =========================================================================

    #[test]
    fn test_grid_span() {
        assert_eq!(CardSize::Small.grid_span(), (1, 1));
        assert_eq!(CardSize::Medium.grid_span(), (2, 1));
        assert_eq!(CardSize::Large.grid_span(), (2, 2));
        assert_eq!(
            CardSize::Large.grid_style(),
            "grid-column: span 2; grid-row: span 2;"
        );
    }

    #[test]
    fn test_tech_chip_truncation() {
        let small = project(7, CardSize::Small);
        assert_eq!(small.visible_tech().len(), 5);
        assert_eq!(small.hidden_tech_count(), 2);

        let large = project(7, CardSize::Large);
        assert_eq!(large.visible_tech().len(), 7);
        assert_eq!(large.hidden_tech_count(), 0);

        let empty = project(0, CardSize::Medium);
        assert!(empty.visible_tech().is_empty());
        assert_eq!(empty.hidden_tech_count(), 0);
    }

    #[test]
    fn test_single_image_has_no_gallery() {
        let mut p = project(0, CardSize::Small);
        p.images = vec![ImageRef::from("only.png")];
        assert!(!p.has_gallery());
        assert_eq!(p.cover(), Some(&ImageRef::from("only.png")));
    }

    #[test]
    fn test_category_accent_fallback() {
        assert_eq!(category_accent("ai").start, "#3b82f6");
        assert_eq!(category_accent("web3"), WEB3_ACCENT);
        assert_eq!(category_accent("gardening"), WEB3_ACCENT);
    }
}
