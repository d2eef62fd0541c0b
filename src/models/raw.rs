use serde::Deserialize;

/// Loosely-typed project record as it arrives from an API or database.
/// Field names follow the camelCase wire convention; legacy spellings
/// (`featured`, `techStack`, `repo.url`) are accepted as aliases so the
/// normalizer is the only place that knows about them.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct RawProject {
    pub id: Option<String>,
    pub title: String,
    pub description: Option<String>,
    pub image: Option<RawImage>,
    pub image_alt: Option<String>,
    pub thumbnail_url: Option<String>,
    #[serde(alias = "techStack")]
    pub tech_stacks: Vec<RawTechStackItem>,
    pub live_demo_url: Option<String>,
    pub live_url: Option<String>,
    pub repository_url: Option<String>,
    pub repo: Option<RawRepo>,
    pub status: Option<String>,
    #[serde(alias = "featured")]
    pub is_featured: Option<bool>,
    pub is_public: Option<bool>,
    pub priority: Option<String>,
    pub progress: Option<u8>,
    pub budget: Option<RawBudget>,
    pub tags: Vec<RawTag>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub due_date: Option<String>,
    pub last_updated: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub related_projects: Vec<RawRelatedProject>,
}

/// Image value in either of its two wire forms: a bare URL string or a
/// structured `{src, alt, width, height}` record.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum RawImage {
    Url(String),
    Detailed {
        src: String,
        alt: Option<String>,
        width: Option<u32>,
        height: Option<u32>,
    },
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct RawTechStackItem {
    pub name: String,
    pub color: Option<String>,
    pub icon: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct RawRepo {
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct RawTag {
    pub name: String,
    pub navigate_to: Option<String>,
}

/// Budget in either wire form: a bare number or a structured record with
/// per-field formatting overrides.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum RawBudget {
    Amount(f64),
    #[serde(rename_all = "camelCase")]
    Detailed {
        amount: f64,
        currency: Option<String>,
        symbol: Option<String>,
        fraction_digits: Option<u8>,
        group_separator: Option<char>,
    },
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct RawRelatedProject {
    pub title: String,
    pub description: Option<String>,
    pub image: Option<RawImage>,
    #[serde(alias = "link")]
    pub url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_string_and_structured_image_forms() {
        let plain: RawProject =
            serde_json::from_str(r#"{"title":"X","image":"https://a/img.png"}"#).unwrap();
        assert_eq!(plain.image, Some(RawImage::Url("https://a/img.png".into())));

        let detailed: RawProject = serde_json::from_str(
            r#"{"title":"X","image":{"src":"https://a/img.png","alt":"shot","width":640}}"#,
        )
        .unwrap();
        assert_eq!(
            detailed.image,
            Some(RawImage::Detailed {
                src: "https://a/img.png".into(),
                alt: Some("shot".into()),
                width: Some(640),
                height: None,
            })
        );
    }

    #[test]
    fn legacy_aliases_map_to_modern_fields() {
        let raw: RawProject = serde_json::from_str(
            r#"{"title":"X","featured":true,"techStack":[{"name":"Rust"}]}"#,
        )
        .unwrap();
        assert_eq!(raw.is_featured, Some(true));
        assert_eq!(raw.tech_stacks.len(), 1);
        assert_eq!(raw.tech_stacks[0].name, "Rust");
    }

    #[test]
    fn missing_optional_fields_default_without_error() {
        let raw: RawProject = serde_json::from_str(r#"{"title":"X"}"#).unwrap();
        assert_eq!(raw.status, None);
        assert_eq!(raw.tags, Vec::new());
        assert_eq!(raw.is_public, None);
    }

    #[test]
    fn budget_accepts_number_and_structured_forms() {
        let raw: RawProject =
            serde_json::from_str(r#"{"title":"X","budget":50000}"#).unwrap();
        assert_eq!(raw.budget, Some(RawBudget::Amount(50000.0)));

        let raw: RawProject = serde_json::from_str(
            r#"{"title":"X","budget":{"amount":1200.5,"currency":"EUR","symbol":"€","fractionDigits":2}}"#,
        )
        .unwrap();
        assert_eq!(
            raw.budget,
            Some(RawBudget::Detailed {
                amount: 1200.5,
                currency: Some("EUR".into()),
                symbol: Some("€".into()),
                fraction_digits: Some(2),
                group_separator: None,
            })
        );
    }
}
