use serde::Deserialize;

/// A single record of the amphibians catalogue
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Amphibian {
    pub name: String,
    #[serde(rename = "type")]
    pub amphibian_type: String,
    pub description: String,
    #[serde(rename = "imgSrc")]
    pub img_src: String,
}

impl Amphibian {
    pub fn new(
        name: impl Into<String>,
        amphibian_type: impl Into<String>,
        description: impl Into<String>,
        img_src: impl Into<String>,
    ) -> Self {
        Amphibian {
            name: name.into(),
            amphibian_type: amphibian_type.into(),
            description: description.into(),
            img_src: img_src.into(),
        }
    }

    /// Card heading, e.g. `Great Crested Newt (Newt)`
    pub fn title(&self) -> String {
        format!("{} ({})", self.name, self.amphibian_type)
    }

    pub fn has_image(&self) -> bool {
        !self.img_src.trim().is_empty()
    }

    /// Alt text used in place of the picture
    pub fn image_description(&self) -> String {
        format!("Image of {}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_uses_wire_field_names() {
        let json = r#"[{"name":"Frog","type":"Toad","description":"A hoppy friend.","imgSrc":""}]"#;
        let list: Vec<Amphibian> = serde_json::from_str(json).unwrap();
        assert_eq!(list, vec![Amphibian::new("Frog", "Toad", "A hoppy friend.", "")]);
    }

    #[test]
    fn test_decode_ignores_unknown_fields() {
        let json = r#"{"name":"Newt","type":"Newt","description":"d","imgSrc":"x.png","habitat":"pond"}"#;
        let amphibian: Amphibian = serde_json::from_str(json).unwrap();
        assert_eq!(amphibian.img_src, "x.png");
    }

    #[test]
    fn test_decode_rejects_missing_field() {
        let json = r#"{"name":"Newt","type":"Newt","description":"d"}"#;
        assert!(serde_json::from_str::<Amphibian>(json).is_err());
    }

    #[test]
    fn test_title_and_image() {
        let amphibian = Amphibian::new("Great Crested Newt", "Newt", "Warty.", "  ");
        assert_eq!(amphibian.title(), "Great Crested Newt (Newt)");
        assert!(!amphibian.has_image());
        assert_eq!(amphibian.image_description(), "Image of Great Crested Newt");
    }
}
