use serde::{Deserialize, Serialize};

/// Glyph rendered on a card when a record has no image of its own.
pub const DEFAULT_IMAGE: &str = "🐧";

/// A single catalog entry as returned by the record store.
///
/// The `id` is assigned by the store on creation and never changes afterwards.
/// Field names are serialized in camelCase (`funFact`, `imageUrl`, `isFavorite`)
/// so the JSON shape matches what the browser side has always exchanged; `_id`
/// is accepted as an alias for older payloads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Penguin {
    #[serde(alias = "_id")]
    pub id: String,
    pub species: String,
    pub habitat: String,
    pub height: String,
    pub diet: String,
    pub fun_fact: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub is_favorite: bool,
}

/// Every field of a [`Penguin`] except its `id`.
///
/// This is the input of a create call and the output of a validated form, so the
/// binding between form inputs and record fields is checked by the compiler.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PenguinFields {
    pub species: String,
    pub habitat: String,
    pub height: String,
    pub diet: String,
    pub fun_fact: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub is_favorite: bool,
}

/// A partial update of an existing record.
///
/// Absent fields are left untouched. `image_url` is tri-state: `None` keeps the
/// current value, `Some(None)` clears it and `Some(Some(url))` replaces it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PenguinPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub species: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub habitat: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diet: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fun_fact: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "double_option"
    )]
    pub image_url: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_favorite: Option<bool>,
}

/// Names of the text fields every accepted record must carry.
pub const REQUIRED_FIELDS: [&str; 5] = ["species", "habitat", "height", "diet", "funFact"];

impl Penguin {
    /// Returns a copy of everything but the `id`.
    pub fn fields(&self) -> PenguinFields {
        PenguinFields {
            species: self.species.clone(),
            habitat: self.habitat.clone(),
            height: self.height.clone(),
            diet: self.diet.clone(),
            fun_fact: self.fun_fact.clone(),
            image_url: self.image_url.clone(),
            is_favorite: self.is_favorite,
        }
    }

    /// The image or emoji to show for this record, falling back to [`DEFAULT_IMAGE`].
    pub fn display_image(&self) -> &str {
        match self.image_url.as_deref() {
            Some(url) if !url.trim().is_empty() => url,
            _ => DEFAULT_IMAGE,
        }
    }
}

impl PenguinFields {
    /// Attaches a store-assigned id, producing a full record.
    pub fn with_id(self, id: impl Into<String>) -> Penguin {
        Penguin {
            id: id.into(),
            species: self.species,
            habitat: self.habitat,
            height: self.height,
            diet: self.diet,
            fun_fact: self.fun_fact,
            image_url: self.image_url,
            is_favorite: self.is_favorite,
        }
    }

    /// Wire names of the required text fields that are blank.
    pub fn missing_required(&self) -> Vec<&'static str> {
        let values = [
            &self.species,
            &self.habitat,
            &self.height,
            &self.diet,
            &self.fun_fact,
        ];
        REQUIRED_FIELDS
            .iter()
            .zip(values)
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(name, _)| *name)
            .collect()
    }
}

impl From<PenguinFields> for PenguinPatch {
    fn from(fields: PenguinFields) -> Self {
        PenguinPatch {
            species: Some(fields.species),
            habitat: Some(fields.habitat),
            height: Some(fields.height),
            diet: Some(fields.diet),
            fun_fact: Some(fields.fun_fact),
            image_url: Some(fields.image_url),
            is_favorite: Some(fields.is_favorite),
        }
    }
}

impl PenguinPatch {
    /// Applies every present field to `penguin`. The id is never touched.
    pub fn apply_to(&self, penguin: &mut Penguin) {
        if let Some(species) = &self.species {
            penguin.species = species.clone();
        }
        if let Some(habitat) = &self.habitat {
            penguin.habitat = habitat.clone();
        }
        if let Some(height) = &self.height {
            penguin.height = height.clone();
        }
        if let Some(diet) = &self.diet {
            penguin.diet = diet.clone();
        }
        if let Some(fun_fact) = &self.fun_fact {
            penguin.fun_fact = fun_fact.clone();
        }
        if let Some(image_url) = &self.image_url {
            penguin.image_url = image_url.clone();
        }
        if let Some(is_favorite) = self.is_favorite {
            penguin.is_favorite = is_favorite;
        }
    }
}

/// Serde glue for `Option<Option<T>>`: a JSON `null` becomes `Some(None)`
/// while a missing key stays `None` through `#[serde(default)]`.
mod double_option {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S, T>(value: &Option<Option<T>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
        T: Serialize,
    {
        match value {
            Some(inner) => inner.serialize(serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emperor() -> Penguin {
        PenguinFields {
            species: "Emperor Penguin".to_string(),
            habitat: "Antarctica".to_string(),
            height: "100-130 cm".to_string(),
            diet: "Fish, squid, and krill".to_string(),
            fun_fact: "Dives past 500 meters".to_string(),
            image_url: None,
            is_favorite: false,
        }
        .with_id("p-1")
    }

    #[test]
    fn test_display_image_falls_back_to_default_glyph() {
        let mut penguin = emperor();
        assert_eq!(penguin.display_image(), DEFAULT_IMAGE);

        penguin.image_url = Some("   ".to_string());
        assert_eq!(penguin.display_image(), DEFAULT_IMAGE);

        penguin.image_url = Some("👑🐧".to_string());
        assert_eq!(penguin.display_image(), "👑🐧");
    }

    #[test]
    fn test_missing_required_reports_blank_fields() {
        let mut fields = emperor().fields();
        assert!(fields.missing_required().is_empty());

        fields.habitat = "  ".to_string();
        fields.fun_fact = String::new();
        assert_eq!(fields.missing_required(), vec!["habitat", "funFact"]);
    }

    #[test]
    fn test_patch_keeps_id_and_untouched_fields() {
        let mut penguin = emperor();
        let patch = PenguinPatch {
            is_favorite: Some(true),
            image_url: Some(Some("🐧".to_string())),
            ..Default::default()
        };
        patch.apply_to(&mut penguin);

        assert_eq!(penguin.id, "p-1");
        assert!(penguin.is_favorite);
        assert_eq!(penguin.image_url.as_deref(), Some("🐧"));
        assert_eq!(penguin.species, "Emperor Penguin");

        PenguinPatch {
            image_url: Some(None),
            ..Default::default()
        }
        .apply_to(&mut penguin);
        assert_eq!(penguin.image_url, None);
    }

    #[test]
    fn test_json_uses_camel_case_and_accepts_underscore_id() {
        let json = serde_json::to_value(emperor()).unwrap();
        assert_eq!(json["funFact"], "Dives past 500 meters");
        assert_eq!(json["isFavorite"], false);
        assert!(json.get("imageUrl").is_none());

        let parsed: Penguin = serde_json::from_str(
            r#"{"_id":"abc","species":"King Penguin","habitat":"Subantarctic islands",
                "height":"85-95 cm","diet":"Fish and squid","funFact":"14-16 months"}"#,
        )
        .unwrap();
        assert_eq!(parsed.id, "abc");
        assert!(!parsed.is_favorite);
        assert_eq!(parsed.image_url, None);
    }

    #[test]
    fn test_patch_distinguishes_null_from_missing_image() {
        let cleared: PenguinPatch = serde_json::from_str(r#"{"imageUrl":null}"#).unwrap();
        assert_eq!(cleared.image_url, Some(None));

        let untouched: PenguinPatch = serde_json::from_str(r#"{"isFavorite":true}"#).unwrap();
        assert_eq!(untouched.image_url, None);
        assert_eq!(untouched.is_favorite, Some(true));
    }
}
