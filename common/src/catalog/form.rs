//! The add/edit form and the validation applied when it is submitted.

use crate::model::penguin::{Penguin, PenguinFields};

/// One input of the penguin form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Species,
    Habitat,
    Height,
    Diet,
    FunFact,
    ImageUrl,
}

impl FormField {
    /// Text inputs in the order they are rendered.
    pub const ALL: [FormField; 6] = [
        FormField::Species,
        FormField::Habitat,
        FormField::Height,
        FormField::Diet,
        FormField::FunFact,
        FormField::ImageUrl,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FormField::Species => "Species",
            FormField::Habitat => "Habitat",
            FormField::Height => "Height",
            FormField::Diet => "Diet",
            FormField::FunFact => "Fun Fact",
            FormField::ImageUrl => "Image/Emoji",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            FormField::Species => "e.g., Emperor Penguin",
            FormField::Habitat => "e.g., Antarctica",
            FormField::Height => "e.g., 100-130 cm",
            FormField::Diet => "e.g., Fish, squid, and krill",
            FormField::FunFact => "Share an interesting fact about this penguin species...",
            FormField::ImageUrl => "🐧 or image URL",
        }
    }

    /// The message shown under a blank required input; `None` for optional inputs.
    pub fn required_message(self) -> Option<&'static str> {
        match self {
            FormField::Species => Some("Please enter the penguin species"),
            FormField::Habitat => Some("Please enter the habitat"),
            FormField::Height => Some("Please enter the height"),
            FormField::Diet => Some("Please enter the diet"),
            FormField::FunFact => Some("Please enter a fun fact"),
            FormField::ImageUrl => None,
        }
    }

    pub fn is_required(self) -> bool {
        self.required_message().is_some()
    }

    pub fn is_multiline(self) -> bool {
        self == FormField::FunFact
    }
}

/// A required input left blank at submit time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormError {
    pub field: FormField,
    pub message: &'static str,
}

/// Raw form contents, exactly as typed.
///
/// `Default` is the reset state: every input empty and the favorite switch off.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PenguinForm {
    pub species: String,
    pub habitat: String,
    pub height: String,
    pub diet: String,
    pub fun_fact: String,
    pub image_url: String,
    pub is_favorite: bool,
}

impl PenguinForm {
    /// Pre-fills the form with a record's current values.
    pub fn from_penguin(penguin: &Penguin) -> Self {
        Self {
            species: penguin.species.clone(),
            habitat: penguin.habitat.clone(),
            height: penguin.height.clone(),
            diet: penguin.diet.clone(),
            fun_fact: penguin.fun_fact.clone(),
            image_url: penguin.image_url.clone().unwrap_or_default(),
            is_favorite: penguin.is_favorite,
        }
    }

    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Species => &self.species,
            FormField::Habitat => &self.habitat,
            FormField::Height => &self.height,
            FormField::Diet => &self.diet,
            FormField::FunFact => &self.fun_fact,
            FormField::ImageUrl => &self.image_url,
        }
    }

    pub fn set(&mut self, field: FormField, value: String) {
        match field {
            FormField::Species => self.species = value,
            FormField::Habitat => self.habitat = value,
            FormField::Height => self.height = value,
            FormField::Diet => self.diet = value,
            FormField::FunFact => self.fun_fact = value,
            FormField::ImageUrl => self.image_url = value,
        }
    }

    /// Checks required inputs and converts the form into record fields.
    ///
    /// Values are kept as typed; only emptiness is judged on the trimmed text.
    /// A blank image input becomes `None`.
    pub fn validate(&self) -> Result<PenguinFields, Vec<FormError>> {
        let errors: Vec<FormError> = FormField::ALL
            .into_iter()
            .filter_map(|field| {
                let message = field.required_message()?;
                self.value(field)
                    .trim()
                    .is_empty()
                    .then_some(FormError { field, message })
            })
            .collect();

        if !errors.is_empty() {
            return Err(errors);
        }

        let image_url = Some(self.image_url.trim())
            .filter(|url| !url.is_empty())
            .map(str::to_string);

        Ok(PenguinFields {
            species: self.species.clone(),
            habitat: self.habitat.clone(),
            height: self.height.clone(),
            diet: self.diet.clone(),
            fun_fact: self.fun_fact.clone(),
            image_url,
            is_favorite: self.is_favorite,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> PenguinForm {
        PenguinForm {
            species: "Gentoo Penguin".to_string(),
            habitat: "Falkland Islands".to_string(),
            height: "75-90 cm".to_string(),
            diet: "Krill".to_string(),
            fun_fact: "Fastest swimming penguin".to_string(),
            image_url: String::new(),
            is_favorite: true,
        }
    }

    #[test]
    fn test_valid_form_converts_to_fields() {
        let fields = filled().validate().unwrap();
        assert_eq!(fields.species, "Gentoo Penguin");
        assert_eq!(fields.image_url, None);
        assert!(fields.is_favorite);
    }

    #[test]
    fn test_blank_required_inputs_are_reported_in_order() {
        let mut form = filled();
        form.species = "   ".to_string();
        form.fun_fact = String::new();

        let errors = form.validate().unwrap_err();
        assert_eq!(
            errors,
            vec![
                FormError {
                    field: FormField::Species,
                    message: "Please enter the penguin species",
                },
                FormError {
                    field: FormField::FunFact,
                    message: "Please enter a fun fact",
                },
            ]
        );
    }

    #[test]
    fn test_edit_prefill_round_trips_through_validation() {
        let penguin = filled().validate().unwrap().with_id("x");
        let mut form = PenguinForm::from_penguin(&penguin);
        form.set(FormField::ImageUrl, " 🐧 ".to_string());

        let fields = form.validate().unwrap();
        assert_eq!(fields.image_url.as_deref(), Some("🐧"));
        assert_eq!(fields.diet, penguin.diet);
        assert_eq!(form.value(FormField::Height), "75-90 cm");
    }

    #[test]
    fn test_reset_state() {
        let form = PenguinForm::default();
        assert!(!form.is_favorite);
        assert!(FormField::ALL.iter().all(|f| form.value(*f).is_empty()));
        assert!(!FormField::ImageUrl.is_required());
    }
}
