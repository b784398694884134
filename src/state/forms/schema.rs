//! Static field schema for the property form

/// A selectable value of a categorical field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldOption {
    /// Value sent to the prediction service
    pub value: &'static str,
    /// Text shown in the selector
    pub label: &'static str,
}

/// How a field is captured and checked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Typed text that must parse to a finite number >= 0
    Numeric { placeholder: &'static str },
    /// One of a fixed set of options
    Categorical { options: &'static [FieldOption] },
}

/// Describes a single form field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub default: &'static str,
}

impl FieldSpec {
    pub fn is_numeric(&self) -> bool {
        matches!(self.kind, FieldKind::Numeric { .. })
    }

    /// Options for categorical fields (empty for numeric ones)
    pub fn options(&self) -> &'static [FieldOption] {
        match self.kind {
            FieldKind::Categorical { options } => options,
            FieldKind::Numeric { .. } => &[],
        }
    }

    /// Display label of the option matching `value`, if any
    pub fn option_label(&self, value: &str) -> Option<&'static str> {
        self.options()
            .iter()
            .find(|o| o.value == value)
            .map(|o| o.label)
    }
}

const fn numeric(name: &'static str, label: &'static str, placeholder: &'static str) -> FieldSpec {
    FieldSpec {
        name,
        label,
        kind: FieldKind::Numeric { placeholder },
        default: "",
    }
}

const fn categorical(
    name: &'static str,
    label: &'static str,
    options: &'static [FieldOption],
    default: &'static str,
) -> FieldSpec {
    FieldSpec {
        name,
        label,
        kind: FieldKind::Categorical { options },
        default,
    }
}

const fn yes_no(yes: &'static str, no: &'static str) -> [FieldOption; 2] {
    [
        FieldOption {
            value: "yes",
            label: yes,
        },
        FieldOption {
            value: "no",
            label: no,
        },
    ]
}

static MAINROAD_OPTIONS: [FieldOption; 2] = yes_no("Yes - On Main Road", "No - Not on Main Road");
static GUESTROOM_OPTIONS: [FieldOption; 2] = yes_no("Has Guest Room", "No Guest Room");
static BASEMENT_OPTIONS: [FieldOption; 2] = yes_no("Has Basement", "No Basement");
static HOTWATER_OPTIONS: [FieldOption; 2] = yes_no("Has Hot Water Heating", "No Hot Water Heating");
static AIRCON_OPTIONS: [FieldOption; 2] = yes_no("Has Air Conditioning", "No Air Conditioning");
static PREFAREA_OPTIONS: [FieldOption; 2] = yes_no("In Preferred Area", "Not in Preferred Area");

static FURNISHING_OPTIONS: [FieldOption; 3] = [
    FieldOption {
        value: "unfurnished",
        label: "Unfurnished",
    },
    FieldOption {
        value: "semi-furnished",
        label: "Semi-Furnished",
    },
    FieldOption {
        value: "furnished",
        label: "Fully Furnished",
    },
];

/// Every field of the form, in schema order
pub static FIELDS: [FieldSpec; 12] = [
    numeric("area", "Area (sq ft)", "Enter area in square feet"),
    numeric("bedrooms", "Bedrooms", "Number of bedrooms"),
    numeric("bathrooms", "Bathrooms", "Number of bathrooms"),
    numeric("stories", "Stories", "Number of stories"),
    categorical("mainroad", "Main Road Access", &MAINROAD_OPTIONS, "yes"),
    categorical("guestroom", "Guest Room", &GUESTROOM_OPTIONS, "no"),
    categorical("basement", "Basement", &BASEMENT_OPTIONS, "no"),
    categorical("hotwaterheating", "Hot Water Heating", &HOTWATER_OPTIONS, "no"),
    categorical("airconditioning", "Air Conditioning", &AIRCON_OPTIONS, "no"),
    numeric("parking", "Parking Spots", "Number of parking spots"),
    categorical("prefarea", "Preferred Area", &PREFAREA_OPTIONS, "no"),
    categorical(
        "furnishingstatus",
        "Furnishing Status",
        &FURNISHING_OPTIONS,
        "unfurnished",
    ),
];

/// Numeric fields that must be filled before submitting
static REQUIRED_NUMERIC: [&str; 5] = ["area", "bedrooms", "bathrooms", "stories", "parking"];

/// The five required numeric fields in validation order
pub fn required_numeric_fields() -> &'static [&'static str] {
    &REQUIRED_NUMERIC
}

/// Iterate all field names in schema order
#[allow(dead_code)]
pub fn all_field_names() -> impl Iterator<Item = &'static str> {
    FIELDS.iter().map(|f| f.name)
}

/// Schema defaults as (name, value) pairs in schema order
pub fn default_values() -> Vec<(&'static str, String)> {
    FIELDS
        .iter()
        .map(|f| (f.name, f.default.to_string()))
        .collect()
}

/// Look up a field by name
#[allow(dead_code)]
pub fn spec(name: &str) -> Option<&'static FieldSpec> {
    FIELDS.iter().find(|f| f.name == name)
}

/// Number of fields in the schema
pub fn field_count() -> usize {
    FIELDS.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_field_order() {
        let names: Vec<_> = all_field_names().collect();
        assert_eq!(
            names,
            vec![
                "area",
                "bedrooms",
                "bathrooms",
                "stories",
                "mainroad",
                "guestroom",
                "basement",
                "hotwaterheating",
                "airconditioning",
                "parking",
                "prefarea",
                "furnishingstatus",
            ]
        );
    }

    #[test]
    fn test_required_numeric_fields_are_numeric() {
        for name in required_numeric_fields() {
            let field = spec(name).unwrap();
            assert!(field.is_numeric(), "{name} should be numeric");
            assert_eq!(field.default, "");
        }
    }

    #[test]
    fn test_categorical_defaults() {
        assert_eq!(spec("mainroad").unwrap().default, "yes");
        assert_eq!(spec("guestroom").unwrap().default, "no");
        assert_eq!(spec("prefarea").unwrap().default, "no");
        assert_eq!(spec("furnishingstatus").unwrap().default, "unfurnished");
    }

    #[test]
    fn test_defaults_are_valid_options() {
        for field in FIELDS.iter().filter(|f| !f.is_numeric()) {
            assert!(
                field.option_label(field.default).is_some(),
                "default of {} is not one of its options",
                field.name
            );
        }
    }

    #[test]
    fn test_furnishing_options() {
        let values: Vec<_> = spec("furnishingstatus")
            .unwrap()
            .options()
            .iter()
            .map(|o| o.value)
            .collect();
        assert_eq!(values, vec!["unfurnished", "semi-furnished", "furnished"]);
    }

    #[test]
    fn test_numeric_field_has_no_options() {
        assert!(spec("area").unwrap().options().is_empty());
    }

    #[test]
    fn test_unknown_field() {
        assert!(spec("garage").is_none());
    }

    #[test]
    fn test_default_values_cover_schema() {
        let defaults = default_values();
        assert_eq!(defaults.len(), field_count());
        assert_eq!(defaults[0], ("area", String::new()));
        assert_eq!(defaults[4], ("mainroad", "yes".to_string()));
    }
}
