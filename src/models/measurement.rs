use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum GarmentCategory {
    Shirt,
    Pants,
    Blouse,
    Dress,
    Suit,
}

impl GarmentCategory {
    pub const ALL: [GarmentCategory; 5] = [
        GarmentCategory::Shirt,
        GarmentCategory::Pants,
        GarmentCategory::Blouse,
        GarmentCategory::Dress,
        GarmentCategory::Suit,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GarmentCategory::Shirt => "shirt",
            GarmentCategory::Pants => "pants",
            GarmentCategory::Blouse => "blouse",
            GarmentCategory::Dress => "dress",
            GarmentCategory::Suit => "suit",
        }
    }

    pub fn fields(&self) -> &'static [FieldSpec] {
        match self {
            GarmentCategory::Shirt => SHIRT_FIELDS,
            GarmentCategory::Pants => PANTS_FIELDS,
            GarmentCategory::Blouse => BLOUSE_FIELDS,
            GarmentCategory::Dress => DRESS_FIELDS,
            GarmentCategory::Suit => SUIT_FIELDS,
        }
    }

    pub fn accepts(&self, field: MeasurementField) -> bool {
        self.fields().iter().any(|spec| spec.field == field)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum MeasurementField {
    Neck,
    Chest,
    Waist,
    Hips,
    Inseam,
    Sleeve,
    Shoulder,
    Thigh,
    Length,
}

impl MeasurementField {
    pub fn as_str(&self) -> &'static str {
        match self {
            MeasurementField::Neck => "neck",
            MeasurementField::Chest => "chest",
            MeasurementField::Waist => "waist",
            MeasurementField::Hips => "hips",
            MeasurementField::Inseam => "inseam",
            MeasurementField::Sleeve => "sleeve",
            MeasurementField::Shoulder => "shoulder",
            MeasurementField::Thigh => "thigh",
            MeasurementField::Length => "length",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct FieldSpec {
    pub field: MeasurementField,
    pub label: &'static str,
    pub description: &'static str,
}

const fn spec(field: MeasurementField, label: &'static str, description: &'static str) -> FieldSpec {
    FieldSpec {
        field,
        label,
        description,
    }
}

const NECK: FieldSpec = spec(MeasurementField::Neck, "Neck", "Around the base of your neck");
const CHEST: FieldSpec = spec(
    MeasurementField::Chest,
    "Chest",
    "Around the fullest part of your chest",
);
const BUST: FieldSpec = spec(
    MeasurementField::Chest,
    "Bust",
    "Around the fullest part of your bust",
);
const WAIST: FieldSpec = spec(MeasurementField::Waist, "Waist", "Around your natural waistline");
const HIPS: FieldSpec = spec(
    MeasurementField::Hips,
    "Hips",
    "Around the fullest part of your hips",
);
const THIGH: FieldSpec = spec(
    MeasurementField::Thigh,
    "Thigh",
    "Around the fullest part of your thigh",
);
const INSEAM: FieldSpec = spec(MeasurementField::Inseam, "Inseam", "From crotch to ankle");
const SLEEVE: FieldSpec = spec(
    MeasurementField::Sleeve,
    "Sleeve",
    "From shoulder to wrist with arm bent",
);
const SHOULDER: FieldSpec = spec(
    MeasurementField::Shoulder,
    "Shoulder",
    "From shoulder point to shoulder point",
);

const SHIRT_FIELDS: &[FieldSpec] = &[
    NECK,
    CHEST,
    WAIST,
    SLEEVE,
    SHOULDER,
    spec(
        MeasurementField::Length,
        "Shirt Length",
        "From back of neck to desired hem",
    ),
];

const PANTS_FIELDS: &[FieldSpec] = &[
    WAIST,
    HIPS,
    THIGH,
    INSEAM,
    spec(
        MeasurementField::Length,
        "Outseam",
        "From waist to ankle on outside",
    ),
];

const BLOUSE_FIELDS: &[FieldSpec] = &[
    BUST,
    WAIST,
    SLEEVE,
    SHOULDER,
    spec(
        MeasurementField::Length,
        "Blouse Length",
        "From shoulder to desired hem",
    ),
];

const DRESS_FIELDS: &[FieldSpec] = &[
    BUST,
    WAIST,
    HIPS,
    SHOULDER,
    spec(
        MeasurementField::Length,
        "Dress Length",
        "From shoulder to desired hem",
    ),
];

const SUIT_FIELDS: &[FieldSpec] = &[NECK, CHEST, WAIST, HIPS, INSEAM, SLEEVE, SHOULDER];

pub type CategoryMeasurements = BTreeMap<MeasurementField, f64>;

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(transparent)]
pub struct MeasurementProfile {
    categories: BTreeMap<GarmentCategory, CategoryMeasurements>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CategoryCompletion {
    pub category: GarmentCategory,
    pub completed: usize,
    pub total: usize,
    pub percent: f64,
}

impl MeasurementProfile {
    pub fn from_raw(raw: BTreeMap<GarmentCategory, CategoryMeasurements>) -> Result<Self, AppError> {
        let mut profile = Self::default();
        for (category, fields) in raw {
            for (field, value) in fields {
                profile.set(category, field, Some(value))?;
            }
        }
        Ok(profile)
    }

    pub fn get(&self, category: GarmentCategory, field: MeasurementField) -> Option<f64> {
        self.categories
            .get(&category)
            .and_then(|fields| fields.get(&field))
            .copied()
    }

    pub fn category(&self, category: GarmentCategory) -> Option<&CategoryMeasurements> {
        self.categories.get(&category)
    }

    pub fn set(
        &mut self,
        category: GarmentCategory,
        field: MeasurementField,
        value: Option<f64>,
    ) -> Result<(), AppError> {
        if !category.accepts(field) {
            return Err(AppError::BadRequest(format!(
                "{} is not a {} measurement",
                field.as_str(),
                category.as_str()
            )));
        }

        match value {
            Some(inches) if !inches.is_finite() || inches <= 0.0 => Err(AppError::BadRequest(
                format!("measurement must be a positive number, got {inches}"),
            )),
            Some(inches) => {
                self.categories
                    .entry(category)
                    .or_default()
                    .insert(field, inches);
                Ok(())
            }
            None => {
                if let Some(fields) = self.categories.get_mut(&category) {
                    fields.remove(&field);
                    if fields.is_empty() {
                        self.categories.remove(&category);
                    }
                }
                Ok(())
            }
        }
    }

    pub fn has_measurements(&self) -> bool {
        self.categories.values().any(|fields| !fields.is_empty())
    }

    pub fn completion(&self, category: GarmentCategory) -> CategoryCompletion {
        let total = category.fields().len();
        let completed = category
            .fields()
            .iter()
            .filter(|spec| self.get(category, spec.field).is_some())
            .count();

        CategoryCompletion {
            category,
            completed,
            total,
            percent: completed as f64 / total as f64 * 100.0,
        }
    }

    pub fn total_completed(&self) -> usize {
        GarmentCategory::ALL
            .iter()
            .map(|category| self.completion(*category).completed)
            .sum()
    }
}
