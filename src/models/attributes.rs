//! Canonical garment attributes derived from lot descriptions
//!
//! An `AttributeTuple` is recomputed from the description whenever needed,
//! never stored on the lot itself. The ledger is keyed by `AttributeKey`,
//! whose `storage_key()` is the only place a key string is ever built.

use serde::{Deserialize, Serialize};

/// Gender classification of a lot description
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Gender {
    F,
    M,
    Girl,
    Boy,
    Baby,
    Unisex,
}

impl Gender {
    /// Stable code used in ledger keys and stored documents
    pub fn code(&self) -> &'static str {
        match self {
            Gender::F => "F",
            Gender::M => "M",
            Gender::Girl => "GIRL",
            Gender::Boy => "BOY",
            Gender::Baby => "BABY",
            Gender::Unisex => "UNISEX",
        }
    }

    /// Portuguese label for the low-stock report
    pub fn label(&self) -> &'static str {
        match self {
            Gender::F => "senhora",
            Gender::M => "senhor",
            Gender::Girl => "menina",
            Gender::Boy => "menino",
            Gender::Baby => "bebé",
            Gender::Unisex => "unissexo",
        }
    }
}

/// Age scale of a size token
///
/// `Clothes` means adult-scale garment sizes; `Shoes` is the numeric
/// shoe-band heuristic, independent of the garment-category keyword scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgeCategory {
    Baby,
    Child,
    #[default]
    Clothes,
    Shoes,
}

impl AgeCategory {
    /// Portuguese label for the low-stock report
    pub fn label(&self) -> &'static str {
        match self {
            AgeCategory::Baby => "bebé",
            AgeCategory::Child => "criança",
            AgeCategory::Clothes => "adulto",
            AgeCategory::Shoes => "calçado",
        }
    }
}

/// Garment category keyword classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GarmentCategory {
    Sweater,
    Jacket,
    Trousers,
    Tshirt,
    Dress,
    Skirt,
    Babygrow,
    Socks,
    Shoes,
    #[default]
    Clothes,
}

impl GarmentCategory {
    /// Portuguese label for the low-stock report
    pub fn label(&self) -> &'static str {
        match self {
            GarmentCategory::Sweater => "camisola",
            GarmentCategory::Jacket => "casaco",
            GarmentCategory::Trousers => "calças",
            GarmentCategory::Tshirt => "t-shirt",
            GarmentCategory::Dress => "vestido",
            GarmentCategory::Skirt => "saia",
            GarmentCategory::Babygrow => "babygrow",
            GarmentCategory::Socks => "meias",
            GarmentCategory::Shoes => "calçado",
            GarmentCategory::Clothes => "roupa",
        }
    }
}

/// Full derived attribute set of a lot description
///
/// Either the whole tuple exists or none of it does: the size pattern match
/// gates extraction, so there are no partial tuples.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeTuple {
    /// Canonical size string, e.g. `"4-8 MESES"`, `"XL"`, `"38"`
    pub size: String,
    pub gender: Gender,
    pub age_category: AgeCategory,
    pub garment_category: GarmentCategory,
}

impl AttributeTuple {
    /// Ledger key for this attribute set
    pub fn key(&self) -> AttributeKey {
        AttributeKey {
            gender: self.gender,
            size: self.size.clone(),
        }
    }
}

/// Canonical ledger key: `(gender, size)`
///
/// Age and garment category are denormalized metadata on the ledger entry,
/// not key components. Increment and decrement must agree on the key string
/// for the same attribute set or the ledger silently drifts, so the
/// serialization lives here and nowhere else.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AttributeKey {
    pub gender: Gender,
    pub size: String,
}

impl AttributeKey {
    /// Current key serialization: `"<GENDER>-<SIZE>"`
    pub const FORMAT_VERSION: &'static str = "gender-size/v1";

    /// Document id of the ledger entry for this key
    pub fn storage_key(&self) -> String {
        format!("{}-{}", self.gender.code(), self.size)
    }
}
