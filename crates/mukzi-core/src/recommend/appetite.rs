//! Fixed appetite classification of catalog categories.
//!
//! The satiety term looks categories up by localized name in these fixed
//! sets; the classification is data, not computation. Categories in no
//! set (currently only 회·초밥) receive no satiety term at all.

use crate::catalog::FoodCategory;
use serde::{Deserialize, Serialize};

/// How filling a category is, for satiety weighting.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "lowercase")]
pub enum AppetiteClass {
    Hearty,
    Moderate,
    Light,
}

const HEARTY: &[&str] = &["한식", "찜·탕", "구이", "중식", "돈까스", "치킨", "버거"];
const MODERATE: &[&str] = &["피자", "양식", "일식", "분식", "샌드위치", "도시락", "아시안"];
const LIGHT: &[&str] = &["샐러드", "디저트", "커피·차", "간식", "죽"];

/// Looks up the appetite class of a category.
pub fn appetite_class(category: &FoodCategory) -> Option<AppetiteClass> {
    if HEARTY.contains(&category.name_localized) {
        Some(AppetiteClass::Hearty)
    } else if MODERATE.contains(&category.name_localized) {
        Some(AppetiteClass::Moderate)
    } else if LIGHT.contains(&category.name_localized) {
        Some(AppetiteClass::Light)
    } else {
        None
    }
}
