//! The fixed food category catalog.
//!
//! The table follows the category taxonomy of Korean food-delivery
//! services. Ids are stable; downstream code sorts equal-scored
//! categories by id ascending, so reordering this table is a breaking
//! change.

use super::model::{FoodCategory, ServeTemperature};

const CATEGORIES: [FoodCategory; 20] = [
    FoodCategory {
        id: 1,
        name: "Korean",
        name_localized: "한식",
        serve_temperature: ServeTemperature::Hot,
        description: "Korean home-style dishes such as bulgogi, bibimbap, and gukbap",
    },
    FoodCategory {
        id: 2,
        name: "Stew & Soup",
        name_localized: "찜·탕",
        serve_temperature: ServeTemperature::Hot,
        description: "Braised dishes, hot pots, and simmered soups",
    },
    FoodCategory {
        id: 3,
        name: "Grilled",
        name_localized: "구이",
        serve_temperature: ServeTemperature::Hot,
        description: "Charcoal or pan grilled meats such as samgyeopsal and galbi",
    },
    FoodCategory {
        id: 4,
        name: "Chinese",
        name_localized: "중식",
        serve_temperature: ServeTemperature::Hot,
        description: "Korean-Chinese staples such as jjajangmyeon and jjamppong",
    },
    FoodCategory {
        id: 5,
        name: "Pork Cutlet",
        name_localized: "돈까스",
        serve_temperature: ServeTemperature::Hot,
        description: "Breaded pork cutlet and katsu variations",
    },
    FoodCategory {
        id: 6,
        name: "Fried Chicken",
        name_localized: "치킨",
        serve_temperature: ServeTemperature::Hot,
        description: "Fried and seasoned chicken",
    },
    FoodCategory {
        id: 7,
        name: "Burger",
        name_localized: "버거",
        serve_temperature: ServeTemperature::Warm,
        description: "Hamburgers and fast-food combos",
    },
    FoodCategory {
        id: 8,
        name: "Pizza",
        name_localized: "피자",
        serve_temperature: ServeTemperature::Warm,
        description: "Pizza and oven-baked sides",
    },
    FoodCategory {
        id: 9,
        name: "Western",
        name_localized: "양식",
        serve_temperature: ServeTemperature::Warm,
        description: "Pasta, steak, risotto, and other Western plates",
    },
    FoodCategory {
        id: 10,
        name: "Japanese",
        name_localized: "일식",
        serve_temperature: ServeTemperature::Warm,
        description: "Ramen, udon, donburi, and other Japanese dishes",
    },
    FoodCategory {
        id: 11,
        name: "Bunsik",
        name_localized: "분식",
        serve_temperature: ServeTemperature::Warm,
        description: "Korean street snacks such as tteokbokki and gimbap",
    },
    FoodCategory {
        id: 12,
        name: "Sandwich",
        name_localized: "샌드위치",
        serve_temperature: ServeTemperature::HotOrCold,
        description: "Sandwiches and toast",
    },
    FoodCategory {
        id: 13,
        name: "Lunch Box",
        name_localized: "도시락",
        serve_temperature: ServeTemperature::Warm,
        description: "Packed lunch boxes",
    },
    FoodCategory {
        id: 14,
        name: "Asian",
        name_localized: "아시안",
        serve_temperature: ServeTemperature::Warm,
        description: "Pan-Asian dishes such as pho, pad thai, and curry",
    },
    FoodCategory {
        id: 15,
        name: "Salad",
        name_localized: "샐러드",
        serve_temperature: ServeTemperature::Cold,
        description: "Salads and poke bowls",
    },
    FoodCategory {
        id: 16,
        name: "Sashimi & Sushi",
        name_localized: "회·초밥",
        serve_temperature: ServeTemperature::Cold,
        description: "Raw fish, sashimi, and sushi",
    },
    FoodCategory {
        id: 17,
        name: "Dessert",
        name_localized: "디저트",
        serve_temperature: ServeTemperature::Cold,
        description: "Cakes, bingsu, ice cream, and other sweets",
    },
    FoodCategory {
        id: 18,
        name: "Coffee & Tea",
        name_localized: "커피·차",
        serve_temperature: ServeTemperature::HotOrCold,
        description: "Coffee, lattes, and teas",
    },
    FoodCategory {
        id: 19,
        name: "Porridge",
        name_localized: "죽",
        serve_temperature: ServeTemperature::Hot,
        description: "Rice porridge such as abalone or pumpkin juk",
    },
    FoodCategory {
        id: 20,
        name: "Snacks",
        name_localized: "간식",
        serve_temperature: ServeTemperature::HotOrCold,
        description: "Light snacks such as rice cakes and cookies",
    },
];

/// Returns the full catalog.
pub fn all() -> &'static [FoodCategory] {
    &CATEGORIES
}

/// Finds a category by its stable id.
pub fn find_by_id(id: u32) -> Option<&'static FoodCategory> {
    CATEGORIES.iter().find(|c| c.id == id)
}

/// Finds a category by its localized name.
pub fn find_by_localized_name(name: &str) -> Option<&'static FoodCategory> {
    CATEGORIES.iter().find(|c| c.name_localized == name)
}
