//! Keyword trigger table for preference mining.
//!
//! Maps each catalog category to the strings that count as a mention of
//! that category inside free-form chat text. The table is an explicit
//! static mapping so it can be tested and extended without touching the
//! scoring logic. Triggers overlap on purpose (e.g. "초밥" counts for
//! both 일식-adjacent chatter and 회·초밥); each category is scored
//! against its own list independently.

use super::model::FoodCategory;

/// Returns the trigger strings for a category.
///
/// Compound labels (찜·탕, 회·초밥, 커피·차) are triggered by their
/// components rather than the dotted label, which never appears in chat.
pub fn triggers_for(category: &FoodCategory) -> &'static [&'static str] {
    match category.id {
        1 => &["한식", "김치", "불고기", "된장", "비빔밥", "국밥", "제육"],
        2 => &["찜", "탕", "찌개", "전골", "감자탕", "갈비찜"],
        3 => &["구이", "삼겹살", "갈비", "곱창", "바베큐"],
        4 => &["중식", "짜장", "짬뽕", "탕수육", "마라", "볶음밥"],
        5 => &["돈까스", "돈가스", "카츠", "가츠"],
        6 => &["치킨", "후라이드", "양념치킨", "닭강정"],
        7 => &["버거", "햄버거"],
        8 => &["피자"],
        9 => &["양식", "파스타", "스테이크", "리조또"],
        10 => &["일식", "라멘", "우동", "돈부리", "규동"],
        11 => &["분식", "떡볶이", "김밥", "순대", "튀김", "라면"],
        12 => &["샌드위치", "샌드", "토스트"],
        13 => &["도시락", "벤또"],
        14 => &["아시안", "쌀국수", "팟타이", "분짜", "커리"],
        15 => &["샐러드", "포케"],
        16 => &["회", "초밥", "사시미", "물회", "스시"],
        17 => &["디저트", "케이크", "빙수", "아이스크림", "마카롱"],
        18 => &["커피", "라떼", "아메리카노", "녹차", "밀크티"],
        19 => &["죽", "전복죽", "호박죽"],
        20 => &["간식", "과자", "떡", "쿠키"],
        _ => &[],
    }
}
