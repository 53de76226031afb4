//! Подсказки регионов для карточки клиента.
//!
//! Список регионов РФ берётся из открытого набора данных hflabs/region.
//! Недоступность источника не ошибка: форма остаётся со свободным вводом.

use gloo_net::http::Request;
use serde::Deserialize;

const REGIONS_URL: &str = "https://raw.githubusercontent.com/hflabs/region/master/region.json";

#[derive(Debug, Deserialize)]
struct RegionRecord {
    name_with_type: String,
}

/// Загружает названия регионов, отсортированные по алфавиту.
pub async fn fetch_regions() -> Result<Vec<String>, String> {
    let response = Request::get(REGIONS_URL)
        .send()
        .await
        .map_err(|e| format!("Ошибка сети: {e}"))?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    let records: Vec<RegionRecord> = response
        .json()
        .await
        .map_err(|e| format!("Ошибка парсинга: {e}"))?;

    let mut names: Vec<String> = records.into_iter().map(|r| r.name_with_type).collect();
    names.sort();
    Ok(names)
}
