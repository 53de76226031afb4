/// Выгрузка списков в CSV и JSON через скачивание файла браузером.
use serde::Serialize;
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Выгружает строки таблицы в CSV файл и инициирует скачивание.
///
/// Разделитель — точка с запятой, в начале файла UTF-8 BOM,
/// иначе Excel не распознаёт кириллицу.
pub fn export_csv(headers: &[&str], rows: &[Vec<String>], filename: &str) -> Result<(), String> {
    if rows.is_empty() {
        return Err("Нет данных для экспорта".to_string());
    }

    let mut csv_content = String::new();
    csv_content.push('\u{FEFF}');
    csv_content.push_str(&headers.join(";"));
    csv_content.push('\n');

    for row in rows {
        let escaped_row: Vec<String> = row.iter().map(|cell| escape_csv_cell(cell)).collect();
        csv_content.push_str(&escaped_row.join(";"));
        csv_content.push('\n');
    }

    let blob = create_blob(&csv_content, "text/csv;charset=utf-8;")?;
    download_blob(&blob, filename)
}

/// Выгружает записи в JSON файл.
pub fn export_json<T: Serialize>(items: &[T], filename: &str) -> Result<(), String> {
    if items.is_empty() {
        return Err("Нет данных для экспорта".to_string());
    }

    let json_content = serde_json::to_string_pretty(items)
        .map_err(|e| format!("Ошибка сериализации: {e}"))?;

    let blob = create_blob(&json_content, "application/json;charset=utf-8;")?;
    download_blob(&blob, filename)
}

/// Экранирует CSV ячейку если необходимо
fn escape_csv_cell(cell: &str) -> String {
    if cell.contains(';') || cell.contains('"') || cell.contains('\n') || cell.contains('\r') {
        let escaped = cell.replace('"', "\"\"");
        format!("\"{}\"", escaped)
    } else {
        cell.to_string()
    }
}

fn create_blob(content: &str, mime: &str) -> Result<Blob, String> {
    let array = js_sys::Array::new();
    array.push(&wasm_bindgen::JsValue::from_str(content));

    let properties = BlobPropertyBag::new();
    properties.set_type(mime);

    Blob::new_with_str_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))
}

/// Инициирует скачивание Blob через браузер
fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("Failed to set style: {:?}", e))?;

    document
        .body()
        .ok_or("No body element")?
        .append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;

    anchor.click();

    document
        .body()
        .ok_or("No body element")?
        .remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {:?}", e))?;

    Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke URL: {:?}", e))?;

    Ok(())
}
