//! Browser downloads of dashboard data
use serde::Serialize;
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Pretty-printed JSON body of an export
pub fn to_export_json<T: Serialize>(data: &T) -> Result<String, String> {
    serde_json::to_string_pretty(data).map_err(|e| format!("Failed to serialize export: {}", e))
}

/// Serialize `data` as pretty JSON and download it as `filename`
pub fn export_json<T: Serialize>(data: &T, filename: &str) -> Result<(), String> {
    let content = to_export_json(data)?;
    let blob = create_blob(&content, "application/json")?;
    download_blob(&blob, filename)?;
    log::info!("Exported {}", filename);
    Ok(())
}

fn create_blob(content: &str, mime: &str) -> Result<Blob, String> {
    let array = js_sys::Array::new();
    array.push(&wasm_bindgen::JsValue::from_str(content));

    let properties = BlobPropertyBag::new();
    properties.set_type(mime);

    Blob::new_with_str_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))
}

/// Click a temporary anchor pointing at an object URL for `blob`
fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;
    let body = document.body().ok_or("No body element")?;

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

    body.append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;
    anchor.click();
    body.remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {:?}", e))?;

    Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke URL: {:?}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Sample {
        playbook_id: &'static str,
        steps: Vec<u32>,
    }

    #[test]
    fn test_export_json_is_pretty() {
        let json = to_export_json(&Sample {
            playbook_id: "pb_1",
            steps: vec![1, 2],
        })
        .unwrap();
        assert!(json.starts_with("{\n  \"playbook_id\": \"pb_1\""));
        assert!(json.contains("\"steps\": [\n    1,\n    2\n  ]"));
    }
}
