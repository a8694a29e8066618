//! Network layer: artwork CRUD against the persistence backend and the AI
//! metadata suggestion endpoint. All same-origin HTTP; no retries, no
//! timeouts — every failure is terminal for that one action.

use gallery_core::{seed_artworks, Artwork, Draft, SuggestedMetadata};
use gloo_net::http::Request;
use wasm_bindgen::JsValue;
use web_sys::FormData;

const ARTWORKS_URL: &str = "/api/artworks";
const SUGGEST_URL: &str = "/api/generate-metadata";

/// Fetch the listing, failing soft: any transport or parse error, and an
/// empty backend, fall back to the fixed seed collection. The viewer never
/// sees a listing error.
pub async fn fetch_artworks() -> Vec<Artwork> {
    match fetch_listing().await {
        Ok(list) if !list.is_empty() => list,
        Ok(_) => {
            log::info!("[api] backend listing empty, using seed collection");
            seed_artworks()
        }
        Err(e) => {
            log::error!("[api] listing fetch failed, using seed collection: {:?}", e);
            seed_artworks()
        }
    }
}

async fn fetch_listing() -> Result<Vec<Artwork>, JsValue> {
    let resp = Request::get(ARTWORKS_URL)
        .send()
        .await
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    if !resp.ok() {
        return Err(JsValue::from_str(&format!("HTTP {}", resp.status())));
    }
    let text = resp
        .text()
        .await
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    serde_json::from_str(&text).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn draft_form(draft: &Draft) -> Result<FormData, JsValue> {
    let form = FormData::new()?;
    form.append_with_str("title", &draft.title)?;
    form.append_with_str("artist", &draft.artist)?;
    form.append_with_str("year", &draft.year)?;
    form.append_with_str("medium", &draft.medium)?;
    form.append_with_str("dimensions", &draft.dimensions)?;
    form.append_with_str("imageUrl", &draft.image_url)?;
    Ok(form)
}

async fn parse_artwork(resp: gloo_net::http::Response) -> Result<Artwork, JsValue> {
    if !resp.ok() {
        return Err(JsValue::from_str(&format!("HTTP {}", resp.status())));
    }
    let text = resp
        .text()
        .await
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    serde_json::from_str(&text).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Create a new artwork; the backend assigns the id and echoes the record.
pub async fn create_artwork(draft: &Draft) -> Result<Artwork, JsValue> {
    let form = draft_form(draft)?;
    let resp = Request::post(ARTWORKS_URL)
        .body(form)
        .map_err(|e| JsValue::from_str(&e.to_string()))?
        .send()
        .await
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    parse_artwork(resp).await
}

/// Update an existing artwork; the backend echoes the updated record.
pub async fn update_artwork(id: &str, draft: &Draft) -> Result<Artwork, JsValue> {
    let form = draft_form(draft)?;
    let resp = Request::put(&format!("{ARTWORKS_URL}/{id}"))
        .body(form)
        .map_err(|e| JsValue::from_str(&e.to_string()))?
        .send()
        .await
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    parse_artwork(resp).await
}

/// Delete by id. The backend treats unknown ids as a no-op, so a 404 here
/// is not an error either.
pub async fn delete_artwork(id: &str) -> Result<(), JsValue> {
    let resp = Request::delete(&format!("{ARTWORKS_URL}/{id}"))
        .send()
        .await
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    if resp.ok() || resp.status() == 404 {
        Ok(())
    } else {
        Err(JsValue::from_str(&format!("HTTP {}", resp.status())))
    }
}

/// Ask the suggestion backend for metadata matching a free-text prompt.
pub async fn suggest_metadata(prompt: &str) -> Result<SuggestedMetadata, JsValue> {
    let resp = Request::post(SUGGEST_URL)
        .json(&serde_json::json!({ "prompt": prompt }))
        .map_err(|e| JsValue::from_str(&e.to_string()))?
        .send()
        .await
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    if !resp.ok() {
        return Err(JsValue::from_str(&format!("HTTP {}", resp.status())));
    }
    let text = resp
        .text()
        .await
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    serde_json::from_str(&text).map_err(|e| JsValue::from_str(&e.to_string()))
}
