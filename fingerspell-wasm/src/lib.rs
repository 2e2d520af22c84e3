use fingerspell_core::Dispatcher;
use fingerspell_shared::{analyze, FrameError, FrameOutcome, HandLandmarkerResult};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

macro_rules! console_log {
    ($($t:tt)*) => (log(&format_args!($($t)*).to_string()))
}

/// Classify one `HandLandmarkerResult` JSON document.
/// Returns the report as JSON, or `None` when the frame has no hand.
pub fn recognize_json(
    dispatcher: &Dispatcher<'_>,
    result_json: &str,
) -> Result<Option<String>, FrameError> {
    let result = HandLandmarkerResult::from_json(result_json)?;
    match analyze(&result, dispatcher)? {
        FrameOutcome::NoHand => Ok(None),
        FrameOutcome::Hand(report) => Ok(Some(serde_json::to_string(&report)?)),
    }
}

/// Letter for one `HandLandmarkerResult` JSON document, `""` when none
pub fn letter_json(dispatcher: &Dispatcher<'_>, result_json: &str) -> Result<&'static str, FrameError> {
    let result = HandLandmarkerResult::from_json(result_json)?;
    Ok(analyze(&result, dispatcher)?.letter().unwrap_or(""))
}

fn to_js_error(err: FrameError) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}

/// Letter recognizer for the browser.
///
/// Feed it `JSON.stringify(handLandmarker.detectForVideo(video, now))` once
/// per animation frame.
#[wasm_bindgen]
pub struct SignRecognizer {
    dispatcher: Dispatcher<'static>,
}

#[wasm_bindgen]
impl SignRecognizer {
    #[wasm_bindgen(constructor)]
    pub fn new() -> SignRecognizer {
        let dispatcher = Dispatcher::reference();
        console_log!("Initializing sign recognizer with letters {:?}", dispatcher);
        SignRecognizer { dispatcher }
    }

    /// Full report as a JSON string, or `undefined` when no hand was detected
    pub fn recognize(&self, result_json: &str) -> Result<Option<String>, JsValue> {
        recognize_json(&self.dispatcher, result_json).map_err(to_js_error)
    }

    /// Detected letter, empty when there is no hand or no match
    pub fn letter(&self, result_json: &str) -> Result<String, JsValue> {
        let letter = letter_json(&self.dispatcher, result_json).map_err(to_js_error)?;
        if !letter.is_empty() {
            console_log!("Letter detected: {}", letter);
        }
        Ok(letter.to_string())
    }

    /// Registered letters in priority order
    pub fn letters(&self) -> Vec<String> {
        self.dispatcher.letters().map(String::from).collect()
    }
}

impl Default for SignRecognizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIST: &str = r#"{
        "landmarks": [[
            {"x": 0.5, "y": 0.9, "z": 0.0},
            {"x": 0.7, "y": 0.7, "z": 0.0},
            {"x": 0.6, "y": 0.6, "z": 0.0},
            {"x": 0.5, "y": 0.6, "z": 0.0},
            {"x": 0.4, "y": 0.6, "z": 0.0},
            {"x": 0.45, "y": 0.5, "z": 0.0},
            {"x": 0.45, "y": 0.6, "z": 0.0},
            {"x": 0.45, "y": 0.7, "z": 0.0},
            {"x": 0.45, "y": 0.8, "z": 0.0},
            {"x": 0.5, "y": 0.5, "z": 0.0},
            {"x": 0.5, "y": 0.6, "z": 0.0},
            {"x": 0.5, "y": 0.7, "z": 0.0},
            {"x": 0.5, "y": 0.8, "z": 0.0},
            {"x": 0.55, "y": 0.5, "z": 0.0},
            {"x": 0.55, "y": 0.6, "z": 0.0},
            {"x": 0.55, "y": 0.7, "z": 0.0},
            {"x": 0.55, "y": 0.8, "z": 0.0},
            {"x": 0.6, "y": 0.5, "z": 0.0},
            {"x": 0.6, "y": 0.6, "z": 0.0},
            {"x": 0.6, "y": 0.7, "z": 0.0},
            {"x": 0.6, "y": 0.8, "z": 0.0}
        ]],
        "handedness": [[{"score": 0.99, "index": 1, "categoryName": "Right", "displayName": "Right"}]]
    }"#;

    #[test]
    fn test_letter_from_json() {
        let dispatcher = Dispatcher::reference();
        assert_eq!(letter_json(&dispatcher, FIST).unwrap(), "A");
    }

    #[test]
    fn test_recognize_report() {
        let dispatcher = Dispatcher::reference();
        let report = recognize_json(&dispatcher, FIST).unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&report).unwrap();
        assert_eq!(value["letter"], "A");
        assert_eq!(value["anchor"]["y"].as_f64().map(|y| (y - 0.9).abs() < 1e-6), Some(true));
    }

    #[test]
    fn test_no_hand() {
        let dispatcher = Dispatcher::reference();
        let empty = r#"{"landmarks": [], "handedness": []}"#;
        assert_eq!(recognize_json(&dispatcher, empty).unwrap(), None);
        assert_eq!(letter_json(&dispatcher, empty).unwrap(), "");
    }

    #[test]
    fn test_bad_json() {
        let dispatcher = Dispatcher::reference();
        assert!(matches!(
            letter_json(&dispatcher, "[1, 2"),
            Err(FrameError::Json(_))
        ));
    }
}
