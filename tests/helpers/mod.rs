#![allow(dead_code)]

use neurocite::citation::Source;
use neurocite::config::CitationConfig;

/// Default engine configuration for tests.
pub fn config() -> CitationConfig {
    CitationConfig::default()
}

/// A four-sentence answer about AI in medicine, matching the fixture the
/// medical sources below were written against.
pub fn medical_answer() -> &'static str {
    "AI is used in medical diagnosis to improve accuracy. \
     Machine learning models can analyze patient data effectively. \
     Healthcare providers increasingly adopt these technologies. \
     The benefits include faster diagnosis and better outcomes."
}

/// Two sources about medical AI accuracy and healthcare ML adoption.
pub fn medical_sources() -> Vec<Source> {
    vec![
        Source {
            id: "summary_1".to_string(),
            content: "Medical AI systems improve diagnostic accuracy in clinical settings"
                .to_string(),
            relevance: 0.9,
            kind: "summary".to_string(),
            source_name: "Summary (general)".to_string(),
            timestamp: None,
        },
        Source {
            id: "conversation_1".to_string(),
            content: "Healthcare providers adopt machine learning technologies".to_string(),
            relevance: 0.8,
            kind: "stored_conversation".to_string(),
            source_name: "Previous AI Conversation".to_string(),
            timestamp: Some("2026-08-01T12:00:00Z".to_string()),
        },
    ]
}

/// A backend chat response body carrying the medical fixture.
pub fn medical_payload_json() -> String {
    format!(
        r#"{{"answer": {}, "sources": {}}}"#,
        serde_json::to_string(medical_answer()).unwrap(),
        serde_json::to_string(&medical_sources()).unwrap()
    )
}
