use crate::models::DiagnosisAnalysis;

use super::ModelError;

/// Parse the model's reply into a [`DiagnosisAnalysis`].
///
/// Accepts either a bare JSON document (what `responseMimeType`
/// requests) or a fenced ```json block (what models emit when the mime
/// hint is ignored), then enforces the candidate contract the
/// annotation layer depends on.
pub fn parse_analysis(reply: &str) -> Result<DiagnosisAnalysis, ModelError> {
    let json = extract_json(reply);

    let analysis: DiagnosisAnalysis =
        serde_json::from_str(json).map_err(|e| ModelError::MalformedReply(e.to_string()))?;

    validate(&analysis)?;
    Ok(analysis)
}

/// Strip a ```json fence if present; otherwise the whole trimmed reply
/// is the document.
fn extract_json(reply: &str) -> &str {
    if let Some(start) = reply.find("```json") {
        let content = &reply[start + 7..];
        if let Some(end) = content.find("```") {
            return content[..end].trim();
        }
    }
    reply.trim()
}

fn validate(analysis: &DiagnosisAnalysis) -> Result<(), ModelError> {
    if analysis.summary.trim().is_empty() {
        return Err(ModelError::InvalidReply("summary is empty".into()));
    }

    for (index, candidate) in analysis.results.iter().enumerate() {
        if candidate.condition.trim().is_empty() {
            return Err(ModelError::InvalidReply(format!(
                "result {index} has an empty condition name"
            )));
        }
        if candidate.probability > 100 {
            return Err(ModelError::InvalidReply(format!(
                "result {index} probability {} is out of range 0-100",
                candidate.probability
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Urgency;

    fn sample_json() -> &'static str {
        r#"{
            "summary": "Symptoms point to a primary headache disorder.",
            "results": [
                {
                    "condition": "Migraine",
                    "probability": 70,
                    "explanation": "Unilateral throbbing pain with photophobia",
                    "urgency": "moderate",
                    "matchingSymptoms": ["headache", "nausea"],
                    "recommendations": ["Rest in a dark room"]
                },
                {
                    "condition": "Tension Headache",
                    "probability": 45,
                    "explanation": "Band-like pressure without aura",
                    "urgency": "mild",
                    "matchingSymptoms": ["headache"],
                    "recommendations": ["Over-the-counter analgesics"]
                }
            ],
            "recommendations": ["See a clinician if symptoms persist"],
            "analysisTimestamp": "2026-02-03T10:00:00Z"
        }"#
    }

    #[test]
    fn parses_bare_json() {
        let analysis = parse_analysis(sample_json()).unwrap();
        assert_eq!(analysis.results.len(), 2);
        assert_eq!(analysis.results[0].condition, "Migraine");
        assert_eq!(analysis.results[0].urgency, Urgency::Moderate);
        assert_eq!(analysis.analysis_timestamp, "2026-02-03T10:00:00Z");
    }

    #[test]
    fn parses_fenced_json_block() {
        let fenced = format!("Here is the analysis:\n```json\n{}\n```\n", sample_json());
        let analysis = parse_analysis(&fenced).unwrap();
        assert_eq!(analysis.results.len(), 2);
    }

    #[test]
    fn result_order_is_preserved() {
        let analysis = parse_analysis(sample_json()).unwrap();
        assert_eq!(analysis.results[0].condition, "Migraine");
        assert_eq!(analysis.results[1].condition, "Tension Headache");
    }

    #[test]
    fn prose_reply_is_malformed() {
        let err = parse_analysis("I'm sorry, I cannot help with that.").unwrap_err();
        assert!(matches!(err, ModelError::MalformedReply(_)));
    }

    #[test]
    fn missing_results_field_is_malformed() {
        let err = parse_analysis(r#"{"summary": "ok"}"#).unwrap_err();
        assert!(matches!(err, ModelError::MalformedReply(_)));
    }

    #[test]
    fn empty_summary_is_invalid() {
        let err =
            parse_analysis(r#"{"summary": "  ", "results": []}"#).unwrap_err();
        assert!(matches!(err, ModelError::InvalidReply(_)));
    }

    #[test]
    fn empty_results_are_allowed() {
        let analysis = parse_analysis(r#"{"summary": "nothing stands out", "results": []}"#).unwrap();
        assert!(analysis.results.is_empty());
        assert!(analysis.analysis_timestamp.is_empty());
    }

    #[test]
    fn out_of_range_probability_is_invalid() {
        let reply = r#"{
            "summary": "ok",
            "results": [{
                "condition": "Migraine",
                "probability": 150,
                "explanation": "x",
                "urgency": "mild",
                "matchingSymptoms": [],
                "recommendations": []
            }]
        }"#;
        let err = parse_analysis(reply).unwrap_err();
        assert!(matches!(err, ModelError::InvalidReply(_)));
    }

    #[test]
    fn empty_condition_name_is_invalid() {
        let reply = r#"{
            "summary": "ok",
            "results": [{
                "condition": "  ",
                "probability": 50,
                "explanation": "x",
                "urgency": "mild",
                "matchingSymptoms": [],
                "recommendations": []
            }]
        }"#;
        let err = parse_analysis(reply).unwrap_err();
        assert!(matches!(err, ModelError::InvalidReply(_)));
    }

    #[test]
    fn unknown_urgency_is_malformed() {
        let reply = r#"{
            "summary": "ok",
            "results": [{
                "condition": "Migraine",
                "probability": 50,
                "explanation": "x",
                "urgency": "critical",
                "matchingSymptoms": [],
                "recommendations": []
            }]
        }"#;
        let err = parse_analysis(reply).unwrap_err();
        assert!(matches!(err, ModelError::MalformedReply(_)));
    }
}
