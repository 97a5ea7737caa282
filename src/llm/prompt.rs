use crate::models::DiagnosisInput;

pub const DIAGNOSIS_SYSTEM_PROMPT: &str = "You are a medical AI specialist providing differential diagnosis assistance. Always respond with valid JSON only. Be fast and accurate.";

/// Build the differential-diagnosis prompt for one intake.
///
/// `timestamp` is echoed into the required JSON shape so the model's
/// reply carries the analysis time without a second round trip.
pub fn build_diagnosis_prompt(input: &DiagnosisInput, timestamp: &str) -> String {
    let mut demographics = Vec::new();
    if let Some(age) = input.age {
        demographics.push(format!("Age: {age}"));
    }
    if let Some(gender) = &input.gender {
        demographics.push(format!("Gender: {}", gender.as_str()));
    }

    let mut prompt = String::new();
    prompt.push_str(
        "You are an expert medical AI assistant specializing in differential diagnosis. \
         Analyze the following patient presentation and provide a ranked list of potential diagnoses.\n\n",
    );

    prompt.push_str("Patient Presentation:\n");
    prompt.push_str(&format!("- Primary Symptom: {}\n", input.primary_symptom));
    if !input.associated_symptoms.is_empty() {
        prompt.push_str(&format!(
            "- Associated Symptoms: {}\n",
            input.associated_symptoms.join(", ")
        ));
    }
    if !demographics.is_empty() {
        prompt.push_str(&format!(
            "- Patient Demographics: {}\n",
            demographics.join(", ")
        ));
    }

    prompt.push_str(&format!(
        r#"
Please provide your analysis in the following JSON format:
{{
  "summary": "Brief analysis summary explaining the approach and key considerations",
  "results": [
    {{
      "condition": "Medical condition name",
      "probability": 85,
      "explanation": "Clear explanation of why this condition fits the symptoms",
      "urgency": "urgent|moderate|mild",
      "matchingSymptoms": ["symptom1", "symptom2"],
      "recommendations": ["specific recommendation 1", "specific recommendation 2"]
    }}
  ],
  "recommendations": ["Overall recommendations for next steps", "General advice"],
  "analysisTimestamp": "{timestamp}"
}}

Guidelines:
- Provide 3-6 differential diagnoses ranked by likelihood
- Include probability percentages (0-100)
- Consider red flag symptoms that require urgent attention
- Provide specific, actionable recommendations
- Use proper medical terminology but explain clearly
- Consider age and gender when relevant to the diagnosis
- Mark urgent conditions that require immediate medical attention
- Focus on the most likely conditions based on symptom correlation

Remember: This is for educational purposes only and should not replace professional medical evaluation."#
    ));

    prompt
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Gender;

    fn input(primary: &str) -> DiagnosisInput {
        DiagnosisInput {
            primary_symptom: primary.into(),
            associated_symptoms: vec![],
            age: None,
            gender: None,
        }
    }

    #[test]
    fn prompt_includes_primary_symptom() {
        let prompt = build_diagnosis_prompt(&input("crushing chest pain"), "2026-01-01T00:00:00Z");
        assert!(prompt.contains("- Primary Symptom: crushing chest pain"));
    }

    #[test]
    fn optional_sections_are_omitted_when_absent() {
        let prompt = build_diagnosis_prompt(&input("fever"), "2026-01-01T00:00:00Z");
        assert!(!prompt.contains("Associated Symptoms"));
        assert!(!prompt.contains("Patient Demographics"));
    }

    #[test]
    fn associated_symptoms_and_demographics_render() {
        let full = DiagnosisInput {
            primary_symptom: "headache".into(),
            associated_symptoms: vec!["nausea".into(), "photophobia".into()],
            age: Some(34),
            gender: Some(Gender::Female),
        };
        let prompt = build_diagnosis_prompt(&full, "2026-01-01T00:00:00Z");
        assert!(prompt.contains("- Associated Symptoms: nausea, photophobia"));
        assert!(prompt.contains("- Patient Demographics: Age: 34, Gender: female"));
    }

    #[test]
    fn prompt_pins_the_reply_schema_and_timestamp() {
        let prompt = build_diagnosis_prompt(&input("cough"), "2026-03-04T05:06:07Z");
        assert!(prompt.contains("\"analysisTimestamp\": \"2026-03-04T05:06:07Z\""));
        assert!(prompt.contains("\"urgency\": \"urgent|moderate|mild\""));
        assert!(prompt.contains("matchingSymptoms"));
    }
}
