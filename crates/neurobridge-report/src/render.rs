use tera::{Context, Tera};

use neurobridge_core::models::report::Report;
use neurobridge_core::models::responses::SymptomResponses;
use neurobridge_instruments::checklist::SymptomChecklist;

use crate::error::ReportError;

/// The plain-text summary template (Jinja2 syntax).
const SUMMARY_TEMPLATE: &str = "\
NeuroBridge Health Report
Generated on: {{ date }}

Risk Score: {{ risk_score }}%

Symptoms reported:
{{ positive_symptoms }}

Recommendations:
{% for rec in recommendations %}- {{ rec }}
{% endfor %}
Note: This is a screening tool, not a medical diagnosis.
";

/// Render the plain-text summary of a report.
pub fn render_text(report: &Report) -> Result<String, ReportError> {
    let mut tera = Tera::default();
    tera.add_raw_template("summary", SUMMARY_TEMPLATE)
        .map_err(|e| ReportError::TemplateParse(e.to_string()))?;

    // Funnel the context through serde_json so the template sees plain
    // JSON values
    let value = serde_json::json!({
        "date": report.generated_at.strftime("%Y-%m-%d %H:%M").to_string(),
        "risk_score": report.risk_score.value(),
        "positive_symptoms": positive_symptom_line(&report.symptoms),
        "recommendations": report.recommendations,
    });
    let context =
        Context::from_value(value).map_err(|e| ReportError::TemplateRender(e.to_string()))?;

    let rendered = tera.render("summary", &context)?;
    Ok(rendered)
}

/// Comma-separated positive symptom ids in checklist order, or the
/// literal "None" when no symptom was reported.
pub fn positive_symptom_line(responses: &SymptomResponses) -> String {
    let positives: Vec<&str> = SymptomChecklist::ids()
        .filter(|id| responses.answer(id).is_some_and(|a| a.is_yes()))
        .collect();
    if positives.is_empty() {
        "None".to_string()
    } else {
        positives.join(", ")
    }
}
