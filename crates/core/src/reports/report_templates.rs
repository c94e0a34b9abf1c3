use super::reports_model::ReportTemplate;

const TEMPLATES: [(&str, &str, &str, &str); 4] = [
    (
        "template-monthly-summary",
        "Monthly Summary",
        "summary",
        "Overview of total spend, active subscriptions, and upcoming renewals.",
    ),
    (
        "template-category-breakdown",
        "Category Breakdown",
        "category",
        "Spending by category with optimization insights.",
    ),
    (
        "template-trend",
        "Trend Report",
        "trend",
        "Historical costs, growth trajectory, and forecasts.",
    ),
    (
        "template-tax",
        "Tax Ready Export",
        "tax",
        "Line-item export grouped by vendor for finance teams.",
    ),
];

/// The fixed report templates offered to every owner.
pub fn report_templates() -> Vec<ReportTemplate> {
    TEMPLATES
        .iter()
        .map(|(id, name, report_type, description)| ReportTemplate {
            id: id.to_string(),
            name: name.to_string(),
            report_type: report_type.to_string(),
            description: description.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::ReportKind;

    #[test]
    fn test_templates_are_fixed_and_ordered() {
        let templates = report_templates();
        let ids: Vec<&str> = templates.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "template-monthly-summary",
                "template-category-breakdown",
                "template-trend",
                "template-tax",
            ]
        );
    }

    #[test]
    fn test_trend_and_tax_have_no_dedicated_assembler() {
        let unassembled: Vec<String> = report_templates()
            .into_iter()
            .filter(|t| ReportKind::parse(&t.report_type).is_none())
            .map(|t| t.report_type)
            .collect();
        assert_eq!(unassembled, vec!["trend", "tax"]);
    }

    #[test]
    fn test_template_serializes_type_field() {
        let json = serde_json::to_value(&report_templates()[0]).unwrap();
        assert_eq!(json["type"], "summary");
        assert_eq!(json["name"], "Monthly Summary");
    }
}
