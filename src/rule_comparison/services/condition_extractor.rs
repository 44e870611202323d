use crate::rule_comparison::domain::ConditionRecord;
use roxmltree::{Document, Node};

/// Rendered right-hand side for an atomic condition without a value.
const NULL_TOKEN: &str = "NULL";

/// Extracts one [`ConditionRecord`] per `ReceiverRule` element, in
/// document order.
///
/// Order matters for stable display only; comparison joins by component
/// identity. A rule with no condition blocks still yields a record (with
/// the `No conditions` sentinel), never an omitted one.
pub fn extract(doc: &Document) -> Vec<ConditionRecord> {
    doc.descendants()
        .filter(|n| n.has_tag_name("ReceiverRule"))
        .map(extract_rule)
        .collect()
}

fn extract_rule(rule: Node) -> ConditionRecord {
    let component = non_empty(child_text(rule, "ComponentID"))
        .unwrap_or(ConditionRecord::UNKNOWN_COMPONENT)
        .to_string();

    let block_strings: Vec<String> = rule
        .children()
        .filter(|n| n.has_tag_name("AtomicConditionBlock"))
        .filter_map(render_block)
        .collect();

    let condition = if block_strings.is_empty() {
        ConditionRecord::NO_CONDITIONS.to_string()
    } else {
        block_strings.join(" OR ")
    };

    let description = child_text(rule, "Description").unwrap_or_default().to_string();

    // Only the exact value "false" deactivates a rule; any other value,
    // including an absent attribute, means active.
    let is_active = rule.attribute("active") != Some("false");

    ConditionRecord::new(component, condition, description, is_active)
}

/// Renders one OR-branch as its AND-joined atomic conditions.
/// Returns `None` when no atomic condition in the block produced output,
/// so empty AND-groups never reach the OR join.
fn render_block(block: Node) -> Option<String> {
    let atoms: Vec<String> = block
        .children()
        .filter(|n| n.has_tag_name("AtomicCondition"))
        .filter_map(render_atomic)
        .collect();

    if atoms.is_empty() {
        None
    } else {
        Some(atoms.join(" AND "))
    }
}

/// Renders one atomic comparison as `left operator right`.
///
/// Missing or empty `left`/`operator` invalidates the whole atomic
/// condition; a missing or empty `right` is cosmetic and renders as
/// `NULL`.
fn render_atomic(cond: Node) -> Option<String> {
    let left = non_empty(extractor_value(cond, "LeftExtractor"))?;
    let operator = non_empty(child_text(cond, "Operator"))?;
    let right = non_empty(extractor_value(cond, "RightExtractor")).unwrap_or(NULL_TOKEN);

    Some(format!("{} {} {}", left, normalize_operator(operator), right))
}

/// Maps raw operator codes to display tokens. Unknown codes pass through
/// unchanged rather than failing the extraction.
fn normalize_operator(op: &str) -> &str {
    match op {
        "EQ" => "=",
        "NE" => "≠",
        "LIKE" => "≈",
        other => other,
    }
}

/// Text of the first child element with the given tag name, if any.
/// Absence of an element or of its text is not a failure.
fn child_text<'a>(node: Node<'a, '_>, name: &str) -> Option<&'a str> {
    node.children()
        .find(|c| c.has_tag_name(name))
        .and_then(|c| c.text())
}

/// Text of the `Value` leaf nested under the given extractor element.
fn extractor_value<'a>(node: Node<'a, '_>, extractor: &str) -> Option<&'a str> {
    node.children()
        .find(|c| c.has_tag_name(extractor))
        .and_then(|c| child_text(c, "Value"))
}

fn non_empty(text: Option<&str>) -> Option<&str> {
    text.filter(|t| !t.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule_comparison::domain::Environment;
    use crate::rule_comparison::services::document_parser;

    fn extract_from(xml: &str) -> Vec<ConditionRecord> {
        let doc = document_parser::parse(Environment::Development, xml).unwrap();
        extract(&doc)
    }

    fn rule_xml(component: &str, blocks: &str) -> String {
        format!(
            "<root><ReceiverRule><ComponentID>{}</ComponentID>{}</ReceiverRule></root>",
            component, blocks
        )
    }

    fn atomic(left: &str, operator: &str, right: &str) -> String {
        format!(
            "<AtomicCondition>\
             <LeftExtractor><Value>{}</Value></LeftExtractor>\
             <Operator>{}</Operator>\
             <RightExtractor><Value>{}</Value></RightExtractor>\
             </AtomicCondition>",
            left, operator, right
        )
    }

    #[test]
    fn test_single_eq_condition() {
        let xml = rule_xml(
            "CompX",
            &format!("<AtomicConditionBlock>{}</AtomicConditionBlock>", atomic("A", "EQ", "1")),
        );
        let records = extract_from(&xml);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].component, "CompX");
        assert_eq!(records[0].condition, "A = 1");
    }

    #[test]
    fn test_operator_normalization() {
        for (code, rendered) in [("EQ", "A = 1"), ("NE", "A ≠ 1"), ("LIKE", "A ≈ 1")] {
            let xml = rule_xml(
                "CompX",
                &format!("<AtomicConditionBlock>{}</AtomicConditionBlock>", atomic("A", code, "1")),
            );
            assert_eq!(extract_from(&xml)[0].condition, rendered);
        }
    }

    #[test]
    fn test_unknown_operator_passes_through() {
        let xml = rule_xml(
            "CompX",
            &format!("<AtomicConditionBlock>{}</AtomicConditionBlock>", atomic("A", "GT", "1")),
        );
        assert_eq!(extract_from(&xml)[0].condition, "A GT 1");
    }

    #[test]
    fn test_missing_right_renders_null() {
        let xml = rule_xml(
            "CompX",
            "<AtomicConditionBlock><AtomicCondition>\
             <LeftExtractor><Value>A</Value></LeftExtractor>\
             <Operator>NE</Operator>\
             </AtomicCondition></AtomicConditionBlock>",
        );
        assert_eq!(extract_from(&xml)[0].condition, "A ≠ NULL");
    }

    #[test]
    fn test_empty_right_renders_null() {
        let xml = rule_xml(
            "CompX",
            "<AtomicConditionBlock><AtomicCondition>\
             <LeftExtractor><Value>A</Value></LeftExtractor>\
             <Operator>EQ</Operator>\
             <RightExtractor><Value></Value></RightExtractor>\
             </AtomicCondition></AtomicConditionBlock>",
        );
        assert_eq!(extract_from(&xml)[0].condition, "A = NULL");
    }

    #[test]
    fn test_missing_left_skips_atomic_condition() {
        let xml = rule_xml(
            "CompX",
            "<AtomicConditionBlock><AtomicCondition>\
             <Operator>EQ</Operator>\
             <RightExtractor><Value>1</Value></RightExtractor>\
             </AtomicCondition></AtomicConditionBlock>",
        );
        // The only atomic condition is invalid, so the block is empty and
        // the rule falls back to the sentinel.
        assert_eq!(extract_from(&xml)[0].condition, ConditionRecord::NO_CONDITIONS);
    }

    #[test]
    fn test_missing_operator_skips_atomic_condition() {
        let blocks = format!(
            "<AtomicConditionBlock>\
             <AtomicCondition>\
             <LeftExtractor><Value>A</Value></LeftExtractor>\
             <RightExtractor><Value>1</Value></RightExtractor>\
             </AtomicCondition>{}</AtomicConditionBlock>",
            atomic("B", "EQ", "2")
        );
        let xml = rule_xml("CompX", &blocks);
        // The invalid term contributes nothing; the valid one survives.
        assert_eq!(extract_from(&xml)[0].condition, "B = 2");
    }

    #[test]
    fn test_and_join_within_block() {
        let blocks = format!(
            "<AtomicConditionBlock>{}{}</AtomicConditionBlock>",
            atomic("A", "EQ", "1"),
            atomic("B", "EQ", "2")
        );
        let xml = rule_xml("CompX", &blocks);
        assert_eq!(extract_from(&xml)[0].condition, "A = 1 AND B = 2");
    }

    #[test]
    fn test_or_join_across_blocks() {
        let blocks = format!(
            "<AtomicConditionBlock>{}</AtomicConditionBlock>\
             <AtomicConditionBlock>{}</AtomicConditionBlock>",
            atomic("A", "EQ", "1"),
            atomic("B", "EQ", "2")
        );
        let xml = rule_xml("CompX", &blocks);
        assert_eq!(extract_from(&xml)[0].condition, "A = 1 OR B = 2");
    }

    #[test]
    fn test_empty_block_skipped_in_or_join() {
        let blocks = format!(
            "<AtomicConditionBlock></AtomicConditionBlock>\
             <AtomicConditionBlock>{}</AtomicConditionBlock>",
            atomic("B", "EQ", "2")
        );
        let xml = rule_xml("CompX", &blocks);
        assert_eq!(extract_from(&xml)[0].condition, "B = 2");
    }

    #[test]
    fn test_rule_without_blocks_yields_sentinel_record() {
        let records = extract_from(&rule_xml("CompY", ""));
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].condition, ConditionRecord::NO_CONDITIONS);
        assert!(records[0].has_no_conditions());
    }

    #[test]
    fn test_missing_component_defaults_to_unknown() {
        let xml = "<root><ReceiverRule></ReceiverRule></root>";
        let records = extract_from(xml);
        assert_eq!(records[0].component, ConditionRecord::UNKNOWN_COMPONENT);
    }

    #[test]
    fn test_empty_component_defaults_to_unknown() {
        let xml = "<root><ReceiverRule><ComponentID></ComponentID></ReceiverRule></root>";
        let records = extract_from(xml);
        assert_eq!(records[0].component, ConditionRecord::UNKNOWN_COMPONENT);
    }

    #[test]
    fn test_description_and_default() {
        let xml = "<root>\
                   <ReceiverRule><ComponentID>CompA</ComponentID>\
                   <Description>Main route</Description></ReceiverRule>\
                   <ReceiverRule><ComponentID>CompB</ComponentID></ReceiverRule>\
                   </root>";
        let records = extract_from(xml);
        assert_eq!(records[0].description, "Main route");
        assert_eq!(records[1].description, "");
    }

    #[test]
    fn test_active_attribute() {
        let xml = "<root>\
                   <ReceiverRule active=\"false\"><ComponentID>CompA</ComponentID></ReceiverRule>\
                   <ReceiverRule active=\"true\"><ComponentID>CompB</ComponentID></ReceiverRule>\
                   <ReceiverRule active=\"FALSE\"><ComponentID>CompC</ComponentID></ReceiverRule>\
                   <ReceiverRule><ComponentID>CompD</ComponentID></ReceiverRule>\
                   </root>";
        let records = extract_from(xml);
        assert!(!records[0].is_active);
        assert!(records[1].is_active);
        // Only the exact value "false" deactivates.
        assert!(records[2].is_active);
        assert!(records[3].is_active);
    }

    #[test]
    fn test_document_order_preserved() {
        let xml = "<root>\
                   <ReceiverRule><ComponentID>CompB</ComponentID></ReceiverRule>\
                   <ReceiverRule><ComponentID>CompA</ComponentID></ReceiverRule>\
                   </root>";
        let components: Vec<String> =
            extract_from(xml).into_iter().map(|r| r.component).collect();
        assert_eq!(components, vec!["CompB", "CompA"]);
    }

    #[test]
    fn test_duplicate_components_produce_multiple_records() {
        let xml = "<root>\
                   <ReceiverRule><ComponentID>CompA</ComponentID></ReceiverRule>\
                   <ReceiverRule><ComponentID>CompA</ComponentID></ReceiverRule>\
                   </root>";
        assert_eq!(extract_from(xml).len(), 2);
    }

    #[test]
    fn test_extraction_is_deterministic() {
        let blocks = format!(
            "<AtomicConditionBlock>{}{}</AtomicConditionBlock>",
            atomic("A", "EQ", "1"),
            atomic("B", "LIKE", "x%")
        );
        let xml = rule_xml("CompX", &blocks);
        assert_eq!(extract_from(&xml), extract_from(&xml));
    }
}
