//! Instructions sent to the model for a medicine lookup.

use super::record::MedicineRecord;

/// System turn for every lookup.
pub const SYSTEM_PROMPT: &str =
    "You are a medical information specialist. Provide accurate drug information in exact JSON format.";

/// Builds the user turn for a lookup over `names`.
///
/// With `get_all` the model is asked for a JSON array holding one record per
/// medicine it recognizes; otherwise for a single record describing the most
/// common or relevant medicine of the list. Every name is embedded verbatim.
pub fn build_prompt(names: &[String], get_all: bool) -> String {
    let names = render_names(names);
    let template = MedicineRecord::template();

    if get_all {
        format!(
            r#"For each medicine in {names}, provide information as a JSON object with these fields per medicine:
{template}
Return a JSON array of these objects, one for each valid medicine you can identify.
Important:
- Only return valid JSON array
- Skip any unrecognized medicine names
- Maintain the exact field structure"#
        )
    } else {
        format!(
            r#"Provide information about one medicine from {names} as a single JSON object with these fields:
{template}
Choose the most common/relevant medicine from the list.
Important:
- Only return valid JSON object
- Maintain the exact field structure"#
        )
    }
}

fn render_names(names: &[String]) -> String {
    let quoted: Vec<String> = names.iter().map(|name| quote(name)).collect();
    format!("[{}]", quoted.join(", "))
}

// Single quotes unless the name holds one and no double quote. Never escapes,
// so the name stays a literal substring of the prompt.
fn quote(name: &str) -> String {
    if name.contains('\'') && !name.contains('"') {
        format!("\"{name}\"")
    } else {
        format!("'{name}'")
    }
}
