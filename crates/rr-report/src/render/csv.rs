//! Delimited-text renderer.

use rr_common::{User, VisibleItem};

/// Render the CSV report.
///
/// Header, one row per visible item with the requesting user's name repeated
/// on every row, a blank separator line, then the `Total` footer. The result
/// is trimmed of leading and trailing whitespace.
pub fn render(user: &User, items: &[VisibleItem], total: f64) -> String {
    let mut out = String::from("ID,NOME,VALOR,USUARIO\n");

    for item in items {
        out.push_str(&format!(
            "{},{},{},{}\n",
            item.id, item.name, item.value, user.name
        ));
    }

    out.push('\n');
    out.push_str("Total,,\n");
    out.push_str(&format!("{},,", total));

    out.trim().to_string()
}
