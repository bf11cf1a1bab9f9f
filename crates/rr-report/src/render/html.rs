//! Markup renderer.

use rr_common::{User, VisibleItem};

/// Render the HTML report.
///
/// Minimal document: heading, sub-heading naming the user, a table with one
/// row per visible item (priority rows carry bold styling), then the total
/// heading. The result is trimmed of leading and trailing whitespace.
pub fn render(heading: &str, user: &User, items: &[VisibleItem], total: f64) -> String {
    let rows: String = items
        .iter()
        .map(|item| {
            let style = if item.is_priority() {
                r#" style="font-weight: bold""#
            } else {
                ""
            };
            format!(
                "<tr{}><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                style,
                item.id,
                html_escape(&item.name),
                item.value
            )
        })
        .collect();

    format!(
        r#"<html>
<body>
<h1>{heading}</h1>
<h2>Usuario: {user}</h2>
<table>
<tr><th>ID</th><th>Nome</th><th>Valor</th></tr>
{rows}</table>
<h3>Total: {total}</h3>
</body>
</html>"#,
        heading = html_escape(heading),
        user = html_escape(&user.name),
        rows = rows,
        total = total,
    )
    .trim()
    .to_string()
}

/// Escape HTML special characters.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rr_common::{Item, Role};

    #[test]
    fn test_html_priority_row_is_bold() {
        let user = User::new("Bob", Role::Admin);
        let items = vec![VisibleItem::flagged(&Item::new(1, "X", 1500.0), true)];
        let html = render("Relatorio de Itens", &user, &items, 1500.0);
        assert!(html.contains(r#"<tr style="font-weight: bold"><td>1</td><td>X</td><td>1500</td></tr>"#));
        assert!(html.contains("<h3>Total: 1500</h3>"));
    }

    #[test]
    fn test_html_plain_row_has_no_style() {
        let user = User::new("Bob", Role::Admin);
        let items = vec![VisibleItem::flagged(&Item::new(1, "X", 10.0), false)];
        let html = render("Relatorio de Itens", &user, &items, 10.0);
        assert!(html.contains("<tr><td>1</td><td>X</td><td>10</td></tr>"));
        assert!(!html.contains("font-weight"));
    }

    #[test]
    fn test_html_names_the_user() {
        let user = User::new("Alice", Role::User);
        let html = render("Relatorio de Itens", &user, &[], 0.0);
        assert!(html.contains("<h2>Usuario: Alice</h2>"));
    }

    #[test]
    fn test_html_escape() {
        assert_eq!(html_escape("<script>"), "&lt;script&gt;");
        assert_eq!(html_escape("a & b"), "a &amp; b");
        assert_eq!(html_escape(r#""quoted""#), "&quot;quoted&quot;");
    }

    #[test]
    fn test_html_escapes_item_names() {
        let user = User::new("Bob", Role::Admin);
        let items = vec![VisibleItem::flagged(&Item::new(1, "<b>X</b>", 10.0), false)];
        let html = render("Relatorio de Itens", &user, &items, 10.0);
        assert!(html.contains("&lt;b&gt;X&lt;/b&gt;"));
    }
}
