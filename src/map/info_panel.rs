use crate::reference::ReferenceLink;

/// What the info panel shows for the selected place
#[derive(Debug, Clone, PartialEq)]
pub enum PanelContent {
    /// Lookup in flight
    Loading { title: String },
    Links { title: String, links: Vec<ReferenceLink> },
    Failed { title: String, message: String },
}

impl PanelContent {
    pub fn title(&self) -> &str {
        match self {
            PanelContent::Loading { title }
            | PanelContent::Links { title, .. }
            | PanelContent::Failed { title, .. } => title,
        }
    }

    /// Markup handed to the map widget's info window
    pub fn to_html(&self) -> String {
        let mut html = format!(
            "<div role=\"dialog\" class=\"infowindow\" tabindex=\"0\" aria-labelledby=\"infowindow-help\">\
             <h2>{}</h2><p id=\"infowindow-help\">Relevant Wikipedia Links</p><ul>",
            escape_html(self.title())
        );

        match self {
            PanelContent::Loading { .. } => {
                html.push_str("<li class=\"infowindow-item\">Loading...</li>");
            }
            PanelContent::Links { links, .. } => {
                for link in links {
                    html.push_str(&format!(
                        "<li class=\"infowindow-item\"><a target=\"_blank\" rel=\"noopener noreferrer\" href=\"{}\">{}</a></li>",
                        escape_html(&link.url),
                        escape_html(&link.title)
                    ));
                }
            }
            PanelContent::Failed { message, .. } => {
                html.push_str(&format!(
                    "<p class=\"error\" style=\"color:red\">{}</p>",
                    escape_html(message)
                ));
            }
        }

        html.push_str("</ul></div>");
        html
    }
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
