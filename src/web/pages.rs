//! Server-rendered HTML for the dashboard and patient detail pages.
//!
//! Rendering is deliberately declarative: chip active state and row
//! visibility come from `view`, so the initial markup and the client
//! script always agree on what is shown.

use crate::models::{Alert, Patient, Severity};
use crate::web::view::{self, AlertFilter};

/// Minimal HTML text escaping for user-influenced strings.
fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn page(title: &str, body: &str) -> String {
    format!(
        "<!doctype html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{}</title>\n<link rel=\"stylesheet\" href=\"/static/style.css\">\n\
         </head>\n<body>\n<header><h1>{}</h1></header>\n<main>\n{}\n</main>\n\
         <script src=\"/static/app.js\"></script>\n</body>\n</html>\n",
        escape(title),
        escape(title),
        body
    )
}

fn patient_card(p: &Patient) -> String {
    let status_class = match p.status {
        Severity::Info => String::new(),
        other => format!(" status-{}", other.as_str()),
    };
    let vitals = match p.latest_vitals() {
        Some(v) => format!(
            "HR {} bpm · SpO2 {}% · BP {} · T {:.1}°C",
            v.heart_rate,
            v.spo2,
            v.bp_display(),
            v.temperature
        ),
        None => "no readings yet".to_string(),
    };
    format!(
        "<div class=\"patient-card{}\" onclick=\"goToPatient({})\">\
         <h3>{}</h3><p>{} · {}</p><p>{}</p></div>",
        status_class,
        p.id,
        escape(&p.name),
        escape(&p.room),
        escape(&p.condition),
        escape(&vitals)
    )
}

fn filter_chips(selected: Option<&str>) -> String {
    let parsed = selected.and_then(AlertFilter::from_str);
    let mut out = String::from("<div class=\"alert-filters\">");
    for chip in AlertFilter::CHIPS {
        let active = if parsed == Some(chip) {
            " chip-active"
        } else {
            ""
        };
        out.push_str(&format!(
            "<button class=\"chip{}\" data-filter=\"{}\">{}</button>",
            active,
            chip.as_str(),
            chip.label()
        ));
    }
    out.push_str("</div>");
    out
}

fn alert_row(alert: &Alert, selected: Option<&str>) -> String {
    // No selection means the implicit initial state: everything shown.
    let visible = match selected {
        None => true,
        Some(raw) => view::row_visible_raw(raw, Some(alert.severity)),
    };
    let acked = if alert.acknowledged { " alert-acked" } else { "" };
    format!(
        "<div class=\"alert-item {}{}\" style=\"display:{}\">\
         <span>{}</span> \
         <form method=\"post\" action=\"/alerts/{}/ack\" style=\"display:inline\">\
         <button type=\"submit\">Ack</button></form></div>",
        alert.severity.css_class(),
        acked,
        view::display_style(visible),
        escape(&alert.message),
        alert.id
    )
}

/// The dashboard: patient cards, filter chips, and the alert list.
/// `selected` is the raw `?filter=` value, if any.
pub fn dashboard(patients: &[Patient], alerts: &[Alert], selected: Option<&str>) -> String {
    let mut body = String::from("<section class=\"patient-grid\">");
    for p in patients {
        body.push_str(&patient_card(p));
    }
    body.push_str("</section>");

    body.push_str("<h2>Alerts</h2>");
    body.push_str(&filter_chips(selected));
    body.push_str("<section class=\"alert-list\">");
    for alert in alerts {
        body.push_str(&alert_row(alert, selected));
    }
    body.push_str("</section>");

    page("Ward Dashboard", &body)
}

/// Patient detail: latest vitals, reading history, raised alerts.
pub fn patient_detail(p: &Patient) -> String {
    let mut body = format!(
        "<p><a href=\"/\">&larr; Dashboard</a></p>\
         <h2>{} — {} ({})</h2><p>Status: {}</p>",
        escape(&p.name),
        escape(&p.room),
        escape(&p.condition),
        p.status.as_str()
    );

    body.push_str(
        "<h3>Vitals history</h3><table class=\"vitals\">\
         <tr><th>Time</th><th>HR</th><th>SpO2</th><th>BP</th><th>Temp</th></tr>",
    );
    for v in p.vitals_history.iter().rev() {
        body.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}%</td><td>{}</td><td>{:.1}°C</td></tr>",
            v.timestamp.format("%H:%M:%S"),
            v.heart_rate,
            v.spo2,
            v.bp_display(),
            v.temperature
        ));
    }
    body.push_str("</table>");

    body.push_str("<h3>Alerts</h3>");
    if p.alerts.is_empty() {
        body.push_str("<p>No alerts.</p>");
    } else {
        for alert in p.alerts.iter().rev() {
            body.push_str(&alert_row(alert, None));
        }
    }

    page(&p.name, &body)
}

pub fn not_found(what: &str) -> String {
    page("Not Found", &format!("<p>{}</p>", escape(what)))
}
