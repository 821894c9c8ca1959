//! Static assets served under `/static/`.
//!
//! The client script is generated so its refresh interval comes from
//! the same configuration the server uses; its decision table mirrors
//! `view::row_visible` exactly.

/// Placeholder substituted with the configured refresh interval.
const REFRESH_MS_SLOT: &str = "__REFRESH_MS__";

const APP_JS_TEMPLATE: &str = r#"function goToPatient(id) {
    window.location.href = `/patients/${id}`;
}

// Auto-refresh the dashboard only; the timer dies with the page.
document.addEventListener("DOMContentLoaded", () => {
    if (window.location.pathname === "/") {
        setInterval(() => {
            window.location.reload();
        }, __REFRESH_MS__);
    }
});

document.addEventListener("DOMContentLoaded", () => {
    const chips = document.querySelectorAll(".alert-filters .chip");
    const rows = document.querySelectorAll(".alert-item");

    if (!chips.length || !rows.length) return;

    chips.forEach((chip) => {
        chip.addEventListener("click", () => {
            const filter = chip.getAttribute("data-filter");

            chips.forEach((c) => c.classList.remove("chip-active"));
            chip.classList.add("chip-active");

            rows.forEach((row) => {
                let show = false;
                if (filter === "all") show = true;
                else if (filter === "critical") show = row.classList.contains("alert-critical");
                else if (filter === "warning") show = row.classList.contains("alert-warning");
                row.style.display = show ? "block" : "none";
            });
        });
    });
});
"#;

/// Render the dashboard client script with the configured refresh
/// interval baked in.
pub fn app_js(refresh_ms: u64) -> String {
    APP_JS_TEMPLATE.replace(REFRESH_MS_SLOT, &refresh_ms.to_string())
}

pub const STYLE_CSS: &str = r#"body {
    font-family: system-ui, sans-serif;
    margin: 0;
    background: #f4f6f8;
    color: #1c2733;
}
header {
    background: #14324f;
    color: #fff;
    padding: 0.8rem 1.5rem;
}
main {
    padding: 1rem 1.5rem;
}
.patient-grid {
    display: grid;
    grid-template-columns: repeat(auto-fill, minmax(240px, 1fr));
    gap: 0.8rem;
}
.patient-card {
    background: #fff;
    border-radius: 8px;
    padding: 0.8rem 1rem;
    box-shadow: 0 1px 3px rgba(0, 0, 0, 0.12);
    cursor: pointer;
}
.patient-card h3 {
    margin: 0 0 0.3rem;
}
.status-warning {
    border-left: 4px solid #e6a700;
}
.status-critical {
    border-left: 4px solid #c62828;
}
.alert-filters {
    margin: 1rem 0 0.5rem;
}
.chip {
    border: 1px solid #9fb3c8;
    border-radius: 999px;
    background: #fff;
    padding: 0.25rem 0.9rem;
    margin-right: 0.4rem;
    cursor: pointer;
}
.chip-active {
    background: #14324f;
    color: #fff;
    border-color: #14324f;
}
.alert-item {
    background: #fff;
    border-radius: 6px;
    padding: 0.5rem 0.8rem;
    margin-bottom: 0.4rem;
}
.alert-critical {
    border-left: 4px solid #c62828;
}
.alert-warning {
    border-left: 4px solid #e6a700;
}
.alert-info {
    border-left: 4px solid #5b7c99;
}
.alert-acked {
    opacity: 0.55;
}
table.vitals {
    border-collapse: collapse;
    background: #fff;
}
table.vitals th,
table.vitals td {
    border: 1px solid #d5dee7;
    padding: 0.3rem 0.7rem;
    text-align: right;
}
"#;
