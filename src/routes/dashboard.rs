//! HTML dashboard.

use axum::{Router, extract::State, response::Html, routing::get};

use crate::models::{CounterSnapshot, Device};
use crate::state::AppState;

/// Registers the dashboard route.
pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(dashboard))
}

async fn dashboard(State(state): State<AppState>) -> Html<String> {
    let snapshot = state.counters.snapshot();
    Html(render_page(&snapshot, state.config.features.reset_enabled))
}

const STYLE: &str = r#"
    :root {
      color-scheme: light dark;
      font-family: "Segoe UI", Roboto, "Helvetica Neue", Arial, sans-serif;
    }
    body {
      margin: 0;
      min-height: 100vh;
      display: flex;
      align-items: center;
      justify-content: center;
      background: linear-gradient(135deg, #0f2027, #203a43, #2c5364);
      color: #0f172a;
    }
    .card {
      background: #f8fafc;
      border-radius: 18px;
      box-shadow: 0 18px 50px rgba(15, 23, 42, 0.25);
      width: min(90vw, 640px);
      padding: 40px;
      box-sizing: border-box;
    }
    h1 { margin: 0 0 8px; font-weight: 600; letter-spacing: -0.01em; }
    p.description { margin: 0 0 24px; color: #475569; font-size: 0.98rem; }
    .stats {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(140px, 1fr));
      gap: 16px;
      margin-bottom: 28px;
    }
    .stat {
      background: white;
      border-radius: 12px;
      padding: 16px 18px;
      box-shadow: inset 0 1px 0 rgba(148, 163, 184, 0.1);
    }
    .stat-label {
      font-size: 0.8rem;
      text-transform: uppercase;
      letter-spacing: 0.08em;
      color: #64748b;
    }
    .stat-value { margin-top: 8px; font-size: 1.9rem; font-weight: 600; }
    .devices { display: flex; flex-wrap: wrap; gap: 8px; margin: 0 0 28px; padding: 0; list-style: none; }
    .devices li { background: #e2e8f0; border-radius: 999px; padding: 4px 12px; font-size: 0.85rem; color: #334155; }
    .actions { display: flex; gap: 16px; flex-wrap: wrap; }
    button {
      background: linear-gradient(135deg, #2563eb, #4f46e5);
      border: none;
      border-radius: 999px;
      padding: 12px 22px;
      font-size: 0.95rem;
      font-weight: 600;
      color: white;
      cursor: pointer;
      transition: transform 0.15s ease, box-shadow 0.15s ease;
      box-shadow: 0 10px 30px rgba(59, 130, 246, 0.35);
    }
    button:hover { transform: translateY(-2px); box-shadow: 0 14px 36px rgba(79, 70, 229, 0.35); }
    button:active { transform: translateY(0); }
    button.reset { background: linear-gradient(135deg, #ef4444, #f97316); box-shadow: 0 10px 30px rgba(239, 68, 68, 0.35); }
    .links { margin-top: 32px; font-size: 0.9rem; color: #475569; }
    .links a { color: #2563eb; text-decoration: none; font-weight: 500; }
    .links a:hover { text-decoration: underline; }
"#;

/// Renders the full dashboard page for `snapshot`.
///
/// The reset form is only emitted when the reset route is mounted.
pub fn render_page(snapshot: &CounterSnapshot, reset_enabled: bool) -> String {
    let devices: String = Device::ALL
        .iter()
        .filter_map(|device| {
            let count = snapshot.device_count(*device);
            (count > 0).then(|| format!("<li>{}: {}</li>", device, count))
        })
        .collect();
    let devices = if devices.is_empty() {
        "<li>no requests yet</li>".to_string()
    } else {
        devices
    };

    let reset_form = if reset_enabled {
        r#"
      <form method="POST" action="/reset">
        <button type="submit" class="reset">Reset Counters</button>
      </form>"#
    } else {
        ""
    };

    format!(
        r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width,initial-scale=1">
  <title>SRE Demo Dashboard</title>
  <style>{style}</style>
</head>
<body>
  <main class="card">
    <h1>SRE / DevOps Demo</h1>
    <p class="description">Monitor visitor traffic, experiment with replica scaling, and explore instrumentation data exported to Prometheus.</p>
    <section class="stats">
      <article class="stat">
        <div class="stat-label">Total Visits</div>
        <div class="stat-value" id="visits">{visits}</div>
      </article>
      <article class="stat">
        <div class="stat-label">Active Replicas</div>
        <div class="stat-value" id="replicas">{replicas}</div>
      </article>
    </section>
    <ul class="devices">{devices}</ul>
    <section class="actions">
      <form method="POST" action="/visit">
        <button type="submit">Record Visit</button>
      </form>
      <form method="POST" action="/scale">
        <button type="submit">Scale Up Replica</button>
      </form>{reset_form}
    </section>
    <p class="links">Metrics: <a href="/metrics">/metrics</a> &nbsp;&bull;&nbsp; Health: <a href="/healthz">/healthz</a></p>
  </main>
</body>
</html>
"#,
        style = STYLE,
        visits = snapshot.visits,
        replicas = snapshot.replicas,
        devices = devices,
        reset_form = reset_form,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::Metrics;
    use crate::models::DemoCounters;

    #[test]
    fn shows_counters() {
        let counters = DemoCounters::new();
        let metrics = Metrics::new();
        for _ in 0..4 {
            counters.record_visit(&metrics);
        }
        counters.scale_up(&metrics);

        let html = render_page(&counters.snapshot(), true);
        assert!(html.contains(r#"<div class="stat-value" id="visits">4</div>"#));
        assert!(html.contains(r#"<div class="stat-value" id="replicas">2</div>"#));
    }

    #[test]
    fn lists_only_seen_devices() {
        let counters = DemoCounters::new();
        assert!(render_page(&counters.snapshot(), true).contains("no requests yet"));

        counters.record_device(Device::Ipad, &Metrics::new());
        let html = render_page(&counters.snapshot(), true);
        assert!(html.contains("<li>ipad: 1</li>"));
        assert!(!html.contains("android:"));
        assert!(!html.contains("no requests yet"));
    }

    #[test]
    fn reset_form_follows_toggle() {
        let snapshot = DemoCounters::new().snapshot();
        assert!(render_page(&snapshot, true).contains(r#"action="/reset""#));
        assert!(!render_page(&snapshot, false).contains(r#"action="/reset""#));
    }
}
