// Landing page markup. The footer shows a live stats snapshot.

use crate::stats::StatsSnapshot;

/// Render the landing page with the given stats in its footer.
pub fn render_index(stats: &StatsSnapshot) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
    <head>
        <title>Star Wars API Demo</title>
        <meta charset="UTF-8">
        <style>
            body {{ font-family: Arial, sans-serif; max-width: 800px; margin: 0 auto; padding: 20px; }}
            h1 {{ color: #FFE81F; background-color: #000; padding: 10px; text-align: center; border-radius: 5px; }}
            button {{ background-color: #FFE81F; border: 1px solid #000; padding: 10px 20px; cursor: pointer; font-size: 16px; border-radius: 3px; }}
            button:hover {{ opacity: 0.8; }}
            .footer {{ margin-top: 50px; font-size: 12px; color: #666; border-top: 1px solid #ccc; padding-top: 10px; }}
            pre {{ background: #f4f4f4; padding: 10px; border-radius: 5px; white-space: pre-wrap; word-wrap: break-word; }}
            #results {{ margin-top: 20px; font-weight: bold; }}
        </style>
    </head>
    <body>
        <h1>Star Wars API Demo</h1>
        <p>Click the button to fetch Star Wars API data through the server. Detailed results are printed on the server console.</p>
        <button onclick="fetchFromPage()">Fetch Star Wars Data</button>
        <div id="results"></div>
        <script>
            function fetchFromPage() {{
                const results = document.getElementById('results');
                results.innerHTML = '<p>Loading data... Please wait.</p>';
                fetch('/api')
                    .then(res => {{
                        if (!res.ok) throw new Error('Network response was not OK');
                        return res.text();
                    }})
                    .then(() => {{
                        results.innerHTML = '<p>Data fetched! Check the server console for full details.</p>';
                    }})
                    .catch(err => {{
                        results.innerHTML = '<p>Error: could not fetch data. ' + err.message + '</p>';
                    }});
            }}
        </script>
        <div class="footer">
            <p>Current statistics:</p>
            <pre>{}</pre>
        </div>
    </body>
</html>
"#,
        stats_line(stats)
    )
}

fn stats_line(stats: &StatsSnapshot) -> String {
    format!(
        "API runs: {} | Cache entries: {} | Errors: {} | Debug: {} | Timeout: {}ms",
        stats.run_count,
        stats.cache_entries,
        stats.error_count,
        if stats.debug { "ON" } else { "OFF" },
        stats.timeout_ms
    )
}
