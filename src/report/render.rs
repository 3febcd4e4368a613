//! HTML rendering of the country report
//!
//! The document is self-contained apart from the icon font stylesheet: CSS
//! and the row reveal script are inlined.

use chrono::{DateTime, Local};

use crate::record::CountryRecord;
use crate::report::ReportConfig;
use crate::report::aggregate::ReportStats;
use crate::report::format::{escape_html, format_area, format_population, group_thousands};

/// Format of the generation timestamp in the footer
pub const TIMESTAMP_FORMAT: &str = "%d.%m.%Y %H:%M:%S";

const ICON_STYLESHEET: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.4.0/css/all.min.css";

/// Render the full report document
///
/// # Arguments
///
/// * `records` - Records in display order
/// * `stats` - Aggregates shown in the header
/// * `config` - Title and attribution settings
/// * `generated_at` - Timestamp printed in the footer
pub fn render_report(
    records: &[CountryRecord],
    stats: &ReportStats,
    config: &ReportConfig,
    generated_at: &DateTime<Local>,
) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <link rel="stylesheet" href="{icons}">
    <style>{css}</style>
</head>
<body>
    <div class="container">
{header}
        <div class="table-container">
            <table>
                <thead>
                    <tr>
                        <th><i class="fas fa-hashtag"></i>#</th>
                        <th><i class="fas fa-flag"></i>Country</th>
                        <th><i class="fas fa-landmark"></i>Capital</th>
                        <th><i class="fas fa-users"></i>Population</th>
                        <th><i class="fas fa-mountain"></i>Area (km²)</th>
                    </tr>
                </thead>
                <tbody>{rows}
                </tbody>
            </table>
        </div>
{footer}
    </div>
    <script>{js}</script>
</body>
</html>
"#,
        title = escape_html(&config.title),
        icons = ICON_STYLESHEET,
        css = INLINE_CSS,
        header = render_header(stats, config),
        rows = render_rows(records),
        footer = render_footer(config, generated_at),
        js = INLINE_JS,
    )
}

fn render_header(stats: &ReportStats, config: &ReportConfig) -> String {
    format!(
        r#"        <header>
            <h1><i class="fas fa-globe-americas"></i>{title}</h1>
            <p>A catalogue of countries with their capitals, population and area</p>
            <div class="stats-bar">
                <div class="stat-item">
                    <i class="fas fa-flag"></i>
                    <span>Countries: <strong>{count}</strong></span>
                </div>
                <div class="stat-item">
                    <i class="fas fa-users"></i>
                    <span>Population: <strong>{total}</strong></span>
                </div>
                <div class="stat-item">
                    <i class="fas fa-chart-line"></i>
                    <span>Average: <strong>{average}</strong> people/country</span>
                </div>
            </div>
        </header>"#,
        title = escape_html(&config.title),
        count = group_thousands(stats.count as u64),
        total = group_thousands(stats.total_population),
        average = group_thousands(stats.average_population),
    )
}

/// One `<tr>` per record, numbered from 1
fn render_rows(records: &[CountryRecord]) -> String {
    let mut rows = String::new();
    for (i, record) in records.iter().enumerate() {
        let index = i + 1;
        rows.push_str(&format!(
            r#"
                    <tr style="animation-delay: {delay:.2}s">
                        <td class="number">{index}</td>
                        <td class="country-name">{name}</td>
                        <td class="capital-name">{capital}</td>
                        <td class="population">{population}</td>
                        <td class="area">{area}</td>
                    </tr>"#,
            delay = index as f64 * 0.02,
            name = escape_html(&record.name),
            capital = escape_html(&record.capital),
            population = format_population(record.population),
            area = format_area(record.area),
        ));
    }
    rows
}

fn render_footer(config: &ReportConfig, generated_at: &DateTime<Local>) -> String {
    format!(
        r#"        <footer>
            <a href="{url}"
               target="_blank"
               rel="noopener noreferrer"
               class="source-link">
                <i class="fas fa-external-link-alt"></i>
                Data source: {label}
            </a>
            <div class="timestamp">
                <i class="far fa-clock"></i>
                Data updated: {timestamp} |
                Generated by country_atlas
            </div>
        </footer>"#,
        url = escape_html(&config.source_url),
        label = escape_html(&config.source_label),
        timestamp = generated_at.format(TIMESTAMP_FORMAT),
    )
}

const INLINE_CSS: &str = r#"
        * { margin: 0; padding: 0; box-sizing: border-box; }

        body {
            font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
            background: linear-gradient(135deg, #6a11cb 0%, #2575fc 100%);
            min-height: 100vh;
            padding: 20px;
            color: #333;
        }

        .container {
            max-width: 1200px;
            margin: 0 auto;
            background: white;
            border-radius: 20px;
            box-shadow: 0 20px 60px rgba(0, 0, 0, 0.3);
            overflow: hidden;
        }

        header {
            background: linear-gradient(90deg, #1a2980, #26d0ce);
            color: white;
            padding: 40px 20px;
            text-align: center;
        }

        h1 {
            font-size: 2.8rem;
            margin-bottom: 10px;
            text-shadow: 2px 2px 4px rgba(0, 0, 0, 0.3);
        }

        h1 i { color: #FFD700; margin-right: 15px; }

        .stats-bar {
            display: flex;
            justify-content: center;
            gap: 30px;
            margin-top: 25px;
            flex-wrap: wrap;
        }

        .stat-item {
            background: rgba(255, 255, 255, 0.2);
            padding: 15px 25px;
            border-radius: 15px;
            display: flex;
            align-items: center;
            gap: 10px;
            font-size: 1.1rem;
        }

        .stat-item i { font-size: 1.5rem; color: #FFD700; }

        .table-container { padding: 30px; overflow-x: auto; }

        table {
            width: 100%;
            border-collapse: collapse;
            background: white;
            box-shadow: 0 5px 15px rgba(0, 0, 0, 0.1);
            border-radius: 10px;
            overflow: hidden;
        }

        thead { background: linear-gradient(90deg, #4b6cb7, #182848); color: white; }

        th {
            padding: 20px 15px;
            text-align: left;
            font-size: 1.1rem;
            text-transform: uppercase;
            letter-spacing: 1px;
            font-weight: 600;
        }

        th i { margin-right: 10px; }

        tbody tr {
            border-bottom: 1px solid #e0e0e0;
            transition: all 0.3s ease;
            animation: fadeIn 0.5s ease forwards;
            animation-play-state: paused;
            opacity: 0;
        }

        tbody tr:nth-child(even) { background-color: #f8f9fa; }

        tbody tr:hover {
            background-color: #e3f2fd;
            transform: translateY(-2px);
            box-shadow: 0 3px 10px rgba(0, 0, 0, 0.1);
        }

        td { padding: 18px 15px; font-size: 1rem; }

        .country-name { font-weight: 600; color: #2c3e50; font-size: 1.05rem; }
        .capital-name { color: #3498db; font-weight: 500; }
        .population { color: #27ae60; font-weight: 500; text-align: right; }
        .area { color: #e74c3c; font-weight: 500; text-align: right; }
        .number { color: #7f8c8d; font-weight: bold; text-align: center; width: 60px; }

        footer {
            background: #2c3e50;
            color: white;
            padding: 40px 20px;
            text-align: center;
        }

        .source-link {
            display: inline-flex;
            align-items: center;
            gap: 12px;
            background: linear-gradient(90deg, #ff7e5f, #feb47b);
            color: white;
            text-decoration: none;
            padding: 16px 35px;
            border-radius: 50px;
            font-weight: bold;
            font-size: 1.1rem;
            transition: all 0.3s ease;
            box-shadow: 0 5px 15px rgba(0, 0, 0, 0.2);
            margin-bottom: 20px;
        }

        .source-link:hover {
            transform: translateY(-3px);
            box-shadow: 0 8px 20px rgba(0, 0, 0, 0.3);
            background: linear-gradient(90deg, #ff9966, #ff5e62);
        }

        .timestamp { color: #bdc3c7; font-size: 0.95rem; margin-top: 15px; }

        @media (max-width: 768px) {
            h1 { font-size: 2rem; }
            .container { margin: 10px; }
            th, td { padding: 12px 8px; font-size: 0.9rem; }
            .table-container { padding: 15px; }
            .stats-bar { flex-direction: column; align-items: center; gap: 15px; }
        }

        @keyframes fadeIn {
            from { opacity: 0; transform: translateY(20px); }
            to { opacity: 1; transform: translateY(0); }
        }
    "#;

const INLINE_JS: &str = r#"
        document.addEventListener('DOMContentLoaded', function () {
            const observer = new IntersectionObserver((entries) => {
                entries.forEach((entry) => {
                    if (entry.isIntersecting) {
                        entry.target.style.animationPlayState = 'running';
                        observer.unobserve(entry.target);
                    }
                });
            }, { threshold: 0.1, rootMargin: '0px 0px -50px 0px' });

            document.querySelectorAll('tbody tr').forEach((row) => observer.observe(row));
        });
    "#;
