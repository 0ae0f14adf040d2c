// src/render.rs
//
// Turn the coded projects table into one self-contained index page:
// static header, one <article> card per row, footer, client-side
// filter/search script. Pure function of the table; the input is
// never mutated and absent fields simply render as omitted markup.
//
// The output is a markdown file that is mostly inline HTML. The
// downstream site generator passes HTML blocks through untouched and
// still renders the `**Field:**` leftovers as markdown.

use crate::params::{
    COL_ASSIGNED_CODE, COL_COSUP_EMAIL, COL_COSUP_NAME, COL_COSUP_OPTIN, COL_DESCRIPTION,
    COL_MAX_STUDENTS, COL_PART_TIME, COL_PROGRAMMES, COL_SCHOOL, COL_SUPERVISOR,
    COL_SUPERVISOR_EMAIL, COL_TITLE, COL_URL,
};
use crate::table::Table;

const PAGE_TITLE: &str = "2026 MSc Projects";
const PROGRAMME_AI: &str = "MSc AI in the Biosciences";
const PROGRAMME_BIOINF: &str = "MSc Bioinformatics";
const APPLY_FORM_URL: &str = "https://forms.office.com/pages/responsepage.aspx?id=msc-project-choices";
const CONTACT_EMAIL: &str = "msc-projects@school.ac.uk";

const PAGE_SCRIPT: &str = include_str!("page_script.js");

/// Columns that never appear on the page (form bookkeeping, personal data
/// of the submitter, and columns folded into the card layout elsewhere).
const EXCLUDED_FIELDS: &[&str] = &[
    "Id",
    "Start time",
    "Completion time",
    "Email",
    "Name",
    COL_COSUP_OPTIN,
    COL_COSUP_NAME,
    COL_COSUP_EMAIL,
    COL_PROGRAMMES,
    COL_MAX_STUDENTS,
];

/// Columns the card layout already places; the leftover-field loop at the
/// bottom of each card must not repeat them.
const HANDLED_FIELDS: &[&str] = &[
    COL_SUPERVISOR,
    COL_SUPERVISOR_EMAIL,
    COL_SCHOOL,
    COL_URL,
    COL_TITLE,
    COL_DESCRIPTION,
    COL_PART_TIME,
    COL_ASSIGNED_CODE,
];

/// Render the whole index page.
pub fn render_index(table: &Table) -> String {
    let mut out = String::with_capacity(64 * 1024);

    page_header(table.len(), &mut out);

    for row_ix in 0..table.len() {
        project_card(table, row_ix, &mut out);
    }

    page_footer(&mut out);
    out
}

/* ---------------- Page chrome ---------------- */

fn page_header(count: usize, out: &mut String) {
    out.push_str(&format!(
        "<h1 style='text-align: center; font-weight: bold; margin-bottom: 20px; color: #000;'>{}</h1>\n\n",
        PAGE_TITLE
    ));

    out.push_str(" <strong>Welcome to the 2026 MSc Project Selection for the Bioinformatics and AI in Biosciences programmes.</strong>\n");
    out.push_str("<ul class='instructions'>\n");
    out.push_str("  <li>Please review the following projects and identify those that align with your interests.</li>\n");
    out.push_str("  <li>Use the <b>search and filter options below</b> to find projects by keywords or programme.</li>\n");
    out.push_str("  <li>We strongly recommend contacting the project supervisor to <b>arrange a meeting</b> before applying.</li>\n");
    out.push_str(&format!(
        "  <li>Once you have reviewed all projects, please submit your choices via <b><a href='{}' target='_blank' rel='noopener noreferrer'>this link</a></b>.</li>\n",
        APPLY_FORM_URL
    ));
    out.push_str("</ul>\n\n");

    out.push_str("<div class='filter-container'>\n");
    out.push_str("  <h3>Browse & Filter Projects</h3>\n");
    // Mobile-only on-page search box; the desktop header search is wired
    // up by the page script instead.
    out.push_str("  <div class='search-box-wrapper mobile-only'>\n");
    out.push_str("    <input id='search-box' type='text' placeholder='Search projects (e.g., python, machine learning, biology)...' oninput='searchProjects(this.value)' />\n");
    out.push_str("  </div>\n");
    out.push_str("  <div class='filter-row'>\n");
    out.push_str("    <div class='buttons'>\n");
    out.push_str("      <button class='filter-btn active' onclick='filterProjects(this, \"all\")'>All</button>\n");
    out.push_str("      <button class='filter-btn' onclick='filterProjects(this, \"ai\")'>AI in Biosciences</button>\n");
    out.push_str("      <button class='filter-btn' onclick='filterProjects(this, \"bioinf\")'>Bioinformatics</button>\n");
    out.push_str("    </div>\n");
    out.push_str("  </div>\n");
    out.push_str(&format!(
        "  <p class='project-count'>Total Projects: <span id='project-count'>{}</span></p>\n",
        count
    ));
    out.push_str("</div>\n");
    out.push_str("<div id='projects-container'>\n");
}

fn page_footer(out: &mut String) {
    out.push_str("\n</div>\n\n");
    out.push_str(&format!(
        "<p class='site-watermark'><em>Maintained by the programme team (<a href='mailto:{0}'>{0}</a>).</em></p>\n\n",
        CONTACT_EMAIL
    ));
    out.push_str("<script>\n");
    out.push_str(PAGE_SCRIPT);
    out.push_str("</script>\n");
}

/* ---------------- Cards ---------------- */

fn project_card(table: &Table, row_ix: usize, out: &mut String) {
    let idx = row_ix + 1; // 1-based display position

    let programmes = field(table, row_ix, COL_PROGRAMMES);
    let (has_ai, has_bioinf) = programme_flags(programmes);

    out.push_str(&format!(
        "\n<article class='{}' data-project-id='{}' data-programmes='{}'>\n",
        filter_class(has_ai, has_bioinf),
        idx,
        programme_attr(has_ai, has_bioinf),
    ));

    let title = table
        .field(row_ix, COL_TITLE)
        .unwrap_or("Untitled")
        .trim();
    let code_fallback = idx.to_string();
    let assigned_code = match table.field(row_ix, COL_ASSIGNED_CODE) {
        Some(c) => c.trim(),
        None => code_fallback.as_str(),
    };
    out.push_str(&format!(
        "<h2 class='project-title'>{}: {}</h2>\n",
        assigned_code, title
    ));

    let mut meta_items: Vec<String> = Vec::new();

    let supervisor = field(table, row_ix, COL_SUPERVISOR);
    let supervisor_email = field(table, row_ix, COL_SUPERVISOR_EMAIL);
    if !supervisor.is_empty() {
        meta_items.push(person_item("Primary Supervisor", supervisor, supervisor_email));
    }

    // Co-supervisor only when the form opted in
    if field(table, row_ix, COL_COSUP_OPTIN).eq_ignore_ascii_case("yes") {
        let cosup = field(table, row_ix, COL_COSUP_NAME);
        let cosup_email = field(table, row_ix, COL_COSUP_EMAIL);
        if !cosup.is_empty() {
            meta_items.push(person_item("Co-Supervisor", cosup, cosup_email));
        }
    }

    let school = field(table, row_ix, COL_SCHOOL);
    if !school.is_empty() {
        meta_items.push(meta_item("School/Institute", school));
    }

    let url = field(table, row_ix, COL_URL);
    if !url.is_empty() {
        meta_items.push(meta_item(
            "Research Page",
            &format!(
                "<a href='{}' target='_blank' rel='noopener'>{}</a>",
                full_url(url),
                url
            ),
        ));
    }

    // Programme suitability tags
    out.push_str("<div class='programme-tags'>");
    if has_ai {
        out.push_str(&format!("<span class='tag tag-ai'>✅ {}</span>", "MSc AI in Biosciences"));
    } else {
        out.push_str(&format!("<span class='tag tag-inactive'>❌ {}</span>", "MSc AI in Biosciences"));
    }
    if has_bioinf {
        out.push_str(&format!("<span class='tag tag-bioinf'>✅ {}</span>", PROGRAMME_BIOINF));
    } else {
        out.push_str(&format!("<span class='tag tag-inactive'>❌ {}</span>", PROGRAMME_BIOINF));
    }
    out.push_str("</div>\n\n");

    let max_students = field(table, row_ix, COL_MAX_STUDENTS);
    if !max_students.is_empty() {
        meta_items.push(meta_item("Positions Available", max_students));
    }

    let part_time = field(table, row_ix, COL_PART_TIME);
    if !part_time.is_empty() {
        meta_items.push(meta_item("Part-Time Suitable", &yes_no(part_time)));
    }

    if !meta_items.is_empty() {
        out.push_str(&join!("<ul class='project-meta'>", &meta_items.concat(), "</ul>"));
    }

    let description = field(table, row_ix, COL_DESCRIPTION);
    if !description.is_empty() {
        out.push_str("<div class='project-description'><h3>Project Description</h3>");
        for p in description.split("\n\n").map(str::trim).filter(|p| !p.is_empty()) {
            out.push_str(&format!("<p>{}</p>", p));
        }
        out.push_str("</div>");
    }

    leftover_fields(table, row_ix, out);

    out.push_str("</article>\n");
}

/// Any remaining non-excluded, non-empty columns go at the bottom of the
/// card as markdown bold-label blocks.
fn leftover_fields(table: &Table, row_ix: usize, out: &mut String) {
    for (ci, header) in table.headers.iter().enumerate() {
        let name = header.trim_end();
        if EXCLUDED_FIELDS.iter().any(|f| f.trim_end() == name) { continue; }
        if HANDLED_FIELDS.iter().any(|f| f.trim_end() == name) { continue; }

        let value = table.rows[row_ix][ci].trim();
        if value.is_empty() { continue; }

        let label = name.replace('_', " ");
        let label = label.trim();
        if value.contains('\n') || value.len() > 100 {
            out.push_str(&format!("**{}:**\n\n{}\n\n", label, value));
        } else {
            out.push_str(&format!("**{}:** {}\n\n", label, value));
        }
    }
}

/* ---------------- Small helpers ---------------- */

/// Field by name, trimmed, empty when the column or the value is absent.
fn field<'a>(table: &'a Table, row_ix: usize, name: &str) -> &'a str {
    table.field(row_ix, name).unwrap_or("").trim()
}

fn programme_flags(programmes: &str) -> (bool, bool) {
    (
        programmes.contains(PROGRAMME_AI),
        programmes.contains(PROGRAMME_BIOINF),
    )
}

fn filter_class(has_ai: bool, has_bioinf: bool) -> &'static str {
    match (has_ai, has_bioinf) {
        (true, true) => "project-card filter-both filter-ai filter-bioinf",
        (true, false) => "project-card filter-ai",
        (false, true) => "project-card filter-bioinf",
        (false, false) => "project-card",
    }
}

fn programme_attr(has_ai: bool, has_bioinf: bool) -> &'static str {
    match (has_ai, has_bioinf) {
        (true, true) => "ai,bioinf",
        (true, false) => "ai",
        (false, true) => "bioinf",
        (false, false) => "none",
    }
}

fn person_item(label: &str, name: &str, email: &str) -> String {
    if email.is_empty() {
        meta_item(label, name)
    } else {
        meta_item(
            label,
            &format!("{} <a href='mailto:{1}'>{1}</a>", name, email),
        )
    }
}

fn meta_item(label: &str, value_html: &str) -> String {
    format!(
        "<li><span class='label'>{}</span><span class='value'>{}</span></li>",
        label, value_html
    )
}

/// Links pasted without a scheme still need to leave the site.
fn full_url(url: &str) -> String {
    if url.starts_with("http") {
        s!(url)
    } else {
        join!("https://", url)
    }
}

fn yes_no(value: &str) -> String {
    let lower = value.to_ascii_lowercase();
    if lower.starts_with('y') {
        s!("Yes")
    } else if lower.starts_with('n') {
        s!("No")
    } else {
        s!(value)
    }
}
