//! Server-rendered HTML pages.

use std::collections::HashSet;
use std::fmt::Write;

use axum::http::StatusCode;
use axum::response::Html;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::flash::Flash;
use crate::models::{Course, Department, Note, NoteWithCourse, Semester};

const YEARS: [i32; 4] = [1, 2, 3, 4];

/// Characters left as-is in an upload URL path segment.
const UPLOAD_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'.').remove(b'_');

const STYLE: &str = r#"
body { font-family: sans-serif; margin: 2rem auto; max-width: 60rem; color: #222; }
nav a { margin-right: 1rem; }
.current { background: #e6f4ea; }
.flash { background: #e8f0fe; border-left: 4px solid #1a73e8; padding: .5rem .75rem; }
.note-card { border: 1px solid #ddd; border-radius: 4px; padding: .75rem; margin: .75rem 0; }
.note-text { white-space: pre-wrap; }
.note-card img { max-width: 320px; display: block; margin-top: .5rem; }
form.inline { display: inline; }
"#;

const NOTE_EDIT_SCRIPT: &str = r#"
function editNote(noteId, button) {
    const card = button.closest('.note-card');
    const text = card.querySelector('.note-text');
    const updated = prompt('Edit note', text.textContent);
    if (updated === null) { return; }
    fetch(`/update_note/${noteId}`, {
        method: 'POST',
        headers: { 'Content-Type': 'application/json' },
        body: JSON.stringify({ note: updated })
    })
    .then(response => response.json())
    .then(data => {
        if (data.success) { text.textContent = updated; }
        else { alert('An error occurred while updating the note!'); }
    })
    .catch(() => alert('An error occurred while updating the note!'));
}
"#;

pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
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

fn layout(title: &str, flash: Option<Flash>, body: &str) -> Html<String> {
    let flash = flash
        .map(|flash| format!(r#"<p class="flash">{}</p>"#, escape(flash.message())))
        .unwrap_or_default();
    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
<style>{STYLE}</style>
</head>
<body>
<nav><a href="/">Departments</a><a href="/current_courses">Current courses</a><a href="/all_notes">All notes</a></nav>
<h1>{title}</h1>
{flash}
{body}
<script>{NOTE_EDIT_SCRIPT}</script>
</body>
</html>"#,
        title = escape(title),
    ))
}

pub fn error_page(status: StatusCode, message: &str) -> Html<String> {
    let title = status.canonical_reason().unwrap_or("Error");
    layout(title, None, &format!("<p>{}</p>", escape(message)))
}

pub fn index(departments: &[Department], flash: Option<Flash>) -> Html<String> {
    let mut body = String::from("<ul>");
    for department in departments {
        let _ = write!(
            body,
            r#"<li><a href="/select_class/{}">{}</a></li>"#,
            department.id,
            escape(&department.name)
        );
    }
    body.push_str("</ul>");
    layout("Departments", flash, &body)
}

pub fn select_class(department: &Department, flash: Option<Flash>) -> Html<String> {
    let mut body = String::from("<ul>");
    for year in YEARS {
        let _ = write!(
            body,
            r#"<li><a href="/courses/{}/{year}">Year {year}</a></li>"#,
            department.id
        );
    }
    body.push_str("</ul>");
    layout(&department.name, flash, &body)
}

fn course_actions(course: &Course, is_current: bool) -> String {
    let toggle_label = if is_current {
        "Remove from current semester"
    } else {
        "Add to current semester"
    };
    let mut actions = format!(
        r#"<form class="inline" method="post" action="/toggle_current_course/{id}"><button type="submit">{toggle_label}</button></form>
<a href="/add_note/{id}">Notes</a>"#,
        id = course.id
    );
    if course.is_elective() {
        let _ = write!(actions, r#" <a href="/edit_elective/{}">Rename elective</a>"#, course.id);
    }
    actions
}

pub fn courses(
    department: &Department,
    year: i32,
    courses: &[Course],
    current_ids: &HashSet<i64>,
    flash: Option<Flash>,
) -> Html<String> {
    let mut body = String::new();
    for semester in Semester::ALL {
        let _ = write!(body, "<h2>{semester}</h2><ul>");
        for course in courses.iter().filter(|c| c.semester == semester) {
            let is_current = current_ids.contains(&course.id);
            let _ = write!(
                body,
                r#"<li{class}>{name} {actions}</li>"#,
                class = if is_current { r#" class="current""# } else { "" },
                name = escape(&course.course_name),
                actions = course_actions(course, is_current),
            );
        }
        body.push_str("</ul>");
    }
    layout(&format!("{} - Year {year}", department.name), flash, &body)
}

pub fn current_courses(courses: &[Course], flash: Option<Flash>) -> Html<String> {
    if courses.is_empty() {
        return layout(
            "Current semester",
            flash,
            "<p>No courses selected for the current semester.</p>",
        );
    }
    let mut body = String::from("<ul>");
    for course in courses {
        let _ = write!(
            body,
            r#"<li>{} (Year {}, {}) {}</li>"#,
            escape(&course.course_name),
            course.year,
            course.semester,
            course_actions(course, true),
        );
    }
    body.push_str("</ul>");
    layout("Current semester", flash, &body)
}

pub fn edit_elective(course: &Course, flash: Option<Flash>) -> Html<String> {
    let body = format!(
        r#"<form method="post" action="/edit_elective/{id}">
<label for="course_name">Course name</label>
<input type="text" id="course_name" name="course_name" value="{name}" required>
<button type="submit">Save</button>
</form>"#,
        id = course.id,
        name = escape(&course.course_name),
    );
    layout("Rename elective", flash, &body)
}

fn note_card(note: &Note, course_label: Option<&str>) -> String {
    let mut card = String::from(r#"<div class="note-card">"#);
    if let Some(label) = course_label {
        let _ = write!(
            card,
            r#"<h3><a href="/add_note/{}">{}</a></h3>"#,
            note.course_id,
            escape(label)
        );
    }
    let _ = write!(
        card,
        r#"<div class="note-text">{}</div>"#,
        escape(note.body.as_deref().unwrap_or(""))
    );
    if let Some(image) = &note.image_path {
        let _ = write!(
            card,
            r#"<img src="/uploads/{}" alt="{}">"#,
            utf8_percent_encode(image, UPLOAD_SEGMENT),
            escape(image)
        );
    }
    let _ = write!(
        card,
        r#"<small>{created}</small>
<button type="button" onclick="editNote({id}, this)">Edit</button>
<form class="inline" method="post" action="/delete_note/{id}"><button type="submit">Delete</button></form>
</div>"#,
        created = escape(&note.created_at),
        id = note.id,
    );
    card
}

pub fn notes(course: &Course, notes: &[Note], flash: Option<Flash>) -> Html<String> {
    let mut body = format!(
        r#"<form method="post" action="/add_note/{}" enctype="multipart/form-data">
<textarea name="note" rows="4" cols="60"></textarea>
<input type="file" id="image" name="image" accept="image/*">
<button type="submit">Add note</button>
</form>"#,
        course.id
    );
    for note in notes {
        body.push_str(&note_card(note, None));
    }
    layout(&course.course_name, flash, &body)
}

pub fn all_notes(notes: &[NoteWithCourse], flash: Option<Flash>) -> Html<String> {
    if notes.is_empty() {
        return layout("All notes", flash, "<p>No notes yet.</p>");
    }
    let mut body = String::new();
    for entry in notes {
        body.push_str(&note_card(&entry.note, Some(&entry.course_name)));
    }
    layout("All notes", flash, &body)
}
