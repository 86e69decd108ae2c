//! Lesson listing page with grade/subject filter dropdowns.

use leptos::prelude::*;

use lessons::catalog::{GRADES, SUBJECTS, grade_label};
use lessons::{Lesson, LessonFilter};

use crate::components::{DropDown, DropDownItem, FormField, MainLayout};
use crate::shell;
use crate::util::urls::query_escape;

pub fn render(lessons: Vec<Lesson>, filter: LessonFilter) -> String {
    shell::document(
        "Lesson plans | Lessongo",
        view! { <MainLayout><LessonsPage lessons filter/></MainLayout> },
    )
}

/// Href for the listing with the given filter state.
#[must_use]
pub fn filter_href(grade: Option<i32>, subject: Option<&str>) -> String {
    let mut params = Vec::new();
    if let Some(grade) = grade {
        params.push(format!("grade={grade}"));
    }
    if let Some(subject) = subject {
        params.push(format!("subject={}", query_escape(subject)));
    }
    if params.is_empty() {
        "/lessons".to_owned()
    } else {
        format!("/lessons?{}", params.join("&"))
    }
}

/// Grade menu: an "all" entry plus one entry per catalog grade. Each href
/// keeps the current subject selection.
fn grade_items(filter: &LessonFilter) -> Vec<DropDownItem> {
    let subject = filter.subject.as_deref();
    let mut items = vec![DropDownItem::new(
        filter_href(None, subject),
        "All grades",
        filter.grade.is_none(),
    )];
    items.extend(GRADES.iter().map(|(value, label)| {
        DropDownItem::new(filter_href(Some(*value), subject), *label, filter.grade == Some(*value))
    }));
    items
}

/// Subject menu, keeping the current grade selection.
fn subject_items(filter: &LessonFilter) -> Vec<DropDownItem> {
    let grade = filter.grade;
    let mut items = vec![DropDownItem::new(
        filter_href(grade, None),
        "All subjects",
        filter.subject.is_none(),
    )];
    items.extend(SUBJECTS.iter().map(|subject| {
        DropDownItem::new(
            filter_href(grade, Some(subject)),
            *subject,
            filter.subject.as_deref() == Some(*subject),
        )
    }));
    items
}

fn grade_button_label(filter: &LessonFilter) -> String {
    filter
        .grade
        .and_then(grade_label)
        .unwrap_or("All grades")
        .to_owned()
}

fn subject_button_label(filter: &LessonFilter) -> String {
    filter.subject.clone().unwrap_or_else(|| "All subjects".to_owned())
}

#[component]
pub fn LessonsPage(lessons: Vec<Lesson>, filter: LessonFilter) -> impl IntoView {
    let empty = lessons.is_empty();
    let grade_value = grade_button_label(&filter);
    let grade_menu = grade_items(&filter);
    let subject_value = subject_button_label(&filter);
    let subject_menu = subject_items(&filter);
    view! {
        <div class="col-span-12 w-full max-w-2xl mx-auto">
            <h1 class="mb-8 text-5xl font-bold mt-11">"Lesson plans"</h1>
            <div>
                <FormField label="Filter by grades:".to_owned()>
                    <DropDown value=grade_value items=grade_menu/>
                </FormField>
                <FormField label="Filter by subjects:".to_owned()>
                    <DropDown value=subject_value items=subject_menu/>
                </FormField>
            </div>
            {lessons.into_iter().map(lesson_card).collect_view()}
            {empty.then(|| view! {
                <p class="mt-8 text-slate-600">"No lesson plans match these filters yet."</p>
            })}
        </div>
    }
}

fn lesson_card(lesson: Lesson) -> impl IntoView {
    view! {
        <a
            href=format!("/lessons/{}", lesson.id)
            class="block p-4 my-5 transition bg-white border shadow-md rounded-xl hover:bg-gray-100"
        >
            <h3 class="text-xl font-bold capitalize">{lesson.title}</h3>
            <p class="text-gray-800 truncate">{lesson.overview.unwrap_or_default()}</p>
        </a>
    }
}

#[cfg(test)]
#[path = "lessons_test.rs"]
mod tests;
