//! Lesson detail page: headed content sections with a print action.

use leptos::prelude::*;

use lessons::catalog::{grade_labels, subject_line};
use lessons::filter::paragraphs;
use lessons::{Lesson, Section};

use crate::components::MainLayout;
use crate::shell;

pub fn render(lesson: Lesson) -> String {
    shell::document(&page_title(&lesson.title), view! { <MainLayout><ViewLessonPage lesson/></MainLayout> })
}

#[must_use]
pub fn page_title(lesson_title: &str) -> String {
    format!("{lesson_title} Lesson Plan | Lessongo")
}

/// The detail line under the title: grade labels, then subjects.
#[must_use]
pub fn headline(lesson: &Lesson) -> String {
    let grades = grade_labels(&lesson.grade);
    let subjects = subject_line(&lesson.subject);
    match (grades.is_empty(), subjects.is_empty()) {
        (true, true) => String::new(),
        (false, true) => grades,
        (true, false) => subjects,
        (false, false) => format!("{grades} {subjects}"),
    }
}

#[component]
pub fn ViewLessonPage(lesson: Lesson) -> impl IntoView {
    let sections = [
        ("Learning Objectives", lesson.content.objectives.clone()),
        ("Materials", lesson.content.materials.clone()),
        ("Direct Instruction", lesson.content.instructions.clone()),
        ("Guided Practice", lesson.content.practice.clone()),
        ("Differentiation", lesson.content.differentiation.clone()),
    ];
    let detail = headline(&lesson);
    let title = lesson.title;
    view! {
        <div class="col-span-12 max-w-4xl px-6 mx-auto">
            <div class="flex flex-row items-center">
                <h1 class="mb-3 text-4xl capitalize">{title}</h1>
                <button
                    onclick="window.print()"
                    class="flex flex-row items-center self-center gap-3 px-4 py-2 ml-auto font-medium text-white bg-black whitespace-nowrap print:hidden rounded-xl hover:bg-black/80"
                >
                    <svg viewBox="0 0 24 24" class="w-6 h-6" fill="currentColor" aria-hidden="true">
                        <path d="M7 3a1 1 0 00-1 1v3h12V4a1 1 0 00-1-1H7zM5 9a2 2 0 00-2 2v5a1 1 0 001 1h2v3a1 1 0 001 1h10a1 1 0 001-1v-3h2a1 1 0 001-1v-5a2 2 0 00-2-2H5zm3 6h8v4H8v-4z"/>
                    </svg>
                    "Print"
                </button>
            </div>
            <div class="text-xl text-gray-600">{detail}</div>
            <div class="mt-8 prose prose-slate">
                {sections.into_iter().map(|(heading, section)| lesson_section(heading, section)).collect_view()}
            </div>
        </div>
    }
}

fn lesson_section(heading: &'static str, section: Section) -> impl IntoView {
    let lines: Vec<String> = paragraphs(&section.content).into_iter().map(ToOwned::to_owned).collect();
    view! {
        <h2 class="mt-6 text-2xl font-bold">{heading}</h2>
        <div>
            {lines.into_iter().map(|line| view! { <p>{line}</p> }).collect_view()}
        </div>
    }
}

#[cfg(test)]
#[path = "lesson_test.rs"]
mod tests;
