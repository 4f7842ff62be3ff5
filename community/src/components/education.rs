use leptos::prelude::*;

use super::{CtaLink, SectionHeading};
use crate::types::CourseCard;

/// One education resource.
#[component]
pub fn CourseCardView(course: &'static CourseCard) -> impl IntoView {
    let last = course.title_lines.len().saturating_sub(1);
    view! {
        <article class="card-white course-card">
            <h3 class="course-card-title">
                {course
                    .title_lines
                    .iter()
                    .enumerate()
                    .map(|(i, line)| view! { {*line}{(i < last).then(|| view! { <br /> })} })
                    .collect::<Vec<_>>()}
                <img src="/img/community/education.svg" alt="" />
            </h3>
            <p class="course-card-body">{course.body}</p>
            <p>
                <CtaLink link=course.cta />
            </p>
        </article>
    }
}

/// The `#education` section.
#[component]
pub fn EducationSection(courses: &'static [CourseCard]) -> impl IntoView {
    view! {
        <section id="education" class="education">
            <SectionHeading title="Educational resources" />
            <div class="course-grid">
                {courses
                    .iter()
                    .map(|course| view! { <CourseCardView course=course /> })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}
