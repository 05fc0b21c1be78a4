//! Project card grid.
//!
//! Cards are rendered to a single HTML string and written into the
//! `.projects-container` in one pass, so the container's contents are
//! exactly the concatenated cards in list order.

#[cfg(test)]
#[path = "project_list_test.rs"]
mod project_list_test;

use leptos::prelude::*;

use crate::state::projects::Project;

/// Markup for one project card. All interpolated text is escaped.
pub fn card_markup(project: &Project) -> String {
    let title = escape_html(project.title);
    format!(
        r#"<div class="project-card">
  <div class="project-image-container">
    <img src="{image}" alt="Screenshot of the {title} project" class="project-image">
  </div>
  <div class="project-info">
    <h2>{title}</h2>
    <p>{description}</p>
    <p>{tech_stack}</p>
    <div class="project-links">
      <a href="{live}" class="btn" target="_blank" rel="noopener noreferrer">Live Demo</a>
      <a href="{code}" class="btn btn-secondary" target="_blank" rel="noopener noreferrer">View Code</a>
    </div>
  </div>
</div>"#,
        image = escape_html(project.image_url),
        description = escape_html(project.description),
        tech_stack = escape_html(project.tech_stack),
        live = escape_html(project.live_url),
        code = escape_html(project.code_url),
    )
}

/// Concatenated card markup for `projects`, in order.
pub fn render_projects(projects: &[Project]) -> String {
    projects.iter().map(card_markup).collect()
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Container holding one card per project.
#[component]
pub fn ProjectList(projects: &'static [Project]) -> impl IntoView {
    let markup = render_projects(projects);

    view! { <div class="projects-container" inner_html=markup></div> }
}
