//! The portfolio landing page: intro, projects, contact.

use leptos::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::components::project_list::ProjectList;
use crate::components::theme_toggle::ThemeToggle;
use crate::config::CONTACT_ACTION;
use crate::state::projects::PROJECTS;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <header class="site-header">
            <a href="#top" class="site-header__name">"Zehruddin"</a>
            <nav class="site-header__nav">
                <a href="#projects">"Projects"</a>
                <a href="#contact">"Contact"</a>
            </nav>
            <ThemeToggle/>
        </header>

        <main id="top">
            <section class="hero">
                <h1>"Hi, I build things for the web."</h1>
                <p>"Full-stack developer working with Java, Spring Boot and modern front-end tooling."</p>
            </section>

            <section id="projects" class="projects">
                <h2 class="section-title">"Projects"</h2>
                <ProjectList projects=PROJECTS/>
            </section>

            <section id="contact" class="contact">
                <h2 class="section-title">"Get in Touch"</h2>
                <ContactForm action=CONTACT_ACTION/>
            </section>
        </main>

        <footer class="site-footer">
            <p>"Built with Rust and Leptos."</p>
        </footer>
    }
}
