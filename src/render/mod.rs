//! HTML rendering of the portfolio page.
//!
//! One page layout serves both the preview server and the static export;
//! [`LinkMode`] decides where the interactive controls (theme toggle,
//! carousel arrows, contact form) point.

pub mod export;

pub use export::{export_site, project_page_name};

use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::branding;
use crate::models::{resolve_asset, NavItem, Project, SiteContent};
use crate::state::{PresentationState, ThemePreference, ThemeSurface, SUBJECT_PREFIX};

const STYLESHEET: &str = include_str!("style.css");
const SCRIPT: &str = include_str!("page.js");

/// Where the page's controls send the visitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkMode {
    /// Served by the preview server: controls post back to it.
    Server,
    /// Plain files on disk: carousel pages are separate files and the
    /// contact form submits straight to `mailto:`.
    Static,
}

impl LinkMode {
    /// Href of the page showing project `index`.
    pub fn project_href(self, index: usize) -> String {
        match self {
            Self::Server => format!("/?project={index}#projects"),
            Self::Static => format!("{}#projects", project_page_name(index)),
        }
    }
}

/// Rendering knobs that are not part of the presentation state.
#[derive(Debug, Clone, Copy)]
pub struct PageOptions<'a> {
    /// Base path image references are resolved against
    pub asset_base: &'a str,
    /// Server or static links
    pub links: LinkMode,
    /// Active-section lookahead for the in-page scroll tracker, in pixels
    pub lookahead_px: u32,
}

/// The document root's class list, the page-level theme surface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RootClass {
    dark: bool,
}

impl RootClass {
    /// Class attribute value, if any.
    pub const fn class(self) -> Option<&'static str> {
        if self.dark {
            Some("dark")
        } else {
            None
        }
    }
}

impl ThemeSurface for RootClass {
    fn apply_theme(&mut self, theme: ThemePreference) {
        self.dark = theme.is_dark();
    }
}

/// Renders the whole page for the given state.
pub fn render_page(
    content: &SiteContent,
    state: &PresentationState,
    options: &PageOptions<'_>,
) -> Markup {
    let mut root = RootClass::default();
    root.apply_theme(state.theme);

    html! {
        (DOCTYPE)
        html lang="en" class=[root.class()] {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (content.profile.name) " · Portfolio" }
                style { (PreEscaped(STYLESHEET)) }
            }
            body data-lookahead=(options.lookahead_px) {
                (header(content, state, options))
                main class="wrap" {
                    (hero(content, options))
                    (skills(content))
                    (qualification(content))
                    (projects(content, state, options))
                    (contact(content, state, options))
                }
                footer class="wrap" {
                    p { (branding::footer_line(&content.profile.name)) }
                }
                script { (PreEscaped(SCRIPT)) }
            }
        }
    }
}

fn header(content: &SiteContent, state: &PresentationState, options: &PageOptions<'_>) -> Markup {
    let profile = &content.profile;
    let photo = profile
        .photo
        .as_deref()
        .map(|photo| resolve_asset(options.asset_base, photo));

    html! {
        header class="top" {
            div class="wrap bar" {
                a class="brand" href="#home" {
                    @if let Some(src) = photo {
                        img src=(src) alt=(profile.name);
                    }
                    span { (profile.name) }
                }
                nav class="menu" {
                    @for item in &content.nav {
                        (nav_link(item, state.active_section()))
                    }
                    (theme_toggle(state, options))
                }
            }
        }
    }
}

fn nav_link(item: &NavItem, active: &str) -> Markup {
    html! {
        a href=(item.href()) class=[(item.label == active).then_some("active")] { (item.label) }
    }
}

fn theme_toggle(state: &PresentationState, options: &PageOptions<'_>) -> Markup {
    let glyph = state.theme.glyph();
    match options.links {
        LinkMode::Server => html! {
            form method="post" action="/theme" {
                input type="hidden" name="project" value=(state.carousel.index());
                button class="toggle" type="submit" title="Toggle theme" { (glyph) }
            }
        },
        LinkMode::Static => html! {
            span class="toggle" title=(state.theme) { (glyph) }
        },
    }
}

fn hero(content: &SiteContent, options: &PageOptions<'_>) -> Markup {
    let profile = &content.profile;
    let email_href = profile.mailto();

    html! {
        section id="home" {
            p class="label" { (profile.location) }
            h1 {
                @for (i, line) in profile.headline.iter().enumerate() {
                    @if i > 0 { br; }
                    (line)
                }
            }
            p { (profile.bio) }
            @if !profile.expertise.is_empty() {
                ul class="tags" {
                    @for area in &profile.expertise {
                        li { (area) }
                    }
                }
            }
            p {
                a href=(email_href) { (profile.contact.email) }
                @if let Some(phone) = &profile.contact.phone {
                    " · "
                    a href=(phone.tel_uri()) { (phone.display) }
                }
                @if let Some(resume) = &profile.resume {
                    " · "
                    a href=(resolve_asset(options.asset_base, resume)) { "Resume" }
                }
                @for social in &profile.socials {
                    " · "
                    a href=(social.url) rel="noopener" target="_blank" { (social.label) }
                }
            }
            @if !content.stats.is_empty() {
                div class="stats" {
                    @for stat in &content.stats {
                        div {
                            strong { (stat.value) }
                            span class="label" { (stat.label) }
                        }
                    }
                }
            }
        }
    }
}

fn skills(content: &SiteContent) -> Markup {
    html! {
        section id="skills" {
            p class="label" { "Skills" }
            h2 { "What I work with" }
            div class="grid" {
                @for group in &content.skills {
                    div class="card" {
                        h3 { (group.title) }
                        ul {
                            @for skill in &group.skills {
                                li {
                                    (skill.name) " "
                                    span class="pips" title=(skill.level) { (skill.level.meter()) }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn qualification(content: &SiteContent) -> Markup {
    html! {
        section id="qualification" {
            p class="label" { "Qualification" }
            h2 { "Education and experience" }
            div class="grid" {
                @for entry in &content.qualifications {
                    div class="card" {
                        p class="label" { (entry.kind) " · " (entry.period) }
                        h3 { (entry.title) }
                        p { (entry.organization) }
                        @if let Some(detail) = &entry.detail {
                            p { (detail) }
                        }
                    }
                }
            }
        }
    }
}

fn projects(content: &SiteContent, state: &PresentationState, options: &PageOptions<'_>) -> Markup {
    let carousel = state.carousel;

    html! {
        section id="projects" {
            p class="label" { "Projects" }
            h2 { "Selected work" }
            @if let Some(project) = state.current_project(content) {
                (project_card(project, options))
                div class="carousel-nav" {
                    @let len = carousel.len();
                    a href=(options.links.project_href((carousel.index() + len - 1) % len)) { "←" }
                    span class="dots" {
                        @for i in 0..len {
                            a href=(options.links.project_href(i)) class=[(i == carousel.index()).then_some("current")] { "●" }
                            " "
                        }
                    }
                    a href=(options.links.project_href((carousel.index() + 1) % len)) { "→" }
                    span class="label" { (carousel.index() + 1) " / " (len) }
                }
            } @else {
                p { "No projects yet." }
            }
        }
    }
}

fn project_card(project: &Project, options: &PageOptions<'_>) -> Markup {
    html! {
        article class="card" {
            @if let Some(image) = &project.image {
                img class="project-image" src=(resolve_asset(options.asset_base, image)) alt=(project.title);
            }
            p class="label" { (project.category) }
            h3 { (project.title) }
            p { (project.description) }
            ul class="tags" {
                @for tag in &project.tags {
                    li { (tag) }
                }
            }
            @if project.has_links() {
                p {
                    @if let Some(demo) = &project.demo {
                        a href=(demo) rel="noopener" target="_blank" { "Demo" }
                        " "
                    }
                    @if let Some(repo) = &project.repo {
                        a href=(repo) rel="noopener" target="_blank" { "Code" }
                    }
                }
            }
        }
    }
}

fn contact(content: &SiteContent, state: &PresentationState, options: &PageOptions<'_>) -> Markup {
    // Static pages compose the link in the page script; the plain mailto
    // post is the fallback without scripts.
    let (action, enctype, recipient, subject) = match options.links {
        LinkMode::Server => ("/contact".to_string(), None, None, None),
        LinkMode::Static => (
            content.profile.mailto(),
            Some("text/plain"),
            Some(content.profile.contact.email.as_str()),
            Some(SUBJECT_PREFIX),
        ),
    };

    html! {
        section id="contact" {
            p class="label" { "Contact" }
            h2 { "Get in touch" }
            form class="contact" method="post" action=(action) enctype=[enctype]
                data-recipient=[recipient] data-subject=[subject] {
                @if options.links == LinkMode::Server {
                    input type="hidden" name="project" value=(state.carousel.index());
                }
                input type="text" name="name" placeholder="Name" required;
                input type="email" name="email" placeholder="Email";
                textarea name="message" rows="5" placeholder="Message" required {}
                button type="submit" { "Send message" }
            }
        }
    }
}
