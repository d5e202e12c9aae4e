//! The scrollable portfolio document.
//!
//! The whole page is laid out into pre-wrapped lines so that every section
//! anchor has a known row. Those rows are the offsets the active-section
//! scan runs over.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use super::Theme;
use crate::branding;
use crate::models::{Project, SiteContent};
use crate::state::{section_positions, PresentationState, SectionPosition};

/// Laid-out page plus the row each section starts on.
#[derive(Debug, Clone, Default)]
pub struct Document {
    lines: Vec<Line<'static>>,
    anchors: Vec<(&'static str, u32)>,
}

impl Document {
    /// Lays out `content` for a viewport `width` columns wide.
    pub fn build(
        content: &SiteContent,
        state: &PresentationState,
        theme: &Theme,
        width: u16,
    ) -> Self {
        let mut doc = Builder {
            theme,
            width: usize::from(width.max(20)).saturating_sub(2),
            out: Self::default(),
        };

        doc.hero(content);
        doc.skills(content);
        doc.qualification(content);
        doc.projects(content, state);
        doc.contact(content);
        doc.blank();
        doc.muted(branding::footer_line(&content.profile.name));
        doc.out
    }

    /// Rendered lines.
    pub fn lines(&self) -> &[Line<'static>] {
        &self.lines
    }

    /// Total number of rows.
    pub fn height(&self) -> u32 {
        u32::try_from(self.lines.len()).unwrap_or(u32::MAX)
    }

    /// First row of the section with this id.
    pub fn offset_of(&self, section_id: &str) -> Option<u32> {
        self.anchors
            .iter()
            .find(|(id, _)| *id == section_id)
            .map(|(_, row)| *row)
    }

    /// Section offsets in navigation order, ready for the active-section scan.
    pub fn section_positions<'a>(&self, content: &'a SiteContent) -> Vec<SectionPosition<'a>> {
        section_positions(&content.nav, |id| self.offset_of(id))
    }
}

struct Builder<'t> {
    theme: &'t Theme,
    width: usize,
    out: Document,
}

impl Builder<'_> {
    fn anchor(&mut self, id: &'static str) {
        let row = u32::try_from(self.out.lines.len()).unwrap_or(u32::MAX);
        self.out.anchors.push((id, row));
    }

    fn push(&mut self, line: Line<'static>) {
        self.out.lines.push(line);
    }

    fn blank(&mut self) {
        self.push(Line::default());
    }

    fn heading(&mut self, id: &'static str, label: &str, title: &str) {
        self.anchor(id);
        self.push(Line::from(Span::styled(
            label.to_uppercase(),
            Style::default().fg(self.theme.text_muted),
        )));
        self.push(Line::from(Span::styled(
            title.to_string(),
            Style::default()
                .fg(self.theme.primary)
                .add_modifier(Modifier::BOLD),
        )));
        self.blank();
    }

    fn paragraph(&mut self, text: &str, style: Style) {
        for row in wrap(text, self.width) {
            self.push(Line::from(Span::styled(row, style)));
        }
    }

    fn text(&mut self, text: &str) {
        self.paragraph(text, Style::default().fg(self.theme.text));
    }

    fn muted(&mut self, text: impl Into<String>) {
        let style = Style::default().fg(self.theme.text_muted);
        self.paragraph(&text.into(), style);
    }

    fn link(&mut self, label: &str, target: &str) {
        self.push(Line::from(vec![
            Span::styled(
                format!("{label}: "),
                Style::default().fg(self.theme.text_secondary),
            ),
            Span::styled(
                target.to_string(),
                Style::default()
                    .fg(self.theme.primary)
                    .add_modifier(Modifier::UNDERLINED),
            ),
        ]));
    }

    fn tags(&mut self, tags: &[String]) {
        if tags.is_empty() {
            return;
        }
        let joined = tags
            .iter()
            .map(|tag| format!("[{tag}]"))
            .collect::<Vec<_>>()
            .join(" ");
        let style = Style::default().fg(self.theme.accent);
        self.paragraph(&joined, style);
    }

    fn hero(&mut self, content: &SiteContent) {
        let profile = &content.profile;
        self.anchor("home");
        self.push(Line::from(Span::styled(
            profile.location.to_uppercase(),
            Style::default().fg(self.theme.text_muted),
        )));
        for line in &profile.headline {
            let style = Style::default()
                .fg(self.theme.primary)
                .add_modifier(Modifier::BOLD);
            self.paragraph(line, style);
        }
        self.blank();
        self.text(&profile.bio);
        self.blank();
        self.tags(&profile.expertise);
        self.blank();

        self.link("Email", &profile.contact.email);
        if let Some(phone) = &profile.contact.phone {
            self.link("Phone", &phone.display);
        }
        if let Some(resume) = &profile.resume {
            self.link("Resume", resume);
        }
        for social in &profile.socials {
            self.link(&social.label, &social.url);
        }

        if !content.stats.is_empty() {
            self.blank();
            let mut spans = Vec::new();
            for stat in &content.stats {
                spans.push(Span::styled(
                    stat.value.clone(),
                    Style::default()
                        .fg(self.theme.accent)
                        .add_modifier(Modifier::BOLD),
                ));
                spans.push(Span::styled(
                    format!(" {}   ", stat.label),
                    Style::default().fg(self.theme.text_secondary),
                ));
            }
            self.push(Line::from(spans));
        }
        self.blank();
    }

    fn skills(&mut self, content: &SiteContent) {
        self.heading("skills", "Skills", "What I work with");
        for group in &content.skills {
            self.push(Line::from(Span::styled(
                group.title.clone(),
                Style::default()
                    .fg(self.theme.text)
                    .add_modifier(Modifier::BOLD),
            )));
            let name_width = group
                .skills
                .iter()
                .map(|skill| skill.name.chars().count())
                .max()
                .unwrap_or(0);
            for skill in &group.skills {
                self.push(Line::from(vec![
                    Span::styled(
                        format!("  {:<name_width$}  ", skill.name),
                        Style::default().fg(self.theme.text),
                    ),
                    Span::styled(skill.level.meter(), Style::default().fg(self.theme.accent)),
                    Span::styled(
                        format!(" {}", skill.level),
                        Style::default().fg(self.theme.text_muted),
                    ),
                ]));
            }
            self.blank();
        }
    }

    fn qualification(&mut self, content: &SiteContent) {
        self.heading("qualification", "Qualification", "Education and experience");
        for entry in &content.qualifications {
            self.push(Line::from(vec![
                Span::styled(
                    format!("{} · {}", entry.kind, entry.period),
                    Style::default().fg(self.theme.text_muted),
                ),
            ]));
            self.push(Line::from(Span::styled(
                entry.title.clone(),
                Style::default()
                    .fg(self.theme.text)
                    .add_modifier(Modifier::BOLD),
            )));
            let style = Style::default().fg(self.theme.text_secondary);
            self.paragraph(&entry.organization, style);
            if let Some(detail) = &entry.detail {
                self.text(detail);
            }
            self.blank();
        }
    }

    fn projects(&mut self, content: &SiteContent, state: &PresentationState) {
        self.heading("projects", "Projects", "Selected work");
        match state.current_project(content) {
            Some(project) => {
                self.project_card(project);
                self.blank();
                self.carousel_dots(state);
            }
            None => self.muted("No projects yet."),
        }
        self.blank();
    }

    fn project_card(&mut self, project: &Project) {
        self.push(Line::from(Span::styled(
            project.category.to_uppercase(),
            Style::default().fg(self.theme.text_muted),
        )));
        self.push(Line::from(Span::styled(
            project.title.clone(),
            Style::default()
                .fg(self.theme.text)
                .add_modifier(Modifier::BOLD),
        )));
        self.text(&project.description);
        self.tags(&project.tags);
        if let Some(demo) = &project.demo {
            self.link("Demo", demo);
        }
        if let Some(repo) = &project.repo {
            self.link("Code", repo);
        }
    }

    fn carousel_dots(&mut self, state: &PresentationState) {
        let carousel = state.carousel;
        let mut spans = vec![Span::styled("← ", Style::default().fg(self.theme.text_muted))];
        for i in 0..carousel.len() {
            let color = if i == carousel.index() {
                self.theme.accent
            } else {
                self.theme.text_muted
            };
            spans.push(Span::styled("● ", Style::default().fg(color)));
        }
        spans.push(Span::styled(
            format!("→   {} / {}", carousel.index() + 1, carousel.len()),
            Style::default().fg(self.theme.text_muted),
        ));
        self.push(Line::from(spans));
    }

    fn contact(&mut self, content: &SiteContent) {
        self.heading("contact", "Contact", "Get in touch");
        self.text("Press c to write a message. It opens in your own mail client, nothing is sent from here.");
        self.blank();
        self.link("Email", &content.profile.contact.email);
    }
}

/// Greedy word wrap to `width` columns.
///
/// Words longer than a row are split. Empty input yields one empty row so
/// that blank paragraphs keep their place.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        while word.len() > width {
            if current_len > 0 {
                rows.push(std::mem::take(&mut current));
                current_len = 0;
            }
            let rest = word.split_off(width);
            rows.push(word.into_iter().collect());
            word = rest;
        }

        let needed = if current_len == 0 { word.len() } else { current_len + 1 + word.len() };
        if needed > width {
            rows.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current.extend(word.iter());
        current_len += word.len();
    }

    if current_len > 0 || rows.is_empty() {
        rows.push(current);
    }
    rows
}
