//! Per-section markup for the single-page layout.
//!
//! Every function appends complete lines to the output buffer; dynamic
//! content is HTML-escaped, static scaffolding is written as-is.

use crate::domain::{Profile, Section};

use super::html::{escape_html, tel_href};
use super::script::SUBMIT_BUTTON_LABEL;
use super::{
    RenderContext, CONTACT_FORM_ID, CONTACT_SUBMIT_ID, FORM_STATUS_ID, RESUME_FILE,
};

/// On-page heading for each section. The hero renders its own `<h1>`
/// instead.
fn heading(section: Section) -> &'static str {
    match section {
        Section::Home => "",
        Section::About => "About Me",
        Section::Skills => "Skills",
        Section::Projects => "Projects",
        Section::Experience => "Work Experience",
        Section::Education => "Education",
        Section::Contact => "Get In Touch",
    }
}

/// Render one `<section>` element, dispatching on the section kind.
pub(crate) fn render_section(
    out: &mut String,
    profile: &Profile,
    ctx: &RenderContext,
    section: Section,
) {
    out.push_str(&format!(
        "<section id=\"{id}\" class=\"section section-{id} reveal\">\n",
        id = section.id()
    ));
    if section != Section::Home {
        out.push_str(&format!("<h2>{}</h2>\n", heading(section)));
    }
    match section {
        Section::Home => render_hero(out, profile, ctx),
        Section::About => render_about(out, profile),
        Section::Skills => render_skills(out, profile),
        Section::Projects => render_projects(out, profile),
        Section::Experience => render_experience(out, profile),
        Section::Education => render_education(out, profile),
        Section::Contact => render_contact(out, profile),
    }
    out.push_str("</section>\n");
}

fn render_hero(out: &mut String, profile: &Profile, ctx: &RenderContext) {
    let hero = &profile.hero;
    if let Some(availability) = &hero.availability {
        out.push_str(&format!(
            "<span class=\"hero-badge\">{}</span>\n",
            escape_html(availability)
        ));
    }
    out.push_str("<p class=\"hero-kicker\">Hi, I'm</p>\n");
    out.push_str(&format!("<h1>{}</h1>\n", escape_html(&hero.name)));
    out.push_str(&format!(
        "<p class=\"hero-headline\">{}</p>\n",
        escape_html(&hero.headline)
    ));
    out.push_str(&format!(
        "<p class=\"hero-summary\">{}</p>\n",
        escape_html(&hero.summary)
    ));
    out.push_str("<div class=\"hero-actions\">\n");
    out.push_str("<a class=\"button primary\" href=\"#projects\">View My Work</a>\n");
    out.push_str(&format!(
        "<a class=\"button\" href=\"{}{RESUME_FILE}\" download>Download Resume</a>\n",
        ctx.asset_prefix
    ));
    out.push_str("</div>\n");
    out.push_str("<ul class=\"hero-stats\">\n");
    for stat in &hero.stats {
        out.push_str(&format!(
            "<li class=\"stat\"><span class=\"stat-value\">{}</span><span class=\"stat-label\">{}</span></li>\n",
            escape_html(&stat.value),
            escape_html(&stat.label)
        ));
    }
    out.push_str("</ul>\n");
    out.push_str("<ul class=\"tech-chips\">\n");
    for chip in &hero.tech_chips {
        out.push_str(&format!("<li>{}</li>\n", escape_html(chip)));
    }
    out.push_str("</ul>\n");
}

fn render_about(out: &mut String, profile: &Profile) {
    let about = &profile.about;
    for paragraph in &about.paragraphs {
        out.push_str(&format!("<p>{}</p>\n", escape_html(paragraph)));
    }
    out.push_str("<dl class=\"facts\">\n");
    for fact in &about.facts {
        out.push_str(&format!(
            "<div class=\"fact\"><dt>{}</dt><dd>{}</dd></div>\n",
            escape_html(&fact.label),
            escape_html(&fact.value)
        ));
    }
    out.push_str("</dl>\n");
    out.push_str("<div class=\"expertise-grid\">\n");
    for area in &about.expertise {
        out.push_str("<article class=\"expertise-card\">\n");
        out.push_str(&format!("<h3>{}</h3>\n", escape_html(&area.title)));
        out.push_str(&format!("<p>{}</p>\n", escape_html(&area.description)));
        out.push_str("</article>\n");
    }
    out.push_str("</div>\n");
}

fn render_skills(out: &mut String, profile: &Profile) {
    out.push_str("<div class=\"skills-grid\">\n");
    for category in &profile.skills {
        out.push_str("<article class=\"skill-category\">\n");
        out.push_str(&format!("<h3>{}</h3>\n", escape_html(&category.title)));
        out.push_str("<ul>\n");
        for skill in &category.items {
            out.push_str("<li class=\"skill\">\n");
            out.push_str(&format!(
                "<span class=\"skill-name\">{}</span><span class=\"skill-level\">{}%</span>\n",
                escape_html(&skill.name),
                skill.level
            ));
            out.push_str(&format!(
                "<div class=\"skill-bar\"><div class=\"skill-bar-fill\" style=\"width: {}%\"></div></div>\n",
                skill.width_percent()
            ));
            out.push_str("</li>\n");
        }
        out.push_str("</ul>\n");
        out.push_str("</article>\n");
    }
    out.push_str("</div>\n");
    if !profile.extra_skills.is_empty() {
        out.push_str("<h3 class=\"extra-skills-title\">Additional Skills</h3>\n");
        out.push_str("<ul class=\"tech-chips\">\n");
        for chip in &profile.extra_skills {
            out.push_str(&format!("<li>{}</li>\n", escape_html(chip)));
        }
        out.push_str("</ul>\n");
    }
}

fn render_projects(out: &mut String, profile: &Profile) {
    out.push_str("<div class=\"projects-grid\">\n");
    for project in &profile.projects {
        out.push_str("<article class=\"project-card\">\n");
        out.push_str(&format!("<h3>{}</h3>\n", escape_html(&project.title)));
        out.push_str(&format!(
            "<p class=\"project-meta\">{} &middot; {}</p>\n",
            escape_html(&project.period),
            escape_html(&project.team_size)
        ));
        out.push_str(&format!("<p>{}</p>\n", escape_html(&project.description)));
        out.push_str("<ul class=\"tags\">\n");
        for tag in &project.tags {
            out.push_str(&format!("<li>{}</li>\n", escape_html(tag)));
        }
        out.push_str("</ul>\n");
        if let Some(url) = &project.demo_url {
            out.push_str(&format!(
                "<a class=\"button\" href=\"{}\" rel=\"noopener\">Live Demo</a>\n",
                escape_html(url)
            ));
        }
        out.push_str("</article>\n");
    }
    out.push_str("</div>\n");
}

fn render_experience(out: &mut String, profile: &Profile) {
    out.push_str("<ol class=\"timeline\">\n");
    for stage in &profile.career {
        out.push_str("<li class=\"stage\">\n");
        out.push_str(&format!("<h3>{}</h3>\n", escape_html(&stage.role)));
        out.push_str(&format!(
            "<p class=\"stage-meta\">{} &middot; {}</p>\n",
            escape_html(&stage.company),
            escape_html(&stage.period)
        ));
        out.push_str("<ul class=\"stage-tech\">\n");
        for tech in &stage.technologies {
            out.push_str(&format!("<li>{}</li>\n", escape_html(tech)));
        }
        out.push_str("</ul>\n");
        out.push_str("<h4>Key Achievements</h4>\n<ul>\n");
        for achievement in &stage.achievements {
            out.push_str(&format!("<li>{}</li>\n", escape_html(achievement)));
        }
        out.push_str("</ul>\n");
        if !stage.metrics.is_empty() {
            out.push_str("<ul class=\"metrics\">\n");
            for metric in &stage.metrics {
                out.push_str(&format!(
                    "<li class=\"metric\"><span class=\"metric-value\">{}</span> <span class=\"metric-desc\">{}</span></li>\n",
                    escape_html(&metric.value),
                    escape_html(&metric.description)
                ));
            }
            out.push_str("</ul>\n");
        }
        out.push_str("<h4>Responsibilities</h4>\n<ul>\n");
        for responsibility in &stage.responsibilities {
            out.push_str(&format!("<li>{}</li>\n", escape_html(responsibility)));
        }
        out.push_str("</ul>\n");
        out.push_str("</li>\n");
    }
    out.push_str("</ol>\n");
}

fn render_education(out: &mut String, profile: &Profile) {
    for entry in &profile.education {
        out.push_str("<article class=\"education-entry\">\n");
        out.push_str(&format!("<h3>{}</h3>\n", escape_html(&entry.degree)));
        out.push_str(&format!(
            "<p class=\"entry-meta\">{} &middot; {} &middot; {}</p>\n",
            escape_html(&entry.institution),
            escape_html(&entry.location),
            escape_html(&entry.period)
        ));
        if let Some(grade) = &entry.grade {
            out.push_str(&format!(
                "<p class=\"entry-grade\">{}</p>\n",
                escape_html(grade)
            ));
        }
        if let Some(note) = &entry.note {
            out.push_str(&format!("<p>{}</p>\n", escape_html(note)));
        }
        out.push_str("</article>\n");
    }
}

fn render_contact(out: &mut String, profile: &Profile) {
    let contact = &profile.contact;
    out.push_str("<div class=\"contact-grid\">\n");
    out.push_str("<div class=\"contact-details\">\n");
    out.push_str("<h3>Contact Information</h3>\n");
    out.push_str(&format!(
        "<p class=\"contact-row\"><span class=\"contact-label\">Email</span><a href=\"mailto:{0}\">{0}</a></p>\n",
        escape_html(&contact.email)
    ));
    out.push_str(&format!(
        "<p class=\"contact-row\"><span class=\"contact-label\">Phone</span><a href=\"{}\">{}</a></p>\n",
        tel_href(&contact.phone),
        escape_html(&contact.phone)
    ));
    out.push_str(&format!(
        "<p class=\"contact-row\"><span class=\"contact-label\">Location</span><span>{}</span></p>\n",
        escape_html(&contact.location)
    ));
    if !contact.socials.is_empty() {
        out.push_str("<ul class=\"socials\">\n");
        for social in &contact.socials {
            out.push_str(&format!(
                "<li><a href=\"{}\" rel=\"noopener\">{}</a></li>\n",
                escape_html(&social.url),
                escape_html(&social.label)
            ));
        }
        out.push_str("</ul>\n");
    }
    out.push_str("</div>\n");
    out.push_str(&format!(
        "<form id=\"{CONTACT_FORM_ID}\" class=\"contact-form\">\n"
    ));
    out.push_str("<label>Name<input type=\"text\" name=\"name\" required></label>\n");
    out.push_str("<label>Email<input type=\"email\" name=\"email\" required></label>\n");
    out.push_str("<label>Subject<input type=\"text\" name=\"subject\" required></label>\n");
    out.push_str("<label>Message<textarea name=\"message\" rows=\"5\" required></textarea></label>\n");
    out.push_str(&format!(
        "<button type=\"submit\" id=\"{CONTACT_SUBMIT_ID}\">{SUBMIT_BUTTON_LABEL}</button>\n"
    ));
    out.push_str(&format!(
        "<p id=\"{FORM_STATUS_ID}\" class=\"form-status\" role=\"status\" aria-live=\"polite\"></p>\n"
    ));
    out.push_str("</form>\n");
    out.push_str("</div>\n");
}
