//! The document shell: head, fixed header, section column, footer.

use crate::domain::{Profile, Section};

use super::html::escape_html;
use super::sections::render_section;
use super::{RenderContext, NAV_MENU_ID, NAV_TOGGLE_ID, SCRIPT_FILE, STYLESHEET_FILE};

/// Render the complete page document.
///
/// Output is a pure function of the profile and context: rendering the
/// same inputs twice yields identical bytes.
pub fn render_page(profile: &Profile, ctx: &RenderContext) -> String {
    let mut out = String::new();

    out.push_str("<!doctype html>\n");
    out.push_str(&format!(
        "<html lang=\"{}\">\n",
        escape_html(&profile.meta.language)
    ));
    out.push_str("<head>\n");
    out.push_str("<meta charset=\"utf-8\">\n");
    out.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    out.push_str(&format!(
        "<meta name=\"description\" content=\"{}\">\n",
        escape_html(&profile.meta.description)
    ));
    out.push_str(&format!(
        "<meta name=\"generator\" content=\"vitrine {}\">\n",
        crate::VERSION
    ));
    out.push_str(&format!("<title>{}</title>\n", escape_html(&profile.meta.title)));
    out.push_str(&format!(
        "<link rel=\"stylesheet\" href=\"{}{STYLESHEET_FILE}\">\n",
        ctx.asset_prefix
    ));
    out.push_str("</head>\n");
    out.push_str("<body>\n");

    out.push_str("<header class=\"site-header\">\n");
    out.push_str("<nav class=\"nav\" aria-label=\"Primary\">\n");
    out.push_str(&format!(
        "<a class=\"brand\" href=\"#home\">{}</a>\n",
        escape_html(&profile.hero.name)
    ));
    out.push_str(&format!(
        "<button id=\"{NAV_TOGGLE_ID}\" class=\"nav-toggle\" aria-expanded=\"false\" aria-controls=\"{NAV_MENU_ID}\">Menu</button>\n"
    ));
    out.push_str(&format!(
        "<ul id=\"{NAV_MENU_ID}\" class=\"nav-links\">\n"
    ));
    for section in Section::ALL {
        out.push_str(&format!(
            "<li><a href=\"#{id}\" data-section=\"{id}\">{label}</a></li>\n",
            id = section.id(),
            label = section.label()
        ));
    }
    out.push_str("</ul>\n");
    out.push_str("</nav>\n");
    out.push_str("</header>\n");

    out.push_str("<main>\n");
    for section in Section::ALL {
        render_section(&mut out, profile, ctx, section);
    }
    out.push_str("</main>\n");

    out.push_str("<footer class=\"site-footer\">\n");
    out.push_str(&format!(
        "<p>&copy; {} {}. All rights reserved.</p>\n",
        ctx.copyright_year,
        escape_html(&profile.hero.name)
    ));
    out.push_str("<a class=\"back-to-top\" href=\"#home\">Back to top</a>\n");
    out.push_str("</footer>\n");

    out.push_str(&format!(
        "<script src=\"{}{SCRIPT_FILE}\"></script>\n",
        ctx.asset_prefix
    ));
    out.push_str("</body>\n");
    out.push_str("</html>\n");

    out
}
