//! The generated page script.
//!
//! The browser-side behavior is emitted from the same constants the
//! native modules use: section order from [`Section::ALL`], the probe
//! offset and header height from [`crate::nav`], and the submit delay
//! from [`crate::contact::simulated`]. Tests against the Rust tracker
//! and form session therefore pin exactly what this script does.

use crate::contact::simulated::SUBMIT_LATENCY_MS;
use crate::domain::Section;
use crate::nav::{HEADER_OFFSET_PX, SCROLL_LOOKAHEAD_PX};

use super::html::escape_js_single_quoted;
use super::{CONTACT_FORM_ID, CONTACT_SUBMIT_ID, FORM_STATUS_ID, NAV_MENU_ID, NAV_TOGGLE_ID};

/// Label on the submit button while the form is editable.
pub const SUBMIT_BUTTON_LABEL: &str = "Send Message";
/// Label on the submit button while a submission is in flight.
pub const SUBMIT_PENDING_LABEL: &str = "Sending...";
/// Banner shown once the simulated gateway acknowledges.
pub const SUBMIT_SUCCESS_MESSAGE: &str = "Thanks for reaching out! I'll get back to you soon.";

/// Render the page script.
pub fn render_script() -> String {
    let section_ids = Section::ALL
        .iter()
        .map(|s| format!("'{}'", s.id()))
        .collect::<Vec<_>>()
        .join(", ");

    let mut out = String::new();
    out.push_str("'use strict';\n");
    out.push_str("(function () {\n");
    out.push_str("  document.documentElement.classList.add('js');\n");
    out.push_str("\n");
    out.push_str(&format!("  var SECTION_IDS = [{section_ids}];\n"));
    out.push_str(&format!(
        "  var SCROLL_LOOKAHEAD = {};\n",
        SCROLL_LOOKAHEAD_PX as i64
    ));
    out.push_str(&format!(
        "  var HEADER_OFFSET = {};\n",
        HEADER_OFFSET_PX as i64
    ));
    out.push_str(&format!("  var SUBMIT_DELAY_MS = {SUBMIT_LATENCY_MS};\n"));
    out.push_str("\n");
    out.push_str("  var navLinks = document.querySelectorAll('.nav-links a[data-section]');\n");
    out.push_str("  var current = 'home';\n");
    out.push_str("\n");
    out.push_str("  function activeSection(scrollY) {\n");
    out.push_str("    var probe = scrollY + SCROLL_LOOKAHEAD;\n");
    out.push_str("    for (var i = 0; i < SECTION_IDS.length; i++) {\n");
    out.push_str("      var el = document.getElementById(SECTION_IDS[i]);\n");
    out.push_str("      if (!el) { continue; }\n");
    out.push_str("      if (probe >= el.offsetTop && probe < el.offsetTop + el.offsetHeight) {\n");
    out.push_str("        return SECTION_IDS[i];\n");
    out.push_str("      }\n");
    out.push_str("    }\n");
    out.push_str("    return null;\n");
    out.push_str("  }\n");
    out.push_str("\n");
    out.push_str("  function highlight(id) {\n");
    out.push_str("    for (var i = 0; i < navLinks.length; i++) {\n");
    out.push_str("      if (navLinks[i].getAttribute('data-section') === id) {\n");
    out.push_str("        navLinks[i].classList.add('active');\n");
    out.push_str("      } else {\n");
    out.push_str("        navLinks[i].classList.remove('active');\n");
    out.push_str("      }\n");
    out.push_str("    }\n");
    out.push_str("  }\n");
    out.push_str("\n");
    out.push_str("  window.addEventListener('scroll', function () {\n");
    out.push_str("    var next = activeSection(window.scrollY);\n");
    out.push_str("    if (next !== null && next !== current) {\n");
    out.push_str("      current = next;\n");
    out.push_str("      highlight(current);\n");
    out.push_str("    }\n");
    out.push_str("  });\n");
    out.push_str("  highlight(current);\n");
    out.push_str("\n");
    out.push_str("  for (var i = 0; i < navLinks.length; i++) {\n");
    out.push_str("    navLinks[i].addEventListener('click', function (event) {\n");
    out.push_str("      var id = event.currentTarget.getAttribute('data-section');\n");
    out.push_str("      var el = document.getElementById(id);\n");
    out.push_str("      if (!el) { return; }\n");
    out.push_str("      event.preventDefault();\n");
    out.push_str("      var target = el.offsetTop - HEADER_OFFSET;\n");
    out.push_str("      window.scrollTo({ top: target < 0 ? 0 : target, behavior: 'smooth' });\n");
    out.push_str("    });\n");
    out.push_str("  }\n");
    out.push_str("\n");
    out.push_str(&format!(
        "  var navToggle = document.getElementById('{NAV_TOGGLE_ID}');\n"
    ));
    out.push_str(&format!(
        "  var navMenu = document.getElementById('{NAV_MENU_ID}');\n"
    ));
    out.push_str("  if (navToggle && navMenu) {\n");
    out.push_str("    navToggle.addEventListener('click', function () {\n");
    out.push_str("      var open = navMenu.classList.toggle('open');\n");
    out.push_str("      navToggle.setAttribute('aria-expanded', open ? 'true' : 'false');\n");
    out.push_str("    });\n");
    out.push_str("    for (var j = 0; j < navLinks.length; j++) {\n");
    out.push_str("      navLinks[j].addEventListener('click', function () {\n");
    out.push_str("        navMenu.classList.remove('open');\n");
    out.push_str("        navToggle.setAttribute('aria-expanded', 'false');\n");
    out.push_str("      });\n");
    out.push_str("    }\n");
    out.push_str("  }\n");
    out.push_str("\n");
    out.push_str("  if ('IntersectionObserver' in window) {\n");
    out.push_str("    var observer = new IntersectionObserver(function (entries) {\n");
    out.push_str("      for (var k = 0; k < entries.length; k++) {\n");
    out.push_str("        if (entries[k].isIntersecting) {\n");
    out.push_str("          entries[k].target.classList.add('visible');\n");
    out.push_str("          observer.unobserve(entries[k].target);\n");
    out.push_str("        }\n");
    out.push_str("      }\n");
    out.push_str("    }, { threshold: 0.1 });\n");
    out.push_str("    var revealed = document.querySelectorAll('.reveal');\n");
    out.push_str("    for (var m = 0; m < revealed.length; m++) {\n");
    out.push_str("      observer.observe(revealed[m]);\n");
    out.push_str("    }\n");
    out.push_str("  }\n");
    out.push_str("\n");
    out.push_str(&format!(
        "  var form = document.getElementById('{CONTACT_FORM_ID}');\n"
    ));
    out.push_str(&format!(
        "  var submitButton = document.getElementById('{CONTACT_SUBMIT_ID}');\n"
    ));
    out.push_str(&format!(
        "  var formStatus = document.getElementById('{FORM_STATUS_ID}');\n"
    ));
    out.push_str("  if (form && submitButton && formStatus) {\n");
    out.push_str("    form.addEventListener('submit', function (event) {\n");
    out.push_str("      event.preventDefault();\n");
    out.push_str("      if (!form.reportValidity()) { return; }\n");
    out.push_str("      submitButton.disabled = true;\n");
    out.push_str(&format!(
        "      submitButton.textContent = '{}';\n",
        escape_js_single_quoted(SUBMIT_PENDING_LABEL)
    ));
    out.push_str("      formStatus.textContent = '';\n");
    out.push_str("      window.setTimeout(function () {\n");
    out.push_str("        submitButton.disabled = false;\n");
    out.push_str(&format!(
        "        submitButton.textContent = '{}';\n",
        escape_js_single_quoted(SUBMIT_BUTTON_LABEL)
    ));
    out.push_str(&format!(
        "        formStatus.textContent = '{}';\n",
        escape_js_single_quoted(SUBMIT_SUCCESS_MESSAGE)
    ));
    out.push_str("        form.reset();\n");
    out.push_str("      }, SUBMIT_DELAY_MS);\n");
    out.push_str("    });\n");
    out.push_str("  }\n");
    out.push_str("})();\n");
    out
}
