//! The built-in profile shipped with the binary.
//!
//! Content lives here as plain Rust data so the compiler checks its shape
//! and the renderer, tracker, and bundle all read from one place. An
//! external profile JSON, when configured, replaces this wholesale.

use crate::domain::career::{CareerStage, EducationEntry, Metric};
use crate::domain::profile::{
    About, ContactDetails, Expertise, Fact, Hero, PageMeta, Profile, SocialLink, Stat,
};
use crate::domain::project::Project;
use crate::domain::skill::{Skill, SkillCategory};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn skill(name: &str, level: u8) -> Skill {
    Skill {
        name: name.to_string(),
        level,
    }
}

fn stat(value: &str, label: &str) -> Stat {
    Stat {
        value: value.to_string(),
        label: label.to_string(),
    }
}

fn fact(label: &str, value: &str) -> Fact {
    Fact {
        label: label.to_string(),
        value: value.to_string(),
    }
}

fn expertise(title: &str, description: &str) -> Expertise {
    Expertise {
        title: title.to_string(),
        description: description.to_string(),
    }
}

fn metric(value: &str, description: &str) -> Metric {
    Metric {
        value: value.to_string(),
        description: description.to_string(),
    }
}

/// The default profile rendered when no external profile file is configured.
pub fn builtin_profile() -> Profile {
    Profile {
        meta: PageMeta {
            title: "Ananya Deshmukh | Frontend Engineer".to_string(),
            description: "Portfolio of Ananya Deshmukh, a frontend engineer building fast, \
                          accessible web applications with React, Next.js, and TypeScript."
                .to_string(),
            language: "en".to_string(),
        },
        hero: Hero {
            name: "Ananya Deshmukh".to_string(),
            headline: "Frontend Engineer".to_string(),
            summary: "I design and build fast, accessible interfaces for the web. Over the \
                      last six years I have shipped design systems, dashboards, and \
                      customer-facing products used by millions of people."
                .to_string(),
            availability: Some("Available for hire".to_string()),
            stats: vec![
                stat("6+", "Years of Experience"),
                stat("24+", "Projects Delivered"),
                stat("12+", "Happy Clients"),
                stat("5", "Design Systems Shipped"),
            ],
            tech_chips: strings(&[
                "React",
                "Next.js",
                "TypeScript",
                "JavaScript",
                "Tailwind CSS",
                "Node.js",
                "GraphQL",
                "Redux",
                "Vitest",
                "Playwright",
                "Figma",
                "Vercel",
            ]),
        },
        about: About {
            paragraphs: strings(&[
                "I am a frontend engineer based in Pune, India, with a soft spot for \
                 interfaces that feel instant. My work sits at the intersection of design \
                 and engineering: translating product ideas into component systems that \
                 whole teams can build on.",
                "Outside of client work I maintain a handful of small open-source \
                 libraries, write about web performance, and mentor early-career \
                 developers through a local meetup group.",
            ]),
            facts: vec![
                fact("Age", "29"),
                fact("Location", "Pune, India"),
                fact("Email", "hello@ananyadeshmukh.dev"),
                fact("Phone", "+91 98222 40117"),
            ],
            expertise: vec![
                expertise(
                    "Responsive Design",
                    "Layouts that hold up from a phone in one hand to an ultrawide monitor.",
                ),
                expertise(
                    "Performance",
                    "Budgets, profiling, and the discipline to keep bundles small.",
                ),
                expertise(
                    "Design Systems",
                    "Token-driven component libraries that survive a rebrand.",
                ),
                expertise(
                    "Accessibility",
                    "Semantic markup and keyboard-first flows, tested with real screen readers.",
                ),
                expertise(
                    "API Integration",
                    "Typed clients over REST and GraphQL with caching that stays honest.",
                ),
                expertise(
                    "Developer Tooling",
                    "Build pipelines and lint rules that make the right thing the easy thing.",
                ),
            ],
        },
        skills: vec![
            SkillCategory::new(
                "Frontend",
                vec![
                    skill("React", 95),
                    skill("Next.js", 90),
                    skill("TypeScript", 88),
                    skill("JavaScript", 92),
                    skill("HTML & CSS", 96),
                ],
            ),
            SkillCategory::new(
                "Styling & Design",
                vec![
                    skill("Tailwind CSS", 94),
                    skill("Sass", 85),
                    skill("Styled Components", 80),
                    skill("Figma", 78),
                ],
            ),
            SkillCategory::new(
                "Tooling & Testing",
                vec![
                    skill("Vite", 86),
                    skill("Webpack", 75),
                    skill("Vitest", 84),
                    skill("Playwright", 80),
                ],
            ),
            SkillCategory::new(
                "Backend & Platform",
                vec![
                    skill("Node.js", 82),
                    skill("GraphQL", 78),
                    skill("PostgreSQL", 70),
                    skill("AWS", 65),
                ],
            ),
        ],
        extra_skills: strings(&[
            "REST APIs",
            "CI/CD",
            "Git",
            "Docker",
            "Storybook",
            "Web Vitals",
            "i18n",
            "Agile Delivery",
        ]),
        projects: vec![
            Project {
                title: "Meridian UI".to_string(),
                description: "An open-source component library with 40+ accessible React \
                              components, theming via design tokens, and full keyboard \
                              support."
                    .to_string(),
                tags: strings(&["React", "TypeScript", "Storybook", "Tailwind CSS"]),
                demo_url: Some("https://meridian-ui.dev".to_string()),
                period: "2024".to_string(),
                team_size: "Solo project".to_string(),
            },
            Project {
                title: "Cartwheel Commerce".to_string(),
                description: "Storefront platform for regional retailers: server-rendered \
                              product pages, edge caching, and a checkout that converts on \
                              slow connections."
                    .to_string(),
                tags: strings(&["Next.js", "GraphQL", "Stripe", "Vercel"]),
                demo_url: Some("https://demo.cartwheel.shop".to_string()),
                period: "2023 - 2024".to_string(),
                team_size: "Team of 4".to_string(),
            },
            Project {
                title: "Pulseboard".to_string(),
                description: "Realtime operations dashboard streaming device telemetry over \
                              WebSockets, with virtualized tables handling 50k rows without \
                              dropping frames."
                    .to_string(),
                tags: strings(&["React", "WebSockets", "Redux", "D3"]),
                demo_url: None,
                period: "2023".to_string(),
                team_size: "Team of 3".to_string(),
            },
            Project {
                title: "Fieldnotes".to_string(),
                description: "Offline-first note taking app for field researchers, syncing \
                              through CRDTs when connectivity returns."
                    .to_string(),
                tags: strings(&["TypeScript", "IndexedDB", "Service Workers"]),
                demo_url: Some("https://fieldnotes.app".to_string()),
                period: "2022 - 2023".to_string(),
                team_size: "Team of 2".to_string(),
            },
            Project {
                title: "Lumen Docs".to_string(),
                description: "Documentation generator that turns annotated TypeScript into \
                              versioned, searchable reference sites."
                    .to_string(),
                tags: strings(&["Node.js", "TypeScript", "Algolia"]),
                demo_url: None,
                period: "2022".to_string(),
                team_size: "Solo project".to_string(),
            },
            Project {
                title: "Transit Lens".to_string(),
                description: "Live public-transport map for Pune with arrival predictions, \
                              built as a PWA that works on entry-level Android phones."
                    .to_string(),
                tags: strings(&["React", "Mapbox", "PWA", "Node.js"]),
                demo_url: Some("https://transitlens.in".to_string()),
                period: "2021".to_string(),
                team_size: "Team of 5".to_string(),
            },
        ],
        career: vec![
            CareerStage {
                role: "Senior Frontend Engineer".to_string(),
                company: "Northwind Labs".to_string(),
                period: "2023 - Present".to_string(),
                technologies: strings(&["Next.js", "TypeScript", "GraphQL", "Tailwind CSS"]),
                achievements: strings(&[
                    "Led the migration of the customer portal to the app router with zero \
                     downtime",
                    "Introduced a performance budget enforced in CI",
                ]),
                metrics: vec![
                    metric("40%", "faster median page load"),
                    metric("99.95%", "frontend uptime across the year"),
                ],
                responsibilities: strings(&[
                    "Own the web platform architecture and its release train",
                    "Mentor four engineers across two product squads",
                ]),
            },
            CareerStage {
                role: "Frontend Engineer".to_string(),
                company: "Saffron Systems".to_string(),
                period: "2021 - 2023".to_string(),
                technologies: strings(&["React", "Redux", "Sass", "Jest"]),
                achievements: strings(&[
                    "Built the shared component library adopted by three product teams",
                    "Cut the main bundle from 1.4 MB to 420 kB",
                ]),
                metrics: vec![metric("70%", "reduction in duplicated UI code")],
                responsibilities: strings(&[
                    "Deliver features across the billing and onboarding flows",
                    "Review frontend pull requests for the platform team",
                ]),
            },
            CareerStage {
                role: "UI Developer".to_string(),
                company: "Brightpath Digital".to_string(),
                period: "2019 - 2021".to_string(),
                technologies: strings(&["JavaScript", "Vue", "Webpack", "Figma"]),
                achievements: strings(&[
                    "Shipped marketing sites for twelve client brands",
                    "Standardised the agency build pipeline around a single toolchain",
                ]),
                metrics: vec![],
                responsibilities: strings(&[
                    "Turn design handoffs into pixel-accurate pages",
                    "Keep Lighthouse scores above 90 on every launch",
                ]),
            },
            CareerStage {
                role: "Junior Web Developer".to_string(),
                company: "Deccan Creative".to_string(),
                period: "2018 - 2019".to_string(),
                technologies: strings(&["HTML", "CSS", "JavaScript", "WordPress"]),
                achievements: strings(&[
                    "Rebuilt the studio's template catalogue with semantic markup",
                ]),
                metrics: vec![],
                responsibilities: strings(&[
                    "Maintain client sites and triage support tickets",
                ]),
            },
        ],
        education: vec![EducationEntry {
            degree: "B.E. in Computer Engineering".to_string(),
            institution: "Savitribai Phule Pune University".to_string(),
            location: "Pune, India".to_string(),
            period: "2014 - 2018".to_string(),
            grade: Some("First Class with Distinction".to_string()),
            note: Some(
                "Final-year project: a realtime collaborative whiteboard over WebRTC."
                    .to_string(),
            ),
        }],
        contact: ContactDetails {
            email: "hello@ananyadeshmukh.dev".to_string(),
            phone: "+91 98222 40117".to_string(),
            location: "Pune, Maharashtra, India".to_string(),
            socials: vec![
                SocialLink {
                    label: "GitHub".to_string(),
                    url: "https://github.com/ananya-deshmukh".to_string(),
                },
                SocialLink {
                    label: "LinkedIn".to_string(),
                    url: "https://www.linkedin.com/in/ananya-deshmukh".to_string(),
                },
                SocialLink {
                    label: "Twitter".to_string(),
                    url: "https://twitter.com/ananyabuilds".to_string(),
                },
            ],
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_profile_matches_expected_scale() {
        let profile = builtin_profile();
        assert_eq!(profile.hero.stats.len(), 4);
        assert_eq!(profile.hero.tech_chips.len(), 12);
        assert_eq!(profile.about.expertise.len(), 6);
        assert_eq!(profile.skills.len(), 4);
        assert_eq!(profile.extra_skills.len(), 8);
        assert_eq!(profile.projects.len(), 6);
        assert_eq!(profile.career.len(), 4);
        assert_eq!(profile.education.len(), 1);
    }

    #[test]
    fn test_builtin_levels_within_bounds() {
        for category in builtin_profile().skills {
            for skill in category.items {
                assert!(skill.level <= 100, "{} out of range", skill.name);
            }
        }
    }

    #[test]
    fn test_some_projects_have_no_demo() {
        let profile = builtin_profile();
        assert!(profile.projects.iter().any(|p| p.demo_url.is_none()));
        assert!(profile.projects.iter().any(|p| p.demo_url.is_some()));
    }
}
