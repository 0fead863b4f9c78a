use crate::dom::{Element, Node};
use std::cmp::Ordering;

pub const SKILLS_LIST_ID: &str = "skills-list";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skill {
    pub name: String,
    pub level: u8,
}

impl Skill {
    pub fn new(name: impl Into<String>, level: u8) -> Self {
        Self {
            name: name.into(),
            level: level.min(100),
        }
    }
}

/// The skills shown when none are configured.
pub fn default_skills() -> Vec<Skill> {
    vec![
        Skill::new("HTML", 80),
        Skill::new("CSS", 60),
        Skill::new("JavaScript", 60),
        Skill::new("Java", 70),
        Skill::new("C++", 65),
    ]
}

/// Highest level first; equal levels alphabetically, ignoring case.
///
/// Ties compare Unicode-lowercased names by code point, not by Turkish
/// collation, so names differing only in letters like `ç` or `ı` may order
/// differently than a Turkish-aware sort would.
pub fn sorted(skills: &[Skill]) -> Vec<Skill> {
    let mut sorted = skills.to_vec();
    sorted.sort_by(|a, b| match b.level.cmp(&a.level) {
        Ordering::Equal => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        other => other,
    });
    sorted
}

pub fn skill_element(skill: &Skill) -> Element {
    Element::new("div")
        .class("skill fade-in")
        .attr("role", "group")
        .attr("tabindex", "0")
        .attr("aria-label", format!("{}: {}%", skill.name, skill.level))
        .attr("data-level", skill.level.to_string())
        .child(Element::new("div").class("name").text(skill.name.clone()))
        .child(
            Element::new("div")
                .class("level")
                .attr("aria-hidden", "true")
                .child(Element::new("i").attr("style", format!("width:{}%", skill.level))),
        )
        .child(
            Element::new("span")
                .class("percent")
                .attr("aria-hidden", "true")
                .text(format!("{}%", skill.level)),
        )
}

pub fn render_skills(skills: &[Skill]) -> Element {
    Element::new("div")
        .id(SKILLS_LIST_ID)
        .class("skills")
        .children_from(sorted(skills).iter().map(|s| Node::from(skill_element(s))))
}
