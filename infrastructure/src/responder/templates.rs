//! Per-domain response template families.
//!
//! Placeholders: `{name}`, `{expertise}`, `{tone}`, `{focus}` (joined
//! specialization keywords), `{question}`.

use panel_domain::{Domain, PersonaConfig};

/// Template variants for a domain, selectable by index
pub fn variants(domain: Domain) -> &'static [&'static str] {
    match domain {
        Domain::Clinical => &[
            "Speaking as {name} ({expertise}), I would treat \"{question}\" as a question of \
             evidence first. My recommendation is to define measurable endpoints, check the \
             safety profile, and only then scale. Staying {tone} here, the data on {focus} \
             should drive every next step.",
            "{name} here. From my work in {expertise}, the key consideration behind \
             \"{question}\" is patient safety. It is essential to review the protocol, the \
             dosage rationale, and the regulatory pathway before committing. My focus on \
             {focus} keeps me {tone} about this.",
            "In my experience with {expertise}, \"{question}\" needs a staged answer: pilot, \
             measure, expand. {name} would recommend a small controlled cohort to surface \
             adverse signals early. Keeping the analysis {tone}, {focus} is where the real \
             risk hides.",
        ],
        Domain::Education => &[
            "As {name}, my background in {expertise} makes me read \"{question}\" as a \
             learning-design problem. It is important to meet people where they are: start \
             with fundamentals, sequence the material, and assess often. An approach grounded \
             in {focus} works best when it stays {tone}.",
            "{name} responding. \"{question}\" is really about knowledge transfer. I recommend \
             building a curriculum outline before any content, then piloting it with a small \
             group of learners. My emphasis on {focus} keeps the plan {tone} rather than \
             abstract.",
            "From the {expertise} side, the critical move for \"{question}\" is scaffolding: \
             each step should prepare the next one. {name} would sketch the learner journey \
             end to end, anchored in {focus}, and keep the delivery {tone}.",
        ],
        Domain::Remedies => &[
            "Warm greetings from {name}. Through the lens of {expertise}, \"{question}\" calls \
             for gentle, whole-person thinking. I recommend starting with the simplest natural \
             option, observing the response, and adjusting gradually. A {tone} practice rooted \
             in {focus} honors both tradition and evidence.",
            "{name} here, drawing on {expertise}. For \"{question}\", the essential first step \
             is understanding the underlying pattern, not just the symptom. A combination of \
             rest, nutrition, and well-chosen botanicals around {focus} tends to help; I stay \
             {tone} about pacing the change.",
            "As someone steeped in {expertise}, {name} would approach \"{question}\" \
             holistically: the remedy must fit the person. It is important to introduce one \
             change at a time and track how the body answers. My {tone} work with {focus} \
             informs that sequencing.",
        ],
        Domain::Product => &[
            "{name} speaking, with a background in {expertise}. Commercially, \"{question}\" \
             comes down to evidence of demand. My recommendation: validate with real \
             customers, price against the value delivered, and keep the launch scope narrow. \
             Staying {tone}, I would let {focus} set the priorities.",
            "From where {name} sits in {expertise}, the key question inside \"{question}\" is \
             positioning. You should identify the one segment that feels the pain most, win \
             it, then expand. Growth follows focus; my {tone} read of {focus} says resist \
             doing everything at once.",
            "As {name}, \"{question}\" reads like a sequencing problem: market first, product \
             second, scale third. It is critical to measure the cost of acquisition before \
             betting the roadmap. An approach anchored in {focus} keeps the plan {tone}.",
        ],
    }
}

/// Render a template against a persona and prompt
pub fn render(template: &str, persona: &PersonaConfig, question: &str) -> String {
    let focus = if persona.specializations.is_empty() {
        persona.expertise.clone()
    } else {
        persona.specializations.join(", ")
    };

    template
        .replace("{name}", &persona.name)
        .replace("{expertise}", &persona.expertise)
        .replace("{tone}", &persona.tone)
        .replace("{focus}", &focus)
        .replace("{question}", question)
}

#[cfg(test)]
mod tests {
    use super::*;
    use panel_domain::Advisor;

    #[test]
    fn test_every_domain_has_variants() {
        for domain in Domain::ALL {
            assert!(!variants(domain).is_empty());
        }
    }

    #[test]
    fn test_render_fills_placeholders() {
        let advisor = Advisor::new(
            "adv-1",
            "Maya",
            "herbal remedies",
            "bg",
            Domain::Remedies,
        );
        let persona = PersonaConfig::for_advisor(&advisor);
        let rendered = render(variants(Domain::Remedies)[0], &persona, "Can tea help sleep?");
        assert!(rendered.contains("Maya"));
        assert!(rendered.contains("Can tea help sleep?"));
        assert!(!rendered.contains('{'));
    }
}
