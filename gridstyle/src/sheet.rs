use log::trace;

use crate::selector::{MediaCondition, Selector, Target};
use crate::types::StyleBlock;

/// One or more selectors sharing a declaration block, optionally behind a media condition.
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    pub selectors: Vec<Selector>,
    pub media: Option<MediaCondition>,
    pub block: StyleBlock,
}

impl Rule {
    pub fn new(selector: Selector, block: StyleBlock) -> Self {
        Self {
            selectors: vec![selector],
            media: None,
            block,
        }
    }

    /// Highest specificity among selectors matching the element, if any match.
    fn match_specificity(&self, target: Target, hovered: bool, viewport_width: u16) -> Option<u8> {
        if self.media.is_some_and(|m| !m.matches(viewport_width)) {
            return None;
        }
        self.selectors
            .iter()
            .filter(|s| s.matches(target, hovered))
            .map(Selector::specificity)
            .max()
    }
}

/// An ordered list of rules.
///
/// Resolution follows the usual cascade: matching rules are applied in
/// ascending specificity, ties broken by declaration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleSheet {
    rules: Vec<Rule>,
}

impl StyleSheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rule(mut self, selector: Selector, block: StyleBlock) -> Self {
        self.rules.push(Rule::new(selector, block));
        self
    }

    pub fn media_rule(
        mut self,
        media: MediaCondition,
        selectors: impl IntoIterator<Item = Selector>,
        block: StyleBlock,
    ) -> Self {
        self.rules.push(Rule {
            selectors: selectors.into_iter().collect(),
            media: Some(media),
            block,
        });
        self
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// First rule declared for exactly this selector outside any media condition.
    pub fn block_for(&self, selector: Selector) -> Option<&StyleBlock> {
        self.rules
            .iter()
            .find(|r| r.media.is_none() && r.selectors.contains(&selector))
            .map(|r| &r.block)
    }

    /// Compute the style of an element.
    pub fn resolve(&self, target: Target, hovered: bool, viewport_width: u16) -> StyleBlock {
        let mut matching: Vec<(u8, usize)> = self
            .rules
            .iter()
            .enumerate()
            .filter_map(|(idx, rule)| {
                rule.match_specificity(target, hovered, viewport_width)
                    .map(|specificity| (specificity, idx))
            })
            .collect();
        matching.sort();

        let mut resolved = StyleBlock::new();
        for (_, idx) in &matching {
            resolved.merge(&self.rules[*idx].block);
        }

        trace!(
            "resolved {:?} (hovered={}, viewport={}) from {} rules",
            target,
            hovered,
            viewport_width,
            matching.len()
        );
        resolved
    }

    pub fn to_css(&self) -> String {
        let mut out = String::new();
        for rule in &self.rules {
            let selectors = rule
                .selectors
                .iter()
                .map(Selector::to_css)
                .collect::<Vec<_>>()
                .join(", ");
            let body = indent(&rule.block.to_css(), "  ");
            match rule.media {
                Some(media) => {
                    out.push_str(&format!(
                        "{} {{\n  {} {{\n{}\n  }}\n}}\n",
                        media.to_css(),
                        selectors,
                        indent(&body, "  ")
                    ));
                }
                None => out.push_str(&format!("{selectors} {{\n{body}\n}}\n")),
            }
        }
        out
    }
}

fn indent(text: &str, prefix: &str) -> String {
    text.lines()
        .map(|line| format!("{prefix}{line}"))
        .collect::<Vec<_>>()
        .join("\n")
}
