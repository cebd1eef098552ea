//! The color mapping rule table.
//!
//! A mode path `<mode>.<group>.<family>.<rest...>` is mapped by locating the
//! [`Family`] entry for its group and family and evaluating that family's
//! rules against the remaining segments. Key templates may contain `{step}`
//! (the captured step segment) and `{family}` (the family in PascalCase).

use crate::state::State;
use FamilyName::{Any, Exact, OneOf};
use Segment::{Literal as L, Step};

/// One pattern segment.
#[derive(Debug, Clone, Copy)]
pub enum Segment {
    /// Matches this exact segment.
    Literal(&'static str),
    /// Matches any listed segment and captures it as `{step}`.
    Step(&'static [&'static str]),
}

/// What a rule accepts after its pattern.
#[derive(Debug, Clone, Copy)]
pub enum Tail {
    /// Nothing, or one state segment from the listed set.
    States(&'static [State]),
    /// Nothing, or an explicit `Rest`; never a suffix.
    Stateless,
}

/// A single path pattern and the key template it produces.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    /// Segments following the family segment.
    pub pattern: &'static [Segment],
    /// Accepted trailing segments.
    pub tail: Tail,
    /// Key template.
    pub key: &'static str,
}

/// Which family segments a [`Family`] entry covers.
#[derive(Debug, Clone, Copy)]
pub enum FamilyName {
    /// Exactly this name.
    Exact(&'static str),
    /// Any listed name.
    OneOf(&'static [&'static str]),
    /// Any name at all.
    Any,
}

impl FamilyName {
    /// True when `family` is covered.
    pub fn matches(&self, family: &str) -> bool {
        match self {
            FamilyName::Exact(name) => *name == family,
            FamilyName::OneOf(names) => names.contains(&family),
            FamilyName::Any => true,
        }
    }
}

/// Rules for one (group, family) pair.
#[derive(Debug, Clone, Copy)]
pub struct Family {
    /// Group segment, the one right after the mode.
    pub group: &'static str,
    /// Covered family segments.
    pub name: FamilyName,
    /// Rules evaluated against the segments after the family.
    pub rules: &'static [Rule],
}

/// Outcome of evaluating one rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleMatch {
    /// The rule produced this key.
    Mapped(String),
    /// The pattern matched but the trailing segment is not a known state.
    UnknownState(String),
    /// The rule does not apply.
    NoMatch,
}

impl Rule {
    /// Evaluates the rule against the segments that follow the family.
    pub fn apply(&self, family_label: &str, rest: &[&str]) -> RuleMatch {
        if rest.len() < self.pattern.len() {
            return RuleMatch::NoMatch;
        }
        let mut step = None;
        for (segment, actual) in self.pattern.iter().zip(rest) {
            match segment {
                Segment::Literal(expected) if expected == actual => {}
                Segment::Step(steps) if steps.contains(actual) => step = Some(*actual),
                _ => return RuleMatch::NoMatch,
            }
        }
        let tail = &rest[self.pattern.len()..];
        let base = || self.render(family_label, step.unwrap_or_default());
        match self.tail {
            Tail::Stateless if tail.len() > 1 => RuleMatch::NoMatch,
            Tail::Stateless => match State::parse(tail.first().copied()) {
                Some(State::Rest) => RuleMatch::Mapped(base()),
                _ => RuleMatch::NoMatch,
            },
            Tail::States(_) if tail.len() > 1 => RuleMatch::NoMatch,
            Tail::States(accepted) => {
                let segment = tail.first().copied();
                match State::parse(segment) {
                    Some(state) if accepted.contains(&state) => {
                        RuleMatch::Mapped(format!("{}{}", base(), state.suffix()))
                    }
                    Some(_) => RuleMatch::NoMatch,
                    None => RuleMatch::UnknownState(segment.unwrap_or_default().to_string()),
                }
            }
        }
    }

    fn render(&self, family_label: &str, step: &str) -> String {
        self.key
            .replace("{step}", step)
            .replace("{family}", family_label)
    }
}

const ALL: Tail = Tail::States(State::ALL);
const NONE: Tail = Tail::Stateless;

const fn rule(pattern: &'static [Segment], tail: Tail, key: &'static str) -> Rule {
    Rule { pattern, tail, key }
}

const NEUTRAL_BACKGROUND: &[Rule] = &[
    rule(
        &[Step(&["1", "2", "3", "4", "5", "6", "7", "8"])],
        ALL,
        "colorNeutralBackground{step}",
    ),
    rule(&[L("Inverted"), L("Disabled")], ALL, "colorNeutralBackgroundInvertedDisabled"),
    rule(&[L("Inverted")], ALL, "colorNeutralBackgroundInverted"),
    rule(&[L("Static")], ALL, "colorNeutralBackgroundStatic"),
    rule(&[L("Alpha"), L("1")], ALL, "colorNeutralBackgroundAlpha"),
    rule(&[L("Alpha"), L("2")], ALL, "colorNeutralBackgroundAlpha2"),
    rule(&[L("Subtle"), L("Light alpha")], ALL, "colorSubtleBackgroundLightAlpha"),
    rule(&[L("Subtle"), L("Inverted")], ALL, "colorSubtleBackgroundInverted"),
    rule(&[L("Subtle")], ALL, "colorSubtleBackground"),
    rule(&[L("Transparent")], ALL, "colorTransparentBackground"),
    rule(&[L("Disabled")], ALL, "colorNeutralBackgroundDisabled"),
    rule(&[L("Stencil"), Step(&["1", "2"]), L("Alpha")], NONE, "colorNeutralStencil{step}Alpha"),
    rule(&[L("Stencil"), Step(&["1", "2"])], NONE, "colorNeutralStencil{step}"),
    rule(&[L("Overlay"), L("Scrollbar")], NONE, "colorScrollbarOverlay"),
    rule(&[L("Overlay")], NONE, "colorBackgroundOverlay"),
];

const NEUTRAL_FOREGROUND: &[Rule] = &[
    rule(&[Step(&["1", "2", "3", "4", "5"]), L("Brand")], ALL, "colorNeutralForeground{step}Brand"),
    rule(&[Step(&["1", "2", "3", "4", "5"]), L("Link")], ALL, "colorNeutralForeground{step}Link"),
    rule(&[Step(&["1", "2", "3", "4", "5"])], ALL, "colorNeutralForeground{step}"),
    rule(&[L("Disabled")], ALL, "colorNeutralForegroundDisabled"),
    rule(&[L("Static"), L("Inverted")], ALL, "colorNeutralForegroundStaticInverted"),
    rule(&[L("Static")], ALL, "colorNeutralForeground1Static"),
    rule(&[L("Inverted"), L("1")], ALL, "colorNeutralForegroundInverted"),
    rule(&[L("Inverted"), L("2")], ALL, "colorNeutralForegroundInverted2"),
    rule(&[L("Inverted"), L("Disabled")], ALL, "colorNeutralForegroundInvertedDisabled"),
    rule(&[L("Inverted"), L("Link")], ALL, "colorNeutralForegroundInvertedLink"),
    rule(&[L("On Brand")], ALL, "colorNeutralForegroundOnBrand"),
];

const NEUTRAL_STROKE: &[Rule] = &[
    rule(&[Step(&["1", "2", "3", "4"])], ALL, "colorNeutralStroke{step}"),
    rule(&[L("Accessible")], ALL, "colorNeutralStrokeAccessible"),
    rule(&[L("on Brand"), L("1")], ALL, "colorNeutralStrokeOnBrand"),
    rule(&[L("on Brand"), L("2")], ALL, "colorNeutralStrokeOnBrand2"),
    rule(&[L("Subtle")], ALL, "colorNeutralStrokeSubtle"),
    rule(&[L("Focus"), Step(&["1", "2"])], ALL, "colorStrokeFocus{step}"),
    rule(&[L("Transparent"), L("Interactive")], ALL, "colorTransparentStrokeInteractive"),
    rule(&[L("Transparent"), L("Disabled")], ALL, "colorTransparentStrokeDisabled"),
    rule(&[L("Transparent")], ALL, "colorTransparentStroke"),
    rule(&[L("Disabled"), L("Inverted")], ALL, "colorNeutralStrokeInvertedDisabled"),
    rule(&[L("Disabled")], ALL, "colorNeutralStrokeDisabled"),
    rule(&[L("Alpha"), L("1")], ALL, "colorNeutralStrokeAlpha"),
    rule(&[L("Alpha"), L("2")], ALL, "colorNeutralStrokeAlpha2"),
];

const BRAND_BACKGROUND: &[Rule] = &[
    rule(&[L("1")], ALL, "colorBrandBackground"),
    rule(&[L("2")], ALL, "colorBrandBackground2"),
    rule(&[L("Inverted")], ALL, "colorBrandBackgroundInverted"),
    rule(&[L("Compound")], ALL, "colorCompoundBrandBackground"),
    rule(&[L("Static"), L("1")], ALL, "colorBrandBackgroundStatic"),
    rule(&[L("Static"), L("3")], ALL, "colorBrandBackground3Static"),
    rule(&[L("Static"), L("4")], ALL, "colorBrandBackground4Static"),
];

const BRAND_FOREGROUND: &[Rule] = &[
    rule(&[Step(&["1", "2"])], ALL, "colorBrandForeground{step}"),
    rule(&[L("Link")], ALL, "colorBrandForegroundLink"),
    rule(&[L("Inverted")], ALL, "colorBrandForegroundInverted"),
    rule(&[L("On Light")], ALL, "colorBrandForegroundOnLight"),
    rule(&[L("Compound")], ALL, "colorCompoundBrandForeground1"),
];

const BRAND_STROKE: &[Rule] = &[
    rule(&[L("1")], ALL, "colorBrandStroke1"),
    rule(&[L("2"), L("Contrast")], ALL, "colorBrandStroke2Contrast"),
    rule(&[L("2")], ALL, "colorBrandStroke2"),
    rule(&[L("Compound")], ALL, "colorCompoundBrandStroke"),
];

const STATUS: &[Rule] = &[
    rule(
        &[L("Background"), Step(&["1", "2", "3"])],
        ALL,
        "colorStatus{family}Background{step}",
    ),
    rule(&[L("Foreground"), L("Inverted")], ALL, "colorStatus{family}ForegroundInverted"),
    rule(
        &[L("Foreground"), Step(&["1", "2"])],
        ALL,
        "colorStatus{family}Foreground{step}",
    ),
    rule(
        &[L("Foreground"), L("3")],
        Tail::States(&[State::Rest, State::Selected]),
        "colorStatus{family}Foreground3",
    ),
    rule(
        &[L("Foreground"), L("3")],
        Tail::States(&[State::Hover, State::Pressed]),
        "colorStatus{family}Background3",
    ),
    rule(&[L("Stroke"), Step(&["1", "2"])], ALL, "colorStatus{family}Border{step}"),
];

const PALETTE: &[Rule] = &[
    rule(
        &[L("Background"), Step(&["1", "2", "3"])],
        ALL,
        "colorPalette{family}Background{step}",
    ),
    rule(&[L("Foreground"), L("Inverted")], ALL, "colorPalette{family}ForegroundInverted"),
    rule(
        &[L("Foreground"), Step(&["1", "2", "3"])],
        ALL,
        "colorPalette{family}Foreground{step}",
    ),
    rule(&[L("Stroke"), L("Active")], ALL, "colorPalette{family}BorderActive"),
    rule(&[L("Stroke"), Step(&["1", "2"])], ALL, "colorPalette{family}Border{step}"),
];

const fn shadow(name: &'static str, rules: &'static [Rule]) -> Family {
    Family { group: "Shadow", name: Exact(name), rules }
}

/// Every known (group, family) entry. Entries never overlap.
pub const FAMILIES: &[Family] = &[
    Family { group: "Neutral", name: Exact("Background"), rules: NEUTRAL_BACKGROUND },
    Family { group: "Neutral", name: Exact("Foreground"), rules: NEUTRAL_FOREGROUND },
    Family { group: "Neutral", name: Exact("Stroke"), rules: NEUTRAL_STROKE },
    Family { group: "Brand", name: Exact("Background"), rules: BRAND_BACKGROUND },
    Family { group: "Brand", name: Exact("Foreground"), rules: BRAND_FOREGROUND },
    Family { group: "Brand", name: Exact("Stroke"), rules: BRAND_STROKE },
    Family { group: "Status", name: OneOf(&["Danger", "Success", "Warning"]), rules: STATUS },
    Family { group: "Palette", name: Any, rules: PALETTE },
    shadow("Ambient", &[rule(&[], NONE, "colorNeutralShadowAmbient")]),
    shadow("Ambient lighter", &[rule(&[], NONE, "colorNeutralShadowAmbientLighter")]),
    shadow("Ambient darker", &[rule(&[], NONE, "colorNeutralShadowAmbientDarker")]),
    shadow("Key", &[rule(&[], NONE, "colorNeutralShadowKey")]),
    shadow("Key lighter", &[rule(&[], NONE, "colorNeutralShadowKeyLighter")]),
    shadow("Key darker", &[rule(&[], NONE, "colorNeutralShadowKeyDarker")]),
    shadow("Brand ambient", &[rule(&[], NONE, "colorBrandShadowAmbient")]),
    shadow("Brand key", &[rule(&[], NONE, "colorBrandShadowKey")]),
];

/// True when any entry exists for `group`.
pub fn is_known_group(group: &str) -> bool {
    FAMILIES.iter().any(|family| family.group == group)
}

/// The entry covering `group` and `family`, if any.
pub fn family_for(group: &str, family: &str) -> Option<&'static Family> {
    FAMILIES
        .iter()
        .find(|entry| entry.group == group && entry.name.matches(family))
}
