//! Fields that bypass lane reassignment.
//!
//! Which fields are carried over verbatim and which never feed the timeline
//! is decided once, up front, from [`ConvertOptions`]. The resulting
//! [`KeepPlan`] and [`ExclusionSet`] are read-only afterwards.

use std::collections::HashSet;

use serde::Serialize;
use tracing::debug;

use crate::chart::ChartDocument;
use crate::config::ConvertOptions;

/// Base names that never carry note timings.
pub const ALWAYS_IGNORED: [&str; 9] = [
    "speed",
    "boost",
    "acolor",
    "color",
    "word",
    "back",
    "mask",
    "arrowMotion",
    "frzMotion",
];

/// Prefixes of sustain lanes; their pairs are not onsets.
const FREEZE_PREFIXES: [&str; 2] = ["frz", "sfrz"];

const DIRECTIONS: [&str; 4] = ["left", "down", "up", "right"];
const FREEZE_DIRECTIONS: [&str; 4] = ["frzLeft", "frzDown", "frzUp", "frzRight"];

/// A field copied from the input chart to the output chart unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeptField {
    /// Base name read from the input slot.
    pub source: String,
    /// Base name written to the output slot.
    pub target: String,
}

impl KeptField {
    fn same(name: &str) -> Self {
        Self {
            source: name.to_string(),
            target: name.to_string(),
        }
    }
}

/// Ordered list of passthrough fields, in output order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeepPlan {
    fields: Vec<KeptField>,
}

impl KeepPlan {
    pub fn resolve(options: &ConvertOptions) -> Self {
        let mut fields = Vec::new();

        if options.keep_4key {
            // The alternate left-hand layout is read from the `s` lanes but
            // written back as the plain four directions.
            let prefix = if options.use_sleft { "s" } else { "" };
            for name in DIRECTIONS.iter().chain(FREEZE_DIRECTIONS.iter()) {
                fields.push(KeptField {
                    source: format!("{}{}", prefix, name),
                    target: name.to_string(),
                });
            }
        }

        if options.keep_onigiri {
            fields.push(KeptField::same("space"));
            fields.push(KeptField::same("frzSpace"));
        }

        fields.push(KeptField::same("speed"));
        fields.push(KeptField::same("boost"));

        Self { fields }
    }

    pub fn fields(&self) -> &[KeptField] {
        &self.fields
    }

    pub fn sources(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.source.as_str())
    }
}

/// Base names excluded from timeline extraction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionSet {
    names: HashSet<String>,
}

impl ExclusionSet {
    pub fn resolve(options: &ConvertOptions, plan: &KeepPlan) -> Self {
        let names: HashSet<String> = ALWAYS_IGNORED
            .iter()
            .map(|s| s.to_string())
            .chain(options.extra_ignored.iter().cloned())
            .chain(plan.sources().map(str::to_string))
            .collect();
        debug!("Excluding {} field names from the timeline", names.len());
        Self { names }
    }

    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn excludes(&self, base: &str) -> bool {
        self.names.contains(base) || FREEZE_PREFIXES.iter().any(|p| base.starts_with(p))
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Raw values captured for every kept field, keyed by output base name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct KeepData {
    entries: Vec<(String, String)>,
}

impl KeepData {
    /// Look up every kept field in `doc`. Missing fields keep an empty value.
    pub fn capture(doc: &ChartDocument, plan: &KeepPlan) -> Self {
        let entries = plan
            .fields()
            .iter()
            .map(|kept| {
                let raw = doc
                    .find(&kept.source)
                    .and_then(|field| field.raw_value())
                    .unwrap_or_default();
                (kept.target.clone(), raw.to_string())
            })
            .collect();
        Self { entries }
    }

    pub fn get(&self, target: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(name, _)| name == target)
            .map(|(_, raw)| raw.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn targets(plan: &KeepPlan) -> Vec<&str> {
        plan.fields().iter().map(|f| f.target.as_str()).collect()
    }

    #[test]
    fn test_plan_always_keeps_speed_and_boost() {
        let plan = KeepPlan::resolve(&ConvertOptions::default());
        assert_eq!(targets(&plan), vec!["speed", "boost"]);
    }

    #[test]
    fn test_plan_with_all_options() {
        let options = ConvertOptions {
            keep_onigiri: true,
            keep_4key: true,
            ..Default::default()
        };
        let plan = KeepPlan::resolve(&options);
        assert_eq!(
            targets(&plan),
            vec![
                "left", "down", "up", "right", "frzLeft", "frzDown", "frzUp", "frzRight",
                "space", "frzSpace", "speed", "boost"
            ]
        );
        assert!(plan.fields().iter().all(|f| f.source == f.target));
    }

    #[test]
    fn test_plan_sleft_reads_alternate_lanes() {
        let options = ConvertOptions {
            keep_4key: true,
            use_sleft: true,
            ..Default::default()
        };
        let plan = KeepPlan::resolve(&options);
        assert_eq!(plan.fields()[0].source, "sleft");
        assert_eq!(plan.fields()[0].target, "left");
        assert_eq!(plan.fields()[4].source, "sfrzLeft");
        assert_eq!(plan.fields()[4].target, "frzLeft");
    }

    #[test]
    fn test_exclusion_set() {
        let options = ConvertOptions {
            keep_onigiri: true,
            extra_ignored: vec!["shadowColor".to_string()],
            ..Default::default()
        };
        let plan = KeepPlan::resolve(&options);
        let exclusion = ExclusionSet::resolve(&options, &plan);

        assert!(exclusion.excludes("speed"));
        assert!(exclusion.excludes("arrowMotion"));
        assert!(exclusion.excludes("space"));
        assert!(exclusion.excludes("shadowColor"));
        assert!(exclusion.excludes("frzLeft"));
        assert!(exclusion.excludes("sfrzLeft"));
        assert!(!exclusion.excludes("left"));
        assert!(!exclusion.excludes("sup"));
    }

    #[test]
    fn test_capture_keep_data() {
        let doc = ChartDocument::parse("|space_data=100,200|speed_data=0,1|frzSpace_data=|");
        let options = ConvertOptions {
            keep_onigiri: true,
            ..Default::default()
        };
        let keep = KeepData::capture(&doc, &KeepPlan::resolve(&options));

        assert_eq!(keep.get("space"), Some("100,200"));
        assert_eq!(keep.get("frzSpace"), Some(""));
        assert_eq!(keep.get("speed"), Some("0,1"));
        assert_eq!(keep.get("boost"), Some(""));
        assert_eq!(keep.get("left"), None);
    }
}
